//! Goal template catalog
//!
//! Fixed goal templates plus the icons and colors offered for custom goals.

/// A ready-made goal the user can pick instead of typing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTemplate {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

const fn template(name: &'static str, icon: &'static str, color: &'static str) -> GoalTemplate {
    GoalTemplate { name, icon, color }
}

pub const GOAL_TEMPLATES: &[GoalTemplate] = &[
    template("New Vehicle", "car-outline", "#22d3ee"),
    template("New Home", "home-outline", "#fbbf24"),
    template("Holiday Trip", "airplane-outline", "#4ade80"),
    template("Education", "school-outline", "#38bdf8"),
    template("Emergency Fund", "shield-checkmark-outline", "#a78bfa"),
    template("Health Care", "medkit-outline", "#f87171"),
    template("Party", "wine-outline", "#fbbf24"),
    template("Kids Spoiling", "baby-outline", "#f472b6"),
    template("Charity", "gift-outline", "#67e8f9"),
    template("Wedding", "heart-outline", "#ff80ab"),
    template("Gadgets", "phone-portrait-outline", "#60a5fa"),
    template("Investment", "trending-up-outline", "#34d399"),
    template("Travel", "bus-outline", "#facc15"),
    template("Shopping", "cart-outline", "#f472b6"),
    template("Fitness", "barbell-outline", "#818cf8"),
    template("Pet Care", "paw-outline", "#fbbf24"),
    template("Birthday", "balloon-outline", "#38bdf8"),
    template("Other", "ellipsis-horizontal-circle-outline", "#a3a3a3"),
];

/// Icons offered in the custom goal dialog
pub const CUSTOM_ICONS: &[&str] = &[
    "car-outline",
    "home-outline",
    "airplane-outline",
    "school-outline",
    "heart-outline",
    "trophy-outline",
    "gift-outline",
    "paw-outline",
];

/// Colors offered in the custom goal dialog
pub const COLOR_PALETTE: &[&str] = &[
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F06292", "#7986CB", "#9575CD",
    "#64B5F6", "#4DB6AC", "#81C784", "#FFD54F", "#FF8A65", "#A1887F",
];

pub const DEFAULT_CUSTOM_ICON: &str = "trophy-outline";
pub const DEFAULT_CUSTOM_COLOR: &str = "#1976d2";

/// Look up a template by name, ignoring case
pub fn find_template(name: &str) -> Option<&'static GoalTemplate> {
    let name = name.trim();
    GOAL_TEMPLATES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Terminal glyph standing in for an icon identifier
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon.trim_end_matches("-outline") {
        "car" | "bus" => "🚗",
        "home" => "🏠",
        "airplane" => "✈",
        "school" => "🎓",
        "shield-checkmark" => "🛡",
        "medkit" => "✚",
        "wine" => "🍷",
        "baby" => "👶",
        "gift" => "🎁",
        "heart" => "♥",
        "phone-portrait" => "📱",
        "trending-up" => "📈",
        "cart" => "🛒",
        "barbell" => "🏋",
        "paw" => "🐾",
        "balloon" => "🎈",
        "trophy" => "🏆",
        _ => "★",
    }
}
