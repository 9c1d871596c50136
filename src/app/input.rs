//! Single-line text field for form input

use super::palette::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Characters a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    /// Digits, a decimal point, grouping commas and the currency symbol
    Amount,
    /// Digits only
    Count,
    /// Digits and `-` separators
    Date,
}

impl InputKind {
    fn accepts(self, c: char) -> bool {
        match self {
            InputKind::Text => !c.is_control(),
            InputKind::Amount => c.is_ascii_digit() || c == '.' || c == ',' || c == '₹',
            InputKind::Count => c.is_ascii_digit(),
            InputKind::Date => c.is_ascii_digit() || c == '-',
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextField {
    label: &'static str,
    placeholder: &'static str,
    kind: InputKind,
    max_len: usize,
    value: String,
}

impl TextField {
    pub fn new(label: &'static str, kind: InputKind) -> Self {
        Self {
            label,
            placeholder: "",
            kind,
            max_len: 40,
            value: String::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Apply an editing key. Returns false when the key is not an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) if self.kind.accepts(c) => {
                if self.value.chars().count() < self.max_len {
                    self.value.push(c);
                }
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette, focused: bool) {
        let content = if self.value.is_empty() && !focused {
            Line::from(Span::styled(self.placeholder, palette.muted()))
        } else if focused {
            Line::from(vec![
                Span::styled(self.value.as_str(), palette.base()),
                Span::styled("▏", palette.key_hint()),
            ])
        } else {
            Line::from(Span::styled(self.value.as_str(), palette.base()))
        };

        let border = if focused {
            palette.key_hint()
        } else {
            palette.muted()
        };
        let field = Paragraph::new(content).style(palette.base()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(self.label, border)),
        );
        f.render_widget(field, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::new("Goal Name", InputKind::Text);
        type_str(&mut field, "Guitar");
        assert_eq!(field.value(), "Guitar");
        assert!(field.handle_key(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "Guita");
        assert!(!field.handle_key(key(KeyCode::Enter)));
    }

    #[test]
    fn test_amount_field_filters() {
        let mut field = TextField::new("Target Amount", InputKind::Amount);
        type_str(&mut field, "₹1,2a3.5x");
        assert_eq!(field.value(), "₹1,23.5");
    }

    #[test]
    fn test_count_and_date_fields_filter() {
        let mut months = TextField::new("Months", InputKind::Count);
        type_str(&mut months, "1.5");
        assert_eq!(months.value(), "15");

        let mut date = TextField::new("Target Date", InputKind::Date);
        type_str(&mut date, "2030/01-02");
        assert_eq!(date.value(), "203001-02");
    }

    #[test]
    fn test_max_len() {
        let mut field = TextField::new("Months", InputKind::Count).with_max_len(3);
        type_str(&mut field, "12345");
        assert_eq!(field.value(), "123");
    }

    #[test]
    fn test_control_keys_ignored() {
        let mut field = TextField::new("Goal Name", InputKind::Text);
        assert!(!field.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(field.value().is_empty());
    }
}
