//! Form field value objects

use super::rules::FieldRule;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// One choice out of a configured option list (categories, services)
    Select { options: Vec<String>, index: usize },
    /// Boolean toggle (published, featured)
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    /// Declared default, restored on form reset
    default: FieldValue,
    /// Whether the field has received a blur since the last reset
    pub touched: bool,
    pub is_multiline: bool,
    pub rules: Vec<FieldRule>,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str, rules: Vec<FieldRule>) -> Self {
        Self::text_with_value(name, label, String::new(), false, rules)
    }

    /// Create a new multiline text field
    pub fn multiline(name: &str, label: &str, rules: Vec<FieldRule>) -> Self {
        Self::text_with_value(name, label, String::new(), true, rules)
    }

    /// Create a new text field with initial value
    pub fn text_with_value(
        name: &str,
        label: &str,
        value: String,
        is_multiline: bool,
        rules: Vec<FieldRule>,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value.clone()),
            default: FieldValue::Text(value),
            touched: false,
            is_multiline,
            rules,
        }
    }

    /// Create a select field over a fixed option list
    pub fn select<S: AsRef<str>>(name: &str, label: &str, options: &[S], index: usize) -> Self {
        let options: Vec<String> = options.iter().map(|o| o.as_ref().to_string()).collect();
        let index = index.min(options.len().saturating_sub(1));
        let value = FieldValue::Select {
            options: options.clone(),
            index,
        };
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: value.clone(),
            default: value,
            touched: false,
            is_multiline: false,
            rules: Vec::new(),
        }
    }

    /// Create a select field positioned at the given option, when present
    pub fn select_with_value<S: AsRef<str>>(
        name: &str,
        label: &str,
        options: &[S],
        current: &str,
    ) -> Self {
        let index = options
            .iter()
            .position(|o| o.as_ref() == current)
            .unwrap_or(0);
        Self::select(name, label, options, index)
    }

    /// Create a boolean toggle field
    pub fn flag(name: &str, label: &str, value: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Flag(value),
            default: FieldValue::Flag(value),
            touched: false,
            is_multiline: false,
            rules: Vec::new(),
        }
    }

    /// Get the text value used for validation and payload building
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select { options, index } => {
                options.get(*index).map(String::as_str).unwrap_or("")
            }
            FieldValue::Flag(v) => {
                if *v {
                    "true"
                } else {
                    "false"
                }
            }
        }
    }

    /// Get the flag value (false for non-flag fields)
    pub fn as_flag(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            // Selects and flags are driven by cycle/toggle, not typing
            FieldValue::Select { .. } | FieldValue::Flag(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Advance a select field to the next option (wraps around)
    pub fn cycle_option(&mut self) {
        if let FieldValue::Select { options, index } = &mut self.value {
            if !options.is_empty() {
                *index = (*index + 1) % options.len();
            }
        }
    }

    /// Flip a flag field
    pub fn toggle(&mut self) {
        if let FieldValue::Flag(v) = &mut self.value {
            *v = !*v;
        }
    }

    /// Restore the declared default and clear the touched marker
    pub fn reset(&mut self) {
        self.value = self.default.clone();
        self.touched = false;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select { options, index } => {
                options.get(*index).cloned().unwrap_or_default()
            }
            FieldValue::Flag(v) => if *v { "[x]" } else { "[ ]" }.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text("name", "Name", vec![FieldRule::Required]);
        field.push_char('J');
        field.push_char('o');
        assert_eq!(field.as_text(), "Jo");
        field.pop_char();
        assert_eq!(field.as_text(), "J");
    }

    #[test]
    fn test_reset_restores_default_value() {
        let mut field =
            FormField::text_with_value("category", "Category", "AI/ML".into(), false, vec![]);
        field.set_text("Security".into());
        field.touched = true;
        field.reset();
        assert_eq!(field.as_text(), "AI/ML");
        assert!(!field.touched);
    }

    #[test]
    fn test_select_cycles_and_wraps() {
        let mut field = FormField::select("mode", "Mode", &["online", "offline", "hybrid"], 0);
        field.cycle_option();
        assert_eq!(field.as_text(), "offline");
        field.cycle_option();
        field.cycle_option();
        assert_eq!(field.as_text(), "online");
    }

    #[test]
    fn test_select_with_value_finds_current_option() {
        let field = FormField::select_with_value(
            "category",
            "Category",
            &["Training", "Webinar"],
            "Webinar",
        );
        assert_eq!(field.as_text(), "Webinar");
    }

    #[test]
    fn test_select_ignores_typed_characters() {
        let mut field = FormField::select("mode", "Mode", &["online"], 0);
        field.push_char('x');
        assert_eq!(field.as_text(), "online");
    }

    #[test]
    fn test_flag_toggles_and_displays() {
        let mut field = FormField::flag("featured", "Featured", false);
        assert!(!field.as_flag());
        assert_eq!(field.display_value(), "[ ]");
        field.toggle();
        assert!(field.as_flag());
        assert_eq!(field.display_value(), "[x]");
    }
}
