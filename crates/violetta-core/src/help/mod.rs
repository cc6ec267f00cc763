//! Message template sent to a trusted contact when asking for help.

use serde::{Deserialize, Serialize};

use crate::keys;
use crate::persist::PersistedState;

/// Placeholder replaced with the contact's name.
pub const NAME_PLACEHOLDER: &str = "{name}";

pub const DEFAULT_TEMPLATE: &str = "Hi {name}, I'm not feeling well and I could use your support. Can you call me or come by when you can? \u{1F49C}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpMessageTemplate {
    pub text: String,
}

impl Default for HelpMessageTemplate {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl HelpMessageTemplate {
    /// Replaces the template. A blank text restores the default.
    pub fn set_text(&mut self, text: &str) {
        let text = text.trim();
        self.text = if text.is_empty() {
            DEFAULT_TEMPLATE.to_string()
        } else {
            text.to_string()
        };
    }

    /// Fills every `{name}` with `contact_name`.
    pub fn render(&self, contact_name: &str) -> String {
        self.text.replace(NAME_PLACEHOLDER, contact_name.trim())
    }
}

impl PersistedState for HelpMessageTemplate {
    const KEY: &'static str = keys::HELP_MESSAGE_TEMPLATE;
    const VERSION: u32 = 0;

    fn seed() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default() {
        let rendered = HelpMessageTemplate::default().render(" Ana ");
        assert!(rendered.starts_with("Hi Ana,"));
        assert!(!rendered.contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn test_custom_template_all_placeholders() {
        let mut template = HelpMessageTemplate::default();
        template.set_text("{name}? {name}!");
        assert_eq!(template.render("Bea"), "Bea? Bea!");
        template.set_text("   ");
        assert_eq!(template.text, DEFAULT_TEMPLATE);
    }
}
