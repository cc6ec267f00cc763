//! Grammatical-gender helpers for inflected copy.

use super::model::{GrammaticalGender, PronounType};

/// Appends the gendered ending to a Spanish root:
/// `gendered("Bienvenid", Feminine)` is `"Bienvenida"`.
pub fn gendered(root: &str, gender: GrammaticalGender) -> String {
    let ending = match gender {
        GrammaticalGender::Feminine => 'a',
        GrammaticalGender::Masculine => 'o',
        GrammaticalGender::Neutral => 'e',
    };
    format!("{root}{ending}")
}

/// Text shown for a pronoun choice. Custom pronouns without a display
/// string render as an em dash placeholder.
pub fn render_pronouns(kind: PronounType, custom_display: Option<&str>) -> String {
    match kind {
        PronounType::Other => custom_display
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or("\u{2014}")
            .to_string(),
        other => other.to_string(),
    }
}
