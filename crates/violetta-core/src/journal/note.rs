//! Keyword-matched reflection notes attached to journal entries at save time.

const GRATITUDE_KEYWORDS: [&str; 4] = ["gracias", "agrade", "thank", "grateful"];
const BOUNDARY_KEYWORDS: [&str; 4] = ["límite", "limit", "boundar", " no "];

const GRATITUDE_NOTE: &str = "There's a tone of gratitude here. Well done!";
const BOUNDARY_NOTE: &str = "You're working on setting healthy boundaries. That matters.";

/// Derives a short note from entry text. Gratitude wins over boundaries.
pub fn infer_note(content: &str) -> Option<String> {
    let lower = content.to_lowercase();
    if GRATITUDE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Some(GRATITUDE_NOTE.to_string());
    }
    if BOUNDARY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Some(BOUNDARY_NOTE.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gratitude() {
        assert_eq!(
            infer_note("Today I am GRATEFUL for my sister").as_deref(),
            Some(GRATITUDE_NOTE)
        );
        assert!(infer_note("Hoy agradezco el sol").is_some());
    }

    #[test]
    fn test_boundary() {
        assert_eq!(
            infer_note("I said no to overtime").as_deref(),
            Some(BOUNDARY_NOTE)
        );
        assert_eq!(
            infer_note("Puse un límite claro").as_deref(),
            Some(BOUNDARY_NOTE)
        );
    }

    #[test]
    fn test_gratitude_takes_precedence() {
        assert_eq!(
            infer_note("thank you for respecting my boundaries").as_deref(),
            Some(GRATITUDE_NOTE)
        );
    }

    #[test]
    fn test_no_match() {
        assert!(infer_note("Rainy day, stayed in").is_none());
        assert!(infer_note("nothing").is_none());
    }
}
