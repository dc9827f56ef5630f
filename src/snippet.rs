/// Data structures for SnipSave
use serde::{Deserialize, Serialize};

/// A saved quote with its source link
///
/// `id` is the creation time in milliseconds (`Date.now()` in JS), kept as
/// f64 so data written by other builds of this popup round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snippet {
    pub id: f64,
    pub quote: String,
    pub source: String,
}

impl Snippet {
    pub fn new(id: f64, quote: String, source: String) -> Snippet {
        Snippet { id, quote, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_creation() {
        let snip = Snippet::new(
            1698508200000.0,
            "Talk is cheap. Show me the code.".to_string(),
            "https://lkml.org".to_string(),
        );

        assert_eq!(snip.id, 1698508200000.0);
        assert_eq!(snip.quote, "Talk is cheap. Show me the code.");
        assert_eq!(snip.source, "https://lkml.org");
    }

    #[test]
    fn test_serialization() {
        let snip = Snippet::new(
            1698508200000.0,
            "So we beat on".to_string(),
            "https://gutenberg.org/ebooks/64317".to_string(),
        );

        let json = serde_json::to_string(&snip).unwrap();
        let deserialized: Snippet = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, snip);
    }

    #[test]
    fn test_wire_shape() {
        // The stored shape is {id, quote, source} with no extra fields,
        // matching what previous versions of the popup wrote.
        let json = r#"{"id":1700000000000,"quote":"q","source":"https://a.com"}"#;
        let snip: Snippet = serde_json::from_str(json).unwrap();

        assert_eq!(snip.id, 1700000000000.0);
        assert_eq!(snip.quote, "q");
        assert_eq!(snip.source, "https://a.com");
    }

    #[test]
    fn test_empty_quote_allowed() {
        let snip = Snippet::new(1.0, String::new(), "https://a.com".to_string());
        assert!(snip.quote.is_empty());
    }
}
