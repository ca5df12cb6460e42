//! Safe serialization of author content into inline script blocks.
//!
//! Question banks travel inside `<script type="application/json">`
//! elements and are parsed at runtime. Author-entered text must never
//! be able to close the embedding tag, so `<` and `>` are escaped to
//! their JSON unicode forms before the payload is spliced into HTML.

use serde::Serialize;

/// Serialize a value for embedding inside an inline script element.
///
/// Falls back to an empty JSON array on serialization failure so the
/// bundle stays well-formed (config errors are never fatal).
pub fn json_for_inline_script<T: Serialize>(value: &T) -> String {
    let json = serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string());
    json.replace('<', "\\u003c").replace('>', "\\u003e")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludopack_domain::QuizQuestion;

    #[test]
    fn angle_brackets_are_escaped() {
        let questions = vec![QuizQuestion::new(
            "Is <script>alert(1)</script> safe?",
            vec!["No".to_string()],
            0,
            "",
        )];
        let embedded = json_for_inline_script(&questions);
        assert!(!embedded.contains('<'));
        assert!(!embedded.contains('>'));
        assert!(embedded.contains("\\u003cscript\\u003e"));
    }

    #[test]
    fn escaped_payload_round_trips_through_json() {
        let questions = vec![QuizQuestion::new("a < b > c", vec![], 0, "x </script> y")];
        let embedded = json_for_inline_script(&questions);
        let parsed: Vec<QuizQuestion> = serde_json::from_str(&embedded).unwrap();
        assert_eq!(parsed, questions);
    }

    #[test]
    fn plain_content_is_untouched() {
        let embedded = json_for_inline_script(&vec!["plain text"]);
        assert_eq!(embedded, "[\"plain text\"]");
    }
}
