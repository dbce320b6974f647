//! JSON.

use crate::error::LexError;
use crate::lexing::LanguageSpec;

pub fn spec() -> Result<LanguageSpec, LexError> {
    LanguageSpec::builder("json")
        .metadata("name", "JSON")
        .metadata("extension", "json")
        .category(
            "string",
            &[r#""(?:[^"\\\n]|\\(?:["\\/bfnrt]|u[0-9a-fA-F]{4}))*""#],
        )
        .category("number", &[r"-?(?:0|[1-9]\d*)(?:\.\d+)?(?:[eE][+-]?\d+)?"])
        // Incomplete fractions and exponents. They only survive as tokens when
        // the literal is really cut short.
        .wrong_category(
            "malformed_number",
            &[r"-?\d+\.", r"-?\d+(?:\.\d+)?[eE][+-]?"],
        )
        .category("keyword", &["true|false|null"])
        .category("punctuation", &[r"[{}\[\],:]"])
        .category("blank", &[r"\s+"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::Lexer;
    use crate::testing::factories::{categories, texts};
    use std::sync::Arc;

    fn lexer() -> Lexer {
        Lexer::with_discard(Arc::new(spec().unwrap()), ["blank"]).unwrap()
    }

    #[test]
    fn test_object() {
        let tokens = lexer().lex(r#"{"a": [1, -2.5e+3, true, null]}"#).unwrap();
        assert_eq!(
            texts(&tokens),
            vec!["{", r#""a""#, ":", "[", "1", ",", "-2.5e+3", ",", "true", ",", "null", "]", "}"]
        );
        assert_eq!(categories(&tokens)[6], "number");
    }

    #[test]
    fn test_escapes_in_strings() {
        let tokens = lexer().lex(r#""a\"bé""#).unwrap();
        assert_eq!(categories(&tokens), vec!["string"]);
    }

    #[test]
    fn test_truncated_exponent_is_rejected() {
        let err = lexer().lex("[1e+]").unwrap_err();
        assert_eq!(
            err,
            LexError::WrongCategory {
                category: "malformed_number".to_string(),
                text: "1e+".to_string(),
                start: 1,
            }
        );
    }

    #[test]
    fn test_bare_word_is_unlexable() {
        assert!(matches!(
            lexer().lex("[nope]"),
            Err(LexError::Unlexable { start: 1, .. })
        ));
    }
}
