//! The scanning engine
//!
//!     The lexer grows a candidate word one character at a time and asks every
//!     matcher whether the whole word matches. It keeps the candidates that matched
//!     on the previous character. When the word stops matching after having
//!     matched, the boundary is most likely just before the last character.
//!
//! Lookahead Repair
//!
//!     Classic lexers ask whether a prefix could still grow into a match. Our
//!     matchers only answer whole-string queries, so instead the engine peeks one
//!     character ahead: if the word plus the next character matches, the cut is
//!     postponed. This is how `1e5` stays one number even though `1e` matches
//!     nothing.
//!
//!     The repair only looks one character past a local mismatch. A specification
//!     in which a valid token needs two or more non-matching characters in a row
//!     before it matches again (with another token pending) cannot be scanned
//!     correctly. Every bundled language respects this. Patterns that must span
//!     such gaps are written to accept their own incomplete prefixes (see the Lua
//!     long comment).
//!
//! Tie Breaking
//!
//!     Candidates are collected in declaration order, categories first and then
//!     matchers within each category. The first candidate wins, which makes
//!     keyword-before-identifier style specifications work without priorities.

use crate::error::LexError;
use crate::lexing::spec::LanguageSpec;
use crate::lexing::token::Token;
use crate::rendering;
use std::collections::HashSet;
use std::sync::Arc;

/// A matcher that accepted the current word. Scan-local.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    category: usize,
    matcher: usize,
    start: usize,
}

/// Scans text with one language specification.
///
/// The discard set is configuration: all per-call state lives on the stack of
/// [`lex`](Lexer::lex), so a lexer can be reused freely.
#[derive(Debug, Clone)]
pub struct Lexer {
    spec: Arc<LanguageSpec>,
    discard: HashSet<String>,
}

impl Lexer {
    pub fn new(spec: Arc<LanguageSpec>) -> Self {
        Lexer {
            spec,
            discard: HashSet::new(),
        }
    }

    /// Create a lexer that drops the given categories from its output.
    pub fn with_discard<I, S>(spec: Arc<LanguageSpec>, discard: I) -> Result<Self, LexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let discard: HashSet<String> = discard.into_iter().map(Into::into).collect();
        spec.check_categories(&discard)?;
        tracing::debug!(language = spec.name(), discard = ?discard, "built lexer");
        Ok(Lexer { spec, discard })
    }

    pub fn spec(&self) -> &Arc<LanguageSpec> {
        &self.spec
    }

    pub fn discarded(&self) -> &HashSet<String> {
        &self.discard
    }

    /// Add a category to the discard set.
    pub fn discard(&mut self, category: &str) -> Result<(), LexError> {
        if !self.spec.has_category(category) {
            return Err(LexError::config(format!(
                "language '{}' has no category '{category}'",
                self.spec.name()
            )));
        }
        self.discard.insert(category.to_string());
        Ok(())
    }

    /// Tokenize `text` with the lexer's own discard set.
    pub fn lex(&self, text: &str) -> Result<Vec<Token>, LexError> {
        self.lex_with(text, None)
    }

    /// Tokenize `text`, replacing the discard set for this call only.
    ///
    /// Scanning runs first, then the specification's transformation pipeline if
    /// there is one. Any failure aborts the whole call.
    pub fn lex_with(
        &self,
        text: &str,
        discard_override: Option<&HashSet<String>>,
    ) -> Result<Vec<Token>, LexError> {
        let discard = match discard_override {
            Some(discard) => {
                self.spec.check_categories(discard)?;
                discard
            }
            None => &self.discard,
        };

        let result = self.scan(text, discard).and_then(|tokens| match self.spec.transform() {
            Some(pipeline) => pipeline.run(tokens),
            None => Ok(tokens),
        });
        if let Err(e) = &result {
            tracing::warn!(language = self.spec.name(), error = %e, "lexing failed");
        }
        result
    }

    /// Lex `text` and render the resulting tokens as HTML.
    pub fn render<S: AsRef<str>>(
        &self,
        text: &str,
        raw_categories: &[S],
        annotate: bool,
    ) -> Result<String, LexError> {
        let tokens = self.lex(text)?;
        Ok(rendering::render(&tokens, raw_categories, annotate))
    }

    fn scan(&self, text: &str, discard: &HashSet<String>) -> Result<Vec<Token>, LexError> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut word = String::new();
        let mut old: Vec<Candidate> = Vec::new();

        let mut i = 0;
        while i < chars.len() {
            word.push(chars[i]);
            let matched = self.candidates(&word, start);

            if matched.is_empty() && !old.is_empty() {
                let extends = chars.get(i + 1).is_some_and(|&next| {
                    let mut extended = word.clone();
                    extended.push(next);
                    self.matches_any(&extended)
                });
                if !extends {
                    word.pop();
                    self.finalize(&old, &word, start, discard, &mut tokens)?;
                    start += word.len();
                    word.clear();
                    old.clear();
                    // Retry the current character as the start of the next token.
                    continue;
                }
            }

            old = matched;
            i += 1;
        }

        if !old.is_empty() {
            self.finalize(&old, &word, start, discard, &mut tokens)?;
        } else if !word.is_empty() {
            return Err(LexError::Unlexable { start, text: word });
        }

        Ok(tokens)
    }

    fn candidates(&self, word: &str, start: usize) -> Vec<Candidate> {
        let mut matched = Vec::new();
        for (ci, category) in self.spec.categories().iter().enumerate() {
            for (mi, matcher) in category.matchers().iter().enumerate() {
                if matcher.matches(word) {
                    matched.push(Candidate {
                        category: ci,
                        matcher: mi,
                        start,
                    });
                }
            }
        }
        matched
    }

    fn matches_any(&self, word: &str) -> bool {
        self.spec.categories().iter().any(|c| c.matches(word))
    }

    fn finalize(
        &self,
        old: &[Candidate],
        text: &str,
        start: usize,
        discard: &HashSet<String>,
        tokens: &mut Vec<Token>,
    ) -> Result<(), LexError> {
        let winner = self.winner(old, text)?;
        let category = self.spec.categories()[winner.category].name();

        if self.spec.is_wrong(category) {
            return Err(LexError::WrongCategory {
                category: category.to_string(),
                text: text.to_string(),
                start: winner.start,
            });
        }

        tracing::trace!(category, text, start, "token boundary");
        if !discard.contains(category) {
            tokens.push(Token::new(category, text, start));
        }
        Ok(())
    }

    /// The first candidate wins. Candidates are produced in declaration order,
    /// so anything ranked ahead of the first one means that order was lost.
    fn winner(&self, old: &[Candidate], text: &str) -> Result<Candidate, LexError> {
        let first = old[0];
        if old.iter().any(|c| c.category < first.category) {
            let categories = self.spec.categories();
            return Err(LexError::Ambiguity {
                start: first.start,
                text: text.to_string(),
                categories: old
                    .iter()
                    .map(|c| categories[c.category].name().to_string())
                    .collect(),
            });
        }
        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::factories::{categories, texts};

    fn tiny() -> Arc<LanguageSpec> {
        Arc::new(
            LanguageSpec::builder("tiny")
                .category("keyword", &["if|then|end"])
                .category("identifier", &["[a-z_][a-z0-9_]*"])
                .category("number", &[r"\d+(?:\.\d+)?(?:e\d+)?"])
                .wrong_category("malformed_number", &[r"\d+[a-z_][a-z0-9_]*"])
                .category("operator", &["==|=|<|<=|>|>="])
                .category("blank", &[r"\s+"])
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_simple_assignment() {
        let lexer = Lexer::with_discard(tiny(), ["blank"]).unwrap();
        let tokens = lexer.lex("a = 5").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new("identifier", "a", 0),
                Token::new("operator", "=", 2),
                Token::new("number", "5", 4),
            ]
        );
    }

    #[test]
    fn test_keyword_beats_identifier_by_declaration_order() {
        let lexer = Lexer::with_discard(tiny(), ["blank"]).unwrap();
        let tokens = lexer.lex("if iffy").unwrap();
        assert_eq!(categories(&tokens), vec!["keyword", "identifier"]);
        assert_eq!(texts(&tokens), vec!["if", "iffy"]);
    }

    #[test]
    fn test_longest_match_for_operators() {
        let lexer = Lexer::with_discard(tiny(), ["blank"]).unwrap();
        let tokens = lexer.lex("a==b<=c").unwrap();
        assert_eq!(texts(&tokens), vec!["a", "==", "b", "<=", "c"]);
    }

    #[test]
    fn test_lookahead_keeps_number_together() {
        // "1." and "1e" match nothing, the next character repairs both.
        let lexer = Lexer::new(tiny());
        let tokens = lexer.lex("1.5").unwrap();
        assert_eq!(tokens, vec![Token::new("number", "1.5", 0)]);
    }

    #[test]
    fn test_wrong_category_is_fatal() {
        let lexer = Lexer::new(tiny());
        let err = lexer.lex("x = 5abc").unwrap_err();
        assert_eq!(
            err,
            LexError::WrongCategory {
                category: "malformed_number".to_string(),
                text: "5abc".to_string(),
                start: 4,
            }
        );
    }

    #[test]
    fn test_unlexable_trailing_input() {
        let lexer = Lexer::new(tiny());
        let err = lexer.lex("a = $").unwrap_err();
        assert_eq!(
            err,
            LexError::Unlexable {
                start: 4,
                text: "$".to_string(),
            }
        );
    }

    #[test]
    fn test_unlexable_reports_rest_of_input() {
        let lexer = Lexer::new(tiny());
        let err = lexer.lex("a $ b").unwrap_err();
        assert_eq!(
            err,
            LexError::Unlexable {
                start: 2,
                text: "$ b".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let lexer = Lexer::new(tiny());
        assert_eq!(lexer.lex("").unwrap(), vec![]);
    }

    #[test]
    fn test_discard_override_applies_to_one_call() {
        let lexer = Lexer::new(tiny());
        let only_blank: HashSet<String> = ["blank".to_string()].into_iter().collect();

        let with_override = lexer.lex_with("a b", Some(&only_blank)).unwrap();
        assert_eq!(texts(&with_override), vec!["a", "b"]);

        let without = lexer.lex("a b").unwrap();
        assert_eq!(texts(&without), vec!["a", " ", "b"]);
    }

    #[test]
    fn test_unknown_discard_category_is_configuration_error() {
        let err = Lexer::with_discard(tiny(), ["whitespace"]).unwrap_err();
        assert!(matches!(err, LexError::Configuration(_)));

        let mut lexer = Lexer::new(tiny());
        assert!(lexer.discard("whitespace").is_err());
        assert!(lexer.discard("blank").is_ok());
        assert!(lexer.discarded().contains("blank"));
    }

    #[test]
    fn test_offsets_are_bytes() {
        let spec = Arc::new(
            LanguageSpec::builder("words")
                .category("word", &[r"\w+"])
                .category("blank", &[r"\s+"])
                .build()
                .unwrap(),
        );
        let tokens = Lexer::new(spec).lex("héllo wörld").unwrap();
        assert_eq!(tokens[0], Token::new("word", "héllo", 0));
        assert_eq!(tokens[1], Token::new("blank", " ", 6));
        assert_eq!(tokens[2], Token::new("word", "wörld", 7));
    }

    #[test]
    fn test_lexer_is_reusable() {
        let lexer = Lexer::with_discard(tiny(), ["blank"]).unwrap();
        let first = lexer.lex("if a then b end").unwrap();
        let second = lexer.lex("if a then b end").unwrap();
        assert_eq!(first, second);
    }
}
