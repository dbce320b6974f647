//! Helpers shared by unit and integration tests.

pub mod factories {
    use crate::lexing::token::Token;

    /// Build tokens from `(category, text, start)` triples.
    pub fn mk_tokens(items: &[(&str, &str, usize)]) -> Vec<Token> {
        items
            .iter()
            .map(|&(category, text, start)| Token::new(category, text, start))
            .collect()
    }

    /// The category of each token, in order.
    pub fn categories(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.category.as_str()).collect()
    }

    /// The text of each token, in order.
    pub fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Concatenated token text; equals the source when nothing was discarded.
    pub fn detokenize(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

pub mod assertions {
    use crate::lexing::token::Token;

    /// Assert that `tokens` cover `source` exactly: no gaps, no overlaps.
    pub fn assert_covers(source: &str, tokens: &[Token]) {
        let mut offset = 0;
        for token in tokens {
            assert_eq!(
                token.start, offset,
                "token {token:?} does not start where the previous one ended"
            );
            assert_eq!(&source[token.span()], token.text, "token text differs from source");
            offset += token.text.len();
        }
        assert_eq!(offset, source.len(), "tokens do not reach the end of the source");
    }
}
