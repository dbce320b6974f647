//! Fold escape-like tokens back into neighbouring literal text.
//!
//! A special token is appended to the literal token before it when there is
//! one, otherwise prepended to the literal token after it (which then starts
//! where the special token started). With no literal neighbour the special
//! token becomes literal text itself, so the output never keeps a standalone
//! special.
//!
//! Conditional specials are only spliced when they do not open a line: a
//! markup title marker is structural at a line start and plain text anywhere
//! else.

use crate::error::TransformationError;
use crate::lexing::token::Token;
use crate::lexing::transformations::TokenMapper;

#[derive(Debug, Clone)]
pub struct SpliceMapper {
    literal: String,
    always: Vec<String>,
    unless_line_start: Vec<String>,
    line_breaks: Vec<String>,
}

impl SpliceMapper {
    /// `literal` is the category special tokens are folded into.
    pub fn new(literal: impl Into<String>) -> Self {
        SpliceMapper {
            literal: literal.into(),
            always: Vec::new(),
            unless_line_start: Vec::new(),
            line_breaks: Vec::new(),
        }
    }

    /// Categories that are always spliced.
    pub fn always(mut self, categories: &[&str]) -> Self {
        self.always.extend(categories.iter().map(|c| c.to_string()));
        self
    }

    /// Categories spliced unless they follow one of `line_breaks` or open the stream.
    pub fn unless_line_start(mut self, categories: &[&str], line_breaks: &[&str]) -> Self {
        self.unless_line_start
            .extend(categories.iter().map(|c| c.to_string()));
        self.line_breaks
            .extend(line_breaks.iter().map(|c| c.to_string()));
        self
    }

    fn is_special(&self, token: &Token, prev: Option<&Token>) -> bool {
        if self.always.contains(&token.category) {
            return true;
        }
        if self.unless_line_start.contains(&token.category) {
            return prev.is_some_and(|p| !self.line_breaks.contains(&p.category));
        }
        false
    }
}

impl TokenMapper for SpliceMapper {
    fn name(&self) -> &str {
        "splice"
    }

    fn map(&self, tokens: Vec<Token>) -> Result<Vec<Token>, TransformationError> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut iter = tokens.into_iter().peekable();

        while let Some(token) = iter.next() {
            if !self.is_special(&token, out.last()) {
                out.push(token);
                continue;
            }

            if let Some(prev) = out.last_mut().filter(|p| p.is(&self.literal)) {
                prev.text.push_str(&token.text);
                continue;
            }

            if let Some(mut next) = iter.next_if(|n| n.is(&self.literal)) {
                next.text.insert_str(0, &token.text);
                next.start = token.start;
                out.push(next);
                continue;
            }

            out.push(Token::new(self.literal.clone(), token.text, token.start));
        }

        Ok(out)
    }
}
