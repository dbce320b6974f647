//! Coalesce runs of literal-text tokens.

use crate::error::TransformationError;
use crate::lexing::token::Token;
use crate::lexing::transformations::TokenMapper;

/// Joins consecutive tokens of one category, keeping the first start offset.
#[derive(Debug, Clone)]
pub struct MergeMapper {
    category: String,
}

impl MergeMapper {
    pub fn new(category: impl Into<String>) -> Self {
        MergeMapper {
            category: category.into(),
        }
    }
}

impl TokenMapper for MergeMapper {
    fn name(&self) -> &str {
        "merge"
    }

    fn map(&self, tokens: Vec<Token>) -> Result<Vec<Token>, TransformationError> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        for token in tokens {
            match out.last_mut() {
                Some(last) if last.is(&self.category) && token.is(&self.category) => {
                    last.text.push_str(&token.text);
                }
                _ => out.push(token),
            }
        }
        Ok(out)
    }
}
