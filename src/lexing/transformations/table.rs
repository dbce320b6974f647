//! Table delimiter re-tagging
//!
//!     The scanner emits every `|` as the same delimiter category. This stage turns
//!     delimiters into structural markers from their context, tracking whether a
//!     row is open on the current line:
//!
//!     - the first delimiter of a line opens a row and becomes a line start, even
//!       when text precedes it on that line;
//!     - inside an open row, a delimiter followed by a newline/paragraph (or
//!       closing the stream) closes the row and becomes a line end;
//!     - any other delimiter stays a cell separator.
//!
//!     Every line end therefore follows an unmatched line start. A row left open
//!     at a line break is simply closed without an end marker.
//!
//!     A paragraph break touching a table row is normalized to a newline.
//!
//! Header Rows
//!
//!     A header separator line (`|-----|`) only tells us about the row before it.
//!     When a newline is immediately followed by one, the stage walks back over the
//!     output it already produced to the line start of the previous row and
//!     promotes it to a header line start. Not finding that row is an error.

use crate::error::TransformationError;
use crate::lexing::token::Token;
use crate::lexing::transformations::TokenMapper;

/// Category names the table stage reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCategories {
    pub delimiter: String,
    pub header_separator: String,
    pub newline: String,
    pub paragraph: String,
    pub line_start: String,
    pub line_end: String,
    pub header_line_start: String,
}

impl Default for TableCategories {
    fn default() -> Self {
        TableCategories {
            delimiter: "table".to_string(),
            header_separator: "table_header_line".to_string(),
            newline: "newline".to_string(),
            paragraph: "paragraph".to_string(),
            line_start: "table_line_start".to_string(),
            line_end: "table_line_end".to_string(),
            header_line_start: "table_header_line_start".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableRetagMapper {
    names: TableCategories,
}

impl TableRetagMapper {
    pub fn new(names: TableCategories) -> Self {
        TableRetagMapper { names }
    }

    fn is_break(&self, token: &Token) -> bool {
        token.is(&self.names.newline) || token.is(&self.names.paragraph)
    }

    /// `out` ends with the newline that precedes a header separator.
    fn promote_header(&self, out: &mut [Token]) -> Result<(), TransformationError> {
        let newline_at = out.len() - 1;
        let mut j = newline_at;
        while j > 0 {
            j -= 1;
            let token = &out[j];
            if token.is(&self.names.line_start) {
                out[j].category = self.names.header_line_start.clone();
                return Ok(());
            }
            let own_row_end = j + 1 == newline_at && token.is(&self.names.line_end);
            if self.is_break(token) || (token.is(&self.names.line_end) && !own_row_end) {
                break;
            }
        }
        Err(TransformationError::new(
            self.name(),
            format!(
                "header separator at offset {} has no table row above it",
                out[newline_at].start + out[newline_at].text.len()
            ),
        ))
    }
}

impl TokenMapper for TableRetagMapper {
    fn name(&self) -> &str {
        "table-retag"
    }

    fn map(&self, tokens: Vec<Token>) -> Result<Vec<Token>, TransformationError> {
        let names = &self.names;
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut row_open = false;

        for (i, mut token) in tokens.iter().cloned().enumerate() {
            let next = tokens.get(i + 1);

            if token.is(&names.delimiter) {
                if !row_open {
                    token.category = names.line_start.clone();
                    row_open = true;
                } else if next.map_or(true, |n| self.is_break(n)) {
                    token.category = names.line_end.clone();
                    row_open = false;
                }
            } else if self.is_break(&token) {
                row_open = false;
            }

            if token.is(&names.paragraph) {
                let after_row = out.last().is_some_and(|p| p.is(&names.line_end));
                let before_row = next.is_some_and(|n| n.is(&names.delimiter));
                if after_row || before_row {
                    token.category = names.newline.clone();
                }
            }

            let header_follows = token.is(&names.newline)
                && next.is_some_and(|n| n.is(&names.header_separator));
            out.push(token);
            if header_follows {
                self.promote_header(&mut out)?;
            }
        }

        Ok(out)
    }
}
