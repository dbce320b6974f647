//! The markup language
//!
//!     A lightweight document markup: `#` titles at the start of a line, `**bold**`,
//!     `//italic//`, `@@code@@`, backslash escapes, blank-line paragraphs and pipe
//!     tables with an optional `|----|` header separator.
//!
//!     Markup cannot be classified token by token, so the specification carries a
//!     three stage pipeline:
//!
//!     1. splice: escapes always, and titles that do not open a line, are folded
//!        into the neighbouring text;
//!     2. merge: runs of text become one token;
//!     3. table re-tagging: `|` delimiters become row start/end markers and header
//!        rows are promoted.

use crate::error::LexError;
use crate::lexing::transformations::{
    MergeMapper, SpliceMapper, TableCategories, TableRetagMapper, TransformPipeline,
};
use crate::lexing::LanguageSpec;

pub const NORMAL: &str = "normal";
pub const NEWLINE: &str = "newline";
pub const PARAGRAPH: &str = "paragraph";
pub const TABLE: &str = "table";
pub const TABLE_HEADER_LINE: &str = "table_header_line";

pub fn spec() -> Result<LanguageSpec, LexError> {
    LanguageSpec::builder("markup")
        .metadata("name", "Markup")
        .metadata("extension", "mkp")
        // `|-` matches nothing: the separator relies on the one character
        // lookahead to get from `|` to `|--`.
        .category(TABLE_HEADER_LINE, &[r"\|(?:-{2,}\|?)+"])
        .category(TABLE, &[r"\|"])
        .category(PARAGRAPH, &[r"\n{2,}"])
        .category(NEWLINE, &[r"\n"])
        .category("escape", &[r"\\[^\n]"])
        .category("bold", &[r"\*\*"])
        .category("italic", &["//"])
        .category("code", &["@@"])
        .category("title", &["#{1,6}"])
        .category(NORMAL, &[r"[^\n|*/@\\#]+", r"[*/@\\]"])
        .transform(pipeline())
        .build()
}

fn pipeline() -> TransformPipeline {
    TransformPipeline::new()
        .stage(
            SpliceMapper::new(NORMAL)
                .always(&["escape"])
                .unless_line_start(&["title"], &[NEWLINE, PARAGRAPH]),
        )
        .stage(MergeMapper::new(NORMAL))
        .stage(TableRetagMapper::new(TableCategories::default()))
}
