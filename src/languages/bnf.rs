//! Backus-Naur form grammars.

use crate::error::LexError;
use crate::lexing::LanguageSpec;

pub fn spec() -> Result<LanguageSpec, LexError> {
    LanguageSpec::builder("bnf")
        .metadata("name", "BNF")
        .metadata("extension", "bnf")
        .category("comment", &[r";[^\n]*"])
        .category("nonterminal", &[r"<[A-Za-z][A-Za-z0-9_ -]*>"])
        .category("terminal", &[r#""[^"\n]*""#, r"'[^'\n]*'"])
        .category("definition", &["::="])
        .category("operator", &[r"[|\[\]{}()*+?]"])
        .category("blank", &[r"\s+"])
        .build()
}
