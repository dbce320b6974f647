//! Ash, a small scripting language with newline-terminated statements.

use crate::error::LexError;
use crate::lexing::LanguageSpec;

pub fn spec() -> Result<LanguageSpec, LexError> {
    LanguageSpec::builder("ash")
        .metadata("name", "Ash")
        .metadata("extension", "ash")
        .category("comment", &[r"#[^\n]*"])
        .category("string", &[r#""(?:[^"\\\n]|\\.)*""#])
        .category("float", &[r"\d+\.\d+"])
        .category("integer", &[r"\d+"])
        .wrong_category("malformed_number", &[r"\d+[A-Za-z_][A-Za-z0-9_]*"])
        .category(
            "keyword",
            &["if|then|else|elif|end|while|do|for|in|return|fun|var|and|or|not|true|false|nil|break"],
        )
        .category("special", &["writeln|write|readln|len|str|int|float"])
        .category("identifier", &[r"[A-Za-z_][A-Za-z0-9_]*"])
        .category("operator", &["==|!=|<=|>=|[-+*/%<>=!]"])
        .category("separator", &[r"[(),\[\]{}.:;]"])
        .category("newline", &[r"\n"])
        .category("blank", &[r"[ \t\r]+"])
        .build()
}
