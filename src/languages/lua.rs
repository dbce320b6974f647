//! Lua.

use crate::error::LexError;
use crate::lexing::LanguageSpec;

pub fn spec() -> Result<LanguageSpec, LexError> {
    LanguageSpec::builder("lua")
        .metadata("name", "Lua")
        .metadata("extension", "lua")
        .category(
            "comment",
            &[
                // Long comments accept their own unterminated prefixes so that
                // scanning survives newlines inside them.
                r"--\[\[(?:[^\]]|\][^\]])*\]{0,2}",
                r"--(?:[^\[\n][^\n]*|\[(?:[^\[\n][^\n]*)?)?",
            ],
        )
        .category(
            "string",
            &[
                r#""(?:[^"\\\n]|\\.)*""#,
                r"'(?:[^'\\\n]|\\.)*'",
                r"\[\[(?:[^\]]|\][^\]])*\]{0,2}",
            ],
        )
        .category(
            "number",
            &[
                r"0[xX][0-9a-fA-F]+",
                r"\d+(?:\.\d+)?(?:[eE][+-]?\d+)?",
                r"\.\d+(?:[eE][+-]?\d+)?",
            ],
        )
        .wrong_category(
            "malformed_number",
            &[r"\d+[A-Za-z_][A-Za-z0-9_]*", r"\d+(?:\.\d+)?[eE][+-]?"],
        )
        .category(
            "keyword",
            &["and|break|do|else|elseif|end|false|for|function|goto|if|in|local|nil|not|or|repeat|return|then|true|until|while"],
        )
        .category("identifier", &[r"[A-Za-z_][A-Za-z0-9_]*"])
        .category(
            "operator",
            &[r"\.\.\.|\.\.|==|~=|<=|>=|<<|>>|//|::|[-+*/%^#&~|<>=(){}\[\];:,.]"],
        )
        .category("blank", &[r"\s+"])
        .build()
}
