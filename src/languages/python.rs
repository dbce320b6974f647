//! Python (single-line strings only).

use crate::error::LexError;
use crate::lexing::LanguageSpec;

pub fn spec() -> Result<LanguageSpec, LexError> {
    LanguageSpec::builder("python")
        .metadata("name", "Python")
        .metadata("extension", "py")
        .category("comment", &[r"#[^\n]*"])
        .category(
            "string",
            &[r#""(?:[^"\\\n]|\\.)*""#, r"'(?:[^'\\\n]|\\.)*'"],
        )
        .category(
            "number",
            &[
                r"0[xX][0-9a-fA-F_]+",
                r"0[oO][0-7_]+",
                r"0[bB][01_]+",
                r"\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?j?",
                r"\.\d+(?:[eE][+-]?\d+)?j?",
            ],
        )
        .wrong_category("malformed_number", &[r"\d+(?:\.\d+)?[eE][+-]?"])
        .category(
            "keyword",
            &["False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield"],
        )
        .category(
            "builtin",
            &["print|len|range|int|str|float|list|dict|set|tuple|open|isinstance|enumerate|zip|map|filter|sorted|sum|min|max|abs|super"],
        )
        .category("identifier", &[r"[A-Za-z_][A-Za-z0-9_]*"])
        .category(
            "operator",
            &[r"\*\*=?|//=?|>>=?|<<=?|->|:=|\.\.\.|[-+*/%@&|^<>=!]=?|~"],
        )
        .category("separator", &[r"[()\[\]{},:;.]"])
        .category("newline", &[r"\r?\n"])
        .category("blank", &[r"[ \t]+|\\\r?\n"])
        .build()
}
