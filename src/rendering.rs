//! HTML rendering of token streams.
//!
//! Each token becomes `<span class="CATEGORY">TEXT</span>` with `&`, `<` and `>`
//! escaped, except tokens whose category is listed as raw: those are copied
//! verbatim (whitespace, usually).
//!
//! With `annotate` set, single spaces are inserted between some adjacent tokens.
//! This is cosmetic pretty-printing for streams lexed with whitespace
//! discarded; it is not part of the token stream.

use crate::lexing::token::Token;

/// Categories treated as operands by the spacing table.
const OPERANDS: &[&str] = &[
    "identifier",
    "number",
    "integer",
    "float",
    "string",
    "special",
    "builtin",
    "nonterminal",
    "terminal",
];

const OPERATORS: &[&str] = &["operator", "definition"];

const ASSIGNMENTS: &[&str] = &["=", "::=", ":="];

/// Render `tokens` as HTML.
pub fn render<S: AsRef<str>>(tokens: &[Token], raw_categories: &[S], annotate: bool) -> String {
    let mut out = String::new();
    let mut prev: Option<&Token> = None;

    for token in tokens {
        if annotate && prev.is_some_and(|p| needs_space(p, token)) {
            out.push(' ');
        }

        if raw_categories.iter().any(|r| r.as_ref() == token.category) {
            out.push_str(&token.text);
        } else {
            out.push_str("<span class=\"");
            out.push_str(&token.category);
            out.push_str("\">");
            escape_into(&token.text, &mut out);
            out.push_str("</span>");
        }
        prev = Some(token);
    }

    out
}

/// Escape `&`, `<` and `>` onto `out`.
fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

/// The spacing table. Whitespace tokens never get extra spaces around them.
fn needs_space(prev: &Token, next: &Token) -> bool {
    if is_blank(prev) || is_blank(next) {
        return false;
    }

    let prev_operand = OPERANDS.contains(&prev.category.as_str());
    let prev_keyword = prev.is("keyword");
    let prev_operator = OPERATORS.contains(&prev.category.as_str());
    let next_operand = OPERANDS.contains(&next.category.as_str());
    let next_keyword = next.is("keyword");
    let next_operator = OPERATORS.contains(&next.category.as_str());

    // Operand followed by an operator or keyword: `a ==`, `5 then`.
    if prev_operand && (next_operator || next_keyword) {
        return true;
    }
    // Keyword followed by an operand or another keyword: `if a`, `local function`.
    if prev_keyword && (next_operand || next_keyword) {
        return true;
    }
    // Spaces around assignment.
    if is_assignment(prev) || is_assignment(next) {
        return true;
    }
    // After a comma.
    if (prev.is("separator") || prev.is("punctuation") || prev.is("operator")) && prev.text == ","
    {
        return true;
    }
    // After a standalone operator.
    prev_operator && !next_operator
}

fn is_assignment(token: &Token) -> bool {
    OPERATORS.contains(&token.category.as_str()) && ASSIGNMENTS.contains(&token.text.as_str())
}

fn is_blank(token: &Token) -> bool {
    token.text.chars().all(char::is_whitespace)
}
