//! The markup transformation pipeline, driven through the bundled language.

use patlex::languages::markup;
use patlex::lexing::transformations::{MergeMapper, SpliceMapper, TokenMapper, TransformPipeline};
use patlex::testing::assertions::assert_covers;
use patlex::testing::factories::{categories, mk_tokens};
use patlex::{LanguageSpec, LexError, Lexer, Token};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn lexer() -> Lexer {
    Lexer::new(Arc::new(markup::spec().expect("markup to build")))
}

#[rstest]
fn test_escaped_delimiter_stays_text(lexer: Lexer) {
    let source = r"a \| b";
    let tokens = lexer.lex(source).unwrap();
    assert_eq!(tokens, mk_tokens(&[("normal", source, 0)]));
}

#[rstest]
fn test_leading_escape_prepends_to_following_text(lexer: Lexer) {
    let tokens = lexer.lex(r"\*not bold").unwrap();
    assert_eq!(tokens, mk_tokens(&[("normal", r"\*not bold", 0)]));
}

#[rstest]
fn test_escape_between_markers_becomes_text(lexer: Lexer) {
    let tokens = lexer.lex(r"**\***").unwrap();
    assert_eq!(
        tokens,
        mk_tokens(&[("bold", "**", 0), ("normal", r"\*", 2), ("bold", "**", 4)])
    );
}

#[rstest]
fn test_title_after_paragraph_is_kept(lexer: Lexer) {
    let tokens = lexer.lex("intro\n\n## Part").unwrap();
    assert_eq!(
        categories(&tokens),
        vec!["normal", "paragraph", "title", "normal"]
    );
}

#[rstest]
fn test_two_tables_separated_by_paragraph(lexer: Lexer) {
    let source = "|a|\n\n|b|";
    let tokens = lexer.lex(source).unwrap();
    assert_covers(source, &tokens);
    assert_eq!(
        categories(&tokens),
        vec![
            "table_line_start",
            "normal",
            "table_line_end",
            "newline",
            "table_line_start",
            "normal",
            "table_line_end",
        ]
    );
    assert_eq!(tokens[3].text, "\n\n");
}

#[rstest]
#[case("x |a|", &["normal", "table_line_start", "normal", "table_line_end"])]
#[case("a | b|", &["normal", "table_line_start", "normal", "table_line_end"])]
#[case(
    "x |a|\n|b|",
    &[
        "normal",
        "table_line_start",
        "normal",
        "table_line_end",
        "newline",
        "table_line_start",
        "normal",
        "table_line_end",
    ]
)]
#[case("see |x| here", &["normal", "table_line_start", "normal", "table", "normal"])]
fn test_row_after_inline_text(lexer: Lexer, #[case] source: &str, #[case] expected: &[&str]) {
    let tokens = lexer.lex(source).unwrap();
    assert_covers(source, &tokens);
    assert_eq!(categories(&tokens), expected);
}

#[rstest]
fn test_header_row_promoted(lexer: Lexer) {
    let source = "|name|age|\n|----|---|\n|ann|7|\n";
    let tokens = lexer.lex(source).unwrap();
    assert_covers(source, &tokens);
    assert_eq!(tokens[0].category, "table_header_line_start");
    assert_eq!(
        tokens
            .iter()
            .filter(|t| t.is("table_header_line_start"))
            .count(),
        1
    );
    assert!(tokens.iter().any(|t| t.is("table_header_line")));
}

#[rstest]
fn test_header_without_row_fails(lexer: Lexer) {
    let err = lexer.lex("just text\n|----|").unwrap_err();
    match err {
        LexError::TransformInvariant(e) => assert_eq!(e.stage, "table-retag"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn test_render_keeps_newlines_raw(lexer: Lexer) {
    let html = lexer.render("**x**\n& y", &["newline"], false).unwrap();
    assert_eq!(
        html,
        "<span class=\"bold\">**</span><span class=\"normal\">x</span><span class=\"bold\">**</span>\n<span class=\"normal\">&amp; y</span>"
    );
}

/// A pipeline can be attached to any specification, not just markup.
#[test]
fn test_custom_pipeline_on_custom_language() {
    let pipeline = TransformPipeline::new()
        .stage(SpliceMapper::new("word").always(&["glue"]))
        .stage(MergeMapper::new("word"));
    let spec = LanguageSpec::builder("glued")
        .category("glue", &["~"])
        .category("word", &["[a-z]+"])
        .category("blank", &[" +"])
        .transform(pipeline)
        .build()
        .unwrap();
    let tokens = Lexer::new(Arc::new(spec)).lex("ab~cd ef").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new("word", "ab~cd", 0),
            Token::new("blank", " ", 5),
            Token::new("word", "ef", 6),
        ]
    );
}

#[test]
fn test_merge_mapper_standalone() {
    let merged = MergeMapper::new("normal")
        .map(mk_tokens(&[("normal", "a", 0), ("normal", "b", 1), ("bold", "**", 2)]))
        .unwrap();
    assert_eq!(merged, mk_tokens(&[("normal", "ab", 0), ("bold", "**", 2)]));
}
