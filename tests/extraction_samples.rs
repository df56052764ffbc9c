//! String extraction over the sample drawings and hand-built object trees

use rstest::rstest;
use tgifer::tgif::extraction::{extract_strings, Extractor};
use tgifer::tgif::parsing::parse_document;
use tgifer::tgif::testing::{assert_program, parse_clean, TgifSamples};

#[test]
fn test_hello_sample() {
    let doc = TgifSamples::get_document("hello.obj");
    assert_program(&doc)
        .clean()
        .statement(0, |s| {
            s.comment("%TGIF 4.2.5");
        })
        .statement(1, |s| {
            s.expression(|e| {
                e.call("state", 42);
            });
        });
    assert_eq!(extract_strings(&doc.program), vec!["Hello, tgif!"]);
}

#[test]
fn test_multiline_sample() {
    let doc = TgifSamples::get_document("multiline.obj");
    let extraction = Extractor::new().extract(&doc.program);
    assert_eq!(
        extraction.strings,
        vec!["First words second line", "It's \"quoted\""]
    );
    assert!(extraction.anomalies.is_empty());
}

#[test]
fn test_multiline_sample_with_separator() {
    let doc = TgifSamples::get_document("multiline.obj");
    let strings = Extractor::new()
        .with_grouping_separator("|")
        .extract(&doc.program)
        .strings;
    assert_eq!(strings[0], "First|words|second line");
}

#[rstest]
#[case::segment(r#"str_seg(1, "hello")"#, &["hello"])]
#[case::segment_last_argument_wins(r#"str_seg("a", "b", "c")"#, &["c"])]
#[case::segment_non_string(r#"str_seg("a", 42)"#, &["42"])]
#[case::block_of_two_arrays(r#"str_block([str_seg("a")], [str_seg("b")])"#, &["a", "b"])]
#[case::nested_containers(
    r#"minilines([mini_line([str_block([str_seg("x")])]), mini_line([str_block([str_seg("y")])])])"#,
    &["x", "y"]
)]
#[case::paragraph_joins(
    r#"text([minilines([mini_line([str_block([str_seg("a"), str_seg("b")])])])])"#,
    &["a b"]
)]
#[case::paragraph_without_text("text(1, 2)", &[""])]
#[case::unknown_call_skipped(r#"box([str_seg("hidden")])"#, &[])]
#[case::non_array_arguments_ignored(r#"mini_line(str_seg("x"), [str_seg("y")])"#, &["y"])]
#[case::top_level_array(r#"[str_seg("a"), 1, str_seg("b")]"#, &["a", "b"])]
#[case::comments_are_inert("% str_seg(\"no\")\nstr_seg(\"yes\")", &["yes"])]
#[case::statements_in_order(r#"str_seg("1"). str_seg("2")"#, &["1", "2"])]
fn test_extract(#[case] source: &str, #[case] expected: &[&str]) {
    let doc = parse_clean(source);
    assert_eq!(extract_strings(&doc.program), expected);
}

#[rstest]
#[case::identifier("[label]", "Identifier", "label")]
#[case::infix("[1 + 2]", "InfixExpression", "(1 + 2)")]
#[case::prefix("str_block([-x])", "PrefixExpression", "(-x)")]
#[case::index("[a[0]]", "IndexExpression", "(a[0])")]
#[case::function("[fn(x) { x }]", "FunctionLiteral", "fn(x) { x }")]
#[case::empty_segment("str_seg()", "CallExpression", "str_seg()")]
fn test_anomalies(#[case] source: &str, #[case] node_type: &str, #[case] text: &str) {
    let doc = parse_clean(source);
    let extraction = Extractor::new().with_anomaly_reports(false).extract(&doc.program);
    assert!(extraction.strings.is_empty());
    assert_eq!(extraction.anomalies.len(), 1);
    assert_eq!(extraction.anomalies[0].node_type, node_type);
    assert_eq!(extraction.anomalies[0].text, text);
}

#[test]
fn test_anomaly_does_not_stop_the_walk() {
    let doc = parse_document(r#"str_block([oops, str_seg("after")])"#);
    let extraction = Extractor::new().extract(&doc.program);
    assert_eq!(extraction.strings, vec!["after"]);
    assert_eq!(
        extraction.anomalies[0].to_string(),
        "unsupported: oops [Identifier]"
    );
}

#[test]
fn test_best_effort_tree_still_extracts() {
    let doc = parse_document(r#"str_block([str_seg("kept")"#);
    assert!(!doc.is_clean());
    assert_eq!(extract_strings(&doc.program), vec!["kept"]);
}
