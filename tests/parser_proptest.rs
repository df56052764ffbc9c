//! Property-based tests for the tgif tokenizer and parser
//!
//! The expression strategy only produces well-formed source, so every generated
//! program must parse cleanly and its canonical render must be a fixed point.
//! Arbitrary text is used to check that neither stage ever panics.

use proptest::prelude::*;
use tgifer::tgif::ast::Node;
use tgifer::tgif::lexing::tokenize;
use tgifer::tgif::parsing::parse_document;
use tgifer::tgif::token::TokenKind;

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}".prop_filter("keywords are not identifiers", |name| {
        !matches!(name.as_str(), "fn" | "true" | "false")
    })
}

fn string_literal_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.!%'\"\\\\]{0,10}".prop_map(|content| {
        let escaped = content.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    })
}

fn leaf_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        "[0-9]{1,6}",
        "[0-9]{1,3}\\.[0-9]{1,3}",
        string_literal_strategy(),
        prop_oneof![Just("true".to_string()), Just("false".to_string())],
    ]
}

fn infix_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("=="),
        Just("!="),
        Just("<"),
        Just(">"),
    ]
}

/// Generate well-formed expressions of every kind
fn expression_strategy() -> impl Strategy<Value = String> {
    leaf_strategy().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (prop_oneof![Just("-"), Just("!")], inner.clone())
                .prop_map(|(op, right)| format!("{}{}", op, right)),
            (inner.clone(), infix_operator_strategy(), inner.clone())
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
            inner.clone().prop_map(|e| format!("({})", e)),
            (identifier_strategy(), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(callee, args)| format!("{}({})", callee, args.join(", "))),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|elements| format!("[{}]", elements.join(", "))),
            (inner.clone(), inner.clone())
                .prop_map(|(left, index)| format!("{}[{}]", left, index)),
            (prop::collection::vec(identifier_strategy(), 0..3), inner)
                .prop_map(|(params, body)| format!("fn({}) {{ {} }}", params.join(", "), body)),
        ]
    })
}

/// Generate programs: expression statements and comment lines
fn program_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => expression_strategy().prop_map(|e| format!("{}.", e)),
            1 => "[ -~]{0,20}".prop_map(|text| format!("%{}", text)),
        ],
        0..6,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_generated_programs_parse_cleanly(source in program_strategy()) {
        let doc = parse_document(&source);
        prop_assert!(doc.is_clean(), "{:?}: {:?}", source, doc.errors());
    }

    #[test]
    fn test_render_is_a_fixed_point(source in program_strategy()) {
        let first = parse_document(&source).program.render();
        let second = parse_document(&first);
        prop_assert!(second.is_clean(), "{:?}: {:?}", first, second.errors());
        prop_assert_eq!(second.program.render(), first);
    }

    #[test]
    fn test_parse_never_panics(source in any::<String>()) {
        let doc = parse_document(&source);
        for diagnostic in &doc.diagnostics {
            prop_assert!(diagnostic.span.end <= source.len());
        }
    }

    #[test]
    fn test_parse_never_panics_on_ascii(source in "[ -~\n]{0,64}") {
        let _doc = parse_document(&source);
    }

    #[test]
    fn test_tokens_are_ordered_and_end_with_eof(source in "[ -~\n]{0,64}") {
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
    }
}
