//! JavaScript language family integration tests
//!
//! Tests for JavaScript and TypeScript: template literals with `${}`
//! interpolation, quote styles, JSDoc and shebang lines.

use crate::common::*;
use codeowner_scanner::SpanKind;

// =============================================================================
// JAVASCRIPT TESTS
// =============================================================================

mod javascript_tests {
    use super::*;

    #[test]
    fn test_javascript_fixture_classification() {
        let source = load_fixture("example.js");
        let result = scan_with("javascript", &source);

        assert_classified(&result.spans, &source, "`Hello, ${name}!`", SpanKind::StringLiteral);
        assert_classified(&result.spans, &source, "\"world\"", SpanKind::StringLiteral);
        assert_classified(&result.spans, &source, "// Inline comment", SpanKind::LineComment);
        assert_classified(&result.spans, &source, "/* Inline block comment */", SpanKind::BlockComment);
        assert_classified(&result.spans, &source, "console.log(result);", SpanKind::Code);
    }

    #[test]
    fn test_javascript_template_spans_lines() {
        let source = "const q = `\n  SELECT * -- ${table}\n  // not a comment\n`;\nrun(q);";
        let result = scan_with("javascript", source);
        assert_eq!(result.spans_of(SpanKind::StringLiteral).count(), 1);
        assert_eq!(result.comments().count(), 0);
        assert!(result.is_clean());
    }

    #[test]
    fn test_javascript_nested_template_in_hole() {
        let source = "`outer ${cond ? `inner ${x}` : '/*'} end` /* real */";
        let result = scan_with("javascript", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec!["`outer ${cond ? `inner ${x}` : '/*'} end`"]
        );
        assert_eq!(texts_of(&result, source, SpanKind::BlockComment), vec!["/* real */"]);
    }

    #[test]
    fn test_javascript_object_literal_in_hole() {
        let source = "`${ {a: 1}.a }` // tail";
        let result = scan_with("javascript", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec!["`${ {a: 1}.a }`"]
        );
        assert_eq!(texts_of(&result, source, SpanKind::LineComment), vec!["// tail"]);
    }

    #[test]
    fn test_javascript_single_quotes_and_urls() {
        let source = "fetch('https://example.com/a'); // go";
        let result = scan_with("javascript", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec!["'https://example.com/a'"]
        );
        assert_eq!(texts_of(&result, source, SpanKind::LineComment), vec!["// go"]);
    }

    #[test]
    fn test_javascript_dollar_without_brace_is_text() {
        let source = "`cost: $5 {not a hole}` // c";
        let result = scan_with("javascript", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec!["`cost: $5 {not a hole}`"]
        );
    }

    #[test]
    fn test_javascript_jsdoc() {
        let source = "/**\n * CodeOwner: @docs_team\n * @param {string} name\n */\nfunction f(name) {}";
        let result = scan_with("javascript", source);
        assert_eq!(result.spans[0].kind, SpanKind::DocComment);
        assert_eq!(result.annotations.len(), 1);
        assert_eq!(result.annotations[0].value, "@docs_team");
    }

    #[test]
    fn test_javascript_shebang_before_annotation() {
        let source = "#!/usr/bin/env node\n// CodeOwner: @cli_team\nmain();\n";
        let result = scan_with("javascript", source);
        assert_eq!(result.annotations.len(), 1);
        assert_eq!(result.annotations[0].value, "@cli_team");
    }

    #[test]
    fn test_javascript_unterminated_template() {
        let source = "let s = `never ${closed";
        let result = scan_with("javascript", source);
        assert_eq!(result.errors.len(), 1);
        assert_full_coverage(&result.spans, source.as_bytes(), "unterminated template");
        assert_eq!(result.spans.last().map(|s| s.kind), Some(SpanKind::StringLiteral));
    }
}

// =============================================================================
// TYPESCRIPT TESTS
// =============================================================================

mod typescript_tests {
    use super::*;

    #[test]
    fn test_typescript_fixture_classification() {
        let source = load_fixture("example.ts");
        let result = scan_with("typescript", &source);

        assert_classified(&result.spans, &source, "`Hello, ${name}!`", SpanKind::StringLiteral);
        assert_classified(&result.spans, &source, "const x: number = 42;", SpanKind::Code);
        assert_classified(&result.spans, &source, "// Another single-line comment", SpanKind::LineComment);
        assert_eq!(
            texts_of(&result, &source, SpanKind::StringLiteral),
            vec!["`Hello, ${name}!`", "\"world\""]
        );
    }

    #[test]
    fn test_typescript_generic_angle_brackets() {
        let source = "const m: Map<string, Array<number>> = new Map(); // typed";
        let result = scan_with("typescript", source);
        assert_eq!(
            classified(&result, source),
            vec![
                (SpanKind::Code, "const m: Map<string, Array<number>> = new Map(); ".to_string()),
                (SpanKind::LineComment, "// typed".to_string()),
            ]
        );
    }

    #[test]
    fn test_typescript_hole_with_comment_markers() {
        let source = "const s = `${a /* b */ + \"// c\"}`; // real";
        let result = scan_with("ts", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec!["`${a /* b */ + \"// c\"}`"]
        );
        assert_eq!(texts_of(&result, source, SpanKind::LineComment), vec!["// real"]);
    }

    #[test]
    fn test_typescript_annotation_positions() {
        let source = load_fixture("example.ts");
        let result = scan_with("typescript", &source);
        let first = &result.spans[0];
        assert_eq!((first.line, first.column), (1, 1));

        let block = result.spans_of(SpanKind::BlockComment).next().unwrap();
        assert_eq!((block.line, block.column), (5, 1));
    }
}
