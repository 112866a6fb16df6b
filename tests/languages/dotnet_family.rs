//! .NET language family integration tests
//!
//! Tests for C#: regular, interpolated, verbatim and raw string literals,
//! XML doc comments and character literals.

use crate::common::*;
use codeowner_scanner::SpanKind;

// =============================================================================
// C# TESTS
// =============================================================================

mod csharp_tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Fixture Classification
    // -------------------------------------------------------------------------

    #[test]
    fn test_csharp_fixture_interpolation() {
        let source = load_fixture("Example.cs");
        let result = scan_with("csharp", &source);

        assert_classified(&result.spans, &source, "$\"Hello, {name}!\"", SpanKind::StringLiteral);
        assert_classified(&result.spans, &source, "\"world\"", SpanKind::StringLiteral);
        assert_classified(&result.spans, &source, "/* Inline block comment */", SpanKind::BlockComment);
        assert_classified(
            &result.spans,
            &source,
            "/// <summary>XML doc comment.</summary>",
            SpanKind::DocComment,
        );
        assert_classified(&result.spans, &source, "int x = 42;", SpanKind::Code);
    }

    #[test]
    fn test_csharp_fixture_strings() {
        let source = load_fixture("Example.cs");
        let result = scan_with("csharp", &source);
        assert_eq!(
            texts_of(&result, &source, SpanKind::StringLiteral),
            vec!["$\"Hello, {name}!\"", "\"world\""]
        );
    }

    // -------------------------------------------------------------------------
    // Interpolation
    // -------------------------------------------------------------------------

    #[test]
    fn test_csharp_comment_markers_in_hole() {
        let source = r#"var s = $"{a /* not */ + "// nor"}"; // real"#;
        let result = scan_with("csharp", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec![r#"$"{a /* not */ + "// nor"}""#]
        );
        assert_eq!(texts_of(&result, source, SpanKind::LineComment), vec!["// real"]);
    }

    #[test]
    fn test_csharp_interpolated_string_closes_at_quote() {
        let source = r#"$"a" + y // c"#;
        let result = scan_with("csharp", source);
        assert_eq!(
            classified(&result, source),
            vec![
                (SpanKind::StringLiteral, r#"$"a""#.to_string()),
                (SpanKind::Code, " + y ".to_string()),
                (SpanKind::LineComment, "// c".to_string()),
            ]
        );
    }

    #[test]
    fn test_csharp_plain_string_does_not_interpolate() {
        // Without `$` the brace is plain content and the quote still closes
        let source = r#"var s = "{"; // c"#;
        let result = scan_with("csharp", source);
        assert_eq!(texts_of(&result, source, SpanKind::StringLiteral), vec![r#""{""#]);
        assert_eq!(texts_of(&result, source, SpanKind::LineComment), vec!["// c"]);
    }

    #[test]
    fn test_csharp_escaped_braces() {
        let source = r#"$"{{literal}} {value:N2}" + x"#;
        let result = scan_with("csharp", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec![r#"$"{{literal}} {value:N2}""#]
        );
    }

    // -------------------------------------------------------------------------
    // String Forms
    // -------------------------------------------------------------------------

    #[test]
    fn test_csharp_verbatim_string() {
        let source = "var p = @\"C:\\temp\\\"; // path";
        let result = scan_with("csharp", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec!["@\"C:\\temp\\\""]
        );
        assert_eq!(texts_of(&result, source, SpanKind::LineComment), vec!["// path"]);
    }

    #[test]
    fn test_csharp_verbatim_interpolated_multiline() {
        let source = "var q = $@\"line {n}\n\"\"quoted\"\" // text\";\nx();";
        let result = scan_with("csharp", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec!["$@\"line {n}\n\"\"quoted\"\" // text\""]
        );
        assert_eq!(result.comments().count(), 0);
    }

    #[test]
    fn test_csharp_raw_string_literal() {
        let source = "var json = \"\"\"\n{ \"k\": \"// v\" }\n\"\"\";";
        let result = scan_with("csharp", source);
        assert_eq!(result.spans_of(SpanKind::StringLiteral).count(), 1);
        assert_eq!(result.comments().count(), 0);
    }

    #[test]
    fn test_csharp_char_literals() {
        let source = "char q = '\"'; char s = '/'; // c";
        let result = scan_with("csharp", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec!["'\"'", "'/'"]
        );
        assert_eq!(texts_of(&result, source, SpanKind::LineComment), vec!["// c"]);
    }

    // -------------------------------------------------------------------------
    // Edge Cases
    // -------------------------------------------------------------------------

    #[test]
    fn test_csharp_doc_block_comment() {
        let source = "/** <summary>x</summary> */\nclass A {}";
        let result = scan_with("csharp", source);
        assert_eq!(result.spans[0].kind, SpanKind::DocComment);
    }

    #[test]
    fn test_csharp_leading_annotations_stop_at_namespace() {
        let source = "// CodeOwner: @a\nnamespace N;\n// CodeOwner: @b\n";
        let result = scan_with("csharp", source);
        assert_eq!(result.annotations.len(), 1);
        assert_eq!(result.annotations[0].value, "@a");
    }
}
