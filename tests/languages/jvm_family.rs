//! JVM language family integration tests
//!
//! Tests for Kotlin and Java: string templates, raw and text blocks,
//! nested block comments and KDoc/Javadoc.

use crate::common::*;
use codeowner_scanner::SpanKind;

// =============================================================================
// KOTLIN TESTS
// =============================================================================

mod kotlin_tests {
    use super::*;

    #[test]
    fn test_kotlin_fixture_classification() {
        let source = load_fixture("Example.kt");
        let result = scan_with("kotlin", &source);

        assert_classified(&result.spans, &source, "\"Hello, $name!\"", SpanKind::StringLiteral);
        assert_classified(
            &result.spans,
            &source,
            "/** KDoc comment for the function. */",
            SpanKind::DocComment,
        );
        assert_classified(&result.spans, &source, "val x = 42", SpanKind::Code);
        assert_eq!(
            texts_of(&result, &source, SpanKind::StringLiteral),
            vec!["\"Hello, $name!\"", "\"world\""]
        );
    }

    #[test]
    fn test_kotlin_brace_template() {
        let source = "val s = \"${map[\"k\"] ?: \"/*\"}\" // c";
        let result = scan_with("kotlin", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::StringLiteral),
            vec!["\"${map[\"k\"] ?: \"/*\"}\""]
        );
        assert_eq!(texts_of(&result, source, SpanKind::LineComment), vec!["// c"]);
    }

    #[test]
    fn test_kotlin_raw_string() {
        let source = "val re = \"\"\"\n  \\d+ // digits ${n}\n\"\"\".toRegex()";
        let result = scan_with("kotlin", source);
        assert_eq!(result.spans_of(SpanKind::StringLiteral).count(), 1);
        assert_eq!(result.comments().count(), 0);
        assert_classified(&result.spans, source, ".toRegex()", SpanKind::Code);
    }

    #[test]
    fn test_kotlin_nested_block_comment() {
        let source = "/* outer /* inner */ still outer */ val y = 1";
        let result = scan_with("kotlin", source);
        assert_eq!(
            texts_of(&result, source, SpanKind::BlockComment),
            vec!["/* outer /* inner */ still outer */"]
        );
        assert!(result.is_clean());
    }

    #[test]
    fn test_kotlin_unbalanced_nesting_is_unterminated() {
        let source = "/* a /* b */ c";
        let result = scan_with("kotlin", source);
        assert_eq!(result.spans.len(), 1);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_kotlin_char_literal() {
        let source = "val c = '\"' // quote char";
        let result = scan_with("kotlin", source);
        assert_eq!(texts_of(&result, source, SpanKind::StringLiteral), vec!["'\"'"]);
        assert_eq!(texts_of(&result, source, SpanKind::LineComment), vec!["// quote char"]);
    }
}

// =============================================================================
// JAVA TESTS
// =============================================================================

mod java_tests {
    use super::*;

    #[test]
    fn test_java_fixture_classification() {
        let source = load_fixture("Example.java");
        let result = scan_with("java", &source);

        assert_classified(
            &result.spans,
            &source,
            "/** Javadoc comment for the class. */",
            SpanKind::DocComment,
        );
        assert_classified(&result.spans, &source, "\"Hello, \"", SpanKind::StringLiteral);
        assert_classified(&result.spans, &source, " + name + ", SpanKind::Code);
        assert_eq!(result.annotations[0].value, "@java_owner");
    }

    #[test]
    fn test_java_text_block() {
        let source = "String sql = \"\"\"\n    SELECT 1; -- \"quoted\" /* x */\n    \"\"\";";
        let result = scan_with("java", source);
        assert_eq!(result.spans_of(SpanKind::StringLiteral).count(), 1);
        assert_eq!(result.comments().count(), 0);
    }

    #[test]
    fn test_java_string_does_not_interpolate() {
        let source = "String s = \"${x}\"; // c";
        let result = scan_with("java", source);
        assert_eq!(texts_of(&result, source, SpanKind::StringLiteral), vec!["\"${x}\""]);
        assert_eq!(texts_of(&result, source, SpanKind::LineComment), vec!["// c"]);
    }

    #[test]
    fn test_java_block_comments_do_not_nest() {
        let source = "/* a /* b */ int c;";
        let result = scan_with("java", source);
        assert_eq!(texts_of(&result, source, SpanKind::BlockComment), vec!["/* a /* b */"]);
        assert!(result.is_clean());
    }
}
