//! Built-in grammar descriptors
//!
//! One static per language. The six fixture languages (C#, Kotlin,
//! JavaScript, PHP, Swift, TypeScript) come first, followed by the other
//! C-family languages and Python.

use super::{BlockCommentRule, GrammarDescriptor, InterpolationRule, LineCommentRule, StringRule};

// =============================================================================
// Shared Rule Sets
// =============================================================================

const SLASH_LINE: &[LineCommentRule] = &[LineCommentRule::plain("//")];

const SLASH_LINE_WITH_DOC: &[LineCommentRule] =
    &[LineCommentRule::plain("//"), LineCommentRule::doc("///")];

const C_BLOCK: &[BlockCommentRule] = &[BlockCommentRule::new("/*", "*/", false, false)];

const C_BLOCK_WITH_DOC: &[BlockCommentRule] = &[
    BlockCommentRule::new("/*", "*/", false, false),
    BlockCommentRule::new("/**", "*/", false, true),
];

const NESTED_BLOCK_WITH_DOC: &[BlockCommentRule] = &[
    BlockCommentRule::new("/*", "*/", true, false),
    BlockCommentRule::new("/**", "*/", true, true),
];

/// `${expr}` as used by JavaScript, TypeScript and Kotlin
const DOLLAR_BRACE: &[InterpolationRule] = &[InterpolationRule::new("${", "}", Some("{"))];

// =============================================================================
// C#
// =============================================================================

const CSHARP_HOLE: &[InterpolationRule] = &[InterpolationRule {
    open: "{",
    close: "}",
    nest_open: Some("{"),
    doubled_is_literal: true,
}];

const CSHARP_RAW_HOLE: &[InterpolationRule] = &[InterpolationRule::new("{", "}", Some("{"))];

const CSHARP_STRINGS: &[StringRule] = &[
    StringRule::quoted("\"", false),
    StringRule::quoted_prefixed("$\"", "\"", false).with_interpolations(CSHARP_HOLE),
    StringRule::raw("@\"", "\"").with_doubled_close(),
    StringRule::raw("$@\"", "\"")
        .with_doubled_close()
        .with_interpolations(CSHARP_HOLE),
    StringRule::raw("@$\"", "\"")
        .with_doubled_close()
        .with_interpolations(CSHARP_HOLE),
    StringRule::raw("\"\"\"", "\"\"\""),
    StringRule::raw("$\"\"\"", "\"\"\"").with_interpolations(CSHARP_RAW_HOLE),
    StringRule::char_literal(),
];

pub static CSHARP: GrammarDescriptor = GrammarDescriptor {
    name: "csharp",
    aliases: &["c#", "cs"],
    extensions: &["cs", "csx"],
    line_comments: SLASH_LINE_WITH_DOC,
    block_comments: C_BLOCK_WITH_DOC,
    strings: CSHARP_STRINGS,
    preamble: &[],
};

// =============================================================================
// Kotlin
// =============================================================================

const KOTLIN_STRINGS: &[StringRule] = &[
    StringRule::quoted("\"", false).with_interpolations(DOLLAR_BRACE),
    StringRule::raw("\"\"\"", "\"\"\"").with_interpolations(DOLLAR_BRACE),
    StringRule::char_literal(),
];

pub static KOTLIN: GrammarDescriptor = GrammarDescriptor {
    name: "kotlin",
    aliases: &["kt"],
    extensions: &["kt", "kts"],
    line_comments: SLASH_LINE,
    block_comments: NESTED_BLOCK_WITH_DOC,
    strings: KOTLIN_STRINGS,
    preamble: &["#!"],
};

// =============================================================================
// JavaScript / TypeScript
// =============================================================================

const JS_STRINGS: &[StringRule] = &[
    StringRule::quoted("'", false),
    StringRule::quoted("\"", false),
    StringRule::quoted("`", true).with_interpolations(DOLLAR_BRACE),
];

pub static JAVASCRIPT: GrammarDescriptor = GrammarDescriptor {
    name: "javascript",
    aliases: &["js", "jsx", "node"],
    extensions: &["js", "mjs", "cjs", "jsx"],
    line_comments: SLASH_LINE,
    block_comments: C_BLOCK_WITH_DOC,
    strings: JS_STRINGS,
    preamble: &["#!"],
};

pub static TYPESCRIPT: GrammarDescriptor = GrammarDescriptor {
    name: "typescript",
    aliases: &["ts", "tsx"],
    extensions: &["ts", "mts", "cts", "tsx"],
    line_comments: SLASH_LINE,
    block_comments: C_BLOCK_WITH_DOC,
    strings: JS_STRINGS,
    preamble: &["#!"],
};

// =============================================================================
// PHP
// =============================================================================

const PHP_LINE: &[LineCommentRule] = &[
    LineCommentRule::plain("//"),
    LineCommentRule {
        marker: "#",
        doc: false,
        unless_followed_by: "[",
    },
];

const PHP_HOLES: &[InterpolationRule] = &[
    InterpolationRule::new("{$", "}", Some("{")),
    InterpolationRule::new("${", "}", Some("{")),
];

const PHP_STRINGS: &[StringRule] = &[
    StringRule::quoted("'", true),
    StringRule::quoted("\"", true).with_interpolations(PHP_HOLES),
    StringRule::quoted("`", true).with_interpolations(PHP_HOLES),
];

pub static PHP: GrammarDescriptor = GrammarDescriptor {
    name: "php",
    aliases: &[],
    extensions: &["php", "phtml"],
    line_comments: PHP_LINE,
    block_comments: C_BLOCK_WITH_DOC,
    strings: PHP_STRINGS,
    preamble: &["<?php", "#!"],
};

// =============================================================================
// Swift
// =============================================================================

const SWIFT_HOLE: &[InterpolationRule] = &[InterpolationRule::new("\\(", ")", Some("("))];

const SWIFT_RAW_HOLE: &[InterpolationRule] = &[InterpolationRule::new("\\#(", ")", Some("("))];

const SWIFT_STRINGS: &[StringRule] = &[
    StringRule::quoted("\"", false).with_interpolations(SWIFT_HOLE),
    StringRule::quoted("\"\"\"", true).with_interpolations(SWIFT_HOLE),
    StringRule::raw("#\"", "\"#").with_interpolations(SWIFT_RAW_HOLE),
    StringRule::raw("#\"\"\"", "\"\"\"#").with_interpolations(SWIFT_RAW_HOLE),
];

pub static SWIFT: GrammarDescriptor = GrammarDescriptor {
    name: "swift",
    aliases: &[],
    extensions: &["swift"],
    line_comments: SLASH_LINE_WITH_DOC,
    block_comments: NESTED_BLOCK_WITH_DOC,
    strings: SWIFT_STRINGS,
    preamble: &["#!"],
};

// =============================================================================
// C / C++ / Java / Go
// =============================================================================

const C_STRINGS: &[StringRule] = &[StringRule::quoted("\"", false), StringRule::char_literal()];

pub static C: GrammarDescriptor = GrammarDescriptor {
    name: "c",
    aliases: &[],
    extensions: &["c", "h"],
    line_comments: SLASH_LINE,
    block_comments: C_BLOCK,
    strings: C_STRINGS,
    preamble: &[],
};

const CPP_STRINGS: &[StringRule] = &[
    StringRule::quoted("\"", false),
    StringRule::raw("R\"(", ")\""),
    StringRule::char_literal(),
];

pub static CPP: GrammarDescriptor = GrammarDescriptor {
    name: "cpp",
    aliases: &["c++", "cxx"],
    extensions: &["cpp", "cc", "cxx", "hpp", "hxx", "hh"],
    line_comments: SLASH_LINE_WITH_DOC,
    block_comments: C_BLOCK_WITH_DOC,
    strings: CPP_STRINGS,
    preamble: &[],
};

const JAVA_STRINGS: &[StringRule] = &[
    StringRule::quoted("\"", false),
    StringRule::quoted("\"\"\"", true),
    StringRule::char_literal(),
];

pub static JAVA: GrammarDescriptor = GrammarDescriptor {
    name: "java",
    aliases: &[],
    extensions: &["java"],
    line_comments: SLASH_LINE,
    block_comments: C_BLOCK_WITH_DOC,
    strings: JAVA_STRINGS,
    preamble: &[],
};

const GO_STRINGS: &[StringRule] = &[
    StringRule::quoted("\"", false),
    StringRule::raw("`", "`"),
    StringRule::char_literal(),
];

pub static GO: GrammarDescriptor = GrammarDescriptor {
    name: "go",
    aliases: &["golang"],
    extensions: &["go"],
    line_comments: SLASH_LINE,
    block_comments: C_BLOCK,
    strings: GO_STRINGS,
    preamble: &[],
};

// =============================================================================
// Rust
// =============================================================================

const RUST_LINE: &[LineCommentRule] = &[
    LineCommentRule::plain("//"),
    LineCommentRule::doc("///"),
    LineCommentRule::doc("//!"),
];

const RUST_BLOCK: &[BlockCommentRule] = &[
    BlockCommentRule::new("/*", "*/", true, false),
    BlockCommentRule::new("/**", "*/", true, true),
    BlockCommentRule::new("/*!", "*/", true, true),
];

const RUST_STRINGS: &[StringRule] = &[
    StringRule::quoted("\"", true),
    StringRule::quoted_prefixed("b\"", "\"", true),
    StringRule::raw("r\"", "\""),
    StringRule::raw("r#\"", "\"#"),
    StringRule::raw("r##\"", "\"##"),
    StringRule::raw("br\"", "\""),
    StringRule::raw("br#\"", "\"#"),
    StringRule::char_literal(),
    StringRule {
        open: "b'",
        ..StringRule::char_literal()
    },
];

pub static RUST: GrammarDescriptor = GrammarDescriptor {
    name: "rust",
    aliases: &["rs"],
    extensions: &["rs"],
    line_comments: RUST_LINE,
    block_comments: RUST_BLOCK,
    strings: RUST_STRINGS,
    preamble: &[],
};

// =============================================================================
// Python
// =============================================================================

const PYTHON_HOLE: &[InterpolationRule] = &[InterpolationRule {
    open: "{",
    close: "}",
    nest_open: Some("{"),
    doubled_is_literal: true,
}];

const PYTHON_STRINGS: &[StringRule] = &[
    StringRule::quoted("\"", false),
    StringRule::quoted("'", false),
    StringRule::quoted("\"\"\"", true),
    StringRule::quoted("'''", true),
    StringRule::quoted_prefixed("f\"", "\"", false).with_interpolations(PYTHON_HOLE),
    StringRule::quoted_prefixed("f'", "'", false).with_interpolations(PYTHON_HOLE),
    StringRule::quoted_prefixed("f\"\"\"", "\"\"\"", true).with_interpolations(PYTHON_HOLE),
    StringRule::quoted_prefixed("f'''", "'''", true).with_interpolations(PYTHON_HOLE),
];

pub static PYTHON: GrammarDescriptor = GrammarDescriptor {
    name: "python",
    aliases: &["py"],
    extensions: &["py", "pyi"],
    line_comments: &[LineCommentRule::plain("#")],
    block_comments: &[],
    strings: PYTHON_STRINGS,
    preamble: &[],
};

/// Every built-in descriptor, in registration order
pub static ALL: &[&GrammarDescriptor] = &[
    &CSHARP,
    &KOTLIN,
    &JAVASCRIPT,
    &PHP,
    &SWIFT,
    &TYPESCRIPT,
    &C,
    &CPP,
    &JAVA,
    &GO,
    &RUST,
    &PYTHON,
];
