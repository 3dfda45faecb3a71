//! Property-based tests for ns_logger using proptest

use ns_logger::core::format::{self, Dialect};
use ns_logger::core::namespace_column;
use ns_logger::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Event),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Every tag is exactly five characters and starts with the level name
    #[test]
    fn test_log_level_tag_width(level in any_level()) {
        prop_assert_eq!(level.tag().chars().count(), 5);
        prop_assert!(level.tag().starts_with(level.to_str()));
    }
}

// ============================================================================
// Namespace Column Tests
// ============================================================================

proptest! {
    /// A positive width always yields exactly that many characters
    #[test]
    fn test_namespace_column_exact_width(ns in "[a-zA-Z0-9:_-]{0,40}", width in 1i32..32) {
        let column = namespace_column(&ns, width);
        prop_assert_eq!(column.chars().count(), width as usize);
        prop_assert!(column.starts_with(ns.trim().chars().take(width as usize).collect::<String>().as_str()));
    }

    /// A non-positive width only trims
    #[test]
    fn test_namespace_column_unbounded(ns in "\\s{0,3}[a-z]{1,20}\\s{0,3}", width in -5i32..=0) {
        prop_assert_eq!(namespace_column(&ns, width), ns.trim());
    }
}

// ============================================================================
// Substitution Tests
// ============================================================================

proptest! {
    /// Escaped text survives substitution unchanged, whatever arguments are passed
    #[test]
    fn test_escape_is_inert(text in ".{0,60}", arg in ".{0,10}") {
        let escaped = format::escape(&text);
        prop_assert_eq!(format::count_placeholders(&escaped), 0);
        prop_assert_eq!(format::substitute(&escaped, &[LogArg::from(arg)], Dialect::File), text);
    }

    /// Text without percent signs is returned verbatim
    #[test]
    fn test_plain_text_verbatim(text in "[^%]{0,80}") {
        prop_assert_eq!(format::substitute(&text, &[], Dialect::File), text.clone());
        prop_assert_eq!(format::substitute(&text, &[], Dialect::Console), text);
    }

    /// `%s` substitution inserts each string argument in order
    #[test]
    fn test_string_substitution(a in "[^%]{0,20}", b in "[^%]{0,20}") {
        let out = format::substitute("<%s|%s>", &[a.as_str().into(), b.as_str().into()], Dialect::File);
        prop_assert_eq!(out, format!("<{}|{}>", a, b));
    }

    /// `%d` renders any i64 exactly like Display
    #[test]
    fn test_integer_substitution(n in any::<i64>()) {
        prop_assert_eq!(format::substitute("%d", &[n.into()], Dialect::File), n.to_string());
    }

    /// File normalization leaves no object spelling other than `%j`
    #[test]
    fn test_file_normalization_canonical(parts in proptest::collection::vec(prop_oneof![
        Just("%j"), Just("%J"), Just("%o"), Just("%O"), Just("text "), Just("%%O"),
    ], 0..12)) {
        let template: String = parts.concat();
        let normalized = format::normalize_for_file(&template);
        prop_assert_eq!(format::count_placeholders(&normalized), format::count_placeholders(&template));

        let without_escapes = normalized.replace("%%", "");
        prop_assert!(!without_escapes.contains("%J"));
        prop_assert!(!without_escapes.contains("%o"));
        prop_assert!(!without_escapes.contains("%O"));
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

proptest! {
    /// Explicit overrides always win over defaults
    #[test]
    fn test_resolve_overrides(
        enabled in any::<bool>(),
        colors in any::<bool>(),
        debug in any::<bool>(),
        width in -10i32..100,
        ns in "[a-z]{1,16}",
    ) {
        let options = LoggerOptions::new()
            .enabled(enabled)
            .colors(colors)
            .debug(debug)
            .ns_width(width)
            .namespace(ns.clone());
        let config = LoggerConfig::resolve(&options);

        prop_assert_eq!(config.enabled, enabled);
        prop_assert_eq!(config.colors, colors);
        prop_assert_eq!(config.debug, debug);
        prop_assert_eq!(config.ns_width, width);
        prop_assert_eq!(config.namespace, ns);
    }
}
