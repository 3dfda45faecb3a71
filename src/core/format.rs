//! printf-style placeholder substitution
//!
//! Directives have the shape `%[flags][width][.precision]conversion`:
//!
//! - flags: `-` left-justify, `+` force sign, `0` zero padding, `'c` pad with `c`
//! - conversions: `s` text, `d`/`i` integer, `u` unsigned, `f` float, `x`/`X` hex,
//!   `j`/`J`/`o`/`O` object dump, `%%` a literal percent sign
//!
//! Anything else after a `%` is kept as literal text, as is a directive whose width
//! or precision exceeds [`MAX_WIDTH`].
//!
//! `%u`, `%x` and `%X` print negative integers as their 32-bit two's complement
//! (`-1` is `4294967295` / `ffffffff`); non-negative values are never truncated.

use super::log_arg::LogArg;

const CONVERSIONS: &[u8] = b"sdiufxXjJoO";

/// Largest width or precision a directive may ask for
pub const MAX_WIDTH: usize = 4096;

/// Canonical object-dump conversion used in file output
pub const FILE_OBJECT: char = 'j';

/// Which formatter consumes a template
///
/// `File` renders every object conversion as compact JSON. `Console` mirrors an
/// inspecting console: `%j`/`%o` are compact, `%J`/`%O` are pretty-printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    File,
    Console,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Directive<'a> {
    raw: &'a str,
    left: bool,
    plus: bool,
    pad: char,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Percent,
    Directive(Directive<'a>),
}

fn parse(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        match parse_directive(template, i) {
            Some((segment, end)) => {
                if literal_start < i {
                    segments.push(Segment::Literal(&template[literal_start..i]));
                }
                segments.push(segment);
                i = end;
                literal_start = end;
            }
            None => i += 1,
        }
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }
    segments
}

/// Parse the directive starting at the `%` at `start`, returning it and the index past it
fn parse_directive(template: &str, start: usize) -> Option<(Segment<'_>, usize)> {
    let bytes = template.as_bytes();
    let mut i = start + 1;

    if bytes.get(i) == Some(&b'%') {
        return Some((Segment::Percent, i + 1));
    }

    let mut left = false;
    let mut plus = false;
    let mut pad = ' ';
    loop {
        match bytes.get(i) {
            Some(b'-') => left = true,
            Some(b'+') => plus = true,
            Some(b'0') => pad = '0',
            Some(b'\'') => {
                let c = template[i + 1..].chars().next()?;
                pad = c;
                i += c.len_utf8();
            }
            _ => break,
        }
        i += 1;
    }

    let digits_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let width = bounded(&template[digits_start..i])?;

    let mut precision = None;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let digits_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        precision = Some(bounded(&template[digits_start..i])?.unwrap_or(0));
    }

    let conversion = *bytes.get(i)?;
    if !CONVERSIONS.contains(&conversion) {
        return None;
    }

    let directive = Directive {
        raw: &template[start..=i],
        left,
        plus,
        pad,
        width,
        precision,
        conversion: conversion as char,
    };
    Some((Segment::Directive(directive), i + 1))
}

/// Parse an optional digit run: `Some(None)` when empty, `None` when above [`MAX_WIDTH`]
fn bounded(digits: &str) -> Option<Option<usize>> {
    if digits.is_empty() {
        return Some(None);
    }
    match digits.parse::<usize>() {
        Ok(n) if n <= MAX_WIDTH => Some(Some(n)),
        _ => None,
    }
}

impl Directive<'_> {
    fn with_conversion(&self, conversion: char) -> String {
        let mut out = String::with_capacity(self.raw.len());
        out.push_str(&self.raw[..self.raw.len() - 1]);
        out.push(conversion);
        out
    }

    fn render(&self, arg: &LogArg, dialect: Dialect) -> String {
        let body = match self.conversion {
            's' => {
                let text = match arg {
                    LogArg::Str(s) => s.clone(),
                    other => other.to_string(),
                };
                match self.precision {
                    Some(p) => text.chars().take(p).collect(),
                    None => text,
                }
            }
            'd' | 'i' => match arg.as_i128() {
                Some(n) => self.signed(n.to_string(), n >= 0),
                None => "NaN".to_string(),
            },
            'u' => match arg.as_i128() {
                Some(n) if n < 0 => (n as u32).to_string(),
                Some(n) => n.to_string(),
                None => "NaN".to_string(),
            },
            'f' => match arg.as_f64() {
                Some(f) => {
                    let text = match self.precision {
                        Some(p) => format!("{:.*}", p, f),
                        None => f.to_string(),
                    };
                    self.signed(text, f >= 0.0)
                }
                None => "NaN".to_string(),
            },
            'x' | 'X' => match arg.as_i128() {
                Some(n) => {
                    let hex = if n < 0 {
                        format!("{:x}", n as u32)
                    } else {
                        format!("{:x}", n)
                    };
                    if self.conversion == 'X' {
                        hex.to_uppercase()
                    } else {
                        hex
                    }
                }
                None => "NaN".to_string(),
            },
            'J' | 'O' if dialect == Dialect::Console => {
                let value = arg.to_json_value();
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
            _ => arg.to_json_value().to_string(),
        };
        self.justify(body)
    }

    fn signed(&self, text: String, non_negative: bool) -> String {
        if self.plus && non_negative {
            format!("+{}", text)
        } else {
            text
        }
    }

    fn justify(&self, body: String) -> String {
        let len = body.chars().count();
        let width = match self.width {
            Some(w) if w > len => w,
            _ => return body,
        };
        let fill: String = std::iter::repeat(self.pad).take(width - len).collect();

        if self.left {
            return body + &fill;
        }
        if self.pad == '0' {
            if let Some(rest) = body.strip_prefix(['-', '+']) {
                return format!("{}{}{}", &body[..1], fill, rest);
            }
        }
        fill + &body
    }
}

fn rewrite(template: &str, map: impl Fn(char) -> char) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in parse(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Percent => out.push_str("%%"),
            Segment::Directive(d) => {
                let mapped = map(d.conversion);
                if mapped == d.conversion {
                    out.push_str(d.raw);
                } else {
                    out.push_str(&d.with_conversion(mapped));
                }
            }
        }
    }
    out
}

/// Map every object-dump spelling (`%O`, `%o`, `%J`) to the canonical `%j`
pub fn normalize_for_file(template: &str) -> String {
    rewrite(template, |c| match c {
        'O' | 'o' | 'J' => FILE_OBJECT,
        other => other,
    })
}

/// Map JSON-dump spellings to the ones the console formatter inspects (`%J`→`%O`, `%j`→`%o`)
pub fn normalize_for_console(template: &str) -> String {
    rewrite(template, |c| match c {
        'J' => 'O',
        'j' => 'o',
        other => other,
    })
}

/// Number of directives that consume an argument
pub fn count_placeholders(template: &str) -> usize {
    parse(template)
        .iter()
        .filter(|s| matches!(s, Segment::Directive(_)))
        .count()
}

/// Escape literal text so that it survives a later substitution pass unchanged
pub fn escape(text: &str) -> String {
    text.replace('%', "%%")
}

/// Substitute `args` into `template` in order
///
/// Directives with no matching argument are left as written, surplus arguments are ignored.
pub fn substitute(template: &str, args: &[LogArg], dialect: Dialect) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();

    for segment in parse(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Percent => out.push('%'),
            Segment::Directive(d) => match args.next() {
                Some(arg) => out.push_str(&d.render(arg, dialect)),
                None => out.push_str(d.raw),
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(values: Vec<LogArg>) -> Vec<LogArg> {
        values
    }

    #[test]
    fn test_basic_substitution() {
        let out = substitute(
            "hello %s, you are %d",
            &args(vec!["world".into(), 42.into()]),
            Dialect::File,
        );
        assert_eq!(out, "hello world, you are 42");
    }

    #[test]
    fn test_missing_arguments_stay_literal() {
        let out = substitute("%s and %d", &args(vec!["a".into()]), Dialect::File);
        assert_eq!(out, "a and %d");
    }

    #[test]
    fn test_surplus_arguments_are_ignored() {
        let out = substitute("only %s", &args(vec!["a".into(), "b".into()]), Dialect::File);
        assert_eq!(out, "only a");
    }

    #[test]
    fn test_literal_percent() {
        assert_eq!(substitute("100%% done", &[], Dialect::File), "100% done");
        assert_eq!(substitute("100% sure", &[], Dialect::File), "100% sure");
        assert_eq!(substitute("trailing %", &[], Dialect::File), "trailing %");
    }

    #[test]
    fn test_width_and_flags() {
        assert_eq!(substitute("[%-7s]", &["ab".into()], Dialect::File), "[ab     ]");
        assert_eq!(substitute("[%7s]", &["ab".into()], Dialect::File), "[     ab]");
        assert_eq!(substitute("[%'.5s]", &["ab".into()], Dialect::File), "[...ab]");
        assert_eq!(substitute("[%05d]", &[(-42).into()], Dialect::File), "[-0042]");
        assert_eq!(substitute("[%+d]", &[7.into()], Dialect::File), "[+7]");
        assert_eq!(substitute("[%.2f]", &[3.14159.into()], Dialect::File), "[3.14]");
        assert_eq!(substitute("[%.3s]", &["abcdef".into()], Dialect::File), "[abc]");
        assert_eq!(substitute("[%x|%X]", &[255.into(), 255.into()], Dialect::File), "[ff|FF]");
    }

    #[test]
    fn test_oversized_width_stays_literal() {
        let huge = "[%99999999999999s]";
        assert_eq!(substitute(huge, &["ab".into()], Dialect::File), huge);
        assert_eq!(count_placeholders(huge), 0);
        assert_eq!(substitute("[%.99999999999f]", &[1.5.into()], Dialect::File), "[%.99999999999f]");

        let out = substitute("%4096s", &["ab".into()], Dialect::File);
        assert_eq!(out.len(), MAX_WIDTH);
        assert!(out.ends_with(" ab"));
    }

    #[test]
    fn test_negative_unsigned_and_hex() {
        assert_eq!(substitute("%u", &[(-1).into()], Dialect::File), "4294967295");
        assert_eq!(substitute("%x", &[(-255).into()], Dialect::File), "ffffff01");
        assert_eq!(substitute("%X", &[(-1).into()], Dialect::File), "FFFFFFFF");
        assert_eq!(substitute("%u", &[5_000_000_000u64.into()], Dialect::File), "5000000000");
    }

    #[test]
    fn test_numeric_conversions_of_non_numbers() {
        assert_eq!(substitute("%d", &["abc".into()], Dialect::File), "NaN");
        assert_eq!(substitute("%d", &["12".into()], Dialect::File), "12");
        assert_eq!(substitute("%i", &[9.99.into()], Dialect::File), "9");
    }

    #[test]
    fn test_object_dump_file_dialect() {
        let obj = LogArg::from(json!({"a": "x", "b": "y"}));
        for spelling in ["%j", "%J", "%o", "%O"] {
            let out = substitute(spelling, std::slice::from_ref(&obj), Dialect::File);
            assert_eq!(out, r#"{"a":"x","b":"y"}"#, "{spelling}");
        }
    }

    #[test]
    fn test_object_dump_console_dialect() {
        let obj = LogArg::from(json!({"a": 1}));
        assert_eq!(substitute("%o", &[obj.clone()], Dialect::Console), r#"{"a":1}"#);
        assert_eq!(substitute("%O", &[obj], Dialect::Console), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_normalize_for_file() {
        assert_eq!(
            normalize_for_file("a %O b %o c %J d %j e %s %%O"),
            "a %j b %j c %j d %j e %s %%O"
        );
        assert_eq!(normalize_for_file("%-10O"), "%-10j");
    }

    #[test]
    fn test_normalize_for_console() {
        assert_eq!(normalize_for_console("%J %j %O %o"), "%O %o %O %o");
    }

    #[test]
    fn test_count_placeholders() {
        assert_eq!(count_placeholders("no tokens"), 0);
        assert_eq!(count_placeholders("%s %d %% %j"), 3);
        assert_eq!(count_placeholders("50% off %q"), 0);
    }

    #[test]
    fn test_escape_round_trip() {
        let text = "ns%s%d";
        assert_eq!(substitute(&escape(text), &["x".into()], Dialect::File), text);
    }

    #[test]
    fn test_multibyte_literals() {
        let out = substitute("héllo %s ✓", &["wörld".into()], Dialect::File);
        assert_eq!(out, "héllo wörld ✓");
    }
}
