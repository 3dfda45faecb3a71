//! Namespace filter for the debug console channel
//!
//! DEBUG lines that are not routed to stdout go through a channel that stays silent
//! unless the `DEBUG` environment variable selects the logger's namespace. The variable
//! holds patterns separated by commas or whitespace; `*` matches any run of characters
//! and a leading `-` excludes matching namespaces.
//!
//! ```text
//! DEBUG=*                 every namespace
//! DEBUG=api:*,-api:noisy  everything under "api:" except "api:noisy"
//! ```

use std::env;

pub const DEBUG_ENV: &str = "DEBUG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl DebugFilter {
    pub fn parse(spec: &str) -> Self {
        let mut filter = Self::default();
        for pattern in spec.split(|c: char| c == ',' || c.is_whitespace()) {
            if pattern.is_empty() {
                continue;
            }
            match pattern.strip_prefix('-') {
                Some(excluded) => filter.exclude.push(excluded.to_string()),
                None => filter.include.push(pattern.to_string()),
            }
        }
        filter
    }

    /// Read the filter from `DEBUG`; an unset variable enables nothing
    pub fn from_env() -> Self {
        env::var(DEBUG_ENV)
            .map(|spec| Self::parse(&spec))
            .unwrap_or_default()
    }

    pub fn is_enabled(&self, namespace: &str) -> bool {
        if self.exclude.iter().any(|p| wildcard_match(p, namespace)) {
            return false;
        }
        self.include.iter().any(|p| wildcard_match(p, namespace))
    }
}

fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let (mut p, mut t) = (0, 0);
    let mut star: Option<usize> = None;
    let mut mark = 0;

    while t < text.len() {
        if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            mark = t;
            p += 1;
        } else if p < pattern.len() && pattern[p] == text[t] {
            p += 1;
            t += 1;
        } else if let Some(s) = star {
            p = s + 1;
            mark += 1;
            t = mark;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}
