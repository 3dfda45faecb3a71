//! Positional arguments substituted into `%` placeholders

use serde::Serialize;
use std::fmt;

/// A single renderable argument
///
/// Each variant has a fixed rendering per conversion, see [`crate::core::format`].
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Json(serde_json::Value),
    Null,
}

impl LogArg {
    /// Wrap any serializable value as a structured-object argument
    ///
    /// Values that fail to serialize become [`LogArg::Null`].
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        serde_json::to_value(value)
            .map(LogArg::Json)
            .unwrap_or(LogArg::Null)
    }

    /// Convert to serde_json::Value for object-dump conversions
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            LogArg::Str(s) => serde_json::Value::String(s.clone()),
            LogArg::Int(i) => serde_json::Value::Number((*i).into()),
            LogArg::UInt(u) => serde_json::Value::Number((*u).into()),
            LogArg::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            LogArg::Bool(b) => serde_json::Value::Bool(*b),
            LogArg::Json(v) => v.clone(),
            LogArg::Null => serde_json::Value::Null,
        }
    }

    /// Numeric view used by `%d`, `%f` and friends
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match self {
            LogArg::Int(i) => Some(*i as f64),
            LogArg::UInt(u) => Some(*u as f64),
            LogArg::Float(f) => Some(*f),
            LogArg::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            LogArg::Str(s) => s.trim().parse().ok(),
            LogArg::Json(serde_json::Value::Number(n)) => n.as_f64(),
            LogArg::Json(_) | LogArg::Null => None,
        }
    }

    /// Integer view; floats are truncated toward zero
    pub(crate) fn as_i128(&self) -> Option<i128> {
        match self {
            LogArg::Int(i) => Some(*i as i128),
            LogArg::UInt(u) => Some(*u as i128),
            other => other
                .as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i128),
        }
    }
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Str(s) => write!(f, "{}", s),
            LogArg::Int(i) => write!(f, "{}", i),
            LogArg::UInt(u) => write!(f, "{}", u),
            LogArg::Float(fl) => write!(f, "{}", fl),
            LogArg::Bool(b) => write!(f, "{}", b),
            LogArg::Json(v) => write!(f, "{}", v),
            LogArg::Null => write!(f, "null"),
        }
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        LogArg::Str(s)
    }
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        LogArg::Str(s.to_string())
    }
}

impl From<&String> for LogArg {
    fn from(s: &String) -> Self {
        LogArg::Str(s.clone())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for LogArg {
            fn from(i: $t) -> Self {
                LogArg::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for LogArg {
            fn from(u: $t) -> Self {
                LogArg::UInt(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for LogArg {
    fn from(f: f32) -> Self {
        LogArg::Float(f as f64)
    }
}

impl From<f64> for LogArg {
    fn from(f: f64) -> Self {
        LogArg::Float(f)
    }
}

impl From<bool> for LogArg {
    fn from(b: bool) -> Self {
        LogArg::Bool(b)
    }
}

impl From<serde_json::Value> for LogArg {
    fn from(v: serde_json::Value) -> Self {
        LogArg::Json(v)
    }
}

impl<T: Into<LogArg>> From<Option<T>> for LogArg {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(LogArg::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_conversions() {
        assert_eq!(LogArg::from("a"), LogArg::Str("a".into()));
        assert_eq!(LogArg::from(42u8), LogArg::UInt(42));
        assert_eq!(LogArg::from(-3i32), LogArg::Int(-3));
        assert_eq!(LogArg::from(None::<i32>), LogArg::Null);
        assert_eq!(LogArg::from(json!({"a": 1})), LogArg::Json(json!({"a": 1})));
    }

    #[test]
    fn test_numeric_views() {
        assert_eq!(LogArg::from("12.5").as_f64(), Some(12.5));
        assert_eq!(LogArg::from(3.9).as_i128(), Some(3));
        assert_eq!(LogArg::from(-3.9).as_i128(), Some(-3));
        assert_eq!(LogArg::from("abc").as_i128(), None);
        assert_eq!(LogArg::Null.as_f64(), None);
    }

    #[test]
    fn test_json_helper() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let arg = LogArg::json(&Point { x: 1, y: 2 });
        assert_eq!(arg.to_json_value(), json!({"x": 1, "y": 2}));
        assert_eq!(arg.to_string(), r#"{"x":1,"y":2}"#);
    }
}
