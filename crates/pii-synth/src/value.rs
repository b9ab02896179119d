//! Value types shared between the synthesizers and the provider registry.

use rand::rngs::StdRng;
use std::fmt;

/// Declared data type of a provider's values.
///
/// Date and datetime values are rendered as ISO-8601 text; the kind is
/// kept so payload renderers and type hints can distinguish them from
/// free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int,
    Bool,
    Decimal,
    Date,
    DateTime,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::Decimal => "decimal",
            ValueKind::Date => "date",
            ValueKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single synthesized value.
///
/// Decimals are carried as pre-formatted strings to avoid binary float
/// artifacts in rendered payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum SynthValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Decimal(String),
}

impl SynthValue {
    /// Plain-text rendering, used by fillers and non-JSON payload shapes.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SynthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthValue::Text(s) => f.write_str(s),
            SynthValue::Int(i) => write!(f, "{i}"),
            SynthValue::Bool(b) => write!(f, "{b}"),
            SynthValue::Decimal(s) => f.write_str(s),
        }
    }
}

/// A named value generator. Providers hold one of these per canonical
/// label; the RNG is owned by the caller so generation stays
/// deterministic under a fixed seed.
pub type Synthesizer = fn(&mut StdRng) -> SynthValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_rendering() {
        assert_eq!(SynthValue::Text("abc".into()).render(), "abc");
        assert_eq!(SynthValue::Int(-7).render(), "-7");
        assert_eq!(SynthValue::Bool(true).render(), "true");
        assert_eq!(SynthValue::Decimal("3.14".into()).render(), "3.14");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::DateTime.as_str(), "datetime");
        assert_eq!(ValueKind::Decimal.to_string(), "decimal");
    }
}
