//! Payload rendering in the supported output shapes.
//!
//! The core supplies ordered field-value pairs; rendering turns them
//! into one self-contained document per payload.

use clap::ValueEnum;
use pii_synth::SynthValue;
use serde_json::{Map, Number, Value};

/// Output payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    Json,
    Sql,
    Xml,
    Proto,
}

/// Render ordered field-value pairs into one payload document.
pub fn render(shape: Shape, fields: &[(String, SynthValue)]) -> String {
    match shape {
        Shape::Json => render_json(fields),
        Shape::Sql => render_sql(fields),
        Shape::Xml => render_xml(fields),
        Shape::Proto => render_proto(fields),
    }
}

fn json_value(value: &SynthValue) -> Value {
    match value {
        SynthValue::Text(s) => Value::String(s.clone()),
        SynthValue::Int(i) => Value::Number((*i).into()),
        SynthValue::Bool(b) => Value::Bool(*b),
        SynthValue::Decimal(s) => s
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(s.clone())),
    }
}

fn render_json(fields: &[(String, SynthValue)]) -> String {
    let mut map = Map::new();
    for (name, value) in fields {
        map.insert(name.clone(), json_value(value));
    }
    Value::Object(map).to_string()
}

/// Keep only identifier characters so field names stay valid SQL
/// columns and XML/proto tags.
fn sanitize_ident(name: &str) -> String {
    let ident: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("_{ident}")
    } else {
        ident
    }
}

fn sql_literal(value: &SynthValue) -> String {
    match value {
        SynthValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
        SynthValue::Int(i) => i.to_string(),
        SynthValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        SynthValue::Decimal(s) => s.clone(),
    }
}

fn render_sql(fields: &[(String, SynthValue)]) -> String {
    let columns: Vec<String> = fields.iter().map(|(n, _)| sanitize_ident(n)).collect();
    let values: Vec<String> = fields.iter().map(|(_, v)| sql_literal(v)).collect();
    format!(
        "INSERT INTO payload ({}) VALUES ({});",
        columns.join(", "),
        values.join(", ")
    )
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn render_xml(fields: &[(String, SynthValue)]) -> String {
    let mut out = String::from("<payload>");
    for (name, value) in fields {
        let tag = sanitize_ident(name);
        out.push_str(&format!("<{tag}>{}</{tag}>", xml_escape(&value.render())));
    }
    out.push_str("</payload>");
    out
}

fn render_proto(fields: &[(String, SynthValue)]) -> String {
    let mut out = String::new();
    for (name, value) in fields {
        let field = sanitize_ident(name);
        let rendered = match value {
            SynthValue::Text(s) => format!("\"{}\"", s.replace('"', "\\\"")),
            other => other.render(),
        };
        out.push_str(&format!("{field}: {rendered}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<(String, SynthValue)> {
        vec![
            ("full name".to_string(), SynthValue::Text("Ada Smith".into())),
            ("age".to_string(), SynthValue::Int(37)),
            ("active".to_string(), SynthValue::Bool(true)),
            ("lat".to_string(), SynthValue::Decimal("12.500000".into())),
        ]
    }

    #[test]
    fn test_render_json_types_and_order() {
        let payload = render(Shape::Json, &fields());
        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed["full name"], "Ada Smith");
        assert_eq!(parsed["age"], 37);
        assert_eq!(parsed["active"], true);
        assert_eq!(parsed["lat"], 12.5);
        // field order is preserved
        assert!(payload.find("full name").unwrap() < payload.find("age").unwrap());
    }

    #[test]
    fn test_render_sql_escapes_quotes() {
        let fields = vec![(
            "note".to_string(),
            SynthValue::Text("O'Brien".into()),
        )];
        let payload = render(Shape::Sql, &fields);
        assert_eq!(payload, "INSERT INTO payload (note) VALUES ('O''Brien');");
    }

    #[test]
    fn test_render_xml_sanitizes_tags() {
        let payload = render(Shape::Xml, &fields());
        assert!(payload.starts_with("<payload>"));
        assert!(payload.contains("<full_name>Ada Smith</full_name>"));
        assert!(payload.contains("<active>true</active>"));
    }

    #[test]
    fn test_render_xml_escapes_content() {
        let fields = vec![("text".to_string(), SynthValue::Text("a<b&c".into()))];
        let payload = render(Shape::Xml, &fields);
        assert!(payload.contains("a&lt;b&amp;c"));
    }

    #[test]
    fn test_render_proto_lines() {
        let payload = render(Shape::Proto, &fields());
        let lines: Vec<&str> = payload.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "full_name: \"Ada Smith\"");
        assert_eq!(lines[1], "age: 37");
    }

    #[test]
    fn test_sanitize_leading_digit() {
        assert_eq!(sanitize_ident("2fa code"), "_2fa_code");
    }
}
