//! JavaScript / TypeScript literal formatting.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{
    Serializer, Value,
    ser::PrettyFormatter,
};

/// Serialize `value` as JSON with 4-space indentation.
pub fn json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut ser)
        .context("Failed to serialize generated data")?;
    String::from_utf8(buf).context("Generated JSON is not valid UTF-8")
}

/// `"text"` with JSON escaping, valid in both JS and TS.
pub fn double_quoted(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// `'text'` with `\` and `'` escaped.
pub fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// `` `text` `` with `\`, `` ` `` and `${` escaped.
pub fn template_literal(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${");
    format!("`{escaped}`")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_pretty_uses_four_spaces() {
        let out = json_pretty(&json!({ "arrow-up": "arrows" })).unwrap();
        assert_eq!(out, "{\n    \"arrow-up\": \"arrows\"\n}");
    }

    #[test]
    fn test_json_pretty_empty() {
        assert_eq!(json_pretty(&Vec::<String>::new()).unwrap(), "[]");
        assert_eq!(json_pretty(&json!({})).unwrap(), "{}");
    }

    #[test]
    fn test_json_pretty_preserves_insertion_order() {
        let mut map = serde_json::Map::new();
        map.insert("zeta".into(), json!("z"));
        map.insert("alpha".into(), json!("a"));
        let out = json_pretty(&map).unwrap();
        assert!(out.find("zeta").unwrap() < out.find("alpha").unwrap());
    }

    #[test]
    fn test_quoting() {
        assert_eq!(double_quoted(r#"a"b"#), r#""a\"b""#);
        assert_eq!(single_quoted("it's"), r"'it\'s'");
        assert_eq!(
            template_literal(r"<text>`${x}` \n</text>"),
            r"`<text>\`\${x}\` \\n</text>`"
        );
    }
}
