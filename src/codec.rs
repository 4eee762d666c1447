//! Conversion between the flat `controlStyles[N]...` JSON object and the [`Document`] tree.
//!
//! Key shapes:
//! - `controlStyles[N].target` names target `N`.
//! - `controlStyles[N].styles[M]` is style `M` of target `N`.
//!
//! Any other key is ignored on decode. Encode always re-indexes densely from 0.

use crate::{Document, Result, Style, Target, statics};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use tracing::error;

/// The flat object, in insertion order.
pub type FlatMap = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlatKey {
    Target(usize),
    Style(usize, usize),
}

/// Parse one key. Indices are plain base-10 digits; leading zeros are read as the literal
/// value, and indices that overflow `usize` make the key unrecognized.
fn parse_key(key: &str) -> Option<FlatKey> {
    let rest = key.strip_prefix(statics::KEY_PREFIX)?;
    let (target, rest) = take_index(rest)?;
    let rest = rest.strip_prefix(']')?;
    if rest == statics::KEY_TARGET_SUFFIX {
        return Some(FlatKey::Target(target));
    }
    let rest = rest.strip_prefix(statics::KEY_STYLES_INFIX)?;
    let (style, rest) = take_index(rest)?;
    (rest == "]").then_some(FlatKey::Style(target, style))
}

fn take_index(s: &str) -> Option<(usize, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let index = s[..end].parse().ok()?;
    Some((index, &s[end..]))
}

pub fn target_key(target: usize) -> String {
    format!("{}{target}]{}", statics::KEY_PREFIX, statics::KEY_TARGET_SUFFIX)
}

pub fn style_key(target: usize, style: usize) -> String {
    format!(
        "{}{target}]{}{style}]",
        statics::KEY_PREFIX,
        statics::KEY_STYLES_INFIX
    )
}

#[derive(Default)]
struct PendingTarget {
    name: Option<String>,
    styles: BTreeMap<usize, String>,
}

/// Build a document from a flat object. Every target and style gets a fresh id.
///
/// Targets come out in ascending index order and styles in ascending index order within
/// each target. Styles whose target index has no `target` key are dropped.
pub fn decode(flat: &FlatMap) -> Document {
    let mut pending: BTreeMap<usize, PendingTarget> = BTreeMap::new();
    for (key, value) in flat {
        match parse_key(key) {
            Some(FlatKey::Target(t)) => {
                pending.entry(t).or_default().name = Some(value.clone());
            }
            Some(FlatKey::Style(t, s)) => {
                pending.entry(t).or_default().styles.insert(s, value.clone());
            }
            None => {}
        }
    }

    Document::from_targets(pending.into_values().filter_map(|p| {
        let name = p.name?;
        let styles = p.styles.into_values().map(Style::new).collect();
        Some(Target::new(name, styles))
    }))
}

/// Parse JSON text into a flat object. Fails unless the text is a JSON object whose values
/// are all strings.
pub fn parse_flat_json(text: &str) -> Result<FlatMap> {
    Ok(serde_json::from_str::<FlatMap>(text)?)
}

pub fn decode_str(text: &str) -> Result<Document> {
    parse_flat_json(text).map(|flat| decode(&flat))
}

/// Flatten a document. Target index is the target's position; style index is the style's
/// position within its target. Keys are emitted target key first, then that target's styles.
pub fn encode(doc: &Document) -> FlatMap {
    let mut out = FlatMap::new();
    for (t_idx, target) in doc.targets().enumerate() {
        out.insert(target_key(t_idx), target.name.clone());
        for (s_idx, style) in target.styles.iter().enumerate() {
            out.insert(style_key(t_idx, s_idx), style.value.clone());
        }
    }
    out
}

/// Flatten and serialize as JSON with 2-space indentation.
pub fn encode_pretty(doc: &Document) -> String {
    match serde_json::to_string_pretty(&encode(doc)) {
        Ok(text) => text,
        // String keys and values always serialize.
        Err(e) => {
            error!(error = %e, "serializing flat map");
            String::from("{}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FlatKey, FlatMap, decode, encode, encode_pretty, parse_key};
    use crate::{Document, EditorError, Style, Target};

    fn flat(pairs: &[(&str, &str)]) -> FlatMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parse_key_recognizes_both_shapes() {
        assert_eq!(
            parse_key("controlStyles[3].target"),
            Some(FlatKey::Target(3))
        );
        assert_eq!(
            parse_key("controlStyles[12].styles[0]"),
            Some(FlatKey::Style(12, 0))
        );
        assert_eq!(
            parse_key("controlStyles[007].styles[010]"),
            Some(FlatKey::Style(7, 10))
        );
    }

    #[test]
    fn parse_key_rejects_near_misses() {
        for key in [
            "controlStyles[].target",
            "controlStyles[-1].target",
            "controlStyles[1].target ",
            " controlStyles[1].target",
            "controlStyles[1].targets",
            "controlStyles[1].styles[]",
            "controlStyles[1].styles[2].x",
            "controlStyles[1]styles[2]",
            "controlStyles[a].target",
            "controlStyles[99999999999999999999999].target",
            "otherStyles[0].target",
        ] {
            assert_eq!(parse_key(key), None, "{key}");
        }
    }

    #[test]
    fn decode_sorts_by_index_not_insertion() {
        let doc = decode(&flat(&[
            ("controlStyles[1].styles[1]", "b2"),
            ("controlStyles[1].target", "B"),
            ("controlStyles[0].target", "A"),
            ("controlStyles[1].styles[0]", "b1"),
        ]));
        assert_eq!(
            doc.outline(),
            vec![
                ("A".to_string(), vec![]),
                ("B".to_string(), vec!["b1".to_string(), "b2".to_string()]),
            ]
        );
    }

    #[test]
    fn decode_compares_indices_numerically() {
        let doc = decode(&flat(&[
            ("controlStyles[10].target", "ten"),
            ("controlStyles[2].target", "two"),
            ("controlStyles[2].styles[10]", "s10"),
            ("controlStyles[2].styles[9]", "s9"),
        ]));
        let names: Vec<_> = doc.targets().map(|t| t.name.clone()).collect();
        assert_eq!(names, ["two", "ten"]);
        let values: Vec<_> = doc
            .targets()
            .next()
            .unwrap()
            .styles
            .iter()
            .map(|s| s.value.clone())
            .collect();
        assert_eq!(values, ["s9", "s10"]);
    }

    #[test]
    fn decode_drops_orphan_styles_and_unknown_keys() {
        let doc = decode(&flat(&[
            ("controlStyles[0].styles[0]", "orphan"),
            ("controlStyles[1].target", "kept"),
            ("somethingElse", "ignored"),
        ]));
        assert_eq!(doc.outline(), vec![("kept".to_string(), vec![])]);
    }

    #[test]
    fn encode_reindexes_densely() {
        let doc = decode(&flat(&[
            ("controlStyles[4].target", "A"),
            ("controlStyles[4].styles[7]", "x"),
            ("controlStyles[9].target", "B"),
        ]));
        let out = encode(&doc);
        let keys: Vec<_> = out.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "controlStyles[0].target",
                "controlStyles[0].styles[0]",
                "controlStyles[1].target",
            ]
        );
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let doc = Document::from_targets([Target::new("T", vec![Style::new("a=\"b\"")])]);
        assert_eq!(
            encode_pretty(&doc),
            concat!(
                "{\n",
                "  \"controlStyles[0].target\": \"T\",\n",
                "  \"controlStyles[0].styles[0]\": \"a=\\\"b\\\"\"\n",
                "}"
            )
        );
        assert_eq!(encode_pretty(&Document::new()), "{}");
    }

    #[test]
    fn pretty_json_escapes_control_characters() {
        let value = "a\u{1}\u{8}\u{c}\t\n\r\"\\\u{7f}é✓\u{2028}b";
        let doc = Document::from_targets([Target::new("k", vec![Style::new(value)])]);
        let out = encode_pretty(&doc);
        assert!(out.contains("\"a\\u0001\\b\\f\\t\\n\\r\\\"\\\\\u{7f}é✓\u{2028}b\""));
        let back = super::parse_flat_json(&out).unwrap();
        assert_eq!(
            back.get("controlStyles[0].styles[0]").map(String::as_str),
            Some(value)
        );
    }

    #[test]
    fn parse_rejects_non_string_values_and_non_objects() {
        for text in [
            "{\"controlStyles[0].target\": 1}",
            "[\"a\"]",
            "\"just a string\"",
            "{not json",
            "",
        ] {
            assert!(
                matches!(super::parse_flat_json(text), Err(EditorError::Parse(_))),
                "{text}"
            );
        }
    }
}
