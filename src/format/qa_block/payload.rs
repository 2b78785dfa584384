//! Payload decoding: JSON objects kept as ordered entry lists.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::format::options::QaShape;

/// JSON value where objects keep every entry in source order, duplicates included.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum PayloadValue {
    Text(String),
    Object(Vec<(String, PayloadValue)>),
    /// Arrays, booleans and null: never valid question or option text.
    Other,
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = PayloadValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(PayloadValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(PayloadValue::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(PayloadValue::Text(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(PayloadValue::Text(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(PayloadValue::Text(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(PayloadValue::Other)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PayloadValue::Other)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<PayloadValue>()?.is_some() {}
        Ok(PayloadValue::Other)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, PayloadValue>()? {
            entries.push((key, value));
        }
        Ok(PayloadValue::Object(entries))
    }
}

impl<'de> Deserialize<'de> for PayloadValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PayloadVisitor)
    }
}

/// Error decoding a payload. Never surfaced to callers: the block degrades to text.
#[derive(Debug, thiserror::Error)]
pub(super) enum PayloadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected shape: {0}")]
    Shape(&'static str),
}

/// Question and options as raw strings, before inline tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RawQa {
    pub question: String,
    pub options: Vec<(String, String)>,
}

const QUESTION_KEY: &str = "question";
const ANSWERS_KEY: &str = "answers";

/// Decode sanitized payload JSON according to the configured shape.
pub(super) fn parse_payload(json: &str, shape: QaShape) -> Result<RawQa, PayloadError> {
    let PayloadValue::Object(entries) = serde_json::from_str::<PayloadValue>(json)? else {
        return Err(PayloadError::Shape("payload is not an object"));
    };
    match shape {
        QaShape::Nested => nested(entries),
        QaShape::Flat => flat(entries),
    }
}

/// `{"question": "...", "answers": {"A": "...", ...}}`. Other keys are ignored;
/// a repeated top-level key takes its last value.
fn nested(entries: Vec<(String, PayloadValue)>) -> Result<RawQa, PayloadError> {
    let mut question = None;
    let mut answers = None;
    for (key, value) in entries {
        match key.as_str() {
            QUESTION_KEY => question = Some(value),
            ANSWERS_KEY => answers = Some(value),
            _ => {}
        }
    }
    let question = match question {
        Some(PayloadValue::Text(q)) => q,
        Some(_) => return Err(PayloadError::Shape("question is not a string")),
        None => return Err(PayloadError::Shape("missing question")),
    };
    let options = match answers {
        Some(PayloadValue::Object(answers)) => text_entries(answers)?,
        Some(_) => return Err(PayloadError::Shape("answers is not an object")),
        None => return Err(PayloadError::Shape("missing answers")),
    };
    if options.is_empty() {
        return Err(PayloadError::Shape("no options"));
    }
    Ok(RawQa { question, options })
}

/// `{"A": "...", "B": "..."}`, with an optional `"question"` entry.
fn flat(entries: Vec<(String, PayloadValue)>) -> Result<RawQa, PayloadError> {
    let mut question = String::new();
    let mut options = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let PayloadValue::Text(text) = value else {
            return Err(PayloadError::Shape("option is not a string"));
        };
        if key == QUESTION_KEY {
            question = text;
        } else {
            options.push((key, text));
        }
    }
    if options.is_empty() {
        return Err(PayloadError::Shape("no options"));
    }
    Ok(RawQa { question, options })
}

fn text_entries(entries: Vec<(String, PayloadValue)>) -> Result<Vec<(String, String)>, PayloadError> {
    entries
        .into_iter()
        .map(|(label, value)| match value {
            PayloadValue::Text(text) => Ok((label, text)),
            _ => Err(PayloadError::Shape("option is not a string")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(l, t)| (l.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn payload_value_keeps_duplicate_keys_in_order() {
        let value: PayloadValue = serde_json::from_str(r#"{"B":"1","A":"2","B":"3"}"#).unwrap();
        assert_eq!(
            value,
            PayloadValue::Object(vec![
                ("B".into(), PayloadValue::Text("1".into())),
                ("A".into(), PayloadValue::Text("2".into())),
                ("B".into(), PayloadValue::Text("3".into())),
            ])
        );
    }

    #[test]
    fn nested_shape() {
        let qa = parse_payload(
            r#"{"question":"Pick one","answers":{"A":"1","B":"2"}}"#,
            QaShape::Nested,
        )
        .unwrap();
        assert_eq!(qa.question, "Pick one");
        assert_eq!(qa.options, opts(&[("A", "1"), ("B", "2")]));
    }

    #[test]
    fn nested_shape_preserves_label_order_not_alphabetical() {
        let qa = parse_payload(
            r#"{"question":"q","answers":{"C":"c","A":"a","B":"b"}}"#,
            QaShape::Nested,
        )
        .unwrap();
        let labels: Vec<&str> = qa.options.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["C", "A", "B"]);
    }

    #[test]
    fn nested_shape_accepts_numbers_and_extra_keys() {
        let qa = parse_payload(
            r#"{"id":7,"question":"2+2?","answers":{"A":4,"B":"five"}}"#,
            QaShape::Nested,
        )
        .unwrap();
        assert_eq!(qa.options, opts(&[("A", "4"), ("B", "five")]));
    }

    #[test]
    fn nested_shape_missing_answers() {
        let err = parse_payload(r#"{"question":"q"}"#, QaShape::Nested).unwrap_err();
        assert!(err.to_string().contains("missing answers"));
    }

    #[test]
    fn nested_shape_rejects_non_string_option() {
        let err = parse_payload(
            r#"{"question":"q","answers":{"A":["x"]}}"#,
            QaShape::Nested,
        )
        .unwrap_err();
        assert!(matches!(err, PayloadError::Shape(_)));
    }

    #[test]
    fn flat_shape_with_question() {
        let qa = parse_payload(r#"{"question":"q","A":"x","B":"y"}"#, QaShape::Flat).unwrap();
        assert_eq!(qa.question, "q");
        assert_eq!(qa.options, opts(&[("A", "x"), ("B", "y")]));
    }

    #[test]
    fn empty_option_set_rejected_in_both_shapes() {
        let nested = parse_payload(r#"{"question":"q","answers":{}}"#, QaShape::Nested);
        assert!(nested.unwrap_err().to_string().contains("no options"));
        let flat = parse_payload(r#"{"question":"q"}"#, QaShape::Flat);
        assert!(flat.unwrap_err().to_string().contains("no options"));
    }

    #[test]
    fn flat_shape_rejects_nested_payload() {
        let err = parse_payload(
            r#"{"question":"q","answers":{"A":"1"}}"#,
            QaShape::Flat,
        )
        .unwrap_err();
        assert!(matches!(err, PayloadError::Shape(_)));
    }

    #[test]
    fn invalid_json_is_error() {
        let err = parse_payload(r#"{"question": nope}"#, QaShape::Nested).unwrap_err();
        assert!(matches!(err, PayloadError::Json(_)));
    }

    #[test]
    fn non_object_payload_is_error() {
        assert!(parse_payload(r#""text""#, QaShape::Nested).is_err());
    }
}
