use dynamizer::{DecodeError, Dynamizer, NativeValue, WireValue};
use serde_json::{json, Value};

#[test]
fn reads_every_tag() {
    let cases = [
        (json!({"S": "foo"}), WireValue::String("foo".into())),
        (json!({"N": "54"}), WireValue::Number("54".into())),
        (json!({"B": "AQ=="}), WireValue::Binary("AQ==".into())),
        (
            json!({"SS": ["a", "b"]}),
            WireValue::StringSet(vec!["a".into(), "b".into()]),
        ),
        (json!({"NS": ["1"]}), WireValue::NumberSet(vec!["1".into()])),
        (json!({"BS": []}), WireValue::BinarySet(vec![])),
    ];
    for (json, wire) in cases {
        assert_eq!(WireValue::from_json(&json).unwrap(), wire, "json={json}");
        assert_eq!(wire.to_json(), json);
        assert_eq!(WireValue::try_from(&json).unwrap(), wire);
    }
}

#[test]
fn unknown_tags() {
    for tag in ["BOOL", "NULL", "L", "M", "s", ""] {
        let mut obj = serde_json::Map::new();
        obj.insert(tag.to_owned(), Value::Bool(true));
        assert_eq!(
            WireValue::from_json(&Value::Object(obj)),
            Err(DecodeError::UnknownTag(tag.to_owned())),
            "tag={tag:?}"
        );
    }
}

#[test]
fn malformed_shapes() {
    let cases = [
        json!("foo"),
        json!(54),
        json!(null),
        json!([{"S": "foo"}]),
        json!({}),
        json!({"S": "a", "N": "1"}),
        json!({"S": 1}),
        json!({"N": 54}),
        json!({"B": ["AQ=="]}),
        json!({"SS": "a"}),
        json!({"NS": [1, 2]}),
        json!({"BS": [null]}),
    ];
    for json in cases {
        assert!(
            matches!(WireValue::from_json(&json), Err(DecodeError::InvalidShape(_))),
            "json={json}"
        );
    }
}

#[test]
fn decode_json_runs_the_full_path() {
    let d = Dynamizer::new();
    assert_eq!(
        d.decode_json(&json!({"NS": ["1", "2", "3"]})).unwrap(),
        NativeValue::number_set([1, 2, 3])
    );
    assert_eq!(
        d.decode_json(&json!({"BOOL": true})),
        Err(DecodeError::UnknownTag("BOOL".into()))
    );
    assert_eq!(
        d.encode_json(&NativeValue::from(54)).unwrap(),
        json!({"N": "54"})
    );
}

#[test]
fn wire_numbers_stay_strings() {
    let out = Dynamizer::new()
        .encode_json(&NativeValue::number_set([10, 2]))
        .unwrap();
    assert_eq!(out.to_string(), r#"{"NS":["2","10"]}"#);
}
