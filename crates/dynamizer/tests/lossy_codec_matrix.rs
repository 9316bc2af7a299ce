use dynamizer::{Decimal, DecodeError, EncodeError, LossyDynamizer, NativeValue, Number, WireValue};

fn float_set(items: &[f64]) -> NativeValue {
    NativeValue::number_set(items.iter().copied())
}

#[test]
fn floats_render_as_shortest_text() {
    let d = LossyDynamizer::default();
    let cases = [
        (1.1, "1.1"),
        (0.1, "0.1"),
        (1.25, "1.25"),
        (54.0, "54"),
        (-0.0, "0"),
        (1e-7, "1e-7"),
        (1e300, "1e300"),
        (123456789.125, "123456789.125"),
    ];
    for (f, text) in cases {
        assert_eq!(
            d.encode(&f.into()).unwrap(),
            WireValue::Number(text.into()),
            "f={f}"
        );
    }
}

#[test]
fn decodes_numbers_to_floats() {
    let d = LossyDynamizer::default();
    assert_eq!(
        d.decode(&WireValue::Number("1.1".into())).unwrap(),
        NativeValue::Number(Number::Float(1.1))
    );
    assert_eq!(
        d.decode(&WireValue::Number("1E-130".into())).unwrap(),
        NativeValue::Number(Number::Float(1e-130))
    );
    assert_eq!(
        d.decode(&WireValue::NumberSet(vec!["1.1".into(), "2.2".into(), "3.3".into()]))
            .unwrap(),
        float_set(&[1.1, 2.2, 3.3])
    );
}

#[test]
fn float_set_roundtrip() {
    let d = LossyDynamizer::default();
    let set = float_set(&[3.3, 1.1, 2.2]);
    let wire = d.encode(&set).unwrap();
    assert!(wire.is_equivalent(&WireValue::NumberSet(vec![
        "1.1".into(),
        "2.2".into(),
        "3.3".into()
    ])));
    assert_eq!(d.decode(&wire).unwrap(), set);
}

#[test]
fn exact_decimals_keep_strict_limits() {
    let d = LossyDynamizer::default();
    let fine: Decimal = "0.1".parse().unwrap();
    assert_eq!(d.encode(&fine.into()).unwrap(), WireValue::Number("0.1".into()));
    let too_long: Decimal = "1.2345678901234567890123456789012345678901".parse().unwrap();
    assert!(matches!(
        d.encode(&too_long.into()),
        Err(EncodeError::NumericPrecision { .. })
    ));
}

#[test]
fn lossy_rejects_what_has_no_f64() {
    let d = LossyDynamizer::default();
    assert!(matches!(
        d.encode(&f64::NAN.into()),
        Err(EncodeError::UnsupportedType(_))
    ));
    for text in ["1e400", "-1e400", "inf", "nan", ""] {
        assert!(
            matches!(
                d.decode(&WireValue::Number(text.into())),
                Err(DecodeError::InvalidNumber { .. })
            ),
            "text={text:?}"
        );
    }
}

#[test]
fn lossy_decode_is_nearest_f64() {
    let d = LossyDynamizer::default();
    let long = "3.14159265358979323846264338327950288419716939937510";
    assert_eq!(
        d.decode(&WireValue::Number(long.into())).unwrap(),
        NativeValue::from(std::f64::consts::PI)
    );
}
