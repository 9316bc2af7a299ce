use dynamizer_decimal::Decimal;
use proptest::prelude::*;

fn decimal_literal() -> impl Strategy<Value = String> {
    (any::<bool>(), "[0-9]{1,30}", proptest::option::of("[0-9]{1,20}"), -200i32..200)
        .prop_map(|(negative, int, frac, exp)| {
            let mut s = String::new();
            if negative {
                s.push('-');
            }
            s.push_str(&int);
            if let Some(frac) = frac {
                s.push('.');
                s.push_str(&frac);
            }
            s.push_str(&format!("e{exp}"));
            s
        })
}

proptest! {
    #[test]
    fn text_roundtrip_preserves_value(literal in decimal_literal()) {
        let value: Decimal = literal.parse().unwrap();
        let back: Decimal = value.to_string().parse().unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn finite_doubles_roundtrip_exactly(bits in any::<u64>()) {
        let value = f64::from_bits(bits);
        prop_assume!(value.is_finite());
        let exact = Decimal::from_f64(value).unwrap();
        prop_assert_eq!(exact.to_f64(), if value == 0.0 { 0.0 } else { value });
        let reparsed: Decimal = exact.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, exact);
    }

    #[test]
    fn integer_ordering_matches_decimal_ordering(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Decimal::from(a).cmp(&Decimal::from(b)), a.cmp(&b));
    }
}
