use dynamizer_decimal::Decimal;

#[test]
fn exact_expansion_of_binary_fractions() {
    let cases = [
        (1.1, "1.100000000000000088817841970012523233890533447265625"),
        (0.1, "0.1000000000000000055511151231257827021181583404541015625"),
        (0.3, "0.299999999999999988897769753748434595763683319091796875"),
        (1.25, "1.25"),
        (-3.0, "-3"),
        (0.000_976_562_5, "0.0009765625"),
    ];
    for (value, expected) in cases {
        let d = Decimal::from_f64(value).expect("finite");
        assert_eq!(d.to_string(), expected, "value={value}");
    }
}

#[test]
fn digit_counts_at_the_extremes() {
    let tiny = Decimal::from_f64(f64::from_bits(1)).expect("finite");
    assert_eq!(tiny.precision(), 751);
    assert_eq!(tiny.adjusted_exponent(), -324);

    let max = Decimal::from_f64(f64::MAX).expect("finite");
    assert_eq!(max.precision(), 309);
    assert_eq!(max.adjusted_exponent(), 308);
    assert!(max.to_string().starts_with("1.797693134862315708145274237317043567980"));

    let two_pow_64 = Decimal::from_f64(18_446_744_073_709_551_616.0).expect("finite");
    assert_eq!(two_pow_64.to_string(), "18446744073709551616");
}

#[test]
fn exact_expansion_reads_back_as_the_same_double() {
    for value in [1.1, 0.1, 1e300, -2.5e-300, f64::MIN_POSITIVE, f64::MAX, 123_456.789] {
        let d = Decimal::from_f64(value).expect("finite");
        assert_eq!(d.to_f64(), value, "value={value}");
    }
}
