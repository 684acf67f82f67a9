use parallax_canonical::{canonical_bytes, digest_value, ToCanonical};
use parallax_quantize::{LengthQuantity, LengthScale};

#[test]
fn quanta_sizes_are_exact_integer_multiples() {
    let cross = LengthScale::CrossEpoch.quantum_nanometers();
    let session = LengthScale::Session.quantum_nanometers();
    let min = LengthScale::SystemMin.quantum_nanometers();
    assert_eq!(cross % session, 0);
    assert_eq!(session % min, 0);
    assert_eq!(cross % min, 0);
}

#[test]
fn from_real_meters_rounds_half_away_from_zero() {
    // 0.0020005 m on the 1 mm grid scales to 2.0005 quanta.
    let q = LengthQuantity::from_real_meters(0.0020005, LengthScale::CrossEpoch);
    assert_eq!(q.quanta, 2);
    assert_eq!(q.scale, LengthScale::CrossEpoch);

    // 0.1234565 m on the 10 µm grid scales to 12345.64... quanta.
    let q = LengthQuantity::from_real_meters(0.1234565, LengthScale::Session);
    assert_eq!(q.quanta, 12346);

    // Edge-case inputs quantize to zero quanta.
    let q = LengthQuantity::from_real_meters(f64::NAN, LengthScale::Session);
    assert_eq!(q.quanta, 0);
}

#[test]
fn to_meters_round_trips_for_display() {
    let q = LengthQuantity::new(LengthScale::CrossEpoch, 250);
    assert!((q.to_meters() - 0.25).abs() < 1e-12);
}

#[test]
fn cross_scale_equality_goes_through_nanometers() {
    // 3 mm == 300 session quanta == 3000 system-min quanta.
    let coarse = LengthQuantity::new(LengthScale::CrossEpoch, 3);
    let fine = LengthQuantity::new(LengthScale::Session, 300);
    let finest = LengthQuantity::new(LengthScale::SystemMin, 3000);
    assert_eq!(coarse, fine);
    assert_eq!(fine, finest);
    assert_ne!(coarse, LengthQuantity::new(LengthScale::Session, 301));
}

#[test]
fn cross_scale_ordering_is_exact() {
    let a = LengthQuantity::new(LengthScale::Session, 99);
    let b = LengthQuantity::new(LengthScale::CrossEpoch, 1);
    assert!(a < b);
    assert!(b > a);

    // Extreme quanta never overflow the comparison path.
    let huge = LengthQuantity::new(LengthScale::CrossEpoch, i64::MAX);
    let tiny = LengthQuantity::new(LengthScale::SystemMin, i64::MIN);
    assert!(tiny < huge);
}

#[test]
fn to_scale_requires_exact_conversion() {
    let coarse = LengthQuantity::new(LengthScale::CrossEpoch, 2);
    let fine = coarse.to_scale(LengthScale::Session).unwrap();
    assert_eq!(fine.quanta, 200);

    // Back up the grid only when the value sits exactly on it.
    assert_eq!(
        fine.to_scale(LengthScale::CrossEpoch).unwrap().quanta,
        2
    );
    let off_grid = LengthQuantity::new(LengthScale::Session, 101);
    assert!(off_grid.to_scale(LengthScale::CrossEpoch).is_none());

    // Overflowing conversions are refused, not wrapped.
    let huge = LengthQuantity::new(LengthScale::CrossEpoch, i64::MAX);
    assert!(huge.to_scale(LengthScale::SystemMin).is_none());
}

#[test]
fn addition_lands_on_the_finer_scale() {
    let coarse = LengthQuantity::new(LengthScale::CrossEpoch, 1);
    let fine = LengthQuantity::new(LengthScale::Session, 50);
    let sum = coarse.checked_add(&fine).unwrap();
    assert_eq!(sum.scale, LengthScale::Session);
    assert_eq!(sum.quanta, 150);

    // Symmetric in argument order.
    assert_eq!(fine.checked_add(&coarse).unwrap(), sum);

    let max = LengthQuantity::new(LengthScale::Session, i64::MAX);
    assert!(max.checked_add(&LengthQuantity::new(LengthScale::Session, 1)).is_none());
}

#[test]
fn canonical_form_is_stable() {
    let q = LengthQuantity::new(LengthScale::Session, 1234);
    let value = q.to_canonical().unwrap();
    assert_eq!(
        canonical_bytes(&value),
        br#"{"quanta":1234,"scale":"session"}"#.to_vec()
    );
    assert_eq!(
        digest_value(&value).hex,
        "62190f1fbc45d5e59b589d32eae4dc53f4147a58460caaa60945f858e3e3bc8b"
    );
}

#[test]
fn vectors_of_quantities_encode_in_order() {
    let path = vec![
        LengthQuantity::new(LengthScale::Session, 1),
        LengthQuantity::new(LengthScale::Session, 2),
    ];
    let value = path.to_canonical().unwrap();
    assert_eq!(
        canonical_bytes(&value),
        br#"[{"quanta":1,"scale":"session"},{"quanta":2,"scale":"session"}]"#.to_vec()
    );
}
