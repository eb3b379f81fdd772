use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(100, 128), 50);
}

#[test]
fn round_i64_is_half_away_from_zero() {
    assert_eq!(round_i64(2.5), Some(3));
    assert_eq!(round_i64(-2.5), Some(-3));
    assert_eq!(round_i64(499.4), Some(499));
    assert_eq!(round_i64(f64::NAN), None);
    assert_eq!(round_i64(f64::INFINITY), None);
}

#[test]
fn premultiply_roundtrip_is_exact_for_opaque_and_transparent() {
    let opaque = [12, 200, 77, 255];
    assert_eq!(unpremultiply(premultiply(opaque)), opaque);
    assert_eq!(premultiply([9, 9, 9, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([0, 0, 0, 0]), [0, 0, 0, 0]);
}

#[test]
fn unpremultiply_is_close_for_partial_alpha() {
    let px = [200, 100, 50, 128];
    let back = unpremultiply(premultiply(px));
    for i in 0..3 {
        assert!((i32::from(back[i]) - i32::from(px[i])).abs() <= 2);
    }
    assert_eq!(back[3], 128);
}
