//! Q1.15 fixed-point quantization and hex encoding.
//!
//! Q1.15: 1 sign bit, 15 fractional bits, 16 bits total, representing
//! [-1.0, 1.0) with resolution 1/32768.

/// Scale factor, 2^15.
pub const SCALE: f64 = 32768.0;

/// Largest representable real value, 32767/32768.
pub const MAX_REAL: f64 = 0.999969482421875;

/// Smallest representable real value.
pub const MIN_REAL: f64 = -1.0;

/// Convert a real value to its Q1.15 bit pattern.
///
/// Out-of-range inputs saturate to the nearest boundary rather than erroring.
/// Rounding is to the nearest integer with ties away from zero
/// (`f64::round`). NaN maps to 0x0000; infinities saturate like any other
/// out-of-range value.
pub fn quantize(value: f64) -> u16 {
    if value.is_nan() {
        return 0;
    }
    let clamped = value.clamp(MIN_REAL, MAX_REAL);
    let q = (clamped * SCALE).round() as i32;
    // Guard against clamp/rounding interaction at the exact boundary
    let q = q.clamp(i16::MIN as i32, i16::MAX as i32);
    q as i16 as u16
}

/// Recover the real value encoded by a Q1.15 bit pattern.
pub fn dequantize(word: u16) -> f64 {
    word as i16 as f64 / SCALE
}

/// 4 uppercase hex digits, zero-padded.
pub fn format_hex(word: u16) -> String {
    format!("{word:04X}")
}

/// Quantize each value in input order, producing one hex word per value.
pub fn quantize_sequence(values: &[f64]) -> Vec<String> {
    values.iter().map(|&v| format_hex(quantize(v))).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn quantize_zero() {
        assert_eq!(quantize(0.0), 0x0000);
    }

    #[test]
    fn quantize_max_positive() {
        assert_eq!(quantize(MAX_REAL), 0x7FFF);
    }

    #[test]
    fn quantize_minimum() {
        assert_eq!(quantize(-1.0), 0x8000);
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(quantize(1.5), quantize(MAX_REAL));
        assert_eq!(quantize(-2.0), quantize(-1.0));
    }

    #[test]
    fn half_values() {
        assert_eq!(quantize(0.5), 0x4000);
        assert_eq!(quantize(-0.5), 0xC000);
    }

    #[test]
    fn ties_round_away_from_zero() {
        // exactly half an LSB on either side of zero
        assert_eq!(quantize(0.5 / SCALE), 0x0001);
        assert_eq!(quantize(-0.5 / SCALE), 0xFFFF);
    }

    #[test]
    fn non_finite_policy() {
        assert_eq!(quantize(f64::NAN), 0x0000);
        assert_eq!(quantize(f64::INFINITY), 0x7FFF);
        assert_eq!(quantize(f64::NEG_INFINITY), 0x8000);
    }

    #[test]
    fn hex_is_zero_padded_uppercase() {
        assert_eq!(format_hex(0x0000), "0000");
        assert_eq!(format_hex(0x00AB), "00AB");
        assert_eq!(format_hex(0xFFFF), "FFFF");
    }

    #[test]
    fn sequence_preserves_order_and_length() {
        assert_eq!(quantize_sequence(&[0.0, 0.5, -0.5]), ["0000", "4000", "C000"]);
    }

    #[test]
    fn dequantize_inverts_exact_values() {
        assert_eq!(dequantize(0x4000), 0.5);
        assert_eq!(dequantize(0x8000), -1.0);
        assert_eq!(dequantize(quantize(MAX_REAL)), MAX_REAL);
    }

    proptest! {
        #[test]
        fn hex_always_four_uppercase_digits(v in -4.0f64..4.0) {
            let hex = format_hex(quantize(v));
            prop_assert_eq!(hex.len(), 4);
            prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }

        #[test]
        fn roundtrip_error_within_one_lsb(v in -4.0f64..4.0) {
            let clamped = v.clamp(MIN_REAL, MAX_REAL);
            let back = dequantize(quantize(v));
            prop_assert!((back - clamped).abs() <= 1.0 / SCALE);
        }
    }
}
