//! Numeric value generators.

use mess_core::{DecimalShape, GeneratedValue, IntRange};
use num_bigint::{BigInt, RandBigInt, Sign};
use rand::Rng;

/// Generate a random integer in the given range (inclusive).
///
/// Bounds keep their full precision. The caller guarantees `min <= max`.
pub fn generate_int_range<R: Rng>(rng: &mut R, range: &IntRange) -> GeneratedValue {
    let upper = &range.max + 1u32;
    GeneratedValue::Int(rng.gen_bigint_range(&range.min, &upper))
}

/// Generate a random decimal with the given precision and scale.
///
/// The unscaled value is uniform in `(-10^precision, 10^precision)`, so the
/// result has at most `precision` significant digits and exactly `scale`
/// digits after the decimal point. The caller guarantees
/// `1 <= precision` and `scale <= precision`.
pub fn generate_decimal<R: Rng>(rng: &mut R, shape: &DecimalShape) -> GeneratedValue {
    let limit = BigInt::from(10u32).pow(shape.precision);
    let lower = -&limit + 1u32;
    let unscaled = rng.gen_bigint_range(&lower, &limit);

    GeneratedValue::Decimal {
        value: format_scaled(&unscaled, shape.scale),
        precision: shape.precision,
        scale: shape.scale,
    }
}

/// Render `unscaled / 10^scale` with exactly `scale` fractional digits.
fn format_scaled(unscaled: &BigInt, scale: u32) -> String {
    let digits = unscaled.magnitude().to_string();
    let sign = if unscaled.sign() == Sign::Minus { "-" } else { "" };

    if scale == 0 {
        return format!("{sign}{digits}");
    }

    let scale = scale as usize;
    let padded = format!("{digits:0>width$}", width = scale + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    format!("{sign}{int_part}.{frac_part}")
}
