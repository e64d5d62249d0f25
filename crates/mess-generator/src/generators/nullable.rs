//! Nullability gate.

use mess_core::NullableRate;
use rand::Rng;

/// Decide whether this draw should be null.
///
/// A rate of 0 never draws from the RNG.
pub fn is_null<R: Rng>(rng: &mut R, rate: NullableRate) -> bool {
    match rate.percent() {
        0 => false,
        percent => rng.gen_range(0..100u8) < percent,
    }
}
