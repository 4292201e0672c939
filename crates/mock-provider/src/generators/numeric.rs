//! Numeric value generators.

use rand::Rng;

/// Largest integer a double represents exactly; upper bound of unconstrained integers.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Upper bound on fraction digits, keeps the scaled range inside `i64`.
const MAX_FRACTION_DIGITS: u32 = 10;

/// Generate a random integer in the given range (inclusive). Reversed bounds are swapped.
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high)
}

/// Generate a random float in the given range (inclusive). Reversed bounds are swapped.
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if !min.is_finite() || !max.is_finite() {
        return 0.0;
    }
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if low == high {
        return low;
    }
    if !(high - low).is_finite() {
        // Width overflows; interpolate so neither term leaves the finite range
        let t: f64 = rng.gen();
        return low * (1.0 - t) + high * t;
    }
    rng.gen_range(low..=high)
}

/// Generate a random float in the given range with at most `fraction_digits` decimals.
///
/// The value is drawn as an integer number of `10^-fraction_digits` steps, so
/// the result never carries more digits than requested.
pub fn generate_fixed_point<R: Rng>(rng: &mut R, min: f64, max: f64, fraction_digits: u32) -> f64 {
    if !min.is_finite() || !max.is_finite() {
        return 0.0;
    }
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let factor = 10f64.powi(fraction_digits.min(MAX_FRACTION_DIGITS) as i32);
    let low_steps = (low * factor).ceil() as i64;
    let high_steps = (high * factor).floor() as i64;

    if low_steps > high_steps {
        return (low * factor).round() / factor;
    }

    rng.gen_range(low_steps..=high_steps) as f64 / factor
}

/// Generate a boolean that is `true` with the given probability.
pub fn generate_bool<R: Rng>(rng: &mut R, probability: f64) -> bool {
    let probability = if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        0.5
    };
    rng.gen_bool(probability)
}
