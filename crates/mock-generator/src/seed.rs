//! Seed resolution.

use mock_core::SeedValue;

/// Reduce a string to a seed.
///
/// Folds every UTF-16 code unit into a wrapping 32-bit accumulator
/// (`acc * 31 + unit`) and returns the absolute value. The result is held in
/// an `i64` because `|i32::MIN|` does not fit in an `i32`.
pub fn hash_seed(s: &str) -> i64 {
    let hash = s.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(i32::from(unit))
    });
    i64::from(hash).abs()
}

/// Integer form of a seed. Integer seeds are used unchanged.
pub fn resolve_seed(seed: &SeedValue) -> i64 {
    match seed {
        SeedValue::Int(i) => *i,
        SeedValue::Text(s) => hash_seed(s),
    }
}
