//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `#` - a random digit
//! - `{rand:N}` - a random N-digit number without leading zero

use rand::Rng;

/// Longest `{rand:N}` expansion; larger `N` is capped.
pub const MAX_RANDOM_DIGITS: usize = 10_000;

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R) -> String {
    let mut result = pattern.to_string();

    // Replace {rand:N} patterns
    while let Some(start) = result.find("{rand:") {
        if let Some(end) = result[start..].find('}') {
            let end = start + end;
            let digits_str = &result[start + 6..end];
            if let Ok(digits) = digits_str.parse::<usize>() {
                let random_num = generate_random_digits(rng, digits.min(MAX_RANDOM_DIGITS));
                result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
            } else {
                // Invalid format, skip this one
                break;
            }
        } else {
            break;
        }
    }

    // Replace each # with a digit
    result
        .chars()
        .map(|c| if c == '#' { random_digit(rng, 0) } else { c })
        .collect()
}

/// Generate a random number with exactly N digits.
pub fn generate_random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);

    // First digit should be 1-9 to avoid leading zeros
    result.push(random_digit(rng, 1));

    // Remaining digits can be 0-9
    for _ in 1..digits {
        result.push(random_digit(rng, 0));
    }

    result
}

fn random_digit<R: Rng>(rng: &mut R, lowest: u32) -> char {
    char::from_digit(rng.gen_range(lowest..10), 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_pattern_hashes() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("(###) ###-####", &mut rng);

        assert_eq!(value.len(), 14);
        assert!(value.starts_with('('));
        assert_eq!(value.chars().filter(|c| c.is_ascii_digit()).count(), 10);
    }

    #[test]
    fn test_generate_pattern_random_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("code-{rand:6}", &mut rng);

        assert!(value.starts_with("code-"));
        assert_eq!(value.len(), 5 + 6); // "code-" + 6 digits
        let random_part = &value[5..];
        assert!(random_part.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(&random_part[..1], "0");
    }

    #[test]
    fn test_generate_pattern_invalid_placeholder() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("x-{rand:abc}", &mut rng);
        assert_eq!(value, "x-{rand:abc}");
    }

    #[test]
    fn test_generate_pattern_caps_digit_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("{rand:100000000000}", &mut rng);
        assert_eq!(value.len(), MAX_RANDOM_DIGITS);
    }

    #[test]
    fn test_generate_random_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_random_digits(&mut rng, 0), "");
        let digits = generate_random_digits(&mut rng, 8);
        assert_eq!(digits.len(), 8);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
