//! UUID and ULID generators.

use chrono::{DateTime, Utc};
use rand::Rng;
use ulid::Ulid;
use uuid::Uuid;

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    // Generate 16 random bytes
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes)
}

/// Generate a ULID whose timestamp part is `reference` and whose random part comes from the RNG.
pub fn generate_ulid<R: Rng>(rng: &mut R, reference: DateTime<Utc>) -> Ulid {
    let timestamp_ms = u64::try_from(reference.timestamp_millis()).unwrap_or_default();
    Ulid::from_parts(timestamp_ms, rng.gen::<u128>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_uuid_v4() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_uuid_v4(&mut rng);
        assert_eq!(value.get_version_num(), 4);

        // Ensure uniqueness
        let value2 = generate_uuid_v4(&mut rng);
        assert_ne!(value, value2);
    }

    #[test]
    fn test_uuid_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(generate_uuid_v4(&mut rng1), generate_uuid_v4(&mut rng2));
    }

    #[test]
    fn test_generate_ulid() {
        let mut rng = StdRng::seed_from_u64(42);
        let reference = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let ulid = generate_ulid(&mut rng, reference);
        let text = ulid.to_string();
        assert_eq!(text.len(), 26);
        assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(ulid.timestamp_ms(), reference.timestamp_millis() as u64);
    }
}
