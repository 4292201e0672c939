//! Individual value generators.
//!
//! Every generator draws from a caller-supplied RNG, so a seeded provider
//! reproduces the same values. Locale-dependent generators also take the
//! active [`LocaleDefinition`](crate::LocaleDefinition).

pub mod internet;
pub mod location;
pub mod numeric;
pub mod pattern;
pub mod person;
pub mod text;
pub mod timestamp;
pub mod uuid;

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one entry of a word list. Empty lists yield an empty string.
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, items: &'a [String]) -> &'a str {
    items.choose(rng).map(String::as_str).unwrap_or_default()
}
