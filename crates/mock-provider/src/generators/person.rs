//! Person name generators.

use super::pick;
use crate::locale::LocaleDefinition;
use rand::Rng;

pub fn first_name<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    pick(rng, &locale.first_names).to_string()
}

pub fn last_name<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    pick(rng, &locale.last_names).to_string()
}

/// Given name followed by family name.
pub fn full_name<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    let first = first_name(rng, locale);
    let last = last_name(rng, locale);
    format!("{first} {last}")
}
