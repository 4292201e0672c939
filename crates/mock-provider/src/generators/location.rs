//! Address generators.

use super::pattern::generate_pattern;
use super::pick;
use crate::locale::LocaleDefinition;
use rand::Rng;

pub fn city<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    pick(rng, &locale.cities).to_string()
}

pub fn country<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    pick(rng, &locale.countries).to_string()
}

/// A street address following the locale's address format.
pub fn street_address<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    let number = rng.gen_range(1..=9999).to_string();
    let street = pick(rng, &locale.street_names);
    let suffix = pick(rng, &locale.street_suffixes);

    locale
        .address_format
        .replace("{number}", &number)
        .replace("{street}", street)
        .replace("{suffix}", suffix)
}

pub fn zip_code<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    let format = pick(rng, &locale.postcode_formats);
    generate_pattern(format, rng)
}

/// A phone number following one of the locale's phone formats.
pub fn phone_number<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    let format = pick(rng, &locale.phone_formats);
    generate_pattern(format, rng)
}
