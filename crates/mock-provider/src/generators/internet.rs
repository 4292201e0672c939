//! Email, user name, domain and URL generators.

use super::pick;
use crate::locale::LocaleDefinition;
use rand::Rng;

/// Reduce a localized name to lowercase ASCII letters and digits.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'a'..='z' | '0'..='9' => out.push(c),
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            'à' | 'á' | 'â' | 'ã' | 'å' => out.push('a'),
            'ç' => out.push('c'),
            'è' | 'é' | 'ê' | 'ë' => out.push('e'),
            'ì' | 'í' | 'î' | 'ï' => out.push('i'),
            'ñ' => out.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' => out.push('o'),
            'ù' | 'ú' | 'û' => out.push('u'),
            _ => {}
        }
    }
    out
}

/// A user name built from a first and last name.
pub fn user_name<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    let first = slugify(pick(rng, &locale.first_names));
    let last = slugify(pick(rng, &locale.last_names));

    match rng.gen_range(0..3) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}_{last}{}", rng.gen_range(1..100)),
        _ => format!("{first}{}", rng.gen_range(1..1000)),
    }
}

/// A domain such as `schmidt.de`.
pub fn domain_name<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    let mut stem = slugify(pick(rng, &locale.last_names));
    if stem.is_empty() {
        stem = "example".to_string();
    }
    let suffix = pick(rng, &locale.domain_suffixes);
    format!("{stem}.{suffix}")
}

/// An email address on one of the locale's free email domains.
pub fn email<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    let mut user = user_name(rng, locale);
    if user.is_empty() {
        user = "user".to_string();
    }
    let domain = pick(rng, &locale.email_domains);
    format!("{user}@{domain}")
}

/// An `http(s)` URL on a generated domain.
pub fn url<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    let scheme = if rng.gen_bool(0.8) { "https" } else { "http" };
    let domain = domain_name(rng, locale);
    if rng.gen_bool(0.5) {
        format!("{scheme}://www.{domain}")
    } else {
        format!("{scheme}://{domain}")
    }
}
