//! Lorem text and random string generators.

use super::pick;
use crate::locale::LocaleDefinition;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// A single filler word.
pub fn word<R: Rng>(rng: &mut R, locale: &LocaleDefinition) -> String {
    pick(rng, &locale.words).to_string()
}

/// `count` filler words separated by spaces.
pub fn words<R: Rng>(rng: &mut R, locale: &LocaleDefinition, count: usize) -> String {
    (0..count)
        .map(|_| pick(rng, &locale.words))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A capitalized sentence of `word_count` words ending in a period.
pub fn sentence<R: Rng>(rng: &mut R, locale: &LocaleDefinition, word_count: usize) -> String {
    let body = words(rng, locale, word_count.max(1));
    format!("{}.", capitalize(&body))
}

/// A paragraph of `sentence_count` sentences of 3 to 10 words each.
pub fn paragraph<R: Rng>(rng: &mut R, locale: &LocaleDefinition, sentence_count: usize) -> String {
    (0..sentence_count.max(1))
        .map(|_| {
            let word_count = rng.gen_range(3..=10);
            sentence(rng, locale, word_count)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A string of `length` ASCII letters and digits.
pub fn alphanumeric<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Uppercase the first character.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_word_from_locale() {
        let mut rng = StdRng::seed_from_u64(42);
        let locale = LocaleDefinition::default();

        let w = word(&mut rng, &locale);
        assert!(locale.words.contains(&w));
    }

    #[test]
    fn test_words_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let locale = LocaleDefinition::default();

        assert_eq!(words(&mut rng, &locale, 5).split(' ').count(), 5);
        assert_eq!(words(&mut rng, &locale, 0), "");
    }

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let locale = LocaleDefinition::default();

        let s = sentence(&mut rng, &locale, 4);
        assert!(s.ends_with('.'));
        assert!(s.chars().next().unwrap().is_uppercase());
        assert_eq!(s.split(' ').count(), 4);
    }

    #[test]
    fn test_paragraph_has_sentences() {
        let mut rng = StdRng::seed_from_u64(42);
        let locale = LocaleDefinition::default();

        let p = paragraph(&mut rng, &locale, 3);
        assert_eq!(p.matches('.').count(), 3);
    }

    #[test]
    fn test_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = alphanumeric(&mut rng, 12);
        assert_eq!(s.len(), 12);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }
}
