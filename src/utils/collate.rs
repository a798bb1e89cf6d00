//! Locale-aware name ordering for Cyrillic and Latin employee names.
//!
//! Approximates a Russian-locale `localeCompare`:
//! - script order: punctuation and spaces, digits, Cyrillic, Latin, other
//!   letters
//! - primary: base letters compared case-insensitively; accents are folded
//!   (`É` sorts with `E`) and `ё` sorts with `е`
//! - secondary: unaccented before accented, `е` before `ё`
//! - tertiary: lowercase before uppercase
//!
//! Cyrillic letters are never decomposed, so `й` stays its own letter.
//! Remaining ties fall back to code points so the order is total.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const PUNCTUATION: u8 = 0;
const DIGIT: u8 = 1;
const CYRILLIC: u8 = 2;
const LATIN: u8 = 3;
const OTHER_LETTER: u8 = 4;

struct Weight {
    primary: (u8, char),
    secondary: u32,
    tertiary: u8,
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{00C0}'..='\u{024F}').contains(&c)
        || ('\u{1E00}'..='\u{1EFF}').contains(&c)
}

fn script(c: char) -> u8 {
    if c.is_numeric() {
        DIGIT
    } else if is_cyrillic(c) {
        CYRILLIC
    } else if is_latin(c) {
        LATIN
    } else if c.is_alphabetic() {
        OTHER_LETTER
    } else {
        PUNCTUATION
    }
}

fn weigh(c: char) -> Weight {
    if is_cyrillic(c) {
        let lower = lowercase(c);
        let tertiary = u8::from(lower != c);
        return match lower {
            'ё' => Weight {
                primary: (CYRILLIC, 'е'),
                secondary: 1,
                tertiary,
            },
            _ => Weight {
                primary: (CYRILLIC, lower),
                secondary: 0,
                tertiary,
            },
        };
    }

    let mut parts = std::iter::once(c).nfd();
    let base = parts.next().unwrap_or(c);
    let accent = parts.find(|m| is_combining_mark(*m)).map_or(0, u32::from);
    let lower = lowercase(base);

    Weight {
        primary: (script(lower), lower),
        secondary: accent,
        tertiary: u8::from(lower != base),
    }
}

/// Compares two names the way a collation-based sort would.
pub fn compare(a: &str, b: &str) -> Ordering {
    let wa: Vec<Weight> = a.chars().map(weigh).collect();
    let wb: Vec<Weight> = b.chars().map(weigh).collect();

    level(&wa, &wb, |w| w.primary)
        .then_with(|| level(&wa, &wb, |w| w.secondary))
        .then_with(|| level(&wa, &wb, |w| w.tertiary))
        .then_with(|| a.cmp(b))
}

fn level<K: Ord>(a: &[Weight], b: &[Weight], key: impl Fn(&Weight) -> K) -> Ordering {
    a.iter().map(&key).cmp(b.iter().map(&key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare(a, b));
        v
    }

    #[test]
    fn case_does_not_dominate() {
        assert_eq!(sorted(&["b", "A", "a", "B"]), ["a", "A", "b", "B"]);
    }

    #[test]
    fn yo_sorts_with_ye() {
        assert_eq!(
            sorted(&["Ежов", "Ёлкин", "Елисеев", "Жуков"]),
            ["Ежов", "Елисеев", "Ёлкин", "Жуков"]
        );
    }

    #[test]
    fn short_i_is_its_own_letter() {
        assert_eq!(sorted(&["Йошкин", "Ивлев", "Кузин"]), ["Ивлев", "Йошкин", "Кузин"]);
    }

    #[test]
    fn cyrillic_alphabet_order() {
        assert_eq!(
            sorted(&["Яковлев", "Борисов", "Андреев", "Иванов"]),
            ["Андреев", "Борисов", "Иванов", "Яковлев"]
        );
    }

    #[test]
    fn cyrillic_before_latin() {
        assert_eq!(
            sorted(&["Ivanov", "Иванов", "Zed", "Émile", "Fox", "Smith", "Андреев"]),
            ["Андреев", "Иванов", "Émile", "Fox", "Ivanov", "Smith", "Zed"]
        );
    }

    #[test]
    fn accents_fold_to_base_letter() {
        assert_eq!(sorted(&["Eve", "Zoe", "Édith", "Ella"]), ["Édith", "Ella", "Eve", "Zoe"]);
        assert_eq!(compare("Emile", "Émile"), Ordering::Less);
        assert_eq!(compare("Émile", "Emilf"), Ordering::Less);
    }

    #[test]
    fn digits_and_spaces_before_letters() {
        assert_eq!(sorted(&["Ivanov", "Ivan Petrov", "007"]), ["007", "Ivan Petrov", "Ivanov"]);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare("Иван", "Иванов"), Ordering::Less);
        assert_eq!(compare("same", "same"), Ordering::Equal);
    }
}
