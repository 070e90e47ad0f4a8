// src/domain/post/slug.rs
//! Pure slug pipeline for post titles.
//!
//! `generate_slug` never fails: whatever the input, the result matches
//! `^[a-z0-9]+(-[a-z0-9]+)*$`, falling back to [`FALLBACK_SLUG`] when
//! nothing usable survives normalization.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const FALLBACK_SLUG: &str = "post";

const LOCALE_CHARS: &[(char, char)] = &[
    ('á', 'a'),
    ('à', 'a'),
    ('â', 'a'),
    ('ã', 'a'),
    ('ä', 'a'),
    ('å', 'a'),
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('í', 'i'),
    ('ì', 'i'),
    ('î', 'i'),
    ('ï', 'i'),
    ('ó', 'o'),
    ('ò', 'o'),
    ('ô', 'o'),
    ('õ', 'o'),
    ('ö', 'o'),
    ('ú', 'u'),
    ('ù', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
    ('ç', 'c'),
    ('ñ', 'n'),
    ('ý', 'y'),
    ('ÿ', 'y'),
    ('Á', 'A'),
    ('À', 'A'),
    ('Â', 'A'),
    ('Ã', 'A'),
    ('Ä', 'A'),
    ('Å', 'A'),
    ('É', 'E'),
    ('È', 'E'),
    ('Ê', 'E'),
    ('Ë', 'E'),
    ('Í', 'I'),
    ('Ì', 'I'),
    ('Î', 'I'),
    ('Ï', 'I'),
    ('Ó', 'O'),
    ('Ò', 'O'),
    ('Ô', 'O'),
    ('Õ', 'O'),
    ('Ö', 'O'),
    ('Ú', 'U'),
    ('Ù', 'U'),
    ('Û', 'U'),
    ('Ü', 'U'),
    ('Ç', 'C'),
    ('Ñ', 'N'),
    ('Ý', 'Y'),
];

static LOCALE_MAP: Lazy<HashMap<char, char>> =
    Lazy::new(|| LOCALE_CHARS.iter().copied().collect());

/// Emoticons, pictographs, transport/map symbols, regional indicators,
/// miscellaneous symbols and dingbats.
pub fn is_emoji_or_symbol(c: char) -> bool {
    matches!(
        c as u32,
        0x1F600..=0x1F64F
            | 0x1F300..=0x1F5FF
            | 0x1F680..=0x1F6FF
            | 0x1F1E0..=0x1F1FF
            | 0x2600..=0x26FF
            | 0x2700..=0x27BF
    )
}

pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// Replace mapped accented characters with their ASCII base letter,
/// keeping case. Unmapped characters pass through unchanged.
pub fn normalize_locale_char(c: char) -> char {
    LOCALE_MAP.get(&c).copied().unwrap_or(c)
}

/// Trim, drop emoji and apostrophes. Shared by every slug strategy so
/// "it's" always becomes "its" and never "it-s".
pub fn strip_decorations(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !is_emoji_or_symbol(*c) && !is_apostrophe(*c))
        .collect()
}

/// The locale pipeline without the fallback; empty when nothing usable
/// survives normalization.
pub fn slug_candidate(title: &str) -> String {
    let normalized: String = strip_decorations(title)
        .chars()
        .map(normalize_locale_char)
        .collect::<String>()
        .to_lowercase();

    hyphenate(&normalized)
}

pub fn generate_slug(title: &str) -> String {
    let slug = slug_candidate(title);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Collapse every run of characters outside `[a-z0-9]` into one hyphen,
/// with no hyphen at either end.
fn hyphenate(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

pub fn is_valid_slug(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_portuguese_title() {
        assert_eq!(generate_slug("São João's Café"), "sao-joaos-cafe");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(generate_slug("Hello   World!!"), "hello-world");
        assert_eq!(generate_slug("  --Rust & Tokio: a guide--  "), "rust-tokio-a-guide");
    }

    #[test]
    fn candidate_is_empty_when_nothing_survives() {
        assert_eq!(slug_candidate("🎉 !!! 🚀"), "");
        assert_eq!(slug_candidate("Olá Mundo"), "ola-mundo");
    }

    #[test]
    fn empty_like_titles_fall_back() {
        assert_eq!(generate_slug(""), "post");
        assert_eq!(generate_slug("   "), "post");
        assert_eq!(generate_slug("🎉🚀"), "post");
        assert_eq!(generate_slug("!!!"), "post");
    }

    #[test]
    fn apostrophes_are_removed_not_hyphenated() {
        assert_eq!(generate_slug("It's done"), "its-done");
        assert_eq!(generate_slug("Don\u{2019}t panic"), "dont-panic");
    }

    #[test]
    fn emoji_inside_title_are_dropped() {
        assert_eq!(generate_slug("Launch 🚀 Day"), "launch-day");
        assert_eq!(generate_slug("Sol☀️mar"), "sol-mar");
    }

    #[test]
    fn uppercase_accents_map_to_base_letters() {
        assert_eq!(generate_slug("AÇÃO ÚNICA"), "acao-unica");
    }

    #[test]
    fn unmapped_characters_become_separators() {
        assert_eq!(generate_slug("Zürich Łódź"), "zurich-od");
        assert_eq!(generate_slug("東京 2025"), "2025");
    }

    #[test]
    fn generated_slugs_are_always_valid() {
        let titles = [
            "Agenda de Eventos — Março",
            "100% pure",
            "a",
            "C'est la vie!",
            "  multiple   spaces\tand\nnewlines ",
            "🎉 party 🎉",
            "ÀÉÎÕÜ",
        ];
        for title in titles {
            let slug = generate_slug(title);
            assert!(is_valid_slug(&slug), "{title:?} produced {slug:?}");
        }
    }

    #[test]
    fn slug_pattern_predicate() {
        assert!(is_valid_slug("abc-123"));
        assert!(is_valid_slug("post"));
        assert!(!is_valid_slug("Abc-123"));
        assert!(!is_valid_slug("-abc"));
        assert!(!is_valid_slug("abc-"));
        assert!(!is_valid_slug("abc--def"));
        assert!(!is_valid_slug("abc def"));
        assert!(!is_valid_slug(""));
    }
}
