// src/infrastructure/util.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::config::SlugStrategy;
use crate::domain::post::slug::{slug_candidate, strip_decorations};

/// Maps Portuguese / Latin-1 accents to ASCII and turns every other
/// character into a separator.
#[derive(Default, Clone)]
pub struct LocaleSlugGenerator;

impl SlugGenerator for LocaleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug_candidate(input)
    }
}

/// Transliterates any script to ASCII (`Łódź` -> `lodz`) after the same
/// emoji and apostrophe stripping as [`LocaleSlugGenerator`].
#[derive(Default, Clone)]
pub struct TransliteratingSlugGenerator;

impl SlugGenerator for TransliteratingSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(strip_decorations(input))
    }
}

pub fn slug_generator_for(strategy: SlugStrategy) -> Arc<dyn SlugGenerator> {
    match strategy {
        SlugStrategy::Locale => Arc::new(LocaleSlugGenerator),
        SlugStrategy::Transliterate => Arc::new(TransliteratingSlugGenerator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::slug::is_valid_slug;

    #[test]
    fn locale_generator_keeps_unmapped_characters_as_separators() {
        assert_eq!(LocaleSlugGenerator.slugify("Zürich Łódź"), "zurich-od");
    }

    #[test]
    fn transliterating_generator_covers_other_scripts() {
        let slugger = TransliteratingSlugGenerator;
        assert_eq!(slugger.slugify("Zürich Łódź"), "zurich-lodz");
        assert_eq!(slugger.slugify("São João's Café"), "sao-joaos-cafe");
        assert_eq!(slugger.slugify("🎉🚀"), "");
        assert!(is_valid_slug(&slugger.slugify("Привет, мир!")));
    }

    #[test]
    fn generators_leave_fallback_to_the_caller() {
        assert_eq!(LocaleSlugGenerator.slugify("!!! 🎉"), "");
        assert_eq!(TransliteratingSlugGenerator.slugify("   "), "");
    }

    #[test]
    fn factory_follows_strategy() {
        assert_eq!(slug_generator_for(SlugStrategy::Locale).slugify("Łódź"), "od");
        assert_eq!(slug_generator_for(SlugStrategy::Transliterate).slugify("Łódź"), "lodz");
    }
}
