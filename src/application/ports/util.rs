// src/application/ports/util.rs

/// Turns free text into a slug candidate. Implementations must return
/// a string matching `^[a-z0-9]+(-[a-z0-9]+)*$`, or an empty string when
/// nothing usable survives; callers own the fallback.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
