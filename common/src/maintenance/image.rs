#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Shown in place of a vehicle picture that failed to load.
pub const FALLBACK_IMAGE_URL: &str = "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR5XZQ2SNLQ9I5LwMj2cc6rcAKEDda79PdqgLWLXcj_sUCleekXXQVAFZZbRhRIqZ64y9c&usqp=CAU";

/// Source of a card's `<img>`, swapped to the placeholder at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardImage {
    src: String,
    fallback_applied: bool,
}

impl CardImage {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            src: primary.into(),
            fallback_applied: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }

    /// Handles an `error` event. Returns whether `src` changed; failures of
    /// the placeholder itself are ignored.
    pub fn on_load_error(&mut self) -> bool {
        if self.fallback_applied {
            return false;
        }
        self.fallback_applied = true;
        self.src = FALLBACK_IMAGE_URL.to_string();
        true
    }
}
