//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn name() -> String {
        "My Site".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "output".into()
    }

    pub fn posts_per_page() -> usize {
        10
    }

    pub fn previews_per_page() -> usize {
        10
    }

    pub fn date_format() -> String {
        "%Y-%m-%d".into()
    }

    pub fn words_per_minute() -> usize {
        200
    }
}
