//! Slug validation for catalog entries.
//!
//! Every service and resource post is addressed by a slug that appears
//! verbatim in its URL (`/services/{slug}`, `/resources/{slug}`). Slugs are
//! lowercase kebab-case:
//!
//! - `managed-it-services` → valid
//! - `it-consulting-vcio` → valid
//! - `Managed-IT` → uppercase
//! - `-cloud`, `cloud-`, `cloud--solutions` → stray dashes
//! - `cloud_solutions` → underscore

/// Why a slug was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugProblem {
    Empty,
    EdgeDash,
    DoubleDash,
    InvalidChar(char),
}

impl SlugProblem {
    pub fn describe(self) -> String {
        match self {
            SlugProblem::Empty => "slug is empty".to_string(),
            SlugProblem::EdgeDash => "slug starts or ends with '-'".to_string(),
            SlugProblem::DoubleDash => "slug contains '--'".to_string(),
            SlugProblem::InvalidChar(c) => {
                format!("slug contains {c:?}; only a-z, 0-9 and '-' are allowed")
            }
        }
    }
}

/// Check that `slug` is lowercase kebab-case.
pub fn check_slug(slug: &str) -> Result<(), SlugProblem> {
    if slug.is_empty() {
        return Err(SlugProblem::Empty);
    }
    if let Some(c) = slug
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(SlugProblem::InvalidChar(c));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(SlugProblem::EdgeDash);
    }
    if slug.contains("--") {
        return Err(SlugProblem::DoubleDash);
    }
    Ok(())
}
