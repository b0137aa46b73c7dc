//! Shared test utilities for the quadtech-site test suite.
//!
//! Builders for minimal content records plus a small catalog with known
//! shapes, so resolver, pagination, and rendering tests don't depend on the
//! production content.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = sample_catalog(7);
//! assert_eq!(catalog.resource_posts().len(), 7);
//! assert!(catalog.service_detail("summary-only").is_none());
//! ```

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::types::{Category, CompanyValue, Icon, ResourcePost, ServiceDetail, ServiceSummary};

// =========================================================================
// Record builders
// =========================================================================

/// A service summary whose title is derived from the slug.
pub fn service(slug: &str, category: Category) -> ServiceSummary {
    ServiceSummary {
        slug: slug.to_string(),
        title: title_from_slug(slug),
        description: format!("About {slug}"),
        image: format!("/images/{slug}.jpg"),
        category,
        icon: Icon::Server,
    }
}

pub fn detail(slug: &str) -> ServiceDetail {
    ServiceDetail {
        slug: slug.to_string(),
        title: title_from_slug(slug),
        short_description: format!("Short {slug}"),
        long_description: format!("Long description of {slug}"),
        features: vec!["Feature A".into(), "Feature B".into()],
        benefits: vec!["Benefit A".into()],
        cta_text: crate::types::DEFAULT_CTA_TEXT.to_string(),
        process_steps: vec![],
        faqs: vec![],
    }
}

/// A resource post dated 2025-01-01 with two tags.
pub fn post(slug: &str) -> ResourcePost {
    ResourcePost {
        slug: slug.to_string(),
        title: title_from_slug(slug),
        description: format!("Summary of {slug}"),
        image: format!("/images/resources/{slug}.jpg"),
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        reading_time: "3 min read".to_string(),
        tags: vec!["Security".into(), "Cloud".into()],
        body: format!("# {slug}\n\nSome **markdown**."),
    }
}

/// `"managed-it-services"` → `"Managed It Services"`, `"post-2"` → `"Post 2"`.
fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =========================================================================
// Fixture catalogs
// =========================================================================

/// Three services and `post_count` posts named `post-1..=post-N`.
///
/// - `managed-it-services` (IT management) has a detail record and the real title
/// - `penetration-testing` (cybersecurity) has a detail record
/// - `summary-only` (cybersecurity) has no detail record
pub fn sample_catalog(post_count: usize) -> Catalog {
    let mut managed = service("managed-it-services", Category::ItManagement);
    managed.title = "Managed IT Services".to_string();
    let mut managed_detail = detail("managed-it-services");
    managed_detail.title = "Managed IT Services".to_string();

    let posts = (1..=post_count).map(|i| post(&format!("post-{i}"))).collect();

    Catalog::new(
        vec![
            managed,
            service("penetration-testing", Category::Cybersecurity),
            service("summary-only", Category::Cybersecurity),
        ],
        vec![managed_detail, detail("penetration-testing")],
        posts,
        vec![CompanyValue {
            title: "Clear Communication".into(),
            description: "Plain language.".into(),
            icon: Icon::MessageSquare,
        }],
    )
    .unwrap()
}

/// Stock config with a fixed base URL.
pub fn test_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.site.url = "https://example.test".to_string();
    config
}

// =========================================================================
// HTML assertions
// =========================================================================

/// Assert each needle appears in `html`, reporting the first miss.
pub fn assert_contains_all(html: &str, needles: &[&str]) {
    for needle in needles {
        assert!(
            html.contains(needle),
            "expected {needle:?} in rendered output:\n{html}"
        );
    }
}

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count_occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// The `<main>` element of a rendered page, without head styles or chrome.
pub fn main_content(html: &str) -> &str {
    let start = html.find("<main").expect("page has a <main> element");
    let end = html[start..].find("</main>").expect("<main> is closed") + start;
    &html[start..end + "</main>".len()]
}

#[test]
fn main_content_excludes_head_and_footer() {
    let html = "<style>.featured-post{}</style><main id=\"m\">body</main><footer>x</footer>";
    assert_eq!(main_content(html), "<main id=\"m\">body</main>");
}
