//! Sitemap Builder.
//!
//! Enumerates every publicly addressable URL in a fixed order:
//!
//! ```text
//! static routes (7) → category routes (4) → one per service → one per post
//! ```
//!
//! Content records carry no modification time, so every entry is stamped
//! with the build time passed in by the caller.

use crate::catalog::Catalog;
use crate::routes::Route;
use crate::types::Category;
use chrono::{DateTime, SecondsFormat, Utc};
use maud::{PreEscaped, html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
}

/// Top-level pages, in sitemap order.
pub fn static_routes() -> [Route; 7] {
    [
        Route::Home,
        Route::Services,
        Route::Resources { page: 1 },
        Route::Contact,
        Route::WhyChooseUs,
        Route::Privacy,
        Route::Terms,
    ]
}

pub fn build_sitemap(base_url: &str, catalog: &Catalog, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let entry = |path: String| SitemapEntry {
        url: format!("{base}{path}"),
        last_modified: now,
    };

    let statics = static_routes().into_iter().map(|r| r.path());
    let categories = Category::ALL
        .into_iter()
        .map(|c| Route::ServiceCategory(c).path());
    let services = catalog
        .services()
        .iter()
        .map(|s| Route::ServiceDetail(s.slug.clone()).path());
    let posts = catalog
        .resource_posts()
        .iter()
        .map(|p| Route::ResourceDetail(p.slug.clone()).path());

    statics
        .chain(categories)
        .chain(services)
        .chain(posts)
        .map(entry)
        .collect()
}

/// Serialize entries as a sitemaps.org 0.9 `urlset`.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let markup = html! {
        (PreEscaped(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        "\n"
        urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" {
            @for entry in entries {
                "\n  "
                url {
                    loc { (entry.url) }
                    lastmod { (entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)) }
                }
            }
            "\n"
        }
        "\n"
    };
    markup.into_string()
}

pub fn render_robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn build_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn entry_count_matches_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let entries = build_sitemap("https://quadtechconsulting.com", &catalog, build_time());
        assert_eq!(
            entries.len(),
            static_routes().len()
                + Category::ALL.len()
                + catalog.services().len()
                + catalog.resource_posts().len()
        );
    }

    #[test]
    fn urls_are_unique() {
        let catalog = Catalog::builtin().unwrap();
        let entries = build_sitemap("https://quadtechconsulting.com", &catalog, build_time());
        let unique: HashSet<&str> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(unique.len(), entries.len());
    }

    #[test]
    fn composition_order() {
        let catalog = sample_catalog(2);
        let urls: Vec<String> = build_sitemap("https://example.test/", &catalog, build_time())
            .into_iter()
            .map(|e| e.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://example.test/",
                "https://example.test/services",
                "https://example.test/resources",
                "https://example.test/contact",
                "https://example.test/why-choose-us",
                "https://example.test/privacy",
                "https://example.test/terms",
                "https://example.test/services/category/cybersecurity",
                "https://example.test/services/category/cloud-infrastructure",
                "https://example.test/services/category/web-communications",
                "https://example.test/services/category/it-management",
                "https://example.test/services/managed-it-services",
                "https://example.test/services/penetration-testing",
                "https://example.test/services/summary-only",
                "https://example.test/resources/post-1",
                "https://example.test/resources/post-2",
            ]
        );
    }

    #[test]
    fn every_entry_stamped_with_build_time() {
        let catalog = sample_catalog(3);
        let entries = build_sitemap("https://example.test", &catalog, build_time());
        assert!(entries.iter().all(|e| e.last_modified == build_time()));
    }

    #[test]
    fn xml_output() {
        let entries = vec![SitemapEntry {
            url: "https://example.test/?a=1&b=2".to_string(),
            last_modified: build_time(),
        }];
        let xml = render_sitemap_xml(&entries);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert_contains_all(
            &xml,
            &[
                r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
                "<loc>https://example.test/?a=1&amp;b=2</loc>",
                "<lastmod>2026-03-01T12:00:00Z</lastmod>",
                "</urlset>",
            ],
        );
    }

    #[test]
    fn xml_has_one_url_per_entry() {
        let catalog = Catalog::builtin().unwrap();
        let entries = build_sitemap("https://quadtechconsulting.com", &catalog, build_time());
        let xml = render_sitemap_xml(&entries);
        assert_eq!(count_occurrences(&xml, "<url>"), entries.len());
    }

    #[test]
    fn robots_points_at_sitemap() {
        assert_eq!(
            render_robots_txt("https://example.test/"),
            "User-agent: *\nAllow: /\n\nSitemap: https://example.test/sitemap.xml\n"
        );
    }
}
