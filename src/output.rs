//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output leads with what a page *is* (its title or route) and shows files
//! and slugs as indented context. The check output reads as a content
//! inventory; the build output reads as a route table.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Services
//! 001 Managed IT Services [IT Management and Support]
//!     Slug: managed-it-services
//!     CTA: Schedule a Free Consultation
//! 002 Legacy Offering [Cybersecurity]
//!     Slug: legacy-offering
//!     Detail: missing (not rendered)
//!
//! Resources (11 posts, 2 pages)
//! 001 Spotting Phishing Emails
//!     Slug: spotting-phishing-emails
//!     Dec 1, 2025 · 5 min read
//!
//! Config
//!     site.url: https://quadtechconsulting.com
//!     assets: content/assets/
//! ```
//!
//! ## Build
//!
//! ```text
//! / → index.html
//! /services → services/index.html
//! /resources?page=2 → resources/page/2/index.html
//!
//! Generated 35 pages, sitemap.xml, robots.txt (12 assets, 412.8 KB)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::generate::BuildReport;
use crate::paginate::{self, RESOURCES_PER_PAGE};
use crate::routes::RouteError;
use crate::types::format_date_short;
use std::path::Path;

/// Longest description shown in check output before truncation.
const DESCRIPTION_WIDTH: usize = 72;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the content inventory printed by `check`.
pub fn format_check_output(
    catalog: &Catalog,
    config: &SiteConfig,
    source_root: &Path,
) -> Vec<String> {
    let mut lines = vec!["Services".to_string()];
    for (i, service) in catalog.services().iter().enumerate() {
        lines.push(format!(
            "{} {} [{}]",
            format_index(i + 1),
            service.title,
            service.category.name()
        ));
        lines.push(format!("{}Slug: {}", indent(1), service.slug));
        match catalog.service_detail(&service.slug) {
            Some(detail) => lines.push(format!("{}CTA: {}", indent(1), detail.cta_text)),
            None => lines.push(format!("{}Detail: missing (not rendered)", indent(1))),
        }
    }

    let posts = catalog.resource_posts();
    let pages = paginate::total_pages(posts.len(), RESOURCES_PER_PAGE);
    lines.push(String::new());
    lines.push(format!(
        "Resources ({}, {})",
        plural(posts.len(), "post", "posts"),
        plural(pages, "page", "pages")
    ));
    for (i, post) in posts.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), post.title));
        lines.push(format!("{}Slug: {}", indent(1), post.slug));
        lines.push(format!(
            "{}{} · {}",
            indent(1),
            format_date_short(post.date),
            post.reading_time
        ));
        lines.push(format!(
            "{}{}",
            indent(1),
            truncate_desc(&post.description, DESCRIPTION_WIDTH)
        ));
    }

    let assets = source_root.join(&config.build.assets_dir);
    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!("{}site.url: {}", indent(1), config.base_url()));
    if let Some(catalog_file) = &config.build.catalog {
        lines.push(format!("{}catalog: {}", indent(1), source_root.join(catalog_file).display()));
    }
    let assets_note = if assets.is_dir() { "" } else { " (missing)" };
    lines.push(format!("{}assets: {}/{}", indent(1), assets.display(), assets_note));
    lines
}

pub fn print_check_output(catalog: &Catalog, config: &SiteConfig, source_root: &Path) {
    for line in format_check_output(catalog, config, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the route table and summary printed by `build`.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .files
        .iter()
        .map(|f| format!("{} → {}", f.path, f.file))
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, sitemap.xml, robots.txt ({}, {})",
        plural(report.page_count(), "page", "pages"),
        plural(report.assets_copied, "asset", "assets"),
        format_size(report.total_bytes())
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Render
// ============================================================================

/// Explain why `render` could not produce a page.
pub fn format_route_error(request: &str, err: &RouteError) -> Vec<String> {
    let mut lines = vec![format!("{} {}: {}", err.status(), request, err)];
    if let RouteError::OutOfRange { total_pages, .. } = err {
        lines.push(format!("{}valid pages: 1..={}", indent(1), total_pages));
    }
    lines
}
