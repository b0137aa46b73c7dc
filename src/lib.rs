//! # QuadTech Site
//!
//! Static site generator for the QuadTech Consulting marketing website. The
//! services, resource articles, and company values live in a typed content
//! catalog; every page of the site is rendered from it.
//!
//! # Architecture: Catalog → Routes → Files
//!
//! ```text
//! 1. Load      built-in content or catalog.toml  →  Catalog (validated)
//! 2. Route     Catalog  →  every addressable Route (pages, sitemap, robots)
//! 3. Render    Route + RenderContext  →  dist/<route>/index.html
//! ```
//!
//! The catalog is validated once at load: slugs are well formed and unique,
//! and every service detail has a matching summary. After that, routing and
//! rendering only ever look things up, so a route produced by
//! [`routes::Route::parse`] always renders.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Content records: services, details, posts, values, categories, icons |
//! | [`content`] | The built-in QuadTech content set |
//! | [`catalog`] | Validated, immutable collection with slug lookups |
//! | [`slug`] | Slug shape rules enforced when a catalog is built |
//! | [`resolve`] | Slug → record resolution for detail pages |
//! | [`paginate`] | Page-window arithmetic for the resources listing |
//! | [`routes`] | The route table: parsing, logical paths, output files |
//! | [`seo`] | Meta tags, Open Graph, and JSON-LD structured data |
//! | [`layout`] | Document shell, navigation, footer, and shared section blocks |
//! | [`pages`] | One renderer per page |
//! | [`sitemap`] | `sitemap.xml` and `robots.txt` |
//! | [`generate`] | Renders every route to the output directory in parallel |
//! | [`config`] | `site.toml` loading, environment overrides, validation, CSS variables |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup is
//! a build error, interpolation is escaped, and there is no template directory
//! to ship alongside the binary.
//!
//! ## Query-Free Output Paths
//!
//! The resources listing is addressed as `/resources?page=n`, but static hosts
//! ignore query strings. Page one is written to `resources/index.html` and
//! later pages to `resources/page/{n}/index.html`. Links and canonical URLs
//! both use the static form, and `render` still accepts the query form.
//!
//! ## Build-Time Timestamps
//!
//! Content has no modification times. The sitemap `lastmod` and the footer
//! copyright year both come from a single `now` captured when the build starts,
//! so one build is internally consistent and tests can pin the clock.

pub mod catalog;
pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod logging;
pub mod output;
pub mod pages;
pub mod paginate;
pub mod resolve;
pub mod routes;
pub mod seo;
pub mod sitemap;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
