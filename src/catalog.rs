//! The Content Catalog.
//!
//! A [`Catalog`] is built once at startup, either from the production content
//! compiled into the binary ([`Catalog::builtin`]) or from a TOML file
//! ([`Catalog::load`]), and is read-only afterwards. It is handed by
//! reference to the resolver, paginator, sitemap builder, and page composer,
//! which lets tests substitute small hand-built catalogs.
//!
//! ## Validation
//!
//! Construction rejects content that could produce broken URLs or
//! ambiguous lookups:
//!
//! - every slug must be lowercase kebab-case ([`crate::slug::check_slug`])
//! - service slugs and post slugs are each unique
//! - a detail record must have a matching summary
//! - a post must not list the same tag twice
//!
//! A summary *without* a detail is accepted. It still shows up in listings
//! and the sitemap, but its detail route resolves to not-found.
//!
//! ## TOML format
//!
//! ```toml
//! [[services]]
//! slug = "managed-it-services"
//! title = "Managed IT Services"
//! description = "..."
//! image = "/images/managed-it.jpg"
//! category = "it-management"
//! icon = "server"
//!
//! [[details]]
//! slug = "managed-it-services"
//! title = "Managed IT Services"
//! short_description = "..."
//! long_description = "..."
//! features = ["Proactive Monitoring"]
//! benefits = ["Predictable monthly IT costs"]
//!
//! [[posts]]
//! slug = "phishing-basics"
//! title = "..."
//! description = "..."
//! image = "/images/resources/phishing.jpg"
//! date = "2025-12-01"
//! reading_time = "5 min read"
//! tags = ["Security"]
//! body = "..."
//! ```

use crate::config::BuildConfig;
use crate::content;
use crate::slug::check_slug;
use crate::types::{Category, CompanyValue, ResourcePost, ServiceDetail, ServiceSummary};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid {kind} slug {slug:?}: {reason}")]
    InvalidSlug {
        kind: &'static str,
        slug: String,
        reason: String,
    },
    #[error("duplicate {kind} slug {slug:?}")]
    DuplicateSlug { kind: &'static str, slug: String },
    #[error("service detail {0:?} has no matching service summary")]
    OrphanDetail(String),
    #[error("resource post {post:?} lists tag {tag:?} more than once")]
    DuplicateTag { post: String, tag: String },
    #[error("resource post {post:?} has an impossible date {date}")]
    InvalidDate { post: String, date: String },
}

/// On-disk shape of a catalog file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogFile {
    services: Vec<ServiceSummary>,
    details: Vec<ServiceDetail>,
    posts: Vec<ResourcePost>,
    values: Vec<CompanyValue>,
}

/// Immutable, validated site content.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<ServiceSummary>,
    service_index: HashMap<String, usize>,
    details: BTreeMap<String, ServiceDetail>,
    posts: Vec<ResourcePost>,
    post_index: HashMap<String, usize>,
    values: Vec<CompanyValue>,
}

impl Catalog {
    pub fn new(
        services: Vec<ServiceSummary>,
        details: Vec<ServiceDetail>,
        posts: Vec<ResourcePost>,
        values: Vec<CompanyValue>,
    ) -> Result<Self, CatalogError> {
        let service_index = index_slugs("service", services.iter().map(|s| s.slug.as_str()))?;

        let mut detail_map = BTreeMap::new();
        for detail in details {
            validate_slug("service detail", &detail.slug)?;
            if !service_index.contains_key(&detail.slug) {
                return Err(CatalogError::OrphanDetail(detail.slug));
            }
            if detail_map.contains_key(&detail.slug) {
                return Err(CatalogError::DuplicateSlug {
                    kind: "service detail",
                    slug: detail.slug,
                });
            }
            detail_map.insert(detail.slug.clone(), detail);
        }

        let post_index = index_slugs("resource post", posts.iter().map(|p| p.slug.as_str()))?;
        for post in &posts {
            let mut seen = HashSet::new();
            for tag in &post.tags {
                if !seen.insert(tag.as_str()) {
                    return Err(CatalogError::DuplicateTag {
                        post: post.slug.clone(),
                        tag: tag.clone(),
                    });
                }
            }
        }

        Ok(Self {
            services,
            service_index,
            details: detail_map,
            posts,
            post_index,
            values,
        })
    }

    /// The production site content.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            content::services(),
            content::service_details(),
            content::resource_posts()?,
            content::company_values(),
        )
    }

    /// Load and validate a TOML catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The catalog a build uses: `build.catalog` under `source_root` when
    /// set, the built-in content otherwise.
    pub fn for_build(source_root: &Path, build: &BuildConfig) -> Result<Self, CatalogError> {
        match &build.catalog {
            Some(file) => Self::load(&source_root.join(file)),
            None => Self::builtin(),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::new(file.services, file.details, file.posts, file.values)
    }

    /// All services in catalog order.
    pub fn services(&self) -> &[ServiceSummary] {
        &self.services
    }

    /// All resource posts in catalog (display) order.
    pub fn resource_posts(&self) -> &[ResourcePost] {
        &self.posts
    }

    pub fn values(&self) -> &[CompanyValue] {
        &self.values
    }

    pub fn service_summary(&self, slug: &str) -> Option<&ServiceSummary> {
        self.service_index.get(slug).map(|&i| &self.services[i])
    }

    pub fn service_detail(&self, slug: &str) -> Option<&ServiceDetail> {
        self.details.get(slug)
    }

    pub fn resource_post(&self, slug: &str) -> Option<&ResourcePost> {
        self.post_index.get(slug).map(|&i| &self.posts[i])
    }

    /// Services in one category, catalog order preserved.
    pub fn services_in(&self, category: Category) -> Vec<&ServiceSummary> {
        self.services
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Services grouped in canonical category order. Empty groups are skipped.
    pub fn service_groups(&self) -> Vec<(Category, Vec<&ServiceSummary>)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.services_in(c)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    /// The first `limit` services other than `slug`, in catalog order.
    pub fn related_services(&self, slug: &str, limit: usize) -> Vec<&ServiceSummary> {
        self.services
            .iter()
            .filter(|s| s.slug != slug)
            .take(limit)
            .collect()
    }
}

fn validate_slug(kind: &'static str, slug: &str) -> Result<(), CatalogError> {
    check_slug(slug).map_err(|problem| CatalogError::InvalidSlug {
        kind,
        slug: slug.to_string(),
        reason: problem.describe(),
    })
}

/// Validate each slug and map it to its position. Rejects duplicates.
fn index_slugs<'a>(
    kind: &'static str,
    slugs: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, CatalogError> {
    let mut index = HashMap::new();
    for (i, slug) in slugs.enumerate() {
        validate_slug(kind, slug)?;
        if index.insert(slug.to_string(), i).is_some() {
            return Err(CatalogError::DuplicateSlug {
                kind,
                slug: slug.to_string(),
            });
        }
    }
    Ok(index)
}
