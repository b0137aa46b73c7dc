//! Slug Resolver: route parameters → catalog records.
//!
//! A service page needs both its [`ServiceSummary`] and its
//! [`ServiceDetail`]. If either half is missing the slug resolves to
//! not-found; a page is never rendered from partial data.

use crate::catalog::Catalog;
use crate::routes::RouteError;
use crate::types::{Category, ResourcePost, ServiceDetail, ServiceSummary};

/// Both halves of a service, borrowed from the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServicePage<'a> {
    pub summary: &'a ServiceSummary,
    pub detail: &'a ServiceDetail,
}

pub fn resolve_service<'a>(
    catalog: &'a Catalog,
    slug: &str,
) -> Result<ServicePage<'a>, RouteError> {
    match (catalog.service_summary(slug), catalog.service_detail(slug)) {
        (Some(summary), Some(detail)) => Ok(ServicePage { summary, detail }),
        _ => Err(RouteError::NotFound(format!("/services/{slug}"))),
    }
}

pub fn resolve_resource<'a>(
    catalog: &'a Catalog,
    slug: &str,
) -> Result<&'a ResourcePost, RouteError> {
    catalog
        .resource_post(slug)
        .ok_or_else(|| RouteError::NotFound(format!("/resources/{slug}")))
}

pub fn resolve_category(slug: &str) -> Result<Category, RouteError> {
    Category::from_slug(slug)
        .ok_or_else(|| RouteError::NotFound(format!("/services/category/{slug}")))
}
