//! The site's route surface.
//!
//! | Route | Logical path | Output file |
//! |-------|--------------|-------------|
//! | Home | `/` | `index.html` |
//! | Services | `/services` | `services/index.html` |
//! | ServiceCategory | `/services/category/{slug}` | `services/category/{slug}/index.html` |
//! | ServiceDetail | `/services/{slug}` | `services/{slug}/index.html` |
//! | Resources | `/resources?page={n}` | `resources/index.html`, `resources/page/{n}/index.html` |
//! | ResourceDetail | `/resources/{slug}` | `resources/{slug}/index.html` |
//! | WhyChooseUs, Contact, Privacy, Terms | `/why-choose-us` ... | `why-choose-us/index.html` ... |
//! | Sitemap | `/sitemap.xml` | `sitemap.xml` |
//! | Robots | `/robots.txt` | `robots.txt` |
//! | NotFound | `/404` | `404.html` |
//!
//! Static hosts ignore query strings, so resource pages after the first are
//! written to, and linked as, `/resources/page/{n}`. [`Route::parse`] accepts
//! both forms.
//!
//! Parsing validates against the catalog: an unknown slug or an invalid page
//! number fails with a [`RouteError`] rather than producing a route that
//! would later render nothing.

use crate::catalog::Catalog;
use crate::paginate::{self, RESOURCES_PER_PAGE};
use crate::resolve;
use crate::types::Category;
use thiserror::Error;

/// Why a request has no page. Both kinds are answered with 404.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no such page: {0}")]
    NotFound(String),
    #[error("page {requested:?} is out of range (1..={total_pages})")]
    OutOfRange {
        requested: String,
        total_pages: usize,
    },
}

impl RouteError {
    /// HTTP status code for this outcome.
    pub fn status(&self) -> u16 {
        404
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Services,
    ServiceCategory(Category),
    ServiceDetail(String),
    Resources { page: usize },
    ResourceDetail(String),
    WhyChooseUs,
    Contact,
    Privacy,
    Terms,
    Sitemap,
    Robots,
    NotFound,
}

impl Route {
    /// Parse a request path (optionally with `?query`) into a route.
    ///
    /// Trailing slashes and `index.html` / `.html` suffixes are ignored.
    pub fn parse(request: &str, catalog: &Catalog) -> Result<Route, RouteError> {
        let (raw_path, query) = match request.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (request, None),
        };
        let path = normalize_path(raw_path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["services"] => Route::Services,
            ["services", "category", slug] => {
                Route::ServiceCategory(resolve::resolve_category(slug)?)
            }
            ["services", slug] => {
                resolve::resolve_service(catalog, slug)?;
                Route::ServiceDetail(slug.to_string())
            }
            ["resources"] => {
                let raw_page = query.and_then(|q| query_param(q, "page"));
                resources_route(catalog, raw_page.as_deref())?
            }
            ["resources", "page", n] => resources_route(catalog, Some(*n))?,
            ["resources", slug] => {
                resolve::resolve_resource(catalog, slug)?;
                Route::ResourceDetail(slug.to_string())
            }
            ["why-choose-us"] => Route::WhyChooseUs,
            ["contact"] => Route::Contact,
            ["privacy"] => Route::Privacy,
            ["terms"] => Route::Terms,
            ["sitemap.xml"] => Route::Sitemap,
            ["robots.txt"] => Route::Robots,
            ["404"] => Route::NotFound,
            _ => return Err(RouteError::NotFound(format!("/{}", segments.join("/")))),
        };
        Ok(route)
    }

    /// Logical path, with pagination as a query (`/resources?page=2`).
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Services => "/services".to_string(),
            Route::ServiceCategory(c) => format!("/services/category/{}", c.slug()),
            Route::ServiceDetail(slug) => format!("/services/{slug}"),
            Route::Resources { page: 1 } => "/resources".to_string(),
            Route::Resources { page } => format!("/resources?page={page}"),
            Route::ResourceDetail(slug) => format!("/resources/{slug}"),
            Route::WhyChooseUs => "/why-choose-us".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Privacy => "/privacy".to_string(),
            Route::Terms => "/terms".to_string(),
            Route::Sitemap => "/sitemap.xml".to_string(),
            Route::Robots => "/robots.txt".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Link target that works on a plain static file host. Canonical links
    /// use this form so they name the file actually served.
    pub fn href(&self) -> String {
        match self {
            Route::Resources { page } if *page > 1 => format!("/resources/page/{page}"),
            Route::NotFound => "/404.html".to_string(),
            _ => self.path(),
        }
    }

    /// Output file relative to the site root.
    pub fn output_file(&self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            Route::Sitemap => "sitemap.xml".to_string(),
            Route::Robots => "robots.txt".to_string(),
            Route::NotFound => "404.html".to_string(),
            _ => format!("{}/index.html", self.href().trim_start_matches('/')),
        }
    }

    /// Whether the route renders an HTML document.
    pub fn is_page(&self) -> bool {
        !matches!(self, Route::Sitemap | Route::Robots)
    }
}

fn resources_route(catalog: &Catalog, raw_page: Option<&str>) -> Result<Route, RouteError> {
    let bounds = paginate::paginate_query(
        catalog.resource_posts().len(),
        RESOURCES_PER_PAGE,
        raw_page,
    )?;
    Ok(Route::Resources { page: bounds.page })
}

fn normalize_path(path: &str) -> &str {
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix("/index.html").unwrap_or(path);
    let path = if path == "index.html" { "" } else { path };
    path.strip_suffix(".html").unwrap_or(path)
}

/// First value of `key` in a URL-encoded query string.
fn query_param(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Every HTML page the site consists of, in a stable order.
///
/// Services whose summary has no detail record are skipped, since they have
/// no renderable page.
pub fn page_routes(catalog: &Catalog) -> Vec<Route> {
    let mut routes = vec![Route::Home, Route::Services];
    routes.extend(Category::ALL.into_iter().map(Route::ServiceCategory));
    routes.extend(
        catalog
            .services()
            .iter()
            .filter(|s| resolve::resolve_service(catalog, &s.slug).is_ok())
            .map(|s| Route::ServiceDetail(s.slug.clone())),
    );
    let pages = paginate::total_pages(catalog.resource_posts().len(), RESOURCES_PER_PAGE);
    routes.extend((1..=pages).map(|page| Route::Resources { page }));
    routes.extend(
        catalog
            .resource_posts()
            .iter()
            .map(|p| Route::ResourceDetail(p.slug.clone())),
    );
    routes.extend([
        Route::WhyChooseUs,
        Route::Contact,
        Route::Privacy,
        Route::Terms,
        Route::NotFound,
    ]);
    routes
}

/// [`page_routes`] plus the generated `sitemap.xml` and `robots.txt`.
pub fn all_routes(catalog: &Catalog) -> Vec<Route> {
    let mut routes = page_routes(catalog);
    routes.extend([Route::Sitemap, Route::Robots]);
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn parse(path: &str) -> Result<Route, RouteError> {
        Route::parse(path, &Catalog::builtin().unwrap())
    }

    #[test]
    fn parses_static_routes() {
        assert_eq!(parse("/"), Ok(Route::Home));
        assert_eq!(parse(""), Ok(Route::Home));
        assert_eq!(parse("/index.html"), Ok(Route::Home));
        assert_eq!(parse("/services"), Ok(Route::Services));
        assert_eq!(parse("/why-choose-us/"), Ok(Route::WhyChooseUs));
        assert_eq!(parse("/contact/index.html"), Ok(Route::Contact));
        assert_eq!(parse("/privacy"), Ok(Route::Privacy));
        assert_eq!(parse("/terms"), Ok(Route::Terms));
        assert_eq!(parse("/sitemap.xml"), Ok(Route::Sitemap));
        assert_eq!(parse("/robots.txt"), Ok(Route::Robots));
        assert_eq!(parse("/404.html"), Ok(Route::NotFound));
    }

    #[test]
    fn parses_service_detail() {
        assert_eq!(
            parse("/services/managed-it-services"),
            Ok(Route::ServiceDetail("managed-it-services".into()))
        );
        assert!(matches!(
            parse("/services/nonexistent-service"),
            Err(RouteError::NotFound(_))
        ));
    }

    #[test]
    fn parses_category() {
        assert_eq!(
            parse("/services/category/web-communications"),
            Ok(Route::ServiceCategory(Category::WebCommunications))
        );
        assert!(parse("/services/category/unknown").is_err());
    }

    #[test]
    fn parses_resource_pages() {
        assert_eq!(parse("/resources"), Ok(Route::Resources { page: 1 }));
        assert_eq!(parse("/resources?page=2"), Ok(Route::Resources { page: 2 }));
        assert_eq!(parse("/resources/page/2/"), Ok(Route::Resources { page: 2 }));
        assert_eq!(
            parse("/resources?utm_source=x&page=2"),
            Ok(Route::Resources { page: 2 })
        );
    }

    #[test]
    fn resource_page_out_of_range() {
        assert_eq!(
            parse("/resources?page=3"),
            Err(RouteError::OutOfRange {
                requested: "3".into(),
                total_pages: 2
            })
        );
        assert!(parse("/resources?page=0").is_err());
        assert!(parse("/resources?page=abc").is_err());
        assert!(parse("/resources/page/9").is_err());
    }

    #[test]
    fn parses_resource_detail() {
        assert_eq!(
            parse("/resources/backup-3-2-1-rule"),
            Ok(Route::ResourceDetail("backup-3-2-1-rule".into()))
        );
        assert!(parse("/resources/missing-article").is_err());
    }

    #[test]
    fn unknown_paths_not_found() {
        assert_eq!(
            parse("/careers/"),
            Err(RouteError::NotFound("/careers".into()))
        );
        assert!(parse("/services/a/b/c").is_err());
    }

    #[test]
    fn both_errors_are_404() {
        assert_eq!(RouteError::NotFound("/x".into()).status(), 404);
        let out = RouteError::OutOfRange {
            requested: "3".into(),
            total_pages: 2,
        };
        assert_eq!(out.status(), 404);
    }

    #[test]
    fn paths_hrefs_and_files() {
        let cases = [
            (Route::Home, "/", "/", "index.html"),
            (Route::Services, "/services", "/services", "services/index.html"),
            (
                Route::ServiceCategory(Category::Cybersecurity),
                "/services/category/cybersecurity",
                "/services/category/cybersecurity",
                "services/category/cybersecurity/index.html",
            ),
            (
                Route::Resources { page: 1 },
                "/resources",
                "/resources",
                "resources/index.html",
            ),
            (
                Route::Resources { page: 2 },
                "/resources?page=2",
                "/resources/page/2",
                "resources/page/2/index.html",
            ),
            (Route::NotFound, "/404", "/404.html", "404.html"),
            (Route::Sitemap, "/sitemap.xml", "/sitemap.xml", "sitemap.xml"),
        ];
        for (route, path, href, file) in cases {
            assert_eq!(route.path(), path);
            assert_eq!(route.href(), href);
            assert_eq!(route.output_file(), file);
        }
    }

    #[test]
    fn every_page_route_parses_back() {
        let catalog = Catalog::builtin().unwrap();
        for route in page_routes(&catalog) {
            assert_eq!(Route::parse(&route.path(), &catalog), Ok(route.clone()));
            assert_eq!(Route::parse(&route.href(), &catalog), Ok(route));
        }
    }

    #[test]
    fn page_routes_counts() {
        let catalog = Catalog::builtin().unwrap();
        let routes = page_routes(&catalog);
        // home + services + 4 categories + 11 services + 2 resource pages
        // + 11 posts + 4 static pages + 404
        assert_eq!(routes.len(), 1 + 1 + 4 + 11 + 2 + 11 + 4 + 1);
        assert!(routes.iter().all(Route::is_page));
    }

    #[test]
    fn all_routes_adds_artifacts() {
        let catalog = sample_catalog(1);
        let all = all_routes(&catalog);
        assert_eq!(all.len(), page_routes(&catalog).len() + 2);
        let artifacts: Vec<&Route> = all.iter().filter(|r| !r.is_page()).collect();
        assert_eq!(artifacts, vec![&Route::Sitemap, &Route::Robots]);
    }

    #[test]
    fn page_routes_skip_incomplete_services() {
        let catalog = sample_catalog(0);
        let routes = page_routes(&catalog);
        assert!(routes.contains(&Route::ServiceDetail("managed-it-services".into())));
        assert!(!routes.contains(&Route::ServiceDetail("summary-only".into())));
        assert!(routes.contains(&Route::Resources { page: 1 }));
    }
}
