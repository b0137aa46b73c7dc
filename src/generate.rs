//! Site generation.
//!
//! Renders every route in the catalog to a file under the output directory.
//! Rendering is pure ([`render_route`]); this module owns the I/O around it.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── sitemap.xml
//! ├── robots.txt
//! ├── services/
//! │   ├── index.html
//! │   ├── category/cybersecurity/index.html
//! │   └── managed-it-services/index.html
//! ├── resources/
//! │   ├── index.html                # page 1
//! │   ├── page/2/index.html         # page 2, 3, ...
//! │   └── backup-3-2-1-rule/index.html
//! ├── why-choose-us/index.html
//! ├── ...
//! └── images/                       # copied from <source>/assets/
//! ```
//!
//! Pages render in parallel on a dedicated rayon pool sized by
//! `build.max_threads`. The [`Catalog`] is immutable, so workers share it
//! by reference.

use crate::catalog::Catalog;
use crate::config::{self, SiteConfig};
use crate::layout::RenderContext;
use crate::paginate::{self, RESOURCES_PER_PAGE};
use crate::pages;
use crate::resolve;
use crate::routes::{self, Route, RouteError};
use crate::sitemap;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Route error: {0}")]
    Route(#[from] RouteError),
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// One file written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Logical route path, e.g. `/resources?page=2`.
    pub path: String,
    /// File relative to the output directory.
    pub file: String,
    pub bytes: usize,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    /// Written files in route order.
    pub files: Vec<WrittenFile>,
    pub assets_copied: usize,
    pub threads: usize,
}

impl BuildReport {
    /// Number of HTML pages (excludes sitemap and robots).
    pub fn page_count(&self) -> usize {
        self.files.iter().filter(|f| f.file.ends_with(".html")).count()
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Render one route to its final text (HTML, XML, or plain text).
///
/// Slugs and page numbers are re-checked against the catalog, so a route
/// built by hand rather than by [`Route::parse`] fails the same way.
pub fn render_route(route: &Route, ctx: &RenderContext) -> Result<String, RouteError> {
    let markup = match route {
        Route::Home => pages::home(ctx),
        Route::Services => pages::services_index(ctx),
        Route::ServiceCategory(category) => pages::service_category(ctx, *category),
        Route::ServiceDetail(slug) => {
            pages::service_detail(ctx, resolve::resolve_service(ctx.catalog, slug)?)
        }
        Route::Resources { page } => {
            let requested = i64::try_from(*page).unwrap_or(i64::MAX);
            let window = paginate::paginate_items(
                ctx.catalog.resource_posts(),
                RESOURCES_PER_PAGE,
                requested,
            )?;
            pages::resources_index(ctx, &window)
        }
        Route::ResourceDetail(slug) => {
            pages::resource_article(ctx, resolve::resolve_resource(ctx.catalog, slug)?)
        }
        Route::WhyChooseUs => pages::why_choose_us(ctx),
        Route::Contact => pages::contact(ctx),
        Route::Privacy => pages::privacy(ctx),
        Route::Terms => pages::terms(ctx),
        Route::NotFound => pages::not_found(ctx),
        Route::Sitemap => {
            let entries = sitemap::build_sitemap(ctx.config.base_url(), ctx.catalog, ctx.now);
            return Ok(sitemap::render_sitemap_xml(&entries));
        }
        Route::Robots => return Ok(sitemap::render_robots_txt(ctx.config.base_url())),
    };
    Ok(markup.into_string())
}

/// Parse a request path and render it.
pub fn render_request(request: &str, ctx: &RenderContext) -> Result<String, RouteError> {
    let route = Route::parse(request, ctx.catalog)?;
    render_route(&route, ctx)
}

pub fn generate(
    catalog: &Catalog,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
    now: DateTime<Utc>,
) -> Result<BuildReport, GenerateError> {
    let ctx = RenderContext::new(catalog, config, now);
    fs::create_dir_all(output_dir)?;

    // Assets first so generated pages win on a name clash
    let assets_dir = source_dir.join(&config.build.assets_dir);
    let assets_copied = copy_assets(&assets_dir, output_dir)?;

    let threads = config::effective_threads(&config.build);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;

    let routes = routes::all_routes(catalog);
    info!(routes = routes.len(), threads, "rendering site");

    let files = pool.install(|| {
        routes
            .par_iter()
            .map(|route| write_route(route, &ctx, output_dir))
            .collect::<Result<Vec<_>, GenerateError>>()
    })?;

    info!(
        files = files.len(),
        assets = assets_copied,
        output = %output_dir.display(),
        "site generated"
    );
    Ok(BuildReport {
        output_dir: output_dir.to_path_buf(),
        files,
        assets_copied,
        threads,
    })
}

fn write_route(
    route: &Route,
    ctx: &RenderContext,
    output_dir: &Path,
) -> Result<WrittenFile, GenerateError> {
    let body = render_route(route, ctx)?;
    let file = route.output_file();
    let dest = output_dir.join(&file);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dest, &body)?;
    debug!(path = %route.path(), file = %file, bytes = body.len(), "wrote");
    Ok(WrittenFile {
        path: route.path(),
        file,
        bytes: body.len(),
    })
}

/// Copy the assets tree to the output root. Returns the number of files.
///
/// A missing assets directory is not an error; the site just has no static
/// files beyond what is generated.
fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        debug!(dir = %assets_dir.display(), "no assets directory");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(assets_dir)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        let dest = output_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)?;
            copied += 1;
        }
    }
    debug!(copied, "copied assets");
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn build_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 6).unwrap()
    }

    #[test]
    fn render_route_covers_every_route() {
        let catalog = Catalog::builtin().unwrap();
        let config = test_config();
        let ctx = RenderContext::new(&catalog, &config, build_time());
        for route in routes::all_routes(&catalog) {
            let body = render_route(&route, &ctx).unwrap();
            assert!(!body.is_empty(), "{route:?} rendered nothing");
            if route.is_page() {
                assert!(body.starts_with("<!DOCTYPE html>"), "{route:?}");
            }
        }
    }

    #[test]
    fn render_route_rejects_unresolvable_routes() {
        let catalog = sample_catalog(2);
        let config = test_config();
        let ctx = RenderContext::new(&catalog, &config, build_time());

        let err = render_route(&Route::ServiceDetail("summary-only".into()), &ctx).unwrap_err();
        assert_eq!(err, RouteError::NotFound("/services/summary-only".into()));
        assert!(matches!(
            render_route(&Route::Resources { page: 2 }, &ctx),
            Err(RouteError::OutOfRange { total_pages: 1, .. })
        ));
        assert!(render_route(&Route::Resources { page: usize::MAX }, &ctx).is_err());
        assert!(render_route(&Route::ResourceDetail("nope".into()), &ctx).is_err());
    }

    #[test]
    fn render_request_parses_then_renders() {
        let catalog = Catalog::builtin().unwrap();
        let config = test_config();
        let ctx = RenderContext::new(&catalog, &config, build_time());

        let html = render_request("/services/managed-it-services", &ctx).unwrap();
        assert!(html.contains("Managed IT Services"));
        let robots = render_request("/robots.txt", &ctx).unwrap();
        assert!(robots.contains("Sitemap: https://example.test/sitemap.xml"));
        assert!(matches!(
            render_request("/resources?page=3", &ctx),
            Err(RouteError::OutOfRange { .. })
        ));
    }

    #[test]
    fn generate_writes_every_route() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("dist");
        let catalog = sample_catalog(8);
        let config = test_config();

        let report = generate(&catalog, &config, tmp.path(), &output, build_time()).unwrap();

        assert_eq!(report.files.len(), routes::all_routes(&catalog).len());
        for written in &report.files {
            assert!(output.join(&written.file).is_file(), "missing {}", written.file);
        }
        assert!(output.join("index.html").is_file());
        assert!(output.join("404.html").is_file());
        assert!(output.join("resources/page/2/index.html").is_file());
        assert!(!output.join("services/summary-only").exists());
        assert_eq!(report.page_count(), report.files.len() - 2);
        assert_eq!(report.assets_copied, 0);
    }

    #[test]
    fn generate_preserves_route_order() {
        let tmp = TempDir::new().unwrap();
        let catalog = sample_catalog(1);
        let config = test_config();
        let report = generate(&catalog, &config, tmp.path(), &tmp.path().join("out"), build_time())
            .unwrap();
        let paths: Vec<String> = report.files.iter().map(|f| f.path.clone()).collect();
        let expected: Vec<String> = routes::all_routes(&catalog).iter().map(Route::path).collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn generate_copies_assets() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        fs::create_dir_all(assets.join("images/resources")).unwrap();
        fs::write(assets.join("favicon.svg"), "<svg/>").unwrap();
        fs::write(assets.join("images/resources/post-1.jpg"), "jpg").unwrap();
        let output = tmp.path().join("dist");

        let catalog = sample_catalog(1);
        let config = test_config();
        let report = generate(&catalog, &config, tmp.path(), &output, build_time()).unwrap();

        assert_eq!(report.assets_copied, 2);
        assert_eq!(fs::read_to_string(output.join("favicon.svg")).unwrap(), "<svg/>");
        assert!(output.join("images/resources/post-1.jpg").is_file());
    }

    #[test]
    fn generated_pages_override_assets() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("index.html"), "stale").unwrap();
        let output = tmp.path().join("dist");

        let catalog = sample_catalog(0);
        let config = test_config();
        generate(&catalog, &config, tmp.path(), &output, build_time()).unwrap();
        let index = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn generated_sitemap_uses_build_time() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("dist");
        let catalog = sample_catalog(2);
        let config = test_config();
        generate(&catalog, &config, tmp.path(), &output, build_time()).unwrap();

        let xml = fs::read_to_string(output.join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://example.test/resources/post-2</loc>"));
        assert!(xml.contains("<lastmod>2026-02-03T04:05:06Z</lastmod>"));
    }
}
