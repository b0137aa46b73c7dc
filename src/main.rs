use chrono::Utc;
use clap::{Parser, Subcommand};
use quadtech_site::catalog::Catalog;
use quadtech_site::config::SiteConfig;
use quadtech_site::layout::RenderContext;
use quadtech_site::{config, generate, logging, output, pages, sitemap};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Exit code for `render` when the path has no page (404 → 4).
const EXIT_NOT_FOUND: i32 = 4;

fn version_string() -> &'static str {
    let describe = env!("GIT_DESCRIBE");
    let release_tag = concat!("v", env!("CARGO_PKG_VERSION"));
    if describe.is_empty() || describe == release_tag {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}-dev@{describe}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "quadtech-site")]
#[command(about = "Static site generator for the QuadTech Consulting website")]
#[command(long_about = "\
Static site generator for the QuadTech Consulting website

Every page is rendered from the content catalog: the built-in QuadTech
content, or a catalog.toml named by [build].catalog in site.toml.

Source structure:

  content/
  ├── site.toml          # Site config (optional; see gen-config)
  ├── catalog.toml       # Content catalog (optional)
  └── assets/            # Copied verbatim to the output root
      ├── favicon.png
      └── images/

Output:

  dist/
  ├── index.html
  ├── services/{slug}/index.html
  ├── services/category/{slug}/index.html
  ├── resources/index.html, resources/page/{n}/index.html
  ├── resources/{slug}/index.html
  ├── 404.html
  ├── sitemap.xml
  └── robots.txt

Environment overrides (applied after site.toml):
  SITE_URL, SITE_PHONE, SITE_ADDRESS_LINE1, SITE_ADDRESS_LINE2,
  SITE_FACEBOOK_URL, SITE_TWITTER_URL, SITE_LINKEDIN_URL,
  SITE_INSTAGRAM_URL, PLAUSIBLE_DOMAIN

Run 'quadtech-site gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory (site.toml, catalog, assets)
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the whole site into the output directory
    Build,
    /// Validate config and content without writing anything
    Check,
    /// Print sitemap.xml to stdout
    Sitemap,
    /// Render a single request path to stdout
    Render {
        /// Request path, e.g. /services/managed-it-services or /resources?page=2
        path: String,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);
    let now = Utc::now();

    match cli.command {
        Command::Build => {
            let (site_config, catalog) = load_site(&cli.source)?;
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&catalog, &site_config, &cli.source, &cli.output, now)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (site_config, catalog) = load_site(&cli.source)?;
            output::print_check_output(&catalog, &site_config, &cli.source);
            println!("==> Content is valid");
        }
        Command::Sitemap => {
            let (site_config, catalog) = load_site(&cli.source)?;
            let entries = sitemap::build_sitemap(site_config.base_url(), &catalog, now);
            print!("{}", sitemap::render_sitemap_xml(&entries));
        }
        Command::Render { ref path } => {
            let (site_config, catalog) = load_site(&cli.source)?;
            let ctx = RenderContext::new(&catalog, &site_config, now);
            match generate::render_request(path, &ctx) {
                Ok(body) => print!("{}", body),
                Err(err) => {
                    warn!(path = %path, error = %err, "no page for request");
                    for line in output::format_route_error(path, &err) {
                        eprintln!("{}", line);
                    }
                    print!("{}", pages::not_found(&ctx).into_string());
                    std::process::exit(EXIT_NOT_FOUND);
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `site.toml` (plus environment overrides) and the catalog it names.
fn load_site(source: &Path) -> Result<(SiteConfig, Catalog), Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    let catalog = Catalog::for_build(source, &site_config.build)?;
    info!(
        source = %source.display(),
        services = catalog.services().len(),
        posts = catalog.resource_posts().len(),
        "catalog loaded"
    );
    Ok((site_config, catalog))
}
