//! Site configuration module.
//!
//! Handles loading, validating, and layering `site.toml`. Values are resolved
//! in three layers, each overriding the one before:
//!
//! ```text
//! stock defaults  →  <source>/site.toml  →  environment variables
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "QuadTech Consulting"
//! tagline = "Technology That Powers Your Ambition"
//! description = "We partner with small and mid-sized businesses ..."
//! url = "https://quadtechconsulting.com"  # Base URL for canonical links and the sitemap
//! email = "contact@quadtechconsulting.com"
//! phone = "(207) 751-5564"                 # Empty string hides phone links
//! address_line1 = ""
//! address_line2 = ""
//! facebook_url = ""                        # Empty social links are not rendered
//! twitter_url = ""
//! linkedin_url = ""
//! instagram_url = "https://www.instagram.com/p/DSoDD2cEUzB/"
//!
//! [analytics]
//! # plausible_domain = "quadtechconsulting.com"
//!
//! [colors]
//! brand = "#0d9488"
//! brand_dark = "#0f766e"
//! ink = "#0f172a"
//! muted = "#475569"
//! surface = "#f8fafc"
//! border = "#e2e8f0"
//!
//! [build]
//! assets_dir = "assets"     # Copied verbatim to the output root
//! # max_threads = 4        # Parallel render workers (omit for auto = CPU cores)
//! # catalog = "catalog.toml" # Replace the built-in content with a TOML catalog
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable | Key |
//! |----------|-----|
//! | `SITE_URL` | `site.url` |
//! | `SITE_PHONE` | `site.phone` |
//! | `SITE_ADDRESS_LINE1` / `SITE_ADDRESS_LINE2` | `site.address_line1` / `site.address_line2` |
//! | `SITE_FACEBOOK_URL` / `SITE_TWITTER_URL` | `site.facebook_url` / `site.twitter_url` |
//! | `SITE_LINKEDIN_URL` / `SITE_INSTAGRAM_URL` | `site.linkedin_url` / `site.instagram_url` |
//! | `PLAUSIBLE_DOMAIN` | `analytics.plausible_domain` |
//!
//! Empty environment values are ignored. Unknown keys in `site.toml` are
//! rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of the site config inside the source directory.
pub const CONFIG_FILENAME: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Business identity and contact details, passed through to templates.
    pub site: SiteSettings,
    pub analytics: AnalyticsConfig,
    /// Brand palette emitted as CSS custom properties.
    pub colors: ColorConfig,
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.site.url).map_err(|e| {
            ConfigError::Validation(format!("site.url {:?} is not a URL: {e}", self.site.url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(
                "site.url must use http or https".into(),
            ));
        }
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if !self.site.email.contains('@') {
            return Err(ConfigError::Validation(
                "site.email must be an email address".into(),
            ));
        }
        if self.build.max_threads == Some(0) {
            return Err(ConfigError::Validation(
                "build.max_threads must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// `site.url` without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.site.url.trim_end_matches('/')
    }

    /// Join a site-relative path onto the base URL.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Public base URL, e.g. `https://quadtechconsulting.com`.
    pub url: String,
    pub email: String,
    /// Display phone number. Empty hides every phone link.
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub linkedin_url: String,
    pub instagram_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "QuadTech Consulting".to_string(),
            tagline: "Technology That Powers Your Ambition".to_string(),
            description: "We partner with small and mid-sized businesses to deliver managed IT services, cybersecurity, cloud solutions, and communications systems that actually work. Our team becomes an extension of yours, solving problems before they slow you down.".to_string(),
            url: "https://quadtechconsulting.com".to_string(),
            email: "contact@quadtechconsulting.com".to_string(),
            phone: "(207) 751-5564".to_string(),
            address_line1: String::new(),
            address_line2: String::new(),
            facebook_url: String::new(),
            twitter_url: String::new(),
            linkedin_url: String::new(),
            instagram_url: "https://www.instagram.com/p/DSoDD2cEUzB/".to_string(),
        }
    }
}

impl SiteSettings {
    /// Social links that are configured, as `(label, url)`.
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", self.facebook_url.as_str()),
            ("Twitter", self.twitter_url.as_str()),
            ("LinkedIn", self.linkedin_url.as_str()),
            ("Instagram", self.instagram_url.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
        .collect()
    }

    /// `tel:` target with formatting characters removed.
    pub fn phone_href(&self) -> Option<String> {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        (!digits.is_empty()).then(|| format!("tel:{digits}"))
    }
}

/// Third-party analytics. Nothing is emitted unless a domain is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    pub plausible_domain: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Accent color for buttons, links, and highlights.
    pub brand: String,
    /// Hover state of brand-colored elements.
    pub brand_dark: String,
    /// Headings and primary text.
    pub ink: String,
    /// Secondary text.
    pub muted: String,
    /// Background of alternating "light" sections.
    pub surface: String,
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            brand: "#0d9488".to_string(),
            brand_dark: "#0f766e".to_string(),
            ink: "#0f172a".to_string(),
            muted: "#475569".to_string(),
            surface: "#f8fafc".to_string(),
            border: "#e2e8f0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory under the source root copied to the output root.
    pub assets_dir: String,
    /// Maximum parallel render workers. `None` means one per CPU core.
    pub max_threads: Option<usize>,
    /// Optional TOML catalog, relative to the source root.
    pub catalog: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            max_threads: None,
            catalog: None,
        }
    }
}

/// Resolve the effective render thread count.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &BuildConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_threads.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                let merged = match table.remove(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => value,
                };
                table.insert(key, merged);
            }
            toml::Value::Table(table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Environment variable → `(section, key)` it overrides.
pub const ENV_OVERRIDES: &[(&str, &str, &str)] = &[
    ("SITE_URL", "site", "url"),
    ("SITE_PHONE", "site", "phone"),
    ("SITE_ADDRESS_LINE1", "site", "address_line1"),
    ("SITE_ADDRESS_LINE2", "site", "address_line2"),
    ("SITE_FACEBOOK_URL", "site", "facebook_url"),
    ("SITE_TWITTER_URL", "site", "twitter_url"),
    ("SITE_LINKEDIN_URL", "site", "linkedin_url"),
    ("SITE_INSTAGRAM_URL", "site", "instagram_url"),
    ("PLAUSIBLE_DOMAIN", "analytics", "plausible_domain"),
];

/// Build an overlay table from environment values.
///
/// `lookup` is `std::env::var(..).ok()` in production and a map in tests.
/// Returns `None` when no override is set.
pub fn env_overlay(lookup: impl Fn(&str) -> Option<String>) -> Option<toml::Value> {
    let mut root = toml::Table::new();
    for (var, section, key) in ENV_OVERRIDES {
        let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        let entry = root
            .entry(section.to_string())
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        if let toml::Value::Table(table) = entry {
            table.insert(key.to_string(), toml::Value::String(value));
        }
    }
    (!root.is_empty()).then_some(toml::Value::Table(root))
}

/// Merge overlays in order onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = Option<toml::Value>>,
) -> Result<SiteConfig, ConfigError> {
    let merged = overlays.into_iter().flatten().fold(base, merge_toml);
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in `root` with environment overrides.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    load_config_with_env(root, |var| std::env::var(var).ok())
}

pub fn load_config_with_env(
    root: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let file = load_raw_config(root)?;
    resolve_config(base, [file, env_overlay(lookup)])
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# QuadTech Site Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Environment variables override this file when set to a non-empty value:
#   SITE_URL, SITE_PHONE, SITE_ADDRESS_LINE1, SITE_ADDRESS_LINE2,
#   SITE_FACEBOOK_URL, SITE_TWITTER_URL, SITE_LINKEDIN_URL,
#   SITE_INSTAGRAM_URL, PLAUSIBLE_DOMAIN
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Business identity
# ---------------------------------------------------------------------------
[site]
name = "QuadTech Consulting"
tagline = "Technology That Powers Your Ambition"
description = "We partner with small and mid-sized businesses to deliver managed IT services, cybersecurity, cloud solutions, and communications systems that actually work. Our team becomes an extension of yours, solving problems before they slow you down."

# Public base URL. Used for canonical links, Open Graph tags, and the sitemap.
url = "https://quadtechconsulting.com"

email = "contact@quadtechconsulting.com"

# Leave empty to hide phone links everywhere.
phone = "(207) 751-5564"

address_line1 = ""
address_line2 = ""

# Empty social links are not rendered.
facebook_url = ""
twitter_url = ""
linkedin_url = ""
instagram_url = "https://www.instagram.com/p/DSoDD2cEUzB/"

# ---------------------------------------------------------------------------
# Analytics
# ---------------------------------------------------------------------------
[analytics]
# Plausible site domain. Omit to emit no analytics script.
# plausible_domain = "quadtechconsulting.com"

# ---------------------------------------------------------------------------
# Brand colors (CSS values)
# ---------------------------------------------------------------------------
[colors]
brand = "#0d9488"
brand_dark = "#0f766e"
ink = "#0f172a"
muted = "#475569"
surface = "#f8fafc"
border = "#e2e8f0"

# ---------------------------------------------------------------------------
# Build
# ---------------------------------------------------------------------------
[build]
# Directory (relative to the source root) copied verbatim to the output root.
assets_dir = "assets"

# Maximum parallel render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_threads = 4

# TOML catalog replacing the built-in services and articles.
# catalog = "catalog.toml"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-brand: {brand};
    --color-brand-dark: {brand_dark};
    --color-ink: {ink};
    --color-muted: {muted};
    --color-surface: {surface};
    --color-border: {border};
}}"#,
        brand = colors.brand,
        brand_dark = colors.brand_dark,
        ink = colors.ink,
        muted = colors.muted,
        surface = colors.surface,
        border = colors.border,
    )
}
