//! Page metadata and structured data.
//!
//! Every page carries a [`PageMeta`] that expands into the `<title>`,
//! description, canonical link, Open Graph, and Twitter card tags. Structured
//! data is emitted as JSON-LD: an Organization record on every page, plus a
//! Service record on service pages and an Article record on resource pages.

use crate::config::{SiteConfig, SiteSettings};
use crate::types::{ResourcePost, ServiceDetail};
use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};

/// Social image used when a page does not provide its own.
pub const DEFAULT_OG_IMAGE: &str = "/images/hero-team.jpg";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    /// Page title before templating. `None` is the home page.
    pub title: Option<String>,
    pub description: String,
    /// Logical path, e.g. `/services/cloud-solutions`.
    pub canonical_path: String,
    /// Site-relative social image. Falls back to [`DEFAULT_OG_IMAGE`].
    pub image: Option<String>,
    /// Open Graph object type: `website` or `article`.
    pub og_type: &'static str,
    /// Ask crawlers not to index the page (404).
    pub noindex: bool,
}

impl PageMeta {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: description.into(),
            canonical_path: path.into(),
            image: None,
            og_type: "website",
            noindex: false,
        }
    }

    /// Home page metadata: untemplated title, site description.
    pub fn home(site: &SiteSettings) -> Self {
        Self {
            title: None,
            description: site.description.clone(),
            canonical_path: "/".to_string(),
            image: None,
            og_type: "website",
            noindex: false,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn article(mut self) -> Self {
        self.og_type = "article";
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }

    /// Full document title.
    ///
    /// `"Cloud Solutions"` → `"Cloud Solutions | QuadTech Consulting"`; the
    /// home page is `"QuadTech Consulting - Your Trusted IT Partner"`.
    pub fn document_title(&self, site: &SiteSettings) -> String {
        match &self.title {
            Some(title) => format!("{title} | {}", site.name),
            None => home_title(site),
        }
    }
}

pub fn home_title(site: &SiteSettings) -> String {
    format!("{} - Your Trusted IT Partner", site.name)
}

/// `<head>` tags for a page: title, description, canonical, OG, Twitter.
pub fn meta_tags(meta: &PageMeta, config: &SiteConfig) -> Markup {
    let title = meta.document_title(&config.site);
    let url = config.absolute_url(&meta.canonical_path);
    let image = config.absolute_url(meta.image.as_deref().unwrap_or(DEFAULT_OG_IMAGE));

    html! {
        title { (title) }
        meta name="description" content=(meta.description);
        @if meta.noindex {
            meta name="robots" content="noindex";
        } @else {
            link rel="canonical" href=(url);
        }
        meta property="og:type" content=(meta.og_type);
        meta property="og:url" content=(url);
        meta property="og:title" content=(title);
        meta property="og:description" content=(meta.description);
        meta property="og:site_name" content=(config.site.name);
        meta property="og:image" content=(image);
        meta property="og:image:width" content=(OG_IMAGE_WIDTH);
        meta property="og:image:height" content=(OG_IMAGE_HEIGHT);
        meta name="twitter:card" content="summary_large_image";
        meta name="twitter:title" content=(title);
        meta name="twitter:description" content=(meta.description);
        meta name="twitter:image" content=(image);
    }
}

pub fn organization_json_ld(site: &SiteSettings) -> Value {
    let mut contact = json!({
        "@type": "ContactPoint",
        "email": site.email,
        "contactType": "customer service",
    });
    if !site.phone.is_empty() {
        contact["telephone"] = json!(site.phone);
    }
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site.name,
        "url": site.url,
        "contactPoint": [contact],
    })
}

pub fn service_json_ld(site: &SiteSettings, detail: &ServiceDetail) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": detail.title,
        "description": detail.long_description,
        "provider": {
            "@type": "Organization",
            "name": site.name,
            "url": site.url,
        },
        "areaServed": "United States",
        "serviceType": detail.title,
    })
}

pub fn article_json_ld(config: &SiteConfig, post: &ResourcePost) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": post.title,
        "description": post.description,
        "image": config.absolute_url(&post.image),
        "datePublished": post.date.format("%Y-%m-%d").to_string(),
        "keywords": post.tags.join(", "),
        "mainEntityOfPage": config.absolute_url(&format!("/resources/{}", post.slug)),
        "author": {
            "@type": "Organization",
            "name": config.site.name,
        },
        "publisher": {
            "@type": "Organization",
            "name": config.site.name,
            "url": config.site.url,
        },
    })
}

/// Embed a JSON-LD value in a `<script>` block.
///
/// `</` is escaped so no string value can close the script element.
pub fn json_ld_script(value: &Value) -> Markup {
    let body = value.to_string().replace("</", "<\\/");
    html! {
        script type="application/ld+json" { (PreEscaped(body)) }
    }
}
