//! Shared page chrome: document shell, navigation, footer, and the building
//! blocks every page renderer composes.
//!
//! ## Document Structure
//!
//! ```text
//! <head>   meta tags, inline CSS, Organization JSON-LD, optional analytics
//! <body>
//!   skip link
//!   header.site-header   logo + hamburger nav (CSS-only checkbox toggle)
//!   main#main-content    page content
//!   footer.site-footer   about, services, quick links, contact, legal
//! ```
//!
//! CSS is embedded at compile time from `static/style.css`, prefixed with
//! the color custom properties generated from `site.toml`.

use crate::catalog::Catalog;
use crate::config::{self, SiteConfig};
use crate::routes::Route;
use crate::seo::{self, PageMeta};
use crate::types::{Category, Icon};
use chrono::{DateTime, Datelike, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::Value;

const CSS_STATIC: &str = include_str!("../static/style.css");

/// How many services the footer lists.
const FOOTER_SERVICE_LINKS: usize = 6;

/// Everything a page renderer reads. Shared by reference across render
/// workers.
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a SiteConfig,
    /// Full stylesheet: color variables followed by the static CSS.
    pub css: String,
    /// Build time. Drives the footer copyright year and sitemap stamps.
    pub now: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a SiteConfig, now: DateTime<Utc>) -> Self {
        let css = format!(
            "{}\n\n{}",
            config::generate_color_css(&config.colors),
            CSS_STATIC
        );
        Self {
            catalog,
            config,
            css,
            now,
        }
    }
}

// ============================================================================
// Primitives
// ============================================================================

/// Background treatment of a [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Light,
    Dark,
    Gradient,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Default => "tone-default",
            Tone::Light => "tone-light",
            Tone::Dark => "tone-dark",
            Tone::Gradient => "tone-gradient",
        }
    }
}

/// Vertical padding of a [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Spacing {
    fn class(self) -> &'static str {
        match self {
            Spacing::Sm => "space-sm",
            Spacing::Md => "space-md",
            Spacing::Lg => "space-lg",
        }
    }
}

/// A full-width `<section>` wrapping its content in a [`container`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Section<'a> {
    pub id: Option<&'a str>,
    pub label: Option<&'a str>,
    pub tone: Tone,
    pub spacing: Spacing,
}

impl<'a> Section<'a> {
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            ..Self::default()
        }
    }

    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn render(&self, content: Markup) -> Markup {
        html! {
            section class={ "section " (self.tone.class()) " " (self.spacing.class()) }
                id=[self.id] aria-label=[self.label] {
                (container(content))
            }
        }
    }
}

/// Centered, max-width content column.
pub fn container(content: Markup) -> Markup {
    html! {
        div.container { (content) }
    }
}

/// Decorative glyph for an icon tag. Styled by `.icon-{name}` in the CSS.
pub fn icon(icon: Icon) -> Markup {
    html! {
        span class={ "icon icon-" (icon.name()) } aria-hidden="true" {}
    }
}

/// Small pill label above a heading.
pub fn eyebrow(text: &str) -> Markup {
    html! {
        span.eyebrow { (text) }
    }
}

pub fn button_link(href: &str, label: &str) -> Markup {
    html! {
        a.button href=(href) {
            (label)
            span.arrow aria-hidden="true" { "→" }
        }
    }
}

// ============================================================================
// Document
// ============================================================================

/// Renders a complete HTML document.
///
/// `structured` holds page-specific JSON-LD records; the Organization record
/// is always included.
pub fn document(
    ctx: &RenderContext,
    meta: &PageMeta,
    structured: &[Value],
    content: Markup,
) -> Markup {
    let site = &ctx.config.site;
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (seo::meta_tags(meta, ctx.config))
                link rel="icon" href="/favicon.svg" type="image/svg+xml";
                style { (PreEscaped(&ctx.css)) }
                (seo::json_ld_script(&seo::organization_json_ld(site)))
                @for record in structured {
                    (seo::json_ld_script(record))
                }
                @if let Some(domain) = &ctx.config.analytics.plausible_domain {
                    script defer data-domain=(domain) src="https://plausible.io/js/script.js" {}
                }
            }
            body {
                a.skip-link href="#main-content" { "Skip to main content" }
                (navbar(ctx, &meta.canonical_path))
                main id="main-content" {
                    (content)
                }
                (footer(ctx))
            }
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

struct NavLink {
    label: &'static str,
    href: &'static str,
}

const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Services",
        href: "/services",
    },
    NavLink {
        label: "Why QuadTech",
        href: "/why-choose-us",
    },
    NavLink {
        label: "Resources",
        href: "/resources",
    },
];

/// Whether `href` is the current page or one of its descendants.
fn is_current(href: &str, current_path: &str) -> bool {
    if href == "/" {
        return current_path == "/";
    }
    current_path == href
        || current_path.starts_with(&format!("{href}/"))
        || current_path.starts_with(&format!("{href}?"))
}

/// Site header with hamburger navigation (slides in on small screens).
pub fn navbar(ctx: &RenderContext, current_path: &str) -> Markup {
    html! {
        header.site-header {
            div.container.header-inner {
                a.logo href="/" aria-label={ (ctx.config.site.name) " home" } {
                    img src="/logo.svg" alt=(ctx.config.site.name) width="160" height="44";
                }
                nav.site-nav aria-label="Main navigation" {
                    input.nav-toggle type="checkbox" id="nav-toggle";
                    label.nav-hamburger for="nav-toggle" aria-label="Open menu" {
                        span.hamburger-line {}
                        span.hamburger-line {}
                        span.hamburger-line {}
                    }
                    div.nav-panel {
                        label.nav-close for="nav-toggle" aria-label="Close menu" { "×" }
                        ul {
                            @for link in &NAV_LINKS {
                                @let current = is_current(link.href, current_path);
                                li class=[current.then_some("current")] {
                                    a href=(link.href) aria-current=[current.then_some("page")] {
                                        (link.label)
                                    }
                                    @if link.href == "/services" {
                                        (category_menu(current_path))
                                    }
                                }
                            }
                            li.nav-separator role="separator" {}
                            li.nav-cta {
                                a.button href="/contact" { "Contact Us" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn category_menu(current_path: &str) -> Markup {
    html! {
        ul.nav-group {
            @for category in Category::ALL {
                @let href = Route::ServiceCategory(category).href();
                li class=[(href == current_path).then_some("current")] {
                    a href=(href) { (category.name()) }
                }
            }
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

pub fn footer(ctx: &RenderContext) -> Markup {
    let site = &ctx.config.site;
    let services = ctx
        .catalog
        .services()
        .iter()
        .filter(|s| ctx.catalog.service_detail(&s.slug).is_some())
        .take(FOOTER_SERVICE_LINKS);
    let socials = site.social_links();

    html! {
        footer.site-footer {
            div.container {
                div.footer-grid {
                    div.footer-about {
                        a.logo href="/" {
                            img src="/logo.svg" alt=(site.name) width="160" height="44";
                        }
                        p {
                            "Your trusted IT partner for secure, scalable business growth. "
                            "We deliver modern technology solutions with reliability, transparency, and a personal touch."
                        }
                        @if !socials.is_empty() {
                            p.footer-label { "Connect with us" }
                            ul.social-links {
                                @for (label, url) in &socials {
                                    li {
                                        a href=(url) target="_blank" rel="noopener noreferrer"
                                            aria-label=(label) title=(label)
                                            class={ "social social-" (label.to_lowercase()) } {
                                            (label)
                                        }
                                    }
                                }
                            }
                        }
                    }
                    nav.footer-links aria-label="Services navigation" {
                        h4 { "Services" }
                        ul {
                            @for service in services {
                                li {
                                    a href=(Route::ServiceDetail(service.slug.clone()).href()) {
                                        (service.title)
                                    }
                                }
                            }
                        }
                    }
                    nav.footer-links aria-label="Quick links navigation" {
                        h4 { "Quick Links" }
                        ul {
                            @for link in &NAV_LINKS {
                                li { a href=(link.href) { (link.label) } }
                            }
                            li { a href="/contact" { "Contact" } }
                        }
                    }
                    div.footer-contact {
                        h4 { "Contact" }
                        ul {
                            @if let Some(tel) = site.phone_href() {
                                li { a href=(tel) { (site.phone) } }
                            }
                            li { a href={ "mailto:" (site.email) } { (site.email) } }
                            li.muted { "Response within 1 business day" }
                            @if !site.address_line1.is_empty() {
                                li { (site.address_line1) }
                            }
                            @if !site.address_line2.is_empty() {
                                li { (site.address_line2) }
                            }
                        }
                        a.button.button-outline href="/contact" { "Talk to an IT Expert" }
                    }
                }
                div.footer-bottom {
                    p { "© " (ctx.now.year()) " " (site.name) ". All rights reserved." }
                    div.legal-links {
                        a href="/privacy" { "Privacy Policy" }
                        a href="/terms" { "Terms of Service" }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Call to action
// ============================================================================

/// Closing call-to-action block.
///
/// When `service_name` is set the heading and subheading name the service
/// instead of using the generic copy.
#[derive(Debug, Clone, Copy)]
pub struct ContactCta<'a> {
    pub heading: &'a str,
    pub subheading: &'a str,
    pub cta_text: &'a str,
    pub cta_link: &'a str,
    pub service_name: Option<&'a str>,
    pub tone: Tone,
    pub show_phone: bool,
}

impl Default for ContactCta<'_> {
    fn default() -> Self {
        Self {
            heading: "Ready to Elevate Your Technology?",
            subheading: "Schedule a free consultation to review your current technology environment. We will identify opportunities to improve performance, strengthen security, and reduce costs.",
            cta_text: crate::types::DEFAULT_CTA_TEXT,
            cta_link: "/contact",
            service_name: None,
            tone: Tone::Light,
            show_phone: false,
        }
    }
}

pub fn contact_cta(ctx: &RenderContext, cta: &ContactCta) -> Markup {
    let (heading, subheading) = match cta.service_name {
        Some(name) => (
            format!("Ready to Improve Your {name}?"),
            format!(
                "Schedule a free consultation to see how our {name} can help your business thrive in today's digital landscape."
            ),
        ),
        None => (cta.heading.to_string(), cta.subheading.to_string()),
    };
    let phone = if cta.show_phone {
        ctx.config.site.phone_href()
    } else {
        None
    };

    Section::new(cta.tone).id("contact").label("Contact Us").render(html! {
        div.cta {
            h2 { (heading) }
            p.lead { (subheading) }
            div.cta-actions {
                (button_link(cta.cta_link, cta.cta_text))
                @if let Some(tel) = phone {
                    a.button.button-outline href=(tel) {
                        (icon(Icon::Phone))
                        "Call " (ctx.config.site.phone)
                    }
                }
            }
            p.microcopy { "No obligation · Response within 1 business day" }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use chrono::TimeZone;

    fn render_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 0, 0, 0).unwrap()
    }

    #[test]
    fn document_includes_doctype_and_chrome() {
        let catalog = sample_catalog(1);
        let config = test_config();
        let ctx = RenderContext::new(&catalog, &config, render_time());
        let meta = PageMeta::new("Test", "A test page", "/terms");
        let html = document(&ctx, &meta, &[], html! { p { "body text" } }).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_contains_all(
            &html,
            &[
                r##"<a class="skip-link" href="#main-content">"##,
                r#"<main id="main-content"><p>body text</p></main>"#,
                "site-header",
                "site-footer",
                "--color-brand: #0d9488;",
                ".nav-toggle:checked ~ .nav-panel",
                r#""@type":"Organization""#,
            ],
        );
    }

    #[test]
    fn document_embeds_extra_structured_data() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let ctx = RenderContext::new(&catalog, &config, render_time());
        let meta = PageMeta::new("T", "d", "/");
        let extra = serde_json::json!({ "@type": "Service" });
        let html = document(&ctx, &meta, &[extra], html! {}).into_string();
        assert_eq!(count_occurrences(&html, "application/ld+json"), 2);
    }

    #[test]
    fn analytics_only_when_configured() {
        let catalog = sample_catalog(0);
        let mut config = test_config();
        let meta = PageMeta::new("T", "d", "/");

        let ctx = RenderContext::new(&catalog, &config, render_time());
        let html = document(&ctx, &meta, &[], html! {}).into_string();
        assert!(!html.contains("plausible.io"));

        config.analytics.plausible_domain = Some("quadtech.test".to_string());
        let ctx = RenderContext::new(&catalog, &config, render_time());
        let html = document(&ctx, &meta, &[], html! {}).into_string();
        assert!(html.contains(r#"data-domain="quadtech.test""#));
    }

    #[test]
    fn nav_marks_current_item() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let ctx = RenderContext::new(&catalog, &config, render_time());
        let html = navbar(&ctx, "/resources").into_string();
        assert!(html.contains(r#"<li class="current"><a href="/resources" aria-current="page">"#));
        assert_eq!(count_occurrences(&html, r#"aria-current="page""#), 1);
    }

    #[test]
    fn nav_service_descendants_are_current() {
        assert!(is_current("/services", "/services/cloud-solutions"));
        assert!(is_current("/resources", "/resources?page=2"));
        assert!(!is_current("/", "/services"));
        assert!(is_current("/", "/"));
        assert!(!is_current("/services", "/servicesx"));
    }

    #[test]
    fn nav_lists_every_category() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let ctx = RenderContext::new(&catalog, &config, render_time());
        let html = navbar(&ctx, "/").into_string();
        for category in Category::ALL {
            assert!(html.contains(&format!("/services/category/{}", category.slug())));
        }
        assert!(html.contains("nav-toggle"));
    }

    #[test]
    fn footer_skips_empty_socials_and_contact() {
        let catalog = sample_catalog(0);
        let mut config = test_config();
        config.site.instagram_url = String::new();
        config.site.phone = String::new();
        let ctx = RenderContext::new(&catalog, &config, render_time());
        let html = footer(&ctx).into_string();

        assert!(!html.contains("Connect with us"));
        assert!(!html.contains("tel:"));
        assert!(html.contains("mailto:contact@quadtechconsulting.com"));
        assert!(html.contains("© 2026 QuadTech Consulting"));
    }

    #[test]
    fn footer_lists_configured_socials_and_address() {
        let catalog = sample_catalog(0);
        let mut config = test_config();
        config.site.linkedin_url = "https://linkedin.test/quadtech".to_string();
        config.site.address_line1 = "1 Main Street".to_string();
        let ctx = RenderContext::new(&catalog, &config, render_time());
        let html = footer(&ctx).into_string();

        assert_contains_all(
            &html,
            &[
                "https://linkedin.test/quadtech",
                "https://www.instagram.com/p/DSoDD2cEUzB/",
                "1 Main Street",
                r#"href="tel:2077515564""#,
            ],
        );
    }

    #[test]
    fn footer_links_only_renderable_services() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let ctx = RenderContext::new(&catalog, &config, render_time());
        let html = footer(&ctx).into_string();
        assert!(html.contains("/services/managed-it-services"));
        assert!(!html.contains("/services/summary-only"));
    }

    #[test]
    fn cta_heading_is_context_aware() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let ctx = RenderContext::new(&catalog, &config, render_time());

        let generic = contact_cta(&ctx, &ContactCta::default()).into_string();
        assert!(generic.contains("Ready to Elevate Your Technology?"));
        assert!(!generic.contains("tel:"));

        let cta = ContactCta {
            service_name: Some("Cloud Solutions"),
            cta_text: "Explore Cloud Options",
            show_phone: true,
            ..ContactCta::default()
        };
        let specific = contact_cta(&ctx, &cta).into_string();
        assert_contains_all(
            &specific,
            &[
                "Ready to Improve Your Cloud Solutions?",
                "see how our Cloud Solutions can help",
                "Explore Cloud Options",
                "Call (207) 751-5564",
            ],
        );
    }

    #[test]
    fn cta_hides_phone_when_not_configured() {
        let catalog = sample_catalog(0);
        let mut config = test_config();
        config.site.phone = String::new();
        let ctx = RenderContext::new(&catalog, &config, render_time());
        let cta = ContactCta {
            show_phone: true,
            ..ContactCta::default()
        };
        assert!(!contact_cta(&ctx, &cta).into_string().contains("Call "));
    }

    #[test]
    fn section_attributes() {
        let html = Section::new(Tone::Dark)
            .id("services")
            .label("Our Services")
            .spacing(Spacing::Lg)
            .render(html! { "x" })
            .into_string();
        assert_eq!(
            html,
            r#"<section class="section tone-dark space-lg" id="services" aria-label="Our Services"><div class="container">x</div></section>"#
        );
    }

    #[test]
    fn icon_is_decorative() {
        assert_eq!(
            icon(Icon::ShieldCheck).into_string(),
            r#"<span class="icon icon-shield-check" aria-hidden="true"></span>"#
        );
    }
}
