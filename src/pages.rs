//! Page renderers, one per route.
//!
//! Each renderer is a pure function of the [`RenderContext`] and whatever
//! the router resolved (a category, a [`ServicePage`], a [`PageWindow`]).
//! None of them fail: lookups happen before rendering, so a renderer only
//! ever sees records that exist.

use crate::layout::{
    self, ContactCta, RenderContext, Section, Spacing, Tone, button_link, eyebrow, icon,
};
use crate::paginate::PageWindow;
use crate::resolve::ServicePage;
use crate::routes::Route;
use crate::seo::{self, PageMeta};
use crate::types::{Category, Icon, ResourcePost, ServiceSummary, format_date, format_date_short};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};

/// Related service links shown at the bottom of a service page.
const RELATED_SERVICES: usize = 4;

const HERO_BENEFITS: [&str; 3] = [
    "Expert Support When You Need It",
    "Flexible Month-to-Month Service",
    "Clear and Honest Pricing",
];

/// `(icon, value, label)` figures on the home page about section.
const STATS: [(Icon, &str, &str); 3] = [
    (Icon::Users, "12+", "Clients Served"),
    (Icon::Handshake, "100%", "Committed to You"),
    (Icon::Sparkles, "5+", "Years Experience"),
];

/// Convert a markdown article body to HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// Shared fragments
// ============================================================================

fn service_card(service: &ServiceSummary) -> Markup {
    let href = Route::ServiceDetail(service.slug.clone()).href();
    html! {
        a.card.service-card href=(href) aria-label={ "Learn more about " (service.title) } {
            div.card-image {
                img src=(service.image) alt=(service.title) width="400" height="225" loading="lazy";
            }
            div.card-body {
                (icon(service.icon))
                h3 { (service.title) }
                p { (service.description) }
                span.card-link { "Learn More" }
            }
        }
    }
}

fn post_meta(post: &ResourcePost) -> Markup {
    html! {
        div.post-meta {
            span { (format_date_short(post.date)) }
            span aria-hidden="true" { "•" }
            span { (post.reading_time) }
        }
    }
}

fn tag_list(tags: &[String], limit: usize) -> Markup {
    html! {
        ul.tags {
            @for tag in tags.iter().take(limit) {
                li.tag { (tag) }
            }
        }
    }
}

fn page_hero(label: &str, heading: &str, lead: &str) -> Markup {
    Section::new(Tone::Default).spacing(Spacing::Lg).render(html! {
        div.page-hero {
            (eyebrow(label))
            h1 { (heading) }
            p.lead { (lead) }
        }
    })
}

/// Previous / numbered / next links. Hidden when there is a single page.
fn pagination_nav(window: &PageWindow<'_, ResourcePost>) -> Markup {
    let href = |page: usize| Route::Resources { page }.href();
    html! {
        @if window.total_pages() > 1 {
            nav.pagination aria-label="Pagination" {
                @if let Some(prev) = window.prev_page() {
                    a.page-prev href=(href(prev)) rel="prev" { "← Previous" }
                }
                ol {
                    @for page in window.page_numbers() {
                        li {
                            @if page == window.page() {
                                span.page-current aria-current="page" { (page) }
                            } @else {
                                a href=(href(page)) { (page) }
                            }
                        }
                    }
                }
                @if let Some(next) = window.next_page() {
                    a.page-next href=(href(next)) rel="next" { "Next →" }
                }
            }
        }
    }
}

// ============================================================================
// Home
// ============================================================================

pub fn home(ctx: &RenderContext) -> Markup {
    let site = &ctx.config.site;
    let meta = PageMeta::home(site);
    let about_label = format!("About {}", site.name);

    let content = html! {
        section.hero id="home" aria-label={ "Welcome to " (site.name) } {
            div.container.hero-grid {
                div.hero-text {
                    (eyebrow("Trusted IT Partner for Growing Businesses"))
                    h1 { "Reliable IT Solutions " span.accent { "for Growing Businesses" } }
                    p.lead {
                        (site.name) " helps businesses stay secure, productive, and scalable with modern IT solutions tailored to their needs."
                    }
                    ul.checklist {
                        @for benefit in HERO_BENEFITS {
                            li { (benefit) }
                        }
                    }
                    (button_link("/contact", crate::types::DEFAULT_CTA_TEXT))
                }
                div.hero-image {
                    img src="/images/hero-team.jpg" alt="IT consulting team collaborating on technology solutions"
                        width="800" height="450";
                }
            }
        }
        (Section::new(Tone::Light).id("services").label("Our Services").render(html! {
            div.section-heading {
                (eyebrow("Our Services"))
                h2 { "Solutions Built Around Your Business" }
                p.lead {
                    "Whether you need day-to-day IT help, stronger security, or a clearer plan for the next year, "
                    "we start with where you are and build from there."
                }
            }
            div.card-grid.grid-4 {
                @for category in Category::HOME_ORDER {
                    a.card.category-card href=(Route::ServiceCategory(category).href())
                        aria-label={ "Learn more about " (category.name()) } {
                        (icon(category.icon()))
                        h3 { (category.name()) }
                        p { (category.teaser()) }
                        span.card-link { "Learn More" }
                    }
                }
            }
            div.center {
                (button_link("/services", "View All Services"))
            }
        }))
        (Section::new(Tone::Default).id("about").label(&about_label).render(html! {
            div.two-column {
                div.about-image {
                    img src="/images/about-team.jpg" alt="QuadTech team collaborating on IT solutions" loading="lazy";
                }
                div.about-text {
                    (eyebrow("About Us"))
                    h2 { (site.tagline) }
                    p { (site.description) }
                    p { "We believe in transparent communication, practical solutions, and building long-term relationships." }
                    div.stats {
                        @for (stat_icon, value, label) in STATS {
                            div.stat {
                                (icon(stat_icon))
                                p.stat-value { (value) }
                                p.stat-label { (label) }
                            }
                        }
                    }
                    a.text-link href="/why-choose-us" { "Learn Why Businesses Choose Us →" }
                }
            }
        }))
        (layout::contact_cta(ctx, &ContactCta::default()))
    };

    layout::document(ctx, &meta, &[], content)
}

// ============================================================================
// Services
// ============================================================================

pub fn services_index(ctx: &RenderContext) -> Markup {
    let meta = PageMeta::new(
        "Services",
        format!(
            "Explore {} services including managed IT, cybersecurity, cloud solutions, backup and disaster recovery, VoIP, and strategic IT consulting.",
            ctx.config.site.name
        ),
        Route::Services.path(),
    );

    let content = html! {
        (page_hero(
            "Our Services",
            "Solutions for Every Business Need",
            "From proactive IT support to cybersecurity and cloud strategy, we help you build a reliable, secure foundation for growth.",
        ))
        (Section::new(Tone::Light).render(html! {
            @for (category, services) in ctx.catalog.service_groups() {
                div.service-group id=(category.slug()) {
                    div.group-heading {
                        h2 {
                            a href=(Route::ServiceCategory(category).href()) { (category.name()) }
                        }
                        p { (category.description()) }
                    }
                    div.card-grid.grid-3 {
                        @for service in services {
                            (service_card(service))
                        }
                    }
                }
            }
        }))
        (Section::new(Tone::Default).render(html! {
            div.cta {
                h2 { "Not sure where to start?" }
                p.lead { "We'll review your current setup and recommend the best next steps based on your goals and budget." }
                (button_link("/contact", crate::types::DEFAULT_CTA_TEXT))
            }
        }))
    };

    layout::document(ctx, &meta, &[], content)
}

pub fn service_category(ctx: &RenderContext, category: Category) -> Markup {
    let route = Route::ServiceCategory(category);
    let meta = PageMeta::new(category.name(), category.description(), route.path());
    let services = ctx.catalog.services_in(category);

    let content = html! {
        (page_hero("Services", category.name(), category.description()))
        (Section::new(Tone::Light).render(html! {
            @if services.is_empty() {
                p.empty { "No services are listed in this category yet." }
            } @else {
                div.card-grid.grid-3 {
                    @for service in &services {
                        (service_card(service))
                    }
                }
            }
            nav.category-links aria-label="Other categories" {
                @for other in Category::ALL.into_iter().filter(|c| *c != category) {
                    a href=(Route::ServiceCategory(other).href()) { (other.name()) }
                }
                a href="/services" { "All services" }
            }
        }))
        (layout::contact_cta(ctx, &ContactCta::default()))
    };

    layout::document(ctx, &meta, &[], content)
}

pub fn service_detail(ctx: &RenderContext, page: ServicePage<'_>) -> Markup {
    let ServicePage { summary, detail } = page;
    let route = Route::ServiceDetail(summary.slug.clone());
    let meta = PageMeta::new(&detail.title, &summary.description, route.path())
        .with_image(&summary.image);
    let structured = [seo::service_json_ld(&ctx.config.site, detail)];
    let related = ctx.catalog.related_services(&summary.slug, RELATED_SERVICES);

    let content = html! {
        section.service-hero {
            div.container.hero-grid {
                div.hero-text {
                    a.back-link href="/#services" { "← Back to Services" }
                    (icon(summary.icon))
                    h1 { (detail.title) }
                    p.lead { (detail.long_description) }
                    (button_link("/contact", &detail.cta_text))
                    p.microcopy { "No obligation · Response within 1 business day" }
                }
                div.hero-image {
                    img src=(summary.image) alt=(detail.title) width="800" height="400";
                }
            }
        }
        (Section::new(Tone::Default).render(html! {
            div.two-column {
                div.feature-list {
                    h2 { "What's Included" }
                    ul.checklist {
                        @for feature in &detail.features {
                            li { (feature) }
                        }
                    }
                }
                div.benefit-list {
                    h2 { "Benefits" }
                    ul.checklist {
                        @for benefit in &detail.benefits {
                            li { (benefit) }
                        }
                    }
                }
            }
        }))
        @if !detail.process_steps.is_empty() {
            (Section::new(Tone::Light).label("How It Works").render(html! {
                div.section-heading {
                    h2 { "How It Works" }
                }
                ol.steps {
                    @for (n, step) in detail.process_steps.iter().enumerate() {
                        li.step {
                            span.step-number { (n + 1) }
                            h3 { (step.title) }
                            p { (step.description) }
                        }
                    }
                }
            }))
        }
        @if !detail.faqs.is_empty() {
            (Section::new(Tone::Default).label("Frequently Asked Questions").render(html! {
                div.section-heading {
                    h2 { "Frequently Asked Questions" }
                }
                div.faq-list {
                    @for faq in &detail.faqs {
                        details.faq {
                            summary { h3 { (faq.question) } }
                            p { (faq.answer) }
                        }
                    }
                }
            }))
        }
        @if !related.is_empty() {
            (Section::new(Tone::Light).render(html! {
                h2 { "Explore Our Other IT Solutions" }
                div.card-grid.grid-4.related {
                    @for other in &related {
                        a.related-link href=(Route::ServiceDetail(other.slug.clone()).href()) {
                            (icon(other.icon))
                            span { (other.title) }
                        }
                    }
                }
                a.text-link href="/services" { "View all services →" }
            }))
        }
        (layout::contact_cta(ctx, &ContactCta {
            service_name: Some(detail.title.as_str()),
            cta_text: &detail.cta_text,
            tone: Tone::Gradient,
            show_phone: true,
            ..ContactCta::default()
        }))
        (Section::new(Tone::Light).spacing(Spacing::Sm).render(html! {
            div.back-links {
                a href="/" { "Back to Home" }
                a href="/#services" { "View All Services" }
            }
        }))
    };

    layout::document(ctx, &meta, &structured, content)
}

// ============================================================================
// Resources
// ============================================================================

pub fn resources_index(ctx: &RenderContext, window: &PageWindow<'_, ResourcePost>) -> Markup {
    let route = Route::Resources {
        page: window.page(),
    };
    let title = if window.page() == 1 {
        "Resources".to_string()
    } else {
        format!("Resources - Page {}", window.page())
    };
    let meta = PageMeta::new(
        title,
        format!(
            "Practical IT and cybersecurity guides from {}. Learn best practices for security, cloud, email migrations, and IT operations.",
            ctx.config.site.name
        ),
        route.href(),
    );

    let content = html! {
        (page_hero(
            "Resources",
            "IT Insights for Growing Businesses",
            "Short, practical guides to help you make confident IT decisions, written for business owners and teams.",
        ))
        @if let Some(featured) = window.featured {
            (Section::new(Tone::Default).label("Featured article").render(html! {
                a.card.featured-post href=(Route::ResourceDetail(featured.slug.clone()).href()) {
                    div.card-image {
                        img src=(featured.image) alt=(featured.title) width="800" height="450";
                    }
                    div.card-body {
                        span.badge { "Featured" }
                        (post_meta(featured))
                        h2 { (featured.title) }
                        p { (featured.description) }
                        (tag_list(&featured.tags, 3))
                        span.card-link { "Read Article" }
                    }
                }
            }))
        }
        (Section::new(Tone::Light).render(html! {
            @if window.page() == 1 && !window.regular.is_empty() {
                h2 { "More Articles" }
            }
            @if window.items.is_empty() {
                p.empty { "New articles are on the way. Check back soon." }
            }
            div.card-grid.grid-3 {
                @for post in window.regular {
                    a.card.post-card href=(Route::ResourceDetail(post.slug.clone()).href())
                        aria-label={ "Read " (post.title) } {
                        div.card-image {
                            img src=(post.image) alt=(post.title) width="400" height="225" loading="lazy";
                        }
                        div.card-body {
                            (post_meta(post))
                            h3 { (post.title) }
                            p { (post.description) }
                            (tag_list(&post.tags, 2))
                            span.card-link { "Read More" }
                        }
                    }
                }
            }
            (pagination_nav(window))
        }))
        (Section::new(Tone::Default).render(html! {
            div.cta {
                h2 { "Have Questions About Your IT?" }
                p.lead {
                    "We're happy to discuss your technology challenges and share practical recommendations for your business."
                }
                (button_link("/contact", "Talk to an IT Expert"))
            }
        }))
    };

    layout::document(ctx, &meta, &[], content)
}

pub fn resource_article(ctx: &RenderContext, post: &ResourcePost) -> Markup {
    let route = Route::ResourceDetail(post.slug.clone());
    let meta = PageMeta::new(&post.title, &post.description, route.path())
        .with_image(&post.image)
        .article();
    let structured = [seo::article_json_ld(ctx.config, post)];

    let content = html! {
        article.resource-article {
            (Section::new(Tone::Default).spacing(Spacing::Lg).render(html! {
                header.article-header {
                    a.back-link href="/resources" { "← Back to Resources" }
                    h1 { (post.title) }
                    p.lead { (post.description) }
                    div.post-meta {
                        time datetime=(post.date.format("%Y-%m-%d").to_string()) { (format_date(post.date)) }
                        span aria-hidden="true" { "•" }
                        span { (post.reading_time) }
                    }
                    (tag_list(&post.tags, post.tags.len()))
                }
                figure.article-image {
                    img src=(post.image) alt=(post.title) width="1200" height="630";
                }
                div.prose {
                    (PreEscaped(markdown_to_html(&post.body)))
                }
            }))
        }
        (layout::contact_cta(ctx, &ContactCta::default()))
    };

    layout::document(ctx, &meta, &structured, content)
}

// ============================================================================
// Company pages
// ============================================================================

pub fn why_choose_us(ctx: &RenderContext) -> Markup {
    let site = &ctx.config.site;
    let meta = PageMeta::new(
        "Why Choose Us",
        format!(
            "Discover why businesses trust {} for their IT needs. Clear communication, responsive support, practical security, and strategic guidance.",
            site.name
        ),
        Route::WhyChooseUs.path(),
    );

    let content = html! {
        (page_hero(
            "Why Choose Us",
            "A Hands-On IT Partner You Can Rely On",
            "We started QuadTech to give growing businesses an IT partner they can actually talk to. We focus on keeping your systems stable, responding when you need help, and recommending technology that makes sense for how your team works every day.",
        ))
        (Section::new(Tone::Light).label("Our Values").render(html! {
            div.card-grid.grid-2 {
                @for value in ctx.catalog.values() {
                    div.card.value-card {
                        (icon(value.icon))
                        h2 { (value.title) }
                        p { (value.description) }
                    }
                }
            }
        }))
        (Section::new(Tone::Default).label("Call to Action").render(html! {
            div.cta {
                h2 { "Ready to Get Started?" }
                p.lead {
                    "Schedule a free consultation to review your current technology environment and identify opportunities to improve."
                }
                (button_link("/contact", crate::types::DEFAULT_CTA_TEXT))
            }
        }))
    };

    layout::document(ctx, &meta, &[], content)
}

pub fn contact(ctx: &RenderContext) -> Markup {
    let site = &ctx.config.site;
    let meta = PageMeta::new(
        "Contact",
        format!(
            "Contact {} to schedule a free IT consultation. We respond within one business day.",
            site.name
        ),
        Route::Contact.path(),
    );
    let subject = "Free consultation request";

    let content = html! {
        (page_hero(
            "Contact",
            "Let's Talk About Your IT",
            "Tell us what is slowing your team down. We'll review your current setup and recommend practical next steps, with no obligation.",
        ))
        (Section::new(Tone::Light).render(html! {
            div.two-column {
                div.contact-methods {
                    h2 { "Get in Touch" }
                    ul.contact-list {
                        li {
                            (icon(Icon::Mail))
                            a href={ "mailto:" (site.email) "?subject=" (subject.replace(' ', "%20")) } { (site.email) }
                        }
                        @if let Some(tel) = site.phone_href() {
                            li {
                                (icon(Icon::Phone))
                                a href=(tel) { (site.phone) }
                            }
                        }
                        @if !site.address_line1.is_empty() {
                            li.address {
                                (site.address_line1)
                                @if !site.address_line2.is_empty() {
                                    br;
                                    (site.address_line2)
                                }
                            }
                        }
                    }
                    p.microcopy { "Response within 1 business day" }
                }
                div.contact-expectations {
                    h2 { "What to Expect" }
                    ol.steps {
                        li.step {
                            h3 { "A Quick Conversation" }
                            p { "We learn about your team, your tools, and what is not working today." }
                        }
                        li.step {
                            h3 { "A Clear Assessment" }
                            p { "We review your environment and identify the risks and improvements that matter most." }
                        }
                        li.step {
                            h3 { "A Practical Plan" }
                            p { "You get honest recommendations and transparent pricing, with no pressure to commit." }
                        }
                    }
                }
            }
        }))
    };

    layout::document(ctx, &meta, &[], content)
}

fn legal_page(
    ctx: &RenderContext,
    route: Route,
    title: &str,
    sections: &[(&str, String)],
) -> Markup {
    let meta = PageMeta::new(
        title,
        format!("{title} for {}.", ctx.config.site.name),
        route.path(),
    );
    let content = Section::new(Tone::Default).spacing(Spacing::Lg).render(html! {
        div.prose.legal {
            h1 { (title) }
            @for (heading, body) in sections {
                h2 { (heading) }
                p { (body) }
            }
        }
    });
    layout::document(ctx, &meta, &[], content)
}

pub fn privacy(ctx: &RenderContext) -> Markup {
    let site = &ctx.config.site;
    let sections = [
        (
            "Information We Collect",
            format!(
                "{} collects the information you choose to send us, such as your name, email address, phone number, and details about your business when you request a consultation.",
                site.name
            ),
        ),
        (
            "How We Use Information",
            "We use your information only to respond to your inquiry, deliver the services you request, and keep you informed about work we are doing for you. We do not sell personal information.".to_string(),
        ),
        (
            "Analytics",
            "This site may use privacy-friendly analytics that do not set cookies or collect personal data, to understand which pages are useful.".to_string(),
        ),
        (
            "Contact",
            format!("Questions about this policy can be sent to {}.", site.email),
        ),
    ];
    legal_page(ctx, Route::Privacy, "Privacy Policy", &sections)
}

pub fn terms(ctx: &RenderContext) -> Markup {
    let site = &ctx.config.site;
    let sections = [
        (
            "Use of This Site",
            format!(
                "By using this website you agree to these terms. Content is provided by {} for general information about our services.",
                site.name
            ),
        ),
        (
            "No Professional Advice",
            "Articles and guides on this site are general guidance and do not replace an assessment of your specific environment.".to_string(),
        ),
        (
            "Services",
            "Services are provided under separate written agreements, which take precedence over anything described on this site.".to_string(),
        ),
        (
            "Contact",
            format!("Questions about these terms can be sent to {}.", site.email),
        ),
    ];
    legal_page(ctx, Route::Terms, "Terms of Service", &sections)
}

pub fn not_found(ctx: &RenderContext) -> Markup {
    let meta = PageMeta::new(
        "Page Not Found",
        "The page you are looking for does not exist.",
        Route::NotFound.path(),
    )
    .noindex();

    let content = Section::new(Tone::Default).spacing(Spacing::Lg).render(html! {
        div.page-hero.not-found {
            (eyebrow("404"))
            h1 { "Page Not Found" }
            p.lead { "The page you are looking for does not exist or has moved." }
            div.cta-actions {
                (button_link("/", "Back to Home"))
                a.button.button-outline href="/services" { "View Services" }
            }
        }
    });

    layout::document(ctx, &meta, &[], content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::SiteConfig;
    use crate::paginate::{self, RESOURCES_PER_PAGE};
    use crate::resolve;
    use crate::test_helpers::*;
    use crate::types::{Faq, ProcessStep};
    use chrono::{TimeZone, Utc};

    fn ctx<'a>(catalog: &'a Catalog, config: &'a SiteConfig) -> RenderContext<'a> {
        RenderContext::new(catalog, config, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn markdown_converts() {
        let html = markdown_to_html("# Title\n\nThis is **bold** and *italic*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn home_page_sections() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let html = home(&ctx(&catalog, &config)).into_string();
        assert_contains_all(
            &html,
            &[
                "<title>QuadTech Consulting - Your Trusted IT Partner</title>",
                "Reliable IT Solutions",
                "/services/category/it-management",
                "Technology That Powers Your Ambition",
                "Clients Served",
                "Ready to Elevate Your Technology?",
            ],
        );
        // Category cards follow the home order
        let card = |slug: &str| {
            html.find(&format!(r#"<a class="card category-card" href="/services/category/{slug}""#))
                .unwrap()
        };
        let (it, cyber) = (card("it-management"), card("cybersecurity"));
        assert!(it < cyber);
    }

    #[test]
    fn services_index_groups_by_category() {
        let catalog = Catalog::builtin().unwrap();
        let config = test_config();
        let html = services_index(&ctx(&catalog, &config)).into_string();
        for service in catalog.services() {
            assert!(html.contains(&format!(r#"href="/services/{}""#, service.slug)));
        }
        let cyber = html.find(r#"id="cybersecurity""#).unwrap();
        let it = html.find(r#"id="it-management""#).unwrap();
        assert!(cyber < it);
        assert!(html.contains("<title>Services | QuadTech Consulting</title>"));
    }

    #[test]
    fn services_index_skips_empty_groups() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let html = services_index(&ctx(&catalog, &config)).into_string();
        assert!(html.contains(r#"id="cybersecurity""#));
        assert!(!html.contains(r#"id="web-communications""#));
    }

    #[test]
    fn category_page_filters_services() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let html = service_category(&ctx(&catalog, &config), Category::Cybersecurity).into_string();
        let body = main_content(&html);
        assert!(body.contains(r#"href="/services/penetration-testing""#));
        // The footer links every service; the card grid only this category's
        assert!(!body.contains(r#"href="/services/managed-it-services""#));
        assert!(html.contains(r#"href="/services/managed-it-services""#));

        let empty =
            service_category(&ctx(&catalog, &config), Category::WebCommunications).into_string();
        let body = main_content(&empty);
        assert!(body.contains("No services are listed in this category yet."));
        assert_eq!(count_occurrences(body, r#"class="card-grid"#), 0);
    }

    #[test]
    fn service_detail_page() {
        let catalog = Catalog::builtin().unwrap();
        let config = test_config();
        let page = resolve::resolve_service(&catalog, "cloud-solutions").unwrap();
        let html = service_detail(&ctx(&catalog, &config), page).into_string();
        assert_contains_all(
            &html,
            &[
                "<title>Cloud Solutions | QuadTech Consulting</title>",
                "What's Included",
                "Migration Strategy",
                "Reduce infrastructure costs",
                "Explore Cloud Options",
                "Ready to Improve Your Cloud Solutions?",
                r#""@type":"Service""#,
                r#"<link rel="canonical" href="https://example.test/services/cloud-solutions">"#,
            ],
        );
        assert!(!html.contains("How It Works"));
        assert!(!html.contains("Frequently Asked Questions"));
    }

    #[test]
    fn service_detail_lists_four_related_services() {
        let catalog = Catalog::builtin().unwrap();
        let config = test_config();
        let page = resolve::resolve_service(&catalog, "cloud-solutions").unwrap();
        let html = service_detail(&ctx(&catalog, &config), page).into_string();
        assert_eq!(count_occurrences(&html, r#"class="related-link""#), 4);
    }

    #[test]
    fn service_detail_optional_steps_and_faq() {
        let mut detail = detail("penetration-testing");
        detail.process_steps = vec![ProcessStep {
            title: "Scope".into(),
            description: "Agree on targets.".into(),
        }];
        detail.faqs = vec![Faq {
            question: "Is it safe?".into(),
            answer: "Yes.".into(),
        }];
        let summary = service("penetration-testing", Category::Cybersecurity);
        let catalog = sample_catalog(0);
        let config = test_config();
        let page = ServicePage {
            summary: &summary,
            detail: &detail,
        };
        let html = service_detail(&ctx(&catalog, &config), page).into_string();
        assert_contains_all(
            &html,
            &[
                "How It Works",
                r#"<span class="step-number">1</span>"#,
                "Agree on targets.",
                "Frequently Asked Questions",
                "Is it safe?",
            ],
        );
    }

    #[test]
    fn training_page_has_walkthrough() {
        let catalog = Catalog::builtin().unwrap();
        let config = test_config();
        let page = resolve::resolve_service(&catalog, "cybersecurity-training").unwrap();
        let html = service_detail(&ctx(&catalog, &config), page).into_string();
        let body = main_content(&html);
        assert_eq!(count_occurrences(body, r#"class="step-number""#), 3);
        assert_eq!(count_occurrences(body, r#"<details class="faq">"#), 3);
        assert!(html.contains("Schedule Training Consultation"));
    }

    #[test]
    fn resources_first_page_features_first_post() {
        let catalog = sample_catalog(11);
        let config = test_config();
        let window =
            paginate::paginate_items(catalog.resource_posts(), RESOURCES_PER_PAGE, 1).unwrap();
        let html = resources_index(&ctx(&catalog, &config), &window).into_string();

        let body = main_content(&html);
        assert_eq!(count_occurrences(body, r#"class="card featured-post""#), 1);
        assert_eq!(count_occurrences(body, r#"class="card post-card""#), 5);
        assert!(html.contains("More Articles"));
        // Featured card shows its tags; regular cards show at most two
        assert!(html.contains(r#"href="/resources/post-1""#));
        assert!(html.contains(r#"href="/resources/page/2""#));
        assert!(html.contains(r#"<span class="page-current" aria-current="page">1</span>"#));
        assert!(!html.contains("page-prev"));
    }

    #[test]
    fn resources_second_page_has_no_featured() {
        let catalog = sample_catalog(11);
        let config = test_config();
        let window =
            paginate::paginate_items(catalog.resource_posts(), RESOURCES_PER_PAGE, 2).unwrap();
        let html = resources_index(&ctx(&catalog, &config), &window).into_string();

        let body = main_content(&html);
        assert!(!body.contains("featured-post"));
        assert!(!body.contains("More Articles"));
        assert_eq!(count_occurrences(body, r#"class="card post-card""#), 5);
        assert!(html.contains("<title>Resources - Page 2 | QuadTech Consulting</title>"));
        // Canonical names the file a static host serves for this page
        assert!(html.contains(
            r#"<link rel="canonical" href="https://example.test/resources/page/2">"#
        ));
        assert!(html.contains(r#"content="https://example.test/resources/page/2""#));
        assert!(!html.contains("resources?page=2"));
        assert!(html.contains(r#"<a class="page-prev" href="/resources" rel="prev">"#));
        assert!(!html.contains("page-next"));
    }

    #[test]
    fn tag_limits() {
        let tags: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(count_occurrences(&tag_list(&tags, 3).into_string(), "<li"), 3);
        assert_eq!(count_occurrences(&tag_list(&tags, 2).into_string(), "<li"), 2);
        assert_eq!(count_occurrences(&tag_list(&tags[..1], 2).into_string(), "<li"), 1);
    }

    #[test]
    fn single_page_has_no_pagination() {
        let catalog = sample_catalog(3);
        let config = test_config();
        let window =
            paginate::paginate_items(catalog.resource_posts(), RESOURCES_PER_PAGE, 1).unwrap();
        let html = resources_index(&ctx(&catalog, &config), &window).into_string();
        assert!(!html.contains(r#"class="pagination""#));
    }

    #[test]
    fn empty_resources_page() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let window =
            paginate::paginate_items(catalog.resource_posts(), RESOURCES_PER_PAGE, 1).unwrap();
        let html = resources_index(&ctx(&catalog, &config), &window).into_string();
        let body = main_content(&html);
        assert!(body.contains("New articles are on the way."));
        assert!(!body.contains("featured-post"));
        assert_eq!(count_occurrences(body, r#"class="card post-card""#), 0);
    }

    #[test]
    fn article_page_renders_markdown() {
        let catalog = sample_catalog(2);
        let config = test_config();
        let post = catalog.resource_post("post-2").unwrap();
        let html = resource_article(&ctx(&catalog, &config), post).into_string();
        assert_contains_all(
            &html,
            &[
                "<title>Post 2 | QuadTech Consulting</title>",
                "<strong>markdown</strong>",
                "January 1, 2025",
                r#"<time datetime="2025-01-01">"#,
                r#""@type":"Article""#,
                r#"content="article""#,
            ],
        );
    }

    #[test]
    fn why_choose_us_lists_values() {
        let catalog = Catalog::builtin().unwrap();
        let config = test_config();
        let html = why_choose_us(&ctx(&catalog, &config)).into_string();
        for value in catalog.values() {
            assert!(html.contains(&value.title));
        }
        assert!(html.contains("A Hands-On IT Partner You Can Rely On"));
    }

    #[test]
    fn contact_page_hides_missing_phone() {
        let catalog = sample_catalog(0);
        let mut config = test_config();
        let html = contact(&ctx(&catalog, &config)).into_string();
        assert!(html.contains("tel:2077515564"));

        config.site.phone = String::new();
        let html = contact(&ctx(&catalog, &config)).into_string();
        assert!(!html.contains("tel:"));
        assert!(html.contains("mailto:contact@quadtechconsulting.com"));
    }

    #[test]
    fn legal_pages() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let privacy = privacy(&ctx(&catalog, &config)).into_string();
        assert!(privacy.contains("<h1>Privacy Policy</h1>"));
        let terms = terms(&ctx(&catalog, &config)).into_string();
        assert!(terms.contains("<h1>Terms of Service</h1>"));
        assert!(terms.contains("contact@quadtechconsulting.com"));
    }

    #[test]
    fn not_found_is_noindex() {
        let catalog = sample_catalog(0);
        let config = test_config();
        let html = not_found(&ctx(&catalog, &config)).into_string();
        assert!(html.contains("Page Not Found"));
        assert!(html.contains(r#"content="noindex""#));
    }

    #[test]
    fn content_is_escaped() {
        let mut summary = service("xss", Category::Cybersecurity);
        summary.title = "<script>alert('xss')</script>".to_string();
        let html = service_card(&summary).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
