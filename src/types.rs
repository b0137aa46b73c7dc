//! Content records shared by the catalog, the router, and the page composer.
//!
//! Everything here is plain data. Records are built once when the
//! [`Catalog`](crate::catalog::Catalog) is constructed and never mutated
//! afterwards, so they derive `Serialize`/`Deserialize` for TOML catalogs but
//! carry no behavior beyond small display helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed service groupings.
///
/// Variant order is the canonical order used by the services index and the
/// sitemap. The home page lists them in [`Category::HOME_ORDER`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Cybersecurity,
    CloudInfrastructure,
    WebCommunications,
    ItManagement,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Cybersecurity,
        Category::CloudInfrastructure,
        Category::WebCommunications,
        Category::ItManagement,
    ];

    /// Order of the category cards on the home page.
    pub const HOME_ORDER: [Category; 4] = [
        Category::ItManagement,
        Category::Cybersecurity,
        Category::CloudInfrastructure,
        Category::WebCommunications,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Cybersecurity => "Cybersecurity",
            Category::CloudInfrastructure => "Cloud and Infrastructure",
            Category::WebCommunications => "Web and Communications",
            Category::ItManagement => "IT Management and Support",
        }
    }

    /// URL segment under `/services/category/`.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Cybersecurity => "cybersecurity",
            Category::CloudInfrastructure => "cloud-infrastructure",
            Category::WebCommunications => "web-communications",
            Category::ItManagement => "it-management",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Long description shown above each group on the services index.
    pub fn description(self) -> &'static str {
        match self {
            Category::Cybersecurity => {
                "Protect your business from evolving threats with proactive security strategies, compliance expertise, and comprehensive risk reduction services."
            }
            Category::CloudInfrastructure => {
                "Build scalable, reliable IT infrastructure with modern cloud solutions and robust business continuity planning."
            }
            Category::WebCommunications => {
                "Establish a strong digital presence and streamline business communications with modern web and telephony solutions."
            }
            Category::ItManagement => {
                "Keep your technology running smoothly with expert monitoring, proactive maintenance, and strategic IT leadership."
            }
        }
    }

    /// Short teaser used on the home page category cards.
    pub fn teaser(self) -> &'static str {
        match self {
            Category::Cybersecurity => {
                "Reduce risk with practical security measures, clear best practices for your team, and monitoring that helps you spot issues early."
            }
            Category::CloudInfrastructure => {
                "Use cloud tools and infrastructure that scale with your business, support remote work, and keep your files organized."
            }
            Category::WebCommunications => {
                "Establish a professional online presence and streamline how your team communicates with modern websites and phone solutions."
            }
            Category::ItManagement => {
                "Keep your systems reliable with proactive maintenance, routine checks, and responsive support when something is not working."
            }
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Category::Cybersecurity => Icon::ShieldCheck,
            Category::CloudInfrastructure => Icon::CloudCog,
            Category::WebCommunications => Icon::Globe,
            Category::ItManagement => Icon::MonitorCog,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque presentation handle attached to content records.
///
/// The data model never interprets it; the page composer maps it to a
/// glyph (see [`crate::layout::icon`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Briefcase,
    Cloud,
    CloudCog,
    Globe,
    HardDrive,
    Handshake,
    Headphones,
    Lock,
    Mail,
    MessageSquare,
    MonitorCog,
    Phone,
    Search,
    Server,
    Shield,
    ShieldCheck,
    Sparkles,
    TrendingUp,
    Users,
}

impl Icon {
    /// Stable kebab-case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Briefcase => "briefcase",
            Icon::Cloud => "cloud",
            Icon::CloudCog => "cloud-cog",
            Icon::Globe => "globe",
            Icon::HardDrive => "hard-drive",
            Icon::Handshake => "handshake",
            Icon::Headphones => "headphones",
            Icon::Lock => "lock",
            Icon::Mail => "mail",
            Icon::MessageSquare => "message-square",
            Icon::MonitorCog => "monitor-cog",
            Icon::Phone => "phone",
            Icon::Search => "search",
            Icon::Server => "server",
            Icon::Shield => "shield",
            Icon::ShieldCheck => "shield-check",
            Icon::Sparkles => "sparkles",
            Icon::TrendingUp => "trending-up",
            Icon::Users => "users",
        }
    }
}

/// A service as shown in listing and grid views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSummary {
    /// Stable URL identifier, unique across the catalog.
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Site-relative path of the card image (e.g. `/images/managed-it.jpg`).
    pub image: String,
    pub category: Category,
    pub icon: Icon,
}

/// Full body of a service detail page, keyed by the same slug as its summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDetail {
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    /// "What's included" list, in display order.
    pub features: Vec<String>,
    pub benefits: Vec<String>,
    /// Label of the primary call-to-action button.
    #[serde(default = "default_cta_text")]
    pub cta_text: String,
    /// Optional "how it works" walkthrough.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub process_steps: Vec<ProcessStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,
}

pub const DEFAULT_CTA_TEXT: &str = "Schedule a Free Consultation";

fn default_cta_text() -> String {
    DEFAULT_CTA_TEXT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A resource article.
///
/// Catalog order is display and pagination order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourcePost {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub date: NaiveDate,
    /// Display string such as `"5 min read"`.
    pub reading_time: String,
    pub tags: Vec<String>,
    /// Markdown article body.
    pub body: String,
}

/// One entry on the why-choose-us page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyValue {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

/// `2025-12-01` → `"December 1, 2025"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `2025-12-01` → `"Dec 1, 2025"`.
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
