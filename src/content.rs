//! Production site content compiled into the binary.
//!
//! [`Catalog::builtin`](crate::catalog::Catalog::builtin) is the only caller.
//! Order matters: services appear in listings in the order declared here, and
//! resource posts are paginated in declaration order (newest first by
//! convention, not enforced).

use crate::types::{
    Category, CompanyValue, DEFAULT_CTA_TEXT, Faq, Icon, ProcessStep, ResourcePost, ServiceDetail,
    ServiceSummary,
};
use crate::catalog::CatalogError;
use chrono::NaiveDate;

fn summary(
    slug: &str,
    title: &str,
    description: &str,
    image: &str,
    category: Category,
    icon: Icon,
) -> ServiceSummary {
    ServiceSummary {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        category,
        icon,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn services() -> Vec<ServiceSummary> {
    use Category::*;
    vec![
        summary(
            "cybersecurity-training",
            "Cybersecurity Training",
            "Empower your team to recognize and prevent cyber threats through engaging, practical training programs that build lasting security awareness.",
            "/images/cybersecurity-1.jpg",
            Cybersecurity,
            Icon::Shield,
        ),
        summary(
            "compliance-security",
            "State Compliance and Security",
            "Navigate complex regulatory requirements with expert guidance, thorough documentation, and hands-on implementation support.",
            "/images/compliance.jpg",
            Cybersecurity,
            Icon::Lock,
        ),
        summary(
            "penetration-testing",
            "Penetration Testing",
            "Discover security weaknesses through controlled ethical hacking before malicious actors find and exploit them.",
            "/images/penetration-testing.jpg",
            Cybersecurity,
            Icon::Search,
        ),
        summary(
            "security-assessments",
            "Security Assessments",
            "Comprehensive evaluation of your entire security posture with clear findings and actionable improvement roadmaps.",
            "/images/security-assessment.jpg",
            Cybersecurity,
            Icon::ShieldCheck,
        ),
        summary(
            "cloud-solutions",
            "Cloud Solutions",
            "Strategic cloud adoption and optimization that reduces costs while improving scalability, reliability, and team productivity.",
            "/images/cloud-solutions.jpg",
            CloudInfrastructure,
            Icon::Cloud,
        ),
        summary(
            "backup-disaster-recovery",
            "Backup and Disaster Recovery",
            "Automated backups and thoroughly tested recovery plans that keep your data safe and your team productive.",
            "/images/backup-recovery.jpg",
            CloudInfrastructure,
            Icon::HardDrive,
        ),
        summary(
            "website-development",
            "Website Development and Support",
            "Modern, high-performance websites built to convert visitors into customers, backed by ongoing technical support and maintenance.",
            "/images/web-development.jpg",
            WebCommunications,
            Icon::Globe,
        ),
        summary(
            "email-domain-migration",
            "Email/Domain Migration",
            "Seamless migration of your email systems and domains with minimal disruption to your daily operations.",
            "/images/email-migration.jpg",
            WebCommunications,
            Icon::Mail,
        ),
        summary(
            "voip-phone-systems",
            "VoIP and Phone Systems",
            "Professional business phone systems with intelligent call routing, auto attendant features, and flexible device options.",
            "/images/voip-phone.jpg",
            WebCommunications,
            Icon::Phone,
        ),
        summary(
            "managed-it-services",
            "Managed IT Services",
            "Continuous monitoring and proactive maintenance that prevents problems before they impact your operations.",
            "/images/managed-it.jpg",
            ItManagement,
            Icon::Server,
        ),
        summary(
            "it-consulting-vcio",
            "IT Consulting (vCIO)",
            "Strategic IT leadership and planning that aligns your technology investments with your business goals and growth trajectory.",
            "/images/it-consulting.jpg",
            ItManagement,
            Icon::Briefcase,
        ),
    ]
}

struct DetailText<'a> {
    slug: &'a str,
    title: &'a str,
    short: &'a str,
    long: &'a str,
    features: &'a [&'a str],
    benefits: &'a [&'a str],
    cta: Option<&'a str>,
}

fn detail(text: DetailText<'_>) -> ServiceDetail {
    ServiceDetail {
        slug: text.slug.to_string(),
        title: text.title.to_string(),
        short_description: text.short.to_string(),
        long_description: text.long.to_string(),
        features: strings(text.features),
        benefits: strings(text.benefits),
        cta_text: text.cta.unwrap_or(DEFAULT_CTA_TEXT).to_string(),
        process_steps: Vec::new(),
        faqs: Vec::new(),
    }
}

pub fn service_details() -> Vec<ServiceDetail> {
    let mut training = detail(DetailText {
        slug: "cybersecurity-training",
        title: "Cybersecurity Training",
        short: "Empower your team to recognize and prevent cyber threats with engaging, practical training programs.",
        long: "Your employees are your first line of defense against cyber threats. Our training programs teach your team to identify phishing attempts, handle sensitive data properly, and follow security best practices to protect your organization.",
        features: &[
            "Phishing Simulations",
            "Security Awareness",
            "Compliance Training",
            "Interactive Modules",
            "Progress Tracking",
            "Custom Scenarios",
        ],
        benefits: &[
            "Reduce human error risks",
            "Meet compliance requirements",
            "Build a security-first culture",
            "Protect sensitive data",
        ],
        cta: Some("Schedule Training Consultation"),
    });
    training.process_steps = vec![
        ProcessStep {
            title: "Assessment".into(),
            description: "We analyze your team's current security awareness and identify knowledge gaps to create a customized training plan.".into(),
        },
        ProcessStep {
            title: "Hands-On Training".into(),
            description: "Engaging, interactive sessions teach your team to recognize and respond to common security threats.".into(),
        },
        ProcessStep {
            title: "Ongoing Reinforcement".into(),
            description: "Regular simulations and refresher modules ensure security awareness becomes part of your company culture.".into(),
        },
    ];
    training.faqs = vec![
        Faq {
            question: "How long does a typical training program take?".into(),
            answer: "Our core training modules can be completed in 2-3 hours, broken into convenient 15-30 minute sessions. We also offer comprehensive programs with regular refreshers over 3-6 months for maximum retention.".into(),
        },
        Faq {
            question: "Can training be customized for our industry?".into(),
            answer: "Absolutely. We tailor all training materials to address the specific threats and compliance requirements relevant to your industry, whether healthcare, finance, education, or other sectors.".into(),
        },
        Faq {
            question: "How do you measure training effectiveness?".into(),
            answer: "We use pre and post-training assessments, phishing simulation metrics, and behavior change tracking to measure improvement. Regular reports help you see the tangible impact on your security posture.".into(),
        },
    ];

    vec![
        detail(DetailText {
            slug: "managed-it-services",
            title: "Managed IT Services",
            short: "Continuous monitoring and maintenance that prevents problems before they impact your operations.",
            long: "Our Managed IT Services provide comprehensive technology support tailored to your business needs. We proactively monitor your systems, resolve issues before they become problems, and ensure your infrastructure runs smoothly so you can focus on growing your business.",
            features: &[
                "Proactive Monitoring",
                "Remote and On-site Support",
                "Infrastructure Management",
                "Help Desk Support",
                "Patch Management",
                "Vendor Management",
            ],
            benefits: &[
                "Reduce downtime and increase productivity",
                "Predictable monthly IT costs",
                "Access to a team of IT experts",
                "Focus on your core business",
            ],
            cta: None,
        }),
        detail(DetailText {
            slug: "website-development",
            title: "Website Development and Support",
            short: "Modern, high-performance websites built to convert visitors into customers with ongoing technical support.",
            long: "We design and develop custom websites that reflect your brand and drive results. From simple landing pages to complex web applications, our team delivers responsive, fast, and secure solutions with ongoing maintenance and support.",
            features: &[
                "Custom Web Apps",
                "Performance Optimization",
                "Maintenance Plans",
                "SEO-Friendly Design",
                "Mobile Responsive",
                "Content Management",
            ],
            benefits: &[
                "Professional online presence",
                "Increased lead generation",
                "Better user experience",
                "Ongoing technical support",
            ],
            cta: Some("Start Website Project"),
        }),
        detail(DetailText {
            slug: "email-domain-migration",
            title: "Email/Domain Migration",
            short: "Seamless migration of your email systems and domains with minimal disruption.",
            long: "Moving to a new email platform or domain can be complex. We handle the entire migration process, ensuring all your emails, contacts, and calendars transfer seamlessly with minimal downtime.",
            features: &[
                "Seamless Transitions",
                "Complete Data Transfer",
                "Post-Migration Support",
                "DNS Management",
                "User Training",
                "Backup and Verification",
            ],
            benefits: &[
                "Careful planning to minimize data loss",
                "Minimal business disruption",
                "Expert guidance throughout",
                "Ongoing support after migration",
            ],
            cta: None,
        }),
        training,
        detail(DetailText {
            slug: "compliance-security",
            title: "State Compliance and Security",
            short: "Navigate complex regulatory requirements with expert guidance and implementation support.",
            long: "Staying compliant with industry regulations can be overwhelming. We help you understand your requirements, implement necessary controls, and prepare for audits so you can operate with confidence.",
            features: &[
                "Gap Analysis",
                "Policy Creation",
                "Audit Preparation",
                "Risk Assessment",
                "Documentation",
                "Ongoing Compliance Monitoring",
            ],
            benefits: &[
                "Avoid costly penalties",
                "Build customer trust",
                "Streamlined audit process",
                "Clear compliance roadmap",
            ],
            cta: Some("Discuss Compliance Needs"),
        }),
        detail(DetailText {
            slug: "penetration-testing",
            title: "Penetration Testing",
            short: "Discover security weaknesses through ethical hacking before malicious actors exploit them.",
            long: "Our certified security experts simulate real-world attacks on your systems to identify vulnerabilities. We provide detailed reports with prioritized recommendations to strengthen your security posture.",
            features: &[
                "Network Testing",
                "Application Security",
                "Executive Reports",
                "Social Engineering Tests",
                "Remediation Guidance",
                "Retesting",
            ],
            benefits: &[
                "Find vulnerabilities before hackers do",
                "Prioritized remediation plan",
                "Meet compliance requirements",
                "Protect your reputation",
            ],
            cta: Some("Request Penetration Test"),
        }),
        detail(DetailText {
            slug: "security-assessments",
            title: "Security Assessments",
            short: "Comprehensive evaluation of your entire security posture with actionable improvement roadmaps.",
            long: "Get a complete picture of your organization's security health. We evaluate your policies, procedures, and technical controls to identify gaps and provide a clear roadmap for improvement.",
            features: &[
                "Perimeter Analysis",
                "Risk Evaluation",
                "Remediation Plans",
                "Policy Review",
                "Vulnerability Scanning",
                "Security Scoring",
            ],
            benefits: &[
                "Understand your risk exposure",
                "Prioritize security investments",
                "Improve overall security posture",
                "Executive-ready reports",
            ],
            cta: Some("Get Security Assessment"),
        }),
        detail(DetailText {
            slug: "cloud-solutions",
            title: "Cloud Solutions",
            short: "Strategic cloud adoption and optimization that reduces costs while improving scalability and reliability.",
            long: "Whether you're moving to the cloud or optimizing your existing setup, we help you leverage cloud technology to reduce costs, improve flexibility, and scale your infrastructure as your business grows.",
            features: &[
                "Migration Strategy",
                "Cost Optimization",
                "Hybrid Solutions",
                "Cloud Security",
                "Performance Monitoring",
                "Disaster Recovery",
            ],
            benefits: &[
                "Reduce infrastructure costs",
                "Scale on demand",
                "Improve reliability",
                "Access anywhere",
            ],
            cta: Some("Explore Cloud Options"),
        }),
        detail(DetailText {
            slug: "voip-phone-systems",
            title: "VoIP and Phone Systems",
            short: "Business calling solutions with call routing, IVR, and softphone/desk phone provisioning.",
            long: "Upgrade your business communications with modern VoIP solutions. We set up and manage phone systems that integrate with your existing tools, reduce costs, and provide professional features like auto-attendants and call analytics.",
            features: &[
                "Number Porting",
                "Call Routing and IVR",
                "Teams/Zoom Phone Setup",
                "Softphone Apps",
                "Call Analytics",
                "Voicemail to Email",
            ],
            benefits: &[
                "Lower phone bills",
                "Work from anywhere",
                "Professional call handling",
                "Easy scalability",
            ],
            cta: None,
        }),
        detail(DetailText {
            slug: "backup-disaster-recovery",
            title: "Backup and Disaster Recovery",
            short: "Automated backups and tested recovery plans to keep your data safe and your team online.",
            long: "Protect your business from data loss with automated backup solutions and tested disaster recovery plans. We ensure your critical data is safe and can be restored quickly when you need it most.",
            features: &[
                "Offsite Backups",
                "M365/Google Backup",
                "Recovery Testing",
                "Ransomware Protection",
                "RTO/RPO Planning",
                "Bare Metal Recovery",
            ],
            benefits: &[
                "Peace of mind",
                "Fast recovery times",
                "Protection from ransomware",
                "Business continuity",
            ],
            cta: Some("Discuss Backup Solutions"),
        }),
        detail(DetailText {
            slug: "it-consulting-vcio",
            title: "IT Consulting (vCIO)",
            short: "Strategic planning and guidance to align technology investments with your business goals.",
            long: "Get executive-level IT guidance without the full-time cost. Our virtual CIO services provide strategic technology planning, budgeting, and vendor management to ensure your IT investments drive business results.",
            features: &[
                "Roadmaps and Budgeting",
                "Vendor Management",
                "Policy and Governance",
                "Technology Reviews",
                "Strategic Planning",
                "Quarterly Business Reviews",
            ],
            benefits: &[
                "Align IT with business goals",
                "Optimize technology spending",
                "Expert guidance on demand",
                "Long-term technology strategy",
            ],
            cta: None,
        }),
    ]
}

fn post(
    slug: &str,
    title: &str,
    description: &str,
    (year, month, day): (i32, u32, u32),
    minutes: u32,
    tags: &[&str],
    body: &str,
) -> Result<ResourcePost, CatalogError> {
    let date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| CatalogError::InvalidDate {
            post: slug.to_string(),
            date: format!("{year:04}-{month:02}-{day:02}"),
        })?;
    Ok(ResourcePost {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: format!("/images/resources/{slug}.jpg"),
        date,
        reading_time: format!("{minutes} min read"),
        tags: strings(tags),
        body: body.trim().to_string(),
    })
}

pub fn resource_posts() -> Result<Vec<ResourcePost>, CatalogError> {
    [
        post(
            "spotting-phishing-emails",
            "How to Spot a Phishing Email in Under a Minute",
            "A quick checklist your team can use to catch suspicious messages before anyone clicks.",
            (2025, 12, 1),
            5,
            &["Security", "Training", "Email"],
            r#"
Phishing is still the most common way attackers get into small businesses.
The good news: most phishing emails share a handful of tells.

## The one-minute checklist

1. **Check the sender address**, not just the display name.
2. **Hover before you click.** Does the link go where the text says?
3. **Look for urgency.** "Your account will be closed today" is a pressure tactic.
4. **Question attachments** you weren't expecting, even from people you know.

## When in doubt

Forward the message to your IT contact and delete it. A thirty-second pause
costs nothing; a compromised mailbox can cost weeks.
"#,
        ),
        post(
            "backup-3-2-1-rule",
            "The 3-2-1 Backup Rule, Explained for Busy Owners",
            "Three copies, two media, one offsite: what it means and how to check you're covered.",
            (2025, 11, 18),
            6,
            &["Backup", "Disaster Recovery"],
            r#"
The 3-2-1 rule is the simplest backup strategy that actually survives a bad day.

- **3** copies of your data
- **2** different types of storage
- **1** copy kept offsite

## Test your restores

A backup you have never restored is a hope, not a plan. Schedule a restore
test every quarter and write down how long it took.
"#,
        ),
        post(
            "choosing-a-voip-system",
            "Choosing a VoIP Phone System Without the Sales Pitch",
            "The features that matter for a small office, and the ones you can skip.",
            (2025, 11, 4),
            7,
            &["VoIP", "Communications"],
            r#"
Modern phone systems run over your internet connection, which makes them
cheaper and far more flexible than a traditional PBX.

## Must-haves

- Auto attendant and simple call routing
- Voicemail to email
- Mobile and desktop apps

## Nice-to-haves

Call analytics and CRM integrations are useful once the basics are solid.
"#,
        ),
        post(
            "cloud-migration-checklist",
            "A Practical Cloud Migration Checklist",
            "What to inventory, what to move first, and how to avoid surprise bills.",
            (2025, 10, 21),
            8,
            &["Cloud", "Planning"],
            r#"
Moving to the cloud is less about technology and more about sequencing.

## Before you move

1. Inventory applications and who depends on them.
2. Identify data that has compliance requirements.
3. Set a monthly budget alert before the first workload lands.

## Move the easy things first

File shares and email are usually the lowest-risk starting points.
"#,
        ),
        post(
            "mfa-for-small-business",
            "Multi-Factor Authentication: The Cheapest Security Upgrade You Can Make",
            "Why MFA blocks most account takeovers and how to roll it out without a revolt.",
            (2025, 10, 7),
            5,
            &["Security", "Identity"],
            r#"
Stolen passwords are everywhere. Multi-factor authentication makes a stolen
password nearly useless on its own.

## Rolling it out

Start with email and finance systems, give staff a week of notice, and offer
a short walkthrough. Authenticator apps beat SMS codes when you have a choice.
"#,
        ),
        post(
            "email-domain-migration-guide",
            "Switching Email Providers Without Losing a Message",
            "How a planned cut-over keeps mail flowing while DNS catches up.",
            (2025, 9, 23),
            6,
            &["Email", "Migration"],
            r#"
Email migrations fail when they are rushed. A good plan has three phases:
copy, cut over, and clean up.

## Lower your DNS TTL early

Reducing the TTL on your MX records a few days ahead means the switch
propagates in minutes instead of hours.
"#,
        ),
        post(
            "what-is-a-vcio",
            "What Does a Virtual CIO Actually Do?",
            "Strategic IT leadership for companies that aren't ready for a full-time executive.",
            (2025, 9, 9),
            5,
            &["Strategy", "vCIO"],
            r#"
A virtual CIO gives you a technology roadmap, a budget, and someone who
holds vendors accountable, without a full-time salary.

## Typical deliverables

- An annual technology roadmap
- Quarterly business reviews
- Vendor and license audits
"#,
        ),
        post(
            "patch-management-basics",
            "Patch Management Basics: Why Updates Can't Wait",
            "Most breaches exploit known, already-fixed vulnerabilities. Here's how to stay current.",
            (2025, 8, 26),
            4,
            &["Managed IT", "Security"],
            r#"
Unpatched software is an open door. Attackers scan for known weaknesses
within days of a fix being published.

## A simple cadence

Apply security updates weekly, test major upgrades on one machine first, and
keep a list of anything that can't be updated so it gets extra protection.
"#,
        ),
        post(
            "website-speed-matters",
            "Why Your Website's Speed Is Costing You Leads",
            "Slow pages lose visitors. A few fixes usually recover most of the difference.",
            (2025, 8, 12),
            5,
            &["Web", "Performance"],
            r#"
Visitors decide in seconds whether to stay. Every extra second of load time
means fewer contact form submissions.

## Quick wins

- Compress and resize images
- Remove unused scripts and plugins
- Use a content delivery network
"#,
        ),
        post(
            "compliance-starter-guide",
            "A Starter Guide to State Data Privacy Compliance",
            "What small businesses need to know about protecting customer information.",
            (2025, 7, 29),
            7,
            &["Compliance", "Security"],
            r#"
State privacy laws increasingly apply to small businesses that hold customer
data. Compliance starts with knowing what you collect and where it lives.

## First steps

1. Map the personal data you store.
2. Write down who can access it.
3. Document how you would notify customers after an incident.
"#,
        ),
        post(
            "penetration-test-vs-assessment",
            "Penetration Test or Security Assessment: Which Do You Need?",
            "Two services that sound alike but answer different questions.",
            (2025, 7, 15),
            6,
            &["Security", "Testing"],
            r#"
A **security assessment** asks "where are we exposed?" across policies,
people, and technology. A **penetration test** asks "can someone actually get
in?" by trying.

## Start with the assessment

If you've never done either, an assessment gives you the map. A penetration
test then checks the defenses you've prioritized.
"#,
        ),
    ]
    .into_iter()
    .collect()
}

pub fn company_values() -> Vec<CompanyValue> {
    vec![
        CompanyValue {
            title: "Clear Communication".into(),
            description: "We explain options in plain language and set realistic expectations. No jargon, no surprises, just honest guidance you can act on.".into(),
            icon: Icon::MessageSquare,
        },
        CompanyValue {
            title: "Responsive Support".into(),
            description: "When something breaks, you have a team that responds quickly and follows through until it's resolved. We stay close to your day-to-day reality.".into(),
            icon: Icon::Headphones,
        },
        CompanyValue {
            title: "Practical Security".into(),
            description: "We help you understand where you're at risk and prioritize the improvements that matter most. No fear tactics, just sensible protection.".into(),
            icon: Icon::Shield,
        },
        CompanyValue {
            title: "Strategic Guidance".into(),
            description: "A simple roadmap that connects technology decisions to your business goals. We recommend what makes sense, not what's most expensive.".into(),
            icon: Icon::TrendingUp,
        },
    ]
}
