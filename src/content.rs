//! Static copy for the landing page.

use crate::components::badge::BadgeTone;
use crate::roi::group_thousands;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Package {
    pub name: &'static str,
    /// Monthly price in whole dollars; `None` for quote-only packages.
    pub monthly_price: Option<u32>,
    pub badge: Option<(&'static str, BadgeTone)>,
    pub features: &'static [&'static str],
    pub blurb: Option<&'static str>,
    pub cta: &'static str,
    pub highlighted: bool,
}

pub const PACKAGES: &[Package] = &[
    Package {
        name: "Growth",
        monthly_price: Some(1500),
        badge: Some(("Best Value", BadgeTone::Green)),
        features: &[
            "Streamlined audit + keyword research",
            "On-page SEO (titles, metas, headers, internal links)",
            "Content plan + 2–4 content pieces/mo",
            "Basic Local SEO (GBP optimization + local targeting)",
            "Ethical link outreach",
            "Monthly check-ins + quarterly reports",
        ],
        blurb: None,
        cta: "Choose Growth",
        highlighted: false,
    },
    Package {
        name: "Authority",
        monthly_price: Some(3745),
        badge: Some(("Most Popular", BadgeTone::Blue)),
        features: &[
            "Deep audit + competitor analysis",
            "Technical SEO (speed, CWV, crawlability, indexing)",
            "Content at scale + topic clusters/pillar pages",
            "Multi-location Local SEO + review strategy",
            "Link building + digital PR",
            "Monthly check-ins + quarterly ROI reports",
        ],
        blurb: None,
        cta: "Choose Authority",
        highlighted: true,
    },
    Package {
        name: "Custom",
        monthly_price: None,
        badge: None,
        features: &[],
        blurb: Some("Flexible scope tailored to your business. Contact us to design a plan that fits your needs."),
        cta: "Start Custom",
        highlighted: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    /// One cell per package, in `PACKAGES` order.
    pub cells: [&'static str; 3],
}

pub const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow { feature: "SEO Audit & Strategy", cells: ["Included", "Included", "Included"] },
    ComparisonRow { feature: "On-Page SEO", cells: ["Included", "Included", "Optional"] },
    ComparisonRow { feature: "Technical SEO", cells: ["—", "Included", "Optional"] },
    ComparisonRow { feature: "Content SEO", cells: ["2–4/mo", "Scale", "As scoped"] },
    ComparisonRow { feature: "Local SEO", cells: ["Basic", "Multi-location", "As scoped"] },
    ComparisonRow { feature: "Off-Page SEO", cells: ["Link outreach", "PR + Links", "As scoped"] },
    ComparisonRow { feature: "Reporting", cells: ["Monthly + Quarterly", "Monthly + Quarterly ROI", "Flexible"] },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Milestone {
    pub icon: &'static str,
    pub accent: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone { icon: "🔍", accent: "blue", title: "Months 1–2", text: "Audit & foundation. Don’t expect big jumps yet." },
    Milestone { icon: "✍️", accent: "green", title: "Months 3–4", text: "Early wins: keywords start moving, traffic stabilizes." },
    Milestone { icon: "📈", accent: "yellow", title: "Months 5–6", text: "Growth momentum. Rankings lift, leads start flowing." },
    Milestone { icon: "🚀", accent: "red", title: "6+", text: "Compounding results. Your SEO snowball effect." },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { title: "1. Discover", body: "Audit, analytics, baseline KPIs, competitor research." },
    ProcessStep { title: "2. Plan", body: "Roadmap across technical, content, links, local. Prioritize by impact." },
    ProcessStep { title: "3. Build", body: "Implement fixes, publish and optimize content, run outreach." },
    ProcessStep { title: "4. Scale", body: "Monthly check-ins; quarterly deep-dives; double-down on winners." },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ava R.",
        role: "DTC Skincare",
        quote: "Within 6 months, organic revenue became our #1 channel. The quarterly ROI reviews keep us focused on what works.",
    },
    Testimonial {
        name: "Marcus T.",
        role: "B2B SaaS",
        quote: "Technical cleanup + content clusters unlocked rankings we chased for a year. Consistent leads every week now.",
    },
    Testimonial {
        name: "Lena K.",
        role: "Multi-location Clinic",
        quote: "Local pages + reviews strategy lifted calls across all locations. Transparent, methodical, effective.",
    },
];

/// A run of answer text; `Strong` runs are emphasised.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Run {
    Text(&'static str),
    Strong(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static [Run],
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        id: "faq-results",
        question: "How long before I see results?",
        answer: &[
            Run::Text("SEO is a long-term investment. Early improvements often appear in "),
            Run::Strong("2–3 months"),
            Run::Text(" as we fix foundations and optimize your content. More consistent ranking lifts and traffic growth typically occur between "),
            Run::Strong("months 4–6"),
            Run::Text(", with stronger compounding results beyond month 6. Unlike ads, SEO continues to pay off long after the work is done."),
        ],
    },
    FaqEntry {
        id: "faq-contract",
        question: "Do I need a contract?",
        answer: &[
            Run::Text("No. We don’t lock clients into long-term contracts. Our services are "),
            Run::Strong("month-to-month"),
            Run::Text(" so you have full flexibility. We aim to earn your trust with results, not paperwork."),
        ],
    },
    FaqEntry {
        id: "faq-switch",
        question: "Can I switch packages?",
        answer: &[Run::Text(
            "Yes. Your business isn’t static, and neither is your SEO. You can upgrade, downgrade, or move to a custom plan anytime. We’ll recommend changes if we see a better fit for your goals.",
        )],
    },
    FaqEntry {
        id: "faq-reports",
        question: "Do you provide reports?",
        answer: &[
            Run::Text("Absolutely. We do "),
            Run::Strong("monthly check-ins"),
            Run::Text(" where we review progress, quick wins, and next steps with you. Every "),
            Run::Strong("quarter"),
            Run::Text(", you’ll receive a comprehensive report covering rankings, traffic, conversions, and competitor movement — so you always know how your SEO investment is performing."),
        ],
    },
];

/// "$1,500" style monthly price.
pub fn format_price(amount: u32) -> String {
    format!("${}", group_thousands(u64::from(amount)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_has_a_cell_per_package() {
        for row in COMPARISON {
            assert_eq!(row.cells.len(), PACKAGES.len(), "{}", row.feature);
        }
    }

    #[test]
    fn exactly_one_package_is_highlighted() {
        let highlighted: Vec<_> = PACKAGES.iter().filter(|p| p.highlighted).map(|p| p.name).collect();
        assert_eq!(highlighted, vec!["Authority"]);
    }

    #[test]
    fn prices_are_grouped() {
        assert_eq!(format_price(1500), "$1,500");
        assert_eq!(format_price(3745), "$3,745");
        assert_eq!(format_price(750), "$750");
    }

    #[test]
    fn faq_ids_are_unique() {
        let mut ids: Vec<_> = FAQS.iter().map(|faq| faq.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FAQS.len());
    }

    #[test]
    fn testimonial_initials() {
        let initials: String = TESTIMONIALS.iter().map(Testimonial::initial).collect();
        assert_eq!(initials, "AML");
    }
}
