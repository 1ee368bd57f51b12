//! The bundled ScaleUp pitch content.

use super::model::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn metric(label: &str, value: &str, detail: Option<&str>) -> MetricHighlight {
    MetricHighlight::new(label, value, detail)
}

pub(crate) fn scaleup() -> DeckContent {
    DeckContent {
        company: Company {
            name: "ScaleUp".to_string(),
            tagline: "The growth operating system for India's small businesses".to_string(),
            mission: "Give every kirana, clinic and workshop the playbooks, credit and \
                      tooling that only large chains can afford today."
                .to_string(),
            stage: "Pre-Series A".to_string(),
            metrics: vec![
                metric("Monthly Revenue", "₹6L", Some("MRR, Dec 2024")),
                metric("Active Businesses", "1,500", Some("across 42 cities")),
                metric("Net Retention", "118%", Some("trailing 6 months")),
            ],
        },
        exec_summary: ExecSummary {
            title: "Executive Summary".to_string(),
            subtitle: "Profitable unit economics in a 63M-business market".to_string(),
            summary: "ScaleUp bundles bookkeeping, demand generation and working-capital \
                      access into one mobile app priced for businesses doing under ₹1Cr a year."
                .to_string(),
            highlights: vec![
                metric("Market", "63M", Some("MSMEs in India")),
                metric("Payback", "4 months", Some("blended CAC")),
                metric("LTV:CAC", "5.2x", None),
                metric("Gross Margin", "78%", None),
            ],
            key_points: strings(&[
                "Vernacular-first onboarding in 9 languages",
                "Embedded lending partners underwrite from live ledger data",
                "Channel partnerships with 3 distributor networks",
                "Raising ₹8Cr to reach 10,000 paying businesses",
            ]),
        },
        problem: Problem {
            title: "The Problem".to_string(),
            subtitle: "Small businesses stall long before they fail".to_string(),
            statistics: vec![
                metric("Run on paper", "72%", Some("of MSMEs keep no digital books")),
                metric("Credit gap", "₹25L Cr", Some("unmet working-capital demand")),
                metric("Stall rate", "~60%", Some("never pass 5 employees")),
            ],
            pain_points: vec![
                PainPoint {
                    title: "No visibility".to_string(),
                    description: "Owners cannot see margins, dues or stock until month end."
                        .to_string(),
                },
                PainPoint {
                    title: "Expensive credit".to_string(),
                    description: "Informal lenders charge 3-5% a month without records."
                        .to_string(),
                },
                PainPoint {
                    title: "Fragmented tools".to_string(),
                    description: "Billing, payments and marketing live in separate apps."
                        .to_string(),
                },
            ],
        },
        solution: Solution {
            title: "Our Solution".to_string(),
            subtitle: "Three modules, one ledger".to_string(),
            modules: vec![
                ModuleBlock {
                    name: "Ledger".to_string(),
                    outcome: "Real-time books from UPI and billing data".to_string(),
                    failure_if_missing: "Decisions made on gut feel".to_string(),
                    bullets: strings(&[
                        "Auto-reconciled UPI receipts",
                        "GST-ready invoices",
                        "Daily cash summary on WhatsApp",
                    ]),
                },
                ModuleBlock {
                    name: "Growth".to_string(),
                    outcome: "Repeat customers through automated campaigns".to_string(),
                    failure_if_missing: "Revenue depends on walk-ins".to_string(),
                    bullets: strings(&[
                        "Loyalty and referral programs",
                        "Festival campaign templates",
                        "Google profile sync",
                    ]),
                },
                ModuleBlock {
                    name: "Capital".to_string(),
                    outcome: "Working capital in 48 hours".to_string(),
                    failure_if_missing: "Stockouts in peak season".to_string(),
                    bullets: strings(&[
                        "Ledger-based underwriting",
                        "Partner NBFC disbursal",
                        "Auto-repay from daily sales",
                    ]),
                },
            ],
        },
        insight: Insight {
            title: "Key Insight".to_string(),
            subtitle: "Owners adopt tools that pay for themselves in a week".to_string(),
            quote: "I did not need software, I needed to know which customers owe me money."
                .to_string(),
            observations: strings(&[
                "Ledger users open the app 11 times a week",
                "Credit access is the top reason to keep books digitally",
                "Referrals drive 40% of new sign-ups",
            ]),
            comparison: TableData::new(
                &["Behaviour", "Before ScaleUp", "After 90 days"],
                &[
                    &["Days to close books", "30", "1"],
                    &["Repeat customers", "18%", "31%"],
                    &["Credit cost / month", "4%", "1.6%"],
                ],
            ),
        },
        traction: Traction {
            title: "Traction".to_string(),
            subtitle: "Compounding growth since launch".to_string(),
            metrics: vec![
                metric("Businesses", "1,500", None),
                metric("MRR", "₹6L", None),
                metric("MoM Growth", "22%", None),
                metric("Churn", "2.1%", Some("monthly")),
            ],
            growth: TableData::new(
                &["Month", "Businesses", "MRR (₹L)"],
                &[
                    &["Jul", "310", "1.2"],
                    &["Aug", "480", "1.9"],
                    &["Sep", "690", "2.7"],
                    &["Oct", "920", "3.6"],
                    &["Nov", "1,210", "4.8"],
                    &["Dec", "1,500", "6"],
                ],
            ),
        },
        business_model: BusinessModel {
            title: "Business Model".to_string(),
            subtitle: "Subscription first, credit as the multiplier".to_string(),
            streams: vec![
                RevenueStream {
                    name: "Subscriptions".to_string(),
                    price: "₹499/mo".to_string(),
                    share: "55%".to_string(),
                    description: "Ledger and Growth modules".to_string(),
                },
                RevenueStream {
                    name: "Lending Commission".to_string(),
                    price: "1.5% of disbursal".to_string(),
                    share: "30%".to_string(),
                    description: "Paid by partner NBFCs".to_string(),
                },
                RevenueStream {
                    name: "Payments".to_string(),
                    price: "0.4% MDR share".to_string(),
                    share: "15%".to_string(),
                    description: "Card and wallet acceptance".to_string(),
                },
            ],
            pricing: TableData::new(
                &["Plan", "Price", "Includes"],
                &[
                    &["Starter", "Free", "Ledger, 50 invoices"],
                    &["Pro", "₹499/mo", "Ledger + Growth"],
                    &["Scale", "₹1,499/mo", "All modules, 5 users"],
                ],
            ),
        },
        unit_economics: UnitEconomics {
            title: "Unit Economics".to_string(),
            subtitle: "Every cohort pays back inside two quarters".to_string(),
            cac: TableData::new(
                &["Channel", "CAC", "Mix"],
                &[
                    &["Referral", "₹450", "40%"],
                    &["Field partners", "₹1,800", "35%"],
                    &["Digital", "₹2,600", "25%"],
                ],
            ),
            ltv: TableData::new(
                &["Component", "Value"],
                &[
                    &["ARPU / month", "₹640"],
                    &["Gross margin", "78%"],
                    &["Avg. lifetime", "18 months"],
                    &["LTV", "₹8,990"],
                ],
            ),
            highlights: vec![
                metric("Blended CAC", "₹1,720", None),
                metric("LTV:CAC", "5.2x", None),
                metric("Payback", "4 months", None),
            ],
        },
        competitive: Competitive {
            title: "Competitive Landscape".to_string(),
            subtitle: "The only stack built around the ledger".to_string(),
            comparison: TableData::new(
                &["Capability", "ScaleUp", "Khata apps", "POS vendors", "Banks"],
                &[
                    &["Digital ledger", "✓", "✓", "✗", "✗"],
                    &["Marketing automation", "✓", "✗", "✗", "✗"],
                    &["Ledger-based credit", "✓", "✗", "✗", "✓"],
                    &["Vernacular support", "✓", "✓", "✗", "✗"],
                    &["Under ₹500/mo", "✓", "✓", "✗", "✓"],
                ],
            ),
            advantages: strings(&[
                "Proprietary transaction graph across 1,500 businesses",
                "Distributor partnerships lower CAC below ₹2,000",
                "Credit revenue scales without extra headcount",
            ]),
        },
        roadmap: Roadmap {
            title: "Roadmap".to_string(),
            subtitle: "From 1,500 to 10,000 businesses in four quarters".to_string(),
            timeline: vec![
                TimelineMilestone {
                    quarter: "Q1 2025".to_string(),
                    theme: "Deepen".to_string(),
                    users: "2,500".to_string(),
                    retention: "80%".to_string(),
                    revenue: "₹10L MRR".to_string(),
                    highlights: strings(&[
                        "Inventory module for retail and pharmacy verticals",
                        "Tamil and Bengali voice onboarding",
                        "Second NBFC partner live",
                    ]),
                    funding_note: Some("Seed extension closes".to_string()),
                },
                TimelineMilestone {
                    quarter: "Q2 2025".to_string(),
                    theme: "Expand".to_string(),
                    users: "4,500".to_string(),
                    retention: "82%".to_string(),
                    revenue: "₹18L MRR".to_string(),
                    highlights: strings(&[
                        "Launch in 20 tier-3 cities",
                        "Distributor channel program",
                        "Automated GST filing",
                        "Partner marketplace beta",
                    ]),
                    funding_note: None,
                },
                TimelineMilestone {
                    quarter: "Q3 2025".to_string(),
                    theme: "Monetise".to_string(),
                    users: "7,000".to_string(),
                    retention: "84%".to_string(),
                    revenue: "₹30L MRR".to_string(),
                    highlights: strings(&[
                        "Scale plan with multi-user access",
                        "Invoice discounting with supplier-side settlement",
                    ]),
                    funding_note: None,
                },
                TimelineMilestone {
                    quarter: "Q4 2025".to_string(),
                    theme: "Lead".to_string(),
                    users: "10,000".to_string(),
                    retention: "85%".to_string(),
                    revenue: "₹45L MRR".to_string(),
                    highlights: strings(&[
                        "Break-even on contribution margin",
                        "Series A readiness",
                        "API for accounting partners",
                    ]),
                    funding_note: Some("Series A raise".to_string()),
                },
            ],
        },
        team: Team {
            title: "Team".to_string(),
            subtitle: "Operators who have built for Bharat before".to_string(),
            founders: vec![
                FounderProfile {
                    name: "Ananya Rao".to_string(),
                    role: "CEO".to_string(),
                    focus: "Growth and partnerships".to_string(),
                    achievements: strings(&[
                        "Scaled merchant acquisition at a payments unicorn to 2M",
                        "IIM Ahmedabad",
                    ]),
                },
                FounderProfile {
                    name: "Vikram Iyer".to_string(),
                    role: "CTO".to_string(),
                    focus: "Platform and data".to_string(),
                    achievements: strings(&[
                        "Led lending platform engineering at a digital NBFC",
                        "IIT Madras",
                    ]),
                },
                FounderProfile {
                    name: "Farah Khan".to_string(),
                    role: "COO".to_string(),
                    focus: "Operations and credit".to_string(),
                    achievements: strings(&[
                        "Built field teams across 60 districts",
                        "Ex-credit risk, private bank",
                    ]),
                },
            ],
            hiring_note: "Hiring: 6 engineers and 10 city leads in 2025".to_string(),
        },
        funding: Funding {
            title: "The Ask".to_string(),
            subtitle: "Fuel for four quarters of compounding growth".to_string(),
            ask: "₹8Cr".to_string(),
            instrument: "Priced equity round".to_string(),
            uses: vec![
                FundingUse {
                    category: "Product & Engineering".to_string(),
                    amount: "₹3.2Cr".to_string(),
                    allocation: "40%".to_string(),
                    purpose: "Inventory, GST and credit modules".to_string(),
                },
                FundingUse {
                    category: "Growth".to_string(),
                    amount: "₹2.4Cr".to_string(),
                    allocation: "30%".to_string(),
                    purpose: "City launches and distributor channel".to_string(),
                },
                FundingUse {
                    category: "Credit Operations".to_string(),
                    amount: "₹1.6Cr".to_string(),
                    allocation: "20%".to_string(),
                    purpose: "Risk team and first-loss guarantees".to_string(),
                },
                FundingUse {
                    category: "Reserve".to_string(),
                    amount: "₹0.8Cr".to_string(),
                    allocation: "10%".to_string(),
                    purpose: "18+ months runway buffer".to_string(),
                },
            ],
            milestones: vec![
                MilestoneTarget {
                    metric: "Paying businesses".to_string(),
                    now: "1,500".to_string(),
                    target: "10,000".to_string(),
                    timeline: "12 months".to_string(),
                },
                MilestoneTarget {
                    metric: "MRR".to_string(),
                    now: "₹6L".to_string(),
                    target: "₹45L".to_string(),
                    timeline: "12 months".to_string(),
                },
                MilestoneTarget {
                    metric: "Credit disbursed".to_string(),
                    now: "₹1.2Cr".to_string(),
                    target: "₹20Cr".to_string(),
                    timeline: "12 months".to_string(),
                },
            ],
        },
        contact: Contact {
            title: "Let's Scale Together".to_string(),
            subtitle: "We would love to walk you through the data room".to_string(),
            cards: vec![
                ContactCard {
                    name: "Ananya Rao".to_string(),
                    role: "Co-founder & CEO".to_string(),
                    email: "ananya@scaleup.in".to_string(),
                    phone: "+91 98450 12345".to_string(),
                    linkedin: "linkedin.com/in/ananyarao".to_string(),
                },
                ContactCard {
                    name: "Vikram Iyer".to_string(),
                    role: "Co-founder & CTO".to_string(),
                    email: "vikram@scaleup.in".to_string(),
                    phone: "+91 98860 67890".to_string(),
                    linkedin: "linkedin.com/in/vikramiyer".to_string(),
                },
            ],
            website: "www.scaleup.in".to_string(),
            closing_line: "Thank you".to_string(),
        },
    }
}
