//! Typed deck content records.
//!
//! One record per deck section, plus the small value types they share. All
//! records are plain owned data; nothing here computes.

use serde::{Deserialize, Serialize};

/// Root aggregate: one record per deck section, in deck order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckContent {
    pub company: Company,
    pub exec_summary: ExecSummary,
    pub problem: Problem,
    pub solution: Solution,
    pub insight: Insight,
    pub traction: Traction,
    pub business_model: BusinessModel,
    pub unit_economics: UnitEconomics,
    pub competitive: Competitive,
    pub roadmap: Roadmap,
    pub team: Team,
    pub funding: Funding,
    pub contact: Contact,
}

/// A labeled callout such as `MRR: ₹6L`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricHighlight {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl MetricHighlight {
    pub fn new(label: &str, value: &str, detail: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            detail: detail.map(str::to_string),
        }
    }
}

/// Column titles and rows of cell text.
///
/// Every row must have as many cells as the header has titles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableData {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Build a table from string slices.
    pub fn new(header: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of body rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cells of column `index`, top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |row| row.get(index).map(String::as_str))
    }
}

/// One functional pillar of the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleBlock {
    pub name: String,
    pub outcome: String,
    pub failure_if_missing: String,
    pub bullets: Vec<String>,
}

/// One quarter on the roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineMilestone {
    pub quarter: String,
    pub theme: String,
    pub users: String,
    pub retention: String,
    pub revenue: String,
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FounderProfile {
    pub name: String,
    pub role: String,
    pub focus: String,
    pub achievements: Vec<String>,
}

/// One line of the use-of-funds breakdown. `allocation` is a percentage
/// string such as `"40%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingUse {
    pub category: String,
    pub amount: String,
    pub allocation: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneTarget {
    pub metric: String,
    pub now: String,
    pub target: String,
    pub timeline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

/// Cover slide content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub tagline: String,
    pub mission: String,
    pub stage: String,
    pub metrics: Vec<MetricHighlight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecSummary {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub summary: String,
    pub highlights: Vec<MetricHighlight>,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainPoint {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub statistics: Vec<MetricHighlight>,
    pub pain_points: Vec<PainPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub modules: Vec<ModuleBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub quote: String,
    pub observations: Vec<String>,
    pub comparison: TableData,
}

/// Traction numbers. The first `growth` column holds category labels and
/// every other column is a numeric series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traction {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub metrics: Vec<MetricHighlight>,
    pub growth: TableData,
}

/// A revenue stream. `share` is a percentage string such as `"55%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueStream {
    pub name: String,
    pub price: String,
    pub share: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessModel {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub streams: Vec<RevenueStream>,
    pub pricing: TableData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEconomics {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub cac: TableData,
    pub ltv: TableData,
    pub highlights: Vec<MetricHighlight>,
}

/// Competitive comparison. Cells may hold check/cross sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitive {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub comparison: TableData,
    pub advantages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub timeline: Vec<TimelineMilestone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub founders: Vec<FounderProfile>,
    #[serde(default)]
    pub hiring_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Funding {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub ask: String,
    pub instrument: String,
    pub uses: Vec<FundingUse>,
    pub milestones: Vec<MilestoneTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub cards: Vec<ContactCard>,
    pub website: String,
    pub closing_line: String,
}
