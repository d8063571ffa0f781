//! Manufacturing cost report request/response models
//!
//! Models for the GET /api/manufacturing-costs endpoint: filter parsing,
//! the joined detail row, the per-type summary, and the pagination window.

use chrono::NaiveDate;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

/// Fixed detail page size
pub const PAGE_SIZE: u64 = 15;

/// Closed set of cost classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostType {
    Labor,
    Overhead,
    Electricity,
    Maintenance,
    Other,
}

impl CostType {
    pub const ALL: [CostType; 5] = [
        CostType::Labor,
        CostType::Overhead,
        CostType::Electricity,
        CostType::Maintenance,
        CostType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CostType::Labor => "labor",
            CostType::Overhead => "overhead",
            CostType::Electricity => "electricity",
            CostType::Maintenance => "maintenance",
            CostType::Other => "other",
        }
    }
}

impl FromStr for CostType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "labor" => Ok(CostType::Labor),
            "overhead" => Ok(CostType::Overhead),
            "electricity" => Ok(CostType::Electricity),
            "maintenance" => Ok(CostType::Maintenance),
            "other" => Ok(CostType::Other),
            _ => Err(format!("unknown cost type '{}'", s)),
        }
    }
}

/// Raw query parameters as they arrive on the URL.
///
/// Everything is optional; empty strings (an unfilled form control) are
/// treated the same as absent parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostReportQuery {
    pub batch_id: Option<String>,
    pub cost_type: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
}

/// Validated filter set, AND-combined; `None` imposes no constraint.
/// Date bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct CostFilters {
    pub batch_id: Option<i32>,
    pub cost_type: Option<CostType>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl CostReportQuery {
    /// Parse and type-check the raw parameters into a filter set and page
    pub fn parse(&self) -> Result<(CostFilters, u64), String> {
        let batch_id = match self.batch_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(v) => Some(
                v.parse::<i32>()
                    .map_err(|_| format!("invalid batch_id '{}'", v))?,
            ),
        };

        let cost_type = match self.cost_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(v) => Some(v.parse::<CostType>()?),
        };

        let date_from = parse_date(self.date_from.as_deref(), "date_from")?;
        let date_to = parse_date(self.date_to.as_deref(), "date_to")?;
        if let (Some(from), Some(to)) = (date_from, date_to) {
            if from > to {
                return Err("date_from must not be after date_to".to_string());
            }
        }

        let page = match self.page.as_deref().map(str::trim) {
            None | Some("") => 1,
            Some(v) => v
                .parse::<u64>()
                .map_err(|_| format!("invalid page '{}'", v))?
                .max(1),
        };

        Ok((
            CostFilters {
                batch_id,
                cost_type,
                date_from,
                date_to,
            },
            page,
        ))
    }
}

fn parse_date(value: Option<&str>, param: &str) -> Result<Option<NaiveDate>, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("invalid {} '{}', expected YYYY-MM-DD", param, v)),
    }
}

/// One detail row, joined with batch number and recorder display name
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct CostRow {
    pub id: i32,
    pub batch_id: i32,
    pub batch_number: String,
    pub cost_type: String,
    pub amount: f64,
    pub recorded_date: NaiveDate,
    pub description: Option<String>,
    /// Null when the recording user no longer resolves
    pub recorded_by_name: Option<String>,
}

/// Aggregate over all filter-matching rows for one cost type
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct CostTypeSummary {
    pub cost_type: String,
    pub entry_count: i64,
    pub total_amount: f64,
    pub average_amount: f64,
}

/// One entry in the rendered pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u64),
    Ellipsis,
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Page(p) => serializer.serialize_u64(*p),
            PageLink::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Sliding pagination window: first page, up to 2 pages either side of the
/// current page, last page, with ellipsis markers where pages are elided.
pub fn page_links(page: u64, total_pages: u64) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }

    let start = page.saturating_sub(2).max(1);
    let end = page.saturating_add(2).min(total_pages);

    let mut links = vec![PageLink::Page(1)];
    if start > 2 {
        links.push(PageLink::Ellipsis);
    }
    for p in start.max(2)..=end.min(total_pages.saturating_sub(1)) {
        links.push(PageLink::Page(p));
    }
    if end + 1 < total_pages {
        links.push(PageLink::Ellipsis);
    }
    if total_pages > 1 {
        links.push(PageLink::Page(total_pages));
    }
    links
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
    pub total_rows: u64,
    pub total_pages: u64,
    pub links: Vec<PageLink>,
}

#[derive(Debug, Serialize)]
pub struct CostReportResponse {
    pub rows: Vec<CostRow>,
    pub summary: Vec<CostTypeSummary>,
    pub grand_total: f64,
    pub pagination: Pagination,
}
