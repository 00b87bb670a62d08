//! Serializable page snapshot for client-side renderers

use super::Page;
use crate::series::Series;
use serde::Serialize;

/// Everything a client needs to draw a pagination control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub count: u64,
    pub page: u64,
    /// Page asked for; differs from `page` after overflow recovery
    pub requested_page: u64,
    pub items: u64,
    pub pages: u64,
    pub last: u64,
    pub offset: u64,
    pub from: u64,
    pub to: u64,
    #[serde(rename = "in")]
    pub in_page: u64,
    pub prev: Option<u64>,
    pub next: Option<u64>,
    pub page_param: String,
    pub series: Series,
}

impl Metadata {
    pub(super) fn new(page: &Page, series: Series) -> Self {
        Self {
            count: page.count(),
            page: page.page(),
            requested_page: page.requested_page(),
            items: page.items(),
            pages: page.pages(),
            last: page.last(),
            offset: page.offset(),
            from: page.from(),
            to: page.to(),
            in_page: page.in_page(),
            prev: page.prev(),
            next: page.next(),
            page_param: page.vars().page_param.clone(),
            series,
        }
    }

    /// Render as a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
