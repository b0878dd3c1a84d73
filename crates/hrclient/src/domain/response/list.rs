use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PageEnvelope<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// List endpoints answer with either a bare array or a page envelope.
/// Both shapes normalize to the same collection for callers.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated(PageEnvelope<T>),
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_results(self) -> Vec<T> {
        match self {
            ListResponse::Paginated(page) => page.results,
            ListResponse::Plain(items) => items,
        }
    }

    pub fn total_count(&self) -> u64 {
        match self {
            ListResponse::Paginated(page) => page.count,
            ListResponse::Plain(items) => items.len() as u64,
        }
    }
}
