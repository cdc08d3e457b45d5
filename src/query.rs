//! Listing, search, sort, and pagination over one snapshot
//!
//! Every operation here takes a `&Snapshot` and mutates nothing; missing
//! fields and empty results are ordinary outcomes, never errors.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::Record;
use crate::store::Snapshot;

const DEFAULT_PER_PAGE: usize = 50;
const MAX_PER_PAGE: usize = 1000;

/// Listing parameters, all optional.
///
/// `serial` (exact, case-insensitive) wins over `query` (substring against
/// canonical name or serial); with neither the full set is listed.
#[derive(Clone, Debug, Default)]
pub struct ListQuery {
    pub query: Option<String>,
    pub serial: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

/// One page of results plus pagination bookkeeping
#[derive(Debug, Serialize)]
pub struct ListPage {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub data: Vec<Record>,
}

/// Run the filter, sort, paginate pipeline against one snapshot.
pub fn list(snapshot: &Snapshot, query: &ListQuery) -> ListPage {
    let mut working = filter_records(snapshot, query);

    if let Some(sort_by) = query.sort_by.as_deref().filter(|s| !s.is_empty()) {
        let descending = query.sort_order.as_deref() == Some("desc");
        let mut keyed: Vec<(SortKey, &Record)> = working
            .into_iter()
            .map(|record| (sort_key(record, sort_by), record))
            .collect();
        // Stable sort: ties keep their source order under asc and desc.
        keyed.sort_by(|a, b| {
            let ord = a.0.compare(&b.0);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });
        working = keyed.into_iter().map(|(_, record)| record).collect();
    }

    let total = working.len();
    let per_page = per_page(query.limit);
    let page = page_number(query.page);
    let start = (page - 1).saturating_mul(per_page).min(total);
    let end = start.saturating_add(per_page).min(total);

    ListPage {
        total,
        page,
        per_page,
        total_pages: total.div_ceil(per_page),
        data: working[start..end].iter().map(|r| (*r).clone()).collect(),
    }
}

fn filter_records<'a>(snapshot: &'a Snapshot, query: &ListQuery) -> Vec<&'a Record> {
    if let Some(serial) = query.serial.as_deref().filter(|s| !s.is_empty()) {
        // Unmatched serial is an empty working set, not an error.
        return snapshot.get(serial).into_iter().collect();
    }
    if let Some(needle) = query.query.as_deref().filter(|s| !s.is_empty()) {
        let needle = needle.to_lowercase();
        return snapshot
            .records()
            .iter()
            .filter(|record| {
                matches_needle(record.name(), &needle)
                    || matches_needle(record.serial(), &needle)
            })
            .collect();
    }
    snapshot.records().iter().collect()
}

fn matches_needle(value: Option<&str>, needle: &str) -> bool {
    value.map_or(false, |v| v.to_lowercase().contains(needle))
}

/// Precomputed comparison key for one record on one field.
///
/// Empty and absent values sort first, numeric values next in numeric
/// order, text last as lowercased strings. The class ranking keeps the
/// comparison a total order even when numbers and text share a column.
enum SortKey {
    Empty,
    Number(f64),
    Text(String),
}

impl SortKey {
    fn compare(&self, other: &Self) -> Ordering {
        use SortKey::*;
        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Empty, _) => Ordering::Less,
            (_, Empty) => Ordering::Greater,
            (Number(x), Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
            (Number(_), Text(_)) => Ordering::Less,
            (Text(_), Number(_)) => Ordering::Greater,
            (Text(x), Text(y)) => x.cmp(y),
        }
    }
}

fn sort_key(record: &Record, field: &str) -> SortKey {
    match record.field(field) {
        None => SortKey::Empty,
        Some(value) => match value.as_number() {
            Some(n) => SortKey::Number(n),
            None => {
                let text = value.to_string().to_lowercase();
                if text.is_empty() {
                    SortKey::Empty
                } else {
                    SortKey::Text(text)
                }
            }
        },
    }
}

fn per_page(limit: Option<i64>) -> usize {
    match limit {
        Some(n) => n.clamp(1, MAX_PER_PAGE as i64) as usize,
        None => DEFAULT_PER_PAGE,
    }
}

fn page_number(page: Option<i64>) -> usize {
    page.unwrap_or(1).max(1) as usize
}
