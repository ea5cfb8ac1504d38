//! Query parameters, sorting and pagination for order listings

use crate::config::PaginationConfig;
use crate::core::error::RequestError;
use crate::core::order::Order;
use chrono::NaiveDate;
use feruca::Collator;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Raw list query parameters
///
/// Every parameter is kept as text so that malformed numbers fall back to
/// their defaults instead of rejecting the request.
///
/// # Example
/// ```text
/// GET /orders?page=2&perPage=10&sortField=totalGross&sortOrder=desc
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<String>,
}

/// Order attribute a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    OrderNumber,
    Customer,
    Status,
    DueDate,
    TotalGross,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::OrderNumber,
        SortField::Customer,
        SortField::Status,
        SortField::DueDate,
        SortField::TotalGross,
    ];

    /// Query-string name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::OrderNumber => "orderNumber",
            SortField::Customer => "customer",
            SortField::Status => "status",
            SortField::DueDate => "dueDate",
            SortField::TotalGross => "totalGross",
        }
    }

    /// Ascending comparator for this field
    pub fn compare(&self, a: &Order, b: &Order) -> Ordering {
        self.compare_with(&mut Collator::default(), a, b)
    }

    /// Ascending comparator reusing an existing collator
    pub fn compare_with(&self, collator: &mut Collator, a: &Order, b: &Order) -> Ordering {
        match self {
            SortField::Id => locale_cmp(collator, &a.id, &b.id),
            SortField::OrderNumber => locale_cmp(collator, &a.order_number, &b.order_number),
            SortField::Customer => locale_cmp(collator, &a.customer, &b.customer),
            SortField::Status => locale_cmp(collator, a.status.as_str(), b.status.as_str()),
            SortField::DueDate => date_cmp(&a.due_date, &b.due_date),
            SortField::TotalGross => a.total_gross.total_cmp(&b.total_gross),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| RequestError::InvalidSortField {
                value: s.to_string(),
            })
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` means descending, anything else ascending
    pub fn parse_lenient(s: &str) -> Self {
        if s == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Apply this direction to an ascending comparison
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded list request, before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// Requested page, possibly out of range
    pub page: i64,
    /// Requested page size, possibly out of range
    pub per_page: i64,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl ListParams {
    /// Collect parameters from decoded query pairs
    ///
    /// Unknown keys are ignored; a repeated key keeps its first value.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "perPage" => &mut params.per_page,
                "sortField" => &mut params.sort_field,
                "sortOrder" => &mut params.sort_order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Apply defaults and decode the sort parameters
    ///
    /// Fails only for an unknown `sortField`.
    pub fn resolve(&self, limits: &PaginationConfig) -> Result<ListQuery, RequestError> {
        let sort_field = match self.sort_field.as_deref() {
            None | Some("") => SortField::DueDate,
            Some(s) => s.parse()?,
        };

        Ok(ListQuery {
            page: parse_int_or(self.page.as_deref(), 1),
            per_page: parse_int_or(self.per_page.as_deref(), limits.default_per_page as i64),
            sort_field,
            sort_order: self
                .sort_order
                .as_deref()
                .map(SortOrder::parse_lenient)
                .unwrap_or_default(),
        })
    }
}

fn parse_int_or(value: Option<&str>, default: i64) -> i64 {
    value.and_then(leading_int).unwrap_or(default)
}

/// Read the leading `[+-]?[0-9]+` of `s`, ignoring leading whitespace
///
/// Trailing text is dropped (`"10.0"` is 10, `"5abc"` is 5) and values beyond
/// the `i64` range saturate. `None` when no digit leads.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut seen = false;
    let mut n: i64 = 0;
    for digit in digits.bytes().map_while(|b| b.is_ascii_digit().then(|| i64::from(b - b'0'))) {
        seen = true;
        n = if negative {
            n.saturating_mul(10).saturating_sub(digit)
        } else {
            n.saturating_mul(10).saturating_add(digit)
        };
    }
    seen.then_some(n)
}

/// One page of a sorted listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    /// Current page number (starts at 1)
    pub page: usize,
    pub per_page: usize,
    /// Total number of items across all pages
    pub total: usize,
    /// Always at least 1, even for an empty collection
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> PagedResult<T> {
    /// Slice one page out of an already sorted collection
    ///
    /// `per_page` is clamped into `[1, max_per_page]` and `page` into
    /// `[1, total_pages]`.
    pub fn paginate(sorted: Vec<T>, page: i64, per_page: i64, max_per_page: usize) -> Self {
        let total = sorted.len();
        let per_page = per_page.clamp(1, max_per_page.max(1) as i64) as usize;
        let total_pages = total.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages as i64) as usize;

        let start = (page - 1) * per_page;
        let items = sorted.into_iter().skip(start).take(per_page).collect();

        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }
}

/// Stable sort of `orders` by `field` in `order`
pub fn sort_orders(orders: &mut [Order], field: SortField, order: SortOrder) {
    let mut collator = Collator::default();
    orders.sort_by(|a, b| order.apply(field.compare_with(&mut collator, a, b)));
}

/// Sort the full snapshot, then cut out the requested page
pub fn run_query(
    mut snapshot: Vec<Order>,
    query: &ListQuery,
    limits: &PaginationConfig,
) -> PagedResult<Order> {
    sort_orders(&mut snapshot, query.sort_field, query.sort_order);
    PagedResult::paginate(snapshot, query.page, query.per_page, limits.max_per_page)
}

/// Build an RFC 8288 `Link` header value for a page
///
/// `first` and `last` are always present, `prev` and `next` only when such a
/// page exists. Every target keeps the page size and sort of the current
/// request.
pub fn link_header<T>(base: &str, result: &PagedResult<T>, query: &ListQuery) -> String {
    let target = |page: usize| {
        format!(
            "{base}?page={page}&perPage={}&sortField={}&sortOrder={}",
            result.per_page, query.sort_field, query.sort_order
        )
    };

    let mut links = vec![
        format!("<{}>; rel=\"first\"", target(1)),
        format!("<{}>; rel=\"last\"", target(result.total_pages)),
    ];
    if result.has_prev {
        links.push(format!("<{}>; rel=\"prev\"", target(result.page - 1)));
    }
    if result.has_next {
        links.push(format!("<{}>; rel=\"next\"", target(result.page + 1)));
    }
    links.join(", ")
}

/// Unicode collation (CLDR root order), code points break remaining ties
fn locale_cmp(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}

/// Calendar comparison; unparseable dates sort after every real date
fn date_cmp(a: &str, b: &str) -> Ordering {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
