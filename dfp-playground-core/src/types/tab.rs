//! 标签页状态

use dfp_playground_api::Row;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::ServiceDescriptor;

/// Limit and offset a new tab starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryDefaults {
    pub limit: u32,
    pub offset: u32,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
        }
    }
}

/// One service tab: the query form plus the outcome of its latest request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub title: &'static str,
    #[serde(skip)]
    pub descriptor: &'static ServiceDescriptor,
    /// Active route; only changes on dual-route services.
    pub route: &'static str,
    pub doc_link: String,

    // query form
    pub filter_clause: String,
    pub limit: u32,
    pub offset: u32,

    // latest request
    pub loading: bool,
    /// Empty when the latest request did not fail.
    pub error_message: String,
    pub results: Vec<Row>,
    /// Column labels, present only for schema-less services.
    pub columns: Option<Vec<String>>,
    /// The latest request succeeded with zero rows.
    pub empty: bool,

    // pagination
    /// Request URI of every page; index 0 is page 1.
    pub pages: Vec<String>,
    /// 1-based.
    pub current_page: usize,
}

impl Tab {
    pub fn new(descriptor: &'static ServiceDescriptor, defaults: QueryDefaults) -> Self {
        Self {
            title: descriptor.name,
            descriptor,
            route: descriptor.routes.initial_route(),
            doc_link: descriptor.doc_link(),
            filter_clause: descriptor.initial_clause().to_string(),
            limit: defaults.limit,
            offset: defaults.offset,
            loading: false,
            error_message: String::new(),
            results: Vec::new(),
            columns: None,
            empty: false,
            pages: Vec::new(),
            current_page: 1,
        }
    }

    /// Clear the outcome of the previous request.
    pub(crate) fn reset_outcome(&mut self) {
        self.loading = false;
        self.error_message.clear();
        self.results.clear();
        self.columns = None;
        self.empty = false;
    }

    pub(crate) fn reset_pages(&mut self) {
        self.pages.clear();
        self.current_page = 1;
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Label for `row` in the result list: the descriptor's display
    /// attribute rendered as text. `None` when the service has no display
    /// attribute or the row lacks it.
    #[must_use]
    pub fn display_value(&self, row: &Row) -> Option<String> {
        let attr = self.descriptor.display_attribute?;
        row.get(attr).map(value_text)
    }

    /// Cell text for every column of a schema-less row, in column order.
    #[must_use]
    pub fn column_values(&self, row: &Row) -> Vec<String> {
        self.columns
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|col| row.get(col).map(value_text).unwrap_or_default())
            .collect()
    }
}

/// Plain text for a JSON value: strings unquoted, `null` empty.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
