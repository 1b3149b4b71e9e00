//! 标签页请求编排
//!
//! 每个服务一个 [`Tab`]，启动时创建，永不销毁。一次请求分两步：
//!
//! ```text
//!   begin_query / begin_page          complete
//!   ────────────────────────►  API  ─────────────►
//!   重置标签页, loading=true           写入结果 / 错误 / 分页
//! ```
//!
//! 前端可以把 [`PendingRequest`] 交给后台任务执行，在响应到达时再调用
//! [`TabOrchestrator::complete`]；各标签页互不阻塞。同一标签页上被覆盖的请求
//! 仍会完成并写入状态，以最后到达的响应为准。

use std::sync::Arc;

use dfp_playground_api::{ApiError, QueryParams, QueryResponse};

use crate::catalog::all_services;
use crate::error::{CoreError, CoreResult};
use crate::services::pagination::continuation_links;
use crate::services::{NetworkContext, ServiceContext};
use crate::types::{QueryDefaults, Tab};

/// Hint appended to failures when no network is selected.
pub const NO_NETWORK_HINT: &str = "Did you forget to select a network?";
/// Hint appended to failures when a network is selected.
pub const INVALID_CLAUSE_HINT: &str = "Is your where statement valid?";

#[derive(Debug, Clone, PartialEq, Eq)]
enum RequestKind {
    /// A fresh query; its response defines the pagination plan.
    Query {
        route: &'static str,
        params: QueryParams,
    },
    /// Replay of a stored page URI.
    Page(usize),
}

/// A request whose tab has already been put into the loading state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    tab: usize,
    uri: String,
    kind: RequestKind,
}

impl PendingRequest {
    #[must_use]
    pub fn tab(&self) -> usize {
        self.tab
    }

    /// Server-relative URI to `GET`.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Page number for page replays, `None` for fresh queries.
    #[must_use]
    pub fn page(&self) -> Option<usize> {
        match self.kind {
            RequestKind::Page(n) => Some(n),
            RequestKind::Query { .. } => None,
        }
    }
}

/// User-facing message for a failed request.
///
/// HTTP failures read `HTTP <status> Error. <hint>`; transport failures put
/// the error's own text in front of the same hint.
#[must_use]
pub fn format_error(err: &ApiError, has_selection: bool) -> String {
    let hint = if has_selection {
        INVALID_CLAUSE_HINT
    } else {
        NO_NETWORK_HINT
    };
    format!("{err}. {hint}")
}

/// Owns every tab and runs their requests.
pub struct TabOrchestrator {
    ctx: Arc<ServiceContext>,
    tabs: Vec<Tab>,
    active: usize,
}

impl TabOrchestrator {
    /// One tab per catalog entry, in catalog order.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, defaults: QueryDefaults) -> Self {
        let tabs = all_services()
            .iter()
            .map(|descriptor| Tab::new(descriptor, defaults))
            .collect();
        Self {
            ctx,
            tabs,
            active: 0,
        }
    }

    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    #[must_use]
    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    fn tab_mut(&mut self, index: usize) -> CoreResult<&mut Tab> {
        self.tabs.get_mut(index).ok_or(CoreError::TabNotFound(index))
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_tab(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn select_tab(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.tabs.len() {
            return Err(CoreError::TabNotFound(index));
        }
        self.active = index;
        Ok(())
    }

    #[must_use]
    pub fn network(&self) -> &NetworkContext {
        &self.ctx.network
    }

    /// Switch a dual-route tab to `route`.
    ///
    /// Returns whether the route changed. A change installs the route's
    /// filter clause; selecting the current route leaves the clause alone.
    pub fn select_route(&mut self, index: usize, route: &str) -> CoreResult<bool> {
        let tab = self.tab_mut(index)?;
        let routes = tab.descriptor.routes;
        let Some(new_route) = routes.routes().into_iter().find(|r| *r == route) else {
            return Err(CoreError::RouteNotFound {
                tab: tab.title.to_string(),
                route: route.to_string(),
            });
        };
        if tab.route == new_route {
            return Ok(false);
        }

        tab.route = new_route;
        if let Some(clause) = routes.clause_for_route(new_route) {
            tab.filter_clause = clause.to_string();
        }
        log::debug!("Tab '{}' switched to route '{new_route}'", tab.title);
        Ok(true)
    }

    /// Start a fresh query on a tab.
    ///
    /// Stores the form values, drops the previous pagination plan and
    /// result, and marks the tab loading. The request is scoped to the
    /// network selected right now.
    pub fn begin_query(
        &mut self,
        index: usize,
        filter_clause: &str,
        limit: u32,
        offset: u32,
    ) -> CoreResult<PendingRequest> {
        let network_code = self.ctx.network.selected_code();
        let tab = self.tab_mut(index)?;
        tab.filter_clause = filter_clause.to_string();
        tab.limit = limit;
        tab.offset = offset;

        let params = QueryParams::new(filter_clause, limit, offset, network_code);
        let uri = params.uri(tab.route);

        tab.reset_pages();
        tab.reset_outcome();
        tab.loading = true;

        log::info!("Query on '{}': {}", tab.title, uri);
        Ok(PendingRequest {
            tab: index,
            uri,
            kind: RequestKind::Query {
                route: tab.route,
                params,
            },
        })
    }

    /// Start loading page `page` (1-based) of a tab's current plan.
    ///
    /// Returns `None` without touching state when the tab is unknown, is
    /// already loading, is already on that page, or the page is outside
    /// the plan.
    pub fn begin_page(&mut self, index: usize, page: usize) -> Option<PendingRequest> {
        let tab = self.tabs.get_mut(index)?;
        if tab.current_page == page || tab.loading {
            return None;
        }
        let uri = tab.pages.get(page.checked_sub(1)?)?.clone();

        tab.current_page = page;
        tab.reset_outcome();
        tab.loading = true;

        log::info!("Page {page} on '{}': {}", tab.title, uri);
        Some(PendingRequest {
            tab: index,
            uri,
            kind: RequestKind::Page(page),
        })
    }

    /// Apply the outcome of a request started by `begin_*`.
    pub fn complete(&mut self, pending: PendingRequest, outcome: Result<QueryResponse, ApiError>) {
        let has_selection = self.ctx.network.has_selection();
        let Some(tab) = self.tabs.get_mut(pending.tab) else {
            log::warn!("Dropping response for unknown tab {}", pending.tab);
            return;
        };
        tab.loading = false;

        match outcome {
            Ok(response) => {
                if let RequestKind::Query { route, params } = &pending.kind {
                    tab.pages =
                        continuation_links(route, params, response.total_result_set_size);
                }
                tab.error_message.clear();
                tab.empty = response.results.is_empty();
                tab.results = response.results;
                tab.columns = response.columns;
                log::debug!(
                    "'{}' received {} row(s), {} page(s)",
                    tab.title,
                    tab.results.len(),
                    tab.pages.len()
                );
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Request for '{}' failed: {e}", tab.title);
                } else {
                    log::error!("Request for '{}' failed: {e}", tab.title);
                }
                tab.error_message = format_error(&e, has_selection);
            }
        }
    }

    /// Run a fresh query to completion.
    pub async fn submit_query(
        &mut self,
        index: usize,
        filter_clause: &str,
        limit: u32,
        offset: u32,
    ) -> CoreResult<()> {
        let pending = self.begin_query(index, filter_clause, limit, offset)?;
        let outcome = self.ctx.api.query(pending.uri()).await;
        self.complete(pending, outcome);
        Ok(())
    }

    /// Load a page to completion. Returns `false` when nothing was requested.
    pub async fn navigate_to_page(&mut self, index: usize, page: usize) -> bool {
        let Some(pending) = self.begin_page(index, page) else {
            return false;
        };
        let outcome = self.ctx.api.query(pending.uri()).await;
        self.complete(pending, outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::DEFAULT_FILTER_CLAUSE;
    use crate::test_utils::{query_response, MockPlaygroundApi};

    const LINE_ITEMS: usize = 5;
    const CUSTOM_TARGETING: usize = 4;
    const PQL: usize = 9;

    async fn setup(networks: &[&str]) -> (Arc<MockPlaygroundApi>, TabOrchestrator) {
        let api = Arc::new(MockPlaygroundApi::with_networks(networks));
        let network = NetworkContext::new();
        network.load_networks(api.as_ref()).await.unwrap();
        let ctx = Arc::new(ServiceContext::new(api.clone(), network));
        (api, TabOrchestrator::new(ctx, QueryDefaults::default()))
    }

    #[tokio::test]
    async fn one_tab_per_service() {
        let (_, orch) = setup(&["1"]).await;
        assert_eq!(orch.tabs().len(), all_services().len());
        assert_eq!(orch.tab(LINE_ITEMS).unwrap().route, "lineitems");
        assert_eq!(orch.tab(PQL).unwrap().filter_clause, "SELECT Id, BrowserName from Browser");
        assert_eq!(orch.active_index(), 0);
    }

    #[tokio::test]
    async fn submit_query_builds_uri_and_plan() {
        let (api, mut orch) = setup(&["1234"]).await;
        api.push_query(Ok(query_response(
            vec![json!({"id": 1, "name": "a"})],
            Some(250),
        )))
        .await;

        orch.submit_query(LINE_ITEMS, "WHERE id != 0", 100, 0).await.unwrap();

        let expected = QueryParams::new("WHERE id != 0", 100, 0, "1234").uri("lineitems");
        assert_eq!(api.query_uris().await, vec![expected.clone()]);

        let tab = orch.tab(LINE_ITEMS).unwrap();
        assert!(!tab.loading);
        assert!(!tab.has_error());
        assert!(!tab.empty);
        assert_eq!(tab.results.len(), 1);
        assert_eq!(tab.pages.len(), 4);
        assert_eq!(tab.pages[0], expected);
        assert_eq!(tab.current_page, 1);
    }

    #[tokio::test]
    async fn zero_total_marks_empty_without_pages() {
        let (api, mut orch) = setup(&["1"]).await;
        api.push_query(Ok(query_response(vec![], Some(0)))).await;

        orch.submit_query(LINE_ITEMS, "WHERE id = -1", 100, 0).await.unwrap();

        let tab = orch.tab(LINE_ITEMS).unwrap();
        assert!(tab.empty);
        assert!(tab.pages.is_empty());
    }

    #[tokio::test]
    async fn begin_query_resets_previous_outcome() {
        let (api, mut orch) = setup(&["1"]).await;
        api.push_query(Ok(query_response(vec![json!({"id": 1})], Some(100))))
            .await;
        orch.submit_query(LINE_ITEMS, "WHERE id != 0", 100, 0).await.unwrap();
        orch.navigate_to_page(LINE_ITEMS, 3).await;
        assert_eq!(orch.tab(LINE_ITEMS).unwrap().current_page, 3);

        let pending = orch.begin_query(LINE_ITEMS, "WHERE id > 5", 50, 10).unwrap();

        let tab = orch.tab(LINE_ITEMS).unwrap();
        assert!(tab.loading);
        assert!(tab.results.is_empty());
        assert!(tab.pages.is_empty());
        assert_eq!(tab.current_page, 1);
        assert_eq!(tab.filter_clause, "WHERE id > 5");
        assert_eq!((tab.limit, tab.offset), (50, 10));
        assert_eq!(pending.page(), None);
    }

    #[tokio::test]
    async fn pql_keeps_columns() {
        let (api, mut orch) = setup(&["1"]).await;
        let mut response = query_response(vec![json!({"Id": 1, "BrowserName": "Opera"})], None);
        response.columns = Some(vec!["Id".into(), "BrowserName".into()]);
        api.push_query(Ok(response)).await;

        orch.submit_query(PQL, "SELECT Id, BrowserName from Browser", 100, 0)
            .await
            .unwrap();

        let tab = orch.tab(PQL).unwrap();
        assert_eq!(tab.columns.as_deref().unwrap(), ["Id", "BrowserName"]);
        // unknown total keeps the requested limit
        assert_eq!(tab.pages.len(), 4);
    }

    #[tokio::test]
    async fn failure_without_network_suggests_selecting_one() {
        let (api, mut orch) = setup(&[]).await;
        api.push_query(Err(ApiError::http(500))).await;

        orch.submit_query(LINE_ITEMS, "WHERE id != 0", 100, 0).await.unwrap();

        let tab = orch.tab(LINE_ITEMS).unwrap();
        assert!(!tab.loading);
        assert_eq!(
            tab.error_message,
            "HTTP 500 Error. Did you forget to select a network?"
        );
    }

    #[tokio::test]
    async fn failure_with_network_questions_clause() {
        let (api, mut orch) = setup(&["1"]).await;
        api.push_query(Err(ApiError::http(400))).await;

        orch.submit_query(LINE_ITEMS, "WHERE nope", 100, 0).await.unwrap();

        assert_eq!(
            orch.tab(LINE_ITEMS).unwrap().error_message,
            "HTTP 400 Error. Is your where statement valid?"
        );
    }

    #[tokio::test]
    async fn hint_uses_selection_at_completion() {
        let (_, mut orch) = setup(&["1"]).await;
        let pending = orch.begin_query(LINE_ITEMS, "WHERE id != 0", 10, 0).unwrap();
        orch.network().select("");

        orch.complete(pending, Err(ApiError::http(404)));

        assert!(orch
            .tab(LINE_ITEMS)
            .unwrap()
            .error_message
            .ends_with(NO_NETWORK_HINT));
    }

    #[test]
    fn transport_errors_keep_hint() {
        let err = ApiError::Timeout {
            detail: "after 10s".into(),
        };
        assert_eq!(
            format_error(&err, true),
            "Request timeout: after 10s. Is your where statement valid?"
        );
    }

    #[tokio::test]
    async fn navigate_replays_stored_uri_and_keeps_plan() {
        let (api, mut orch) = setup(&["1"]).await;
        api.push_query(Ok(query_response(vec![json!({"id": 1})], Some(250))))
            .await;
        orch.submit_query(LINE_ITEMS, "WHERE id != 0", 100, 0).await.unwrap();
        let plan = orch.tab(LINE_ITEMS).unwrap().pages.clone();

        // the page response reports a different total; the plan must not change
        api.push_query(Ok(query_response(vec![json!({"id": 26})], Some(3))))
            .await;
        assert!(orch.navigate_to_page(LINE_ITEMS, 2).await);

        let uris = api.query_uris().await;
        assert_eq!(uris.last(), Some(&plan[1]));
        let tab = orch.tab(LINE_ITEMS).unwrap();
        assert_eq!(tab.pages, plan);
        assert_eq!(tab.current_page, 2);
        assert_eq!(tab.results[0]["id"], 26);
    }

    #[tokio::test]
    async fn navigate_out_of_range_is_noop() {
        let (api, mut orch) = setup(&["1"]).await;
        api.push_query(Ok(query_response(vec![json!({"id": 1})], Some(250))))
            .await;
        orch.submit_query(LINE_ITEMS, "WHERE id != 0", 100, 0).await.unwrap();
        let before = orch.tab(LINE_ITEMS).unwrap().clone();

        assert!(!orch.navigate_to_page(LINE_ITEMS, 0).await);
        assert!(!orch.navigate_to_page(LINE_ITEMS, 5).await);
        assert!(!orch.navigate_to_page(LINE_ITEMS, 1).await);

        assert_eq!(api.query_uris().await.len(), 1);
        let after = orch.tab(LINE_ITEMS).unwrap();
        assert_eq!(after.current_page, before.current_page);
        assert_eq!(after.results, before.results);
    }

    #[tokio::test]
    async fn navigate_while_loading_is_noop() {
        let (api, mut orch) = setup(&["1"]).await;
        api.push_query(Ok(query_response(vec![json!({"id": 1})], Some(250))))
            .await;
        orch.submit_query(LINE_ITEMS, "WHERE id != 0", 100, 0).await.unwrap();

        let first = orch.begin_page(LINE_ITEMS, 2).unwrap();
        assert_eq!(first.page(), Some(2));
        assert!(orch.begin_page(LINE_ITEMS, 3).is_none());

        // other tabs are unaffected
        assert!(orch.begin_query(PQL, "SELECT Id from Browser", 10, 0).is_ok());
    }

    #[tokio::test]
    async fn late_response_overwrites_newer_one() {
        let (_, mut orch) = setup(&["1"]).await;
        let older = orch.begin_query(LINE_ITEMS, "WHERE id != 0", 100, 0).unwrap();
        let newer = orch.begin_query(LINE_ITEMS, "WHERE id > 9", 100, 0).unwrap();

        orch.complete(newer, Ok(query_response(vec![json!({"id": 10})], Some(1))));
        orch.complete(older, Ok(query_response(vec![json!({"id": 1})], Some(1))));

        assert_eq!(orch.tab(LINE_ITEMS).unwrap().results[0]["id"], 1);
    }

    #[tokio::test]
    async fn dual_route_switches_clause() {
        let (_, mut orch) = setup(&["1"]).await;
        assert_eq!(
            orch.tab(CUSTOM_TARGETING).unwrap().route,
            "customtargetingkeys"
        );

        let pending = orch
            .begin_query(CUSTOM_TARGETING, "WHERE name = 'x'", 100, 0)
            .unwrap();
        orch.complete(pending, Ok(query_response(vec![], Some(0))));
        assert!(!orch.select_route(CUSTOM_TARGETING, "customtargetingkeys").unwrap());
        assert_eq!(orch.tab(CUSTOM_TARGETING).unwrap().filter_clause, "WHERE name = 'x'");

        assert!(orch.select_route(CUSTOM_TARGETING, "customtargetingvalues").unwrap());
        assert_eq!(
            orch.tab(CUSTOM_TARGETING).unwrap().filter_clause,
            "WHERE customTargetingKeyId != 0"
        );

        assert!(orch.select_route(CUSTOM_TARGETING, "customtargetingkeys").unwrap());
        assert_eq!(
            orch.tab(CUSTOM_TARGETING).unwrap().filter_clause,
            DEFAULT_FILTER_CLAUSE
        );
    }

    #[tokio::test]
    async fn unknown_route_and_tab_are_errors() {
        let (_, mut orch) = setup(&["1"]).await;
        assert!(matches!(
            orch.select_route(LINE_ITEMS, "orders"),
            Err(CoreError::RouteNotFound { .. })
        ));
        assert!(matches!(orch.select_tab(99), Err(CoreError::TabNotFound(99))));
        assert!(matches!(
            orch.begin_query(99, "x", 1, 0),
            Err(CoreError::TabNotFound(99))
        ));
        assert!(orch.begin_page(99, 1).is_none());
    }

    #[tokio::test]
    async fn values_route_is_queried_after_switch() {
        let (api, mut orch) = setup(&["7"]).await;
        orch.select_route(CUSTOM_TARGETING, "customtargetingvalues").unwrap();
        let clause = orch.tab(CUSTOM_TARGETING).unwrap().filter_clause.clone();

        orch.submit_query(CUSTOM_TARGETING, &clause, 25, 0).await.unwrap();

        let uris = api.query_uris().await;
        assert!(uris[0].starts_with("/api/customtargetingvalues?"));
    }
}
