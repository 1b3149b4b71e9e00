//! 后台结果处理

use dfp_playground_core::services::LoadOutcome;

use crate::message::BackendMessage;
use crate::model::App;

/// 处理后台任务回传的消息
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::NetworksLoaded(outcome) => {
            app.networks_loading = false;
            match outcome {
                Ok(LoadOutcome::AlreadyLoaded) => app.clear_status(),
                Ok(LoadOutcome::Loaded(_)) => report_networks(app),
                Err(e) => app.set_status(format!("Failed to load networks: {e}")),
            }
        }

        BackendMessage::TestNetworkCreated(outcome) => {
            app.networks_loading = false;
            match outcome {
                Ok(_) => report_networks(app),
                Err(e) => {
                    app.clear_status();
                    app.modal.show_error("Test network", &e);
                }
            }
        }

        BackendMessage::QueryCompleted { pending, outcome } => {
            let index = pending.tab();
            app.orchestrator.complete(pending, outcome);
            app.results.reset(index);
        }
    }
}

fn report_networks(app: &mut App) {
    let status = match app.network().selected_network() {
        Some(network) => format!("Network: {}", network.label()),
        None => "No networks available. Alt+t creates a test network".to_string(),
    };
    app.set_status(status);
}

#[cfg(test)]
mod tests {
    use dfp_playground_api::{ApiError, QueryResponse};
    use dfp_playground_core::catalog::DEFAULT_FILTER_CLAUSE;
    use dfp_playground_core::services::INVALID_CLAUSE_HINT;

    use super::*;
    use crate::model::Modal;
    use crate::test_utils::test_app;

    #[test]
    fn networks_loaded_reports_selection() {
        let (_rt, mut app) = test_app(&["42"]);
        app.networks_loading = true;
        update(&mut app, BackendMessage::NetworksLoaded(Ok(LoadOutcome::Loaded(1))));
        assert!(!app.networks_loading);
        assert_eq!(app.status_message.as_deref(), Some("Network: 42"));
    }

    #[test]
    fn networks_failure_is_reported() {
        let (_rt, mut app) = test_app(&[]);
        app.networks_loading = true;
        update(
            &mut app,
            BackendMessage::NetworksLoaded(Err("HTTP 500 Error".to_string())),
        );
        assert!(!app.networks_loading);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Failed to load networks: HTTP 500 Error")
        );
    }

    #[test]
    fn test_network_failure_opens_error() {
        let (_rt, mut app) = test_app(&[]);
        update(
            &mut app,
            BackendMessage::TestNetworkCreated(Err("HTTP 403 Error".to_string())),
        );
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
    }

    #[test]
    fn query_completion_fills_tab() {
        let (_rt, mut app) = test_app(&["1"]);
        let pending = app
            .orchestrator
            .begin_query(0, DEFAULT_FILTER_CLAUSE, 100, 0)
            .unwrap();
        app.results.select_next(0, 5);

        let outcome = Err(ApiError::http(400));
        update(&mut app, BackendMessage::QueryCompleted { pending, outcome });

        let tab = app.active_tab();
        assert!(!tab.loading);
        assert_eq!(tab.error_message, format!("HTTP 400 Error. {INVALID_CLAUSE_HINT}"));
        assert_eq!(app.results.selected(0), 0);

        let pending = app
            .orchestrator
            .begin_query(0, DEFAULT_FILTER_CLAUSE, 100, 0)
            .unwrap();
        let outcome = Ok(QueryResponse::default());
        update(&mut app, BackendMessage::QueryCompleted { pending, outcome });
        assert!(app.active_tab().empty);
        assert!(!app.active_tab().has_error());
    }
}
