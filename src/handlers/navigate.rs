use crate::core::state::AppState;
use crate::guard::{GuardDecision, NavigationGuard};
use crate::session::http::HttpSession;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{AppendHeaders, IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;

/// Decision header set on every gateway response, for proxy debugging.
pub const DECISION_HEADER: &str = "x-guard-decision";

/// Navigation handler
///
/// Registered as the router fallback: every path that is not a gateway
/// endpoint is treated as a navigation attempt by the SPA. The reverse
/// proxy forwards the request here, lets 204 responses through to the
/// app, and surfaces 302 responses to the browser.
pub async fn navigate_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let target = state.routes.target_for(uri.path(), uri.query());

    let provider = HttpSession::new(
        Arc::clone(&state.session_client),
        Arc::clone(&state.sessions),
        cookie,
    );
    let guard = NavigationGuard::with_paths(provider, state.guard_paths.clone());

    let decision = guard.before_each(&target).await;

    info!(
        path = %target.path,
        required = %target.access,
        decision = decision_name(&decision),
        "Navigation decided"
    );

    match decision {
        GuardDecision::Proceed => (
            StatusCode::NO_CONTENT,
            AppendHeaders([(DECISION_HEADER, "proceed".to_string())]),
        )
            .into_response(),
        GuardDecision::RedirectLogin { location } => redirect(location, "login"),
        GuardDecision::RedirectNoAuth { location } => redirect(location, "no-auth"),
    }
}

fn redirect(location: String, decision: &'static str) -> Response {
    (
        StatusCode::FOUND,
        AppendHeaders([
            ("location", location),
            (DECISION_HEADER, decision.to_string()),
        ]),
    )
        .into_response()
}

fn decision_name(decision: &GuardDecision) -> &'static str {
    match decision {
        GuardDecision::Proceed => "proceed",
        GuardDecision::RedirectLogin { .. } => "login",
        GuardDecision::RedirectNoAuth { .. } => "no-auth",
    }
}
