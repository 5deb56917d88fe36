//! Client-scope resolution middleware.
//!
//! Resolves the client selection for each request and stores it in request
//! extensions. Resolution order: `client` query parameter → `X-Client-Scope`
//! header → all-clients default. The front-end persists the active selection
//! in local storage and replays it on every request; this kernel never
//! stores it.

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::nav::ClientSelection;

/// Header carrying the active client selection.
pub const CLIENT_SCOPE_HEADER: &str = "x-client-scope";

/// Middleware resolving the request's [`ClientSelection`] into extensions.
pub async fn resolve_client_scope(mut request: Request<Body>, next: Next) -> Response {
    let selection = selection_from_request(&request);
    tracing::debug!(
        client = %selection,
        path = %request.uri().path(),
        "resolved client scope"
    );
    request.extensions_mut().insert(selection);
    next.run(request).await
}

/// Resolve the client selection from query parameter or header.
fn selection_from_request(request: &Request<Body>) -> ClientSelection {
    if let Some(query) = request.uri().query()
        && let Some(value) = query_param(query, "client")
    {
        return ClientSelection::from_param(Some(value));
    }

    let header = request
        .headers()
        .get(CLIENT_SCOPE_HEADER)
        .and_then(|v| v.to_str().ok());
    ClientSelection::from_param(header)
}

/// Extract a raw query parameter value by name.
///
/// Client tokens are plain alphanumeric codes, so no percent-decoding is
/// applied.
fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}
