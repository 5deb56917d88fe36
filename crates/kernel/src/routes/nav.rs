//! Navigation API routes.
//!
//! REST endpoints consumed by the dashboard shell: the sidebar asks for the
//! visible menu and open keys, the header for breadcrumbs, and the route
//! guard for access verdicts before rendering a protected page.

use axum::{
    Extension, Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::nav::{Breadcrumb, ClientSelection, MenuEntry, open_keys_for_path, resolve_icon};
use crate::state::AppState;

/// Create the navigation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/nav/menu", get(get_menu))
        .route("/api/nav/breadcrumbs", get(get_breadcrumbs))
        .route("/api/nav/access", get(check_access))
        .route("/api/nav/guard", get(guard))
        .route("/api/nav/open-keys", get(get_open_keys))
}

// -------------------------------------------------------------------------
// Request/response types
// -------------------------------------------------------------------------

#[derive(Deserialize)]
struct PathQuery {
    path: Option<String>,
}

impl PathQuery {
    /// The `path` parameter, or a 400 when the caller omitted it.
    fn require(self) -> AppResult<String> {
        self.path
            .ok_or_else(|| AppError::BadRequest("missing `path` query parameter".to_string()))
    }
}

/// One sidebar item, with the icon name resolved to a glyph class.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuItem {
    key: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    is_divider: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<MenuItem>>,
}

impl MenuItem {
    fn from_entry(entry: &MenuEntry) -> Self {
        Self {
            key: entry.key.clone(),
            label: entry.label.clone(),
            path: entry.path.clone(),
            icon: entry.icon.as_deref().map(resolve_icon),
            is_divider: entry.is_divider,
            children: entry
                .children
                .as_ref()
                .map(|children| children.iter().map(Self::from_entry).collect()),
        }
    }
}

/// Guard verdict for a path under the request's client scope.
#[derive(Serialize)]
struct AccessResponse {
    path: String,
    client: String,
    allowed: bool,
}

// -------------------------------------------------------------------------
// Handlers
// -------------------------------------------------------------------------

async fn get_menu(
    State(state): State<AppState>,
    Extension(selection): Extension<ClientSelection>,
) -> Json<Vec<MenuItem>> {
    let entries = state.nav().menu_for(&selection);
    Json(entries.iter().map(MenuItem::from_entry).collect())
}

async fn get_breadcrumbs(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> AppResult<Json<Vec<Breadcrumb>>> {
    let path = query.require()?;
    Ok(Json(state.nav().breadcrumbs(&path)))
}

async fn check_access(
    State(state): State<AppState>,
    Extension(selection): Extension<ClientSelection>,
    Query(query): Query<PathQuery>,
) -> AppResult<Json<AccessResponse>> {
    let path = query.require()?;
    let allowed = state.nav().is_allowed(&path, &selection);
    Ok(Json(AccessResponse {
        path,
        client: selection.to_string(),
        allowed,
    }))
}

/// Route-guard endpoint: 204 when navigation is permitted, 403 otherwise.
///
/// The caller renders its own "not authorized for this client" view; this
/// kernel has no role in message formatting.
async fn guard(
    State(state): State<AppState>,
    Extension(selection): Extension<ClientSelection>,
    Query(query): Query<PathQuery>,
) -> AppResult<StatusCode> {
    let path = query.require()?;
    if state.nav().is_allowed(&path, &selection) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Forbidden)
    }
}

async fn get_open_keys(Query(query): Query<PathQuery>) -> AppResult<Json<Vec<String>>> {
    let path = query.require()?;
    Ok(Json(open_keys_for_path(&path)))
}
