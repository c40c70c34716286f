//! HTTP request handlers for the rule management API.
//!
//! Handlers drive the core workflows: listing and lookup go straight to
//! the repository, creation runs the wizard end to end, and updates run
//! the detail editor's draft/commit cycle.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::Category;
use crate::store::{CategoryFilter, RuleFilter, UseFilter};

use super::request::RulePayload;
use super::response::{ApiError, ApiErrorResponse, RuleListResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rules", get(list_rules).post(create_rule))
        .route("/rules/:id", get(get_rule).put(update_rule))
        .with_state(state)
}

/// Query parameters recognized by `GET /rules`.
#[derive(Debug, Deserialize)]
struct ListParams {
    /// Category key or "all".
    category: Option<String>,
    /// "active", "inactive" or "all".
    #[serde(rename = "use")]
    use_flag: Option<String>,
    /// Free-text query against name and description.
    q: Option<String>,
}

/// Maps the raw query parameters onto a repository filter.
fn parse_filter(params: &ListParams) -> Result<RuleFilter, ApiErrorResponse> {
    let category = match params.category.as_deref() {
        None | Some("all") | Some("") => CategoryFilter::All,
        Some(key) => match Category::from_key(key) {
            Some(category) => CategoryFilter::Tagged(category),
            None => {
                return Err(ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::validation_error(format!(
                        "Unknown category filter: {}",
                        key
                    )),
                });
            }
        },
    };

    let use_flag = match params.use_flag.as_deref() {
        None | Some("all") | Some("") => UseFilter::All,
        Some("active") => UseFilter::Active,
        Some("inactive") => UseFilter::Inactive,
        Some(other) => {
            return Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(format!("Unknown use filter: {}", other)),
            });
        }
    };

    Ok(RuleFilter {
        category,
        use_flag,
        query: params.q.clone().unwrap_or_default(),
    })
}

/// Handler for `GET /rules`.
async fn list_rules(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let filter = match parse_filter(&params) {
        Ok(filter) => filter,
        Err(error) => {
            warn!(correlation_id = %correlation_id, "Rejected listing filter");
            return error.into_response();
        }
    };

    let workspace = state.workspace();
    let rules: Vec<_> = workspace
        .store()
        .list(&filter)
        .into_iter()
        .cloned()
        .collect();

    info!(
        correlation_id = %correlation_id,
        total = rules.len(),
        "Listed rules"
    );
    let total = rules.len();
    Json(RuleListResponse { rules, total }).into_response()
}

/// Handler for `GET /rules/{id}`.
async fn get_rule(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let workspace = state.workspace();

    match workspace.store().get(&id) {
        Ok(rule) => Json(rule.clone()).into_response(),
        Err(error) => {
            warn!(correlation_id = %correlation_id, id = %id, "Rule lookup failed");
            ApiErrorResponse::from(error).into_response()
        }
    }
}

/// Handler for `POST /rules`.
///
/// Runs the wizard over the payload: blank draft at the allocator's next
/// id, payload applied, gated advance, completion. A blank name refuses
/// with 422 and leaves the repository untouched.
async fn create_rule(
    State(state): State<AppState>,
    payload: Result<Json<RulePayload>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let payload = match parse_payload(payload, correlation_id) {
        Ok(payload) => payload,
        Err(error) => return error.into_response(),
    };

    let mut workspace = state.workspace();
    match workspace.create_rule(|draft| payload.apply_to(draft)) {
        Ok(Some(rule)) => {
            info!(correlation_id = %correlation_id, id = %rule.id, "Created rule");
            (StatusCode::CREATED, Json(rule)).into_response()
        }
        Ok(None) => {
            warn!(correlation_id = %correlation_id, "Creation gated on empty name");
            ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::validation_error("Rule name must not be empty"),
            }
            .into_response()
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Creation failed");
            ApiErrorResponse::from(error).into_response()
        }
    }
}

/// Handler for `PUT /rules/{id}`.
///
/// Runs the detail editor's draft/commit cycle over the payload. A payload
/// carrying a different id than the path is rejected before any draft is
/// opened.
async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RulePayload>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let payload = match parse_payload(payload, correlation_id) {
        Ok(payload) => payload,
        Err(error) => return error.into_response(),
    };

    if let Some(payload_id) = &payload.id {
        if payload_id != &id {
            warn!(
                correlation_id = %correlation_id,
                path_id = %id,
                payload_id = %payload_id,
                "Update rejected: id mismatch"
            );
            return ApiErrorResponse::from(crate::error::RuleError::IdentityMismatch {
                expected: id,
                found: payload_id.clone(),
            })
            .into_response();
        }
    }

    let mut workspace = state.workspace();
    match workspace.update_rule(&id, |draft| payload.apply_to(draft)) {
        Ok(rule) => {
            info!(correlation_id = %correlation_id, id = %rule.id, "Saved rule");
            Json(rule).into_response()
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Update failed");
            ApiErrorResponse::from(error).into_response()
        }
    }
}

/// Converts a JSON extraction result into a payload or an error response.
fn parse_payload(
    payload: Result<Json<RulePayload>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<RulePayload, ApiErrorResponse> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_defaults_to_all() {
        let params = ListParams {
            category: None,
            use_flag: None,
            q: None,
        };
        let filter = parse_filter(&params).unwrap();
        assert_eq!(filter, RuleFilter::default());
    }

    #[test]
    fn test_parse_filter_maps_category_key() {
        let params = ListParams {
            category: Some("holiday".to_string()),
            use_flag: Some("active".to_string()),
            q: Some("duty".to_string()),
        };
        let filter = parse_filter(&params).unwrap();
        assert_eq!(filter.category, CategoryFilter::Tagged(Category::Holiday));
        assert_eq!(filter.use_flag, UseFilter::Active);
        assert_eq!(filter.query, "duty");
    }

    #[test]
    fn test_parse_filter_rejects_unknown_category() {
        let params = ListParams {
            category: Some("weekend".to_string()),
            use_flag: None,
            q: None,
        };
        let error = parse_filter(&params).unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_parse_filter_rejects_unknown_use_flag() {
        let params = ListParams {
            category: None,
            use_flag: Some("retired".to_string()),
            q: None,
        };
        assert!(parse_filter(&params).is_err());
    }
}
