//! HTTP request handlers for the payroll ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::EmployeeRecord;

use super::request::{NewEmployeeRequest, NewPayrollRequest};
use super::response::{
    ApiError, ApiErrorResponse, EMPLOYEE_ADDED_MESSAGE, EmployeeCreatedResponse,
    EmployeeIdsResponse, EmployeeListResponse, PayrollListResponse, PayrollSavedResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(add_employee_handler),
        )
        .route("/employees/ids", get(employee_ids_handler))
        .route(
            "/payroll",
            get(list_payroll_handler).post(add_payroll_handler),
        )
        .with_state(state)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /employees.
///
/// Adds one employee. Duplicate IDs are answered with 409 and leave the
/// directory unchanged.
async fn add_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing new employee");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    if let Err(err) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Employee rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    let record: EmployeeRecord = request.into();
    let mut directory = state.directory().lock().await;
    match directory.add(record.clone()) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.id,
                "Employee added"
            );
            (
                StatusCode::CREATED,
                Json(EmployeeCreatedResponse {
                    message: EMPLOYEE_ADDED_MESSAGE.to_string(),
                    employee: record,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %record.id,
                error = %err,
                "Employee not added"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let directory = state.directory().lock().await;
    match directory.list() {
        Ok(employees) => Json(EmployeeListResponse {
            count: employees.len(),
            employees,
        })
        .into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to list employees");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees/ids.
///
/// The IDs a payroll submission may choose from.
async fn employee_ids_handler(State(state): State<AppState>) -> Response {
    let directory = state.directory().lock().await;
    match directory.ids() {
        Ok(ids) => Json(EmployeeIdsResponse { ids }).into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to list employee IDs");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /payroll.
///
/// Computes and records one payroll entry. Like the original form, only
/// employees already in the directory can be chosen; the ledger itself does
/// not check this.
async fn add_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewPayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll submission");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let directory = state.directory().lock().await;
    let known_ids = match directory.ids() {
        Ok(ids) => ids,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };
    if known_ids.is_empty() {
        warn!(correlation_id = %correlation_id, "Payroll submitted with empty directory");
        return ApiErrorResponse::no_employees().into_response();
    }

    if let Err(err) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Payroll rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    if !known_ids.contains(&request.employee_id) {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %request.employee_id,
            "Payroll submitted for unknown employee"
        );
        return ApiErrorResponse::employee_not_found(&request.employee_id).into_response();
    }

    let mut ledger = state.ledger().lock().await;
    drop(directory);

    let input = request.input();
    match ledger.add_entry(request.employee_id, request.month, input) {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %entry.employee_id,
                net_salary = %entry.net_salary,
                "Payroll saved"
            );
            (
                StatusCode::CREATED,
                Json(PayrollSavedResponse::new(correlation_id, entry)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll not saved"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /payroll.
async fn list_payroll_handler(State(state): State<AppState>) -> Response {
    let ledger = state.ledger().lock().await;
    match ledger.list() {
        Ok(entries) => Json(PayrollListResponse {
            count: entries.len(),
            entries,
        })
        .into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to list payroll");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ann() -> Value {
        json!({
            "id": "E1",
            "name": "Ann",
            "department": "HR",
            "position": "Clerk",
            "email": "a@x.com"
        })
    }

    #[tokio::test]
    async fn test_add_employee_returns_created() {
        let router = create_router(AppState::in_memory());

        let (status, body) = send(router, "POST", "/employees", Some(ann())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Employee added successfully!");
        assert_eq!(body["employee"]["id"], "E1");
    }

    #[tokio::test]
    async fn test_duplicate_employee_returns_conflict() {
        let state = AppState::in_memory();
        send(create_router(state.clone()), "POST", "/employees", Some(ann())).await;

        let (status, body) = send(create_router(state), "POST", "/employees", Some(ann())).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "DUPLICATE_EMPLOYEE_ID");
        assert_eq!(body["message"], "Employee ID already exists.");
    }

    #[tokio::test]
    async fn test_missing_employee_field_is_validation_error() {
        let router = create_router(AppState::in_memory());
        let body = json!({"id": "E1", "name": "Ann"});

        let (status, body) = send(router, "POST", "/employees", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_payroll_before_any_employee_is_conflict() {
        let router = create_router(AppState::in_memory());
        let body = json!({"employee_id": "E1", "month": "August 2025", "basic": "1000"});

        let (status, body) = send(router, "POST", "/payroll", Some(body)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "NO_EMPLOYEES");
    }

    #[tokio::test]
    async fn test_list_payroll_empty() {
        let router = create_router(AppState::in_memory());

        let (status, body) = send(router, "GET", "/payroll", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
        assert_eq!(body["entries"], json!([]));
    }
}
