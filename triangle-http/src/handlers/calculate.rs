use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    response::{IntoResponse, Response},
    Json,
};
use triangle::{calculate, TriangleError};

use crate::dto::CalculateRequest;

fn run(req: CalculateRequest) -> Response {
    match calculate(req.size, req.correct) {
        Ok(report) => Json(report).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Exact p-value and chart for the given counts
#[utoipa::path(
    get,
    path = "/1/triangle",
    tag = "triangle",
    params(CalculateRequest),
    responses(
        (status = 200, description = "Calculation result", body = triangle::TriangleReport),
        (status = 400, description = "Invalid or oversized counts", body = triangle::error::ErrorResponse)
    )
)]
pub async fn calculate_get(params: Result<Query<CalculateRequest>, QueryRejection>) -> Response {
    match params {
        Ok(Query(req)) => run(req),
        Err(rejection) => TriangleError::InvalidInput(rejection.body_text()).into_response(),
    }
}

/// Exact p-value and chart for the counts in the JSON body
#[utoipa::path(
    post,
    path = "/1/triangle",
    tag = "triangle",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation result", body = triangle::TriangleReport),
        (status = 400, description = "Invalid or oversized counts", body = triangle::error::ErrorResponse)
    )
)]
pub async fn calculate_post(body: Result<Json<CalculateRequest>, JsonRejection>) -> Response {
    match body {
        Ok(Json(req)) => run(req),
        Err(rejection) => TriangleError::InvalidInput(rejection.body_text()).into_response(),
    }
}
