use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        results::{ResultBoardEntry, ResultsFilter},
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    params(ResultsFilter),
    responses(
        (status = 200, description = "Results board retrieved successfully", body = PaginatedResponse<ResultBoardEntry>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "results"
)]
pub async fn list_results(
    State(db): State<Database>,
    Query(filter): Query<ResultsFilter>,
) -> Result<Response, WebError> {
    let pagination = filter.pagination();
    pagination.validate().map_err(WebError::BadRequest)?;

    let (entries, total_items) = services::list_results(db.pool(), &filter).await?;

    let response = PaginatedResponse::new(entries, &pagination, total_items);

    Ok(Json(response).into_response())
}
