use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::Json,
};
use common::InventorySummary;
use model::entities::product;
use sea_orm::EntityTrait;
use tracing::{debug, error, info, instrument, trace};

use crate::schemas::{ApiResponse, AppState, ErrorResponse, SummaryQuery};
use crate::session::CurrentUser;

/// Aggregated inventory summary
///
/// Fetches the whole inventory snapshot and hands it to the compute crate:
/// vendor/date filtering, grouping by product name and the per-group
/// totals all happen there. An empty inventory is a successful, empty
/// payload rather than an error.
#[utoipa::path(
    get,
    path = "/api/v1/summary",
    tag = "summary",
    params(
        ("vendor" = Option<String>, Query, description = "Vendor substring filter (case-insensitive)"),
        ("start_date" = Option<String>, Query, description = "Inclusive lower bound on arrival date (YYYY-MM-DD)"),
        ("end_date" = Option<String>, Query, description = "Inclusive upper bound on arrival date (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, description = "Summary computed successfully", body = ApiResponse<InventorySummary>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_summary(
    Query(query): Query<SummaryQuery>,
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<InventorySummary>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_summary function");
    let filter = query.to_filter();
    if filter.is_unfiltered() {
        debug!("Computing unfiltered summary for user {}", current_user.0);
    } else {
        debug!(
            "Computing summary for user {} with filter: {:?}",
            current_user.0, filter
        );
    }

    let records = match product::Entity::find().all(&state.db).await {
        Ok(records) => records,
        Err(db_error) => {
            error!("Failed to load inventory snapshot: {}", db_error);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while computing summary".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            ));
        }
    };

    let summary = compute::summarize(&records, &filter);
    info!(
        "Summary computed: {} groups from {} records",
        summary.summary_rows.len(),
        records.len()
    );

    let response = ApiResponse {
        data: summary,
        message: "Summary computed successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
