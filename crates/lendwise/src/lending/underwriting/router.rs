use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::warn;

use super::domain::{ApplicationInput, LoanApplicationSubmission};
use super::receipts::{SubmissionLog, SubmissionReceipt};
use super::scoring::RiskAssessment;
use super::service::{LoanApplicationService, SubmissionError};
use crate::error::AppError;

/// Router exposing risk assessment and application intake.
pub fn underwriting_router<L>(service: Arc<LoanApplicationService<L>>) -> Router
where
    L: SubmissionLog + 'static,
{
    Router::new()
        .route("/api/v1/loans/assessments", post(assessment_handler::<L>))
        .route("/api/v1/loans/applications", post(submit_handler::<L>))
        .with_state(service)
}

pub(crate) async fn assessment_handler<L>(
    State(service): State<Arc<LoanApplicationService<L>>>,
    Json(input): Json<ApplicationInput>,
) -> Result<Json<RiskAssessment>, AppError>
where
    L: SubmissionLog + 'static,
{
    let assessment = service.assess(&input)?;
    Ok(Json(assessment))
}

pub(crate) async fn submit_handler<L>(
    State(service): State<Arc<LoanApplicationService<L>>>,
    Json(submission): Json<LoanApplicationSubmission>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), AppError>
where
    L: SubmissionLog + 'static,
{
    let receipt = service.submit(submission).map_err(|err| {
        if let SubmissionError::Log(_) = &err {
            warn!(error = %err, "submission log failed");
        }
        AppError::from(err)
    })?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}
