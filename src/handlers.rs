use crate::errors::AppError;
use crate::generator::{generate, regenerate_headline as sample_new_headline};
use crate::models::{
    BusinessDataResponse, BusinessRequest, HeadlineQuery, HeadlineResponse, HealthResponse,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Html,
    Json,
};
use tracing::debug;

const SAMPLE_NAME: &str = "Café Delight";
const SAMPLE_LOCATION: &str = "Mumbai";

pub async fn index() -> Html<String> {
    Html(render_index(SAMPLE_NAME, SAMPLE_LOCATION))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Server is running",
    })
}

/// An unreadable body is answered like one with no fields at all.
pub async fn business_data(
    State(state): State<AppState>,
    payload: Result<Json<BusinessRequest>, JsonRejection>,
) -> Result<Json<BusinessDataResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("unreadable business-data body: {rejection}");
            BusinessRequest::default()
        }
    };

    let insight = {
        let mut rng = state.rng.lock().await;
        generate(&mut *rng, request.name.as_deref(), request.location.as_deref())
    }
    .inspect_err(|err| debug!("business-data rejected: {err}"))?;

    debug!(
        name = %insight.name,
        location = %insight.location,
        rating = insight.rating,
        reviews = insight.reviews,
        "generated insight"
    );
    Ok(Json(insight.into()))
}

pub async fn regenerate_headline(
    State(state): State<AppState>,
    query: Result<Query<HeadlineQuery>, QueryRejection>,
) -> Result<Json<HeadlineResponse>, AppError> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            debug!("unreadable regenerate-headline query: {rejection}");
            HeadlineQuery::default()
        }
    };

    let headline = {
        let mut rng = state.rng.lock().await;
        sample_new_headline(&mut *rng, query.name.as_deref(), query.location.as_deref())
    }
    .inspect_err(|err| debug!("regenerate-headline rejected: {err}"))?;

    Ok(Json(HeadlineResponse { headline }))
}
