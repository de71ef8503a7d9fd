use serde::{Deserialize, Serialize};

/// Synthetic rating, review count and headline produced for one business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: u32,
    pub headline: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct BusinessRequest {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HeadlineQuery {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BusinessDataResponse {
    pub rating: f64,
    pub reviews: u32,
    pub headline: String,
}

impl From<Insight> for BusinessDataResponse {
    fn from(insight: Insight) -> Self {
        Self {
            rating: insight.rating,
            reviews: insight.reviews,
            headline: insight.headline,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HeadlineResponse {
    pub headline: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
