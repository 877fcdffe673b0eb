//! Thin asynchronous client for the card recommendation service.
//!
//! Sends the user profile (and any transaction rows) and returns the
//! ordered recommendation list the dashboard renders.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;
use thiserror::Error;

use crate::domain::{DashboardPayload, RecommendationResponse, TransactionRecord, UserProfile};
use crate::util::{config::Settings, version::user_agent};

#[derive(Debug, Error)]
pub enum RecommendationClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned no recommendations")]
    Empty,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationRequest<'a> {
    user_info: &'a UserProfile,
    transaction_data: &'a [TransactionRecord],
}

#[derive(Clone)]
pub struct RecommendationClient {
    http: Client,
    endpoint: Url,
}

impl RecommendationClient {
    pub fn from_settings(settings: &Settings) -> Result<Self, RecommendationClientError> {
        Self::with_endpoint(
            &settings.recommendation_endpoint,
            Duration::from_secs(settings.request_timeout_secs.max(1)),
        )
    }

    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self, RecommendationClientError> {
        let endpoint = Url::parse(endpoint.trim())?;
        let http = Client::builder()
            .user_agent(user_agent())
            .timeout(timeout)
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// Requests recommendations and bundles them with the inputs into a dashboard payload.
    pub async fn recommend(
        &self,
        user_info: UserProfile,
        transaction_data: Vec<TransactionRecord>,
    ) -> Result<DashboardPayload, RecommendationClientError> {
        tracing::info!(endpoint = %self.endpoint, user = %user_info.username, "requesting recommendations");

        let request = RecommendationRequest {
            user_info: &user_info,
            transaction_data: &transaction_data,
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let recommendations: RecommendationResponse = response.json().await?;

        if recommendations.recommendations.is_empty() {
            tracing::warn!(endpoint = %self.endpoint, "recommendation service returned an empty list");
            return Err(RecommendationClientError::Empty);
        }

        tracing::info!(
            cards = recommendations.recommendations.len(),
            "received recommendations"
        );

        Ok(DashboardPayload {
            recommendations,
            user_info,
            transaction_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    fn profile() -> UserProfile {
        UserProfile {
            username: "river".to_string(),
            income: 72_000.0,
            age: 34,
            oldest_account_length_years: 9.0,
            credit_score: 771,
            annual_fee_willingness: 250.0,
        }
    }

    fn response_body(count: usize) -> Value {
        let recommendations = (0..count)
            .map(|idx| {
                json!({
                    "rec_reasoning": format!("reason {idx}"),
                    "card_name": format!("Card {idx}"),
                    "card_info": {
                        "cardName": format!("Card {idx}"),
                        "cardType": "Cashback",
                        "issuer": "Discover",
                        "annualFee": 0,
                        "APR": "18%",
                        "rewards": {
                            "pointsPerDollar": { "dining": 2, "other": 1 },
                            "signUpBonus": { "minimumSpend": 500, "timeFrameMonths": 3 }
                        },
                        "benefits": [],
                        "creditCardScoreMin": 650,
                        "creditCardScoreMax": 850,
                        "linkToApply": "https://example.com",
                        "countryOfOrigin": "USA",
                        "difficulty_rating": 1
                    }
                })
            })
            .collect::<Vec<_>>();
        json!({ "global_reasoning": "Balanced spender.", "recommendations": recommendations })
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });
        format!("http://{addr}/recommend")
    }

    #[tokio::test]
    async fn posts_profile_and_bundles_payload() {
        let router = Router::new().route(
            "/recommend",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["userInfo"]["creditScore"], 771);
                assert!(body["transactionData"].is_array());
                Json(response_body(2))
            }),
        );
        let endpoint = serve(router).await;
        let client = RecommendationClient::with_endpoint(&endpoint, Duration::from_secs(5))
            .expect("client");

        let payload = client.recommend(profile(), Vec::new()).await.expect("payload");
        assert_eq!(payload.recommendations.recommendations.len(), 2);
        assert_eq!(payload.recommendations.recommendations[1].card_info.card_name, "Card 1");
        assert_eq!(payload.user_info.credit_score, 771);
    }

    #[tokio::test]
    async fn empty_list_is_an_error() {
        let router = Router::new().route("/recommend", post(|| async { Json(response_body(0)) }));
        let endpoint = serve(router).await;
        let client = RecommendationClient::with_endpoint(&endpoint, Duration::from_secs(5))
            .expect("client");

        let result = client.recommend(profile(), Vec::new()).await;
        assert!(matches!(result, Err(RecommendationClientError::Empty)));
    }

    #[tokio::test]
    async fn server_errors_surface_as_http_errors() {
        let router = Router::new().route(
            "/recommend",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let endpoint = serve(router).await;
        let client = RecommendationClient::with_endpoint(&endpoint, Duration::from_secs(5))
            .expect("client");

        let result = client.recommend(profile(), Vec::new()).await;
        assert!(matches!(result, Err(RecommendationClientError::Http(_))));
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let result = RecommendationClient::with_endpoint("::nope::", Duration::from_secs(1));
        assert!(matches!(result, Err(RecommendationClientError::InvalidUrl(_))));
    }
}
