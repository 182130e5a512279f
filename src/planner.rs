//! Orchestration of the two planning operations: validate the request, build
//! the prompt, call the model once, normalize the reply.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::Result;
use crate::error::TripWiseError;
use crate::llm::{CompletionParams, ModelClient};
use crate::models::{ItineraryRequest, RecommendationRequest};
use crate::prompt;

const RECOMMENDATION_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.7,
    max_tokens: 2000,
};

const ITINERARY_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.8,
    max_tokens: 3000,
};

/// The shape the model is asked to return for a recommendation request.
/// Option entries stay untyped so they pass through to the UI unmodified.
#[derive(Debug, Deserialize)]
struct RecommendationReply {
    #[serde(default)]
    flights: Vec<Value>,
    #[serde(default)]
    lodging: Vec<Value>,
    #[serde(default)]
    recommendation: Option<String>,
}

/// Response body for `POST /api/recommendations`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub available_flights: Vec<Value>,
    pub available_lodging: Vec<Value>,
    pub nights: i64,
}

/// Plans trips by delegating the research to the model API
pub struct TripPlanner {
    model: ModelClient,
}

impl TripPlanner {
    #[must_use]
    pub fn new(model: ModelClient) -> Self {
        Self { model }
    }

    /// Flight and lodging options plus a markdown recommendation. The only
    /// reshaping of the reply is the envelope renaming; the option arrays are
    /// forwarded as the model produced them.
    pub async fn recommend(&self, request: RecommendationRequest) -> Result<Recommendations> {
        let query = request.validate()?;
        let nights = query.window.nights();
        info!(
            "Generating recommendations for {} ({} nights)",
            query.destination, nights
        );

        let user_prompt = prompt::recommendations(&query, nights);
        let reply = self
            .model
            .complete_json(
                prompt::RECOMMENDATIONS_SYSTEM,
                &user_prompt,
                RECOMMENDATION_PARAMS,
            )
            .await?;

        let reply: RecommendationReply = serde_json::from_value(reply)
            .map_err(|e| TripWiseError::malformed_reply(format!("Unexpected reply shape: {e}")))?;

        Ok(Recommendations {
            recommendation: reply.recommendation,
            available_flights: reply.flights,
            available_lodging: reply.lodging,
            nights,
        })
    }

    /// Day-by-day itinerary. The reply object is the response body, verbatim.
    pub async fn generate_itinerary(&self, request: ItineraryRequest) -> Result<Value> {
        let query = request.validate()?;
        let days = query.window.days();
        info!(
            "Generating {}-day itinerary for {}",
            days, query.destination
        );

        let user_prompt = prompt::itinerary(&query, days);
        let reply = self
            .model
            .complete_json(prompt::ITINERARY_SYSTEM, &user_prompt, ITINERARY_PARAMS)
            .await?;

        if !reply.is_object() {
            return Err(TripWiseError::malformed_reply("Reply is not a JSON object"));
        }

        Ok(reply)
    }
}
