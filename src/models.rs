//! Request payloads and trip-window arithmetic for the planning endpoints.
//!
//! Wire fields are all optional: presence is checked by `validate()` with the
//! same rules the browser form implies (blank strings and zero budgets count
//! as absent), so a bad request yields a 400 with the endpoint's required
//! list rather than a deserialization failure.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::Result;
use crate::error::TripWiseError;

/// Required fields of the recommendations endpoint, in wire spelling
pub const RECOMMENDATION_FIELDS: [&str; 4] = ["destination", "startDate", "endDate", "budget"];

/// Required fields of the itinerary endpoint, in wire spelling
pub const ITINERARY_FIELDS: [&str; 6] = [
    "destination",
    "startDate",
    "endDate",
    "interests",
    "travelPace",
    "dailyBudget",
];

/// Body of `POST /api/recommendations`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationRequest {
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "money")]
    pub budget: Option<f64>,
    pub preferences: Option<String>,
}

impl RecommendationRequest {
    pub fn validate(self) -> Result<TripQuery> {
        let (Some(destination), Some(start), Some(end), Some(budget)) = (
            present(self.destination),
            present(self.start_date),
            present(self.end_date),
            self.budget.filter(|b| *b != 0.0),
        ) else {
            return Err(TripWiseError::missing_fields(
                RECOMMENDATION_FIELDS.to_vec(),
            ));
        };

        Ok(TripQuery {
            destination,
            window: TripWindow::parse(&start, &end)?,
            budget,
            preferences: present(self.preferences),
        })
    }
}

/// Body of `POST /api/itinerary`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryRequest {
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub interests: Option<Vec<String>>,
    pub travel_pace: Option<String>,
    #[serde(deserialize_with = "money")]
    pub daily_budget: Option<f64>,
}

impl ItineraryRequest {
    pub fn validate(self) -> Result<ItineraryQuery> {
        let (Some(destination), Some(start), Some(end), Some(interests), Some(pace), Some(daily_budget)) = (
            present(self.destination),
            present(self.start_date),
            present(self.end_date),
            self.interests,
            present(self.travel_pace),
            self.daily_budget.filter(|b| *b != 0.0),
        ) else {
            return Err(TripWiseError::missing_fields(ITINERARY_FIELDS.to_vec()));
        };

        Ok(ItineraryQuery {
            destination,
            window: TripWindow::parse(&start, &end)?,
            interests,
            pace: pace.parse()?,
            daily_budget,
        })
    }
}

/// A validated recommendation request
#[derive(Debug, Clone)]
pub struct TripQuery {
    pub destination: String,
    pub window: TripWindow,
    pub budget: f64,
    pub preferences: Option<String>,
}

/// A validated itinerary request
#[derive(Debug, Clone)]
pub struct ItineraryQuery {
    pub destination: String,
    pub window: TripWindow,
    pub interests: Vec<String>,
    pub pace: TravelPace,
    pub daily_budget: f64,
}

/// How densely the itinerary packs each day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelPace {
    Slow,
    Moderate,
    Fast,
}

impl TravelPace {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TravelPace::Slow => "slow",
            TravelPace::Moderate => "moderate",
            TravelPace::Fast => "fast",
        }
    }
}

impl FromStr for TravelPace {
    type Err = TripWiseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "slow" => Ok(TravelPace::Slow),
            "moderate" => Ok(TravelPace::Moderate),
            "fast" => Ok(TravelPace::Fast),
            other => Err(TripWiseError::validation(format!(
                "travelPace must be one of slow, moderate, fast, got '{other}'"
            ))),
        }
    }
}

/// The date range of a trip, arrival day through departure day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TripWindow {
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;

        if end < start {
            return Err(TripWiseError::validation(
                "endDate must not be before startDate",
            ));
        }

        Ok(Self { start, end })
    }

    /// Number of nights spent at the destination
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Trip length in days, counting the arrival day
    #[must_use]
    pub fn days(&self) -> i64 {
        self.nights() + 1
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| TripWiseError::validation(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}

/// A string field is present when it holds something besides whitespace
fn present(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

/// Budget fields arrive as whatever the form input last held: a number on
/// first render, a string once the user edits it. Blank strings count as
/// absent.
fn money<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("not a number: '{trimmed}'")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn recommendation_request() -> RecommendationRequest {
        RecommendationRequest {
            destination: Some("Lisbon".to_string()),
            start_date: Some("2024-06-01".to_string()),
            end_date: Some("2024-06-05".to_string()),
            budget: Some(2000.0),
            preferences: None,
        }
    }

    fn itinerary_request() -> ItineraryRequest {
        ItineraryRequest {
            destination: Some("Lisbon".to_string()),
            start_date: Some("2024-06-01".to_string()),
            end_date: Some("2024-06-05".to_string()),
            interests: Some(vec!["Food & Dining".to_string()]),
            travel_pace: Some("moderate".to_string()),
            daily_budget: Some(150.0),
        }
    }

    #[rstest]
    #[case("2024-06-01", "2024-06-05", 4, 5)]
    #[case("2024-06-01", "2024-06-01", 0, 1)]
    #[case("2024-06-28", "2024-07-02", 4, 5)]
    #[case("2024-12-30", "2025-01-02", 3, 4)]
    #[case("2024-02-28", "2024-03-01", 2, 3)]
    fn test_window_arithmetic(
        #[case] start: &str,
        #[case] end: &str,
        #[case] nights: i64,
        #[case] days: i64,
    ) {
        let window = TripWindow::parse(start, end).unwrap();
        assert_eq!(window.nights(), nights);
        assert_eq!(window.days(), days);
    }

    #[test]
    fn test_window_rejects_reversed_dates() {
        let result = TripWindow::parse("2024-06-05", "2024-06-01");
        assert!(matches!(result, Err(TripWiseError::Validation { .. })));
    }

    #[test]
    fn test_window_rejects_garbage() {
        assert!(TripWindow::parse("yesterday", "2024-06-01").is_err());
        assert!(TripWindow::parse("2024-06-01", "06/05/2024").is_err());
    }

    #[test]
    fn test_recommendation_validation_passes() {
        let query = recommendation_request().validate().unwrap();
        assert_eq!(query.destination, "Lisbon");
        assert_eq!(query.window.nights(), 4);
        assert_eq!(query.budget, 2000.0);
        assert!(query.preferences.is_none());
    }

    #[test]
    fn test_recommendation_missing_destination() {
        let mut request = recommendation_request();
        request.destination = None;
        let err = request.validate().unwrap_err();
        assert!(matches!(err, TripWiseError::MissingFields { .. }));
    }

    #[test]
    fn test_blank_destination_counts_as_missing() {
        let mut request = recommendation_request();
        request.destination = Some("   ".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_budget_counts_as_missing() {
        let mut request = recommendation_request();
        request.budget = Some(0.0);
        let err = request.validate().unwrap_err();
        assert!(matches!(err, TripWiseError::MissingFields { .. }));
    }

    #[test]
    fn test_string_budget_is_accepted_on_the_wire() {
        let request: RecommendationRequest = serde_json::from_value(serde_json::json!({
            "destination": "Lisbon",
            "startDate": "2024-06-01",
            "endDate": "2024-06-05",
            "budget": "2000",
        }))
        .unwrap();
        assert_eq!(request.budget, Some(2000.0));
    }

    #[test]
    fn test_blank_string_budget_counts_as_missing() {
        let request: RecommendationRequest = serde_json::from_value(serde_json::json!({
            "budget": "  ",
        }))
        .unwrap();
        assert_eq!(request.budget, None);
    }

    #[test]
    fn test_itinerary_validation_passes() {
        let query = itinerary_request().validate().unwrap();
        assert_eq!(query.pace, TravelPace::Moderate);
        assert_eq!(query.window.days(), 5);
        assert_eq!(query.daily_budget, 150.0);
    }

    #[test]
    fn test_itinerary_missing_fields() {
        let err = ItineraryRequest::default().validate().unwrap_err();
        match err {
            TripWiseError::MissingFields { required } => {
                assert_eq!(required, ITINERARY_FIELDS.to_vec());
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_interest_list_is_allowed() {
        let mut request = itinerary_request();
        request.interests = Some(Vec::new());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_unknown_pace_is_rejected() {
        let mut request = itinerary_request();
        request.travel_pace = Some("leisurely".to_string());
        let err = request.validate().unwrap_err();
        assert!(matches!(err, TripWiseError::Validation { .. }));
    }

    #[rstest]
    #[case("slow", TravelPace::Slow)]
    #[case("moderate", TravelPace::Moderate)]
    #[case("fast", TravelPace::Fast)]
    fn test_pace_round_trip(#[case] raw: &str, #[case] pace: TravelPace) {
        assert_eq!(raw.parse::<TravelPace>().unwrap(), pace);
        assert_eq!(pace.as_str(), raw);
    }
}
