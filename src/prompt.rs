//! Prompt templates for the two planning operations.
//!
//! The model does the actual "planning"; these builders only interpolate the
//! validated request into the instruction text and pin down the JSON shape
//! the handlers expect back.

use crate::budget;
use crate::models::{ItineraryQuery, TripQuery};

/// System prompt for the recommendations call
pub const RECOMMENDATIONS_SYSTEM: &str = "You are a helpful travel planning assistant with access to real flight and lodging data through MCP servers. Always provide real, current data when available.";

/// System prompt for the itinerary call
pub const ITINERARY_SYSTEM: &str = "You are an expert travel planner with access to real-time weather data, local attractions, and current information through MCP servers. Always provide specific, actionable recommendations with real places and realistic timing.";

/// Prompt for flight/lodging recommendations within the trip budget
#[must_use]
pub fn recommendations(query: &TripQuery, nights: i64) -> String {
    let preferences = query.preferences.as_deref().unwrap_or("None specified");

    format!(
        r#"You are a travel planning assistant with access to real flight and lodging data.

A user wants to travel to {destination} from {start} to {end} ({nights} nights) with a total budget of ${budget}.

User preferences: {preferences}

Please provide:
1. A list of 4-5 real flight options to {destination} within roughly 50% of the budget (${flight_budget})
2. A list of 4-5 real lodging options in {destination} within the remaining budget for {nights} nights
3. Your recommendation and explanation

Return your response in the following JSON format:
{{
  "flights": [
    {{
      "id": 1,
      "airline": "Airline Name",
      "departure": "Time",
      "arrival": "Time",
      "price": number,
      "duration": "Xh XXm",
      "stops": number
    }}
  ],
  "lodging": [
    {{
      "id": 1,
      "name": "Property Name",
      "type": "Hotel/Airbnb/etc",
      "rating": number,
      "pricePerNight": number,
      "amenities": ["amenity1", "amenity2"],
      "location": "Area name"
    }}
  ],
  "recommendation": "Your detailed recommendation text in markdown format. Include:\n- Best flight option and why\n- Best lodging option and why\n- Total cost breakdown\n- 2-3 alternative combinations if budget allows\n\nKeep it concise and friendly."
}}"#,
        destination = query.destination,
        start = query.window.start,
        end = query.window.end,
        nights = nights,
        budget = dollars(query.budget),
        flight_budget = dollars(budget::flight_share(query.budget)),
        preferences = preferences,
    )
}

/// Prompt for the day-by-day itinerary
#[must_use]
pub fn itinerary(query: &ItineraryQuery, days: i64) -> String {
    format!(
        r#"You are a travel planning assistant with access to real-time weather data and local information through MCP servers.

Generate a detailed day-by-day itinerary for a trip to {destination} from {start} to {end} ({days} days).

User preferences:
- Interests: {interests}
- Travel pace: {pace} (slow = lots of rest, moderate = balanced, fast = packed schedule)
- Daily budget: ${daily_budget}

Please use your MCP server access to:
1. Get real weather forecasts for {destination} during these dates
2. Research actual attractions, restaurants, and activities
3. Get current operating hours and admission prices

Return your response in the following JSON format:
{{
  "itinerary": [
    {{
      "day": 1,
      "date": "{start}",
      "weather": {{
        "condition": "Sunny/Cloudy/Rainy/etc",
        "temperature": "XX°F",
        "advisory": "Any weather warnings or tips"
      }},
      "morning": {{
        "time": "8:00 AM - 12:00 PM",
        "activities": ["Activity 1", "Activity 2"],
        "description": "Detailed description of morning activities",
        "estimatedCost": XX,
        "travelTips": "How to get around, what to bring"
      }},
      "afternoon": {{
        "time": "12:00 PM - 6:00 PM",
        "activities": ["Activity 1", "Activity 2"],
        "lunch": "Restaurant recommendation",
        "description": "Detailed description",
        "estimatedCost": XX,
        "travelTips": "Tips"
      }},
      "evening": {{
        "time": "6:00 PM - 10:00 PM",
        "activities": ["Activity 1"],
        "dinner": "Restaurant recommendation",
        "description": "Detailed description",
        "estimatedCost": XX,
        "travelTips": "Tips"
      }},
      "dailyTotal": XX,
      "highlights": "Top highlight of the day"
    }}
  ],
  "overview": "Brief 2-3 sentence overview of the trip",
  "packingTips": ["Tip 1", "Tip 2", "Tip 3"],
  "totalEstimatedCost": XXXX
}}

Important:
- Adjust activity density based on travel pace
- Include realistic travel times between locations
- Ensure activities match the user's interests
- Consider weather when suggesting activities
- Include rest times, especially for slow/moderate pace
- Keep within daily budget
- Suggest real, specific places (not generic recommendations)"#,
        destination = query.destination,
        start = query.window.start,
        end = query.window.end,
        days = days,
        interests = query.interests.join(", "),
        pace = query.pace.as_str(),
        daily_budget = dollars(query.daily_budget),
    )
}

/// Prints amounts the way the browser template literal did: whole dollars
/// without a decimal point, fractional amounts as-is.
fn dollars(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}
