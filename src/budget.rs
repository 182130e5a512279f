//! Budget arithmetic behind the summary panel and the prompt's budget split.

/// Share of the total budget the recommendation prompt allots to flights
#[must_use]
pub fn flight_share(total_budget: f64) -> f64 {
    total_budget * 0.5
}

/// Total lodging cost for a stay
#[must_use]
pub fn lodging_cost(price_per_night: f64, nights: i64) -> f64 {
    price_per_night * nights as f64
}

/// Spending position of a trip against its total budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub flight_cost: f64,
    pub lodging_cost: f64,
}

impl BudgetSummary {
    #[must_use]
    pub fn new(total_budget: f64, flight_cost: f64, lodging_cost: f64) -> Self {
        Self {
            total_budget,
            flight_cost,
            lodging_cost,
        }
    }

    #[must_use]
    pub fn total_spent(&self) -> f64 {
        self.flight_cost + self.lodging_cost
    }

    /// Budget left over; negative when overspent
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.total_budget - self.total_spent()
    }

    /// Percentage of the budget consumed, on a 0-100 scale (may exceed 100)
    #[must_use]
    pub fn percent_used(&self) -> f64 {
        if self.total_budget == 0.0 {
            0.0
        } else {
            self.total_spent() / self.total_budget * 100.0
        }
    }

    /// Spending exactly the budget is still within budget
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.total_spent() > self.total_budget
    }
}
