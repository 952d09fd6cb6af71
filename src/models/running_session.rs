use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// One completed or scheduled run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningSession {
    #[serde(with = "timestamp::flexible")]
    pub date: DateTime<Utc>,
    pub distance: f64,
    pub duration: f64,
    pub calories_burned: f64,
}

impl RunningSession {
    pub fn new(date: DateTime<Utc>, distance: f64, duration: f64, calories_burned: f64) -> Self {
        Self {
            date,
            distance,
            duration,
            calories_burned,
        }
    }

    /// UTC calendar day the session took place on.
    pub fn calendar_day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.date <= now
    }

    /// Check the numeric fields, returning the name of the first bad one.
    pub fn validate(&self) -> Result<(), &'static str> {
        let fields = [
            ("distance", self.distance),
            ("duration", self.duration),
            ("caloriesBurned", self.calories_burned),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(name);
            }
        }

        Ok(())
    }
}
