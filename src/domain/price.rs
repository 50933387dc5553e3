//! Price readings and history-line formatting

use chrono::{DateTime, Local};

/// One observed price. Produced once per poll cycle, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceReading {
    pub timestamp: DateTime<Local>,
    pub amount: u64,
}

impl PriceReading {
    pub fn now(amount: u64) -> Self {
        Self {
            timestamp: Local::now(),
            amount,
        }
    }

    /// History-log line, e.g. `20-03-24 09:41 AM --> Flipkart --> Rs:1200/-`
    pub fn history_line(&self, source: &str) -> String {
        format!(
            "{} --> {} --> Rs:{}/-",
            self.timestamp.format("%d-%m-%y %I:%M %p"),
            source,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn history_line_matches_expected_format() {
        let reading = PriceReading {
            timestamp: Local.with_ymd_and_hms(2024, 3, 20, 9, 41, 0).unwrap(),
            amount: 1200,
        };
        assert_eq!(
            reading.history_line("Flipkart"),
            "20-03-24 09:41 AM --> Flipkart --> Rs:1200/-"
        );
    }

    #[test]
    fn history_line_uses_twelve_hour_clock() {
        let reading = PriceReading {
            timestamp: Local.with_ymd_and_hms(2024, 3, 20, 18, 5, 0).unwrap(),
            amount: 999,
        };
        assert_eq!(
            reading.history_line("Flipkart"),
            "20-03-24 06:05 PM --> Flipkart --> Rs:999/-"
        );
    }
}
