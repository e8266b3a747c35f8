//! Closed-trade statistics from `GET /items/{url_name}/statistics`

use serde::Deserialize;

/// Aggregated closed trades for one time window
#[derive(Debug, Clone, Deserialize)]
pub struct StatBucket {
    #[serde(default)]
    pub datetime: Option<String>,
    pub volume: u64,
    pub avg_price: f64,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub median: Option<f64>,
    #[serde(default)]
    pub wa_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct StatisticsResponse {
    pub payload: StatisticsPayload,
}

#[derive(Debug, Deserialize)]
pub struct StatisticsPayload {
    pub statistics_closed: ClosedStatistics,
}

#[derive(Debug, Deserialize)]
pub struct ClosedStatistics {
    #[serde(rename = "48hours")]
    pub last_48_hours: Vec<StatBucket>,
    #[serde(rename = "90days", default)]
    pub last_90_days: Vec<StatBucket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_response_deserializes() {
        let json = r#"{
            "payload": {
                "statistics_closed": {
                    "48hours": [
                        {"datetime": "2024-05-01T10:00:00.000+00:00", "volume": 10, "min_price": 15,
                         "max_price": 25, "avg_price": 20.0, "wa_price": 19.5, "median": 20,
                         "order_type": "sell", "id": "abc"}
                    ],
                    "90days": []
                }
            }
        }"#;

        let response: StatisticsResponse = serde_json::from_str(json).unwrap();
        let buckets = response.payload.statistics_closed.last_48_hours;
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].volume, 10);
        assert_eq!(buckets[0].median, Some(20.0));
    }

    #[test]
    fn missing_48_hour_window_is_an_error() {
        let json = r#"{"payload": {"statistics_closed": {"90days": []}}}"#;
        assert!(serde_json::from_str::<StatisticsResponse>(json).is_err());
    }
}
