//! Stats Page Charts
//!
//! The server embeds a complete Highcharts configuration on each chart
//! placeholder. This crate parses it, applies the page's fixed presentation
//! overrides and hands it to Highcharts.

use serde_json::{json, Map, Value};

mod render;

pub use render::render_all;

/// Attribute carrying the serialized chart configuration
pub const CHART_DATA_ATTR: &str = "data-chart";

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("placeholder has no data-chart attribute")]
    MissingData,
    #[error("invalid chart JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("chart configuration is not a JSON object")]
    NotAnObject,
    #[error("Highcharts call failed: {0}")]
    Js(String),
}

/// The kinds of chart placeholder the stats pages render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Distribution of officer application/reference/DBS progress
    OfficerStats,
    /// Percentage trend of officer stats over the years
    OfficerStatsTrend,
    /// Booking counts over time
    BookingProgress,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::OfficerStats,
        ChartKind::OfficerStatsTrend,
        ChartKind::BookingProgress,
    ];

    /// Marker attribute identifying placeholders of this kind
    pub fn marker_attr(self) -> &'static str {
        match self {
            ChartKind::OfficerStats => "data-officer-stats-chart-placeholder",
            ChartKind::OfficerStatsTrend => "data-officer-stats-trend-chart-placeholder",
            ChartKind::BookingProgress => "data-booking-progress-stats-chart-placeholder",
        }
    }

    pub fn selector(self) -> String {
        format!("[{}]", self.marker_attr())
    }

    /// Apply this kind's overrides to a parsed chart configuration.
    pub fn apply_overrides(self, config: &mut Map<String, Value>) {
        config.insert("title".into(), Value::Null);
        match self {
            ChartKind::OfficerStats => {
                let legend = config
                    .entry("legend")
                    .or_insert_with(|| Value::Object(Map::new()));
                if !legend.is_object() {
                    *legend = Value::Object(Map::new());
                }
                if let (Value::Object(legend), Value::Object(extra)) = (legend, floating_legend()) {
                    legend.extend(extra);
                }
                config.insert(
                    "yAxis".into(),
                    json!([{ "min": 0, "opposite": true, "title": { "enabled": false } }]),
                );
                config.insert("credits".into(), json!({ "enabled": false }));
            }
            ChartKind::OfficerStatsTrend => {
                config.insert(
                    "yAxis".into(),
                    json!([{ "min": 0, "max": 100, "title": { "enabled": false } }]),
                );
            }
            ChartKind::BookingProgress => {
                config.insert(
                    "yAxis".into(),
                    json!([{ "min": 0, "title": { "text": "Number of bookings" } }]),
                );
            }
        }
    }

    /// Parse a `data-chart` payload and apply overrides.
    pub fn prepare(self, raw: &str) -> Result<Value, ChartError> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(mut config) => {
                self.apply_overrides(&mut config);
                Ok(Value::Object(config))
            }
            _ => Err(ChartError::NotAnObject),
        }
    }
}

fn floating_legend() -> Value {
    json!({
        "align": "left",
        "verticalAlign": "top",
        "layout": "vertical",
        "backgroundColor": "#F0F0F0",
        "borderColor": "#E0E0E0",
        "borderWidth": 1,
        "floating": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "title": {"text": "Officer stats 2017"},
        "legend": {"enabled": true, "align": "right"},
        "yAxis": {"max": 5},
        "series": [{"name": "Applications", "data": [1, 2, 3]}]
    }"#;

    #[test]
    fn test_distribution_overrides() {
        let chart = ChartKind::OfficerStats.prepare(SAMPLE).unwrap();
        assert_eq!(chart["title"], Value::Null);
        assert_eq!(chart["legend"]["enabled"], json!(true));
        assert_eq!(chart["legend"]["align"], json!("left"));
        assert_eq!(chart["legend"]["floating"], json!(true));
        assert_eq!(chart["legend"]["borderWidth"], json!(1));
        assert_eq!(
            chart["yAxis"],
            json!([{ "min": 0, "opposite": true, "title": { "enabled": false } }])
        );
        assert_eq!(chart["credits"], json!({ "enabled": false }));
        // untouched
        assert_eq!(chart["series"][0]["data"], json!([1, 2, 3]));
    }

    #[test]
    fn test_distribution_without_legend() {
        let chart = ChartKind::OfficerStats.prepare(r#"{"series": []}"#).unwrap();
        assert_eq!(chart["legend"]["verticalAlign"], json!("top"));
        assert_eq!(chart["legend"]["backgroundColor"], json!("#F0F0F0"));
    }

    #[test]
    fn test_trend_overrides() {
        let chart = ChartKind::OfficerStatsTrend.prepare(SAMPLE).unwrap();
        assert_eq!(chart["title"], Value::Null);
        assert_eq!(
            chart["yAxis"],
            json!([{ "min": 0, "max": 100, "title": { "enabled": false } }])
        );
        // legend and credits left as supplied
        assert_eq!(chart["legend"]["align"], json!("right"));
        assert!(chart.get("credits").is_none());
    }

    #[test]
    fn test_booking_progress_overrides() {
        let chart = ChartKind::BookingProgress.prepare(SAMPLE).unwrap();
        assert_eq!(chart["title"], Value::Null);
        assert_eq!(
            chart["yAxis"],
            json!([{ "min": 0, "title": { "text": "Number of bookings" } }])
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ChartKind::BookingProgress.prepare("{not json"),
            Err(ChartError::InvalidJson(_))
        ));
        assert!(matches!(
            ChartKind::OfficerStats.prepare("[1, 2]"),
            Err(ChartError::NotAnObject)
        ));
    }

    #[test]
    fn test_selectors() {
        assert_eq!(
            ChartKind::OfficerStatsTrend.selector(),
            "[data-officer-stats-trend-chart-placeholder]"
        );
        assert_eq!(ChartKind::ALL.len(), 3);
    }
}
