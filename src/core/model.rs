//! Aggregate records served by the reporting service

use super::format::coerce_number;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRank {
    pub country_name: String,
    #[serde(deserialize_with = "finite_number")]
    pub fob: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    #[serde(deserialize_with = "finite_number")]
    pub total_exports_fob: f64,
    #[serde(deserialize_with = "finite_number")]
    pub total_imports_fob: f64,
    #[serde(deserialize_with = "finite_number")]
    pub trade_balance: f64,
    #[serde(deserialize_with = "finite_number")]
    pub logistics_cost: f64,
    /// Upstream order is kept as-is.
    pub country_ranking: Vec<CountryRank>,
}

/// Share of a product's exports that go to China.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRow {
    pub hs10: String,
    #[serde(deserialize_with = "finite_number")]
    pub share_china: f64,
    #[serde(
        default,
        deserialize_with = "optional_finite_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub fob_total: Option<f64>,
    #[serde(
        default,
        deserialize_with = "optional_finite_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub fob_china: Option<f64>,
}

impl DependencyRow {
    pub fn new(hs10: &str, share_china: f64) -> Self {
        Self {
            hs10: hs10.to_string(),
            share_china,
            fob_total: None,
            fob_china: None,
        }
    }
}

/// Accepts a JSON number or a numeric string, rejecting anything that does
/// not coerce to a finite value.
fn finite_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    to_finite(&value).map_err(de::Error::custom)
}

fn optional_finite_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => to_finite(&value).map(Some).map_err(de::Error::custom),
    }
}

fn to_finite(value: &Value) -> Result<f64, String> {
    let accepted = match value {
        Value::Number(_) => true,
        Value::String(s) => !s.trim().is_empty(),
        _ => false,
    };
    let number = coerce_number(value);
    if accepted && number.is_finite() {
        Ok(number)
    } else {
        Err(format!("expected a finite number, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERVIEW_JSON: &str = r#"{
        "total_exports_fob": 1000000,
        "total_imports_fob": 2000000.5,
        "trade_balance": -1000000.5,
        "logistics_cost": "50000",
        "country_ranking": [
            {"country_name": "CHINA", "fob": 600000},
            {"country_name": "ESTADOS UNIDOS", "fob": 400000}
        ]
    }"#;

    #[test]
    fn test_overview_deserialization() {
        let overview: Overview = serde_json::from_str(OVERVIEW_JSON).unwrap();

        assert_eq!(overview.total_exports_fob, 1_000_000.0);
        assert_eq!(overview.total_imports_fob, 2_000_000.5);
        assert_eq!(overview.trade_balance, -1_000_000.5);
        assert_eq!(overview.logistics_cost, 50_000.0);
        assert_eq!(overview.country_ranking.len(), 2);
        assert_eq!(overview.country_ranking[0].country_name, "CHINA");
        assert_eq!(overview.country_ranking[1].fob, 400_000.0);
    }

    #[test]
    fn test_overview_without_ranking_is_rejected() {
        let json = r#"{
            "total_exports_fob": 0,
            "total_imports_fob": 0,
            "trade_balance": 0,
            "logistics_cost": 0
        }"#;
        let err = serde_json::from_str::<Overview>(json).unwrap_err();
        assert!(err.to_string().contains("country_ranking"));
    }

    #[test]
    fn test_overview_with_empty_ranking() {
        let json = r#"{
            "total_exports_fob": 0,
            "total_imports_fob": 0,
            "trade_balance": 0,
            "logistics_cost": 0,
            "country_ranking": []
        }"#;
        let overview: Overview = serde_json::from_str(json).unwrap();
        assert!(overview.country_ranking.is_empty());
    }

    #[test]
    fn test_overview_rejects_malformed_fields() {
        let missing = r#"{"total_exports_fob": 1, "total_imports_fob": 2, "trade_balance": 3}"#;
        assert!(serde_json::from_str::<Overview>(missing).is_err());

        let wrong_type = r#"{
            "total_exports_fob": [1],
            "total_imports_fob": 2,
            "trade_balance": 3,
            "logistics_cost": 4
        }"#;
        assert!(serde_json::from_str::<Overview>(wrong_type).is_err());

        let not_numeric = r#"{
            "total_exports_fob": "abc",
            "total_imports_fob": 2,
            "trade_balance": 3,
            "logistics_cost": 4
        }"#;
        let err = serde_json::from_str::<Overview>(not_numeric).unwrap_err();
        assert!(err.to_string().contains("expected a finite number"));
    }

    #[test]
    fn test_non_finite_strings_are_rejected() {
        let json = r#"{"hs10": "0101", "share_china": "NaN"}"#;
        assert!(serde_json::from_str::<DependencyRow>(json).is_err());

        let json = r#"{"hs10": "0101", "share_china": ""}"#;
        assert!(serde_json::from_str::<DependencyRow>(json).is_err());
    }

    #[test]
    fn test_dependency_row_extras() {
        let json = r#"[
            {"hs10": "1006300000", "share_china": 0.734, "fob_total": 1000.0, "fob_china": 734.0},
            {"hs10": "0306170000", "share_china": 0.5, "fob_china": null}
        ]"#;
        let rows: Vec<DependencyRow> = serde_json::from_str(json).unwrap();

        assert_eq!(rows[0].hs10, "1006300000");
        assert_eq!(rows[0].share_china, 0.734);
        assert_eq!(rows[0].fob_total, Some(1000.0));
        assert_eq!(rows[0].fob_china, Some(734.0));
        assert!(rows[1].fob_total.is_none());
        assert!(rows[1].fob_china.is_none());
    }

    #[test]
    fn test_share_outside_unit_range_passes_through() {
        let json = r#"{"hs10": "12", "share_china": 1.7}"#;
        let row: DependencyRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.share_china, 1.7);
        assert_eq!(row.hs10, "12");
    }
}
