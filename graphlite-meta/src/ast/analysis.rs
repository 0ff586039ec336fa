// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Analysis kinds a meta query can request on a property

use serde::{Deserialize, Serialize};

/// An analysis requested on a single property of a meta query.
///
/// Only [`Type`](StatisticalAnalysis::Type) and
/// [`PointingTo`](StatisticalAnalysis::PointingTo) concern the type inspector;
/// everything else is computed by the aggregation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatisticalAnalysis {
    Count,
    Sum,
    Mean,
    Median,
    Mode,
    Maximum,
    Minimum,
    /// The property's type: a primitive token, or `cref` for references
    Type,
    /// The classes a reference property may point to
    PointingTo,
    TotalTrue,
    TotalFalse,
    PercentageTrue,
    PercentageFalse,
    TopOccurrences,
}

impl StatisticalAnalysis {
    /// All analysis kinds, in declaration order
    pub const ALL: [StatisticalAnalysis; 14] = [
        StatisticalAnalysis::Count,
        StatisticalAnalysis::Sum,
        StatisticalAnalysis::Mean,
        StatisticalAnalysis::Median,
        StatisticalAnalysis::Mode,
        StatisticalAnalysis::Maximum,
        StatisticalAnalysis::Minimum,
        StatisticalAnalysis::Type,
        StatisticalAnalysis::PointingTo,
        StatisticalAnalysis::TotalTrue,
        StatisticalAnalysis::TotalFalse,
        StatisticalAnalysis::PercentageTrue,
        StatisticalAnalysis::PercentageFalse,
        StatisticalAnalysis::TopOccurrences,
    ];

    /// Whether this analysis asks about the property's type rather than its values
    pub fn is_type_relevant(self) -> bool {
        match self {
            StatisticalAnalysis::Type | StatisticalAnalysis::PointingTo => true,
            StatisticalAnalysis::Count
            | StatisticalAnalysis::Sum
            | StatisticalAnalysis::Mean
            | StatisticalAnalysis::Median
            | StatisticalAnalysis::Mode
            | StatisticalAnalysis::Maximum
            | StatisticalAnalysis::Minimum
            | StatisticalAnalysis::TotalTrue
            | StatisticalAnalysis::TotalFalse
            | StatisticalAnalysis::PercentageTrue
            | StatisticalAnalysis::PercentageFalse
            | StatisticalAnalysis::TopOccurrences => false,
        }
    }

    /// Name used on the wire and in CLI arguments
    pub fn as_str(self) -> &'static str {
        match self {
            StatisticalAnalysis::Count => "count",
            StatisticalAnalysis::Sum => "sum",
            StatisticalAnalysis::Mean => "mean",
            StatisticalAnalysis::Median => "median",
            StatisticalAnalysis::Mode => "mode",
            StatisticalAnalysis::Maximum => "maximum",
            StatisticalAnalysis::Minimum => "minimum",
            StatisticalAnalysis::Type => "type",
            StatisticalAnalysis::PointingTo => "pointingTo",
            StatisticalAnalysis::TotalTrue => "totalTrue",
            StatisticalAnalysis::TotalFalse => "totalFalse",
            StatisticalAnalysis::PercentageTrue => "percentageTrue",
            StatisticalAnalysis::PercentageFalse => "percentageFalse",
            StatisticalAnalysis::TopOccurrences => "topOccurrences",
        }
    }
}

impl std::str::FromStr for StatisticalAnalysis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StatisticalAnalysis::ALL
            .iter()
            .copied()
            .find(|analysis| analysis.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid: Vec<&str> = StatisticalAnalysis::ALL.iter().map(|a| a.as_str()).collect();
                format!(
                    "Unknown statistical analysis: {}. Valid options: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

impl std::fmt::Display for StatisticalAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_type_and_pointing_to_are_type_relevant() {
        let relevant: Vec<StatisticalAnalysis> = StatisticalAnalysis::ALL
            .iter()
            .copied()
            .filter(|a| a.is_type_relevant())
            .collect();

        assert_eq!(
            relevant,
            vec![StatisticalAnalysis::Type, StatisticalAnalysis::PointingTo]
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(
            "pointingTo".parse::<StatisticalAnalysis>().unwrap(),
            StatisticalAnalysis::PointingTo
        );
        assert_eq!(
            "POINTINGTO".parse::<StatisticalAnalysis>().unwrap(),
            StatisticalAnalysis::PointingTo
        );
        assert_eq!(
            " count ".parse::<StatisticalAnalysis>().unwrap(),
            StatisticalAnalysis::Count
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "average".parse::<StatisticalAnalysis>().unwrap_err();
        assert!(err.contains("average"));
        assert!(err.contains("pointingTo"));
    }

    #[test]
    fn serde_uses_camel_case_names() {
        let json = serde_json::to_string(&StatisticalAnalysis::TopOccurrences).unwrap();
        assert_eq!(json, "\"topOccurrences\"");

        let parsed: StatisticalAnalysis = serde_json::from_str("\"pointingTo\"").unwrap();
        assert_eq!(parsed, StatisticalAnalysis::PointingTo);
    }

    #[test]
    fn display_matches_wire_name() {
        for analysis in StatisticalAnalysis::ALL {
            let json = serde_json::to_value(analysis).unwrap();
            assert_eq!(json, serde_json::Value::String(analysis.to_string()));
        }
    }
}
