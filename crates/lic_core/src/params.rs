//! Rule tuning parameters.
//!
//! One immutable record per evaluation run. Field names on the wire are the
//! legacy upper-case ones (`RADIUS1`, `A_PTS`, ...); fields absent from an
//! input record default to zero, matching the original reader.

use serde::{Deserialize, Serialize};

/// The ~20 named tuning values consumed by the rule predicates.
///
/// Offsets are kept signed so that out-of-domain values (e.g. a negative
/// `A_PTS`) survive deserialization and are rejected by the owning rule's
/// validation instead of being mangled at parse time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct Parameters {
    pub radius1: f64,
    pub radius2: f64,
    pub length1: f64,
    pub length2: f64,
    pub dist: f64,
    pub epsilon: f64,
    pub quads: i64,
    pub area1: f64,
    pub area2: f64,
    pub a_pts: i64,
    pub b_pts: i64,
    pub c_pts: i64,
    pub d_pts: i64,
    pub e_pts: i64,
    pub f_pts: i64,
    /// Present on the wire but consumed by no rule; retained for format
    /// compatibility.
    pub g_pts: i64,
    pub k_pts: i64,
    pub n_pts: i64,
    pub q_pts: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let value = json!({
            "LENGTH1": 2.5,
            "EPSILON": 0.1,
            "A_PTS": 2,
            "Q_PTS": 3
        });
        let params: Parameters = serde_json::from_value(value).unwrap();
        assert_eq!(params.length1, 2.5);
        assert_eq!(params.epsilon, 0.1);
        assert_eq!(params.a_pts, 2);
        assert_eq!(params.q_pts, 3);
        // Missing fields fall back to zero.
        assert_eq!(params.radius1, 0.0);
        assert_eq!(params.k_pts, 0);
    }

    #[test]
    fn test_roundtrip_uses_legacy_names() {
        let params = Parameters { radius1: 1.0, b_pts: 4, ..Default::default() };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["RADIUS1"], 1.0);
        assert_eq!(value["B_PTS"], 4);
    }
}
