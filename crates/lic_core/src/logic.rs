//! Logic combination stages: CMV × LCM → PUM → FUV → launch.
//!
//! These are the three pure stages downstream of the rule evaluator. Each
//! derives its output solely from the previous stage, so a deserialized
//! output record can be fed back through them unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{DecideError, Result};

/// Number of launch-interceptor condition rules.
pub const NUM_RULES: usize = 15;

/// Condition Met Vector: per-rule predicate result.
pub type Cmv = [bool; NUM_RULES];
/// Preliminary Unlocking Matrix: CMV combined pairwise via the LCM.
pub type Pum = [[bool; NUM_RULES]; NUM_RULES];
/// Final Unlocking Vector: per-rule unlocked status.
pub type Fuv = [bool; NUM_RULES];
/// Rule enablement vector supplied by the caller.
pub type Puv = [bool; NUM_RULES];
/// Logic Connector Matrix supplied by the caller.
pub type Lcm = [[Connector; NUM_RULES]; NUM_RULES];

/// How two CMV entries are combined into one PUM entry.
///
/// Exactly three connectors are legal; anything else on the wire is a
/// configuration error rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connector {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
    #[serde(rename = "NOTUSED")]
    NotUsed,
}

impl Connector {
    /// Map a legacy wire tag to its behavior.
    ///
    /// In the legacy format the `"ORR"` and `"NOTUSED"` tags are
    /// historically swapped: the literal tag `"ORR"` selects NOT-USED and
    /// `"NOTUSED"` selects OR. The mapping is preserved verbatim so legacy
    /// records keep deciding the same way; new data should use the clean
    /// serde tags instead.
    pub fn from_legacy_tag(tag: &str) -> Result<Self> {
        match tag {
            "ANDD" => Ok(Connector::And),
            "ORR" => Ok(Connector::NotUsed),
            "NOTUSED" => Ok(Connector::Or),
            other => Err(DecideError::UnknownConnector(other.to_string())),
        }
    }
}

/// Combine the CMV pairwise through the connector matrix.
///
/// NOT-USED entries pass vacuously; AND/OR apply to `cmv[i]` and `cmv[j]`.
pub fn build_pum(cmv: &Cmv, lcm: &Lcm) -> Pum {
    let mut pum = [[false; NUM_RULES]; NUM_RULES];
    for (i, row) in lcm.iter().enumerate() {
        for (j, connector) in row.iter().enumerate() {
            pum[i][j] = match connector {
                Connector::NotUsed => true,
                Connector::And => cmv[i] && cmv[j],
                Connector::Or => cmv[i] || cmv[j],
            };
        }
    }
    pum
}

/// Reduce the PUM to the final unlocking vector.
///
/// A rule disabled in the PUV is vacuously unlocked; an enabled rule is
/// unlocked only if its whole PUM row holds, the diagonal excluded.
pub fn build_fuv(pum: &Pum, puv: &Puv) -> Fuv {
    let mut fuv = [false; NUM_RULES];
    for (i, enabled) in puv.iter().enumerate() {
        fuv[i] = !enabled
            || pum[i]
                .iter()
                .enumerate()
                .all(|(j, &unlocked)| j == i || unlocked);
    }
    fuv
}

/// Final launch decision over one evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Launch {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl std::fmt::Display for Launch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Launch::Yes => write!(f, "YES"),
            Launch::No => write!(f, "NO"),
        }
    }
}

/// Aggregate the FUV into the terminal decision: YES iff every entry holds.
pub fn launch_decision(fuv: &Fuv) -> Launch {
    if fuv.iter().all(|&unlocked| unlocked) {
        Launch::Yes
    } else {
        Launch::No
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcm_filled(connector: Connector) -> Lcm {
        [[connector; NUM_RULES]; NUM_RULES]
    }

    #[test]
    fn test_pum_connector_truth_table() {
        let mut cmv = [false; NUM_RULES];
        cmv[0] = true;

        let pum = build_pum(&cmv, &lcm_filled(Connector::And));
        assert!(pum[0][0]);
        assert!(!pum[0][1], "true AND false");
        assert!(!pum[1][2], "false AND false");

        let pum = build_pum(&cmv, &lcm_filled(Connector::Or));
        assert!(pum[0][1], "true OR false");
        assert!(pum[1][0], "false OR true");
        assert!(!pum[1][2], "false OR false");

        let pum = build_pum(&cmv, &lcm_filled(Connector::NotUsed));
        assert!(pum.iter().all(|row| row.iter().all(|&v| v)));
    }

    #[test]
    fn test_not_used_row_cannot_block_launch() {
        // If a rule's whole LCM row is NOT-USED, its PUM row is all true
        // and that rule alone can never block the launch.
        let cmv = [false; NUM_RULES];
        let mut lcm = lcm_filled(Connector::And);
        lcm[3] = [Connector::NotUsed; NUM_RULES];

        let pum = build_pum(&cmv, &lcm);
        assert!(pum[3].iter().all(|&v| v));

        let mut puv = [false; NUM_RULES];
        puv[3] = true;
        let fuv = build_fuv(&pum, &puv);
        assert_eq!(launch_decision(&fuv), Launch::Yes);
    }

    #[test]
    fn test_fuv_disabled_rule_is_vacuous() {
        let pum = [[false; NUM_RULES]; NUM_RULES];
        let puv = [false; NUM_RULES];
        let fuv = build_fuv(&pum, &puv);
        assert!(fuv.iter().all(|&v| v));
        assert_eq!(launch_decision(&fuv), Launch::Yes);
    }

    #[test]
    fn test_fuv_excludes_diagonal() {
        // Row 2 holds everywhere except the diagonal: still unlocked.
        let mut pum = [[true; NUM_RULES]; NUM_RULES];
        pum[2][2] = false;
        let puv = [true; NUM_RULES];
        let fuv = build_fuv(&pum, &puv);
        assert!(fuv[2]);

        // A single off-diagonal false blocks the enabled rule.
        pum[2][7] = false;
        let fuv = build_fuv(&pum, &puv);
        assert!(!fuv[2]);
        assert_eq!(launch_decision(&fuv), Launch::No);
    }

    #[test]
    fn test_legacy_tag_mapping_preserves_observed_swap() {
        assert_eq!(Connector::from_legacy_tag("ANDD").unwrap(), Connector::And);
        assert_eq!(
            Connector::from_legacy_tag("ORR").unwrap(),
            Connector::NotUsed
        );
        assert_eq!(
            Connector::from_legacy_tag("NOTUSED").unwrap(),
            Connector::Or
        );
        assert!(matches!(
            Connector::from_legacy_tag("XOR"),
            Err(crate::error::DecideError::UnknownConnector(_))
        ));
    }

    #[test]
    fn test_clean_serde_tags() {
        assert_eq!(serde_json::to_string(&Connector::And).unwrap(), "\"AND\"");
        assert_eq!(serde_json::to_string(&Connector::Or).unwrap(), "\"OR\"");
        assert_eq!(
            serde_json::to_string(&Connector::NotUsed).unwrap(),
            "\"NOTUSED\""
        );
        let parsed: Connector = serde_json::from_str("\"OR\"").unwrap();
        assert_eq!(parsed, Connector::Or);
    }
}
