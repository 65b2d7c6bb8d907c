//! JSON API
//!
//! String-in/string-out entry point for embedding and for the CLI: parse a
//! legacy input record, run the pipeline once, serialize the output record.
//! The legacy wire format keys the LCM by stringified rule index and uses
//! the original connector tags (see `Connector::from_legacy_tag` for the
//! observed tag/behavior mapping).

use std::collections::HashMap;

use serde::Deserialize;

use crate::decide::{decide, Decision, Input};
use crate::error::{DecideError, Result};
use crate::geometry::Point;
use crate::logic::{Connector, Puv, NUM_RULES};
use crate::params::Parameters;

/// Input record as the legacy tooling writes it.
#[derive(Debug, Deserialize)]
struct LegacyInput {
    #[serde(rename = "NUMPOINTS")]
    num_points: i64,
    #[serde(rename = "POINTS")]
    points: Vec<Point>,
    #[serde(rename = "LCM")]
    lcm: HashMap<String, [String; NUM_RULES]>,
    #[serde(rename = "PUV")]
    puv: Puv,
    #[serde(rename = "PARAMETERS")]
    parameters: Parameters,
}

impl LegacyInput {
    fn into_input(self) -> Result<Input> {
        let num_points = usize::try_from(self.num_points).map_err(|_| {
            DecideError::InvalidInput(format!(
                "NUMPOINTS must be non-negative, got {}",
                self.num_points
            ))
        })?;

        let mut lcm = [[Connector::NotUsed; NUM_RULES]; NUM_RULES];
        for (i, row) in lcm.iter_mut().enumerate() {
            let tags = self.lcm.get(&i.to_string()).ok_or_else(|| {
                DecideError::InvalidInput(format!("LCM row {i} is missing"))
            })?;
            for (j, tag) in tags.iter().enumerate() {
                row[j] = Connector::from_legacy_tag(tag)?;
            }
        }

        Ok(Input {
            num_points,
            points: self.points,
            lcm,
            puv: self.puv,
            parameters: self.parameters,
        })
    }
}

/// Parse one legacy JSON input record into a typed input snapshot.
pub fn parse_legacy_input(json: &str) -> Result<Input> {
    let wire: LegacyInput = serde_json::from_str(json)?;
    wire.into_input()
}

/// Serialize an output record with the legacy field names.
pub fn serialize_decision(decision: &Decision) -> Result<String> {
    Ok(serde_json::to_string_pretty(decision)?)
}

/// Evaluate one legacy JSON input record end to end.
///
/// Validation failures surface as errors; no partial output record is
/// produced.
pub fn decide_json(input_json: &str) -> Result<String> {
    let input = parse_legacy_input(input_json)?;
    let decision = decide(&input)?;
    serialize_decision(&decision)
}
