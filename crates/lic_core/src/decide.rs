//! The four-stage evaluation pipeline.
//!
//! One run consumes one immutable `Input` snapshot and produces one
//! `Decision` snapshot: raw input → CMV → PUM → FUV → launch. Data flows
//! strictly forward; nothing survives across runs.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DecideError, Result};
use crate::geometry::Point;
use crate::logic::{
    build_fuv, build_pum, launch_decision, Cmv, Fuv, Launch, Lcm, Pum, Puv, NUM_RULES,
};
use crate::params::Parameters;
use crate::rules::{Trajectory, RULES};

/// Declared point-count bounds for one evaluation run.
pub const MIN_POINTS: usize = 2;
pub const MAX_POINTS: usize = 100;

/// One evaluation run's complete input snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Input {
    pub num_points: usize,
    pub points: Vec<Point>,
    pub lcm: Lcm,
    pub puv: Puv,
    pub parameters: Parameters,
}

/// One evaluation run's complete output snapshot.
///
/// Serialized field names match the legacy output records (`LAUNCH`,
/// `CMV`, `PUM`, `FUV`) so existing report tooling can read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Decision {
    pub launch: Launch,
    pub cmv: Cmv,
    pub pum: Pum,
    pub fuv: Fuv,
}

fn validate_input(input: &Input) -> Result<()> {
    if !(MIN_POINTS..=MAX_POINTS).contains(&input.num_points) {
        return Err(DecideError::InvalidInput(format!(
            "NUMPOINTS must lie in [{MIN_POINTS}, {MAX_POINTS}], got {}",
            input.num_points
        )));
    }
    if input.num_points != input.points.len() {
        return Err(DecideError::InvalidInput(format!(
            "NUMPOINTS is {} but {} points were supplied",
            input.num_points,
            input.points.len()
        )));
    }
    Ok(())
}

/// Evaluate the fifteen rule predicates into the condition met vector.
///
/// The predicates are mutually independent and read-only over the same
/// trajectory, so they fan out across the rayon pool. Results are collected
/// in rule order and the lowest-index validation error wins, which keeps
/// error reporting deterministic regardless of scheduling.
fn evaluate_cmv(points: &[Point], parameters: &Parameters) -> Result<Cmv> {
    let results: Vec<Result<bool>> = RULES
        .par_iter()
        .map(|rule| rule(&Trajectory { points, params: parameters }))
        .collect();

    let mut cmv = [false; NUM_RULES];
    for (i, result) in results.into_iter().enumerate() {
        cmv[i] = result?;
    }
    Ok(cmv)
}

/// Run the full decision pipeline over one input snapshot.
///
/// Any validation failure aborts the run before a decision is produced;
/// there is no partial output.
pub fn decide(input: &Input) -> Result<Decision> {
    validate_input(input)?;

    let cmv = evaluate_cmv(&input.points, &input.parameters)?;
    debug!(?cmv, "condition met vector evaluated");

    let pum = build_pum(&cmv, &input.lcm);
    let fuv = build_fuv(&pum, &input.puv);
    let launch = launch_decision(&fuv);
    debug!(?fuv, ?launch, "unlock reduction complete");

    Ok(Decision { launch, cmv, pum, fuv })
}
