//! # lic_core - Launch-Interceptor Condition Decision Engine
//!
//! Evaluates fifteen geometric/numeric predicates over a 2-D trajectory and
//! combines them through a configurable logic matrix into a single
//! LAUNCH: YES/NO decision.
//!
//! ## Pipeline
//! One immutable input snapshot flows strictly forward through four stages:
//! - rule evaluation → CMV (condition met vector)
//! - pairwise logic combination via the LCM → PUM
//! - per-rule unlock reduction against the PUV → FUV
//! - all-true aggregation → launch decision
//!
//! Evaluation is fully deterministic: equal inputs always produce
//! bit-identical output records, and validation failures abort a run
//! before any decision is produced.

pub mod api;
pub mod decide;
pub mod error;
pub mod geometry;
pub mod logic;
pub mod params;
mod rules;

pub use api::{decide_json, parse_legacy_input, serialize_decision};
pub use decide::{decide, Decision, Input, MAX_POINTS, MIN_POINTS};
pub use error::{DecideError, Result};
pub use geometry::{Point, Quadrant};
pub use logic::{
    build_fuv, build_pum, launch_decision, Cmv, Connector, Fuv, Launch, Lcm, Pum, Puv, NUM_RULES,
};
pub use params::Parameters;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
