//! The fifteen launch-interceptor condition predicates.
//!
//! Each rule is an existential scan over sliding windows of the trajectory:
//! "does at least one window satisfy the rule's geometric condition". Rules
//! are independent of each other and read-only over the same trajectory and
//! parameter snapshot. A rule first validates the parameters it owns; an
//! out-of-domain parameter aborts the whole evaluation run.
//!
//! Dispatch is a fixed ordered table of function values indexed 0–14 so the
//! evaluation order is explicit and deterministic.

use std::f64::consts::PI;

use crate::error::{DecideError, Result};
use crate::geometry::{
    self, centroid_circle_radius, distance, distance_to_line, line_equation, triangle_area, Point,
};
use crate::logic::NUM_RULES;
use crate::params::Parameters;

/// Read-only view of one evaluation run's trajectory and parameters.
pub(crate) struct Trajectory<'a> {
    pub points: &'a [Point],
    pub params: &'a Parameters,
}

impl Trajectory<'_> {
    fn len(&self) -> usize {
        self.points.len()
    }

    /// Consecutive pairs whose indices differ by exactly `k`.
    fn offset_pairs(&self, k: usize) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .iter()
            .copied()
            .zip(self.points.iter().copied().skip(k))
    }

    /// Point triples at index offsets `a` and `a + b`.
    fn offset_triples(
        &self,
        a: usize,
        b: usize,
    ) -> impl Iterator<Item = (Point, Point, Point)> + '_ {
        self.points
            .iter()
            .copied()
            .zip(self.points.iter().copied().skip(a))
            .zip(self.points.iter().copied().skip(a.saturating_add(b)))
            .map(|((p, q), r)| (p, q, r))
    }
}

pub(crate) type Rule = fn(&Trajectory) -> Result<bool>;

/// Ordered rule dispatch table; index equals rule number.
pub(crate) const RULES: [Rule; NUM_RULES] = [
    lic0, lic1, lic2, lic3, lic4, lic5, lic6, lic7, lic8, lic9, lic10, lic11, lic12, lic13, lic14,
];

fn invalid(msg: impl Into<String>) -> DecideError {
    DecideError::InvalidParameter(msg.into())
}

/// Reject a window offset below 1 and convert it to an index delta.
fn require_offset(value: i64, name: &str) -> Result<usize> {
    if value < 1 {
        return Err(invalid(format!("{name} must be at least 1, got {value}")));
    }
    Ok(value as usize)
}

fn require_non_negative(value: f64, name: &str) -> Result<()> {
    if value < 0.0 {
        return Err(invalid(format!("{name} must be non-negative, got {value}")));
    }
    Ok(())
}

fn require_epsilon(epsilon: f64) -> Result<()> {
    if !(0.0..PI).contains(&epsilon) {
        return Err(invalid(format!("EPSILON must lie in [0, PI), got {epsilon}")));
    }
    Ok(())
}

/// A vertex angle counts when it falls outside [π−EPSILON, π+EPSILON].
fn angle_outside_band(theta: f64, epsilon: f64) -> bool {
    let magnitude = theta.abs();
    magnitude < PI - epsilon || magnitude > PI + epsilon
}

/// Rule 0: two consecutive points farther apart than LENGTH1.
fn lic0(t: &Trajectory) -> Result<bool> {
    require_non_negative(t.params.length1, "LENGTH1")?;
    Ok(t.points
        .windows(2)
        .any(|w| distance(w[0], w[1]) > t.params.length1))
}

/// Rule 1: three consecutive points whose centroid circle exceeds RADIUS1.
fn lic1(t: &Trajectory) -> Result<bool> {
    require_non_negative(t.params.radius1, "RADIUS1")?;
    Ok(t.points
        .windows(3)
        .any(|w| centroid_circle_radius(w[0], w[1], w[2]) > t.params.radius1))
}

/// Rule 2: three consecutive points whose vertex angle lies outside
/// [π−EPSILON, π+EPSILON]. Windows with the angle undefined (an endpoint on
/// the vertex) are skipped, not fatal.
fn lic2(t: &Trajectory) -> Result<bool> {
    require_epsilon(t.params.epsilon)?;
    for w in t.points.windows(3) {
        if let Some(theta) = geometry::angle(w[0], w[1], w[2]) {
            if angle_outside_band(theta, t.params.epsilon) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Rule 3: three consecutive points spanning a triangle larger than AREA1.
fn lic3(t: &Trajectory) -> Result<bool> {
    require_non_negative(t.params.area1, "AREA1")?;
    Ok(t.points
        .windows(3)
        .any(|w| triangle_area(w[0], w[1], w[2]) > t.params.area1))
}

/// Rule 4: Q_PTS consecutive points touching more than QUADS distinct
/// quadrants, with the axis tie-break from the geometry kernel.
fn lic4(t: &Trajectory) -> Result<bool> {
    let n = t.len() as i64;
    let q_pts = t.params.q_pts;
    let quads = t.params.quads;
    if q_pts < 2 || q_pts > n {
        return Err(invalid(format!(
            "Q_PTS must lie in [2, NUMPOINTS], got {q_pts}"
        )));
    }
    if !(1..=3).contains(&quads) {
        return Err(invalid(format!("QUADS must lie in [1, 3], got {quads}")));
    }
    for window in t.points.windows(q_pts as usize) {
        let mut seen = [false; 4];
        for &p in window {
            seen[geometry::quadrant(p).index()] = true;
        }
        let distinct = seen.iter().filter(|&&touched| touched).count() as i64;
        if distinct > quads {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rule 5: two consecutive points with strictly decreasing x-coordinate.
fn lic5(t: &Trajectory) -> Result<bool> {
    Ok(t.points.windows(2).any(|w| w[1].x - w[0].x < 0.0))
}

/// Rule 6: within some window of N_PTS consecutive points, a point lies
/// farther than DIST from the line through the window's first and last
/// point. Coincident endpoints degrade to plain point distance.
fn lic6(t: &Trajectory) -> Result<bool> {
    let n = t.len() as i64;
    if n < 3 {
        return Ok(false);
    }
    let n_pts = t.params.n_pts;
    if n_pts < 3 || n_pts > n {
        return Err(invalid(format!(
            "N_PTS must lie in [3, NUMPOINTS], got {n_pts}"
        )));
    }
    require_non_negative(t.params.dist, "DIST")?;
    let dist = t.params.dist;
    for window in t.points.windows(n_pts as usize) {
        let first = window[0];
        let last = window[window.len() - 1];
        let hit = if distance(first, last) == 0.0 {
            window.iter().any(|&p| distance(p, first) > dist)
        } else {
            let line = line_equation(first, last);
            window.iter().any(|&p| distance_to_line(p, &line) > dist)
        };
        if hit {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rule 7: two points exactly K_PTS apart with distance above LENGTH1.
fn lic7(t: &Trajectory) -> Result<bool> {
    let n = t.len() as i64;
    if n < 3 {
        return Ok(false);
    }
    let k_pts = t.params.k_pts;
    if k_pts < 1 || k_pts > n - 2 {
        return Err(invalid(format!(
            "K_PTS must lie in [1, NUMPOINTS - 2], got {k_pts}"
        )));
    }
    Ok(t.offset_pairs(k_pts as usize)
        .any(|(p, q)| distance(p, q) > t.params.length1))
}

/// Rule 8: a triple at offsets A_PTS and A_PTS + B_PTS outside the centroid
/// circle of radius RADIUS1. An offset sum beyond NUMPOINTS − 3 is a fatal
/// validation error here (unlike rule 9, which silently fails).
fn lic8(t: &Trajectory) -> Result<bool> {
    let a_pts = require_offset(t.params.a_pts, "A_PTS")?;
    let b_pts = require_offset(t.params.b_pts, "B_PTS")?;
    let n = t.len();
    if n < 5 {
        return Ok(false);
    }
    if a_pts + b_pts > n - 3 {
        return Err(invalid(format!(
            "A_PTS + B_PTS must not exceed NUMPOINTS - 3, got {}",
            a_pts + b_pts
        )));
    }
    Ok(t.offset_triples(a_pts, b_pts)
        .any(|(p, q, r)| centroid_circle_radius(p, q, r) > t.params.radius1))
}

/// Rule 9: the rule 2 angle condition over a triple at offsets C_PTS and
/// C_PTS + D_PTS. An offset sum beyond NUMPOINTS − 3 makes the rule false,
/// not an error.
fn lic9(t: &Trajectory) -> Result<bool> {
    let c_pts = require_offset(t.params.c_pts, "C_PTS")?;
    let d_pts = require_offset(t.params.d_pts, "D_PTS")?;
    require_epsilon(t.params.epsilon)?;
    let n = t.len();
    if n < 5 || c_pts + d_pts > n - 3 {
        return Ok(false);
    }
    for (p, q, r) in t.offset_triples(c_pts, d_pts) {
        if let Some(theta) = geometry::angle(p, q, r) {
            if angle_outside_band(theta, t.params.epsilon) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Rule 10: a triple at offsets E_PTS and E_PTS + F_PTS spanning a triangle
/// larger than AREA1.
fn lic10(t: &Trajectory) -> Result<bool> {
    let e_pts = require_offset(t.params.e_pts, "E_PTS")?;
    let f_pts = require_offset(t.params.f_pts, "F_PTS")?;
    require_non_negative(t.params.area1, "AREA1")?;
    Ok(t.offset_triples(e_pts, f_pts)
        .any(|(p, q, r)| triangle_area(p, q, r) > t.params.area1))
}

/// Rule 11: some pair K_PTS apart farther than LENGTH1 and some (possibly
/// different) pair K_PTS apart closer than LENGTH2.
fn lic11(t: &Trajectory) -> Result<bool> {
    let k_pts = require_offset(t.params.k_pts, "K_PTS")?;
    require_non_negative(t.params.length2, "LENGTH2")?;
    if t.len() < 3 {
        return Ok(false);
    }
    let mut beyond_length1 = false;
    let mut within_length2 = false;
    for (p, q) in t.offset_pairs(k_pts) {
        let d = distance(p, q);
        beyond_length1 |= d > t.params.length1;
        within_length2 |= d < t.params.length2;
        if beyond_length1 && within_length2 {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rule 12: some pair K_PTS apart farther than LENGTH1 and, independently,
/// some pair K_PTS apart farther than LENGTH2.
fn lic12(t: &Trajectory) -> Result<bool> {
    let k_pts = require_offset(t.params.k_pts, "K_PTS")?;
    let mut beyond_length1 = false;
    let mut beyond_length2 = false;
    for (p, q) in t.offset_pairs(k_pts) {
        let d = distance(p, q);
        beyond_length1 |= d > t.params.length1;
        beyond_length2 |= d > t.params.length2;
        if beyond_length1 && beyond_length2 {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rule 13: some offset triple outside the RADIUS1 centroid circle and,
/// independently, some triple outside the RADIUS2 one.
fn lic13(t: &Trajectory) -> Result<bool> {
    let a_pts = require_offset(t.params.a_pts, "A_PTS")?;
    let b_pts = require_offset(t.params.b_pts, "B_PTS")?;
    let mut beyond_radius1 = false;
    let mut beyond_radius2 = false;
    for (p, q, r) in t.offset_triples(a_pts, b_pts) {
        let radius = centroid_circle_radius(p, q, r);
        beyond_radius1 |= radius > t.params.radius1;
        beyond_radius2 |= radius > t.params.radius2;
        if beyond_radius1 && beyond_radius2 {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rule 14: some offset triple spanning area above AREA1 and, independently,
/// some triple spanning area above AREA2.
fn lic14(t: &Trajectory) -> Result<bool> {
    let e_pts = require_offset(t.params.e_pts, "E_PTS")?;
    let f_pts = require_offset(t.params.f_pts, "F_PTS")?;
    let mut beyond_area1 = false;
    let mut beyond_area2 = false;
    for (p, q, r) in t.offset_triples(e_pts, f_pts) {
        let area = triangle_area(p, q, r);
        beyond_area1 |= area > t.params.area1;
        beyond_area2 |= area > t.params.area2;
        if beyond_area1 && beyond_area2 {
            return Ok(true);
        }
    }
    Ok(false)
}
