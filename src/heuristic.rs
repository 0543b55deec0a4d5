//! Distance estimates used by the informed searches. Every built-in is pure, never negative,
//! and zero when both positions coincide.
use core::fmt;
use std::f64::consts::SQRT_2;
use std::str::FromStr;

use crate::error::SearchError;
use crate::Position;

/// Estimated remaining cost from a position to the goal. Implemented for every
/// `Fn(Position, Position) -> f64`, so plain functions and closures can be passed directly.
pub trait Heuristic {
    fn estimate(&self, pos: Position, goal: Position) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Position, Position) -> f64,
{
    fn estimate(&self, pos: Position, goal: Position) -> f64 {
        self(pos, goal)
    }
}

/// L1 distance. Admissible and consistent for 4-directional unit-cost movement.
pub fn manhattan(a: Position, b: Position) -> f64 {
    let (dr, dc) = a.delta(&b);
    (dr + dc) as f64
}

/// L2 distance. Admissible for any movement model used here.
pub fn euclidean(a: Position, b: Position) -> f64 {
    let (dr, dc) = a.delta(&b);
    (dr as f64).hypot(dc as f64)
}

/// L-infinity distance. Only admissible if a diagonal step costs the same as a straight one.
pub fn chebyshev(a: Position, b: Position) -> f64 {
    let (dr, dc) = a.delta(&b);
    dr.max(dc) as f64
}

/// Octile distance with straight cost 1 and diagonal cost √2: as many diagonal steps as
/// possible, then straight.
pub fn octile(a: Position, b: Position) -> f64 {
    let (dr, dc) = a.delta(&b);
    let (lo, hi) = (dr.min(dc) as f64, dr.max(dc) as f64);
    (hi - lo) + SQRT_2 * lo
}

/// Turns A* into uniform-cost search.
pub fn zero(_: Position, _: Position) -> f64 {
    0.0
}

/// Scales another heuristic. Weights above 1 make A* greedier and give up optimality.
#[derive(Clone, Copy, Debug)]
pub struct Weighted<H> {
    base: H,
    weight: f64,
}

impl<H: Heuristic> Weighted<H> {
    /// Fails unless `weight` is finite and non-negative, so the estimate stays a valid
    /// heuristic value.
    pub fn new(base: H, weight: f64) -> Result<Weighted<H>, SearchError> {
        if weight.is_finite() && weight >= 0.0 {
            Ok(Weighted { base, weight })
        } else {
            Err(SearchError::InvalidWeight(weight))
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn base(&self) -> &H {
        &self.base
    }
}

impl<H: Heuristic> Heuristic for Weighted<H> {
    fn estimate(&self, pos: Position, goal: Position) -> f64 {
        self.weight * self.base.estimate(pos, goal)
    }
}

/// Names for the built-in heuristics, for callers that select one from user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
    Zero,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 5] = [
        HeuristicKind::Manhattan,
        HeuristicKind::Euclidean,
        HeuristicKind::Chebyshev,
        HeuristicKind::Octile,
        HeuristicKind::Zero,
    ];

    pub fn function(self) -> fn(Position, Position) -> f64 {
        match self {
            HeuristicKind::Manhattan => manhattan,
            HeuristicKind::Euclidean => euclidean,
            HeuristicKind::Chebyshev => chebyshev,
            HeuristicKind::Octile => octile,
            HeuristicKind::Zero => zero,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => "Manhattan",
            HeuristicKind::Euclidean => "Euclidean",
            HeuristicKind::Chebyshev => "Chebyshev",
            HeuristicKind::Octile => "Octile",
            HeuristicKind::Zero => "Zero",
        }
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, pos: Position, goal: Position) -> f64 {
        self.function()(pos, goal)
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeuristicKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownHeuristic(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Position = Position::new(2, 3);
    const B: Position = Position::new(8, 7);

    #[test]
    fn distances() {
        assert_eq!(manhattan(A, B), 10.0);
        assert!((euclidean(A, B) - 52f64.sqrt()).abs() < 1e-12);
        assert_eq!(chebyshev(A, B), 6.0);
        assert!((octile(A, B) - (2.0 + 4.0 * SQRT_2)).abs() < 1e-12);
        assert_eq!(zero(A, B), 0.0);
    }

    #[test]
    fn symmetric_and_zero_at_goal() {
        for kind in HeuristicKind::ALL {
            assert_eq!(kind.estimate(B, B), 0.0);
            assert_eq!(kind.estimate(A, B), kind.estimate(B, A));
            assert!(kind.estimate(A, B) >= 0.0);
        }
    }

    /// On any pair, chebyshev <= euclidean <= octile <= manhattan.
    #[test]
    fn dominance_order() {
        for (r, c) in [(0, 0), (3, 1), (-4, 4), (0, 9), (7, -2)] {
            let p = Position::new(r, c);
            let o = Position::new(0, 0);
            assert!(chebyshev(p, o) <= euclidean(p, o) + 1e-12);
            assert!(euclidean(p, o) <= octile(p, o) + 1e-12);
            assert!(octile(p, o) <= manhattan(p, o) + 1e-12);
        }
    }

    #[test]
    fn closures_and_weights() {
        let custom = |a: Position, b: Position| 2.0 * manhattan(a, b);
        assert_eq!(custom.estimate(A, B), 20.0);
        assert_eq!(Weighted::new(manhattan, 1.5).unwrap().estimate(A, B), 15.0);
    }

    #[test]
    fn weights_must_be_finite_and_non_negative() {
        assert!(matches!(
            Weighted::new(manhattan, -5.0),
            Err(SearchError::InvalidWeight(w)) if w == -5.0
        ));
        assert!(Weighted::new(manhattan, f64::NAN).is_err());
        assert!(Weighted::new(manhattan, f64::INFINITY).is_err());
        let flat = Weighted::new(HeuristicKind::Euclidean, 0.0).unwrap();
        assert_eq!(flat.weight(), 0.0);
        assert_eq!(flat.estimate(A, B), 0.0);
        assert_eq!(*flat.base(), HeuristicKind::Euclidean);
    }

    #[test]
    fn parse_names() {
        assert_eq!("manhattan".parse::<HeuristicKind>(), Ok(HeuristicKind::Manhattan));
        assert_eq!(" Euclidean ".parse::<HeuristicKind>(), Ok(HeuristicKind::Euclidean));
        assert_eq!(
            "taxicab".parse::<HeuristicKind>(),
            Err(SearchError::UnknownHeuristic("taxicab".to_owned()))
        );
    }
}
