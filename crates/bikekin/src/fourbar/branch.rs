//! Branch continuity across consecutive solves.
//!
//! The solver is pure and returns both assemblies; whoever animates a
//! mechanism owns a `BranchTracker` and threads it from frame to frame.

use super::types::{Branch, FourBarSolution};
use crate::geom::angular_distance;

/// How to pick a branch when there is no previous frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BranchSeed {
    Fixed(Branch),
    /// Candidate B with the larger x.
    MaxX,
    /// Candidate B with the smaller y.
    MinY,
}

impl BranchSeed {
    fn pick(self, sol: &FourBarSolution) -> Branch {
        let [b1, b2] = sol.b_pos;
        match self {
            BranchSeed::Fixed(b) => b,
            BranchSeed::MaxX if b2.x > b1.x => Branch::Second,
            BranchSeed::MinY if b2.y < b1.y => Branch::Second,
            _ => Branch::First,
        }
    }
}

/// Remembers the follower angle chosen on the previous frame.
#[derive(Clone, Debug)]
pub struct BranchTracker {
    seed: BranchSeed,
    previous: Option<(Branch, f64)>,
}

impl BranchTracker {
    pub fn new(seed: BranchSeed) -> Self {
        Self {
            seed,
            previous: None,
        }
    }

    /// Pick the root nearest the previous frame's θ4 and remember it.
    ///
    /// Ties keep the previous branch label.
    pub fn select(&mut self, sol: &FourBarSolution) -> Branch {
        let chosen = match self.previous {
            None => self.seed.pick(sol),
            Some((last, prev_theta4)) => {
                let d_last = angular_distance(sol.theta4_of(last), prev_theta4);
                let d_other = angular_distance(sol.theta4_of(last.other()), prev_theta4);
                if d_other < d_last {
                    last.other()
                } else {
                    last
                }
            }
        };
        self.previous = Some((chosen, sol.theta4_of(chosen)));
        chosen
    }

    /// Branch and θ4 picked on the last successful `select`.
    pub fn previous(&self) -> Option<(Branch, f64)> {
        self.previous
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}
