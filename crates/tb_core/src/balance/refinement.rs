//! Hill-climbing over same-position swaps.
//!
//! Cost is |sum(A) - sum(B)|. A pass scans (i in A, j in B) in index order and
//! commits the first same-position swap that strictly lowers the cost, then the
//! next pass starts over from (0, 0). The search stops after a pass without a
//! swap, or after `max_passes` passes.
//!
//! Every accepted swap lowers a non-negative integer, so the number of swaps is
//! bounded by the starting cost whatever the ceiling is.

use super::stats;
use crate::models::Player;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Outer pass ceiling used when nothing else is configured.
pub const DEFAULT_MAX_PASSES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementReport {
    pub initial_cost: u32,
    pub final_cost: u32,
    pub swaps: u32,
    /// Outer passes run, including the final one that found nothing.
    pub passes: u32,
    /// False only when the pass ceiling stopped the search.
    pub converged: bool,
}

/// Improve the pair in place. Team sizes and the per-position head count of
/// each team never change.
pub fn refine(team_a: &mut [Player], team_b: &mut [Player], max_passes: u32) -> RefinementReport {
    let mut sum_a = stats::total_stars(team_a) as i64;
    let mut sum_b = stats::total_stars(team_b) as i64;
    let initial_cost = (sum_a - sum_b).unsigned_abs() as u32;

    let mut cost = initial_cost;
    let mut swaps = 0;
    let mut passes = 0;
    let mut converged = false;

    while passes < max_passes {
        passes += 1;

        match find_improving_swap(team_a, team_b, sum_a, sum_b, cost) {
            Some((i, j, new_cost)) => {
                let delta = team_b[j].stars() as i64 - team_a[i].stars() as i64;
                sum_a += delta;
                sum_b -= delta;
                std::mem::swap(&mut team_a[i], &mut team_b[j]);

                trace!(
                    "swap #{}: {} <-> {} ({}), cost {} -> {}",
                    swaps + 1,
                    team_b[j].name(),
                    team_a[i].name(),
                    team_a[i].position(),
                    cost,
                    new_cost
                );

                cost = new_cost;
                swaps += 1;
            }
            None => {
                converged = true;
                break;
            }
        }
    }

    if !converged {
        warn!("refinement stopped at the {} pass ceiling with cost {}", max_passes, cost);
    }

    RefinementReport { initial_cost, final_cost: cost, swaps, passes, converged }
}

/// First (i, j) in scan order whose swap strictly lowers `cost`, with the cost
/// it would leave.
fn find_improving_swap(
    team_a: &[Player],
    team_b: &[Player],
    sum_a: i64,
    sum_b: i64,
    cost: u32,
) -> Option<(usize, usize, u32)> {
    for (i, pa) in team_a.iter().enumerate() {
        for (j, pb) in team_b.iter().enumerate() {
            if pa.position() != pb.position() {
                continue;
            }
            let delta = pb.stars() as i64 - pa.stars() as i64;
            let new_cost = ((sum_a + delta) - (sum_b - delta)).unsigned_abs() as u32;
            if new_cost < cost {
                return Some((i, j, new_cost));
            }
        }
    }
    None
}
