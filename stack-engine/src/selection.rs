//! Slot-by-slot selection and backfill.
//!
//! Slots are filled in plan order from the eligible catalog view. Within a
//! slot, the top-ranked candidates form a window and a deterministic rotation
//! of the selection offset chooses which consecutive run of the window to
//! take. Repeated calls with different offsets therefore give distinct but
//! reproducible stacks.

use std::collections::HashSet;

use crate::constraints::EligibilityPolicy;
use crate::goals::GoalPlan;
use crate::scoring::{rank, ScoredCandidate};
use crate::types::CompoundRecord;

/// Minimum window of candidates considered per slot.
const MIN_WINDOW: usize = 6;
/// Stacks smaller than this are topped up from the eligible pool.
const BACKFILL_TARGET: usize = 3;
/// Upper bound on the backfill rotation.
const BACKFILL_ROTATION: usize = 6;

pub const BACKFILL_REASONING: &str =
    "Added to round out the stack based on overall evidence and safety.";

/// A compound picked during selection.
#[derive(Debug, Clone)]
pub struct Pick<'a> {
    pub compound: &'a CompoundRecord,
    /// Slot that produced the pick; `None` for backfill
    pub slot_id: Option<&'static str>,
    pub reasoning: &'static str,
}

/// Window start for a slot.
///
/// `offset mod (window - count + 1)` when the window is larger than the
/// count, otherwise 0.
pub fn rotation_start(offset: usize, window: usize, count: usize) -> usize {
    if window > count {
        offset % (window - count + 1)
    } else {
        0
    }
}

/// Fill the plan's slots in order.
pub fn select_slots<'a>(
    plan: &GoalPlan,
    eligible: &[&'a CompoundRecord],
    policy: &EligibilityPolicy,
    max_compounds: usize,
    selection_offset: usize,
) -> Vec<Pick<'a>> {
    let mut picks: Vec<Pick<'a>> = Vec::new();
    let mut used: HashSet<&str> = HashSet::new();
    let mut offset = selection_offset;

    for slot in plan.slots {
        if picks.len() >= max_compounds {
            break;
        }

        // Gated and zero-count slots do not advance the rotation phase.
        let count = slot.count_for(policy.tier);
        if count == 0 {
            continue;
        }

        let candidates = eligible
            .iter()
            .copied()
            .filter(|c| slot.accepts(c.category) && !used.contains(c.id.as_str()));
        let ranked: Vec<ScoredCandidate<'a>> =
            rank(candidates, slot.keywords, policy.budget_preferred);

        let window = ranked.len().min((count + 1).max(MIN_WINDOW));
        let start = rotation_start(offset, window, count);
        let take = count.min(max_compounds - picks.len());

        let chosen: Vec<&'a CompoundRecord> = ranked[..window]
            .iter()
            .skip(start)
            .take(take)
            .map(|c| c.compound)
            .collect();

        tracing::debug!(
            slot = slot.id,
            candidates = ranked.len(),
            window,
            start,
            picked = chosen.len(),
            "Filled slot"
        );

        for compound in chosen {
            used.insert(compound.id.as_str());
            picks.push(Pick {
                compound,
                slot_id: Some(slot.id),
                reasoning: slot.reasoning,
            });
        }
        offset = offset.wrapping_add(1);
    }

    picks
}

/// Top up an under-filled selection from the whole eligible pool.
///
/// Runs only when fewer than `min(3, max_compounds)` compounds were picked.
/// The full pool is ranked without keywords and walked from
/// `offset mod min(pool size, 6)`, wrapping around and skipping compounds
/// that are already in the stack.
pub fn backfill<'a>(
    picks: &mut Vec<Pick<'a>>,
    eligible: &[&'a CompoundRecord],
    policy: &EligibilityPolicy,
    max_compounds: usize,
    selection_offset: usize,
) {
    let target = BACKFILL_TARGET.min(max_compounds);
    if picks.len() >= target {
        return;
    }

    let pool = rank(eligible.iter().copied(), &[], policy.budget_preferred);
    if pool.is_empty() {
        tracing::debug!(have = picks.len(), target, "Backfill pool is empty");
        return;
    }

    let mut used: HashSet<&'a str> = picks
        .iter()
        .map(|p| p.compound)
        .map(|c| c.id.as_str())
        .collect();
    let rotation = selection_offset % pool.len().min(BACKFILL_ROTATION);
    let before = picks.len();
    for i in 0..pool.len() {
        if picks.len() >= target {
            break;
        }
        let compound = pool[(rotation + i) % pool.len()].compound;
        if !used.insert(compound.id.as_str()) {
            continue;
        }
        picks.push(Pick {
            compound,
            slot_id: None,
            reasoning: BACKFILL_REASONING,
        });
    }

    tracing::debug!(added = picks.len() - before, rotation, "Backfilled stack");
}
