//! Fast selection of the best hits
//!
//! Selection only moves the `H` best hits in front of the others, which
//! takes expected linear time instead of the `n log n` of a full ranking.

use log::debug;

use crate::hit::Hit;
use crate::rank::score_order;
use crate::tophits::TopHits;

/// Moves the `top` best hits to the front of the slice
///
/// Neither the front block nor the remainder is ordered. Returns the
/// size of the front block.
pub fn partition_top(hits: &mut [Hit], top: usize) -> usize {
    if top == 0 {
        return 0;
    }
    if top >= hits.len() {
        return hits.len();
    }

    // Everything before the pivot compares less or equal, i.e. scores higher
    hits.select_nth_unstable_by(top - 1, score_order);
    top
}

impl TopHits {
    /// Guarantees that the first `min(H, len)` ranks hold the best hits
    ///
    /// The order inside the reported block, and inside the rest of the
    /// list, is left unspecified.
    pub fn select_top(&mut self) {
        let reported = partition_top(&mut self.hits, self.report_limit);
        debug!(
            "Selected the {} best hits out of {}",
            reported,
            self.hits.len()
        );
    }
}
