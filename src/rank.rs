//! Full ranking of a hit list

use std::cmp::Ordering;

use log::debug;

use crate::hit::Hit;
use crate::tophits::TopHits;

/// Orders hits by decreasing score, then by registration order
///
/// NaN scores go after every number and `-0.0` ties with `0.0`, so the
/// order is total and a ranking never depends on the order the hits
/// were in before.
pub fn score_order(a: &Hit, b: &Hit) -> Ordering {
    let by_score = match (a.score.is_nan(), b.score.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal),
    };
    by_score.then_with(|| a.ordinal.cmp(&b.ordinal))
}

/// Sorts hits with [`score_order`]
pub fn sort_hits(hits: &mut [Hit]) {
    // The comparator is total, an unstable sort gives the same result
    hits.sort_unstable_by(score_order);
}

impl TopHits {
    /// Sorts the whole list by decreasing score
    ///
    /// Equal scores are ordered by registration. Each call counts as one
    /// sort, even if the list was already ordered.
    pub fn rank_all(&mut self) {
        sort_hits(&mut self.hits);
        self.sorts += 1;
        debug!(
            "Ranked {} hits (sort #{}, best {})",
            self.hits.len(),
            self.sorts,
            self.best
        );
    }
}
