//! Main data structure holding the hits of a search

use derivative::Derivative;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    base::{Rank, Score},
    error::{Result, TopHitsError},
    hit::{Candidate, Hit},
};

#[derive(Derivative, Serialize, Deserialize, Clone, Debug)]
#[derivative(Default)]
#[serde(default)]
pub struct TopHitsOptions {
    /// Number of hits that are reported, and hence must be exactly
    /// identified by a selection pass
    #[derivative(Default(value = "100"))]
    pub report_limit: usize,

    /// Number of reported hits that keep their alignment
    #[derivative(Default(value = "10"))]
    pub alignment_limit: usize,
}

/// A growable list of hits
///
/// Hits are kept in registration order until [`TopHits::select_top`] or
/// [`TopHits::rank_all`] reorders them.
#[derive(Debug, Clone)]
pub struct TopHits {
    pub(crate) hits: Vec<Hit>,
    pub(crate) report_limit: usize,
    pub(crate) alignment_limit: usize,
    /// Number of full sorts so far
    pub(crate) sorts: usize,
    /// Best score so far
    pub(crate) best: Score,
}

impl TopHits {
    /// Creates an empty hit list
    ///
    /// ## Arguments
    ///
    /// * `report_limit` Number of hits to report (must be positive)
    /// * `alignment_limit` Number of reported hits that keep their alignment
    pub fn new(report_limit: usize, alignment_limit: usize) -> Result<Self> {
        if report_limit == 0 {
            return Err(TopHitsError::InvalidConfig {
                reason: "the report limit must be positive".to_string(),
            });
        }

        Ok(Self {
            hits: Vec::new(),
            report_limit,
            alignment_limit,
            sorts: 0,
            best: Score::NEG_INFINITY,
        })
    }

    pub fn with_options(options: &TopHitsOptions) -> Result<Self> {
        Self::new(options.report_limit, options.alignment_limit)
    }

    /// Adds a hit at the end of the list
    ///
    /// Name, description and alignment are copied. The best score is
    /// updated whatever the current order of the list.
    pub fn register(&mut self, candidate: Candidate<'_>) -> Result<()> {
        if self.hits.len() == self.hits.capacity() {
            let requested = self.hits.len() + 1;
            self.hits
                .try_reserve(1)
                .map_err(|_| TopHitsError::OutOfMemory { requested })?;
            trace!("Hit storage grown to {} slots", self.hits.capacity());
        }

        let hit = candidate.into_hit(self.hits.len());
        if hit.score > self.best {
            self.best = hit.score;
        }
        self.hits.push(hit);
        Ok(())
    }

    /// Returns the hit currently at this rank
    pub fn get(&self, rank: Rank) -> Result<&Hit> {
        self.hits.get(rank).ok_or(TopHitsError::OutOfRange {
            rank,
            count: self.hits.len(),
        })
    }

    /// Iterates over the hits in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, Hit> {
        self.hits.iter()
    }

    /// The first `min(H, len)` ranks
    pub fn reported(&self) -> &[Hit] {
        &self.hits[..self.reported_len()]
    }

    fn reported_len(&self) -> usize {
        self.report_limit.min(self.hits.len())
    }

    /// Lowest score among the reported ranks
    ///
    /// Once a selection or ranking pass has been done, any hit scoring
    /// below this value can't enter the report.
    pub fn threshold(&self) -> Option<Score> {
        self.reported()
            .iter()
            .map(|hit| hit.score)
            .reduce(Score::min)
    }

    /// Drops the alignments of the hits ranked after the alignment limit
    ///
    /// Returns the number of alignments that were released.
    pub fn trim_alignments(&mut self) -> usize {
        let mut released = 0;
        for hit in self.hits.iter_mut().skip(self.alignment_limit) {
            if hit.alignment.take().is_some() {
                released += 1;
            }
        }
        debug!(
            "Released {} alignments beyond rank {}",
            released, self.alignment_limit
        );
        released
    }

    /// Removes all the hits
    ///
    /// Limits and the number of sorts are kept.
    pub fn clear(&mut self) {
        self.hits.clear();
        self.best = Score::NEG_INFINITY;
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn report_limit(&self) -> usize {
        self.report_limit
    }

    pub fn alignment_limit(&self) -> usize {
        self.alignment_limit
    }

    pub fn sort_count(&self) -> usize {
        self.sorts
    }

    /// Best score registered so far (-inf if none)
    pub fn best_score(&self) -> Score {
        self.best
    }
}

impl<'a> IntoIterator for &'a TopHits {
    type Item = &'a Hit;
    type IntoIter = std::slice::Iter<'a, Hit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for TopHits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(hits: {}, H: {}, A: {}, sorts: {}, best: {})",
            self.hits.len(),
            self.report_limit,
            self.alignment_limit,
            self.sorts,
            self.best
        )
    }
}
