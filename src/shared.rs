//! Hit list shared by several scanning threads
//!
//! Threads register hits concurrently during the collection phase; the
//! list is then taken back with [`SharedTopHits::into_inner`] to be
//! selected or ranked by a single thread.

use std::sync::{Mutex, MutexGuard};

use crate::{
    base::{Len, Score},
    error::Result,
    hit::Candidate,
    tophits::TopHits,
};

pub struct SharedTopHits {
    inner: Mutex<TopHits>,
}

impl SharedTopHits {
    pub fn new(hits: TopHits) -> Self {
        Self {
            inner: Mutex::new(hits),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TopHits> {
        // Poisoning is ignored: a registration pushes a whole hit or nothing
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn register(&self, candidate: Candidate<'_>) -> Result<()> {
        self.lock().register(candidate)
    }

    pub fn best_score(&self) -> Score {
        self.lock().best_score()
    }

    /// Ends the collection phase
    pub fn into_inner(self) -> TopHits {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl Len for SharedTopHits {
    fn len(&self) -> usize {
        self.lock().len()
    }
}

impl From<TopHits> for SharedTopHits {
    fn from(hits: TopHits) -> Self {
        Self::new(hits)
    }
}
