//! Bounded ranking of scored hits.
//!
//! A [`TopHits`] list accepts any number of scored candidates and can
//! either cheaply guarantee that its first `H` ranks hold the `H` best
//! hits ([`TopHits::select_top`]) or fully order every hit by score
//! ([`TopHits::rank_all`]).

pub mod base;
pub mod error;
pub mod hit;
pub mod rank;
pub mod select;
pub mod shared;
pub mod tophits;

pub use error::{Result, TopHitsError};
pub use hit::{Alignment, Candidate, DomainIndex, Hit, Span};
pub use shared::SharedTopHits;
pub use tophits::{TopHits, TopHitsOptions};
