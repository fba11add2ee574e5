//! Hit records and the candidates they are registered from

use std::fmt;

use crate::base::{DisplayScore, PValue, Score};

/// Start, end and total length of a matched segment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub from: i32,
    pub to: i32,
    pub length: i32,
}

impl Span {
    pub fn new(from: i32, to: i32, length: i32) -> Self {
        Self { from, to, length }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}/{}", self.from, self.to, self.length)
    }
}

/// Position of a domain among the domains found for the same target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DomainIndex {
    pub index: i32,
    pub count: i32,
}

/// Display lines of an alignment, kept opaque
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    pub model: String,
    pub midline: String,
    pub target: String,
}

/// A registered hit, owned by the hit list
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// Ranking key (higher is better)
    pub score: Score,
    pub pvalue: PValue,
    /// Score as it should be displayed
    pub display_score: DisplayScore,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Segment of the target sequence
    pub sequence: Span,
    /// Segment of the query model
    pub model: Span,
    pub domain: DomainIndex,
    pub alignment: Option<Alignment>,

    /// Registration order, used to break ties when ranking
    pub(crate) ordinal: usize,
}

impl Hit {
    /// Position of this hit in the registration sequence
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn has_alignment(&self) -> bool {
        self.alignment.is_some()
    }
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, score: {}, pvalue: {})",
            self.name.as_deref().unwrap_or("-"),
            self.score,
            self.pvalue
        )
    }
}

/// A candidate hit as produced by a scan
///
/// Borrowed fields are copied when the candidate is registered, so the
/// caller's buffers are free to change afterwards.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
    pub score: Score,
    pub pvalue: PValue,
    pub display_score: DisplayScore,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub sequence: Span,
    pub model: Span,
    pub domain: DomainIndex,
    pub alignment: Option<&'a Alignment>,
}

impl<'a> Candidate<'a> {
    /// A candidate with only a score; the display score follows it
    pub fn new(score: Score) -> Self {
        Self {
            score,
            pvalue: 0.,
            display_score: score as DisplayScore,
            name: None,
            description: None,
            sequence: Span::default(),
            model: Span::default(),
            domain: DomainIndex::default(),
            alignment: None,
        }
    }

    pub fn pvalue(mut self, pvalue: PValue) -> Self {
        self.pvalue = pvalue;
        self
    }

    pub fn display_score(mut self, display_score: DisplayScore) -> Self {
        self.display_score = display_score;
        self
    }

    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn sequence(mut self, sequence: Span) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn model(mut self, model: Span) -> Self {
        self.model = model;
        self
    }

    pub fn domain(mut self, index: i32, count: i32) -> Self {
        self.domain = DomainIndex { index, count };
        self
    }

    pub fn alignment(mut self, alignment: &'a Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Copies the candidate into an owned hit
    pub(crate) fn into_hit(self, ordinal: usize) -> Hit {
        Hit {
            score: self.score,
            pvalue: self.pvalue,
            display_score: self.display_score,
            name: self.name.map(str::to_owned),
            description: self.description.map(str::to_owned),
            sequence: self.sequence,
            model: self.model,
            domain: self.domain,
            alignment: self.alignment.cloned(),
            ordinal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_defaults() {
        let hit = Candidate::new(12.5).into_hit(3);
        assert_eq!(hit.score, 12.5);
        assert_eq!(hit.display_score, 12.5);
        assert_eq!(hit.pvalue, 0.);
        assert_eq!(hit.ordinal(), 3);
        assert!(hit.name.is_none());
        assert!(!hit.has_alignment());
    }

    #[test]
    fn test_candidate_copies_fields() {
        let alignment = Alignment {
            model: "ACDEF".to_string(),
            midline: "AC EF".to_string(),
            target: "ACKEF".to_string(),
        };
        let hit = Candidate::new(3.)
            .pvalue(1e-5)
            .display_score(3.25)
            .name("target")
            .description("a target sequence")
            .sequence(Span::new(10, 42, 300))
            .model(Span::new(1, 33, 33))
            .domain(2, 3)
            .alignment(&alignment)
            .into_hit(0);

        assert_eq!(hit.name.as_deref(), Some("target"));
        assert_eq!(hit.description.as_deref(), Some("a target sequence"));
        assert_eq!(hit.sequence, Span::new(10, 42, 300));
        assert_eq!(hit.model.length, 33);
        assert_eq!(hit.domain, DomainIndex { index: 2, count: 3 });
        assert_eq!(hit.alignment.as_ref(), Some(&alignment));
        assert_eq!(format!("{}", hit), "(target, score: 3, pvalue: 0.00001)");
    }
}
