use std::collections::BTreeSet;

use log::debug;

use crate::expression::{Expression, Notation};

/// Receives every expression the search finds equal to the target
pub trait SolutionSink {
    /// Offer a solved expression. Returns `true` if its text had not been
    /// seen before.
    fn add(&mut self, expression: &Expression) -> bool;
}

/// Format a solution line as `"<expression> = <target>"`
pub fn format_solution(text: &str, target: f64) -> String {
    format!("{} = {}", text, target)
}

/// Collects the distinct rendered solutions of one query
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    notation: Notation,
    pool: BTreeSet<String>,
}

impl Aggregator {
    pub fn new(notation: Notation) -> Self {
        Self {
            notation,
            pool: BTreeSet::new(),
        }
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Record already-rendered text. Returns `true` if it was new.
    pub fn insert(&mut self, text: String) -> bool {
        self.pool.insert(text)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.pool.contains(text)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Fold another aggregator's solutions into this one
    pub fn merge(&mut self, other: Aggregator) {
        self.pool.extend(other.pool);
    }

    /// The unique solutions in lexicographic order
    pub fn solutions(&self) -> Vec<String> {
        self.pool.iter().cloned().collect()
    }

    pub fn into_solutions(self) -> Vec<String> {
        self.pool.into_iter().collect()
    }
}

impl SolutionSink for Aggregator {
    fn add(&mut self, expression: &Expression) -> bool {
        let text = expression.render(self.notation);
        let added = self.insert(text);
        if added {
            debug!("New solution: {}", expression);
        }
        added
    }
}

/// An [`Aggregator`] that also hands each new solution to a callback as
/// soon as it is found
pub struct StreamingAggregator<F>
where
    F: FnMut(&str),
{
    inner: Aggregator,
    on_new: F,
}

impl<F> StreamingAggregator<F>
where
    F: FnMut(&str),
{
    pub fn new(notation: Notation, on_new: F) -> Self {
        Self {
            inner: Aggregator::new(notation),
            on_new,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_inner(self) -> Aggregator {
        self.inner
    }
}

impl<F> SolutionSink for StreamingAggregator<F>
where
    F: FnMut(&str),
{
    fn add(&mut self, expression: &Expression) -> bool {
        let text = expression.render(self.inner.notation());
        if self.inner.contains(&text) {
            return false;
        }
        debug!("New solution: {}", text);
        (self.on_new)(&text);
        self.inner.insert(text)
    }
}
