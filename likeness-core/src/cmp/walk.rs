// likeness-core - Recursive comparison walker
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The recursive decision tree shared by every relation.

use im::Vector;
use likeness_value::{Kind, Record, Value};
use tracing::debug;

use super::Outcome;
use super::multiset;
use super::relation::{Correspondence, Relation};
use crate::limits::Limits;

pub(crate) struct Walk<'r, R> {
    relation: &'r R,
    max_depth: usize,
    exhausted: bool,
}

impl<'r, R: Relation> Walk<'r, R> {
    /// Relate `lhs` to `rhs` under `relation`.
    pub(crate) fn run(relation: &'r R, limits: Limits, lhs: &Value, rhs: &Value) -> Outcome {
        let mut walk = Walk {
            relation,
            max_depth: limits.max_depth,
            exhausted: false,
        };
        let outcome = walk.relate(lhs, rhs, 0);
        if walk.exhausted {
            debug!(
                max_depth = limits.max_depth,
                "comparison exceeded depth limit"
            );
            Outcome::Incomparable
        } else {
            outcome
        }
    }

    fn relate(&mut self, lhs: &Value, rhs: &Value, depth: usize) -> Outcome {
        if self.exhausted {
            return Outcome::Incomparable;
        }
        if depth > self.max_depth {
            self.exhausted = true;
            return Outcome::Incomparable;
        }
        if self.relation.wildcards() && matches!(rhs, Value::Any) {
            return Outcome::Equivalent;
        }

        match (lhs, rhs) {
            (Value::Callable(a), Value::Callable(b)) => return self.relation.callables(a, b),
            (Value::Callable(_), _) | (_, Value::Callable(_)) => return Outcome::Incomparable,
            _ => {}
        }

        let (lhs_kind, rhs_kind) = (lhs.kind(), rhs.kind());
        match (lhs_kind.is_composite(), rhs_kind.is_composite()) {
            (true, false) | (false, true) => return Outcome::Incomparable,
            (false, false) => {
                return match (lhs_kind, rhs_kind) {
                    (Kind::Null, Kind::Null) => Outcome::Equivalent,
                    (Kind::Null, _) | (_, Kind::Null) => Outcome::NotEquivalent,
                    _ => self.relation.primitives(lhs, rhs),
                };
            }
            (true, true) => {}
        }
        if lhs_kind != rhs_kind {
            return Outcome::Incomparable;
        }

        let related = match (lhs, rhs) {
            (Value::Seq(a), Value::Seq(b)) | (Value::Set(a), Value::Set(b)) => {
                self.elements(a, b, depth)
            }
            (Value::Map(a), Value::Map(b)) => self.entries(a, b, depth),
            (Value::Timestamp(_), Value::Timestamp(_)) | (Value::Pending(_), Value::Pending(_)) => {
                true
            }
            (Value::Record(a), Value::Record(b)) => self.records(a, b, depth),
            (Value::Boxed(a), Value::Boxed(b)) => self.holds(a, b, depth),
            _ => false,
        };
        Outcome::from_bool(related)
    }

    /// Nested outcome collapsed to a yes/no answer.
    fn holds(&mut self, lhs: &Value, rhs: &Value, depth: usize) -> bool {
        self.relate(lhs, rhs, depth + 1) == Outcome::Equivalent
    }

    fn correspond<F>(&mut self, lhs_len: usize, rhs_len: usize, mut related: F) -> bool
    where
        F: FnMut(&mut Self, usize, usize) -> bool,
    {
        match self.relation.correspondence() {
            Correspondence::OneToOne => {
                multiset::one_to_one(lhs_len, rhs_len, |i, j| related(self, i, j))
            }
            Correspondence::Covering => {
                multiset::covering(lhs_len, rhs_len, |i, j| related(self, i, j))
            }
        }
    }

    fn elements(&mut self, lhs: &Vector<Value>, rhs: &Vector<Value>, depth: usize) -> bool {
        self.correspond(lhs.len(), rhs.len(), |walk, i, j| {
            walk.holds(&lhs[i], &rhs[j], depth)
        })
    }

    fn entries(
        &mut self,
        lhs: &Vector<(Value, Value)>,
        rhs: &Vector<(Value, Value)>,
        depth: usize,
    ) -> bool {
        self.correspond(lhs.len(), rhs.len(), |walk, i, j| {
            let (lhs_key, lhs_value) = &lhs[i];
            let (rhs_key, rhs_value) = &rhs[j];
            walk.holds(lhs_key, rhs_key, depth) && walk.holds(lhs_value, rhs_value, depth)
        })
    }

    /// Equal key sets over counted fields, then each key's values relate.
    ///
    /// A pattern-side wildcard always counts, so it can stand for a field
    /// holding a callable.
    fn records(&mut self, lhs: &Record, rhs: &Record, depth: usize) -> bool {
        let relation = self.relation;
        let wildcard = |value: Option<&Value>| {
            relation.wildcards() && matches!(value, Some(Value::Any))
        };
        let counted: Vec<(&str, &Value)> = lhs
            .iter()
            .filter(|(key, value)| relation.counts_field(value) || wildcard(rhs.get(key)))
            .collect();
        let rhs_counted = rhs
            .iter()
            .filter(|(_, value)| relation.counts_field(value) || wildcard(Some(*value)))
            .count();
        if counted.len() != rhs_counted {
            return false;
        }
        counted.into_iter().all(|(key, value)| match rhs.get(key) {
            Some(other) if relation.counts_field(other) || wildcard(Some(other)) => {
                self.holds(value, other, depth)
            }
            _ => false,
        })
    }
}
