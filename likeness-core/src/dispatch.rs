// likeness-core - Pattern dispatch
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Pattern dispatch: pick the first arm whose pattern a value satisfies.
//!
//! An arm pairs one or more patterns with a thunk. Arms are tried in
//! declaration order, and within an arm its patterns are tried in order;
//! the first pattern the value satisfies runs that arm's thunk. When no
//! pattern matches, the default arm runs with the original value and the
//! comparison subject.
//!
//! A deferred arm builds its patterns from the subject at dispatch time,
//! which lets a pattern refer to parts of the value being matched.
//!
//! ```
//! use likeness_core::{match_value, Arm, Value};
//!
//! let label = match_value(
//!     &Value::int(2),
//!     [
//!         Arm::new([Value::int(1)], || "one"),
//!         Arm::new([Value::int(2), Value::int(3)], || "two or three"),
//!     ],
//!     |_, _| "other",
//! );
//! assert_eq!(label, "two or three");
//! ```

use likeness_value::Value;
use tracing::{debug, trace};

use crate::cmp::Comparator;

/// Deferred computation run when an arm is chosen.
pub type Thunk<'a, A> = Box<dyn FnOnce() -> A + 'a>;

type Builder<'a, A> = Box<dyn FnOnce(&Value) -> Arm<'a, A> + 'a>;

// ============================================================================
// Arms
// ============================================================================

/// One dispatch arm.
pub struct Arm<'a, A> {
    inner: ArmInner<'a, A>,
}

enum ArmInner<'a, A> {
    Ready {
        patterns: Vec<Value>,
        thunk: Thunk<'a, A>,
    },
    Deferred(Builder<'a, A>),
}

impl<'a, A> Arm<'a, A> {
    /// Arm matching any of `patterns`.
    pub fn new<P, F>(patterns: P, thunk: F) -> Self
    where
        P: IntoIterator<Item = Value>,
        F: FnOnce() -> A + 'a,
    {
        Arm {
            inner: ArmInner::Ready {
                patterns: patterns.into_iter().collect(),
                thunk: Box::new(thunk),
            },
        }
    }

    /// Arm with a single pattern.
    pub fn single<F>(pattern: Value, thunk: F) -> Self
    where
        F: FnOnce() -> A + 'a,
    {
        Arm::new([pattern], thunk)
    }

    /// Arm built from the comparison subject when dispatch runs.
    pub fn deferred<F>(build: F) -> Self
    where
        F: FnOnce(&Value) -> Arm<'a, A> + 'a,
    {
        Arm {
            inner: ArmInner::Deferred(Box::new(build)),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self.inner, ArmInner::Deferred(_))
    }

    /// Resolve deferred builders until concrete patterns appear.
    fn resolve(self, subject: &Value) -> (Vec<Value>, Thunk<'a, A>) {
        let mut arm = self;
        loop {
            match arm.inner {
                ArmInner::Ready { patterns, thunk } => return (patterns, thunk),
                ArmInner::Deferred(build) => arm = build(subject),
            }
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Which arm a value selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Arm `arm` matched through its pattern at index `pattern`
    Found { arm: usize, pattern: usize },
    /// No pattern matched
    Default,
}

/// Builder for a dispatch over arms.
///
/// ```
/// use likeness_core::{Dispatch, MatchOutcome, Value};
///
/// let value = Value::seq(vec![Value::int(1), Value::int(2)]);
/// let outcome = Dispatch::<&str>::new()
///     .arm([Value::int(1)], || "one")
///     .arm([Value::seq(vec![Value::any(), Value::int(1)])], || "pair")
///     .select(&value);
/// assert_eq!(outcome, MatchOutcome::Found { arm: 1, pattern: 0 });
/// ```
pub struct Dispatch<'a, A> {
    arms: Vec<Arm<'a, A>>,
    comparator: Comparator,
}

/// Resolved arms: patterns and thunk per arm, in declaration order.
type Resolved<'a, A> = Vec<(Vec<Value>, Thunk<'a, A>)>;

impl<'a, A> Dispatch<'a, A> {
    /// Empty dispatch using this thread's default limits.
    pub fn new() -> Self {
        Dispatch {
            arms: Vec::new(),
            comparator: Comparator::current(),
        }
    }

    pub fn from_arms<I>(arms: I) -> Self
    where
        I: IntoIterator<Item = Arm<'a, A>>,
    {
        Dispatch {
            arms: arms.into_iter().collect(),
            comparator: Comparator::current(),
        }
    }

    /// Use `comparator` to test patterns.
    pub fn with_comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn arm<P, F>(self, patterns: P, thunk: F) -> Self
    where
        P: IntoIterator<Item = Value>,
        F: FnOnce() -> A + 'a,
    {
        self.push(Arm::new(patterns, thunk))
    }

    pub fn deferred<F>(self, build: F) -> Self
    where
        F: FnOnce(&Value) -> Arm<'a, A> + 'a,
    {
        self.push(Arm::deferred(build))
    }

    pub fn push(mut self, arm: Arm<'a, A>) -> Self {
        self.arms.push(arm);
        self
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Run the first matching arm, or `default(value, subject)`.
    pub fn run<D>(self, value: &Value, default: D) -> A
    where
        D: FnOnce(&Value, &Value) -> A,
    {
        if value.is_callable() {
            debug!("callable scrutinee, running default arm");
            return default(value, value);
        }
        let subject = value.unboxed();
        let comparator = self.comparator;
        let mut resolved = self.resolve(subject);

        match find(&comparator, value, &resolved) {
            MatchOutcome::Found { arm, pattern } => {
                trace!(arm, pattern, "arm matched");
                let (_, thunk) = resolved.swap_remove(arm);
                thunk()
            }
            MatchOutcome::Default => {
                trace!(arms = resolved.len(), "no arm matched, running default");
                default(value, subject)
            }
        }
    }

    /// Report which arm `value` selects without running any thunk.
    ///
    /// Deferred arms are still resolved against the subject.
    pub fn select(self, value: &Value) -> MatchOutcome {
        if value.is_callable() {
            return MatchOutcome::Default;
        }
        let comparator = self.comparator;
        let resolved = self.resolve(value.unboxed());
        find(&comparator, value, &resolved)
    }

    fn resolve(self, subject: &Value) -> Resolved<'a, A> {
        self.arms
            .into_iter()
            .map(|arm| arm.resolve(subject))
            .collect()
    }
}

impl<A> Default for Dispatch<'_, A> {
    fn default() -> Self {
        Dispatch::new()
    }
}

fn find<A>(comparator: &Comparator, value: &Value, resolved: &Resolved<'_, A>) -> MatchOutcome {
    let flattened: Vec<(usize, usize, &Value)> = resolved
        .iter()
        .enumerate()
        .flat_map(|(arm, (patterns, _))| {
            patterns
                .iter()
                .enumerate()
                .map(move |(pattern, p)| (arm, pattern, p))
        })
        .collect();

    flattened
        .into_iter()
        .find(|(_, _, pattern)| comparator.satisfies(value, pattern))
        .map_or(MatchOutcome::Default, |(arm, pattern, _)| {
            MatchOutcome::Found { arm, pattern }
        })
}

// ============================================================================
// Entry points
// ============================================================================

/// Run the first arm whose pattern `value` satisfies, or `default`.
///
/// `default` receives the original value and the comparison subject (the
/// value with one layer of boxing removed).
pub fn match_value<'a, A, I, D>(value: &Value, arms: I, default: D) -> A
where
    I: IntoIterator<Item = Arm<'a, A>>,
    D: FnOnce(&Value, &Value) -> A,
{
    Dispatch::from_arms(arms).run(value, default)
}

/// Like [`match_value`], with the arms computed from the value.
pub fn match_with<'a, A, M, I, D>(value: &Value, arms: M, default: D) -> A
where
    M: FnOnce(&Value) -> I,
    I: IntoIterator<Item = Arm<'a, A>>,
    D: FnOnce(&Value, &Value) -> A,
{
    match_value(value, arms(value), default)
}

/// Run `then` on the subject if `value` satisfies the pattern `projector`
/// builds from it.
pub fn if_let<P, T, F>(projector: P, value: &Value, then: T) -> Option<F>
where
    P: FnOnce(&Value) -> Value,
    T: FnOnce(&Value) -> F,
{
    let subject = value.unboxed();
    let pattern = projector(subject);
    if crate::satisfies(value, &pattern) {
        Some(then(subject))
    } else {
        None
    }
}

/// [`if_let`] with an else branch.
pub fn if_let_else<P, T, O, F>(projector: P, value: &Value, then: T, otherwise: O) -> F
where
    P: FnOnce(&Value) -> Value,
    T: FnOnce(&Value) -> F,
    O: FnOnce(&Value) -> F,
{
    let subject = value.unboxed();
    let pattern = projector(subject);
    if crate::satisfies(value, &pattern) {
        then(subject)
    } else {
        otherwise(subject)
    }
}

/// Run `then` if `value` satisfies any of `patterns`, else `otherwise`.
pub fn branch<P, T, O, A>(value: &Value, patterns: P, then: T, otherwise: O) -> A
where
    P: IntoIterator<Item = Value>,
    T: FnOnce() -> A,
    O: FnOnce() -> A,
{
    let comparator = Comparator::current();
    if patterns
        .into_iter()
        .any(|pattern| comparator.satisfies(value, &pattern))
    {
        then()
    } else {
        otherwise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_first_match_wins() {
        let label = match_value(
            &Value::int(1),
            [
                Arm::new([Value::int(1)], || "one"),
                Arm::new([Value::int(1), Value::int(2)], || "either"),
            ],
            |_, _| "default",
        );
        assert_eq!(label, "one");
    }

    #[test]
    fn test_default_receives_value_and_subject() {
        let boxed = Value::boxed(Value::int(5));
        let (value, subject) = match_value(
            &boxed,
            [Arm::single(Value::int(1), || (Value::null(), Value::null()))],
            |value, subject| (value.clone(), subject.clone()),
        );
        assert_eq!(value, boxed);
        assert_eq!(subject, Value::int(5));
    }

    #[test]
    fn test_only_chosen_thunk_runs() {
        let runs = Cell::new(0);
        let result = Dispatch::new()
            .arm([Value::int(1)], || {
                runs.set(runs.get() + 1);
                "one"
            })
            .arm([Value::int(2)], || {
                runs.set(runs.get() + 10);
                "two"
            })
            .run(&Value::int(2), |_, _| "default");
        assert_eq!(result, "two");
        assert_eq!(runs.get(), 10);
    }

    #[test]
    fn test_nested_deferred_arms() {
        let arm = Arm::deferred(|subject: &Value| {
            let subject = subject.clone();
            Arm::deferred(move |_: &Value| Arm::single(subject, || "self"))
        });
        assert!(arm.is_deferred());
        let outcome = Dispatch::from_arms([arm]).select(&Value::text("x"));
        assert_eq!(outcome, MatchOutcome::Found { arm: 0, pattern: 0 });
    }

    #[test]
    fn test_empty_dispatch() {
        let dispatch: Dispatch<'_, i32> = Dispatch::default();
        assert!(dispatch.is_empty());
        assert_eq!(dispatch.run(&Value::int(1), |_, _| 7), 7);
    }
}
