// likeness-core - Multiset correspondence
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Order-insensitive element correspondence.
//!
//! Elements are addressed by index, so a falsy element (`false`, `0`, `""`,
//! absent, null) found by a search counts as found like any other.

use std::collections::HashMap;

/// Relation oracle with memoised answers.
struct Memo<F> {
    related: F,
    seen: HashMap<(usize, usize), bool>,
}

impl<F: FnMut(usize, usize) -> bool> Memo<F> {
    fn new(related: F) -> Self {
        Memo {
            related,
            seen: HashMap::new(),
        }
    }

    fn related(&mut self, left: usize, right: usize) -> bool {
        if let Some(&known) = self.seen.get(&(left, right)) {
            return known;
        }
        let result = (self.related)(left, right);
        self.seen.insert((left, right), result);
        result
    }
}

/// Returns true if a perfect one-to-one correspondence exists between the
/// left and right elements.
///
/// Every left element is paired with a distinct right element it relates
/// to, so duplicates are never counted twice. Pairs are found with
/// augmenting paths, which also handles relations that are not
/// equivalences (a wildcard pattern relates to everything).
pub(crate) fn one_to_one<F>(lhs_len: usize, rhs_len: usize, related: F) -> bool
where
    F: FnMut(usize, usize) -> bool,
{
    if lhs_len != rhs_len {
        return false;
    }
    let mut memo = Memo::new(related);

    // Same order on both sides is the common case
    if (0..lhs_len).all(|i| memo.related(i, i)) {
        return true;
    }

    let mut owner: Vec<Option<usize>> = vec![None; rhs_len];
    for left in 0..lhs_len {
        let mut visited = vec![false; rhs_len];
        if !augment(left, &mut memo, &mut owner, &mut visited) {
            return false;
        }
    }
    true
}

struct Frame {
    left: usize,
    next: usize,
}

/// Search for an augmenting path from `start`, reassigning owners along it.
///
/// Iterative so long sequences cannot exhaust the stack.
fn augment<F>(
    start: usize,
    memo: &mut Memo<F>,
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool
where
    F: FnMut(usize, usize) -> bool,
{
    let rhs_len = owner.len();
    let mut stack = vec![Frame {
        left: start,
        next: 0,
    }];
    // path[k] is the right element claimed by stack[k]
    let mut path: Vec<usize> = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let left = frame.left;
        let mut claimed = None;
        while frame.next < rhs_len {
            let right = frame.next;
            frame.next += 1;
            if !visited[right] && memo.related(left, right) {
                visited[right] = true;
                claimed = Some(right);
                break;
            }
        }

        match claimed {
            None => {
                stack.pop();
                path.pop();
            }
            Some(right) => {
                path.push(right);
                match owner[right] {
                    None => {
                        for (frame, &right) in stack.iter().zip(path.iter()) {
                            owner[right] = Some(frame.left);
                        }
                        return true;
                    }
                    Some(previous) => stack.push(Frame {
                        left: previous,
                        next: 0,
                    }),
                }
            }
        }
    }
    false
}

/// Returns true if every left element relates to some right element and
/// every right element relates to some left element.
///
/// Lengths may differ and one element may cover many.
pub(crate) fn covering<F>(lhs_len: usize, rhs_len: usize, related: F) -> bool
where
    F: FnMut(usize, usize) -> bool,
{
    let mut memo = Memo::new(related);
    let left_covered = (0..lhs_len).all(|i| (0..rhs_len).any(|j| memo.related(i, j)));
    if !left_covered {
        return false;
    }
    (0..rhs_len).all(|j| (0..lhs_len).any(|i| memo.related(i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same(lhs: &[i32], rhs: &[i32]) -> bool {
        one_to_one(lhs.len(), rhs.len(), |i, j| lhs[i] == rhs[j])
    }

    #[test]
    fn test_permutations() {
        assert!(same(&[1, 2, 3], &[3, 2, 1]));
        assert!(same(&[], &[]));
        assert!(!same(&[1, 2], &[1, 2, 3]));
    }

    #[test]
    fn test_duplicates_are_not_double_counted() {
        assert!(!same(&[1, 1, 2], &[1, 2, 2]));
        assert!(same(&[1, 1, 2], &[2, 1, 1]));
    }

    #[test]
    fn test_falsy_elements_are_found() {
        assert!(same(&[0, 1], &[1, 0]));
        assert!(same(&[0, 0], &[0, 0]));
    }

    #[test]
    fn test_asymmetric_relation_needs_reassignment() {
        // -1 on the right stands for "anything"; greedy would give it to 1
        // and then fail on 2.
        let lhs = [1, 2];
        let rhs = [-1, 1];
        assert!(one_to_one(2, 2, |i, j| rhs[j] == -1 || lhs[i] == rhs[j]));
    }

    #[test]
    fn test_long_chain_of_reassignments() {
        // left i relates to right i and right i + 1; claimed in reverse.
        let n = 2_000;
        assert!(one_to_one(n, n, |i, j| j == i || j == i + 1));
    }

    #[test]
    fn test_covering() {
        let lhs = [1, 1, 2];
        let rhs = [2, 1];
        assert!(covering(3, 2, |i, j| lhs[i] == rhs[j]));
        assert!(!covering(3, 1, |i, _| lhs[i] == 1));
        assert!(covering(0, 0, |_, _| false));
        assert!(!covering(0, 1, |_, _| true));
    }
}
