/*!
Enumeration of all assignments of some arity, in [canonical order](crate::structures::assignment).

```rust
# use pvo::procedures::enumerate::enumerate;
assert_eq!(
    enumerate(2),
    vec![
        vec![true, true],
        vec![true, false],
        vec![false, true],
        vec![false, false],
    ]
);

// A single empty assignment to a constant.
assert_eq!(enumerate(0), vec![Vec::<bool>::new()]);
```
*/

use crate::structures::assignment::{assignment_at, assignment_count, Assignment};

/// An iterator over each assignment of a fixed arity, in canonical order.
pub struct Assignments {
    arity: usize,
    position: usize,
    count: usize,
}

impl Assignments {
    pub fn of_arity(arity: usize) -> Self {
        Assignments {
            arity,
            position: 0,
            count: assignment_count(arity),
        }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.count {
            return None;
        }

        let assignment = assignment_at(self.arity, self.position);
        self.position += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

/// Every assignment of the given arity, in canonical order.
pub fn enumerate(arity: usize) -> Vec<Assignment> {
    Assignments::of_arity(arity).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn complete_and_distinct() {
        for arity in 0..10 {
            let assignments = enumerate(arity);
            assert_eq!(assignments.len(), 1 << arity);
            assert!(assignments.iter().all(|a| a.len() == arity));

            let distinct = assignments.iter().collect::<HashSet<_>>();
            assert_eq!(distinct.len(), assignments.len());
        }
    }

    #[test]
    fn descending_order() {
        let as_value = |a: &Assignment| a.iter().fold(0, |v, b| (v << 1) | usize::from(*b));

        let values = enumerate(4).iter().map(as_value).collect::<Vec<_>>();
        assert_eq!(values, (0..16).rev().collect::<Vec<_>>());
    }

    #[test]
    fn exact_size() {
        let mut assignments = Assignments::of_arity(3);
        assert_eq!(assignments.len(), 8);
        assignments.next();
        assert_eq!(assignments.len(), 7);
    }
}
