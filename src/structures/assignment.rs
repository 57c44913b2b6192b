/*!
An assignment of truth values to the inputs of some function.

The canonical representation of an assignment is a vector of booleans, where the value of the *i*th input is the *i*th element.

# Canonical order

Assignments of a fixed arity *n* are ordered by *descending* binary value, reading the first input as the most significant bit.
For two inputs the order is:

| position | first | second |
|----------|-------|--------|
| 0        | true  | true   |
| 1        | true  | false  |
| 2        | false | true   |
| 3        | false | false  |

Each position of a [truth vector](crate::structures::truth_vector) is the value of the function at the assignment in the same position of the canonical order.
The literal truth table codes are written against this order, and so it is fixed.

```rust
# use pvo::structures::assignment::{assignment_at, position_of};
assert_eq!(assignment_at(2, 1), vec![true, false]);
assert_eq!(position_of(&[false, true]), 2);
assert_eq!(position_of(&[]), 0);
```
*/

/// The canonical representation of an assignment.
pub type Assignment = Vec<bool>;

/// The count of assignments of the given arity.
pub fn assignment_count(arity: usize) -> usize {
    1 << arity
}

/// The position of an assignment in the canonical order over assignments of the same length.
pub fn position_of(assignment: &[bool]) -> usize {
    let value = assignment
        .iter()
        .fold(0_usize, |value, bit| (value << 1) | usize::from(*bit));

    (assignment_count(assignment.len()) - 1) - value
}

/// The assignment at the given position of the canonical order over assignments of the given arity.
///
/// The position is expected to be less than the [count](assignment_count) of assignments of the arity.
pub fn assignment_at(arity: usize, position: usize) -> Assignment {
    let value = (assignment_count(arity) - 1) - position;

    (0..arity)
        .rev()
        .map(|shift| (value >> shift) & 1 == 1)
        .collect()
}
