/*!
Evaluation of a truth vector at an assignment.

The value of a vector at an assignment is the value at the position of the assignment in the [canonical order](crate::structures::assignment).
As the canonical order is a bijection between positions and assignments, the position is computed from the assignment directly, rather than found by search of an [enumeration](crate::procedures::enumerate).

```rust
# use pvo::codec::decode;
# use pvo::procedures::evaluate::evaluate;
let xor = decode("fttf").unwrap();
assert_eq!(evaluate(&xor, &[true, false]), Ok(true));
assert_eq!(evaluate(&xor, &[true, true]), Ok(false));
assert!(evaluate(&xor, &[true]).is_err());
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{assignment::position_of, truth_vector::TruthVector},
    types::err::{self},
};

/// The value of `vector` at `assignment`.
///
/// Fails only if the length of the assignment differs from the arity of the vector.
pub fn evaluate(vector: &TruthVector, assignment: &[bool]) -> Result<bool, err::EvaluationError> {
    if assignment.len() != vector.arity() {
        log::trace!(target: targets::EVALUATION, "Arity {} for assignment of {}", vector.arity(), assignment.len());
        return Err(err::EvaluationError::ArityMismatch {
            expected: vector.arity(),
            found: assignment.len(),
        });
    }

    // An assignment of length equal to the arity has a position less than the length of the vector.
    Ok(vector.values()[position_of(assignment)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codec::decode, procedures::enumerate::enumerate};

    #[test]
    fn agrees_with_enumeration() {
        let vector = decode("tfft.fttf.ffft.tttf").unwrap();

        for (position, assignment) in enumerate(4).iter().enumerate() {
            assert_eq!(
                evaluate(&vector, assignment),
                Ok(vector.values()[position])
            );
        }
    }

    #[test]
    fn every_assignment_of_each_arity() {
        for arity in 0..6 {
            let vector = TruthVector::from_fn(arity, |assignment| {
                assignment.iter().filter(|b| **b).count() % 2 == 0
            });

            for (position, assignment) in enumerate(arity).iter().enumerate() {
                assert_eq!(
                    evaluate(&vector, assignment),
                    Ok(vector.values()[position])
                );
            }
        }
    }

    #[test]
    fn constant() {
        let top = TruthVector::constant(true);
        assert_eq!(evaluate(&top, &[]), Ok(true));
        assert_eq!(
            evaluate(&top, &[false]),
            Err(err::EvaluationError::ArityMismatch {
                expected: 0,
                found: 1
            })
        );
    }

    #[test]
    fn and() {
        let and = decode("tfff").unwrap();
        assert_eq!(evaluate(&and, &[true, true]), Ok(true));
        assert_eq!(evaluate(&and, &[true, false]), Ok(false));
        assert_eq!(evaluate(&and, &[false, true]), Ok(false));
        assert_eq!(evaluate(&and, &[false, false]), Ok(false));
    }
}
