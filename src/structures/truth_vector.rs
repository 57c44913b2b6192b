/*!
A truth vector, the complete table of outputs of a boolean function.

A truth vector of arity *n* has length 2<sup>*n*</sup>, and the value at each position is the output of the function at the assignment in the same position of the [canonical order](crate::structures::assignment).
So, the length of a truth vector is always a power of two, and a vector of length one is a constant (a function of no inputs).

```rust
# use pvo::structures::truth_vector::TruthVector;
let and = TruthVector::from_values(vec![true, false, false, false]).unwrap();
assert_eq!(and.arity(), 2);

assert!(TruthVector::from_values(vec![true, false, true]).is_err());
assert!(TruthVector::from_values(vec![]).is_err());
```
*/

use crate::{
    codec,
    structures::assignment::{assignment_at, assignment_count},
    types::err::{self},
};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TruthVector {
    arity: usize,
    values: Vec<bool>,
}

impl TruthVector {
    /// A truth vector from outputs listed in canonical order.
    pub fn from_values(values: Vec<bool>) -> Result<Self, err::CodecError> {
        if !values.len().is_power_of_two() {
            return Err(err::CodecError::InvalidLength(values.len()));
        }

        Ok(TruthVector {
            arity: values.len().trailing_zeros() as usize,
            values,
        })
    }

    /// The function of no inputs with the given value.
    pub fn constant(value: bool) -> Self {
        TruthVector {
            arity: 0,
            values: vec![value],
        }
    }

    /// The truth vector of arity `arity` whose value at each assignment is given by `f`.
    ///
    /// `f` is called once for each assignment, in canonical order.
    pub fn from_fn(arity: usize, mut f: impl FnMut(&[bool]) -> bool) -> Self {
        let values = (0..assignment_count(arity))
            .map(|position| f(&assignment_at(arity, position)))
            .collect();

        TruthVector { arity, values }
    }

    /// The number of inputs to the function.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false, as every vector has at least one value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The outputs of the function, in canonical order.
    pub fn values(&self) -> &[bool] {
        &self.values
    }
}

impl std::fmt::Display for TruthVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", codec::encode(self))
    }
}
