/*!
Composition of truth vectors.

The composition of *f* (of arity *a*) with *g* (of arity *b*) is a vector of arity *a* + *b* - 1, whose inputs are split between *f* and *g*:
- *f* receives the trailing *a* inputs.
- *g* receives the leading *b* - 1 inputs, followed by the output of *f*.

In other words, the composition at *x*<sub>1</sub> … *x*<sub>*a*+*b*-1</sub> is

  *g*(*x*<sub>1</sub>, …, *x*<sub>*b*-1</sub>, *f*(*x*<sub>*b*</sub>, …, *x*<sub>*a*+*b*-1</sub>))

So, the output of *f* is threaded through as the final input of *g*.

The composition is not defined when *g* is a constant (has arity 0), as there is no input to thread the output of *f* through.
Though, *f* may be a constant, in which case each input of the composition is an input to *g*, other than the last input of *g* which is fixed to the value of *f*.

```rust
# use pvo::codec::decode;
# use pvo::procedures::compose::compose;
let and = decode("tfff").unwrap();
let or = decode("tttf").unwrap();

// x ∨ (y ∧ z)
let composed = compose(&and, &or).unwrap();
assert_eq!(composed.arity(), 3);
assert_eq!(composed.to_string(), "tttt.tfff");

// ¬¬x
let not = decode("ft").unwrap();
assert_eq!(compose(&not, &not).unwrap(), decode("tf").unwrap());
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{assignment::position_of, truth_vector::TruthVector},
    types::err::{self},
};

/// The composition of `inner` into the final input of `outer`.
pub fn compose(
    inner: &TruthVector,
    outer: &TruthVector,
) -> Result<TruthVector, err::CompositionError> {
    if outer.arity() == 0 {
        return Err(err::CompositionError::ConstantOuter);
    }

    let arity = composed_arity(inner, outer);

    log::trace!(target: targets::COMPOSITION, "Composing {inner} into {outer} at arity {arity}");

    let mut outer_input = Vec::with_capacity(outer.arity());

    let composed = TruthVector::from_fn(arity, |assignment| {
        let (leading, trailing) = assignment.split_at(assignment.len() - inner.arity());

        // Lengths of `trailing` and `outer_input` match the arity of the vector they are positioned in.
        let threaded = inner.values()[position_of(trailing)];

        outer_input.clear();
        outer_input.extend_from_slice(leading);
        outer_input.push(threaded);

        outer.values()[position_of(&outer_input)]
    });

    Ok(composed)
}

/// The arity of the composition of `inner` into `outer`, for an outer vector of arity at least one.
pub fn composed_arity(inner: &TruthVector, outer: &TruthVector) -> usize {
    (inner.arity() + outer.arity()).saturating_sub(1)
}
