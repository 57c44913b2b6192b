/*!
Reduction of a sequence of truth vectors to a single vector, by [composition](crate::procedures::compose), left to right.

For vectors *v*<sub>1</sub>, …, *v*<sub>*k*</sub> the reduction is compose(… compose(compose(*v*<sub>1</sub>, *v*<sub>2</sub>), *v*<sub>3</sub>) …, *v*<sub>*k*</sub>).
- The reduction of a single vector is the vector.
- The reduction of no vectors is nothing.

As each composition of two binary connectives adds one to the arity, the reduction of *k* binary connectives has arity *k* + 1.
And, as the length of a vector is exponential in its arity, a limit is given on the arity of any composition made.

```rust
# use pvo::codec::decode;
# use pvo::procedures::reduce::reduce;
let and = decode("tfff").unwrap();

let conjunction = reduce(vec![and.clone(), and.clone(), and.clone()], 8).unwrap();
assert_eq!(conjunction.unwrap().to_string(), "tfff.ffff.ffff.ffff");

assert!(reduce(vec![and.clone(); 8], 8).is_err());
assert_eq!(reduce(Vec::new(), 8), Ok(None));
```
*/

use crate::{
    misc::log::targets::{self},
    procedures::compose::{compose, composed_arity},
    structures::truth_vector::TruthVector,
    types::err::{self},
};

/// The left to right composition of `vectors`, so long as no composition exceeds an arity of `arity_limit`.
pub fn reduce(
    vectors: impl IntoIterator<Item = TruthVector>,
    arity_limit: usize,
) -> Result<Option<TruthVector>, err::CompositionError> {
    let mut vectors = vectors.into_iter();

    let Some(mut reduction) = vectors.next() else {
        return Ok(None);
    };

    for vector in vectors {
        let arity = composed_arity(&reduction, &vector);
        if arity > arity_limit {
            log::debug!(target: targets::COMPOSITION, "Reduction halted at arity {arity}");
            return Err(err::CompositionError::ArityExceeded {
                arity,
                limit: arity_limit,
            });
        }

        reduction = compose(&reduction, &vector)?;
    }

    Ok(Some(reduction))
}
