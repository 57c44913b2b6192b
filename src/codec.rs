/*!
Reading and writing truth vectors and assignments as strings of [truth symbols](crate::structures::symbol).

# Truth vectors

A truth vector is written with one symbol for each value, in canonical order, left to right.
For readability the symbols are grouped in blocks of four, counted from the right, and joined by a [BLOCK_DELIMITER].

```rust
# use pvo::codec::{decode, encode};
let vector = decode("tttttfff").unwrap();
assert_eq!(encode(&vector), "tttt.tfff");
assert_eq!(decode("tttt.tfff").unwrap(), vector);

let xor = decode("fttf").unwrap();
assert_eq!(encode(&xor), "fttf");
```

Grouping does not change the order of symbols, and so decoding skips the delimiter.

# Assignments

An assignment is written as one symbol for each input, with no delimiter.
In addition, an assignment to a single input may be written as a [word](crate::structures::symbol::WORD_SPELLINGS).
*/

use crate::{
    misc::log::targets::{self},
    structures::{assignment::Assignment, symbol::TruthSymbol, truth_vector::TruthVector},
    types::err::{self},
};

/// The character placed between blocks of an encoded vector.
pub const BLOCK_DELIMITER: char = '.';

/// The count of symbols in a (full) block of an encoded vector.
pub const BLOCK_WIDTH: usize = 4;

/// The truth vector written by `code`.
pub fn decode(code: &str) -> Result<TruthVector, err::CodecError> {
    let mut values = Vec::with_capacity(code.len());

    for c in code.chars().filter(|c| *c != BLOCK_DELIMITER) {
        match TruthSymbol::from_char(c) {
            Some(symbol) => values.push(symbol.into()),

            None => {
                log::trace!(target: targets::CODEC, "Invalid symbol {c:?} in {code:?}");
                return Err(err::CodecError::InvalidSymbol(c));
            }
        }
    }

    TruthVector::from_values(values)
}

/// The written form of a truth vector, in blocks counted from the right.
pub fn encode(vector: &TruthVector) -> String {
    let symbols = vector
        .values()
        .iter()
        .map(|value| TruthSymbol::from(*value).as_char())
        .collect::<Vec<_>>();

    let lead = match symbols.len() % BLOCK_WIDTH {
        0 => BLOCK_WIDTH.min(symbols.len()),
        partial => partial,
    };

    let (head, tail) = symbols.split_at(lead);

    let mut encoding = String::with_capacity(symbols.len() + symbols.len() / BLOCK_WIDTH);
    encoding.extend(head);
    for block in tail.chunks(BLOCK_WIDTH) {
        encoding.push(BLOCK_DELIMITER);
        encoding.extend(block);
    }

    encoding
}

/// The assignment written by `s`.
pub fn decode_assignment(s: &str) -> Result<Assignment, err::CodecError> {
    if let Some(symbol) = TruthSymbol::from_word(s) {
        return Ok(vec![symbol.into()]);
    }

    s.chars()
        .map(|c| match TruthSymbol::from_char(c) {
            Some(symbol) => Ok(symbol.into()),
            None => Err(err::CodecError::InvalidSymbol(c)),
        })
        .collect()
}

/// True if every character of `code` is a truth symbol (or the block delimiter), and some character is a symbol.
///
/// Such a code is read as a literal vector, if not otherwise defined.
pub fn is_literal(code: &str) -> bool {
    code.chars().any(|c| TruthSymbol::from_char(c).is_some())
        && code
            .chars()
            .all(|c| c == BLOCK_DELIMITER || TruthSymbol::from_char(c).is_some())
}
