/*!
Truth symbols, the written form of a truth value.

A truth value is written with a single character, or when written alone, as a word:

| value | characters | words   |
|-------|------------|---------|
| true  | `t`, `1`   | `true`  |
| false | `f`, `0`   | `false` |

Only `t` and `f` are ever written by the library.

```rust
# use pvo::structures::symbol::TruthSymbol;
assert_eq!(TruthSymbol::from_char('1'), Some(TruthSymbol::True));
assert_eq!(TruthSymbol::from_word("false"), Some(TruthSymbol::False));
assert_eq!(TruthSymbol::from_char('x'), None);
assert_eq!(TruthSymbol::from(true).as_char(), 't');
```
*/

/// One of the two truth values, as read from (or written to) text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TruthSymbol {
    True,
    False,
}

/// Each character accepted as a truth symbol.
pub const CHARACTER_SPELLINGS: [(char, TruthSymbol); 4] = [
    ('t', TruthSymbol::True),
    ('1', TruthSymbol::True),
    ('f', TruthSymbol::False),
    ('0', TruthSymbol::False),
];

/// Each word accepted as a truth symbol, when the word is the whole of some input.
pub const WORD_SPELLINGS: [(&str, TruthSymbol); 2] =
    [("true", TruthSymbol::True), ("false", TruthSymbol::False)];

impl TruthSymbol {
    pub fn from_char(c: char) -> Option<Self> {
        CHARACTER_SPELLINGS
            .iter()
            .find(|(spelling, _)| *spelling == c)
            .map(|(_, symbol)| *symbol)
    }

    pub fn from_word(word: &str) -> Option<Self> {
        WORD_SPELLINGS
            .iter()
            .find(|(spelling, _)| *spelling == word)
            .map(|(_, symbol)| *symbol)
    }

    /// The character used when writing the symbol.
    pub fn as_char(&self) -> char {
        match self {
            Self::True => 't',
            Self::False => 'f',
        }
    }

    /// All spellings of the symbol, characters first.
    pub fn spellings(&self) -> Vec<String> {
        let characters = CHARACTER_SPELLINGS
            .iter()
            .filter(|(_, symbol)| symbol == self)
            .map(|(c, _)| c.to_string());
        let words = WORD_SPELLINGS
            .iter()
            .filter(|(_, symbol)| symbol == self)
            .map(|(w, _)| w.to_string());
        characters.chain(words).collect()
    }
}

impl From<bool> for TruthSymbol {
    fn from(value: bool) -> Self {
        match value {
            true => Self::True,
            false => Self::False,
        }
    }
}

impl From<TruthSymbol> for bool {
    fn from(symbol: TruthSymbol) -> Self {
        matches!(symbol, TruthSymbol::True)
    }
}

impl std::fmt::Display for TruthSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellings_are_disjoint() {
        for (c, symbol) in CHARACTER_SPELLINGS {
            assert_eq!(TruthSymbol::from_char(c), Some(symbol));
        }
        assert_eq!(TruthSymbol::True.spellings(), vec!["t", "1", "true"]);
        assert_eq!(TruthSymbol::False.spellings(), vec!["f", "0", "false"]);
    }

    #[test]
    fn words_are_not_characters() {
        assert_eq!(TruthSymbol::from_char('T'), None);
        assert_eq!(TruthSymbol::from_word("t"), None);
        assert_eq!(TruthSymbol::from_word("True"), None);
    }
}
