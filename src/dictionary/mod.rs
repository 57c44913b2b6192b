/*!
A dictionary of connectives, and the resolution of names to truth vectors.

The dictionary holds two tables:
- The truth table, from a code to the written form of a binary connective.
- The alias table, from a friendly name to a code.

The standard tables are given in [stdenv], and further aliases may be defined through [config](crate::config).
Aliases of the unary connectives and of the constants name a literal truth vector, as the truth table holds only binary connectives.

# Resolution

A name is resolved in (at most) two hops:
1. If the name is an alias, the name is replaced by the code of the alias.
2. If the (replaced) name is a code of the truth table, the name is replaced by the written form of the code.

What remains is read as a [literal](crate::codec::is_literal) truth vector.
So, a truth vector may also be given directly, e.g. `ft` for negation, or `t` for a constant.

```rust
# use pvo::dictionary::Dictionary;
let dictionary = Dictionary::standard();

let resolution = dictionary.resolve_traced("and").unwrap();
assert_eq!(resolution.vector.to_string(), "tfff");
assert_eq!(resolution.hops.len(), 2);

assert_eq!(dictionary.resolve("kpq").unwrap().to_string(), "tfff");
assert_eq!(dictionary.resolve("ft").unwrap().to_string(), "ft");
assert!(dictionary.resolve("zzzz").is_err());
```
*/

pub mod stdenv;

use crate::{
    codec,
    misc::log::targets::{self},
    structures::truth_vector::TruthVector,
    types::err::{self, ErrorKind},
};

/// Characters which may not appear in the name of an alias, as a request could never contain the name.
const RESERVED_CHARACTERS: [char; 3] = ['-', '.', ','];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    table: Vec<(String, String)>,
    aliases: Vec<(String, String)>,
}

/// A single replacement made during resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hop {
    pub from: String,
    pub to: String,
}

impl std::fmt::Display for Hop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.from, self.to)
    }
}

/// A resolved truth vector, together with the hops taken to resolve the vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub hops: Vec<Hop>,
    pub vector: TruthVector,
}

impl Dictionary {
    /// A dictionary with the [standard tables](stdenv).
    pub fn standard() -> Self {
        let owned = |(key, value): &(&str, &str)| (key.to_string(), value.to_string());

        Dictionary {
            table: stdenv::TRUTH_TABLE.iter().map(owned).collect(),
            aliases: stdenv::ALIASES
                .iter()
                .chain(stdenv::LITERAL_ALIASES.iter())
                .map(owned)
                .collect(),
        }
    }

    /// The code of an alias, if defined.
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(alias, _)| alias == name)
            .map(|(_, code)| code.as_str())
    }

    /// The written form of a code of the truth table, if defined.
    pub fn code(&self, code: &str) -> Option<&str> {
        self.table
            .iter()
            .find(|(key, _)| key == code)
            .map(|(_, written)| written.as_str())
    }

    /// Entries of the truth table, in order of definition.
    pub fn table_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries of the alias table, in order of definition.
    pub fn alias_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Defines `name` as an alias of `code`, replacing any existing definition of `name`.
    ///
    /// The alias must resolve, and so `code` must be either a code of the truth table or a literal truth vector.
    pub fn define_alias(&mut self, name: &str, code: &str) -> Result<(), err::ConfigError> {
        let alias_error = || err::ConfigError::Alias {
            name: name.to_string(),
            code: code.to_string(),
        };

        if name.is_empty()
            || name.contains(char::is_whitespace)
            || name.contains(RESERVED_CHARACTERS)
        {
            return Err(alias_error());
        }

        let written = self.code(code).unwrap_or(code);
        if !codec::is_literal(written) || codec::decode(written).is_err() {
            return Err(alias_error());
        }

        log::debug!(target: targets::RESOLUTION, "Alias defined: {name} = {code}");

        match self.aliases.iter_mut().find(|(alias, _)| alias == name) {
            Some(entry) => entry.1 = code.to_string(),
            None => self.aliases.push((name.to_string(), code.to_string())),
        }

        Ok(())
    }

    /// The truth vector named by `name`.
    pub fn resolve(&self, name: &str) -> Result<TruthVector, ErrorKind> {
        self.resolve_traced(name).map(|resolution| resolution.vector)
    }

    /// The truth vector named by `name`, together with each hop taken.
    pub fn resolve_traced(&self, name: &str) -> Result<Resolution, ErrorKind> {
        let mut hops = Vec::default();
        let mut current = name;

        if let Some(code) = self.alias(current) {
            hops.push(Hop {
                from: current.to_string(),
                to: code.to_string(),
            });
            current = code;
        }

        if let Some(written) = self.code(current) {
            hops.push(Hop {
                from: current.to_string(),
                to: written.to_string(),
            });
            current = written;
        }

        if !codec::is_literal(current) {
            log::debug!(target: targets::RESOLUTION, "Unknown connective: {name}");
            return Err(err::ResolveError::UnknownConnective(name.to_string()).into());
        }

        let vector = codec::decode(current)?;

        for hop in &hops {
            log::trace!(target: targets::RESOLUTION, "{hop}");
        }

        Ok(Resolution { hops, vector })
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::standard()
    }
}
