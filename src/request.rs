/*!
Requests, read from a single line of input.

A line is read as:

```text
<name> [<name> ...] [- <assignment>]
```

- Each `.` and `,` is removed before the line is read.
- Names are separated by whitespace, and each is [resolved](crate::dictionary) to a truth vector.
- The vectors are [reduced](crate::procedures::reduce) to a single vector.
- If an assignment follows a `-` the reduced vector is [evaluated](crate::procedures::evaluate) at the assignment.

In addition, a line of `?` or `help` is a request for the dictionary, and a line without names is empty.

```rust
# use pvo::dictionary::Dictionary;
# use pvo::request::{parse_request, Request};
let dictionary = Dictionary::standard();

let Ok(Request::Evaluate(expression)) = parse_request("and or - ftt") else {
    panic!("a request to evaluate");
};
let outcome = expression.evaluate(&dictionary, 20).unwrap().unwrap();
assert_eq!(outcome.vector.to_string(), "tttt.tfff");
assert_eq!(outcome.value, Some(true));

assert_eq!(parse_request(" ? "), Ok(Request::Help));
assert_eq!(parse_request(""), Ok(Request::Empty));
```
*/

use crate::{
    codec,
    dictionary::{Dictionary, Resolution},
    misc::log::targets::{self},
    procedures::{evaluate::evaluate, reduce::reduce},
    structures::{assignment::Assignment, truth_vector::TruthVector},
    types::err::{self, ErrorKind},
};

/// Characters removed from a line before the line is read.
pub const IGNORED_CHARACTERS: [char; 2] = ['.', ','];

/// The separator between names and an assignment.
pub const ASSIGNMENT_SEPARATOR: char = '-';

/// Lines read as a request for the dictionary.
pub const HELP_REQUESTS: [&str; 2] = ["?", "help"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// Nothing to do.
    Empty,

    /// Write the dictionary.
    Help,

    /// Resolve, reduce, and perhaps evaluate an expression.
    Evaluate(Expression),
}

/// A (non-empty) sequence of names, and perhaps an assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    names: Vec<String>,
    assignment: Option<Assignment>,
}

/// The result of evaluating an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The resolution of each name, in order.
    pub resolutions: Vec<Resolution>,

    /// The reduction of the resolved vectors.
    pub vector: TruthVector,

    /// The value of the reduced vector at the assignment, if an assignment was given.
    pub value: Option<bool>,
}

/// The request made by `line`.
pub fn parse_request(line: &str) -> Result<Request, ErrorKind> {
    let line = line.replace(IGNORED_CHARACTERS, "");
    let line = line.trim();

    if HELP_REQUESTS.contains(&line) {
        return Ok(Request::Help);
    }

    let mut parts = line.split(ASSIGNMENT_SEPARATOR);
    let names_part = parts.next().unwrap_or_default();
    let assignment_part = parts.next();

    if parts.next().is_some() {
        return Err(err::RequestError::MultipleAssignments.into());
    }

    let assignment = match assignment_part {
        Some(written) => Some(codec::decode_assignment(written.trim())?),
        None => None,
    };

    let names = names_part
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();

    if names.is_empty() {
        return Ok(Request::Empty);
    }

    log::trace!(target: targets::REQUEST, "Names {names:?} with assignment {assignment:?}");

    Ok(Request::Evaluate(Expression { names, assignment }))
}

impl Expression {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn assignment(&self) -> Option<&[bool]> {
        self.assignment.as_deref()
    }

    /// Resolves each name, reduces the resolved vectors, and evaluates the reduction at the assignment, if given.
    ///
    /// Either each step succeeds, or nothing is returned.
    pub fn evaluate(
        &self,
        dictionary: &Dictionary,
        arity_limit: usize,
    ) -> Result<Option<Outcome>, ErrorKind> {
        let resolutions = self
            .names
            .iter()
            .map(|name| dictionary.resolve_traced(name))
            .collect::<Result<Vec<_>, _>>()?;

        let vectors = resolutions.iter().map(|resolution| resolution.vector.clone());

        let Some(vector) = reduce(vectors, arity_limit)? else {
            return Ok(None);
        };

        let value = match &self.assignment {
            Some(assignment) => Some(evaluate(&vector, assignment)?),
            None => None,
        };

        Ok(Some(Outcome {
            resolutions,
            vector,
            value,
        }))
    }
}
