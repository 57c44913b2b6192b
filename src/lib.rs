//! A library for evaluating two-valued connectives given as truth tables, and for composing connectives into functions of more inputs.
//!
//! pvo is built around a single representation of a boolean function, the [truth vector](structures::truth_vector): the list of outputs of the function, one for each assignment to its inputs, in a fixed [canonical order](structures::assignment).
//!
//! # Orientation
//!
//! - Truth vectors are read from, and written as, strings of truth symbols by the [codec].
//! - Names of connectives are resolved to truth vectors through a [dictionary], by alias, by code, or as a literal vector.
//! - The [procedures] enumerate assignments, evaluate a vector at an assignment, and compose vectors.
//! - A line of input is read as a [request], and a [session](repl) handles requests one line at a time.
//!
//! # Composition
//!
//! The composition of vectors is particular to the library.
//! The output of the first vector is threaded through as the final input of the second vector, and the remaining inputs of the composition are split between the two vectors (see [procedures::compose]).
//! Composition is applied left to right over each name of a request, and so a request of *k* binary connectives is a function of *k* + 1 inputs.
//!
//! # Examples
//!
//! + Resolve, compose, and evaluate.
//!
//! ```rust
//! # use pvo::dictionary::Dictionary;
//! # use pvo::procedures::{compose::compose, evaluate::evaluate};
//! let dictionary = Dictionary::standard();
//!
//! let and = dictionary.resolve("and").unwrap();
//! let or = dictionary.resolve("or").unwrap();
//!
//! let composed = compose(&and, &or).unwrap();
//! assert_eq!(composed.to_string(), "tttt.tfff");
//!
//! // false ∨ (true ∧ true)
//! assert_eq!(evaluate(&composed, &[false, true, true]), Ok(true));
//! ```
//!
//! + A session, as used by the `pvo` binary.
//!
//! ```rust
//! # use pvo::config::Config;
//! # use pvo::repl::Session;
//! let mut config = Config::default();
//! config.trace = false;
//! config.colour = false;
//!
//! let mut session = Session::new(config, Vec::new()).unwrap();
//! session.run("nand - ff\n".as_bytes()).unwrap();
//!
//! assert_eq!(String::from_utf8(session.into_output()).unwrap(), "$ fttt\ntrue\n$ \n");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made at the debug and trace levels, and at the warn level for each rejected request.
//! Targets are listed in [misc::log].

pub mod codec;
pub mod config;
pub mod dictionary;
pub mod procedures;
pub mod repl;
pub mod request;
pub mod structures;
pub mod types;

pub mod misc;
