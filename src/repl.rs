/*!
A read-evaluate-print session.

A session reads [requests](crate::request) one line at a time, and writes the result of each request before reading the next.

For a request to evaluate an expression the following is written:
- If tracing, each hop taken to resolve each name, followed by an empty line (for each name resolved through some hop).
- The reduced truth vector.
- If an assignment was given, the value of the vector at the assignment.

If any part of a request fails, nothing but a single `?` is written for the request.
A session only ends when input ends (or, with a [line editor](Session::run_editor), is interrupted).
A line which cannot be read as text is a malformed request, and so is rejected with `?`.

```rust
# use pvo::config::Config;
# use pvo::repl::Session;
let mut config = Config::default();
config.colour = false;

let mut session = Session::new(config, Vec::new()).unwrap();
session.handle_line("and - tt").unwrap();
session.handle_line("zzzz").unwrap();

let written = String::from_utf8(session.into_output()).unwrap();
assert_eq!(written, "and = kpq\nkpq = tfff\n\ntfff\ntrue\n?\n");
```
*/

use std::io::{BufRead, Write};

use crossterm::{
    style::{Print, PrintStyledContent, Stylize},
    QueueableCommand,
};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{
    config::Config,
    dictionary::Dictionary,
    misc::log::targets::{self},
    request::{parse_request, Outcome, Request},
    structures::symbol::TruthSymbol,
    types::err::{self},
};

/// The line written in response to a request which fails.
pub const REJECTION: &str = "?";

/// How a line is written, when styled.
#[derive(Clone, Copy, Debug)]
enum LineKind {
    Plain,
    Trace,
    Rejection,
    Heading,
}

pub struct Session<W: Write> {
    config: Config,
    dictionary: Dictionary,
    output: W,
}

impl<W: Write> Session<W> {
    /// A session with the dictionary of the configuration, writing to `output`.
    pub fn new(config: Config, output: W) -> Result<Self, err::ConfigError> {
        let dictionary = config.dictionary()?;

        Ok(Session {
            config,
            dictionary,
            output,
        })
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads and handles each line of `input`, writing a prompt before each read, until input ends.
    ///
    /// A line which is not valid UTF-8 is rejected, as any other malformed request.
    pub fn run(&mut self, mut input: impl BufRead) -> std::io::Result<()> {
        let mut buffer = Vec::default();

        loop {
            self.output.queue(Print(&self.config.prompt))?;
            self.output.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                return self.end_of_input();
            }

            match std::str::from_utf8(&buffer) {
                Ok(line) => {
                    let line = line.strip_suffix('\n').unwrap_or(line);
                    let line = line.strip_suffix('\r').unwrap_or(line);
                    self.handle_line(line)?;
                }

                Err(e) => {
                    log::warn!(target: targets::REQUEST, "Rejected line: {e}");
                    self.write_line(LineKind::Rejection, REJECTION)?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Reads and handles each line given to a line editor, with history, until input ends or is interrupted.
    ///
    /// The editor writes the prompt, and so the editor is for interactive use with a terminal.
    pub fn run_editor(&mut self) -> Result<(), ReadlineError> {
        let mut editor = DefaultEditor::new()?;

        loop {
            match editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.as_str())?;
                    }
                    self.handle_line(&line)?;
                }

                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    return Ok(self.end_of_input()?);
                }

                Err(e) => return Err(e),
            }
        }
    }

    fn end_of_input(&mut self) -> std::io::Result<()> {
        log::debug!(target: targets::REQUEST, "End of input");
        self.output.queue(Print("\n"))?;
        self.output.flush()
    }

    /// Handles the request made by a single line.
    pub fn handle_line(&mut self, line: &str) -> std::io::Result<()> {
        let response = parse_request(line).and_then(|request| match request {
            Request::Empty => Ok(None),
            Request::Help => Ok(Some(self.help_lines())),
            Request::Evaluate(expression) => {
                let outcome = expression.evaluate(&self.dictionary, self.config.max_arity.value)?;
                Ok(outcome.map(|outcome| self.outcome_lines(&outcome)))
            }
        });

        match response {
            Ok(Some(lines)) => {
                for (kind, line) in lines {
                    self.write_line(kind, &line)?;
                }
            }

            Ok(None) => {}

            Err(e) => {
                log::warn!(target: targets::REQUEST, "Rejected {line:?}: {e}");
                self.write_line(LineKind::Rejection, REJECTION)?;
            }
        }

        self.output.flush()
    }

    fn outcome_lines(&self, outcome: &Outcome) -> Vec<(LineKind, String)> {
        let mut lines = Vec::default();

        if self.config.trace {
            for resolution in outcome.resolutions.iter().filter(|r| !r.hops.is_empty()) {
                for hop in &resolution.hops {
                    lines.push((LineKind::Trace, hop.to_string()));
                }
                lines.push((LineKind::Trace, String::new()));
            }
        }

        lines.push((LineKind::Plain, outcome.vector.to_string()));

        if let Some(value) = outcome.value {
            lines.push((LineKind::Plain, value.to_string()));
        }

        lines
    }

    fn help_lines(&self) -> Vec<(LineKind, String)> {
        let mut lines = vec![(LineKind::Heading, "Truth table".to_string())];

        for (code, written) in self.dictionary.table_entries() {
            lines.push((LineKind::Plain, format!("{code} = {written}")));
        }

        lines.push((LineKind::Plain, String::new()));
        lines.push((LineKind::Heading, "Aliases".to_string()));

        for (name, code) in self.dictionary.alias_entries() {
            lines.push((LineKind::Plain, format!("{name} = {code}")));
        }

        lines.push((LineKind::Plain, String::new()));
        lines.push((LineKind::Heading, "Values".to_string()));

        for symbol in [TruthSymbol::True, TruthSymbol::False] {
            let spellings = symbol.spellings().join(" ");
            lines.push((LineKind::Plain, format!("{symbol} = {spellings}")));
        }

        lines
    }

    fn write_line(&mut self, kind: LineKind, line: &str) -> std::io::Result<()> {
        match (self.config.colour, kind) {
            (false, _) | (true, LineKind::Plain) => {
                self.output.queue(Print(line))?;
            }

            (true, LineKind::Trace) => {
                self.output.queue(PrintStyledContent(line.dark_grey()))?;
            }

            (true, LineKind::Rejection) => {
                self.output.queue(PrintStyledContent(line.red().bold()))?;
            }

            (true, LineKind::Heading) => {
                self.output.queue(PrintStyledContent(line.underlined()))?;
            }
        }

        self.output.queue(Print("\n"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_session() -> Session<Vec<u8>> {
        let mut config = Config::default();
        config.colour = false;
        Session::new(config, Vec::new()).unwrap()
    }

    fn written(session: Session<Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn trace_then_vector() {
        let mut session = plain_session();
        session.handle_line("and or").unwrap();
        assert_eq!(
            written(session),
            "and = kpq\nkpq = tfff\n\nor = apq\napq = tttf\n\ntttt.tfff\n"
        );
    }

    #[test]
    fn literals_are_not_traced() {
        let mut session = plain_session();
        session.handle_line("ft - f").unwrap();
        assert_eq!(written(session), "ft\ntrue\n");
    }

    #[test]
    fn quiet() {
        let mut config = Config::default();
        config.colour = false;
        config.trace = false;

        let mut session = Session::new(config, Vec::new()).unwrap();
        session.handle_line("xor - tf").unwrap();
        assert_eq!(written(session), "fttf\ntrue\n");
    }

    #[test]
    fn rejection_is_a_single_line() {
        let mut session = plain_session();
        session.handle_line("and or - tt").unwrap();
        session.handle_line("and - x").unwrap();
        session.handle_line("").unwrap();
        assert_eq!(written(session), "?\n?\n");
    }

    #[test]
    fn help() {
        let mut session = plain_session();
        session.handle_line("?").unwrap();
        let written = written(session);

        assert!(written.starts_with("Truth table\nopq = ffff\n"));
        assert!(written.contains("\nAliases\nfalse = opq\n"));
        assert!(written.ends_with("true = t 1 true\nfalse = f 0 false\n"));
    }

    #[test]
    fn invalid_text_is_rejected() {
        let mut session = plain_session();
        session.run(&b"and - tt\n\xff\xfe\nxor\r\n"[..]).unwrap();
        assert_eq!(
            written(session),
            "$ and = kpq\nkpq = tfff\n\ntfff\ntrue\n$ ?\n$ xor = jpq\njpq = fttf\n\nfttf\n$ \n"
        );
    }

    #[test]
    fn final_line_without_newline() {
        let mut session = plain_session();
        session.run("or - ff".as_bytes()).unwrap();
        assert_eq!(written(session), "$ or = apq\napq = tttf\n\ntttf\nfalse\n$ \n");
    }

    #[test]
    fn run_until_end_of_input() {
        let mut session = plain_session();
        session.run("xor\n\nzzzz\n".as_bytes()).unwrap();
        assert_eq!(
            written(session),
            "$ xor = jpq\njpq = fttf\n\nfttf\n$ $ ?\n$ \n"
        );
    }
}
