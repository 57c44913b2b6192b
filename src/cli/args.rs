use std::path::PathBuf;

use clap::Parser;

use pvo::{config::Config, types::err};

/// Evaluate and compose two-valued connectives given as truth tables.
///
/// Without requests, an interactive session is started.
/// Each line of a session is a request: names of connectives, optionally followed by '-' and an assignment.
/// For example: 'and or - ftt'. Enter '?' for the dictionary.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
pub struct Args {
    /// A TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not write the hops taken to resolve each name.
    #[arg(short, long)]
    pub quiet: bool,

    /// The prompt written before each line of a session is read.
    #[arg(long)]
    pub prompt: Option<String>,

    /// Do not style output.
    #[arg(long)]
    pub no_colour: bool,

    /// The largest arity of a composition.
    #[arg(long, value_name = "N")]
    pub max_arity: Option<usize>,

    /// Print the command line reference as markdown, and exit.
    #[arg(long, hide = true)]
    pub markdown_help: bool,

    /// Requests to handle in place of an interactive session.
    #[arg(value_name = "REQUEST")]
    pub requests: Vec<String>,
}

impl Args {
    /// The configuration file (or default), revised by any arguments given.
    pub fn to_config(&self) -> Result<Config, err::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };

        if self.quiet {
            config.trace = false;
        }

        if let Some(prompt) = &self.prompt {
            config.prompt = prompt.clone();
        }

        if self.no_colour {
            config.colour = false;
        }

        if let Some(arity) = self.max_arity {
            config.max_arity.set(arity)?;
        }

        Ok(config)
    }
}
