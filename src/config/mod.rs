/*!
Configuration of a session.

A configuration is built from [defaults](Config::default), optionally revised by a TOML file, and (by the binary) revised by command line arguments.

A file may set any of the following, and nothing else:

```toml
prompt = "> "
trace = false
colour = false
max_arity = 12
log_level = "debug"

[aliases]
not = "ft"
implies = "cpq"
```

```rust
# use pvo::config::Config;
let config = Config::from_toml_str("max_arity = 12\n[aliases]\nnot = \"ft\"").unwrap();
assert_eq!(config.max_arity.value, 12);

let dictionary = config.dictionary().unwrap();
assert_eq!(dictionary.resolve("not").unwrap().to_string(), "ft");

assert!(Config::from_toml_str("max_arity = 99").is_err());
assert!(Config::from_toml_str("unknown = 1").is_err());
```
*/

use std::path::Path;

use serde::Deserialize;

mod config_option;
pub use config_option::ConfigOption;

use crate::{dictionary::Dictionary, types::err};

/// The default largest arity of a composition.
pub const MAX_ARITY: usize = 20;

/// The largest arity of a composition which may be configured.
pub const MAX_ARITY_BOUND: usize = 24;

/// The primary configuration structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The prompt written before reading each line of a session.
    pub prompt: String,

    /// Whether to write each hop taken when resolving a name.
    pub trace: bool,

    /// Whether to style output, when written to a terminal.
    pub colour: bool,

    /// The largest arity of a composition.
    pub max_arity: ConfigOption<usize>,

    /// The level of logs to record, if some logger is installed.
    pub log_level: log::LevelFilter,

    /// Aliases to define in addition to the standard aliases, in order of definition.
    pub aliases: Vec<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "$ ".to_string(),
            trace: true,
            colour: true,

            max_arity: ConfigOption {
                name: "max_arity",
                min: 0,
                max: MAX_ARITY_BOUND,
                value: MAX_ARITY,
            },

            log_level: log::LevelFilter::Warn,
            aliases: Vec::default(),
        }
    }
}

/// The contents of a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub prompt: Option<String>,
    pub trace: Option<bool>,
    pub colour: Option<bool>,
    pub max_arity: Option<usize>,
    pub log_level: Option<String>,

    /// Aliases, in order of appearance in the file.
    #[serde(default)]
    pub aliases: toml::Table,
}

impl Config {
    /// The default configuration, revised by a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, err::ConfigError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path)
            .map_err(|e| err::ConfigError::Io(format!("{}: {e}", path.display())))?;

        Self::from_toml_str(&contents)
    }

    /// The default configuration, revised by the contents of a file.
    pub fn from_toml_str(contents: &str) -> Result<Self, err::ConfigError> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| err::ConfigError::Toml(e.to_string()))?;

        let mut config = Config::default();
        config.apply_file(file)?;
        Ok(config)
    }

    /// Revises the configuration with each option set in a file.
    pub fn apply_file(&mut self, file: ConfigFile) -> Result<(), err::ConfigError> {
        if let Some(prompt) = file.prompt {
            self.prompt = prompt;
        }

        if let Some(trace) = file.trace {
            self.trace = trace;
        }

        if let Some(colour) = file.colour {
            self.colour = colour;
        }

        if let Some(arity) = file.max_arity {
            self.max_arity.set(arity)?;
        }

        if let Some(level) = file.log_level {
            self.log_level = level
                .parse::<log::LevelFilter>()
                .map_err(|_| err::ConfigError::LogLevel(level))?;
        }

        for (name, code) in file.aliases {
            match code {
                toml::Value::String(code) => self.aliases.push((name, code)),
                other => {
                    return Err(err::ConfigError::Alias {
                        name,
                        code: other.to_string(),
                    });
                }
            }
        }

        // Aliases are checked on revision, rather than when a dictionary is built.
        self.dictionary()?;

        Ok(())
    }

    /// The standard dictionary, extended with the aliases of the configuration.
    pub fn dictionary(&self) -> Result<Dictionary, err::ConfigError> {
        let mut dictionary = Dictionary::standard();

        for (name, code) in &self.aliases {
            dictionary.define_alias(name, code)?;
        }

        Ok(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.prompt, "$ ");
        assert!(config.trace);
        assert_eq!(config.max_arity.value, MAX_ARITY);
        assert_eq!(config.dictionary(), Ok(Dictionary::standard()));
    }

    #[test]
    fn file_revisions() {
        let config = Config::from_toml_str(
            r#"
prompt = "> "
trace = false
colour = false
log_level = "trace"
"#,
        )
        .unwrap();

        assert_eq!(config.prompt, "> ");
        assert!(!config.trace);
        assert!(!config.colour);
        assert_eq!(config.log_level, log::LevelFilter::Trace);
        assert_eq!(config.max_arity.value, MAX_ARITY);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            Config::from_toml_str("max_arity = 25"),
            Err(err::ConfigError::OutOfRange {
                name: "max_arity",
                min: 0,
                max: MAX_ARITY_BOUND
            })
        );
    }

    #[test]
    fn invalid_aliases() {
        assert_eq!(
            Config::from_toml_str("[aliases]\nnot = \"nope\""),
            Err(err::ConfigError::Alias {
                name: "not".to_string(),
                code: "nope".to_string()
            })
        );
    }

    #[test]
    fn aliases_as_written() {
        let config = Config::from_toml_str(
            r#"
[aliases]
zz = "ft"
aa = "kpq"
mm = "tf"
"#,
        )
        .unwrap();

        let names = config.aliases.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["zz", "aa", "mm"]);

        let dictionary = config.dictionary().unwrap();
        let defined = dictionary.alias_entries().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(defined[defined.len() - 3..], ["zz", "aa", "mm"]);
    }

    #[test]
    fn alias_of_a_non_string() {
        assert_eq!(
            Config::from_toml_str("[aliases]
not = 1"),
            Err(err::ConfigError::Alias {
                name: "not".to_string(),
                code: "1".to_string()
            })
        );
    }

    #[test]
    fn invalid_level() {
        assert!(matches!(
            Config::from_toml_str("log_level = \"loud\""),
            Err(err::ConfigError::LogLevel(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Config::from_path("/nonexistent/pvo.toml"),
            Err(err::ConfigError::Io(_))
        ));
    }
}
