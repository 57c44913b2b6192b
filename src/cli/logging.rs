use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

/// Installs a logger writing to stderr at the given level.
///
/// A failure to install the logger is noted, and otherwise ignored.
pub fn init(level: log::LevelFilter) {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();

    let config = match Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Unable to configure logger: {e}");
            return;
        }
    };

    if let Err(e) = log4rs::init_config(config) {
        eprintln!("Unable to install logger: {e}");
    }
}
