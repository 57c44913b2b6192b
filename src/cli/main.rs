#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::io::IsTerminal;

use clap::Parser;
use rustyline::error::ReadlineError;

use pvo::repl::Session;

mod args;
#[cfg(feature = "log")]
mod logging;

use args::Args;

fn main() {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    let mut config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    #[cfg(feature = "log")]
    logging::init(config.log_level);

    let stdout = std::io::stdout();
    config.colour = config.colour && stdout.is_terminal();

    let mut session = match Session::new(config, stdout.lock()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();

    let result = match (args.requests.is_empty(), stdin.is_terminal()) {
        (true, true) => session.run_editor(),

        (true, false) => session.run(stdin.lock()).map_err(ReadlineError::from),

        (false, _) => args
            .requests
            .iter()
            .try_for_each(|request| session.handle_line(request))
            .map_err(ReadlineError::from),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
