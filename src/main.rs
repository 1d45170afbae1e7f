use clap::Parser;
use saltfile::cli::{commands, output, Cli};
use saltfile::logging::LogRecord;
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    let settings = match saltfile::cli::load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    let (logger, guard) = saltfile::cli::init_logger(&cli, &settings);

    logger.log(&LogRecord::new(
        Level::DEBUG,
        "main",
        "Start of execution block.",
    ));

    let result = commands::create::execute(&cli, &settings, logger.as_ref());

    logger.log(&LogRecord::new(
        Level::DEBUG,
        "main",
        "End of execution block.",
    ));

    // `exit` skips destructors, so flush the log writer first.
    drop(guard);

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
