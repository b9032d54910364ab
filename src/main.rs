use clap::Parser;

use cc_switch::cli::{self, theme, Cli};
use cc_switch::logging::init_tracing;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = cli::run(cli) {
        tracing::error!(error = %format!("{err:#}"), "command failed");
        eprintln!("{}", theme::error(format!("Error: {err:#}")));
        std::process::exit(1);
    }
}
