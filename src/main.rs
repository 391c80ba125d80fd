use std::process::ExitCode;

use clap::Parser;

use gh_provision::cli::{Cli, conclude};
use gh_provision::core::style;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tokio::select! {
        result = cli.run() => {
            let (status, unexpected) = conclude(result);
            if let Some(message) = unexpected {
                eprintln!();
                eprintln!("{}", style::error(&message));
            }
            status.into()
        }
        Ok(()) = tokio::signal::ctrl_c() => {
            eprintln!();
            eprintln!();
            eprintln!("{}", style::error("Cancelled by user"));
            // Exit here: a pending stdin read holds a blocking thread that
            // runtime shutdown would wait on.
            std::process::exit(1);
        }
    }
}
