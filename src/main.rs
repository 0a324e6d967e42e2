use std::{io, process::ExitCode};

use clap::Parser;
use tracing::{debug, Level};

use tia::{
    cli::{self, Cli},
    error::Error,
    provider::Context,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.log_level()) {
        eprintln!("Error: {:#}", anyhow::Error::from(err));
        return ExitCode::FAILURE;
    }

    let (ctx, cancel) = Context::background().with_cancel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupted");
            cancel.cancel();
        }
    });

    match cli::run(cli, &ctx, &mut io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        },
    }
}

fn init_tracing(level: Level) -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
