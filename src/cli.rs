//! Command-line interface: argument parsing and the `block`, `status` and
//! `tx` commands.

use std::io::Write;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, Level};

use crate::{
    configuration::get_configuration,
    helpers::{parse_height, parse_tx_hash},
    printer::{write_block, write_status, write_tx},
    provider::{Context, RpcClient},
};

/// A CLI explorer for Celestia and other CometBFT chains
#[derive(Parser, Debug)]
#[command(name = "tia")]
#[command(
    about = "A CLI explorer for Celestia blockchain",
    long_about = "tia is a command-line interface for exploring the Celestia blockchain.\n\
                  It allows you to retrieve information about blocks, transactions, and more."
)]
#[command(version, disable_help_subcommand = true)]
pub struct Cli {
    /// Node RPC url (falls back to TIA_NODE, then https://rpc.celestia.pops.one)
    #[arg(long, global = true)]
    pub node: Option<String>,

    /// Log verbosity, repeat for more detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get block information
    ///
    /// Example: tia block 123456, tia block latest
    Block {
        /// Block height, or `latest` (the default)
        height: Option<String>,
    },

    /// Get node status information
    Status,

    /// Get transaction information
    ///
    /// Example: tia tx 0x1234567890ABCDEF1234567890ABCDEF1234567890ABCDEF1234567890ABCDEF
    Tx {
        /// Transaction hash in hex, with or without 0x
        hash: String,
    },
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Runs the selected command, writing its report to `out`.
pub async fn run<W: Write>(
    cli: Cli,
    ctx: &Context,
    out: &mut W,
) -> anyhow::Result<()> {
    let config = get_configuration(cli.node)?;
    let client = RpcClient::new(config)?;

    match cli.command {
        Commands::Block { height } => {
            run_block(&client, ctx, height.as_deref(), out).await
        },
        Commands::Status => run_status(&client, ctx, out).await,
        Commands::Tx { hash } => run_tx(&client, ctx, &hash, out).await,
    }
}

pub async fn run_block<W: Write>(
    client: &RpcClient,
    ctx: &Context,
    height: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let height = parse_height(height)?;
    info!(height, node = %client.config().node_url, "fetching block");

    let block = client
        .get_block(ctx, height)
        .await
        .context("failed to get block")?;

    write_block(out, &block)?;
    Ok(())
}

pub async fn run_status<W: Write>(
    client: &RpcClient,
    ctx: &Context,
    out: &mut W,
) -> anyhow::Result<()> {
    info!(node = %client.config().node_url, "fetching status");

    let status = client
        .get_status(ctx)
        .await
        .context("failed to get status")?;

    write_status(out, &status)?;
    Ok(())
}

pub async fn run_tx<W: Write>(
    client: &RpcClient,
    ctx: &Context,
    hash: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let hash = parse_tx_hash(hash)?;
    let display_hash = hex::encode_upper(&hash);
    info!(hash = %display_hash, node = %client.config().node_url, "fetching transaction");

    let tx = client
        .get_tx(ctx, &hash)
        .await
        .context("failed to get transaction")?;

    write_tx(out, &display_hash, &tx)?;
    Ok(())
}
