//! Text rendering of query results.

use std::io::{self, Write};

use base64::{engine::general_purpose, Engine};

use crate::{
    helpers::{decode_attribute, format_time},
    types::{BlockResult, StatusResult, TxResult},
};

pub fn write_block<W: Write>(out: &mut W, result: &BlockResult) -> io::Result<()> {
    let header = &result.block.header;

    writeln!(out, "Block #{}", header.height)?;
    writeln!(out, "Hash: {}", result.block_id.hash)?;
    writeln!(out, "Time: {}", format_time(&header.time))?;
    writeln!(out, "Proposer: {}", header.proposer_address)?;
    writeln!(out, "Transactions: {}", result.block.data.txs.len())?;
    writeln!(out, "App Hash: {}", header.app_hash)?;
    writeln!(out, "Consensus Hash: {}", header.consensus_hash)?;
    writeln!(out, "Last Block ID Hash: {}", header.last_block_id.hash)?;

    Ok(())
}

pub fn write_status<W: Write>(
    out: &mut W,
    status: &StatusResult,
) -> io::Result<()> {
    let node = &status.node_info;
    let sync = &status.sync_info;
    let validator = &status.validator_info;

    writeln!(out, "Node Information:")?;
    writeln!(out, "  Moniker:      {}", node.moniker)?;
    writeln!(out, "  Network:      {}", node.network)?;
    writeln!(out, "  Version:      {}", node.version)?;
    writeln!(out, "  Node ID:      {}", node.id)?;
    writeln!(out, "  Listen Addr:  {}", node.listen_addr)?;
    writeln!(out, "  RPC Address:  {}", node.other.rpc_address)?;
    writeln!(
        out,
        "  Protocol:     P2P={}, Block={}, App={}",
        node.protocol_version.p2p,
        node.protocol_version.block,
        node.protocol_version.app
    )?;

    writeln!(out, "\nSync Status:")?;
    writeln!(out, "  Latest Block Height: {}", sync.latest_block_height)?;
    writeln!(
        out,
        "  Latest Block Time:   {}",
        format_time(&sync.latest_block_time)
    )?;
    writeln!(out, "  Catching Up:         {}", sync.catching_up)?;
    writeln!(out, "  Latest Block Hash:   {}", sync.latest_block_hash)?;
    writeln!(out, "  Latest App Hash:     {}", sync.latest_app_hash)?;

    writeln!(out, "\nValidator Information:")?;
    writeln!(out, "  Address:      {}", validator.address)?;
    writeln!(out, "  Voting Power: {}", validator.voting_power)?;
    writeln!(
        out,
        "  Pub Key:      {} ({})",
        validator.pub_key.value, validator.pub_key.r#type
    )?;

    Ok(())
}

/// `hash` is the normalized hash the user asked for.
pub fn write_tx<W: Write>(
    out: &mut W,
    hash: &str,
    tx: &TxResult,
) -> io::Result<()> {
    let result = &tx.tx_result;

    writeln!(out, "Transaction Hash: {}", hash)?;
    writeln!(out, "Height: {}", tx.height)?;
    writeln!(out, "Index: {}", tx.index)?;
    writeln!(out, "Result Code: {}", result.code)?;

    if result.code != 0 {
        writeln!(out, "Error: {}", result.log)?;
    } else {
        writeln!(out, "Success: {}", result.log)?;
    }

    writeln!(out, "Gas Wanted: {}", result.gas_wanted)?;
    writeln!(out, "Gas Used: {}", result.gas_used)?;
    writeln!(
        out,
        "Raw Transaction: {}",
        general_purpose::STANDARD.encode(&tx.tx)
    )?;

    if !result.events.is_empty() {
        writeln!(out, "\nEvents:")?;

        for event in &result.events {
            writeln!(out, "  Type: {}", event.r#type)?;

            if !event.attributes.is_empty() {
                writeln!(out, "  Attributes:")?;

                for attribute in &event.attributes {
                    writeln!(
                        out,
                        "    {}: {}",
                        decode_attribute(&attribute.key),
                        decode_attribute(&attribute.value)
                    )?;
                }
            }
        }
    }

    Ok(())
}
