//! ovelha CLI tool

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use ovelha_cli_lib::Cli;

fn main() -> Result<()> {
    ovelha::observability::init()?;
    Cli::parse().execute()
}
