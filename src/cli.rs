use anyhow::Result;
use clap::Parser;

use crate::greet::greet;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "A tiny command-line greeter")]
#[command(version = "0.1.0")]
pub struct Cli {}

pub fn run_cli() -> Result<()> {
    let _cli = Cli::parse();

    println!("{}", greet());

    Ok(())
}
