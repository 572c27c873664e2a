//! Demo driver for ZMK Studio devices.
//!
//! Usage:
//!   zmk-studio-demo serial /dev/ttyACM0
//!   zmk-studio-demo ble
//!
//! Set `RUST_LOG=debug` to trace RPC traffic on stderr.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use zmk_studio_demo::DeviceConnector;
use zmk_studio_demo::cli::{self, Cli};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    log::debug!("Parsed arguments: {args:?}");

    cli::run(args, &DeviceConnector::default(), &mut std::io::stdout().lock())
}
