use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

mod args;
use args::Args;

mod config;
use config::Config;

mod output;
use output::Output;

fn main() -> ExitCode {
    // RUST_LOG overrides the default of info
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(Args::parse()) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<String> {
    let config = match &args.config {
        Some(path) => config::read(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?,
        None => Config::default(),
    };
    let output = Output::from_flags(args.access_token, args.refresh_token);
    let request = config.merge(args).into_request();

    debug!(realm_url = %request.realm_url(), "Requesting token");
    let res = direct_grant::request_token(&request)?;

    Ok(output.render(&res)?)
}
