use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use seedcast::formats::FormatInts;
use seedcast::{Format, Params, Registry, Ur};

#[derive(Parser)]
#[command(name = "seedcast")]
#[command(about = "Convert a binary seed between hex, BIP39, bech32 and UR representations", long_about = None)]
struct Cli {
    /// Input format (hex, bip39, bech32)
    #[arg(long = "in", value_name = "FORMAT", default_value = "hex")]
    in_format: String,

    /// Output format (hex, bip39, bech32, ints)
    #[arg(long = "out", value_name = "FORMAT", default_value = "hex")]
    out_format: String,

    /// Emit the output as a transport payload (ur:TYPE/HEX-CBOR)
    #[arg(long)]
    ur: bool,

    /// Low bound for the ints output format
    #[arg(long, default_value = "1")]
    low: u8,

    /// High bound for the ints output format
    #[arg(long, default_value = "9")]
    high: u8,

    /// Separator for the ints output format
    #[arg(long, default_value = " ")]
    separator: String,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Input: seed text in the input format, or a ur:... payload
    inputs: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("seedcast=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let registry = Registry::new();
    let mut params = Params::new();

    // a single ur:... argument switches the input side to envelope mode
    if cli.inputs.len() == 1 && cli.inputs[0].starts_with("ur:") {
        params.ur_in = Some(Ur::parse(&cli.inputs[0])?);
        params.is_ur_in = true;
    } else {
        params.inputs = cli.inputs.clone();
    }
    params.is_ur_out = cli.ur;

    let in_format = registry
        .get_by_name(&cli.in_format)
        .context("unknown input format")?;
    in_format
        .process_input(&mut params)
        .with_context(|| format!("failed to read {} input", cli.in_format))?;
    debug!(seed_len = params.seed.len(), "seed recovered from input");

    let custom_ints;
    let out_format: &dyn Format = if cli.out_format == "ints" {
        custom_ints = FormatInts::new(cli.low, cli.high, cli.separator.clone());
        &custom_ints
    } else {
        registry
            .get_by_name(&cli.out_format)
            .context("unknown output format")?
    };
    out_format
        .process_output(&mut params)
        .with_context(|| format!("failed to write {} output", cli.out_format))?;

    if let Some(ur) = &params.ur_out {
        println!("{}", ur.to_uri());
    } else {
        println!("{}", params.output);
    }
    Ok(())
}
