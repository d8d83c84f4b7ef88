mod app;
mod controls;
mod painter;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use sandpaint_engine::device::GpuInit;
use sandpaint_engine::logging::{init_logging, LoggingConfig};
use sandpaint_engine::window::{Runtime, RuntimeConfig};
use sandpaint_sketch::{SketchConfig, Variant};

use crate::app::StudioApp;

#[derive(Parser, Debug)]
#[command(
    name = "sandpaint",
    about = "Recursive triangle subdivision, drawn as sand or as plain outlines."
)]
struct Args {
    /// Which sketch to run
    #[arg(long, value_enum, default_value_t = VariantArg::Sand)]
    variant: VariantArg,

    /// Seed for subdivision, grain placement and noise (random when omitted)
    #[arg(long, value_name = "U64")]
    seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Copy, Clone, Eq, PartialEq)]
enum VariantArg {
    Sand,
    Outline,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Sand => Variant::Sand,
            VariantArg::Outline => Variant::Outline,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(LoggingConfig::default());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = SketchConfig::for_variant(args.variant.into());
    log::info!("starting {:?} sketch with seed {seed}", config.variant);

    let (width, height) = config.canvas_size;
    let window = RuntimeConfig::fixed(config.title, f64::from(width), f64::from(height));
    let app = StudioApp::new(config, seed);

    Runtime::run(window, GpuInit::default(), app).context("sandpaint runtime failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sand_with_random_seed() {
        let args = Args::try_parse_from(["sandpaint"]).unwrap();
        assert_eq!(args.variant, VariantArg::Sand);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn parses_variant_and_seed() {
        let args = Args::try_parse_from(["sandpaint", "--variant", "outline", "--seed", "7"]).unwrap();
        assert_eq!(Variant::from(args.variant), Variant::Outline);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Args::try_parse_from(["sandpaint", "--variant", "watercolor"]).is_err());
    }
}
