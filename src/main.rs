use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use propval::{logging, Feature, ModelConfig, RawAttributes, SeededRng, ValuationPipeline};

#[derive(Debug, Parser)]
#[command(name = "propval")]
#[command(about = "Estimate a property's value from eight numeric attributes")]
struct Cli {
    #[command(flatten)]
    model: ModelConfig,

    /// TOML file with model settings (overrides the model flags)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Attribute assignments such as Square_Footage=0.8; prompts when omitted
    #[arg(value_name = "NAME=VALUE")]
    attributes: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let config = match &cli.config {
        Some(path) => ModelConfig::from_file(path)?,
        None => cli.model.clone(),
    };
    config.validate()?;

    let mut rng = SeededRng::new(config.seed);
    let pipeline = ValuationPipeline::train(&config, &mut rng)?;

    if let Some(eval) = pipeline.evaluation() {
        println!(
            "Held-out evaluation: {} train / {} test rows, R^2 = {:.4}, RMSE = {:.0}, MAE = {:.0}",
            eval.n_train, eval.n_test, eval.r_squared, eval.rmse, eval.mae
        );
    }

    let raw = if cli.attributes.is_empty() {
        prompt_attributes(&mut io::stdin().lock(), &mut io::stdout())?
    } else {
        parse_assignments(&cli.attributes)?
    };

    match pipeline.estimate(&raw) {
        Ok(estimate) => {
            println!("Estimated Property Value: {}", estimate.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }
}

/// Parse `NAME=VALUE` arguments; values are left for validation
fn parse_assignments(args: &[String]) -> Result<RawAttributes> {
    let mut raw = RawAttributes::new();
    for arg in args {
        let Some((name, value)) = arg.split_once('=') else {
            anyhow::bail!("Expected NAME=VALUE, got '{}'", arg);
        };
        let name = name.trim();
        if Feature::from_name(name).is_none() {
            anyhow::bail!(
                "Unknown attribute '{}'; expected one of {}",
                name,
                Feature::ALL.map(|f| f.name()).join(", ")
            );
        }
        raw.insert(name.to_string(), value.to_string());
    }
    Ok(raw)
}

/// Ask for each attribute in order, one line per answer
fn prompt_attributes<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<RawAttributes> {
    let mut raw = RawAttributes::new();
    for feature in Feature::ALL {
        write!(output, "{}: ", feature.label())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        raw.insert(feature.name().to_string(), line);
    }
    Ok(raw)
}
