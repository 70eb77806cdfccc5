mod config;
mod processing;

use std::path::PathBuf;
use clap::Parser;
use env_logger::Env;
use crate::config::Config;
use crate::processing::Processor;

const USAGE: &str = "usage: ethwall INPUT_IMAGE OUTPUT_IMAGE [ETH_SCALE]";

#[derive(Parser)]
#[command(name = "ethwall")]
#[command(about = "Overlay a mirrored Ethereum logo onto a wallpaper image")]
#[command(version = "1.0")]
struct Args {
    /// Input image path
    input: Option<PathBuf>,

    /// Output image path; the format follows the extension
    output: Option<PathBuf>,

    /// Multiplier for the Ethereum logo
    scale: Option<f64>,

    /// Configuration file path (.json or .toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// Brightness factor applied to mirrored pixels
    #[arg(long)]
    brightness: Option<f64>,

    /// Font file used for the watermark
    #[arg(long)]
    font: Option<PathBuf>,

    /// Watermark text
    #[arg(long)]
    watermark_text: Option<String>,

    /// Skip the watermark
    #[arg(long)]
    no_watermark: bool,

    /// Skip the logo outline
    #[arg(long)]
    no_outline: bool,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env = if args.verbose {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    // Handle config generation
    if args.generate_config {
        let config_path = args.config.unwrap_or_else(|| PathBuf::from("ethwall.json"));
        Config::save_default(&config_path)?;
        return Ok(());
    }

    let (Some(input), Some(output)) = (args.input, args.output) else {
        println!("error: missing arguments");
        println!("{}", USAGE);
        return Ok(());
    };

    if !input.is_file() {
        println!("error: cannot open input file");
        return Ok(());
    }

    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        Config::load(config_path)?
    } else {
        Config::default()
    };

    // Override config with command line arguments
    if let Some(scale) = args.scale {
        config.geometry.scale = scale;
    }
    if let Some(brightness) = args.brightness {
        config.filter.brightness = brightness;
    }
    if let Some(font) = args.font {
        config.watermark.font = font;
    }
    if let Some(text) = args.watermark_text {
        config.watermark.text = text;
    }
    if args.no_watermark {
        config.watermark.enabled = false;
    }
    if args.no_outline {
        config.outline.enabled = false;
    }

    Processor::new(config).process(&input, &output)
}
