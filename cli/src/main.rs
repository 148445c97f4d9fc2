// Licensed under the Apache-2.0 license

//! Command-line front end: parse an inteltool register dump and write the
//! generated gpio.c/gpio.h pair.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use padcfg_decoder::{Options, Platform};
use simple_logger::SimpleLogger;

mod output;
mod parser;

#[derive(Parser, Debug)]
#[command(
    name = "padcfg",
    author,
    version,
    about = "Convert Intel GPIO pad register dumps into coreboot pad_config macros"
)]
struct Cli {
    /// Path to the inteltool log file
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        default_value = "inteltool.log"
    )]
    file: PathBuf,

    /// Directory the generated gpio.c/gpio.h pair is written to
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = "generate"
    )]
    output: PathBuf,

    /// Target chipset
    #[arg(short = 'p', long = "platform", value_enum, default_value = "snr")]
    platform: PlatformArg,

    /// Emit raw _PAD_CFG_STRUCT register values instead of decoded macros
    #[arg(long)]
    raw: bool,

    /// Always emit the generic struct form, even where a named macro fits
    #[arg(long)]
    advanced: bool,

    /// Keep named macros without checking that they cover the registers
    #[arg(long = "no-check")]
    no_check: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformArg {
    /// Sunrise Point (Skylake/Kaby Lake PCH)
    Snr,
    /// Lewisburg PCH (Xeon-SP)
    Lbg,
    /// Apollo Lake SoC
    Apl,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Snr => Platform::Sunrise,
            PlatformArg::Lbg => Platform::Lewisburg,
            PlatformArg::Apl => Platform::ApolloLake,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    SimpleLogger::new()
        .with_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init()?;

    let platform = Platform::from(cli.platform);
    let file = File::open(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;

    println!("Parsing {}...", cli.file.display());
    let mut parser = parser::LogParser::new(platform);
    parser.parse(BufReader::new(file))?;
    let pads = parser.into_pads();
    println!("...done, {} entries", pads.len());

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;

    let opts = Options {
        force_advanced: cli.advanced,
        skip_check: cli.no_check,
    };

    let header_path = cli.output.join("gpio.h");
    fs::write(&header_path, output::header_file())
        .with_context(|| format!("failed to write {}", header_path.display()))?;
    println!("Output written to: {}", header_path.display());

    let gpio_path = cli.output.join("gpio.c");
    fs::write(&gpio_path, output::gpio_file(&pads, platform, cli.raw, &opts))
        .with_context(|| format!("failed to write {}", gpio_path.display()))?;
    println!("Output written to: {}", gpio_path.display());

    Ok(())
}
