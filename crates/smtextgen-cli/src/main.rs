use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use smtextgen::{parse_args, render, FontMetrics, RenderConfig, DEFAULT_FONT_DIR};
use std::path::PathBuf;

use crate::console::{glyph_table, USAGE};
mod console;

#[derive(Parser)]
#[command(
    name = "smtextgen",
    about = "Compose sprite font text and images into one image",
    override_usage = "smtextgen [OPTIONS] <filename> <WxH> [-background <path>] [<x,y> <text>]..."
)]
struct Cli {
    /// Directory holding glyph_NNN.png assets
    #[arg(long, env = "SMTEXTGEN_FONT_DIR", default_value = DEFAULT_FONT_DIR)]
    font_dir: PathBuf,
    /// Print the glyph table for the font directory and exit
    #[arg(long)]
    inspect: bool,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Output file, canvas size, then placements
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    args: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.inspect {
        let metrics = FontMetrics::load(&cli.font_dir)?;
        println!("{}", glyph_table(&metrics));
        return Ok(());
    }

    let Some(invocation) = parse_args(cli.args.as_slice()) else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = RenderConfig {
        font_dir: cli.font_dir,
    };
    render(&invocation, &config)
        .with_context(|| format!("rendering {}", invocation.output.display()))?;
    Ok(())
}
