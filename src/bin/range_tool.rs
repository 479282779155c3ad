//! Range Tool
//!
//! Builds a range from a preset, notation, hand toggles or a JSON config,
//! then prints its statistics and optionally a grid and a JSON summary.
//!
//! ```text
//! range_tool --preset tight --toggle 77 --grid
//! range_tool --notation "TT+, AQs+" --json range.json
//! range_tool --config co_open.json
//! ```

use std::process::ExitCode;

use clap::Parser;

use range_engine::output::{grid_string, RangeSummary};
use range_engine::{Preset, RangeConfig};

#[derive(Debug, Parser)]
#[command(name = "range_tool", about = "Build and inspect preflop hand ranges")]
struct Args {
    /// Starting preset (ultraTight, tight, standard, loose)
    #[arg(long)]
    preset: Option<Preset>,

    /// Range notation to import, e.g. "TT+, AQs+, A5s-A2s"
    #[arg(long)]
    notation: Option<String>,

    /// JSON range config; other range flags are applied on top of it
    #[arg(long)]
    config: Option<String>,

    /// Hand to toggle (repeatable, applied in order)
    #[arg(long = "toggle", value_name = "HAND")]
    toggles: Vec<String>,

    /// Write a JSON summary to this path
    #[arg(long)]
    json: Option<String>,

    /// Print the 13x13 grid
    #[arg(long)]
    grid: bool,
}

impl Args {
    fn range_config(&self) -> Result<RangeConfig, range_engine::ConfigError> {
        let mut config = match &self.config {
            Some(path) => RangeConfig::from_file(path)?,
            None => RangeConfig::new("custom"),
        };

        if let Some(preset) = self.preset {
            config = config.with_preset(preset);
            if self.config.is_none() {
                config = config.with_name(preset.name());
            }
        }
        if let Some(notation) = &self.notation {
            config = config.with_notation(notation.clone());
        }
        for hand in &self.toggles {
            config = config.with_toggle(hand.clone());
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = match args.range_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let range = match config.build() {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let summary = RangeSummary::new(&config.name, &range);
    summary.print_summary();

    if args.grid {
        println!();
        print!("{}", grid_string(&range));
        println!("\n* manual  + auto  x excluded  . unselected");
    }

    if let Some(path) = &args.json {
        match summary.save_json(path) {
            Ok(_) => println!("Saved JSON: {}", path),
            Err(e) => {
                eprintln!("Error saving JSON: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
