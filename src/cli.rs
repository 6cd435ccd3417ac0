use std::fs;
use std::path::PathBuf;
use clap::Parser;
use tracing::Level;

pub const BUNDLED_SCRIPT_NAME: &str = "destructuring.js";
pub const BUNDLED_SCRIPT: &str = include_str!("../baselines/destructuring.js");

/// Runs array destructuring examples and prints what every console.log call received
#[derive(Parser, Debug)]
#[command(name = "unpackjs", version, about)]
pub struct Cli {
    /// Script to run, the bundled destructuring examples when omitted
    pub script: Option<PathBuf>,

    /// Print the transcript as JSON instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Run the script twice and check that both transcripts hash the same
    #[arg(long)]
    pub verify: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    // (file name for diagnostics, source)
    pub fn load_script(&self) -> std::io::Result<(String, String)> {
        match &self.script {
            Some(path) => {
                let source = fs::read_to_string(path)?;
                Ok((path.display().to_string(), source))
            }
            None => Ok((BUNDLED_SCRIPT_NAME.to_string(), BUNDLED_SCRIPT.to_string()))
        }
    }
}
