use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

pub const INTERACTIVE_PROMPT: &str = "Enter what you want to display on the website: ";

/// Generate a single-file website from a short prompt.
#[derive(Debug, Parser)]
#[command(name = "sitegen", version, about)]
pub struct Cli {
    /// What the page should display. Asked for interactively when omitted.
    pub prompt: Vec<String>,

    /// Serve the generated page until Ctrl-C.
    #[arg(long)]
    pub serve: bool,

    /// Address the preview server binds to.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port the preview server binds to.
    #[arg(long, default_value_t = 8888)]
    pub port: u16,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Prompt words joined by spaces, or `None` when none were given.
    pub fn joined_prompt(&self) -> Option<String> {
        if self.prompt.is_empty() {
            None
        } else {
            Some(self.prompt.join(" "))
        }
    }
}

pub fn ask_for_prompt(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<String> {
    output.write_all(INTERACTIVE_PROMPT.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
