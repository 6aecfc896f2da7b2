use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use wordfeud_ocr_report::Format;

/// Screenshot used when none is given on the command line or in the environment
pub const DEFAULT_SCREENSHOT: &str = "screenshots/screenshot_blank_tile.png";

/// Environment variable that overrides the default screenshot
pub const SCREENSHOT_ENV: &str = "WORDFEUD_OCR_SCREENSHOT";

pub const USAGE: &str = "Usage: recognize-screenshot [--json | --format text|json] [SCREENSHOT]";

#[derive(Debug, PartialEq)]
pub struct Config {
    pub screenshot: PathBuf,
    pub format: Format,
}

/// What the command line asks for
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Parse the command line arguments (without the program name).
    ///
    /// The screenshot is the positional argument, else the value of `env_screenshot`, else
    /// [DEFAULT_SCREENSHOT].
    pub fn parse<I>(args: I, env_screenshot: Option<String>) -> Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut screenshot = None;
        let mut format = Format::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--json" => format = Format::Json,
                "--format" => {
                    let value = args.next().context("--format needs a value")?;
                    format = value.parse()?;
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    bail!("Unknown option {}\n{}", flag, USAGE)
                }
                _ => {
                    if screenshot.is_some() {
                        bail!("Only one screenshot can be given\n{}", USAGE);
                    }
                    screenshot = Some(PathBuf::from(arg));
                }
            }
        }
        let screenshot = screenshot
            .or_else(|| env_screenshot.filter(|s| !s.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCREENSHOT));
        Ok(Command::Run(Config { screenshot, format }))
    }

    pub fn from_env() -> Result<Command> {
        Config::parse(std::env::args().skip(1), std::env::var(SCREENSHOT_ENV).ok())
    }
}
