use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::time::Instant;
use wordfeud_ocr_report::{Recognize, Recognizer, Report};

mod config;

use config::{Command, Config, USAGE};

fn run(config: &Config) -> Result<()> {
    let t0 = Instant::now();
    let recognizer = Recognizer::new();
    let res = recognizer
        .recognize_screenshot_from_file(&config.screenshot)
        .with_context(|| format!("Failed to recognize {}", config.screenshot.display()))?;
    info!(
        "recognized {} in {:?}",
        config.screenshot.display(),
        t0.elapsed()
    );

    let report = Report::new(&res).render(config.format)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let result = Config::from_env().and_then(|command| match command {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Run(config) => run(&config),
    });
    if let Err(err) = result {
        eprintln!("{:?}", err);
        std::process::exit(1);
    }
}
