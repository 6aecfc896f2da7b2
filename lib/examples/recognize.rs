use anyhow::{Context, Result};
use std::time::Instant;
use wordfeud_ocr_report::{Recognize, Recognizer, Report};

fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("Usage: recognize SCREENSHOT")?;
    let t0 = Instant::now();
    let buf = std::fs::read(&path).with_context(|| format!("Failed to open {}", path))?;
    let recognizer = Recognizer::new();

    let res = recognizer.recognize_screenshot_from_memory(&buf)?;
    eprintln!("recognize screenshot took {:?}", t0.elapsed());
    print!("{}", Report::new(&res));
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
