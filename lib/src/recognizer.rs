use crate::{Error, Recognition};
use image::GrayImage;
use log::debug;
use std::path::Path;
use std::time::Instant;
use wordfeud_ocr::Board;

/// Recognizes Wordfeud screenshots.
///
/// Implementors only provide [recognize_screenshot](Recognize::recognize_screenshot); loading a
/// screenshot from a file or from memory is shared.
pub trait Recognize {
    /// Recognize a grayscale screenshot.
    fn recognize_screenshot(&self, screenshot: &GrayImage) -> Result<Recognition, Error>;

    /// Recognize the screenshot stored in `path`.
    ///
    /// # Errors
    /// * The file can not be opened or decoded
    /// * The screenshot can not be recognized
    fn recognize_screenshot_from_file(&self, path: &Path) -> Result<Recognition, Error> {
        let gray = image::open(path)
            .map_err(|source| Error::ImageError {
                path: path.display().to_string(),
                source,
            })?
            .into_luma8();
        debug!(
            "read {}x{} screenshot from {}",
            gray.width(),
            gray.height(),
            path.display()
        );
        self.recognize_screenshot(&gray)
    }

    /// Recognize an encoded screenshot held in memory.
    fn recognize_screenshot_from_memory(&self, screenshot: &[u8]) -> Result<Recognition, Error> {
        let gray = image::load_from_memory(screenshot)
            .map_err(Error::DecodeError)?
            .into_luma8();
        self.recognize_screenshot(&gray)
    }
}

/// Recognizer backed by the [wordfeud_ocr] board recognizer.
pub struct Recognizer {
    board: Board,
}

impl Default for Recognizer {
    fn default() -> Self {
        Recognizer::new()
    }
}

impl Recognizer {
    pub fn new() -> Recognizer {
        Recognizer {
            board: Board::new(),
        }
    }
}

impl Recognize for Recognizer {
    fn recognize_screenshot(&self, screenshot: &GrayImage) -> Result<Recognition, Error> {
        let now = Instant::now();
        let res = self.board.recognize_screenshot(screenshot)?;
        debug!("recognize screenshot took {:?}", now.elapsed());
        Ok(Recognition::from(&res))
    }
}
