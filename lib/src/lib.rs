//! Reports the state of a Wordfeud board recognized from a screenshot
//!
//! The recognition itself is done by the [wordfeud_ocr] library. This crate flattens its results to
//! text lines (board state, rack, board with bonus squares) plus the board and rack areas, and formats
//! them as a report.
//!
//! # Basic usage
//! ```no_run
//! # use std::path::Path;
//! use wordfeud_ocr_report::{Recognize, Recognizer, Report};
//!
//! let recognizer = Recognizer::new();
//! let res = recognizer.recognize_screenshot_from_file(Path::new("screenshots/screenshot_blank_tile.png"))?;
//! print!("{}", Report::new(&res));
//! # Ok::<(), wordfeud_ocr_report::Error>(())
//! ```
//! This prints the recognized tiles, the rack and the board:
//!
//! ```text
//! State:
//! ...............
//! ............z..
//! ...
//! Rack: "hedon*c"
//! Board:
//! 3l -- -- -- 3w -- -- 2l -- -- 3w -- -- -- 3l
//! ...
//! Board area: [150:1225, 0:1080]
//! Rack area: [1485:1630, 0:1080]
//! ```

mod error;
mod recognition;
mod recognizer;
mod report;

pub use error::Error;
pub use recognition::{Area, Recognition};
pub use recognizer::{Recognize, Recognizer};
pub use report::{Format, Report};
