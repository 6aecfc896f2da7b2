use crate::{Error, Recognition};
use std::fmt;
use std::str::FromStr;

/// Output format of a [Report]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Default for Format {
    fn default() -> Self {
        Format::Text
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Human readable report of a [Recognition].
///
/// ```text
/// State:
/// ...............
/// ...
/// Rack: "hedon*c"
/// Board:
/// 3l -- -- 2w ...
/// ...
/// Board area: [150:1225, 0:1080]
/// Rack area: [1485:1630, 0:1080]
/// ```
pub struct Report<'a> {
    recognition: &'a Recognition,
}

impl<'a> Report<'a> {
    pub fn new(recognition: &'a Recognition) -> Report<'a> {
        Report { recognition }
    }

    pub fn render(&self, format: Format) -> Result<String, Error> {
        match format {
            Format::Text => Ok(self.to_string()),
            Format::Json => {
                let mut json = serde_json::to_string_pretty(self.recognition)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let res = self.recognition;
        writeln!(f, "State:\n{}", res.state_ocr.join("\n"))?;
        writeln!(f, "Rack: \"{}\"", res.rack_ocr)?;
        writeln!(f, "Board:\n{}", res.board_ocr.join("\n"))?;
        writeln!(f, "Board area: {}", res.board_area)?;
        writeln!(f, "Rack area: {}", res.rack_area)
    }
}
