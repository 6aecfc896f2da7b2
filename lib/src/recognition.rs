use image::math::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use wordfeud_ocr::OcrResults;

/// A rectangular region of the screenshot, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Area {
    /// The `y` range covered by the area. The end is clamped to `u32::MAX`.
    pub fn rows(&self) -> Range<u32> {
        self.y..self.y.saturating_add(self.height)
    }

    /// The `x` range covered by the area. The end is clamped to `u32::MAX`.
    pub fn cols(&self) -> Range<u32> {
        self.x..self.x.saturating_add(self.width)
    }

    /// Number of pixels in the area
    pub fn pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl From<Rect> for Area {
    fn from(rect: Rect) -> Self {
        Area {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Formats as `[y0:y1, x0:x1]`: the row slice, then the column slice.
impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (rows, cols) = (self.rows(), self.cols());
        write!(
            f,
            "[{}:{}, {}:{}]",
            rows.start, rows.end, cols.start, cols.end
        )
    }
}

/// The recognized state of a Wordfeud screenshot, flattened to text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recognition {
    /// Tiles on the board, one line per row.
    ///
    /// `.` is an empty cell, lowercase a normal tile, uppercase a blank tile used as wildcard.
    pub state_ocr: Vec<String>,
    /// Tiles on the rack. Empty slots are spaces, a blank tile is `*`.
    pub rack_ocr: String,
    /// Bonus squares of the board, one line per row with the cells separated by a space.
    pub board_ocr: Vec<String>,
    /// Board area bounding rectangle
    pub board_area: Area,
    /// Rack area bounding rectangle
    pub rack_area: Area,
}

impl Recognition {
    /// Field names of a recognition, in report order.
    pub const KEYS: [&'static str; 5] =
        ["state_ocr", "rack_ocr", "board_ocr", "board_area", "rack_area"];
}

impl From<&OcrResults> for Recognition {
    fn from(res: &OcrResults) -> Self {
        Recognition {
            state_ocr: join_rows(&res.tiles_ocr, ""),
            rack_ocr: rack_text(&res.rack_ocr),
            board_ocr: join_rows(&res.grid_ocr, " "),
            board_area: Area::from(res.board_area),
            rack_area: Area::from(res.rack_area),
        }
    }
}

fn join_rows(grid: &[Vec<String>], sep: &str) -> Vec<String> {
    grid.iter().map(|row| row.join(sep)).collect()
}

fn rack_text(rack: &[Vec<String>]) -> String {
    rack.first()
        .map(|row| row.join("").replace('.', " "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfeud_ocr::Ocr;

    fn grid(rows: &[&str]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.chars().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_join_rows() {
        let tiles = grid(&["..z", "hEy"]);
        assert_eq!(join_rows(&tiles, ""), vec!["..z", "hEy"]);

        let bonus = vec![vec![String::from("3w"), String::from("--"), String::from("ss")]];
        assert_eq!(join_rows(&bonus, " "), vec!["3w -- ss"]);
    }

    #[test]
    fn test_rack_text() {
        assert_eq!(rack_text(&grid(&["ab.*..c"])), "ab *  c");
        // only the first row is the rack
        assert_eq!(rack_text(&grid(&["xy", "zz"])), "xy");
        assert_eq!(rack_text(&[]), "");
    }

    #[test]
    fn test_area() {
        let area = Area::from(Rect {
            x: 0,
            y: 150,
            width: 1080,
            height: 1075,
        });
        assert_eq!(area.rows(), 150..1225);
        assert_eq!(area.cols(), 0..1080);
        assert_eq!(area.pixels(), 1_161_000);
        assert_eq!(area.to_string(), "[150:1225, 0:1080]");
    }

    #[test]
    fn test_area_at_limit() {
        let area = Area {
            x: u32::MAX - 1,
            y: u32::MAX,
            width: 5,
            height: 1,
        };
        assert_eq!(area.rows(), u32::MAX..u32::MAX);
        assert_eq!(area.cols(), u32::MAX - 1..u32::MAX);
        assert_eq!(
            area.to_string(),
            format!("[{0}:{0}, {1}:{0}]", u32::MAX, u32::MAX - 1)
        );
    }

    #[test]
    fn test_from_ocr_results() {
        let rect = |x, y, width, height| Rect {
            x,
            y,
            width,
            height,
        };
        let res = OcrResults {
            tiles_ocr: Ocr(grid(&["..x", "qIt"])),
            grid_ocr: Ocr(vec![
                vec![String::from("3w"), String::from("--")],
                vec![String::from("--"), String::from("ss")],
            ]),
            rack_ocr: Ocr(grid(&["ab.*"])),
            tiles_stats: Vec::new(),
            grid_stats: Vec::new(),
            rack_stats: Vec::new(),
            board_area: rect(1, 150, 1080, 1075),
            rack_area: rect(2, 1485, 1070, 145),
        };
        let recognition = Recognition::from(&res);
        assert_eq!(recognition.state_ocr, vec!["..x", "qIt"]);
        assert_eq!(recognition.board_ocr, vec!["3w --", "-- ss"]);
        assert_eq!(recognition.rack_ocr, "ab *");
        assert_eq!(
            recognition.board_area,
            Area {
                x: 1,
                y: 150,
                width: 1080,
                height: 1075
            }
        );
        assert_eq!(
            recognition.rack_area,
            Area {
                x: 2,
                y: 1485,
                width: 1070,
                height: 145
            }
        );
    }
}
