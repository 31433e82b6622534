use serde::{Deserialize, Serialize};

/// Integer pixel coordinate. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Half-open rectangle `[x0, x1) x [y0, y1)` in full-image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Region {
    pub fn width(&self) -> i64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i64 {
        self.y1 - self.y0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x0, self.y0)
    }
}

/// Clip a half-open index range to `[0, len)`.
///
/// Returns an empty range (`start == end`) when nothing overlaps.
pub fn clip_range(start: i64, end: i64, len: usize) -> (usize, usize) {
    let len = len as i64;
    let s = start.clamp(0, len);
    let e = end.clamp(0, len);
    if e <= s {
        (s as usize, s as usize)
    } else {
        (s as usize, e as usize)
    }
}
