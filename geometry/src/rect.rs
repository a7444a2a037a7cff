use crate::{Contains, Point, Size};

/// A basic rectangle representation. Meant to be sorted and with finite values only.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub fn new(origin: impl Into<Point>, size: impl Into<Size>) -> Self {
        (origin.into(), size.into()).into()
    }
}

impl From<(Point, Size)> for Rect {
    fn from((origin, size): (Point, Size)) -> Self {
        let rb = origin + size;
        (origin, rb).into()
    }
}

impl From<(Point, Point)> for Rect {
    fn from((origin, end): (Point, Point)) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: end.x,
            bottom: end.y,
        }
    }
}

impl Contains<Point> for Rect {
    fn contains(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl Contains<&Point> for Rect {
    fn contains(&self, p: &Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}
