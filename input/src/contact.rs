use derive_more::Constructor;
use serde::Deserialize;
use tactile_geometry::Point;

/// Something the host reports as a contact point.
///
/// Host contact objects may be recycled once an event handler returns, so the recognizer only
/// borrows them and copies what it retains into a [`Contact`].
pub trait TouchPoint {
    fn identifier(&self) -> u64;
    fn location(&self) -> Point;
}

/// A snapshot of a contact point at the time an event was processed.
#[derive(Debug, Copy, Clone, PartialEq, Constructor, Deserialize)]
pub struct Contact {
    #[serde(rename = "id")]
    pub identifier: u64,
    pub x: f64,
    pub y: f64,
}

impl Contact {
    pub fn snapshot(point: &impl TouchPoint) -> Self {
        let Point { x, y } = point.location();
        Self::new(point.identifier(), x, y)
    }

    pub fn snapshot_all<T: TouchPoint>(points: &[T]) -> Vec<Contact> {
        points.iter().map(Self::snapshot).collect()
    }

    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl TouchPoint for Contact {
    fn identifier(&self) -> u64 {
        self.identifier
    }

    fn location(&self) -> Point {
        Contact::location(self)
    }
}

impl TouchPoint for winit::event::Touch {
    fn identifier(&self) -> u64 {
        self.id
    }

    fn location(&self) -> Point {
        Point::new(self.location.x, self.location.y)
    }
}

/// The coordinates of the first two contacts: `[x1, y1, x2, y2]`.
pub(crate) fn pair_coordinates(contacts: &[Contact]) -> Option<[f64; 4]> {
    match contacts {
        [first, second, ..] => Some([first.x, first.y, second.x, second.y]),
        _ => None,
    }
}
