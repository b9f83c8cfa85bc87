//! 2D drawing surface the gallows is painted on.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single recorded drawing primitive. Coordinates are surface units with the
/// origin at the top-left corner and y growing downwards.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear { x: f64, y: f64, width: f64, height: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeArc { cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64 },
    StrokePath(Vec<Point>),
}

/// Drawing capability injected into the engine - it never owns one
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn stroke_path(&mut self, points: &[Point]);

    /// Clear the whole drawing area
    fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, width, height);
    }
}

/// Surface that keeps every operation in order so a frontend can paint it later.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    fn covers_all(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x <= 0.0 && y <= 0.0 && x + width >= self.width && y + height >= self.height
    }
}

impl Surface for DisplayList {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // A full clear makes everything before it invisible, so forget it.
        if self.covers_all(x, y, width, height) {
            self.ops.clear();
        } else {
            self.ops.push(DrawOp::Clear { x, y, width, height });
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::FillRect { x, y, width, height });
    }

    fn stroke_arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.ops.push(DrawOp::StrokeArc { cx, cy, radius, start_angle, end_angle });
    }

    fn stroke_path(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        self.ops.push(DrawOp::StrokePath(points.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_clear_drops_recorded_ops() {
        let mut list = DisplayList::new(100.0, 50.0);
        list.fill_rect(1.0, 2.0, 3.0, 4.0);
        list.stroke_path(&[Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
        assert_eq!(list.ops().len(), 2);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn partial_clear_is_recorded() {
        let mut list = DisplayList::new(100.0, 50.0);
        list.fill_rect(1.0, 2.0, 3.0, 4.0);
        list.clear_rect(0.0, 0.0, 10.0, 10.0);

        assert_eq!(
            list.ops(),
            &[
                DrawOp::FillRect { x: 1.0, y: 2.0, width: 3.0, height: 4.0 },
                DrawOp::Clear { x: 0.0, y: 0.0, width: 10.0, height: 10.0 },
            ]
        );
    }

    #[test]
    fn degenerate_paths_are_ignored() {
        let mut list = DisplayList::new(10.0, 10.0);
        list.stroke_path(&[Point::new(1.0, 1.0)]);
        list.stroke_path(&[]);
        assert!(list.is_empty());
    }
}
