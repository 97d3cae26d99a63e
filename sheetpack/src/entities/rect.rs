use crate::util::FPA;

/// Axis-aligned rectangle, anchored at its bottom-left corner
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether a `width` x `height` rectangle fits inside `self`
    pub fn fits(&self, width: f64, height: f64) -> bool {
        self.width >= width && self.height >= height
    }

    /// Whether the interiors of both rectangles intersect.
    /// Rectangles that only share (part of) an edge do not overlap, up to floating point tolerance.
    pub fn overlaps(&self, other: &Rect) -> bool {
        FPA(self.x) < FPA(other.x_max())
            && FPA(other.x) < FPA(self.x_max())
            && FPA(self.y) < FPA(other.y_max())
            && FPA(other.y) < FPA(self.y_max())
    }

    /// Whether `other` lies entirely within `self`, up to floating point tolerance
    pub fn contains(&self, other: &Rect) -> bool {
        FPA(self.x) <= FPA(other.x)
            && FPA(self.y) <= FPA(other.y)
            && FPA(other.x_max()) <= FPA(self.x_max())
            && FPA(other.y_max()) <= FPA(self.y_max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(50.0, 0.0, 50.0, 50.0);
        let c = Rect::new(0.0, 50.0, 100.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!b.overlaps(&c));
    }

    #[test]
    fn overlap_and_containment() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(25.0, 25.0, 50.0, 50.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let sheet = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(sheet.contains(&a));
        assert!(sheet.contains(&b));
        assert!(!sheet.contains(&Rect::new(60.0, 0.0, 50.0, 10.0)));
        // rounding noise on the far edge is tolerated
        assert!(sheet.contains(&Rect::new(0.1 + 0.2, 0.0, 99.7, 10.0)));
    }
}
