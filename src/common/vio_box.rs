use serde::{Deserialize, Serialize};

/// Axis-aligned box in image pixel coordinates.
///
/// Coordinates are sanitized at construction: non-finite values collapse to
/// zero and inverted corners are swapped, so `x1 <= x2` and `y1 <= y2` hold for
/// every constructed box. Zero-area boxes are legal inputs; every overlap
/// method below treats them as overlapping nothing instead of failing.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, PartialOrd)]
pub struct VioBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl VioBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let (x1, x2) = ordered(sanitize(x1), sanitize(x2));
        let (y1, y2) = ordered(sanitize(y1), sanitize(y2));
        Self { x1, y1, x2, y2 }
    }

    /// Returns the width of the bounding box.
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Returns the height of the bounding box.
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Returns the center x-coordinate of the bounding box.
    pub fn cx(&self) -> f32 {
        self.x1 + self.width() / 2.
    }

    /// Returns the center y-coordinate of the bounding box.
    pub fn cy(&self) -> f32 {
        self.y1 + self.height() / 2.
    }

    /// Returns the bounding box coordinates as `(x1, y1, x2, y2)`.
    pub fn xy1_xy2(&self) -> (f32, f32, f32, f32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    pub fn as_x1y1_x2y2_i32(&self) -> (i32, i32, i32, i32) {
        (self.x1.round() as i32,
         self.y1.round() as i32,
         self.x2.round() as i32,
         self.y2.round() as i32)
    }

    /// Computes the area of the bounding box.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Euclidean distance between the centers of this box and another.
    pub fn center_distance(&self, other: &VioBox) -> f32 {
        let dx = self.cx() - other.cx();
        let dy = self.cy() - other.cy();
        (dx * dx + dy * dy).sqrt()
    }

    /// Computes the intersection area between this bounding box and another.
    pub fn intersect(&self, other: &VioBox) -> f32 {
        let w = (self.x2.min(other.x2) - self.x1.max(other.x1)).max(0.);
        let h = (self.y2.min(other.y2) - self.y1.max(other.y1)).max(0.);
        w * h
    }

    /// Computes the union area between this bounding box and another.
    pub fn union(&self, other: &VioBox) -> f32 {
        self.area() + other.area() - self.intersect(other)
    }

    /// Intersection over union. Zero when the union is empty, so degenerate
    /// boxes never produce NaN.
    pub fn iou(&self, other: &VioBox) -> f32 {
        let union = self.union(other);
        if union <= 0. {
            return 0.;
        }
        self.intersect(other) / union
    }

    /// Shared vertical extent relative to the shorter of the two boxes.
    /// Zero when either box has no height.
    pub fn vertical_overlap_ratio(&self, other: &VioBox) -> f32 {
        let overlap = (self.y2.min(other.y2) - self.y1.max(other.y1)).max(0.);
        let min_height = self.height().min(other.height());
        if min_height <= 0. {
            return 0.;
        }
        overlap / min_height
    }

    /// Shared horizontal extent relative to the narrower of the two boxes.
    /// Zero when either box has no width.
    pub fn horizontal_overlap_ratio(&self, other: &VioBox) -> f32 {
        let overlap = (self.x2.min(other.x2) - self.x1.max(other.x1)).max(0.);
        let min_width = self.width().min(other.width());
        if min_width <= 0. {
            return 0.;
        }
        overlap / min_width
    }

    /// The upper half of the box: full width, top half of the height.
    pub fn top_half(&self) -> VioBox {
        VioBox::new(self.x1, self.y1, self.x2, self.y1 + self.height() / 2.)
    }

    /// Checks if this bounding box completely contains another bounding box `other`.
    pub fn contains(&self, other: &VioBox) -> bool {
        self.x1 <= other.x1
            && self.x2 >= other.x2
            && self.y1 <= other.y1
            && self.y2 >= other.y2
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() { v } else { 0. }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
