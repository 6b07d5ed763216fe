//! Minimal 2D geometry in `f64` points.
//!
//! The model works in its own coordinate types so it never depends on a
//! particular GUI toolkit. Coordinates follow screen conventions: the origin
//! is the top-left corner and `y` grows downward.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (grows downward).
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width and height of a region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a rectangle. Negative extents are kept as given; use
    /// [`standardized`](Self::standardized) to flip them.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at `origin` with the given size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Equivalent rectangle with non-negative width and height.
    pub fn standardized(self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self::new(x, y, width, height)
    }

    /// Top-left corner.
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Smallest `x` covered by the rectangle.
    pub fn min_x(self) -> f64 {
        self.x.min(self.x + self.width)
    }

    /// Largest `x` covered by the rectangle.
    pub fn max_x(self) -> f64 {
        self.x.max(self.x + self.width)
    }

    /// Smallest `y` covered by the rectangle.
    pub fn min_y(self) -> f64 {
        self.y.min(self.y + self.height)
    }

    /// Largest `y` covered by the rectangle.
    pub fn max_y(self) -> f64 {
        self.y.max(self.y + self.height)
    }

    /// Half-open containment: the minimum edges are inside, the maximum
    /// edges are not. Empty rectangles contain nothing.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// `point` expressed relative to this rectangle's top-left corner.
    pub fn to_local(self, point: Point) -> Point {
        Point::new(point.x - self.min_x(), point.y - self.min_y())
    }
}
