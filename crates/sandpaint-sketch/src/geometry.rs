use core::ops::{Add, Mul, Sub};

/// 2D point in normalized canvas space.
///
/// Sketch geometry lives in `[0, 1]` on both axes; it is multiplied by the
/// canvas width/height only when draw commands are recorded. Values outside
/// that range are legal (subdivision and offset never clamp).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Linear interpolation; `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    #[inline]
    pub fn approx_eq(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// One of the three edges of a [`Triangle`], in enumeration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Edge {
    AB,
    BC,
    CA,
}

impl Edge {
    pub const ALL: [Edge; 3] = [Edge::AB, Edge::BC, Edge::CA];
}

/// Ordered triple of points.
///
/// Winding is not significant; only the three unordered edges matter.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    #[inline]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self([a, b, c])
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.0[0]
    }

    #[inline]
    pub fn b(&self) -> Point {
        self.0[1]
    }

    #[inline]
    pub fn c(&self) -> Point {
        self.0[2]
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        self.0
    }

    /// Returns `(start, end, opposite)` for `edge`.
    ///
    /// `opposite` is the vertex not on the edge.
    #[inline]
    pub fn edge(&self, edge: Edge) -> (Point, Point, Point) {
        let [a, b, c] = self.0;
        match edge {
            Edge::AB => (a, b, c),
            Edge::BC => (b, c, a),
            Edge::CA => (c, a, b),
        }
    }

    #[inline]
    pub fn edge_length(&self, edge: Edge) -> f64 {
        let (p, q, _) = self.edge(edge);
        p.distance(q)
    }

    /// Edges as point pairs, in `AB, BC, CA` order.
    pub fn edges(&self) -> [(Point, Point); 3] {
        Edge::ALL.map(|e| {
            let (p, q, _) = self.edge(e);
            (p, q)
        })
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.0;
        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// Signed area; positive for counter-clockwise winding in a +Y-up frame.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.0;
        0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
    }

    #[inline]
    pub fn map(&self, f: impl FnMut(Point) -> Point) -> Triangle {
        Triangle(self.0.map(f))
    }

    pub fn approx_eq(&self, other: &Triangle, eps: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(p, q)| p.approx_eq(*q, eps))
    }
}

impl From<[[f64; 2]; 3]> for Triangle {
    #[inline]
    fn from(points: [[f64; 2]; 3]) -> Self {
        Triangle(points.map(Point::from))
    }
}
