use overload::overload;
use std::fmt::Formatter;
use std::ops;

/// A displacement in a two dimensional space.
///
/// Vec2 is used both to move a rectangle around and to describe its extent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec2 {
    /// The horizontal component of the vector.
    pub x: f32,
    /// The vertical component of the vector.
    pub y: f32,
}

impl Vec2 {
    /// Constructs a zero vector, a vector in the form `(0.0, 0.0)`.
    /// # Examples
    /// ```
    /// use rectf::geometry::Vec2;
    ///
    /// let v = Vec2::zero();
    ///
    /// assert_eq!(v.x, 0.0);
    /// assert_eq!(v.y, 0.0);
    /// ```
    pub fn zero() -> Vec2 {
        Vec2 { x: 0., y: 0. }
    }

    /// Constructs a vector with the given `(x, y)` components.
    /// # Examples
    /// ```
    /// use rectf::geometry::Vec2;
    ///
    /// let v = Vec2::new(3.5, -2.25);
    ///
    /// assert_eq!(v.x, 3.5);
    /// assert_eq!(v.y, -2.25);
    /// ```
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec2[{}, {}]", self.x, self.y)
    }
}

overload!((a: ?Vec2) + (b: ?Vec2) -> Vec2 {Vec2{x:a.x+b.x,y:a.y+b.y}});
overload!((a: ?Vec2) - (b: ?Vec2) -> Vec2 {Vec2{x:a.x-b.x,y:a.y-b.y}});
overload!((a: ?Vec2) * (b: f32) -> Vec2 {Vec2{x:a.x*b,y:a.y*b}});
overload!(- (a: ?Vec2) -> Vec2 {Vec2{x:-a.x,y:-a.y}});
overload!((a: &mut Vec2) += (b: ?Vec2){a.x+=b.x;a.y+=b.y;});
overload!((a: &mut Vec2) -= (b: ?Vec2){a.x-=b.x;a.y-=b.y;});
