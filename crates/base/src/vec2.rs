use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

/// A 2D point or size. Pixel coordinates use `Vec2<i32>`, image sizes
/// use `Vec2<usize>`, and sub-pixel positions use `Vec2<f64>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<T: Default> Default for Vec2<T> {
    fn default() -> Self {
        Self {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Default> Vec2<T> {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vec2<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Vec2<f64> {
    /// Truncate toward zero, the way pixel addresses are derived from
    /// fractional positions.
    pub fn truncate(self) -> Vec2<i32> {
        Vec2::new(self.x as i32, self.y as i32)
    }

    pub fn distance_to(self, other: Self) -> f64 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl Vec2<i32> {
    pub fn as_f64(self) -> Vec2<f64> {
        Vec2::new(self.x as f64, self.y as f64)
    }
}

impl Vec2<usize> {
    pub fn area(self) -> usize {
        self.x * self.y
    }
}
