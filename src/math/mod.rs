pub mod intersect_2d;
pub mod line_2d;
pub mod orient_2d;
pub mod polygon_2d;

use crate::error::{ConfigError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for treating floating-point results as zero.
pub const EPS: f64 = 1e-9;

/// Epsilon shared by every predicate for zero and equality comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    eps: f64,
}

impl Tolerance {
    /// Creates a tolerance with a custom epsilon.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTolerance` if `eps` is not finite and positive.
    pub fn new(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::InvalidTolerance { value: eps }.into());
        }
        Ok(Self { eps })
    }

    /// Returns the epsilon.
    #[must_use]
    pub fn eps(self) -> f64 {
        self.eps
    }

    /// Whether `value` is within epsilon of zero.
    #[must_use]
    pub fn is_zero(self, value: f64) -> bool {
        value.abs() < self.eps
    }

    /// Whether `a` and `b` differ by less than epsilon.
    #[must_use]
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        self.is_zero(a - b)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: EPS }
    }
}
