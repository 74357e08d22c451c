use std::ops::{Add, Mul};

/// A point on the complex plane, also used as the iterate `z` of the escape test.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Standard complex modulus, `sqrt(re² + im²)`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn square(self) -> Self {
        self * self
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_of_3_4_is_5() {
        let c = Complex::new(-3.0, 4.0);

        assert_eq!(c.magnitude_squared(), 25.0);
        assert_eq!(c.magnitude(), 5.0);
    }

    #[test]
    fn test_zero_has_zero_magnitude() {
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_square_of_one_plus_i() {
        // (1 + i)² = 2i
        let result = Complex::new(1.0, 1.0).square();

        assert_eq!(result, Complex::new(0.0, 2.0));
    }

    #[test]
    fn test_second_mandelbrot_iterate_of_one_plus_i() {
        let c = Complex::new(1.0, 1.0);
        let z1 = Complex::ZERO.square() + c;
        let z2 = z1.square() + c;

        assert_eq!(z1.magnitude(), 2.0_f64.sqrt());
        assert_eq!(z2, Complex::new(1.0, 3.0));
        assert!(z2.magnitude() > 2.0);
    }
}
