//! Weights and roots as exact integer coordinate vectors.
//!
//! - [`Weight`]: coordinates in the basis of fundamental weights ω₁, …, ωᵣ
//! - [`Root`]: coordinates in the basis of simple roots α₁, …, αᵣ
//!
//! Both are immutable value types; arithmetic returns new values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Element of the weight lattice, written in fundamental weights
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Weight(Vec<i64>);

impl Weight {
    pub fn new(coefficients: Vec<i64>) -> Self {
        Weight(coefficients)
    }

    pub fn zero(rank: usize) -> Self {
        Weight(vec![0; rank])
    }

    /// The i-th fundamental weight ωᵢ (0-based)
    pub fn fundamental(rank: usize, i: usize) -> Self {
        let mut coefficients = vec![0; rank];
        coefficients[i] = 1;
        Weight(coefficients)
    }

    pub fn coefficients(&self) -> &[i64] {
        &self.0
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Dominant: every coordinate is non-negative
    pub fn is_dominant(&self) -> bool {
        self.0.iter().all(|&c| c >= 0)
    }

    /// Exactly one coordinate equal to 1, all others 0
    pub fn is_fundamental(&self) -> bool {
        self.0.iter().filter(|&&c| c == 1).count() == 1 && self.0.iter().all(|&c| c == 0 || c == 1)
    }

    /// Sum of squared coordinates
    pub fn norm_squared(&self) -> i64 {
        self.0.iter().map(|c| c * c).sum()
    }

    pub fn coefficient_sum(&self) -> i64 {
        self.0.iter().sum()
    }

    /// Coordinatewise `0 <= self <= other`
    pub fn is_bounded_by(&self, other: &Weight) -> bool {
        self.0.iter().zip(&other.0).all(|(&a, &b)| 0 <= a && a <= b)
    }
}

impl From<Vec<i64>> for Weight {
    fn from(coefficients: Vec<i64>) -> Self {
        Weight(coefficients)
    }
}

impl Add for &Weight {
    type Output = Weight;

    fn add(self, other: &Weight) -> Weight {
        Weight(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }
}

impl Sub for &Weight {
    type Output = Weight;

    fn sub(self, other: &Weight) -> Weight {
        Weight(self.0.iter().zip(&other.0).map(|(a, b)| a - b).collect())
    }
}

impl Mul<&Weight> for i64 {
    type Output = Weight;

    fn mul(self, weight: &Weight) -> Weight {
        Weight(weight.0.iter().map(|c| self * c).collect())
    }
}

impl Neg for &Weight {
    type Output = Weight;

    fn neg(self) -> Weight {
        Weight(self.0.iter().map(|c| -c).collect())
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coefficients(f, &self.0)
    }
}

/// Element of the root lattice, written in simple roots
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Root(Vec<i64>);

impl Root {
    pub fn new(coefficients: Vec<i64>) -> Self {
        Root(coefficients)
    }

    /// The i-th simple root αᵢ (0-based)
    pub fn simple(rank: usize, i: usize) -> Self {
        let mut coefficients = vec![0; rank];
        coefficients[i] = 1;
        Root(coefficients)
    }

    pub fn coefficients(&self) -> &[i64] {
        &self.0
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Height: sum of simple-root coefficients
    pub fn height(&self) -> i64 {
        self.0.iter().sum()
    }

    /// Nonzero with all coefficients non-negative
    pub fn is_positive(&self) -> bool {
        self.0.iter().all(|&c| c >= 0) && self.0.iter().any(|&c| c > 0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    pub(crate) fn shifted(&self, i: usize, by: i64) -> Root {
        let mut coefficients = self.0.clone();
        coefficients[i] += by;
        Root(coefficients)
    }
}

impl Add for &Root {
    type Output = Root;

    fn add(self, other: &Root) -> Root {
        Root(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }
}

impl Sub for &Root {
    type Output = Root;

    fn sub(self, other: &Root) -> Root {
        Root(self.0.iter().zip(&other.0).map(|(a, b)| a - b).collect())
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coefficients(f, &self.0)
    }
}

fn write_coefficients(f: &mut fmt::Formatter<'_>, coefficients: &[i64]) -> fmt::Result {
    write!(f, "[")?;
    for (i, c) in coefficients.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", c)?;
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fundamental_detection() {
        assert!(Weight::new(vec![0, 1, 0]).is_fundamental());
        assert!(!Weight::new(vec![0, 0, 0]).is_fundamental());
        assert!(!Weight::new(vec![1, 1, 0]).is_fundamental());
        assert!(!Weight::new(vec![2, 0, 0]).is_fundamental());
    }

    #[test]
    fn test_weight_arithmetic() {
        let a = Weight::new(vec![2, 1]);
        let b = Weight::new(vec![1, 1]);
        assert_eq!(&a - &b, Weight::new(vec![1, 0]));
        assert_eq!(&a + &b, Weight::new(vec![3, 2]));
        assert_eq!(3 * &b, Weight::new(vec![3, 3]));
        assert!(b.is_bounded_by(&a));
        assert!(!a.is_bounded_by(&b));
    }

    #[test]
    fn test_root_positivity_and_height() {
        assert!(Root::new(vec![1, 2]).is_positive());
        assert!(!Root::new(vec![0, 0]).is_positive());
        assert!(!Root::new(vec![1, -1]).is_positive());
        assert_eq!(Root::new(vec![3, 2]).height(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Weight::new(vec![1, 0, 2]).to_string(), "[1, 0, 2]");
        assert_eq!(Root::simple(2, 1).to_string(), "[0, 1]");
    }
}
