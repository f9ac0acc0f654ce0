//! Cartan types and their Cartan matrices
//!
//! Nodes are numbered as in Bourbaki. Simple roots carry the squared lengths
//!
//! ```text
//! A_n, D_n, E_n : 2 2 … 2
//! B_n           : 4 … 4 2      (α_n short)
//! C_n           : 2 … 2 4      (α_n long)
//! F_4           : 4 4 2 2
//! G_2           : 2 6          (α_1 short)
//! ```
//!
//! and adjacent nodes satisfy (αᵢ, αⱼ) = -max(|αᵢ|², |αⱼ|²)/2. All lengths are
//! even, so every pairing used later stays integral.
//!
//! The Cartan matrix entry is aᵢⱼ = ⟨αᵢ, αⱼ^∨⟩ = 2(αᵢ, αⱼ)/(αⱼ, αⱼ); row i is
//! αᵢ written in fundamental weights.

use crate::error::{BasisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Family of a simple Lie algebra
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum LieType {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl LieType {
    pub fn symbol(&self) -> char {
        match self {
            LieType::A => 'A',
            LieType::B => 'B',
            LieType::C => 'C',
            LieType::D => 'D',
            LieType::E => 'E',
            LieType::F => 'F',
            LieType::G => 'G',
        }
    }
}

impl FromStr for LieType {
    type Err = BasisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(LieType::A),
            "B" => Ok(LieType::B),
            "C" => Ok(LieType::C),
            "D" => Ok(LieType::D),
            "E" => Ok(LieType::E),
            "F" => Ok(LieType::F),
            "G" => Ok(LieType::G),
            other => Err(BasisError::InvalidLieType {
                lie_type: other.to_string(),
                rank: 0,
                reason: "unknown family".to_string(),
            }),
        }
    }
}

impl fmt::Display for LieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Validated (type, rank) pair
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CartanType {
    lie_type: LieType,
    rank: usize,
}

impl CartanType {
    pub fn new(lie_type: LieType, rank: usize) -> Result<Self> {
        let valid = match lie_type {
            LieType::A => rank >= 1,
            LieType::B | LieType::C => rank >= 2,
            LieType::D => rank >= 4,
            LieType::E => (6..=8).contains(&rank),
            LieType::F => rank == 4,
            LieType::G => rank == 2,
        };
        if !valid {
            return Err(BasisError::InvalidLieType {
                lie_type: lie_type.to_string(),
                rank,
                reason: "unsupported rank for this family".to_string(),
            });
        }
        Ok(CartanType { lie_type, rank })
    }

    pub fn lie_type(&self) -> LieType {
        self.lie_type
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Squared lengths (αᵢ, αᵢ) of the simple roots
    pub fn root_norms(&self) -> Vec<i64> {
        let n = self.rank;
        match self.lie_type {
            LieType::A | LieType::D | LieType::E => vec![2; n],
            LieType::B => {
                let mut norms = vec![4; n];
                norms[n - 1] = 2;
                norms
            }
            LieType::C => {
                let mut norms = vec![2; n];
                norms[n - 1] = 4;
                norms
            }
            LieType::F => vec![4, 4, 2, 2],
            LieType::G => vec![2, 6],
        }
    }

    /// Edges of the Dynkin diagram (0-based nodes)
    pub fn dynkin_edges(&self) -> Vec<(usize, usize)> {
        let n = self.rank;
        match self.lie_type {
            LieType::A | LieType::B | LieType::C | LieType::F | LieType::G => {
                (0..n - 1).map(|i| (i, i + 1)).collect()
            }
            LieType::D => {
                let mut edges: Vec<(usize, usize)> = (0..n - 2).map(|i| (i, i + 1)).collect();
                edges.push((n - 3, n - 1));
                edges
            }
            LieType::E => {
                // 1-3-4-5-6(-7(-8)) with 2 attached to 4
                let mut edges = vec![(0, 2), (1, 3)];
                edges.extend((2..n - 1).map(|i| (i, i + 1)));
                edges
            }
        }
    }

    /// Symmetric bilinear form (αᵢ, αⱼ) on simple roots
    pub fn bilinear_form(&self) -> Vec<Vec<i64>> {
        let norms = self.root_norms();
        let mut form = vec![vec![0; self.rank]; self.rank];
        for (i, row) in form.iter_mut().enumerate() {
            row[i] = norms[i];
        }
        for (i, j) in self.dynkin_edges() {
            let value = -norms[i].max(norms[j]) / 2;
            form[i][j] = value;
            form[j][i] = value;
        }
        form
    }

    /// Cartan matrix aᵢⱼ = 2(αᵢ, αⱼ)/(αⱼ, αⱼ)
    pub fn cartan_matrix(&self) -> Vec<Vec<i64>> {
        let form = self.bilinear_form();
        (0..self.rank)
            .map(|i| {
                (0..self.rank)
                    .map(|j| 2 * form[i][j] / form[j][j])
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for CartanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.lie_type, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_validation() {
        assert!(CartanType::new(LieType::A, 1).is_ok());
        assert!(CartanType::new(LieType::D, 3).is_err());
        assert!(CartanType::new(LieType::E, 9).is_err());
        assert!(CartanType::new(LieType::G, 3).is_err());
        assert!(CartanType::new(LieType::F, 4).is_ok());
    }

    #[test]
    fn test_cartan_matrix_a2() {
        let ct = CartanType::new(LieType::A, 2).unwrap();
        assert_eq!(ct.cartan_matrix(), vec![vec![2, -1], vec![-1, 2]]);
    }

    #[test]
    fn test_cartan_matrix_b2_g2() {
        let b2 = CartanType::new(LieType::B, 2).unwrap();
        assert_eq!(b2.cartan_matrix(), vec![vec![2, -2], vec![-1, 2]]);

        let g2 = CartanType::new(LieType::G, 2).unwrap();
        assert_eq!(g2.cartan_matrix(), vec![vec![2, -1], vec![-3, 2]]);
    }

    #[test]
    fn test_cartan_matrix_e6_branch() {
        let e6 = CartanType::new(LieType::E, 6).unwrap();
        let a = e6.cartan_matrix();
        assert_eq!(a[1][3], -1);
        assert_eq!(a[0][2], -1);
        assert_eq!(a[0][1], 0);
        let edges: usize = a.iter().flatten().filter(|&&x| x == -1).count();
        assert_eq!(edges, 10);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("g".parse::<LieType>().unwrap(), LieType::G);
        assert!("X".parse::<LieType>().is_err());
        let ct = CartanType::new(LieType::F, 4).unwrap();
        assert_eq!(ct.to_string(), "F4");
    }
}
