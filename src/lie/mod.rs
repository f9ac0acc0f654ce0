//! Root systems, weights and modules of simple Lie algebras
//!
//! Exact integer arithmetic throughout: weights and roots are integer vectors,
//! characters are integer multiplicities, and module matrices are over ℚ (or
//! rescaled to ℤ).
//!
//! # Modules
//!
//! - `cartan`: Cartan types, Dynkin diagrams, Cartan matrices (Bourbaki numbering)
//! - `weight`: weight and root lattice elements
//! - `root_system`: positive roots, reflections, reduced words, Weyl dimension
//! - `weyl`: validated reduced words
//! - `character`: Freudenthal multiplicities and Demazure characters
//! - `representation`: explicit matrices of V(λ)

pub mod cartan;
pub mod character;
pub mod representation;
pub mod root_system;
pub mod weight;
pub mod weyl;

pub use cartan::{CartanType, LieType};
pub use character::Character;
pub use representation::Representation;
pub use root_system::RootSystem;
pub use weight::{Root, Weight};
pub use weyl::WeylWord;

use crate::error::Result;
use std::fmt;

/// A simple Lie algebra, identified by its root system
#[derive(Clone, Debug)]
pub struct LieAlgebra {
    root_system: RootSystem,
}

impl LieAlgebra {
    pub fn new(lie_type: LieType, rank: usize) -> Result<Self> {
        let cartan_type = CartanType::new(lie_type, rank)?;
        Ok(LieAlgebra {
            root_system: RootSystem::new(cartan_type),
        })
    }

    pub fn cartan_type(&self) -> CartanType {
        self.root_system.cartan_type()
    }

    pub fn rank(&self) -> usize {
        self.root_system.rank()
    }

    pub fn root_system(&self) -> &RootSystem {
        &self.root_system
    }
}

impl PartialEq for LieAlgebra {
    fn eq(&self, other: &Self) -> bool {
        self.cartan_type() == other.cartan_type()
    }
}

impl Eq for LieAlgebra {}

impl fmt::Display for LieAlgebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lie algebra of type {}", self.cartan_type())
    }
}
