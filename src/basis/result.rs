//! Result of a monomial basis computation

use super::module::ModuleDescriptor;
use super::monomial::Monomial;
use super::ordering::MonomialOrdering;
use super::sequence::BirationalSequence;
use crate::lie::weight::Weight;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How a basis was obtained
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Algorithm {
    /// Recursive Minkowski sums with direct construction where needed
    Recursive,
    /// Degree `degree` of the coordinate ring of a Kodaira embedding
    CoordinateRing { degree: usize },
}

/// An immutable monomial basis of a highest weight module
#[derive(Clone, Debug)]
pub struct MonomialBasis {
    module: ModuleDescriptor,
    sequence: BirationalSequence,
    ordering: MonomialOrdering,
    /// Sorted ascending under `ordering`
    monomials: Vec<Monomial>,
    minkowski_generators: Vec<Weight>,
    algorithm: Algorithm,
}

impl MonomialBasis {
    pub(crate) fn new(
        module: ModuleDescriptor,
        sequence: BirationalSequence,
        ordering: MonomialOrdering,
        monomials: Vec<Monomial>,
        minkowski_generators: Vec<Weight>,
        algorithm: Algorithm,
    ) -> Self {
        let monomials = ordering.sorted(&monomials);
        MonomialBasis {
            module,
            sequence,
            ordering,
            monomials,
            minkowski_generators,
            algorithm,
        }
    }

    pub fn module(&self) -> &ModuleDescriptor {
        &self.module
    }

    pub fn highest_weight(&self) -> &Weight {
        self.module.highest_weight()
    }

    pub fn dimension(&self) -> usize {
        self.monomials.len()
    }

    pub fn ordering(&self) -> &MonomialOrdering {
        &self.ordering
    }

    pub fn birational_sequence(&self) -> &BirationalSequence {
        &self.sequence
    }

    pub fn monomials(&self) -> &[Monomial] {
        &self.monomials
    }

    pub fn contains(&self, monomial: &Monomial) -> bool {
        self.monomials.contains(monomial)
    }

    /// Dominant weights whose bases were not Minkowski sums of smaller ones
    pub fn minkowski_generators(&self) -> &[Weight] {
        &self.minkowski_generators
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of monomials of each weight
    pub fn weight_counts(&self) -> BTreeMap<Weight, u64> {
        let mut counts = BTreeMap::new();
        for m in &self.monomials {
            *counts
                .entry(self.sequence.weight_of(self.highest_weight(), m))
                .or_insert(0) += 1;
        }
        counts
    }

    /// Serializable summary of the result
    pub fn summary(&self) -> BasisSummary {
        BasisSummary {
            module: self.module.to_string(),
            lie_type: self.module.base_algebra().cartan_type().to_string(),
            highest_weight: self.highest_weight().coefficients().to_vec(),
            dimension: self.dimension(),
            ordering: self.ordering.to_string(),
            birational_sequence: self.sequence.coefficients(),
            monomials: self
                .monomials
                .iter()
                .map(|m| m.exponents().to_vec())
                .collect(),
            minkowski_generators: self
                .minkowski_generators
                .iter()
                .map(|w| w.coefficients().to_vec())
                .collect(),
            algorithm: self.algorithm,
        }
    }
}

impl fmt::Display for MonomialBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monomial basis of a {}", self.module)?;
        writeln!(f, "  of dimension {}", self.dimension())?;
        writeln!(f, "  with monomial ordering {}", self.ordering)?;
        writeln!(f, "  where the birational sequence used consists of operators to the negative roots")?;
        for root in self.sequence.roots() {
            writeln!(f, "    {}", root)?;
        }
        write!(f, "  and the basis was generated by Minkowski sums of the bases of the modules with highest weights")?;
        if self.minkowski_generators.is_empty() {
            write!(f, " (none)")?;
        }
        for weight in &self.minkowski_generators {
            write!(f, "\n    {}", weight)?;
        }
        Ok(())
    }
}

/// Plain-data view of a [`MonomialBasis`]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BasisSummary {
    pub module: String,
    pub lie_type: String,
    pub highest_weight: Vec<i64>,
    pub dimension: usize,
    pub ordering: String,
    pub birational_sequence: Vec<Vec<i64>>,
    pub monomials: Vec<Vec<u32>>,
    pub minkowski_generators: Vec<Vec<i64>>,
    pub algorithm: Algorithm,
}
