//! Options shared by all basis computations

use crate::basis::ordering::{MonomialOrdering, MonomialOrderingKind};
use crate::basis::sequence::BirationalSequence;
use crate::error::{BasisError, Result};
use crate::lie::root_system::RootSystem;
use crate::lie::weyl::WeylWord;
use serde::{Deserialize, Serialize};

/// How the birational sequence is specified
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum OperatorSpec {
    /// All positive roots by ascending height
    #[default]
    AscendingHeight,
    /// All positive roots by descending height
    DescendingHeight,
    /// 1-based positions in the positive root list (see `list_operators`)
    Indices(Vec<usize>),
    /// Root coefficient vectors in simple roots
    Roots(Vec<Vec<i64>>),
    /// Lusztig datum of a 1-based reduced word of the longest element
    Lusztig(Vec<usize>),
    /// One simple root per letter of a 1-based reduced word
    SimpleRoots(Vec<usize>),
}

impl OperatorSpec {
    /// Builds the sequence; an empty sequence is rejected
    pub fn resolve(&self, root_system: &RootSystem) -> Result<BirationalSequence> {
        let sequence = match self {
            OperatorSpec::AscendingHeight => BirationalSequence::ascending_height(root_system),
            OperatorSpec::DescendingHeight => BirationalSequence::descending_height(root_system),
            OperatorSpec::Indices(indices) => {
                BirationalSequence::from_indices(root_system, indices)?
            }
            OperatorSpec::Roots(roots) => BirationalSequence::from_coefficients(root_system, roots)?,
            OperatorSpec::Lusztig(word) => {
                let word = WeylWord::new(root_system, word)?;
                BirationalSequence::lusztig(root_system, &word)?
            }
            OperatorSpec::SimpleRoots(word) => {
                let word = WeylWord::new(root_system, word)?;
                BirationalSequence::simple_roots(root_system, &word)?
            }
        };
        if sequence.is_empty() {
            return Err(BasisError::InvalidOperator(
                "the birational sequence has no operators".to_string(),
            ));
        }
        Ok(sequence)
    }
}

/// Ordering and birational sequence of a computation
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ComputeOptions {
    pub ordering: MonomialOrderingKind,
    pub operators: OperatorSpec,
}

impl ComputeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ordering(mut self, ordering: MonomialOrderingKind) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_operators(mut self, operators: OperatorSpec) -> Self {
        self.operators = operators;
        self
    }

    /// Resolves the sequence and binds the ordering to its operator heights
    pub fn resolve(
        &self,
        root_system: &RootSystem,
    ) -> Result<(BirationalSequence, MonomialOrdering)> {
        let sequence = self.operators.resolve(root_system)?;
        let ordering = MonomialOrdering::new(self.ordering, sequence.heights());
        Ok((sequence, ordering))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lie::cartan::{CartanType, LieType};

    #[test]
    fn test_defaults() {
        let options = ComputeOptions::default();
        assert_eq!(options.ordering, MonomialOrderingKind::Degrevlex);
        assert_eq!(options.operators, OperatorSpec::AscendingHeight);
    }

    #[test]
    fn test_resolve_word_specs() {
        let b2 = RootSystem::new(CartanType::new(LieType::B, 2).unwrap());
        let options = ComputeOptions::new()
            .with_ordering(MonomialOrderingKind::Wdegrevlex)
            .with_operators(OperatorSpec::Lusztig(vec![1, 2, 1, 2]));
        let (sequence, ordering) = options.resolve(&b2).unwrap();
        assert_eq!(sequence.len(), 4);
        assert_eq!(ordering.weights(), sequence.heights().as_slice());

        let simple = OperatorSpec::SimpleRoots(vec![2, 1, 2, 1]).resolve(&b2).unwrap();
        assert_eq!(simple.coefficients(), vec![vec![0, 1], vec![1, 0], vec![0, 1], vec![1, 0]]);

        assert!(matches!(
            OperatorSpec::Lusztig(vec![1, 2, 1]).resolve(&b2),
            Err(BasisError::InvalidWeylWord { .. })
        ));
        assert!(matches!(
            OperatorSpec::SimpleRoots(vec![1, 1]).resolve(&b2),
            Err(BasisError::InvalidWeylWord { .. })
        ));
    }

    #[test]
    fn test_empty_sequences_are_rejected() {
        let a2 = RootSystem::new(CartanType::new(LieType::A, 2).unwrap());
        for spec in [
            OperatorSpec::Indices(vec![]),
            OperatorSpec::Roots(vec![]),
            OperatorSpec::SimpleRoots(vec![]),
        ] {
            assert!(matches!(spec.resolve(&a2), Err(BasisError::InvalidOperator(_))), "{:?}", spec);
        }
    }
}
