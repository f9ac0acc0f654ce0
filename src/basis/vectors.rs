//! Vectors of monomials
//!
//! For one highest weight λ, every operator of the birational sequence becomes
//! an integer matrix on V(λ) (a nonzero multiple of the root vector f_β), and a
//! monomial becomes the vector obtained by applying its operators to v_λ,
//! rightmost operator first. Rescaling an operator does not change which sets
//! of monomial vectors are linearly independent.

use super::monomial::Monomial;
use super::sequence::BirationalSequence;
use crate::error::{BasisError, Result};
use crate::lie::representation::Representation;
use crate::lie::root_system::RootSystem;
use crate::linalg::sparse::{SparseMatrix, SparseVec};
use num_bigint::BigInt;
use num_rational::BigRational;
use std::collections::HashMap;

/// Integer matrices of the operators f_{β₁}, …, f_{β_N} on V(λ)
#[derive(Clone, Debug)]
pub struct OperatorMatrices {
    matrices: Vec<SparseMatrix<BigInt>>,
    dim: usize,
}

impl OperatorMatrices {
    pub fn build(
        root_system: &RootSystem,
        representation: &Representation,
        sequence: &BirationalSequence,
    ) -> Result<Self> {
        let mut rational: HashMap<usize, SparseMatrix<BigRational>> = HashMap::new();
        let mut integral: HashMap<usize, SparseMatrix<BigInt>> = HashMap::new();
        let mut matrices = Vec::with_capacity(sequence.len());

        for (root, &index) in sequence.roots().iter().zip(sequence.root_indices()) {
            if index >= root_system.num_positive_roots() {
                return Err(BasisError::InvalidOperator(format!(
                    "{} is not a positive root of {}",
                    root,
                    root_system.cartan_type()
                )));
            }
            if let Some(matrix) = integral.get(&index) {
                matrices.push(matrix.clone());
                continue;
            }
            let matrix = representation
                .root_lowering(root_system, index, &mut rational)
                .to_integer_multiple();
            integral.insert(index, matrix.clone());
            matrices.push(matrix);
        }

        Ok(OperatorMatrices {
            matrices,
            dim: representation.dim(),
        })
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Dimension of the module the matrices act on
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn matrix(&self, k: usize) -> &SparseMatrix<BigInt> {
        &self.matrices[k]
    }

    /// f^{e₁}⋯f^{e_N} applied to `start`, last factor first
    pub fn apply_monomial(&self, monomial: &Monomial, start: &SparseVec<BigInt>) -> SparseVec<BigInt> {
        let mut v = start.clone();
        for (k, &e) in monomial.exponents().iter().enumerate().rev() {
            for _ in 0..e {
                if v.is_zero() {
                    return v;
                }
                v = self.matrices[k].apply(&v);
            }
        }
        v
    }

    /// The vector of `monomial` starting from the highest weight vector
    pub fn monomial_vector(&self, monomial: &Monomial) -> SparseVec<BigInt> {
        self.apply_monomial(monomial, &SparseVec::unit(0))
    }
}

/// Memoized monomial vectors
///
/// x^e = x_k · x^{e - ε_k} with k the first variable of x^e, and x_k acts
/// last, so each vector is one matrix product away from a smaller one.
#[derive(Debug, Default)]
pub struct VectorCache {
    vectors: HashMap<Monomial, SparseVec<BigInt>>,
}

impl VectorCache {
    pub fn new() -> Self {
        VectorCache {
            vectors: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vector(&mut self, operators: &OperatorMatrices, monomial: &Monomial) -> SparseVec<BigInt> {
        // Walk down to a cached (or trivial) monomial, then multiply back up
        let mut chain: Vec<(Monomial, usize)> = Vec::new();
        let mut current = monomial.clone();
        let mut vector = loop {
            if let Some(v) = self.vectors.get(&current) {
                break v.clone();
            }
            match current.first_nonzero() {
                None => break SparseVec::unit(0),
                Some(k) => {
                    let smaller = current.decremented(k).unwrap_or_else(|| current.clone());
                    chain.push((current, k));
                    current = smaller;
                }
            }
        };
        for (m, k) in chain.into_iter().rev() {
            if !vector.is_zero() {
                vector = operators.matrix(k).apply(&vector);
            }
            self.vectors.insert(m, vector.clone());
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lie::cartan::{CartanType, LieType};
    use crate::lie::weight::Weight;

    fn setup(lambda: &[i64], indices: &[usize]) -> (RootSystem, OperatorMatrices) {
        let rs = RootSystem::new(CartanType::new(LieType::A, 2).unwrap());
        let rep = Representation::build(&rs, &Weight::new(lambda.to_vec())).unwrap();
        let seq = BirationalSequence::from_indices(&rs, indices).unwrap();
        let ops = OperatorMatrices::build(&rs, &rep, &seq).unwrap();
        (rs, ops)
    }

    #[test]
    fn test_rightmost_operator_acts_first() {
        // V(ω₁) of A2 with sequence (α₁, α₂): f₂v = 0 but f₂f₁v ≠ 0
        let (_, ops) = setup(&[1, 0], &[1, 2]);
        assert_eq!(ops.dim(), 3);
        assert!(!ops.monomial_vector(&Monomial::from_exponents(vec![1, 0])).is_zero());
        assert!(ops.monomial_vector(&Monomial::from_exponents(vec![0, 1])).is_zero());
        assert!(ops.monomial_vector(&Monomial::from_exponents(vec![1, 1])).is_zero());

        let (_, swapped) = setup(&[1, 0], &[2, 1]);
        assert!(!swapped.monomial_vector(&Monomial::from_exponents(vec![1, 1])).is_zero());
    }

    #[test]
    fn test_cache_agrees_with_direct_application() {
        let (_, ops) = setup(&[2, 1], &[1, 2, 3]);
        let mut cache = VectorCache::new();
        for e in [[0, 0, 0], [1, 0, 0], [2, 1, 0], [0, 1, 1], [1, 1, 1], [3, 0, 0], [0, 0, 2]] {
            let m = Monomial::from_exponents(e.to_vec());
            assert_eq!(cache.vector(&ops, &m), ops.monomial_vector(&m), "{}", m);
        }
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_root_vector_of_highest_root() {
        // f_{α₁+α₂} v ≠ 0 in V(ω₁) and V(ω₂)
        let (_, ops) = setup(&[1, 0], &[3]);
        assert!(!ops.monomial_vector(&Monomial::variable(1, 0)).is_zero());
        let (_, ops) = setup(&[0, 1], &[3]);
        assert!(!ops.monomial_vector(&Monomial::variable(1, 0)).is_zero());
    }
}
