//! Recursive monomial basis engine
//!
//! # Algorithm
//!
//! For a dominant weight λ:
//!
//! 1. memoized result, if any
//! 2. λ = 0: the basis is {1}
//! 3. λ fundamental: direct construction
//! 4. otherwise, for every split λ = λ₁ + λ₂ into nonzero dominant weights,
//!    collect the products of the bases of λ₁ and λ₂ (Minkowski sums) until
//!    the dimension of the module at λ is reached
//! 5. if the Minkowski sums fall short, complete them by direct construction
//!
//! Splits are visited by increasing Σλ₁ᵢ², each unordered split once.
//! All state is owned by one [`MonomialEngine`] and lives for one top-level
//! computation.

use super::by_hand::extend_by_hand;
use super::module::ModuleDescriptor;
use super::monomial::Monomial;
use super::ordering::MonomialOrdering;
use super::sequence::BirationalSequence;
use crate::error::{BasisError, Result};
use crate::lie::weight::Weight;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, trace};

/// Memo table and provenance of one computation
pub struct MonomialEngine<'a> {
    sequence: &'a BirationalSequence,
    ordering: &'a MonomialOrdering,
    memo: HashMap<Weight, BTreeSet<Monomial>>,
    no_minkowski: BTreeSet<Weight>,
}

/// All dominant λ₁ with 0 ≤ λ₁ ≤ λ coordinatewise, λ₁ ∉ {0, λ}
pub fn sub_weights(highest_weight: &Weight) -> Vec<Weight> {
    let bounds = highest_weight.coefficients();
    let mut result = Vec::new();
    let mut current = vec![0i64; bounds.len()];
    loop {
        // odometer increment
        let mut i = bounds.len();
        loop {
            if i == 0 {
                return result;
            }
            i -= 1;
            if current[i] < bounds[i] {
                current[i] += 1;
                for c in current.iter_mut().skip(i + 1) {
                    *c = 0;
                }
                break;
            }
        }
        if current.as_slice() != bounds {
            result.push(Weight::new(current.clone()));
        }
    }
}

impl<'a> MonomialEngine<'a> {
    pub fn new(sequence: &'a BirationalSequence, ordering: &'a MonomialOrdering) -> Self {
        MonomialEngine {
            sequence,
            ordering,
            memo: HashMap::new(),
            no_minkowski: BTreeSet::new(),
        }
    }

    pub fn sequence(&self) -> &BirationalSequence {
        self.sequence
    }

    pub fn ordering(&self) -> &MonomialOrdering {
        self.ordering
    }

    /// Weights whose basis needed direct construction
    pub fn no_minkowski(&self) -> &BTreeSet<Weight> {
        &self.no_minkowski
    }

    pub fn memoized(&self, weight: &Weight) -> Option<&BTreeSet<Monomial>> {
        self.memo.get(weight)
    }

    /// Records a known basis for `weight`; later splits reuse it
    pub fn remember(&mut self, weight: Weight, basis: BTreeSet<Monomial>) {
        self.memo.insert(weight, basis);
    }

    /// Generators sorted by coordinate sum, then by reversed coordinates
    pub fn minkowski_generators(&self) -> Vec<Weight> {
        let mut generators: Vec<Weight> = self.no_minkowski.iter().cloned().collect();
        generators.sort_by(|a, b| {
            a.coefficient_sum().cmp(&b.coefficient_sum()).then_with(|| {
                a.coefficients()
                    .iter()
                    .rev()
                    .cmp(b.coefficients().iter().rev())
            })
        });
        generators
    }

    /// Monomial basis of `module` with per-weight counts given by its character
    pub fn compute_monomials(&mut self, module: &ModuleDescriptor) -> Result<BTreeSet<Monomial>> {
        self.compute_seeded(module, BTreeSet::new())
    }

    /// Like [`compute_monomials`](Self::compute_monomials), with monomials
    /// already known to lie in the basis
    pub fn compute_seeded(
        &mut self,
        module: &ModuleDescriptor,
        seed: BTreeSet<Monomial>,
    ) -> Result<BTreeSet<Monomial>> {
        let highest_weight = module.highest_weight().clone();
        if let Some(basis) = self.memo.get(&highest_weight) {
            if seed.is_subset(basis) {
                return Ok(basis.clone());
            }
        }

        if highest_weight.is_zero() {
            let basis = BTreeSet::from([Monomial::one(self.sequence.len())]);
            self.memo.insert(highest_weight, basis.clone());
            return Ok(basis);
        }

        let dimension = module.dimension()?;
        let mut basis = seed;

        if !highest_weight.is_fundamental() && basis.len() < dimension {
            self.add_minkowski_sums(module, &mut basis, dimension)?;
        }

        if basis.len() > dimension {
            return Err(BasisError::Inconsistent(format!(
                "Minkowski sums for {} produced {} monomials, dimension is {}",
                highest_weight,
                basis.len(),
                dimension
            )));
        }

        if basis.len() < dimension {
            debug!(
                highest_weight = %highest_weight,
                found = basis.len(),
                dimension,
                "Minkowski sums insufficient"
            );
            self.no_minkowski.insert(highest_weight.clone());
            basis = extend_by_hand(module, self.sequence, self.ordering, basis)?;
        }

        self.memo.insert(highest_weight, basis.clone());
        Ok(basis)
    }

    fn add_minkowski_sums(
        &mut self,
        module: &ModuleDescriptor,
        basis: &mut BTreeSet<Monomial>,
        dimension: usize,
    ) -> Result<()> {
        let highest_weight = module.highest_weight();
        let mut splits = sub_weights(highest_weight);
        splits.sort_by_key(Weight::norm_squared);
        let position: HashMap<&Weight, usize> =
            splits.iter().enumerate().map(|(i, w)| (w, i)).collect();

        for (i, lambda_1) in splits.iter().enumerate() {
            let lambda_2 = highest_weight - lambda_1;
            if position.get(&lambda_2).map_or(true, |&j| i > j) {
                continue;
            }
            let first = self.compute_monomials(&module.similar(lambda_1.clone()))?;
            let second = self.compute_monomials(&module.similar(lambda_2.clone()))?;
            trace!(
                lambda_1 = %lambda_1,
                lambda_2 = %lambda_2,
                "adding Minkowski sum"
            );
            for p in &first {
                for q in &second {
                    basis.insert(p * q);
                }
            }
            if basis.len() >= dimension {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::ordering::MonomialOrderingKind;
    use crate::lie::cartan::LieType;
    use crate::lie::LieAlgebra;
    use std::sync::Arc;

    #[test]
    fn test_sub_weights() {
        let w = Weight::new(vec![1, 2]);
        let subs = sub_weights(&w);
        assert_eq!(subs.len(), 2 * 3 - 2);
        assert!(!subs.contains(&Weight::new(vec![0, 0])));
        assert!(!subs.contains(&w));
        assert!(subs.iter().all(|s| s.is_bounded_by(&w)));
        assert!(sub_weights(&Weight::new(vec![0, 1])).is_empty());
    }

    #[test]
    fn test_a2_adjoint_uses_only_minkowski() {
        let a2 = Arc::new(LieAlgebra::new(LieType::A, 2).unwrap());
        let module = ModuleDescriptor::simple(a2.clone(), &[1, 1]).unwrap();
        let seq = BirationalSequence::ascending_height(a2.root_system());
        let ordering = MonomialOrdering::new(MonomialOrderingKind::Degrevlex, seq.heights());
        let mut engine = MonomialEngine::new(&seq, &ordering);
        let basis = engine.compute_monomials(&module).unwrap();
        assert_eq!(basis.len(), 8);
        assert!(!engine.no_minkowski().contains(module.highest_weight()));
        assert_eq!(
            engine.minkowski_generators(),
            vec![Weight::new(vec![1, 0]), Weight::new(vec![0, 1])]
        );
    }

    #[test]
    fn test_zero_weight() {
        let b2 = Arc::new(LieAlgebra::new(LieType::B, 2).unwrap());
        let module = ModuleDescriptor::simple(b2.clone(), &[0, 0]).unwrap();
        let seq = BirationalSequence::ascending_height(b2.root_system());
        let ordering = MonomialOrdering::new(MonomialOrderingKind::Lex, seq.heights());
        let mut engine = MonomialEngine::new(&seq, &ordering);
        let basis = engine.compute_monomials(&module).unwrap();
        assert_eq!(basis, BTreeSet::from([Monomial::one(4)]));
        assert!(engine.no_minkowski().is_empty());
    }

    #[test]
    fn test_memo_is_reused() {
        let a2 = Arc::new(LieAlgebra::new(LieType::A, 2).unwrap());
        let seq = BirationalSequence::ascending_height(a2.root_system());
        let ordering = MonomialOrdering::new(MonomialOrderingKind::Degrevlex, seq.heights());
        let mut engine = MonomialEngine::new(&seq, &ordering);
        let module = ModuleDescriptor::simple(a2, &[2, 0]).unwrap();
        let first = engine.compute_monomials(&module).unwrap();
        assert_eq!(first.len(), 6);
        assert!(engine.memoized(&Weight::new(vec![1, 0])).is_some());
        let second = engine.compute_monomials(&module).unwrap();
        assert_eq!(first, second);
    }
}
