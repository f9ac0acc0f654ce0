//! Direct basis construction by exact linear algebra
//!
//! Given monomials already known to belong to the basis, every weight space
//! that is still short of its multiplicity is filled greedily: lattice-point
//! candidates of that weight are tried in ascending monomial order and kept
//! iff their vectors raise the rank of the weight space's echelon form.

use super::lattice::{candidate_monomials, compute_zero_coordinates};
use super::module::{ModuleDescriptor, ModuleKind};
use super::monomial::Monomial;
use super::ordering::MonomialOrdering;
use super::sequence::BirationalSequence;
use super::vectors::{OperatorMatrices, VectorCache};
use crate::error::{BasisError, Result};
use crate::lie::representation::Representation;
use crate::lie::root_system::RootSystem;
use crate::lie::weyl::WeylWord;
use crate::linalg::echelon::SparseEchelon;
use crate::linalg::sparse::SparseVec;
use num_rational::BigRational;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, trace};

/// Per-weight-space state during the extension
struct SpaceState {
    echelon: SparseEchelon,
    target: usize,
}

/// Necessary condition for a nonzero vector: every partial product, applied
/// rightmost first, lands in a weight of V(λ)
fn realizable(
    representation: &Representation,
    sequence: &BirationalSequence,
    monomial: &Monomial,
) -> bool {
    let r = representation.highest_weight().rank();
    let mut depth = vec![0i64; r];
    for (root, &e) in sequence.roots().iter().zip(monomial.exponents()).rev() {
        for _ in 0..e {
            for (d, &c) in depth.iter_mut().zip(root.coefficients()) {
                *d += c;
            }
            if representation.weight_space(&depth).is_none() {
                return false;
            }
        }
    }
    true
}

/// Weight spaces of V_w(λ) ⊂ V(λ), spanned by f_{i₁}^{a₁}⋯f_{iₖ}^{aₖ}·v_λ
fn demazure_spaces(
    root_system: &RootSystem,
    representation: &Representation,
    word: &WeylWord,
    targets: &HashMap<Vec<i64>, SpaceState>,
) -> Result<HashMap<Vec<i64>, SparseEchelon>> {
    let word_sequence = BirationalSequence::simple_roots(root_system, word)?;
    let operators = OperatorMatrices::build(root_system, representation, &word_sequence)?;
    let mut cache = VectorCache::new();
    let mut spaces = HashMap::with_capacity(targets.len());
    for (depth, state) in targets {
        let mut echelon = SparseEchelon::new();
        for monomial in candidate_monomials(&word_sequence, depth, &[]) {
            if echelon.rank() == state.target {
                break;
            }
            echelon.insert(cache.vector(&operators, &monomial).to_rational());
        }
        if echelon.rank() != state.target {
            return Err(BasisError::Inconsistent(format!(
                "Demazure module for {} spans {} of {} dimensions at depth {:?}",
                word,
                echelon.rank(),
                state.target,
                depth
            )));
        }
        spaces.insert(depth.clone(), echelon);
    }
    Ok(spaces)
}

/// Extends `basis` to a full monomial basis of `module`
///
/// Known monomials must be linearly independent; a dependent known monomial or
/// a weight space that cannot be completed is an internal inconsistency. For a
/// Demazure module every selected vector must lie in V_w(λ).
pub fn extend_by_hand(
    module: &ModuleDescriptor,
    sequence: &BirationalSequence,
    ordering: &MonomialOrdering,
    mut basis: BTreeSet<Monomial>,
) -> Result<BTreeSet<Monomial>> {
    let algebra = module.base_algebra();
    let root_system = algebra.root_system();
    let highest_weight = module.highest_weight();
    let character = module.character()?;
    let dimension = module.dimension()?;

    debug!(
        highest_weight = %highest_weight,
        known = basis.len(),
        dimension,
        "extending basis by hand"
    );

    let representation = Representation::build(root_system, highest_weight)?;
    let operators = OperatorMatrices::build(root_system, &representation, sequence)?;
    let mut cache = VectorCache::new();

    let mut spaces: HashMap<Vec<i64>, SpaceState> = HashMap::new();
    for (weight, &multiplicity) in character {
        let depth = root_system
            .root_coordinates(highest_weight, weight)
            .ok_or_else(|| {
                BasisError::Inconsistent(format!(
                    "weight {} is not in the root lattice coset of {}",
                    weight, highest_weight
                ))
            })?;
        spaces.insert(
            depth,
            SpaceState {
                echelon: SparseEchelon::new(),
                target: multiplicity as usize,
            },
        );
    }

    let demazure = match module.kind() {
        ModuleKind::Simple => None,
        ModuleKind::Demazure(word) => Some(demazure_spaces(
            root_system,
            &representation,
            word,
            &spaces,
        )?),
    };
    let inside = |depth: &Vec<i64>, row: &SparseVec<BigRational>| {
        demazure
            .as_ref()
            .map_or(true, |d| d.get(depth).map_or(false, |e| e.contains(row)))
    };

    basis.insert(Monomial::one(sequence.len()));

    for monomial in &basis {
        let depth = sequence.depth_of(monomial);
        let space = spaces.get_mut(&depth).ok_or_else(|| {
            BasisError::Inconsistent(format!(
                "known monomial {} has weight {} outside the module",
                monomial,
                sequence.weight_of(highest_weight, monomial)
            ))
        })?;
        let row = cache.vector(&operators, monomial).to_rational();
        if !inside(&depth, &row) {
            return Err(BasisError::Inconsistent(format!(
                "known monomial {} leaves the Demazure module",
                monomial
            )));
        }
        if !space.echelon.insert(row) {
            return Err(BasisError::Inconsistent(format!(
                "known monomial {} is linearly dependent",
                monomial
            )));
        }
    }

    let zero_coordinates = compute_zero_coordinates(root_system, sequence, highest_weight);

    let mut deficient: Vec<(&Vec<i64>, &mut SpaceState)> = spaces
        .iter_mut()
        .filter(|(_, s)| s.echelon.rank() != s.target)
        .collect();
    deficient.sort_by(|a, b| a.0.cmp(b.0));

    for (depth, space) in deficient {
        if space.echelon.rank() > space.target {
            return Err(BasisError::Inconsistent(format!(
                "weight space at depth {:?} holds {} monomials, expected {}",
                depth,
                space.echelon.rank(),
                space.target
            )));
        }

        let mut candidates = candidate_monomials(sequence, depth, &zero_coordinates);
        if candidates.is_empty() {
            return Err(BasisError::Inconsistent(format!(
                "no candidate monomials for the weight space at depth {:?}",
                depth
            )));
        }
        ordering.sort(&mut candidates);
        trace!(
            depth = ?depth,
            candidates = candidates.len(),
            missing = space.target - space.echelon.rank(),
            "filling weight space"
        );

        for candidate in candidates {
            if space.echelon.rank() == space.target {
                break;
            }
            if basis.contains(&candidate) || !realizable(&representation, sequence, &candidate) {
                continue;
            }
            let vector = cache.vector(&operators, &candidate);
            if vector.is_zero() {
                continue;
            }
            let row = vector.to_rational();
            if !inside(depth, &row) {
                continue;
            }
            if space.echelon.insert(row) {
                basis.insert(candidate);
            }
        }

        if space.echelon.rank() < space.target {
            return Err(BasisError::Inconsistent(format!(
                "candidates for the weight space at depth {:?} span {} of {} dimensions",
                depth,
                space.echelon.rank(),
                space.target
            )));
        }
    }

    Ok(basis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::ordering::MonomialOrderingKind;
    use crate::lie::cartan::LieType;
    use crate::lie::LieAlgebra;
    use std::sync::Arc;

    fn monomials(list: &[&[u32]]) -> BTreeSet<Monomial> {
        list.iter().map(|e| Monomial::from_exponents(e.to_vec())).collect()
    }

    fn a2_module(lambda: &[i64]) -> ModuleDescriptor {
        let a2 = Arc::new(LieAlgebra::new(LieType::A, 2).unwrap());
        ModuleDescriptor::simple(a2, lambda).unwrap()
    }

    #[test]
    fn test_fundamental_from_scratch() {
        let module = a2_module(&[1, 0]);
        let rs = module.base_algebra().root_system();
        let seq = BirationalSequence::ascending_height(rs);
        let ordering = MonomialOrdering::new(MonomialOrderingKind::Degrevlex, seq.heights());
        let basis = extend_by_hand(&module, &seq, &ordering, BTreeSet::new()).unwrap();
        assert_eq!(basis, monomials(&[&[0, 0, 0], &[1, 0, 0], &[0, 0, 1]]));
    }

    #[test]
    fn test_custom_sequence() {
        let module = a2_module(&[1, 0]);
        let rs = module.base_algebra().root_system();
        let seq = BirationalSequence::from_indices(rs, &[1, 2, 1]).unwrap();
        let ordering = MonomialOrdering::new(MonomialOrderingKind::Degrevlex, seq.heights());
        let basis = extend_by_hand(&module, &seq, &ordering, BTreeSet::new()).unwrap();
        assert_eq!(basis, monomials(&[&[0, 0, 0], &[0, 0, 1], &[0, 1, 1]]));
    }

    #[test]
    fn test_seeded_extension_keeps_known_monomials() {
        let module = a2_module(&[1, 1]);
        let rs = module.base_algebra().root_system();
        let seq = BirationalSequence::ascending_height(rs);
        let ordering = MonomialOrdering::new(MonomialOrderingKind::Lex, seq.heights());
        let known = monomials(&[&[1, 1, 0]]);
        let basis = extend_by_hand(&module, &seq, &ordering, known).unwrap();
        assert_eq!(basis.len(), 8);
        assert!(basis.contains(&Monomial::from_exponents(vec![1, 1, 0])));
    }

    #[test]
    fn test_dependent_known_monomials_are_rejected() {
        let module = a2_module(&[1, 0]);
        let rs = module.base_algebra().root_system();
        let seq = BirationalSequence::ascending_height(rs);
        let ordering = MonomialOrdering::new(MonomialOrderingKind::Degrevlex, seq.heights());
        // x₂ annihilates v_{ω₁}
        let known = monomials(&[&[0, 1, 0]]);
        let err = extend_by_hand(&module, &seq, &ordering, known).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_incomplete_sequence_is_inconsistent() {
        let module = a2_module(&[1, 0]);
        let rs = module.base_algebra().root_system();
        let seq = BirationalSequence::from_indices(rs, &[1]).unwrap();
        let ordering = MonomialOrdering::new(MonomialOrderingKind::Degrevlex, seq.heights());
        let err = extend_by_hand(&module, &seq, &ordering, BTreeSet::new()).unwrap_err();
        assert!(matches!(err, BasisError::Inconsistent(_)));
    }

    #[test]
    fn test_demazure_vectors_stay_in_the_module() {
        let a2 = Arc::new(LieAlgebra::new(LieType::A, 2).unwrap());
        let word = WeylWord::new(a2.root_system(), &[1, 2]).unwrap();
        let module = ModuleDescriptor::demazure(a2.clone(), &[1, 1], word).unwrap();
        let seq = BirationalSequence::ascending_height(a2.root_system());
        let ordering = MonomialOrdering::new(MonomialOrderingKind::Degrevlex, seq.heights());
        let basis = extend_by_hand(&module, &seq, &ordering, BTreeSet::new()).unwrap();

        assert_eq!(basis.len(), module.dimension().unwrap());
        assert_eq!(basis.len(), 5);
        // weight 0 of V_{s₁s₂}(ρ) is spanned by f₁f₂v, not by f_{α₁+α₂}v
        assert!(basis.contains(&Monomial::from_exponents(vec![1, 1, 0])));
        assert!(!basis.contains(&Monomial::from_exponents(vec![0, 0, 1])));
    }
}
