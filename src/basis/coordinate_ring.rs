//! Degree-truncated coordinate rings of Kodaira embeddings
//!
//! Degree i of the homogeneous coordinate ring of the orbit of [v_λ] is
//! V(iλ)*. Its monomial basis contains every product of bases in degrees k
//! and i - k; only the monomials outside these products are new generators.

use super::engine::MonomialEngine;
use super::module::ModuleDescriptor;
use super::monomial::Monomial;
use super::ordering::MonomialOrdering;
use super::result::{Algorithm, MonomialBasis};
use super::sequence::BirationalSequence;
use crate::error::{BasisError, Result};
use std::collections::BTreeSet;
use tracing::debug;

/// Bases of degrees 1..=`degree`, each with the monomials new in that degree
pub fn coordinate_ring_bases(
    module: &ModuleDescriptor,
    sequence: &BirationalSequence,
    ordering: &MonomialOrdering,
    degree: usize,
) -> Result<Vec<(MonomialBasis, Vec<Monomial>)>> {
    if degree == 0 {
        return Err(BasisError::InvalidDegree(degree));
    }

    let mut engine = MonomialEngine::new(sequence, ordering);
    let mut bases: Vec<BTreeSet<Monomial>> = Vec::with_capacity(degree);
    let mut results = Vec::with_capacity(degree);

    for i in 1..=degree {
        let module_i = module.similar(i as i64 * module.highest_weight());
        let dimension = module_i.dimension()?;

        let mut products: BTreeSet<Monomial> = BTreeSet::new();
        for k in 1..=i / 2 {
            for p in &bases[k - 1] {
                for q in &bases[i - k - 1] {
                    products.insert(p * q);
                }
            }
            if products.len() >= dimension {
                break;
            }
        }
        if products.len() > dimension {
            return Err(BasisError::Inconsistent(format!(
                "products of lower degrees give {} monomials in degree {}, dimension is {}",
                products.len(),
                i,
                dimension
            )));
        }

        let basis = if products.len() == dimension {
            products.clone()
        } else {
            engine.compute_seeded(&module_i, products.clone())?
        };
        engine.remember(module_i.highest_weight().clone(), basis.clone());

        let new_monomials = ordering.sorted(basis.difference(&products));
        debug!(
            degree = i,
            dimension,
            new = new_monomials.len(),
            "coordinate ring degree done"
        );

        results.push((
            MonomialBasis::new(
                module_i,
                sequence.clone(),
                ordering.clone(),
                basis.iter().cloned().collect(),
                engine.minkowski_generators(),
                Algorithm::CoordinateRing { degree: i },
            ),
            new_monomials,
        ));
        bases.push(basis);
    }

    Ok(results)
}
