//! Top-level operations
//!
//! Every call builds its own module descriptor, birational sequence and
//! memo table; nothing is shared between calls except immutable root data.
//!
//! # Named variants
//!
//! | variant   | birational sequence                             | ordering     |
//! |-----------|-------------------------------------------------|--------------|
//! | default   | positive roots by ascending height              | degrevlex    |
//! | `ffl`     | positive roots by descending height             | degrevlex    |
//! | `lusztig` | s_{i₁}⋯s_{iₖ₋₁}(α_{iₖ}) for a reduced word of w₀ | wdegrevlex   |
//! | `string`  | α_{iₖ} for a reduced word of w₀                  | neglex       |
//! | `nz`      | α_{iₖ} for a reduced word of w₀                  | degrevlex    |

use crate::basis::coordinate_ring::coordinate_ring_bases;
use crate::basis::engine::MonomialEngine;
use crate::basis::module::ModuleDescriptor;
use crate::basis::monomial::Monomial;
use crate::basis::ordering::MonomialOrderingKind;
use crate::basis::result::{Algorithm, MonomialBasis};
use crate::config::{ComputeOptions, OperatorSpec};
use crate::error::{BasisError, Result};
use crate::lie::cartan::LieType;
use crate::lie::weyl::WeylWord;
use crate::lie::LieAlgebra;
use std::sync::Arc;
use tracing::info;

fn algebra(lie_type: LieType, rank: usize) -> Result<Arc<LieAlgebra>> {
    Ok(Arc::new(LieAlgebra::new(lie_type, rank)?))
}

fn compute_for_module(module: ModuleDescriptor, options: &ComputeOptions) -> Result<MonomialBasis> {
    let root_system = module.base_algebra().root_system();
    let (sequence, ordering) = options.resolve(root_system)?;
    let dimension = module.dimension()?;
    info!(
        module = %module,
        dimension,
        ordering = %ordering,
        operators = sequence.len(),
        "computing monomial basis"
    );

    let mut engine = MonomialEngine::new(&sequence, &ordering);
    let monomials = engine.compute_monomials(&module)?;
    if monomials.len() != dimension {
        return Err(BasisError::Inconsistent(format!(
            "computed {} monomials for a module of dimension {}",
            monomials.len(),
            dimension
        )));
    }
    let generators = engine.minkowski_generators();
    Ok(MonomialBasis::new(
        module,
        sequence.clone(),
        ordering.clone(),
        monomials.into_iter().collect(),
        generators,
        Algorithm::Recursive,
    ))
}

/// Monomial basis of the simple module V(λ)
///
/// # Example
///
/// ```
/// use lie_basis::{compute_basis, ComputeOptions, LieType};
///
/// let basis = compute_basis(LieType::A, 2, &[1, 1], &ComputeOptions::default()).unwrap();
/// assert_eq!(basis.dimension(), 8);
/// ```
pub fn compute_basis(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
    options: &ComputeOptions,
) -> Result<MonomialBasis> {
    let module = ModuleDescriptor::simple(algebra(lie_type, rank)?, highest_weight)?;
    compute_for_module(module, options)
}

/// FFLV bases: descending height, degrevlex
pub fn compute_basis_ffl(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
) -> Result<MonomialBasis> {
    compute_basis(lie_type, rank, highest_weight, &ffl_options())
}

/// Lusztig bases for a 1-based reduced word of the longest element
pub fn compute_basis_lusztig(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
    reduced_word: &[usize],
) -> Result<MonomialBasis> {
    compute_basis(lie_type, rank, highest_weight, &lusztig_options(reduced_word))
}

/// String parametrization for a 1-based reduced word of the longest element
pub fn compute_basis_string(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
    reduced_word: &[usize],
) -> Result<MonomialBasis> {
    let algebra = algebra(lie_type, rank)?;
    require_longest(&algebra, reduced_word)?;
    let module = ModuleDescriptor::simple(algebra, highest_weight)?;
    compute_for_module(module, &string_options(reduced_word))
}

/// Nakashima–Zelevinsky bases for a 1-based reduced word of the longest element
pub fn compute_basis_nz(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
    reduced_word: &[usize],
) -> Result<MonomialBasis> {
    let algebra = algebra(lie_type, rank)?;
    require_longest(&algebra, reduced_word)?;
    let module = ModuleDescriptor::simple(algebra, highest_weight)?;
    compute_for_module(module, &nz_options(reduced_word))
}

/// Monomial basis of the Demazure module V_w(λ), w given by a 1-based reduced word
///
/// With the default operators ([`OperatorSpec::AscendingHeight`]) the sequence
/// is taken from the word itself, `OperatorSpec::SimpleRoots(weyl_word)`, so
/// that Minkowski sums of smaller Demazure bases stay inside V_w(λ). The
/// identity word keeps the default. Any other operator choice is used as given.
pub fn compute_demazure_basis(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
    weyl_word: &[usize],
    options: &ComputeOptions,
) -> Result<MonomialBasis> {
    let algebra = algebra(lie_type, rank)?;
    let word = WeylWord::new(algebra.root_system(), weyl_word)?;
    let module = ModuleDescriptor::demazure(algebra, highest_weight, word)?;
    let options = demazure_options(options, weyl_word);
    compute_for_module(module, &options)
}

fn demazure_options(options: &ComputeOptions, weyl_word: &[usize]) -> ComputeOptions {
    if options.operators == OperatorSpec::default() && !weyl_word.is_empty() {
        options
            .clone()
            .with_operators(OperatorSpec::SimpleRoots(weyl_word.to_vec()))
    } else {
        options.clone()
    }
}

/// Bases of V(iλ) for i = 1..=`degree`, each with its monomials that are not
/// products of bases of lower degrees
pub fn compute_coordinate_ring_basis(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
    degree: usize,
    options: &ComputeOptions,
) -> Result<Vec<(MonomialBasis, Vec<Monomial>)>> {
    if degree == 0 {
        return Err(BasisError::InvalidDegree(degree));
    }
    let module = ModuleDescriptor::simple(algebra(lie_type, rank)?, highest_weight)?;
    coordinate_ring_for_module(module, degree, options)
}

fn coordinate_ring_for_module(
    module: ModuleDescriptor,
    degree: usize,
    options: &ComputeOptions,
) -> Result<Vec<(MonomialBasis, Vec<Monomial>)>> {
    let (sequence, ordering) = options.resolve(module.base_algebra().root_system())?;
    info!(
        module = %module,
        degree,
        ordering = %ordering,
        "computing coordinate ring bases"
    );
    coordinate_ring_bases(&module, &sequence, &ordering, degree)
}

pub fn compute_coordinate_ring_basis_ffl(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
    degree: usize,
) -> Result<Vec<(MonomialBasis, Vec<Monomial>)>> {
    compute_coordinate_ring_basis(lie_type, rank, highest_weight, degree, &ffl_options())
}

pub fn compute_coordinate_ring_basis_lusztig(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
    degree: usize,
    reduced_word: &[usize],
) -> Result<Vec<(MonomialBasis, Vec<Monomial>)>> {
    compute_coordinate_ring_basis(
        lie_type,
        rank,
        highest_weight,
        degree,
        &lusztig_options(reduced_word),
    )
}

pub fn compute_coordinate_ring_basis_string(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
    degree: usize,
    reduced_word: &[usize],
) -> Result<Vec<(MonomialBasis, Vec<Monomial>)>> {
    let algebra = algebra(lie_type, rank)?;
    require_longest(&algebra, reduced_word)?;
    compute_coordinate_ring_basis(
        lie_type,
        rank,
        highest_weight,
        degree,
        &string_options(reduced_word),
    )
}

pub fn compute_coordinate_ring_basis_nz(
    lie_type: LieType,
    rank: usize,
    highest_weight: &[i64],
    degree: usize,
    reduced_word: &[usize],
) -> Result<Vec<(MonomialBasis, Vec<Monomial>)>> {
    let algebra = algebra(lie_type, rank)?;
    require_longest(&algebra, reduced_word)?;
    compute_coordinate_ring_basis(
        lie_type,
        rank,
        highest_weight,
        degree,
        &nz_options(reduced_word),
    )
}

/// Positive roots with their 1-based operator indices, ascending height
///
/// These indices are the ones accepted by [`OperatorSpec::Indices`].
pub fn list_operators(lie_type: LieType, rank: usize) -> Result<Vec<(usize, Vec<i64>)>> {
    let algebra = LieAlgebra::new(lie_type, rank)?;
    Ok(algebra
        .root_system()
        .positive_roots()
        .iter()
        .enumerate()
        .map(|(i, root)| (i + 1, root.coefficients().to_vec()))
        .collect())
}

/// One independent request for [`compute_many`]
#[derive(Clone, Debug)]
pub struct BasisRequest {
    pub lie_type: LieType,
    pub rank: usize,
    pub highest_weight: Vec<i64>,
    pub options: ComputeOptions,
}

impl BasisRequest {
    pub fn new(lie_type: LieType, rank: usize, highest_weight: Vec<i64>) -> Self {
        BasisRequest {
            lie_type,
            rank,
            highest_weight,
            options: ComputeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ComputeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn compute(&self) -> Result<MonomialBasis> {
        compute_basis(self.lie_type, self.rank, &self.highest_weight, &self.options)
    }
}

/// Computes independent requests, in parallel with the `parallel` feature
///
/// Results are returned in request order.
pub fn compute_many(requests: &[BasisRequest]) -> Vec<Result<MonomialBasis>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        requests.par_iter().map(BasisRequest::compute).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        requests.iter().map(BasisRequest::compute).collect()
    }
}

fn require_longest(algebra: &LieAlgebra, reduced_word: &[usize]) -> Result<()> {
    let root_system = algebra.root_system();
    let word = WeylWord::new(root_system, reduced_word)?;
    if !word.is_longest(root_system) {
        return Err(BasisError::word(
            reduced_word,
            "not a reduced word of the longest element",
        ));
    }
    Ok(())
}

fn ffl_options() -> ComputeOptions {
    ComputeOptions::new()
        .with_ordering(MonomialOrderingKind::Degrevlex)
        .with_operators(OperatorSpec::DescendingHeight)
}

fn lusztig_options(reduced_word: &[usize]) -> ComputeOptions {
    ComputeOptions::new()
        .with_ordering(MonomialOrderingKind::Wdegrevlex)
        .with_operators(OperatorSpec::Lusztig(reduced_word.to_vec()))
}

fn string_options(reduced_word: &[usize]) -> ComputeOptions {
    ComputeOptions::new()
        .with_ordering(MonomialOrderingKind::Neglex)
        .with_operators(OperatorSpec::SimpleRoots(reduced_word.to_vec()))
}

fn nz_options(reduced_word: &[usize]) -> ComputeOptions {
    ComputeOptions::new()
        .with_ordering(MonomialOrderingKind::Degrevlex)
        .with_operators(OperatorSpec::SimpleRoots(reduced_word.to_vec()))
}
