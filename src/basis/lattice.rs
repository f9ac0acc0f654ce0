//! Lattice points of weight-space slices of the Weyl polytope
//!
//! For a target depth d = λ - μ in simple-root coordinates, the candidates of
//! the weight space V_μ are all exponent vectors e ≥ 0 with
//!
//! ```text
//! Σₖ eₖ βₖ = d
//! ```
//!
//! Every βₖ has non-negative coefficients, so a depth-first search over the
//! positions that keeps the remainder non-negative is exhaustive and finite.
//! Each solution is produced exactly once.

use super::monomial::Monomial;
use super::sequence::BirationalSequence;
use crate::lie::root_system::RootSystem;
use crate::lie::weight::Weight;

/// Positions of the sequence whose exponent is forced to zero
///
/// The last operator acts first on v_λ. While the trailing operators all
/// annihilate v_λ (⟨λ, β^∨⟩ = 0), any monomial using one of them as its
/// first acting factor is zero; those positions are dropped from the search.
pub fn compute_zero_coordinates(
    root_system: &RootSystem,
    sequence: &BirationalSequence,
    highest_weight: &Weight,
) -> Vec<usize> {
    let mut zeros = Vec::new();
    for (k, root) in sequence.roots().iter().enumerate().rev() {
        if root_system.coroot_pairing(highest_weight, root) != 0 {
            break;
        }
        zeros.push(k);
    }
    zeros.reverse();
    zeros
}

/// All exponent vectors with Σ eₖβₖ = `depth` and eₖ = 0 on `zero_coordinates`
pub fn lattice_points(
    sequence: &BirationalSequence,
    depth: &[i64],
    zero_coordinates: &[usize],
) -> Vec<Vec<u32>> {
    let n = sequence.len();
    if depth.iter().any(|&d| d < 0) {
        return Vec::new();
    }
    let coefficients: Vec<&[i64]> = sequence.roots().iter().map(|r| r.coefficients()).collect();
    let free: Vec<usize> = (0..n).filter(|k| !zero_coordinates.contains(k)).collect();

    // support[j]: coordinates reachable by the free positions free[j..]
    let mut support = vec![vec![false; depth.len()]; free.len() + 1];
    for j in (0..free.len()).rev() {
        let mut reach = support[j + 1].clone();
        for (i, &c) in coefficients[free[j]].iter().enumerate() {
            if c > 0 {
                reach[i] = true;
            }
        }
        support[j] = reach;
    }

    let mut points = Vec::new();
    let mut exponents = vec![0u32; n];
    let mut remaining = depth.to_vec();
    search(
        &coefficients,
        &free,
        &support,
        0,
        &mut remaining,
        &mut exponents,
        &mut points,
    );
    points
}

fn search(
    coefficients: &[&[i64]],
    free: &[usize],
    support: &[Vec<bool>],
    j: usize,
    remaining: &mut [i64],
    exponents: &mut [u32],
    points: &mut Vec<Vec<u32>>,
) {
    if remaining
        .iter()
        .zip(&support[j])
        .any(|(&r, &reachable)| r > 0 && !reachable)
    {
        return;
    }
    if j == free.len() {
        if remaining.iter().all(|&r| r == 0) {
            points.push(exponents.to_vec());
        }
        return;
    }

    let k = free[j];
    let root = coefficients[k];
    let max = root
        .iter()
        .zip(remaining.iter())
        .filter(|(&c, _)| c > 0)
        .map(|(&c, &r)| r / c)
        .min()
        .unwrap_or(0);

    for e in 0..=max {
        if e > 0 {
            for (r, &c) in remaining.iter_mut().zip(root) {
                *r -= c;
            }
        }
        exponents[k] = e as u32;
        search(coefficients, free, support, j + 1, remaining, exponents, points);
    }
    for (r, &c) in remaining.iter_mut().zip(root) {
        *r += c * max;
    }
    exponents[k] = 0;
}

/// Candidate monomials of the weight space at `depth`
pub fn candidate_monomials(
    sequence: &BirationalSequence,
    depth: &[i64],
    zero_coordinates: &[usize],
) -> Vec<Monomial> {
    lattice_points(sequence, depth, zero_coordinates)
        .into_iter()
        .map(Monomial::from_exponents)
        .collect()
}
