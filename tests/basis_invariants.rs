// tests/basis_invariants.rs
//! Dimension, character and determinism checks across Cartan types

use lie_basis::lie::character::character_dimension;
use lie_basis::{
    compute_basis, compute_coordinate_ring_basis, compute_many, BasisRequest, ComputeOptions,
    LieType, ModuleDescriptor, MonomialOrderingKind, OperatorSpec,
};
use lie_basis::LieAlgebra;
use std::sync::Arc;

fn cases() -> Vec<(LieType, usize, Vec<i64>)> {
    vec![
        (LieType::A, 1, vec![3]),
        (LieType::A, 2, vec![2, 1]),
        (LieType::A, 3, vec![1, 0, 1]),
        (LieType::B, 2, vec![1, 1]),
        (LieType::C, 2, vec![1, 0]),
        (LieType::B, 3, vec![0, 0, 1]),
        (LieType::D, 4, vec![1, 0, 0, 0]),
        (LieType::G, 2, vec![1, 0]),
        (LieType::G, 2, vec![0, 1]),
    ]
}

/// |basis| = dim and the weights of the basis reproduce the character
#[test]
fn basis_matches_character() {
    for (lie_type, rank, weight) in cases() {
        let basis = compute_basis(lie_type, rank, &weight, &ComputeOptions::default()).unwrap();

        let algebra = Arc::new(LieAlgebra::new(lie_type, rank).unwrap());
        let module = ModuleDescriptor::simple(algebra, &weight).unwrap();
        let character = module.character().unwrap();

        assert_eq!(basis.dimension(), module.dimension().unwrap(), "{}{} {:?}", lie_type, rank, weight);
        assert_eq!(character_dimension(character) as usize, basis.dimension());
        assert_eq!(&basis.weight_counts(), character, "{}{} {:?}", lie_type, rank, weight);
    }
}

#[test]
fn every_ordering_gives_a_basis() {
    for kind in MonomialOrderingKind::ALL {
        let options = ComputeOptions::new().with_ordering(kind);
        let basis = compute_basis(LieType::B, 2, &[1, 1], &options).unwrap();
        assert_eq!(basis.dimension(), 16, "{}", kind);
        assert_eq!(basis.ordering().kind(), kind);
    }
}

#[test]
fn repeated_computation_is_identical() {
    let options = ComputeOptions::new()
        .with_ordering(MonomialOrderingKind::Lex)
        .with_operators(OperatorSpec::DescendingHeight);
    let first = compute_basis(LieType::C, 3, &[1, 0, 1], &options).unwrap();
    let second = compute_basis(LieType::C, 3, &[1, 0, 1], &options).unwrap();
    assert_eq!(first.monomials(), second.monomials());
    assert_eq!(first.minkowski_generators(), second.minkowski_generators());
}

#[test]
fn monomials_are_sorted_by_the_ordering() {
    let basis = compute_basis(LieType::A, 2, &[2, 1], &ComputeOptions::default()).unwrap();
    let ordering = basis.ordering();
    for pair in basis.monomials().windows(2) {
        assert_eq!(ordering.compare(&pair[0], &pair[1]), std::cmp::Ordering::Less);
    }
}

#[test]
fn coordinate_ring_products_are_contained() {
    let degrees =
        compute_coordinate_ring_basis(LieType::B, 2, &[0, 1], 3, &ComputeOptions::default()).unwrap();
    for i in 1..=degrees.len() {
        for k in 1..i {
            let (low, _) = &degrees[k - 1];
            let (high, _) = &degrees[i - k - 1];
            let (target, _) = &degrees[i - 1];
            for p in low.monomials() {
                for q in high.monomials() {
                    assert!(target.contains(&(p * q)), "degree {} misses {}", i, p * q);
                }
            }
        }
    }
}

#[test]
fn parallel_requests_match_sequential_ones() {
    let requests: Vec<BasisRequest> = cases()
        .into_iter()
        .take(5)
        .map(|(t, n, w)| BasisRequest::new(t, n, w))
        .collect();
    let results = compute_many(&requests);
    assert_eq!(results.len(), requests.len());
    for (request, result) in requests.iter().zip(results) {
        let expected = request.compute().unwrap();
        assert_eq!(result.unwrap().monomials(), expected.monomials());
    }
}

#[test]
fn summary_serializes() {
    let basis = compute_basis(LieType::A, 2, &[1, 0], &ComputeOptions::default()).unwrap();
    let json = serde_json::to_value(basis.summary()).unwrap();
    assert_eq!(json["dimension"], 3);
    assert_eq!(json["highest_weight"], serde_json::json!([1, 0]));
    assert_eq!(json["lie_type"], "A2");
    assert_eq!(json["ordering"], "degrevlex");
    assert_eq!(json["algorithm"], "Recursive");
    assert_eq!(json["monomials"].as_array().unwrap().len(), 3);
}
