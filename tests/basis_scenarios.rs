// tests/basis_scenarios.rs
//! Concrete monomial bases that are known by hand

use lie_basis::{
    compute_basis, compute_basis_ffl, compute_basis_lusztig, compute_basis_nz,
    compute_basis_string, compute_coordinate_ring_basis, compute_demazure_basis, Algorithm,
    BasisError, ComputeOptions, LieAlgebra, LieType, ModuleDescriptor, Monomial,
    MonomialOrderingKind, OperatorSpec, Weight, WeylWord,
};
use std::collections::BTreeSet;
use std::sync::Arc;

fn set(list: &[&[u32]]) -> BTreeSet<Monomial> {
    list.iter().map(|e| Monomial::from_exponents(e.to_vec())).collect()
}

fn as_set(monomials: &[Monomial]) -> BTreeSet<Monomial> {
    monomials.iter().cloned().collect()
}

#[test]
fn a2_adjoint_is_a_minkowski_sum() {
    let basis = compute_basis(LieType::A, 2, &[1, 1], &ComputeOptions::default()).unwrap();

    assert_eq!(basis.dimension(), 8);
    assert_eq!(
        basis.birational_sequence().coefficients(),
        vec![vec![1, 0], vec![0, 1], vec![1, 1]]
    );
    assert_eq!(
        as_set(basis.monomials()),
        set(&[
            &[0, 0, 0],
            &[1, 0, 0],
            &[0, 1, 0],
            &[0, 0, 1],
            &[1, 1, 0],
            &[1, 0, 1],
            &[0, 1, 1],
            &[0, 0, 2],
        ])
    );
    // only the fundamental weights needed direct construction
    assert_eq!(
        basis.minkowski_generators(),
        &[Weight::new(vec![1, 0]), Weight::new(vec![0, 1])]
    );
    assert_eq!(basis.algorithm(), Algorithm::Recursive);
}

#[test]
fn a2_standard_with_custom_sequence() {
    let by_index = compute_basis(
        LieType::A,
        2,
        &[1, 0],
        &ComputeOptions::new().with_operators(OperatorSpec::Indices(vec![1, 2, 1])),
    )
    .unwrap();
    let by_root = compute_basis(
        LieType::A,
        2,
        &[1, 0],
        &ComputeOptions::new().with_operators(OperatorSpec::Roots(vec![
            vec![1, 0],
            vec![0, 1],
            vec![1, 0],
        ])),
    )
    .unwrap();

    assert_eq!(by_index.dimension(), 3);
    assert_eq!(by_index.monomials(), by_root.monomials());
    assert_eq!(
        as_set(by_index.monomials()),
        set(&[&[0, 0, 0], &[0, 0, 1], &[0, 1, 1]])
    );
}

#[test]
fn zero_weight_is_the_trivial_module() {
    let basis = compute_basis(LieType::B, 3, &[0, 0, 0], &ComputeOptions::default()).unwrap();
    assert_eq!(basis.dimension(), 1);
    assert_eq!(basis.monomials(), &[Monomial::one(9)]);
    assert!(basis.minkowski_generators().is_empty());
}

#[test]
fn fundamental_weights_are_generators() {
    let basis = compute_basis(LieType::C, 3, &[0, 1, 0], &ComputeOptions::default()).unwrap();
    assert_eq!(basis.dimension(), 14);
    assert_eq!(basis.minkowski_generators(), &[Weight::new(vec![0, 1, 0])]);
}

#[test]
fn named_variants_have_full_dimension() {
    let ffl = compute_basis_ffl(LieType::B, 2, &[1, 1]).unwrap();
    assert_eq!(ffl.dimension(), 16);
    assert_eq!(ffl.birational_sequence().heights(), vec![3, 2, 1, 1]);

    let lusztig = compute_basis_lusztig(LieType::A, 3, &[1, 0, 1], &[1, 2, 1, 3, 2, 1]).unwrap();
    assert_eq!(lusztig.dimension(), 15);
    assert_eq!(lusztig.ordering().kind(), MonomialOrderingKind::Wdegrevlex);

    let string = compute_basis_string(LieType::G, 2, &[1, 0], &[1, 2, 1, 2, 1, 2]).unwrap();
    assert_eq!(string.dimension(), 7);
    assert_eq!(string.ordering().kind(), MonomialOrderingKind::Neglex);

    let nz = compute_basis_nz(LieType::C, 2, &[1, 1], &[2, 1, 2, 1]).unwrap();
    assert_eq!(nz.dimension(), 16);
}

#[test]
fn demazure_module_for_a_simple_reflection() {
    let basis =
        compute_demazure_basis(LieType::A, 2, &[1, 1], &[1], &ComputeOptions::default()).unwrap();
    assert_eq!(basis.birational_sequence().coefficients(), vec![vec![1, 0]]);
    assert_eq!(as_set(basis.monomials()), set(&[&[0], &[1]]));
}

#[test]
fn demazure_module_with_default_options() {
    let basis =
        compute_demazure_basis(LieType::A, 2, &[2, 1], &[2, 1], &ComputeOptions::default()).unwrap();
    assert_eq!(basis.birational_sequence().coefficients(), vec![vec![0, 1], vec![1, 0]]);
    assert_eq!(basis.dimension(), 9);

    let algebra = Arc::new(LieAlgebra::new(LieType::A, 2).unwrap());
    let word = WeylWord::new(algebra.root_system(), &[2, 1]).unwrap();
    let module = ModuleDescriptor::demazure(algebra, &[2, 1], word).unwrap();
    assert_eq!(&basis.weight_counts(), module.character().unwrap());
}

#[test]
fn demazure_modules_with_default_options_across_types() {
    let cases: [(LieType, usize, &[i64], &[usize]); 4] = [
        (LieType::A, 2, &[1, 1], &[1, 2]),
        (LieType::B, 2, &[1, 1], &[2, 1, 2]),
        (LieType::A, 3, &[1, 0, 1], &[2, 1, 3]),
        (LieType::G, 2, &[1, 1], &[2, 1, 2]),
    ];
    for (lie_type, rank, weight, word) in cases {
        let basis = compute_demazure_basis(lie_type, rank, weight, word, &ComputeOptions::default())
            .unwrap_or_else(|e| panic!("{}{} {:?} {:?}: {}", lie_type, rank, weight, word, e));
        assert_eq!(basis.birational_sequence().len(), word.len());
        assert_eq!(basis.monomials().len(), basis.dimension());
    }
}

#[test]
fn demazure_module_with_word_sequence() {
    let options = ComputeOptions::new().with_operators(OperatorSpec::SimpleRoots(vec![2, 1]));
    let basis = compute_demazure_basis(LieType::A, 2, &[1, 1], &[2, 1], &options).unwrap();
    assert_eq!(basis.dimension(), 5);
    assert_eq!(
        as_set(basis.monomials()),
        set(&[&[0, 0], &[1, 0], &[0, 1], &[1, 1], &[2, 1]])
    );
}

#[test]
fn demazure_module_of_the_longest_element_is_simple() {
    let options = ComputeOptions::new().with_operators(OperatorSpec::SimpleRoots(vec![1, 2, 1]));
    let simple = compute_basis(LieType::A, 2, &[1, 1], &options).unwrap();
    let demazure =
        compute_demazure_basis(LieType::A, 2, &[1, 1], &[1, 2, 1], &ComputeOptions::default())
            .unwrap();
    assert_eq!(simple.monomials(), demazure.monomials());
}

#[test]
fn g2_coordinate_ring_up_to_degree_six() {
    let options = ComputeOptions::new().with_ordering(MonomialOrderingKind::Invlex);
    let degrees = compute_coordinate_ring_basis(LieType::G, 2, &[1, 0], 6, &options).unwrap();
    assert_eq!(degrees.len(), 6);

    let dims: Vec<usize> = degrees.iter().map(|(b, _)| b.dimension()).collect();
    assert_eq!(dims, vec![7, 27, 77, 182, 378, 714]);
    let new_counts: Vec<usize> = degrees.iter().map(|(_, new)| new.len()).collect();
    assert_eq!(new_counts, vec![7, 5, 14, 7, 12, 8]);

    let (first, new_first) = &degrees[0];
    assert!(first.contains(&Monomial::one(6)));
    assert!(new_first.contains(&Monomial::one(6)));

    let (second, new_second) = &degrees[1];
    let products: BTreeSet<Monomial> = first
        .monomials()
        .iter()
        .flat_map(|p| first.monomials().iter().map(move |q| p * q))
        .collect();
    assert!(products.iter().all(|m| second.contains(m)));
    assert_eq!(new_second.len(), 27 - products.len());
    assert!(new_second.iter().all(|m| !products.contains(m)));
    assert_eq!(second.algorithm(), Algorithm::CoordinateRing { degree: 2 });
}

#[test]
fn invalid_inputs_are_rejected_before_computing() {
    let options = ComputeOptions::default();
    assert!(matches!(
        compute_basis(LieType::A, 2, &[1, -1], &options),
        Err(BasisError::InvalidWeight { .. })
    ));
    assert!(matches!(
        compute_basis(LieType::E, 5, &[0; 5], &options),
        Err(BasisError::InvalidLieType { .. })
    ));
    assert!(matches!(
        compute_basis(
            LieType::A,
            2,
            &[1, 0],
            &options.clone().with_operators(OperatorSpec::Roots(vec![vec![1, -1]]))
        ),
        Err(BasisError::InvalidOperator(_))
    ));
    assert!(matches!(
        compute_demazure_basis(LieType::A, 2, &[1, 0], &[1, 1], &options),
        Err(BasisError::InvalidWeylWord { .. })
    ));
    assert!(matches!(
        compute_basis(
            LieType::B,
            2,
            &[1, 1],
            &options.clone().with_operators(OperatorSpec::Indices(vec![]))
        ),
        Err(BasisError::InvalidOperator(_))
    ));
    assert_eq!(
        compute_coordinate_ring_basis(LieType::A, 1, &[1], 0, &options).unwrap_err(),
        BasisError::InvalidDegree(0)
    );
}

#[test]
fn incomplete_sequence_is_an_internal_error() {
    let options = ComputeOptions::new().with_operators(OperatorSpec::Indices(vec![1]));
    let err = compute_basis(LieType::A, 2, &[1, 0], &options).unwrap_err();
    assert!(err.is_internal());
}
