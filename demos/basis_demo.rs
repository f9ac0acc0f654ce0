//! Monomial bases for a few modules, printed in full
//!
//! Run with `RUST_LOG=lie_basis=debug` to see Minkowski steps and direct
//! constructions.

use lie_basis::{
    compute_basis, compute_basis_lusztig, compute_demazure_basis, list_operators, ComputeOptions,
    LieType, OperatorSpec,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> lie_basis::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    println!("Operators of B2:");
    for (index, root) in list_operators(LieType::B, 2)? {
        println!("  {:>2}: {:?}", index, root);
    }
    println!();

    let adjoint = compute_basis(LieType::A, 2, &[1, 1], &ComputeOptions::default())?;
    println!("{}", adjoint);
    for monomial in adjoint.monomials() {
        println!("  {}", monomial);
    }
    println!();

    let custom = ComputeOptions::new().with_operators(OperatorSpec::Indices(vec![1, 2, 1]));
    let standard = compute_basis(LieType::A, 2, &[1, 0], &custom)?;
    println!("{}", standard);
    println!();

    let lusztig = compute_basis_lusztig(LieType::B, 2, &[1, 1], &[1, 2, 1, 2])?;
    println!("{}", lusztig);
    println!();

    let demazure = compute_demazure_basis(
        LieType::A,
        2,
        &[1, 1],
        &[2, 1],
        &ComputeOptions::new().with_operators(OperatorSpec::SimpleRoots(vec![2, 1])),
    )?;
    println!("{}", demazure);
    for monomial in demazure.monomials() {
        println!("  {}", monomial);
    }

    Ok(())
}
