//! Generators of the coordinate ring of the G2 Kodaira embedding by degree
//!
//! Usage: `cargo run --example coordinate_ring_demo -- [degree] [ordering]`

use lie_basis::{compute_coordinate_ring_basis, ComputeOptions, LieType, MonomialOrderingKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> lie_basis::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mut args = std::env::args().skip(1);
    let degree: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
    let ordering: MonomialOrderingKind = match args.next() {
        Some(name) => name.parse()?,
        None => MonomialOrderingKind::Invlex,
    };

    let options = ComputeOptions::new().with_ordering(ordering);
    let degrees = compute_coordinate_ring_basis(LieType::G, 2, &[1, 0], degree, &options)?;

    println!("G2, highest weight [1, 0], ordering {}", ordering);
    for (i, (basis, new_monomials)) in degrees.iter().enumerate() {
        println!(
            "degree {}: dimension {}, {} new monomials",
            i + 1,
            basis.dimension(),
            new_monomials.len()
        );
        let listed: Vec<String> = new_monomials.iter().map(|m| m.to_string()).collect();
        println!("  {}", listed.join(", "));
    }
    Ok(())
}
