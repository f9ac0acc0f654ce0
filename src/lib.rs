//! # lie_basis
//!
//! Monomial bases of highest weight modules of simple Lie algebras.
//!
//! A birational sequence (β₁, …, β_N) of positive roots identifies a monomial
//! x^e with the vector f_{β₁}^{e₁}⋯f_{β_N}^{e_N}·v_λ of the module V(λ). This
//! crate computes sets of monomials whose vectors form a basis:
//!
//! - recursively, as Minkowski sums of bases of smaller highest weights
//! - directly, where the Minkowski sums fall short, by greedy selection under a
//!   monomial ordering with exact rational row reduction
//!
//! Simple modules, Demazure modules and the graded pieces of coordinate rings of
//! Kodaira embeddings are supported, for every simple type A–G.
//!
//! ## Layout
//!
//! - [`lie`]: root systems, Weyl groups, characters and explicit modules
//! - [`linalg`]: exact sparse vectors, matrices and echelon forms
//! - [`basis`]: monomials, orderings, birational sequences and the engine
//! - [`config`]: computation options
//! - [`api`]: top-level operations
//!
//! ## Example
//!
//! ```
//! use lie_basis::{compute_basis, ComputeOptions, LieType, OperatorSpec};
//!
//! let options = ComputeOptions::new().with_operators(OperatorSpec::Indices(vec![1, 2, 1]));
//! let basis = compute_basis(LieType::A, 2, &[1, 0], &options).unwrap();
//! assert_eq!(basis.dimension(), 3);
//! for monomial in basis.monomials() {
//!     println!("{}", monomial);
//! }
//! ```

pub mod api;
pub mod basis;
pub mod config;
pub mod error;
pub mod lie;
pub mod linalg;

pub use api::{
    compute_basis, compute_basis_ffl, compute_basis_lusztig, compute_basis_nz,
    compute_basis_string, compute_coordinate_ring_basis, compute_coordinate_ring_basis_ffl,
    compute_coordinate_ring_basis_lusztig, compute_coordinate_ring_basis_nz,
    compute_coordinate_ring_basis_string, compute_demazure_basis, compute_many, list_operators,
    BasisRequest,
};
pub use basis::{
    Algorithm, BasisSummary, BirationalSequence, ModuleDescriptor, ModuleKind, Monomial,
    MonomialBasis, MonomialOrdering, MonomialOrderingKind,
};
pub use config::{ComputeOptions, OperatorSpec};
pub use error::{BasisError, Result};
pub use lie::{CartanType, LieAlgebra, LieType, Root, RootSystem, Weight, WeylWord};
