//! Monomial bases of highest weight modules
//!
//! - `monomial`, `ordering`, `sequence`: the monomial ring of a birational sequence
//! - `module`: simple and Demazure module descriptors
//! - `vectors`: operator matrices and monomial vectors
//! - `lattice`: candidate monomials of one weight space
//! - `by_hand`: greedy completion by exact linear algebra
//! - `engine`: recursive Minkowski sums with memoization
//! - `coordinate_ring`: degree-truncated coordinate rings
//! - `result`: the immutable result record

pub mod by_hand;
pub mod coordinate_ring;
pub mod engine;
pub mod lattice;
pub mod module;
pub mod monomial;
pub mod ordering;
pub mod result;
pub mod sequence;
pub mod vectors;

pub use engine::MonomialEngine;
pub use module::{ModuleDescriptor, ModuleKind};
pub use monomial::Monomial;
pub use ordering::{MonomialOrdering, MonomialOrderingKind};
pub use result::{Algorithm, BasisSummary, MonomialBasis};
pub use sequence::BirationalSequence;
