//! Exact sparse linear algebra
//!
//! - `sparse`: sparse vectors and column-major sparse matrices
//! - `echelon`: incremental row echelon forms ("insert and report rank growth")

pub mod echelon;
pub mod sparse;

pub use echelon::{Reduction, SparseEchelon, TrackedEchelon};
pub use sparse::{Scalar, SparseMatrix, SparseVec};
