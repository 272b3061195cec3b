//! Dense vectors: the storage-independent algorithm layer, its cursor and the storages.

pub mod dense;
pub mod dynamic;
pub mod fixed;
pub mod iter;

pub use dense::{DenseVector, PromotedField};
pub use dynamic::DynamicVector;
pub use fixed::FieldVector;
pub use iter::{ConstIter, ContainerRef, DenseIterator, MutIter};
