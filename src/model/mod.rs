//! Pure data structures: the [`Product`] record and the payloads that create and update it.

pub mod product;

pub use product::*;
