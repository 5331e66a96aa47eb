//! Traits and implementations for directed and undirected graphs.
//!
//! Both flavours store vertices and edges in balanced trees,
//! so iterations are in ascending order and every run of an algorithm over
//! the same graph visits vertices in the same order.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;

pub mod directed;
pub mod undirected;

#[cfg(test)]
pub use self::tests::*;
