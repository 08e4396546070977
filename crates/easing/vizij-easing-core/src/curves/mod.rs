//! Easing formula families.
//!
//! Each module exposes the raw `(t, b, c, d)` functions of one family plus
//! their generated `*_unit` and `*_range` forms. The `out_in_*` variants are
//! all built on [`crate::forms::out_in`].

pub mod back;
pub mod bounce;
pub mod circ;
pub mod elastic;
pub mod expo;
pub mod poly;
pub mod sine;

pub use back::*;
pub use bounce::*;
pub use circ::*;
pub use elastic::*;
pub use expo::*;
pub use poly::*;
pub use sine::*;
