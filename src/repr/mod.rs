//! Model representations.

mod linear;

pub use linear::LinearModel;
