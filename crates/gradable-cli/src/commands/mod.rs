//! Command implementations.

pub mod extract;
pub mod solve;

pub use self::extract::execute_extract;
pub use self::solve::execute_solve;
