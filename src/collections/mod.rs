//! Transient structures allocated per algorithm run.
mod frontier;
pub use self::frontier::*;
mod union_find;
pub use self::union_find::*;
