//! File move operations for bundlescan.
//!
//! [`fs_move`] renames a path and, when the rename crosses a filesystem
//! boundary, falls back to copying the tree (symlinks kept as links) and then
//! removing the source. The fallback is not atomic: an interruption after the
//! copy can leave both source and destination in place.

mod copy;
mod error;
mod move_op;
mod remove;

pub use copy::copy_recursive;
pub use error::MoveError;
pub use move_op::{MoveOutcome, fs_move, is_cross_device};
pub use remove::remove_recursive;
