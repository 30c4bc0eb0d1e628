//! The About settings screen model.
//!
//! Rows are plain data; activating a row goes through [`dispatch`], which
//! resolves the row's action against injected collaborators.

mod dispatch;
mod rows;

pub use dispatch::{dispatch, AboutEffects};
pub use rows::{about_rows, AboutAction, AboutRow};
