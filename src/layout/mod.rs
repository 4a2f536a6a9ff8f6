//! Block-flow layout.
//!
//! Lengths resolve against the parent content box; children stack vertically and a parent grows
//! to contain them.

pub(crate) mod engine;
pub(crate) mod length;
