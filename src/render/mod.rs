//! Geometry tree, draw commands, painters and the render driver.

pub(crate) mod backend;
pub(crate) mod command;
pub(crate) mod cpu;
pub(crate) mod driver;
pub(crate) mod node;
pub(crate) mod painter;
