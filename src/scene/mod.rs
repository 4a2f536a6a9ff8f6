//! Declarative scene input: the serde model, background colors, and a fluent builder.

pub(crate) mod color;
pub(crate) mod dsl;
pub(crate) mod model;
