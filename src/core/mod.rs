//! Core processing building blocks: GIF frame de-optimization and re-encoding,
//! circular avatar compositing, and uniform-margin trimming. These are internal
//! primitives consumed by the high-level `api` module.
pub mod avatar;
pub mod gif;
pub mod trim;
