//! Input handling module

pub mod glob_resolver;
pub mod sources;

pub use glob_resolver::resolve_patterns;
pub use sources::read_sources;
