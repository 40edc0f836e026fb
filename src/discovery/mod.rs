//! Entrypoint discovery broken into focused submodules for easier testing.

mod expansion;
mod packages;
mod pattern;
mod root;

pub use expansion::expand_pattern;
pub use packages::{PackageDiscovery, discover_package_entrypoints, read_declaration};
pub use pattern::{FileNameMatcher, PatternShape, SourcePattern};
pub use root::discover_root_entrypoints;
