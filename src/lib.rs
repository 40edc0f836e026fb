#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]

pub mod asset_paths;
pub mod builder;
pub mod config;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod models;
pub mod naming;
pub mod project;
pub mod selection;

pub use builder::{EntrypointArtifacts, EntrypointBuilder, register_entrypoints};
pub use config::ProjectConfig;
pub use error::{EntrypointError, EntrypointResult};
pub use manifest::{ManifestNormalizer, NormalizeReport, normalize_manifest_file};
pub use models::{EntrypointMap, Manifest, ManifestEntry, ResolvedEntry, SiteHints};
pub use naming::logical_name;
pub use project::ProjectLayout;
pub use selection::{PackageInclusion, PackageSelection};
