//! Helpers for classifying and normalising asset paths.
//!
//! The same normalisation rules are shared between build-time entrypoint discovery and the
//! post-build manifest cleanup so both sides agree on what a path looks like.

mod candidates;
mod filters;
mod normalize;

pub use candidates::self_reference_candidates;
pub use filters::AssetKind;
pub use normalize::{clean_path, join_manifest_path, normalize_manifest_path, to_forward_slashes};
