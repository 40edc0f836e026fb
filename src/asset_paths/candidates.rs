use std::collections::BTreeSet;

use super::normalize::{join_manifest_path, normalize_manifest_path};

/// Generate the normalised paths an import reference may denote, relative to its importer.
///
/// The first candidate is always the reference itself after normalisation. Explicitly relative
/// references (`./x`, `../x`) additionally resolve against the directory of `source`, which is
/// how bundlers spell a sibling import. The result is deduplicated and keeps insertion order.
pub fn self_reference_candidates(source: &str, import: &str) -> Vec<String> {
    if import.is_empty() {
        return Vec::new();
    }

    let mut builder = CandidateBuilder::new(source, import);
    builder.add_normalized_candidate();
    builder.add_source_relative_candidate();
    builder.finish()
}

struct CandidateBuilder<'a> {
    source_dir: Option<String>,
    import: String,
    original: &'a str,
    seen: BTreeSet<String>,
    result: Vec<String>,
}

impl<'a> CandidateBuilder<'a> {
    fn new(source: &str, import: &'a str) -> Self {
        let source = normalize_manifest_path(source);
        let source_dir = source.rsplit_once('/').map(|(dir, _)| dir.to_string());

        Self {
            source_dir,
            import: import.replace('\\', "/"),
            original: import,
            seen: BTreeSet::new(),
            result: Vec::new(),
        }
    }

    fn add_normalized_candidate(&mut self) {
        self.push(normalize_manifest_path(self.original));
    }

    fn add_source_relative_candidate(&mut self) {
        if !(self.import.starts_with("./") || self.import.starts_with("../")) {
            return;
        }

        let dir = self.source_dir.clone().unwrap_or_default();
        let resolved = join_manifest_path(&dir, &self.import);
        self.push(resolved);
    }

    fn finish(self) -> Vec<String> {
        self.result
    }

    fn push(&mut self, candidate: String) {
        if candidate.is_empty() {
            return;
        }
        if self.seen.insert(candidate.clone()) {
            self.result.push(candidate);
        }
    }
}
