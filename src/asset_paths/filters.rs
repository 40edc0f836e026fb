use regex::Regex;

fn style_extensions() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\.(css|scss|sass|less|styl|stylus|pcss|postcss)$")
            .expect("invalid style extension regex")
    })
}

fn script_extensions() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\.(js|mjs|cjs|jsx|ts|mts|cts|tsx)$")
            .expect("invalid script extension regex")
    })
}

/// Coarse classification of a source file by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Stylesheet sources (`.css`, `.scss`, `.less`, ...).
    Style,
    /// Script sources (`.js`, `.ts`, `.tsx`, ...).
    Script,
    /// Everything else: images, fonts, data files.
    Other,
}

impl AssetKind {
    /// Classify `path`. Extensions are compared case-insensitively.
    pub fn of(path: &str) -> Self {
        if style_extensions().is_match(path) {
            Self::Style
        } else if script_extensions().is_match(path) {
            Self::Script
        } else {
            Self::Other
        }
    }

    /// Style and script sources are the only files that receive a logical name.
    pub fn is_entrypoint(self) -> bool {
        matches!(self, Self::Style | Self::Script)
    }
}
