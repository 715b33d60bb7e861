/// Knobs for the parser.
///
/// The default is [`ParseOptions::strict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept tokens left over after the root value instead of failing
    pub allow_trailing_tokens: bool,
    /// Maximum number of nested arrays/objects
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Reject anything after the root value.
    pub const fn strict() -> Self {
        Self {
            allow_trailing_tokens: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Stop after the root value and ignore whatever tokens follow it, so
    /// `{"a": 1} [2]` parses as the object alone.
    pub const fn permissive() -> Self {
        Self {
            allow_trailing_tokens: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(ParseOptions::strict(), ParseOptions::default());
        assert!(!ParseOptions::strict().allow_trailing_tokens);
        assert!(ParseOptions::permissive().allow_trailing_tokens);
        assert_eq!(128, ParseOptions::permissive().max_depth);
    }
}
