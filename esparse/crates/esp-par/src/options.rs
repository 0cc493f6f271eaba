//! Parser configuration.

/// Knobs that change what the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept `import` declarations.
    pub allow_import: bool,
    /// Maximum syntactic nesting: statements, brackets, function bodies,
    /// operator operands.
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 1024;

    pub fn with_import(mut self, allow: bool) -> Self {
        self.allow_import = allow;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_import: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
