//! Router configuration.

use serde::Deserialize;

/// Default compiled-program size limit for a single regex constraint (1MB).
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 1024 * 1024;

/// Default lazy DFA cache size limit for a single regex constraint (2MB).
pub const DEFAULT_REGEX_DFA_SIZE_LIMIT: usize = 2 * 1024 * 1024;

/// Default nesting depth limit for a regex constraint.
pub const DEFAULT_REGEX_NEST_LIMIT: u32 = 64;

/// Configuration applied while compiling route patterns.
///
/// Route patterns usually come from application code, but the limits keep
/// a hostile or generated pattern table from building huge regex programs.
///
/// # Example
///
/// ```
/// use trie_router::{Router, RouterConfig};
///
/// let config = RouterConfig::new().regex_size_limit(64 * 1024);
/// let router: Router<u32> = Router::with_config(config);
/// assert!(router.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Maximum size of a compiled regex constraint in bytes.
    regex_size_limit: usize,
    /// Maximum lazy DFA cache size of a regex constraint in bytes.
    regex_dfa_size_limit: usize,
    /// Maximum nesting depth of a regex constraint.
    regex_nest_limit: u32,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            regex_dfa_size_limit: DEFAULT_REGEX_DFA_SIZE_LIMIT,
            regex_nest_limit: DEFAULT_REGEX_NEST_LIMIT,
        }
    }
}

impl RouterConfig {
    /// Create a configuration with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compiled-program size limit for regex constraints.
    #[must_use]
    pub fn regex_size_limit(mut self, limit: usize) -> Self {
        self.regex_size_limit = limit;
        self
    }

    /// Set the lazy DFA cache size limit for regex constraints.
    #[must_use]
    pub fn regex_dfa_size_limit(mut self, limit: usize) -> Self {
        self.regex_dfa_size_limit = limit;
        self
    }

    /// Set the nesting depth limit for regex constraints.
    #[must_use]
    pub fn regex_nest_limit(mut self, limit: u32) -> Self {
        self.regex_nest_limit = limit;
        self
    }

    /// Returns the configured compiled-program size limit.
    #[must_use]
    pub fn get_regex_size_limit(&self) -> usize {
        self.regex_size_limit
    }

    /// Returns the configured lazy DFA cache size limit.
    #[must_use]
    pub fn get_regex_dfa_size_limit(&self) -> usize {
        self.regex_dfa_size_limit
    }

    /// Returns the configured nesting depth limit.
    #[must_use]
    pub fn get_regex_nest_limit(&self) -> u32 {
        self.regex_nest_limit
    }
}
