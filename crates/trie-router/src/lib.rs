//! Compressed radix trie path router.
//!
//! This crate maps path strings to handler values through a prefix tree
//! that merges shared path prefixes into single nodes.
//!
//! # Features
//!
//! - Radix trie with prefix splitting on insert
//! - Named parameters (`/users/:id`)
//! - Regex-constrained parameters (`/files/:name([a-z]+)`, `/:id(/[0-9]+/i)`)
//! - Trailing wildcards (`/static/*path`)
//! - Backtracking lookup: static beats parameter beats wildcard, with
//!   fallback when a more specific branch dead-ends deeper in the tree
//!
//! # Example
//!
//! ```
//! use trie_router::Router;
//!
//! let mut router = Router::new();
//! router.register("/users/:id", "user").unwrap();
//! router.register("/users/:id/*file", "user-file").unwrap();
//!
//! let found = router.match_path("/users/42/a/b.png");
//! assert_eq!(found.handler, Some(&"user-file"));
//! assert_eq!(found.get_param("id"), Some("42"));
//! assert_eq!(found.get_param("file"), Some("a/b.png"));
//! ```

#![warn(unsafe_code)]

mod config;
mod error;
mod r#match;
mod segment;
mod trie;

pub use config::{
    DEFAULT_REGEX_DFA_SIZE_LIMIT, DEFAULT_REGEX_NEST_LIMIT, DEFAULT_REGEX_SIZE_LIMIT,
    RouterConfig,
};
pub use error::{ConflictKind, RouterError, SyntaxError};
pub use r#match::{Params, RouteMatch};
pub use segment::{Constraint, Token, compile};
pub use trie::Router;
