//! Radix trie router implementation.

use crate::config::RouterConfig;
use crate::error::{ConflictKind, RouterError};
use crate::r#match::{Params, RouteMatch};
use crate::segment::{self, Constraint, Token};
use std::collections::HashMap;
use std::mem;

/// What a node consumes from the path.
#[derive(Debug, Clone)]
enum Segment {
    /// Literal text. Empty only at the root.
    Static(String),
    /// Up to the next `/`, or the anchored regex match.
    Param {
        name: String,
        constraint: Option<Constraint>,
    },
    /// The whole remainder.
    Wildcard(String),
}

/// Child slots of a node.
///
/// Static children are keyed by the first character of their text; the
/// parameter and wildcard branches have one fixed slot each.
#[derive(Debug, Clone)]
struct Children<T> {
    statics: HashMap<char, Node<T>>,
    param: Option<Box<Node<T>>>,
    wildcard: Option<Box<Node<T>>>,
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self {
            statics: HashMap::new(),
            param: None,
            wildcard: None,
        }
    }
}

/// Trie node.
#[derive(Debug, Clone)]
struct Node<T> {
    segment: Segment,
    children: Children<T>,
    handler: Option<T>,
}

impl<T> Node<T> {
    fn new(segment: Segment) -> Self {
        Self {
            segment,
            children: Children::default(),
            handler: None,
        }
    }

    /// Split a static node so that it keeps only the first `at` bytes.
    ///
    /// The suffix becomes a single static child that inherits every child
    /// and the handler.
    fn split_at(&mut self, at: usize) {
        let Segment::Static(text) = &mut self.segment else {
            return;
        };
        let suffix = text.split_off(at);
        let Some(key) = suffix.chars().next() else {
            return;
        };
        tracing::trace!(prefix = %text, suffix = %suffix, "splitting static node");

        let child = Node {
            segment: Segment::Static(suffix),
            children: mem::take(&mut self.children),
            handler: self.handler.take(),
        };
        self.children.statics.insert(key, child);
    }

    /// Merge static text below this node and return the node where it ends.
    fn merge_static(&mut self, text: &str) -> &mut Node<T> {
        let mut node = self;
        let mut text = text;

        loop {
            let rest = if let Segment::Static(stored) = &node.segment {
                let lcp = longest_common_prefix(stored, text);
                if lcp < stored.len() {
                    node.split_at(lcp);
                }
                &text[lcp..]
            } else {
                text
            };

            let Some(first) = rest.chars().next() else {
                return node;
            };

            match node.children.statics.entry(first) {
                std::collections::hash_map::Entry::Occupied(entry) => {
                    node = entry.into_mut();
                    text = rest;
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    return entry.insert(Node::new(Segment::Static(rest.to_string())));
                }
            }
        }
    }

    /// Reuse or create the parameter child.
    fn param_child(
        &mut self,
        name: &str,
        constraint: Option<Constraint>,
    ) -> Result<&mut Node<T>, ConflictKind> {
        if let Some(existing) = &self.children.param {
            if let Segment::Param {
                name: existing_name,
                constraint: existing_constraint,
            } = &existing.segment
            {
                check_param(existing_name, existing_constraint.as_ref(), name, constraint.as_ref())?;
            }
        }

        let child = self.children.param.get_or_insert_with(|| {
            Box::new(Node::new(Segment::Param {
                name: name.to_string(),
                constraint,
            }))
        });
        Ok(&mut **child)
    }

    /// Reuse or create the wildcard child.
    fn wildcard_child(&mut self, name: &str) -> Result<&mut Node<T>, ConflictKind> {
        if let Some(existing) = &self.children.wildcard {
            if let Segment::Wildcard(existing_name) = &existing.segment {
                if existing_name != name {
                    return Err(ConflictKind::WildcardName {
                        existing: existing_name.clone(),
                        requested: name.to_string(),
                    });
                }
            }
        }

        let child = self
            .children
            .wildcard
            .get_or_insert_with(|| Box::new(Node::new(Segment::Wildcard(name.to_string()))));
        Ok(&mut **child)
    }

    /// Test this node against `path`, pushing any capture.
    ///
    /// Returns what is left of the path, or `None` if the node does not
    /// match here.
    fn consume<'r, 'p>(
        &'r self,
        path: &'p str,
        captures: &mut Vec<(&'r str, &'p str)>,
    ) -> Option<&'p str> {
        match &self.segment {
            Segment::Wildcard(name) => {
                captures.push((name.as_str(), path));
                Some("")
            }
            Segment::Param { name, constraint } => {
                let len = match constraint {
                    Some(constraint) => constraint.match_len(path)?,
                    None => memchr::memchr(b'/', path.as_bytes()).unwrap_or(path.len()),
                };
                let (value, rest) = path.split_at(len);
                captures.push((name.as_str(), value));
                Some(rest)
            }
            Segment::Static(text) => path.strip_prefix(text.as_str()),
        }
    }
}

fn check_param(
    existing_name: &str,
    existing: Option<&Constraint>,
    name: &str,
    requested: Option<&Constraint>,
) -> Result<(), ConflictKind> {
    if existing_name != name {
        return Err(ConflictKind::ParamName {
            existing: existing_name.to_string(),
            requested: name.to_string(),
        });
    }
    match (existing, requested) {
        (None, Some(requested)) => Err(ConflictKind::ConstraintAdded {
            name: name.to_string(),
            requested: requested.to_string(),
        }),
        (Some(existing), None) => Err(ConflictKind::ConstraintRemoved {
            name: name.to_string(),
            existing: existing.to_string(),
        }),
        (Some(existing), Some(requested)) if existing != requested => {
            Err(ConflictKind::ConstraintChanged {
                name: name.to_string(),
                existing: existing.to_string(),
                requested: requested.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Byte length of the longest common prefix, on a char boundary.
fn longest_common_prefix(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map_or_else(|| a.len().min(b.len()), |((i, _), _)| i)
}

/// A pending lookup step: a node to test, the path left at that point, and
/// the capture depth its parent left behind.
struct Frame<'r, 'p, T> {
    node: &'r Node<T>,
    path: &'p str,
    depth: usize,
}

/// Radix trie router.
///
/// Build it with [`Router::register`], then share it read-only for
/// [`Router::match_path`]. Registration needs `&mut self` and lookups need
/// only `&self`, so the borrow checker keeps the two phases apart.
#[derive(Debug, Clone)]
pub struct Router<T> {
    root: Node<T>,
    config: RouterConfig,
    len: usize,
}

impl<T> Router<T> {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create an empty router with custom configuration.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            root: Node::new(Segment::Static(String::new())),
            config,
            len: 0,
        }
    }

    /// The configuration patterns are compiled with.
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Number of distinct patterns holding a handler.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no pattern has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Register `handler` for `pattern`.
    ///
    /// Registering the same pattern again replaces the handler and leaves
    /// the tree shape alone.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidPatternSyntax`] if the pattern is malformed;
    ///   the tree is untouched.
    /// - [`RouterError::PatternConflict`] if a parameter or wildcard slot is
    ///   already registered with another name or regex. Static prefixes
    ///   merged before the conflicting token stay in the tree.
    pub fn register(&mut self, pattern: &str, handler: T) -> Result<(), RouterError> {
        let tokens = segment::compile(pattern, &self.config).inspect_err(|err| {
            tracing::debug!(pattern, error = %err, "rejected route pattern");
        })?;

        let mut node = &mut self.root;
        for token in tokens {
            let next = match token {
                Token::Static(text) => Ok(node.merge_static(text)),
                Token::Param { name, constraint } => node.param_child(name, constraint),
                Token::Wildcard { name } => node.wildcard_child(name),
            };
            node = next.map_err(|source| {
                tracing::debug!(pattern, error = %source, "conflicting route pattern");
                RouterError::PatternConflict {
                    pattern: pattern.to_string(),
                    source,
                }
            })?;
        }

        if node.handler.replace(handler).is_none() {
            self.len += 1;
            tracing::debug!(pattern, routes = self.len, "registered route");
        } else {
            tracing::debug!(pattern, "replaced route handler");
        }
        Ok(())
    }

    /// Find the handler for `path` and the parameters captured on the way.
    ///
    /// At every node a static child is tried before the parameter child,
    /// which is tried before the wildcard child. When a branch dead-ends the
    /// search backs out and tries the next candidate; captures made inside
    /// the abandoned branch are dropped. The first node that consumes the
    /// whole path ends the search, handler or not.
    #[must_use]
    pub fn match_path<'r, 'p>(&'r self, path: &'p str) -> RouteMatch<'r, 'p, T> {
        let mut captures: Vec<(&'r str, &'p str)> = Vec::new();
        let mut stack = vec![Frame {
            node: &self.root,
            path,
            depth: 0,
        }];

        while let Some(Frame { node, path: rest, depth }) = stack.pop() {
            captures.truncate(depth);
            let Some(rest) = node.consume(rest, &mut captures) else {
                continue;
            };

            if rest.is_empty() {
                tracing::trace!(path, found = node.handler.is_some(), "route lookup");
                return RouteMatch {
                    handler: node.handler.as_ref(),
                    params: Params::from_captures(&captures),
                };
            }

            // Pushed in reverse so the static child is popped first.
            let depth = captures.len();
            let children = &node.children;
            let candidates = [
                children.wildcard.as_deref(),
                children.param.as_deref(),
                rest.chars().next().and_then(|c| children.statics.get(&c)),
            ];
            stack.extend(
                candidates
                    .into_iter()
                    .flatten()
                    .map(|node| Frame {
                        node,
                        path: rest,
                        depth,
                    }),
            );
        }

        tracing::trace!(path, found = false, "route lookup");
        RouteMatch::not_found()
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
