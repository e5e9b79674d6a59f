//! Route registration errors.
//!
//! Only [`Router::register`](crate::Router::register) fails. Lookups report
//! "not found" through an empty [`RouteMatch`](crate::RouteMatch) instead.

/// Error returned when a route pattern cannot be registered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// The pattern string is malformed.
    #[error("invalid route pattern {pattern:?} at byte {position}: {source}")]
    InvalidPatternSyntax {
        /// The rejected pattern.
        pattern: String,
        /// Byte offset of the offending marker.
        position: usize,
        /// What was wrong with it.
        #[source]
        source: SyntaxError,
    },
    /// The pattern reuses an existing parameter or wildcard slot incompatibly.
    #[error("route pattern {pattern:?} conflicts with an existing route: {source}")]
    PatternConflict {
        /// The rejected pattern.
        pattern: String,
        /// Which slot disagreed, and how.
        #[source]
        source: ConflictKind,
    },
}

impl RouterError {
    /// The pattern that was rejected.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::InvalidPatternSyntax { pattern, .. } | Self::PatternConflict { pattern, .. } => {
                pattern
            }
        }
    }

    /// Returns true for [`RouterError::InvalidPatternSyntax`].
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::InvalidPatternSyntax { .. })
    }

    /// Returns true for [`RouterError::PatternConflict`].
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::PatternConflict { .. })
    }
}

/// Malformed pattern details.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    /// `:` not followed by a `[a-zA-Z0-9._-]+` name.
    #[error("parameter marker `:` must be followed by a name of [a-zA-Z0-9._-]")]
    MissingParamName,
    /// `(` without a matching `)`.
    #[error("regex constraint for parameter `{name}` is not closed")]
    UnterminatedConstraint {
        /// Parameter the constraint belongs to.
        name: String,
    },
    /// `()` with nothing inside.
    #[error("regex constraint for parameter `{name}` is empty")]
    EmptyConstraint {
        /// Parameter the constraint belongs to.
        name: String,
    },
    /// Unknown flag in a `/pattern/flags` constraint.
    #[error("unsupported regex flag `{flag}` for parameter `{name}`")]
    UnsupportedFlag {
        /// Parameter the constraint belongs to.
        name: String,
        /// The flag character.
        flag: char,
    },
    /// The regex engine rejected the constraint.
    #[error("invalid regex constraint for parameter `{name}`")]
    InvalidRegex {
        /// Parameter the constraint belongs to.
        name: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
    /// Wildcard name contains characters outside `[a-zA-Z0-9._-]`.
    #[error("invalid wildcard name {name:?}, can only contain a-z, A-Z, 0-9, ., _, -")]
    InvalidWildcardName {
        /// Everything after the `*`.
        name: String,
    },
}

/// Incompatible reuse of an existing parameter or wildcard slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictKind {
    /// The slot's parameter has another name.
    #[error("parameter is registered as `{existing}`, cannot also name it `{requested}`")]
    ParamName {
        /// Name already in the tree.
        existing: String,
        /// Name in the new pattern.
        requested: String,
    },
    /// The slot's parameter has no constraint and the new pattern adds one.
    #[error("cannot add regex constraint {requested} to existing parameter `{name}`")]
    ConstraintAdded {
        /// Parameter name.
        name: String,
        /// Constraint in the new pattern.
        requested: String,
    },
    /// The slot's parameter has a different constraint.
    #[error("cannot change regex constraint of parameter `{name}` from {existing} to {requested}")]
    ConstraintChanged {
        /// Parameter name.
        name: String,
        /// Constraint already in the tree.
        existing: String,
        /// Constraint in the new pattern.
        requested: String,
    },
    /// The slot's parameter has a constraint and the new pattern omits it.
    #[error("parameter `{name}` is registered with regex constraint {existing}, cannot reuse it without one")]
    ConstraintRemoved {
        /// Parameter name.
        name: String,
        /// Constraint already in the tree.
        existing: String,
    },
    /// The slot's wildcard has another name.
    #[error("wildcard is registered as `{existing}`, cannot also name it `{requested}`")]
    WildcardName {
        /// Name already in the tree.
        existing: String,
        /// Name in the new pattern.
        requested: String,
    },
}
