//! Route pattern compilation.
//!
//! A pattern is scanned left to right and split at the two markers:
//!
//! - `:name`, `:name(regex)`, `:name(/regex/flags)` capture a parameter
//! - `*name` captures the rest of the path and must be the last token
//!
//! Everything between markers is static text that must match verbatim.
//!
//! # Example
//!
//! ```
//! use trie_router::{RouterConfig, Token, compile};
//!
//! let tokens = compile("/users/:id/*file", &RouterConfig::default()).unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0], Token::Static("/users/"));
//! assert!(matches!(tokens[1], Token::Param { name: "id", constraint: None }));
//! assert_eq!(tokens[2], Token::Static("/"));
//! assert_eq!(tokens[3], Token::Wildcard { name: "file" });
//! ```

use crate::config::RouterConfig;
use crate::error::{RouterError, SyntaxError};
use regex::{Regex, RegexBuilder};
use std::fmt;

/// One compiled piece of a route pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// Literal text. May be empty between two adjacent markers.
    Static(&'a str),
    /// Named parameter, optionally gated by a regex.
    Param {
        /// Parameter name.
        name: &'a str,
        /// Optional regex constraint.
        constraint: Option<Constraint>,
    },
    /// Trailing catch-all. The name may be empty.
    Wildcard {
        /// Wildcard name.
        name: &'a str,
    },
}

/// A compiled regex constraint on a parameter.
///
/// The regex is anchored at the start of the remaining path, so the
/// parameter captures exactly the matched prefix. Two constraints are equal
/// when their source and normalized flags are equal.
#[derive(Debug, Clone)]
pub struct Constraint {
    source: String,
    flags: String,
    regex: Regex,
}

impl Constraint {
    fn parse(name: &str, body: &str, config: &RouterConfig) -> Result<Self, SyntaxError> {
        let (source, flags) = match body.strip_prefix('/') {
            Some(inner) => match inner.rfind('/') {
                Some(end) => (&inner[..end], &inner[end + 1..]),
                None => (body, ""),
            },
            None => (body, ""),
        };

        let mut normalized: Vec<char> = Vec::with_capacity(flags.len());
        for flag in flags.chars() {
            // Unicode is always on; global and sticky are implied by anchoring.
            if !matches!(flag, 'i' | 'm' | 's' | 'x' | 'u' | 'g' | 'y') {
                return Err(SyntaxError::UnsupportedFlag {
                    name: name.to_string(),
                    flag,
                });
            }
            normalized.push(flag);
        }
        normalized.sort_unstable();
        normalized.dedup();
        let extended = normalized.contains(&'x');

        // A trailing `#` comment in extended mode must not swallow the group close.
        let anchored = if extended {
            format!("\\A(?:{source}\n)")
        } else {
            format!("\\A(?:{source})")
        };

        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(normalized.contains(&'i'))
            .multi_line(normalized.contains(&'m'))
            .dot_matches_new_line(normalized.contains(&'s'))
            .ignore_whitespace(extended)
            .size_limit(config.get_regex_size_limit())
            .dfa_size_limit(config.get_regex_dfa_size_limit())
            .nest_limit(config.get_regex_nest_limit())
            .build()
            .map_err(|source| SyntaxError::InvalidRegex {
                name: name.to_string(),
                source,
            })?;

        Ok(Self {
            source: source.to_string(),
            flags: normalized.into_iter().collect(),
            regex,
        })
    }

    /// The regex source as written in the pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Normalized (sorted, de-duplicated) flags.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Length of the match anchored at the start of `haystack`.
    #[must_use]
    pub fn match_len(&self, haystack: &str) -> Option<usize> {
        self.regex.find(haystack).map(|m| m.end())
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for Constraint {}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-')
}

fn syntax(pattern: &str, position: usize, source: SyntaxError) -> RouterError {
    RouterError::InvalidPatternSyntax {
        pattern: pattern.to_string(),
        position,
        source,
    }
}

/// Compile a route pattern into tokens, in encounter order.
///
/// Fails with [`RouterError::InvalidPatternSyntax`] on a missing parameter
/// name, a malformed or uncompilable regex constraint, or an illegal
/// wildcard name.
pub fn compile<'a>(pattern: &'a str, config: &RouterConfig) -> Result<Vec<Token<'a>>, RouterError> {
    let bytes = pattern.as_bytes();
    let mut tokens = Vec::new();
    let mut start = 0;

    while let Some(offset) = memchr::memchr2(b':', b'*', &bytes[start..]) {
        let marker = start + offset;
        tokens.push(Token::Static(&pattern[start..marker]));

        if bytes[marker] == b'*' {
            let name = &pattern[marker + 1..];
            if !name.bytes().all(is_name_byte) {
                return Err(syntax(
                    pattern,
                    marker,
                    SyntaxError::InvalidWildcardName {
                        name: name.to_string(),
                    },
                ));
            }
            tokens.push(Token::Wildcard { name });
            return Ok(tokens);
        }

        let (token, end) = compile_param(pattern, marker, config)?;
        tokens.push(token);
        start = end;
    }

    if start < bytes.len() {
        tokens.push(Token::Static(&pattern[start..]));
    }
    Ok(tokens)
}

/// Compile the parameter whose `:` sits at `marker`, returning the token and
/// the byte offset just past it.
fn compile_param<'a>(
    pattern: &'a str,
    marker: usize,
    config: &RouterConfig,
) -> Result<(Token<'a>, usize), RouterError> {
    let name_start = marker + 1;
    let name_len = pattern.as_bytes()[name_start..]
        .iter()
        .take_while(|&&b| is_name_byte(b))
        .count();
    if name_len == 0 {
        return Err(syntax(pattern, marker, SyntaxError::MissingParamName));
    }
    let name_end = name_start + name_len;
    let name = &pattern[name_start..name_end];

    if pattern.as_bytes().get(name_end) != Some(&b'(') {
        return Ok((
            Token::Param {
                name,
                constraint: None,
            },
            name_end,
        ));
    }

    let close = closing_paren(&pattern[name_end..]).ok_or_else(|| {
        syntax(
            pattern,
            marker,
            SyntaxError::UnterminatedConstraint {
                name: name.to_string(),
            },
        )
    })?;
    let body = &pattern[name_end + 1..name_end + close];
    if body.is_empty() {
        return Err(syntax(
            pattern,
            marker,
            SyntaxError::EmptyConstraint {
                name: name.to_string(),
            },
        ));
    }

    let constraint =
        Constraint::parse(name, body, config).map_err(|err| syntax(pattern, marker, err))?;
    Ok((
        Token::Param {
            name,
            constraint: Some(constraint),
        },
        name_end + close + 1,
    ))
}

/// Offset of the `)` closing the `(` at the start of `s`.
///
/// Escaped characters and parentheses inside character classes don't count.
fn closing_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut escaped = false;
    let mut in_class = false;

    for (i, b) in s.bytes().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' => escaped = true,
            b'[' if !in_class => in_class = true,
            b']' if in_class => in_class = false,
            b'(' if !in_class => depth += 1,
            b')' if !in_class => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
