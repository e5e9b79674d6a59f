//! Route matching result.

/// Captured path parameters, in first-capture order.
///
/// Names borrow from the router, values borrow from the matched path. When
/// one name is captured twice along a path (`/companies/:id/users/:id`), the
/// entry keeps its first position and takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params<'r, 'p> {
    entries: Vec<(&'r str, &'p str)>,
}

impl<'r, 'p> Params<'r, 'p> {
    /// Fold a raw capture stack into an ordered map.
    pub(crate) fn from_captures(captures: &[(&'r str, &'p str)]) -> Self {
        let mut entries: Vec<(&'r str, &'p str)> = Vec::with_capacity(captures.len());
        for &(name, value) in captures {
            match entries.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = value,
                None => entries.push((name, value)),
            }
        }
        Self { entries }
    }

    /// Get a parameter value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'p str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// Number of captured parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'r str, &'p str)> + '_ {
        self.entries.iter().copied()
    }

    /// The pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[(&'r str, &'p str)] {
        &self.entries
    }
}

impl<'r, 'p> IntoIterator for Params<'r, 'p> {
    type Item = (&'r str, &'p str);
    type IntoIter = std::vec::IntoIter<(&'r str, &'p str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Result of looking up a path.
///
/// A miss is a normal value: `handler` is `None`. A pattern that was reached
/// but carries no handler looks the same as no route at all.
#[derive(Debug)]
pub struct RouteMatch<'r, 'p, T> {
    /// The matched handler, if any.
    pub handler: Option<&'r T>,
    /// Extracted path parameters.
    pub params: Params<'r, 'p>,
}

impl<'r, 'p, T> RouteMatch<'r, 'p, T> {
    pub(crate) fn not_found() -> Self {
        Self {
            handler: None,
            params: Params::default(),
        }
    }

    /// Returns true if a handler was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.handler.is_some()
    }

    /// Get a parameter value by name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&'p str> {
        self.params.get(name)
    }

    /// Split into handler and parameters.
    #[must_use]
    pub fn into_parts(self) -> (Option<&'r T>, Params<'r, 'p>) {
        (self.handler, self.params)
    }
}
