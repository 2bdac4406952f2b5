//! Binding selection — precedence across typed and user-provided bindings.

use appdx_common::BindingEntry;

/// The winning binding, tagged with where it came from. Identity
/// derivation treats the two sources differently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectedBinding<'a> {
    /// Bound under the first-class service-type key.
    Typed(&'a BindingEntry),
    /// Matched by name in the `user-provided` bucket.
    UserProvided(&'a BindingEntry),
}

impl<'a> SelectedBinding<'a> {
    /// The underlying binding, whichever bucket it came from.
    #[must_use]
    pub fn entry(&self) -> &'a BindingEntry {
        match self {
            Self::Typed(entry) | Self::UserProvided(entry) => entry,
        }
    }
}

/// Pick exactly one winning binding, or none.
///
/// Typed bindings always outrank user-provided candidates regardless of
/// count. With several typed bindings the first in catalog order wins; the
/// caller is expected to report that ambiguity. With no typed binding the
/// first user-provided candidate wins, if any.
#[must_use]
pub fn select_binding<'a>(
    typed: &'a [BindingEntry],
    user_provided: &[&'a BindingEntry],
) -> Option<SelectedBinding<'a>> {
    if let Some(first) = typed.first() {
        return Some(SelectedBinding::Typed(first));
    }
    user_provided.first().copied().map(SelectedBinding::UserProvided)
}
