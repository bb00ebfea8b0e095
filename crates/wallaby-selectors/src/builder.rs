//! The selector builder: fragment accumulation, ordering and cardinality
//! checks, and combination.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) fixes the order
//! simple selectors appear in within a compound selector, and restricts the
//! type selector, ID selector, and pseudo-element to at most one occurrence.
//! The builder enforces exactly those two rules and nothing else: fragment
//! values are concatenated verbatim.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::fragment::FragmentKind;

/// A rejected fragment append.
///
/// Both violations are unrecoverable for the builder that raised them: the
/// failing call consumed the builder, so the caller holds nothing to retry
/// with and must start over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment's rank was lower than the rank of the previously appended
    /// fragment.
    #[error(
        "selector parts must appear in order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation,

    /// A singleton kind (element, id, pseudo-element) was appended a second
    /// time.
    #[error("element, id, and pseudo-element must each occur at most once")]
    DuplicateSingleton,
}

/// A CSS selector under construction.
///
/// Fragment methods consume the builder and hand it back on success, so a
/// chain reads left to right and stops at the first violation:
///
/// ```
/// use wallaby_selectors::id;
///
/// let selector = id("main").class("container")?.class("editable")?;
/// assert_eq!(selector.stringify(), "#main.container.editable");
/// # Ok::<(), wallaby_selectors::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Accumulated rendering; fragments are concatenated with no separator.
    text: String,
    /// Kind of the most recently appended fragment (`None` on a fresh
    /// builder). The enum's total order is the rank order, so the
    /// non-decreasing invariant is a plain `<` comparison.
    last_rank: Option<FragmentKind>,
    /// Singleton kinds appended so far.
    seen_singletons: HashSet<FragmentKind>,
}

impl Selector {
    /// Create an empty builder. `stringify` on it yields `""`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type selector (rank 1, at most once).
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if any higher-ranked fragment was
    /// already appended; [`SelectorError::DuplicateSingleton`] on a second
    /// `element`.
    pub fn element(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, name)
    }

    /// Append an ID selector (rank 2, at most once), rendered `#name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] or
    /// [`SelectorError::DuplicateSingleton`] per the append rules.
    pub fn id(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, name)
    }

    /// Append a class selector (rank 3, repeatable), rendered `.name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a higher-ranked fragment was
    /// already appended.
    pub fn class(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, name)
    }

    /// Append an attribute selector (rank 4, repeatable), rendered `[expr]`.
    ///
    /// The expression is not parsed; `attr("href$=\".png\"")` renders
    /// `[href$=".png"]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a higher-ranked fragment was
    /// already appended.
    pub fn attr(self, expr: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, expr)
    }

    /// Append a pseudo-class (rank 5, repeatable), rendered `:name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-element was already
    /// appended.
    pub fn pseudo_class(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, name)
    }

    /// Append a pseudo-element (rank 6, at most once), rendered `::name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] on a second pseudo-element.
    pub fn pseudo_element(self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, name)
    }

    /// Join this selector to `other` with a combinator, yielding a fresh
    /// builder whose text is `"{self} {op} {other}"`.
    ///
    /// Combination is structural: rank and singleton bookkeeping reset, and
    /// the operator is not validated against the standard set
    /// (` `, `+`, `~`, `>`). Operands may be in any state of construction,
    /// including empty.
    #[must_use]
    pub fn combine(self, op: &str, other: Self) -> Self {
        Self {
            text: format!("{} {op} {}", self.text, other.text),
            last_rank: None,
            seen_singletons: HashSet::new(),
        }
    }

    /// The accumulated selector text, verbatim.
    ///
    /// Callable at any point (an empty builder yields `""`) and repeatedly;
    /// reading it finalizes nothing.
    #[must_use]
    pub fn stringify(&self) -> &str {
        &self.text
    }

    /// Returns true if no fragment has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check + record + render, shared by every fragment method.
    fn append(mut self, kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        self.check_order(kind)?;
        self.push(kind, value);
        Ok(self)
    }

    /// The two append rules: ranks never decrease, singletons never repeat.
    fn check_order(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if self.last_rank.is_some_and(|last| kind < last) {
            return Err(SelectorError::OrderViolation);
        }
        if kind.is_singleton() && self.seen_singletons.contains(&kind) {
            return Err(SelectorError::DuplicateSingleton);
        }
        Ok(())
    }

    /// Record the fragment unconditionally. The facade seeds fresh builders
    /// through this path, where neither append rule can fire.
    pub(crate) fn push(&mut self, kind: FragmentKind, value: &str) {
        self.last_rank = Some(kind);
        if kind.is_singleton() {
            let _ = self.seen_singletons.insert(kind);
        }
        self.text.push_str(&kind.render(value));
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
