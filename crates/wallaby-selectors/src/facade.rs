//! Entry points for building selectors.
//!
//! One function per fragment kind, each seeding a fresh [`Selector`] with
//! that fragment, plus [`combine`]. Seeding a fresh builder can violate
//! neither the order rule nor the cardinality rule, so these return a
//! `Selector` directly; violations only become possible on subsequent
//! chained calls.

use crate::builder::Selector;
use crate::fragment::FragmentKind;

/// A selector seeded with a type selector: `element("div")` renders `div`.
#[must_use]
pub fn element(name: &str) -> Selector {
    seed(FragmentKind::Element, name)
}

/// A selector seeded with an ID selector: `id("main")` renders `#main`.
#[must_use]
pub fn id(name: &str) -> Selector {
    seed(FragmentKind::Id, name)
}

/// A selector seeded with a class selector: `class("nav")` renders `.nav`.
#[must_use]
pub fn class(name: &str) -> Selector {
    seed(FragmentKind::Class, name)
}

/// A selector seeded with an attribute selector: `attr("href")` renders
/// `[href]`.
#[must_use]
pub fn attr(expr: &str) -> Selector {
    seed(FragmentKind::Attribute, expr)
}

/// A selector seeded with a pseudo-class: `pseudo_class("focus")` renders
/// `:focus`.
#[must_use]
pub fn pseudo_class(name: &str) -> Selector {
    seed(FragmentKind::PseudoClass, name)
}

/// A selector seeded with a pseudo-element: `pseudo_element("before")`
/// renders `::before`.
#[must_use]
pub fn pseudo_element(name: &str) -> Selector {
    seed(FragmentKind::PseudoElement, name)
}

/// Join two selectors with a combinator.
///
/// Delegates to [`Selector::combine`]: the result's text is
/// `"{a} {op} {b}"`, the operator is not validated, and the operands need
/// not be finished.
#[must_use]
pub fn combine(a: Selector, op: &str, b: Selector) -> Selector {
    a.combine(op, b)
}

fn seed(kind: FragmentKind, value: &str) -> Selector {
    let mut selector = Selector::new();
    selector.push(kind, value);
    selector
}
