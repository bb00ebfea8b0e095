//! Fluent builder assembling CSS selector strings from typed fragments.
//!
//! # Scope
//!
//! This crate builds selector *strings* out of well-formed fragments the
//! caller supplies; it enforces the two structural rules of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) compound
//! selectors and nothing else:
//!
//! - **Order**: fragments appear in the fixed order element, id, class,
//!   attribute, pseudo-class, pseudo-element ([`FragmentKind`] ranks 1-6);
//!   ranks never decrease within one builder.
//! - **Cardinality**: element, id, and pseudo-element occur at most once
//!   per builder.
//!
//! It is not a CSS parser, not a validator against the CSS grammar, and not
//! a selector optimizer. Fragment values and combinator operators are
//! emitted verbatim.
//!
//! # Usage
//!
//! Start from a [`facade`] function, chain fragment methods, read the text
//! with [`Selector::stringify`]:
//!
//! ```
//! use wallaby_selectors::{combine, element};
//!
//! let link = element("a")
//!     .attr("href$=\".png\"")?
//!     .pseudo_class("focus")?;
//! assert_eq!(link.stringify(), "a[href$=\".png\"]:focus");
//!
//! let siblings = combine(element("div").id("main")?, "+", element("table").id("data")?);
//! assert_eq!(siblings.stringify(), "div#main + table#data");
//! # Ok::<(), wallaby_selectors::SelectorError>(())
//! ```

/// The selector builder and its append rules.
pub mod builder;
/// Facade entry points, one per fragment kind plus `combine`.
pub mod facade;
/// Fragment kinds per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod fragment;

pub use builder::{Selector, SelectorError};
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use fragment::FragmentKind;
