//! Selector fragment kinds and their textual renderings.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) defines the simple
//! selectors a compound selector is built from. This module only names them
//! and renders them; it never parses or validates the identifiers callers
//! supply.

use strum_macros::{Display, EnumIter};

/// One kind of simple-selector fragment.
///
/// Variants are declared in the only legal relative order fragments may
/// appear in within one compound selector, so the derived `Ord` *is* the
/// rank order:
///
/// ```
/// use wallaby_selectors::FragmentKind;
///
/// assert!(FragmentKind::Element < FragmentKind::Id);
/// assert!(FragmentKind::Class < FragmentKind::PseudoElement);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.editable`
    Class,

    /// [§ 6.4 Attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:hover`
    PseudoClass,

    /// [Pseudo-elements](https://www.w3.org/TR/css-pseudo-4/)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl FragmentKind {
    /// The fixed rank (1-6) defining the legal append order.
    ///
    /// Equivalent to the variant's position in the derived `Ord`; exposed
    /// for diagnostics and documentation.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Returns true for kinds that may appear at most once per selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render one fragment of the given kind around a caller-supplied value.
    ///
    /// The value is emitted verbatim; callers are responsible for supplying
    /// a well-formed identifier (or attribute expression).
    #[must_use]
    pub fn render(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::FragmentKind;

    #[test]
    fn test_ranks_are_dense_and_ordered() {
        let ranks: Vec<u8> = FragmentKind::iter().map(FragmentKind::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_rank_order_matches_derived_ord() {
        for a in FragmentKind::iter() {
            for b in FragmentKind::iter() {
                assert_eq!(a.rank() < b.rank(), a < b);
            }
        }
    }

    #[test]
    fn test_render_prefixes() {
        assert_eq!(FragmentKind::Element.render("div"), "div");
        assert_eq!(FragmentKind::Id.render("main"), "#main");
        assert_eq!(FragmentKind::Class.render("container"), ".container");
        assert_eq!(
            FragmentKind::Attribute.render("href$=\".png\""),
            "[href$=\".png\"]"
        );
        assert_eq!(FragmentKind::PseudoClass.render("focus"), ":focus");
        assert_eq!(FragmentKind::PseudoElement.render("before"), "::before");
    }

    #[test]
    fn test_display_names_are_kebab_case() {
        assert_eq!(FragmentKind::Element.to_string(), "element");
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::PseudoElement.to_string(), "pseudo-element");
    }
}
