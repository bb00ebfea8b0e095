//! Integration tests for the facade entry points.

use wallaby_selectors::{attr, class, combine, element, id, pseudo_class, pseudo_element};

#[test]
fn test_each_entry_point_seeds_its_rendering() {
    assert_eq!(element("div").stringify(), "div");
    assert_eq!(id("main").stringify(), "#main");
    assert_eq!(class("container").stringify(), ".container");
    assert_eq!(attr("href$=\".png\"").stringify(), "[href$=\".png\"]");
    assert_eq!(pseudo_class("focus").stringify(), ":focus");
    assert_eq!(pseudo_element("before").stringify(), "::before");
}

#[test]
fn test_seeded_builders_chain_like_any_other() {
    let selector = element("a")
        .attr("href$=\".png\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
}

#[test]
fn test_facade_combine_matches_instance_combine() {
    let left = element("div").id("main").unwrap();
    let right = element("table").id("data").unwrap();
    let combined = combine(left.clone(), "+", right.clone());
    assert_eq!(combined.stringify(), "div#main + table#data");
    assert_eq!(combined, left.combine("+", right));
}

#[test]
fn test_facade_combine_accepts_unfinished_operands() {
    let combined = combine(element("ul"), ">", element("li"));
    assert_eq!(combined.stringify(), "ul > li");
}

#[test]
fn test_seeded_singletons_are_tracked() {
    assert!(element("a").element("b").is_err());
    assert!(id("main").id("other").is_err());
    assert!(pseudo_element("before").pseudo_element("after").is_err());
}
