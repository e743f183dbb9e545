//! Set algebra over any membership-testable container.
//!
//! Nothing here knows about text. The operations borrow their inputs and build
//! a fresh container of the same type, so `HashSet<i32>` in tests and
//! `HashSet<String>` in the similarity code go through the same functions.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// A container of unique elements with cheap membership tests.
pub trait ElementSet {
    type Element;

    fn contains_element(&self, element: &Self::Element) -> bool;

    fn element_count(&self) -> usize;

    /// Iterates every element once, in no particular order.
    fn elements(&self) -> impl Iterator<Item = &Self::Element>;

    fn is_empty_set(&self) -> bool {
        self.element_count() == 0
    }
}

impl<E, S> ElementSet for HashSet<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    type Element = E;

    fn contains_element(&self, element: &E) -> bool {
        self.contains(element)
    }

    fn element_count(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = &E> {
        self.iter()
    }
}

impl<E: Ord> ElementSet for BTreeSet<E> {
    type Element = E;

    fn contains_element(&self, element: &E) -> bool {
        self.contains(element)
    }

    fn element_count(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = &E> {
        self.iter()
    }
}

/// Elements present in `s` or `t`, each once.
pub fn union<C>(s: &C, t: &C) -> C
where
    C: ElementSet + FromIterator<C::Element>,
    C::Element: Clone,
{
    s.elements()
        .chain(t.elements().filter(|e| !s.contains_element(e)))
        .cloned()
        .collect()
}

/// Elements present in both `s` and `t`.
pub fn intersection<C>(s: &C, t: &C) -> C
where
    C: ElementSet + FromIterator<C::Element>,
    C::Element: Clone,
{
    // Walk the smaller side; membership checks go against the larger one.
    let (small, large) = if s.element_count() <= t.element_count() {
        (s, t)
    } else {
        (t, s)
    };
    small
        .elements()
        .filter(|e| large.contains_element(e))
        .cloned()
        .collect()
}

/// `s \ t`: elements of `s` that are not in `t`.
pub fn set_difference<C>(s: &C, t: &C) -> C
where
    C: ElementSet + FromIterator<C::Element>,
    C::Element: Clone,
{
    s.elements()
        .filter(|e| !t.contains_element(e))
        .cloned()
        .collect()
}

/// Jaccard index `|s ∩ t| / |s ∪ t|`, defined as 1.0 when both sets are empty.
///
/// Only set equality scores 1.0: a strict subset scores its size ratio.
pub fn jaccard_index<C: ElementSet>(s: &C, t: &C) -> f64 {
    if s.is_empty_set() && t.is_empty_set() {
        return 1.0;
    }
    let inter = s.elements().filter(|e| t.contains_element(e)).count();
    let uni = s.element_count() + t.element_count() - inter;
    inter as f64 / uni as f64
}
