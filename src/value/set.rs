//! `PersistentSet<T>`: an immutable singly-linked sequence with structural sharing.
//!
//! "Set" is the historical name: the structure is an ordered list that
//! keeps duplicates and never stores a null element. `insert` prepends a new
//! head in O(1) and shares every existing node. `remove` and `update` rebuild
//! only the prefix up to the last affected element and share the rest, and
//! return the receiver itself when nothing matched.

use core::fmt;
use core::iter::FusedIterator;
use std::sync::Arc;

use crate::detect::Dynamic;
use crate::dispatch::DispatchRegistry;
use crate::error::{Error, Result};
use crate::primitives::HashCombiner;
use crate::value::StructuralValue;

struct Node<T> {
    value: T,
    next: Link<T>,
    len: usize,
}

type Link<T> = Option<Arc<Node<T>>>;

/// Immutable, null-rejecting, insertion-ordered sequence.
///
/// ```
/// use flatval::PersistentSet;
///
/// let set = PersistentSet::empty().insert("a").insert("b");
/// assert_eq!(set.to_vec(), vec!["b", "a"]);
///
/// let unchanged = set.remove(|value| *value == "z");
/// assert!(unchanged.ptr_eq(&set));
/// ```
pub struct PersistentSet<T> {
    head: Link<T>,
}

impl<T> PersistentSet<T> {
    /// The terminal empty set.
    pub const fn empty() -> Self {
        Self { head: None }
    }

    /// Set of `items` in iteration order.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Self::empty(), |set, item| set.insert(item))
    }

    /// [`of`](Self::of) over nullable items; any null fails the whole build.
    pub fn try_from_nullable<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let items: Option<Vec<T>> = items.into_iter().collect();
        items.map(Self::of).ok_or(Error::NullElement)
    }

    /// A new set with `value` at the head, sharing every existing node.
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        Self {
            head: Some(Arc::new(Node {
                value,
                next: self.head.clone(),
                len: self.len() + 1,
            })),
        }
    }

    /// [`insert`](Self::insert) of a nullable value, rejecting null.
    pub fn try_insert(&self, value: Option<T>) -> Result<Self> {
        value.map(|value| self.insert(value)).ok_or(Error::NullElement)
    }

    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |node| node.len)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Whether both sets are the same instance.
    ///
    /// All empty sets are the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// A set without the elements matching `predicate`, in their original order.
    ///
    /// Returns this same instance when nothing matches.
    #[must_use]
    pub fn remove<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let nodes = self.nodes();
        let matched: Vec<bool> = nodes.iter().map(|node| predicate(&node.value)).collect();
        let Some(last) = matched.iter().rposition(|hit| *hit) else {
            return self.clone();
        };

        let mut rebuilt = Self {
            head: nodes[last].next.clone(),
        };
        for (node, _) in nodes[..last].iter().zip(&matched[..last]).rev().filter(|(_, hit)| !**hit) {
            rebuilt = rebuilt.insert(node.value.clone());
        }
        rebuilt
    }

    /// A set with every element matching `predicate` replaced by `updater`'s result.
    ///
    /// Returns this same instance when nothing matches.
    #[must_use]
    pub fn update<P, U>(&self, mut predicate: P, mut updater: U) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
        U: FnMut(&T) -> T,
    {
        let nodes = self.nodes();
        let matched: Vec<bool> = nodes.iter().map(|node| predicate(&node.value)).collect();
        let Some(last) = matched.iter().rposition(|hit| *hit) else {
            return self.clone();
        };

        let values: Vec<T> = nodes[..=last]
            .iter()
            .zip(&matched)
            .map(|(node, hit)| if *hit { updater(&node.value) } else { node.value.clone() })
            .collect();
        let tail = Self {
            head: nodes[last].next.clone(),
        };
        values.into_iter().rev().fold(tail, |set, value| set.insert(value))
    }

    fn nodes(&self) -> Vec<&Node<T>> {
        let mut nodes = Vec::with_capacity(self.len());
        let mut next = self.head.as_deref();
        while let Some(node) = next {
            nodes.push(node);
            next = node.next.as_deref();
        }
        nodes
    }
}

impl<T: Dynamic> PersistentSet<T> {
    /// Whether any element is equal to `value` under `dispatch`.
    pub fn contains_with(&self, value: &dyn Dynamic, dispatch: &DispatchRegistry) -> bool {
        self.iter().any(|element| dispatch.are_equal(element, value))
    }

    /// [`contains_with`](Self::contains_with) on the process-wide registry.
    #[cfg(feature = "global")]
    pub fn contains(&self, value: &dyn Dynamic) -> bool {
        self.contains_with(value, crate::dispatch::global())
    }
}

impl<T> Clone for PersistentSet<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for PersistentSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Unlinks uniquely owned nodes one at a time so long chains cannot overflow the stack.
impl<T> Drop for PersistentSet<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for PersistentSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a, T> IntoIterator for &'a PersistentSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Dynamic> StructuralValue for PersistentSet<T> {
    fn equals(&self, other: &dyn Dynamic, dispatch: &DispatchRegistry) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return false;
        };
        if self.ptr_eq(other) {
            return true;
        }
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| dispatch.are_equal(a, b))
    }

    fn hash_code(&self, dispatch: &DispatchRegistry) -> i32 {
        self.iter()
            .fold(HashCombiner::new(), |combiner, value| combiner.add(dispatch.hash_of(value)))
            .finish()
    }

    fn to_display_string(&self, dispatch: &DispatchRegistry) -> String {
        let values: Vec<String> = self.iter().map(|value| dispatch.string_of(value)).collect();
        format!("{{{}}}", values.join(", "))
    }
}

#[cfg(feature = "global")]
crate::impl_std_via_dispatch!(impl<T> PersistentSet<T>);

// =============================================================================
// Iteration
// =============================================================================

/// Borrowing iterator over a [`PersistentSet`], head first.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.next.map_or(0, |node| node.len);
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}
