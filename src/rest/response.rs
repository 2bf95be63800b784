//! The result of a batch lookup.
//!
//! A find by one identifier yields one resource; a find by several yields a
//! list in the order the API returned them. [`Found`] keeps that distinction
//! without forcing callers to match on it:
//!
//! ```rust
//! use etsy_api::rest::Found;
//!
//! let one = Found::One("reagent");
//! assert_eq!(one.len(), 1);
//! assert_eq!(one.into_one(), Some("reagent"));
//!
//! let many = Found::Many(vec!["a", "b"]);
//! assert_eq!(many.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
//! assert_eq!(many.into_vec(), vec!["a", "b"]);
//! ```

/// One resource or a list of resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found<T> {
    /// The result of a lookup by a single identifier.
    One(T),
    /// The result of a lookup by several identifiers, in response order.
    Many(Vec<T>),
}

impl<T> Found<T> {
    /// Returns the single resource, or the first of several.
    #[must_use]
    pub fn into_one(self) -> Option<T> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(items) => items.into_iter().next(),
        }
    }

    /// Returns every resource as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    /// Returns the number of resources.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    /// Returns `true` if there are no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the resources.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(item) => std::slice::from_ref(item).iter(),
            Self::Many(items) => items.iter(),
        }
    }
}

impl<T> IntoIterator for Found<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Found<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_behaves_like_single_element() {
        let found = Found::One(7);
        assert_eq!(found.len(), 1);
        assert!(!found.is_empty());
        assert_eq!(found.iter().collect::<Vec<_>>(), vec![&7]);
        assert_eq!(found.clone().into_vec(), vec![7]);
        assert_eq!(found.into_one(), Some(7));
    }

    #[test]
    fn test_many_keeps_order() {
        let found = Found::Many(vec![3, 1, 2]);
        assert_eq!(found.len(), 3);
        assert_eq!((&found).into_iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(found.clone().into_one(), Some(3));
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_many() {
        let found: Found<u8> = Found::Many(Vec::new());
        assert!(found.is_empty());
        assert_eq!(found.into_one(), None);
    }
}
