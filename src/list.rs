//! Strict persistent cons list
//!
//! [`List`] is the ordered sequence that streams materialize into. It is an
//! immutable singly-linked list: `cons` is O(1) and shares every existing node
//! with the list it extends.
//!
//! ```rust
//! use lazy_stream::List;
//!
//! let list = List::nil().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.reverse().to_vec(), vec![3, 2, 1]);
//! assert_eq!(list.to_string(), "Cons(1, Cons(2, Cons(3, Nil)))");
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

struct ListNode<T> {
    element: T,
    next: Option<Rc<ListNode<T>>>,
}

/// Immutable singly-linked list with structural sharing
pub struct List<T> {
    head: Option<Rc<ListNode<T>>>,
    len: usize,
}

impl<T> List<T> {
    /// The empty list
    pub fn nil() -> Self {
        Self { head: None, len: 0 }
    }

    /// Prepend an element, sharing `self` as the tail
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(ListNode {
                element,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Everything but the first element; the tail of `nil` is `nil`
    pub fn tail(&self) -> Self {
        match &self.head {
            Some(node) => Self {
                head: node.next.clone(),
                len: self.len - 1,
            },
            None => Self::nil(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
        }
    }

    /// A new list with the elements in the opposite order
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        self.iter()
            .fold(Self::nil(), |acc, element| acc.cons(element.clone()))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

// Unlink iteratively so long lists do not overflow the stack on drop.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(Self::nil(), |acc, element| acc.cons(element))
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self.iter() {
            write!(f, "Cons({}, ", element)?;
        }
        write!(f, "Nil")?;
        for _ in 0..self.len {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Borrowing iterator over a [`List`]
pub struct Iter<'a, T> {
    current: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(&node.element)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
