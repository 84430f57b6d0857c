//! Merge two sorted singly-linked lists.
//!
//! Nodes are owned through `Option<Box<_>>` links. The merge takes both lists
//! by value and relinks their nodes into one list; no node is copied and the
//! inputs are gone once the call returns.

use std::fmt;

use crate::traits::Drill;

/// Owning link to the next node, `None` at the end of a list.
pub type Link<T> = Option<Box<ListNode<T>>>;

/// Singly-linked list node.
pub struct ListNode<T> {
    pub val: T,
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    pub fn new(val: T) -> Self {
        Self { val, next: None }
    }

    /// Iterate over the values of this node and every node after it.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: Some(self) }
    }
}

// Unlink iteratively so long lists do not recurse once per node on drop.
impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut cur = self.next.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

// Equality and formatting walk the list with `iter` for the same reason.
impl<T: PartialEq> PartialEq for ListNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ListNode<T> {}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for ListNode<T> {
    fn clone(&self) -> Self {
        let head = list_from(self.iter().cloned());
        match head {
            Some(mut node) => Self {
                val: self.val.clone(),
                next: node.next.take(),
            },
            None => Self::new(self.val.clone()),
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}

/// Build a list holding `items` in order.
pub fn list_from<T, I>(items: I) -> Link<T>
where
    I: IntoIterator<Item = T>,
{
    let items: Vec<T> = items.into_iter().collect();
    items.into_iter().rev().fold(None, |next, val| {
        Some(Box::new(ListNode { val, next }))
    })
}

/// Collect the values of a list into a `Vec`.
pub fn list_to_vec<T: Clone>(list: &Link<T>) -> Vec<T> {
    list.as_deref()
        .map(|head| head.iter().cloned().collect())
        .unwrap_or_default()
}

/// Merge two non-decreasing lists into one non-decreasing list.
///
/// Ties take the node from `a` first, so the merge is stable. Inputs that are
/// not sorted produce an unspecified (but complete) interleaving.
///
/// ```
/// use leet_drills::problems::merge_lists::{list_from, list_to_vec, merge_two_lists};
///
/// let merged = merge_two_lists(list_from([1, 3, 5]), list_from([2, 4]));
/// assert_eq!(list_to_vec(&merged), vec![1, 2, 3, 4, 5]);
/// ```
pub fn merge_two_lists<T: Ord>(mut a: Link<T>, mut b: Link<T>) -> Link<T> {
    let mut head: Link<T> = None;
    let mut tail = &mut head;

    loop {
        let take_a = match (&a, &b) {
            (Some(x), Some(y)) => x.val <= y.val,
            _ => break,
        };
        let source = if take_a { &mut a } else { &mut b };
        let Some(mut node) = source.take() else {
            break;
        };
        *source = node.next.take();
        tail = &mut tail.insert(node).next;
    }

    // At most one side is left; hang it off the tail as is.
    *tail = a.or(b);
    head
}

/// Drill wrapper: merge two owned lists and report the merged values.
#[derive(Clone, Debug)]
pub struct MergeLists<T> {
    pub a: Link<T>,
    pub b: Link<T>,
}

impl<T: Ord + Clone> MergeLists<T> {
    pub fn new(a: Link<T>, b: Link<T>) -> Self {
        Self { a, b }
    }

    /// Convenience constructor from two sorted slices.
    pub fn from_slices(a: &[T], b: &[T]) -> Self {
        Self::new(list_from(a.iter().cloned()), list_from(b.iter().cloned()))
    }
}

impl<T: Ord + Clone + std::fmt::Debug> Drill for MergeLists<T> {
    type Output = Vec<T>;

    fn name(&self) -> &'static str {
        "merge_two_lists"
    }

    fn input_size(&self) -> usize {
        let len = |l: &Link<T>| l.as_deref().map_or(0, |n| n.iter().count());
        len(&self.a) + len(&self.b)
    }

    fn solve(self) -> Self::Output {
        list_to_vec(&merge_two_lists(self.a, self.b))
    }
}
