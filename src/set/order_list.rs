//! Arena-backed circular doubly-linked list recording insertion order.
//!
//! Nodes live in a `Vec` and refer to each other by index. Slot 0 is the
//! sentinel root: `root.next` is the oldest entry and `root.prev` the newest,
//! which removes every head/tail special case from linking and unlinking.
//! Slots freed by [`OrderList::unlink`] are recycled by later pushes, so a
//! handle stays valid exactly as long as its entry is linked.

/// Stable position of an entry inside an [`OrderList`].
pub(super) type Handle = usize;

const ROOT: Handle = 0;

#[derive(Clone)]
struct Node<T> {
    value: Option<T>,
    prev: Handle,
    next: Handle,
}

impl<T> Node<T> {
    const fn sentinel() -> Self {
        Self {
            value: None,
            prev: ROOT,
            next: ROOT,
        }
    }
}

#[derive(Clone)]
pub(super) struct OrderList<T> {
    nodes: Vec<Node<T>>,
    vacant: Vec<Handle>,
    length: usize,
}

impl<T> OrderList<T> {
    pub(super) fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            vacant: Vec::new(),
            length: 0,
        }
    }

    #[inline]
    pub(super) const fn len(&self) -> usize {
        self.length
    }

    /// Links `value` after the current tail and returns its handle.
    pub(super) fn push_back(&mut self, value: T) -> Handle {
        let tail = self.nodes[ROOT].prev;
        let node = Node {
            value: Some(value),
            prev: tail,
            next: ROOT,
        };

        let handle = match self.vacant.pop() {
            Some(handle) => {
                self.nodes[handle] = node;
                handle
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        self.nodes[tail].next = handle;
        self.nodes[ROOT].prev = handle;
        self.length += 1;
        handle
    }

    /// Unlinks the entry at `handle`, joining its neighbours.
    ///
    /// Returns `None` for the root or for a handle that is not linked.
    pub(super) fn unlink(&mut self, handle: Handle) -> Option<T> {
        if handle == ROOT {
            return None;
        }

        let node = self.nodes.get_mut(handle)?;
        let value = node.value.take()?;
        let (prev, next) = (node.prev, node.next);
        node.prev = handle;
        node.next = handle;

        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.vacant.push(handle);
        self.length -= 1;
        Some(value)
    }

    /// Drops every entry and releases the arena, leaving only the root.
    pub(super) fn clear(&mut self) {
        *self = Self::new();
    }

    pub(super) fn first(&self) -> Option<&T> {
        self.nodes[self.nodes[ROOT].next].value.as_ref()
    }

    pub(super) fn last(&self) -> Option<&T> {
        self.nodes[self.nodes[ROOT].prev].value.as_ref()
    }

    /// Iterates from the oldest entry to the newest.
    pub(super) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: ROOT,
            remaining: self.length,
        }
    }

    /// Moves every value out in list order.
    pub(super) fn into_values(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.length);
        let mut cursor = self.nodes[ROOT].next;
        while cursor != ROOT {
            let node = &mut self.nodes[cursor];
            if let Some(value) = node.value.take() {
                values.push(value);
            }
            cursor = node.next;
        }
        values
    }
}

pub(super) struct Iter<'a, T> {
    list: &'a OrderList<T>,
    cursor: Handle,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.list.nodes[self.cursor].next;
        if handle == ROOT {
            return None;
        }
        self.cursor = handle;
        self.remaining = self.remaining.saturating_sub(1);
        self.list.nodes[handle].value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    /// Walks the list in both directions and checks that each traversal
    /// visits every linked node exactly once before returning to the root.
    fn assert_circular<T: Clone + PartialEq + std::fmt::Debug>(list: &OrderList<T>) -> Vec<T> {
        let mut forward = Vec::new();
        let mut cursor = list.nodes[ROOT].next;
        while cursor != ROOT {
            assert!(forward.len() < list.len(), "forward walk does not return to root");
            let node = &list.nodes[cursor];
            assert_eq!(list.nodes[node.next].prev, cursor);
            forward.push(node.value.clone().expect("linked node has a value"));
            cursor = node.next;
        }

        let mut backward = Vec::new();
        let mut cursor = list.nodes[ROOT].prev;
        while cursor != ROOT {
            assert!(backward.len() < list.len(), "backward walk does not return to root");
            let node = &list.nodes[cursor];
            backward.push(node.value.clone().expect("linked node has a value"));
            cursor = node.prev;
        }
        backward.reverse();

        assert_eq!(forward.len(), list.len());
        assert_eq!(forward, backward);
        forward
    }

    #[rstest]
    fn test_empty_list_points_root_at_itself() {
        let list: OrderList<i32> = OrderList::new();
        assert_eq!(list.nodes[ROOT].next, ROOT);
        assert_eq!(list.nodes[ROOT].prev, ROOT);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert_eq!(list.iter().count(), 0);
    }

    #[rstest]
    fn test_push_back_appends_in_order() {
        let mut list = OrderList::new();
        for value in 1..=4 {
            list.push_back(value);
        }
        assert_eq!(assert_circular(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&4));
    }

    #[rstest]
    #[case(0, vec![2, 3])]
    #[case(1, vec![1, 3])]
    #[case(2, vec![1, 2])]
    fn test_unlink_relinks_neighbours(#[case] position: usize, #[case] expected: Vec<i32>) {
        let mut list = OrderList::new();
        let handles: Vec<Handle> = [1, 2, 3].into_iter().map(|value| list.push_back(value)).collect();

        let removed = list.unlink(handles[position]);
        assert!(removed.is_some());
        assert_eq!(assert_circular(&list), expected);
    }

    #[rstest]
    fn test_unlink_twice_is_rejected() {
        let mut list = OrderList::new();
        let handle = list.push_back("a");
        assert_eq!(list.unlink(handle), Some("a"));
        assert_eq!(list.unlink(handle), None);
        assert_eq!(list.unlink(ROOT), None);
        assert_eq!(list.len(), 0);
    }

    #[rstest]
    fn test_vacant_slot_is_reused_at_tail() {
        let mut list = OrderList::new();
        list.push_back(1);
        let second = list.push_back(2);
        list.push_back(3);

        list.unlink(second);
        let reused = list.push_back(2);

        assert_eq!(reused, second);
        assert_eq!(list.nodes.len(), 4);
        assert_eq!(assert_circular(&list), vec![1, 3, 2]);
    }

    #[rstest]
    fn test_clear_resets_sentinel() {
        let mut list = OrderList::new();
        let first = list.push_back(1);
        for value in 2..1_000 {
            list.push_back(value);
        }
        list.unlink(first);
        list.clear();

        assert_eq!(list.len(), 0);
        assert_eq!(list.nodes.len(), 1);
        assert_eq!(list.nodes.capacity(), 1);
        assert_eq!(list.vacant.capacity(), 0);
        assert!(assert_circular(&list).is_empty());

        list.push_back(9);
        assert_eq!(assert_circular(&list), vec![9]);
    }

    #[rstest]
    fn test_into_values_follows_list_order() {
        let mut list = OrderList::new();
        let first = list.push_back('a');
        list.push_back('b');
        list.unlink(first);
        list.push_back('c');
        assert_eq!(list.into_values(), vec!['b', 'c']);
    }

    #[rstest]
    fn test_iter_reports_exact_size() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_links_stay_circular(operations in prop::collection::vec((any::<bool>(), any::<u8>()), 0..200)) {
            let mut list = OrderList::new();
            let mut linked: Vec<(Handle, u8)> = Vec::new();

            for (is_push, value) in operations {
                if is_push || linked.is_empty() {
                    linked.push((list.push_back(value), value));
                } else {
                    let (handle, expected) = linked.remove(usize::from(value) % linked.len());
                    prop_assert_eq!(list.unlink(handle), Some(expected));
                }
                prop_assert_eq!(list.nodes.len(), linked.len() + 1 + list.vacant.len());
            }

            let expected: Vec<u8> = linked.iter().map(|&(_, value)| value).collect();
            prop_assert_eq!(assert_circular(&list), expected);
        }
    }
}
