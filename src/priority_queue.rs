//! A keyed priority queue whose priorities only ever decrease.
use crate::{GraphError, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::{cmp::Reverse, hash::Hash};

/// A map from keys to priorities, popping the smallest priority first.
///
/// Each key appears at most once.
/// [PriorityQueue::update] inserts a missing key or lowers its priority,
/// but never raises it.
///
/// ```rust
/// use graphtrek::priority_queue::PriorityQueue;
///
/// let mut q = PriorityQueue::new();
/// q.update("a", 5);
/// q.update("b", 2);
/// assert_eq!(q.pop_smallest().unwrap(), ("b", 2));
/// q.update("a", 100);
/// q.update("c", 110);
/// q.update("c", 8);
/// assert_eq!(q.pop_smallest().unwrap(), ("a", 5));
/// assert_eq!(q.pop_smallest().unwrap(), ("c", 8));
/// assert!(q.is_empty());
/// assert!(q.pop_smallest().is_err());
/// ```
pub struct PriorityQueue<K, P>
where
    K: Hash + Eq,
    P: Ord,
{
    queue: KeyedPriorityQueue<K, Reverse<P>, RandomState>,
}

impl<K, P> Default for PriorityQueue<K, P>
where
    K: Hash + Eq,
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> PriorityQueue<K, P>
where
    K: Hash + Eq,
    P: Ord,
{
    pub fn new() -> Self {
        Self {
            queue: KeyedPriorityQueue::with_capacity_and_hasher(0, RandomState::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// The stored priority of `key`.
    pub fn get(&self, key: &K) -> Option<&P> {
        self.queue.get_priority(key).map(|p| &p.0)
    }

    /// Inserts `key` if it is absent, or lowers its priority to `priority`.
    ///
    /// It does nothing if the stored priority is already no greater than `priority`.
    pub fn update(&mut self, key: K, priority: P) {
        let settled = matches!(
            self.queue.get_priority(&key),
            Some(Reverse(stored)) if *stored <= priority
        );
        if !settled {
            self.queue.push(key, Reverse(priority));
        }
    }

    pub fn peek_smallest(&self) -> Option<(&K, &P)> {
        self.queue.peek().map(|(k, p)| (k, &p.0))
    }

    /// Removes and returns the key with the smallest priority, if any.
    ///
    /// Among equal priorities, which key wins is unspecified.
    pub fn try_pop_smallest(&mut self) -> Option<(K, P)> {
        self.queue.pop().map(|(k, p)| (k, p.0))
    }

    /// Like [PriorityQueue::try_pop_smallest], but an empty queue is an error.
    pub fn pop_smallest(&mut self) -> Result<(K, P)> {
        self.try_pop_smallest().ok_or(GraphError::EmptyCollection)
    }
}

impl<K, P> Extend<(K, P)> for PriorityQueue<K, P>
where
    K: Hash + Eq,
    P: Ord,
{
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        for (k, p) in iter {
            self.update(k, p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::collections::HashMap;

    #[test]
    fn empty() {
        let mut q: PriorityQueue<&str, u32> = PriorityQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.peek_smallest().is_none());
        assert!(matches!(q.pop_smallest(), Err(GraphError::EmptyCollection)));
    }

    #[test]
    fn update_never_raises() {
        let mut q = PriorityQueue::new();
        q.update("thing", 5);
        assert!(!q.is_empty());
        q.update("thing", 7);
        assert_eq!(q.get(&"thing"), Some(&5));
        q.update("thing", 5);
        assert_eq!(q.get(&"thing"), Some(&5));
        q.update("thing", 1);
        assert_eq!(q.get(&"thing"), Some(&1));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn pop_in_order() {
        let mut q = PriorityQueue::new();
        q.update("thing", 5);
        q.update("another thing", 2);
        assert_eq!(q.pop_smallest().unwrap(), ("another thing", 2));
        q.update("thing", 100);
        q.update("something else", 110);
        q.update("something else", 8);
        assert_eq!(q.peek_smallest(), Some((&"thing", &5)));
        assert_eq!(q.pop_smallest().unwrap(), ("thing", 5));
        assert_eq!(q.pop_smallest().unwrap(), ("something else", 8));
        assert!(q.is_empty());
    }

    #[quickcheck]
    fn pops_minimum_of_lowest_updates(updates: Vec<(u8, u16)>) {
        let mut q = PriorityQueue::new();
        q.extend(updates.iter().copied());
        let mut oracle: HashMap<u8, u16> = HashMap::new();
        for (k, p) in updates {
            let e = oracle.entry(k).or_insert(p);
            *e = (*e).min(p);
        }
        assert_eq!(q.len(), oracle.len());
        let mut last = None;
        while let Some((k, p)) = q.try_pop_smallest() {
            assert_eq!(oracle.remove(&k), Some(p));
            if let Some(last) = last {
                assert!(last <= p);
            }
            last = Some(p);
        }
        assert!(oracle.is_empty());
    }
}
