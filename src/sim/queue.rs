//! Fixed-capacity FIFO backed by a ring buffer

/// Ring buffer that evicts its oldest element when pushed past capacity
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Vec<Option<T>>,
    /// Index of the oldest element
    head: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue. A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    /// Append to the tail, returning the evicted head if the queue was full
    pub fn push_back(&mut self, item: T) -> Option<T> {
        let evicted = if self.is_full() { self.pop_front() } else { None };
        let tail = self.slot(self.len);
        self.slots[tail] = Some(item);
        self.len += 1;
        evicted
    }

    /// Remove and return the oldest element
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = self.slot(1);
        self.len -= 1;
        item
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.head].as_ref()
        }
    }

    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.slot(self.len - 1)].as_ref()
        }
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.head = 0;
    }

    /// Elements from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.slots[self.slot(i)].as_ref())
    }

    /// Mutable elements from oldest to newest
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        let (newer, older) = self.slots.split_at_mut(self.head);
        older
            .iter_mut()
            .chain(newer.iter_mut())
            .take(self.len)
            .filter_map(Option::as_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut q = BoundedQueue::with_capacity(3);
        assert!(q.is_empty());
        assert_eq!(q.push_back(1), None);
        assert_eq!(q.push_back(2), None);
        assert_eq!(q.push_back(3), None);
        assert!(q.is_full());
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_push_past_capacity_evicts_oldest() {
        let mut q = BoundedQueue::with_capacity(3);
        for i in 0..3 {
            q.push_back(i);
        }
        assert_eq!(q.push_back(3), Some(0));
        assert_eq!(q.push_back(4), Some(1));
        assert_eq!(q.len(), 3);
        assert_eq!(q.front(), Some(&2));
        assert_eq!(q.back(), Some(&4));
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_pop_front_order() {
        let mut q = BoundedQueue::with_capacity(4);
        for i in 0..6 {
            q.push_back(i);
        }
        assert_eq!(q.pop_front(), Some(2));
        assert_eq!(q.pop_front(), Some(3));
        q.push_back(6);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![4, 5, 6]);
        q.clear();
        assert_eq!(q.pop_front(), None);
        assert_eq!(q.front(), None);
        assert_eq!(q.back(), None);
    }

    #[test]
    fn test_iter_mut_after_wraparound() {
        let mut q = BoundedQueue::with_capacity(3);
        for i in 0..5 {
            q.push_back(i);
        }
        for v in q.iter_mut() {
            *v *= 10;
        }
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![20, 30, 40]);
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let mut q = BoundedQueue::with_capacity(0);
        assert_eq!(q.capacity(), 1);
        q.push_back('a');
        assert_eq!(q.push_back('b'), Some('a'));
        assert_eq!(q.len(), 1);
    }
}
