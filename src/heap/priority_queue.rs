use super::Heap;

use std::fmt;


/// Queue facade over `Heap`
/// Only exposes enqueue / dequeue of the highest priority element,
/// callers never see arbitrary-index removal
pub struct PriorityQueue<T, F> {
    heap: Heap<T, F>,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{

    pub fn new(sort: F) -> Self {
        Self { heap: Heap::new(sort) }
    }

    pub fn from_vec(elements: Vec<T>, sort: F) -> Self {
        Self { heap: Heap::from_vec(elements, sort) }
    }

    /// Always accepted
    pub fn enqueue(&mut self, element: T) -> bool {
        self.heap.insert(element);
        true
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.remove()
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_follows_comparator() {
        let mut queue = PriorityQueue::new(|a: &u32, b: &u32| a < b);
        assert!(queue.enqueue(10));
        assert!(queue.enqueue(3));
        assert!(queue.enqueue(7));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&3));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), Some(7));
        assert_eq!(queue.dequeue(), Some(10));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_matches_heap_extraction_order() {
        let values = vec![5, 1, 9, 3, 3, 8, 0];
        let sort = |a: &i32, b: &i32| a > b;

        let mut heap = Heap::new(sort);
        heap.insert_all(values.iter().copied());
        let mut queue = PriorityQueue::from_vec(values, sort);

        while let Some(expected) = heap.remove() {
            assert_eq!(queue.dequeue(), Some(expected));
        }
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_ties_are_all_returned() {
        #[derive(Debug, PartialEq)]
        struct Job { priority: u8, name: &'static str }

        let mut queue = PriorityQueue::new(|a: &Job, b: &Job| a.priority > b.priority);
        queue.enqueue(Job { priority: 1, name: "low" });
        queue.enqueue(Job { priority: 5, name: "first" });
        queue.enqueue(Job { priority: 5, name: "second" });

        let top: Vec<_> = (0..2).filter_map(|_| queue.dequeue()).map(|job| job.priority).collect();
        assert_eq!(top, vec![5, 5]);
        assert_eq!(queue.dequeue().map(|job| job.name), Some("low"));
    }
}
