//! Array-backed binary heap ordered by a comparator closure.
//!
//! `sort(a, b)` returns `true` when `a` has priority over `b`: `|a, b| a < b`
//! gives a min-heap, `|a, b| a > b` a max-heap. For every index `i` with a
//! child `c` (`2i + 1` or `2i + 2`), `sort(elements[i], elements[c])` holds,
//! or the two are tied.

mod priority_queue;

pub use priority_queue::PriorityQueue;

use std::fmt;


/// Binary heap with a comparator fixed at construction
pub struct Heap<T, F> {
    elements: Vec<T>,
    sort: F,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{

    pub fn new(sort: F) -> Self {
        Self { elements: Vec::new(), sort }
    }

    /// Build a heap from arbitrary elements in O(n)
    pub fn from_vec(elements: Vec<T>, sort: F) -> Self {
        let mut heap = Self { elements, sort };
        for i in (0..heap.elements.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Highest priority element
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Elements in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            self.insert(element);
        }
    }

    /// Extract the root
    pub fn remove(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let root = self.elements.pop();
        self.sift_down(0);
        root
    }

    /// Remove the element stored at `index`
    /// The element moved into the hole may belong above or below it, so both sifts run
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let len = self.elements.len();
        if index >= len {
            return None;
        }
        if index == len - 1 {
            return self.elements.pop();
        }
        self.elements.swap(index, len - 1);
        let removed = self.elements.pop();
        self.sift_down(index);
        self.sift_up(index);
        removed
    }

    /// Swap out the element at `index` for `value`, returning the old element
    /// Out of bounds leaves the heap untouched and drops `value`
    pub fn replace(&mut self, index: usize, value: T) -> Option<T> {
        let removed = self.remove_at(index)?;
        self.insert(value);
        Some(removed)
    }

    /// Move the element at `index` toward the root while it outranks its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.sort)(&self.elements[index], &self.elements[parent]) {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `index` toward the leaves until no child outranks it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut candidate = index;

            if left < len && (self.sort)(&self.elements[left], &self.elements[candidate]) {
                candidate = left;
            }
            if right < len && (self.sort)(&self.elements[right], &self.elements[candidate]) {
                candidate = right;
            }
            if candidate == index {
                return;
            }
            self.elements.swap(index, candidate);
            index = candidate;
        }
    }
}

impl<T, F> Heap<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{

    /// Position of `element`, searching the subtree rooted at `start`
    /// Subtrees whose root is outranked by `element` are pruned
    pub fn index_of(&self, element: &T, start: usize) -> Option<usize> {
        if start >= self.elements.len() {
            return None;
        }
        if (self.sort)(element, &self.elements[start]) {
            return None;
        }
        if *element == self.elements[start] {
            return Some(start);
        }
        self.index_of(element, 2 * start + 1)
            .or_else(|| self.index_of(element, 2 * start + 2))
    }

    /// Remove the first element found equal to `element`
    pub fn remove_element(&mut self, element: &T) -> Option<T> {
        let index = self.index_of(element, 0)?;
        self.remove_at(index)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("elements", &self.elements)
            .finish()
    }
}
