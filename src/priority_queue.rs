/// Binary min-heap over owned elements.
///
/// Elements are ordered only through `<`, so any `PartialOrd` type can be stored.
/// The queue owns every element it holds; `delete_min` hands ownership back.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    items: Vec<T>,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the minimum without removing it.
    pub fn find_min(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: PartialOrd> PriorityQueue<T> {
    /// Takes every element out of `slots`, leaving `None` behind, and heapifies them.
    pub fn from_slots(slots: &mut [Option<T>]) -> Self {
        let items = slots.iter_mut().filter_map(Option::take).collect();
        Self::heapified(items)
    }

    /// Inserts an element. Passing `None` is a no-op.
    pub fn insert<I: Into<Option<T>>>(&mut self, item: I) {
        let Some(item) = item.into() else {
            return;
        };
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    pub fn delete_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let minimum = self.items.swap_remove(0);
        self.sift_down(0);
        Some(minimum)
    }

    fn heapified(items: Vec<T>) -> Self {
        let mut queue = PriorityQueue { items };
        queue.heapify();
        queue
    }

    fn heapify(&mut self) {
        for position in (0..self.items.len() / 2).rev() {
            self.sift_down(position);
        }
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.items[position] < self.items[parent] {
                self.items.swap(position, parent);
                position = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * position + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.items[right] < self.items[left] {
                child = right;
            }
            if self.items[child] < self.items[position] {
                self.items.swap(child, position);
                position = child;
            } else {
                break;
            }
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for PriorityQueue<T> {
    fn clone(&self) -> Self {
        PriorityQueue {
            items: self.items.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.items.extend(source.items.iter().cloned());
    }
}

impl<T: PartialOrd> From<Vec<T>> for PriorityQueue<T> {
    fn from(items: Vec<T>) -> Self {
        Self::heapified(items)
    }
}

impl<T: PartialOrd> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::heapified(iter.into_iter().collect())
    }
}

impl<T: PartialOrd> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
