use core::fmt;

use crate::dynamic_array::DynamicArray;

/// A first-in, first-out queue of `i32` that keeps its front at slot 0.
///
/// Every `pop` shifts the remaining elements down one slot, so it costs
/// `O(n)`. See [`RotatingQueue`](crate::RotatingQueue) for an `O(1)` pop.
///
/// # Examples
///
/// ```
/// use stackqueue::Queue;
///
/// let mut queue = Queue::new();
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Queue {
    array: DynamicArray,
}

impl Queue {
    /// Creates an empty `Queue` with the default step of 10.
    #[inline]
    pub fn new() -> Queue {
        Queue { array: DynamicArray::new() }
    }

    /// Creates an empty `Queue` resizing by the magnitude of `step`.
    #[inline]
    pub fn with_step(step: isize) -> Queue {
        Queue { array: DynamicArray::with_step(step) }
    }

    /// Appends `value` to the back of the queue.
    #[inline]
    pub fn push(&mut self, value: i32) {
        self.array.push(value);
    }

    /// Removes the front element and returns it, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<i32> {
        if self.array.is_empty() {
            return None;
        }
        self.array.decrement();
        let value = self.array.get_at(0);
        self.array.shift_left();
        self.array.shrink_if_slack();
        Some(value)
    }

    /// Returns the front element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<i32> {
        self.array.as_slice().first().cloned()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.array.count()
    }

    /// Returns the number of physical slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.array.capacity()
    }

    /// Returns the resize step.
    #[inline]
    pub fn step(&self) -> usize {
        self.array.step()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Removes every element, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.array.clear();
    }
}

impl Extend<i32> for Queue {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        self.array.extend(iter);
    }
}

/// Lists the elements front to back.
impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.array, f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn pops_in_order() {
        let mut queue = Queue::new();
        queue.extend(0..25);
        for x in 0..25 {
            assert_eq!(queue.peek(), Some(x));
            assert_eq!(queue.pop(), Some(x));
        }
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.count(), 0);
    }

    #[test]
    fn pop_shifts_and_zeroes_tail() {
        let mut queue = Queue::new();
        queue.extend(1..11);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.array.buffer_as_slice(), &[2, 3, 4, 5, 6, 7, 8, 9, 10, 0]);
        assert_eq!(format!("{:?}", queue), "[2, 3, 4, 5, 6, 7, 8, 9, 10]");
    }

    #[test]
    fn interleaved_push_pop() {
        let mut queue = Queue::with_step(4);
        queue.extend(vec![1, 2, 3]);
        assert_eq!(queue.pop(), Some(1));
        queue.push(4);
        assert_eq!(queue.pop(), Some(2));
        queue.extend(5..20);
        for x in 3..20 {
            assert_eq!(queue.pop(), Some(x));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn shrinks_while_draining() {
        let mut queue = Queue::new();
        queue.extend(0..30);
        for x in 0..11 {
            assert_eq!(queue.pop(), Some(x));
        }
        assert_eq!(queue.capacity(), 25);
        assert_eq!(queue.peek(), Some(11));
    }
}
