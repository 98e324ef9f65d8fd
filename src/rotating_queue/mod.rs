use core::fmt;

use crate::dynamic_array::DynamicArray;
use crate::utils::*;

mod internal;

/// A first-in, first-out queue of `i32` over a circular buffer.
///
/// The front of the queue lives at a movable `bottom` slot; the element at
/// queue position `i` is stored at slot `(bottom + i) % capacity()`. Popping
/// advances `bottom` instead of shifting, so both ends are `O(1)` apart from
/// resizes.
///
/// Before the buffer is grown or shrunk the contents are rotated back to
/// slot 0, so a resize never reorders or drops elements.
///
/// # Examples
///
/// ```
/// use stackqueue::RotatingQueue;
///
/// let mut queue = RotatingQueue::new();
/// queue.extend(0..10);
/// for x in 0..5 {
///     assert_eq!(queue.pop(), Some(x));
/// }
///
/// // reuses the five freed slots at the start of the buffer
/// queue.extend(10..15);
/// assert_eq!(queue.capacity(), 10);
///
/// for x in 5..15 {
///     assert_eq!(queue.pop(), Some(x));
/// }
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone, Default)]
pub struct RotatingQueue {
    array: DynamicArray,
    bottom: usize,
}

impl RotatingQueue {
    /// Creates an empty `RotatingQueue` with the default step of 10.
    #[inline]
    pub fn new() -> RotatingQueue {
        RotatingQueue::with_step(crate::DEFAULT_STEP as isize)
    }

    /// Creates an empty `RotatingQueue` resizing by the magnitude of `step`.
    #[inline]
    pub fn with_step(step: isize) -> RotatingQueue {
        RotatingQueue {
            array: DynamicArray::with_step(step),
            bottom: 0,
        }
    }

    /// Appends `value` right after the last element, wrapping to the start of
    /// the buffer if needed.
    pub fn push(&mut self, value: i32) {
        if self.array.is_full() {
            self.normalize();
            self.array.grow_if_full();
        }
        let index = physical(self.bottom, self.array.count(), self.array.capacity());
        self.array.set_at(index, value);
        self.array.increment();
    }

    /// Removes the front element and returns it, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<i32> {
        if self.array.is_empty() {
            return None;
        }
        let value = self.array.get_at(self.bottom);
        self.array.set_at(self.bottom, 0);
        self.array.decrement();
        self.bottom = wrap_add(self.bottom, 1, self.array.capacity());

        if self.array.has_slack() {
            self.normalize();
            self.array.shrink_if_slack();
        }
        Some(value)
    }

    /// Returns the front element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<i32> {
        if self.array.is_empty() {
            None
        } else {
            Some(self.array.get_at(self.bottom))
        }
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

    /// Removes every element, keeping the capacity. The next push lands in
    /// slot 0.
    pub fn clear(&mut self) {
        self.array.clear();
        self.bottom = 0;
    }
}

impl Extend<i32> for RotatingQueue {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl PartialEq for RotatingQueue {
    fn eq(&self, other: &RotatingQueue) -> bool {
        if self.count() != other.count() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        sa.iter().chain(sb).eq(oa.iter().chain(ob))
    }
}

impl Eq for RotatingQueue {}

/// Lists the elements front to back.
impl fmt::Debug for RotatingQueue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (front, back) = self.as_slices();
        f.debug_list().entries(front).entries(back).finish()
    }
}
