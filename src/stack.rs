use core::fmt;

use crate::dynamic_array::DynamicArray;

/// A last-in, first-out stack of `i32`.
///
/// `pop` reads and zeroes the top slot in `O(1)`, then gives back half a
/// step of capacity if more than a full step is unused.
///
/// # Examples
///
/// ```
/// use stackqueue::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stack {
    array: DynamicArray,
}

impl Stack {
    /// Creates an empty `Stack` with the default step of 10.
    #[inline]
    pub fn new() -> Stack {
        Stack { array: DynamicArray::new() }
    }

    /// Creates an empty `Stack` resizing by the magnitude of `step`.
    #[inline]
    pub fn with_step(step: isize) -> Stack {
        Stack { array: DynamicArray::with_step(step) }
    }

    /// Pushes `value` on top of the stack.
    #[inline]
    pub fn push(&mut self, value: i32) {
        self.array.push(value);
    }

    /// Removes the top element and returns it, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<i32> {
        if self.array.is_empty() {
            return None;
        }
        self.array.decrement();
        let top = self.array.count();
        let value = self.array.get_at(top);
        self.array.set_at(top, 0);
        self.array.shrink_if_slack();
        Some(value)
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<i32> {
        self.array.as_slice().last().cloned()
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

    /// Returns `true` if the stack holds no elements.
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

impl Extend<i32> for Stack {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        self.array.extend(iter);
    }
}

/// Lists the elements bottom to top.
impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.array, f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn pops_in_reverse() {
        let mut stack = Stack::new();
        stack.extend(0..25);
        for x in (0..25).rev() {
            assert_eq!(stack.peek(), Some(x));
            assert_eq!(stack.pop(), Some(x));
        }
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.count(), 0);
    }

    #[test]
    fn pop_zeroes_vacated_top() {
        let mut stack = Stack::new();
        stack.extend(vec![7, 8, 9]);
        assert_eq!(stack.pop(), Some(9));
        assert_eq!(stack.array.buffer_as_slice()[..4], [7, 8, 0, 0]);
    }

    #[test]
    fn shrinks_while_draining() {
        let mut stack = Stack::new();
        stack.extend(0..30);
        assert_eq!(stack.capacity(), 30);

        // count 19 is the first with more than a step of slack
        for _ in 0..11 {
            stack.pop();
        }
        assert_eq!(stack.count(), 19);
        assert_eq!(stack.capacity(), 25);

        while stack.pop().is_some() {
            assert!(stack.capacity() >= stack.count());
        }
        assert_eq!(stack.capacity(), 10);
    }

    #[test]
    fn clear_then_reuse() {
        let mut stack = Stack::with_step(-3);
        stack.extend(0..14);
        stack.clear();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.capacity(), 16);
        stack.push(4);
        assert_eq!(format!("{:?}", stack), "[4]");
    }
}
