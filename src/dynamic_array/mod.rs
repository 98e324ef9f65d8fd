use alloc::vec;
use alloc::vec::Vec;

mod internal;
mod trait_impls;

/// Capacity of every freshly constructed structure.
pub const INITIAL_CAPACITY: usize = 10;

/// Growth step used by `new()` and when a zero step is requested.
pub const DEFAULT_STEP: usize = 10;

/// `DynamicArray` is a buffer of `i32` that grows and shrinks by a fixed step.
///
/// It tracks a logical `count` inside a physical buffer of `capacity()` slots.
/// Slots at or beyond `count` always hold `0`.
///
/// Pushing into a full array grows the buffer by `step()` slots. Removals made
/// by the structures built on top of it shrink the buffer by `step() / 2`
/// slots whenever more than one full step of slack is left over.
///
/// # Examples
///
/// ```
/// use stackqueue::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// assert_eq!(array.capacity(), 10);
///
/// array.extend(0..11);
/// assert_eq!(array.count(), 11);
/// assert_eq!(array.capacity(), 20);
/// assert_eq!(array.as_slice()[10], 10);
/// ```
#[derive(Clone)]
pub struct DynamicArray {
    xs: Vec<i32>,
    count: usize,
    step: usize,
}

impl DynamicArray {
    /// Creates an empty `DynamicArray` with the default step of 10.
    #[inline]
    pub fn new() -> DynamicArray {
        DynamicArray::with_step(DEFAULT_STEP as isize)
    }

    /// Creates an empty `DynamicArray` resizing by the magnitude of `step`.
    ///
    /// A step of zero cannot grow the buffer, so it is replaced by
    /// [`DEFAULT_STEP`].
    ///
    /// # Examples
    ///
    /// ```
    /// use stackqueue::DynamicArray;
    ///
    /// assert_eq!(DynamicArray::with_step(-4).step(), 4);
    /// assert_eq!(DynamicArray::with_step(0).step(), 10);
    /// ```
    pub fn with_step(step: isize) -> DynamicArray {
        let step = match step.unsigned_abs() {
            0 => DEFAULT_STEP,
            n => n,
        };
        DynamicArray {
            xs: vec![0; INITIAL_CAPACITY],
            count: 0,
            step,
        }
    }

    /// Appends `value` after the last element, growing the buffer if it is full.
    #[inline]
    pub fn push(&mut self, value: i32) {
        self.grow_if_full();
        let index = self.count;
        self.set_at(index, value);
        self.increment();
    }

    /// Returns the number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the number of physical slots in the buffer.
    ///
    /// Always at least `count()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    /// Returns the resize step given at construction.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Zeroes every slot and forgets all elements. The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackqueue::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// array.extend(0..15);
    /// array.clear();
    /// assert_eq!(array.count(), 0);
    /// assert_eq!(array.capacity(), 20);
    /// ```
    pub fn clear(&mut self) {
        for slot in self.xs.iter_mut() {
            *slot = 0;
        }
        self.count = 0;
    }

    /// Returns the elements `[0, count)` in push order.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.xs[..self.count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let array = DynamicArray::new();
        assert_eq!(array.count(), 0);
        assert_eq!(array.capacity(), INITIAL_CAPACITY);
        assert_eq!(array.step(), DEFAULT_STEP);
        assert!(array.is_empty());
        assert_eq!(array.as_slice(), &[] as &[i32]);
    }

    #[test]
    fn step_takes_magnitude() {
        assert_eq!(DynamicArray::with_step(7).step(), 7);
        assert_eq!(DynamicArray::with_step(-7).step(), 7);
        assert_eq!(DynamicArray::with_step(0).step(), DEFAULT_STEP);
        assert_eq!(DynamicArray::with_step(isize::MIN).step(), isize::MIN.unsigned_abs());
    }

    #[test]
    fn grows_by_step_when_full() {
        let mut array = DynamicArray::new();
        for x in 0..10 {
            array.push(x);
        }
        assert_eq!(array.capacity(), 10);

        array.push(10);
        assert_eq!(array.count(), 11);
        assert_eq!(array.capacity(), 20);

        for x in 11..21 {
            array.push(x);
        }
        assert_eq!(array.capacity(), 30);
        assert_eq!(array.as_slice(), &(0..21).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn grows_by_custom_step() {
        let mut array = DynamicArray::with_step(3);
        array.extend(0..11);
        assert_eq!(array.capacity(), 13);
        array.extend(11..14);
        assert_eq!(array.capacity(), 16);
    }

    #[test]
    fn clear_zeroes_buffer() {
        let mut array = DynamicArray::new();
        array.extend(1..13);
        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 20);
        assert!(array.xs.iter().all(|&x| x == 0));

        array.push(5);
        assert_eq!(array.as_slice(), &[5]);
    }
}
