use core::cmp;

use log::trace;

use super::DynamicArray;

impl DynamicArray {
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// More than one full step of unused slots.
    #[inline]
    pub(crate) fn has_slack(&self) -> bool {
        self.count + self.step < self.capacity()
    }

    #[inline]
    pub(crate) fn increment(&mut self) {
        debug_assert!(self.count < self.capacity());
        self.count += 1;
    }

    #[inline]
    pub(crate) fn decrement(&mut self) {
        debug_assert!(self.count > 0);
        self.count -= 1;
    }

    /// Reads the physical slot `index`. Panics if `index >= capacity()`.
    #[inline]
    pub(crate) fn get_at(&self, index: usize) -> i32 {
        self.xs[index]
    }

    /// Writes the physical slot `index`. Panics if `index >= capacity()`.
    #[inline]
    pub(crate) fn set_at(&mut self, index: usize, value: i32) {
        self.xs[index] = value;
    }

    #[inline]
    pub(crate) fn buffer_as_slice(&self) -> &[i32] {
        &self.xs
    }

    #[inline]
    pub(crate) fn buffer_as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.xs
    }

    pub(crate) fn grow_if_full(&mut self) {
        if self.is_full() {
            let capacity = self.capacity() + self.step;
            self.resize_to(capacity);
        }
    }

    pub(crate) fn shrink_if_slack(&mut self) {
        if self.has_slack() {
            let capacity = cmp::max(self.capacity() - self.step / 2, self.count);
            self.resize_to(capacity);
        }
    }

    /// Drops physical slot 0, moving `[1, capacity)` down to `[0, capacity - 1)`.
    /// The last slot becomes `0`.
    pub(crate) fn shift_left(&mut self) {
        let last = match self.capacity() {
            0 => return,
            n => n - 1,
        };
        self.xs.copy_within(1.., 0);
        self.xs[last] = 0;
    }

    fn resize_to(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.count,
                      "resize would truncate live data: count={} capacity={}",
                      self.count,
                      capacity);
        if capacity == self.capacity() {
            return;
        }
        trace!("resizing buffer from {} to {} slots (count={}, step={})",
               self.capacity(),
               capacity,
               self.count,
               self.step);
        self.xs.resize(capacity, 0);
    }
}
