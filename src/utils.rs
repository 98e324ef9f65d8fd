#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Index of the `offset`-th logical element of a ring starting at `bottom`.
#[inline]
pub fn physical(bottom: usize, offset: usize, capacity: usize) -> usize {
    wrap_add(bottom, offset, capacity)
}
