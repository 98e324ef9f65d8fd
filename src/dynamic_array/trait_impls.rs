use core::fmt;

use super::DynamicArray;

impl Default for DynamicArray {
    #[inline]
    fn default() -> DynamicArray {
        DynamicArray::new()
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &DynamicArray) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DynamicArray {}

impl Extend<i32> for DynamicArray {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
