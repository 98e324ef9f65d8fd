use log::trace;

use super::RotatingQueue;

impl RotatingQueue {
    /// Rotates the buffer so the front sits at slot 0.
    pub(crate) fn normalize(&mut self) {
        if self.bottom == 0 {
            return;
        }
        trace!("rotating {} elements to slot 0 from bottom={}",
               self.array.count(),
               self.bottom);
        let bottom = self.bottom;
        self.array.buffer_as_mut_slice().rotate_left(bottom);
        self.bottom = 0;
    }

    /// Returns the contents front to back as at most two slices.
    pub(crate) fn as_slices(&self) -> (&[i32], &[i32]) {
        let buffer = self.array.buffer_as_slice();
        let end = self.bottom + self.array.count();
        if end <= buffer.len() {
            (&buffer[self.bottom..end], &[][..])
        } else {
            let (head, tail) = buffer.split_at(self.bottom);
            (tail, &head[..end - buffer.len()])
        }
    }
}
