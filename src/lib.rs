//! Integer stacks and queues over a step-resized dynamic array.
//!
//! Three structures share one storage primitive, [`DynamicArray`]:
//!
//! - [`Stack`]: last in, first out. `O(1)` pop from the logical end.
//! - [`Queue`]: first in, first out. The front is always slot 0, so every pop
//!   shifts the rest of the buffer down by one (`O(n)`).
//! - [`RotatingQueue`]: first in, first out over a circular buffer. Pop only
//!   advances the front index.
//!
//! # Capacity
//!
//! Every structure starts with [`INITIAL_CAPACITY`] slots. When a push finds
//! the buffer full it grows by the step given at construction (default
//! [`DEFAULT_STEP`]). After a pop, if more than one full step of slots is
//! unused, the buffer gives back half a step (rounded down). `capacity()` is
//! never smaller than `count()`.
//!
//! # Feature Flags
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd. Without it the crate is `no_std` and needs `alloc`.
//!
//! # Logging
//!
//! Capacity changes are reported at `trace` level through the [`log`] facade.
//! The crate never installs a logger.
//!
//! # Examples
//!
//! ```
//! use stackqueue::{Queue, RotatingQueue, Stack};
//!
//! let mut stack = Stack::new();
//! let mut queue = Queue::new();
//! let mut rotating = RotatingQueue::with_step(-5);
//!
//! for x in 1..4 {
//!     stack.push(x);
//!     queue.push(x);
//!     rotating.push(x);
//! }
//!
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(queue.pop(), Some(1));
//! assert_eq!(rotating.pop(), Some(1));
//! assert_eq!(rotating.step(), 5);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;

mod dynamic_array;
mod queue;
mod rotating_queue;
mod stack;
mod utils;

pub use dynamic_array::{DynamicArray, DEFAULT_STEP, INITIAL_CAPACITY};
pub use queue::Queue;
pub use rotating_queue::RotatingQueue;
pub use stack::Stack;
