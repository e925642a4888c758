//! Small generic container primitives.
//!
//! - [`RingQueue`]: a fixed-capacity circular buffer queue with single and
//!   chunked (bulk) put/get operations.
//! - [`DynArr`]: a growable array with fallible allocation and explicit
//!   capacity control.
//!
//! Both containers are single-threaded and non-blocking: no operation
//! suspends or waits, and none of them is safe for concurrent access without
//! external synchronization.

pub mod dyn_arr;
pub mod ring_queue;

use thiserror::Error;

pub use dyn_arr::DynArr;
pub use ring_queue::RingQueue;

/// Backing storage could not be allocated.
///
/// This is the only true failure mode in this crate; it can only occur while
/// constructing or growing a container. On failure no partially-built
/// container is returned and existing contents are left untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("failed to allocate backing storage")]
pub struct AllocationError;
