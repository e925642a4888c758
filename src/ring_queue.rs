use std::fmt;

use tracing::trace;

use crate::AllocationError;

/// A fixed-capacity circular buffer queue.
///
/// The queue owns a contiguous backing buffer of `capacity + 1` slots. The
/// extra slot is a sentinel that never holds live data; it exists so that
/// `front == back` always means "empty" and never "full". `front` is the
/// index of the oldest occupied slot, `back` the index one past the newest,
/// and both wrap modulo the physical length.
///
/// Boundary conditions are saturating, not errors: [`put`] on a full queue
/// silently drops the value, [`get`] on an empty queue returns whatever
/// stale or default value sits in the front slot, and the chunked transfer
/// operations return a short count. Only construction can fail.
///
/// A queue created with capacity 0 is degenerate: it reports both
/// [`is_empty`] and [`is_full`], and every operation on it is a no-op.
///
/// Not safe for concurrent access; callers needing that must wrap every
/// operation in external synchronization.
///
/// [`put`]: Self::put
/// [`get`]: Self::get
/// [`is_empty`]: Self::is_empty
/// [`is_full`]: Self::is_full
#[derive(Clone)]
pub struct RingQueue<T> {
    /// Physical storage, always of length `capacity + 1`.
    buf: Box<[T]>,
    /// Oldest occupied slot. Equal to `back` when empty.
    front: usize,
    /// One past the newest occupied slot; the next put fills it.
    back: usize,
}

impl<T> RingQueue<T>
where
    T: Copy + Default,
{
    /// Creates a new `RingQueue` able to hold `capacity` elements.
    ///
    /// Allocates `capacity + 1` default-initialized slots up front. Returns
    /// an [`AllocationError`] if the storage cannot be obtained; in that case
    /// no partially-constructed queue exists.
    pub fn new(capacity: usize) -> Result<Self, AllocationError> {
        let physical = capacity.checked_add(1).ok_or(AllocationError)?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(physical).map_err(|_| AllocationError)?;
        buf.resize(physical, T::default());

        trace!("allocated ring queue storage for {} slots", physical);

        Ok(Self {
            buf: buf.into_boxed_slice(),
            front: 0,
            back: 0,
        })
    }
}

impl<T> RingQueue<T> {
    /// Returns the number of elements the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len() - 1
    }

    /// Returns the number of elements currently in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        // Occupancy is (back - front) mod physical length.
        (self.back + self.buf.len() - self.front) % self.buf.len()
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// Returns `true` if the queue holds `capacity` elements, i.e. writing
    /// one more element would make `back` collide with `front`.
    ///
    /// The check is wraparound-safe: when `back` sits on the last physical
    /// slot, the "next back" is slot 0 and fullness is `front == 0`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.next_index(self.back) == self.front
    }

    #[inline]
    fn next_index(&self, index: usize) -> usize {
        if index + 1 == self.buf.len() {
            0
        } else {
            index + 1
        }
    }
}

impl<T> RingQueue<T>
where
    T: Copy,
{
    /// Appends `value` at the back of the queue.
    ///
    /// If the queue is full this is a silent no-op and `value` is dropped.
    /// Callers that must not lose elements have to check [`is_full`] first.
    ///
    /// [`is_full`]: Self::is_full
    pub fn put(&mut self, value: T) {
        if self.is_full() {
            return;
        }

        self.buf[self.back] = value;
        self.back = self.next_index(self.back);
    }

    /// Removes and returns the oldest element.
    ///
    /// If the queue is empty this returns the stale (or default) contents of
    /// the front slot WITHOUT removing anything; `front` does not advance.
    /// There is no in-band way to tell that value apart from real data, so
    /// callers must always check [`is_empty`] before calling `get`.
    ///
    /// [`is_empty`]: Self::is_empty
    pub fn get(&mut self) -> T {
        let value = self.buf[self.front];
        if self.front == self.back {
            return value;
        }

        self.front = self.next_index(self.front);
        value
    }

    /// Appends as many elements from `src` as the queue has room for and
    /// returns the number transferred, exactly
    /// `min(src.len(), free slots at call time)`.
    ///
    /// A transfer that straddles the physical end of the buffer is split
    /// into at most two contiguous block copies.
    pub fn put_chunk(&mut self, src: &[T]) -> usize {
        let mut copied = 0;

        while copied < src.len() && !self.is_full() {
            // Longest contiguous free run starting at `back`. When the free
            // region does not wrap it ends either at the physical end or one
            // slot short of it if `front` is at slot 0 (the slot before
            // `front` is the sentinel and must stay free).
            let run = if self.back >= self.front {
                let mut run = self.buf.len() - self.back;
                if self.front == 0 {
                    run -= 1;
                }
                run
            } else {
                self.front - self.back - 1
            };

            let n = (src.len() - copied).min(run);
            self.buf[self.back..self.back + n].copy_from_slice(&src[copied..copied + n]);

            self.back = (self.back + n) % self.buf.len();
            copied += n;
        }

        copied
    }

    /// Removes up to `dst.len()` elements into `dst` in FIFO order and
    /// returns the number transferred, exactly
    /// `min(dst.len(), elements stored at call time)`.
    ///
    /// Like [`put_chunk`], a transfer across the physical end is split into
    /// at most two contiguous block copies.
    ///
    /// [`put_chunk`]: Self::put_chunk
    pub fn get_chunk(&mut self, dst: &mut [T]) -> usize {
        let mut copied = 0;

        while copied < dst.len() && !self.is_empty() {
            // Longest contiguous occupied run starting at `front`.
            let run = if self.front <= self.back {
                self.back - self.front
            } else {
                self.buf.len() - self.front
            };

            let n = (dst.len() - copied).min(run);
            dst[copied..copied + n].copy_from_slice(&self.buf[self.front..self.front + n]);

            self.front = (self.front + n) % self.buf.len();
            copied += n;
        }

        copied
    }
}

impl<T> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("front", &self.front)
            .field("back", &self.back)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
