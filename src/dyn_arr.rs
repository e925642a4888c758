use tracing::trace;

use crate::AllocationError;

/// Initial capacity allocated by [`DynArr::new`].
const DEFAULT_CAPACITY: usize = 8;

/// A growable array with fallible allocation and explicit capacity control.
///
/// Unlike `Vec`, every operation that may allocate reports failure as an
/// [`AllocationError`] instead of aborting, and capacity changes are under
/// caller control via [`set_capacity`]. Shrinking the capacity below the
/// current length truncates the stored elements.
///
/// [`set_capacity`]: Self::set_capacity
#[derive(Clone, Debug)]
pub struct DynArr<T> {
    buf: Vec<T>,
}

impl<T> DynArr<T> {
    /// Creates a new `DynArr` with a small default capacity preallocated.
    pub fn new() -> Result<Self, AllocationError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new `DynArr` preallocated with the specified `capacity`.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity).map_err(|_| AllocationError)?;
        Ok(Self { buf })
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of elements the array can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Changes the capacity of the array.
    ///
    /// Growing reserves storage for exactly `new_capacity` elements.
    /// Shrinking below the current length truncates the array; the excess
    /// elements are lost.
    pub fn set_capacity(&mut self, new_capacity: usize) -> Result<(), AllocationError> {
        if new_capacity < self.buf.len() {
            self.buf.truncate(new_capacity);
        }

        if new_capacity > self.buf.capacity() {
            let additional = new_capacity - self.buf.len();
            self.buf
                .try_reserve_exact(additional)
                .map_err(|_| AllocationError)?;
        } else {
            self.buf.shrink_to(new_capacity);
        }

        Ok(())
    }

    /// Appends `value` at the back of the array, doubling the capacity if it
    /// is full.
    pub fn push(&mut self, value: T) -> Result<(), AllocationError> {
        if self.buf.len() == self.buf.capacity() {
            let new_capacity = (self.buf.capacity() * 2).max(DEFAULT_CAPACITY);
            trace!("growing array storage to {} slots", new_capacity);

            let additional = new_capacity - self.buf.len();
            self.buf
                .try_reserve_exact(additional)
                .map_err(|_| AllocationError)?;
        }

        self.buf.push(value);
        Ok(())
    }

    /// Returns a reference to the element at `index`, or `None` if `index`
    /// is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// `index` is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// Overwrites the element at `index`, returning the value back if
    /// `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), T> {
        match self.buf.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(value),
        }
    }

    /// Returns a slice of all elements in the array.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Returns a mutable slice of all elements in the array.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }
}

impl<T> DynArr<T>
where
    T: Copy,
{
    /// Appends all elements from `src` at the back of the array, growing the
    /// storage as needed.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), AllocationError> {
        self.buf
            .try_reserve(src.len())
            .map_err(|_| AllocationError)?;
        self.buf.extend_from_slice(src);
        Ok(())
    }
}
