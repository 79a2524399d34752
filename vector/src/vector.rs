use log::*;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Index;

use crate::{
    constants::{GROWTH_FACTOR, INITIAL_CAPACITY, NOT_FOUND},
    error::{Result, VectorError},
};

/// Growable array of `i32` with a doubling growth policy.
///
/// The backing store always holds `capacity()` initialized slots, only the
/// first `size()` of them belong to the sequence. Capacity starts at
/// [`INITIAL_CAPACITY`] and never shrinks.
///
/// Contract violations (out of bounds reads, erasing past the end, popping an
/// empty array) are fatal: they are logged and the calling thread panics. Every
/// fatal operation has a `try_*` counterpart returning a [`VectorError`]
/// instead, which leaves the array untouched on error.
pub struct DynamicArray {
    storage: Vec<i32>,
    len: usize,
}

impl DynamicArray {
    /// Allocates the initial backing store.
    pub fn new() -> Result<Self> {
        let mut storage = Vec::new();
        allocate(&mut storage, INITIAL_CAPACITY)?;
        trace!("Created array with capacity {}", INITIAL_CAPACITY);
        Ok(DynamicArray { storage, len: 0 })
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`, panics if `index >= size()`.
    pub fn at(&self, index: usize) -> i32 {
        self.try_at(index).unwrap_or_else(|err| fatal(err))
    }

    pub fn try_at(&self, index: usize) -> Result<i32> {
        self.check_index(index)?;
        Ok(self.storage[index])
    }

    /// Writes `value` at `index`.
    ///
    /// Writing past the end extends the array: every slot between the old end
    /// and `index` becomes `0`. The array never shrinks through `set`.
    pub fn set(&mut self, index: usize, value: i32) {
        if let Err(err) = self.try_set(index, value) {
            fatal(err);
        }
    }

    pub fn try_set(&mut self, index: usize, value: i32) -> Result<()> {
        if index >= self.len {
            let required = index
                .checked_add(1)
                .ok_or(VectorError::CapacityOverflow {
                    capacity: self.capacity(),
                })?;
            self.reserve_for(required)?;

            if index > self.len {
                debug!(
                    "Back-filling {} zeros between {} and {}",
                    index - self.len,
                    self.len,
                    index
                );
            }
            // Slots past the end may hold stale values left by pop_back or erase
            self.storage[self.len..index].fill(0);
            self.len = required;
        }

        self.storage[index] = value;
        Ok(())
    }

    /// Appends `value`, doubling the capacity first if the array is full.
    pub fn push_back(&mut self, value: i32) {
        if let Err(err) = self.try_push_back(value) {
            fatal(err);
        }
    }

    pub fn try_push_back(&mut self, value: i32) -> Result<()> {
        if self.len >= self.capacity() {
            let required = self.len + 1;
            self.reserve_for(required)?;
        }

        self.storage[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Same as `set(0, value)`.
    ///
    /// On an empty array this appends `value`. On a non-empty array it
    /// overwrites the first element, nothing is shifted.
    pub fn prepend(&mut self, value: i32) {
        self.set(0, value);
    }

    /// Removes and returns the last element, panics if the array is empty.
    pub fn pop_back(&mut self) -> i32 {
        self.try_pop_back().unwrap_or_else(|err| fatal(err))
    }

    pub fn try_pop_back(&mut self) -> Result<i32> {
        if self.len == 0 {
            return Err(VectorError::Empty);
        }

        self.len -= 1;
        Ok(self.storage[self.len])
    }

    /// Removes the element at `index` and shifts the tail left by one.
    pub fn erase(&mut self, index: usize) {
        if let Err(err) = self.try_erase(index) {
            fatal(err);
        }
    }

    pub fn try_erase(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.storage.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(())
    }

    /// Erases the first occurrence of `value`, if any.
    pub fn remove(&mut self, value: i32) {
        if let Some(index) = self.find(value) {
            self.erase(index);
        }
    }

    /// Index of the first element equal to `value`.
    pub fn find(&self, value: i32) -> Option<usize> {
        self.elements().iter().position(|&element| element == value)
    }

    /// Like [`find`](Self::find) but reports absence as [`NOT_FOUND`].
    pub fn find_index(&self, value: i32) -> isize {
        self.find(value)
            .map(|index| index as isize)
            .unwrap_or(NOT_FOUND)
    }

    /// Frees the backing store. Dropping the array does the same.
    pub fn release(self) {
        trace!(
            "Releasing array of size {} and capacity {}",
            self.len,
            self.capacity()
        );
    }

    fn elements(&self) -> &[i32] {
        &self.storage[..self.len]
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(VectorError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Grows the store until it can hold `required` elements.
    ///
    /// The new capacity is computed up front and allocated in one step, so a
    /// failure leaves the array as it was.
    fn reserve_for(&mut self, required: usize) -> Result<()> {
        let current = self.capacity();
        if required <= current {
            return Ok(());
        }

        let mut capacity = current;
        while capacity < required {
            capacity = capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(VectorError::CapacityOverflow { capacity: current })?;
        }

        allocate(&mut self.storage, capacity)?;
        trace!("Grew array capacity from {} to {}", current, capacity);
        Ok(())
    }
}

fn allocate(storage: &mut Vec<i32>, capacity: usize) -> Result<()> {
    storage
        .try_reserve_exact(capacity - storage.len())
        .map_err(|_| VectorError::AllocationFailed { capacity })?;
    storage.resize(capacity, 0);
    Ok(())
}

fn fatal(err: VectorError) -> ! {
    error!("{}", err);
    panic!("{}", err);
}

impl Index<usize> for DynamicArray {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        if let Err(err) = self.check_index(index) {
            fatal(err);
        }
        &self.storage[index]
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.elements() == other.elements()
    }
}

impl Eq for DynamicArray {}

impl Display for DynamicArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self.elements()))
    }
}

impl Debug for DynamicArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.elements())
            .finish()
    }
}
