use crate::error::{Error, Result};
use std::alloc::{alloc, dealloc, Layout};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;

/// RawStorage owns an uninitialized memory block which is able
/// to hold `capacity` values of type T.
///
/// It never constructs or drops any value. The owner must drop
/// all live values before the storage is released.
///
/// The block exists if and only if capacity is greater than 0.
pub struct RawStorage<T> {
    block: Option<NonNull<T>>,
    cap: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawStorage<T> {}
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> Drop for RawStorage<T> {
    #[inline]
    fn drop(&mut self) {
        if let Some(block) = self.block.take() {
            let layout = Self::layout(self.cap);
            if layout.size() != 0 {
                // # SAFETY
                //
                // The block was allocated in `with_capacity` with identical layout.
                unsafe { dealloc(block.as_ptr() as *mut u8, layout) }
            }
        }
    }
}

impl<T> Default for RawStorage<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RawStorage<T> {
    /// Create an empty storage without any allocation.
    #[inline]
    pub const fn new() -> Self {
        RawStorage {
            block: None,
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Create a storage with exactly given capacity.
    ///
    /// Zero capacity results in empty storage.
    /// Zero-sized type never goes to the allocator.
    #[inline]
    pub fn with_capacity(cap: usize) -> Result<Self> {
        if cap == 0 {
            return Ok(Self::new());
        }
        let layout = Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow(cap))?;
        if layout.size() == 0 {
            return Ok(RawStorage {
                block: Some(NonNull::dangling()),
                cap,
                _marker: PhantomData,
            });
        }
        // # SAFETY
        //
        // Layout size is non-zero.
        let ptr = unsafe { alloc(layout) } as *mut T;
        match NonNull::new(ptr) {
            Some(block) => Ok(RawStorage {
                block: Some(block),
                cap,
                _marker: PhantomData,
            }),
            None => {
                log::debug!(
                    "failed to allocate {} bytes for {} elements",
                    layout.size(),
                    cap
                );
                Err(Error::InsufficientMemory {
                    size: layout.size(),
                    align: layout.align(),
                })
            }
        }
    }

    #[inline]
    fn layout(cap: usize) -> Layout {
        // # SAFETY
        //
        // The same layout was successfully computed when the block is allocated.
        unsafe { Layout::from_size_align_unchecked(mem::size_of::<T>() * cap, mem::align_of::<T>()) }
    }

    /// Returns number of values this storage can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns whether a memory block is owned.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }

    /// Returns base pointer of the block.
    /// A dangling but well-aligned pointer is returned if capacity is 0,
    /// so empty slices can always be built upon it.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block.unwrap_or(NonNull::dangling()).as_ptr()
    }

    /// Returns mutable base pointer of the block. Dangling if nothing
    /// is allocated.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block.unwrap_or(NonNull::dangling()).as_ptr()
    }

    /// Returns pointer to the slot at given offset.
    /// The address right after the last slot is allowed.
    #[inline]
    pub fn ptr_at(&mut self, offset: usize) -> *mut T {
        debug_assert!(offset <= self.cap);
        self.as_mut_ptr().wrapping_add(offset)
    }

    /// Returns the uninitialized slot at given index.
    ///
    /// # Safety
    ///
    /// Index must be less than capacity.
    #[inline]
    pub unsafe fn slot(&self, index: usize) -> &MaybeUninit<T> {
        debug_assert!(index < self.cap);
        &*(self.as_ptr().add(index) as *const MaybeUninit<T>)
    }

    /// Returns the mutable uninitialized slot at given index.
    ///
    /// # Safety
    ///
    /// Index must be less than capacity.
    #[inline]
    pub unsafe fn slot_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(index < self.cap);
        &mut *(self.as_mut_ptr().add(index) as *mut MaybeUninit<T>)
    }

    /// Exchange blocks and capacities of two storages.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.block, &mut other.block);
        mem::swap(&mut self.cap, &mut other.cap);
    }

    /// Take the block out and leave this storage empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}
