use advec_alloc::RawStorage;
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

/// IntoIter moves values out of a vector.
/// Values not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    data: RawStorage<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(data: RawStorage<T>, len: usize) -> Self {
        IntoIter {
            data,
            start: 0,
            end: len,
        }
    }

    /// Returns values not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // # SAFETY
        //
        // Slots in range [start, end) are always initialized.
        unsafe {
            slice::from_raw_parts(self.data.as_ptr().add(self.start), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let value = unsafe { self.data.ptr_at(self.start).read() };
        self.start += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.start;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        Some(unsafe { self.data.ptr_at(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    #[inline]
    fn drop(&mut self) {
        let remaining =
            ptr::slice_from_raw_parts_mut(self.data.ptr_at(self.start), self.end - self.start);
        self.start = self.end;
        // # SAFETY
        //
        // Remaining values are initialized and never yielded.
        unsafe { ptr::drop_in_place(remaining) }
    }
}
