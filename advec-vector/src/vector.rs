use crate::iter::IntoIter;
use advec_alloc::{Error, RawStorage, Result};
use scopeguard::ScopeGuard;
use std::fmt;
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

/// Vector is a contiguous growable array which owns exactly one
/// raw storage and tracks number of live values in it.
///
/// Slots in range [0, len) are initialized, and slots in range
/// [len, capacity) are not.
///
/// Any operation that allocates new storage either succeeds, or
/// leaves the vector untouched if an allocation fails or a value
/// constructor panics. The only exception is [`Vector::assign_from`]
/// when no allocation is required: it overwrites values in place and
/// a panicking `clone_from` leaves the vector partially assigned.
pub struct Vector<T> {
    data: RawStorage<T>,
    len: usize,
}

impl<T> Vector<T> {
    /// Create an empty vector without allocation.
    #[inline]
    pub const fn new() -> Self {
        Vector {
            data: RawStorage::new(),
            len: 0,
        }
    }

    /// Create an empty vector with exactly given capacity.
    #[inline]
    pub fn with_capacity(cap: usize) -> Result<Self> {
        Ok(Vector {
            data: RawStorage::with_capacity(cap)?,
            len: 0,
        })
    }

    /// Create a vector of `len` default values.
    #[inline]
    pub fn with_len(len: usize) -> Result<Self>
    where
        T: Default,
    {
        let mut data = RawStorage::with_capacity(len)?;
        // # SAFETY
        //
        // Storage has exactly `len` uninitialized slots.
        unsafe { construct_n(data.as_mut_ptr(), len, |_| T::default()) };
        Ok(Vector { data, len })
    }

    /// Clone all values into a new vector whose capacity equals
    /// to length of this one.
    #[inline]
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let src = self.as_slice();
        let mut data = RawStorage::with_capacity(src.len())?;
        unsafe { construct_n(data.as_mut_ptr(), src.len(), |i| src[i].clone()) };
        Ok(Vector {
            data,
            len: src.len(),
        })
    }

    /// Copy-assign values of `rhs` to this vector.
    ///
    /// If capacity is insufficient, a full copy of `rhs` is built
    /// and swapped in, so failure leaves this vector unchanged.
    /// Otherwise existing values are overwritten by `clone_from`.
    /// If one of them panics, the vector keeps a consistent length
    /// but values may be a mix of old and new.
    pub fn assign_from(&mut self, rhs: &Self) -> Result<()>
    where
        T: Clone,
    {
        if rhs.len > self.data.capacity() {
            let mut copy = rhs.try_clone()?;
            self.swap_with(&mut copy);
            return Ok(());
        }
        let common = self.len.min(rhs.len);
        for (dst, src) in self.as_mut_slice()[..common]
            .iter_mut()
            .zip(&rhs.as_slice()[..common])
        {
            dst.clone_from(src);
        }
        if self.len > rhs.len {
            self.truncate(rhs.len);
        } else {
            let tail = &rhs.as_slice()[self.len..];
            unsafe { construct_n(self.data.ptr_at(self.len), tail.len(), |i| tail[i].clone()) };
            self.len = rhs.len;
        }
        Ok(())
    }

    /// Take all values out and leave this vector empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchange storages and lengths of two vectors.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
        mem::swap(&mut self.len, &mut other.len);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // # SAFETY
        //
        // Slots in range [0, len) are always initialized.
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // # SAFETY
        //
        // Slots in range [0, len) are always initialized.
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr(), self.len) }
    }

    /// Make sure capacity is at least `new_cap`.
    /// Existing values are moved into new storage of exactly
    /// `new_cap` slots if current one is too small.
    #[inline]
    pub fn reserve(&mut self, new_cap: usize) -> Result<()> {
        if new_cap <= self.data.capacity() {
            return Ok(());
        }
        let mut new_data = self.alloc_storage(new_cap)?;
        unsafe { relocate(self.data.as_ptr(), new_data.as_mut_ptr(), self.len) };
        self.data.swap(&mut new_data);
        Ok(())
    }

    /// Resize the vector, dropping values beyond `new_len` or
    /// filling new slots with default values.
    pub fn resize(&mut self, new_len: usize) -> Result<()>
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.reserve(new_len)?;
        unsafe {
            construct_n(self.data.ptr_at(self.len), new_len - self.len, |_| {
                T::default()
            })
        };
        self.len = new_len;
        Ok(())
    }

    /// Drop values beyond `len`. No-op if `len` is not less than
    /// current length.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(self.data.ptr_at(len), self.len - len);
        // length goes first, so a panicking drop never leads to double drop.
        self.len = len;
        unsafe { ptr::drop_in_place(tail) }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    /// Append a value at the end.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<&mut T> {
        self.emplace_back(move || value)
    }

    /// Append a value constructed by `f` at the end.
    ///
    /// If storage is full, capacity is doubled. The new value is
    /// constructed in the new storage before existing values are
    /// moved, so a panic in `f` changes nothing.
    pub fn emplace_back<F>(&mut self, f: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        if self.len == self.data.capacity() {
            let mut new_data = self.alloc_storage(self.grown_capacity()?)?;
            unsafe {
                new_data.ptr_at(self.len).write(f());
                relocate(self.data.as_ptr(), new_data.as_mut_ptr(), self.len);
            }
            self.data.swap(&mut new_data);
        } else {
            unsafe { self.data.ptr_at(self.len).write(f()) };
        }
        self.len += 1;
        Ok(unsafe { &mut *self.data.ptr_at(self.len - 1) })
    }

    /// Remove the last value. Returns None if vector is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { self.data.ptr_at(self.len).read() })
    }

    /// Insert a value at given index, shifting all values after it
    /// to the right.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T> {
        self.emplace(index, move || value)
    }

    /// Insert a value constructed by `f` at given index.
    ///
    /// Without reallocation, the value is constructed before any
    /// value is shifted. With reallocation, it is constructed
    /// directly at its target slot of the new storage, then prefix
    /// and suffix are moved around it, and the storages are swapped
    /// only at last. In both cases a panic in `f` leaves the vector
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        assert!(
            index <= self.len,
            "insert index out of bound: {} > {}",
            index,
            self.len
        );
        if index == self.len {
            return self.emplace_back(f);
        }
        if self.len < self.data.capacity() {
            let value = f();
            unsafe {
                let pos = self.data.ptr_at(index);
                ptr::copy(pos, pos.add(1), self.len - index);
                pos.write(value);
            }
        } else {
            let mut new_data = self.alloc_storage(self.grown_capacity()?)?;
            unsafe {
                let src = self.data.as_ptr();
                let dst = new_data.as_mut_ptr();
                dst.add(index).write(f());
                relocate(src, dst, index);
                relocate(src.add(index), dst.add(index + 1), self.len - index);
            }
            self.data.swap(&mut new_data);
        }
        self.len += 1;
        Ok(unsafe { &mut *self.data.ptr_at(index) })
    }

    /// Remove and return the value at given index, shifting all
    /// values after it to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "erase index out of bound: {} >= {}",
            index,
            self.len
        );
        unsafe {
            let pos = self.data.ptr_at(index);
            let value = pos.read();
            ptr::copy(pos.add(1), pos, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Drop the value at given index, and return the index, which
    /// now holds the value that followed the erased one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    #[inline]
    fn grown_capacity(&self) -> Result<usize> {
        let cap = self.data.capacity();
        if cap == 0 {
            return Ok(1);
        }
        cap.checked_mul(2).ok_or(Error::CapacityOverflow(cap))
    }

    /// Make room for `additional` more values. Grows to at least
    /// the doubled capacity, so repeated small appends stay amortized.
    #[inline]
    fn reserve_amortized(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow(usize::MAX))?;
        if required <= self.data.capacity() {
            return Ok(());
        }
        self.reserve(required.max(self.grown_capacity()?))
    }

    #[inline]
    fn alloc_storage(&self, new_cap: usize) -> Result<RawStorage<T>> {
        log::trace!(
            "grow vector storage: capacity {} -> {}, len {}",
            self.data.capacity(),
            new_cap,
            self.len
        );
        RawStorage::with_capacity(new_cap)
    }
}

/// Construct `count` values at `dst` by calling `f` with each offset.
/// If `f` panics, values already constructed are dropped before the
/// panic goes on.
///
/// # Safety
///
/// `dst` must be valid for writes of `count` values.
#[inline]
unsafe fn construct_n<T, F>(dst: *mut T, count: usize, mut f: F)
where
    F: FnMut(usize) -> T,
{
    let mut built = scopeguard::guard(0usize, |built| {
        // # SAFETY
        //
        // Exactly `built` values are initialized from `dst`.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(dst, built)) }
    });
    while *built < count {
        dst.add(*built).write(f(*built));
        *built += 1;
    }
    ScopeGuard::into_inner(built);
}

/// Migrate `count` live values from `src` to `dst`.
///
/// Migration moves values instead of cloning them: a move never
/// fails and needs no capability of T, so the source storage can be
/// abandoned right after. Slots at `src` are logically uninitialized
/// after this call.
///
/// # Safety
///
/// Both ranges must be valid and must not overlap.
#[inline]
unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    ptr::copy_nonoverlapping(src, dst, count)
}

impl<T> Drop for Vector<T> {
    #[inline]
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for Vector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Clone keeps capacity equal to length. Allocation failure is fatal
/// here, use [`Vector::try_clone`] and [`Vector::assign_from`] to
/// handle it.
impl<T: Clone> Clone for Vector<T> {
    #[inline]
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| e.raise())
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign_from(source) {
            e.raise()
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        let mut this = ManuallyDrop::new(self);
        let len = mem::replace(&mut this.len, 0);
        IntoIter::new(this.data.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Growth failure is fatal here, as `Extend` cannot report it.
impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(e) = self.reserve_amortized(lower) {
            e.raise()
        }
        for value in iter {
            if let Err(e) = self.push_back(value) {
                e.raise()
            }
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Vector::new();
        res.extend(iter);
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_scenario() {
        let mut v = Vector::<i32>::with_len(3).unwrap();
        assert_eq!(v, [0, 0, 0]);
        v.push_back(5).unwrap();
        assert_eq!(v, [0, 0, 0, 5]);
        assert_eq!(4, v.len());
        assert_eq!(9, *v.insert(1, 9).unwrap());
        assert_eq!(v, [0, 9, 0, 0, 5]);
        assert_eq!(0, v.erase(0));
        assert_eq!(v, [9, 0, 0, 5]);
        assert_eq!(Some(5), v.pop_back());
        assert_eq!(v, [9, 0, 0]);
    }

    #[test]
    fn test_vector_with_len() {
        for n in 0..10 {
            let v = Vector::<String>::with_len(n).unwrap();
            assert_eq!(n, v.len());
            assert!(v.capacity() >= n);
            assert!(v.iter().all(String::is_empty));
        }
        let v = Vector::<u8>::with_len(0).unwrap();
        assert_eq!(0, v.capacity());
        assert!(v.is_empty());
    }

    #[test]
    fn test_vector_new_is_empty() {
        let v = Vector::<u64>::new();
        assert_eq!(0, v.len());
        assert_eq!(0, v.capacity());
        assert!(v.as_slice().is_empty());
        let v = Vector::<u64>::default();
        assert_eq!(0, v.capacity());
    }

    #[test]
    fn test_vector_push_doubles_capacity() {
        let mut v = Vector::new();
        let mut caps = vec![];
        for i in 0..9 {
            v.push_back(i).unwrap();
            caps.push(v.capacity());
        }
        assert_eq!(vec![1, 2, 4, 4, 8, 8, 8, 8, 16], caps);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_vector_push_logarithmic_reallocations() {
        let mut v = Vector::new();
        let mut reallocs = 0;
        let mut cap = v.capacity();
        for i in 0..1000usize {
            v.push_back(i).unwrap();
            if v.capacity() != cap {
                reallocs += 1;
                cap = v.capacity();
            }
        }
        assert_eq!(1000, v.len());
        // 1, 2, 4, ..., 1024
        assert_eq!(11, reallocs);
        assert!(v.iter().copied().eq(0..1000));
    }

    #[test]
    fn test_vector_extend_amortized() {
        let mut v = Vector::new();
        let mut reallocs = 0;
        let mut cap = v.capacity();
        for i in 0..500usize {
            v.extend([i, i]);
            if v.capacity() != cap {
                reallocs += 1;
                cap = v.capacity();
            }
        }
        assert_eq!(1000, v.len());
        // 2, 4, 8, ..., 1024
        assert_eq!(10, reallocs);
        assert_eq!(1024, v.capacity());

        let mut v = Vector::new();
        let mut reallocs = 0;
        let mut cap = v.capacity();
        for i in 0..1000usize {
            v.extend(std::iter::once(i));
            if v.capacity() != cap {
                reallocs += 1;
                cap = v.capacity();
            }
        }
        assert_eq!(11, reallocs);
        assert!(v.iter().copied().eq(0..1000));
    }

    #[test]
    fn test_vector_emplace_back_returns_new_value() {
        let mut v = Vector::new();
        *v.emplace_back(|| String::from("a")).unwrap() += "b";
        v.emplace_back(|| String::from("c")).unwrap();
        assert_eq!(v, [String::from("ab"), String::from("c")]);
    }

    #[test]
    fn test_vector_reserve() {
        let mut v = Vector::<i32>::new();
        v.reserve(0).unwrap();
        assert_eq!(0, v.capacity());
        v.reserve(10).unwrap();
        assert_eq!(10, v.capacity());
        v.extend([1, 2, 3]);
        let ptr = v.as_ptr();
        v.reserve(5).unwrap();
        assert_eq!(10, v.capacity());
        assert_eq!(ptr, v.as_ptr());
        v.reserve(11).unwrap();
        assert_eq!(11, v.capacity());
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_vector_reserve_overflow() {
        let mut v: Vector<u64> = (0..3).collect();
        let cap = v.capacity();
        assert_eq!(
            Err(Error::CapacityOverflow(usize::MAX)),
            v.reserve(usize::MAX)
        );
        assert_eq!(cap, v.capacity());
        assert_eq!(v, [0, 1, 2]);
    }

    #[test]
    fn test_vector_resize() {
        let mut v = Vector::<i32>::new();
        v.resize(3).unwrap();
        assert_eq!(v, [0, 0, 0]);
        assert_eq!(3, v.capacity());
        v[1] = 7;
        v.resize(5).unwrap();
        assert_eq!(v, [0, 7, 0, 0, 0]);
        assert_eq!(5, v.capacity());
        v.resize(2).unwrap();
        assert_eq!(v, [0, 7]);
        assert_eq!(5, v.capacity());
        v.resize(2).unwrap();
        assert_eq!(v, [0, 7]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(5, v.capacity());
    }

    #[test]
    fn test_vector_insert_in_place() {
        let mut v = Vector::with_capacity(8).unwrap();
        v.extend([1, 2, 3]);
        v.insert(0, 0).unwrap();
        v.insert(2, 10).unwrap();
        v.insert(5, 4).unwrap();
        assert_eq!(v, [0, 1, 10, 2, 3, 4]);
        assert_eq!(8, v.capacity());
    }

    #[test]
    fn test_vector_insert_with_reallocation() {
        let mut v: Vector<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(4, v.capacity());
        v.insert(2, "x".to_string()).unwrap();
        assert_eq!(8, v.capacity());
        assert_eq!(v.join(""), "abxcd");
        let mut e = Vector::new();
        e.insert(0, 1).unwrap();
        assert_eq!(e, [1]);
        assert_eq!(1, e.capacity());
    }

    #[test]
    fn test_vector_insert_keeps_order() {
        for cap in [5, 16] {
            for pos in 0..=5 {
                let mut v = Vector::with_capacity(cap).unwrap();
                v.extend(0..5);
                v.insert(pos, 100).unwrap();
                let mut expected: Vec<i32> = (0..5).collect();
                expected.insert(pos, 100);
                assert_eq!(v.as_slice(), &expected[..]);
            }
        }
    }

    #[test]
    #[should_panic(expected = "insert index out of bound")]
    fn test_vector_insert_out_of_bound() {
        let mut v = Vector::<i32>::new();
        let _ = v.insert(1, 1);
    }

    #[test]
    fn test_vector_erase_and_remove() {
        let mut v: Vector<i32> = (0..5).collect();
        assert_eq!(4, v.erase(4));
        assert_eq!(v, [0, 1, 2, 3]);
        assert_eq!(1, v.erase(1));
        assert_eq!(v, [0, 2, 3]);
        assert_eq!(0, v.remove(0));
        assert_eq!(v, [2, 3]);
        assert_eq!(5, v.capacity());
    }

    #[test]
    #[should_panic(expected = "erase index out of bound")]
    fn test_vector_erase_empty() {
        let mut v = Vector::<i32>::new();
        v.erase(0);
    }

    #[test]
    fn test_vector_pop_back_empty() {
        let mut v = Vector::<i32>::new();
        assert_eq!(None, v.pop_back());
        v.push_back(1).unwrap();
        assert_eq!(Some(1), v.pop_back());
        assert_eq!(None, v.pop_back());
        assert_eq!(1, v.capacity());
    }

    #[test]
    #[should_panic]
    fn test_vector_index_out_of_bound() {
        let v = Vector::<i32>::with_len(2).unwrap();
        assert_eq!(0, v[2]);
    }

    #[test]
    fn test_vector_clone_is_independent() {
        let mut a: Vector<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        a.reserve(10).unwrap();
        let mut b = a.clone();
        assert_eq!(2, b.capacity());
        b[0].push('!');
        b.push_back("z".to_string()).unwrap();
        assert_eq!(a, ["x".to_string(), "y".to_string()]);
        a[1].push('?');
        assert_eq!(b, ["x!".to_string(), "y".to_string(), "z".to_string()]);
    }

    #[test]
    fn test_vector_assign_from() {
        let src: Vector<i32> = (0..4).collect();

        // not enough capacity: full copy swapped in.
        let mut dst: Vector<i32> = (10..12).collect();
        dst.assign_from(&src).unwrap();
        assert_eq!(dst, [0, 1, 2, 3]);
        assert_eq!(4, dst.capacity());

        // longer destination: trailing values dropped.
        let mut dst: Vector<i32> = (10..16).collect();
        dst.assign_from(&src).unwrap();
        assert_eq!(dst, [0, 1, 2, 3]);
        assert_eq!(6, dst.capacity());

        // shorter destination with enough capacity: tail cloned.
        let mut dst = Vector::with_capacity(6).unwrap();
        dst.push_back(20).unwrap();
        dst.clone_from(&src);
        assert_eq!(dst, [0, 1, 2, 3]);
        assert_eq!(6, dst.capacity());

        let mut dst: Vector<i32> = (0..3).collect();
        dst.assign_from(&Vector::new()).unwrap();
        assert!(dst.is_empty());
    }

    #[test]
    fn test_vector_take_and_swap() {
        let mut a: Vector<i32> = (0..3).collect();
        let cap = a.capacity();
        let b = a.take();
        assert_eq!(0, a.len());
        assert_eq!(0, a.capacity());
        assert_eq!(b, [0, 1, 2]);
        assert_eq!(cap, b.capacity());
        a.push_back(9).unwrap();
        assert_eq!(a, [9]);

        let mut c = b;
        c.swap_with(&mut a);
        assert_eq!(c, [9]);
        assert_eq!(a, [0, 1, 2]);
        a.swap(0, 2);
        assert_eq!(a, [2, 1, 0]);
    }

    #[test]
    fn test_vector_zero_sized() {
        let mut v = Vector::<()>::new();
        for _ in 0..100 {
            v.push_back(()).unwrap();
        }
        v.insert(50, ()).unwrap();
        assert_eq!(101, v.len());
        v.erase(0);
        assert_eq!(Some(()), v.pop_back());
        assert_eq!(99, v.len());
        assert_eq!(99, v.iter().count());
    }

    #[test]
    fn test_vector_iter_mut() {
        let mut v: Vector<i32> = (1..4).collect();
        for x in &mut v {
            *x *= 2;
        }
        let sum: i32 = (&v).into_iter().sum();
        assert_eq!(12, sum);
        assert_eq!("[2, 4, 6]", format!("{:?}", v));
    }
}
