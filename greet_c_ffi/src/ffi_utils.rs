// Copyright 2023 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! FFI Utilities
//!
//! Strings handed to C are allocated with the C runtime allocator rather
//! than Rust's global allocator, so the pointer is a plain `malloc` block on
//! every platform and can only be released through `free`.

use std::os::raw::c_char;

use crate::error::{Error, Result};

/// Allocates a zeroed C string with room for `len` bytes plus the NUL
/// terminator, lets `fill` write the `len` content bytes, and returns the
/// pointer.
///
/// This performs exactly one call to the C allocator. The returned pointer
/// MUST be released with [`free_c_string`] and is invalid after that call.
///
/// # Errors
/// Returns [`Error::Overflow`] if `len + 1` does not fit in a `usize` and
/// [`Error::OutOfMemory`] if the allocator returns NULL.
pub(crate) fn alloc_c_string<F>(len: usize, fill: F) -> Result<*mut c_char>
where
    F: FnOnce(&mut [u8]),
{
    let size = len.checked_add(1).ok_or(Error::Overflow(len))?;

    // calloc so the slice below is initialized and the terminator is in place.
    let ptr = unsafe { libc::calloc(size, 1) } as *mut u8;
    if ptr.is_null() {
        return Err(Error::OutOfMemory(size));
    }

    // SAFETY: calloc returned `size` zeroed, writable bytes that nothing else
    // references yet.
    let buf = unsafe { std::slice::from_raw_parts_mut(ptr, size) };
    fill(&mut buf[..len]);
    debug_assert_eq!(buf[len], 0);

    Ok(ptr as *mut c_char)
}

/// Releases a string returned by [`alloc_c_string`]. NULL is ignored.
///
/// # Safety
/// `s` must be NULL or a pointer from [`alloc_c_string`] (or any other C
/// `malloc` family allocation) that has not been freed yet.
pub(crate) unsafe fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        libc::free(s as *mut libc::c_void);
    }
}
