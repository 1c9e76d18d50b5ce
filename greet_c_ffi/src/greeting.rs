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

//! Byte-level greeting construction.
//!
//! Names are treated as opaque bytes. Nothing here assumes or checks UTF-8,
//! so whatever encoding the host runtime used comes back unchanged.

use std::ffi::{CStr, CString};

/// Bytes written before the name.
pub const PREFIX: &[u8] = b"Hello, ";
/// Bytes written after the name.
pub const SUFFIX: &[u8] = b"!";

/// Length of the greeting for a name of `name_len` bytes, not counting the
/// NUL terminator. Returns `None` if the length does not fit in a `usize`.
pub fn greeting_len(name_len: usize) -> Option<usize> {
    name_len
        .checked_add(PREFIX.len())?
        .checked_add(SUFFIX.len())
}

/// Writes `PREFIX ∥ name ∥ SUFFIX` to the start of `out` and returns the
/// number of bytes written.
///
/// # Panics
/// Panics if `out` is shorter than `greeting_len(name.len())`.
pub(crate) fn write_greeting(name: &[u8], out: &mut [u8]) -> usize {
    let (prefix, rest) = out.split_at_mut(PREFIX.len());
    prefix.copy_from_slice(PREFIX);
    let (middle, rest) = rest.split_at_mut(name.len());
    middle.copy_from_slice(name);
    rest[..SUFFIX.len()].copy_from_slice(SUFFIX);
    PREFIX.len() + name.len() + SUFFIX.len()
}

/// Returns the greeting for `name` without a terminator.
pub fn greet(name: &[u8]) -> Vec<u8> {
    let mut out = vec![0; PREFIX.len() + name.len() + SUFFIX.len()];
    write_greeting(name, &mut out);
    out
}

/// Returns the greeting for `name` as an owned C string.
pub fn greet_cstr(name: &CStr) -> CString {
    // SAFETY: a CStr holds no interior NUL, and neither do PREFIX or SUFFIX.
    unsafe { CString::from_vec_unchecked(greet(name.to_bytes())) }
}
