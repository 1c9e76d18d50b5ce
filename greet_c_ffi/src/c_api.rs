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

use std::os::raw::c_char;

use crate::{
    error::{Error, Result},
    ffi_utils::{alloc_c_string, free_c_string},
    greeting::{greeting_len, write_greeting},
};

// Builds the greeting for `name` in a single C allocation.
fn greeting_to_c_string(name: &[u8]) -> Result<*mut c_char> {
    let len = greeting_len(name.len()).ok_or(Error::Overflow(name.len()))?;
    alloc_c_string(len, |buf| {
        write_greeting(name, buf);
    })
}

/// Returns a greeting of the form `Hello, <name>!`.
///
/// The bytes of `name` are copied verbatim; no encoding is assumed.
///
/// # Errors
/// Returns NULL if `name` is NULL or if the result could not be allocated.
///
/// # Safety
/// `name` must be NULL or point to a NUL-terminated string that stays valid
/// for the duration of the call.
/// The returned value MUST be released by calling FreeString
/// and it is no longer valid after that call.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn Greet(name: *const c_char) -> *mut c_char {
    let name = cbytes_or_return_null!(name);
    let greeting = ok_or_return_null!(greeting_to_c_string(name));
    log::trace!("greeted a {} byte name", name.len());
    greeting
}

/// Frees a string returned by Greet.
///
/// # Safety
/// `str` must be NULL or a pointer returned by Greet.
/// The string can only be freed once and is invalid after this call.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn FreeString(str: *mut c_char) {
    free_c_string(str)
}
