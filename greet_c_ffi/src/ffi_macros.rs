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

//! FFI Helper Macros
//!
//! Argument checks and early returns for the exported C functions.
//! All macros that perform early returns include `_or_return_` in their names
//! to make control flow explicit and obvious.
//!
//! Failures are logged through the `log` facade and then collapsed to the
//! function's error value. No error state is kept between calls.

/// Check pointer not null or early-return with error value
macro_rules! ptr_or_return {
    ($ptr:expr, $err_val:expr) => {
        if $ptr.is_null() {
            let err = $crate::Error::NullParameter(stringify!($ptr).to_string());
            log::warn!("{err} (code {})", err.code());
            return $err_val;
        }
    };
}

/// Borrow the bytes of a C string, without its terminator, or early-return
/// with error value if the pointer is null.
///
/// The bytes are not decoded. Whatever encoding the caller used is preserved.
macro_rules! cbytes_or_return {
    ($ptr:expr, $err_val:expr) => {{
        ptr_or_return!($ptr, $err_val);
        let ptr = $ptr;
        // SAFETY: the caller guarantees ptr is a NUL-terminated string that
        // stays valid for the duration of the call.
        unsafe { std::ffi::CStr::from_ptr(ptr) }.to_bytes()
    }};
}

/// Handle Result or early-return with error value
macro_rules! ok_or_return {
    ($result:expr, $err_val:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => {
                let err: $crate::Error = err;
                log::debug!("{err} (code {})", err.code());
                return $err_val;
            }
        }
    };
}

/// If the pointer is null, log and return std::ptr::null_mut().
macro_rules! cbytes_or_return_null {
    ($ptr:expr) => {
        cbytes_or_return!($ptr, std::ptr::null_mut())
    };
}

/// If the result is an error, log and return std::ptr::null_mut().
macro_rules! ok_or_return_null {
    ($result:expr) => {
        ok_or_return!($result, std::ptr::null_mut())
    };
}
