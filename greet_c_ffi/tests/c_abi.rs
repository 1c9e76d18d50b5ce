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

//! Drives the exported symbols the way a foreign caller does: raw pointers
//! in, raw pointers out, and every result released through the C ABI.

use std::{
    ffi::{CStr, CString},
    os::raw::c_char,
    thread,
};

use greet::{FreeString, Greet};

// Calls Greet, copies the result out and frees it.
fn greet_via_ffi(name: &CStr) -> Vec<u8> {
    let result = unsafe { Greet(name.as_ptr()) };
    assert!(!result.is_null(), "Greet returned NULL");
    let bytes = unsafe { CStr::from_ptr(result) }.to_bytes_with_nul().to_vec();
    unsafe { FreeString(result) };
    bytes
}

fn expected(name: &[u8]) -> Vec<u8> {
    [b"Hello, ".as_slice(), name, b"!\0".as_slice()].concat()
}

#[test]
fn test_scenarios() {
    let long_name = vec![b'x'; 10000];
    let cases: [&[u8]; 5] = [
        b"World",
        b"",
        "café".as_bytes(),
        b"A\x01B",
        long_name.as_slice(),
    ];

    for name in cases {
        let c_name = CString::new(name).unwrap();
        assert_eq!(greet_via_ffi(&c_name), expected(name));
    }
}

#[test]
fn test_length_is_name_plus_eight() {
    for len in [0, 1, 7, 255, 4096] {
        let c_name = CString::new(vec![b'n'; len]).unwrap();
        let result = unsafe { Greet(c_name.as_ptr()) };
        assert!(!result.is_null());
        let out_len = unsafe { libc::strlen(result) };
        assert_eq!(out_len, 8 + unsafe { libc::strlen(c_name.as_ptr()) });
        unsafe { FreeString(result) };
    }
}

#[test]
fn test_invalid_utf8_passes_through() {
    let c_name = CString::new(vec![0xff, 0xfe, b'z', 0x80]).unwrap();
    assert_eq!(greet_via_ffi(&c_name), b"Hello, \xff\xfez\x80!\0");
}

#[test]
fn test_free_string_null_is_noop() {
    unsafe { FreeString(std::ptr::null_mut()) };
    unsafe { FreeString(std::ptr::null_mut()) };
}

#[test]
fn test_greet_null_returns_null() {
    let result = unsafe { Greet(std::ptr::null()) };
    assert!(result.is_null());
}

#[test]
fn test_greet_after_free() {
    let name = c"again";

    let first = unsafe { Greet(name.as_ptr()) };
    assert!(!first.is_null());
    unsafe { FreeString(first) };

    let second = unsafe { Greet(name.as_ptr()) };
    assert!(!second.is_null());
    assert_eq!(
        unsafe { CStr::from_ptr(second) }.to_bytes(),
        b"Hello, again!"
    );
    unsafe { FreeString(second) };
}

#[test]
fn test_live_results_are_distinct() {
    let name = c"twice";
    let first = unsafe { Greet(name.as_ptr()) };
    let second = unsafe { Greet(name.as_ptr()) };
    assert!(!first.is_null() && !second.is_null());
    assert_ne!(first, second);
    unsafe {
        FreeString(first);
        FreeString(second);
    }
}

#[test]
fn test_result_does_not_borrow_input() {
    let c_name = CString::new("temporary").unwrap();
    let result = unsafe { Greet(c_name.as_ptr()) };
    drop(c_name);
    assert!(!result.is_null());
    assert_eq!(
        unsafe { CStr::from_ptr(result) }.to_bytes(),
        b"Hello, temporary!"
    );
    unsafe { FreeString(result) };
}

#[test]
fn test_result_can_be_freed_with_c_free() {
    let result = unsafe { Greet(c"libc".as_ptr()) };
    assert!(!result.is_null());
    unsafe { libc::free(result as *mut libc::c_void) };
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let c_name = CString::new(format!("thread-{i}")).unwrap();
                for _ in 0..200 {
                    let bytes = greet_via_ffi(&c_name);
                    assert_eq!(bytes, expected(c_name.as_bytes()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_matches_rust_api() {
    let name = c"Ferris";
    let via_ffi = greet_via_ffi(name);
    assert_eq!(via_ffi, greet::greet_cstr(name).as_bytes_with_nul());
    assert_eq!(via_ffi.len() - 1, greet::greeting_len(6).unwrap());
}

// The signatures must stay in line with the generated header.
const _: unsafe extern "C" fn(*const c_char) -> *mut c_char = Greet;
const _: unsafe extern "C" fn(*mut c_char) = FreeString;
