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

//! A shared library that builds `Hello, <name>!` greetings for C callers.
//!
//! Two symbols are exported with C linkage:
//!
//! ```c
//! char *Greet(const char *name);
//! void FreeString(char *str);
//! ```
//!
//! `Greet` allocates its result with the C `malloc` family and hands ownership
//! to the caller, who releases it with `FreeString`. The same greeting logic
//! is available to Rust callers through [`greet`] and [`greet_cstr`].

// Declare foundational modules first
mod error;
mod ffi_utils;
mod greeting;

// Then macros that depend on them
#[macro_use]
mod ffi_macros;

// Then everything else
mod c_api;

pub use c_api::*;
pub use error::{Error, Result};
pub use greeting::{greet, greet_cstr, greeting_len, PREFIX, SUFFIX};
