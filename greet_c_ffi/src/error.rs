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

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur while building a greeting for a C caller.
///
/// These never cross the C boundary. Every exported function reports
/// failure by returning NULL.
pub enum Error {
    #[error("NullParameter: {0}")]
    NullParameter(String),
    #[error("OutOfMemory: could not allocate {0} bytes")]
    OutOfMemory(usize),
    #[error("Overflow: greeting for a {0} byte name does not fit in memory")]
    Overflow(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type
    pub fn code(&self) -> i32 {
        match self {
            Self::NullParameter(_) => 100,
            Self::OutOfMemory(_) => 101,
            Self::Overflow(_) => 102,
        }
    }
}
