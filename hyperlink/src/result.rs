//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for hyperlink construction and URL escaping.

/// Result type alias for hyperlink operations.
pub type HyperlinkResult<T> = Result<T, HyperlinkError>;

/// Errors that can occur when building or unescaping hyperlinks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HyperlinkError {
    /// A `%` was not followed by two hexadecimal digits.
    ///
    /// Holds the offending sequence starting at the `%`, at most three bytes long.
    #[error("invalid URL-escape sequence: {sequence:?}")]
    InvalidEscape {
        /// The offending escape sequence
        sequence: String,
    },

    /// The target contains bytes outside of the printable ASCII range `32..=126`.
    #[error("invalid hyperlink target {target:?}: bytes outside 32-126 must be URL-escaped")]
    InvalidTarget {
        /// The rejected target
        target: String,
    },

    /// A parameter key or value contains `:`, `;`, `=` or non-printable bytes.
    #[error("invalid hyperlink parameter {param:?}")]
    InvalidParam {
        /// The rejected key or value
        param: String,
    },

    /// Unescaped bytes do not form valid UTF-8.
    #[error("unescaped hyperlink is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
