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

//! Error types for the ansistyle crate.
//!
//! Styling, rendering and composition never fail. Errors only come from
//! installing the process wide default and from checked hyperlinks.

use tinct_hyperlink::HyperlinkError;

/// Result type alias for operations that may fail with a [`StyleError`].
pub type StyleResult<T> = Result<T, StyleError>;

/// Errors that can occur when configuring styled output.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The process wide default [`Colorizer`](crate::Colorizer) was already
    /// installed or already read.
    #[error("default colorizer is already set")]
    DefaultAlreadySet,
    /// A hyperlink target or parameter was rejected.
    #[error("hyperlink error: {0}")]
    Hyperlink(#[from] HyperlinkError),
}
