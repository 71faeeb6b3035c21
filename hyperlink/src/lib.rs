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

//! # Tinct Hyperlinks
//!
//! OSC 8 terminal hyperlinks for styled terminal output.
//!
//! - [`Hyperlink`] holds a target and its `key=value` parameters and writes the
//!   opening and closing escape sequences.
//! - [`escape`] and [`unescape`] percent-encode targets for the printable ASCII
//!   range that OSC 8 allows.
//!
//! ```
//! use tinct_hyperlink::{Hyperlink, HyperlinkParam, escape};
//!
//! let target = escape("http://пример.тест");
//! let link = Hyperlink::new(target, vec![HyperlinkParam::id("docs")]);
//! let text = format!("{}docs{}", link.head(), link.tail());
//! ```

mod escape;
mod link;
mod result;

pub use self::escape::{escape, is_valid_param, is_valid_target, unescape};
pub use self::link::{
    HYPERLINK_ID_KEY, Hyperlink, HyperlinkParam, LINK_END, LINK_START, LINK_TERMINATOR,
};
pub use self::result::{HyperlinkError, HyperlinkResult};
