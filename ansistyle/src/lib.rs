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

//! # Tinct AnsiStyle
//!
//! Terminal text styling with ANSI Select Graphic Rendition (SGR) sequences.
//!
//! - [`Color`] packs text attributes and colors into a single `u32`.
//! - [`append_nos`] turns a [`Color`] into the minimal SGR parameter list.
//! - [`Value`] wraps any printable value with a [`Color`] and an optional OSC 8
//!   hyperlink.
//! - [`sprintf`](sprintf()) composes styled values into styled templates so
//!   that each nested value restores the template style after itself.
//!
//! ```rust
//! use tinct_ansistyle::{BasicColor, Value, sprintf};
//!
//! let template = Value::new("we've got %d cats").fg(BasicColor::Blue);
//! let count = Value::new(5).fg(BasicColor::Cyan);
//! println!("{}", sprintf!(template, count));
//! ```

mod arg;
mod color;
mod colorizer;
mod config;
mod consts;
mod printf;
mod result;
mod sgr;
mod sprintf;
mod value;

pub use self::arg::{Arg, Payload};
pub use self::color::{BasicColor, Color};
pub use self::colorizer::{Colorizer, colorize, default_colorizer, set_default};
pub use self::config::{Config, NO_COLOR, Setting};
pub use self::consts::{CSI, MAX_PARAMS_LENGTH, RESET};
pub use self::printf::{printf, write_printf};
pub use self::result::{StyleError, StyleResult};
pub use self::sgr::{append_nos, write_reset, write_sgr};
pub use self::sprintf::sprintf;
pub use self::value::{IntoValue, Value, wrap};
pub use tinct_hyperlink::{
    Hyperlink, HyperlinkError, HyperlinkParam, HyperlinkResult, escape, unescape,
};
