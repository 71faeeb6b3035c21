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

use crate::printf::write_printf;
use crate::value::Content;
use crate::{Arg, Payload, Value};
use tracing::instrument;

/// Formats `args` into `template`, restoring the template style after every
/// styled argument.
///
/// - A plain string template is substituted as is. Styled arguments print with
///   their own colors followed by a full reset.
/// - A plain non-string template is converted to its text first.
/// - A styled template wraps the whole result in its own sequences, and every
///   styled argument ends with a sequence that switches back to the template
///   style instead of a bare reset. Plain arguments inherit the template style.
///
/// ```rust
/// use tinct_ansistyle::{BasicColor, Value, sprintf};
///
/// let total = Value::new("total: %d").fg(BasicColor::Red);
/// let count = Value::new(3).fg(BasicColor::Blue);
/// assert_eq!(
///     sprintf!(total, count),
///     "\x1b[31mtotal: \x1b[0;34m3\x1b[0;31m\x1b[0m"
/// );
/// ```
///
/// The escape sequences of a styled template are never interpreted as
/// directives, so a `%` inside a hyperlink target is safe.
#[instrument(skip_all)]
pub fn sprintf<T, I>(template: T, args: I) -> String
where
    T: Into<Arg>,
    I: IntoIterator<Item = Arg>,
{
    let mut args: Vec<Arg> = args.into_iter().collect();
    let mut out = String::new();
    match template.into() {
        Arg::Plain(Payload::Str(template)) => write_printf(&mut out, &template, &args),
        Arg::Plain(template) => write_printf(&mut out, &template.to_string(), &args),
        Arg::Styled(template) => write_styled(&mut out, &template, &mut args),
    }
    out
}

fn write_styled(out: &mut String, template: &Value<Payload>, args: &mut [Arg]) {
    if template.emits_color() {
        for arg in args.iter_mut() {
            if let Arg::Styled(value) = arg
                && !value.color().is_empty()
            {
                value.set_tail(template.color());
            }
        }
    }
    // writing into a String cannot fail
    let _ = template.write_with(out, |out, content| {
        match content {
            Content::Value(Payload::Str(text)) => write_printf(out, text, args),
            Content::Value(payload) => write_printf(out, &payload.to_string(), args),
            Content::Target(target) => {
                out.push_str(target);
                write_printf(out, "", args);
            }
        }
        Ok(())
    });
}

/// Formats styled or plain arguments into a template, see
/// [`sprintf`](crate::sprintf()).
///
/// Every argument is converted with `Arg::from`, so plain numbers, strings and
/// [`Value`](crate::Value)s can be mixed freely.
///
/// ```rust
/// use tinct_ansistyle::{BasicColor, Value, sprintf};
///
/// let name = Value::new("tinct").bold();
/// assert_eq!(sprintf!("%s v%d", name, 1), "\x1b[1mtinct\x1b[0m v1");
/// ```
#[macro_export]
macro_rules! sprintf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::sprintf($template, ::std::vec![$($crate::Arg::from($arg)),*])
    };
}
