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

use crate::{Color, Config, Value};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A printable value handed to the template engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(String),
}

impl Payload {
    /// Type name used in template error markers such as `%!d(string=x)`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Payload::Bool(_) => "bool",
            Payload::Int(_) => "int",
            Payload::Uint(_) => "uint",
            Payload::Float(_) => "float",
            Payload::Char(_) => "char",
            Payload::Str(_) => "string",
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Bool(v) => fmt::Display::fmt(v, f),
            Payload::Int(v) => fmt::Display::fmt(v, f),
            Payload::Uint(v) => fmt::Display::fmt(v, f),
            Payload::Float(v) => fmt::Display::fmt(v, f),
            Payload::Char(v) => fmt::Display::fmt(v, f),
            Payload::Str(v) => fmt::Display::fmt(v, f),
        }
    }
}

macro_rules! payload_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for Payload {
                fn from(value: $ty) -> Self {
                    Payload::$variant(value.into())
                }
            }

            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Plain(value.into())
                }
            }
        )+
    };
}

payload_from!(Bool: bool);
payload_from!(Int: i8, i16, i32, i64);
payload_from!(Uint: u8, u16, u32, u64);
payload_from!(Float: f32, f64);
payload_from!(Char: char);
payload_from!(Str: String, &str, &String, Cow<'_, str>);

impl From<isize> for Payload {
    fn from(value: isize) -> Self {
        Payload::Int(value as i64)
    }
}

impl From<usize> for Payload {
    fn from(value: usize) -> Self {
        Payload::Uint(value as u64)
    }
}

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        Arg::Plain(value.into())
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::Plain(value.into())
    }
}

/// A template or argument of [`sprintf`](crate::sprintf()): either a plain
/// value or one that is already styled.
///
/// Plain arguments print exactly as the template engine formats them. Styled
/// arguments print with their own escape sequences and, inside a styled
/// template, restore the template style afterwards.
///
/// Only the primitive [`Payload`] kinds convert into an `Arg`. Other
/// [`Display`](fmt::Display) types are converted to text first, either with
/// [`Arg::display`] or with `value.map(|v| v.to_string())` on a styled value.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Plain(Payload),
    Styled(Value<Payload>),
}

impl Arg {
    /// Plain argument holding the text of any displayable value.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Arg {
        Arg::Plain(Payload::Str(value.to_string()))
    }

    pub fn payload(&self) -> &Payload {
        match self {
            Arg::Plain(payload) => payload,
            Arg::Styled(value) => value.value(),
        }
    }

    /// Attribute set of a styled argument, empty for a plain one.
    pub fn color(&self) -> Color {
        match self {
            Arg::Plain(_) => Color::empty(),
            Arg::Styled(value) => value.color(),
        }
    }

    pub fn is_styled(&self) -> bool {
        matches!(self, Arg::Styled(_))
    }

    /// Replaces the attribute set, wrapping a plain argument into a styled one
    /// with the default configuration.
    pub fn colorize(self, color: Color) -> Arg {
        match self {
            Arg::Plain(payload) => Arg::Styled(Value::new(payload).colorize(color)),
            Arg::Styled(value) => Arg::Styled(value.colorize(color)),
        }
    }

    /// Moves a styled argument to another configuration. Plain arguments are
    /// returned as they are.
    pub fn configure(self, config: &Arc<Config>) -> Arg {
        match self {
            Arg::Plain(payload) => Arg::Plain(payload),
            Arg::Styled(value) => Arg::Styled(value.configure(Arc::clone(config))),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Plain(payload) => fmt::Display::fmt(payload, f),
            Arg::Styled(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl From<Payload> for Arg {
    fn from(payload: Payload) -> Self {
        Arg::Plain(payload)
    }
}

impl<T: Into<Payload>> From<Value<T>> for Arg {
    fn from(value: Value<T>) -> Self {
        Arg::Styled(value.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BasicColor;

    fn enabled<T>(value: T) -> Value<T> {
        Value::with_config(value, Arc::new(Config::new()))
    }

    #[test]
    fn test_payload_from() {
        assert_eq!(Payload::from(true), Payload::Bool(true));
        assert_eq!(Payload::from(-3i8), Payload::Int(-3));
        assert_eq!(Payload::from(3usize), Payload::Uint(3));
        assert_eq!(Payload::from(1.5f32), Payload::Float(1.5));
        assert_eq!(Payload::from('x'), Payload::Char('x'));
        assert_eq!(Payload::from("x"), Payload::Str("x".to_string()));
        assert_eq!(Payload::from(Cow::Borrowed("x")), Payload::Str("x".to_string()));
    }

    #[test]
    fn test_payload_display() {
        assert_eq!(Payload::Int(-5).to_string(), "-5");
        assert_eq!(Payload::Float(2.5).to_string(), "2.5");
        assert_eq!(format!("{:>3}", Payload::Str("a".into())), "  a");
        assert_eq!(Payload::Str("a".into()).type_name(), "string");
    }

    #[test]
    fn test_arg_from_value() {
        let arg = Arg::from(enabled(5u8).fg(BasicColor::Cyan));
        assert!(arg.is_styled());
        assert_eq!(arg.payload(), &Payload::Uint(5));
        assert_eq!(arg.color(), Color::empty().fg(BasicColor::Cyan));
        assert_eq!(arg.to_string(), "\x1b[36m5\x1b[0m");
    }

    #[test]
    fn test_arg_colorize() {
        let arg = Arg::from("x").colorize(Color::BOLD);
        assert!(arg.is_styled());
        assert_eq!(arg.color(), Color::BOLD);

        let arg = Arg::from(enabled("y").italic()).colorize(Color::FAINT);
        assert_eq!(arg.color(), Color::FAINT);
    }

    #[test]
    fn test_arg_display() {
        let addr = std::net::Ipv4Addr::LOCALHOST;
        assert_eq!(Arg::display(&addr), Arg::Plain(Payload::Str("127.0.0.1".into())));
        let styled = Arg::from(enabled(addr).bold().map(|v| v.to_string()));
        assert_eq!(styled.to_string(), "\x1b[1m127.0.0.1\x1b[0m");
    }

    #[test]
    fn test_arg_configure() {
        let disabled = Arc::new(Config::disabled());
        let arg = Arg::from(enabled("x").bold()).configure(&disabled);
        assert_eq!(arg.to_string(), "x");
        assert_eq!(Arg::from(1).configure(&disabled), Arg::Plain(Payload::Int(1)));
    }
}
