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

use crate::sgr::write_reset;
use crate::{BasicColor, Color, Config, StyleResult, default_colorizer};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tinct_hyperlink::{Hyperlink, HyperlinkParam};

/// Forwards attribute setters of [`Color`] onto a type holding a `color` field.
macro_rules! delegate_color {
    ($($(#[$meta:meta])* $name:ident $(($arg:ident: $ty:ty))?;)*) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name(mut self $(, $arg: $ty)?) -> Self {
                self.color = self.color.$name($($arg)?);
                self
            }
        )*
    };
}

/// What a styled value prints between its escape sequences.
pub(crate) enum Content<'a, T> {
    /// The wrapped value
    Value(&'a T),
    /// The hyperlink target, printed when hyperlinks are disabled
    Target(&'a str),
}

/// A value with terminal styling attached.
///
/// `Value` wraps anything printable together with a [`Color`] and an optional
/// OSC 8 [`Hyperlink`]. Displaying it writes the escape sequences around the
/// value:
///
/// ```text
/// [ESC]8;params;target ESC\] ESC[color m value ESC[0m [ESC]8;;ESC\]
/// ```
///
/// Formatter options apply to the value itself, so `format!("{:>8}", value)`
/// pads the text and leaves the escape sequences untouched.
///
/// ```rust
/// use tinct_ansistyle::{BasicColor, Value};
///
/// let total = Value::new(42).bold().fg(BasicColor::Green);
/// assert_eq!(format!("{:<4}|", total), "\x1b[1;32m42  \x1b[0m|");
/// ```
///
/// Every setter consumes the value and returns it, the hyperlink and the
/// configuration are shared between clones.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Value<T> {
    value: T,
    color: Color,
    tail: Color,
    link: Option<Arc<Hyperlink>>,
    config: Arc<Config>,
}

impl<T> Value<T> {
    /// Wraps a value using the configuration of the default
    /// [`Colorizer`](crate::Colorizer).
    pub fn new(value: T) -> Self {
        Self::with_config(value, default_colorizer().shared_config())
    }

    /// Wraps a value using the given configuration.
    pub fn with_config(value: T, config: Arc<Config>) -> Self {
        Self {
            value,
            color: Color::empty(),
            tail: Color::empty(),
            link: None,
            config,
        }
    }

    delegate_color! {
        bold;
        faint;
        italic;
        underline;
        doubly_underline;
        slow_blink;
        rapid_blink;
        /// Same as [`Value::slow_blink`]
        blink;
        reverse;
        /// Same as [`Value::reverse`]
        inverse;
        conceal;
        /// Same as [`Value::conceal`]
        hidden;
        crossed_out;
        /// Same as [`Value::crossed_out`]
        strike_through;
        fraktur;
        framed;
        encircled;
        overlined;
        fg(color: BasicColor);
        bright_fg(color: BasicColor);
        fg_index(index: u8);
        /// Grayscale foreground, clamped to `0..=23`
        fg_gray(gray: u8);
        bg(color: BasicColor);
        bright_bg(color: BasicColor);
        bg_index(index: u8);
        /// Grayscale background, clamped to `0..=23`
        bg_gray(gray: u8);
        clear_fg;
        clear_bg;
    }

    /// Sets text attributes, see [`Color::with_formats`].
    #[must_use]
    pub fn set(mut self, flags: Color) -> Self {
        self.color = self.color.with_formats(flags);
        self
    }

    /// Clears text attributes, see [`Color::without_formats`].
    #[must_use]
    pub fn unset(mut self, flags: Color) -> Self {
        self.color = self.color.without_formats(flags);
        self
    }

    /// Replaces the whole attribute set.
    #[must_use]
    pub fn colorize(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Attaches a hyperlink, replacing any previous one.
    ///
    /// The target and parameters are used as given, see
    /// [`tinct_hyperlink::escape`] for preparing them.
    #[must_use]
    pub fn hyperlink(self, target: impl Into<String>, params: Vec<HyperlinkParam>) -> Self {
        self.with_hyperlink(Hyperlink::new(target, params))
    }

    /// Attaches a hyperlink after validating the target and the parameters.
    ///
    /// # Errors
    ///
    /// [`StyleError::Hyperlink`](crate::StyleError::Hyperlink) when the target or
    /// a parameter contains bytes OSC 8 does not allow.
    pub fn checked_hyperlink(
        self,
        target: impl Into<String>,
        params: Vec<HyperlinkParam>,
    ) -> StyleResult<Self> {
        Ok(self.with_hyperlink(Hyperlink::checked(target, params)?))
    }

    /// Attaches an existing hyperlink, replacing any previous one.
    #[must_use]
    pub fn with_hyperlink(mut self, link: impl Into<Arc<Hyperlink>>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Drops attributes, colors and the hyperlink.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.color = Color::empty();
        self.tail = Color::empty();
        self.link = None;
        self
    }

    /// Drops attributes and colors, keeps the hyperlink.
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.color = Color::empty();
        self.tail = Color::empty();
        self
    }

    /// Same value with a different configuration.
    #[must_use]
    pub fn configure(mut self, config: Arc<Config>) -> Self {
        self.config = config;
        self
    }

    /// Converts the wrapped value, keeping style, hyperlink and configuration.
    pub fn map<U, F>(self, f: F) -> Value<U>
    where
        F: FnOnce(T) -> U,
    {
        Value {
            value: f(self.value),
            color: self.color,
            tail: self.tail,
            link: self.link,
            config: self.config,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Style restored after this value when it is nested in a styled template.
    /// Empty unless set by [`sprintf`](crate::sprintf()).
    pub fn tail(&self) -> Color {
        self.tail
    }

    pub fn hyperlink_target(&self) -> &str {
        self.link.as_deref().map_or("", Hyperlink::target)
    }

    pub fn hyperlink_params(&self) -> &[HyperlinkParam] {
        match self.link.as_deref() {
            Some(link) => link.params(),
            None => &[],
        }
    }

    pub fn link(&self) -> Option<&Hyperlink> {
        self.link.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether displaying this value writes SGR sequences.
    pub fn emits_color(&self) -> bool {
        self.config.colors && !self.color.is_empty()
    }

    pub(crate) fn set_tail(&mut self, tail: Color) {
        self.tail = tail;
    }

    /// Writes the escape sequences around whatever `content` writes.
    pub(crate) fn write_with<W, F>(&self, writer: &mut W, content: F) -> fmt::Result
    where
        W: fmt::Write,
        F: FnOnce(&mut W, Content<'_, T>) -> fmt::Result,
    {
        let link = self.link.as_deref().filter(|link| link.exists());
        let linked = link.filter(|_| self.config.hyperlinks);
        let colored = self.emits_color();
        let tailed = !self.tail.is_empty();

        if let Some(link) = linked {
            link.write_head(writer)?;
        }
        if colored {
            self.color.write_sgr(writer, tailed)?;
        }
        match link {
            Some(link) if linked.is_none() => content(writer, Content::Target(link.target()))?,
            _ => content(writer, Content::Value(&self.value))?,
        }
        if colored {
            if tailed {
                self.tail.write_resume(writer)?;
            } else {
                write_reset(writer)?;
            }
        }
        if let Some(link) = linked {
            link.write_tail(writer)?;
        }
        Ok(())
    }
}

/// Conversion into a [`Value`] used by [`wrap`] and the [`Colorizer`](crate::Colorizer)
/// constructors.
///
/// Plain payloads are wrapped with the given configuration. A [`Value`] is
/// returned as it is, so wrapping it again never nests escape sequences.
/// Implement this for your own [`Display`](fmt::Display) types, or use
/// [`Value::new`] directly.
pub trait IntoValue {
    type Payload;

    fn into_value(self, config: Arc<Config>) -> Value<Self::Payload>;
}

impl<T> IntoValue for Value<T> {
    type Payload = T;

    fn into_value(self, _config: Arc<Config>) -> Value<T> {
        self
    }
}

macro_rules! into_value {
    (<$lt:lifetime> $($ty:ty),+) => {
        $(
            impl<$lt> IntoValue for $ty {
                type Payload = $ty;

                fn into_value(self, config: Arc<Config>) -> Value<$ty> {
                    Value::with_config(self, config)
                }
            }
        )+
    };
    ($($ty:ty),+) => {
        $(
            impl IntoValue for $ty {
                type Payload = $ty;

                fn into_value(self, config: Arc<Config>) -> Value<$ty> {
                    Value::with_config(self, config)
                }
            }
        )+
    };
}

into_value!(bool, char, f32, f64, String);
into_value!(<'a> &'a str, &'a String, Cow<'a, str>);
into_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Wraps a value using the default configuration. A [`Value`] passed in keeps
/// its style and configuration.
pub fn wrap<V: IntoValue>(value: V) -> Value<V::Payload> {
    value.into_value(default_colorizer().shared_config())
}

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |f, content| match content {
            Content::Value(value) => fmt::Display::fmt(value, f),
            Content::Target(target) => fmt::Display::fmt(target, f),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled<T>(value: T) -> Value<T> {
        Value::with_config(value, Arc::new(Config::new()))
    }

    #[test]
    fn test_plain_value() {
        let value = enabled("text");
        assert_eq!(value.to_string(), "text");
        assert!(value.color().is_empty());
        assert!(value.tail().is_empty());
        assert_eq!(value.hyperlink_target(), "");
        assert!(value.hyperlink_params().is_empty());
    }

    #[test]
    fn test_styled_value() {
        let value = enabled("text").bold().fg(BasicColor::Red);
        assert_eq!(value.to_string(), "\x1b[1;31mtext\x1b[0m");
        assert_eq!(*value.value(), "text");
    }

    #[test]
    fn test_setters_delegate() {
        let value = enabled(1).faint().bold().bg_gray(30).fg_index(99);
        assert_eq!(
            value.color(),
            Color::empty().bold().bg_gray(23).fg_index(99)
        );
        let value = value.unset(Color::BOLD).clear_bg().clear_fg();
        assert!(value.color().is_empty());
    }

    #[test]
    fn test_colorize_replaces() {
        let value = enabled(1).bold().colorize(Color::empty().italic());
        assert_eq!(value.color(), Color::ITALIC);
    }

    #[test]
    fn test_formatter_options_reach_value() {
        let value = enabled(3.14159).fg(BasicColor::Blue);
        assert_eq!(format!("{:>7.2}", value), "\x1b[34m   3.14\x1b[0m");
        assert_eq!(format!("{:<6}|", enabled("ab").italic()), "\x1b[3mab    \x1b[0m|");
    }

    #[test]
    fn test_tail_resumes() {
        let mut value = enabled(3).fg(BasicColor::Blue);
        value.set_tail(Color::empty().fg(BasicColor::Red));
        assert_eq!(value.to_string(), "\x1b[0;34m3\x1b[0;31m");
    }

    #[test]
    fn test_hyperlink() {
        let value = enabled("docs")
            .hyperlink("http://example.com", vec![HyperlinkParam::id("1")])
            .underline();
        assert_eq!(
            value.to_string(),
            "\x1b]8;id=1;http://example.com\x1b\\\x1b[4mdocs\x1b[0m\x1b]8;;\x1b\\"
        );
        assert_eq!(value.hyperlink_target(), "http://example.com");
        assert_eq!(value.hyperlink_params(), &[HyperlinkParam::id("1")]);
    }

    #[test]
    fn test_hyperlink_replaced() {
        let value = enabled("x")
            .hyperlink("a", vec![HyperlinkParam::new("k", "v")])
            .hyperlink("b", vec![]);
        assert_eq!(value.hyperlink_target(), "b");
        assert!(value.hyperlink_params().is_empty());
    }

    #[test]
    fn test_empty_target_not_written() {
        let value = enabled("x").hyperlink("", vec![]);
        assert_eq!(value.to_string(), "x");
    }

    #[test]
    fn test_checked_hyperlink() {
        assert!(enabled("x").checked_hyperlink("http://a", vec![]).is_ok());
        assert!(enabled("x").checked_hyperlink("http://a\nb", vec![]).is_err());
        assert!(
            enabled("x")
                .checked_hyperlink("http://a", vec![HyperlinkParam::new("k", "a;b")])
                .is_err()
        );
    }

    #[test]
    fn test_reset_and_clear() {
        let value = enabled("x").bold().hyperlink("http://a", vec![]);
        let cleared = value.clone().clear();
        assert!(cleared.color().is_empty());
        assert_eq!(cleared.hyperlink_target(), "http://a");

        let reset = value.reset();
        assert!(reset.color().is_empty());
        assert_eq!(reset.hyperlink_target(), "");
        assert_eq!(reset.clone().reset(), reset);
        assert_eq!(reset.to_string(), "x");
    }

    #[test]
    fn test_colors_disabled() {
        let config = Arc::new(Config::new().with_colors(false));
        let value = Value::with_config("x", config).bold().fg(BasicColor::Red);
        assert_eq!(value.to_string(), "x");
        assert_eq!(value.color(), Color::empty().bold().fg(BasicColor::Red));
        assert!(!value.emits_color());
    }

    #[test]
    fn test_hyperlinks_disabled() {
        let config = Arc::new(Config::new().with_hyperlinks(false));
        let value = Value::with_config("docs", config)
            .hyperlink("http://example.com", vec![])
            .bold();
        assert_eq!(value.to_string(), "\x1b[1mhttp://example.com\x1b[0m");

        let value = value.configure(Arc::new(Config::disabled()));
        assert_eq!(format!("{:>20}", value), "  http://example.com");
    }

    #[test]
    fn test_wrap_keeps_existing_value() {
        let config = Arc::new(Config::disabled());
        let value = wrap(Value::with_config("x", Arc::clone(&config)).bold());
        assert_eq!(value.color(), Color::BOLD);
        assert_eq!(*value.config(), Config::disabled());
        assert_eq!(value.to_string(), "x");
        assert_eq!(*wrap(Cow::Borrowed("y")).value(), "y");
    }

    #[test]
    fn test_map_keeps_style() {
        let value = enabled(7).italic().hyperlink("t", vec![]).map(|n| n * 6);
        assert_eq!(*value.value(), 42);
        assert_eq!(value.color(), Color::ITALIC);
        assert_eq!(value.hyperlink_target(), "t");
        assert_eq!(value.into_inner(), 42);
    }
}
