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

use crate::{Arg, Color, Config, IntoValue, Setting, StyleError, StyleResult, Value, sprintf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

static DEFAULT: OnceLock<Colorizer> = OnceLock::new();

/// Creates styled values that share one [`Config`].
///
/// ```rust
/// use tinct_ansistyle::{BasicColor, Colorizer, Config};
///
/// let plain = Colorizer::new(Config::disabled());
/// assert_eq!(plain.wrap("ok").fg(BasicColor::Green).to_string(), "ok");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Colorizer {
    config: Arc<Config>,
}

impl Colorizer {
    pub fn new(config: Config) -> Colorizer {
        Colorizer {
            config: Arc::new(config),
        }
    }

    /// Colorizer for the default configuration with the given settings applied.
    pub fn with_settings<I>(settings: I) -> Colorizer
    where
        I: IntoIterator<Item = Setting>,
    {
        let mut config = Config::new();
        config.apply(settings);
        Colorizer::new(config)
    }

    /// Colorizer configured from the environment, see [`Config::from_env`].
    pub fn from_env() -> Colorizer {
        Colorizer::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn shared_config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    /// Wraps a value with this colorizer's configuration. A [`Value`] passed in
    /// keeps its style and moves to this configuration.
    pub fn wrap<V: IntoValue>(&self, value: V) -> Value<V::Payload> {
        value
            .into_value(self.shared_config())
            .configure(self.shared_config())
    }

    /// Wraps a value with an attribute set. The style of a [`Value`] passed in
    /// is replaced, not merged.
    pub fn colorize<V: IntoValue>(&self, value: V, color: Color) -> Value<V::Payload> {
        self.wrap(value).colorize(color)
    }

    /// [`sprintf`](crate::sprintf()) with the template and every styled
    /// argument moved to this colorizer's configuration.
    pub fn sprintf<T, I>(&self, template: T, args: I) -> String
    where
        T: Into<Arg>,
        I: IntoIterator<Item = Arg>,
    {
        let template: Arg = template.into();
        let template = template.configure(&self.config);
        let args = args.into_iter().map(|arg| arg.configure(&self.config));
        sprintf(template, args)
    }
}

impl From<Config> for Colorizer {
    fn from(config: Config) -> Self {
        Colorizer::new(config)
    }
}

/// Installs the process wide default colorizer used by [`Value::new`].
///
/// # Errors
///
/// [`StyleError::DefaultAlreadySet`] if a default was installed before, or was
/// already read and therefore initialized with [`Config::default`].
pub fn set_default(colorizer: Colorizer) -> StyleResult<()> {
    let config = *colorizer.config();
    DEFAULT.set(colorizer).map_err(|_| {
        warn!(?config, "Default colorizer already set");
        StyleError::DefaultAlreadySet
    })?;
    debug!(?config, "Default colorizer installed");
    Ok(())
}

/// The process wide default colorizer, initialized with [`Config::default`] on
/// first use unless [`set_default`] ran before.
pub fn default_colorizer() -> &'static Colorizer {
    DEFAULT.get_or_init(|| {
        debug!("Default colorizer initialized with default configuration");
        Colorizer::default()
    })
}

/// Replaces the attribute set of a value. Plain values are wrapped with the
/// default configuration; a [`Value`] keeps its own.
pub fn colorize<V: IntoValue>(value: V, color: Color) -> Value<V::Payload> {
    value
        .into_value(default_colorizer().shared_config())
        .colorize(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BasicColor;

    #[test]
    fn test_wrap_shares_config() {
        let colorizer = Colorizer::new(Config::new().with_hyperlinks(false));
        let a = colorizer.wrap(1);
        let b = colorizer.wrap("b");
        assert_eq!(a.config(), b.config());
        assert!(!a.config().hyperlinks);
    }

    #[test]
    fn test_colorize() {
        let colorizer = Colorizer::default();
        let value = colorizer.colorize("x", Color::empty().fg(BasicColor::Yellow));
        assert_eq!(value.to_string(), "\x1b[33mx\x1b[0m");
    }

    #[test]
    fn test_colorize_replaces_existing_style() {
        let styled = Value::with_config("x", Arc::new(Config::new()))
            .bold()
            .fg(BasicColor::Red);
        assert_eq!(colorize(styled.clone(), Color::ITALIC).to_string(), "\x1b[3mx\x1b[0m");
        assert_eq!(
            Colorizer::default().colorize(styled.clone(), Color::ITALIC).to_string(),
            "\x1b[3mx\x1b[0m"
        );

        let disabled = Colorizer::new(Config::disabled());
        assert_eq!(disabled.wrap(styled).to_string(), "x");
    }

    #[test]
    fn test_with_settings() {
        let colorizer = Colorizer::with_settings([Setting::Colors(false)]);
        assert_eq!(*colorizer.config(), Config::new().with_colors(false));
        assert_eq!(Colorizer::from(Config::disabled()).config(), &Config::disabled());
    }

    #[test]
    fn test_disabled_colorizer_sprintf() {
        let enabled = Colorizer::default();
        let disabled = Colorizer::new(Config::disabled());
        let template = enabled.wrap("%s and %d").bold();
        let args = [
            Arg::from(enabled.wrap("x").fg(BasicColor::Red)),
            Arg::from(enabled.wrap(2).italic()),
        ];
        assert_eq!(disabled.sprintf(template, args), "x and 2");
    }
}
