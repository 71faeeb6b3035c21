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

/// Environment variable that turns colors off when set to a non-empty value.
///
/// See <https://no-color.org>.
pub const NO_COLOR: &str = "NO_COLOR";

/// Output switches shared by every value a [`Colorizer`](crate::Colorizer)
/// creates.
///
/// When colors are off attributes are still recorded on values but no SGR
/// sequence is written. When hyperlinks are off no OSC 8 sequence is written and
/// the link target is printed in place of the value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Config {
    /// Write SGR sequences
    pub colors: bool,
    /// Write OSC 8 hyperlinks
    pub hyperlinks: bool,
}

/// A single configuration switch, see [`Config::apply`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Setting {
    /// Turn SGR sequences on or off
    Colors(bool),
    /// Turn OSC 8 hyperlinks on or off
    Hyperlinks(bool),
}

impl Config {
    /// Colors and hyperlinks on.
    pub const fn new() -> Config {
        Config {
            colors: true,
            hyperlinks: true,
        }
    }

    /// Colors and hyperlinks off, values print as plain text.
    pub const fn disabled() -> Config {
        Config {
            colors: false,
            hyperlinks: false,
        }
    }

    pub const fn with_colors(mut self, enabled: bool) -> Config {
        self.colors = enabled;
        self
    }

    pub const fn with_hyperlinks(mut self, enabled: bool) -> Config {
        self.hyperlinks = enabled;
        self
    }

    /// Applies settings in order, later settings win.
    pub fn apply<I>(&mut self, settings: I)
    where
        I: IntoIterator<Item = Setting>,
    {
        for setting in settings {
            match setting {
                Setting::Colors(enabled) => self.colors = enabled,
                Setting::Hyperlinks(enabled) => self.hyperlinks = enabled,
            }
        }
    }

    /// The settings that rebuild this configuration when applied.
    pub fn settings(&self) -> [Setting; 2] {
        [
            Setting::Colors(self.colors),
            Setting::Hyperlinks(self.hyperlinks),
        ]
    }

    /// Default configuration with colors off when `NO_COLOR` is set and not
    /// empty.
    pub fn from_env() -> Config {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let no_color = lookup(NO_COLOR).is_some_and(|value| !value.is_empty());
        Config::new().with_colors(!no_color)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Setting> for Config {
    fn from(setting: Setting) -> Self {
        let mut config = Config::new();
        config.apply([setting]);
        config
    }
}
