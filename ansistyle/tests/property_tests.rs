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

//! Property tests for attribute sets and composition

use proptest::prelude::*;
use std::sync::Arc;
use tinct_ansistyle::{Arg, BasicColor, Color, Config, Value, sprintf};

fn basic_color() -> impl Strategy<Value = BasicColor> {
    (0u8..8).prop_map(|n| BasicColor::ALL[n as usize])
}

fn any_color() -> impl Strategy<Value = Color> {
    any::<u32>().prop_map(Color::from_bits_retain)
}

/// Attribute sets reachable through the setters.
fn built_color() -> impl Strategy<Value = Color> {
    (any::<u16>(), proptest::option::of(any::<u8>()), proptest::option::of(any::<u8>())).prop_map(
        |(formats, fg, bg)| {
            let mut color = Color::empty().with_formats(Color::from_bits_retain(formats as u32));
            if let Some(fg) = fg {
                color = color.fg_index(fg);
            }
            if let Some(bg) = bg {
                color = color.bg_index(bg);
            }
            color
        },
    )
}

fn enabled<T>(value: T) -> Value<T> {
    Value::with_config(value, Arc::new(Config::new()))
}

proptest! {
    #[test]
    fn reset_always_empty(color in any_color()) {
        prop_assert!(color.reset().is_empty());
        prop_assert_eq!(color.reset().reset(), color.reset());
    }

    #[test]
    fn foreground_replaces(a in basic_color(), b in basic_color(), formats in any::<u16>()) {
        let base = Color::from_bits_retain(formats as u32 & Color::FORMAT_MASK);
        prop_assert_eq!(base.fg(a).fg(b), base.fg(b));
        prop_assert_eq!(base.bg(a).bg(b), base.bg(b));
        prop_assert_eq!(base.fg_index(a as u8).bright_fg(b).foreground(), Some(b as u8 + 8));
    }

    #[test]
    fn pairs_stay_exclusive(color in built_color()) {
        prop_assert!(!color.contains(Color::BOLD | Color::FAINT));
        prop_assert!(!color.contains(Color::UNDERLINE | Color::DOUBLY_UNDERLINE));
        prop_assert!(!color.contains(Color::SLOW_BLINK | Color::RAPID_BLINK));
        prop_assert_eq!(color.bold().faint().formats() & Color::BOLD, Color::empty());
        prop_assert_eq!(
            color.underline().doubly_underline().formats() & Color::UNDERLINE,
            Color::empty()
        );
    }

    #[test]
    fn gray_clamps(gray in 23u8..) {
        prop_assert_eq!(Color::empty().fg_gray(gray), Color::empty().fg_gray(23));
        prop_assert_eq!(Color::empty().bg_gray(gray).background(), Some(255));
    }

    #[test]
    fn zero_prefix(color in any_color()) {
        let plain = color.nos(false);
        let zero = color.nos(true);
        if plain.is_empty() {
            prop_assert_eq!(zero, "0");
        } else {
            prop_assert_eq!(zero, format!("0;{plain}"));
        }
    }

    #[test]
    fn tailed_argument_resumes_template(
        template_color in built_color(),
        arg_color in built_color(),
        n in any::<i64>(),
    ) {
        prop_assume!(!template_color.is_empty() && !arg_color.is_empty());
        let template = enabled("<%d>").colorize(template_color);
        let arg = enabled(n).colorize(arg_color);
        let expected = format!(
            "\x1b[{}m<\x1b[{}m{}\x1b[{}m>\x1b[0m",
            template_color.nos(false),
            arg_color.nos(true),
            n,
            template_color.nos(true),
        );
        prop_assert_eq!(sprintf(template, [Arg::from(arg)]), expected);
    }

    #[test]
    fn plain_arguments_untouched(color in built_color(), s in "[a-z ]{0,12}", n in any::<u32>()) {
        prop_assume!(!color.is_empty());
        let template = enabled("%s|%d").colorize(color);
        let expected = format!("\x1b[{}m{}|{}\x1b[0m", color.nos(false), s, n);
        prop_assert_eq!(sprintf(template, [Arg::from(s.as_str()), Arg::from(n)]), expected);
    }

    #[test]
    fn disabled_colors_print_payload(color in any_color(), s in "[^%]{0,16}") {
        let value = Value::with_config(s.clone(), Arc::new(Config::disabled())).colorize(color);
        prop_assert_eq!(value.to_string(), s.clone());
        prop_assert_eq!(value.color(), color);
    }
}
