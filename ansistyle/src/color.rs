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

use bitflags::bitflags;

bitflags! {
    /// Packed style state: text attributes, foreground and background.
    ///
    /// A `Color` is a single `u32`. Every mutator consumes the set and returns a
    /// new one, so building a style reads as a chain:
    ///
    /// ```rust
    /// use tinct_ansistyle::{BasicColor, Color};
    ///
    /// let warning = Color::empty().bold().fg(BasicColor::Yellow).bg_index(236);
    /// assert_eq!(warning.nos(false), "1;33;48;5;236");
    /// ```
    ///
    /// # Bit Layout
    ///
    /// | Bits    | Meaning                                              |
    /// |---------|------------------------------------------------------|
    /// | `0-13`  | Text attributes, one bit each                        |
    /// | `14`    | Foreground present ([`Color::FG_PRESENT`])           |
    /// | `15`    | Background present ([`Color::BG_PRESENT`])           |
    /// | `16-23` | Foreground palette byte ([`Color::FG_SHIFT`])        |
    /// | `24-31` | Background palette byte ([`Color::BG_SHIFT`])        |
    ///
    /// A palette byte of `0-7` is a [`BasicColor`], `8-15` its bright variant and
    /// `16-255` an entry of the 256 color palette. Presence is kept apart from the
    /// byte so that black (`0`) is distinct from "no color".
    ///
    /// # Mutual Exclusion
    ///
    /// Bold and faint, underline and doubly underline, slow and rapid blink are
    /// pairs. Setting one member of a pair clears the other.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Color: u32 {
        /// Bold or increased intensity (SGR `1`)
        const BOLD = 1 << 0;
        /// Faint or decreased intensity (SGR `2`)
        const FAINT = 1 << 1;
        /// Italic (SGR `3`)
        const ITALIC = 1 << 2;
        /// Single underline (SGR `4`)
        const UNDERLINE = 1 << 3;
        /// Slow blink, less than 150 per minute (SGR `5`)
        const SLOW_BLINK = 1 << 4;
        /// Rapid blink, 150 per minute or more (SGR `6`)
        const RAPID_BLINK = 1 << 5;
        /// Swap foreground and background (SGR `7`)
        const REVERSE = 1 << 6;
        /// Conceal (SGR `8`)
        const CONCEAL = 1 << 7;
        /// Crossed out (SGR `9`)
        const CROSSED_OUT = 1 << 8;
        /// Fraktur (SGR `20`)
        const FRAKTUR = 1 << 9;
        /// Double underline (SGR `21`)
        const DOUBLY_UNDERLINE = 1 << 10;
        /// Framed (SGR `51`)
        const FRAMED = 1 << 11;
        /// Encircled (SGR `52`)
        const ENCIRCLED = 1 << 12;
        /// Overlined (SGR `53`)
        const OVERLINED = 1 << 13;

        /// A foreground byte is set.
        const FG_PRESENT = 1 << 14;
        /// A background byte is set.
        const BG_PRESENT = 1 << 15;

        const _ = !0;
    }
}

impl Color {
    /// Alias of [`Color::SLOW_BLINK`]
    pub const BLINK: Self = Self::SLOW_BLINK;
    /// Alias of [`Color::REVERSE`]
    pub const INVERSE: Self = Self::REVERSE;
    /// Alias of [`Color::CONCEAL`]
    pub const HIDDEN: Self = Self::CONCEAL;
    /// Alias of [`Color::CROSSED_OUT`]
    pub const STRIKE_THROUGH: Self = Self::CROSSED_OUT;

    /// Mask over the fourteen text attribute bits.
    pub const FORMAT_MASK: u32 = (1 << 14) - 1;
    /// Shift of the foreground palette byte.
    pub const FG_SHIFT: u32 = 16;
    /// Shift of the background palette byte.
    pub const BG_SHIFT: u32 = 24;
    /// Mask over the foreground byte and its presence flag.
    pub const FG_MASK: u32 = (0xFF << Self::FG_SHIFT) | Self::FG_PRESENT.bits();
    /// Mask over the background byte and its presence flag.
    pub const BG_MASK: u32 = (0xFF << Self::BG_SHIFT) | Self::BG_PRESENT.bits();
    /// Bit of a palette byte turning a basic color into its bright variant.
    pub const BRIGHT_BIT: u8 = 1 << 3;
    /// First palette entry of the grayscale ramp.
    pub const GRAY_BASE: u8 = 232;
    /// Highest grayscale step, `23` maps to palette entry `255`.
    pub const GRAY_MAX: u8 = 23;

    const PAIRS: [(Self, Self); 3] = [
        (Self::BOLD, Self::FAINT),
        (Self::UNDERLINE, Self::DOUBLY_UNDERLINE),
        (Self::SLOW_BLINK, Self::RAPID_BLINK),
    ];

    const fn replace(self, clear: u32, set: u32) -> Self {
        Self::from_bits_retain((self.bits() & !clear) | set)
    }

    const fn with_format(self, flag: Self, counterpart: Self) -> Self {
        self.replace(counterpart.bits(), flag.bits())
    }

    /// Sets bold (SGR `1`), clearing faint.
    pub const fn bold(self) -> Self {
        self.with_format(Self::BOLD, Self::FAINT)
    }

    /// Sets faint (SGR `2`), clearing bold.
    pub const fn faint(self) -> Self {
        self.with_format(Self::FAINT, Self::BOLD)
    }

    /// Sets italic (SGR `3`).
    pub const fn italic(self) -> Self {
        self.with_format(Self::ITALIC, Self::empty())
    }

    /// Sets single underline (SGR `4`), clearing double underline.
    pub const fn underline(self) -> Self {
        self.with_format(Self::UNDERLINE, Self::DOUBLY_UNDERLINE)
    }

    /// Sets double underline (SGR `21`), clearing single underline.
    pub const fn doubly_underline(self) -> Self {
        self.with_format(Self::DOUBLY_UNDERLINE, Self::UNDERLINE)
    }

    /// Sets slow blink (SGR `5`), clearing rapid blink.
    pub const fn slow_blink(self) -> Self {
        self.with_format(Self::SLOW_BLINK, Self::RAPID_BLINK)
    }

    /// Sets rapid blink (SGR `6`), clearing slow blink.
    pub const fn rapid_blink(self) -> Self {
        self.with_format(Self::RAPID_BLINK, Self::SLOW_BLINK)
    }

    /// Same as [`Color::slow_blink`]
    pub const fn blink(self) -> Self {
        self.slow_blink()
    }

    /// Swaps foreground and background (SGR `7`).
    pub const fn reverse(self) -> Self {
        self.with_format(Self::REVERSE, Self::empty())
    }

    /// Same as [`Color::reverse`]
    pub const fn inverse(self) -> Self {
        self.reverse()
    }

    /// Hides the text (SGR `8`).
    pub const fn conceal(self) -> Self {
        self.with_format(Self::CONCEAL, Self::empty())
    }

    /// Same as [`Color::conceal`]
    pub const fn hidden(self) -> Self {
        self.conceal()
    }

    /// Draws a line through the text (SGR `9`).
    pub const fn crossed_out(self) -> Self {
        self.with_format(Self::CROSSED_OUT, Self::empty())
    }

    /// Same as [`Color::crossed_out`]
    pub const fn strike_through(self) -> Self {
        self.crossed_out()
    }

    /// Sets the Fraktur font (SGR `20`). Rarely supported.
    pub const fn fraktur(self) -> Self {
        self.with_format(Self::FRAKTUR, Self::empty())
    }

    /// Sets framed (SGR `51`).
    pub const fn framed(self) -> Self {
        self.with_format(Self::FRAMED, Self::empty())
    }

    /// Sets encircled (SGR `52`).
    pub const fn encircled(self) -> Self {
        self.with_format(Self::ENCIRCLED, Self::empty())
    }

    /// Sets overlined (SGR `53`).
    pub const fn overlined(self) -> Self {
        self.with_format(Self::OVERLINED, Self::empty())
    }

    /// Sets every text attribute in `flags`.
    ///
    /// Generic form of the named setters. Unlike the bitflags `insert` and `set`
    /// it keeps pairs exclusive: flags are applied one at a time in bit order,
    /// each clearing its counterpart first. If both members of a pair are given the higher bit
    /// wins, e.g. `FAINT` over `BOLD`. Color bits in `flags` are ignored.
    pub const fn with_formats(self, flags: Self) -> Self {
        let flags = flags.bits() & Self::FORMAT_MASK;
        let mut color = self.bits();
        let mut bit = 0;
        while bit < 14 {
            let flag = 1 << bit;
            if flags & flag != 0 {
                let mut pair = 0;
                while pair < Self::PAIRS.len() {
                    let (a, b) = Self::PAIRS[pair];
                    if a.bits() == flag {
                        color &= !b.bits();
                    } else if b.bits() == flag {
                        color &= !a.bits();
                    }
                    pair += 1;
                }
                color |= flag;
            }
            bit += 1;
        }
        Self::from_bits_retain(color)
    }

    /// Clears every text attribute in `flags`. Color bits in `flags` are ignored.
    pub const fn without_formats(self, flags: Self) -> Self {
        self.replace(flags.bits() & Self::FORMAT_MASK, 0)
    }

    const fn fg_byte(self, byte: u8) -> Self {
        self.replace(
            Self::FG_MASK,
            ((byte as u32) << Self::FG_SHIFT) | Self::FG_PRESENT.bits(),
        )
    }

    const fn bg_byte(self, byte: u8) -> Self {
        self.replace(
            Self::BG_MASK,
            ((byte as u32) << Self::BG_SHIFT) | Self::BG_PRESENT.bits(),
        )
    }

    const fn gray_byte(gray: u8) -> u8 {
        let gray = if gray > Self::GRAY_MAX { Self::GRAY_MAX } else { gray };
        Self::GRAY_BASE + gray
    }

    /// Replaces the foreground with a basic color.
    pub const fn fg(self, color: BasicColor) -> Self {
        self.fg_byte(color as u8)
    }

    /// Replaces the foreground with the bright variant of a basic color.
    pub const fn bright_fg(self, color: BasicColor) -> Self {
        self.fg_byte(color as u8 | Self::BRIGHT_BIT)
    }

    /// Replaces the foreground with an entry of the 256 color palette.
    pub const fn fg_index(self, index: u8) -> Self {
        self.fg_byte(index)
    }

    /// Replaces the foreground with a grayscale step from `0` (dark) to `23`
    /// (light). Steps above `23` are clamped.
    pub const fn fg_gray(self, gray: u8) -> Self {
        self.fg_byte(Self::gray_byte(gray))
    }

    /// Replaces the background with a basic color.
    pub const fn bg(self, color: BasicColor) -> Self {
        self.bg_byte(color as u8)
    }

    /// Replaces the background with the bright variant of a basic color.
    pub const fn bright_bg(self, color: BasicColor) -> Self {
        self.bg_byte(color as u8 | Self::BRIGHT_BIT)
    }

    /// Replaces the background with an entry of the 256 color palette.
    pub const fn bg_index(self, index: u8) -> Self {
        self.bg_byte(index)
    }

    /// Replaces the background with a grayscale step, clamped to `0..=23`.
    pub const fn bg_gray(self, gray: u8) -> Self {
        self.bg_byte(Self::gray_byte(gray))
    }

    /// Removes the foreground.
    pub const fn clear_fg(self) -> Self {
        self.replace(Self::FG_MASK, 0)
    }

    /// Removes the background.
    pub const fn clear_bg(self) -> Self {
        self.replace(Self::BG_MASK, 0)
    }

    /// Removes everything, the result is [`Color::empty`].
    pub const fn reset(self) -> Self {
        Self::empty()
    }

    /// Only the text attribute bits of this set.
    pub const fn formats(self) -> Self {
        Self::from_bits_retain(self.bits() & Self::FORMAT_MASK)
    }

    /// Whether a foreground is set.
    pub const fn has_fg(self) -> bool {
        self.bits() & Self::FG_PRESENT.bits() != 0
    }

    /// Whether a background is set.
    pub const fn has_bg(self) -> bool {
        self.bits() & Self::BG_PRESENT.bits() != 0
    }

    /// Foreground palette byte, if a foreground is set.
    pub const fn foreground(self) -> Option<u8> {
        if self.has_fg() {
            Some((self.bits() >> Self::FG_SHIFT) as u8)
        } else {
            None
        }
    }

    /// Background palette byte, if a background is set.
    pub const fn background(self) -> Option<u8> {
        if self.has_bg() {
            Some((self.bits() >> Self::BG_SHIFT) as u8)
        } else {
            None
        }
    }
}

/// The eight basic terminal colors.
///
/// The discriminant is the palette byte, so `BasicColor::Red as u8 == 1`. Use
/// [`Color::bright_fg`] and [`Color::bright_bg`] for the bright variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum BasicColor {
    /// Black - Color #0 (FG `30`, BG `40`).
    Black = 0,
    /// Red - Color #1 (FG `31`, BG `41`).
    Red = 1,
    /// Green - Color #2 (FG `32`, BG `42`).
    Green = 2,
    /// Yellow - Color #3 (FG `33`, BG `43`).
    Yellow = 3,
    /// Blue - Color #4 (FG `34`, BG `44`).
    Blue = 4,
    /// Magenta - Color #5 (FG `35`, BG `45`).
    Magenta = 5,
    /// Cyan - Color #6 (FG `36`, BG `46`).
    Cyan = 6,
    /// White - Color #7 (FG `37`, BG `47`).
    White = 7,
}

impl BasicColor {
    /// Alias of [`BasicColor::Yellow`]
    pub const BROWN: Self = Self::Yellow;

    /// All basic colors in palette order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Converts a palette byte `0..=7` into a basic color.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}
