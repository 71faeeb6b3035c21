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

use crate::Color;
use crate::consts::{CSI, MAX_PARAMS_LENGTH, RESET};
use bytes::BufMut;
use std::fmt;

/// Text attribute codes in emission order.
///
/// Bold and faint, slow and rapid blink are handled separately since only one
/// member of each pair is written.
const FORMAT_CODES: [(Color, &[u8]); 10] = [
    (Color::ITALIC, b"3"),
    (Color::UNDERLINE, b"4"),
    (Color::REVERSE, b"7"),
    (Color::CONCEAL, b"8"),
    (Color::CROSSED_OUT, b"9"),
    (Color::FRAKTUR, b"20"),
    (Color::DOUBLY_UNDERLINE, b"21"),
    (Color::FRAMED, b"51"),
    (Color::ENCIRCLED, b"52"),
    (Color::OVERLINED, b"53"),
];

/// Semicolon joined parameter list being written into a buffer.
struct Params<'a, B: BufMut> {
    dst: &'a mut B,
    empty: bool,
}

impl<'a, B: BufMut> Params<'a, B> {
    fn new(dst: &'a mut B) -> Self {
        Self { dst, empty: true }
    }

    fn separate(&mut self) {
        if !self.empty {
            self.dst.put_u8(b';');
        }
        self.empty = false;
    }

    fn push(&mut self, code: &[u8]) {
        self.separate();
        self.dst.put_slice(code);
    }

    fn push_number(&mut self, number: u8) {
        self.separate();
        if number >= 100 {
            self.dst.put_u8(b'0' + number / 100);
        }
        if number >= 10 {
            self.dst.put_u8(b'0' + number / 10 % 10);
        }
        self.dst.put_u8(b'0' + number % 10);
    }

    /// `base + n` for basic, `bright + n - 8` for bright, `extended;5;n` otherwise.
    fn push_color(&mut self, byte: u8, base: u8, bright: u8, extended: &[u8]) {
        match byte {
            0..=7 => self.push_number(base + byte),
            8..=15 => self.push_number(bright + (byte & !Color::BRIGHT_BIT)),
            _ => {
                self.push(extended);
                self.push(b"5");
                self.push_number(byte);
            }
        }
    }
}

/// Appends the SGR parameters of `color` to `dst`, without `ESC [` and `m`.
///
/// Parameters are written in a fixed order and joined by `;`:
///
/// | Order | Parameters                                               |
/// |-------|----------------------------------------------------------|
/// | 1     | `0` when `zero` is set                                   |
/// | 2     | `1` (bold) or else `2` (faint)                           |
/// | 3     | `3`, `4`, `5` (slow blink) or else `6`, `7`, `8`, `9`    |
/// | 4     | `20`, `21`                                               |
/// | 5     | `51`, `52`, `53`                                         |
/// | 6     | foreground `30-37`, `90-97` or `38;5;n`                  |
/// | 7     | background `40-47`, `100-107` or `48;5;n`                |
///
/// An empty set writes nothing, or `0` when `zero` is set. At most
/// [`MAX_PARAMS_LENGTH`] bytes are written.
pub fn append_nos<B: BufMut>(color: Color, dst: &mut B, zero: bool) {
    let mut params = Params::new(dst);
    if zero {
        params.push(b"0");
    }
    if color.contains(Color::BOLD) {
        params.push(b"1");
    } else if color.contains(Color::FAINT) {
        params.push(b"2");
    }
    for (flag, code) in FORMAT_CODES {
        // blink sits between underline and reverse
        if flag == Color::REVERSE {
            if color.contains(Color::SLOW_BLINK) {
                params.push(b"5");
            } else if color.contains(Color::RAPID_BLINK) {
                params.push(b"6");
            }
        }
        if color.contains(flag) {
            params.push(code);
        }
    }
    if let Some(byte) = color.foreground() {
        params.push_color(byte, 30, 90, b"38");
    }
    if let Some(byte) = color.background() {
        params.push_color(byte, 40, 100, b"48");
    }
}

/// Writes `ESC [ params m` for `color`, or nothing when there are no parameters.
pub fn write_sgr<W: fmt::Write>(writer: &mut W, color: Color, zero: bool) -> fmt::Result {
    let mut buffer = [0u8; MAX_PARAMS_LENGTH];
    let mut remaining = &mut buffer[..];
    append_nos(color, &mut remaining, zero);
    let length = MAX_PARAMS_LENGTH - remaining.len();
    if length == 0 {
        return Ok(());
    }
    let params = std::str::from_utf8(&buffer[..length]).map_err(|_| fmt::Error)?;
    writer.write_str(CSI)?;
    writer.write_str(params)?;
    writer.write_char('m')
}

/// Writes `ESC [ 0 m`.
pub fn write_reset<W: fmt::Write>(writer: &mut W) -> fmt::Result {
    writer.write_str(RESET)
}

impl Color {
    /// SGR parameters as a string, see [`append_nos`].
    pub fn nos(self, zero: bool) -> String {
        let mut params = Vec::with_capacity(MAX_PARAMS_LENGTH);
        append_nos(self, &mut params, zero);
        params.into_iter().map(char::from).collect()
    }

    /// Writes the sequence that applies this set, `zero` prepends a full reset.
    pub fn write_sgr<W: fmt::Write>(self, writer: &mut W, zero: bool) -> fmt::Result {
        write_sgr(writer, self, zero)
    }

    /// Writes the sequence that restores this set after a nested value:
    /// `ESC [ 0 ; params m`, or `ESC [ 0 m` for an empty set.
    pub fn write_resume<W: fmt::Write>(self, writer: &mut W) -> fmt::Result {
        write_sgr(writer, self, true)
    }
}

/// The full sequence, `ESC [ params m`, empty for an empty set.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sgr(f, *self, false)
    }
}
