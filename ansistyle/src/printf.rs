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

//! Positional `%verb` template substitution.
//!
//! Directives have the form `%[flags][width][.precision]verb`:
//!
//! | Part      | Values                                                     |
//! |-----------|------------------------------------------------------------|
//! | flags     | `-` left, `+` sign, `#` alternate, ` ` space, `0` zero pad |
//! | width     | minimum width in characters                                |
//! | precision | string length, float digits or minimum integer digits      |
//! | verb      | `v s q d b o x X c U e E f F g G t`, `%%` is a literal `%` |
//!
//! Problems never fail the call, they are written into the output instead:
//!
//! | Marker                      | Cause                                  |
//! |-----------------------------|----------------------------------------|
//! | `%!d(MISSING)`              | no argument left for the directive     |
//! | `%!z(int=3)`                | verb does not apply to the argument    |
//! | `%!(EXTRA string=x, int=2)` | arguments left over after the template |
//! | `%!(NOVERB)`                | template ends right after `%`          |

use crate::value::Content;
use crate::{Arg, Payload};
use std::fmt::Write;
use tracing::debug;

/// Width and precision beyond this are clamped.
const MAX_WIDTH: usize = 1_000_000;

/// A parsed `%` directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Directive {
    minus: bool,
    plus: bool,
    sharp: bool,
    space: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

impl Directive {
    const fn verb(verb: char) -> Directive {
        Directive {
            minus: false,
            plus: false,
            sharp: false,
            space: false,
            zero: false,
            width: None,
            precision: None,
            verb,
        }
    }

    /// Parses the directive following a `%`, returning it and the bytes consumed.
    fn parse(input: &str) -> Option<(Directive, usize)> {
        let mut directive = Directive::verb('v');
        let mut chars = input.char_indices();
        let mut current = chars.next();

        while let Some((_, c)) = current {
            match c {
                '-' => directive.minus = true,
                '+' => directive.plus = true,
                '#' => directive.sharp = true,
                ' ' => directive.space = true,
                '0' => directive.zero = true,
                _ => break,
            }
            current = chars.next();
        }
        directive.width = Self::number(&mut current, &mut chars);
        if let Some((_, '.')) = current {
            current = chars.next();
            directive.precision = Some(Self::number(&mut current, &mut chars).unwrap_or(0));
        }

        let (index, verb) = current?;
        directive.verb = verb;
        Some((directive, index + verb.len_utf8()))
    }

    fn number(
        current: &mut Option<(usize, char)>,
        chars: &mut std::str::CharIndices<'_>,
    ) -> Option<usize> {
        let mut number = None;
        while let Some(digit) = current.and_then(|(_, c)| c.to_digit(10)) {
            let value: usize = number.unwrap_or(0);
            number = Some(value.saturating_mul(10).saturating_add(digit as usize).min(MAX_WIDTH));
            *current = chars.next();
        }
        number
    }

    fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        }
    }
}

/// Substitutes `args` into `template`.
///
/// ```rust
/// use tinct_ansistyle::{Arg, printf};
///
/// let text = printf("%-5s|%03d|%.2f", &[Arg::from("ab"), Arg::from(7), Arg::from(2.5)]);
/// assert_eq!(text, "ab   |007|2.50");
/// ```
pub fn printf(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len());
    write_printf(&mut out, template, args);
    out
}

/// Substitutes `args` into `template`, appending the result to `out`.
pub fn write_printf(out: &mut String, template: &str, args: &[Arg]) {
    let mut rest = template;
    let mut next = 0;
    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        rest = &rest[start + 1..];
        let Some((directive, consumed)) = Directive::parse(rest) else {
            debug!(template, "Template ends without a verb");
            out.push_str("%!(NOVERB)");
            rest = "";
            break;
        };
        rest = &rest[consumed..];
        if directive.verb == '%' {
            out.push('%');
            continue;
        }
        match args.get(next) {
            Some(arg) => write_arg(out, arg, &directive),
            None => {
                debug!(verb = %directive.verb, "Missing template argument");
                out.push_str("%!");
                out.push(directive.verb);
                out.push_str("(MISSING)");
            }
        }
        next += 1;
    }
    out.push_str(rest);

    if let Some(extra) = args.get(next..).filter(|extra| !extra.is_empty()) {
        debug!(count = extra.len(), "Extra template arguments");
        out.push_str("%!(EXTRA ");
        for (i, arg) in extra.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_typed(out, arg.payload());
        }
        out.push(')');
    }
}

fn write_arg(out: &mut String, arg: &Arg, directive: &Directive) {
    match arg {
        Arg::Plain(payload) => write_payload(out, payload, directive),
        Arg::Styled(value) => {
            // writing into a String cannot fail
            let _ = value.write_with(out, |out, content| {
                match content {
                    Content::Value(payload) => write_payload(out, payload, directive),
                    Content::Target(target) => {
                        write_payload(out, &Payload::Str(target.to_string()), directive)
                    }
                }
                Ok(())
            });
        }
    }
}

/// `type=value`, as used by error markers.
fn write_typed(out: &mut String, payload: &Payload) {
    out.push_str(payload.type_name());
    out.push('=');
    write_payload(out, payload, &Directive::verb('v'));
}

fn write_bad_verb(out: &mut String, payload: &Payload, verb: char) {
    debug!(%verb, kind = payload.type_name(), "Template verb does not apply to argument");
    out.push_str("%!");
    out.push(verb);
    out.push('(');
    write_typed(out, payload);
    out.push(')');
}

fn write_payload(out: &mut String, payload: &Payload, directive: &Directive) {
    let integer = match *payload {
        Payload::Int(n) => Some((n.unsigned_abs(), n < 0)),
        Payload::Uint(n) => Some((n, false)),
        Payload::Char(c) => Some((c as u64, false)),
        _ => None,
    };
    match (directive.verb, payload) {
        ('v' | 't', Payload::Bool(b)) => pad(out, if *b { "true" } else { "false" }, directive),
        ('v', Payload::Int(_) | Payload::Uint(_)) | ('d', _) if integer.is_some() => {
            let (magnitude, negative) = integer.unwrap_or_default();
            write_integer(out, magnitude, negative, 10, directive);
        }
        ('b' | 'o' | 'x' | 'X', _) if integer.is_some() => {
            let (magnitude, negative) = integer.unwrap_or_default();
            let radix = match directive.verb {
                'b' => 2,
                'o' => 8,
                _ => 16,
            };
            write_integer(out, magnitude, negative, radix, directive);
        }
        ('c', _) if integer.is_some() => {
            let c = char_from(code_point(integer));
            pad(out, c.encode_utf8(&mut [0; 4]), directive);
        }
        ('q', _) if integer.is_some() => {
            pad(out, &format!("{:?}", char_from(code_point(integer))), directive);
        }
        ('U', _) if integer.is_some() => {
            let code = code_point(integer);
            let mut text = format!("U+{:04X}", code);
            let c = u32::try_from(code).ok().and_then(char::from_u32);
            if let Some(c) = c
                && directive.sharp
                && !c.is_control()
            {
                let _ = write!(text, " '{}'", c);
            }
            pad(out, &text, directive);
        }
        ('v' | 'e' | 'E' | 'f' | 'F' | 'g' | 'G', Payload::Float(v)) => {
            write_float(out, *v, directive)
        }
        ('v' | 's', Payload::Char(c)) => pad(out, c.encode_utf8(&mut [0; 4]), directive),
        ('v', Payload::Str(s)) if directive.sharp => pad(out, &format!("{:?}", s), directive),
        ('v' | 's', Payload::Str(s)) => pad(out, truncate(s, directive.precision), directive),
        ('q', Payload::Str(s)) => {
            let s = truncate(s, directive.precision);
            let raw = directive.sharp && !s.contains('`') && !s.chars().any(char::is_control);
            let quoted = if raw {
                format!("`{}`", s)
            } else {
                format!("{:?}", s)
            };
            pad(out, &quoted, directive);
        }
        ('x' | 'X', Payload::Str(s)) => {
            let hex = hex_bytes(truncate(s, directive.precision), directive);
            pad(out, &hex, directive);
        }
        (verb, payload) => write_bad_verb(out, payload, verb),
    }
}

/// Integer as an unsigned code point, negative values in two's complement.
fn code_point(integer: Option<(u64, bool)>) -> u64 {
    match integer {
        Some((magnitude, true)) => magnitude.wrapping_neg(),
        Some((magnitude, false)) => magnitude,
        None => 0,
    }
}

fn char_from(code: u64) -> char {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// First `precision` characters of `s`.
fn truncate(s: &str, precision: Option<usize>) -> &str {
    match precision.and_then(|p| s.char_indices().nth(p)) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

fn hex_bytes(s: &str, directive: &Directive) -> String {
    let upper = directive.verb == 'X';
    let prefix = match (directive.sharp, upper) {
        (false, _) => "",
        (true, false) => "0x",
        (true, true) => "0X",
    };
    let mut hex = String::with_capacity(s.len() * 2 + prefix.len());
    for (i, byte) in s.bytes().enumerate() {
        if directive.space && i > 0 {
            hex.push(' ');
        }
        if i == 0 || directive.space {
            hex.push_str(prefix);
        }
        let _ = if upper {
            write!(hex, "{:02X}", byte)
        } else {
            write!(hex, "{:02x}", byte)
        };
    }
    hex
}

/// Pads `text` with spaces to the directive width.
fn pad(out: &mut String, text: &str, directive: &Directive) {
    write_padded(out, "", text, directive, false);
}

/// Writes `prefix` and `body` padded to the directive width. Zero padding goes
/// between the prefix (sign, radix marker) and the body.
fn write_padded(out: &mut String, prefix: &str, body: &str, directive: &Directive, zero: bool) {
    let length = prefix.chars().count() + body.chars().count();
    let padding = directive.width.unwrap_or(0).saturating_sub(length);
    if directive.minus {
        out.push_str(prefix);
        out.push_str(body);
        out.extend(std::iter::repeat_n(' ', padding));
    } else if zero {
        out.push_str(prefix);
        out.extend(std::iter::repeat_n('0', padding));
        out.push_str(body);
    } else {
        out.extend(std::iter::repeat_n(' ', padding));
        out.push_str(prefix);
        out.push_str(body);
    }
}

fn write_integer(
    out: &mut String,
    magnitude: u64,
    negative: bool,
    radix: u32,
    directive: &Directive,
) {
    let upper = directive.verb == 'X';
    let mut digits = match (radix, upper) {
        (2, _) => format!("{:b}", magnitude),
        (8, _) => format!("{:o}", magnitude),
        (16, false) => format!("{:x}", magnitude),
        (16, true) => format!("{:X}", magnitude),
        _ => magnitude.to_string(),
    };
    match directive.precision {
        Some(0) if magnitude == 0 => digits.clear(),
        Some(precision) if digits.len() < precision => {
            digits.insert_str(0, &"0".repeat(precision - digits.len()));
        }
        _ => {}
    }

    let mut prefix = String::from(directive.sign(negative));
    if directive.sharp {
        match (radix, upper) {
            (2, _) => prefix.push_str("0b"),
            (8, _) if !digits.starts_with('0') => prefix.push('0'),
            (16, false) => prefix.push_str("0x"),
            (16, true) => prefix.push_str("0X"),
            _ => {}
        }
    }
    let zero = directive.zero && directive.precision.is_none();
    write_padded(out, &prefix, &digits, directive, zero);
}

fn write_float(out: &mut String, value: f64, directive: &Directive) {
    let negative = value.is_sign_negative() && !value.is_nan();
    let sign = directive.sign(negative);
    if !value.is_finite() {
        let (sign, body) = match (value.is_nan(), negative) {
            (true, _) if directive.plus => ("+", "NaN"),
            (true, _) => ("", "NaN"),
            (false, true) => ("-", "Inf"),
            (false, false) => ("+", "Inf"),
        };
        write_padded(out, sign, body, directive, false);
        return;
    }

    let magnitude = value.abs();
    let upper = directive.verb.is_ascii_uppercase();
    let body = match directive.verb {
        'f' | 'F' => format!("{:.*}", directive.precision.unwrap_or(6), magnitude),
        'e' | 'E' => scientific(magnitude, directive.precision.unwrap_or(6), upper),
        _ => general(magnitude, directive.precision, upper),
    };
    write_padded(out, sign, &body, directive, directive.zero);
}

/// Significant decimal digits without trailing zeros and the decimal exponent
/// of the first digit, rounded to `precision` digits or the shortest
/// representation that reads back as the same value.
fn decimal_digits(magnitude: f64, precision: Option<usize>) -> (Vec<u8>, i32) {
    let text = match precision {
        Some(precision) => format!("{:.*e}", precision.max(1) - 1, magnitude),
        None => format!("{:e}", magnitude),
    };
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }
    (digits, exponent.parse().unwrap_or(0))
}

fn push_exponent(out: &mut String, exponent: i32, upper: bool) {
    out.push(if upper { 'E' } else { 'e' });
    out.push(if exponent < 0 { '-' } else { '+' });
    let _ = write!(out, "{:02}", exponent.unsigned_abs());
}

/// `d.dddde±dd` with `fraction` digits after the point.
fn scientific(magnitude: f64, fraction: usize, upper: bool) -> String {
    let (digits, exponent) = decimal_digits(magnitude, Some(fraction + 1));
    scientific_from(&digits, exponent, fraction, upper)
}

fn scientific_from(digits: &[u8], exponent: i32, fraction: usize, upper: bool) -> String {
    let mut out = String::with_capacity(fraction + 6);
    out.push(char::from(digits.first().copied().unwrap_or(b'0')));
    if fraction > 0 {
        out.push('.');
        for i in 1..=fraction {
            out.push(char::from(digits.get(i).copied().unwrap_or(b'0')));
        }
    }
    push_exponent(&mut out, exponent, upper);
    out
}

/// Digits placed around a decimal point `point` digits from the left, with
/// `fraction` digits after it.
fn fixed_from(digits: &[u8], point: i32, fraction: usize) -> String {
    let digit = |i: i32| {
        usize::try_from(i)
            .ok()
            .and_then(|i| digits.get(i).copied())
            .map_or('0', char::from)
    };
    let mut out = String::new();
    if point <= 0 {
        out.push('0');
    } else {
        (0..point).for_each(|i| out.push(digit(i)));
    }
    if fraction > 0 {
        out.push('.');
        (0..fraction as i32).for_each(|i| out.push(digit(point + i)));
    }
    out
}

/// `%g`: scientific for exponents below `-4` or at least the precision (`6`
/// for the shortest form), fixed otherwise. Trailing zeros are dropped.
fn general(magnitude: f64, precision: Option<usize>, upper: bool) -> String {
    if magnitude == 0.0 {
        return "0".to_string();
    }
    let (digits, exponent) = decimal_digits(magnitude, precision);
    let count = digits.len() as i32;
    let point = exponent + 1;

    let mut wanted = precision.map_or(count, |precision| precision.max(1) as i32);
    let limit = match precision {
        None => 6,
        Some(_) if wanted > count && count >= point => count,
        Some(_) => wanted,
    };
    if exponent < -4 || exponent >= limit {
        let fraction = wanted.min(count) - 1;
        return scientific_from(&digits, exponent, fraction.max(0) as usize, upper);
    }
    if wanted > point {
        wanted = count;
    }
    fixed_from(&digits, point, (wanted - point).max(0) as usize)
}
