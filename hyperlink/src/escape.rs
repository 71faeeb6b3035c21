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

//! URL escaping for hyperlink targets and parameters.
//!
//! OSC 8 sequences may only carry bytes in the printable ASCII range `32..=126`.
//! Everything else has to be percent-encoded before it is placed into a link.

use crate::{HyperlinkError, HyperlinkResult};
use std::borrow::Cow;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Returns `true` if the byte has to be percent-encoded.
#[inline]
fn should_escape(byte: u8) -> bool {
    !(32..=126).contains(&byte)
}

#[inline]
fn unhex(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Returns `true` if the target contains only bytes in the `32..=126` range.
///
/// Bytes are checked one by one, multi-byte UTF-8 sequences are always invalid.
///
/// # Examples
///
/// ```
/// use tinct_hyperlink::is_valid_target;
///
/// assert!(is_valid_target("mailto:user@example.com"));
/// assert!(!is_valid_target("http://пример.тест"));
/// ```
pub fn is_valid_target(target: &str) -> bool {
    !target.bytes().any(should_escape)
}

/// Returns `true` if the string is a valid target that contains none of
/// `:`, `;` and `=`, which separate hyperlink parameters.
pub fn is_valid_param(param: &str) -> bool {
    is_valid_target(param) && !param.bytes().any(|b| matches!(b, b':' | b';' | b'='))
}

/// Percent-encodes every byte outside of `32..=126` using uppercase hex digits.
///
/// Strings that need no escaping are returned borrowed.
///
/// # Examples
///
/// ```
/// use tinct_hyperlink::escape;
///
/// assert_eq!(escape("http://example.com"), "http://example.com");
/// assert_eq!(escape("a\tb"), "a%09b");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
    let count = s.bytes().filter(|&b| should_escape(b)).count();
    if count == 0 {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 2 * count);
    for byte in s.bytes() {
        if should_escape(byte) {
            out.push('%');
            out.push(UPPER_HEX[usize::from(byte >> 4)] as char);
            out.push(UPPER_HEX[usize::from(byte & 0x0F)] as char);
        } else {
            out.push(byte as char);
        }
    }
    Cow::Owned(out)
}

/// Reverts [`escape`]. Hex digits of either case are accepted.
///
/// # Errors
///
/// Returns [`HyperlinkError::InvalidEscape`] if a `%` is not followed by two
/// hexadecimal digits, and [`HyperlinkError::InvalidUtf8`] if the decoded bytes
/// are not valid UTF-8.
pub fn unescape(s: &str) -> HyperlinkResult<Cow<'_, str>> {
    let bytes = s.as_bytes();

    let mut escapes = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        let valid = i + 2 < bytes.len()
            && unhex(bytes[i + 1]).is_some()
            && unhex(bytes[i + 2]).is_some();
        if !valid {
            let end = usize::min(i + 3, bytes.len());
            return Err(HyperlinkError::InvalidEscape {
                sequence: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
            });
        }
        escapes += 1;
        i += 3;
    }

    if escapes == 0 {
        return Ok(Cow::Borrowed(s));
    }

    let mut raw = Vec::with_capacity(bytes.len() - 2 * escapes);
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                // validated by the first pass
                let hi = unhex(bytes[i + 1]).unwrap_or_default();
                let lo = unhex(bytes[i + 2]).unwrap_or_default();
                raw.push(hi << 4 | lo);
                i += 3;
            }
            byte => {
                raw.push(byte);
                i += 1;
            }
        }
    }

    Ok(Cow::Owned(String::from_utf8(raw)?))
}
