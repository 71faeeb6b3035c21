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

use crate::{HyperlinkError, HyperlinkResult, is_valid_param, is_valid_target};
use std::fmt;

/// Start of an OSC 8 hyperlink sequence (`ESC ] 8 ;`).
pub const LINK_START: &str = "\x1b]8;";
/// String terminator closing the OSC 8 head (`ESC \`).
pub const LINK_TERMINATOR: &str = "\x1b\\";
/// Sequence closing a hyperlink (`ESC ] 8 ; ; ESC \`).
pub const LINK_END: &str = "\x1b]8;;\x1b\\";

/// Key of the `id` hyperlink parameter.
pub const HYPERLINK_ID_KEY: &str = "id";

/// A single `key=value` hyperlink parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HyperlinkParam {
    /// Parameter name
    pub key: String,
    /// Parameter value
    pub value: String,
}

impl HyperlinkParam {
    /// Creates a parameter from a key and a value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates the `id` parameter terminals use to join links split across lines.
    pub fn id(value: impl Into<String>) -> Self {
        Self::new(HYPERLINK_ID_KEY, value)
    }

    /// Length of the `key=value` form in bytes.
    pub(crate) fn encoded_len(&self) -> usize {
        self.key.len() + 1 + self.value.len()
    }
}

impl fmt::Display for HyperlinkParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// An OSC 8 hyperlink: a target and an ordered list of parameters.
///
/// A `Hyperlink` is immutable. Attaching another link to a styled value replaces
/// it as a whole, parameters are never merged.
///
/// ```text
/// ESC ] 8 ; key=value:key=value ; target ESC \  text  ESC ] 8 ; ; ESC \
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hyperlink {
    target: String,
    params: Vec<HyperlinkParam>,
}

impl Hyperlink {
    /// Creates a hyperlink without validating it.
    ///
    /// The target and the parameters are expected to be escaped already, see
    /// [`escape`](crate::escape).
    pub fn new(target: impl Into<String>, params: Vec<HyperlinkParam>) -> Self {
        Self {
            target: target.into(),
            params,
        }
    }

    /// Creates a hyperlink after checking the target and every parameter.
    ///
    /// # Errors
    ///
    /// [`HyperlinkError::InvalidTarget`] if the target has bytes outside
    /// `32..=126`, [`HyperlinkError::InvalidParam`] if a key or value is not a
    /// valid parameter.
    pub fn checked(
        target: impl Into<String>,
        params: Vec<HyperlinkParam>,
    ) -> HyperlinkResult<Self> {
        let target = target.into();
        if !is_valid_target(&target) {
            return Err(HyperlinkError::InvalidTarget { target });
        }
        for param in &params {
            for part in [&param.key, &param.value] {
                if !is_valid_param(part) {
                    return Err(HyperlinkError::InvalidParam {
                        param: part.clone(),
                    });
                }
            }
        }
        Ok(Self { target, params })
    }

    /// Link target
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Link parameters in the order they were given
    pub fn params(&self) -> &[HyperlinkParam] {
        &self.params
    }

    /// A link with an empty target is never written.
    pub fn exists(&self) -> bool {
        !self.target.is_empty()
    }

    /// Length of the opening sequence in bytes.
    pub fn head_len(&self) -> usize {
        let params: usize = self.params.iter().map(HyperlinkParam::encoded_len).sum();
        let colons = self.params.len().saturating_sub(1);
        LINK_START.len() + params + colons + 1 + self.target.len() + LINK_TERMINATOR.len()
    }

    /// Length of the closing sequence in bytes.
    pub fn tail_len(&self) -> usize {
        LINK_END.len()
    }

    /// Writes the opening sequence, parameters joined by `:`.
    ///
    /// Nothing is written when the target is empty.
    pub fn write_head<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
        if !self.exists() {
            return Ok(());
        }
        writer.write_str(LINK_START)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                writer.write_char(':')?;
            }
            write!(writer, "{}", param)?;
        }
        writer.write_char(';')?;
        writer.write_str(&self.target)?;
        writer.write_str(LINK_TERMINATOR)
    }

    /// Writes the closing sequence. Nothing is written when the target is empty.
    pub fn write_tail<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
        if !self.exists() {
            return Ok(());
        }
        writer.write_str(LINK_END)
    }

    /// Opening sequence as a string.
    pub fn head(&self) -> String {
        let mut head = String::with_capacity(self.head_len());
        // writing into a String cannot fail
        let _ = self.write_head(&mut head);
        head
    }

    /// Closing sequence as a string, empty for a link without target.
    pub fn tail(&self) -> &'static str {
        if self.exists() { LINK_END } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_len_and_display() {
        let param = HyperlinkParam::default();
        assert_eq!(param.encoded_len(), 1);
        assert_eq!(param.to_string(), "=");

        let param = HyperlinkParam::new("some", "thing");
        assert_eq!(param.encoded_len(), 1 + "some".len() + "thing".len());
        assert_eq!(param.to_string(), "some=thing");
    }

    #[test]
    fn test_param_id() {
        assert_eq!(
            HyperlinkParam::id("value"),
            HyperlinkParam {
                key: "id".to_string(),
                value: "value".to_string(),
            }
        );
    }

    #[test]
    fn test_head_without_params() {
        let link = Hyperlink::new("http://example.com", vec![]);
        assert_eq!(link.head(), "\x1b]8;;http://example.com\x1b\\");
        assert_eq!(link.head().len(), link.head_len());
        assert_eq!(link.tail(), "\x1b]8;;\x1b\\");
        assert_eq!(link.tail().len(), link.tail_len());
    }

    #[test]
    fn test_head_with_params() {
        let link = Hyperlink::new(
            "http://example.com",
            vec![HyperlinkParam::id("x1"), HyperlinkParam::new("k", "v")],
        );
        assert_eq!(link.head(), "\x1b]8;id=x1:k=v;http://example.com\x1b\\");
        assert_eq!(link.head().len(), link.head_len());
    }

    #[test]
    fn test_empty_target_writes_nothing() {
        let link = Hyperlink::new("", vec![HyperlinkParam::id("x")]);
        assert!(!link.exists());
        assert_eq!(link.head(), "");
        assert_eq!(link.tail(), "");
        let mut out = String::new();
        link.write_tail(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_checked_rejects_invalid_target() {
        let err = Hyperlink::checked("http://пример.тест", vec![]).unwrap_err();
        assert!(matches!(err, HyperlinkError::InvalidTarget { .. }));
    }

    #[test]
    fn test_checked_rejects_invalid_param() {
        let err = Hyperlink::checked("http://example.com", vec![HyperlinkParam::id("a:b")])
            .unwrap_err();
        assert_eq!(
            err,
            HyperlinkError::InvalidParam {
                param: "a:b".to_string()
            }
        );
    }

    #[test]
    fn test_checked_accepts_valid_link() {
        let link =
            Hyperlink::checked("http://example.com", vec![HyperlinkParam::id("a")]).unwrap();
        assert_eq!(link.target(), "http://example.com");
        assert_eq!(link.params(), &[HyperlinkParam::id("a")]);
    }
}
