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

//! Property tests for hyperlink URL escaping

use proptest::prelude::*;
use tinct_hyperlink::{Hyperlink, HyperlinkParam, escape, is_valid_target, unescape};

proptest! {
    #[test]
    fn escaped_strings_are_valid_targets(s in any::<String>()) {
        prop_assert!(is_valid_target(&escape(&s)));
    }

    #[test]
    fn unescape_reverts_escape(s in "[^%]*") {
        let escaped = escape(&s);
        let back = unescape(&escaped).unwrap();
        prop_assert_eq!(back.as_ref(), s.as_str());
    }

    #[test]
    fn printable_ascii_is_left_alone(s in "[ -~]*") {
        let escaped = escape(&s);
        prop_assert_eq!(escaped.as_ref(), s.as_str());
    }

    #[test]
    fn checked_links_accept_escaped_targets(s in any::<String>()) {
        let target = escape(&s).into_owned();
        prop_assert!(Hyperlink::checked(target, vec![HyperlinkParam::id("p")]).is_ok());
    }
}

#[test]
fn test_percent_in_plain_text_must_be_escaped_first() {
    // a literal '%' is printable and survives escape untouched, so a target
    // containing one cannot be unescaped unless it forms a valid sequence
    assert_eq!(escape("100%"), "100%");
    assert!(unescape("100%").is_err());
    assert_eq!(unescape("100%25").unwrap(), "100%");
}
