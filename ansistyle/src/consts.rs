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

/// Control Sequence Introducer (`ESC [`).
pub const CSI: &str = "\x1b[";

/// Resets every attribute and color (`ESC [ 0 m`).
pub const RESET: &str = "\x1b[0m";

/// Longest possible SGR parameter string in bytes.
///
/// `0;1;3;4;5;7;8;9;20;21;51;52;53;38;5;255;48;5;255` is 48 bytes, the rest is
/// headroom so serializing into a stack buffer can never run out of space.
pub const MAX_PARAMS_LENGTH: usize = 64;
