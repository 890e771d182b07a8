// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::EnumIter;

/// How the digit buffer is allowed to be written while a country is selected.
///
/// For example, with Russia selected the number `+7 800 555-35-35` is typed as:
/// - **Auto**: either `+78005553535` or `88005553535`, whatever the user types
/// - **International**: always `+78005553535`, a `+` is prepended if missing
/// - **National**: always `88005553535`, a typed `+7` is converted away
#[derive(Debug, Default, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Both notations are accepted.
    #[default]
    Auto,
    /// The buffer always starts with `+`.
    International,
    /// The buffer never starts with `+` once a country is selected.
    National,
}

impl InputMode {
    pub fn is_international(self) -> bool {
        matches!(self, InputMode::International)
    }

    pub fn is_national(self) -> bool {
        matches!(self, InputMode::National)
    }
}
