// Copyright (C) 2009 The Libphonenumber Authors
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


use log::error;
use super::regex_util::RegexConsume;

use crate::{interfaces, regexp_cache::{InvalidRegexError, RegexCache}};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(64) }
    }

    fn match_number(&self, number: &str, pattern: &str) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(pattern)?;
        Ok(regexp.matches_start(number))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_prefix(&self, number: &str, pattern: &str) -> bool {
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        if pattern.is_empty() || number.is_empty() {
            return false;
        }
        match self.match_number(number, pattern) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex in numbering plan table! {}: {}", pattern, err);
                false
            }
        }
    }
}
