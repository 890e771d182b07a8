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

/// Internal pattern matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether `number` (a string containing only decimal digits)
    /// starts with a match of `pattern`.
    fn match_prefix(&self, number: &str, pattern: &str) -> bool;
}

/// Read-only view of a numbering plan table.
///
/// Every query is total: unknown regions and calling codes yield `None`,
/// `false` or an empty slice, never a panic.
pub trait MetadataApi: Send + Sync {
    /// Country calling code of `country`, e.g. `"7"` for `"RU"`.
    fn calling_code(&self, country: &str) -> Option<&str>;

    /// All regions registered under `calling_code`. The main region for the
    /// code comes first, e.g. `["US", "AG", ...]` for `"1"`.
    fn countries_for_calling_code(&self, calling_code: &str) -> &[String];

    /// Maximum length of a national significant number of `country`.
    fn max_national_number_length(&self, country: &str) -> Option<usize>;

    /// Leading digits pattern distinguishing `country` from other regions
    /// sharing its calling code.
    fn leading_digits(&self, country: &str) -> Option<&str>;

    /// National (trunk) prefix of `country`, e.g. `"8"` for `"RU"`.
    fn national_prefix(&self, country: &str) -> Option<&str>;

    /// Whether national format of `country` is written with its national
    /// prefix in front (`8 800 555-35-35` in Russia, but `213 373-4253` in
    /// the US).
    fn national_prefix_in_national_format(&self, country: &str) -> bool;

    /// Whether `national_number` starts with the leading digits of
    /// `country`. `false` when the country has no such pattern.
    fn matches_leading_digits(&self, country: &str, national_number: &str) -> bool;

    /// Whether `digits` may start a national significant number of
    /// `country`. `true` when nothing is known about the country.
    fn is_national_number_start(&self, country: &str, digits: &str) -> bool;

    /// All supported regions, sorted.
    fn supported_countries(&self) -> Vec<&str>;

    fn is_supported_country(&self, country: &str) -> bool {
        self.calling_code(country).is_some()
    }

    fn is_known_calling_code(&self, calling_code: &str) -> bool {
        !self.countries_for_calling_code(calling_code).is_empty()
    }
}
