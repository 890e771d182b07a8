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

/// One row of the numbering plan table, see `resources/territories.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerritoryRecord {
    pub id: &'static str,
    pub calling_code: &'static str,
    /// The region a shared calling code falls back to.
    pub main_country_for_code: bool,
    pub national_prefix: Option<&'static str>,
    pub national_prefix_in_national_format: bool,
    pub max_national_number_length: usize,
    pub leading_digits: Option<&'static str>,
    pub national_number_start: Option<&'static str>,
}

include!(concat!(env!("OUT_DIR"), "/territories.rs"));
