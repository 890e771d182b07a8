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

// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
pub const PLUS_CHARS: &'static str = "+\u{FF0B}";
pub const PLUS_SIGN: &'static str = "+";

/// Label of the "International" option when the label map has none.
pub const INTERNATIONAL_OPTION_DEFAULT_LABEL: &'static str = "International";

// Special entries of a country options order.
pub const ORDER_DIVIDER: &'static str = "|";
pub const ORDER_REST: &'static str = "...";
pub const ORDER_REST_ELLIPSIS: &'static str = "\u{2026}";
pub const ORDER_INTERNATIONAL: &'static str = "\u{1F310}";
