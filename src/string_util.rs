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

use std::cmp::Ordering;

/// Code point order of two labels.
///
/// Locale-aware collation is not built in; pass a comparator to
/// [`SelectOptionsContext::with_compare_strings`](crate::SelectOptionsContext::with_compare_strings)
/// for that.
pub fn compare_strings(a: &str, b: &str) -> Ordering {
    // UTF-8 byte order is code point order.
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::string_util::compare_strings;

    #[test]
    fn test_usage() {
        assert_eq!(compare_strings("Russia", "United States"), Ordering::Less);
        assert_eq!(compare_strings("Russia", "Russia"), Ordering::Equal);
        assert_eq!(compare_strings("b", "B"), Ordering::Greater);
        assert_eq!(compare_strings("\u{00C5}land", "Zambia"), Ordering::Greater);
    }
}
