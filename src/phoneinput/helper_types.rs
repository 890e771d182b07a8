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

use std::{cmp::Ordering, collections::HashMap, fmt};

use super::enums::InputMode;

/// Country code to display label, e.g. `"RU" -> "Russia"`. The
/// `"ZZ"` key labels the "International" option.
pub type CountryLabels = HashMap<String, String>;

/// Result of a single input transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedInput {
    /// Digit buffer to show in the text field: digits and an optional
    /// leading `+`.
    pub input: String,
    /// Selected country, `None` meaning "International".
    pub country: Option<String>,
    /// E.164 value, `None` while the buffer can't be interpreted yet.
    pub value: Option<String>,
}

/// Interpretation of a (possibly partial) phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    /// `None` when the calling code is shared and the national number does
    /// not tell the regions apart yet.
    pub country: Option<String>,
    pub country_calling_code: String,
    /// National significant number: no calling code, no national prefix.
    pub national_number: String,
    /// `+<country calling code><national number>`.
    pub number: String,
}

/// Everything [`parse_input`](super::PhoneInputUtil::parse_input) needs
/// besides the new raw input.
#[derive(Debug, Clone, Copy)]
pub struct InputContext<'a> {
    /// Buffer returned by the previous transition.
    pub prev_input: &'a str,
    /// Currently selected country.
    pub country: Option<&'a str>,
    pub default_country: Option<&'a str>,
    /// Countries the user may select. `None` means every supported one.
    pub countries: Option<&'a [&'a str]>,
    /// Whether "International" (no country) may be selected.
    pub include_international_option: bool,
    pub international: InputMode,
    /// With [`InputMode::International`] and `false`, the
    /// `+<calling code>` part can't be erased.
    pub country_calling_code_editable: bool,
    /// Cut digits exceeding the maximum national number length.
    pub limit_max_length: bool,
}

impl<'a> Default for InputContext<'a> {
    fn default() -> Self {
        Self {
            prev_input: "",
            country: None,
            default_country: None,
            countries: None,
            include_international_option: true,
            international: InputMode::Auto,
            country_calling_code_editable: true,
            limit_max_length: false,
        }
    }
}

impl<'a> InputContext<'a> {
    pub fn with_prev_input(mut self, prev_input: &'a str) -> Self {
        self.prev_input = prev_input;
        self
    }

    pub fn with_country(mut self, country: Option<&'a str>) -> Self {
        self.country = country;
        self
    }

    pub fn with_default_country(mut self, default_country: &'a str) -> Self {
        self.default_country = Some(default_country);
        self
    }

    pub fn with_countries(mut self, countries: &'a [&'a str]) -> Self {
        self.countries = Some(countries);
        self
    }

    pub fn with_international_option(mut self, include: bool) -> Self {
        self.include_international_option = include;
        self
    }

    pub fn with_mode(mut self, international: InputMode) -> Self {
        self.international = international;
        self
    }

    pub fn with_country_calling_code_editable(mut self, editable: bool) -> Self {
        self.country_calling_code_editable = editable;
        self
    }

    pub fn with_limit_max_length(mut self, limit: bool) -> Self {
        self.limit_max_length = limit;
        self
    }

    /// Context for the next keystroke: `parsed` becomes the previous state.
    pub fn following(self, parsed: &'a ParsedInput) -> Self {
        Self {
            prev_input: &parsed.input,
            country: parsed.country.as_deref(),
            ..self
        }
    }
}

/// Inputs of [`get_initial_parsed_input`](super::PhoneInputUtil::get_initial_parsed_input).
#[derive(Debug, Clone, Copy, Default)]
pub struct InitialInputContext<'a> {
    /// Externally supplied E.164 value.
    pub value: Option<&'a str>,
    pub country: Option<&'a str>,
    pub default_country: Option<&'a str>,
    pub international: InputMode,
    /// Show a value of the selected country as national digits.
    pub use_national_format: bool,
}

impl<'a> InitialInputContext<'a> {
    pub fn with_value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_country(mut self, country: &'a str) -> Self {
        self.country = Some(country);
        self
    }

    pub fn with_default_country(mut self, default_country: &'a str) -> Self {
        self.default_country = Some(default_country);
        self
    }

    pub fn with_mode(mut self, international: InputMode) -> Self {
        self.international = international;
        self
    }

    pub fn with_national_format(mut self, use_national_format: bool) -> Self {
        self.use_national_format = use_national_format;
        self
    }
}

/// Inputs of [`migrate_parsed_input_for_new_country`](super::PhoneInputUtil::migrate_parsed_input_for_new_country).
#[derive(Debug, Clone, Copy, Default)]
pub struct MigrationContext<'a> {
    pub previous_country: Option<&'a str>,
    /// `None` switches to "International".
    pub new_country: Option<&'a str>,
    pub use_national_format: bool,
}

impl<'a> MigrationContext<'a> {
    pub fn with_previous_country(mut self, country: &'a str) -> Self {
        self.previous_country = Some(country);
        self
    }

    pub fn with_new_country(mut self, country: &'a str) -> Self {
        self.new_country = Some(country);
        self
    }

    pub fn with_national_format(mut self, use_national_format: bool) -> Self {
        self.use_national_format = use_national_format;
        self
    }
}

/// Inputs of [`get_pre_selected_country`](super::PhoneInputUtil::get_pre_selected_country).
#[derive(Debug, Clone, Copy)]
pub struct PreSelectContext<'a> {
    /// Externally supplied E.164 value.
    pub value: Option<&'a str>,
    pub default_country: Option<&'a str>,
    pub countries: Option<&'a [&'a str]>,
    pub include_international_option: bool,
}

impl<'a> Default for PreSelectContext<'a> {
    fn default() -> Self {
        Self {
            value: None,
            default_country: None,
            countries: None,
            include_international_option: true,
        }
    }
}

impl<'a> PreSelectContext<'a> {
    pub fn with_value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_default_country(mut self, default_country: &'a str) -> Self {
        self.default_country = Some(default_country);
        self
    }

    pub fn with_countries(mut self, countries: &'a [&'a str]) -> Self {
        self.countries = Some(countries);
        self
    }

    pub fn with_international_option(mut self, include: bool) -> Self {
        self.include_international_option = include;
        self
    }
}

/// Inputs of [`get_country_for_partial_e164_number`](super::PhoneInputUtil::get_country_for_partial_e164_number).
#[derive(Debug, Clone, Copy)]
pub struct PartialNumberContext<'a> {
    pub country: Option<&'a str>,
    pub countries: Option<&'a [&'a str]>,
    pub include_international_option: bool,
}

impl<'a> Default for PartialNumberContext<'a> {
    fn default() -> Self {
        Self {
            country: None,
            countries: None,
            include_international_option: true,
        }
    }
}

impl<'a> PartialNumberContext<'a> {
    pub fn with_country(mut self, country: Option<&'a str>) -> Self {
        self.country = country;
        self
    }

    pub fn with_countries(mut self, countries: &'a [&'a str]) -> Self {
        self.countries = Some(countries);
        self
    }

    pub fn with_international_option(mut self, include: bool) -> Self {
        self.include_international_option = include;
        self
    }
}

pub type CompareStrings<'a> = &'a dyn Fn(&str, &str) -> Ordering;

/// Inputs of [`get_country_select_options`](super::PhoneInputUtil::get_country_select_options).
#[derive(Clone, Copy)]
pub struct SelectOptionsContext<'a> {
    pub countries: &'a [&'a str],
    pub labels: &'a CountryLabels,
    pub add_international_option: bool,
    /// Replaces the default code point order of labels, e.g. with a
    /// locale-aware collation.
    pub compare_strings: Option<CompareStrings<'a>>,
}

impl<'a> SelectOptionsContext<'a> {
    pub fn new(countries: &'a [&'a str], labels: &'a CountryLabels) -> Self {
        Self {
            countries,
            labels,
            add_international_option: false,
            compare_strings: None,
        }
    }

    pub fn with_international_option(mut self, add: bool) -> Self {
        self.add_international_option = add;
        self
    }

    pub fn with_compare_strings(mut self, compare: CompareStrings<'a>) -> Self {
        self.compare_strings = Some(compare);
        self
    }
}

impl fmt::Debug for SelectOptionsContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectOptionsContext")
            .field("countries", &self.countries)
            .field("labels", &self.labels)
            .field("add_international_option", &self.add_international_option)
            .field("compare_strings", &self.compare_strings.is_some())
            .finish()
    }
}

/// One entry of a country `<select>`. `value: None` is "International".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountrySelectOption {
    pub value: Option<String>,
    pub label: String,
}

/// Entry of a custom-ordered country list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CountrySelectEntry {
    Option(CountrySelectOption),
    Divider,
}
