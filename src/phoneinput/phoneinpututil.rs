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

use log::{debug, trace, warn};

use super::{
    as_you_type::AsYouType,
    diagnostics::{Diagnostic, DiagnosticSink},
    errors::ParseError,
    helper_constants::{
        INTERNATIONAL_OPTION_DEFAULT_LABEL, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        ORDER_DIVIDER, ORDER_INTERNATIONAL, ORDER_REST, ORDER_REST_ELLIPSIS, PLUS_SIGN,
    },
    helper_functions::{
        self, convert_international_to_national, could_number_belong_to_country, e164,
        extract_calling_code, international_prefix, is_allowed, parse_digits,
        strip_country_calling_code, trim_number,
    },
    helper_types::{
        CountrySelectEntry, CountrySelectOption, InitialInputContext, InputContext,
        MigrationContext, ParsedInput, PartialNumberContext, PhoneNumber, PreSelectContext,
        SelectOptionsContext,
    },
};
use crate::{i18n::RegionCode, interfaces::MetadataApi, metadata::Metadata, string_util::compare_strings};

/// Incremental phone number input core.
///
/// Every method is a pure function of its arguments and the numbering plan
/// table; the caller keeps the `{input, country, value}` state between
/// keystrokes and feeds it back through [`InputContext`].
pub struct PhoneInputUtil {
    /// Numbering plan table every query goes through.
    metadata: Box<dyn MetadataApi>,
}

impl PhoneInputUtil {
    /// Instance backed by the table compiled into the crate.
    pub fn new() -> Self {
        Self::new_for_metadata(Box::new(Metadata::new()))
    }

    pub fn new_for_metadata(metadata: Box<dyn MetadataApi>) -> Self {
        Self { metadata }
    }

    pub fn metadata(&self) -> &dyn MetadataApi {
        self.metadata.as_ref()
    }

    pub fn get_country_calling_code(&self, country: &str) -> Option<&str> {
        self.metadata.calling_code(country)
    }

    pub fn is_supported_country(&self, country: &str) -> bool {
        self.metadata.is_supported_country(country)
    }

    /// `+<calling code>` of `country`, extended by its leading digits when
    /// those are plain digits: `+1684` for `AS`.
    pub fn get_international_prefix(&self, country: &str) -> Option<String> {
        international_prefix(country, self.metadata())
    }

    /// Supported part of a caller-provided country list, `None` when nothing
    /// is left.
    pub fn get_supported_countries(&self, countries: &[&str]) -> Option<Vec<String>> {
        let supported: Vec<String> = countries
            .iter()
            .filter(|country| {
                let supported = self.metadata.is_supported_country(country);
                if !supported {
                    warn!("Country not supported: {}", country);
                }
                supported
            })
            .map(|country| country.to_string())
            .collect();
        if supported.is_empty() {
            None
        } else {
            Some(supported)
        }
    }

    /// First supported country of the allow-list, or the first supported
    /// country at all.
    pub fn get_any_country(&self, countries: Option<&[&str]>) -> Option<String> {
        match countries {
            Some(countries) => countries
                .iter()
                .find(|country| self.metadata.is_supported_country(country))
                .map(|country| country.to_string()),
            None => self
                .metadata
                .supported_countries()
                .first()
                .map(|country| country.to_string()),
        }
    }

    pub fn as_you_type<'a>(&'a self, default_country: Option<&'a str>) -> AsYouType<'a> {
        AsYouType::new(default_country, self.metadata())
    }

    /// Parses a complete phone number. National notation needs a supported
    /// `default_country`.
    pub fn parse_phone_number(
        &self,
        text: &str,
        default_country: Option<&str>,
    ) -> Result<PhoneNumber, ParseError> {
        let digits = parse_digits(text);
        if !digits.bytes().any(|b| b.is_ascii_digit()) {
            return Err(ParseError::NotANumber);
        }
        if !digits.starts_with(PLUS_SIGN)
            && !default_country.is_some_and(|country| self.is_supported_country(country))
        {
            return Err(ParseError::InvalidCountryCode);
        }

        let mut formatter = AsYouType::new(default_country, self.metadata());
        formatter.input(&digits);
        if formatter.get_calling_code().is_none() {
            return Err(ParseError::InvalidCountryCode);
        }
        let national_number_len = formatter
            .get_national_significant_number()
            .map_or(0, str::len);
        if national_number_len < MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortNsn);
        }
        if national_number_len > MAX_LENGTH_FOR_NSN {
            return Err(ParseError::TooLongNsn);
        }
        formatter.get_number().ok_or(ParseError::NotANumber)
    }

    /// International buffer without its calling code. Returns `""` when no
    /// known calling code is there or nothing follows it.
    pub fn strip_country_calling_code(&self, number: &str, country: Option<&str>) -> String {
        let digits = parse_digits(number);
        strip_country_calling_code(&digits, country, self.metadata()).to_owned()
    }

    /// National significant number of an international buffer, or of a
    /// national buffer of `country`. `None` while only a calling code or a
    /// national prefix is typed.
    pub fn get_national_significant_number_digits(
        &self,
        number: &str,
        country: Option<&str>,
    ) -> Option<String> {
        helper_functions::national_significant_number_digits(number, country, self.metadata())
    }

    pub fn could_number_belong_to_country(&self, number: &str, country: &str) -> bool {
        could_number_belong_to_country(&parse_digits(number), country, self.metadata())
    }

    /// Cuts digits beyond the maximum national number length of `country`.
    pub fn trim_number(&self, number: &str, country: &str) -> String {
        let digits = parse_digits(number);
        trim_number(&digits, country, self.metadata()).to_owned()
    }

    /// Canonical value of a buffer: `+<calling code><national number>`.
    pub fn e164(&self, number: &str, country: Option<&str>) -> Option<String> {
        e164(&parse_digits(number), country, self.metadata())
    }

    /// National notation digits of a parsed number, with the national prefix
    /// where the country writes one: `88005553535` for `+78005553535`.
    pub fn national_digits(&self, phone_number: &PhoneNumber) -> String {
        helper_functions::national_number_digits(phone_number, self.metadata())
    }

    /// Country an international buffer can already be attributed to.
    /// `None` while the calling code is incomplete or shared and not yet
    /// disambiguated.
    pub fn get_country_from_possibly_incomplete_international_number(
        &self,
        number: &str,
    ) -> Option<String> {
        helper_functions::get_country_from_possibly_incomplete_international_number(
            number,
            self.metadata(),
        )
    }

    /// Country to select when the widget mounts.
    ///
    /// A country derived from the value wins, then the default country, then
    /// "International" if allowed, then any allowed country.
    pub fn get_pre_selected_country(&self, context: &PreSelectContext) -> Option<String> {
        let value = context.value.filter(|value| !value.is_empty());
        let mut country = value
            .and_then(|value| self.parse_phone_number(value, None).ok())
            .and_then(|phone_number| phone_number.country)
            .filter(|country| is_allowed(country, context.countries));

        if country.is_none() {
            country = context
                .default_country
                .filter(|country| is_allowed(country, context.countries))
                .filter(|country| {
                    value.is_none_or(|value| self.could_number_belong_to_country(value, country))
                })
                .map(str::to_owned);
        }

        // If there will be no "International" option then some country must
        // be selected.
        if country.is_none() && !context.include_international_option {
            country = self.get_any_country(context.countries);
        }
        debug!("Pre-selected country for {:?}: {:?}", value, country);
        country
    }

    /// Country to select while an international number is being typed.
    pub fn get_country_for_partial_e164_number(
        &self,
        number: &str,
        context: &PartialNumberContext,
    ) -> Option<String> {
        // Don't change the currently selected country yet.
        if number == PLUS_SIGN {
            return context.country.map(str::to_owned);
        }

        let derived = self
            .get_country_from_possibly_incomplete_international_number(number)
            .filter(|country| is_allowed(country, context.countries));
        if derived.is_some() {
            return derived;
        }

        match context.country {
            Some(country) if !could_number_belong_to_country(number, country, self.metadata()) => {
                if context.include_international_option {
                    debug!("{} no longer fits {}, switching to International", number, country);
                    None
                } else {
                    self.first_country_for_number(number, context.countries)
                        .or_else(|| Some(country.to_owned()))
                }
            }
            Some(country) => Some(country.to_owned()),
            // Some country must be selected: take one the number fits.
            None if !context.include_international_option => {
                self.first_country_for_number(number, context.countries)
            }
            None => None,
        }
    }

    /// First allowed country the number could belong to. Regions of the
    /// typed calling code come first, main region in front.
    fn first_country_for_number(&self, number: &str, countries: Option<&[&str]>) -> Option<String> {
        let metadata = self.metadata();
        let mut candidates: Vec<&str> = number
            .strip_prefix(PLUS_SIGN)
            .and_then(|digits| extract_calling_code(digits, metadata))
            .map(|(calling_code, _)| metadata.countries_for_calling_code(calling_code))
            .unwrap_or(&[])
            .iter()
            .map(String::as_str)
            .filter(|country| is_allowed(country, countries))
            .collect();
        match countries {
            Some(countries) => candidates.extend(countries.iter().copied()),
            None => candidates.extend(metadata.supported_countries()),
        }
        candidates
            .into_iter()
            .find(|country| could_number_belong_to_country(number, country, metadata))
            .map(str::to_owned)
    }

    /// Options of the country `<select>`, sorted by label. The
    /// "International" option has no value and always comes first.
    pub fn get_country_select_options(&self, context: &SelectOptionsContext) -> Vec<CountrySelectOption> {
        let compare = context.compare_strings.unwrap_or(&compare_strings);
        let mut options: Vec<CountrySelectOption> = context
            .countries
            .iter()
            .map(|country| CountrySelectOption {
                value: Some(country.to_string()),
                label: context
                    .labels
                    .get(*country)
                    .cloned()
                    .unwrap_or_else(|| country.to_string()),
            })
            .collect();
        options.sort_by(|a, b| compare(&a.label, &b.label));

        if context.add_international_option {
            options.insert(
                0,
                CountrySelectOption {
                    value: None,
                    label: context
                        .labels
                        .get(RegionCode::get_unknown())
                        .cloned()
                        .unwrap_or_else(|| INTERNATIONAL_OPTION_DEFAULT_LABEL.to_owned()),
                },
            );
        }
        options
    }

    /// Moves the options named in `order` on top, in that order.
    ///
    /// `"|"` adds a divider, `"..."` (or `"…"`) makes the following entries
    /// go to the bottom instead, `"🌐"` stands for the "International"
    /// option. The options not mentioned keep their order in between.
    pub fn sort_country_options(
        &self,
        options: Vec<CountrySelectOption>,
        order: &[&str],
    ) -> Vec<CountrySelectEntry> {
        let mut rest = options;
        let mut on_top = Vec::new();
        let mut on_bottom = Vec::new();
        let mut append_to_bottom = false;

        for &element in order {
            let target = if append_to_bottom { &mut on_bottom } else { &mut on_top };
            match element {
                ORDER_DIVIDER => target.push(CountrySelectEntry::Divider),
                ORDER_REST | ORDER_REST_ELLIPSIS => append_to_bottom = true,
                _ => {
                    let value = if element == ORDER_INTERNATIONAL { None } else { Some(element) };
                    match rest.iter().position(|option| option.value.as_deref() == value) {
                        Some(index) => target.push(CountrySelectEntry::Option(rest.remove(index))),
                        None => warn!("Country options order entry {} matches no option", element),
                    }
                }
            }
        }

        on_top
            .into_iter()
            .chain(rest.into_iter().map(CountrySelectEntry::Option))
            .chain(on_bottom)
            .collect()
    }

    /// Buffer to show after the country `<select>` changed.
    pub fn migrate_parsed_input_for_new_country(&self, input: &str, context: &MigrationContext) -> String {
        let migrated = self.migrate(input, context);
        trace!(
            "Migrated {:?} from {:?} to {:?}: {:?}",
            input, context.previous_country, context.new_country, migrated
        );
        migrated
    }

    fn migrate(&self, input: &str, context: &MigrationContext) -> String {
        let metadata = self.metadata();
        if context.previous_country == context.new_country {
            return input.to_owned();
        }

        let Some(new_country) = context.new_country else {
            // Switching to "International": national digits get the calling
            // code of the previous country.
            if input.is_empty() || input.starts_with(PLUS_SIGN) {
                return input.to_owned();
            }
            return e164(input, context.previous_country, metadata).unwrap_or_default();
        };

        let new_calling_code = metadata.calling_code(new_country);
        let new_prefix = || international_prefix(new_country, metadata).unwrap_or_default();

        if input.is_empty() {
            return if context.previous_country.is_none() && !context.use_national_format {
                new_prefix()
            } else {
                String::new()
            };
        }

        if let Some(digits) = input.strip_prefix(PLUS_SIGN) {
            let same_calling_code = new_calling_code.is_some_and(|code| digits.starts_with(code));
            return match (same_calling_code, context.use_national_format) {
                (true, true) => strip_country_calling_code(input, Some(new_country), metadata).to_owned(),
                (true, false) => input.to_owned(),
                (false, true) => String::new(),
                (false, false) => new_prefix(),
            };
        }

        // National digits of the previous country.
        let previous_calling_code = context
            .previous_country
            .and_then(|country| metadata.calling_code(country));
        if context.previous_country.is_none() || previous_calling_code == new_calling_code {
            input.to_owned()
        } else if context.use_national_format {
            String::new()
        } else {
            new_prefix()
        }
    }

    /// Buffer to show for an externally supplied value.
    ///
    /// A value belonging to another country than the selected (or default)
    /// one is reported to `diagnostics` once and kept in international
    /// notation, so it stays editable as is.
    pub fn get_initial_parsed_input(
        &self,
        context: &InitialInputContext,
        diagnostics: Option<&mut dyn DiagnosticSink>,
    ) -> String {
        let metadata = self.metadata();
        let expected_country = context.country.or(context.default_country);

        let Some(value) = context.value.filter(|value| !value.is_empty()) else {
            // Always show the calling code in international mode.
            if context.international.is_international() {
                if let Some(country) = expected_country {
                    return international_prefix(country, metadata).unwrap_or_default();
                }
            }
            return String::new();
        };

        let digits = parse_digits(value).into_owned();
        let Ok(phone_number) = self.parse_phone_number(&digits, None) else {
            return digits;
        };

        if let Some(expected) = expected_country {
            if let Some(diagnostic) = self.country_mismatch(&phone_number, expected) {
                warn!("{}", diagnostic);
                if let Some(sink) = diagnostics {
                    sink.report(diagnostic);
                }
                return digits;
            }
        }

        let use_national_format = context.international.is_national() || context.use_national_format;
        match phone_number.country.as_deref().or(expected_country) {
            Some(country) if use_national_format => {
                convert_international_to_national(&digits, country, metadata)
            }
            _ => digits,
        }
    }

    fn country_mismatch(&self, phone_number: &PhoneNumber, expected: &str) -> Option<Diagnostic> {
        let (differs, actual) = match &phone_number.country {
            Some(actual) => (actual != expected, actual.clone()),
            None => (
                self.metadata.calling_code(expected) != Some(phone_number.country_calling_code.as_str()),
                fast_cat::concat_str!(PLUS_SIGN, &phone_number.country_calling_code),
            ),
        };
        differs.then(|| Diagnostic::CountryMismatch {
            value: phone_number.number.clone(),
            expected: expected.to_owned(),
            actual,
        })
    }

    /// Next `{input, country, value}` after the text field changed to
    /// `raw_input`.
    pub fn parse_input(&self, raw_input: &str, context: &InputContext) -> ParsedInput {
        let metadata = self.metadata();
        let mut input = parse_digits(raw_input).into_owned();
        let mut country = context.country.map(str::to_owned);

        if let Some(fixed) = self.enforce_country_calling_code(&input, context.country, context) {
            input = fixed;
        }

        // "National" input mode: remove the `+` while a country is selected.
        if let Some(country) = country.as_deref() {
            if context.international.is_national() && input.starts_with(PLUS_SIGN) {
                input = convert_international_to_national(&input, country, metadata);
            }
            if context.limit_max_length {
                let trimmed_len = trim_number(&input, country, metadata).len();
                input.truncate(trimmed_len);
            }
        }

        // Without a country, or in "International" input mode, the input is
        // always international.
        if !input.is_empty()
            && !input.starts_with(PLUS_SIGN)
            && (country.is_none() || context.international.is_international())
        {
            input.insert_str(0, PLUS_SIGN);
        }

        // A country picked up while typing an international number is reset
        // when that number is erased.
        if input.is_empty() && context.prev_input.starts_with(PLUS_SIGN) {
            country = if context.international.is_international() {
                None
            } else {
                context.default_country.map(str::to_owned)
            };
        }
        // Same when everything but the `+` is erased.
        if input == PLUS_SIGN
            && context.prev_input.starts_with(PLUS_SIGN)
            && context.prev_input.len() > PLUS_SIGN.len()
        {
            country = None;
        }

        if let Some(value) = self.value_for_input(&input, country.as_deref()) {
            country = self.get_country_for_partial_e164_number(
                &value,
                &PartialNumberContext {
                    country: country.as_deref(),
                    countries: context.countries,
                    include_international_option: context.include_international_option,
                },
            );
        }

        if country.is_none() && !context.include_international_option {
            country = self.required_country(&input, context);
        }

        // The country may have changed: keep the buffer consistent with it.
        if let Some(country) = country.as_deref() {
            if context.international.is_national() && input.starts_with(PLUS_SIGN) {
                input = convert_international_to_national(&input, country, metadata);
            }
            if context.limit_max_length {
                let trimmed_len = trim_number(&input, country, metadata).len();
                input.truncate(trimmed_len);
            }
            if let Some(fixed) = self.enforce_country_calling_code(&input, Some(country), context) {
                input = fixed;
            }
        }

        let value = self.value_for_input(&input, country.as_deref());
        let parsed = ParsedInput { input, country, value };
        trace!("Input {:?} after {:?}: {:?}", raw_input, context.prev_input, parsed);
        parsed
    }

    /// Country to select when "International" is not an option. An
    /// international buffer gets a country it fits, the default one first.
    fn required_country(&self, input: &str, context: &InputContext) -> Option<String> {
        let metadata = self.metadata();
        let default_country = context
            .default_country
            .filter(|country| is_allowed(country, context.countries));
        let fitting = if input.starts_with(PLUS_SIGN) {
            default_country
                .filter(|country| could_number_belong_to_country(input, country, metadata))
                .map(str::to_owned)
                .or_else(|| self.first_country_for_number(input, context.countries))
        } else {
            None
        };
        fitting
            .or_else(|| default_country.map(str::to_owned))
            .or_else(|| self.get_any_country(context.countries))
    }

    /// With a non-editable calling code the buffer must start with the
    /// international prefix of the selected country. Digits typed over it are
    /// appended to it, anything else snaps back to the bare prefix.
    fn enforce_country_calling_code(
        &self,
        input: &str,
        country: Option<&str>,
        context: &InputContext,
    ) -> Option<String> {
        if !context.international.is_international() || context.country_calling_code_editable {
            return None;
        }
        let prefix = international_prefix(country?, self.metadata())?;
        if input.starts_with(&prefix) {
            return None;
        }
        if !input.is_empty() && !input.starts_with(PLUS_SIGN) {
            Some(fast_cat::concat_str!(&prefix, input))
        } else {
            trace!("Rejected edit {:?}, calling code {} is not editable", input, prefix);
            Some(prefix)
        }
    }

    fn value_for_input(&self, input: &str, country: Option<&str>) -> Option<String> {
        let metadata = self.metadata();
        if input.is_empty() || input == PLUS_SIGN {
            return None;
        }
        // A country is selected but nothing beyond its international prefix
        // has been typed yet.
        if input.starts_with(PLUS_SIGN)
            && country
                .and_then(|country| international_prefix(country, metadata))
                .is_some_and(|prefix| prefix.starts_with(input))
        {
            return None;
        }
        e164(input, country, metadata)
    }
}

impl Default for PhoneInputUtil {
    fn default() -> Self {
        Self::new()
    }
}
