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

use log::debug;

use crate::interfaces::MetadataApi;

use super::{
    helper_constants::{MAX_LENGTH_FOR_NSN, PLUS_SIGN},
    helper_functions::{extract_calling_code, parse_digits, strip_national_prefix},
    helper_types::PhoneNumber,
};

/// Incremental interpreter of a phone number being typed.
///
/// Digits are fed with [`input`](Self::input); the accumulated buffer is
/// interpreted as international when it starts with `+`, and as a national
/// number of the default country otherwise.
///
/// ```ignore
/// let mut formatter = AsYouType::new(None, metadata);
/// formatter.input("+7").input("800 555 35 35");
/// assert_eq!(formatter.get_country().as_deref(), Some("RU"));
/// ```
pub struct AsYouType<'a> {
    metadata: &'a dyn MetadataApi,
    default_country: Option<&'a str>,
    digits: String,
}

impl<'a> AsYouType<'a> {
    pub fn new(default_country: Option<&'a str>, metadata: &'a dyn MetadataApi) -> Self {
        Self {
            metadata,
            default_country,
            digits: String::new(),
        }
    }

    /// Appends `text`. Anything but digits is dropped; a `+` only counts as
    /// the very first character of the whole input.
    pub fn input(&mut self, text: &str) -> &mut Self {
        let chunk = parse_digits(text);
        match chunk.strip_prefix(PLUS_SIGN) {
            Some(rest) if !self.digits.is_empty() => self.digits.push_str(rest),
            _ => self.digits.push_str(&chunk),
        }
        self
    }

    pub fn reset(&mut self) {
        self.digits.clear();
    }

    /// Digit buffer accumulated so far.
    pub fn get_digits(&self) -> &str {
        &self.digits
    }

    pub fn is_international(&self) -> bool {
        self.digits.starts_with(PLUS_SIGN)
    }

    /// Splits the buffer into calling code and national significant part.
    fn split(&self) -> Option<(&str, &str)> {
        match self.digits.strip_prefix(PLUS_SIGN) {
            Some(international) => extract_calling_code(international, self.metadata),
            None => {
                let country = self.default_country?;
                let calling_code = self.metadata.calling_code(country)?;
                Some((calling_code, strip_national_prefix(&self.digits, country, self.metadata)))
            }
        }
    }

    pub fn get_calling_code(&self) -> Option<&str> {
        self.split().map(|(calling_code, _)| calling_code)
    }

    /// National significant number typed so far; `None` while it is empty.
    pub fn get_national_significant_number(&self) -> Option<&str> {
        self.split()
            .map(|(_, national_number)| national_number)
            .filter(|national_number| !national_number.is_empty())
    }

    /// Country of the number: the default country for national input, the
    /// region resolved from the calling code for international input.
    pub fn get_country(&self) -> Option<String> {
        if !self.is_international() {
            return self
                .default_country
                .filter(|country| self.metadata.is_supported_country(country))
                .map(str::to_owned);
        }
        let (calling_code, national_number) = self.split()?;
        resolve_country(calling_code, national_number, self.metadata)
    }

    /// Best interpretation of the buffer, `None` until it has a calling code
    /// and at least one national digit, or once it gets longer than any
    /// phone number can be.
    pub fn get_number(&self) -> Option<PhoneNumber> {
        let (calling_code, national_number) = self.split()?;
        if national_number.is_empty() || national_number.len() > MAX_LENGTH_FOR_NSN {
            return None;
        }
        let country = if self.is_international() {
            resolve_country(calling_code, national_number, self.metadata)
        } else {
            self.default_country.map(str::to_owned)
        };
        Some(PhoneNumber {
            country,
            country_calling_code: calling_code.to_owned(),
            national_number: national_number.to_owned(),
            number: fast_cat::concat_str!(PLUS_SIGN, calling_code, national_number),
        })
    }
}

/// Picks the region of `calling_code` that `national_number` belongs to.
///
/// A calling code of a single region resolves right away. A shared one
/// resolves to the first region whose leading digits match, or to its main
/// region once the national number is complete; until then it is ambiguous.
pub(super) fn resolve_country(
    calling_code: &str,
    national_number: &str,
    metadata: &dyn MetadataApi,
) -> Option<String> {
    let countries = metadata.countries_for_calling_code(calling_code);
    match countries {
        [] => None,
        [only] => Some(only.clone()),
        [main, ..] => {
            if national_number.is_empty() {
                debug!("Calling code {} is shared, no national digits yet", calling_code);
                return None;
            }
            if let Some(country) = countries
                .iter()
                .find(|country| metadata.matches_leading_digits(country, national_number))
            {
                return Some(country.clone());
            }
            let complete = metadata
                .max_national_number_length(main)
                .is_some_and(|max_length| national_number.len() >= max_length);
            if complete && metadata.leading_digits(main).is_none() {
                Some(main.clone())
            } else {
                debug!(
                    "National number {} is ambiguous among {} regions of +{}",
                    national_number,
                    countries.len(),
                    calling_code
                );
                None
            }
        }
    }
}
