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

use std::borrow::Cow;

use dec_from_char::DecimalExtended;

use crate::interfaces::MetadataApi;

use super::{
    as_you_type::AsYouType,
    helper_constants::{MAX_LENGTH_COUNTRY_CODE, PLUS_CHARS, PLUS_SIGN},
    helper_types::PhoneNumber,
};

/// Keeps decimal digits and a leading plus sign, drops everything else.
/// Non-ASCII decimal digits (`٣`, `６`, ...) are mapped to ASCII ones.
///
/// Returns `Cow::Borrowed` if `text` is already a digit buffer.
pub fn parse_digits(text: &str) -> Cow<'_, str> {
    let already_clean = text
        .char_indices()
        .all(|(i, c)| c.is_ascii_digit() || (i == 0 && c == '+'));
    if already_clean {
        return Cow::Borrowed(text);
    }

    let mut digits = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if PLUS_CHARS.contains(c) {
            if digits.is_empty() {
                digits.push_str(PLUS_SIGN);
            }
        } else if c.is_decimal_utf8() {
            let normalized: String = dec_from_char::normalize_decimals(c.encode_utf8(&mut buf)).into();
            digits.extend(normalized.chars().filter(char::is_ascii_digit));
        }
    }
    Cow::Owned(digits)
}

/// Splits the digits after `+` into a known calling code and the rest.
/// Calling codes are prefix-free, so the first (shortest) hit is the only one.
pub(super) fn extract_calling_code<'b>(
    digits: &'b str,
    metadata: &dyn MetadataApi,
) -> Option<(&'b str, &'b str)> {
    (1..=MAX_LENGTH_COUNTRY_CODE.min(digits.len()))
        .map(|len| digits.split_at(len))
        .find(|(code, _)| metadata.is_known_calling_code(code))
}

/// `+<calling code>` of `country`, followed by its leading digits when those
/// are a plain digit string: `+1684` for American Samoa, `+1` for the US.
pub(super) fn international_prefix(country: &str, metadata: &dyn MetadataApi) -> Option<String> {
    let calling_code = metadata.calling_code(country)?;
    let leading_digits = metadata
        .leading_digits(country)
        .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or("");
    Some(fast_cat::concat_str!(PLUS_SIGN, calling_code, leading_digits))
}

/// Removes the country calling code from an international buffer. Tries
/// `country` first, then every known calling code. Returns `""` when
/// nothing but (a part of) a calling code is there or no code matches.
pub(super) fn strip_country_calling_code<'b>(
    number: &'b str,
    country: Option<&str>,
    metadata: &dyn MetadataApi,
) -> &'b str {
    let Some(digits) = number.strip_prefix(PLUS_SIGN) else {
        return "";
    };
    // Just an optimization, so that it doesn't have to iterate through all
    // country calling codes.
    if let Some(calling_code) = country.and_then(|c| metadata.calling_code(c)) {
        if digits.len() <= calling_code.len() {
            if calling_code.starts_with(digits) {
                return "";
            }
        } else if let Some(rest) = digits.strip_prefix(calling_code) {
            return rest;
        }
    }
    extract_calling_code(digits, metadata)
        .map(|(_, rest)| rest)
        .unwrap_or("")
}

/// Removes the national prefix of `country` from national digits, unless
/// the digits read better as a national number without one (`800 555-35-35`
/// in Russia, where the prefix is `8`).
pub(super) fn strip_national_prefix<'b>(
    digits: &'b str,
    country: &str,
    metadata: &dyn MetadataApi,
) -> &'b str {
    let Some(national_prefix) = metadata.national_prefix(country) else {
        return digits;
    };
    match digits.strip_prefix(national_prefix) {
        Some("") => "",
        Some(rest) => {
            if metadata.is_national_number_start(country, rest)
                || !metadata.is_national_number_start(country, digits)
            {
                rest
            } else {
                digits
            }
        }
        // A multi-digit prefix ("06" in Hungary) typed half way.
        None if national_prefix.starts_with(digits) => "",
        None => digits,
    }
}

/// National significant number typed so far. `None` when the buffer holds
/// nothing beyond a calling code or a national prefix.
pub(super) fn national_significant_number_digits(
    number: &str,
    country: Option<&str>,
    metadata: &dyn MetadataApi,
) -> Option<String> {
    AsYouType::new(country, metadata)
        .input(number)
        .get_national_significant_number()
        .map(str::to_owned)
}

/// Whether an international buffer agrees with the calling code of
/// `country` on every digit typed so far.
pub(super) fn could_number_belong_to_country(
    number: &str,
    country: &str,
    metadata: &dyn MetadataApi,
) -> bool {
    let Some(calling_code) = metadata.calling_code(country) else {
        return false;
    };
    let prefix = fast_cat::concat_str!(PLUS_SIGN, calling_code);
    number
        .bytes()
        .zip(prefix.bytes())
        .all(|(typed, expected)| typed == expected)
}

/// Cuts the buffer so that its national significant number fits the
/// maximum length of `country`.
pub(super) fn trim_number<'b>(number: &'b str, country: &str, metadata: &dyn MetadataApi) -> &'b str {
    let Some(max_length) = metadata.max_national_number_length(country) else {
        return number;
    };
    match national_significant_number_digits(number, Some(country), metadata) {
        Some(nsn) if nsn.len() > max_length => &number[..number.len() - (nsn.len() - max_length)],
        _ => number,
    }
}

/// Canonical `+<calling code><national number>` value of a buffer.
pub(super) fn e164(number: &str, country: Option<&str>, metadata: &dyn MetadataApi) -> Option<String> {
    if number.is_empty() || number == PLUS_SIGN {
        return None;
    }
    // For non-international phone numbers an accompanying country is
    // required.
    if !number.starts_with(PLUS_SIGN) && country.is_none() {
        return None;
    }
    AsYouType::new(country, metadata)
        .input(number)
        .get_number()
        .map(|phone_number| phone_number.number)
}

/// Digits of the national format of `phone_number`: the national prefix
/// is kept where the country writes it (`88005553535` for `+78005553535`).
pub(super) fn national_number_digits(phone_number: &PhoneNumber, metadata: &dyn MetadataApi) -> String {
    match phone_number.country.as_deref() {
        Some(country) if metadata.national_prefix_in_national_format(country) => {
            let national_prefix = metadata.national_prefix(country).unwrap_or("");
            fast_cat::concat_str!(national_prefix, &phone_number.national_number)
        }
        _ => phone_number.national_number.clone(),
    }
}

/// Rewrites an international buffer as national digits of `country`. A
/// buffer of another calling code just loses its `+`.
pub(super) fn convert_international_to_national(
    number: &str,
    country: &str,
    metadata: &dyn MetadataApi,
) -> String {
    let belongs = metadata
        .calling_code(country)
        .is_some_and(|code| number.strip_prefix(PLUS_SIGN).is_some_and(|d| d.starts_with(code)));
    if !belongs {
        return number.trim_start_matches(PLUS_SIGN).to_owned();
    }
    match AsYouType::new(Some(country), metadata).input(number).get_number() {
        Some(mut phone_number) => {
            // The national format is the one of the selected country, even
            // when the number itself resolves to a sibling region.
            phone_number.country = Some(country.to_owned());
            national_number_digits(&phone_number, metadata)
        }
        None => String::new(),
    }
}

/// Country of an international buffer, as far as it can be told yet.
pub(super) fn get_country_from_possibly_incomplete_international_number(
    number: &str,
    metadata: &dyn MetadataApi,
) -> Option<String> {
    AsYouType::new(None, metadata).input(number).get_country()
}

/// Whether `country` passes the optional allow-list.
pub(super) fn is_allowed(country: &str, countries: Option<&[&str]>) -> bool {
    countries.is_none_or(|allowed| allowed.contains(&country))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::parse_digits;

    #[test]
    fn parse_digits_borrows_clean_input() {
        assert!(matches!(parse_digits("+78005553535"), Cow::Borrowed("+78005553535")));
        assert!(matches!(parse_digits(""), Cow::Borrowed("")));
    }

    #[test]
    fn parse_digits_strips_punctuation() {
        assert_eq!(parse_digits("+7 (800) 555-35-35"), "+78005553535");
        assert_eq!(parse_digits("8 800 555 35 35"), "88005553535");
        assert_eq!(parse_digits("abc"), "");
    }

    #[test]
    fn parse_digits_keeps_only_leading_plus() {
        assert_eq!(parse_digits("+1+2"), "+12");
        assert_eq!(parse_digits("1+2"), "12");
        assert_eq!(parse_digits("\u{FF0B}7"), "+7");
        assert_eq!(parse_digits(" +7"), "+7");
    }

    #[test]
    fn parse_digits_normalizes_unicode_decimals() {
        assert_eq!(parse_digits("+\u{FF17}\u{FF18}"), "+78");
        assert_eq!(parse_digits("\u{0663}\u{0664}"), "34");
    }
}
