mod interfaces;
pub mod metadata;
mod phoneinput;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::MetadataApi;
pub use metadata::{Metadata, TerritoryRecord};
pub use phoneinput::{
    AsYouType, CompareStrings, CountryLabels, CountrySelectEntry, CountrySelectOption,
    Diagnostic, DiagnosticSink, InitialInputContext, InputContext, InputMode, MigrationContext,
    ParseError, ParsedInput, PartialNumberContext, PhoneInputUtil, PhoneNumber,
    PreSelectContext, SelectOptionsContext, PHONE_INPUT_UTIL, parse_digits,
};
pub use string_util::compare_strings;
