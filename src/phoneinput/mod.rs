mod as_you_type;
mod helper_constants;
mod helper_functions;
pub mod diagnostics;
pub mod enums;
pub mod errors;
pub mod helper_types;
pub mod phoneinpututil;

use std::sync::LazyLock;

pub use as_you_type::AsYouType;
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use enums::InputMode;
pub use errors::ParseError;
pub use helper_functions::parse_digits;
pub use helper_types::{
    CompareStrings, CountryLabels, CountrySelectEntry, CountrySelectOption, InitialInputContext,
    InputContext, MigrationContext, ParsedInput, PartialNumberContext, PhoneNumber,
    PreSelectContext, SelectOptionsContext,
};
pub use phoneinpututil::PhoneInputUtil;

pub static PHONE_INPUT_UTIL: LazyLock<PhoneInputUtil> = LazyLock::new(|| {
    PhoneInputUtil::new()
});
