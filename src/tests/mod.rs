mod country_tests;
mod migration_tests;

use crate::PhoneInputUtil;

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn get_phone_util() -> PhoneInputUtil {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
    PhoneInputUtil::new()
}
