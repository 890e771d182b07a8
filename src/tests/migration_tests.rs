use crate::MigrationContext;

use super::get_phone_util;

#[test]
fn international_number_to_country_of_another_calling_code() {
    let phone_util = get_phone_util();
    let context = MigrationContext::default().with_new_country("US");
    assert_eq!(phone_util.migrate_parsed_input_for_new_country("+78005553535", &context), "+1");
    assert_eq!(
        phone_util.migrate_parsed_input_for_new_country("+78005553535", &context.with_previous_country("RU")),
        "+1"
    );
    assert_eq!(
        phone_util.migrate_parsed_input_for_new_country("+78005553535", &context.with_national_format(true)),
        ""
    );
    let context = MigrationContext::default().with_new_country("AS");
    assert_eq!(phone_util.migrate_parsed_input_for_new_country("+7800", &context), "+1684");
}

#[test]
fn international_number_to_country_of_same_calling_code() {
    let phone_util = get_phone_util();
    let context = MigrationContext::default().with_new_country("RU");
    assert_eq!(
        phone_util.migrate_parsed_input_for_new_country("+78005553535", &context),
        "+78005553535"
    );
    assert_eq!(
        phone_util.migrate_parsed_input_for_new_country("+78005553535", &context.with_national_format(true)),
        "8005553535"
    );
    assert_eq!(
        phone_util.migrate_parsed_input_for_new_country("+7", &context.with_national_format(true)),
        ""
    );
    let context = MigrationContext::default()
        .with_previous_country("RU")
        .with_new_country("KZ");
    assert_eq!(
        phone_util.migrate_parsed_input_for_new_country("+78005553535", &context),
        "+78005553535"
    );
}

#[test]
fn national_number_to_another_country() {
    let phone_util = get_phone_util();
    let context = MigrationContext::default()
        .with_previous_country("RU")
        .with_new_country("KZ");
    assert_eq!(phone_util.migrate_parsed_input_for_new_country("88005553535", &context), "88005553535");

    let context = MigrationContext::default()
        .with_previous_country("RU")
        .with_new_country("US");
    assert_eq!(phone_util.migrate_parsed_input_for_new_country("88005553535", &context), "+1");
    assert_eq!(
        phone_util.migrate_parsed_input_for_new_country("88005553535", &context.with_national_format(true)),
        ""
    );
}

#[test]
fn switching_to_international() {
    let phone_util = get_phone_util();
    let context = MigrationContext::default().with_previous_country("RU");
    assert_eq!(
        phone_util.migrate_parsed_input_for_new_country("88005553535", &context),
        "+78005553535"
    );
    assert_eq!(phone_util.migrate_parsed_input_for_new_country("+7800", &context), "+7800");
    assert_eq!(phone_util.migrate_parsed_input_for_new_country("", &context), "");
    // Nothing but a national prefix.
    assert_eq!(phone_util.migrate_parsed_input_for_new_country("8", &context), "");
}

#[test]
fn empty_buffer() {
    let phone_util = get_phone_util();
    let context = MigrationContext::default().with_new_country("RU");
    assert_eq!(phone_util.migrate_parsed_input_for_new_country("", &context), "+7");
    assert_eq!(phone_util.migrate_parsed_input_for_new_country("", &context.with_national_format(true)), "");
    assert_eq!(
        phone_util.migrate_parsed_input_for_new_country("", &context.with_previous_country("US")),
        ""
    );
}

#[test]
fn same_country_keeps_buffer() {
    let phone_util = get_phone_util();
    let context = MigrationContext::default()
        .with_previous_country("RU")
        .with_new_country("RU")
        .with_national_format(true);
    assert_eq!(
        phone_util.migrate_parsed_input_for_new_country("+78005553535", &context),
        "+78005553535"
    );
    assert_eq!(phone_util.migrate_parsed_input_for_new_country("1", &MigrationContext::default()), "1");
}
