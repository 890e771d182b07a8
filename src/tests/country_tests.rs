use std::cmp::Ordering;

use crate::{
    CountryLabels, CountrySelectEntry, CountrySelectOption, PartialNumberContext, PreSelectContext,
    SelectOptionsContext,
};

use super::get_phone_util;

fn labels(entries: &[(&str, &str)]) -> CountryLabels {
    entries
        .iter()
        .map(|(country, label)| (country.to_string(), label.to_string()))
        .collect()
}

fn option(value: Option<&str>, label: &str) -> CountrySelectOption {
    CountrySelectOption {
        value: value.map(str::to_owned),
        label: label.to_owned(),
    }
}

#[test]
fn get_pre_selected_country() {
    let phone_util = get_phone_util();
    let context = PreSelectContext::default();
    assert_eq!(phone_util.get_pre_selected_country(&context), None);
    assert_eq!(
        phone_util.get_pre_selected_country(&context.with_value("+78005553535")).as_deref(),
        Some("RU")
    );
    assert_eq!(
        phone_util.get_pre_selected_country(&context.with_default_country("KZ")).as_deref(),
        Some("KZ")
    );
    // The value's country wins over the default one.
    assert_eq!(
        phone_util
            .get_pre_selected_country(&context.with_value("+77012345678").with_default_country("RU"))
            .as_deref(),
        Some("KZ")
    );
    // Ambiguous value of the default country's calling code.
    assert_eq!(
        phone_util
            .get_pre_selected_country(&context.with_value("+1213").with_default_country("CA"))
            .as_deref(),
        Some("CA")
    );
}

#[test]
fn get_pre_selected_country_respects_allow_list() {
    let phone_util = get_phone_util();
    let context = PreSelectContext::default()
        .with_value("+78005553535")
        .with_default_country("US")
        .with_countries(&["US", "GB"]);
    assert_eq!(phone_util.get_pre_selected_country(&context), None);
    assert_eq!(
        phone_util
            .get_pre_selected_country(&context.with_international_option(false))
            .as_deref(),
        Some("US")
    );

    let context = PreSelectContext::default()
        .with_countries(&["XX", "GB"])
        .with_international_option(false);
    assert_eq!(phone_util.get_pre_selected_country(&context).as_deref(), Some("GB"));
}

#[test]
fn get_country_for_partial_e164_number() {
    let phone_util = get_phone_util();
    let context = PartialNumberContext::default().with_country(Some("RU"));
    let country = |number: &str, context: &PartialNumberContext| {
        phone_util.get_country_for_partial_e164_number(number, context)
    };

    assert_eq!(country("+", &context).as_deref(), Some("RU"));
    assert_eq!(country("+7", &context).as_deref(), Some("RU"));
    assert_eq!(country("+7800", &context).as_deref(), Some("RU"));
    assert_eq!(country("+77", &context).as_deref(), Some("KZ"));
    assert_eq!(country("+1213", &context), None);
    assert_eq!(
        country("+1213", &context.with_international_option(false)).as_deref(),
        Some("US")
    );
    assert_eq!(
        country("+1213", &context.with_international_option(false).with_countries(&["RU", "CA"]))
            .as_deref(),
        Some("CA")
    );
    // No allowed country fits: keep the selected one.
    assert_eq!(
        country("+1213", &context.with_international_option(false).with_countries(&["RU", "KZ"]))
            .as_deref(),
        Some("RU")
    );
    // Derived but not allowed.
    assert_eq!(country("+77", &context.with_countries(&["RU"])).as_deref(), Some("RU"));
    assert_eq!(country("+44", &PartialNumberContext::default()), None);

    // Nothing selected and no "International" option.
    let required = PartialNumberContext::default().with_international_option(false);
    assert_eq!(country("+1213", &required).as_deref(), Some("US"));
    assert_eq!(country("+1213", &required.with_countries(&["RU", "CA"])).as_deref(), Some("CA"));
    assert_eq!(country("+0", &required), None);
}

#[test]
fn get_country_select_options() {
    let phone_util = get_phone_util();
    let labels = labels(&[("US", "United States"), ("RU", "Russia"), ("ZZ", "International")]);
    let countries = ["US", "RU"];
    let context = SelectOptionsContext::new(&countries, &labels).with_international_option(true);
    assert_eq!(
        phone_util.get_country_select_options(&context),
        vec![
            option(None, "International"),
            option(Some("RU"), "Russia"),
            option(Some("US"), "United States"),
        ]
    );
    assert_eq!(
        phone_util.get_country_select_options(&context.with_international_option(false)),
        vec![option(Some("RU"), "Russia"), option(Some("US"), "United States")]
    );
}

#[test]
fn get_country_select_options_label_fallbacks() {
    let phone_util = get_phone_util();
    let labels = labels(&[("RU", "Russia")]);
    let countries = ["US", "RU", "KZ"];
    let context = SelectOptionsContext::new(&countries, &labels).with_international_option(true);
    assert_eq!(
        phone_util.get_country_select_options(&context),
        vec![
            option(None, "International"),
            option(Some("KZ"), "KZ"),
            option(Some("RU"), "Russia"),
            option(Some("US"), "US"),
        ]
    );
}

#[test]
fn get_country_select_options_custom_compare() {
    let phone_util = get_phone_util();
    let labels = labels(&[("US", "United States"), ("RU", "Russia"), ("AX", "\u{00C5}land")]);
    let countries = ["US", "RU", "AX"];
    let reversed = |a: &str, b: &str| -> Ordering { b.cmp(a) };
    let context = SelectOptionsContext::new(&countries, &labels)
        .with_international_option(true)
        .with_compare_strings(&reversed);
    let values: Vec<Option<String>> = phone_util
        .get_country_select_options(&context)
        .into_iter()
        .map(|option| option.value)
        .collect();
    assert_eq!(
        values,
        vec![None, Some("AX".to_owned()), Some("US".to_owned()), Some("RU".to_owned())]
    );
}

#[test]
fn sort_country_options() {
    let phone_util = get_phone_util();
    let options = vec![
        option(None, "International"),
        option(Some("DE"), "Germany"),
        option(Some("RU"), "Russia"),
        option(Some("US"), "United States"),
    ];

    assert_eq!(
        phone_util.sort_country_options(options.clone(), &["US", "RU", "|", "...", "|", "\u{1F310}"]),
        vec![
            CountrySelectEntry::Option(option(Some("US"), "United States")),
            CountrySelectEntry::Option(option(Some("RU"), "Russia")),
            CountrySelectEntry::Divider,
            CountrySelectEntry::Option(option(Some("DE"), "Germany")),
            CountrySelectEntry::Divider,
            CountrySelectEntry::Option(option(None, "International")),
        ]
    );

    // Unknown entries are skipped, "…" works as well as "...".
    assert_eq!(
        phone_util.sort_country_options(options.clone(), &["XX", "\u{2026}", "US"]),
        vec![
            CountrySelectEntry::Option(option(None, "International")),
            CountrySelectEntry::Option(option(Some("DE"), "Germany")),
            CountrySelectEntry::Option(option(Some("RU"), "Russia")),
            CountrySelectEntry::Option(option(Some("US"), "United States")),
        ]
    );

    assert_eq!(
        phone_util.sort_country_options(options.clone(), &[]),
        options.into_iter().map(CountrySelectEntry::Option).collect::<Vec<_>>()
    );
}
