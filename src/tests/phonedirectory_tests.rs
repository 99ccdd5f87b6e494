use strum::IntoEnumIterator;

use crate::{
    normalize_number, phonedirectory::errors::DirectoryError, AlphaForm, CountryKey,
    CountryNameTranslator, CountryPhoneDataCollection, CountryPhoneRecord, PhoneDirectory,
    PHONE_DIRECTORY,
};

use super::{get_test_directory, region_code::RegionCode};

fn record(alpha2: &str, alpha3: &str, dialing_code: u32, lengths: &[u32]) -> CountryPhoneRecord {
    CountryPhoneRecord {
        alpha2: alpha2.to_owned(),
        alpha3: alpha3.to_owned(),
        dialing_code,
        national_number_lengths: lengths.to_vec(),
        ..Default::default()
    }
}

fn collection(records: Vec<CountryPhoneRecord>) -> CountryPhoneDataCollection {
    CountryPhoneDataCollection {
        country: records,
        ..Default::default()
    }
}

#[test]
fn normalize_number_strips_non_digits() {
    assert_eq!(normalize_number("+1 (202) 555-0123"), 12025550123);
    assert_eq!(normalize_number("tel: 44-7911"), 447911);
    assert_eq!(normalize_number(""), 0);
    assert_eq!(normalize_number("abc"), 0);
}

#[test]
fn normalize_number_drops_leading_zeros() {
    assert_eq!(normalize_number("0501234567"), 501234567);
    assert_eq!(normalize_number("000"), 0);
}

#[test]
fn normalize_number_saturates_on_overflow() {
    assert_eq!(normalize_number("123456789012345678901234567890"), u64::MAX);
}

#[test]
fn normalize_number_is_idempotent() {
    for raw in ["", "abc", "+44 (0) 7911 123456", "٠٥٠", "00201001234567", "99999999999999999999999"] {
        let once = normalize_number(raw);
        assert_eq!(normalize_number(&once.to_string()), once, "input: {raw}");
    }
}

#[test]
fn country_by_alpha_is_case_insensitive() {
    let directory = get_test_directory();
    for identifier in ["US", "us", "USA", "uSa"] {
        let found = directory.country_by_alpha(identifier).expect("US should be found");
        assert_eq!(found.alpha2, RegionCode::us());
    }
    assert!(directory.country_by_alpha(RegionCode::zz()).is_none());
    assert!(directory.country_by_alpha("").is_none());
    assert!(directory.country_by_alpha("UNITED").is_none());
}

#[test]
fn alpha_form_counts_characters() {
    assert_eq!(AlphaForm::of_identifier("US"), AlphaForm::Alpha2);
    assert_eq!(AlphaForm::of_identifier("USA"), AlphaForm::Alpha3);
    assert_eq!(AlphaForm::of_identifier("ÅX"), AlphaForm::Alpha2);
    assert_eq!(AlphaForm::of_identifier("ÅXY"), AlphaForm::Alpha3);

    let directory =
        PhoneDirectory::new_for_records(collection(vec![record("ÅX", "ÅXY", 358, &[9])]))
            .expect("valid records");
    assert_eq!(directory.country_by_alpha("ÅX").map(|r| r.dialing_code), Some(358));
    assert_eq!(directory.swap_alpha_form("ÅX"), Some("ÅXY"));
    assert_eq!(directory.swap_alpha_form("ÅXY"), Some("ÅX"));
}

#[test]
fn both_alpha_codes_reach_the_same_record() {
    for directory in [&get_test_directory(), &*PHONE_DIRECTORY] {
        for record in directory.records() {
            let by_alpha2 = directory.country_by_alpha(&record.alpha2);
            let by_alpha3 = directory.country_by_alpha(&record.alpha3);
            assert_eq!(by_alpha2, Some(record));
            assert_eq!(by_alpha2, by_alpha3);
        }
    }
}

#[test]
fn swap_alpha_form_round_trips() {
    let directory = get_test_directory();
    assert_eq!(directory.swap_alpha_form("US"), Some("USA"));
    assert_eq!(directory.swap_alpha_form("gbr"), Some("GB"));
    assert_eq!(directory.swap_alpha_form(RegionCode::zz()), None);

    for record in PHONE_DIRECTORY.records() {
        for form in AlphaForm::iter() {
            let code = form.code_of(record);
            let swapped = PHONE_DIRECTORY.swap_alpha_form(code).expect("known code");
            assert_eq!(swapped, form.other().code_of(record));
            assert_eq!(PHONE_DIRECTORY.swap_alpha_form(swapped), Some(code));
        }
    }
}

#[test]
fn country_by_dialing_code_returns_first_match() {
    let directory = get_test_directory();
    let alpha2_of = |code| directory.country_by_dialing_code(code).map(|r| r.alpha2.as_str());
    assert_eq!(alpha2_of(1), Some(RegionCode::us()));
    assert_eq!(alpha2_of(7), Some(RegionCode::ru()));
    assert_eq!(alpha2_of(44), Some(RegionCode::gb()));
    assert_eq!(alpha2_of(971), Some(RegionCode::ae()));
    assert_eq!(alpha2_of(999), None);
}

#[test]
fn options_list_uses_alpha3_without_translation() {
    let directory = get_test_directory();
    let options = directory.options_list(false, None);

    assert_eq!(options.len(), directory.len());
    assert_eq!(options[0], ("US", "USA (+1)".to_owned()));
    assert_eq!(options[1], ("CA", "CAN (+1)".to_owned()));
    assert_eq!(options[8], ("AE", "ARE (+971)".to_owned()));

    let in_order: Vec<&str> = options.iter().map(|(alpha2, _)| *alpha2).collect();
    let records: Vec<&str> = directory.records().iter().map(|r| r.alpha2.as_str()).collect();
    assert_eq!(in_order, records);
}

#[test]
fn options_list_uses_translated_names() {
    let directory = get_test_directory();
    let translator = |alpha2: &str| (alpha2 == "US").then(|| "United States".to_owned());

    let options = directory.options_list(true, Some(&translator as &dyn CountryNameTranslator));
    assert_eq!(options[0].1, "United States (+1)");
    // no translation known, falls back to alpha-3
    assert_eq!(options[1].1, "CAN (+1)");

    let options = directory.options_list(false, Some(&translator as &dyn CountryNameTranslator));
    assert_eq!(options[0].1, "USA (+1)");

    let options = directory.options_list(true, None);
    assert_eq!(options[0].1, "USA (+1)");
}

#[test]
fn validate_number_by_dialing_code() {
    let directory = get_test_directory();

    let validated = directory
        .validate_number(CountryKey::DialingCode("1"), "2025550123", false)
        .expect("valid US number");
    assert_eq!(validated.alpha2(), RegionCode::us());
    assert_eq!(validated.dialing_code(), 1);
    assert_eq!(validated.national_number, 2025550123);

    assert!(directory.is_valid_number(CountryKey::DialingCode("+1"), "(202) 555-0123", false));
    assert!(!directory.is_valid_number(CountryKey::DialingCode("abc"), "2025550123", false));
    assert!(!directory.is_valid_number(CountryKey::DialingCode("999"), "2025550123", false));
}

#[test]
fn validate_number_scans_countries_sharing_a_dialing_code() {
    let directory = get_test_directory();

    // not a US mobile prefix, but a Canadian one
    let validated = directory
        .validate_number(CountryKey::DialingCode("1"), "4165550123", true)
        .expect("valid CA mobile number");
    assert_eq!(validated.alpha2(), RegionCode::ca());

    // without the mobile requirement the first country wins
    let validated = directory
        .validate_number(CountryKey::DialingCode("1"), "4165550123", false)
        .expect("valid number");
    assert_eq!(validated.alpha2(), RegionCode::us());

    assert!(!directory.is_valid_number(CountryKey::DialingCode("1"), "3105550123", true));
}

#[test]
fn validate_number_by_identifier() {
    let directory = get_test_directory();

    assert!(directory.is_valid_number(CountryKey::Identifier("US"), "202-555-0123", false));
    assert!(directory.is_valid_number(CountryKey::Identifier("usa"), "2125550123", true));
    assert!(!directory.is_valid_number(CountryKey::Identifier("US"), "3105550123", true));
    assert!(!directory.is_valid_number(CountryKey::Identifier(RegionCode::zz()), "2025550123", false));

    // a Canadian mobile number is not a US one, the identifier pins the country
    assert!(!directory.is_valid_number(CountryKey::Identifier("US"), "4165550123", true));
}

#[test]
fn validate_number_accepts_every_listed_length() {
    let directory = get_test_directory();

    assert!(directory.is_valid_number(CountryKey::Identifier(RegionCode::de()), "15123456789", true));
    assert!(directory.is_valid_number(CountryKey::Identifier(RegionCode::de()), "3012345678", false));
    assert!(!directory.is_valid_number(CountryKey::Identifier(RegionCode::de()), "3012345678", true));
}

#[test]
fn validate_number_rejects_wrong_length_regardless_of_mobile() {
    let directory = get_test_directory();

    for record in directory.records() {
        let longest = *record.national_number_lengths.iter().max().expect("non-empty lengths");
        let prefix = record.mobile_prefixes.first().cloned().unwrap_or_default();
        let too_long = format!("{prefix}{}", "5".repeat(longest as usize + 1 - prefix.len()));

        for require_mobile in [false, true] {
            assert!(
                !directory.is_valid_number(CountryKey::Identifier(&record.alpha2), &too_long, require_mobile),
                "{} accepted {too_long}",
                record.alpha2
            );
        }
    }
}

#[test]
fn validate_whole_number_reads_the_dialing_code() {
    let directory = get_test_directory();

    let validated = directory
        .validate_whole_number("12025550123", false)
        .expect("valid US number");
    assert_eq!(validated.alpha2(), RegionCode::us());
    assert_eq!(validated.national_number, 2025550123);

    let validated = directory
        .validate_whole_number("+44 7911 123456", true)
        .expect("valid GB mobile number");
    assert_eq!(validated.alpha2(), RegionCode::gb());
    assert_eq!(validated.national_number_string(), "7911123456");

    let validated = directory
        .validate_whole_number("+20 100 123 4567", true)
        .expect("valid EG mobile number");
    assert_eq!(validated.alpha2(), RegionCode::eg());

    let validated = directory
        .validate_whole_number("+971 50 123 4567", true)
        .expect("valid AE mobile number");
    assert_eq!(validated.alpha2(), RegionCode::ae());
    assert_eq!(validated.national_number, 501234567);
}

#[test]
fn validate_whole_number_picks_the_first_accepting_country() {
    let directory = get_test_directory();

    let validated = directory.validate_whole_number("77012345678", false).expect("valid");
    assert_eq!(validated.alpha2(), RegionCode::ru());

    let validated = directory.validate_whole_number("77012345678", true).expect("valid");
    assert_eq!(validated.alpha2(), RegionCode::kz());
}

#[test]
fn validate_whole_number_prefers_shorter_dialing_codes() {
    let directory = PhoneDirectory::new_for_records(collection(vec![
        record("XA", "XAA", 249, &[7]),
        record("XB", "XBB", 2, &[9]),
    ]))
    .expect("valid records");

    // readable both as +249 1234567 and as +2 491234567
    let validated = directory.validate_whole_number("2491234567", false).expect("valid");
    assert_eq!(validated.alpha2(), "XB");
    assert_eq!(validated.national_number, 491234567);
}

#[test]
fn validate_whole_number_rejects_junk() {
    let directory = get_test_directory();

    assert!(directory.validate_whole_number("", false).is_none());
    assert!(directory.validate_whole_number("abc", false).is_none());
    assert!(directory.validate_whole_number("1", false).is_none());
    assert!(directory.validate_whole_number("+1 202 555", false).is_none());
    assert!(directory.validate_whole_number("+1 310 555 0123", true).is_none());
}

#[test]
fn dialing_code_and_alpha_helpers() {
    let directory = get_test_directory();

    assert_eq!(directory.dialing_code_for_country("gb"), Some(44));
    assert_eq!(directory.dialing_code_for_country("GBR"), Some(44));
    assert_eq!(directory.dialing_code_for_country(RegionCode::zz()), None);

    assert_eq!(directory.alpha_for_dialing_code("+7", AlphaForm::Alpha3), Some("RUS"));
    assert_eq!(directory.alpha_for_dialing_code("44", AlphaForm::Alpha2), Some("GB"));
    assert_eq!(directory.alpha_for_dialing_code("0", AlphaForm::Alpha2), None);
    assert_eq!(directory.alpha_for_dialing_code("", AlphaForm::Alpha2), None);
}

#[test]
fn new_for_records_checks_invariants() {
    let duplicate_alpha2 = PhoneDirectory::new_for_records(collection(vec![
        record("US", "USA", 1, &[10]),
        record("US", "UMI", 1, &[10]),
    ]));
    assert_eq!(duplicate_alpha2.err(), Some(DirectoryError::DuplicateAlpha2("US".to_owned())));

    let duplicate_alpha3 = PhoneDirectory::new_for_records(collection(vec![
        record("US", "USA", 1, &[10]),
        record("UM", "usa", 1, &[10]),
    ]));
    assert_eq!(duplicate_alpha3.err(), Some(DirectoryError::DuplicateAlpha3("usa".to_owned())));

    let no_lengths = PhoneDirectory::new_for_records(collection(vec![record("NU", "NIU", 683, &[])]));
    assert_eq!(no_lengths.err(), Some(DirectoryError::MissingNumberLengths("NU".to_owned())));

    let empty = PhoneDirectory::new_for_records(collection(Vec::new())).expect("empty is valid");
    assert!(empty.is_empty());
    assert!(empty.validate_whole_number("12025550123", false).is_none());
}

#[test]
fn from_text_format_reports_broken_data() {
    let broken = PhoneDirectory::from_text_format("country { alpha2: ");
    assert!(matches!(broken, Err(DirectoryError::InvalidData(_))));
}

#[test]
fn compiled_in_directory() {
    assert!(PHONE_DIRECTORY.len() > 200);
    assert_eq!(PHONE_DIRECTORY.records()[0].alpha2, RegionCode::us());
    assert_eq!(PHONE_DIRECTORY.options_list(false, None)[0], ("US", "USA (+1)".to_owned()));

    let us = PHONE_DIRECTORY.country_by_dialing_code(1).expect("NANP");
    assert_eq!(us.alpha2, RegionCode::us());
    assert_eq!(us.national_number_lengths, vec![10]);
    assert_eq!(PHONE_DIRECTORY.alpha_for_dialing_code("7", AlphaForm::Alpha2), Some("RU"));
    assert_eq!(PHONE_DIRECTORY.alpha_for_dialing_code("44", AlphaForm::Alpha2), Some("GB"));

    assert!(PHONE_DIRECTORY.is_valid_number(CountryKey::DialingCode("1"), "2025550123", false));
    let validated = PHONE_DIRECTORY
        .validate_whole_number("12025550123", false)
        .expect("valid US number");
    assert_eq!(validated.alpha2(), RegionCode::us());
    assert!(PHONE_DIRECTORY.validate_whole_number("+1 202 555 0123", true).is_some());
}
