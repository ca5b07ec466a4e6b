// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scan result translation against a stored scanner fixture

use mailcheck_translate::i18n::{keep_original, translate_scan_result, Lang, TranslateError};
use mailcheck_translate::report::{self, ReportOutputFormat};
use mailcheck_translate::types::*;
use std::path::{Path, PathBuf};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scan_result.json")
}

fn fixture() -> ScanResult {
    report::load_scan_result(fixture_path()).expect("fixture should load")
}

#[test]
fn test_fixture_translates_to_polish() {
    let input = fixture();
    let output = translate_scan_result(&input, Lang::PlPl, None).expect("fully translatable");

    let domain = output.domain.as_ref().expect("domain kept");
    let spf = domain.spf.as_ref().expect("spf kept");
    assert!(spf.errors[0].starts_with("Rekord SPF powoduje zbyt wiele zapytań DNS."));
    assert_eq!(spf.warnings.len(), 2);
    assert!(spf.warnings[0].starts_with(
        "Rekord SPF w domenie mail.example.com korzysta z dyrektywy SPF 'mx'"
    ));
    assert!(spf.warnings[1].starts_with(
        "Rekord SPF w domenie mail.example.com korzysta z dyrektywy SPF 'a'"
    ));

    let dmarc = domain.dmarc.as_ref().expect("dmarc kept");
    assert_eq!(
        dmarc.errors,
        vec!["Rekord DMARC powinien znajdować się w domenie _dmarc.example.com, nie example.com."]
    );
    assert_eq!(
        dmarc.warnings[1],
        "Domena reports.example.org nie wskazuje, że przyjmuje raporty DMARC na temat domeny \
         example.com - nie wykryto rekordu autoryzacyjnego."
    );

    assert_eq!(
        domain.warnings,
        vec!["Przekroczono czas oczekiwania na odpowiedź serwera DNS. Prosimy spróbować jeszcze raz."]
    );

    let dkim = output.dkim.as_ref().expect("dkim kept");
    assert!(dkim.errors[0].starts_with("Nie znaleziono podpisu DKIM."));
    assert!(dkim.warnings.is_empty());
}

#[test]
fn test_non_message_fields_are_carried_over() {
    let input = fixture();
    let output = translate_scan_result(&input, Lang::PlPl, None).expect("translatable");

    let (before, after) = (input.domain.as_ref().unwrap(), output.domain.as_ref().unwrap());
    assert_eq!(after.domain, before.domain);
    assert_eq!(after.base_domain, before.base_domain);
    assert_eq!(after.spf.as_ref().unwrap().record, before.spf.as_ref().unwrap().record);
    assert_eq!(after.spf.as_ref().unwrap().valid, before.spf.as_ref().unwrap().valid);
    let (d_before, d_after) = (before.dmarc.as_ref().unwrap(), after.dmarc.as_ref().unwrap());
    assert_eq!(d_after.tags, d_before.tags);
    assert_eq!(d_after.location, d_before.location);
    assert_eq!(d_after.record, d_before.record);
    assert_eq!(output.timestamp, input.timestamp);
    assert_eq!(output.message_timestamp, input.message_timestamp);
    assert_eq!(output.message_count(), input.message_count());
}

#[test]
fn test_input_is_never_mutated() {
    let input = fixture();
    let snapshot = input.clone();
    let _ = translate_scan_result(&input, Lang::PlPl, None).expect("translatable");
    assert_eq!(input, snapshot);
}

#[test]
fn test_identity_language_copies() {
    let input = fixture();
    let output = translate_scan_result(&input, Lang::EnUs, None).expect("identity");
    assert_eq!(output, input);
}

#[test]
fn test_absent_parts_stay_absent() {
    let input = ScanResult {
        domain: Some(DomainScanResult {
            spf: None,
            dmarc: Some(DmarcScanResult {
                errors: vec!["Valid DMARC record not found".to_string()],
                ..Default::default()
            }),
            domain: "example.pl".to_string(),
            base_domain: "example.pl".to_string(),
            warnings: Vec::new(),
        }),
        ..Default::default()
    };
    let output = translate_scan_result(&input, Lang::PlPl, None).expect("translatable");
    let domain = output.domain.expect("domain kept");
    assert!(domain.spf.is_none());
    assert!(output.dkim.is_none());
    assert!(domain.dmarc.unwrap().errors[0].starts_with("Nie znaleziono poprawnego rekordu DMARC."));
}

#[test]
fn test_unknown_message_is_all_or_nothing() {
    let mut input = fixture();
    input
        .dkim
        .as_mut()
        .unwrap()
        .warnings
        .push("DKIM key is shorter than 1024 bits".to_string());

    let err = translate_scan_result(&input, Lang::PlPl, None).expect_err("strict mode fails");
    assert!(matches!(
        err,
        TranslateError::UnsupportedMessage(ref msg) if msg == "DKIM key is shorter than 1024 bits"
    ));

    let lenient = translate_scan_result(&input, Lang::PlPl, Some(&keep_original))
        .expect("fallback keeps English");
    let dkim = lenient.dkim.unwrap();
    assert_eq!(dkim.warnings, vec!["DKIM key is shorter than 1024 bits"]);
    assert!(dkim.errors[0].starts_with("Nie znaleziono podpisu DKIM."));
}

#[test]
fn test_custom_fallback_sees_original_message() {
    let mut input = fixture();
    input.domain.as_mut().unwrap().warnings = vec!["brand new scanner warning".to_string()];
    let tag = |m: &str| format!("[EN] {}", m);
    let output = translate_scan_result(&input, Lang::PlPl, Some(&tag)).expect("fallback");
    assert_eq!(
        output.domain.unwrap().warnings,
        vec!["[EN] brand new scanner warning"]
    );
}

#[test]
fn test_translated_result_round_trips_through_yaml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("translated.yaml");
    let translated = translate_scan_result(&fixture(), Lang::PlPl, None).expect("translatable");
    report::save_scan_result(&translated, &path, ReportOutputFormat::Yaml).expect("save");
    let loaded = report::load_scan_result(&path).expect("load");
    assert_eq!(loaded, translated);
}
