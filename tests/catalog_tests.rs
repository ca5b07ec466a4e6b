// SPDX-License-Identifier: PMPL-1.0-or-later

//! Properties every shipped catalog must hold

use mailcheck_translate::i18n::{
    catalog_for, rules_for, translate, translate_message, Catalog, Lang, Template, TranslateError,
    PLACEHOLDER,
};

#[test]
fn test_every_rule_has_matching_slot_counts() {
    for lang in Lang::all() {
        for (index, (source, target)) in rules_for(*lang).iter().enumerate() {
            assert_eq!(
                Template::parse(source).slot_count(),
                Template::parse(target).slot_count(),
                "{} rule #{} has mismatched slots",
                lang,
                index
            );
        }
    }
}

#[test]
fn test_filled_source_translates_to_filled_target() {
    for lang in Lang::all() {
        let catalog = catalog_for(*lang).expect("catalog compiles");
        for (index, (source, target)) in rules_for(*lang).iter().enumerate() {
            let source = Template::parse(source);
            let target = Template::parse(target);
            let values: Vec<String> = (0..source.slot_count())
                .map(|i| format!("value-{}-{}.example", index, i))
                .collect();

            let message = source.fill(&values);
            let translated = translate(&message, catalog, None)
                .unwrap_or_else(|err| panic!("{} rule #{}: {}", lang, index, err));
            assert_eq!(translated, target.fill(&values), "{} rule #{}", lang, index);
        }
    }
}

#[test]
fn test_literal_rule_needs_exact_message() {
    let exact = translate_message("No DKIM signature found", Lang::PlPl, None).expect("known");
    assert!(exact.starts_with("Nie znaleziono podpisu DKIM."));

    for near_miss in [
        "No DKIM signature found.",
        "No DKIM signature found ",
        "no DKIM signature found",
        "No  DKIM signature found",
    ] {
        assert!(
            matches!(
                translate_message(near_miss, Lang::PlPl, None),
                Err(TranslateError::UnsupportedMessage(_))
            ),
            "{:?} should not match",
            near_miss
        );
    }
}

#[test]
fn test_single_slot_rule_inserts_domain() {
    let translated = translate_message(
        "example.com does not have any MX records",
        Lang::PlPl,
        None,
    )
    .expect("known");
    assert_eq!(
        translated,
        "Rekord SPF w domenie example.com korzysta z dyrektywy SPF 'mx', lecz nie wykryto \
         rekordów MX, w związku z czym ta dyrektywa nie zadziała poprawnie."
    );
}

#[test]
fn test_slot_values_keep_source_order() {
    let translated = translate_message(
        "Failed to retrieve MX records for the domain of rua email address \
         dmarc@reports.example.org - All nameservers failed to answer the query \
         reports.example.org. IN MX: Server 1.1.1.1 UDP port 53 answered SERVFAIL",
        Lang::PlPl,
        None,
    )
    .expect("known");
    assert_eq!(
        translated,
        "Nie udało się odczytać rekordów MX domeny adresu e-mail w dyrektywie rua: \
         dmarc@reports.example.org - serwery nazw nie odpowiedziały poprawnie na zapytanie."
    );
}

#[test]
fn test_reordered_target_needs_reordered_source_captures() {
    // Slots fill by position, so a target that names the values in the
    // opposite order receives them in source order.
    let source = format!("from {p} to {p}", p = PLACEHOLDER);
    let target = format!("do {p} z {p}", p = PLACEHOLDER);
    let catalog = Catalog::compile(&[(source.as_str(), target.as_str())]).expect("valid");
    assert_eq!(
        translate("from a.example to b.example", &catalog, None).unwrap(),
        "do a.example z b.example"
    );
}

#[test]
fn test_legacy_wording_still_translates() {
    for legacy in [
        "Valid DMARC record not found",
        "SPF ~all or -all directive not found",
        "SPF record is not syntatically correct",
        "SPF record includes too many DNS lookups",
    ] {
        assert!(
            translate_message(legacy, Lang::PlPl, None).is_ok(),
            "legacy message {:?} should translate",
            legacy
        );
    }
}

#[test]
fn test_catalog_is_shared_between_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let message = format!("host{}.example does not have any MX records", i);
                translate_message(&message, Lang::PlPl, None).expect("known")
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let translated = handle.join().expect("thread completes");
        assert!(translated.contains(&format!("host{}.example", i)));
    }
}
