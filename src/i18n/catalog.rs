// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalogs for mail-check diagnostics.
//!
//! Each target language owns an ordered table of `(english, localised)`
//! template pairs. Variable parts of a message are written as
//! `__PLACEHOLDER__`; variable tails the localised text leaves out are
//! written as `__IGNORED__` (see [`super::template`]). Rules are tried in
//! order and the first match wins.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`] and its arms in `code()` / `from_code()`
//! 2. Create a `const XX_XX: &[(&str, &str)]` table below
//! 3. Add a compiled `LazyLock` and wire both into `rules_for()` / `catalog_for()`
//!
//! ## Adding a new message
//!
//! Append the pair to every table. Keep the old English wording as a legacy
//! entry when the scanner rewords a message, since stored results still
//! carry the old text.

use super::error::{Result, TranslateError};
use super::template::Catalog;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

/// Languages a scan result can be rendered in.
///
/// `EnUs` is the scanner's own language: translating into it is the
/// identity and it has no catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "pl_PL")]
    PlPl,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::EnUs => "en_US",
            Lang::PlPl => "pl_PL",
        }
    }

    /// Exact (case-sensitive) code lookup.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en_US" => Some(Lang::EnUs),
            "pl_PL" => Some(Lang::PlPl),
            _ => None,
        }
    }

    pub fn all() -> &'static [Lang] {
        &[Lang::EnUs, Lang::PlPl]
    }

    /// True for the language messages are produced in.
    pub fn is_source(&self) -> bool {
        matches!(self, Lang::EnUs)
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::EnUs => "English (US)",
            Lang::PlPl => "Polski",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = TranslateError;

    /// Accepts `pl_PL`, `pl-PL`, `pl-pl` and bare `pl`.
    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().replace('-', "_").to_ascii_lowercase();
        match normalized.as_str() {
            "en_us" | "en" => Ok(Lang::EnUs),
            "pl_pl" | "pl" => Ok(Lang::PlPl),
            _ => Err(TranslateError::UnknownLanguage(value.to_string())),
        }
    }
}

// ─── Catalog Lookup ─────────────────────────────────────────────────

static PL_PL_CATALOG: LazyLock<Result<Catalog>> = LazyLock::new(|| Catalog::compile(PL_PL));
static EMPTY_CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::default);

/// Raw rule table for `lang`. Empty for the source language.
pub fn rules_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::EnUs => &[],
        Lang::PlPl => PL_PL,
    }
}

/// Compiled catalog for `lang`, built on first use and shared afterwards.
///
/// Errors only if the table itself is malformed, which the catalog tests
/// rule out.
pub fn catalog_for(lang: Lang) -> Result<&'static Catalog> {
    match lang {
        Lang::EnUs => Ok(&*EMPTY_CATALOG),
        Lang::PlPl => match &*PL_PL_CATALOG {
            Ok(catalog) => Ok(catalog),
            Err(err) => Err(err.clone()),
        },
    }
}

// ─── Polish ─────────────────────────────────────────────────────────

const PL_PL: &[(&str, &str)] = &[
    (
        concat!(
            "SPF '~all' or '-all' directive not found. We recommend adding it, as it describes ",
            "what should happen with messages that fail SPF verification. For example, ",
            "'-all' will tell the recipient server to drop such messages.",
        ),
        concat!(
            "Nie znaleziono dyrektywy '~all' lub '-all' w rekordzie SPF. Rekomendujemy jej dodanie, ponieważ ",
            "opisuje ona, jak powinny zostać potraktowane wiadomości, które zostaną odrzucone ",
            "przez mechanizm SPF. Na przykład, dyrektywa '-all' wskazuje serwerowi odbiorcy, ",
            "że powinien odrzucać takie wiadomości.",
        ),
    ),
    (
        concat!(
            "Valid SPF record not found. We recommend using all three mechanisms: SPF, DKIM and DMARC ",
            "to decrease the possibility of successful e-mail message spoofing.",
        ),
        concat!(
            "Nie znaleziono poprawnego rekordu SPF. Rekomendujemy używanie wszystkich trzech mechanizmów: ",
            "SPF, DKIM i DMARC, aby zmniejszyć szansę, że sfałszowana wiadomość zostanie zaakceptowana ",
            "przez serwer odbiorcy.",
        ),
    ),
    (
        concat!(
            "Multiple SPF records found. We recommend leaving only one, as multiple SPF records ",
            "can cause problems with some SPF implementations.",
        ),
        concat!(
            "Wykryto więcej niż jeden rekord SPF. Rekomendujemy pozostawienie jednego z nich - ",
            "obecność wielu rekordów może powodować problemy w działaniu niektórych implementacji mechanizmu SPF.",
        ),
    ),
    (
        concat!(
            "The SPF record references a domain that doesn't have an SPF record. When using directives such ",
            "as 'include' or 'redirect', remember, that the destination domain should have a proper SPF record.",
        ),
        concat!(
            "Rekord SPF odwołuje się do domeny, która nie zawiera rekordu SPF. W przypadku odwoływania się do ",
            "innych domen za pomocą dyrektyw SPF takich jak 'include' lub 'redirect', domena docelowa powinna również ",
            "zawierać rekord SPF.",
        ),
    ),
    (
        concat!(
            "SPF record causes too many void DNS lookups. Some implementations may require the number of ",
            "failed DNS lookups (e.g. ones that reference a nonexistent domain) to be low. The DNS lookups ",
            "are caused by directives such as 'mx' or 'include'.",
        ),
        concat!(
            "Rekord SPF powoduje zbyt wiele nieudanych zapytań DNS. Niektóre implementacje mechanizmu ",
            "SPF wymagają, aby liczba nieudanych zapytań DNS (np. odwołujących się do nieistniejących domen) była ",
            "niska. Takie zapytania DNS mogą być spowodowane np. przez dyrektywy SPF 'mx' czy 'include'.",
        ),
    ),
    (
        concat!(
            "SPF record includes an endless loop. Please check whether 'include' or 'redirect' directives don't ",
            "create a loop where a domain redirects back to itself or earlier domain.",
        ),
        concat!(
            "Rekord SPF zawiera nieskończoną pętlę. Prosimy sprawdzić, czy dyrektywy SPF 'include' lub 'redirect' ",
            "nie odwołują się z powrotem do tej samej domeny lub do wcześniejszych domen.",
        ),
    ),
    (
        "SPF record is not syntactically correct. Please closely inspect its syntax.",
        "Rekord SPF nie ma poprawnej składni. Prosimy o jego dokładną weryfikację.",
    ),
    (
        concat!(
            "SPF record causes too many DNS lookups. The DNS lookups are caused by directives such as 'mx' or 'include'. ",
            "The specification requires the number of DNS lookups to be lower or equal to 10 to decrease load on DNS servers.",
        ),
        concat!(
            "Rekord SPF powoduje zbyt wiele zapytań DNS. Zapytania DNS są powodowane przez niektóre dyrektywy SPF, takie jak ",
            "'mx' czy 'include'. Spefycikacja wymaga, aby liczba zapytań DNS nie przekraczała 10, aby nie powodować nadmiernego ",
            "obciążenia serwerów DNS.",
        ),
    ),
    (
        "The ptr mechanism should not be used - https://tools.ietf.org/html/rfc7208#section-5.5",
        concat!(
            "Zgodnie ze specyfikacją SPF, nie należy używać mechanizmu 'ptr'. Pod adresem ",
            "https://tools.ietf.org/html/rfc7208#section-5.5 można znaleźć uzasadnienie tej rekomendacji.",
        ),
    ),
    (
        concat!(
            "Valid DMARC record not found. We recommend using all three mechanisms: SPF, DKIM and DMARC ",
            "to decrease the possibility of successful e-mail message spoofing.",
        ),
        concat!(
            "Nie znaleziono poprawnego rekordu DMARC. Rekomendujemy używanie wszystkich trzech mechanizmów: ",
            "SPF, DKIM i DMARC, aby zmniejszyć szansę, żę sfałszowana wiadomość zostanie zaakceptowana ",
            "przez serwer odbiorcy.",
        ),
    ),
    (
        "DMARC policy is 'none' and 'rua' is not set, which means that the DMARC setting is not effective.",
        concat!(
            "Polityka DMARC jest ustawiona na 'none' i nie ustawiono odbiorcy raportów w polu 'rua', co ",
            "oznacza, że ustawienie DMARC nie będzie skuteczne.",
        ),
    ),
    (
        "The DMARC record must be located at __PLACEHOLDER__, not __PLACEHOLDER__",
        "Rekord DMARC powinien znajdować się w domenie __PLACEHOLDER__, nie __PLACEHOLDER__.",
    ),
    (
        concat!(
            "There are multiple DMARC records. We recommend leaving only one, as multiple ",
            "DMARC records can cause problems with some DMARC implementations.",
        ),
        concat!(
            "Wykryto więcej niż jeden rekord DMARC. Rekomendujemy pozostawienie jednego z nich - ",
            "obecność wielu rekordów może powodować problemy w działaniu niektórych implementacji ",
            "mechanizmu DMARC.",
        ),
    ),
    (
        "There is a SPF record instead of DMARC one on the '_dmarc' subdomain.",
        "Zamiast rekordu DMARC wykryto rekord SPF w subdomenie '_dmarc'.",
    ),
    (
        "DMARC record is not syntactically correct. Please closely inspect its syntax.",
        "Rekord DMARC nie ma poprawnej składni. Prosimy o jego dokładną weryfikację.",
    ),
    (
        concat!(
            "DMARC record uses an invalid tag. Please refer to https://datatracker.ietf.org/doc/html/rfc7489#section-6.3 ",
            "for the list of available tags.",
        ),
        concat!(
            "Rekord DMARC zawiera niepoprawne pole. Pod adresem ",
            "https://cert.pl/posts/2021/10/mechanizmy-weryfikacji-nadawcy-wiadomosci/#dmarc-pola ",
            "znajdziesz opis przykładowych pól, które mogą znaleźć się w takim rekordzie, a w specyfikacji mechanizmu ",
            "DMARC pod adresem https://datatracker.ietf.org/doc/html/rfc7489#section-6.3 - opis wszystkich pól.",
        ),
    ),
    (
        "DMARC report URI is invalid. The report URI should be an e-mail address prefixed with mailto:.",
        "Adres raportów DMARC jest niepoprawny. Powinien to być adres e-mail rozpoczynający się od mailto:.",
    ),
    (
        "The destination of a DMARC report URI does not indicate that it accepts reports for the domain.",
        "Adres raportów DMARC nie wskazuje, że przyjmuje raporty z tej domeny.",
    ),
    (
        "Subdomain policy (sp=) should be reject for parked domains",
        concat!(
            "Polityka subdomen (sp=) powinna być ustawiona na 'reject' dla domen ",
            "niesłużących do wysyłki poczty - serwer odbiorcy powinien odrzucać wiadomości z takich domen.",
        ),
    ),
    (
        "Policy (p=) should be reject for parked domains",
        concat!(
            "Polityka (p=) powinna być ustawiona na 'reject' dla domen niesłużących ",
            "do wysyłki poczty - serwer odbiorcy powinien odrzucać wiadomości z takich domen.",
        ),
    ),
    (
        concat!(
            "Unrelated TXT record found in the '_dmarc' subdomain. We recommend removing it, as such unrelated ",
            "records may cause problems with some DMARC implementations.",
        ),
        concat!(
            "Znaleziono niepowiązane rekordy TXT w subdomenie '_dmarc'. Rekomendujemy ich usunięcie, ponieważ ",
            "niektóre serwery mogą w takiej sytuacji odrzucić konfigurację DMARC jako błędną.",
        ),
    ),
    (
        concat!(
            "The domain of the email address in a DMARC report URI is missing MX records. That means, that this domain ",
            "may not receive DMARC reports.",
        ),
        concat!(
            "Domena adresu e-mail w adresie raportów DMARC nie zawiera rekordów MX. Oznacza to, że raporty DMARC mogą nie być ",
            "poprawnie dostarczane.",
        ),
    ),
    (
        concat!(
            "DMARC policy is 'none', which means that besides reporting no action will be taken. The policy describes what ",
            "action the recipient server should take when noticing a message that doesn't pass the verification. 'quarantine' policy ",
            "suggests the recipient server to flag the message as spam and 'reject' policy suggests the recipient ",
            "server to reject the message. We recommend using the 'quarantine' or 'reject' policy.",
        ),
        concat!(
            "Polityka DMARC jest ustawiona na 'none', co oznacza, że oprócz raportowania, żadna dodatkowa akcja nie zostanie ",
            "wykonana. Polityka DMARC opisuje serwerowi odbiorcy, jaką akcję powinien podjąć, gdy wiadomość nie zostanie ",
            "poprawnie zweryfikowana. Polityka 'quarantine' oznacza, że taka wiadomość powinna zostać oznaczona jako spam, a polityka 'reject' - że ",
            "powinna zostać odrzucona przez serwer odbiorcy. Rekomendujemy korzystanie z polityki 'quarantine' lub 'reject'.",
        ),
    ),
    (
        "rua tag (destination for aggregate reports) not found",
        "Nie znaleziono tagu 'rua' (odbiorca zagregowanych raportów).",
    ),
    (
        "Whitespace in domain name detected. Please provide a correct domain name.",
        "Wykryto białe znaki w nazwie domeny. Prosimy o podanie poprawnej nazwy domeny.",
    ),
    (
        "Unexpected character in domain detected: __PLACEHOLDER__. Please provide a correct domain name.",
        "Wykryto błędne znaki w nazwie domeny: __PLACEHOLDER__. Prosimy o podanie poprawnej nazwy domeny.",
    ),
    (
        "Any text after the all mechanism is ignored",
        concat!(
            "Tekst umieszczony po dyrektywie 'all' zostanie zignorowany. Rekomendujemy jego usunięcie, lub, ",
            "jeśli jest niezbędnym elementem konfiguracji, umieszczenie przed dyrektywą 'all' rekordu SPF.",
        ),
    ),
    (
        "No DKIM signature found",
        concat!(
            "Nie znaleziono podpisu DKIM. Rekomendujemy używanie wszystkich trzech mechanizmów: SPF, DKIM i DMARC, aby ",
            "zmniejszyć szansę, żę sfałszowana wiadomość zostanie zaakceptowana przez serwer odbiorcy.",
        ),
    ),
    (
        "Found an invalid DKIM signature",
        "Znaleziono niepoprawny podpis mechanizmu DKIM.",
    ),
    (
        "SPF records containing macros aren't supported yet.",
        "Rekordy SPF zawierające makra nie są wspierane.",
    ),
    (
        "The resolution lifetime expired after __IGNORED__",
        "Przekroczono czas oczekiwania na odpowiedź serwera DNS. Prosimy spróbować jeszcze raz.",
    ),
    (
        "DMARC record at root of __PLACEHOLDER__ has no effect",
        "Rekord DMARC w domenie '__PLACEHOLDER__' (zamiast w subdomenie '_dmarc') nie zostanie uwzględniony.",
    ),
    (
        concat!(
            "Found a DMARC record that starts with whitespace. Please remove the whitespace, as some ",
            "implementations may not process it correctly.",
        ),
        concat!(
            "Wykryto rekord DMARC zaczynający się od spacji lub innych białych znaków. Rekomendujemy ich ",
            "usunięcie, ponieważ niektóre serwery pocztowe mogą nie zinterpretować takiego rekordu poprawnie.",
        ),
    ),
    (
        "__PLACEHOLDER__ does not have any MX records",
        concat!(
            "Rekord SPF w domenie __PLACEHOLDER__ korzysta z dyrektywy SPF 'mx', lecz nie wykryto rekordów MX, w związku ",
            "z czym ta dyrektywa nie zadziała poprawnie.",
        ),
    ),
    (
        "__PLACEHOLDER__ does not have any A/AAAA records",
        concat!(
            "Rekord SPF w domenie __PLACEHOLDER__ korzysta z dyrektywy SPF 'a', lecz nie wykryto rekordów A/AAAA, w związku ",
            "z czym ta dyrektywa nie zadziała poprawnie.",
        ),
    ),
    (
        concat!(
            "__PLACEHOLDER__ does not indicate that it accepts DMARC reports about __PLACEHOLDER__ - ",
            "Authorization record not found: __IGNORED__",
        ),
        concat!(
            "Domena __PLACEHOLDER__ nie wskazuje, że przyjmuje raporty DMARC na temat domeny __PLACEHOLDER__ - ",
            "nie wykryto rekordu autoryzacyjnego.",
        ),
    ),
    (
        concat!(
            "SPF type DNS records found. Use of DNS Type SPF has been removed in the standards track version of SPF, RFC 7208. These records ",
            "should be removed and replaced with TXT records: __IGNORED__",
        ),
        "Wykryto rekordy DNS o typie SPF. Wykorzystanie rekordów tego typu zostało usunięte ze standardu - powinny zostać zastąpione rekordami TXT.",
    ),
    (
        concat!(
            "Requested to scan a domain that is a public suffix, i.e. a domain such as .com where anybody could ",
            "register their subdomain. Such domain don't have to have properly configured e-mail sender verification ",
            "mechanisms. Please make sure you really wanted to check such domain and not its subdomain.",
        ),
        concat!(
            "Sprawdzają Państwo domenę z listy Public Suffix List (https://publicsuffix.org/) czyli taką jak .pl, gdzie  ",
            "różne podmioty mogą zarejestrować swoje subdomeny. Takie domeny nie muszą mieć skonfigurowanych mechanizmów ",
            "weryfikacji nadawcy poczty - konfigurowane są one w subdomenach. Prosimy o weryfikację nazwy sprawdzanej domeny.",
        ),
    ),
    (
        concat!(
            "Requested to scan a top-level domain. Top-level domains don't have to have properly configured e-mail sender ",
            "verification mechanisms. Please make sure you really wanted to check such domain and not its subdomain.",
            "Besides, the domain is not known to the Public Suffix List (https://publicsuffix.org/) - please verify whether ",
            "it is correct.",
        ),
        concat!(
            "Sprawdzają Państwo domenę najwyższego poziomu. Domeny najwyższego poziomu nie muszą mieć ",
            "skonfigurowanych mechanizmów weryfikacji nadawcy poczty - konfigurowane są one w subdomenach. Prosimy ",
            "o weryfikację nazwy sprawdzanej domeny. Domena nie występuje również na Public Suffix List ",
            "(https://publicsuffix.org/) - prosimy o weryfikację jej poprawności.",
        ),
    ),
    (
        "Please provide a correct domain name.",
        "Proszę podać poprawną nazwę domeny.",
    ),
    (
        concat!(
            "Failed to retrieve MX records for the domain of __PLACEHOLDER__ email address __PLACEHOLDER__ - ",
            "All nameservers failed to answer the query __IGNORED__",
        ),
        concat!(
            "Nie udało się odczytać rekordów MX domeny adresu e-mail w dyrektywie __PLACEHOLDER__: __PLACEHOLDER__ - ",
            "serwery nazw nie odpowiedziały poprawnie na zapytanie.",
        ),
    ),
    (
        "All nameservers failed to answer the query __PLACEHOLDER__. IN __IGNORED__",
        "Żaden z przypisanych serwerów nazw domen nie odpowiedział na zapytanie dotyczące domeny __PLACEHOLDER__.",
    ),
    // Wording used by older scanner versions. Results stored before the
    // rewording still carry these.
    (
        "Valid DMARC record not found",
        concat!(
            "Nie znaleziono poprawnego rekordu DMARC. Rekomendujemy używanie wszystkich trzech mechanizmów: ",
            "SPF, DKIM i DMARC, aby zmniejszyć szansę, żę sfałszowana wiadomość zostanie zaakceptowana ",
            "przez serwer odbiorcy.",
        ),
    ),
    (
        "SPF ~all or -all directive not found",
        concat!(
            "Nie znaleziono dyrektywy '~all' lub '-all' w rekordzie SPF. Rekomendujemy jej dodanie, ponieważ ",
            "opisuje ona, jak powinny zostać potraktowane wiadomości, które zostaną odrzucone ",
            "przez mechanizm SPF. Na przykład, dyrektywa '-all' wskazuje serwerowi odbiorcy, ",
            "że powinien odrzucać takie wiadomości.",
        ),
    ),
    (
        "DMARC policy is none and rua is not set, which means that the DMARC setting is not effective.",
        concat!(
            "Polityka DMARC jest ustawiona na 'none' i nie ustawiono odbiorcy raportów w polu 'rua', co ",
            "oznacza, że ustawienie DMARC nie będzie skuteczne.",
        ),
    ),
    (
        "SPF record not found in domain referenced from other SPF record",
        concat!(
            "Rekord SPF odwołuje się do domeny, która nie zawiera rekordu SPF. W przypadku odwoływania się do ",
            "innych domen za pomocą dyrektyw SPF takich jak 'include' lub 'redirect', domena docelowa powinna również ",
            "zawierać rekord SPF.",
        ),
    ),
    (
        "Valid SPF record not found",
        concat!(
            "Nie znaleziono poprawnego rekordu SPF. Rekomendujemy używanie wszystkich trzech mechanizmów: ",
            "SPF, DKIM i DMARC, aby zmniejszyć szansę, że sfałszowana wiadomość zostanie zaakceptowana ",
            "przez serwer odbiorcy.",
        ),
    ),
    (
        "SPF record is not syntatically correct",
        "Rekord SPF nie ma poprawnej składni. Prosimy o jego dokładną weryfikację.",
    ),
    (
        "DMARC record is not syntatically correct",
        "Rekord DMARC nie ma poprawnej składni. Prosimy o jego dokładną weryfikację.",
    ),
    (
        "Multiple SPF records found",
        concat!(
            "Wykryto więcej niż jeden rekord SPF. Rekomendujemy pozostawienie jednego z nich - ",
            "obecność wielu rekordów może powodować problemy w działaniu niektórych implementacji mechanizmu SPF.",
        ),
    ),
    (
        "SPF record includes an endless loop",
        concat!(
            "Rekord SPF zawiera nieskończoną pętlę. Prosimy sprawdzić, czy dyrektywy SPF 'include' lub 'redirect' ",
            "nie odwołują się z powrotem do tej samej domeny lub do wcześniejszych domen.",
        ),
    ),
    (
        "SPF record includes too many DNS lookups",
        concat!(
            "Rekord SPF powoduje zbyt wiele zapytań DNS. Zapytania DNS są powodowane przez niektóre dyrektywy SPF, takie jak ",
            "'mx' czy 'include'. Spefycikacja wymaga, aby liczba zapytań DNS nie przekraczała 10, aby nie powodować nadmiernego ",
            "obciążenia serwerów DNS.",
        ),
    ),
];

#[cfg(test)]
mod tests {
    use super::super::template::{Template, IGNORED, PLACEHOLDER};
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_catalog_compiles() {
        for lang in Lang::all() {
            let catalog = catalog_for(*lang).expect("catalog should compile");
            assert_eq!(catalog.len(), rules_for(*lang).len(), "{lang} rule count");
        }
    }

    #[test]
    fn source_and_target_slot_counts_agree() {
        for lang in Lang::all() {
            for (i, (source, target)) in rules_for(*lang).iter().enumerate() {
                assert_eq!(
                    Template::parse(source).slot_count(),
                    Template::parse(target).slot_count(),
                    "{lang} rule #{i}: {source}"
                );
                assert!(
                    !target.contains(IGNORED),
                    "{lang} rule #{i} target uses the ignored marker"
                );
            }
        }
    }

    #[test]
    fn no_duplicate_source_templates() {
        for lang in Lang::all() {
            let mut seen = HashSet::new();
            for (source, _) in rules_for(*lang) {
                assert!(seen.insert(*source), "{lang} duplicate source: {source}");
            }
        }
    }

    #[test]
    fn source_language_has_no_rules() {
        assert!(rules_for(Lang::EnUs).is_empty());
        assert!(catalog_for(Lang::EnUs).unwrap().is_empty());
    }

    #[test]
    fn polish_catalog_covers_slot_rules() {
        let with_slots = rules_for(Lang::PlPl)
            .iter()
            .filter(|(source, _)| source.contains(PLACEHOLDER))
            .count();
        assert!(with_slots >= 6, "expected the variable-bearing rules, got {with_slots}");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
            assert_eq!(lang.code().parse::<Lang>().unwrap(), *lang);
        }
    }

    #[test]
    fn lang_parse_is_lenient_on_spelling() {
        assert_eq!("pl-PL".parse::<Lang>().unwrap(), Lang::PlPl);
        assert_eq!("PL".parse::<Lang>().unwrap(), Lang::PlPl);
        assert_eq!(" en ".parse::<Lang>().unwrap(), Lang::EnUs);
        assert!(matches!(
            "de_DE".parse::<Lang>(),
            Err(TranslateError::UnknownLanguage(code)) if code == "de_DE"
        ));
        assert_eq!(Lang::from_code("pl-PL"), None);
    }

    #[test]
    fn lang_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Lang::PlPl).unwrap(), "\"pl_PL\"");
        let parsed: Lang = serde_json::from_str("\"en_US\"").unwrap();
        assert_eq!(parsed, Lang::EnUs);
        assert_eq!(Lang::default(), Lang::EnUs);
    }
}
