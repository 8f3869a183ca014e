use super::*;
use redatta_core::Label;
use redatta_lexicon::{CategoryLexicon, WordList};

fn texts(text: &str, spans: &[redatta_core::Span]) -> Vec<String> {
    spans
        .iter()
        .map(|s| text[s.start..s.end].to_string())
        .collect()
}

#[test]
fn mail_matches_addresses() {
    let detector = MailDetector::new().unwrap();
    let text = "Contattami a mario.rossi@example.it o scrivi dopo.";
    let spans = detector.detect(text);
    assert_eq!(texts(text, &spans), ["mario.rossi@example.it"]);
    assert!(spans.iter().all(|s| s.label == Label::Mail));
}

#[test]
fn mail_ignores_plain_text() {
    let detector = MailDetector::new().unwrap();
    assert!(detector.detect("nessun indirizzo qui").is_empty());
}

#[test]
fn phone_matches_digit_runs() {
    let detector = PhoneDetector::new().unwrap();
    let text = "chiamare il 333 1234567 in mattinata";
    let spans = detector.detect(text);
    assert_eq!(texts(text, &spans), ["333 1234567"]);
    assert_eq!(spans[0].label, Label::Phone);
}

#[test]
fn phone_includes_extension_suffix() {
    let detector = PhoneDetector::new().unwrap();
    let text = "centralino 02 1234567 ext 22, interno chirurgia";
    let spans = detector.detect(text);
    assert_eq!(texts(text, &spans), ["02 1234567 ext 22"]);
}

#[test]
fn phone_rejects_dates() {
    let detector = PhoneDetector::new().unwrap();
    assert!(detector.detect("ricovero del 12/05/2024 reparto B").is_empty());
    assert!(detector.detect("controllo 01-02-2023 14:30 ambulatorio").is_empty());
}

#[test]
fn phone_rejects_digit_runs_inside_tokens() {
    let detector = PhoneDetector::new().unwrap();
    // part of a longer alphanumeric code, not a phone number
    assert!(detector.detect("pratica XJ333123456789").is_empty());
}

#[test]
fn phone_requires_enough_digits() {
    let detector = PhoneDetector::new().unwrap();
    assert!(detector.detect("stanza 12 34 56").is_empty());
}

#[test]
fn url_matches_full_and_bare_forms() {
    let detector = UrlDetector::new().unwrap();
    let text = "vedi https://www.ospedale.it/reparti e example.it/percorso";
    let spans = detector.detect(text);
    assert_eq!(
        texts(text, &spans),
        ["https://www.ospedale.it/reparti", "example.it/percorso"]
    );
    assert!(spans.iter().all(|s| s.label == Label::Url));
}

#[test]
fn url_matches_ipv4() {
    let detector = UrlDetector::new().unwrap();
    let text = "portale interno 10.0.12.7:8080";
    let spans = detector.detect(text);
    assert_eq!(texts(text, &spans), ["10.0.12.7:8080"]);
}

#[test]
fn code_matches_fiscal_code_first() {
    let detector = CodeDetector::new().unwrap();
    let text = "CF RSSMRA85T10A562S del paziente";
    let spans = detector.detect(text);
    assert_eq!(texts(text, &spans), ["RSSMRA85T10A562S"]);
    assert_eq!(spans[0].label, Label::Code);
}

#[test]
fn code_matches_postal_and_document_numbers() {
    let detector = CodeDetector::new().unwrap();
    let text = "CAP 20121, passaporto AB1234567";
    let spans = detector.detect(text);
    assert_eq!(texts(text, &spans), ["20121", "AB1234567"]);
}

#[test]
fn code_matches_icd10_style() {
    let detector = CodeDetector::new().unwrap();
    let text = "diagnosi J45.901 confermata";
    let spans = detector.detect(text);
    assert_eq!(texts(text, &spans), ["J45.901"]);
}

#[test]
fn code_generic_needs_letter_and_digit() {
    let detector = CodeDetector::new().unwrap();
    let text = "riferimento XK-2023-11, sigla ABC, conteggio 123456789";
    let spans = detector.detect(text);
    assert_eq!(texts(text, &spans), ["XK-2023-11"]);
}

#[test]
fn code_generic_skips_rendered_tags() {
    let detector = CodeDetector::new().unwrap();
    assert!(detector.detect("gia' mascherato [AB12] qui").is_empty());
}

fn province_lexicon() -> CategoryLexicon {
    CategoryLexicon {
        unambiguous: WordList::from_lines(["TO", "BG"]),
        ambiguous: WordList::from_lines(["MI", "PO"]),
    }
}

#[test]
fn province_unambiguous_matches_standalone_tokens() {
    let detector = ProvinceDetector::new(&province_lexicon()).unwrap();
    let text = "Torino (TO), FOTO in cartella, ricovero BG";
    let spans = detector.detect(text);
    // "TO" inside "FOTO" is glued to word characters and must not match
    assert_eq!(texts(text, &spans), ["TO", "BG"]);
    assert!(spans.iter().all(|s| s.label == Label::Prov));
}

#[test]
fn province_ambiguous_requires_parentheses() {
    let detector = ProvinceDetector::new(&province_lexicon()).unwrap();
    let text = "Milano (MI), mi sento meglio, MI alta";
    let spans = detector.detect(text);
    assert_eq!(texts(text, &spans), ["MI"]);
    assert_eq!(spans[0].start, text.find("(MI)").unwrap() + 1);
}

#[test]
fn province_empty_lexicon_yields_nothing() {
    let detector = ProvinceDetector::new(&CategoryLexicon::default()).unwrap();
    assert!(detector.detect("Milano (MI)").is_empty());
}
