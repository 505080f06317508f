use money_fragments::{
    CurrencyDisplay, FragmentSet, Money, MoneyConfig, MoneyError, RawValue, extract_fragments,
};
use rust_decimal_macros::dec;

fn extract(locale: &str, currency: &str, raw: impl Into<RawValue>) -> (FragmentSet, bool) {
    extract_fragments(Some(locale), currency, raw).unwrap()
}

#[test]
fn test_dollar_before_number() {
    let (fragments, reverse) = extract("en-US", "USD", 1234.56);
    assert_eq!(fragments.symbol, "$");
    assert_eq!(fragments.number, "1,234.56");
    assert_eq!(fragments.operator, "+");
    assert_eq!(fragments.currency, "USD");
    assert!(!reverse);
}

#[test]
fn test_negative_real() {
    let (fragments, reverse) = extract("pt-BR", "BRL", -100);
    assert_eq!(fragments.operator, "-");
    assert!(fragments.number.contains("100"));
    assert_eq!(fragments.number, "100,00");
    assert_eq!(fragments.symbol, "R$");
    assert!(!reverse);
}

#[test]
fn test_euro_after_number() {
    let (fragments, reverse) = extract("de-DE", "EUR", "1234.56");
    assert_eq!(fragments.number, "1.234,56");
    assert_eq!(fragments.symbol, "€");
    assert!(reverse);

    let (fragments, reverse) = extract("fr-FR", "EUR", dec!(1234567.8));
    assert_eq!(fragments.number, "1\u{202f}234\u{202f}567,80");
    assert_eq!(fragments.symbol, "€");
    assert!(reverse);
}

#[test]
fn test_swiss_apostrophe_grouping() {
    let (fragments, reverse) = extract("de-CH", "CHF", 1234567.5);
    assert_eq!(fragments.number, "1’234’567.50");
    // CHF has no symbol of its own, so only the code was shown
    assert_eq!(fragments.symbol, "");
    assert!(!reverse);
}

#[test]
fn test_zero_is_positive() {
    for raw in [RawValue::from(0), RawValue::from(-0.0), RawValue::from("-0.00")] {
        let (fragments, _) = extract("en-US", "USD", raw);
        assert_eq!(fragments.operator, "+");
        assert_eq!(fragments.number, "0.00");
    }
}

#[test]
fn test_rounding_to_zero_keeps_sign() {
    let (fragments, _) = extract("en-US", "USD", -0.001);
    assert_eq!(fragments.operator, "-");
    assert_eq!(fragments.number, "0.00");
}

#[test]
fn test_zero_digit_currencies() {
    let (fragments, _) = extract("ja-JP", "JPY", 1234);
    assert_eq!(fragments.number, "1,234");
    assert_eq!(fragments.symbol, "￥");

    let (fragments, _) = extract("ko-KR", "KRW", 50000);
    assert_eq!(fragments.number, "50,000");
    assert_eq!(fragments.symbol, "₩");
}

#[test]
fn test_code_display_empties_symbol() {
    let config = MoneyConfig::builder()
        .display(CurrencyDisplay::Code)
        .build()
        .unwrap();
    let money = Money::new(config);

    let (fragments, reverse) = money.extract_fragments(Some("en-US"), "EUR", 5).unwrap();
    assert_eq!(fragments.symbol, "");
    assert_eq!(fragments.currency, "EUR");
    assert_eq!(fragments.number, "5.00");
    assert!(!reverse);

    let (fragments, reverse) = money.extract_fragments(Some("de-DE"), "USD", 5).unwrap();
    assert_eq!(fragments.symbol, "");
    assert!(!reverse);
}

#[test]
fn test_symbol_containing_code_letters() {
    // The code is removed, the rest of the symbol stays
    let (fragments, _) = extract("es-MX", "USD", 10);
    assert_eq!(fragments.symbol, "");

    let (fragments, _) = extract("en-GB", "USD", 10);
    assert_eq!(fragments.symbol, "US$");
}

#[test]
fn test_idempotent() {
    let first = extract("sv-SE", "SEK", -98765.4321);
    let second = extract("sv-SE", "SEK", -98765.4321);
    assert_eq!(first, second);
    assert_eq!(first.0.number, "98\u{a0}765,43");
    assert_eq!(first.0.symbol, "kr");
}

#[test]
fn test_default_locale() {
    let (fragments, reverse) = extract_fragments(None, "USD", 1).unwrap();
    assert_eq!(fragments.symbol, "$");
    assert!(!reverse);
}

#[test]
fn test_reassembly() {
    let (fragments, reverse) = extract("de-DE", "EUR", -1234.56);
    assert_eq!(fragments.reassemble(reverse), "-1.234,56€");

    let (fragments, reverse) = extract("en-US", "USD", 1234.56);
    assert_eq!(fragments.reassemble(reverse), "$1,234.56");
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        extract_fragments(Some("en-US"), "USD", "abc"),
        Err(MoneyError::InvalidValue(_))
    ));
    assert!(matches!(
        extract_fragments(Some("en-US"), "USD", f64::NAN),
        Err(MoneyError::InvalidValue(_))
    ));
    assert_eq!(
        extract_fragments(Some("en-US"), "ABC", 1),
        Err(MoneyError::UnsupportedCurrency("ABC".to_string()))
    );
    assert_eq!(
        extract_fragments(Some("en-US"), "usd", 1),
        Err(MoneyError::UnsupportedCurrency("usd".to_string()))
    );
    assert_eq!(
        extract_fragments(Some("zz-ZZ"), "USD", 1),
        Err(MoneyError::UnsupportedLocale("zz-ZZ".to_string()))
    );
}
