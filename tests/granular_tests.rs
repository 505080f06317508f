use money_fragments::{
    GranularToken, MagnitudeName, Money, MoneyConfig, TokenType, decompose_granular,
    fragments::decompose_granular_with,
};

fn shape(tokens: &[GranularToken]) -> Vec<(&str, TokenType, Option<MagnitudeName>)> {
    tokens
        .iter()
        .map(|t| (t.text.as_str(), t.token_type, t.subtype))
        .collect()
}

#[test]
fn test_grouped_with_decimals() {
    let tokens = decompose_granular("1,234,567.89");
    assert_eq!(
        shape(&tokens),
        vec![
            ("1", TokenType::Integer, Some(MagnitudeName::Million)),
            (",", TokenType::SeparatorInteger, None),
            ("234", TokenType::Integer, Some(MagnitudeName::Thousand)),
            (",", TokenType::SeparatorInteger, None),
            ("567", TokenType::Integer, Some(MagnitudeName::Hundred)),
            (".", TokenType::SeparatorDecimal, None),
            ("89", TokenType::Decimal, None),
        ]
    );
}

#[test]
fn test_european_separators() {
    let tokens = decompose_granular("1.234,56");
    assert_eq!(
        shape(&tokens),
        vec![
            ("1", TokenType::Integer, Some(MagnitudeName::Thousand)),
            (".", TokenType::SeparatorInteger, None),
            ("234", TokenType::Integer, Some(MagnitudeName::Hundred)),
            (",", TokenType::SeparatorDecimal, None),
            ("56", TokenType::Decimal, None),
        ]
    );
}

#[test]
fn test_no_decimal_part() {
    let tokens = decompose_granular("1,234,567");
    assert!(tokens.iter().all(|t| t.token_type != TokenType::Decimal));
    assert_eq!(tokens[4].subtype, Some(MagnitudeName::Hundred));
    assert_eq!(tokens[0].subtype, Some(MagnitudeName::Million));

    let tokens = decompose_granular("42");
    assert_eq!(shape(&tokens), vec![("42", TokenType::Integer, Some(MagnitudeName::Hundred))]);
}

#[test]
fn test_single_group_with_decimal() {
    let tokens = decompose_granular("0.50");
    assert_eq!(
        shape(&tokens),
        vec![
            ("0", TokenType::Integer, Some(MagnitudeName::Hundred)),
            (".", TokenType::SeparatorDecimal, None),
            ("50", TokenType::Decimal, None),
        ]
    );
}

#[test]
fn test_three_digit_fraction_needs_known_separator() {
    // 1.234 reads as a grouped integer on its own
    let tokens = decompose_granular("1.234");
    assert_eq!(tokens[2].token_type, TokenType::Integer);

    // A three-digit currency says otherwise
    let tokens = decompose_granular_with("1.234", Some('.'));
    assert_eq!(tokens[2].token_type, TokenType::Decimal);
    assert_eq!(tokens[1].token_type, TokenType::SeparatorDecimal);
}

#[test]
fn test_empty_number() {
    assert!(decompose_granular("").is_empty());
}

#[test]
fn test_zero_digit_currencies_have_no_decimal() {
    let money = Money::new(MoneyConfig::default());
    for (locale, currency, raw) in [
        ("ja-JP", "JPY", 1234567),
        ("ko-KR", "KRW", 1000),
        ("en-US", "CLP", 5),
    ] {
        let parts = money.render(Some(locale), currency, raw).unwrap();
        let tokens = parts.granular();
        assert!(
            tokens
                .iter()
                .all(|t| !matches!(t.token_type, TokenType::Decimal | TokenType::SeparatorDecimal)),
            "{locale} {currency}: {tokens:?}"
        );
        assert_eq!(tokens.last().unwrap().subtype, Some(MagnitudeName::Hundred));
    }
}

#[test]
fn test_indian_grouping_names_groups_by_position() {
    let parts = Money::new(MoneyConfig::default())
        .render(Some("en-IN"), "INR", 1234567)
        .unwrap();
    assert_eq!(parts.fragments.number, "12,34,567.00");
    let tokens = parts.granular();
    assert_eq!(
        shape(&tokens),
        vec![
            ("12", TokenType::Integer, Some(MagnitudeName::Million)),
            (",", TokenType::SeparatorInteger, None),
            ("34", TokenType::Integer, Some(MagnitudeName::Thousand)),
            (",", TokenType::SeparatorInteger, None),
            ("567", TokenType::Integer, Some(MagnitudeName::Hundred)),
            (".", TokenType::SeparatorDecimal, None),
            ("00", TokenType::Decimal, None),
        ]
    );
}

#[test]
fn test_large_numbers_run_out_of_names() {
    let tokens = decompose_granular("1,000,000,000,000,000.00");
    assert_eq!(tokens[0].subtype, Some(MagnitudeName::Unknown));
    assert_eq!(tokens[2].subtype, Some(MagnitudeName::Trillion));
    assert_eq!(tokens[0].subtype.map(|s| s.to_string()), Some("unknown".to_string()));
}

#[test]
fn test_token_type_tags() {
    assert_eq!(TokenType::SeparatorDecimal.to_string(), "separator-decimal");
    assert_eq!(TokenType::Integer.as_str(), "integer");
    assert!(TokenType::SeparatorInteger.is_separator());
    assert!(!TokenType::Decimal.is_separator());
}

#[cfg(feature = "serde")]
#[test]
fn test_serialized_token_shape() {
    let tokens = decompose_granular("1,234.5");
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"text": "1", "type": "integer", "subtype": "thousand"},
            {"text": ",", "type": "separator-integer"},
            {"text": "234", "type": "integer", "subtype": "hundred"},
            {"text": ".", "type": "separator-decimal"},
            {"text": "5", "type": "decimal"},
        ])
    );
}
