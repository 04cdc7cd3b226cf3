//! Integration tests for the buybox parser
//!
//! These tests drive the public API end to end: fragments are loaded from
//! JSON the way a collector hands them over, parsed with a locale loaded from
//! TOML or a preset, and rendered by the output writers.

use buybox_parser::challenge::detect_challenge;
use buybox_parser::classify::ETA_NOT_FOUND;
use buybox_parser::config::{load_config, Config, LocaleConfig, OrphanPolicy};
use buybox_parser::fragment::{load_fragments, read_fragments};
use buybox_parser::output::{write_report, OutputFormat};
use buybox_parser::{
    parse_fragments, parse_report, ConditionKind, DeliveryOption, DeliveryType, Fragment,
    ParseError,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn fragments(texts: &[&str]) -> Vec<Fragment> {
    texts.iter().map(|t| Fragment::unlabeled(*t)).collect()
}

fn french_config() -> Config {
    Config {
        locale: LocaleConfig::french(),
        ..Default::default()
    }
}

#[test]
fn test_new_offer_end_to_end() {
    let offers = parse_fragments(
        &fragments(&[
            "New:",
            "49\n€99",
            "FREE Delivery 12 January",
            "Returns FREE",
            "In stock",
        ]),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(offers.len(), 1);
    let offer = &offers[0];
    assert_eq!(offer.condition, "New");
    assert_eq!(offer.price.as_deref(), Some("49.99"));
    assert_eq!(
        offer.delivery_options,
        vec![DeliveryOption::new(DeliveryType::Free, "12 January")]
    );
    assert_eq!(offer.return_policy, Some(true));
    assert_eq!(offer.stock_status, "In stock");
    assert_eq!(offer.ship_from, None);
    assert_eq!(offer.sold_by, None);
}

#[test]
fn test_used_offer_continuations_end_to_end() {
    let offers = parse_fragments(
        &fragments(&[
            "Used – Very good",
            "Dispatched",
            "Amazon Warehouse",
            "Sold by",
            "ThirdPartySeller",
        ]),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].condition, "Very good");
    assert_eq!(offers[0].condition_kind, ConditionKind::Used);
    assert_eq!(offers[0].ship_from.as_deref(), Some("Amazon Warehouse"));
    assert_eq!(offers[0].sold_by.as_deref(), Some("ThirdPartySeller"));
}

#[test]
fn test_month_as_first_token_does_not_crash() {
    let offers = parse_fragments(
        &fragments(&["New:", "January Delivery", "Delivery soon"]),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(offers[0].delivery_options[0].eta, "January");
    assert_eq!(offers[0].delivery_options[1].eta, ETA_NOT_FOUND);
}

#[test]
fn test_two_conditions_in_first_seen_order() {
    let offers = parse_fragments(
        &fragments(&[
            "New:",
            "20\n€00",
            "Used – Good",
            "Delivery Friday 3 May",
            "Sold by",
            "Reseller",
        ]),
        &Config::default(),
    )
    .unwrap();

    let conditions: Vec<&str> = offers.iter().map(|o| o.condition.as_str()).collect();
    assert_eq!(conditions, vec!["New", "Good"]);

    assert_eq!(offers[0].price.as_deref(), Some("20.00"));
    assert!(offers[0].delivery_options.is_empty());
    assert_eq!(offers[0].sold_by, None);

    assert_eq!(offers[1].price, None);
    assert_eq!(offers[1].delivery_options[0].eta, "3 May");
    assert_eq!(offers[1].sold_by.as_deref(), Some("Reseller"));
}

#[test]
fn test_stream_without_conditions() {
    let config = Config::default();

    let offers = parse_fragments(&fragments(&["Sponsored", "See more"]), &config).unwrap();
    assert!(offers.is_empty());

    let err = parse_fragments(&fragments(&["Sponsored", "Returns FREE"]), &config).unwrap_err();
    assert!(matches!(err, ParseError::NoActiveCondition { index: 1, .. }));
}

#[test]
fn test_skip_policy_tolerates_leading_offer_data() {
    let mut config = Config::default();
    config.parser.orphan_policy = OrphanPolicy::Skip;

    let report = parse_report(
        &fragments(&["In stock", "New:", "In stock"]),
        &config,
        None,
    )
    .unwrap();

    assert_eq!(report.offers[0].stock_status, "In stock");
    assert_eq!(report.stats.orphans_skipped, 1);
}

#[test]
fn test_french_listing_from_json() {
    let json = r#"[
        {"name": "span>a-text-bold", "text": "Neuf :"},
        {"name": "span>a-price", "text": "1\u202f299\n99\u202f€"},
        {"name": "span", "text": "Livraison GRATUITE vendredi 12 janvier"},
        {"name": "span", "text": "Livraison accélérée jeudi 11 janvier"},
        {"name": "span", "text": "   "},
        {"name": "span", "text": "Expédié par"},
        {"name": "span", "text": "Amazon"},
        {"name": "span", "text": "Vendu par"},
        {"name": "span", "text": "Boutique Paris"},
        {"name": "span", "text": "Retours GRATUITS"},
        {"name": "span", "text": "En stock"},
        {"name": "span", "text": "D’occasion – Très bon"},
        {"name": "span>a-price", "text": "1\u202f050\n00\u202f€"}
    ]"#;

    let fragments = read_fragments(json.as_bytes()).unwrap();
    assert_eq!(fragments.len(), 12);

    let offers = parse_fragments(&fragments, &french_config()).unwrap();
    assert_eq!(offers.len(), 2);

    let new = &offers[0];
    assert_eq!(new.condition, "Neuf");
    assert_eq!(new.price.as_deref(), Some("1299.99"));
    assert_eq!(
        new.delivery_options,
        vec![
            DeliveryOption::new(DeliveryType::Free, "12 janvier"),
            DeliveryOption::new(DeliveryType::Expedited, "11 janvier"),
        ]
    );
    assert_eq!(new.ship_from.as_deref(), Some("Amazon"));
    assert_eq!(new.sold_by.as_deref(), Some("Boutique Paris"));
    assert_eq!(new.return_policy, Some(true));
    assert_eq!(new.stock_status, "En stock");

    let used = &offers[1];
    assert_eq!(used.condition, "Très bon");
    assert_eq!(used.price.as_deref(), Some("1050.00"));
    assert_eq!(used.stock_status, "NOT_PARSED");
}

#[test]
fn test_custom_locale_from_toml() {
    let mut config_file = NamedTempFile::new().unwrap();
    config_file
        .write_all(
            r#"
[locale]
name = "en-us"
new-marker = "Brand new"
new-label = "New"
used-marker = "Pre-owned"
grade-delimiter = " / "
currency-symbol = "$"
thousands-separator = ","
delivery-keyword = "delivery"
free-marker = "FREE"
expedited-marker = "Fastest"
returns-marker = "Free returns"
ship-from-marker = "Ships from"
sold-by-marker = "Sold by"
in-stock-marker = "In Stock"
in-stock-label = "In stock"
months = ["January", "February", "March", "April", "May", "June",
          "July", "August", "September", "October", "November", "December"]
"#
            .as_bytes(),
        )
        .unwrap();
    config_file.flush().unwrap();

    let config = load_config(config_file.path()).unwrap();
    let offers = parse_fragments(
        &fragments(&[
            "Pre-owned / Like New",
            "1,249\n$00",
            "Fastest delivery Tomorrow, June 4",
            "Ships from",
            "Warehouse",
            "In Stock",
        ]),
        &config,
    )
    .unwrap();

    assert_eq!(offers[0].condition, "Like New");
    assert_eq!(offers[0].price.as_deref(), Some("1249.00"));
    assert_eq!(
        offers[0].delivery_options,
        vec![DeliveryOption::new(DeliveryType::Expedited, "Tomorrow, June")]
    );
    assert_eq!(offers[0].ship_from.as_deref(), Some("Warehouse"));
    assert_eq!(offers[0].stock_status, "In stock");
}

#[test]
fn test_challenge_page_is_detected_before_parsing() {
    let page = fragments(&[
        "Enter the characters you see below",
        "Sorry, we just need to make sure you're not a robot.",
    ]);
    let (index, _) = detect_challenge(&page, &LocaleConfig::english()).unwrap();
    assert_eq!(index, 0);
}

#[test]
fn test_load_parse_and_write_json_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("fragments.json");
    let output = dir.path().join("offers.json");

    std::fs::write(
        &input,
        r#"[{"label": "span", "text": "New:"}, {"label": "span", "text": "9\n€90"}]"#,
    )
    .unwrap();

    let fragments = load_fragments(&input).unwrap();
    let report = parse_report(&fragments, &Config::default(), Some("cafe".to_string())).unwrap();
    write_report(&report, OutputFormat::Json, Some(&output)).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["config_hash"], "cafe");
    assert_eq!(value["offers"][0]["condition"], "New");
    assert_eq!(value["offers"][0]["price"], "9.90");
    assert_eq!(value["offers"][0]["stock_status"], "NOT_PARSED");
}
