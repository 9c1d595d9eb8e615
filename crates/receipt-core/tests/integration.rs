use std::str::FromStr;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

use receipt_core::{LineItem, ReceiptParser};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_grocery_receipt() {
    let text = "\
RECEIPT
Green Valley Market
123 Orchard Rd
Date: 11/02/2024
Apples..........$4.20
Whole Milk      $3.49
Bread: $2.99
Subtotal: $10.68
Tax: $0.85
TOTAL  $11.53
Thank you for shopping!";

    let receipt = ReceiptParser::new().parse(text);

    assert_eq!(receipt.merchant.as_deref(), Some("Green Valley Market"));
    assert_eq!(receipt.date, NaiveDate::from_ymd_opt(2024, 11, 2));
    // "Subtotal: $10.68" is the first hit of the labeled "Total:" rule.
    assert_eq!(receipt.amount, Some(dec("10.68")));
    assert_eq!(
        receipt.items,
        vec![
            LineItem::new("Apples", dec("4.20")),
            LineItem::new("Whole Milk", dec("3.49")),
            LineItem::new("Bread", dec("2.99")),
            LineItem::new("Tax", dec("0.85")),
        ]
    );
    assert_eq!(receipt.raw_text, text);
}

#[test]
fn test_restaurant_receipt_with_dash_date() {
    let text = "\
Luigi's Trattoria
Table 4
Served 05-17-2023
Margherita Pizza  $14.00
House Salad  $8.50
Total: $22.50";

    let receipt = ReceiptParser::new().parse(text);

    assert_eq!(receipt.merchant.as_deref(), Some("Luigi's Trattoria"));
    assert_eq!(receipt.date, NaiveDate::from_ymd_opt(2023, 5, 17));
    assert_eq!(receipt.amount, Some(dec("22.50")));
    assert_eq!(
        receipt.items,
        vec![
            LineItem::new("Margherita Pizza", dec("14.00")),
            LineItem::new("House Salad", dec("8.50")),
        ]
    );
}

#[test]
fn test_unreadable_text_yields_empty_fields() {
    let text = "\nRECEIPT\n\n#### ~~~~ ####";

    let receipt = ReceiptParser::new().parse(text);

    assert_eq!(receipt.merchant, None);
    assert_eq!(receipt.date, None);
    assert_eq!(receipt.amount, None);
    assert!(receipt.items.is_empty());
    assert_eq!(receipt.raw_text, text);
}

#[test]
fn test_invalid_labeled_date_does_not_reach_later_bare_date() {
    let text = "Shop\nDate: 13/04/2023\nReturn by 04/05/2023";

    let receipt = ReceiptParser::new().parse(text);

    assert_eq!(receipt.date, None);
}

#[test]
fn test_json_output() {
    let receipt = ReceiptParser::new().parse("Kiosk\nCoffee....$3.50\nTotal: $3.50");
    let json = serde_json::to_value(&receipt).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "merchant": "Kiosk",
            "date": null,
            "amount": 3.5,
            "items": [{ "name": "Coffee", "price": 3.5 }],
            "raw_text": "Kiosk\nCoffee....$3.50\nTotal: $3.50",
        })
    );
}
