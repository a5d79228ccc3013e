use crate::Error;
use crate::inventory::{Category, Inventory};

use vendnav_fixtures::{MACHINE_INVENTORY, fixture};

fn machine_inventory() -> Inventory {
    let payload = fixture(MACHINE_INVENTORY).expect("Fixture must exist");
    Inventory::from_json(&payload).expect("Fixture must parse")
}

#[test]
fn inventory_groups_are_parsed() {
    let inventory = machine_inventory();

    assert_eq!(inventory.snacks.len(), 2);
    assert_eq!(inventory.drinks.len(), 1);
    assert!(!inventory.is_empty());

    let pretzels = &inventory.snacks[0];
    assert_eq!(pretzels.id.as_str(), "11");
    assert_eq!(pretzels.name, "Pretzels");
    assert_eq!(pretzels.quantity, 4);
    assert_eq!(pretzels.default_price, Some(1.5));
    assert_eq!(
        pretzels.image_url.as_deref(),
        Some("https://cdn.example.com/pretzels.png")
    );
}

#[test]
fn textual_numbers_are_coerced() {
    let inventory = machine_inventory();

    assert_eq!(inventory.snacks[1].default_price, Some(2.25));
    assert_eq!(inventory.drinks[0].quantity, 7);
}

#[test]
fn items_list_snacks_first() {
    let inventory = machine_inventory();
    let items = inventory
        .items()
        .map(|(category, item)| (category, item.name.as_str()))
        .collect::<Vec<_>>();

    assert_eq!(
        items,
        vec![
            (Category::Snack, "Pretzels"),
            (Category::Snack, "Trail Mix"),
            (Category::Drink, "Sparkling Water"),
        ]
    );

    let stocked = inventory
        .in_stock()
        .map(|(_, item)| item.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(stocked, vec!["Pretzels", "Sparkling Water"]);
}

#[test_log::test]
fn missing_and_broken_fields() {
    let payload = r#"{
        "data": {
            "drinks": [
                { "id": "x1", "quantity": "lots", "default_price": "free" },
                { "id": "x2", "quantity": -3, "default_price": null }
            ]
        }
    }"#;

    let inventory = Inventory::from_json(payload).expect("Payload must parse");
    assert!(inventory.snacks.is_empty());

    let first = &inventory.drinks[0];
    assert_eq!(first.quantity, 0);
    assert_eq!(first.default_price, None);
    assert_eq!(first.image_url, None);
    assert_eq!(first.name, "");

    assert_eq!(inventory.drinks[1].quantity, 0);
    assert_eq!(inventory.in_stock().count(), 0);
}

#[test_log::test]
fn unreadable_items_are_skipped() {
    let payload = r#"{
        "data": {
            "snacks": [
                { "id": 31, "name": null, "quantity": 2 },
                { "id": null, "name": "Ghost Chips", "quantity": 9 },
                "not an item",
                { "id": 33, "name": 404, "quantity": 1 }
            ],
            "drinks": null
        }
    }"#;

    let inventory = Inventory::from_json(payload).expect("Payload must parse");
    let items = inventory
        .items()
        .map(|(_, item)| (item.id.as_str(), item.name.as_str()))
        .collect::<Vec<_>>();

    assert_eq!(items, vec![("31", ""), ("33", "404")]);
    assert!(inventory.drinks.is_empty());
}

#[test]
fn empty_inventory() {
    let inventory = Inventory::from_json(r#"{ "data": {} }"#).expect("Payload must parse");
    assert!(inventory.is_empty());

    let inventory = Inventory::from_json("{}").expect("Payload must parse");
    assert!(inventory.is_empty());

    let inventory = Inventory::from_json(r#"{ "data": null }"#).expect("Payload must parse");
    assert!(inventory.is_empty());

    assert!(matches!(Inventory::from_json("[1, 2"), Err(Error::Json(_))));
    assert_eq!(Category::Drink.to_string(), "drink");
}
