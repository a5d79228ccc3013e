use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::Error;
use crate::ident::Identifier;
use crate::util::lenient::{lenient_f64, lenient_opt_f64, lenient_text, tolerant_vec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Snack,
    Drink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Identifier,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "quantity")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub default_price: Option<f64>,
}

impl InventoryItem {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

fn quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_f64(deserializer)?;

    if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 {
        Ok(value.trunc() as u32)
    } else {
        warn!("Treating unusable quantity {value} as out of stock");
        Ok(0)
    }
}

#[derive(Deserialize)]
struct InventoryResponse {
    #[serde(default)]
    data: Option<Inventory>,
}

/// The stock of one machine, split the way the machine lays it out.
/// Items which cannot be read are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default, deserialize_with = "tolerant_vec")]
    pub snacks: Vec<InventoryItem>,
    #[serde(default, deserialize_with = "tolerant_vec")]
    pub drinks: Vec<InventoryItem>,
}

impl Inventory {
    /// Parses an inventory response of the form
    /// `{"data": {"snacks": [...], "drinks": [...]}}`.
    pub fn from_json(payload: &str) -> Result<Self, Error> {
        let response: InventoryResponse = serde_json::from_str(payload)?;
        Ok(response.data.unwrap_or_default())
    }

    pub fn is_empty(&self) -> bool {
        self.snacks.is_empty() && self.drinks.is_empty()
    }

    /// Every item with its category, snacks first.
    pub fn items(&self) -> impl Iterator<Item = (Category, &InventoryItem)> {
        let snacks = self.snacks.iter().map(|item| (Category::Snack, item));
        let drinks = self.drinks.iter().map(|item| (Category::Drink, item));

        snacks.chain(drinks)
    }

    pub fn in_stock(&self) -> impl Iterator<Item = (Category, &InventoryItem)> {
        self.items().filter(|(_, item)| item.in_stock())
    }
}
