mod item;
#[cfg(test)]
mod test;

pub use item::{Category, Inventory, InventoryItem};
