use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::i18n::Text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemId {
    FreeSlice,
    GarlicKnots,
    Lemonade,
    Tiramisu,
    FamilyPizza,
    ClubTShirt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemIcon {
    Slice,
    Bread,
    Drink,
    Dessert,
    Pizza,
    Shirt,
}

impl ItemIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ItemIcon::Slice => "🍕",
            ItemIcon::Bread => "🥖",
            ItemIcon::Drink => "🍋",
            ItemIcon::Dessert => "🍰",
            ItemIcon::Pizza => "🫓",
            ItemIcon::Shirt => "👕",
        }
    }
}

impl ItemId {
    pub const ALL: [ItemId; 6] = [
        ItemId::FreeSlice,
        ItemId::GarlicKnots,
        ItemId::Lemonade,
        ItemId::Tiramisu,
        ItemId::FamilyPizza,
        ItemId::ClubTShirt,
    ];

    pub fn price(self) -> u32 {
        match self {
            ItemId::FreeSlice => 150,
            ItemId::GarlicKnots => 200,
            ItemId::Lemonade => 120,
            ItemId::Tiramisu => 300,
            ItemId::FamilyPizza => 900,
            ItemId::ClubTShirt => 1_500,
        }
    }

    pub fn icon(self) -> ItemIcon {
        match self {
            ItemId::FreeSlice => ItemIcon::Slice,
            ItemId::GarlicKnots => ItemIcon::Bread,
            ItemId::Lemonade => ItemIcon::Drink,
            ItemId::Tiramisu => ItemIcon::Dessert,
            ItemId::FamilyPizza => ItemIcon::Pizza,
            ItemId::ClubTShirt => ItemIcon::Shirt,
        }
    }

    pub fn title(self) -> Text {
        match self {
            ItemId::FreeSlice => Text::ItemFreeSlice,
            ItemId::GarlicKnots => Text::ItemGarlicKnots,
            ItemId::Lemonade => Text::ItemLemonade,
            ItemId::Tiramisu => Text::ItemTiramisu,
            ItemId::FamilyPizza => Text::ItemFamilyPizza,
            ItemId::ClubTShirt => Text::ItemClubTShirt,
        }
    }

    /// `None` means unlimited.
    pub fn initial_stock(self) -> Option<u32> {
        match self {
            ItemId::FreeSlice | ItemId::Lemonade => None,
            ItemId::GarlicKnots => Some(40),
            ItemId::Tiramisu => Some(20),
            ItemId::FamilyPizza => Some(10),
            ItemId::ClubTShirt => Some(5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub item: ItemId,
    pub price: u32,
    pub stock: Option<u32>,
}

impl CatalogEntry {
    pub fn in_stock(&self) -> bool {
        self.stock.map_or(true, |left| left > 0)
    }
}

/// Shop inventory with live stock counts.
#[derive(Debug, Clone)]
pub struct Catalog {
    stock: BTreeMap<ItemId, Option<u32>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            stock: ItemId::ALL
                .iter()
                .map(|&item| (item, item.initial_stock()))
                .collect(),
        }
    }

    pub fn entry(&self, item: ItemId) -> CatalogEntry {
        CatalogEntry {
            item,
            price: item.price(),
            stock: self.stock.get(&item).copied().flatten(),
        }
    }

    pub fn items(&self) -> Vec<CatalogEntry> {
        ItemId::ALL.iter().map(|&item| self.entry(item)).collect()
    }

    pub fn check_available(&self, item: ItemId) -> Result<(), StoreError> {
        if self.entry(item).in_stock() {
            Ok(())
        } else {
            Err(StoreError::OutOfStock(item))
        }
    }

    /// Removes one unit of limited stock.
    pub(crate) fn take_one(&mut self, item: ItemId) -> Result<(), StoreError> {
        self.check_available(item)?;
        if let Some(Some(left)) = self.stock.get_mut(&item) {
            *left -= 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_listed_in_fixed_order() {
        let catalog = Catalog::new();
        let listed: Vec<ItemId> = catalog.items().iter().map(|e| e.item).collect();
        assert_eq!(listed, ItemId::ALL.to_vec());
    }

    #[test]
    fn limited_stock_runs_out() {
        let mut catalog = Catalog::new();
        for _ in 0..5 {
            catalog.take_one(ItemId::ClubTShirt).unwrap();
        }
        assert_eq!(catalog.entry(ItemId::ClubTShirt).stock, Some(0));
        assert_eq!(
            catalog.take_one(ItemId::ClubTShirt),
            Err(StoreError::OutOfStock(ItemId::ClubTShirt))
        );
    }

    #[test]
    fn unlimited_items_never_run_out() {
        let mut catalog = Catalog::new();
        for _ in 0..1_000 {
            catalog.take_one(ItemId::FreeSlice).unwrap();
        }
        assert!(catalog.entry(ItemId::FreeSlice).in_stock());
    }
}
