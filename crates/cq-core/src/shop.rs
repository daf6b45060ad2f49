//! Shop ledger
//!
//! Three fixed items, each buyable any number of times while the gold lasts.

use log::info;
use strum::{Display, EnumIter};

use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ShopItem {
    Potion,
    Armor,
    Sword,
}

impl ShopItem {
    pub const fn price(self) -> u32 {
        match self {
            ShopItem::Potion => 30,
            ShopItem::Armor => 100,
            ShopItem::Sword => 150,
        }
    }

    /// Menu number on the shop prompt
    pub const fn menu_number(self) -> u8 {
        match self {
            ShopItem::Potion => 1,
            ShopItem::Armor => 2,
            ShopItem::Sword => 3,
        }
    }

    /// Menu label, e.g. "Red Potion (restore 20 HP)"
    pub const fn label(self) -> &'static str {
        match self {
            ShopItem::Potion => "Red Potion (restore 20 HP)",
            ShopItem::Armor => "Sturdy Armor (max HP +20)",
            ShopItem::Sword => "Sharp Sword (attack +5)",
        }
    }

    fn apply(self, player: &mut Player) {
        match self {
            ShopItem::Potion => player.heal(20),
            ShopItem::Armor => {
                player.hp_max += 20;
                player.hp += 20;
            }
            ShopItem::Sword => player.attack += 5,
        }
    }
}

/// A parsed shop prompt answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Buy(ShopItem),
    Leave,
    Unknown,
}

impl Selection {
    /// `0` leaves, `1`-`3` pick an item, anything else is unknown
    pub fn parse(input: &str) -> Selection {
        match input.trim() {
            "0" => Selection::Leave,
            "1" => Selection::Buy(ShopItem::Potion),
            "2" => Selection::Buy(ShopItem::Armor),
            "3" => Selection::Buy(ShopItem::Sword),
            _ => Selection::Unknown,
        }
    }
}

/// Result of a purchase attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    Bought(ShopItem),
    InsufficientFunds { item: ShopItem, short_by: u32 },
}

impl Purchase {
    pub fn message(&self) -> String {
        match self {
            Purchase::Bought(item) => format!("You bought the {}.", item.label()),
            Purchase::InsufficientFunds { item, short_by } => {
                format!("Not enough gold for the {} ({} G short).", item, short_by)
            }
        }
    }
}

/// Buy `item` for `player`. Fails without touching the player if gold < price.
pub fn buy(player: &mut Player, item: ShopItem) -> Purchase {
    let price = item.price();
    if player.gold < price {
        return Purchase::InsufficientFunds {
            item,
            short_by: price - player.gold,
        };
    }
    player.gold -= price;
    item.apply(player);
    info!(
        "bought {} for {} G (hp {}/{}, attack {}, gold left {})",
        item, price, player.hp, player.hp_max, player.attack, player.gold
    );
    Purchase::Bought(item)
}
