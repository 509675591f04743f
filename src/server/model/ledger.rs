use serde::{Deserialize, Serialize};
use crate::server::model::{deserialize_id, deserialize_ids, GuestId, MenuItemId, OrderId};

/// Food and drink ids tied to one order, repeated ids are repeated plates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct OrderLine {
    pub order: OrderId,
    pub food: Vec<MenuItemId>,
    pub drinks: Vec<MenuItemId>,
}

impl OrderLine {
    pub fn is_empty(&self) -> bool {
        self.food.is_empty() && self.drinks.is_empty()
    }
}

/// Delivered but unpaid items of one guest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct LedgerEntry {
    pub guest: GuestId,
    pub orders: Vec<OrderLine>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostDeliveriesRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub guest: GuestId,
    #[serde(deserialize_with = "deserialize_id")]
    pub order: OrderId,
    #[serde(default, deserialize_with = "deserialize_ids")]
    pub food: Vec<MenuItemId>,
    #[serde(default, deserialize_with = "deserialize_ids")]
    pub drinks: Vec<MenuItemId>,
}
