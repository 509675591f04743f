use serde::Serialize;
use crate::server::model::ledger::OrderLine;
use crate::server::model::{BillId, GuestId, MenuItemId};

/// Open bill of a guest, `total_sum` is the priced sum of `orders`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bill {
    pub bill: BillId,
    pub guest: GuestId,
    pub orders: Vec<OrderLine>,
    pub total_sum: f64,
}

/// Flattened bill as shown to the guest, duplicates kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GuestBill {
    pub bill: BillId,
    pub ordered_food: Vec<MenuItemId>,
    pub ordered_drinks: Vec<MenuItemId>,
    pub total_sum: f64,
}

impl From<&Bill> for GuestBill {
    fn from(bill: &Bill) -> Self {
        Self {
            bill: bill.bill,
            ordered_food: bill.orders.iter().flat_map(|line| line.food.iter().copied()).collect(),
            ordered_drinks: bill.orders.iter().flat_map(|line| line.drinks.iter().copied()).collect(),
            total_sum: bill.total_sum,
        }
    }
}
