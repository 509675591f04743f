use std::collections::HashMap;
use crate::server::model::ledger::{LedgerEntry, OrderLine};
use crate::server::model::{GuestId, MenuItemId, OrderId};

/// Delivered but unpaid items, one entry per guest.
#[derive(Debug, Default)]
pub(crate) struct DeliveryLedger {
    entries: HashMap<GuestId, LedgerEntry>,
}

impl DeliveryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record plates that reached a guest. A known order grows, it is never replaced.
    pub fn register_delivered_items(
        &mut self,
        guest: GuestId,
        order: OrderId,
        food: Vec<MenuItemId>,
        drinks: Vec<MenuItemId>,
    ) {
        let entry = self.entries.entry(guest).or_insert_with(|| LedgerEntry {
            guest,
            orders: Vec::new(),
        });
        match entry.orders.iter_mut().find(|line| line.order == order) {
            Some(line) => {
                line.food.extend(food);
                line.drinks.extend(drinks);
            }
            None => entry.orders.push(OrderLine { order, food, drinks }),
        }
    }

    pub fn entry(&self, guest: GuestId) -> Option<&LedgerEntry> {
        self.entries.get(&guest)
    }

    /// Remove exactly the paid quantities from the guest's lines, then drop emptied lines.
    /// Returns `false` when the guest has no entry.
    pub fn settle(&mut self, guest: GuestId, paid: &[OrderLine]) -> bool {
        let Some(entry) = self.entries.get_mut(&guest) else {
            return false;
        };
        for paid_line in paid {
            if let Some(line) = entry.orders.iter_mut().find(|line| line.order == paid_line.order) {
                remove_each(&mut line.drinks, &paid_line.drinks);
                remove_each(&mut line.food, &paid_line.food);
            }
        }
        entry.orders.retain(|line| !line.is_empty());
        true
    }
}

/// Multiset subtraction, one occurrence per paid id.
fn remove_each(items: &mut Vec<MenuItemId>, paid: &[MenuItemId]) {
    for id in paid {
        if let Some(pos) = items.iter().position(|item| item == id) {
            items.remove(pos);
        }
    }
}
