use std::collections::HashMap;
use crate::server::billing::error::BillingError;
use crate::server::model::bill::{Bill, GuestBill};
use crate::server::model::ledger::{LedgerEntry, OrderLine};
use crate::server::model::menu::{Category, Menu};
use crate::server::model::{BillId, GuestId};

/// Open bills, at most one per guest.
#[derive(Debug)]
pub(crate) struct BillBook {
    bills: HashMap<GuestId, Bill>,
    next_id: BillId,
}

impl Default for BillBook {
    fn default() -> Self {
        Self {
            bills: HashMap::new(),
            next_id: 1,
        }
    }
}

impl BillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)build the guest's bill from the current ledger snapshot and price it.
    pub fn generate_bill(&mut self, entry: &LedgerEntry, menu: &Menu) -> Result<GuestBill, BillingError> {
        let (id, mut orders) = match self.bills.get(&entry.guest) {
            Some(open) => (Some(open.bill), open.orders.clone()),
            None => (None, Vec::new()),
        };

        for line in &entry.orders {
            match orders.iter_mut().find(|billed| billed.order == line.order) {
                Some(billed) => {
                    billed.food.clone_from(&line.food);
                    billed.drinks.clone_from(&line.drinks);
                }
                None => orders.push(line.clone()),
            }
        }

        let total_sum = total_of(&orders, menu)?;
        let bill = Bill {
            bill: id.unwrap_or_else(|| self.assign_id()),
            guest: entry.guest,
            orders,
            total_sum,
        };
        let view = GuestBill::from(&bill);
        self.bills.insert(entry.guest, bill);
        Ok(view)
    }

    pub fn find(&self, id: BillId) -> Option<&Bill> {
        self.bills.values().find(|bill| bill.bill == id)
    }

    pub fn remove(&mut self, id: BillId) -> Option<Bill> {
        let guest = self.find(id)?.guest;
        self.bills.remove(&guest)
    }

    fn assign_id(&mut self) -> BillId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn total_of(orders: &[OrderLine], menu: &Menu) -> Result<f64, BillingError> {
    let mut total = 0.0;
    for line in orders {
        for &id in &line.drinks {
            total += menu
                .price_of(Category::Drink, id)
                .ok_or(BillingError::UnknownMenuItem { category: Category::Drink, id })?;
        }
        for &id in &line.food {
            total += menu
                .price_of(Category::Food, id)
                .ok_or(BillingError::UnknownMenuItem { category: Category::Food, id })?;
        }
    }
    Ok(total)
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::server::model::menu::MenuItem;

    pub(crate) fn menu() -> Menu {
        Menu {
            food: vec![
                MenuItem { id: 101, price: 5.0 },
                MenuItem { id: 102, price: 7.0 },
                MenuItem { id: 103, price: 12.5 },
            ],
            drinks: vec![
                MenuItem { id: 201, price: 3.0 },
                MenuItem { id: 202, price: 4.5 },
            ],
        }
    }

    fn entry(guest: GuestId, orders: Vec<OrderLine>) -> LedgerEntry {
        LedgerEntry { guest, orders }
    }

    fn line(order: i64, food: Vec<i64>, drinks: Vec<i64>) -> OrderLine {
        OrderLine { order, food, drinks }
    }

    #[test]
    fn new_bill_is_priced_and_flattened() {
        let mut book = BillBook::new();
        let bill = book
            .generate_bill(&entry(1, vec![line(1, vec![101, 102], vec![201])]), &menu())
            .unwrap();
        assert_eq!(
            bill,
            GuestBill { bill: 1, ordered_food: vec![101, 102], ordered_drinks: vec![201], total_sum: 15.0 }
        );
    }

    #[test]
    fn regeneration_is_idempotent() {
        let mut book = BillBook::new();
        let snapshot = entry(1, vec![line(1, vec![101, 101], vec![201]), line(2, vec![103], vec![])]);
        let first = book.generate_bill(&snapshot, &menu()).unwrap();
        let second = book.generate_bill(&snapshot, &menu()).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.total_sum, 25.5);
    }

    #[test]
    fn regeneration_mirrors_ledger_and_keeps_id() {
        let mut book = BillBook::new();
        book.generate_bill(&entry(1, vec![line(1, vec![101], vec![])]), &menu()).unwrap();
        let bill = book
            .generate_bill(&entry(1, vec![line(1, vec![101, 102], vec![]), line(3, vec![], vec![202])]), &menu())
            .unwrap();
        assert_eq!(bill.bill, 1);
        assert_eq!(bill.ordered_food, vec![101, 102]);
        assert_eq!(bill.ordered_drinks, vec![202]);
        assert_eq!(bill.total_sum, 16.5);
    }

    #[test]
    fn bill_ids_are_per_guest_and_never_reused() {
        let mut book = BillBook::new();
        let a = book.generate_bill(&entry(1, vec![line(1, vec![101], vec![])]), &menu()).unwrap();
        let b = book.generate_bill(&entry(2, vec![line(1, vec![102], vec![])]), &menu()).unwrap();
        assert_eq!((a.bill, b.bill), (1, 2));
        assert!(book.remove(1).is_some());
        let c = book.generate_bill(&entry(1, vec![line(1, vec![101], vec![])]), &menu()).unwrap();
        assert_eq!(c.bill, 3);
        assert!(book.find(1).is_none());
        assert_eq!(book.find(2).map(|bill| bill.guest), Some(2));
    }

    #[test]
    fn unknown_item_leaves_book_untouched() {
        let mut book = BillBook::new();
        let err = book
            .generate_bill(&entry(1, vec![line(1, vec![101], vec![999])]), &menu())
            .unwrap_err();
        assert_eq!(err, BillingError::UnknownMenuItem { category: Category::Drink, id: 999 });
        assert!(book.find(1).is_none());
        let bill = book.generate_bill(&entry(1, vec![line(1, vec![101], vec![])]), &menu()).unwrap();
        assert_eq!(bill.bill, 1);
    }
}
