use log::error;
use crate::server::billing::bill_book::BillBook;
use crate::server::billing::error::BillingError;
use crate::server::billing::ledger::DeliveryLedger;
use crate::server::model::payment::{PaidBill, PaidOrder};
use crate::server::model::BillId;

/// Settle a bill: emit the receipt, take the paid plates off the ledger, close the bill.
pub(crate) fn register_payment(
    book: &mut BillBook,
    ledger: &mut DeliveryLedger,
    id: BillId,
) -> Result<PaidBill, BillingError> {
    let bill = book.find(id).ok_or(BillingError::BillNotFound { id })?;
    let receipt = PaidBill {
        bill: bill.bill,
        paid_orders: bill
            .orders
            .iter()
            .map(|line| PaidOrder {
                order: line.order,
                paid_food: line.food.clone(),
                paid_drinks: line.drinks.clone(),
            })
            .collect(),
        total_sum: bill.total_sum,
    };

    if !ledger.settle(bill.guest, &bill.orders) {
        // an open bill is always generated from a ledger entry
        error!("bill {} references guest {} without a ledger entry", id, bill.guest);
        return Err(BillingError::GuestNotFound { guest: bill.guest });
    }
    book.remove(id);
    Ok(receipt)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::billing::bill_book::test::menu;
    use crate::server::model::ledger::{LedgerEntry, OrderLine};

    #[test]
    fn payment_settles_and_prunes() {
        let (mut book, mut ledger) = (BillBook::new(), DeliveryLedger::new());
        ledger.register_delivered_items(1, 1, vec![101, 102], vec![201]);
        book.generate_bill(ledger.entry(1).unwrap(), &menu()).unwrap();

        let receipt = register_payment(&mut book, &mut ledger, 1).unwrap();
        assert_eq!(
            receipt,
            PaidBill {
                bill: 1,
                paid_orders: vec![PaidOrder { order: 1, paid_food: vec![101, 102], paid_drinks: vec![201] }],
                total_sum: 15.0,
            }
        );
        assert!(ledger.entry(1).unwrap().orders.is_empty());
        assert_eq!(
            register_payment(&mut book, &mut ledger, 1),
            Err(BillingError::BillNotFound { id: 1 })
        );
    }

    #[test]
    fn unbilled_duplicates_survive_payment() {
        let (mut book, mut ledger) = (BillBook::new(), DeliveryLedger::new());
        ledger.register_delivered_items(2, 5, vec![101], vec![]);
        book.generate_bill(ledger.entry(2).unwrap(), &menu()).unwrap();
        ledger.register_delivered_items(2, 5, vec![101], vec![201]);

        let receipt = register_payment(&mut book, &mut ledger, 1).unwrap();
        assert_eq!(receipt.total_sum, 5.0);
        assert_eq!(
            ledger.entry(2),
            Some(&LedgerEntry { guest: 2, orders: vec![OrderLine { order: 5, food: vec![101], drinks: vec![201] }] })
        );
    }

    #[test]
    fn missing_ledger_entry_keeps_bill_open() {
        let (mut book, mut ledger) = (BillBook::new(), DeliveryLedger::new());
        let orphan = LedgerEntry { guest: 7, orders: vec![OrderLine { order: 1, food: vec![101], drinks: vec![] }] };
        book.generate_bill(&orphan, &menu()).unwrap();

        assert_eq!(
            register_payment(&mut book, &mut ledger, 1),
            Err(BillingError::GuestNotFound { guest: 7 })
        );
        assert!(book.find(1).is_some());
    }
}
