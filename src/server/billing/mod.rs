//! in-memory billing: delivered items, open bills and their settlement

pub(crate) mod bill_book;
pub(crate) mod error;
pub(crate) mod ledger;
pub(crate) mod payment;
pub(crate) mod policy;

use crate::server::billing::bill_book::BillBook;
use crate::server::billing::error::BillingError;
use crate::server::billing::ledger::DeliveryLedger;
use crate::server::model::bill::GuestBill;
use crate::server::model::ledger::LedgerEntry;
use crate::server::model::menu::Menu;
use crate::server::model::payment::PaidBill;
use crate::server::model::{BillId, GuestId, MenuItemId, OrderId};

/// Ledger and bill book of one service instance. Every method is one
/// synchronous step, callers serialize access to keep them atomic.
#[derive(Debug)]
pub(crate) struct Billing {
    ledger: DeliveryLedger,
    book: BillBook,
}

impl Billing {
    pub fn new() -> Self {
        Self {
            ledger: DeliveryLedger::new(),
            book: BillBook::new(),
        }
    }

    pub fn register_delivered_items(
        &mut self,
        guest: GuestId,
        order: OrderId,
        food: Vec<MenuItemId>,
        drinks: Vec<MenuItemId>,
    ) {
        self.ledger.register_delivered_items(guest, order, food, drinks);
    }

    pub fn ledger_entry(&self, guest: GuestId) -> Option<&LedgerEntry> {
        self.ledger.entry(guest)
    }

    /// Bill the guest's current ledger entry. `menu` is `None` until the price list is loaded.
    pub fn generate_bill(&mut self, guest: GuestId, menu: Option<&Menu>) -> Result<GuestBill, BillingError> {
        let menu = menu.ok_or(BillingError::MenuNotReady)?;
        let entry = self
            .ledger
            .entry(guest)
            .ok_or(BillingError::GuestNotFound { guest })?;
        self.book.generate_bill(entry, menu)
    }

    pub fn register_payment(&mut self, bill: BillId) -> Result<PaidBill, BillingError> {
        payment::register_payment(&mut self.book, &mut self.ledger, bill)
    }
}
