use derive_more::{Display, Error};
use crate::server::model::menu::Category;
use crate::server::model::{BillId, GuestId, MenuItemId};

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum BillingError {
    #[display("menu is not loaded yet")]
    MenuNotReady,
    #[display("unknown {category} item {id}")]
    UnknownMenuItem { category: Category, id: MenuItemId },
    #[display("bill {id} not found")]
    BillNotFound { id: BillId },
    #[display("no delivered items recorded for guest {guest}")]
    GuestNotFound { guest: GuestId },
}
