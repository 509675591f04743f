use tokio::sync::{Mutex, MutexGuard};
use crate::server::billing::Billing;
use crate::server::menu::client::MenuCell;
use crate::server::model::menu::Menu;

pub(crate) struct AppState {
    billing: Mutex<Billing>,
    menu: MenuCell,
}

impl AppState {
    pub fn new(menu: MenuCell) -> Self {
        Self {
            billing: Mutex::new(Billing::new()),
            menu,
        }
    }

    /// Exclusive access to ledger and bills, held for one operation.
    pub async fn billing(&self) -> MutexGuard<'_, Billing> {
        self.billing.lock().await
    }

    pub fn get_menu(&self) -> Option<&Menu> {
        self.menu.get()
    }
}
