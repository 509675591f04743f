use serde::{Deserialize, Serialize};
use crate::server::model::{BillId, MenuItemId, OrderId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaidOrder {
    pub order: OrderId,
    pub paid_food: Vec<MenuItemId>,
    pub paid_drinks: Vec<MenuItemId>,
}

/// Receipt of a settled bill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaidBill {
    pub bill: BillId,
    pub paid_orders: Vec<PaidOrder>,
    pub total_sum: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum PaymentMethod {
    Cash,
    DebitCard,
    CreditCard,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetPaymentOptionsParams {
    pub amount: f64,
}
