//! http handlers of the billing service

mod bill;
mod delivery;
pub(crate) mod error;
mod payment;

use actix_web::web;
use log::warn;
use crate::server::controller::error::CustomError;

/// Register every billing route and the shared payload config
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|e, _req| {
        warn!("rejected payload, {}", e);
        CustomError::BadRequest.into()
    }))
    .service(delivery::post_deliveries)
    .service(delivery::get_ledger)
    .service(bill::post_guest_bill)
    .service(payment::post_payment)
    .service(payment::get_payment_options);
}
