use actix_web::{get, post, web, HttpRequest, Responder};
use log::{info, warn};
use crate::server::billing::error::BillingError;
use crate::server::billing::policy::payment_options;
use crate::server::controller::error::CustomError;
use crate::server::model::payment::GetPaymentOptionsParams;
use crate::server::model::BillId;
use crate::server::state::AppState;

#[post("/v1/bills/{bill}/payment")]
/// Settle a bill and close it
pub(crate) async fn post_payment(bill: web::Path<BillId>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let bill = bill.into_inner();
    let receipt = data.billing().await.register_payment(bill).map_err(|e| match e {
        BillingError::GuestNotFound { .. } => CustomError::Inconsistency,
        e => e.into(),
    })?;
    info!("bill={} paid, total {}", receipt.bill, receipt.total_sum);
    Ok(web::Json(receipt))
}

#[get("/v1/payment-options")]
/// Payment methods allowed for an amount
pub(crate) async fn get_payment_options(req: HttpRequest) -> Result<impl Responder, CustomError> {
    let GetPaymentOptionsParams { amount } = web::Query::<GetPaymentOptionsParams>::from_query(req.query_string())
        .map_err(|e| {
            warn!("invalid payment options query, {}", e);
            CustomError::BadRequest
        })?
        .into_inner();
    Ok(web::Json(payment_options(amount)))
}
