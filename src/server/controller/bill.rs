use actix_web::{post, web, Responder};
use log::info;
use crate::server::controller::error::CustomError;
use crate::server::model::GuestId;
use crate::server::state::AppState;

#[post("/v1/guests/{guest}/bill")]
/// Generate (or regenerate) the guest's bill from the current ledger
pub(crate) async fn post_guest_bill(guest: web::Path<GuestId>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let guest = guest.into_inner();
    let bill = data.billing().await.generate_bill(guest, data.get_menu())?;
    info!("bill={} for guest={} totals {}", bill.bill, guest, bill.total_sum);
    Ok(web::Json(bill))
}
