use actix_web::{get, post, web, HttpResponse, Responder};
use log::info;
use crate::server::controller::error::CustomError;
use crate::server::model::ledger::PostDeliveriesRequest;
use crate::server::model::GuestId;
use crate::server::state::AppState;

#[post("/v1/deliveries")]
/// Register plates that reached a guest
pub(crate) async fn post_deliveries(body: web::Json<PostDeliveriesRequest>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let PostDeliveriesRequest { guest, order, food, drinks } = body.into_inner();
    info!("delivered to guest={} order={} food={:?} drinks={:?}", guest, order, food, drinks);
    data.billing().await.register_delivered_items(guest, order, food, drinks);
    Ok(HttpResponse::Ok())
}

#[get("/v1/guests/{guest}/ledger")]
/// Delivered but unpaid items of a guest
pub(crate) async fn get_ledger(guest: web::Path<GuestId>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let guest = guest.into_inner();
    let entry = data.billing().await.ledger_entry(guest).cloned();
    entry.map(web::Json).ok_or(CustomError::ResourceNotFound)
}
