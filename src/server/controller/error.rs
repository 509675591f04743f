use actix_web::{error, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use log::error;
use crate::server::billing::error::BillingError;

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("invalid request")]
    BadRequest,
    #[display("resource not found")]
    ResourceNotFound,
    #[display("menu is not available yet")]
    MenuNotReady,
    #[display("billing data is inconsistent")]
    Inconsistency,
}

impl From<BillingError> for CustomError {
    fn from(e: BillingError) -> Self {
        match e {
            BillingError::MenuNotReady => CustomError::MenuNotReady,
            BillingError::BillNotFound { .. } | BillingError::GuestNotFound { .. } => CustomError::ResourceNotFound,
            BillingError::UnknownMenuItem { .. } => {
                error!("billing failed, {}", e);
                CustomError::Inconsistency
            }
        }
    }
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::BadRequest => StatusCode::BAD_REQUEST,
            CustomError::ResourceNotFound => StatusCode::NOT_FOUND,
            CustomError::MenuNotReady => StatusCode::SERVICE_UNAVAILABLE,
            CustomError::Inconsistency => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
