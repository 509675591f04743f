use crate::server::model::payment::PaymentMethod;

const CARD_PAYMENT_THRESHOLD: f64 = 20.0;

/// Payment methods accepted for `amount`, cash always comes first.
pub(crate) fn payment_options(amount: f64) -> Vec<PaymentMethod> {
    if amount >= CARD_PAYMENT_THRESHOLD {
        vec![PaymentMethod::Cash, PaymentMethod::DebitCard, PaymentMethod::CreditCard]
    } else {
        vec![PaymentMethod::Cash]
    }
}
