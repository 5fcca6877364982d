pub mod employee;
pub mod visitor;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, Responder, get};

use crate::error::MessageResponse;

#[get("/")]
pub async fn index() -> impl Responder {
    "staffdesk is running"
}

/// Fallback for a known resource hit with a verb it does not serve.
pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(MessageResponse::new("Method not allowed"))
}
