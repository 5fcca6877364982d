use actix_web::{HttpResponse, Responder, web};

use crate::error::{AppResult, MessageResponse};
use crate::model::visitor::VisitorInput;
use crate::service::VisitorService;

/// List Visitors
#[utoipa::path(
    get,
    path = "/api/visitors",
    responses(
        (status = 200, description = "All visitors, newest first", body = [Visitor]),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "Visitor"
)]
pub async fn list_visitors(service: web::Data<VisitorService>) -> AppResult<impl Responder> {
    let visitors = service.list().await?;
    Ok(HttpResponse::Ok().json(visitors))
}

/// Create Visitor
#[utoipa::path(
    post,
    path = "/api/visitors",
    request_body = VisitorInput,
    responses(
        (status = 201, description = "Visitor created", body = Visitor),
        (status = 400, description = "Invalid name, days or daily rate", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "Visitor"
)]
pub async fn create_visitor(
    service: web::Data<VisitorService>,
    payload: web::Json<VisitorInput>,
) -> AppResult<impl Responder> {
    let visitor = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(visitor))
}

/// Update Visitor
#[utoipa::path(
    put,
    path = "/api/visitors/{id}",
    params(
        ("id" = u64, Path, description = "Visitor ID")
    ),
    request_body = VisitorInput,
    responses(
        (status = 200, description = "Visitor updated", body = Visitor),
        (status = 400, description = "Invalid name, days or daily rate", body = MessageResponse),
        (status = 404, description = "Visitor not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "Visitor"
)]
pub async fn update_visitor(
    service: web::Data<VisitorService>,
    path: web::Path<u64>,
    payload: web::Json<VisitorInput>,
) -> AppResult<impl Responder> {
    let visitor = service.update(path.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(visitor))
}

/// Delete Visitor
#[utoipa::path(
    delete,
    path = "/api/visitors/{id}",
    params(
        ("id" = u64, Path, description = "Visitor ID")
    ),
    responses(
        (status = 200, description = "Deleted, or already absent", body = MessageResponse, example = json!({
            "message": "Visitor deleted successfully"
        })),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "Visitor"
)]
pub async fn delete_visitor(
    service: web::Data<VisitorService>,
    path: web::Path<u64>,
) -> AppResult<impl Responder> {
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Visitor deleted successfully")))
}

/// Visitor statistics
#[utoipa::path(
    get,
    path = "/api/visitors/statistics",
    responses(
        (status = 200, description = "Visitor totals", body = VisitorStatistics),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "Visitor"
)]
pub async fn visitor_statistics(service: web::Data<VisitorService>) -> AppResult<impl Responder> {
    let stats = service.statistics().await?;
    Ok(HttpResponse::Ok().json(stats))
}
