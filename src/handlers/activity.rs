use actix_web::{web, HttpResponse};
use crate::errors::AppError;
use crate::models::activity::ActivityRequest;
use crate::services::activity::ActivityService;

// GET /api/activities
pub async fn get_activities(
    service: web::Data<ActivityService>,
) -> Result<HttpResponse, AppError> {
    let activities = service.get_all().await?;
    Ok(HttpResponse::Ok().json(activities))
}

// GET /api/activities/{id}
pub async fn get_activity(
    service: web::Data<ActivityService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let activity = service.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(activity))
}

// POST /api/activities
pub async fn create_activity(
    service: web::Data<ActivityService>,
    payload: web::Json<ActivityRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(created))
}

// PUT /api/activities/{id}
pub async fn update_activity(
    service: web::Data<ActivityService>,
    id: web::Path<i64>,
    payload: web::Json<ActivityRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

// DELETE /api/activities/{id}
pub async fn delete_activity(
    service: web::Data<ActivityService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
