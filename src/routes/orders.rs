use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::forms::orders::{SaveOrderForm, SaveOrderFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{ApiError, ApiMessage};
use crate::services::ServiceError;
use crate::services::orders::{
    list_categories as list_categories_service,
    load_category_order as load_category_order_service,
    save_category_order as save_category_order_service,
};

#[derive(Deserialize, Debug)]
struct LoadOrderQueryParams {
    category_id: i32,
}

#[get("/v1/categories")]
pub async fn api_v1_list_categories(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_categories_service(&user, repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(ServiceError::Unauthorized) => {
            HttpResponse::Forbidden().json(ApiError::new("Permission denied."))
        }
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().json(ApiError::new("Failed to list categories."))
        }
    }
}

#[get("/v1/category-order")]
pub async fn api_v1_load_category_order(
    params: web::Query<LoadOrderQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match load_category_order_service(params.category_id, &user, repo.get_ref()) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(ServiceError::Unauthorized) => {
            HttpResponse::Forbidden().json(ApiError::new("Permission denied."))
        }
        Err(ServiceError::NotFound) => {
            HttpResponse::BadRequest().json(ApiError::new("Invalid category selected."))
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            HttpResponse::BadRequest().json(ApiError::new(message))
        }
        Err(err) => {
            log::error!("Failed to load category order: {err}");
            HttpResponse::InternalServerError()
                .json(ApiError::new("Failed to load the category order."))
        }
    }
}

#[post("/v1/category-order")]
pub async fn api_v1_save_category_order(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SaveOrderForm>,
) -> impl Responder {
    let payload: SaveOrderFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ApiError::new(e.to_string())),
    };

    match save_category_order_service(payload, &user, repo.get_ref()) {
        Ok(true) => HttpResponse::Ok().json(ApiMessage::new("Product order saved successfully.")),
        Ok(false) => HttpResponse::InternalServerError().json(ApiError::new(
            "Failed to save the product order. Please try again.",
        )),
        Err(ServiceError::Unauthorized) => {
            HttpResponse::Forbidden().json(ApiError::new("Permission denied."))
        }
        Err(ServiceError::NotFound) => {
            HttpResponse::BadRequest().json(ApiError::new("Invalid category ID provided."))
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            HttpResponse::BadRequest().json(ApiError::new(message))
        }
        Err(err) => {
            log::error!("Failed to save category order: {err}");
            HttpResponse::InternalServerError()
                .json(ApiError::new("Failed to save the product order."))
        }
    }
}
