use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::ServiceError;
use crate::services::storefront::{
    show_category as show_category_service, show_index as show_index_service,
};

#[get("/")]
pub async fn index(repo: web::Data<DieselRepository>, tera: web::Data<Tera>) -> impl Responder {
    match show_index_service(repo.get_ref()) {
        Ok(categories) => {
            let mut context = Context::new();
            context.insert("categories", &categories);
            context.insert("current_page", "index");
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render category index: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/categories/{category_id}")]
pub async fn show_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_category_service(category_id.into_inner(), repo.get_ref()) {
        Ok((category, products)) => {
            let mut context = Context::new();
            context.insert("category", &category);
            context.insert("products", &products);
            context.insert("current_page", "category");
            render_template(&tera, "shop/category.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to render category page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
