use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tera::Tera;

use shelfsort::db::establish_connection_pool;
use shelfsort::models::config::ServerConfig;
use shelfsort::repository::DieselRepository;
use shelfsort::routes::orders::{
    api_v1_list_categories, api_v1_load_category_order, api_v1_save_category_order,
};
use shelfsort::routes::storefront::{index, show_category};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = match config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
    {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let server_config: ServerConfig = match settings.try_deserialize() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to parse configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection pool: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let tera = match Tera::new("templates/**/*.html") {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to load templates: {e}");
            std::process::exit(1);
        }
    };

    let bind_address = server_config.bind_address.clone();
    log::info!("Starting shelfsort server on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(Files::new("/assets", "./assets"))
            .service(index)
            .service(show_category)
            .service(
                web::scope("/api")
                    .service(api_v1_list_categories)
                    .service(api_v1_load_category_order)
                    .service(api_v1_save_category_order),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
