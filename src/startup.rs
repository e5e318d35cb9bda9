use crate::configuration::Settings;
use crate::helpers::JsonResponse;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    std::fs::create_dir_all(&settings.uploads.dir)?;
    let uploads_dir = settings.uploads.dir.clone();

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| JsonResponse::bad_request(err.to_string()));
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| JsonResponse::bad_request(err.to_string()));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::authentication::Manager::new())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/auth")
                    .service(routes::auth::register_handler)
                    .service(routes::auth::login_handler)
                    .service(routes::auth::me_handler),
            )
            .service(
                web::scope("/users")
                    .service(routes::user::get_by_username_handler)
                    .service(routes::user::password_handler)
                    .service(routes::user::update_handler)
                    .service(routes::user::get_handler),
            )
            .service(
                web::scope("/listings")
                    .service(routes::listing::featured_handler)
                    .service(routes::listing::by_seller_handler)
                    .service(routes::listing::list_handler)
                    .service(routes::listing::add_handler)
                    .service(routes::listing::update_handler)
                    .service(routes::listing::delete_handler)
                    .service(routes::listing::get_handler),
            )
            .service(
                web::scope("/ratings")
                    .service(routes::rating::average_handler)
                    .service(routes::rating::check_seller_handler)
                    .service(routes::rating::check_product_handler)
                    .service(routes::rating::for_seller_handler)
                    .service(routes::rating::for_product_handler)
                    .service(routes::rating::add_handler),
            )
            .service(web::scope("/upload").service(routes::upload::upload_handler))
            .service(actix_files::Files::new("/uploads", uploads_dir.clone()))
            .app_data(json_config.clone())
            .app_data(query_config.clone())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
