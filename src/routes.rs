use crate::{
    api::{self, employee, visitor},
    config::Config,
    error::AppError,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::Condition, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = (60_000 / requests_per_min as u64).max(1);
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            // both values are clamped to >= 1 above
            .expect("non-zero rate limiter quota");
        Governor::new(&cfg)
    }

    // Malformed bodies and ids answer with the same {message} shape as every other error.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(api::index);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Condition::new(
                config.rate_api_per_min > 0,
                build_limiter(config.rate_api_per_min),
            ))
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee))
                            .default_service(web::route().to(api::method_not_allowed)),
                    )
                    // /employees/statistics
                    .service(
                        web::resource("/statistics")
                            .route(web::get().to(employee::employee_statistics))
                            .default_service(web::route().to(api::method_not_allowed)),
                    )
                    // /employees/{numEmp}
                    .service(
                        web::resource("/{num_emp}")
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee))
                            .default_service(web::route().to(api::method_not_allowed)),
                    ),
            )
            .service(
                web::scope("/visitors")
                    // /visitors
                    .service(
                        web::resource("")
                            .route(web::get().to(visitor::list_visitors))
                            .route(web::post().to(visitor::create_visitor))
                            .default_service(web::route().to(api::method_not_allowed)),
                    )
                    // /visitors/statistics
                    .service(
                        web::resource("/statistics")
                            .route(web::get().to(visitor::visitor_statistics))
                            .default_service(web::route().to(api::method_not_allowed)),
                    )
                    // /visitors/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(visitor::update_visitor))
                            .route(web::delete().to(visitor::delete_visitor))
                            .default_service(web::route().to(api::method_not_allowed)),
                    ),
            ),
    );
}
