use crate::{api::attendance, config::Config, store::SqlStore};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let api_limiter = build_limiter(config.rate_api_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(api_limiter) // rate limiting
            .service(
                web::scope("/attendance")
                    .service(
                        web::resource("/today")
                            .route(web::get().to(attendance::today_attendance::<SqlStore>)),
                    )
                    .service(
                        web::resource("/summary")
                            .route(web::get().to(attendance::monthly_summary::<SqlStore>)),
                    )
                    .service(
                        web::resource("/history")
                            .route(web::get().to(attendance::attendance_history::<SqlStore>)),
                    )
                    .service(
                        web::resource("/time-in")
                            .route(web::post().to(attendance::time_in::<SqlStore>)),
                    )
                    .service(
                        web::resource("/time-out")
                            .route(web::post().to(attendance::time_out::<SqlStore>)),
                    ),
            ),
    );
}
