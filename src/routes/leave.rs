use actix_web::web;

use crate::handlers::leave;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/leave-types", web::get().to(leave::list_leave_types))
        .service(
            web::scope("/leave")
                .route("/duration", web::get().to(leave::preview_duration))
                .route("/excluded-dates", web::get().to(leave::list_excluded_dates)),
        )
        .service(
            web::scope("/leave-requests")
                .route("", web::post().to(leave::submit_leave_request))
                .route("", web::get().to(leave::list_my_leave_requests))
                .route("/pending", web::get().to(leave::list_pending_approvals)),
        );
}
