pub mod auth;
pub mod brands;
pub mod calendar;
pub mod collaborations;
pub mod creators;
pub mod inquiries;
pub mod tasks;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (protected by JWT via the AuthenticatedUser extractor) ──
    cfg.service(
        web::scope("/auth")
            .route("/me", web::get().to(auth::me))
            .route("/complete-profile", web::post().to(auth::complete_profile)),
    );

    // ── Creator routes (public profile is open, the rest require a JWT) ──
    cfg.service(
        web::scope("/creators")
            .route(
                "/by-username/{username}",
                web::get().to(creators::get_public_profile),
            )
            .route("/{id}", web::get().to(creators::get_creator))
            .route("/{id}/pricing", web::put().to(creators::update_pricing))
            .route(
                "/{id}/availability",
                web::put().to(creators::update_availability),
            )
            .route("/{id}/templates", web::get().to(creators::list_templates))
            .route("/{id}/templates", web::post().to(creators::create_template))
            .route(
                "/{id}/templates/{template_id}",
                web::put().to(creators::update_template),
            )
            .route(
                "/{id}/templates/{template_id}",
                web::delete().to(creators::delete_template),
            )
            .route("/{id}/inquiries", web::get().to(creators::list_inquiries))
            .route(
                "/{id}/collaborations",
                web::get().to(creators::list_collaborations),
            ),
    );

    // ── Brand routes ──
    cfg.service(
        web::scope("/brands")
            .route("/{id}", web::get().to(brands::get_brand))
            .route(
                "/{id}/collaborations",
                web::get().to(brands::list_collaborations),
            ),
    );

    // ── Inquiry routes (submission and status lookup are public) ──
    cfg.service(
        web::scope("/inquiries")
            .route("/{id}/status", web::get().to(inquiries::get_status))
            .route("/{id}/respond", web::post().to(inquiries::respond))
            .route("/{id}/auto-respond", web::post().to(inquiries::auto_respond))
            .route("/{id}/convert", web::post().to(inquiries::convert))
            .route("/{id}/reject", web::post().to(inquiries::reject))
            .route("/{id}", web::get().to(inquiries::get_inquiry))
            .route("/{username}", web::post().to(inquiries::submit)),
    );

    // ── Collaboration routes (parties of the collaboration only) ──
    cfg.service(
        web::scope("/collaborations")
            .route("", web::post().to(collaborations::create_collaboration))
            .route("/{id}", web::get().to(collaborations::get_collaboration))
            .route("/{id}", web::put().to(collaborations::update_collaboration))
            .route("/{id}/status", web::put().to(collaborations::update_status))
            .route("/{id}/progress", web::get().to(collaborations::get_progress))
            .route(
                "/{id}/milestones",
                web::get().to(collaborations::list_milestones),
            )
            .route(
                "/{id}/milestones",
                web::post().to(collaborations::add_milestone),
            )
            .route(
                "/{id}/milestones/{milestone_id}",
                web::put().to(collaborations::update_milestone),
            )
            .route("/{id}/messages", web::get().to(collaborations::list_messages))
            .route("/{id}/messages", web::post().to(collaborations::send_message))
            .route("/{id}/contract", web::get().to(collaborations::get_contract))
            .route(
                "/{id}/contract",
                web::put().to(collaborations::upsert_contract),
            ),
    );

    // ── Task routes (creator-owned) ──
    cfg.service(
        web::scope("/tasks")
            .route("", web::get().to(tasks::list_tasks))
            .route("", web::post().to(tasks::create_task))
            .route("/pipeline", web::get().to(tasks::pipeline))
            .route("/{id}", web::get().to(tasks::get_task))
            .route("/{id}", web::put().to(tasks::update_task))
            .route("/{id}", web::delete().to(tasks::delete_task))
            .route(
                "/{id}/collaboration",
                web::get().to(tasks::get_task_collaboration),
            )
            .route("/{id}/subtasks", web::post().to(tasks::add_subtask))
            .route(
                "/{id}/subtasks/{subtask_id}",
                web::put().to(tasks::update_subtask),
            )
            .route(
                "/{id}/subtasks/{subtask_id}",
                web::delete().to(tasks::delete_subtask),
            ),
    );

    cfg.route("/calendar", web::get().to(calendar::month));
}
