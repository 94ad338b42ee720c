use actix_web::web;

use crate::handlers::{
    about, auth, blog_posts, certificates, cv_files, dashboard, experience, messages, projects,
    system, uploads,
};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .route(web::get().to(auth::login_page))
            .route(web::post().to(auth::login)),
    )
    .service(web::resource("/logout").route(web::post().to(auth::logout)))
    .service(web::resource("/session").route(web::get().to(auth::current_session)))
    .service(web::resource("/dashboard").route(web::get().to(dashboard::admin_dashboard)))
    .service(web::resource("/health").route(web::get().to(system::health_check)))
    .service(
        web::resource("/about")
            .route(web::get().to(about::get_about_for_edit))
            .route(web::put().to(about::save_about)),
    )
    .service(
        web::scope("/blog")
            .service(web::resource("").route(web::get().to(blog_posts::admin_list_blog_posts)))
            .service(web::resource("/new").route(web::post().to(blog_posts::create_blog_post)))
            .service(
                web::resource("/{post_id}/edit")
                    .route(web::get().to(blog_posts::get_blog_post_for_edit))
                    .route(web::put().to(blog_posts::update_blog_post)),
            )
            .service(web::resource("/{post_id}").route(web::delete().to(blog_posts::delete_blog_post))),
    )
    .service(
        web::scope("/projects")
            .service(web::resource("").route(web::get().to(projects::admin_list_projects)))
            .service(web::resource("/new").route(web::post().to(projects::create_project)))
            .service(
                web::resource("/{project_id}/edit")
                    .route(web::get().to(projects::get_project_for_edit))
                    .route(web::put().to(projects::update_project)),
            )
            .service(web::resource("/{project_id}").route(web::delete().to(projects::delete_project))),
    )
    .service(
        web::scope("/experience")
            .service(web::resource("").route(web::get().to(experience::admin_list_experience)))
            .service(web::resource("/new").route(web::post().to(experience::create_experience)))
            .service(
                web::resource("/{entry_id}/edit")
                    .route(web::get().to(experience::get_experience_for_edit))
                    .route(web::put().to(experience::update_experience)),
            )
            .service(web::resource("/{entry_id}").route(web::delete().to(experience::delete_experience))),
    )
    .service(
        web::scope("/certificates")
            .service(web::resource("").route(web::get().to(certificates::admin_list_certificates)))
            .service(web::resource("/new").route(web::post().to(certificates::create_certificate)))
            .service(
                web::resource("/{certificate_id}/edit")
                    .route(web::get().to(certificates::get_certificate_for_edit))
                    .route(web::put().to(certificates::update_certificate)),
            )
            .service(
                web::resource("/{certificate_id}")
                    .route(web::delete().to(certificates::delete_certificate)),
            ),
    )
    .service(
        web::scope("/cv")
            .service(
                web::resource("")
                    .route(web::get().to(cv_files::admin_list_cv_files))
                    .route(web::post().to(cv_files::upload_cv_file)),
            )
            .service(web::resource("/{cv_id}").route(web::delete().to(cv_files::delete_cv_file))),
    )
    .service(
        web::scope("/messages")
            .service(web::resource("").route(web::get().to(messages::list_messages)))
            .service(web::resource("/{message_id}").route(web::delete().to(messages::delete_message))),
    )
    .service(web::resource("/uploads/images").route(web::post().to(uploads::upload_image)));
}
