use actix_web::web;

use crate::handlers::{blog_posts, certificates, contact, cv_files, experience, home, projects};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home::home)))
        .service(web::resource("/blog").route(web::get().to(blog_posts::list_blog_posts)))
        .service(web::resource("/blog/{slug}").route(web::get().to(blog_posts::get_blog_post_by_slug)))
        .service(web::resource("/projects").route(web::get().to(projects::list_projects)))
        .service(web::resource("/experience").route(web::get().to(experience::list_experience)))
        .service(web::resource("/certificates").route(web::get().to(certificates::list_certificates)))
        .service(web::resource("/cv").route(web::get().to(cv_files::cv_page)))
        .service(web::resource("/contact").route(web::post().to(contact::submit_contact_form)));
}
