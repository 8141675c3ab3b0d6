use actix_web::web;

pub mod health;
pub mod register;
pub mod validate;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/register").service(register::register));
    cfg.service(web::scope("/validate").service(validate::validate));
}
