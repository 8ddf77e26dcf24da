use actix_web::{http::header::ContentType, HttpResponse};

/// Static welcome page, never talks to the backend
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("home.html"))
}
