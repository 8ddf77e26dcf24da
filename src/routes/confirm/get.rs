use {
    actix_web::{http::header::ContentType, web, HttpResponse},
    actix_web_flash_messages::{IncomingFlashMessages, Level},
    htmlescape::{encode_attribute, encode_minimal},
};

#[derive(serde::Deserialize)]
pub struct Parameters {
    token: String,
}

fn level_class(level: Level) -> &'static str {
    match level {
        Level::Success => "flash-success",
        Level::Error => "flash-error",
        Level::Warning => "flash-warning",
        _ => "flash-info",
    }
}

/// Render the confirmation page for the token in the path.
/// The backend is only called once the user submits the form.
#[tracing::instrument(name = "Render the confirmation page", skip_all)]
pub async fn confirm_page(
    parameters: web::Path<Parameters>,
    flash_messages: IncomingFlashMessages,
) -> HttpResponse {
    let banner: String = flash_messages
        .iter()
        .map(|m| {
            format!(
                "<p class=\"{}\"><i>{}</i></p>\n",
                level_class(m.level()),
                encode_minimal(m.content())
            )
        })
        .collect();

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Confirm your email</title>
</head>
<body style="background-color: #282c34; color: white; text-align: center;">
    {banner}
    <h1>Confirm your email</h1>
    <p>
        Once you confirm your email, you will be able to log in to your account
        and start using GoSocial.
    </p>
    <form action="/confirm" method="post">
        <input type="hidden" name="token" value="{token}">
        <button type="submit">Confirm</button>
    </form>
</body>
</html>"#,
            banner = banner,
            token = encode_attribute(&parameters.token),
        ))
}
