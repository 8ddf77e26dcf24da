use {
    crate::{activation_client::ActivationClient, domain::ActivationToken, utils::see_other},
    actix_web::{web, HttpResponse},
    actix_web_flash_messages::FlashMessage,
};

pub const SUCCESS_MESSAGE: &str = "Email confirmed successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to confirm email.";

#[derive(serde::Deserialize)]
pub struct FormData {
    #[serde(default)]
    token: String,
}

/// Issue one activation request for the submitted token and
/// redirect back to the confirmation page with the outcome as a flash message.
///
/// A missing token is a silent no-op: nothing is sent and `204 No Content`
/// keeps the browser on the current page.
#[tracing::instrument(
    name = "Confirm an email address",
    skip(form, activation_client),
    fields(outcome = tracing::field::Empty)
)]
pub async fn confirm_email(
    form: web::Form<FormData>,
    activation_client: web::Data<ActivationClient>,
) -> HttpResponse {
    let token = match ActivationToken::parse(form.0.token) {
        Ok(token) => token,
        Err(_) => return HttpResponse::NoContent().finish(),
    };

    match activation_client.activate(&token).await {
        Ok(()) => {
            tracing::Span::current().record("outcome", &"confirmed");
            FlashMessage::success(SUCCESS_MESSAGE).send();
        }
        Err(e) => {
            tracing::Span::current().record("outcome", &"failed");
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to confirm email address."
            );
            FlashMessage::error(FAILURE_MESSAGE).send();
        }
    }

    see_other(&format!("/confirm/{}", urlencoding::encode(token.as_ref())))
}
