mod confirm;
mod health_check;
mod home;

pub use {
    confirm::{confirm_email, confirm_page},
    health_check::health_check,
    home::home,
};
