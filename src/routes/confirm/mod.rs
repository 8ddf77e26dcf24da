mod get;
mod post;

pub use {get::confirm_page, post::confirm_email};
