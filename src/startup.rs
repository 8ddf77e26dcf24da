use {
    crate::{
        activation_client::ActivationClient,
        configuration::Settings,
        routes::{confirm_email, confirm_page, health_check, home},
    },
    actix_web::{cookie::Key, dev::Server, web, App, HttpServer},
    actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework},
    secrecy::{ExposeSecret, Secret},
    std::net::TcpListener,
    tracing_actix_web::TracingLogger,
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(app_config: Settings) -> Result<Self, anyhow::Error> {
        let activation_client = app_config.backend.client()?;

        let address = format!(
            "{}:{}",
            app_config.application.host, app_config.application.port
        );
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let hmac_secret = app_config.application.hmac_secret;
        let server = run(listener, activation_client, hmac_secret)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    activation_client: ActivationClient,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    // `web::Data` is basically `Arc`, which will safely share the app state across threads
    let activation_client = web::Data::new(activation_client);
    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .map_err(|e| anyhow::anyhow!("The hmac secret cannot sign cookies: {:?}", e))?;
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/confirm/{token}", web::get().to(confirm_page))
            .route("/confirm", web::post().to(confirm_email))
            .app_data(activation_client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
