use {
    crate::helpers::spawn_app,
    wiremock::{matchers::any, Mock, ResponseTemplate},
};

#[tokio::test]
async fn home_renders_the_welcome_heading_without_calling_the_backend() {
    // Arrange
    let test_app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.backend_server)
        .await;

    // Act
    let response = test_app.get_home().await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("<h1>Welcome to GoSocial!</h1>"));
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app
        .api_client
        .get(&format!("{}/does/not/exist", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}
