mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[tokio::test]
async fn test_health_flow() {
    println!("\n\n[+] Running test: test_health_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    println!("[+] Test client and context created.");
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: health probe responds.");
}
