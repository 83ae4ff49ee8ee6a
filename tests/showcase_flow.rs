mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use entity::startup::Visibility;

#[tokio::test]
async fn test_showcase_returns_only_public_rows() {
    println!("\n\n[+] Running test: test_showcase_returns_only_public_rows");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (maya, _) = client.create_test_user(Some("maya@test.com".into())).await;
    let (liam, _) = client.create_test_user(Some("liam@test.com".into())).await;

    client
        .create_test_startup(maya, "EcoKids", Visibility::Public)
        .await;
    client
        .create_test_startup(maya, "SecretLab", Visibility::Private)
        .await;
    client
        .create_test_startup(liam, "PetPals", Visibility::Public)
        .await;
    client
        .create_test_startup(liam, "StealthCo", Visibility::Private)
        .await;

    let req = test::TestRequest::get().uri("/startups").to_request();
    let showcase: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let cards = showcase.as_array().unwrap();
    assert_eq!(cards.len(), 2);
    for card in cards {
        assert_eq!(card["visibility"], "public");
    }
    println!("[/] Test passed: private rows never leak into the showcase.");
}

#[tokio::test]
async fn test_showcase_enriches_cards_with_founder_data() {
    println!("\n\n[+] Running test: test_showcase_enriches_cards_with_founder_data");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (maya, _) = client.create_test_user(Some("maya@test.com".into())).await;
    client
        .create_test_startup(maya, "EcoKids", Visibility::Public)
        .await;

    let req = test::TestRequest::get().uri("/startups").to_request();
    let showcase: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(showcase[0]["username"], "maya");

    println!("[>] Deleting the founder orphans the card but keeps it visible.");
    ctx.db.delete_user(&maya).await.unwrap();

    let req = test::TestRequest::get().uri("/startups").to_request();
    let showcase: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(showcase.as_array().unwrap().len(), 1);
    assert_eq!(showcase[0]["username"], "Anonymous");
    println!("[/] Test passed: founder enrichment degrades gracefully.");
}

#[tokio::test]
async fn test_showcase_search_matches_name_description_and_founder() {
    println!("\n\n[+] Running test: test_showcase_search_matches_name_description_and_founder");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (maya, _) = client.create_test_user(Some("maya@test.com".into())).await;
    let (liam, _) = client.create_test_user(Some("liam@test.com".into())).await;
    client
        .create_test_startup(maya, "EcoKids", Visibility::Public)
        .await;
    client
        .create_test_startup(liam, "PetPals", Visibility::Public)
        .await;

    println!("[>] Searching by startup name, mixed case.");
    let req = test::TestRequest::get()
        .uri("/startups?search=ECOKIDS")
        .to_request();
    let hits: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["name"], "EcoKids");

    println!("[>] Searching by founder display name.");
    let req = test::TestRequest::get()
        .uri("/startups?search=liam")
        .to_request();
    let hits: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["name"], "PetPals");

    println!("[>] Searching by description text.");
    let req = test::TestRequest::get()
        .uri("/startups?search=wonderful")
        .to_request();
    let hits: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(hits.as_array().unwrap().len(), 2);
    println!("[/] Test passed: search covers all three fields.");
}

#[tokio::test]
async fn test_showcase_sort_orders() {
    println!("\n\n[+] Running test: test_showcase_sort_orders");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (maya, _) = client.create_test_user(Some("maya@test.com".into())).await;
    // created in this order: Banana, apple, Cherry; the short sleeps keep
    // the creation timestamps strictly increasing
    for name in ["Banana", "apple", "Cherry"] {
        client
            .create_test_startup(maya, name, Visibility::Public)
            .await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let names = |v: &serde_json::Value| -> Vec<String> {
        v.as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect()
    };

    println!("[>] Default sort is newest first.");
    let req = test::TestRequest::get().uri("/startups").to_request();
    let cards: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&cards), vec!["Cherry", "apple", "Banana"]);

    println!("[>] sort=oldest flips the order.");
    let req = test::TestRequest::get()
        .uri("/startups?sort=oldest")
        .to_request();
    let cards: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&cards), vec!["Banana", "apple", "Cherry"]);

    println!("[>] sort=name is plain lexicographic ascending.");
    let req = test::TestRequest::get()
        .uri("/startups?sort=name")
        .to_request();
    let cards: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&cards), vec!["Banana", "Cherry", "apple"]);

    println!("[>] An unknown sort key is a bad request.");
    let req = test::TestRequest::get()
        .uri("/startups?sort=sideways")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    println!("[/] Test passed: all three sort orders behave.");
}
