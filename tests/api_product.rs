mod common;

use serde_json::json;

// End-to-end contract tests. They run against a disposable database created
// from ./migrations and skip (pass) when no postgres is reachable, like the
// rest of the suite's DB-backed tests.

const OWNER: &str = "x-user-id";

fn product_body() -> serde_json::Value {
    json!({
        "reference": "REF1",
        "description": "Desc",
        "category": "Cat",
        "price": "9.99",
        "status": true,
        "image": "img.png"
    })
}

async fn create_product(
    client: &reqwest::Client,
    address: &str,
    caller: &str,
    body: &serde_json::Value,
) -> reqwest::Response {
    client
        .post(&format!("{}/produtos", address))
        .header(OWNER, caller)
        .json(body)
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    common::seed_users(&app.db_pool).await;
    let client = reqwest::Client::new();

    let response = create_product(&client, &app.address, "1", &product_body()).await;
    assert_eq!(response.status().as_u16(), 201);

    let location = response
        .headers()
        .get("location")
        .expect("Location header missing")
        .to_str()
        .unwrap()
        .to_string();
    let created: serde_json::Value = response.json().await.unwrap();
    let id = created["id"].as_i64().expect("created product has no id");
    assert_eq!(location, format!("/produtos/{}", id));
    assert_eq!(created["user_id"], 1);

    let response = client
        .get(&format!("{}/produtos/{}", &app.address, id))
        .header(OWNER, "1")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);

    let summary: serde_json::Value = response.json().await.unwrap();
    assert_eq!(summary["id"], id);
    assert_eq!(summary["reference"], "REF1");
    assert_eq!(summary["description"], "Desc");
    assert_eq!(summary["category"], "Cat");
    assert_eq!(summary["price"], "9.99");
    assert_eq!(summary["status"], true);
    assert_eq!(summary["image"], "img.png");
    assert_eq!(summary["owner"]["id"], 1);
    assert_eq!(summary["owner"]["first_name"], "Ana");

    // the same id does not exist for another caller
    let response = client
        .get(&format!("{}/produtos/{}", &app.address, id))
        .header(OWNER, "2")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn create_ignores_owner_in_body() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    common::seed_users(&app.db_pool).await;
    let client = reqwest::Client::new();

    let mut body = product_body();
    body["user_id"] = json!(2);
    let response = create_product(&client, &app.address, "1", &body).await;
    assert_eq!(response.status().as_u16(), 201);

    let created: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created["user_id"], 1);
}

#[tokio::test]
async fn create_rejects_invalid_payload() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    common::seed_users(&app.db_pool).await;
    let client = reqwest::Client::new();

    let mut body = product_body();
    body["reference"] = json!("r".repeat(51));
    let response = create_product(&client, &app.address, "1", &body).await;
    assert_eq!(response.status().as_u16(), 400);

    let mut body = product_body();
    body.as_object_mut().unwrap().remove("price");
    let response = create_product(&client, &app.address, "1", &body).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn list_pages_are_owner_scoped() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    common::seed_users(&app.db_pool).await;
    let client = reqwest::Client::new();

    for i in 0..3 {
        let mut body = product_body();
        body["reference"] = json!(format!("REF{}", i));
        let response = create_product(&client, &app.address, "1", &body).await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let response = client
        .get(&format!("{}/produtos?page=1&limit=2", &app.address))
        .header(OWNER, "1")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);

    let envelope: serde_json::Value = response.json().await.unwrap();
    assert_eq!(envelope["total"], 3);
    assert_eq!(envelope["page_size"], 2);
    assert_eq!(envelope["current_page"], 1);
    assert_eq!(envelope["total_pages"], 2);
    assert_eq!(envelope["items"].as_array().unwrap().len(), 2);

    let response = client
        .get(&format!("{}/produtos?page=2&limit=2", &app.address))
        .header(OWNER, "1")
        .send()
        .await
        .expect("Failed to execute request.");
    let envelope: serde_json::Value = response.json().await.unwrap();
    assert_eq!(envelope["items"].as_array().unwrap().len(), 1);

    // out of range / invalid paging
    for uri in [
        "/produtos?page=3&limit=2",
        "/produtos?page=0&limit=2",
        "/produtos?page=1&limit=0",
    ] {
        let response = client
            .get(&format!("{}{}", &app.address, uri))
            .header(OWNER, "1")
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 400, "uri: {}", uri);
    }
}

#[tokio::test]
async fn list_rejects_first_page_on_empty_account() {
    // an account with no products has total_pages=0, so even the default
    // page=1 request is rejected. Pinned deliberately: this is the observed
    // behavior clients get today.
    let Some(app) = common::spawn_app().await else {
        return;
    };
    common::seed_users(&app.db_pool).await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/produtos", &app.address))
        .header(OWNER, "2")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn update_touches_only_mutable_fields() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    common::seed_users(&app.db_pool).await;
    let client = reqwest::Client::new();

    let response = create_product(&client, &app.address, "1", &product_body()).await;
    let created: serde_json::Value = response.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let mut body = product_body();
    body["status"] = json!(false);
    body["user_id"] = json!(2); // must be ignored

    // another caller cannot update it
    let response = client
        .put(&format!("{}/produtos/{}", &app.address, id))
        .header(OWNER, "2")
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .put(&format!("{}/produtos/{}", &app.address, id))
        .header(OWNER, "1")
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 204);

    let response = client
        .get(&format!("{}/produtos/{}", &app.address, id))
        .header(OWNER, "1")
        .send()
        .await
        .expect("Failed to execute request.");
    let summary: serde_json::Value = response.json().await.unwrap();
    assert_eq!(summary["id"], id);
    assert_eq!(summary["status"], false);
    assert_eq!(summary["owner"]["id"], 1);
}

#[tokio::test]
async fn delete_is_not_owner_scoped() {
    // Delete matches by id alone: any authenticated caller can remove any
    // product, unlike list/get/update. This asymmetry is suspicious and
    // probably unintended, but deployed clients may depend on it. Preserved
    // on purpose; see DESIGN.md before changing this test.
    let Some(app) = common::spawn_app().await else {
        return;
    };
    common::seed_users(&app.db_pool).await;
    let client = reqwest::Client::new();

    let response = create_product(&client, &app.address, "1", &product_body()).await;
    let created: serde_json::Value = response.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let response = client
        .delete(&format!("{}/produtos/{}", &app.address, id))
        .header(OWNER, "2")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 204);

    // the row is gone for its owner too
    let response = client
        .get(&format!("{}/produtos/{}", &app.address, id))
        .header(OWNER, "1")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);

    // a second delete races to not-found
    let response = client
        .delete(&format!("{}/produtos/{}", &app.address, id))
        .header(OWNER, "1")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn requests_without_identity_are_unauthorized() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/produtos", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn health_check_works() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}
