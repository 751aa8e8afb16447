//! Integration tests for folder operations.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_created_folder_appears_in_parent_children() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let parent = app.create_folder("documents", None).await;
    let child = app.create_folder("reports", Some(parent)).await;

    let response = app
        .request("GET", &format!("/api/folders/{parent}/children"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.data_ids().contains(&child.to_string()));
}

#[tokio::test]
async fn test_root_listing_excludes_child_folders() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let root = app.create_folder("top", None).await;
    let child = app.create_folder("nested", Some(root)).await;

    let response = app.request("GET", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let ids = response.data_ids();
    assert!(ids.contains(&root.to_string()));
    assert!(!ids.contains(&child.to_string()));
}

#[tokio::test]
async fn test_children_are_listed_in_insertion_order() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let parent = app.create_folder("inbox", None).await;
    let first = app.create_folder("b-first", Some(parent)).await;
    let second = app.create_folder("a-second", Some(parent)).await;
    let third = app.create_folder("c-third", Some(parent)).await;

    let response = app
        .request("GET", &format!("/api/folders/{parent}/children"), None)
        .await;

    assert_eq!(
        response.data_ids(),
        vec![first.to_string(), second.to_string(), third.to_string()]
    );
}

#[tokio::test]
async fn test_get_folder_populates_children() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let parent = app.create_folder("photos", None).await;
    let child = app.create_folder("2026", Some(parent)).await;

    let response = app
        .request("GET", &format!("/api/folders/{parent}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "photos");
    let children = response.body["data"]["children"]
        .as_array()
        .expect("children missing");
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["id"], child.to_string());
}

#[tokio::test]
async fn test_rename_updates_only_name() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let parent = app.create_folder("old-parent", None).await;
    let folder = app.create_folder("drafts", Some(parent)).await;

    let before = app
        .request("GET", &format!("/api/folders/{folder}"), None)
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{folder}"),
            Some(serde_json::json!({ "name": "final" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["name"], "final");
    assert_eq!(data["id"], folder.to_string());
    assert_eq!(data["parent_id"], parent.to_string());
    assert_eq!(data["created_at"], before.body["data"]["created_at"]);
}

#[tokio::test]
async fn test_update_can_reparent_folder() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let from = app.create_folder("from", None).await;
    let to = app.create_folder("to", None).await;
    let folder = app.create_folder("moving", Some(from)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{folder}"),
            Some(serde_json::json!({ "parent_id": to })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "moving");

    let old_children = app
        .request("GET", &format!("/api/folders/{from}/children"), None)
        .await;
    let new_children = app
        .request("GET", &format!("/api/folders/{to}/children"), None)
        .await;

    assert!(!old_children.data_ids().contains(&folder.to_string()));
    assert!(new_children.data_ids().contains(&folder.to_string()));
}

#[tokio::test]
async fn test_delete_with_children_orphans_descendants() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let parent = app.create_folder("doomed", None).await;
    let child = app.create_folder("survivor", Some(parent)).await;

    let response = app
        .request("DELETE", &format!("/api/folders/{parent}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    // The child row still exists...
    let child_get = app
        .request("GET", &format!("/api/folders/{child}"), None)
        .await;
    assert_eq!(child_get.status, StatusCode::OK);
    assert_eq!(child_get.body["data"]["parent_id"], parent.to_string());

    // ...does not surface as a root...
    let roots = app.request("GET", "/api/folders", None).await;
    assert!(!roots.data_ids().contains(&child.to_string()));

    // ...and still answers to its dangling parent id.
    let children = app
        .request("GET", &format!("/api/folders/{parent}/children"), None)
        .await;
    assert!(children.data_ids().contains(&child.to_string()));
}

#[tokio::test]
async fn test_delete_missing_folder_returns_not_found() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let response = app
        .request(
            "DELETE",
            "/api/folders/00000000-0000-0000-0000-999999999999",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_get_folder_not_found() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/folders/00000000-0000-0000-0000-999999999999",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_create_with_blank_name_rejected() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": "" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_create_with_missing_parent_rejected() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({
                "name": "stranded",
                "parent_id": "00000000-0000-0000-0000-999999999999"
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_tree_endpoint_nests_descendants() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let root = app.create_folder("projects", None).await;
    let child = app.create_folder("arbor", Some(root)).await;
    let grandchild = app.create_folder("src", Some(child)).await;

    let response = app
        .request("GET", &format!("/api/folders/{root}/tree"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let tree = &response.body["data"];
    assert_eq!(tree["id"], root.to_string());
    assert_eq!(tree["child_count"], 1);
    assert_eq!(tree["children"][0]["id"], child.to_string());
    assert_eq!(tree["children"][0]["children"][0]["id"], grandchild.to_string());
}

#[tokio::test]
async fn test_children_of_unknown_folder_is_empty_list() {
    let _guard = crate::helpers::db_lock().await;
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/folders/00000000-0000-0000-0000-999999999999/children",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data_ids().is_empty());
}
