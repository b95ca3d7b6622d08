use super::*;

/// Tests the Solar Grid round trip.
///
/// Verifies that a created project has an id, a creation timestamp, and an empty
/// section list, and that fetching it returns the same record.
///
/// Expected: 200 on create and on fetch with equal bodies
#[tokio::test]
async fn creates_and_fetches_solar_grid() {
    let (_test, app) = test_app().await;

    let created = post(
        &app,
        "/projects",
        json!({ "name": "Solar Grid", "status": "upcoming" }),
    )
    .await;

    assert_eq!(created.status, StatusCode::OK);
    assert!(created.body["id"].as_i64().unwrap() > 0);
    assert!(created.body["created_at"].is_string());
    assert_eq!(created.body["sections"], json!([]));

    let id = created.body["id"].as_i64().unwrap();
    let fetched = get(&app, &format!("/projects/{}", id)).await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

/// Tests the default project status.
///
/// Expected: "upcoming" when status is omitted
#[tokio::test]
async fn status_defaults_to_upcoming() {
    let (_test, app) = test_app().await;

    let created = post(&app, "/projects", json!({ "name": "Wind Farm" })).await;

    assert_eq!(created.body["status"], "upcoming");
}

/// Tests creating a section under a missing project.
///
/// Expected: 404 and no section row
#[tokio::test]
async fn section_under_missing_project_is_not_found() {
    let (_test, app) = test_app().await;

    let res = post(
        &app,
        "/projects/999/sections",
        json!({ "title": "Orphan" }),
    )
    .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "Project not found");

    let all = get(&app, "/projects/sections").await;
    assert_eq!(all.body, json!([]));

    let listed = get(&app, "/projects/999/sections").await;
    assert_eq!(listed.status, StatusCode::NOT_FOUND);
}

/// Tests adding sections and reading them through the project.
///
/// Expected: sections appear on the project and in the filtered listing only
#[tokio::test]
async fn sections_are_attached_and_filtered() {
    let (test, app) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await.unwrap();
    let (other, _) = factory::helpers::create_project_with_sections(db, 2)
        .await
        .unwrap();

    let section = post(
        &app,
        &format!("/projects/{}/sections", project.id),
        json!({ "title": "Phase 1", "main_image_url": "phase1.png" }),
    )
    .await;
    assert_eq!(section.status, StatusCode::OK);
    assert_eq!(section.body["project_id"], project.id);
    assert_eq!(section.body["main_image_url"], "phase1.png");

    let fetched = get(&app, &format!("/projects/{}", project.id)).await;
    assert_eq!(fetched.body["sections"].as_array().unwrap().len(), 1);
    assert_eq!(fetched.body["sections"][0]["title"], "Phase 1");

    let filtered = get(&app, &format!("/projects/sections?project_id={}", other.id)).await;
    let filtered = filtered.body.as_array().unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|s| s["project_id"] == other.id));

    let nested = get(&app, &format!("/projects/{}/sections", other.id)).await;
    assert_eq!(nested.body.as_array().unwrap().len(), 2);
}

/// Tests section update and delete through the flat section routes.
///
/// Expected: updated title, then 404 "Project section not found" after deletion
#[tokio::test]
async fn updates_and_deletes_section() {
    let (test, app) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await.unwrap();
    let section = factory::create_section(db, project.id).await.unwrap();
    let uri = format!("/projects/sections/{}", section.id);

    let updated = put(&app, &uri, json!({ "title": "Renamed" })).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["title"], "Renamed");
    assert_eq!(updated.body["project_id"], project.id);

    let deleted = delete(&app, &uri).await;
    assert_eq!(deleted.body["message"], "Project section deleted successfully");

    let missing = get(&app, &uri).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "Project section not found");
}

/// Tests deleting a project that still has sections.
///
/// Expected: 400, the project and its sections stay readable, and the delete
/// succeeds once the sections are gone
#[tokio::test]
async fn deleting_project_with_sections_is_rejected() {
    let (test, app) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let (project, sections) = factory::helpers::create_project_with_sections(db, 2)
        .await
        .unwrap();
    let project_uri = format!("/projects/{}", project.id);

    let rejected = delete(&app, &project_uri).await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.body["error"], "Project still has sections");

    let kept = get(&app, &project_uri).await;
    assert_eq!(kept.status, StatusCode::OK);
    assert_eq!(kept.body["sections"].as_array().unwrap().len(), 2);

    for section in &sections {
        let uri = format!("/projects/sections/{}", section.id);
        assert_eq!(get(&app, &uri).await.status, StatusCode::OK);
        assert_eq!(delete(&app, &uri).await.status, StatusCode::OK);
    }

    let deleted = delete(&app, &project_uri).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Project deleted successfully");
    assert_eq!(get(&app, &project_uri).await.status, StatusCode::NOT_FOUND);
}

/// Tests a partial project update.
///
/// Expected: only the status changes
#[tokio::test]
async fn patch_changes_only_status() {
    let (test, app) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let project = factory::project::ProjectFactory::new(db)
        .name("Hydro")
        .description(Some("River turbine".to_string()))
        .build()
        .await
        .unwrap();

    let res = patch(
        &app,
        &format!("/projects/{}", project.id),
        json!({ "status": "completed" }),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "completed");
    assert_eq!(res.body["name"], "Hydro");
    assert_eq!(res.body["description"], "River turbine");
}
