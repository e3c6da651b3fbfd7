//! API integration tests
//!
//! These run against a live server with a seeded database:
//! start the server, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080/api";

/// Unique suffix so repeated runs don't trip unique constraints
fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

/// First employee id from the seeded database
async fn any_employee_id(client: &Client) -> i64 {
    let body: Value = client
        .get(format!("{}/employees", BASE_URL))
        .send()
        .await
        .expect("Failed to list employees")
        .json()
        .await
        .expect("Failed to parse employees");
    body["data"][0]["id"]
        .as_i64()
        .expect("No employees in database; seed it first")
}

/// First department id from the seeded database
async fn any_department_id(client: &Client) -> i64 {
    let body: Value = client
        .get(format!("{}/departments", BASE_URL))
        .send()
        .await
        .expect("Failed to list departments")
        .json()
        .await
        .expect("Failed to parse departments");
    body["data"][0]["id"]
        .as_i64()
        .expect("No departments in database; seed it first")
}

async fn create_team(client: &Client, member_ids: &[i64]) -> i64 {
    let response = client
        .post(format!("{}/teams", BASE_URL))
        .json(&json!({
            "name": unique("Test Team"),
            "description": "Created by integration tests",
            "memberIds": member_ids
        }))
        .send()
        .await
        .expect("Failed to create team");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse team");
    body["data"]["id"].as_i64().expect("No team ID")
}

async fn create_equipment(client: &Client, team_id: i64, department_id: i64) -> i64 {
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": "Test Lathe",
            "serialNumber": unique("SN"),
            "category": "machine",
            "departmentId": department_id,
            "maintenanceTeamId": team_id,
            "location": "Workshop A",
            "purchaseDate": "2023-04-01"
        }))
        .send()
        .await
        .expect("Failed to create equipment");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse equipment");
    body["data"]["id"].as_i64().expect("No equipment ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "GearGuard API is running");
}

#[tokio::test]
#[ignore]
async fn test_request_inherits_team_from_equipment() {
    let client = Client::new();
    let employee_id = any_employee_id(&client).await;
    let department_id = any_department_id(&client).await;
    let team_id = create_team(&client, &[employee_id]).await;
    let equipment_id = create_equipment(&client, team_id, department_id).await;

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "Spindle bearing noise",
            "type": "corrective",
            "equipmentId": equipment_id,
            "requestedById": employee_id,
            "priority": "high",
            "maintenanceTeamId": 999999
        }))
        .send()
        .await
        .expect("Failed to create request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse request");
    let request = &body["data"];

    // Status is forced to new, the team comes from the equipment and the
    // caller-supplied team id is ignored
    assert_eq!(request["status"], "new");
    assert_eq!(request["maintenanceTeamId"].as_i64(), Some(team_id));
    assert!(request["completedDate"].is_null());

    // The equipment now carries one open request
    let body: Value = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to get equipment")
        .json()
        .await
        .expect("Failed to parse equipment");
    assert_eq!(body["data"]["openRequestCount"].as_i64(), Some(1));

    // Changing the equipment's team later must not touch the request
    let other_team_id = create_team(&client, &[employee_id]).await;
    let response = client
        .patch(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .json(&json!({ "maintenanceTeamId": other_team_id }))
        .send()
        .await
        .expect("Failed to update equipment");
    assert_eq!(response.status(), 200);

    let request_id = request["id"].as_i64().unwrap();
    let body: Value = client
        .get(format!("{}/requests/{}", BASE_URL, request_id))
        .send()
        .await
        .expect("Failed to get request")
        .json()
        .await
        .expect("Failed to parse request");
    assert_eq!(body["data"]["maintenanceTeamId"].as_i64(), Some(team_id));

    // Cleanup
    let _ = client
        .delete(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_repaired_transition_stamps_completion() {
    let client = Client::new();
    let employee_id = any_employee_id(&client).await;
    let department_id = any_department_id(&client).await;
    let team_id = create_team(&client, &[employee_id]).await;
    let equipment_id = create_equipment(&client, team_id, department_id).await;

    let body: Value = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "Coolant leak",
            "type": "corrective",
            "equipmentId": equipment_id,
            "requestedById": employee_id,
            "priority": "critical"
        }))
        .send()
        .await
        .expect("Failed to create request")
        .json()
        .await
        .expect("Failed to parse request");
    let request_id = body["data"]["id"].as_i64().expect("No request ID");

    let response = client
        .patch(format!("{}/requests/{}/status", BASE_URL, request_id))
        .json(&json!({ "status": "repaired", "durationHours": 2.5 }))
        .send()
        .await
        .expect("Failed to set status");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    let request = &body["data"];
    assert_eq!(request["status"], "repaired");
    assert!(request["completedDate"].is_string());
    assert_eq!(request["durationHours"].as_f64(), Some(2.5));
    assert_eq!(request["isOverdue"], false);

    // Repaired requests no longer count as open
    let body: Value = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to get equipment")
        .json()
        .await
        .expect("Failed to parse equipment");
    assert_eq!(body["data"]["openRequestCount"].as_i64(), Some(0));

    // Cleanup
    let _ = client
        .delete(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_equipment_delete_cascades_to_requests() {
    let client = Client::new();
    let employee_id = any_employee_id(&client).await;
    let department_id = any_department_id(&client).await;
    let team_id = create_team(&client, &[employee_id]).await;
    let equipment_id = create_equipment(&client, team_id, department_id).await;

    let body: Value = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "Belt replacement",
            "type": "preventive",
            "equipmentId": equipment_id,
            "requestedById": employee_id,
            "priority": "low",
            "scheduledDate": "2030-01-01T09:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to create request")
        .json()
        .await
        .expect("Failed to parse request");
    let request_id = body["data"]["id"].as_i64().expect("No request ID");

    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to delete equipment");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/requests/{}", BASE_URL, request_id))
        .send()
        .await
        .expect("Failed to get request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_teams_keep_their_own_members() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/employees", BASE_URL))
        .send()
        .await
        .expect("Failed to list employees")
        .json()
        .await
        .expect("Failed to parse employees");
    let employees = body["data"].as_array().expect("No employee list");
    assert!(
        employees.len() >= 2,
        "Need at least two seeded employees for this test"
    );
    let first = employees[0]["id"].as_i64().unwrap();
    let second = employees[1]["id"].as_i64().unwrap();

    let team_a = create_team(&client, &[first]).await;
    let team_b = create_team(&client, &[second]).await;

    let body: Value = client
        .get(format!("{}/teams/{}", BASE_URL, team_a))
        .send()
        .await
        .expect("Failed to get team")
        .json()
        .await
        .expect("Failed to parse team");
    let member_ids: Vec<i64> = body["data"]["memberIds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(member_ids, vec![first]);
    assert_eq!(body["data"]["equipmentCount"].as_i64(), Some(0));

    let body: Value = client
        .get(format!("{}/teams/{}", BASE_URL, team_b))
        .send()
        .await
        .expect("Failed to get team")
        .json()
        .await
        .expect("Failed to parse team");
    let member_ids: Vec<i64> = body["data"]["memberIds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(member_ids, vec![second]);

    // Cleanup
    let _ = client
        .delete(format!("{}/teams/{}", BASE_URL, team_a))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/teams/{}", BASE_URL, team_b))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_create_request_requires_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({ "subject": "No equipment given" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
}

#[tokio::test]
#[ignore]
async fn test_request_against_unknown_equipment_is_404() {
    let client = Client::new();
    let employee_id = any_employee_id(&client).await;

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "Ghost equipment",
            "type": "corrective",
            "equipmentId": 999999,
            "requestedById": employee_id,
            "priority": "medium"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats_shape() {
    let client = Client::new();

    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    let stats = &body["data"];
    assert!(stats["totalEquipment"].is_number());
    assert!(stats["activeEquipment"].is_number());
    assert!(stats["totalRequests"].is_number());
    assert!(stats["openRequests"].is_number());
    assert!(stats["inProgressRequests"].is_number());
    assert!(stats["completedRequests"].is_number());
    assert!(stats["overdueRequests"].is_number());
    assert!(stats["totalTeams"].is_number());
    // Never NaN/undefined, even with no repaired requests
    assert!(stats["avgRepairTime"].is_number());
}
