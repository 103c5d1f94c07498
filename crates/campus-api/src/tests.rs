//! Router-level tests against a seeded `MemoryStore`.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use campus_core::{
  Result,
  directory::{Enrollment, FacultyOrganizer, Institution},
  event::{EventDraft, EventId, EventProposal, EventStatus, Registration},
  login::lookup,
  store::{CampusStore, StoreChange},
  user::{User, UserId},
};
use campus_store_memory::MemoryStore;
use serde_json::{Value, json};
use tokio::sync::broadcast;
use tower::ServiceExt;

use crate::api_router;

fn app() -> (Arc<MemoryStore>, Router) {
  let store = Arc::new(MemoryStore::seeded());
  let router = api_router(Arc::clone(&store));
  (store, router)
}

async fn send(
  router: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(json) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(json.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };

  let res = router.clone().oneshot(req).await.unwrap();
  let status = res.status();
  let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
    .await
    .unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

async fn login_as(router: &Router, email: &str) {
  let (status, _) = send(
    router,
    "POST",
    "/session/login",
    Some(json!({ "email": email, "password": "whatever" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
}

// ─── Session ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn anonymous_session_has_no_navigation() {
  let (_, router) = app();
  let (status, body) = send(&router, "GET", "/session", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["user"], Value::Null);
  assert_eq!(body["navigation"], json!([]));
}

#[tokio::test]
async fn login_returns_user_and_landing_view() {
  let (_, router) = app();
  let (status, body) = send(
    &router,
    "POST",
    "/session/login",
    Some(json!({ "email": "student@college.edu", "password": "" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["user"]["id"], "s1");
  assert_eq!(body["user"]["role"], "participant");
  assert_eq!(body["landing"], "explore");

  let (_, session) = send(&router, "GET", "/session", None).await;
  assert_eq!(session["navigation"][0]["view"], "explore");
}

#[tokio::test]
async fn unknown_email_is_unauthorized() {
  let (store, router) = app();
  let (status, body) = send(
    &router,
    "POST",
    "/session/login",
    Some(json!({ "email": "intruder@example.com", "password": "x" })),
  )
  .await;
  assert_eq!(status, StatusCode::UNAUTHORIZED);
  assert_eq!(body["error"], "Invalid email or password");
  assert!(store.current_user().is_none());
}

#[tokio::test]
async fn logout_clears_session() {
  let (store, router) = app();
  login_as(&router, "admin@college.edu").await;
  let (status, _) = send(&router, "POST", "/session/logout", None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);
  assert!(store.current_user().is_none());
}

#[tokio::test]
async fn participant_completes_profile() {
  let (store, router) = app();
  login_as(&router, "student@college.edu").await;
  let (status, body) = send(
    &router,
    "POST",
    "/session/profile",
    Some(json!({
      "institution": "PSG College of Technology",
      "district": "Coimbatore",
      "department": "Mechanical",
      "year": "2",
      "roll_number": "21ME042"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["profile_completed"], true);
  assert_eq!(body["academic"]["roll_number"], "21ME042");
  assert_eq!(
    store.current_user().unwrap().profile.district(),
    Some("Coimbatore")
  );
}

/// A store where the admin signs in just before every session rewrite.
struct AdminSignsInFirst(MemoryStore);

impl CampusStore for AdminSignsInFirst {
  fn current_user(&self) -> Option<User> { self.0.current_user() }

  fn set_current_user(&self, user: Option<User>) -> Option<User> {
    self.0.set_current_user(user)
  }

  fn update_current_user<F>(&self, update: F) -> Option<User>
  where
    F: FnOnce(&User) -> Option<User>,
  {
    self.0.set_current_user(lookup("admin@college.edu"));
    self.0.update_current_user(update)
  }

  fn events(&self) -> Vec<Arc<EventProposal>> { self.0.events() }

  fn event(&self, id: &EventId) -> Option<Arc<EventProposal>> {
    self.0.event(id)
  }

  fn update_event_status(
    &self,
    id: &EventId,
    status: EventStatus,
    reason: Option<String>,
  ) -> Option<Arc<EventProposal>> {
    self.0.update_event_status(id, status, reason)
  }

  fn add_event(&self, draft: EventDraft) -> Arc<EventProposal> {
    self.0.add_event(draft)
  }

  fn register(
    &self,
    event_id: &EventId,
    user_id: &UserId,
  ) -> Result<Registration> {
    self.0.register(event_id, user_id)
  }

  fn registrations_for(&self, user_id: &UserId) -> Vec<EventId> {
    self.0.registrations_for(user_id)
  }

  fn institutions(&self) -> Vec<Arc<Institution>> { self.0.institutions() }

  fn enroll_institution(
    &self,
    enrollment: Enrollment,
  ) -> Result<Arc<Institution>> {
    self.0.enroll_institution(enrollment)
  }

  fn organizers(&self) -> Vec<FacultyOrganizer> { self.0.organizers() }

  fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
    self.0.subscribe()
  }
}

#[tokio::test]
async fn profile_update_never_overwrites_a_newer_login() {
  let store = Arc::new(AdminSignsInFirst(MemoryStore::seeded()));
  let router = api_router(Arc::clone(&store));
  login_as(&router, "student@college.edu").await;

  let (status, _) = send(
    &router,
    "POST",
    "/session/profile",
    Some(json!({
      "institution": "PSG College of Technology",
      "district": "Coimbatore",
      "department": "Mechanical",
      "year": "2",
      "roll_number": "21ME042"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::FORBIDDEN);
  assert_eq!(store.current_user().unwrap().id.0, "a1");
}

#[tokio::test]
async fn profile_needs_a_participant_session() {
  let (_, router) = app();
  let body = json!({
    "institution": "x",
    "district": "x",
    "department": "x",
    "year": "1",
    "roll_number": "1"
  });
  let (status, _) =
    send(&router, "POST", "/session/profile", Some(body.clone())).await;
  assert_eq!(status, StatusCode::UNAUTHORIZED);

  login_as(&router, "organizer@college.edu").await;
  let (status, _) =
    send(&router, "POST", "/session/profile", Some(body)).await;
  assert_eq!(status, StatusCode::FORBIDDEN);
}

// ─── Events ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_filters_by_view() {
  let (_, router) = app();
  let (status, body) = send(&router, "GET", "/events?view=pending", None).await;
  assert_eq!(status, StatusCode::OK);
  let ids: Vec<_> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["id"].as_str().unwrap().to_string())
    .collect();
  assert_eq!(ids, ["2", "5", "7"]);

  let (_, all) = send(&router, "GET", "/events", None).await;
  assert_eq!(all.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn get_missing_event_is_404() {
  let (_, router) = app();
  let (status, _) = send(&router, "GET", "/events/999", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_approves_event_two() {
  let (store, router) = app();
  login_as(&router, "admin@college.edu").await;

  let (status, body) =
    send(&router, "POST", "/events/2/approve", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "approved");

  let events = store.events();
  assert_eq!(events[1].status, EventStatus::Approved);
  assert_eq!(events[0].status, EventStatus::Approved);
  assert_eq!(events[2].status, EventStatus::Completed);
}

#[tokio::test]
async fn approving_unknown_event_is_404() {
  let (store, router) = app();
  login_as(&router, "admin@college.edu").await;
  let before = store.events();
  let (status, _) = send(&router, "POST", "/events/42/approve", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(store.events(), before);
}

#[tokio::test]
async fn organizer_cannot_approve() {
  let (_, router) = app();
  let (status, _) = send(&router, "POST", "/events/2/approve", None).await;
  assert_eq!(status, StatusCode::UNAUTHORIZED);

  login_as(&router, "organizer@college.edu").await;
  let (status, _) = send(&router, "POST", "/events/2/approve", None).await;
  assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn rejection_needs_a_reason() {
  let (_, router) = app();
  login_as(&router, "admin@college.edu").await;

  let (status, _) = send(
    &router,
    "POST",
    "/events/5/reject",
    Some(json!({ "reason": "  " })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, body) = send(
    &router,
    "POST",
    "/events/5/reject",
    Some(json!({ "reason": "Budget exceeds departmental allowance." })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "rejected");
  assert_eq!(
    body["rejection_reason"],
    "Budget exceeds departmental allowance."
  );
}

#[tokio::test]
async fn management_can_complete_an_event() {
  let (_, router) = app();
  login_as(&router, "management@college.edu").await;
  let (status, body) = send(
    &router,
    "POST",
    "/events/1/status",
    Some(json!({ "status": "completed" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "completed");
}

#[tokio::test]
async fn organizer_submits_robotics_expo() {
  let (store, router) = app();
  login_as(&router, "organizer@college.edu").await;

  let (status, body) = send(
    &router,
    "POST",
    "/events",
    Some(json!({
      "title": "Robotics Expo",
      "description": "Student-built robots.",
      "category": "Technical",
      "date": "2024-08-02",
      "time": "10:00",
      "venue": "Main Auditorium",
      "budget": "not a number",
      "expected_participants": "120",
      "objectives": "Hands-on demos\nIndustry judging"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["status"], "pending");
  assert_eq!(body["current_registrations"], 0);
  assert_eq!(body["budget"], 0);
  assert_eq!(body["capacity"], 120);
  assert_eq!(body["organizer"]["id"], "o1");

  let events = store.events();
  assert_eq!(events.len(), 9);
  assert_eq!(events[8].title, "Robotics Expo");
}

#[tokio::test]
async fn create_with_bad_date_is_400() {
  let (_, router) = app();
  login_as(&router, "organizer@college.edu").await;
  let (status, body) = send(
    &router,
    "POST",
    "/events",
    Some(json!({ "title": "Quiz", "date": "soon", "time": "10:00" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("date"));
}

#[tokio::test]
async fn participant_registers_once() {
  let (store, router) = app();
  login_as(&router, "student@college.edu").await;

  let (status, _) = send(&router, "POST", "/events/6/register", None).await;
  assert_eq!(status, StatusCode::CREATED);
  let (status, _) = send(&router, "POST", "/events/6/register", None).await;
  assert_eq!(status, StatusCode::CONFLICT);
  let (status, _) = send(&router, "POST", "/events/2/register", None).await;
  assert_eq!(status, StatusCode::CONFLICT);

  let (_, mine) = send(&router, "GET", "/registrations", None).await;
  assert_eq!(mine, json!(["6"]));
  assert_eq!(store.event(&"6".into()).unwrap().current_registrations, 46);
}

#[tokio::test]
async fn stats_reflect_changes() {
  let (_, router) = app();
  let (_, before) = send(&router, "GET", "/stats", None).await;
  assert_eq!(before["pending"], 3);

  login_as(&router, "admin@college.edu").await;
  send(&router, "POST", "/events/7/approve", None).await;

  let (_, after) = send(&router, "GET", "/stats", None).await;
  assert_eq!(after["pending"], 2);
  assert_eq!(after["approved"], 4);
}

#[tokio::test]
async fn activity_lists_newest_first() {
  let (_, router) = app();
  login_as(&router, "organizer@college.edu").await;
  send(
    &router,
    "POST",
    "/events",
    Some(json!({
      "title": "Robotics Expo",
      "date": "2024-08-02",
      "time": "10:00"
    })),
  )
  .await;

  let (status, body) = send(&router, "GET", "/activity?limit=2", None).await;
  assert_eq!(status, StatusCode::OK);
  let titles: Vec<_> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["title"].as_str().unwrap().to_string())
    .collect();
  assert_eq!(titles, ["Robotics Expo", "Sustainable Living Exhibition"]);
}

#[tokio::test]
async fn organizer_filter_on_listing() {
  let (_, router) = app();
  let uri = "/events?organizer=org1&view=upcoming";
  let (_, body) = send(&router, "GET", uri, None).await;
  let ids: Vec<_> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["id"].as_str().unwrap().to_string())
    .collect();
  assert_eq!(ids, ["1", "6"]);
}

// ─── Directories ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn management_searches_institutions() {
  let (_, router) = app();
  let (status, _) = send(&router, "GET", "/institutions", None).await;
  assert_eq!(status, StatusCode::UNAUTHORIZED);

  login_as(&router, "management@college.edu").await;
  let (status, body) =
    send(&router, "GET", "/institutions?search=trichy", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!([{
    "id": "TN-1004",
    "name": "NIT Trichy",
    "admin": "director@nitt.edu",
    "district": "Trichy",
    "type": "engineering",
    "status": "active",
    "students": 7800,
    "autonomous": false,
    "nba_accredited": false
  }]));
}

#[tokio::test]
async fn management_enrolls_an_institution() {
  let (store, router) = app();
  login_as(&router, "management@college.edu").await;

  let (status, body) = send(
    &router,
    "POST",
    "/institutions",
    Some(json!({
      "college_name": "Kongu Engineering College",
      "district": "Erode",
      "type": "engineering",
      "autonomous": true,
      "naac_grade": "A+",
      "nba_accredited": true,
      "contact_email": "principal@kongu.edu",
      "website": "https://kongu.edu"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["id"], "TN-1006");
  assert_eq!(body["status"], "pending");
  assert_eq!(body["naac_grade"], "A+");
  assert_eq!(store.institutions().len(), 6);

  let (_, overview) =
    send(&router, "GET", "/institutions/overview", None).await;
  assert_eq!(overview, json!({
    "total_institutions": 6,
    "active": 4,
    "pending": 2,
    "total_students": 40400
  }));
}

#[tokio::test]
async fn incomplete_enrollment_is_400() {
  let (store, router) = app();
  login_as(&router, "management@college.edu").await;
  let (status, body) = send(
    &router,
    "POST",
    "/institutions",
    Some(json!({ "college_name": "  ", "contact_email": "a@b.edu" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("college_name"));
  assert_eq!(store.institutions().len(), 5);
}

#[tokio::test]
async fn only_management_enrolls() {
  let (_, router) = app();
  login_as(&router, "admin@college.edu").await;
  let (status, _) = send(
    &router,
    "POST",
    "/institutions",
    Some(json!({
      "college_name": "Kongu Engineering College",
      "contact_email": "principal@kongu.edu"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn administrator_searches_organizers() {
  let (_, router) = app();
  login_as(&router, "management@college.edu").await;
  let (status, _) = send(&router, "GET", "/organizers", None).await;
  assert_eq!(status, StatusCode::FORBIDDEN);

  login_as(&router, "admin@college.edu").await;
  let (_, all) = send(&router, "GET", "/organizers", None).await;
  assert_eq!(all.as_array().unwrap().len(), 6);

  let (status, body) =
    send(&router, "GET", "/organizers?search=physical", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body[0]["name"], "Coach Mike Tyson");
  assert_eq!(body[0]["events_hosted"], 15);
  assert_eq!(body.as_array().unwrap().len(), 1);
}
