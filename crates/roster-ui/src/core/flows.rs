//! Interaction flows: list refresh, user creation and health check.
//!
//! # Design
//! - Each flow is one linear request/response sequence with a single
//!   success/not-success branch.
//! - Flows return outcomes; callers decide what to render, so the flows stay
//!   free of DOM and store access.
//! - No retries, no de-duplication, no cancellation.

use roster_api_models::UserRecord;

use crate::core::backend::{BackendError, RosterBackend};
use crate::features::health::state::HealthLine;
use crate::features::users::state::UserFormState;

/// Result of a form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The write succeeded and a follow-up list read was issued.
    Accepted {
        /// Result of the follow-up list read.
        users: Result<Vec<UserRecord>, BackendError>,
    },
    /// The write did not succeed; nothing else happened.
    Rejected {
        /// Why the write failed.
        error: BackendError,
    },
}

/// Fetch the current user collection.
///
/// # Errors
///
/// Returns the backend error unchanged; callers leave the display as it was.
pub async fn refresh_users<B>(backend: &B) -> Result<Vec<UserRecord>, BackendError>
where
    B: RosterBackend + ?Sized,
{
    backend.list_users().await
}

/// Submit the form values as a new user.
///
/// On success `on_accepted` runs (the form reset) before the follow-up list
/// read is issued. On failure neither happens and the form keeps its values.
pub async fn submit_user<B, F>(
    backend: &B,
    form: &UserFormState,
    on_accepted: F,
) -> SubmitOutcome
where
    B: RosterBackend + ?Sized,
    F: FnOnce(),
{
    let request = form.to_new_user();
    match backend.create_user(&request).await {
        Ok(()) => {
            on_accepted();
            SubmitOutcome::Accepted {
                users: refresh_users(backend).await,
            }
        }
        Err(error) => SubmitOutcome::Rejected { error },
    }
}

/// Query the health endpoint and build the line to render.
///
/// Any decoded status document renders green, whatever the reply status.
/// Every failure cause collapses into [`HealthLine::unhealthy`].
pub async fn check_health<B>(backend: &B) -> HealthLine
where
    B: RosterBackend + ?Sized,
{
    match backend.fetch_health().await {
        Ok(health) => HealthLine::healthy(&health.status),
        Err(_) => HealthLine::unhealthy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::decode_health;
    use crate::features::health::state::HealthTone;
    use async_trait::async_trait;
    use roster_api_models::{HealthStatus, NewUser};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Call {
        List,
        Create(String),
        Reset,
        Health,
    }

    type CallLog = Rc<RefCell<Vec<Call>>>;

    struct FakeBackend {
        calls: CallLog,
        users: RefCell<Vec<UserRecord>>,
        create_error: Option<BackendError>,
        list_error: Option<BackendError>,
        health: Result<HealthStatus, BackendError>,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                calls: Rc::new(RefCell::new(Vec::new())),
                users: RefCell::new(Vec::new()),
                create_error: None,
                list_error: None,
                health: Ok(HealthStatus {
                    status: "ok".to_string(),
                }),
            }
        }

        fn with_users(self, names: &[&str]) -> Self {
            self.users.replace(
                names
                    .iter()
                    .map(|name| UserRecord {
                        id: None,
                        username: (*name).to_string(),
                        email: format!("{name}@example.com"),
                    })
                    .collect(),
            );
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl RosterBackend for FakeBackend {
        async fn list_users(&self) -> Result<Vec<UserRecord>, BackendError> {
            self.calls.borrow_mut().push(Call::List);
            match &self.list_error {
                Some(err) => Err(err.clone()),
                None => Ok(self.users.borrow().clone()),
            }
        }

        async fn create_user(&self, user: &NewUser) -> Result<(), BackendError> {
            let body = serde_json::to_string(user).map_err(|err| BackendError::Decode {
                message: err.to_string(),
            })?;
            self.calls.borrow_mut().push(Call::Create(body));
            if let Some(err) = &self.create_error {
                return Err(err.clone());
            }
            self.users.borrow_mut().push(UserRecord {
                id: None,
                username: user.username.clone(),
                email: user.email.clone(),
            });
            Ok(())
        }

        async fn fetch_health(&self) -> Result<HealthStatus, BackendError> {
            self.calls.borrow_mut().push(Call::Health);
            self.health.clone()
        }
    }

    fn alice_form() -> UserFormState {
        UserFormState {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn refresh_returns_every_record_in_backend_order() {
        let backend = FakeBackend::new().with_users(&["zed", "amy", "kim"]);
        let users = refresh_users(&backend).await.expect("list succeeds");
        let names: Vec<&str> = users.iter().map(|user| user.username.as_str()).collect();
        assert_eq!(names, vec!["zed", "amy", "kim"]);
        assert_eq!(backend.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn refresh_of_empty_collection_is_empty() {
        let backend = FakeBackend::new();
        assert_eq!(refresh_users(&backend).await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn refresh_failure_is_returned_for_the_caller_to_ignore() {
        let mut backend = FakeBackend::new().with_users(&["alice"]);
        backend.list_error = Some(BackendError::Status { status: 500 });
        assert_eq!(
            refresh_users(&backend).await,
            Err(BackendError::Status { status: 500 })
        );
    }

    #[tokio::test]
    async fn accepted_submit_posts_resets_then_refreshes() {
        let backend = FakeBackend::new();
        let mut form = alice_form();
        let calls = Rc::clone(&backend.calls);
        let outcome = submit_user(&backend, &form.clone(), || {
            calls.borrow_mut().push(Call::Reset);
            form.reset();
        })
        .await;

        assert_eq!(
            backend.calls(),
            vec![
                Call::Create(r#"{"username":"alice","email":"alice@example.com"}"#.to_string()),
                Call::Reset,
                Call::List,
            ]
        );
        assert_eq!(form, UserFormState::default());
        match outcome {
            SubmitOutcome::Accepted { users: Ok(users) } => {
                assert_eq!(users.len(), 1);
                assert_eq!(users[0].username, "alice");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejected_submit_keeps_form_and_skips_refresh() {
        let mut backend = FakeBackend::new();
        backend.create_error = Some(BackendError::Status { status: 400 });
        let mut form = alice_form();
        let outcome = submit_user(&backend, &form.clone(), || form.reset()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                error: BackendError::Status { status: 400 }
            }
        );
        assert_eq!(form, alice_form());
        assert!(!backend.calls().contains(&Call::List));
    }

    #[tokio::test]
    async fn accepted_submit_reports_failed_follow_up_read() {
        let mut backend = FakeBackend::new();
        backend.list_error = Some(BackendError::Transport {
            message: "offline".to_string(),
        });
        let outcome = submit_user(&backend, &alice_form(), || {}).await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Accepted {
                users: Err(BackendError::Transport { .. })
            }
        ));
    }

    #[tokio::test]
    async fn overlapping_submits_converge_after_a_final_refresh() {
        let backend = FakeBackend::new();
        let bob = UserFormState {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
        };
        let alice = alice_form();
        let (first, second) = tokio::join!(
            submit_user(&backend, &alice, || {}),
            submit_user(&backend, &bob, || {})
        );
        assert!(matches!(first, SubmitOutcome::Accepted { .. }));
        assert!(matches!(second, SubmitOutcome::Accepted { .. }));

        let settled = refresh_users(&backend).await.expect("list succeeds");
        let mut names: Vec<&str> = settled.iter().map(|user| user.username.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["alice", "bob"]);
        assert_eq!(settled, *backend.users.borrow());
    }

    #[tokio::test]
    async fn health_success_renders_status_in_green() {
        let backend = FakeBackend::new();
        let line = check_health(&backend).await;
        assert_eq!(line.tone, HealthTone::Healthy);
        assert!(line.text.contains("ok"));
        assert_eq!(line.style(), "color: green;");
        assert_eq!(backend.calls(), vec![Call::Health]);
    }

    #[tokio::test]
    async fn non_success_reply_with_status_body_renders_green() {
        let mut backend = FakeBackend::new();
        backend.health = decode_health(r#"{"status":"down"}"#);
        let line = check_health(&backend).await;
        assert_eq!(line.text, "Status: down");
        assert_eq!(line.tone, HealthTone::Healthy);
        assert_eq!(line.style(), "color: green;");
    }

    #[tokio::test]
    async fn every_health_failure_renders_the_same_red_line() {
        let failures = [
            BackendError::Transport {
                message: "network down".to_string(),
            },
            BackendError::Decode {
                message: "expected value at line 1".to_string(),
            },
        ];
        for failure in failures {
            let mut backend = FakeBackend::new();
            backend.health = Err(failure);
            let line = check_health(&backend).await;
            assert_eq!(line.text, "Status: Unhealthy");
            assert_eq!(line.tone, HealthTone::Unhealthy);
            assert_eq!(line.style(), "color: red;");
        }
    }

    #[tokio::test]
    async fn unparseable_health_body_renders_red() {
        let mut backend = FakeBackend::new();
        backend.health = decode_health("<html>Bad Gateway</html>");
        let line = check_health(&backend).await;
        assert_eq!(line, HealthLine::unhealthy());
    }
}
