//! Hand-written test doubles shared by the unit tests in this crate.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use nova_types::analytics::{Analytics, AnalyticsEvent};
use nova_types::chat::ChatMessage;
use nova_types::error::{CredentialError, RepositoryError};
use nova_types::llm::{CompletionRequest, CompletionResponse, LlmError};
use nova_types::task::Task;
use nova_types::user::{User, UserId};

use crate::auth::credential::{CredentialIssuer, IssuedCredential, PasswordHasher};
use crate::llm::provider::LlmProvider;
use crate::repository::analytics::AnalyticsRepository;
use crate::repository::chat::ChatRepository;
use crate::repository::task::TaskRepository;
use crate::repository::user::UserRepository;

// --- LLM providers ---

#[derive(Clone)]
pub enum MockOutcome {
    Reply(String),
    Fail,
    /// Never resolves; exercises the attempt timeout.
    Hang,
}

/// Requests a mock provider received, shared with the test after the
/// provider has been boxed.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<CompletionRequest>>>);

impl CallLog {
    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.0.lock().unwrap().last().cloned()
    }
}

pub struct MockProvider {
    name: String,
    outcome: MockOutcome,
    calls: CallLog,
}

impl MockProvider {
    pub fn new(name: &str, outcome: MockOutcome) -> Self {
        Self {
            name: name.to_string(),
            outcome,
            calls: CallLog::default(),
        }
    }

    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }
}

impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
        self.calls.0.lock().unwrap().push(request.clone());
        let outcome = self.outcome.clone();
        let model = format!("{}-model", self.name);
        async move {
            match outcome {
                MockOutcome::Reply(content) => Ok(CompletionResponse { content, model }),
                MockOutcome::Fail => Err(LlmError::Provider {
                    message: "mock outage".into(),
                }),
                MockOutcome::Hang => std::future::pending().await,
            }
        }
    }
}

// --- Credentials ---

/// Stores passwords with a visible prefix instead of hashing.
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        Ok(hash == format!("plain:{password}"))
    }
}

/// Plain hasher that counts how often it is used.
#[derive(Default)]
pub struct CountingHasher {
    hashes: AtomicUsize,
    verifications: AtomicUsize,
}

impl CountingHasher {
    pub fn hashes(&self) -> usize {
        self.hashes.load(Ordering::SeqCst)
    }

    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for CountingHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        self.hashes.fetch_add(1, Ordering::SeqCst);
        PlainHasher.hash(password)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        PlainHasher.verify(password, hash)
    }
}

pub struct StaticIssuer;

impl CredentialIssuer for StaticIssuer {
    fn issue(&self, user_id: &UserId) -> Result<IssuedCredential, CredentialError> {
        Ok(IssuedCredential {
            token: format!("token-for-{user_id}"),
            expires_at: Utc::now(),
        })
    }
}

// --- Repositories ---

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl UserRepository for InMemoryUsers {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict(user.email.clone()));
        }
        users.push(user.clone());
        Ok(user.clone())
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().iter().find(|u| &u.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_profile(&self, user: &User) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = user.clone();
        Ok(user.clone())
    }
}

#[derive(Default)]
pub struct InMemoryChat {
    turns: Mutex<Vec<ChatMessage>>,
}

impl ChatRepository for InMemoryChat {
    async fn save_message(&self, message: &ChatMessage) -> Result<ChatMessage, RepositoryError> {
        self.turns.lock().unwrap().push(message.clone());
        Ok(message.clone())
    }

    async fn recent_messages(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let turns = self.turns.lock().unwrap();
        let mine: Vec<ChatMessage> = turns.iter().filter(|m| &m.user_id == user_id).cloned().collect();
        let start = mine.len().saturating_sub(limit as usize);
        Ok(mine[start..].to_vec())
    }

    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let mut turns = self.turns.lock().unwrap();
        let before = turns.len();
        turns.retain(|m| &m.user_id != user_id);
        Ok((before - turns.len()) as u64)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryAnalytics {
    rows: Arc<Mutex<HashMap<UserId, Analytics>>>,
}

impl AnalyticsRepository for InMemoryAnalytics {
    async fn get(&self, user_id: &UserId) -> Result<Option<Analytics>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(user_id).cloned())
    }

    async fn track(
        &self,
        user_id: &UserId,
        event: Option<AnalyticsEvent>,
        at: DateTime<Utc>,
    ) -> Result<Analytics, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.entry(user_id.clone()).or_insert_with(|| Analytics {
            id: Uuid::now_v7(),
            user_id: user_id.clone(),
            total_chats: 0,
            total_tasks: 0,
            completed_tasks: 0,
            total_notes: 0,
            total_events: 0,
            last_active_at: None,
            created_at: at,
            updated_at: at,
        });
        match event {
            Some(AnalyticsEvent::Chat) => row.total_chats += 1,
            Some(AnalyticsEvent::Task) => row.total_tasks += 1,
            Some(AnalyticsEvent::TaskCompleted) => row.completed_tasks += 1,
            Some(AnalyticsEvent::Note) => row.total_notes += 1,
            Some(AnalyticsEvent::Event) => row.total_events += 1,
            None => {}
        }
        row.last_active_at = Some(at);
        row.updated_at = at;
        Ok(row.clone())
    }
}

#[derive(Default)]
pub struct InMemoryTasks {
    tasks: Mutex<Vec<Task>>,
}

impl TaskRepository for InMemoryTasks {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Task>, RepositoryError> {
        let mut mine: Vec<Task> = self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| &t.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }

    async fn get(&self, user_id: &UserId, id: &Uuid) -> Result<Option<Task>, RepositoryError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| &t.id == id && &t.user_id == user_id)
            .cloned())
    }

    async fn create(&self, item: &Task) -> Result<Task, RepositoryError> {
        self.tasks.lock().unwrap().push(item.clone());
        Ok(item.clone())
    }

    async fn update(&self, item: &Task) -> Result<Task, RepositoryError> {
        let mut tasks = self.tasks.lock().unwrap();
        let slot = tasks
            .iter_mut()
            .find(|t| t.id == item.id && t.user_id == item.user_id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = item.clone();
        Ok(item.clone())
    }

    async fn delete(&self, user_id: &UserId, id: &Uuid) -> Result<(), RepositoryError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| !(&t.id == id && &t.user_id == user_id));
        if tasks.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
