//! # Test Doubles
//!
//! In-memory implementations of [`PersonLookup`] and [`FoodStore`] driven by an
//! expectation queue. They let tests exercise [`FoodService`](crate::food_service::FoodService)
//! without spawning any record stores.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | Mock | Real store |
//! |---------|------|------------|
//! | **Speed** | Instant | Fast (but involves tokio spawn) |
//! | **Call tracking** | Every call and argument recorded | None |
//! | **Error Injection** | Easy (`return_err`) | Only capacity rejection |
//! | **Use Case** | Orchestration logic | Full system behaviour |
//!
//! ## Usage
//!
//! Each `expect_*` call queues one answer. A call that arrives with no queued answer,
//! or with the wrong kind of answer queued, panics. [`MockPersonLookup::verify`] and
//! [`MockFoodStore::verify`] panic if queued answers were never consumed.
//!
//! Mocks are cheap to clone and clones share state, so hand one clone to the service
//! and keep another to inspect afterwards.
//!
//! ```rust
//! use food_diary::clients::FoodStore;
//! use food_diary::mock::MockFoodStore;
//! use food_diary::model::{FoodEntry, FoodId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockFoodStore::new();
//!     mock.expect_store().return_ok(FoodId(3));
//!
//!     let entry = FoodEntry { name: Some("apple".into()), ..FoodEntry::default() };
//!     assert_eq!(mock.store_food(entry.clone()).await, Ok(FoodId(3)));
//!     assert_eq!(mock.stored_entries(), vec![entry]);
//!     mock.verify();
//! }
//! ```

use crate::clients::{FoodStore, PersonLookup, StoreError};
use crate::model::{FoodEntry, FoodId, Person, PersonId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// =============================================================================
// PERSON LOOKUP
// =============================================================================

#[derive(Default)]
struct LookupState {
    expectations: VecDeque<(PersonId, Result<Option<Person>, StoreError>)>,
    calls: Vec<PersonId>,
}

/// A [`PersonLookup`] that answers from queued expectations.
#[derive(Clone, Default)]
pub struct MockPersonLookup {
    state: Arc<Mutex<LookupState>>,
}

impl MockPersonLookup {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a lookup of `id`.
    pub fn expect_lookup(&self, id: PersonId) -> LookupExpectationBuilder {
        LookupExpectationBuilder {
            id,
            state: self.state.clone(),
        }
    }

    /// IDs passed to `lookup_person`, in call order.
    pub fn lookups(&self) -> Vec<PersonId> {
        lock(&self.state).calls.clone()
    }

    /// Number of `lookup_person` calls received.
    pub fn lookup_calls(&self) -> usize {
        lock(&self.state).calls.len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.state).expectations.len();
        if remaining != 0 {
            panic!("Not all lookup expectations were met. {remaining} remaining");
        }
    }
}

#[async_trait]
impl PersonLookup for MockPersonLookup {
    async fn lookup_person(&self, id: PersonId) -> Result<Option<Person>, StoreError> {
        let mut state = lock(&self.state);
        state.calls.push(id);
        match state.expectations.pop_front() {
            Some((expected, response)) if expected == id => response,
            Some((expected, _)) => {
                panic!("Unexpected lookup of {id}, expected lookup of {expected}")
            }
            None => panic!("Unexpected lookup of {id}, no expectation set"),
        }
    }
}

/// Builder for `lookup_person` expectations.
pub struct LookupExpectationBuilder {
    id: PersonId,
    state: Arc<Mutex<LookupState>>,
}

impl LookupExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, person: Option<Person>) {
        lock(&self.state)
            .expectations
            .push_back((self.id, Ok(person)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        lock(&self.state)
            .expectations
            .push_back((self.id, Err(error)));
    }
}

// =============================================================================
// FOOD STORE
// =============================================================================

enum StoreExpectation {
    Store(Result<FoodId, StoreError>),
    List(Result<Vec<FoodEntry>, StoreError>),
}

#[derive(Default)]
struct StoreState {
    expectations: VecDeque<StoreExpectation>,
    stored: Vec<FoodEntry>,
    list_calls: usize,
}

/// A [`FoodStore`] that answers from queued expectations and captures stored entries.
#[derive(Clone, Default)]
pub struct MockFoodStore {
    state: Arc<Mutex<StoreState>>,
}

impl MockFoodStore {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `store_food` call.
    pub fn expect_store(&self) -> StoreExpectationBuilder {
        StoreExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Expects a `list_all_food` call.
    pub fn expect_list(&self) -> ListExpectationBuilder {
        ListExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Every entry passed to `store_food`, in call order.
    pub fn stored_entries(&self) -> Vec<FoodEntry> {
        lock(&self.state).stored.clone()
    }

    /// Number of `store_food` calls received.
    pub fn store_calls(&self) -> usize {
        lock(&self.state).stored.len()
    }

    /// Number of `list_all_food` calls received.
    pub fn list_calls(&self) -> usize {
        lock(&self.state).list_calls
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.state).expectations.len();
        if remaining != 0 {
            panic!("Not all store expectations were met. {remaining} remaining");
        }
    }
}

#[async_trait]
impl FoodStore for MockFoodStore {
    async fn store_food(&self, entry: FoodEntry) -> Result<FoodId, StoreError> {
        let mut state = lock(&self.state);
        state.stored.push(entry);
        match state.expectations.pop_front() {
            Some(StoreExpectation::Store(response)) => response,
            Some(StoreExpectation::List(_)) => {
                panic!("Unexpected store_food call, expected list_all_food")
            }
            None => panic!("Unexpected store_food call, no expectation set"),
        }
    }

    async fn list_all_food(&self) -> Result<Vec<FoodEntry>, StoreError> {
        let mut state = lock(&self.state);
        state.list_calls += 1;
        match state.expectations.pop_front() {
            Some(StoreExpectation::List(response)) => response,
            Some(StoreExpectation::Store(_)) => {
                panic!("Unexpected list_all_food call, expected store_food")
            }
            None => panic!("Unexpected list_all_food call, no expectation set"),
        }
    }
}

/// Builder for `store_food` expectations.
pub struct StoreExpectationBuilder {
    state: Arc<Mutex<StoreState>>,
}

impl StoreExpectationBuilder {
    /// Sets the expectation to return the assigned ID.
    pub fn return_ok(self, id: FoodId) {
        lock(&self.state)
            .expectations
            .push_back(StoreExpectation::Store(Ok(id)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        lock(&self.state)
            .expectations
            .push_back(StoreExpectation::Store(Err(error)));
    }
}

/// Builder for `list_all_food` expectations.
pub struct ListExpectationBuilder {
    state: Arc<Mutex<StoreState>>,
}

impl ListExpectationBuilder {
    /// Sets the expectation to return these entries.
    pub fn return_ok(self, entries: Vec<FoodEntry>) {
        lock(&self.state)
            .expectations
            .push_back(StoreExpectation::List(Ok(entries)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        lock(&self.state)
            .expectations
            .push_back(StoreExpectation::List(Err(error)));
    }
}
