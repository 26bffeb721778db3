//! In-memory stand-ins for the browser cookie store and the relay.

use std::cell::{Cell, RefCell};

use crate::api::{
    ApiError, Application, CreateApplicationRequest, DeleteApplicationRequest, RelayApi, User,
};
use crate::state::session::SessionStore;

pub struct FakeSession {
    present: Cell<bool>,
}

impl FakeSession {
    pub fn signed_in() -> Self {
        Self { present: Cell::new(true) }
    }

    pub fn signed_out() -> Self {
        Self { present: Cell::new(false) }
    }
}

impl SessionStore for FakeSession {
    fn has_session(&self) -> bool {
        self.present.get()
    }

    fn clear_session(&self) {
        self.present.set(false);
    }
}

fn unconfigured<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("unconfigured".to_string()))
}

pub struct FakeRelay {
    me: RefCell<Result<Option<User>, ApiError>>,
    token: RefCell<Result<Option<User>, ApiError>>,
    create: RefCell<Result<User, ApiError>>,
    delete: RefCell<Result<(), ApiError>>,
    status: RefCell<Result<bool, ApiError>>,
    calls: RefCell<Vec<&'static str>>,
    pub created: RefCell<Vec<CreateApplicationRequest>>,
    pub deleted: RefCell<Vec<DeleteApplicationRequest>>,
}

impl FakeRelay {
    pub fn new() -> Self {
        Self {
            me: RefCell::new(unconfigured()),
            token: RefCell::new(unconfigured()),
            create: RefCell::new(unconfigured()),
            delete: RefCell::new(unconfigured()),
            status: RefCell::new(unconfigured()),
            calls: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
            deleted: RefCell::new(Vec::new()),
        }
    }

    pub fn with_me(me: Result<Option<User>, ApiError>) -> Self {
        let relay = Self::new();
        *relay.me.borrow_mut() = me;
        relay
    }

    pub fn on_token(self, token: Result<Option<User>, ApiError>) -> Self {
        *self.token.borrow_mut() = token;
        self
    }

    pub fn on_create(self, create: Result<User, ApiError>) -> Self {
        *self.create.borrow_mut() = create;
        self
    }

    pub fn on_delete(self, delete: Result<(), ApiError>) -> Self {
        *self.delete.borrow_mut() = delete;
        self
    }

    pub fn on_status(self, status: Result<bool, ApiError>) -> Self {
        *self.status.borrow_mut() = status;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl RelayApi for FakeRelay {
    async fn fetch_me(&self) -> Result<Option<User>, ApiError> {
        self.calls.borrow_mut().push("fetch_me");
        self.me.borrow().clone()
    }

    async fn fetch_token(&self) -> Result<Option<User>, ApiError> {
        self.calls.borrow_mut().push("fetch_token");
        self.token.borrow().clone()
    }

    async fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> Result<User, ApiError> {
        self.calls.borrow_mut().push("create_application");
        self.created.borrow_mut().push(request.clone());
        self.create.borrow().clone()
    }

    async fn delete_application(&self, request: &DeleteApplicationRequest) -> Result<(), ApiError> {
        self.calls.borrow_mut().push("delete_application");
        self.deleted.borrow_mut().push(request.clone());
        self.delete.borrow().clone()
    }

    async fn fetch_status(&self) -> Result<bool, ApiError> {
        self.calls.borrow_mut().push("fetch_status");
        self.status.borrow().clone()
    }
}

/// `{id: 1, twitch_id: 55, name: "bob", applications: []}`
pub fn bob() -> User {
    User {
        id: 1,
        twitch_id: 55,
        name: "bob".to_string(),
        ..Default::default()
    }
}

pub fn bob_with_app() -> User {
    User {
        applications: vec![Application {
            application_id: "app-1".to_string(),
            client_id: "client-xyz".to_string(),
            application_name: "Bob's Bot".to_string(),
            ..Default::default()
        }],
        ..bob()
    }
}
