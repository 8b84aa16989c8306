use std::{cell::RefCell, fmt::Debug, rc::Rc};

/// A source of the bearer token used to authenticate requests.
///
/// The token is read on every request, so changes made by the owner of the
/// token are seen by the next call.
pub trait TokenSource {
    /// Returns the current token, or `None` if there is no authenticated user.
    fn token(&self) -> Option<String>;
}

impl<F> TokenSource for F
where
    F: Fn() -> Option<String>,
{
    fn token(&self) -> Option<String> {
        (self)()
    }
}

/// A shared handle to the authentication token.
///
/// Clones share the same token; the authentication code keeps one clone to
/// update it while the client reads from another.
#[derive(Default, Clone)]
pub struct Session {
    token: Rc<RefCell<Option<String>>>,
}

impl Session {
    /// Constructs a session without a token.
    pub fn new() -> Self {
        Default::default()
    }

    /// Constructs a session with the given token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Session::new();
        session.set_token(token);
        session
    }

    /// Replaces the current token.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.borrow_mut() = Some(token.into());
    }

    /// Removes the current token.
    pub fn clear(&self) {
        self.token.borrow_mut().take();
    }

    /// Returns `true` if there is a non-empty token.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl TokenSource for Session {
    fn token(&self) -> Option<String> {
        self.token
            .borrow()
            .as_ref()
            .filter(|token| !token.is_empty())
            .cloned()
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = if self.is_authenticated() {
            "Some(<redacted>)"
        } else {
            "None"
        };

        f.debug_struct("Session").field("token", &token).finish()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.token, &other.token)
    }
}
