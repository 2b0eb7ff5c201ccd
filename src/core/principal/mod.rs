mod user;
pub use user::{User, UserId};

/// Identity a request acts as once it has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    User(User),
}

impl Principal {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::User(_))
    }

    pub fn is_admin(&self) -> bool {
        self.user().map(User::is_admin).unwrap_or(false)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Principal::User(user) => Some(user),
            Principal::Anonymous => None,
        }
    }
}

impl From<Option<User>> for Principal {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => Principal::User(user),
            None => Principal::Anonymous,
        }
    }
}
