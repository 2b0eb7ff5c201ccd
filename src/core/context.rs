use crate::core::{Principal, Session};

/// State scoped to the handling of a single request.
///
/// The session is fixed at construction, so the identity cached on the
/// context always corresponds to it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    session: Session,
    // None until resolved. A resolved absent user is Principal::Anonymous.
    principal: Option<Principal>,
}

impl RequestContext {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            principal: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_resolved(&self) -> bool {
        self.principal.is_some()
    }

    /// Resolved principal, `None` while unresolved.
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub(crate) fn take_principal(&mut self) -> Option<Principal> {
        self.principal.take()
    }

    pub(crate) fn resolve(&mut self, principal: Principal) -> &Principal {
        self.principal.insert(principal)
    }
}

impl From<Session> for RequestContext {
    fn from(session: Session) -> Self {
        RequestContext::new(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::User;

    #[test]
    fn starts_unresolved() {
        let ctx = RequestContext::from(Session::new());
        assert!(!ctx.is_resolved());
        assert!(ctx.principal().is_none());
    }

    #[test]
    fn resolved_to_anonymous_differs_from_unresolved() {
        let mut ctx = RequestContext::new(Session::new());
        ctx.resolve(Principal::Anonymous);

        assert!(ctx.is_resolved());
        assert_eq!(ctx.principal(), Some(&Principal::Anonymous));
    }

    #[test]
    fn take_leaves_context_unresolved() {
        let mut ctx = RequestContext::new(Session::new());
        assert!(ctx.take_principal().is_none());

        ctx.resolve(Principal::User(User::new("u1")));
        assert_eq!(ctx.take_principal(), Some(Principal::User(User::new("u1"))));
        assert!(!ctx.is_resolved());
    }

    #[test]
    fn resolved_user() {
        let mut ctx = RequestContext::new(Session::new());
        ctx.resolve(Principal::User(User::new("u1")));

        let user = ctx.principal().and_then(Principal::user);
        assert_eq!(user, Some(&User::new("u1")));
    }
}
