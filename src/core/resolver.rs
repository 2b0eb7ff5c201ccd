use serde::Deserialize;
use tracing_futures::Instrument;

use crate::common::{debug, info_span, warn};
use crate::core::{Principal, RequestContext, User, UserStore};

/// What to do when the user store fails to answer a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupFailure {
    /// Return the error and leave the request unresolved.
    #[default]
    Propagate,
    /// Resolve the request as anonymous.
    Anonymous,
}

/// Resolves the user a request acts as and memoizes it on the request.
#[derive(Debug)]
pub struct IdentityResolver<S> {
    store: S,
    on_lookup_error: LookupFailure,
}

impl<S> IdentityResolver<S>
where
    S: UserStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            on_lookup_error: LookupFailure::default(),
        }
    }

    pub fn with_lookup_failure(mut self, policy: LookupFailure) -> Self {
        self.on_lookup_error = policy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// User the request acts as.
    ///
    /// The store is consulted only on the first call for a given context.
    /// Later calls, including ones after the user was not found, return
    /// the cached result.
    pub async fn current_user<'a>(
        &self,
        ctx: &'a mut RequestContext,
    ) -> crate::Result<Option<&'a User>> {
        Ok(self.principal(ctx).await?.user())
    }

    pub async fn is_logged_in(&self, ctx: &mut RequestContext) -> crate::Result<bool> {
        Ok(self.principal(ctx).await?.is_authenticated())
    }

    pub async fn is_admin(&self, ctx: &mut RequestContext) -> crate::Result<bool> {
        Ok(self.principal(ctx).await?.is_admin())
    }

    async fn principal<'a>(&self, ctx: &'a mut RequestContext) -> crate::Result<&'a Principal> {
        // On lookup error the context stays unresolved.
        let principal = match ctx.take_principal() {
            Some(principal) => principal,
            None => self.lookup(ctx).await?,
        };

        Ok(ctx.resolve(principal))
    }

    async fn lookup(&self, ctx: &RequestContext) -> crate::Result<Principal> {
        let id = match ctx.session().user_id() {
            Some(id) => id,
            None => {
                debug!("No user id in session");
                return Ok(Principal::Anonymous);
            }
        };

        let span = info_span!("find_user_by_id", user_id=%id);
        match self.store.find_user_by_id(&id).instrument(span).await {
            Ok(Some(user)) => {
                debug!(user=%user, admin=user.is_admin(), "Resolved session user");
                Ok(Principal::User(user))
            }
            Ok(None) => {
                debug!(user_id=%id, "Session user not found");
                Ok(Principal::Anonymous)
            }
            Err(err) => match self.on_lookup_error {
                LookupFailure::Propagate => Err(err),
                LookupFailure::Anonymous => {
                    warn!(user_id=%id, error=%err, "User lookup failed, resolve as anonymous");
                    Ok(Principal::Anonymous)
                }
            },
        }
    }
}
