#![allow(clippy::module_inception)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use crate::error::SessidError;
pub type Result<T, E = crate::error::SessidError> = std::result::Result<T, E>;

pub use crate::core::{
    IdentityResolver, LookupFailure, MemoryStore, Principal, RequestContext, Session, User,
    UserId, UserStore,
};

pub(crate) mod common {
    pub(crate) type Result<T, E = crate::error::internal::Error> = std::result::Result<T, E>;

    pub(crate) type ErrorKind = crate::error::internal::ErrorKind;

    pub use tracing::{debug, info_span, trace, warn};
}
