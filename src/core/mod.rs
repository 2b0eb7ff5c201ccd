mod config;
pub use self::config::{Config, UserEntry};

mod principal;
pub use self::principal::{Principal, User, UserId};

pub mod session;
pub use self::session::Session;

mod context;
pub use self::context::RequestContext;

mod store;
pub use self::store::{MemoryStore, UserStore};

mod resolver;
pub use self::resolver::{IdentityResolver, LookupFailure};
