use std::fmt;
use std::path::PathBuf;

use clap::Args;

use crate::common::debug;
use crate::config::Initializer;
use crate::core::{IdentityResolver, RequestContext, Session, User, UserStore};
use crate::Result;

/// Resolve the user of a session against the configured users
#[derive(Args, Debug)]
pub struct WhoamiCommand {
    /// Configuration file path
    #[arg(
        long,
        short = 'C',
        default_value = "./files/config.yaml",
        env = "SESSID_CONFIG_PATH"
    )]
    config: PathBuf,
    /// Session as a json object(e.g. {"user_id":"u1"})
    #[arg(long, default_value = "{}", env = "SESSID_SESSION")]
    session: String,
}

impl WhoamiCommand {
    pub async fn run(self) -> Result<()> {
        let WhoamiCommand { config, session } = self;

        let initializer = Initializer::load_config_file(config).await?;
        debug!("{:?}", initializer);

        let resolver = initializer.build_resolver();
        let session = Session::from_json(&session)?;

        println!("{}", Whoami::resolve(&resolver, session).await?);

        Ok(())
    }
}

/// Identity of a session as reported by `whoami`.
#[derive(Debug, PartialEq)]
pub struct Whoami {
    pub user: Option<User>,
    pub logged_in: bool,
    pub admin: bool,
}

impl Whoami {
    pub async fn resolve<S: UserStore>(
        resolver: &IdentityResolver<S>,
        session: Session,
    ) -> Result<Self> {
        let mut ctx = RequestContext::new(session);

        let user = resolver.current_user(&mut ctx).await?.cloned();
        let logged_in = resolver.is_logged_in(&mut ctx).await?;
        let admin = resolver.is_admin(&mut ctx).await?;

        Ok(Self {
            user,
            logged_in,
            admin,
        })
    }
}

impl fmt::Display for Whoami {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.user {
            Some(user) => writeln!(f, "user: {}", user)?,
            None => writeln!(f, "user: none")?,
        }
        writeln!(f, "logged_in: {}", self.logged_in)?;
        write!(f, "admin: {}", self.admin)
    }
}
