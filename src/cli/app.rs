use crate::actions::Actions;
use crate::api::{ComponentSource, VersionSource};
use crate::cli::{help, Cli, Commands};
use crate::error::Result;
use crate::session::Session;
use tracing::{debug, info};

/// CLI application: runs the pre-action hook and dispatches to the bound action.
pub struct App<R, V, A> {
    registry: R,
    versions: V,
    actions: A,
    session: Session,
}

impl<R, V, A> App<R, V, A>
where
    R: ComponentSource,
    V: VersionSource,
    A: Actions,
{
    pub fn new(registry: R, versions: V, actions: A) -> Self {
        Self {
            registry,
            versions,
            actions,
            session: Session::new(),
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the CLI application
    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        self.pre_action(cli.command.as_ref()).await?;

        match cli.command {
            None => {
                help::print_overview();
                Ok(())
            },
            Some(command) => self.dispatch(command).await,
        }
    }

    /// Seeds the session before any action runs.
    async fn pre_action(&mut self, command: Option<&Commands>) -> Result<()> {
        if let Some(command) = command.filter(|c| c.needs_registry()) {
            info!("Loading component registry for `{}`", command.name());
            let components = self.registry.fetch_components().await?;
            self.session.init_components(components);
        }

        self.session.refresh_versions(&self.versions).await;
        Ok(())
    }

    async fn dispatch(&self, command: Commands) -> Result<()> {
        debug!(
            "Dispatching `{}` to the {} action",
            command.name(),
            command.action_id()
        );

        let session = &self.session;
        match command {
            Commands::Suggest(args)
            | Commands::Explain(args)
            | Commands::Create(args)
            | Commands::Add(args) => self.actions.add(session, &args).await,
            Commands::Init(args) => self.actions.init(session, &args).await,
            Commands::Remove(args) => self.actions.remove(session, &args).await,
            Commands::Upgrade(args) => self.actions.upgrade(session, &args).await,
            Commands::List(args) => self.actions.list(session, &args).await,
            Commands::Env(args) => self.actions.env(session, &args).await,
            Commands::Doctor(args) => self.actions.doctor(session, &args).await,
        }
    }
}
