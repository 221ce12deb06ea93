//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Ordered registry with argument and permission checks on dispatch

use std::collections::HashMap;
use std::sync::Arc;

use serenity::model::permissions::Permissions;

use super::context::{CommandContext, CommandKind, CommandSummary};
use super::error::CommandError;
use super::handler::{CommandInfo, SlashCommandHandler, TextCommandHandler};
use super::invocation::Invocation;
use super::reply::Reply;

/// Registry mapping command names to handlers
///
/// The registry is the bot's dispatch table: handlers are registered
/// explicitly at startup and looked up by command name. Multiple command
/// names can map to the same handler if they share logic. Registration order
/// is kept so help listings are stable.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(UtilityHandler));
/// registry.register(Arc::new(HelpHandler));
///
/// let reply = registry.dispatch(&ctx, &invocation).await?;
/// ```
pub struct Registry<H: ?Sized> {
    handlers: HashMap<&'static str, Arc<H>>,
    order: Vec<&'static str>,
}

pub type CommandRegistry = Registry<dyn TextCommandHandler>;
pub type SlashRegistry = Registry<dyn SlashCommandHandler>;

impl<H: ?Sized> Clone for Registry<H> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
            order: self.order.clone(),
        }
    }
}

impl<H: ?Sized + CommandInfo> Registry<H> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a handler for its declared command names
    ///
    /// A name registered twice is served by the later handler.
    pub fn register(&mut self, handler: Arc<H>) {
        for name in handler.command_names() {
            if self.handlers.insert(name, Arc::clone(&handler)).is_none() {
                self.order.push(name);
            }
        }
    }

    /// Get handler for a command name
    pub fn get(&self, name: &str) -> Option<Arc<H>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names
    ///
    /// Note: This counts command names, not unique handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered command names in registration order
    pub fn command_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Help entries for every registered name
    pub fn summaries(&self, kind: CommandKind) -> Vec<CommandSummary> {
        self.order
            .iter()
            .map(|&name| CommandSummary {
                kind,
                name,
                description: self.handlers[name].description(name),
            })
            .collect()
    }
}

impl<H: ?Sized + CommandInfo> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Permissions required to run `name`; empty for unknown commands
    pub fn required_permissions(&self, name: &str) -> Permissions {
        self.handlers
            .get(name)
            .map(|handler| handler.required_permissions(name))
            .unwrap_or_else(Permissions::empty)
    }

    /// Resolve and run a text command
    pub async fn dispatch(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        let name = invocation.name.as_str();
        let handler = self.get(name).ok_or_else(|| CommandError::NotFound {
            name: name.to_string(),
        })?;

        let required_args = handler.required_args(name);
        if let Some(&param) = required_args.get(invocation.args.len()) {
            return Err(CommandError::MissingArgument { param });
        }

        let required = handler.required_permissions(name);
        if !invocation.permissions.contains(required) {
            return Err(CommandError::MissingPermissions {
                permissions: required - invocation.permissions,
            });
        }

        handler.handle(ctx, invocation).await
    }
}

/// Full help catalog: text commands first, then slash commands
pub fn build_catalog(text: &CommandRegistry, slash: &SlashRegistry) -> Arc<[CommandSummary]> {
    let mut catalog = text.summaries(CommandKind::Text);
    catalog.extend(slash.summaries(CommandKind::Slash));
    catalog.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::invocation::{Author, ParsedCommand};
    use crate::session::SessionStats;
    use anyhow::Result;
    use async_trait::async_trait;

    // Mock handler for testing
    struct MockHandler {
        names: &'static [&'static str],
        args: &'static [&'static str],
        permissions: Permissions,
    }

    impl MockHandler {
        fn named(names: &'static [&'static str]) -> Self {
            Self {
                names,
                args: &[],
                permissions: Permissions::empty(),
            }
        }
    }

    impl CommandInfo for MockHandler {
        fn command_names(&self) -> &'static [&'static str] {
            self.names
        }

        fn description(&self, _name: &str) -> &'static str {
            "mock"
        }
    }

    #[async_trait]
    impl TextCommandHandler for MockHandler {
        fn required_args(&self, _name: &str) -> &'static [&'static str] {
            self.args
        }

        fn required_permissions(&self, _name: &str) -> Permissions {
            self.permissions
        }

        async fn handle(
            &self,
            _ctx: &CommandContext,
            invocation: &Invocation,
        ) -> Result<Reply, CommandError> {
            Ok(Reply::text(format!("ran {}", invocation.name)))
        }
    }

    struct MockSlash;

    impl CommandInfo for MockSlash {
        fn command_names(&self) -> &'static [&'static str] {
            &["info"]
        }

        fn description(&self, _name: &str) -> &'static str {
            "slash mock"
        }
    }

    #[async_trait]
    impl SlashCommandHandler for MockSlash {
        async fn handle(&self, _ctx: &CommandContext, _name: &str) -> Result<Reply> {
            Ok(Reply::text("slash"))
        }
    }

    fn context() -> CommandContext {
        CommandContext::new("!", SessionStats::default(), Vec::new().into())
    }

    fn invocation(name: &str, args: &[&str], permissions: Permissions) -> Invocation {
        let author = Author {
            id: 42,
            name: "tester".to_string(),
            mention: "<@42>".to_string(),
        };
        let parsed = ParsedCommand {
            name: name.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        };
        Invocation::new(author, parsed, permissions)
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_register_single() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler::named(&["ping"])));

        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("ping"));
        assert!(!registry.contains("pong"));
    }

    #[test]
    fn test_registry_keeps_registration_order() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler::named(&["zeta", "alpha"])));
        registry.register(Arc::new(MockHandler::named(&["mid"])));
        registry.register(Arc::new(MockHandler::named(&["alpha"])));

        let names: Vec<_> = registry.command_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registry_default() {
        let registry = CommandRegistry::default();
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_unknown_command() {
        let registry = CommandRegistry::new();
        let result = registry
            .dispatch(&context(), &invocation("foo", &[], Permissions::empty()))
            .await;
        match result {
            Err(CommandError::NotFound { name }) => assert_eq!(name, "foo"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_missing_argument_reports_first_missing() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler {
            names: &["remind"],
            args: &["duration", "message"],
            permissions: Permissions::empty(),
        }));

        let result = registry
            .dispatch(&context(), &invocation("remind", &["5m"], Permissions::empty()))
            .await;
        match result {
            Err(CommandError::MissingArgument { param }) => assert_eq!(param, "message"),
            other => panic!("expected MissingArgument, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_missing_permissions() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler {
            names: &["purge"],
            args: &[],
            permissions: Permissions::MANAGE_MESSAGES | Permissions::SEND_MESSAGES,
        }));

        assert_eq!(
            registry.required_permissions("purge"),
            Permissions::MANAGE_MESSAGES | Permissions::SEND_MESSAGES
        );

        let result = registry
            .dispatch(
                &context(),
                &invocation("purge", &[], Permissions::SEND_MESSAGES),
            )
            .await;
        match result {
            Err(CommandError::MissingPermissions { permissions }) => {
                assert_eq!(permissions, Permissions::MANAGE_MESSAGES)
            }
            other => panic!("expected MissingPermissions, got {other:?}"),
        }

        let allowed = registry
            .dispatch(
                &context(),
                &invocation("purge", &[], Permissions::all()),
            )
            .await
            .unwrap();
        assert_eq!(allowed.as_text(), Some("ran purge"));
    }

    #[tokio::test]
    async fn test_dispatch_runs_handler() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler::named(&["ping"])));

        let reply = registry
            .dispatch(&context(), &invocation("ping", &[], Permissions::empty()))
            .await
            .unwrap();
        assert_eq!(reply.as_text(), Some("ran ping"));
    }

    #[test]
    fn test_build_catalog_orders_text_before_slash() {
        let mut text = CommandRegistry::new();
        text.register(Arc::new(MockHandler::named(&["ping", "hello"])));
        let mut slash = SlashRegistry::new();
        slash.register(Arc::new(MockSlash));

        let catalog = build_catalog(&text, &slash);
        let entries: Vec<(CommandKind, &str)> =
            catalog.iter().map(|s| (s.kind, s.name)).collect();
        assert_eq!(
            entries,
            vec![
                (CommandKind::Text, "ping"),
                (CommandKind::Text, "hello"),
                (CommandKind::Slash, "info"),
            ]
        );
        assert_eq!(catalog[2].description, "slash mock");
    }
}
