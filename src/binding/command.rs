//! Triggerable action object.

use std::fmt;

use futures::future::BoxFuture;

/// Future produced by invoking a [`Command`].
pub type CommandFuture<E> = BoxFuture<'static, Result<(), E>>;

/// A zero-argument triggerable action with an enabled-state query.
///
/// `execute` produces a future the caller awaits or spawns; errors are not
/// caught inside the command, they surface to whoever drives the future.
pub struct Command<E> {
    action: Box<dyn Fn() -> CommandFuture<E> + Send + Sync>,
    can_execute: Box<dyn Fn() -> bool + Send + Sync>,
}

impl<E> Command<E> {
    /// Create a command that is always enabled.
    pub fn new(action: impl Fn() -> CommandFuture<E> + Send + Sync + 'static) -> Self {
        Self {
            action: Box::new(action),
            can_execute: Box::new(|| true),
        }
    }

    /// Replace the enabled-state query.
    pub fn with_can_execute(mut self, can_execute: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.can_execute = Box::new(can_execute);
        self
    }

    /// Whether the command may currently be invoked.
    pub fn can_execute(&self) -> bool {
        (self.can_execute)()
    }

    /// Produce the action's future. Callers should check
    /// [`can_execute`](Self::can_execute) first.
    pub fn execute(&self) -> CommandFuture<E> {
        (self.action)()
    }
}

impl<E> fmt::Debug for Command<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("can_execute", &self.can_execute())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_execute_runs_the_action() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();

        let command: Command<()> = Command::new(move || {
            let counter = counter.clone();
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        });

        command.execute().await.unwrap();
        command.execute().await.unwrap();
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_surface_to_the_caller() {
        let command: Command<&'static str> =
            Command::new(|| Box::pin(async { Err("boom") }));

        assert_eq!(command.execute().await, Err("boom"));
    }

    #[test]
    fn test_can_execute_defaults_to_true_and_is_overridable() {
        let command: Command<()> = Command::new(|| Box::pin(async { Ok(()) }));
        assert!(command.can_execute());

        let disabled = command.with_can_execute(|| false);
        assert!(!disabled.can_execute());
    }
}
