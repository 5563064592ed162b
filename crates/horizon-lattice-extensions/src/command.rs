//! Null-safe command invocation.
//!
//! A [`Command`] is anything that can report whether it is currently
//! executable and can then be executed with an optional parameter, such as
//! a toolbar action or a view-model command. Code that holds an *optional*
//! command (a widget whose command was never bound, say) would otherwise
//! repeat the same "is it there, is it enabled, then run it" dance
//! everywhere; [`CommandExt`] folds that into one call.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_extensions::{Command, CommandExt};
//! use std::sync::atomic::{AtomicI32, Ordering};
//!
//! struct Add(AtomicI32);
//!
//! impl Command<i32> for Add {
//!     fn can_execute(&self, parameter: Option<&i32>) -> bool {
//!         parameter.is_some()
//!     }
//!
//!     fn execute(&self, parameter: Option<&i32>) {
//!         if let Some(n) = parameter {
//!             self.0.fetch_add(*n, Ordering::SeqCst);
//!         }
//!     }
//! }
//!
//! let add = Add(AtomicI32::new(0));
//! let bound: Option<&Add> = Some(&add);
//! let unbound: Option<&Add> = None;
//!
//! assert!(bound.safe_execute(Some(&5)));
//! assert!(!bound.safe_execute(None::<&i32>));
//! assert!(!unbound.safe_execute(Some(&5)));
//! assert_eq!(add.0.load(Ordering::SeqCst), 5);
//! ```

use std::sync::Arc;

use crate::logging::targets;

/// An executable command with an optional parameter.
pub trait Command<P: ?Sized = ()> {
    /// Whether the command can execute in its current state.
    fn can_execute(&self, parameter: Option<&P>) -> bool;

    /// Execute the command.
    fn execute(&self, parameter: Option<&P>);
}

impl<P: ?Sized, C: Command<P> + ?Sized> Command<P> for &C {
    fn can_execute(&self, parameter: Option<&P>) -> bool {
        (**self).can_execute(parameter)
    }

    fn execute(&self, parameter: Option<&P>) {
        (**self).execute(parameter);
    }
}

impl<P: ?Sized, C: Command<P> + ?Sized> Command<P> for Box<C> {
    fn can_execute(&self, parameter: Option<&P>) -> bool {
        (**self).can_execute(parameter)
    }

    fn execute(&self, parameter: Option<&P>) {
        (**self).execute(parameter);
    }
}

impl<P: ?Sized, C: Command<P> + ?Sized> Command<P> for Arc<C> {
    fn can_execute(&self, parameter: Option<&P>) -> bool {
        (**self).can_execute(parameter)
    }

    fn execute(&self, parameter: Option<&P>) {
        (**self).execute(parameter);
    }
}

/// Null-safe invocation on an optional command.
pub trait CommandExt<P: ?Sized> {
    /// `true` only if the command is present and can execute with `parameter`.
    fn safe_can_execute(self, parameter: Option<&P>) -> bool;

    /// Execute the command if it is present and can execute.
    ///
    /// Returns whether the command was executed.
    fn safe_execute(self, parameter: Option<&P>) -> bool;
}

impl<P: ?Sized, C: Command<P> + ?Sized> CommandExt<P> for Option<&C> {
    fn safe_can_execute(self, parameter: Option<&P>) -> bool {
        safe_can_execute(self, parameter)
    }

    fn safe_execute(self, parameter: Option<&P>) -> bool {
        safe_execute(self, parameter)
    }
}

/// `true` only if `command` is present and can execute with `parameter`.
pub fn safe_can_execute<P, C>(command: Option<&C>, parameter: Option<&P>) -> bool
where
    P: ?Sized,
    C: Command<P> + ?Sized,
{
    command.is_some_and(|command| command.can_execute(parameter))
}

/// Execute `command` if it is present and can execute with `parameter`.
///
/// Returns whether the command was executed.
pub fn safe_execute<P, C>(command: Option<&C>, parameter: Option<&P>) -> bool
where
    P: ?Sized,
    C: Command<P> + ?Sized,
{
    let Some(command) = command.filter(|command| command.can_execute(parameter)) else {
        tracing::trace!(target: targets::COMMAND, "command absent or not executable, skipping");
        return false;
    };

    command.execute(parameter);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Records every call made to it.
    #[derive(Default)]
    struct RecordingCommand {
        executable: bool,
        can_execute_calls: Mutex<Vec<Option<i32>>>,
        execute_calls: Mutex<Vec<Option<i32>>>,
    }

    impl RecordingCommand {
        fn executable() -> Self {
            Self {
                executable: true,
                ..Default::default()
            }
        }
    }

    impl Command<i32> for RecordingCommand {
        fn can_execute(&self, parameter: Option<&i32>) -> bool {
            self.can_execute_calls.lock().push(parameter.copied());
            self.executable
        }

        fn execute(&self, parameter: Option<&i32>) {
            self.execute_calls.lock().push(parameter.copied());
        }
    }

    const PARAMETER: i32 = 1;

    #[test]
    fn test_safe_can_execute_absent_command() {
        let command: Option<&RecordingCommand> = None;
        assert!(!command.safe_can_execute(Some(&PARAMETER)));
    }

    #[test]
    fn test_safe_can_execute_not_executable() {
        let command = RecordingCommand::default();
        assert!(!Some(&command).safe_can_execute(Some(&PARAMETER)));
        assert!(command.execute_calls.lock().is_empty());
    }

    #[test]
    fn test_safe_can_execute_executable_does_not_execute() {
        let command = RecordingCommand::executable();
        assert!(Some(&command).safe_can_execute(Some(&PARAMETER)));
        assert_eq!(*command.can_execute_calls.lock(), vec![Some(PARAMETER)]);
        assert!(command.execute_calls.lock().is_empty());
    }

    #[test]
    fn test_safe_execute_absent_command() {
        let command: Option<&RecordingCommand> = None;
        assert!(!command.safe_execute(Some(&PARAMETER)));
    }

    #[test]
    fn test_safe_execute_not_executable() {
        let command = RecordingCommand::default();
        assert!(!Some(&command).safe_execute(Some(&PARAMETER)));
        assert!(command.execute_calls.lock().is_empty());
    }

    #[test]
    fn test_safe_execute_executable() {
        let command = RecordingCommand::executable();
        assert!(Some(&command).safe_execute(Some(&PARAMETER)));
        assert_eq!(*command.execute_calls.lock(), vec![Some(PARAMETER)]);
    }

    #[test]
    fn test_safe_execute_without_parameter() {
        let command = RecordingCommand::executable();
        assert!(safe_execute(Some(&command), None::<&i32>));
        assert_eq!(*command.execute_calls.lock(), vec![None]);
    }

    #[test]
    fn test_trait_object_command() {
        let command: Arc<dyn Command<i32>> = Arc::new(RecordingCommand::executable());
        assert!(Some(&command).safe_execute(Some(&PARAMETER)));
        assert!(Some(command.as_ref()).safe_can_execute(None::<&i32>));
    }
}
