//! Event hooks.
//!
//! Hooks see every event raised during `Scenario::update`, after all units
//! have been advanced. They cannot touch the scenario directly; instead
//! they queue [`HostCommand`]s, which the scenario applies once dispatch is
//! done.

use airops_core::commands::HostCommand;
use airops_core::events::{EventKind, ScenarioEvent};

/// Commands queued by hooks during one dispatch.
#[derive(Debug, Default)]
pub struct HookCommands {
    queue: Vec<HostCommand>,
}

impl HookCommands {
    pub fn push(&mut self, command: HostCommand) {
        self.queue.push(command);
    }

    pub(crate) fn into_inner(self) -> Vec<HostCommand> {
        self.queue
    }
}

pub trait ScenarioHook: Send {
    fn on_event(&mut self, event: &ScenarioEvent, commands: &mut HookCommands);
}

impl<F> ScenarioHook for F
where
    F: FnMut(&ScenarioEvent, &mut HookCommands) + Send,
{
    fn on_event(&mut self, event: &ScenarioEvent, commands: &mut HookCommands) {
        self(event, commands)
    }
}

/// Lands every aircraft that reports it has returned to base.
#[derive(Debug, Default, Clone, Copy)]
pub struct LandingHook;

impl ScenarioHook for LandingHook {
    fn on_event(&mut self, event: &ScenarioEvent, commands: &mut HookCommands) {
        if let EventKind::ReturnedToBase { .. } = event.kind {
            commands.push(HostCommand::LandAircraft {
                side_id: event.side_id.clone(),
                aircraft_id: event.unit_id.clone(),
            });
        }
    }
}
