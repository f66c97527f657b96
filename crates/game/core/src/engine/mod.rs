//! Turn scheduling and the simulation driver.
//!
//! All actor turns flow through [`World::do_action`], the single commit path
//! shared by policy-driven actors and external commands. [`World::simulate`]
//! pumps the [`TurnQueue`] until some actor needs an external command.

mod actor;
mod errors;
mod turns;

pub use actor::Actor;
pub use errors::{ScheduleError, SimulationError, TurnError};
pub use turns::{Ticket, TurnQueue};

use crate::action::{Action, ActionResult};
use crate::state::{EntityId, Tick, World};

impl World {
    /// Performs `action` for `entity` and reschedules on success.
    ///
    /// Returns `Ok(true)` when the action committed and `Ok(false)` when it
    /// was impossible. An impossible action consumes no time; for a controlled
    /// actor its reason is appended to the message log.
    ///
    /// The actor must not hold a ticket.
    pub fn do_action(
        &mut self,
        entity: EntityId,
        action: &mut dyn Action,
    ) -> Result<bool, ScheduleError> {
        let actor = self
            .entities
            .actor(entity)
            .ok_or(ScheduleError::NotAnActor { entity })?;
        if actor.is_scheduled() {
            tracing::error!(entity = %entity, "action submitted while a turn is pending");
            return Err(ScheduleError::AlreadyScheduled { entity });
        }
        let controlled = actor.controlled;

        match action.perform(self, entity) {
            ActionResult::Success { time_cost } => {
                tracing::debug!(entity = %entity, ?action, time_cost, "action committed");
                if self.entities.actor(entity).is_some() {
                    self.schedule(entity, time_cost)?;
                }
                Ok(true)
            }
            ActionResult::Impossible { reason } => {
                tracing::debug!(entity = %entity, ?action, %reason, "action impossible");
                if controlled && !reason.is_empty() {
                    self.log.push(reason);
                }
                Ok(false)
            }
        }
    }

    /// Pops and dispatches turns until a controlled actor awaits input.
    ///
    /// Fails with [`SimulationError::PrimaryDefeated`] as soon as the primary
    /// entity has lost its actor capability; no further tickets are popped.
    pub fn simulate(&mut self) -> Result<(), SimulationError> {
        while self.controlled.is_none() {
            if let Some(primary) = self.primary
                && self.entities.actor(primary).is_none()
            {
                tracing::error!(entity = %primary, tick = %self.clock(), "primary entity defeated");
                return Err(SimulationError::PrimaryDefeated {
                    entity: primary,
                    tick: self.clock(),
                });
            }

            self.step()?;
        }
        Ok(())
    }

    /// Pops the earliest ticket and dispatches it, stale or not.
    pub fn step(&mut self) -> Result<(Ticket, EntityId), SimulationError> {
        let (ticket, entity) = self.queue.pop()?;
        self.call(ticket, entity)?;
        Ok((ticket, entity))
    }

    /// Virtual time of the earliest queued wake-up.
    pub fn next_turn_at(&self) -> Option<Tick> {
        self.queue.peek_time()
    }
}
