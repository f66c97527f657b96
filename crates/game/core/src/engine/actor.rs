//! Actor capability and its scheduling lifecycle.
//!
//! ```text
//! Unscheduled ─schedule─▶ Pending(ticket) ─pop + call(match)─▶ Deciding
//!      ▲                        │                                │
//!      └── interrupt / take_control (ticket discarded)           ├─ Success ─▶ Pending(new ticket)
//!                                                                └─ controlled ─▶ Controlled (no ticket)
//! ```
//!
//! Cancellation never touches the queue: the holder forgets its ticket and
//! the eventual pop is recognised as stale by identity.

use crate::action::{Action, PlayerControl};
use crate::state::{EntityId, World};

use super::{ScheduleError, Ticket};

/// Scheduling and decision capability attached to an entity.
#[derive(Debug, Default)]
pub struct Actor {
    /// Driven by external commands instead of its decision policy.
    pub controlled: bool,
    ticket: Option<Ticket>,
    pending: Option<Box<dyn Action>>,
}

impl Actor {
    pub fn new(controlled: bool) -> Self {
        Self {
            controlled,
            ticket: None,
            pending: None,
        }
    }

    /// The single live ticket, if the actor is scheduled.
    pub fn ticket(&self) -> Option<Ticket> {
        self.ticket
    }

    pub fn is_scheduled(&self) -> bool {
        self.ticket.is_some()
    }

    /// The committed action whose time cost the actor is waiting out.
    pub fn pending_action(&self) -> Option<&dyn Action> {
        self.pending.as_deref()
    }

    pub(crate) fn set_pending(&mut self, action: Box<dyn Action>) {
        self.pending = Some(action);
    }

    /// Forgets the ticket and pending action. The queue entry stays behind
    /// and is skipped when popped.
    fn clear(&mut self) {
        self.ticket = None;
        self.pending = None;
    }

    /// Consumes the live ticket if it is `ticket`.
    fn claim(&mut self, ticket: Ticket) -> bool {
        if self.ticket == Some(ticket) {
            self.clear();
            true
        } else {
            false
        }
    }
}

impl World {
    /// Attaches the actor capability and schedules the first turn at delay 0.
    pub fn attach_actor(&mut self, entity: EntityId, controlled: bool) -> Result<(), ScheduleError> {
        let record = self
            .entities
            .get_mut(entity)
            .ok_or(ScheduleError::NotAnActor { entity })?;
        if let Some(previous) = record.actor.as_mut() {
            previous.clear();
        }
        record.actor = Some(Actor::new(controlled));
        self.schedule(entity, 0)?;
        Ok(())
    }

    /// Removes the actor capability. Any ticket it held becomes stale.
    pub fn detach_actor(&mut self, entity: EntityId) -> Option<Actor> {
        let mut actor = self.entities.get_mut(entity)?.actor.take()?;
        actor.clear();
        if self.controlled == Some(entity) {
            self.controlled = None;
        }
        tracing::debug!(entity = %entity, "actor capability removed");
        Some(actor)
    }

    /// Obtains a ticket `interval` ticks ahead for `entity`.
    ///
    /// Holding a ticket already is an invariant violation.
    pub fn schedule(&mut self, entity: EntityId, interval: u64) -> Result<Ticket, ScheduleError> {
        let actor = self
            .entities
            .actor(entity)
            .ok_or(ScheduleError::NotAnActor { entity })?;
        if actor.ticket.is_some() {
            tracing::error!(entity = %entity, "double scheduling attempted");
            return Err(ScheduleError::AlreadyScheduled { entity });
        }

        let ticket = self.queue.schedule(interval, entity);
        if let Some(actor) = self.entities.actor_mut(entity) {
            actor.ticket = Some(ticket);
        }
        if self.controlled == Some(entity) {
            self.controlled = None;
        }

        tracing::debug!(
            entity = %entity,
            ticket = ticket.id(),
            at = %(self.queue.time() + interval),
            "turn scheduled"
        );
        Ok(ticket)
    }

    /// Wake-up callback for a popped `ticket`.
    ///
    /// A ticket that no longer matches the actor's live one is stale and
    /// ignored. Otherwise the actor either decides through its policy or, when
    /// controlled, waits for an external command with no ticket.
    pub fn call(&mut self, ticket: Ticket, entity: EntityId) -> Result<(), ScheduleError> {
        let claimed = self
            .entities
            .actor_mut(entity)
            .is_some_and(|actor| actor.claim(ticket));
        if !claimed {
            tracing::debug!(entity = %entity, ticket = ticket.id(), "stale ticket skipped");
            return Ok(());
        }

        let controlled = self.entities.actor(entity).is_some_and(|actor| actor.controlled);
        if controlled {
            let _ = PlayerControl.perform(self, entity);
            return Ok(());
        }

        let policy = self
            .entities
            .get(entity)
            .and_then(|record| record.policy)
            .unwrap_or_default();
        let mut action = policy.decide(self, entity);
        tracing::debug!(entity = %entity, ?policy, action = ?action, "actor deciding");

        if self.do_action(entity, action.as_mut())? {
            if let Some(actor) = self.entities.actor_mut(entity)
                && actor.is_scheduled()
            {
                actor.set_pending(action);
            }
        } else if self.entities.actor(entity).is_some() {
            self.schedule(entity, self.config.retry_delay)?;
        }
        Ok(())
    }

    /// Clears the ticket and pending action with no other side effect.
    pub fn interrupt(&mut self, entity: EntityId) {
        if let Some(actor) = self.entities.actor_mut(entity) {
            actor.clear();
        }
    }

    /// Forcibly hands external control to `entity`.
    ///
    /// Every other controlled actor is demoted and interrupted without
    /// completing its turn, then returned to its policy with a fresh ticket at
    /// the current tick. Any turn `entity` had queued is discarded.
    pub fn take_control(&mut self, entity: EntityId) -> Result<(), ScheduleError> {
        if self.entities.actor(entity).is_none() {
            return Err(ScheduleError::NotAnActor { entity });
        }
        for holder in self.seize_control(entity) {
            self.schedule(holder, 0)?;
        }
        Ok(())
    }

    /// Control transfer issued by `issuer` from inside an action.
    ///
    /// The issuer is left unscheduled for the commit path to reschedule.
    pub(crate) fn transfer_control(&mut self, entity: EntityId, issuer: EntityId) {
        for holder in self.seize_control(entity) {
            if holder != issuer
                && let Err(error) = self.schedule(holder, 0)
            {
                tracing::error!(entity = %holder, %error, "released actor could not be rescheduled");
            }
        }
    }

    /// Promotes `entity` and returns the demoted holders, all unscheduled.
    fn seize_control(&mut self, entity: EntityId) -> Vec<EntityId> {
        let holders: Vec<EntityId> = self
            .entities
            .query(move |id, record| {
                id != entity && record.actor.as_ref().is_some_and(|actor| actor.controlled)
            })
            .map(|(id, _)| id)
            .collect();
        for &holder in &holders {
            if let Some(actor) = self.entities.actor_mut(holder) {
                actor.controlled = false;
                actor.clear();
            }
            tracing::debug!(entity = %holder, "control released");
        }
        if self.controlled != Some(entity) {
            self.controlled = None;
        }

        self.interrupt(entity);
        if let Some(actor) = self.entities.actor_mut(entity) {
            actor.controlled = true;
        }
        let _ = PlayerControl.perform(self, entity);
        tracing::info!(entity = %entity, tick = %self.clock(), "control taken");
        holders
    }
}
