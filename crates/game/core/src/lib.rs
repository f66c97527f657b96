//! Deterministic turn engine for a single-threaded roguelike simulation.
//!
//! `game-core` owns the canonical rules: the [`TurnQueue`] of virtual time,
//! the actor scheduling lifecycle, the [`Action`] protocol with its fallback
//! combinators, and the [`World::simulate`] driver that runs non-controlled
//! actors until some actor awaits an external command. All state mutation
//! flows through [`Action::perform`], and rescheduling through
//! [`World::do_action`].
pub mod action;
pub mod ai;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionResult, Attack, Bump, BumpAttack, BumpInteract, Follow, Interact,
    Interaction, MoveBy, MoveTo, MoveTowards, PickupGeneral, PickupItem, PlayerControl,
    RemoteControl, ReturnControlToPlayer, Standby, Wait, first_success,
};
pub use ai::{FightPlayer, Policy};
pub use config::GameConfig;
pub use engine::{Actor, ScheduleError, SimulationError, Ticket, TurnError, TurnQueue};
pub use env::{Archetype, GeneratedWorld, Placement, SpawnError, WorldGenerator};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Direction, EntityId, EntityRecord, EntityStore, EntityTags, GridDimensions, MessageLog,
    Position, TerrainKind, Tick, TileGrid, World,
};
