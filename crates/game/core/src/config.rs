/// Tunable timing and presentation parameters.
///
/// Every duration is in ticks of virtual time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Delay before a policy-driven actor whose decision was impossible
    /// decides again.
    pub retry_delay: u64,
    /// Move cost for entities without their own move speed.
    pub default_move_speed: u64,
    /// Attack cost for entities without their own attack speed.
    pub default_attack_speed: u64,
    pub wait_cost: u64,
    pub pickup_cost: u64,
    pub interact_cost: u64,
    /// Number of recent log lines a presentation layer keeps on screen.
    pub message_capacity: usize,
}

impl GameConfig {
    pub const DEFAULT_RETRY_DELAY: u64 = 100;
    pub const DEFAULT_SPEED: u64 = 100;
    pub const DEFAULT_ACTION_COST: u64 = 100;
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self {
            retry_delay: Self::DEFAULT_RETRY_DELAY,
            default_move_speed: Self::DEFAULT_SPEED,
            default_attack_speed: Self::DEFAULT_SPEED,
            wait_cost: Self::DEFAULT_ACTION_COST,
            pickup_cost: Self::DEFAULT_ACTION_COST,
            interact_cost: Self::DEFAULT_ACTION_COST,
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
        }
    }

    #[must_use]
    pub fn with_retry_delay(mut self, retry_delay: u64) -> Self {
        self.retry_delay = retry_delay;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
