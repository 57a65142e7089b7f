/// # Quirks
/// CHIP-8 interpreters disagree on a handful of behaviours and real ROMs
/// depend on one or the other. The defaults follow the original COSMAC VIP
/// semantics for everything except shifts, which act on Vx in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quirks {
    /// What happens to sprite pixels that run past the right or bottom edge
    pub sprite_wrap: SpriteWrap,
    /// Which register `8xy6`/`8xyE` shift
    pub shift_source: ShiftSource,
    /// Whether `Fx55`/`Fx65` leave I pointing just past the last byte touched
    pub load_store_increments_index: bool,
}

impl Default for Quirks {
    fn default() -> Self {
        Quirks {
            sprite_wrap: SpriteWrap::Clip,
            shift_source: ShiftSource::Vx,
            load_store_increments_index: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpriteWrap {
    /// Pixels past the edge are dropped
    Clip,
    /// Pixels past the edge reappear on the opposite side
    Wrap,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShiftSource {
    /// `Vx = Vx >> 1`
    Vx,
    /// `Vx = Vy >> 1`
    Vy,
}

/// Machine-wide settings fixed at creation time
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub quirks: Quirks,
    /// Timers tick once every this many cycles; 0 leaves ticking to the host
    pub cycles_per_timer_tick: u32,
    /// Seed for the `Cxkk` random byte source; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            quirks: Quirks::default(),
            cycles_per_timer_tick: 1,
            seed: None,
        }
    }
}
