/// Knobs a front end may change before a run starts.
///
/// The drop chances are fed to `Rng::gen_bool`, so `0.0` and `1.0` give fully
/// deterministic outcomes.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub starting_lives: u32,
    /// Chance that a power-up spawn roll actually drops something.
    pub powerup_drop_chance: f64,
    /// Extra pre-roll green and red aliens must pass before the drop roll.
    pub basic_alien_roll: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            powerup_drop_chance: 0.2,
            basic_alien_roll: 0.1,
        }
    }
}
