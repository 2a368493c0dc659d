//! Game progression state
//!
//! Lives outside any scene: the registry is rebuilt on every scene load, the
//! game state carries over.

/// Fewest meteors in a level
pub const MIN_METEORS: u32 = 3;
/// Most meteors in the first level
pub const MAX_METEORS: u32 = 5;
/// Smallest meteor radius
pub const MIN_METEOR_SIZE: f32 = 20.0;
/// Largest meteor radius in the first level
pub const MAX_METEOR_SIZE: f32 = 50.0;
/// Damage a meteor deals to the spaceship per frame of contact
pub const METEOR_DMG: f32 = 0.1;
/// Radius of the core left behind by a meteor
pub const METEOR_CORE_SIZE: f32 = 10.0;
/// Health of a meteor core
pub const METEOR_CORE_HEALTH: f32 = 0.1;

/// Spaceship health at the start of each level and life
pub const SPACESHIP_INITIAL_HEALTH: f32 = 10.0;
/// Lives at the start of the game
pub const SPACESHIP_INITIAL_LIVES: u32 = 3;
/// Beam width
pub const WEAPON_SIZE: f32 = 10.0;
/// Beam damage per frame of contact
pub const WEAPON_DMG: f32 = 1.0;
/// Beam reach at full extension
pub const WEAPON_MAX_DISTANCE: f32 = 60.0;

/// Per-level meteor parameters
#[derive(Debug, Clone, PartialEq)]
pub struct MeteorParams {
    /// Fewest meteors spawned
    pub min_meteors: u32,
    /// Most meteors spawned
    pub max_meteors: u32,
    /// Smallest radius
    pub min_meteor_size: f32,
    /// Largest radius
    pub max_meteor_size: f32,
    /// Contact damage
    pub meteor_dmg: f32,
    /// Core radius
    pub meteor_core_size: f32,
    /// Core health
    pub meteor_core_health: f32,
}

impl Default for MeteorParams {
    fn default() -> Self {
        Self {
            min_meteors: MIN_METEORS,
            max_meteors: MAX_METEORS,
            min_meteor_size: MIN_METEOR_SIZE,
            max_meteor_size: MAX_METEOR_SIZE,
            meteor_dmg: METEOR_DMG,
            meteor_core_size: METEOR_CORE_SIZE,
            meteor_core_health: METEOR_CORE_HEALTH,
        }
    }
}

/// Beam parameters
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponParams {
    /// Damage per frame of contact
    pub dmg: f32,
    /// Beam width
    pub size: f32,
    /// Full reach
    pub max_distance: f32,
}

impl Default for WeaponParams {
    fn default() -> Self {
        Self {
            dmg: WEAPON_DMG,
            size: WEAPON_SIZE,
            max_distance: WEAPON_MAX_DISTANCE,
        }
    }
}

/// Player progress across levels
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Current level, starting at 1
    pub level: u32,
    /// Cores gathered this level
    pub cores: u32,
    /// Cores gathered over the whole game
    pub total_cores: u32,
    /// Meteors spawned this level
    pub level_meteors: u32,
    /// Hits landed
    pub score: u32,
    /// Best score seen
    pub max_score: u32,
    /// Remaining lives
    pub lives: u32,
    /// Spaceship health
    pub health: f32,
    /// Meteor parameters for this level
    pub meteors: MeteorParams,
    /// Beam parameters
    pub weapon: WeaponParams,
}

impl Game {
    /// Fresh game at level 1
    pub fn new() -> Self {
        Self {
            level: 1,
            cores: 0,
            total_cores: 0,
            level_meteors: 0,
            score: 0,
            max_score: 0,
            lives: SPACESHIP_INITIAL_LIVES,
            health: SPACESHIP_INITIAL_HEALTH,
            meteors: MeteorParams::default(),
            weapon: WeaponParams::default(),
        }
    }

    /// Advance a level. Meteors get more numerous and larger.
    pub fn next_level(&mut self) {
        self.level += 1;
        let growth = self.level - 1;
        self.meteors.max_meteors = MAX_METEORS + growth;
        self.meteors.max_meteor_size = MAX_METEOR_SIZE + growth as f32;
        self.cores = 0;
        self.level_meteors = 0;
        self.health = SPACESHIP_INITIAL_HEALTH;
        log::info!("Advanced to level {}", self.level);
    }

    /// Restore full spaceship health
    pub fn reset_spaceship(&mut self) {
        self.health = SPACESHIP_INITIAL_HEALTH;
    }

    /// One point per hit on a meteor
    pub fn mine_meteor(&mut self) {
        self.score += 1;
        self.max_score = self.max_score.max(self.score);
    }

    /// Reduce spaceship health, never below zero
    pub fn damage_spaceship(&mut self, dmg: f32) {
        self.health = (self.health - dmg).max(0.0);
    }

    /// Spend a life
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        log::info!("Life lost, {} left", self.lives);
    }

    /// Collect the core of a destroyed meteor
    pub fn gather_core(&mut self) {
        self.cores += 1;
        self.total_cores += 1;
    }

    /// Every meteor of this level has been reduced to a core
    pub fn is_game_won(&self) -> bool {
        self.level_meteors > 0 && self.cores >= self.level_meteors
    }

    /// No lives left
    pub fn is_game_lost(&self) -> bool {
        self.lives == 0
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
