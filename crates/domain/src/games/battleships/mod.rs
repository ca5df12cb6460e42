//! Turn-based naval combat with quiz-gated special weapons.

mod battle;
mod bot;
mod deploy;
mod fleet;
mod grid;

pub use battle::{
    cluster_pattern, Battle, BotShot, ClusterResolution, IntelEntry, Screen, Victor, Weapon,
    RADAR_STREAK,
};
pub use bot::BotGunner;
pub use deploy::{Deployment, PlacementPreview};
pub use fleet::{Fleet, Ship, ShotOutcome, PLACEMENT_ATTEMPTS};
pub use grid::{Cell, Grid, Orientation};
