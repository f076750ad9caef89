//! Value objects - Immutable objects defined by their attributes

mod ability;
mod hit_points;
mod ids;
mod skill;

pub use ability::{Ability, AbilityScores};
pub use hit_points::HitPoints;
pub use ids::*;
pub use skill::{skill_map, Skill};
