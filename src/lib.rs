//! Checkers engine: game rules plus two fixed-depth adversarial search
//! players (plain MinMax and an alpha-beta pruned variant).

pub mod agent;
pub mod game_repr;
