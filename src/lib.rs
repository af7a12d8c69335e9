//! Game-state core for a wave-based invader shooter.
//!
//! The library owns entities, the per-frame update pipeline and the
//! wave/boss state machine. Drawing, sound playback and terminal input live
//! in the binary and only see [`snapshot::Snapshot`] and [`events::FrameEvent`].

pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod events;
pub mod game;
pub mod high_scores;
pub mod input;
pub mod movement;
pub mod snapshot;
pub mod wave;
