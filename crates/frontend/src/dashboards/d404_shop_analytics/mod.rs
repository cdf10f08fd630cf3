//! d404 — shop analytics dashboard.
//!
//! Mount → joint fetch of the four aggregates ([`loader`]) → one transition of
//! [`state::LoadPhase`] → render from [`view_model`] in [`ui`].

pub mod api;
pub mod loader;
pub mod state;
pub mod ui;
pub mod view_model;
