//! Page data assembled from several backend calls.

pub mod account;
pub mod league;
