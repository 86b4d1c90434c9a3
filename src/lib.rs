// Devotee Records Library
// Occasion scheduling, completion tracking and record storage

pub mod models;
pub mod services;
pub mod utils;
