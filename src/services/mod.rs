// Service module exports

pub mod database;
pub mod occasion;
pub mod person;
pub mod settings;
