// Module exports for models

pub mod display;
pub mod occasion;
pub mod person;
pub mod settings;
