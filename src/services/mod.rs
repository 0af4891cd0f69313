// Service module exports

pub mod layout;
pub mod navigation;
pub mod settings;
