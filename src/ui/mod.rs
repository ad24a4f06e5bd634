/// UI module exports
pub mod app;
pub mod components;
pub mod notifications;
pub mod results;
pub mod state;
