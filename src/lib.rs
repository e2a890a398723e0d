pub mod config;
pub mod errors;
pub mod payoff;
pub mod server;
pub mod state;
