pub mod abstract_trait;
pub mod cli;
pub mod di;
pub mod domain;
pub mod guard;
pub mod pipeline;
pub mod service;
pub mod session;
pub mod state;
