pub mod actions;
pub mod event_loop;
pub mod resolve;
pub mod state;
pub mod update;
pub mod view;
