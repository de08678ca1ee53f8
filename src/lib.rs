pub mod args;
pub mod codec;
pub mod db;
pub mod error;
pub mod model;
pub mod session;
pub mod stats;
pub mod ui;
