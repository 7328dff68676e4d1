mod signaling_service;
mod token_handler;
mod ws_handler;

pub use signaling_service::*;
pub use token_handler::*;
pub use ws_handler::*;
