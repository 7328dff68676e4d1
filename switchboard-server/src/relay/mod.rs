mod broadcaster;
mod dispatcher;
mod relay_command;
mod relay_handle;
mod relay_hub;

pub use broadcaster::*;
pub use dispatcher::*;
pub use relay_command::*;
pub use relay_handle::*;
pub use relay_hub::*;
