pub mod codec;
pub mod model;

pub use codec::{CodecError, encode, parse_signal};
pub use model::*;
