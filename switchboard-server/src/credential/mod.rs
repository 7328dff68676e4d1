mod credential_issuer;
mod jwt_issuer;

pub use credential_issuer::*;
pub use jwt_issuer::*;
