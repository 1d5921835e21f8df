pub mod mint;
pub mod pot;
pub mod protocol;
pub mod protocol_config_params;
pub mod token;

pub use mint::*;
pub use pot::*;
pub use protocol::*;
pub use protocol_config_params::*;
pub use token::*;
