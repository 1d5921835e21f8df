pub mod buy_shares;
pub mod create_mint;
pub mod initialize;
pub mod sell_shares;
pub mod update_protocol_config;
pub mod withdraw_from_mint;
pub mod withdraw_from_protocol;

pub use buy_shares::*;
pub use create_mint::*;
pub use initialize::*;
pub use sell_shares::*;
pub use update_protocol_config::*;
pub use withdraw_from_mint::*;
pub use withdraw_from_protocol::*;
