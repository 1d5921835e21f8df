pub mod address;
pub mod custody;
pub mod math;
pub mod pricing;
pub mod settlement;

pub use address::*;
pub use custody::*;
pub use math::*;
pub use pricing::*;
pub use settlement::*;
