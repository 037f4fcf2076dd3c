pub mod initialize;
pub mod change_operator;
pub mod update_price;
pub mod buy;

pub use initialize::*;
pub use change_operator::*;
pub use update_price::*;
pub use buy::*;
