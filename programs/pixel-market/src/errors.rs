use anchor_lang::prelude::*;

// Variant order fixes the on-wire codes: OnlyAdmin = 6000, WrongOperator = 6001.
#[error_code]
pub enum PixelMarketError {
    #[msg("Only admin")]
    OnlyAdmin,

    #[msg("Wrong operator")]
    WrongOperator,
}
