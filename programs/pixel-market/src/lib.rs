use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("9L6oPAeVehsLcL8iAnakzhnb22UApVfbyf5JcS6BnEVL");

/// Admin-configured fixed-price marketplace. Purchases emit `BuyEvent`;
/// `ConfigInitialized`, `OperatorChanged` and `PriceUpdated` record admin
/// changes to the config.
#[program]
pub mod pixel_market {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        bump: u8,
        operator: Pubkey,
        price: u64,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, bump, operator, price)
    }

    pub fn change_operator(ctx: Context<ChangeOperator>, new_operator: Pubkey) -> Result<()> {
        instructions::change_operator::change_operator(ctx, new_operator)
    }

    pub fn update_price(ctx: Context<UpdatePrice>, new_price: u64) -> Result<()> {
        instructions::update_price::update_price(ctx, new_price)
    }

    pub fn buy(ctx: Context<Buy>, id: String) -> Result<()> {
        instructions::buy::buy(ctx, id)
    }
}
