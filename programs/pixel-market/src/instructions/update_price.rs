use anchor_lang::prelude::*;
use crate::state::Config;

#[derive(Accounts)]
pub struct UpdatePrice<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED_PREFIX, config_account.admin.as_ref()],
        bump = config_account.bump[0],
    )]
    pub config_account: Account<'info, Config>,
}

pub fn update_price(ctx: Context<UpdatePrice>, new_price: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    let config = &mut ctx.accounts.config_account;
    let previous = config.update_price(&authority, new_price)?;

    emit!(PriceUpdated {
        price: new_price,
    });

    msg!("Price updated from {} to {}", previous, new_price);

    Ok(())
}

/// Admin bookkeeping event: the price every later `buy` pays.
#[event]
pub struct PriceUpdated {
    pub price: u64,
}
