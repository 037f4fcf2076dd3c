use anchor_lang::prelude::*;
use crate::state::Config;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub fee_payer: Signer<'info>,

    /// Becomes the permanent admin of the new config.
    pub authority: Signer<'info>,

    // A second initialize for the same authority fails because the account is in use.
    #[account(
        init,
        payer = fee_payer,
        seeds = [Config::SEED_PREFIX, authority.key().as_ref()],
        bump,
        space = Config::LEN,
    )]
    pub config_account: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(
    ctx: Context<Initialize>,
    bump: u8,
    operator: Pubkey,
    price: u64,
) -> Result<()> {
    let config_key = ctx.accounts.config_account.key();
    let admin = ctx.accounts.authority.key();

    // The supplied bump has to reproduce the account Anchor just created
    let config = &mut ctx.accounts.config_account;
    config.init(&config_key, bump, admin, operator, price)?;

    emit!(ConfigInitialized {
        admin,
        operator,
        price,
    });

    msg!("Config {} initialized: operator {}, price {}", config_key, operator, price);

    Ok(())
}

/// Announces a new config. Not part of the purchase flow; `BuyEvent` is the
/// only event downstream buyers need to index.
#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub operator: Pubkey,
    pub price: u64,
}
