use anchor_lang::prelude::*;
use crate::state::Config;

#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED_PREFIX, config_account.admin.as_ref()],
        bump = config_account.bump[0],
    )]
    pub config_account: Account<'info, Config>,

    /// CHECK: Receives the payment, checked against `config_account.operator`
    #[account(mut)]
    pub operator_account: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn buy(ctx: Context<Buy>, id: String) -> Result<()> {
    let purchase = ctx
        .accounts
        .config_account
        .checkout(&ctx.accounts.operator_account.key())?;

    // Pay the operator; an underfunded buyer fails here inside the system program
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.authority.to_account_info(),
                to: ctx.accounts.operator_account.to_account_info(),
            },
        ),
        purchase.amount,
    )?;

    msg!("Item {} bought for {} lamports", id, purchase.amount);

    // Only announced once the payment has gone through
    emit!(BuyEvent { id });

    Ok(())
}

/// Emitted once per successful purchase. Ids are opaque and may repeat.
#[event]
pub struct BuyEvent {
    #[index]
    pub id: String,
}
