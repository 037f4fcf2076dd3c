use anchor_lang::prelude::*;
use crate::state::Config;

#[derive(Accounts)]
pub struct ChangeOperator<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED_PREFIX, config_account.admin.as_ref()],
        bump = config_account.bump[0],
    )]
    pub config_account: Account<'info, Config>,
}

pub fn change_operator(ctx: Context<ChangeOperator>, new_operator: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    let config = &mut ctx.accounts.config_account;
    let previous = config.change_operator(&authority, new_operator)?;

    emit!(OperatorChanged {
        operator: new_operator,
    });

    msg!("Operator changed from {} to {}", previous, new_operator);

    Ok(())
}

/// Admin bookkeeping event: the payout recipient for later purchases.
#[event]
pub struct OperatorChanged {
    pub operator: Pubkey,
}
