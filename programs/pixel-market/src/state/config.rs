use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::PixelMarketError;

/// Marketplace configuration, one per admin, stored at
/// `[CONFIG_SEED, admin]` under this program.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Config {
    pub bump: [u8; 1],             // 1 byte
    pub admin: Pubkey,             // 32 bytes - fixed at creation
    pub operator: Pubkey,          // 32 bytes - payout recipient
    pub price: u64,                // 8 bytes - lamports per purchase
}

/// What a single `buy` owes and to whom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub recipient: Pubkey,
    pub amount: u64,
}

impl Config {
    pub const SEED_PREFIX: &'static [u8] = CONFIG_SEED;

    pub const LEN: usize = DISCRIMINATOR_LEN
        + U8_LEN       // bump
        + PUBKEY_LEN   // admin
        + PUBKEY_LEN   // operator
        + U64_LEN;     // price

    /// Derives the config address of `admin` from a known bump.
    pub fn create_address(admin: &Pubkey, bump: u8) -> Result<Pubkey> {
        Pubkey::create_program_address(&[Self::SEED_PREFIX, admin.as_ref(), &[bump]], &crate::ID)
            .map_err(|_| error!(anchor_lang::error::ErrorCode::ConstraintSeeds))
    }

    /// Fills a freshly created record living at `address`. The bump must
    /// reproduce that address, otherwise nothing is written.
    pub fn init(
        &mut self,
        address: &Pubkey,
        bump: u8,
        admin: Pubkey,
        operator: Pubkey,
        price: u64,
    ) -> Result<()> {
        let derived = Self::create_address(&admin, bump)?;
        require_keys_eq!(derived, *address, anchor_lang::error::ErrorCode::ConstraintSeeds);

        self.bump = [bump];
        self.admin = admin;
        self.operator = operator;
        self.price = price;

        Ok(())
    }

    pub fn require_admin(&self, authority: &Pubkey) -> Result<()> {
        require_keys_eq!(self.admin, *authority, PixelMarketError::OnlyAdmin);
        Ok(())
    }

    /// Returns the operator that was replaced.
    pub fn change_operator(&mut self, authority: &Pubkey, operator: Pubkey) -> Result<Pubkey> {
        self.require_admin(authority)?;

        let previous = self.operator;
        self.operator = operator;

        Ok(previous)
    }

    /// Returns the price that was replaced.
    pub fn update_price(&mut self, authority: &Pubkey, price: u64) -> Result<u64> {
        self.require_admin(authority)?;

        let previous = self.price;
        self.price = price;

        Ok(previous)
    }

    /// Prices a purchase against the current config without touching it.
    pub fn checkout(&self, operator: &Pubkey) -> Result<Purchase> {
        require_keys_eq!(self.operator, *operator, PixelMarketError::WrongOperator);

        Ok(Purchase {
            recipient: self.operator,
            amount: self.price,
        })
    }
}
