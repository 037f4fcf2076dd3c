// Seeds
pub const CONFIG_SEED: &[u8] = b"config";

// Account layout
pub const DISCRIMINATOR_LEN: usize = 8;
pub const PUBKEY_LEN: usize = 32;
pub const U64_LEN: usize = 8;
pub const U8_LEN: usize = 1;
