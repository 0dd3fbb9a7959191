pub type AssetId = u128;
pub const PICA: AssetId = 1;
pub const USDC: AssetId = 131;
