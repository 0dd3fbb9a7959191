use frame_support::pallet_prelude::*;

/// Fixed-point unit of oracle prices and option strikes (8 decimals).
pub const PRICE_UNIT: u32 = 100_000_000;

/// Read-only access to the current price of the underlying asset.
pub trait PriceOracle {
    type Balance;

    /// Latest price, expressed with [`PRICE_UNIT`] decimals.
    fn latest_price() -> Result<Self::Balance, DispatchError>;
}
