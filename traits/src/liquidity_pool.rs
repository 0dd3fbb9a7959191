use frame_support::pallet_prelude::*;

/// Collateral custody offered by a liquidity pool to the options engine that controls it.
///
/// Every mutating method receives the caller's account, which must match the pool's controller.
pub trait LiquidityPool {
    type AccountId;
    type Balance;

    /// Pool value: assets held minus the premium still locked by active options.
    fn total_balance() -> Result<Self::Balance, DispatchError>;

    /// Part of [`total_balance`](Self::total_balance) not reserved as collateral.
    fn available_balance() -> Result<Self::Balance, DispatchError>;

    /// Reserve `amount` of collateral and move `premium` from `payer` into the pool,
    /// without crediting it to the pool value yet.
    fn lock(
        controller: &Self::AccountId,
        payer: &Self::AccountId,
        amount: Self::Balance,
        premium: Self::Balance,
    ) -> DispatchResult;

    /// Release `amount` of collateral and credit `premium` to the pool value.
    fn unlock(
        controller: &Self::AccountId,
        amount: Self::Balance,
        premium: Self::Balance,
    ) -> DispatchResult;

    /// Pay `amount` of pool capital to `to`.
    fn send(controller: &Self::AccountId, to: &Self::AccountId, amount: Self::Balance)
        -> DispatchResult;
}
