use frame_support::pallet_prelude::*;
use sp_std::vec::Vec;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------------------------------
//		Enums
// ----------------------------------------------------------------------------------------------------
/// Indicates the type of option: `Call` or `Put`
#[derive(Copy, Clone, Encode, Decode, Debug, Eq, PartialEq, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum OptionType {
    Call,
    Put,
}

/// Lifecycle of an option. `Exercised` and `Expired` are terminal.
#[derive(Copy, Clone, Encode, Decode, Debug, Eq, PartialEq, TypeInfo, MaxEncodedLen)]
pub enum OptionState {
    Active,
    Exercised,
    Expired,
}

// ----------------------------------------------------------------------------------------------------
//		Trait
// ----------------------------------------------------------------------------------------------------
pub trait PooledOptions {
    type AccountId;
    type Balance;
    type Moment;
    type OptionId;

    fn create(
        from: &Self::AccountId,
        period: Self::Moment,
        amount: Self::Balance,
        strike: Self::Balance,
        max_fee: Self::Balance,
    ) -> Result<Self::OptionId, DispatchError>;

    /// Returns the profit paid to the holder.
    fn exercise(
        from: &Self::AccountId,
        option_id: Self::OptionId,
    ) -> Result<Self::Balance, DispatchError>;

    fn unlock(option_id: Self::OptionId) -> Result<(), DispatchError>;

    /// Returns exactly the ids that moved to `Expired`; ineligible ids are skipped.
    fn unlock_all(option_ids: Vec<Self::OptionId>) -> Vec<Self::OptionId>;
}
