use crate::pooled_options::OptionType;
use frame_support::pallet_prelude::*;

/// Breakdown of the amount a buyer pays for an option.
#[derive(Clone, Copy, Encode, Decode, Debug, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct Fees<Balance> {
    /// Amount charged to the buyer: `settlement_fee + premium`.
    pub total: Balance,
    /// Protocol revenue, 1% of the option amount. Never credited to the pool.
    pub settlement_fee: Balance,
    /// Pool yield, credited to the pool once the option is exercised or expires.
    pub premium: Balance,
}

pub trait OptionsPricing {
    type Balance;
    type Moment;

    /// Compute the fees for an option of `amount` underlying units, lasting `period`,
    /// struck at `strike` while the underlying trades at `spot`.
    fn fees(
        option_type: OptionType,
        period: Self::Moment,
        amount: Self::Balance,
        strike: Self::Balance,
        spot: Self::Balance,
    ) -> Result<Fees<Self::Balance>, DispatchError>;
}
