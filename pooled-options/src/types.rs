use frame_support::pallet_prelude::*;

use traits::pooled_options::OptionState;

/// An option sold by the engine, collateralized by the pool.
#[derive(Clone, Encode, Decode, PartialEq, Eq, TypeInfo, MaxEncodedLen, RuntimeDebug)]
pub struct PooledOption<AccountId, Balance, Moment> {
	pub state: OptionState,
	pub holder: AccountId,
	/// Price at which the holder can buy (call) or sell (put) the underlying.
	pub strike: Balance,
	/// Underlying units covered by the option.
	pub amount: Balance,
	/// Collateral reserved in the pool, released verbatim when the option is closed.
	pub locked_amount: Balance,
	/// Pool yield in the pool asset, credited to the pool only when the option is closed.
	pub premium: Balance,
	pub created_at: Moment,
	pub expiration: Moment,
}

impl<AccountId, Balance, Moment> PooledOption<AccountId, Balance, Moment> {
	pub fn is_active(&self) -> bool {
		self.state == OptionState::Active
	}
}
