#![allow(trivial_numeric_casts)]
#![allow(clippy::unnecessary_cast)]
use frame_support::weights::Weight;
use sp_std::marker::PhantomData;

const WEIGHT: i32 = 1_000;

pub trait WeightInfo {
	fn create() -> Weight;
	fn exercise() -> Weight;
	fn unlock() -> Weight;
	fn unlock_all(n: u32) -> Weight;
	fn set_settlement_fee_recipient() -> Weight;
}

/// Weights for pallet_pooled_options using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	// Storage: Oracle price (r:1 w:0)
	// Storage: OptionsPricing ImpliedVolRate (r:1 w:0)
	// Storage: PooledOptions NextOptionId (r:1 w:1)
	// Storage: PooledOptions SettlementFeeRecipient (r:1 w:0)
	// Storage: PooledOptions Options (r:0 w:1)
	// Storage: LiquidityPool LockedAmount (r:1 w:1)
	// Storage: LiquidityPool LockedPremium (r:1 w:1)
	// Storage: System Account (r:3 w:3)
	fn create() -> Weight {
		(WEIGHT as Weight)
			.saturating_add(T::DbWeight::get().reads(9 as Weight))
			.saturating_add(T::DbWeight::get().writes(7 as Weight))
	}

	// Storage: PooledOptions Options (r:1 w:1)
	// Storage: Oracle price (r:1 w:0)
	// Storage: LiquidityPool LockedAmount (r:1 w:1)
	// Storage: LiquidityPool LockedPremium (r:1 w:1)
	// Storage: System Account (r:2 w:2)
	fn exercise() -> Weight {
		(WEIGHT as Weight)
			.saturating_add(T::DbWeight::get().reads(6 as Weight))
			.saturating_add(T::DbWeight::get().writes(5 as Weight))
	}

	// Storage: PooledOptions Options (r:1 w:1)
	// Storage: LiquidityPool LockedAmount (r:1 w:1)
	// Storage: LiquidityPool LockedPremium (r:1 w:1)
	fn unlock() -> Weight {
		(WEIGHT as Weight)
			.saturating_add(T::DbWeight::get().reads(3 as Weight))
			.saturating_add(T::DbWeight::get().writes(3 as Weight))
	}

	// Storage: PooledOptions Options (r:n w:n)
	// Storage: LiquidityPool LockedAmount (r:n w:n)
	// Storage: LiquidityPool LockedPremium (r:n w:n)
	fn unlock_all(n: u32) -> Weight {
		(WEIGHT as Weight)
			.saturating_add((WEIGHT as Weight).saturating_mul(n as Weight))
			.saturating_add(T::DbWeight::get().reads((3 as Weight).saturating_mul(n as Weight)))
			.saturating_add(T::DbWeight::get().writes((3 as Weight).saturating_mul(n as Weight)))
	}

	// Storage: PooledOptions SettlementFeeRecipient (r:0 w:1)
	fn set_settlement_fee_recipient() -> Weight {
		(WEIGHT as Weight).saturating_add(T::DbWeight::get().writes(1 as Weight))
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn create() -> Weight {
		WEIGHT as Weight
	}

	fn exercise() -> Weight {
		WEIGHT as Weight
	}

	fn unlock() -> Weight {
		WEIGHT as Weight
	}

	fn unlock_all(n: u32) -> Weight {
		(WEIGHT as Weight).saturating_mul(n as Weight)
	}

	fn set_settlement_fee_recipient() -> Weight {
		WEIGHT as Weight
	}
}
