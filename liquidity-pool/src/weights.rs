#![allow(trivial_numeric_casts)]
#![allow(clippy::unnecessary_cast)]
use frame_support::weights::Weight;
use sp_std::marker::PhantomData;

const WEIGHT: i32 = 1_000;

pub trait WeightInfo {
	fn provide() -> Weight;
	fn withdraw() -> Weight;
	fn send_profit() -> Weight;
}

/// Weights for pallet_liquidity_pool using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	// Storage: LiquidityPool TotalShares (r:1 w:1)
	// Storage: LiquidityPool LockedPremium (r:1 w:0)
	// Storage: LiquidityPool Shares (r:1 w:1)
	// Storage: LiquidityPool LastProvideTime (r:0 w:1)
	// Storage: System Account (r:2 w:2)
	fn provide() -> Weight {
		(WEIGHT as Weight)
			.saturating_add(T::DbWeight::get().reads(5 as Weight))
			.saturating_add(T::DbWeight::get().writes(5 as Weight))
	}

	// Storage: LiquidityPool LastProvideTime (r:1 w:0)
	// Storage: LiquidityPool TotalShares (r:1 w:1)
	// Storage: LiquidityPool LockedAmount (r:1 w:0)
	// Storage: LiquidityPool LockedPremium (r:1 w:0)
	// Storage: LiquidityPool Shares (r:1 w:1)
	// Storage: System Account (r:2 w:2)
	fn withdraw() -> Weight {
		(WEIGHT as Weight)
			.saturating_add(T::DbWeight::get().reads(7 as Weight))
			.saturating_add(T::DbWeight::get().writes(4 as Weight))
	}

	// Storage: LiquidityPool TotalShares (r:1 w:0)
	// Storage: System Account (r:2 w:2)
	fn send_profit() -> Weight {
		(WEIGHT as Weight)
			.saturating_add(T::DbWeight::get().reads(3 as Weight))
			.saturating_add(T::DbWeight::get().writes(2 as Weight))
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn provide() -> Weight {
		WEIGHT as Weight
	}

	fn withdraw() -> Weight {
		WEIGHT as Weight
	}

	fn send_profit() -> Weight {
		WEIGHT as Weight
	}
}
