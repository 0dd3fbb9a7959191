#![allow(trivial_numeric_casts)]
#![allow(clippy::unnecessary_cast)]
use frame_support::weights::Weight;
use sp_std::marker::PhantomData;

const WEIGHT: i32 = 1_000;

pub trait WeightInfo {
	fn update_implied_vol_rate() -> Weight;
}

/// Weights for pallet_options_pricing using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	// Storage: OptionsPricing ImpliedVolRate (r:0 w:1)
	fn update_implied_vol_rate() -> Weight {
		(WEIGHT as Weight).saturating_add(T::DbWeight::get().writes(1 as Weight))
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn update_implied_vol_rate() -> Weight {
		WEIGHT as Weight
	}
}
