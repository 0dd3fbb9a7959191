//! # Options Pricing Pallet
//!
//! ## Overview
//! This pallet prices the options sold by the pooled options engines. Given the option type,
//! its period, its amount, its strike and the current spot price of the underlying asset, it
//! returns the [`Fees`](traits::options_pricing::Fees) the buyer has to pay.
//!
//! ### Pricing curve
//! All values are integers, every division rounds down.
//! - `period_fee` grows with the square root of the period (in seconds) and with the
//!   [`ImpliedVolRate`]:
//!   - Call: `amount * sqrt(period) * iv_rate * spot / (strike * PRICE_UNIT)`
//!   - Put: `amount * sqrt(period) * iv_rate * strike / (spot * PRICE_UNIT)`
//! - `strike_fee` is the intrinsic value of the option at creation:
//!   - Call: `(spot - strike) * amount / spot` when `strike < spot`
//!   - Put: `(strike - spot) * amount / spot` when `strike > spot`
//! - `premium = max(period_fee + strike_fee, 1)`, so an option is never free.
//! - `settlement_fee = amount / 100`.
//! - `total = premium + settlement_fee`.
//!
//! The curve makes call premiums strictly decreasing and put premiums strictly increasing in
//! the strike, for a fixed amount and period.
//!
//! ### Implementations
//! - [`OptionsPricing`](traits::options_pricing::OptionsPricing)
//!
//! ## Interface
//!
//! ### Extrinsics
//! - [`update_implied_vol_rate`](Pallet::update_implied_vol_rate): sets the implied volatility
//!   rate used by the period fee.
//!
//! ### Runtime Storage Objects
//! - [`ImpliedVolRate`]: the implied volatility rate.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(
	not(test),
	deny(
		clippy::disallowed_methods,
		clippy::disallowed_types,
		clippy::indexing_slicing,
		clippy::todo,
		clippy::unwrap_used,
		clippy::panic
	)
)] // allow in tests
#![deny(
	dead_code,
	bad_style,
	bare_trait_objects,
	improper_ctypes,
	non_shorthand_field_patterns,
	no_mangle_generic_items,
	overflowing_literals,
	path_statements,
	patterns_in_fns_without_body,
	unconditional_recursion,
	unused_allocation,
	unused_comparisons,
	unused_parens,
	while_true,
	trivial_casts,
	trivial_numeric_casts,
	unused_extern_crates
)]

pub use crate::weights::WeightInfo;
mod weights;



pub use pallet::*;

#[frame_support::pallet]
pub mod pallet {
	// ----------------------------------------------------------------------------------------------------
	//		Imports and Dependencies
	// ----------------------------------------------------------------------------------------------------
	use crate::weights::*;

	use traits::{
		options_pricing::{Fees, OptionsPricing},
		pooled_options::OptionType,
		price_oracle::PRICE_UNIT,
	};

	use frame_support::{
		pallet_prelude::*,
		traits::{tokens::Balance as BalanceT, EnsureOrigin},
	};
	use frame_system::pallet_prelude::*;
	use helpers::math::{integer_sqrt, multiply_by_rational};
	use sp_arithmetic::Rounding;
	use sp_runtime::{
		traits::{AtLeast32BitUnsigned, CheckedAdd, CheckedDiv, CheckedMul, One, Zero},
		ArithmeticError, DispatchError,
	};

	pub(crate) const LOG_TARGET: &str = "runtime::options-pricing";

	/// Implied volatility rate used when none is set at genesis.
	pub const DEFAULT_IMPLIED_VOL_RATE: u32 = 5_500;

	// ----------------------------------------------------------------------------------------------------
	//		Declaration Of The Pallet Type
	// ----------------------------------------------------------------------------------------------------
	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	// ----------------------------------------------------------------------------------------------------
	//		Config Trait
	// ----------------------------------------------------------------------------------------------------
	#[pallet::config]
	pub trait Config: frame_system::Config {
		#[allow(missing_docs)]
		type Event: From<Event<Self>> + IsType<<Self as frame_system::Config>::Event>;

		type WeightInfo: WeightInfo;

		/// Balance type of option amounts, strikes and prices.
		type Balance: BalanceT;

		/// Type of time moment, used for option periods.
		type Moment: AtLeast32BitUnsigned + Parameter + Copy + MaxEncodedLen;

		/// Number of [`Moment`](Config::Moment) units in one second.
		#[pallet::constant]
		type MomentsPerSecond: Get<Self::Moment>;

		/// Protocol Origin that can update the implied volatility rate.
		type ProtocolOrigin: EnsureOrigin<Self::Origin>;
	}

	// ----------------------------------------------------------------------------------------------------
	//		Internal Pallet Types
	// ----------------------------------------------------------------------------------------------------
	pub type BalanceOf<T> = <T as Config>::Balance;
	pub type MomentOf<T> = <T as Config>::Moment;
	pub type FeesOf<T> = Fees<BalanceOf<T>>;

	// ----------------------------------------------------------------------------------------------------
	//		Storage
	// ----------------------------------------------------------------------------------------------------
	#[pallet::type_value]
	pub fn DefaultImpliedVolRate() -> u32 {
		DEFAULT_IMPLIED_VOL_RATE
	}

	/// Implied volatility rate, scaled so that `amount * sqrt(seconds) * rate / PRICE_UNIT` is the
	/// at-the-money period fee.
	#[pallet::storage]
	#[pallet::getter(fn implied_vol_rate)]
	pub type ImpliedVolRate<T: Config> = StorageValue<_, u32, ValueQuery, DefaultImpliedVolRate>;

	// ----------------------------------------------------------------------------------------------------
	//		Events
	// ----------------------------------------------------------------------------------------------------
	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// Emitted after a successful call to the
		/// [`update_implied_vol_rate`](Pallet::update_implied_vol_rate) extrinsic.
		ImpliedVolRateUpdated { implied_vol_rate: u32 },
	}

	// ----------------------------------------------------------------------------------------------------
	//		Errors
	// ----------------------------------------------------------------------------------------------------
	#[pallet::error]
	pub enum Error<T> {
		/// Raised when pricing an option of zero amount.
		ZeroAmount,

		/// Raised when pricing an option of zero period.
		ZeroPeriod,

		/// Raised when either the strike or the spot price is zero.
		InvalidPrice,

		/// Raised when trying to set a zero implied volatility rate.
		InvalidImpliedVolRate,
	}

	// ----------------------------------------------------------------------------------------------------
	//		Genesis Build
	// ----------------------------------------------------------------------------------------------------
	#[pallet::genesis_config]
	pub struct GenesisConfig {
		pub implied_vol_rate: u32,
	}

	#[cfg(feature = "std")]
	impl Default for GenesisConfig {
		fn default() -> Self {
			Self { implied_vol_rate: DEFAULT_IMPLIED_VOL_RATE }
		}
	}

	#[pallet::genesis_build]
	impl<T: Config> GenesisBuild<T> for GenesisConfig {
		fn build(&self) {
			ImpliedVolRate::<T>::set(self.implied_vol_rate);
		}
	}

	// ----------------------------------------------------------------------------------------------------
	//		Extrinsics
	// ----------------------------------------------------------------------------------------------------
	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Update the implied volatility rate used to compute period fees.
		///
		/// ## Requirements
		/// 1. The call must come from the protocol origin.
		/// 2. The rate must not be zero.
		///
		/// ## Emits
		/// - [`Event::ImpliedVolRateUpdated`]
		#[pallet::weight(<T as Config>::WeightInfo::update_implied_vol_rate())]
		pub fn update_implied_vol_rate(
			origin: OriginFor<T>,
			implied_vol_rate: u32,
		) -> DispatchResult {
			// Check if it's protocol to call the extrinsic
			T::ProtocolOrigin::ensure_origin(origin)?;

			Self::do_update_implied_vol_rate(implied_vol_rate)
		}
	}

	// ----------------------------------------------------------------------------------------------------
	//		OptionsPricing Trait
	// ----------------------------------------------------------------------------------------------------
	impl<T: Config> OptionsPricing for Pallet<T> {
		type Balance = BalanceOf<T>;
		type Moment = MomentOf<T>;

		fn fees(
			option_type: OptionType,
			period: MomentOf<T>,
			amount: BalanceOf<T>,
			strike: BalanceOf<T>,
			spot: BalanceOf<T>,
		) -> Result<FeesOf<T>, DispatchError> {
			Self::calculate_fees(
				option_type,
				period,
				amount,
				strike,
				spot,
				Self::implied_vol_rate(),
			)
		}
	}

	// ----------------------------------------------------------------------------------------------------
	//		Internal Pallet Functions
	// ----------------------------------------------------------------------------------------------------
	impl<T: Config> Pallet<T> {
		fn do_update_implied_vol_rate(implied_vol_rate: u32) -> DispatchResult {
			ensure!(implied_vol_rate != 0, Error::<T>::InvalidImpliedVolRate);

			ImpliedVolRate::<T>::set(implied_vol_rate);

			Self::deposit_event(Event::ImpliedVolRateUpdated { implied_vol_rate });

			Ok(())
		}

		/// Price an option with an explicit implied volatility rate. Does not touch storage.
		pub fn calculate_fees(
			option_type: OptionType,
			period: MomentOf<T>,
			amount: BalanceOf<T>,
			strike: BalanceOf<T>,
			spot: BalanceOf<T>,
			implied_vol_rate: u32,
		) -> Result<FeesOf<T>, DispatchError> {
			ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
			ensure!(!period.is_zero(), Error::<T>::ZeroPeriod);
			ensure!(!strike.is_zero() && !spot.is_zero(), Error::<T>::InvalidPrice);

			let settlement_fee = Self::settlement_fee(amount);

			let period_fee =
				Self::period_fee(option_type, period, amount, strike, spot, implied_vol_rate)?;
			let strike_fee = Self::strike_fee(option_type, amount, strike, spot)?;

			let premium = period_fee
				.checked_add(&strike_fee)
				.ok_or(ArithmeticError::Overflow)?
				.max(BalanceOf::<T>::one());

			let total = premium.checked_add(&settlement_fee).ok_or(ArithmeticError::Overflow)?;

			log::trace!(
				target: LOG_TARGET,
				"{:?} fees: period_fee {:?}, strike_fee {:?}, settlement_fee {:?}",
				option_type,
				period_fee,
				strike_fee,
				settlement_fee,
			);

			Ok(Fees { total, settlement_fee, premium })
		}

		/// 1% of the option amount, rounded down.
		pub fn settlement_fee(amount: BalanceOf<T>) -> BalanceOf<T> {
			amount / BalanceOf::<T>::from(100_u32)
		}

		pub(crate) fn period_fee(
			option_type: OptionType,
			period: MomentOf<T>,
			amount: BalanceOf<T>,
			strike: BalanceOf<T>,
			spot: BalanceOf<T>,
			implied_vol_rate: u32,
		) -> Result<BalanceOf<T>, DispatchError> {
			let seconds = period
				.checked_div(&T::MomentsPerSecond::get())
				.ok_or(ArithmeticError::DivisionByZero)?;
			let seconds: u128 = seconds.try_into().map_err(|_| ArithmeticError::Overflow)?;
			let sqrt_period = <BalanceOf<T> as TryFrom<u128>>::try_from(integer_sqrt(seconds))
				.map_err(|_| ArithmeticError::Overflow)?;

			let exposure = amount
				.checked_mul(&sqrt_period)
				.and_then(|x| x.checked_mul(&BalanceOf::<T>::from(implied_vol_rate)))
				.ok_or(ArithmeticError::Overflow)?;

			let price_unit = BalanceOf::<T>::from(PRICE_UNIT);

			let (numerator, denominator) = match option_type {
				OptionType::Call => (spot, strike),
				OptionType::Put => (strike, spot),
			};

			let denominator =
				denominator.checked_mul(&price_unit).ok_or(ArithmeticError::Overflow)?;

			Ok(multiply_by_rational(exposure, numerator, denominator, Rounding::Down)?)
		}

		pub(crate) fn strike_fee(
			option_type: OptionType,
			amount: BalanceOf<T>,
			strike: BalanceOf<T>,
			spot: BalanceOf<T>,
		) -> Result<BalanceOf<T>, DispatchError> {
			let intrinsic = match option_type {
				OptionType::Call if strike < spot => spot - strike,
				OptionType::Put if strike > spot => strike - spot,
				_ => return Ok(BalanceOf::<T>::zero()),
			};

			Ok(multiply_by_rational(intrinsic, amount, spot, Rounding::Down)?)
		}
	}
}
