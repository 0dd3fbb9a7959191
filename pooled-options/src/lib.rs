//! # Pooled Options Pallet
//!
//! ## Overview
//! This pallet sells call or put options backed by a shared liquidity pool. Buyers pay a fee
//! computed by the options pricing pallet; the pool acts as the counterparty of every option,
//! locking collateral when an option is created and releasing it when the option is exercised or
//! expires.
//!
//! The pallet is instantiable: one instance sells calls against the pool of the underlying asset,
//! another one sells puts against the pool of the stablecoin. Each instance owns exactly one pool.
//!
//! ### Terminology
//! - **Strike**: the price at which the holder can buy (call) or sell (put) the underlying asset,
//!   with [`PRICE_UNIT`](traits::price_oracle::PRICE_UNIT) decimals.
//! - **Amount**: the number of underlying units covered by the option.
//! - **Locked amount**: collateral reserved in the pool for the option. `amount` for a call,
//!   `amount * strike / PRICE_UNIT` for a put.
//! - **Premium**: pool yield paid by the buyer, credited to the pool when the option is closed.
//! - **Settlement fee**: 1% of the amount, paid to the settlement fee recipient.
//! - **Fees** are quoted by the pricing pallet in units of the underlying asset. The put engine
//!   charges them in the stablecoin of its pool, valued at the current price.
//! - **Activation delay**: minimum time between creation and exercise of an option.
//!
//! ### Option lifecycle
//! ```text
//!             create              exercise (holder, activated, not expired)
//!   (none) ----------> Active ---------------------------------------------> Exercised
//!                        |
//!                        |  unlock (anyone, expired)
//!                        +--------------------------------------------------> Expired
//! ```
//! Both `Exercised` and `Expired` are terminal.
//!
//! ### Implementations
//! - [`PooledOptions`](traits::pooled_options::PooledOptions)
//!
//! ## Interface
//!
//! ### Extrinsics
//! - [`create`](Pallet::create): buy a new option.
//!
//! - [`exercise`](Pallet::exercise): exercise an active option and collect its payoff.
//!
//! - [`unlock`](Pallet::unlock): close an expired option, releasing its collateral.
//!
//! - [`unlock_all`](Pallet::unlock_all): close a batch of expired options, skipping the
//!   ineligible ones.
//!
//! - [`set_settlement_fee_recipient`](Pallet::set_settlement_fee_recipient): change the account
//!   collecting settlement fees.
//!
//! ### Runtime Storage Objects
//! - [`Options`]: maps an [`OptionId`] to its option.
//! - [`NextOptionId`]: id of the next option to create.
//! - [`SettlementFeeRecipient`]: account collecting settlement fees.
//!
//! ## Related Modules
//! - [`Liquidity Pool Pallet`](../pallet_liquidity_pool/index.html)
//! - [`Options Pricing Pallet`](../pallet_options_pricing/index.html)

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
mod types;
mod weights;


#[cfg(test)]
mod tests;

pub use pallet::*;
pub use types::PooledOption;

#[frame_support::pallet]
pub mod pallet {
	// ----------------------------------------------------------------------------------------------------
	//		Imports and Dependencies
	// ----------------------------------------------------------------------------------------------------
	use crate::{types::*, weights::*};

	use traits::{
		liquidity_pool::LiquidityPool,
		options_pricing::{Fees, OptionsPricing},
		pooled_options::{OptionState, OptionType, PooledOptions},
		price_oracle::{PriceOracle, PRICE_UNIT},
	};

	use frame_support::{
		pallet_prelude::*,
		traits::{
			fungible::{Inspect, Transfer},
			EnsureOrigin, Time,
		},
		transactional, PalletId,
	};
	use frame_system::{ensure_signed, pallet_prelude::*};
	use helpers::math::multiply_by_rational;
	use sp_arithmetic::Rounding;
	use sp_runtime::{
		traits::{AccountIdConversion, AtLeast32BitUnsigned, CheckedAdd, Zero},
		ArithmeticError, DispatchError,
	};
	use sp_std::vec::Vec;

	pub(crate) const LOG_TARGET: &str = "runtime::pooled-options";

	// ----------------------------------------------------------------------------------------------------
	//		Declaration Of The Pallet Type
	// ----------------------------------------------------------------------------------------------------
	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T, I = ()>(PhantomData<(T, I)>);

	// ----------------------------------------------------------------------------------------------------
	//		Config Trait
	// ----------------------------------------------------------------------------------------------------
	#[pallet::config]
	pub trait Config<I: 'static = ()>: frame_system::Config {
		#[allow(missing_docs)]
		type Event: From<Event<Self, I>> + IsType<<Self as frame_system::Config>::Event>;

		type WeightInfo: WeightInfo;

		/// Asset used to pay fees. Must be the asset held by [`Pool`](Config::Pool).
		type Currency: Inspect<AccountIdOf<Self>> + Transfer<AccountIdOf<Self>>;

		/// Type of time moment.
		type Moment: AtLeast32BitUnsigned + Parameter + Copy + MaxEncodedLen;

		/// The Unix time provider.
		type Time: Time<Moment = MomentOf<Self, I>>;

		/// The id used as `AccountId` for the engine. The pool of this engine must be controlled
		/// by this account.
		#[pallet::constant]
		type PalletId: Get<PalletId>;

		/// Whether this engine sells calls or puts.
		#[pallet::constant]
		type OptionKind: Get<OptionType>;

		/// Pool collateralizing the options.
		type Pool: LiquidityPool<AccountId = AccountIdOf<Self>, Balance = BalanceOf<Self, I>>;

		/// Price of the underlying asset.
		type Oracle: PriceOracle<Balance = BalanceOf<Self, I>>;

		/// Premium model.
		type Pricing: OptionsPricing<Balance = BalanceOf<Self, I>, Moment = MomentOf<Self, I>>;

		/// Protocol Origin that can change the settlement fee recipient.
		type ProtocolOrigin: EnsureOrigin<Self::Origin>;

		/// Minimum time between the creation and the exercise of an option.
		#[pallet::constant]
		type ActivationDelay: Get<MomentOf<Self, I>>;

		#[pallet::constant]
		type MinPeriod: Get<MomentOf<Self, I>>;

		#[pallet::constant]
		type MaxPeriod: Get<MomentOf<Self, I>>;

		/// Maximum number of options closed by a single [`unlock_all`](Pallet::unlock_all).
		#[pallet::constant]
		type MaxUnlockBatch: Get<u32>;
	}

	// ----------------------------------------------------------------------------------------------------
	//		Internal Pallet Types
	// ----------------------------------------------------------------------------------------------------
	pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
	pub type BalanceOf<T, I = ()> =
		<<T as Config<I>>::Currency as Inspect<AccountIdOf<T>>>::Balance;
	pub type MomentOf<T, I = ()> = <T as Config<I>>::Moment;
	pub type OptionId = u64;
	pub type OptionOf<T, I = ()> = PooledOption<AccountIdOf<T>, BalanceOf<T, I>, MomentOf<T, I>>;
	pub type FeesOf<T, I = ()> = Fees<BalanceOf<T, I>>;

	// ----------------------------------------------------------------------------------------------------
	//		Storage
	// ----------------------------------------------------------------------------------------------------
	/// Maps [`OptionId`] to the corresponding option.
	#[pallet::storage]
	#[pallet::getter(fn options)]
	pub type Options<T: Config<I>, I: 'static = ()> =
		StorageMap<_, Blake2_128Concat, OptionId, OptionOf<T, I>>;

	/// Id assigned to the next created option. Ids start at zero.
	#[pallet::storage]
	#[pallet::getter(fn next_option_id)]
	pub type NextOptionId<T: Config<I>, I: 'static = ()> = StorageValue<_, OptionId, ValueQuery>;

	/// Account collecting settlement fees. The engine account when unset.
	#[pallet::storage]
	pub type SettlementFeeRecipient<T: Config<I>, I: 'static = ()> =
		StorageValue<_, AccountIdOf<T>>;

	// ----------------------------------------------------------------------------------------------------
	//		Events
	// ----------------------------------------------------------------------------------------------------
	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config<I>, I: 'static = ()> {
		/// Emitted after a successful call to the [`create`](Pallet::create) extrinsic.
		/// `total_fee` and `settlement_fee` are quoted in the underlying asset, `paid` is the
		/// amount of [`Currency`](Config::Currency) charged to the buyer.
		Create {
			option_id: OptionId,
			account: AccountIdOf<T>,
			total_fee: BalanceOf<T, I>,
			settlement_fee: BalanceOf<T, I>,
			paid: BalanceOf<T, I>,
		},

		/// Emitted after a successful call to the [`exercise`](Pallet::exercise) extrinsic.
		Exercise { option_id: OptionId, profit: BalanceOf<T, I> },

		/// Emitted for every option closed by [`unlock`](Pallet::unlock) or
		/// [`unlock_all`](Pallet::unlock_all).
		Expire { option_id: OptionId, premium: BalanceOf<T, I> },

		/// Emitted after a successful call to the
		/// [`set_settlement_fee_recipient`](Pallet::set_settlement_fee_recipient) extrinsic.
		SettlementFeeRecipientUpdated { recipient: AccountIdOf<T> },
	}

	// ----------------------------------------------------------------------------------------------------
	//		Errors
	// ----------------------------------------------------------------------------------------------------
	#[pallet::error]
	pub enum Error<T, I = ()> {
		/// Raised when the option id is unknown.
		OptionDoesNotExist,

		/// Raised when exercising an option not owned by the caller.
		WrongCaller,

		/// Raised when exercising or unlocking an option already exercised or expired.
		NotActive,

		/// Raised when unlocking an option before its expiration.
		NotExpired,

		/// Raised when exercising an option before the end of its activation delay.
		NotActivated,

		/// Raised when exercising an option at or after its expiration.
		OptionExpired,

		/// Raised when creating an option with a period shorter than the minimum.
		PeriodTooShort,

		/// Raised when creating an option with a period longer than the maximum.
		PeriodTooLong,

		/// Raised when creating an option of zero amount.
		ZeroAmount,

		/// Raised when creating an option with a zero strike.
		InvalidStrike,

		/// Raised when the buyer does not accept or cannot pay the option fees.
		InsufficientPayment,

		/// Raised when the pool cannot collateralize the option.
		InsufficientLiquidity,

		/// Raised when exercising a call whose strike is above the current price.
		PriceTooLow,

		/// Raised when exercising a put whose strike is below the current price.
		PriceTooHigh,

		/// Raised when the oracle reports a zero price.
		InvalidPrice,

		/// Raised when the payoff of an option exceeds its locked collateral.
		PayoffExceedsCollateral,
	}

	// ----------------------------------------------------------------------------------------------------
	//		Extrinsics
	// ----------------------------------------------------------------------------------------------------
	#[pallet::call]
	impl<T: Config<I>, I: 'static> Pallet<T, I> {
		/// Buy a new option from the pool.
		///
		/// # Overview
		/// ## Parameters
		/// - `origin`: type representing the origin of this dispatch.
		/// - `period`: option lifetime, starting now.
		/// - `amount`: underlying units covered by the option.
		/// - `strike`: strike price, with `PRICE_UNIT` decimals.
		/// - `max_fee`: maximum total fee, in the pool asset, the buyer accepts to pay.
		///
		/// ## Requirements
		/// 1. The call must have been signed by the user.
		/// 2. `period` must lie between `MinPeriod` and `MaxPeriod`.
		/// 3. `amount` and `strike` must be greater than zero.
		/// 4. The total fee must not exceed `max_fee` and the user must be able to pay it.
		/// 5. The pool must have enough available balance to lock the collateral.
		///
		/// ## Emits
		/// - [`Event::Create`]
		///
		/// ## State Changes
		/// - Inserts the option in [`Options`] and increments [`NextOptionId`].
		/// - Transfers the settlement fee to the settlement fee recipient.
		/// - Transfers the premium to the pool and locks the collateral.
		///
		/// ## Errors
		/// - [`PeriodTooShort`](Error::PeriodTooShort)
		/// - [`PeriodTooLong`](Error::PeriodTooLong)
		/// - [`ZeroAmount`](Error::ZeroAmount)
		/// - [`InvalidStrike`](Error::InvalidStrike)
		/// - [`InvalidPrice`](Error::InvalidPrice)
		/// - [`InsufficientPayment`](Error::InsufficientPayment)
		/// - [`InsufficientLiquidity`](Error::InsufficientLiquidity)
		///
		/// # Weight: O(1)
		#[pallet::weight(<T as Config<I>>::WeightInfo::create())]
		pub fn create(
			origin: OriginFor<T>,
			period: MomentOf<T, I>,
			amount: BalanceOf<T, I>,
			strike: BalanceOf<T, I>,
			max_fee: BalanceOf<T, I>,
		) -> DispatchResult {
			let from = ensure_signed(origin)?;

			<Self as PooledOptions>::create(&from, period, amount, strike, max_fee)?;

			Ok(())
		}

		/// Exercise an option, paying its payoff to the holder.
		///
		/// # Overview
		/// ## Parameters
		/// - `origin`: type representing the origin of this dispatch.
		/// - `option_id`: id of the option to exercise.
		///
		/// ## Requirements
		/// 1. The call must have been signed by the holder of the option.
		/// 2. The activation delay must be over and the option must not be expired.
		/// 3. The option must be active.
		/// 4. The option must be in the money: price above strike for a call, below strike for
		///    a put.
		///
		/// ## Emits
		/// - [`Event::Exercise`]
		///
		/// ## State Changes
		/// - Marks the option as `Exercised`.
		/// - Releases the collateral, credits the premium to the pool and pays the payoff.
		///
		/// ## Errors
		/// - [`OptionDoesNotExist`](Error::OptionDoesNotExist)
		/// - [`NotActivated`](Error::NotActivated)
		/// - [`WrongCaller`](Error::WrongCaller)
		/// - [`OptionExpired`](Error::OptionExpired)
		/// - [`NotActive`](Error::NotActive)
		/// - [`PriceTooLow`](Error::PriceTooLow)
		/// - [`PriceTooHigh`](Error::PriceTooHigh)
		///
		/// # Weight: O(1)
		#[pallet::weight(<T as Config<I>>::WeightInfo::exercise())]
		pub fn exercise(origin: OriginFor<T>, option_id: OptionId) -> DispatchResult {
			let from = ensure_signed(origin)?;

			<Self as PooledOptions>::exercise(&from, option_id)?;

			Ok(())
		}

		/// Close an expired option. Anyone can call it.
		///
		/// ## Emits
		/// - [`Event::Expire`]
		///
		/// ## Errors
		/// - [`OptionDoesNotExist`](Error::OptionDoesNotExist)
		/// - [`NotExpired`](Error::NotExpired)
		/// - [`NotActive`](Error::NotActive)
		#[pallet::weight(<T as Config<I>>::WeightInfo::unlock())]
		pub fn unlock(origin: OriginFor<T>, option_id: OptionId) -> DispatchResult {
			let _ = ensure_signed(origin)?;

			<Self as PooledOptions>::unlock(option_id)
		}

		/// Close every expired option of the batch. Ineligible ids are skipped, the call
		/// succeeds even if no option is closed.
		///
		/// ## Emits
		/// - [`Event::Expire`] for each closed option.
		///
		/// # Weight: O(n) where n is the batch size
		#[pallet::weight(<T as Config<I>>::WeightInfo::unlock_all(option_ids.len() as u32))]
		pub fn unlock_all(
			origin: OriginFor<T>,
			option_ids: BoundedVec<OptionId, T::MaxUnlockBatch>,
		) -> DispatchResult {
			let _ = ensure_signed(origin)?;

			let unlocked = <Self as PooledOptions>::unlock_all(option_ids.into_inner());

			log::debug!(target: LOG_TARGET, "unlocked options {:?}", unlocked);

			Ok(())
		}

		/// Change the account collecting settlement fees.
		///
		/// ## Requirements
		/// 1. The call must come from the protocol origin.
		///
		/// ## Emits
		/// - [`Event::SettlementFeeRecipientUpdated`]
		#[pallet::weight(<T as Config<I>>::WeightInfo::set_settlement_fee_recipient())]
		pub fn set_settlement_fee_recipient(
			origin: OriginFor<T>,
			recipient: AccountIdOf<T>,
		) -> DispatchResult {
			// Check if it's protocol to call the extrinsic
			T::ProtocolOrigin::ensure_origin(origin)?;

			SettlementFeeRecipient::<T, I>::put(&recipient);

			Self::deposit_event(Event::SettlementFeeRecipientUpdated { recipient });

			Ok(())
		}
	}

	// ----------------------------------------------------------------------------------------------------
	//		PooledOptions Trait
	// ----------------------------------------------------------------------------------------------------
	impl<T: Config<I>, I: 'static> PooledOptions for Pallet<T, I> {
		type AccountId = AccountIdOf<T>;
		type Balance = BalanceOf<T, I>;
		type Moment = MomentOf<T, I>;
		type OptionId = OptionId;

		#[transactional]
		fn create(
			from: &AccountIdOf<T>,
			period: MomentOf<T, I>,
			amount: BalanceOf<T, I>,
			strike: BalanceOf<T, I>,
			max_fee: BalanceOf<T, I>,
		) -> Result<OptionId, DispatchError> {
			Self::do_create(from, period, amount, strike, max_fee)
		}

		#[transactional]
		fn exercise(
			from: &AccountIdOf<T>,
			option_id: OptionId,
		) -> Result<BalanceOf<T, I>, DispatchError> {
			Self::do_exercise(from, option_id)
		}

		#[transactional]
		fn unlock(option_id: OptionId) -> Result<(), DispatchError> {
			Self::do_unlock(option_id)
		}

		fn unlock_all(option_ids: Vec<OptionId>) -> Vec<OptionId> {
			option_ids
				.into_iter()
				.filter(|&option_id| match <Self as PooledOptions>::unlock(option_id) {
					Ok(()) => true,
					Err(error) => {
						log::debug!(
							target: LOG_TARGET,
							"skipping option {:?}: {:?}",
							option_id,
							error
						);
						false
					},
				})
				.collect()
		}
	}

	// ----------------------------------------------------------------------------------------------------
	//		Internal Pallet Functions
	// ----------------------------------------------------------------------------------------------------
	impl<T: Config<I>, I: 'static> Pallet<T, I> {
		/// Account of the engine, controller of its pool.
		pub fn account_id() -> AccountIdOf<T> {
			T::PalletId::get().into_account_truncating()
		}

		pub fn settlement_fee_recipient() -> AccountIdOf<T> {
			SettlementFeeRecipient::<T, I>::get().unwrap_or_else(Self::account_id)
		}

		/// Fees of an option created now, at the current oracle price, quoted in units of the
		/// underlying asset.
		pub fn fees(
			period: MomentOf<T, I>,
			amount: BalanceOf<T, I>,
			strike: BalanceOf<T, I>,
		) -> Result<FeesOf<T, I>, DispatchError> {
			let spot = Self::latest_price()?;

			T::Pricing::fees(T::OptionKind::get(), period, amount, strike, spot)
		}

		/// Fees of an option created now, in [`Currency`](Config::Currency). This is what
		/// [`create`](Pallet::create) charges.
		pub fn charged_fees(
			period: MomentOf<T, I>,
			amount: BalanceOf<T, I>,
			strike: BalanceOf<T, I>,
		) -> Result<FeesOf<T, I>, DispatchError> {
			let spot = Self::latest_price()?;
			let fees = T::Pricing::fees(T::OptionKind::get(), period, amount, strike, spot)?;

			Self::to_settlement_asset(fees, spot)
		}

		/// Converts fees quoted in the underlying asset into the asset of the pool.
		///
		/// Calls settle in the underlying itself. Puts settle in the stablecoin, so fees are
		/// valued at `spot`, rounding against the buyer.
		pub(crate) fn to_settlement_asset(
			fees: FeesOf<T, I>,
			spot: BalanceOf<T, I>,
		) -> Result<FeesOf<T, I>, DispatchError> {
			match T::OptionKind::get() {
				OptionType::Call => Ok(fees),
				OptionType::Put => {
					let price_unit = BalanceOf::<T, I>::from(PRICE_UNIT);
					let premium =
						multiply_by_rational(fees.premium, spot, price_unit, Rounding::Up)?;
					let settlement_fee =
						multiply_by_rational(fees.settlement_fee, spot, price_unit, Rounding::Up)?;
					let total =
						premium.checked_add(&settlement_fee).ok_or(ArithmeticError::Overflow)?;

					Ok(Fees { total, settlement_fee, premium })
				},
			}
		}

		fn latest_price() -> Result<BalanceOf<T, I>, DispatchError> {
			let price = T::Oracle::latest_price()?;

			ensure!(!price.is_zero(), Error::<T, I>::InvalidPrice);

			Ok(price)
		}

		/// Collateral covering the deepest in-the-money payoff of an option.
		pub(crate) fn collateral(
			amount: BalanceOf<T, I>,
			strike: BalanceOf<T, I>,
		) -> Result<BalanceOf<T, I>, DispatchError> {
			match T::OptionKind::get() {
				OptionType::Call => Ok(amount),
				OptionType::Put => Ok(multiply_by_rational(
					amount,
					strike,
					BalanceOf::<T, I>::from(PRICE_UNIT),
					Rounding::Down,
				)?),
			}
		}

		pub(crate) fn payoff(
			option: &OptionOf<T, I>,
			price: BalanceOf<T, I>,
		) -> Result<BalanceOf<T, I>, DispatchError> {
			match T::OptionKind::get() {
				OptionType::Call => {
					ensure!(price >= option.strike, Error::<T, I>::PriceTooLow);

					Ok(multiply_by_rational(
						option.amount,
						price - option.strike,
						price,
						Rounding::Down,
					)?)
				},
				OptionType::Put => {
					ensure!(price <= option.strike, Error::<T, I>::PriceTooHigh);

					Ok(multiply_by_rational(
						option.amount,
						option.strike - price,
						BalanceOf::<T, I>::from(PRICE_UNIT),
						Rounding::Down,
					)?)
				},
			}
		}

		fn do_create(
			from: &AccountIdOf<T>,
			period: MomentOf<T, I>,
			amount: BalanceOf<T, I>,
			strike: BalanceOf<T, I>,
			max_fee: BalanceOf<T, I>,
		) -> Result<OptionId, DispatchError> {
			ensure!(period >= T::MinPeriod::get(), Error::<T, I>::PeriodTooShort);
			ensure!(period <= T::MaxPeriod::get(), Error::<T, I>::PeriodTooLong);
			ensure!(!amount.is_zero(), Error::<T, I>::ZeroAmount);
			ensure!(!strike.is_zero(), Error::<T, I>::InvalidStrike);

			let spot = Self::latest_price()?;
			let quote = T::Pricing::fees(T::OptionKind::get(), period, amount, strike, spot)?;
			let fees = Self::to_settlement_asset(quote, spot)?;

			ensure!(max_fee >= fees.total, Error::<T, I>::InsufficientPayment);
			ensure!(
				T::Currency::reducible_balance(from, true) >= fees.total,
				Error::<T, I>::InsufficientPayment
			);

			let locked_amount = Self::collateral(amount, strike)?;
			ensure!(
				T::Pool::available_balance()? >= locked_amount,
				Error::<T, I>::InsufficientLiquidity
			);

			let now = T::Time::now();
			let expiration = now.checked_add(&period).ok_or(ArithmeticError::Overflow)?;

			let option_id = Self::next_option_id();
			NextOptionId::<T, I>::put(option_id.checked_add(1).ok_or(ArithmeticError::Overflow)?);

			Options::<T, I>::insert(
				option_id,
				PooledOption {
					state: OptionState::Active,
					holder: from.clone(),
					strike,
					amount,
					locked_amount,
					premium: fees.premium,
					created_at: now,
					expiration,
				},
			);

			// Ledger first, then the transfers
			if !fees.settlement_fee.is_zero() {
				T::Currency::transfer(
					from,
					&Self::settlement_fee_recipient(),
					fees.settlement_fee,
					true,
				)?;
			}
			T::Pool::lock(&Self::account_id(), from, locked_amount, fees.premium)?;

			log::debug!(
				target: LOG_TARGET,
				"created option {:?} for {:?}: locked {:?}, fees {:?}",
				option_id,
				from,
				locked_amount,
				fees
			);

			Self::deposit_event(Event::Create {
				option_id,
				account: from.clone(),
				total_fee: quote.total,
				settlement_fee: quote.settlement_fee,
				paid: fees.total,
			});

			Ok(option_id)
		}

		fn do_exercise(
			from: &AccountIdOf<T>,
			option_id: OptionId,
		) -> Result<BalanceOf<T, I>, DispatchError> {
			let mut option = Self::options(option_id).ok_or(Error::<T, I>::OptionDoesNotExist)?;

			let now = T::Time::now();
			let activation = option
				.created_at
				.checked_add(&T::ActivationDelay::get())
				.ok_or(ArithmeticError::Overflow)?;

			ensure!(now >= activation, Error::<T, I>::NotActivated);
			ensure!(option.holder == *from, Error::<T, I>::WrongCaller);
			ensure!(now < option.expiration, Error::<T, I>::OptionExpired);
			ensure!(option.is_active(), Error::<T, I>::NotActive);

			let price = Self::latest_price()?;
			let profit = Self::payoff(&option, price)?;

			ensure!(profit <= option.locked_amount, Error::<T, I>::PayoffExceedsCollateral);

			option.state = OptionState::Exercised;
			Options::<T, I>::insert(option_id, &option);

			let engine = Self::account_id();
			T::Pool::unlock(&engine, option.locked_amount, option.premium)?;
			T::Pool::send(&engine, from, profit)?;

			log::debug!(
				target: LOG_TARGET,
				"exercised option {:?} at price {:?}, profit {:?}",
				option_id,
				price,
				profit
			);

			Self::deposit_event(Event::Exercise { option_id, profit });

			Ok(profit)
		}

		fn do_unlock(option_id: OptionId) -> DispatchResult {
			let mut option = Self::options(option_id).ok_or(Error::<T, I>::OptionDoesNotExist)?;

			ensure!(T::Time::now() >= option.expiration, Error::<T, I>::NotExpired);
			ensure!(option.is_active(), Error::<T, I>::NotActive);

			option.state = OptionState::Expired;
			Options::<T, I>::insert(option_id, &option);

			T::Pool::unlock(&Self::account_id(), option.locked_amount, option.premium)?;

			log::debug!(target: LOG_TARGET, "expired option {:?}", option_id);

			Self::deposit_event(Event::Expire { option_id, premium: option.premium });

			Ok(())
		}
	}
}
