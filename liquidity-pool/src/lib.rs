//! # Liquidity Pool Pallet
//!
//! ## Overview
//! This pallet is the counterparty of the options sold by a pooled options engine. Liquidity
//! providers deposit an asset into the pool and receive shares representing a proportional claim
//! on the pool value. The owning engine locks part of the pool as collateral for every option it
//! sells and releases it once the option is exercised or expires, crediting the option premium to
//! the pool value. Profit is distributed through the share ratio only: no per-holder bookkeeping
//! happens besides share balances.
//!
//! The pallet is instantiable: the same ledger runs once over the native currency and once over a
//! fungible token, each instance being bound to a single engine.
//!
//! ### Terminology
//! - **Share**: claim unit on the pool value, minted on deposit and burned on withdrawal.
//! - **Total balance**: assets held by the pool account minus the premium still locked by
//!   active options.
//! - **Locked amount**: collateral reserved against active options.
//! - **Available balance**: `total balance - locked amount`, what can be withdrawn or paid out.
//! - **Controller**: the account of the engine that owns the pool. Only the controller can lock,
//!   unlock and send pool funds.
//! - **Lockup period**: minimum time between the last deposit of a provider and its next
//!   withdrawal.
//!
//! ### Actors
//! - Providers: users that deposit assets into the pool and collect the premium of the options
//!   sold against it.
//! - Controller: the options engine using the pool as collateral.
//!
//! ### Implementations
//! - [`LiquidityPool`](traits::liquidity_pool::LiquidityPool)
//!
//! ## Interface
//!
//! ### Extrinsics
//! - [`provide`](Pallet::provide): deposit assets and mint shares.
//!
//! - [`withdraw`](Pallet::withdraw): burn shares and withdraw assets.
//!
//! - [`send_profit`](Pallet::send_profit): donate assets to the current shareholders.
//!
//! ### Runtime Storage Objects
//! - [`Shares`]: share balance of each provider.
//! - [`TotalShares`]: sum of all share balances.
//! - [`LockedAmount`]: collateral locked by active options.
//! - [`LockedPremium`]: premium paid by active options, not yet part of the pool value.
//! - [`LastProvideTime`]: time of the last deposit of each provider.

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

#[cfg(test)]
mod mocks;

#[cfg(test)]
mod tests;

pub use pallet::*;

#[frame_support::pallet]
pub mod pallet {
	// ----------------------------------------------------------------------------------------------------
	//		Imports and Dependencies
	// ----------------------------------------------------------------------------------------------------
	use crate::weights::*;

	use traits::liquidity_pool::LiquidityPool;

	use frame_support::{
		pallet_prelude::*,
		traits::{
			fungible::{Inspect, Transfer},
			Time,
		},
		transactional, PalletId,
	};
	use frame_system::{ensure_signed, pallet_prelude::*};
	use helpers::math::multiply_by_rational;
	use sp_arithmetic::Rounding;
	use sp_runtime::{
		traits::{AccountIdConversion, AtLeast32BitUnsigned, CheckedAdd, CheckedSub, Zero},
		ArithmeticError, DispatchError,
	};

	pub(crate) const LOG_TARGET: &str = "runtime::liquidity-pool";

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

		/// Asset held by the pool.
		type Currency: Inspect<AccountIdOf<Self>> + Transfer<AccountIdOf<Self>>;

		/// Type of time moment.
		type Moment: AtLeast32BitUnsigned + Parameter + Copy + MaxEncodedLen;

		/// The Unix time provider.
		type Time: Time<Moment = MomentOf<Self, I>>;

		/// The id used as `AccountId` for the pool.
		/// This should be unique across all pallets and instances to avoid name collisions.
		#[pallet::constant]
		type PalletId: Get<PalletId>;

		/// Minimum time between a deposit and a withdrawal of the same provider.
		#[pallet::constant]
		type LockupPeriod: Get<MomentOf<Self, I>>;

		/// Account of the engine allowed to lock, unlock and send pool funds.
		type Controller: Get<AccountIdOf<Self>>;
	}

	// ----------------------------------------------------------------------------------------------------
	//		Internal Pallet Types
	// ----------------------------------------------------------------------------------------------------
	pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
	pub type BalanceOf<T, I = ()> =
		<<T as Config<I>>::Currency as Inspect<AccountIdOf<T>>>::Balance;
	pub type MomentOf<T, I = ()> = <T as Config<I>>::Moment;

	// ----------------------------------------------------------------------------------------------------
	//		Storage
	// ----------------------------------------------------------------------------------------------------
	/// Share balance of each provider.
	#[pallet::storage]
	#[pallet::getter(fn shares)]
	pub type Shares<T: Config<I>, I: 'static = ()> =
		StorageMap<_, Blake2_128Concat, AccountIdOf<T>, BalanceOf<T, I>, ValueQuery>;

	/// Sum of all the values in [`Shares`].
	#[pallet::storage]
	#[pallet::getter(fn total_shares)]
	pub type TotalShares<T: Config<I>, I: 'static = ()> =
		StorageValue<_, BalanceOf<T, I>, ValueQuery>;

	/// Collateral reserved by active options.
	#[pallet::storage]
	#[pallet::getter(fn locked_amount)]
	pub type LockedAmount<T: Config<I>, I: 'static = ()> =
		StorageValue<_, BalanceOf<T, I>, ValueQuery>;

	/// Premium paid by active options. Held by the pool account but excluded from the pool
	/// value until the option is exercised or expires.
	#[pallet::storage]
	#[pallet::getter(fn locked_premium)]
	pub type LockedPremium<T: Config<I>, I: 'static = ()> =
		StorageValue<_, BalanceOf<T, I>, ValueQuery>;

	/// Time of the last deposit of each provider, starting its lockup period.
	#[pallet::storage]
	#[pallet::getter(fn last_provide_time)]
	pub type LastProvideTime<T: Config<I>, I: 'static = ()> =
		StorageMap<_, Blake2_128Concat, AccountIdOf<T>, MomentOf<T, I>>;

	// ----------------------------------------------------------------------------------------------------
	//		Events
	// ----------------------------------------------------------------------------------------------------
	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config<I>, I: 'static = ()> {
		/// Emitted after a successful call to the [`provide`](Pallet::provide) extrinsic.
		Provide { account: AccountIdOf<T>, amount: BalanceOf<T, I>, shares: BalanceOf<T, I> },

		/// Emitted after a successful call to the [`withdraw`](Pallet::withdraw) extrinsic.
		Withdraw { account: AccountIdOf<T>, amount: BalanceOf<T, I>, shares: BalanceOf<T, I> },

		/// Emitted when value is credited to the shareholders, either through
		/// [`send_profit`](Pallet::send_profit) or when the controller releases an option premium.
		Profit { account: AccountIdOf<T>, amount: BalanceOf<T, I> },
	}

	// ----------------------------------------------------------------------------------------------------
	//		Errors
	// ----------------------------------------------------------------------------------------------------
	#[pallet::error]
	pub enum Error<T, I = ()> {
		/// Raised when a privileged operation is not called by the pool controller.
		NotController,

		/// Raised when locking more collateral than the pool value.
		InsufficientCapacity,

		/// Raised when unlocking more collateral or premium than currently locked.
		InsufficientLocked,

		/// Raised when withdrawing or sending more than the available balance.
		InsufficientAvailable,

		/// Raised when withdrawing before the end of the lockup period.
		LockupActive,

		/// Raised when a withdrawal would burn more shares than the given limit.
		SlippageExceeded,

		/// Raised when a deposit would mint fewer shares than the given minimum.
		MintLimitExceeded,

		/// Raised when a withdrawal would burn more shares than the provider owns.
		InsufficientShares,

		/// Raised when the depositor does not own the amount to deposit.
		InsufficientFunds,

		/// Raised when sending profit to a pool without shareholders.
		NoShareholders,

		/// Raised when the amount is zero, or too small to mint or burn a share.
		ZeroAmount,
	}

	// ----------------------------------------------------------------------------------------------------
	//		Extrinsics
	// ----------------------------------------------------------------------------------------------------
	#[pallet::call]
	impl<T: Config<I>, I: 'static> Pallet<T, I> {
		/// Deposit `amount` into the pool and mint shares for the caller.
		///
		/// # Overview
		/// ## Parameters
		/// - `origin`: type representing the origin of this dispatch.
		/// - `amount`: amount of pool asset to deposit.
		/// - `min_mint`: minimum number of shares the caller accepts to receive.
		///
		/// ## Requirements
		/// 1. The call must have been signed by the user.
		/// 2. `amount` must be greater than zero and owned by the user.
		/// 3. The minted shares must be at least `min_mint`.
		///
		/// ## Emits
		/// - [`Event::Provide`]
		///
		/// ## State Changes
		/// - Updates [`Shares`], [`TotalShares`] and [`LastProvideTime`].
		/// - Transfers `amount` from the user to the pool account.
		///
		/// ## Errors
		/// - [`ZeroAmount`](Error::ZeroAmount)
		/// - [`InsufficientFunds`](Error::InsufficientFunds)
		/// - [`MintLimitExceeded`](Error::MintLimitExceeded)
		///
		/// # Weight: O(1)
		#[pallet::weight(<T as Config<I>>::WeightInfo::provide())]
		pub fn provide(
			origin: OriginFor<T>,
			amount: BalanceOf<T, I>,
			min_mint: BalanceOf<T, I>,
		) -> DispatchResult {
			let from = ensure_signed(origin)?;

			Self::do_provide(&from, amount, min_mint)?;

			Ok(())
		}

		/// Burn the caller's shares to withdraw `amount` from the pool.
		///
		/// # Overview
		/// ## Parameters
		/// - `origin`: type representing the origin of this dispatch.
		/// - `amount`: amount of pool asset to withdraw.
		/// - `max_burn`: maximum number of shares the caller accepts to burn.
		///
		/// ## Requirements
		/// 1. The call must have been signed by the user.
		/// 2. The lockup period since the user's last deposit must be over.
		/// 3. `amount` must not exceed the available balance of the pool.
		/// 4. The shares to burn, rounded up, must not exceed `max_burn` nor the user's shares.
		///
		/// ## Emits
		/// - [`Event::Withdraw`]
		///
		/// ## State Changes
		/// - Updates [`Shares`] and [`TotalShares`].
		/// - Transfers `amount` from the pool account to the user.
		///
		/// ## Errors
		/// - [`ZeroAmount`](Error::ZeroAmount)
		/// - [`LockupActive`](Error::LockupActive)
		/// - [`InsufficientAvailable`](Error::InsufficientAvailable)
		/// - [`SlippageExceeded`](Error::SlippageExceeded)
		/// - [`InsufficientShares`](Error::InsufficientShares)
		///
		/// # Weight: O(1)
		#[pallet::weight(<T as Config<I>>::WeightInfo::withdraw())]
		pub fn withdraw(
			origin: OriginFor<T>,
			amount: BalanceOf<T, I>,
			max_burn: BalanceOf<T, I>,
		) -> DispatchResult {
			let from = ensure_signed(origin)?;

			Self::do_withdraw(&from, amount, max_burn)?;

			Ok(())
		}

		/// Transfer `amount` into the pool, increasing the value of every share pro rata.
		///
		/// ## Requirements
		/// 1. The call must have been signed by the user.
		/// 2. The pool must have at least one share outstanding.
		///
		/// ## Emits
		/// - [`Event::Profit`]
		///
		/// ## Errors
		/// - [`ZeroAmount`](Error::ZeroAmount)
		/// - [`NoShareholders`](Error::NoShareholders)
		#[pallet::weight(<T as Config<I>>::WeightInfo::send_profit())]
		pub fn send_profit(origin: OriginFor<T>, amount: BalanceOf<T, I>) -> DispatchResult {
			let from = ensure_signed(origin)?;

			Self::do_send_profit(&from, amount)
		}
	}

	// ----------------------------------------------------------------------------------------------------
	//		LiquidityPool Trait
	// ----------------------------------------------------------------------------------------------------
	impl<T: Config<I>, I: 'static> LiquidityPool for Pallet<T, I> {
		type AccountId = AccountIdOf<T>;
		type Balance = BalanceOf<T, I>;

		fn total_balance() -> Result<BalanceOf<T, I>, DispatchError> {
			Self::total_balance()
		}

		fn available_balance() -> Result<BalanceOf<T, I>, DispatchError> {
			Self::available_balance()
		}

		#[transactional]
		fn lock(
			controller: &AccountIdOf<T>,
			payer: &AccountIdOf<T>,
			amount: BalanceOf<T, I>,
			premium: BalanceOf<T, I>,
		) -> DispatchResult {
			Self::ensure_controller(controller)?;

			Self::do_lock(payer, amount, premium)
		}

		#[transactional]
		fn unlock(
			controller: &AccountIdOf<T>,
			amount: BalanceOf<T, I>,
			premium: BalanceOf<T, I>,
		) -> DispatchResult {
			Self::ensure_controller(controller)?;

			Self::do_unlock(controller, amount, premium)
		}

		#[transactional]
		fn send(
			controller: &AccountIdOf<T>,
			to: &AccountIdOf<T>,
			amount: BalanceOf<T, I>,
		) -> DispatchResult {
			Self::ensure_controller(controller)?;

			Self::do_send(to, amount)
		}
	}

	// ----------------------------------------------------------------------------------------------------
	//		Internal Pallet Functions
	// ----------------------------------------------------------------------------------------------------
	impl<T: Config<I>, I: 'static> Pallet<T, I> {
		/// Account holding the pool assets.
		pub fn pool_account() -> AccountIdOf<T> {
			T::PalletId::get().into_account_truncating()
		}

		/// Pool value: assets held by the pool account minus the locked premium.
		pub fn total_balance() -> Result<BalanceOf<T, I>, DispatchError> {
			let raw_balance = T::Currency::balance(&Self::pool_account());

			Ok(raw_balance.checked_sub(&Self::locked_premium()).ok_or(ArithmeticError::Underflow)?)
		}

		/// Part of the pool value not reserved as collateral.
		pub fn available_balance() -> Result<BalanceOf<T, I>, DispatchError> {
			Ok(Self::total_balance()?
				.checked_sub(&Self::locked_amount())
				.ok_or(ArithmeticError::Underflow)?)
		}

		/// Value of the shares owned by `who`, rounded down.
		pub fn share_of(who: &AccountIdOf<T>) -> Result<BalanceOf<T, I>, DispatchError> {
			let total_shares = Self::total_shares();

			if total_shares.is_zero() {
				return Ok(BalanceOf::<T, I>::zero())
			}

			Ok(multiply_by_rational(
				Self::shares(who),
				Self::total_balance()?,
				total_shares,
				Rounding::Down,
			)?)
		}

		fn ensure_controller(controller: &AccountIdOf<T>) -> DispatchResult {
			ensure!(*controller == T::Controller::get(), Error::<T, I>::NotController);
			Ok(())
		}

		pub(crate) fn do_provide(
			from: &AccountIdOf<T>,
			amount: BalanceOf<T, I>,
			min_mint: BalanceOf<T, I>,
		) -> Result<BalanceOf<T, I>, DispatchError> {
			ensure!(!amount.is_zero(), Error::<T, I>::ZeroAmount);
			ensure!(
				T::Currency::reducible_balance(from, false) >= amount,
				Error::<T, I>::InsufficientFunds
			);

			let total_shares = Self::total_shares();
			let total_balance = Self::total_balance()?;

			let mint = if total_shares.is_zero() || total_balance.is_zero() {
				amount
			} else {
				multiply_by_rational(amount, total_shares, total_balance, Rounding::Down)?
			};

			ensure!(mint >= min_mint, Error::<T, I>::MintLimitExceeded);
			ensure!(!mint.is_zero(), Error::<T, I>::ZeroAmount);

			// Ledger first, then the transfer
			let new_total_shares =
				total_shares.checked_add(&mint).ok_or(ArithmeticError::Overflow)?;
			Shares::<T, I>::try_mutate(from, |shares| -> DispatchResult {
				*shares = shares.checked_add(&mint).ok_or(ArithmeticError::Overflow)?;
				Ok(())
			})?;
			TotalShares::<T, I>::set(new_total_shares);
			LastProvideTime::<T, I>::insert(from, T::Time::now());

			T::Currency::transfer(from, &Self::pool_account(), amount, true)?;

			log::debug!(
				target: LOG_TARGET,
				"{:?} provided {:?}, minted {:?} shares",
				from,
				amount,
				mint
			);

			Self::deposit_event(Event::Provide { account: from.clone(), amount, shares: mint });

			Ok(mint)
		}

		pub(crate) fn do_withdraw(
			to: &AccountIdOf<T>,
			amount: BalanceOf<T, I>,
			max_burn: BalanceOf<T, I>,
		) -> Result<BalanceOf<T, I>, DispatchError> {
			ensure!(!amount.is_zero(), Error::<T, I>::ZeroAmount);

			if let Some(last_provide_time) = Self::last_provide_time(to) {
				let unlock_time = last_provide_time
					.checked_add(&T::LockupPeriod::get())
					.ok_or(ArithmeticError::Overflow)?;
				ensure!(T::Time::now() >= unlock_time, Error::<T, I>::LockupActive);
			}

			ensure!(amount <= Self::available_balance()?, Error::<T, I>::InsufficientAvailable);

			let total_shares = Self::total_shares();
			let burn =
				multiply_by_rational(amount, total_shares, Self::total_balance()?, Rounding::Up)?;

			ensure!(burn <= max_burn, Error::<T, I>::SlippageExceeded);
			ensure!(burn <= Self::shares(to), Error::<T, I>::InsufficientShares);
			// No shares outstanding, nothing can be withdrawn
			ensure!(!burn.is_zero(), Error::<T, I>::InsufficientShares);

			// Ledger first, then the transfer
			Shares::<T, I>::mutate(to, |shares| *shares -= burn);
			TotalShares::<T, I>::set(total_shares - burn);

			// The pool account may only be reaped by the withdrawal burning the last shares
			let keep_alive = burn < total_shares;
			T::Currency::transfer(&Self::pool_account(), to, amount, keep_alive)?;

			log::debug!(
				target: LOG_TARGET,
				"{:?} withdrew {:?}, burned {:?} shares",
				to,
				amount,
				burn
			);

			Self::deposit_event(Event::Withdraw { account: to.clone(), amount, shares: burn });

			Ok(burn)
		}

		fn do_send_profit(from: &AccountIdOf<T>, amount: BalanceOf<T, I>) -> DispatchResult {
			ensure!(!amount.is_zero(), Error::<T, I>::ZeroAmount);
			ensure!(!Self::total_shares().is_zero(), Error::<T, I>::NoShareholders);

			T::Currency::transfer(from, &Self::pool_account(), amount, true)?;

			Self::deposit_event(Event::Profit { account: from.clone(), amount });

			Ok(())
		}

		fn do_lock(
			payer: &AccountIdOf<T>,
			amount: BalanceOf<T, I>,
			premium: BalanceOf<T, I>,
		) -> DispatchResult {
			let new_locked_amount =
				Self::locked_amount().checked_add(&amount).ok_or(ArithmeticError::Overflow)?;
			ensure!(new_locked_amount <= Self::total_balance()?, Error::<T, I>::InsufficientCapacity);

			let new_locked_premium =
				Self::locked_premium().checked_add(&premium).ok_or(ArithmeticError::Overflow)?;

			LockedAmount::<T, I>::set(new_locked_amount);
			LockedPremium::<T, I>::set(new_locked_premium);

			if !premium.is_zero() {
				T::Currency::transfer(payer, &Self::pool_account(), premium, true)?;
			}

			log::debug!(
				target: LOG_TARGET,
				"locked {:?} collateral and {:?} premium",
				amount,
				premium
			);

			Ok(())
		}

		fn do_unlock(
			controller: &AccountIdOf<T>,
			amount: BalanceOf<T, I>,
			premium: BalanceOf<T, I>,
		) -> DispatchResult {
			let new_locked_amount =
				Self::locked_amount().checked_sub(&amount).ok_or(Error::<T, I>::InsufficientLocked)?;
			let new_locked_premium = Self::locked_premium()
				.checked_sub(&premium)
				.ok_or(Error::<T, I>::InsufficientLocked)?;

			LockedAmount::<T, I>::set(new_locked_amount);
			LockedPremium::<T, I>::set(new_locked_premium);

			log::debug!(
				target: LOG_TARGET,
				"unlocked {:?} collateral and {:?} premium",
				amount,
				premium
			);

			if !premium.is_zero() {
				Self::deposit_event(Event::Profit { account: controller.clone(), amount: premium });
			}

			Ok(())
		}

		fn do_send(to: &AccountIdOf<T>, amount: BalanceOf<T, I>) -> DispatchResult {
			ensure!(amount <= Self::available_balance()?, Error::<T, I>::InsufficientAvailable);

			if !amount.is_zero() {
				T::Currency::transfer(&Self::pool_account(), to, amount, true)?;
			}

			Ok(())
		}
	}
}
