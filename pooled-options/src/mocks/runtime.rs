use crate as pallet_pooled_options;
use crate::mocks::{accounts::*, assets::*};
use frame_support::{
	instances::{Instance1, Instance2},
	ord_parameter_types, parameter_types,
	traits::{fungible::ItemOf, ConstU32, ConstU64, EitherOfDiverse, Everything, GenesisBuild},
	PalletId,
};

use frame_system::{EnsureRoot, EnsureSignedBy};
use orml_traits::parameter_type_with_key;
use sp_core::H256;
use sp_runtime::{
	testing::Header,
	traits::{AccountIdConversion, IdentityLookup},
	DispatchError,
};
use traits::{pooled_options::OptionType, price_oracle::PriceOracle};

pub type BlockNumber = u64;
pub type Balance = u128;
pub type Amount = i128;
pub type Moment = u64;
pub type CallInstance = Instance1;
pub type PutInstance = Instance2;
pub type StablecoinCurrency = ItemOf<Tokens, StablecoinAssetId, AccountId>;

pub const PRICE_UNIT: Balance = 100_000_000;
pub const MINUTE: Moment = 60_000;
pub const DAY: Moment = 24 * 60 * MINUTE;

// ----------------------------------------------------------------------------------------------------
//                                             Runtime
// ----------------------------------------------------------------------------------------------------
type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<MockRuntime>;
type Block = frame_system::mocking::MockBlock<MockRuntime>;

frame_support::construct_runtime!(
	pub enum MockRuntime where
		Block = Block,
		NodeBlock = Block,
		UncheckedExtrinsic = UncheckedExtrinsic,
	{
		System: frame_system::{Pallet, Call, Storage, Config, Event<T>},
		Timestamp: pallet_timestamp::{Pallet, Call, Storage},
		Balances: pallet_balances::{Pallet, Call, Storage, Event<T>},
		Tokens: orml_tokens::{Pallet, Storage, Event<T>, Config<T>},
		OptionsPricing: pallet_options_pricing::{Pallet, Call, Storage, Config, Event<T>},
		CallPool: pallet_liquidity_pool::<Instance1>::{Pallet, Call, Storage, Event<T>},
		PutPool: pallet_liquidity_pool::<Instance2>::{Pallet, Call, Storage, Event<T>},
		CallOptions: pallet_pooled_options::<Instance1>::{Pallet, Call, Storage, Event<T>},
		PutOptions: pallet_pooled_options::<Instance2>::{Pallet, Call, Storage, Event<T>},
	}
);

// ----------------------------------------------------------------------------------------------------
//		Frame System Config
// ----------------------------------------------------------------------------------------------------

parameter_types! {
	pub const BlockHashCount: u64 = 250;
}

impl frame_system::Config for MockRuntime {
	type Origin = Origin;
	type Index = u64;
	type BlockNumber = BlockNumber;
	type Call = Call;
	type Hash = H256;
	type Hashing = ::sp_runtime::traits::BlakeTwo256;
	type AccountId = AccountId;
	type Lookup = IdentityLookup<Self::AccountId>;
	type Header = Header;
	type Event = Event;
	type BlockHashCount = BlockHashCount;
	type BlockWeights = ();
	type BlockLength = ();
	type Version = ();
	type PalletInfo = PalletInfo;
	type AccountData = pallet_balances::AccountData<Balance>;
	type OnNewAccount = ();
	type OnKilledAccount = ();
	type DbWeight = ();
	type BaseCallFilter = Everything;
	type SystemWeightInfo = ();
	type SS58Prefix = ();
	type OnSetCode = ();
	type MaxConsumers = frame_support::traits::ConstU32<16>;
}

// ----------------------------------------------------------------------------------------------------
//		Balances
// ----------------------------------------------------------------------------------------------------

parameter_types! {
	pub const BalanceExistentialDeposit: u64 = 0;
}

impl pallet_balances::Config for MockRuntime {
	type Balance = Balance;
	type Event = Event;
	type DustRemoval = ();
	type ExistentialDeposit = BalanceExistentialDeposit;
	type AccountStore = System;
	type WeightInfo = ();
	type MaxLocks = ();
	type MaxReserves = ();
	type ReserveIdentifier = [u8; 8];
}

// ----------------------------------------------------------------------------------------------------
//		Timestamp
// ----------------------------------------------------------------------------------------------------

impl pallet_timestamp::Config for MockRuntime {
	type Moment = Moment;
	type OnTimestampSet = ();
	// One second.
	type MinimumPeriod = ConstU64<1000>;
	type WeightInfo = ();
}

// ----------------------------------------------------------------------------------------------------
//		Tokens
// ----------------------------------------------------------------------------------------------------

parameter_type_with_key! {
	pub ExistentialDeposits: |_currency_id: AssetId| -> Balance {
		0u128
	};
}

impl orml_tokens::Config for MockRuntime {
	type Event = Event;
	type Balance = Balance;
	type Amount = Amount;
	type CurrencyId = AssetId;
	type WeightInfo = ();
	type ExistentialDeposits = ExistentialDeposits;
	type OnDust = ();
	type MaxLocks = ();
	type MaxReserves = ();
	type ReserveIdentifier = ();
	type DustRemovalWhitelist = Everything;
	type OnNewTokenAccount = ();
	type OnKilledTokenAccount = ();
}

// ----------------------------------------------------------------------------------------------------
//		Oracle
// ----------------------------------------------------------------------------------------------------

parameter_types! {
	pub static OraclePrice: Balance = 2_000 * PRICE_UNIT;
}

pub struct MockOracle;

impl PriceOracle for MockOracle {
	type Balance = Balance;

	fn latest_price() -> Result<Balance, DispatchError> {
		Ok(OraclePrice::get())
	}
}

pub fn set_oracle_price(price: Balance) {
	OraclePrice::set(price);
}

// ----------------------------------------------------------------------------------------------------
//		Options Pricing
// ----------------------------------------------------------------------------------------------------

ord_parameter_types! {
	pub const RootAccount: AccountId = ADMIN;
}

impl pallet_options_pricing::Config for MockRuntime {
	type Event = Event;
	type WeightInfo = ();
	type Balance = Balance;
	type Moment = Moment;
	type MomentsPerSecond = ConstU64<1000>;
	type ProtocolOrigin =
		EitherOfDiverse<EnsureSignedBy<RootAccount, AccountId>, EnsureRoot<AccountId>>;
}

// ----------------------------------------------------------------------------------------------------
//		Liquidity Pools
// ----------------------------------------------------------------------------------------------------

parameter_types! {
	pub const CallPoolPalletId: PalletId = PalletId(*b"pool_cal");
	pub const PutPoolPalletId: PalletId = PalletId(*b"pool_put");
	pub const StablecoinAssetId: AssetId = USDC;
	pub const LockupPeriod: Moment = 14 * DAY;
	pub CallEngineAccount: AccountId = CallOptionsPalletId::get().into_account_truncating();
	pub PutEngineAccount: AccountId = PutOptionsPalletId::get().into_account_truncating();
}

impl pallet_liquidity_pool::Config<Instance1> for MockRuntime {
	type Event = Event;
	type WeightInfo = ();
	type Currency = Balances;
	type Moment = Moment;
	type Time = Timestamp;
	type PalletId = CallPoolPalletId;
	type LockupPeriod = LockupPeriod;
	type Controller = CallEngineAccount;
}

impl pallet_liquidity_pool::Config<Instance2> for MockRuntime {
	type Event = Event;
	type WeightInfo = ();
	type Currency = StablecoinCurrency;
	type Moment = Moment;
	type Time = Timestamp;
	type PalletId = PutPoolPalletId;
	type LockupPeriod = LockupPeriod;
	type Controller = PutEngineAccount;
}

// ----------------------------------------------------------------------------------------------------
//		Pooled Options
// ----------------------------------------------------------------------------------------------------

parameter_types! {
	pub const CallOptionsPalletId: PalletId = PalletId(*b"opt_call");
	pub const PutOptionsPalletId: PalletId = PalletId(*b"opt_put_");
	pub const CallKind: OptionType = OptionType::Call;
	pub const PutKind: OptionType = OptionType::Put;
	pub const ActivationDelay: Moment = 15 * MINUTE;
	pub const MinPeriod: Moment = DAY;
	pub const MaxPeriod: Moment = 8 * 7 * DAY;
}

impl pallet_pooled_options::Config<Instance1> for MockRuntime {
	type Event = Event;
	type WeightInfo = ();
	type Currency = Balances;
	type Moment = Moment;
	type Time = Timestamp;
	type PalletId = CallOptionsPalletId;
	type OptionKind = CallKind;
	type Pool = CallPool;
	type Oracle = MockOracle;
	type Pricing = OptionsPricing;
	type ProtocolOrigin =
		EitherOfDiverse<EnsureSignedBy<RootAccount, AccountId>, EnsureRoot<AccountId>>;
	type ActivationDelay = ActivationDelay;
	type MinPeriod = MinPeriod;
	type MaxPeriod = MaxPeriod;
	type MaxUnlockBatch = ConstU32<8>;
}

impl pallet_pooled_options::Config<Instance2> for MockRuntime {
	type Event = Event;
	type WeightInfo = ();
	type Currency = StablecoinCurrency;
	type Moment = Moment;
	type Time = Timestamp;
	type PalletId = PutOptionsPalletId;
	type OptionKind = PutKind;
	type Pool = PutPool;
	type Oracle = MockOracle;
	type Pricing = OptionsPricing;
	type ProtocolOrigin =
		EitherOfDiverse<EnsureSignedBy<RootAccount, AccountId>, EnsureRoot<AccountId>>;
	type ActivationDelay = ActivationDelay;
	type MinPeriod = MinPeriod;
	type MaxPeriod = MaxPeriod;
	type MaxUnlockBatch = ConstU32<8>;
}

// ----------------------------------------------------------------------------------------------------
//		ExtBuilder
// ----------------------------------------------------------------------------------------------------

#[derive(Default)]
pub struct ExtBuilder {
	pub native_balances: Vec<(AccountId, Balance)>,
	pub balances: Vec<(AccountId, AssetId, Balance)>,
}

impl ExtBuilder {
	pub fn build(self) -> sp_io::TestExternalities {
		let mut storage =
			frame_system::GenesisConfig::default().build_storage::<MockRuntime>().unwrap();

		pallet_balances::GenesisConfig::<MockRuntime> { balances: self.native_balances }
			.assimilate_storage(&mut storage)
			.unwrap();

		orml_tokens::GenesisConfig::<MockRuntime> { balances: self.balances }
			.assimilate_storage(&mut storage)
			.unwrap();

		GenesisBuild::<MockRuntime>::assimilate_storage(
			&pallet_options_pricing::GenesisConfig::default(),
			&mut storage,
		)
		.unwrap();

		let mut ext: sp_io::TestExternalities = storage.into();

		ext.execute_with(|| {
			set_oracle_price(2_000 * PRICE_UNIT);
			System::set_block_number(1);
			Timestamp::set_timestamp(1_000);
		});

		ext
	}

	pub fn initialize_balances(
		mut self,
		balances: Vec<(AccountId, AssetId, Balance)>,
	) -> ExtBuilder {
		balances.into_iter().for_each(|(account, asset, balance)| {
			if asset == PICA {
				self.native_balances.push((account, balance));
			} else {
				self.balances.push((account, asset, balance));
			}
		});

		self
	}
}
