use crate as pallet_liquidity_pool;
use crate::mocks::{accounts::*, assets::*};
use frame_support::{
	instances::{Instance1, Instance2},
	parameter_types,
	traits::{fungible::ItemOf, Everything, GenesisBuild},
	PalletId,
};

use orml_traits::parameter_type_with_key;
use sp_core::H256;
use sp_runtime::{testing::Header, traits::IdentityLookup};

pub type BlockNumber = u64;
pub type Balance = u128;
pub type Amount = i128;
pub type Moment = u64;
pub type NativePoolInstance = Instance1;
pub type StablePoolInstance = Instance2;
pub type StablePoolCurrency = ItemOf<Tokens, StablecoinAssetId, AccountId>;

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
		NativePool: pallet_liquidity_pool::<Instance1>::{Pallet, Call, Storage, Event<T>},
		StablePool: pallet_liquidity_pool::<Instance2>::{Pallet, Call, Storage, Event<T>},
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
	pub static BalanceExistentialDeposit: Balance = 0;
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
	type MinimumPeriod = frame_support::traits::ConstU64<1000>;
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
//		Liquidity Pools
// ----------------------------------------------------------------------------------------------------

parameter_types! {
	pub const NativePoolPalletId: PalletId = PalletId(*b"pool_nat");
	pub const StablePoolPalletId: PalletId = PalletId(*b"pool_usd");
	pub const StablecoinAssetId: AssetId = USDC;
	// 14 days, in milliseconds
	pub const LockupPeriod: Moment = 14 * 24 * 3600 * 1000;
	pub const PoolController: AccountId = ENGINE;
}

impl pallet_liquidity_pool::Config<Instance1> for MockRuntime {
	type Event = Event;
	type WeightInfo = ();
	type Currency = Balances;
	type Moment = Moment;
	type Time = Timestamp;
	type PalletId = NativePoolPalletId;
	type LockupPeriod = LockupPeriod;
	type Controller = PoolController;
}

impl pallet_liquidity_pool::Config<Instance2> for MockRuntime {
	type Event = Event;
	type WeightInfo = ();
	type Currency = StablePoolCurrency;
	type Moment = Moment;
	type Time = Timestamp;
	type PalletId = StablePoolPalletId;
	type LockupPeriod = LockupPeriod;
	type Controller = PoolController;
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

		let mut ext: sp_io::TestExternalities = storage.into();

		ext.execute_with(|| {
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
