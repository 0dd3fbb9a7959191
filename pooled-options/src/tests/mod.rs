#![allow(clippy::disallowed_methods, clippy::identity_op)]

use crate::mocks::{accounts::*, assets::*, runtime::*};

use frame_support::{assert_ok, traits::fungible::Inspect};


pub const UNIT: u128 = 10u128.pow(18);
pub const SECOND: Moment = 1_000;

// 1 UNIT, 1 day, at the money: sqrt(86_400) = 293, 1e18 * 293 * 5_500 / 1e8
pub const ATM_PREMIUM: Balance = 16_115_000_000_000_000;
pub const ATM_SETTLEMENT_FEE: Balance = UNIT / 100;
pub const ATM_TOTAL_FEE: Balance = ATM_PREMIUM + ATM_SETTLEMENT_FEE;

// The same fees charged by the put engine, valued in the stablecoin at a spot of 2_000
pub const ATM_PUT_PREMIUM: Balance = ATM_PREMIUM * 2_000;
pub const ATM_PUT_SETTLEMENT_FEE: Balance = ATM_SETTLEMENT_FEE * 2_000;
pub const ATM_PUT_TOTAL_FEE: Balance = ATM_PUT_PREMIUM + ATM_PUT_SETTLEMENT_FEE;

pub const CALL_LIQUIDITY: Balance = 100 * UNIT;
pub const PUT_LIQUIDITY: Balance = 500_000 * UNIT;

// ----------------------------------------------------------------------------------------------------
//		Helper functions
// ----------------------------------------------------------------------------------------------------
// Move the block number by 1 and the timestamp by `n` seconds
pub fn run_for_seconds(n: u64) {
	System::set_block_number(System::block_number() + 1);
	Timestamp::set_timestamp(Timestamp::now() + n * SECOND);
}

pub fn price(dollars: u128) -> Balance {
	dollars * PRICE_UNIT
}

pub fn default_balances() -> Vec<(AccountId, AssetId, Balance)> {
	Vec::from([
		(ALICE, PICA, 1_000 * UNIT),
		(BOB, PICA, 1_000 * UNIT),
		(CHARLIE, PICA, 1_000 * UNIT),
		(ALICE, USDC, 1_000_000 * UNIT),
		(BOB, USDC, 1_000_000 * UNIT),
		(CHARLIE, USDC, 1_000_000 * UNIT),
	])
}

pub fn native_balance(who: &AccountId) -> Balance {
	<Balances as Inspect<AccountId>>::balance(who)
}

pub fn stable_balance(who: &AccountId) -> Balance {
	<StablecoinCurrency as Inspect<AccountId>>::balance(who)
}

/// Externalities where ALICE funded both pools.
pub fn funded_pools() -> sp_io::TestExternalities {
	let mut ext = ExtBuilder::default().initialize_balances(default_balances()).build();
	ext.execute_with(|| {
		assert_ok!(CallPool::provide(Origin::signed(ALICE), CALL_LIQUIDITY, 0));
		assert_ok!(PutPool::provide(Origin::signed(ALICE), PUT_LIQUIDITY, 0));
	});
	ext
}

pub fn create_call(who: AccountId, period: Moment, amount: Balance, strike: Balance) -> u64 {
	let option_id = CallOptions::next_option_id();
	assert_ok!(CallOptions::create(Origin::signed(who), period, amount, strike, Balance::MAX));
	option_id
}

pub fn create_put(who: AccountId, period: Moment, amount: Balance, strike: Balance) -> u64 {
	let option_id = PutOptions::next_option_id();
	assert_ok!(PutOptions::create(Origin::signed(who), period, amount, strike, Balance::MAX));
	option_id
}
