#![allow(clippy::disallowed_methods, clippy::identity_op)]

use crate::mocks::{accounts::*, assets::*, runtime::*};

use frame_support::traits::fungible::Inspect;


pub const UNIT: u128 = 10u128.pow(18);

pub const SECOND: Moment = 1_000;
pub const DAY: Moment = 86_400 * SECOND;
pub const LOCKUP: Moment = 14 * DAY;

// ----------------------------------------------------------------------------------------------------
//		Helper functions
// ----------------------------------------------------------------------------------------------------
// Move the block number by 1 and the timestamp by `n` seconds
pub fn run_for_seconds(n: u64) {
	System::set_block_number(System::block_number() + 1);
	Timestamp::set_timestamp(Timestamp::now() + n * SECOND);
}

pub fn default_balances() -> Vec<(AccountId, AssetId, Balance)> {
	Vec::from([
		(ALICE, PICA, 100 * UNIT),
		(BOB, PICA, 100 * UNIT),
		(CHARLIE, PICA, 100 * UNIT),
		(DAVE, PICA, 100 * UNIT),
		(ALICE, USDC, 100_000 * UNIT),
		(BOB, USDC, 100_000 * UNIT),
		(CHARLIE, USDC, 100_000 * UNIT),
		(DAVE, USDC, 100_000 * UNIT),
	])
}

pub fn native_balance(who: &AccountId) -> Balance {
	<Balances as Inspect<AccountId>>::balance(who)
}

pub fn stable_balance(who: &AccountId) -> Balance {
	<Tokens as frame_support::traits::fungibles::Inspect<AccountId>>::balance(USDC, who)
}
