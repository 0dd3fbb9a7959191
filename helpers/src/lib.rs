//! Arithmetic helpers shared by the options and liquidity pool pallets.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::disallowed_types,
        clippy::indexing_slicing,
        clippy::panic,
        clippy::todo,
        clippy::unwrap_used,
        missing_docs,
    )
)] // allow in tests

pub mod math;
