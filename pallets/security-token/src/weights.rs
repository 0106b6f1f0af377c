//! Weights for pallet-security-token.
//!
//! Base execution times are estimates pending a benchmark run on reference
//! hardware; storage costs follow the reads and writes of each extrinsic.
//! Regenerate with the `runtime-benchmarks` feature and `frame-omni-bencher`.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-security-token.
pub trait WeightInfo {
    fn mint() -> Weight;
    fn transfer() -> Weight;
    fn burn() -> Weight;
    fn reassign() -> Weight;
    fn revoke() -> Weight;
    fn add_to_frozenlist() -> Weight;
    fn remove_from_frozenlist() -> Weight;
    fn add_to_whitelist() -> Weight;
    fn remove_from_whitelist() -> Weight;
    fn enable_whitelist() -> Weight;
    fn disable_whitelist() -> Weight;
    fn transfer_ownership() -> Weight;
    fn renounce_ownership() -> Weight;
    fn add_issuer() -> Weight;
    fn remove_issuer() -> Weight;
    fn transfer_issuer() -> Weight;
}

/// Weights for pallet-security-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Owner` (r:1), `Frozenlist` (r:1), `WhitelistEnabled` (r:1),
    /// `Whitelist` (r:1), `TotalSupply` (r:1 w:1), `Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Frozenlist` (r:2), `WhitelistEnabled` (r:1), `Whitelist` (r:2),
    /// `Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(31_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(7_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Frozenlist` (r:1), `Balances` (r:1 w:1), `TotalSupply` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(19_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Issuers` (r:1), `Balances` (r:2 w:2)
    fn reassign() -> Weight {
        Weight::from_parts(21_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Issuers` (r:1), `Balances` (r:2 w:2)
    fn revoke() -> Weight {
        Weight::from_parts(21_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Issuers` (r:1), `Frozenlist` (w:1)
    fn add_to_frozenlist() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Issuers` (r:1), `Frozenlist` (w:1)
    fn remove_from_frozenlist() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Issuers` (r:1), `Whitelist` (w:1)
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Issuers` (r:1), `Whitelist` (w:1)
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Owner` (r:1), `WhitelistEnabled` (w:1)
    fn enable_whitelist() -> Weight {
        Weight::from_parts(10_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Owner` (r:1), `WhitelistEnabled` (w:1)
    fn disable_whitelist() -> Weight {
        Weight::from_parts(10_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Owner` (r:1 w:1), `Issuers` (r:1 w:2)
    fn transfer_ownership() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `Owner` (r:1 w:1), `Issuers` (w:1), `WhitelistEnabled` (r:1), `Whitelist` (w:1)
    fn renounce_ownership() -> Weight {
        Weight::from_parts(17_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `Owner` (r:1), `Issuers` (w:1)
    fn add_issuer() -> Weight {
        Weight::from_parts(11_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Owner` (r:1), `Issuers` (w:1)
    fn remove_issuer() -> Weight {
        Weight::from_parts(11_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Issuers` (r:1 w:2), `Owner` (r:1)
    fn transfer_issuer() -> Weight {
        Weight::from_parts(15_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(31_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(7_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(19_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn reassign() -> Weight {
        Weight::from_parts(21_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn revoke() -> Weight {
        Weight::from_parts(21_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn add_to_frozenlist() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn remove_from_frozenlist() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn enable_whitelist() -> Weight {
        Weight::from_parts(10_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn disable_whitelist() -> Weight {
        Weight::from_parts(10_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn renounce_ownership() -> Weight {
        Weight::from_parts(17_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn add_issuer() -> Weight {
        Weight::from_parts(11_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn remove_issuer() -> Weight {
        Weight::from_parts(11_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_issuer() -> Weight {
        Weight::from_parts(15_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
