//! # Security Token Pallet
//!
//! A permissioned fungible token. A single owner manages roles and the whitelist
//! mode, a set of issuers operates the frozenlist and whitelist and can move funds
//! administratively, and every ordinary balance change is gated by both lists.
//!
//! - Role registry: [`Owner`], [`Issuers`] (see `roles.rs`)
//! - List gate: [`Frozenlist`], [`Whitelist`], [`WhitelistEnabled`] (see `lists.rs`)
//! - Ledger: [`Balances`], [`TotalSupply`] (see `ledger.rs`)
//!
//! The dispatchables below are the only entry points. Each one resolves the signed
//! caller, checks its role, then hands over to the registry, gate or ledger.
#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream but remains our query surface
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

mod ledger;
mod lists;
mod roles;

pub mod migrations;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// Log target for everything emitted by this pallet.
pub const LOG_TARGET: &str = "pallet-security-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(2);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
        /// Weight information for the extrinsics in this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Sovereign Bond Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "SBT")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Always equal to the sum of all balances.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// The owner. `None` once ownership has been renounced.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Accounts holding issuer rights. The owner is always one of them.
    #[pallet::storage]
    #[pallet::getter(fn is_issuer)]
    pub type Issuers<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Frozen accounts (cannot mint, burn, send or receive)
    #[pallet::storage]
    #[pallet::getter(fn is_frozen)]
    pub type Frozenlist<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Whitelisted accounts. Only consulted while [`WhitelistEnabled`] is set.
    #[pallet::storage]
    #[pallet::getter(fn whitelist)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn whitelist_enabled)]
    pub type WhitelistEnabled<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens burned by their holder
        Burned { from: T::AccountId, amount: u128 },
        /// An issuer moved the whole balance of `from` to `to`
        FundsReassigned { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// An issuer seized the whole balance of `from` into its own account
        FundsRevoked { from: T::AccountId, amount: u128 },
        /// Account frozen
        Frozen { account: T::AccountId },
        /// Account unfrozen
        Unfrozen { account: T::AccountId },
        /// Account added to whitelist
        Whitelisted { account: T::AccountId },
        /// Account removed from whitelist
        RemovedFromWhitelist { account: T::AccountId },
        /// Whitelist enforcement switched on or off
        WhitelistToggled { enabled: bool },
        IssuerAdded { account: T::AccountId },
        IssuerRemoved { account: T::AccountId },
        /// Ownership moved. `new_owner` is `None` after a renouncement.
        OwnershipTransferred { previous_owner: T::AccountId, new_owner: Option<T::AccountId> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner.
        NotOwner,
        /// Caller is not an issuer.
        NotIssuer,
        /// An account touched by the operation is frozen.
        AccountFrozen,
        /// Whitelist is enabled and a participant is not whitelisted.
        WhitelistRejected,
        InsufficientBalance,
        /// Ownership cannot be handed to the empty account.
        InvalidTarget,
        /// The owner cannot give up its issuer rights while it is owner.
        OwnerMustRemainIssuer,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Self::do_mint(to, amount)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(sender, to, amount)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::add_to_frozenlist())]
        pub fn add_to_frozenlist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_issuer(&who)?;
            Self::do_set_frozen(account, true);
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::remove_from_frozenlist())]
        pub fn remove_from_frozenlist(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_issuer(&who)?;
            Self::do_set_frozen(account, false);
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist())]
        pub fn add_to_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_issuer(&who)?;
            Self::do_set_whitelisted(account, true);
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::remove_from_whitelist())]
        pub fn remove_from_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_issuer(&who)?;
            Self::do_set_whitelisted(account, false);
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_burn(who, amount)
        }

        /// Move the entire balance of `from` to `to`. Ignores the frozenlist.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::reassign())]
        pub fn reassign(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_issuer(&who)?;
            Self::do_reassign(from, to)
        }

        /// Move the entire balance of `from` to the calling issuer. Ignores the frozenlist.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::revoke())]
        pub fn revoke(origin: OriginFor<T>, from: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_issuer(&who)?;
            Self::do_revoke(who, from)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::enable_whitelist())]
        pub fn enable_whitelist(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Self::do_set_whitelist_enabled(true);
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::disable_whitelist())]
        pub fn disable_whitelist(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Self::do_set_whitelist_enabled(false);
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Self::do_transfer_ownership(who, new_owner)
        }

        /// Give up ownership for good. Nobody can call owner-only extrinsics afterwards.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::renounce_ownership())]
        pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Self::do_renounce_ownership(who);
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::add_issuer())]
        pub fn add_issuer(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Self::grant_issuer(account);
            Ok(())
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::remove_issuer())]
        pub fn remove_issuer(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Self::do_remove_issuer(account)
        }

        /// Hand the caller's issuer rights over to `new_issuer`.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::transfer_issuer())]
        pub fn transfer_issuer(origin: OriginFor<T>, new_issuer: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_issuer(&who)?;
            Self::do_transfer_issuer(who, new_issuer)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Creator of the token. Becomes owner and first issuer.
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Enforce the whitelist from the first block. Whitelists the owner.
        pub whitelist_enabled: bool,
        /// Issuers besides the owner
        pub issuers: Vec<T::AccountId>,
        /// Accounts to whitelist at genesis
        pub whitelisted_accounts: Vec<T::AccountId>,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);
            WhitelistEnabled::<T>::put(self.whitelist_enabled);

            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
                Issuers::<T>::insert(owner, true);
                if self.whitelist_enabled {
                    Whitelist::<T>::insert(owner, true);
                }
            }

            for issuer in &self.issuers {
                Issuers::<T>::insert(issuer, true);
            }

            for account in &self.whitelisted_accounts {
                Whitelist::<T>::insert(account, true);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::mutate(account, |bal| {
                    *bal = bal.checked_add(*amount).expect("Initial balance overflows u128")
                });
                total = total.checked_add(*amount).expect("Initial supply overflows u128");
            }
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Check the accounting and role invariants against the whole of storage.
    ///
    /// - `TotalSupply` equals the sum of every balance.
    /// - The owner, while there is one, holds issuer rights.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, bal| acc.checked_add(bal))
            .ok_or(sp_runtime::TryRuntimeError::Other("Sum of balances overflows"))?;
        ensure!(
            sum == TotalSupply::<T>::get(),
            sp_runtime::TryRuntimeError::Other("Total supply does not match sum of balances")
        );

        if let Some(owner) = Owner::<T>::get() {
            ensure!(
                Issuers::<T>::get(&owner),
                sp_runtime::TryRuntimeError::Other("Owner is not an issuer")
            );
        }

        Ok(())
    }
}
