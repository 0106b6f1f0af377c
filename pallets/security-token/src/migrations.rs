//! Storage migrations for pallet-security-token.
//!
//! Each migration is gated on the on-chain storage version and bumps it when
//! done, so running one twice is a no-op. Wire them into the runtime through the
//! `Executive` migrations tuple:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_security_token::migrations::v2::MigrateToV2<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Frozenlist, Issuers, Owner, Pallet, WhitelistEnabled, LOG_TARGET};

/// Migration to version 2 (owner and issuer roles).
///
/// Version 1 had a single `Admin` value, a `Frozen` map and a whitelist that was
/// always enforced. Version 2 replaces them with:
///
/// - `Admin` → [`Owner`], and the admin is granted issuer rights
/// - `Frozen` → [`Frozenlist`]
/// - [`WhitelistEnabled`] set to `true`, keeping transfer behaviour unchanged
pub mod v2 {
    use super::*;

    /// Storage layout of version 1.
    pub(crate) mod v1 {
        use super::*;

        #[frame_support::storage_alias]
        pub type Admin<T: Config> =
            StorageValue<Pallet<T>, <T as frame_system::Config>::AccountId, OptionQuery>;

        #[frame_support::storage_alias]
        pub type Frozen<T: Config> = StorageMap<
            Pallet<T>,
            Blake2_128Concat,
            <T as frame_system::Config>::AccountId,
            bool,
            ValueQuery,
        >;
    }

    pub struct MigrateToV2<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV2<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version >= 2 {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v2 migration"
                );
                return T::DbWeight::get().reads(1);
            }

            let mut reads: u64 = 2;
            let mut writes: u64 = 2;

            if let Some(admin) = v1::Admin::<T>::take() {
                Owner::<T>::put(&admin);
                Issuers::<T>::insert(&admin, true);
                writes += 3;
                log::info!(target: LOG_TARGET, "Admin {admin:?} migrated to owner");
            }

            let mut frozen: u64 = 0;
            for (account, is_frozen) in v1::Frozen::<T>::drain() {
                if is_frozen {
                    Frozenlist::<T>::insert(&account, true);
                    writes += 1;
                }
                frozen += 1;
            }
            reads += frozen;
            writes += frozen;

            WhitelistEnabled::<T>::put(true);
            StorageVersion::new(2).put::<Pallet<T>>();

            log::info!(
                target: LOG_TARGET,
                "Migrated storage v{on_chain_version:?} -> v2 ({frozen} frozen accounts)"
            );

            T::DbWeight::get().reads_writes(reads, writes)
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            let admin = v1::Admin::<T>::get();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {on_chain_version:?}, admin {admin:?}"
            );
            Ok((on_chain_version, admin).encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let (pre_version, admin): (u16, Option<T::AccountId>) =
                Decode::decode(&mut &state[..])
                    .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();
            ensure!(
                post_version >= 2,
                sp_runtime::TryRuntimeError::Other("Migration to v2 did not complete")
            );

            if pre_version < 2 {
                ensure!(
                    Owner::<T>::get() == admin,
                    sp_runtime::TryRuntimeError::Other("Admin was not carried over as owner")
                );
                ensure!(
                    v1::Frozen::<T>::iter().next().is_none(),
                    sp_runtime::TryRuntimeError::Other("Legacy frozen entries left behind")
                );
            }

            Pallet::<T>::do_try_state()
        }
    }
}
