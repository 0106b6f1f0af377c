//! Owner and issuer bookkeeping.
//!
//! Ownership changes cascade into the issuer set: the outgoing owner loses its
//! issuer flag and the incoming owner gains one, so the owner is an issuer for as
//! long as it is owner.

use codec::Decode;
use frame_support::{dispatch::DispatchResult, ensure};
use sp_runtime::traits::TrailingZeroInput;

use crate::{Config, Error, Event, Issuers, Owner, Pallet, Whitelist, WhitelistEnabled, LOG_TARGET};

impl<T: Config> Pallet<T> {
    pub(crate) fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        ensure!(Owner::<T>::get().as_ref() == Some(who), Error::<T>::NotOwner);
        Ok(())
    }

    pub(crate) fn ensure_issuer(who: &T::AccountId) -> DispatchResult {
        ensure!(Issuers::<T>::get(who), Error::<T>::NotIssuer);
        Ok(())
    }

    /// The account whose encoding is all zeroes. Ownership can never be moved there.
    pub fn empty_account() -> Option<T::AccountId> {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes()).ok()
    }

    fn is_empty_account(who: &T::AccountId) -> bool {
        Self::empty_account().as_ref() == Some(who)
    }

    pub(crate) fn grant_issuer(account: T::AccountId) {
        Issuers::<T>::insert(&account, true);
        Self::deposit_event(Event::IssuerAdded { account });
    }

    fn strip_issuer(account: T::AccountId) {
        Issuers::<T>::remove(&account);
        Self::deposit_event(Event::IssuerRemoved { account });
    }

    pub(crate) fn do_transfer_ownership(
        owner: T::AccountId,
        new_owner: T::AccountId,
    ) -> DispatchResult {
        ensure!(!Self::is_empty_account(&new_owner), Error::<T>::InvalidTarget);

        if Issuers::<T>::get(&owner) {
            Self::strip_issuer(owner.clone());
        }
        Self::grant_issuer(new_owner.clone());
        Owner::<T>::put(&new_owner);

        log::info!(target: LOG_TARGET, "Ownership transferred from {owner:?} to {new_owner:?}");
        Self::deposit_event(Event::OwnershipTransferred {
            previous_owner: owner,
            new_owner: Some(new_owner),
        });
        Ok(())
    }

    pub(crate) fn do_renounce_ownership(owner: T::AccountId) {
        Self::strip_issuer(owner.clone());
        if WhitelistEnabled::<T>::get() {
            Whitelist::<T>::remove(&owner);
            Self::deposit_event(Event::RemovedFromWhitelist { account: owner.clone() });
        }
        Owner::<T>::kill();

        log::info!(target: LOG_TARGET, "Ownership renounced by {owner:?}");
        Self::deposit_event(Event::OwnershipTransferred { previous_owner: owner, new_owner: None });
    }

    pub(crate) fn do_remove_issuer(account: T::AccountId) -> DispatchResult {
        ensure!(Owner::<T>::get().as_ref() != Some(&account), Error::<T>::OwnerMustRemainIssuer);
        Self::strip_issuer(account);
        Ok(())
    }

    pub(crate) fn do_transfer_issuer(
        issuer: T::AccountId,
        new_issuer: T::AccountId,
    ) -> DispatchResult {
        if issuer != new_issuer {
            ensure!(
                Owner::<T>::get().as_ref() != Some(&issuer),
                Error::<T>::OwnerMustRemainIssuer
            );
        }
        Self::strip_issuer(issuer);
        Self::grant_issuer(new_issuer);
        Ok(())
    }
}
