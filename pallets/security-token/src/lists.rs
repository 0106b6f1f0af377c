//! Frozenlist and whitelist gate.
//!
//! Freezing is an unconditional veto on ordinary balance changes. The whitelist
//! only applies while [`WhitelistEnabled`] is set; toggling it never touches the
//! membership flags.

use frame_support::{dispatch::DispatchResult, ensure};

use crate::{Config, Error, Event, Frozenlist, Pallet, Whitelist, WhitelistEnabled};

impl<T: Config> Pallet<T> {
    pub(crate) fn ensure_not_frozen(who: &T::AccountId) -> DispatchResult {
        ensure!(!Frozenlist::<T>::get(who), Error::<T>::AccountFrozen);
        Ok(())
    }

    pub(crate) fn ensure_whitelisted(who: &T::AccountId) -> DispatchResult {
        if WhitelistEnabled::<T>::get() {
            ensure!(Whitelist::<T>::get(who), Error::<T>::WhitelistRejected);
        }
        Ok(())
    }

    pub(crate) fn do_set_frozen(account: T::AccountId, frozen: bool) {
        if frozen {
            Frozenlist::<T>::insert(&account, true);
            Self::deposit_event(Event::Frozen { account });
        } else {
            Frozenlist::<T>::remove(&account);
            Self::deposit_event(Event::Unfrozen { account });
        }
    }

    pub(crate) fn do_set_whitelisted(account: T::AccountId, whitelisted: bool) {
        if whitelisted {
            Whitelist::<T>::insert(&account, true);
            Self::deposit_event(Event::Whitelisted { account });
        } else {
            Whitelist::<T>::remove(&account);
            Self::deposit_event(Event::RemovedFromWhitelist { account });
        }
    }

    pub(crate) fn do_set_whitelist_enabled(enabled: bool) {
        WhitelistEnabled::<T>::put(enabled);
        Self::deposit_event(Event::WhitelistToggled { enabled });
    }
}
