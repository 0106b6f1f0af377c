//! Balance accounting.
//!
//! Every function validates all of its preconditions before the first storage
//! write. Mint and burn are the only paths that change [`TotalSupply`].

use frame_support::dispatch::DispatchResult;
use sp_runtime::DispatchError;

use crate::{Balances, Config, Error, Event, Pallet, TotalSupply, LOG_TARGET};

impl<T: Config> Pallet<T> {
    /// Zero balances are removed rather than stored.
    fn write_balance(who: &T::AccountId, balance: u128) {
        if balance == 0 {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, balance);
        }
    }

    pub(crate) fn do_mint(to: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_frozen(&to)?;
        Self::ensure_whitelisted(&to)?;

        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        TotalSupply::<T>::put(supply);
        Self::write_balance(&to, balance);
        Self::deposit_event(Event::Minted { to, amount });
        Ok(())
    }

    /// Whitelist membership is not required to burn.
    pub(crate) fn do_burn(who: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_frozen(&who)?;

        let balance =
            Balances::<T>::get(&who).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

        TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
        Self::write_balance(&who, balance);
        Self::deposit_event(Event::Burned { from: who, amount });
        Ok(())
    }

    pub(crate) fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_frozen(&from)?;
        Self::ensure_not_frozen(&to)?;
        Self::ensure_whitelisted(&from)?;
        Self::ensure_whitelisted(&to)?;

        let from_balance =
            Balances::<T>::get(&from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

        if from != to {
            let to_balance =
                Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Self::write_balance(&from, from_balance);
            Self::write_balance(&to, to_balance);
        }

        Self::deposit_event(Event::Transferred { from, to, amount });
        Ok(())
    }

    /// Move the whole balance of `from` to `to`, bypassing both lists.
    ///
    /// Returns the amount moved, which is zero for an empty account.
    fn move_entire_balance(from: &T::AccountId, to: &T::AccountId) -> Result<u128, DispatchError> {
        let moved = Balances::<T>::get(from);
        if from == to || moved == 0 {
            return Ok(moved);
        }

        let to_balance = Balances::<T>::get(to).checked_add(moved).ok_or(Error::<T>::Overflow)?;
        Balances::<T>::remove(from);
        Self::write_balance(to, to_balance);
        Ok(moved)
    }

    pub(crate) fn do_reassign(from: T::AccountId, to: T::AccountId) -> DispatchResult {
        let amount = Self::move_entire_balance(&from, &to)?;

        log::debug!(target: LOG_TARGET, "Reassigned {amount} from {from:?} to {to:?}");
        Self::deposit_event(Event::FundsReassigned { from, to, amount });
        Ok(())
    }

    pub(crate) fn do_revoke(issuer: T::AccountId, from: T::AccountId) -> DispatchResult {
        let amount = Self::move_entire_balance(&from, &issuer)?;

        log::debug!(target: LOG_TARGET, "Revoked {amount} from {from:?} into {issuer:?}");
        Self::deposit_event(Event::FundsRevoked { from, amount });
        Ok(())
    }
}
