//! Benchmarking setup for pallet-security-token

use super::*;

#[allow(unused)]
use crate::Pallet as SecurityToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Install a fresh owner, who is also an issuer.
fn set_up_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = account("owner", 0, 0);
    Owner::<T>::put(&owner);
    Issuers::<T>::insert(&owner, true);
    owner
}

fn set_up_issuer<T: Config>() -> T::AccountId {
    let issuer: T::AccountId = account("issuer", 0, 0);
    Issuers::<T>::insert(&issuer, true);
    issuer
}

fn endow<T: Config>(who: &T::AccountId, amount: u128) {
    Balances::<T>::mutate(who, |bal| *bal += amount);
    TotalSupply::<T>::mutate(|supply| *supply += amount);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let owner = set_up_owner::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        // Worst case: the whitelist is consulted
        WhitelistEnabled::<T>::put(true);
        Whitelist::<T>::insert(&recipient, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        WhitelistEnabled::<T>::put(true);
        Whitelist::<T>::insert(&caller, true);
        Whitelist::<T>::insert(&recipient, true);
        endow::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        endow::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
    }

    #[benchmark]
    fn reassign() {
        let issuer = set_up_issuer::<T>();
        let from: T::AccountId = account("from", 0, 0);
        let to: T::AccountId = account("to", 0, 0);
        endow::<T>(&from, 10_000_000);
        endow::<T>(&to, 1);
        Frozenlist::<T>::insert(&from, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(issuer), from.clone(), to.clone());

        assert_eq!(Balances::<T>::get(&from), 0);
        assert_eq!(Balances::<T>::get(&to), 10_000_001);
    }

    #[benchmark]
    fn revoke() {
        let issuer = set_up_issuer::<T>();
        let from: T::AccountId = account("from", 0, 0);
        endow::<T>(&from, 10_000_000);
        endow::<T>(&issuer, 1);
        Frozenlist::<T>::insert(&from, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(issuer.clone()), from.clone());

        assert_eq!(Balances::<T>::get(&from), 0);
        assert_eq!(Balances::<T>::get(&issuer), 10_000_001);
    }

    #[benchmark]
    fn add_to_frozenlist() {
        let issuer = set_up_issuer::<T>();
        let account: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(issuer), account.clone());

        assert!(Frozenlist::<T>::get(&account));
    }

    #[benchmark]
    fn remove_from_frozenlist() {
        let issuer = set_up_issuer::<T>();
        let account: T::AccountId = whitelisted_caller();
        Frozenlist::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(issuer), account.clone());

        assert!(!Frozenlist::<T>::get(&account));
    }

    #[benchmark]
    fn add_to_whitelist() {
        let issuer = set_up_issuer::<T>();
        let account: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(issuer), account.clone());

        assert!(Whitelist::<T>::get(&account));
    }

    #[benchmark]
    fn remove_from_whitelist() {
        let issuer = set_up_issuer::<T>();
        let account: T::AccountId = whitelisted_caller();
        Whitelist::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(issuer), account.clone());

        assert!(!Whitelist::<T>::get(&account));
    }

    #[benchmark]
    fn enable_whitelist() {
        let owner = set_up_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(WhitelistEnabled::<T>::get());
    }

    #[benchmark]
    fn disable_whitelist() {
        let owner = set_up_owner::<T>();
        WhitelistEnabled::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(!WhitelistEnabled::<T>::get());
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = set_up_owner::<T>();
        let new_owner: T::AccountId = account("new_owner", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner.clone()));
        assert!(Issuers::<T>::get(&new_owner));
        assert!(!Issuers::<T>::get(&owner));
    }

    #[benchmark]
    fn renounce_ownership() {
        let owner = set_up_owner::<T>();
        WhitelistEnabled::<T>::put(true);
        Whitelist::<T>::insert(&owner, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()));

        assert_eq!(Owner::<T>::get(), None);
        assert!(!Whitelist::<T>::get(&owner));
    }

    #[benchmark]
    fn add_issuer() {
        let owner = set_up_owner::<T>();
        let account: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), account.clone());

        assert!(Issuers::<T>::get(&account));
    }

    #[benchmark]
    fn remove_issuer() {
        let owner = set_up_owner::<T>();
        let issuer = set_up_issuer::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), issuer.clone());

        assert!(!Issuers::<T>::get(&issuer));
    }

    #[benchmark]
    fn transfer_issuer() {
        set_up_owner::<T>();
        let issuer = set_up_issuer::<T>();
        let successor: T::AccountId = account("successor", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(issuer.clone()), successor.clone());

        assert!(!Issuers::<T>::get(&issuer));
        assert!(Issuers::<T>::get(&successor));
    }

    impl_benchmark_test_suite!(SecurityToken, crate::mock::new_test_ext(), crate::mock::Test);
}
