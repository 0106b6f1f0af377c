use crate as pallet_security_token;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        SecurityToken: pallet_security_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_security_token::Config for Test {
    type WeightInfo = ();
}

/// Token creator: owner and first issuer.
pub const OWNER: u64 = 1;
pub const NEW_OWNER: u64 = 2;
pub const ALICE: u64 = 3;
pub const BOB: u64 = 4;
/// Holder that the tests put on the frozenlist.
pub const FRANCIS: u64 = 5;
/// Issuer appointed at genesis, not the owner.
pub const IGOR: u64 = 6;
/// Never configured, holds nothing.
pub const STRANGER: u64 = 9;

/// Token with the whitelist disabled.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(false)
}

/// Token created with the whitelist enabled. The owner is whitelisted at birth.
pub fn new_whitelisted_test_ext() -> sp_io::TestExternalities {
    build_ext(true)
}

fn build_ext(whitelist_enabled: bool) -> sp_io::TestExternalities {
    // Built through the runtime genesis so the pallet storage version is written too
    let t = RuntimeGenesisConfig {
        system: Default::default(),
        security_token: pallet_security_token::GenesisConfig::<Test> {
            owner: Some(OWNER),
            token_name: b"ERC2980 Token".to_vec(),
            token_symbol: b"ST".to_vec(),
            decimals: 18,
            whitelist_enabled,
            issuers: vec![IGOR],
            whitelisted_accounts: vec![],
            initial_balances: vec![],
        },
    }
    .build_storage()
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are not recorded in block 0
    ext.execute_with(|| System::set_block_number(1));
    ext
}
