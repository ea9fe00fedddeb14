// Test doubles for the two upstreams of the tip service
//
// - FakeResolver: in-memory handle -> profile table
// - CountingBlockhash: hands out a different blockhash on every call
// Both count their calls so tests can assert which upstreams a request hit.

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use audius_tip_action::{
    actions::TipService,
    audius::{Profile, ProfileResolver},
    chain::{BlockhashSource, RecipientAccount, TipTransactionBuilder},
    TipError, TipResult,
};
use solana_sdk::{hash::Hash, pubkey::Pubkey};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const HANDLE: &str = "skrillex";
pub const BROKEN_WALLET_HANDLE: &str = "broken";
pub const DOWN_HANDLE: &str = "down";

#[derive(Default)]
pub struct FakeResolver {
    profiles: HashMap<String, Profile>,
    calls: AtomicUsize,
}

impl FakeResolver {
    pub fn with_creator(wallet: &Pubkey) -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(HANDLE.to_string(), creator_profile(&wallet.to_string()));
        profiles.insert(BROKEN_WALLET_HANDLE.to_string(), creator_profile("not-a-wallet"));
        Self {
            profiles,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileResolver for FakeResolver {
    async fn resolve_profile(&self, handle: &str) -> TipResult<Profile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if handle == DOWN_HANDLE {
            return Err(TipError::UpstreamUnavailable("connection refused".into()));
        }
        self.profiles
            .get(handle)
            .cloned()
            .ok_or_else(|| TipError::ProfileNotFound(handle.to_string()))
    }
}

#[derive(Default)]
pub struct CountingBlockhash {
    calls: AtomicUsize,
}

impl CountingBlockhash {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlockhashSource for CountingBlockhash {
    async fn latest_blockhash(&self) -> TipResult<Hash> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) as u8;
        Ok(Hash::new_from_array([n.wrapping_add(1); 32]))
    }
}

pub fn creator_profile(wallet: &str) -> Profile {
    Profile {
        display_name: "Skrillex".to_string(),
        bio: "Sonny Moore".to_string(),
        avatar_url: "https://creatornode.audius.co/content/1000x1000.jpg".to_string(),
        token_wallet: wallet.to_string(),
    }
}

/// Everything a test needs to drive the app and inspect upstream usage.
pub struct Harness {
    pub creator_wallet: Pubkey,
    pub resolver: Arc<FakeResolver>,
    pub blockhash: Arc<CountingBlockhash>,
    pub service: web::Data<TipService>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_mode(RecipientAccount::Direct)
    }

    pub fn with_mode(mode: RecipientAccount) -> Self {
        let creator_wallet = Pubkey::new_unique();
        let resolver = Arc::new(FakeResolver::with_creator(&creator_wallet));
        let blockhash = Arc::new(CountingBlockhash::default());
        let builder = TipTransactionBuilder::new(blockhash.clone(), mode);
        let service = web::Data::new(TipService::new(resolver.clone(), builder));
        Self {
            creator_wallet,
            resolver,
            blockhash,
            service,
        }
    }
}
