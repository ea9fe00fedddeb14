use std::sync::Arc;
use tracing::{debug, info};

use crate::actions::types::{
    ActionGetResponse, ActionLinks, ActionParameter, ActionPostResponse, ActionType, LinkedAction,
};
use crate::audius::{Profile, ProfileResolver};
use crate::chain::address::parse_address;
use crate::chain::amount::TokenAmount;
use crate::chain::constants::{AUDIO_SYMBOL, DEFAULT_TIP_AMOUNT, TIP_AMOUNT_OPTIONS};
use crate::chain::transaction_builder::TipTransactionBuilder;
use crate::error::TipResult;
use crate::utils::encode_transaction;

const AMOUNT_PARAMETER_NAME: &str = "amount";

/// Composes profile resolution and transaction building into the three
/// tip actions. Holds no per-request state.
pub struct TipService {
    resolver: Arc<dyn ProfileResolver>,
    builder: TipTransactionBuilder,
}

impl TipService {
    pub fn new(resolver: Arc<dyn ProfileResolver>, builder: TipTransactionBuilder) -> Self {
        Self { resolver, builder }
    }

    /// GET `/{handle}`: creator card with preset amounts and a custom input.
    pub async fn metadata(&self, handle: &str) -> TipResult<ActionGetResponse> {
        let profile = self.resolver.resolve_profile(handle).await?;

        let mut actions: Vec<LinkedAction> = TIP_AMOUNT_OPTIONS
            .iter()
            .map(|amount| LinkedAction {
                label: amount_label(&amount.to_string()),
                href: format!("/{}/{}", handle, amount),
                parameters: Vec::new(),
            })
            .collect();
        actions.push(LinkedAction {
            label: "Tip".to_string(),
            href: format!("/{}/{{{}}}", handle, AMOUNT_PARAMETER_NAME),
            parameters: vec![ActionParameter {
                name: AMOUNT_PARAMETER_NAME.to_string(),
                label: format!("Enter a custom {} amount", AUDIO_SYMBOL),
            }],
        });

        let mut response = card(handle, &profile, &DEFAULT_TIP_AMOUNT.to_string());
        response.links = Some(ActionLinks { actions });
        Ok(response)
    }

    /// GET `/{handle}/{amount}`: creator card labelled with one amount.
    pub async fn amount_metadata(&self, handle: &str, amount: &str) -> TipResult<ActionGetResponse> {
        TokenAmount::parse_audio(amount)?;
        let profile = self.resolver.resolve_profile(handle).await?;
        Ok(card(handle, &profile, amount))
    }

    /// POST `/{handle}[/{amount}]`: unsigned transfer from `account` to the
    /// creator, base64 encoded.
    pub async fn tip_transaction(
        &self,
        handle: &str,
        amount: Option<&str>,
        account: &str,
    ) -> TipResult<ActionPostResponse> {
        let sender = parse_address(account)?;
        let default_amount = DEFAULT_TIP_AMOUNT.to_string();
        let amount_text = amount.unwrap_or(&default_amount);
        let amount = TokenAmount::parse_audio(amount_text)?;

        let profile = self.resolver.resolve_profile(handle).await?;
        let recipient = parse_address(&profile.token_wallet)?;
        debug!(
            "Tip {} {} from {} to @{} ({})",
            amount.display(),
            AUDIO_SYMBOL,
            sender,
            handle,
            recipient
        );

        let transaction = self
            .builder
            .build_token_transfer(&sender, &recipient, amount.units())
            .await?;

        info!("Prepared {} {} tip for @{}", amount_text, AUDIO_SYMBOL, handle);

        Ok(ActionPostResponse {
            kind: ActionType::Transaction,
            transaction: encode_transaction(&transaction)?,
            message: None,
        })
    }
}

fn amount_label(amount: &str) -> String {
    format!("{} {}", amount, AUDIO_SYMBOL)
}

fn card(handle: &str, profile: &Profile, amount: &str) -> ActionGetResponse {
    ActionGetResponse {
        kind: ActionType::Action,
        icon: profile.avatar_url.clone(),
        label: amount_label(amount),
        title: format!("{} (@{}) on Audius", profile.display_name, handle),
        description: profile.bio.clone(),
        links: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audius::profile::MockProfileResolver;
    use crate::chain::blockhash::MockBlockhashSource;
    use crate::chain::transaction_builder::RecipientAccount;
    use crate::error::TipError;
    use crate::utils::decode_transaction;
    use solana_sdk::{hash::Hash, pubkey::Pubkey};

    fn profile(wallet: &str) -> Profile {
        Profile {
            display_name: "Skrillex".into(),
            bio: "bangarang".into(),
            avatar_url: "https://example.com/1000.jpg".into(),
            token_wallet: wallet.into(),
        }
    }

    fn service(resolver: MockProfileResolver, blockhash: MockBlockhashSource) -> TipService {
        TipService::new(
            Arc::new(resolver),
            TipTransactionBuilder::new(Arc::new(blockhash), RecipientAccount::Direct),
        )
    }

    fn resolver_returning(wallet: String) -> MockProfileResolver {
        let mut resolver = MockProfileResolver::new();
        resolver
            .expect_resolve_profile()
            .returning(move |_| Ok(profile(&wallet)));
        resolver
    }

    #[tokio::test]
    async fn test_metadata_lists_presets_and_custom_action() {
        let resolver = resolver_returning(Pubkey::new_unique().to_string());
        let svc = service(resolver, MockBlockhashSource::new());

        let response = svc.metadata("skrillex").await.unwrap();
        assert_eq!(response.kind, ActionType::Action);
        assert_eq!(response.icon, "https://example.com/1000.jpg");
        assert_eq!(response.label, "1 $AUDIO");
        assert_eq!(response.title, "Skrillex (@skrillex) on Audius");
        assert_eq!(response.description, "bangarang");

        let actions = response.links.unwrap().actions;
        assert_eq!(actions.len(), TIP_AMOUNT_OPTIONS.len() + 1);
        assert_eq!(actions[0].href, "/skrillex/1");
        assert_eq!(actions[2].label, "20 $AUDIO");
        let custom = actions.last().unwrap();
        assert_eq!(custom.href, "/skrillex/{amount}");
        assert_eq!(custom.parameters[0].name, "amount");
    }

    #[tokio::test]
    async fn test_amount_metadata_rejects_bad_amount_without_lookup() {
        let mut resolver = MockProfileResolver::new();
        resolver.expect_resolve_profile().times(0);
        let svc = service(resolver, MockBlockhashSource::new());

        let result = svc.amount_metadata("skrillex", "lots").await;
        assert!(matches!(result, Err(TipError::InvalidAmount(_))));
    }

    #[tokio::test]
    async fn test_tip_transaction_uses_default_amount() {
        let account = Pubkey::new_unique();
        let resolver = resolver_returning(Pubkey::new_unique().to_string());
        let mut blockhash = MockBlockhashSource::new();
        blockhash
            .expect_latest_blockhash()
            .times(1)
            .returning(|| Ok(Hash::new_unique()));
        let svc = service(resolver, blockhash);

        let response = svc
            .tip_transaction("skrillex", None, &account.to_string())
            .await
            .unwrap();
        assert_eq!(response.kind, ActionType::Transaction);
        let tx = decode_transaction(&response.transaction).unwrap();
        assert_eq!(tx.message.static_account_keys()[0], account);
        let ix = &tx.message.instructions()[0];
        match spl_token::instruction::TokenInstruction::unpack(&ix.data).unwrap() {
            spl_token::instruction::TokenInstruction::Transfer { amount } => {
                assert_eq!(amount, 100_000_000)
            }
            other => panic!("unexpected instruction {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_account_short_circuits() {
        let mut resolver = MockProfileResolver::new();
        resolver.expect_resolve_profile().times(0);
        let mut blockhash = MockBlockhashSource::new();
        blockhash.expect_latest_blockhash().times(0);
        let svc = service(resolver, blockhash);

        let result = svc.tip_transaction("skrillex", Some("1"), "nope").await;
        assert!(matches!(result, Err(TipError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn test_invalid_creator_wallet_fails_before_blockhash() {
        let resolver = resolver_returning("not-a-wallet".to_string());
        let mut blockhash = MockBlockhashSource::new();
        blockhash.expect_latest_blockhash().times(0);
        let svc = service(resolver, blockhash);

        let result = svc
            .tip_transaction("skrillex", None, &Pubkey::new_unique().to_string())
            .await;
        assert!(matches!(result, Err(TipError::InvalidAddress(v)) if v == "not-a-wallet"));
    }

    #[tokio::test]
    async fn test_profile_not_found_propagates() {
        let mut resolver = MockProfileResolver::new();
        resolver
            .expect_resolve_profile()
            .returning(|handle| Err(TipError::ProfileNotFound(handle.to_string())));
        let mut blockhash = MockBlockhashSource::new();
        blockhash.expect_latest_blockhash().times(0);
        let svc = service(resolver, blockhash);

        assert!(matches!(
            svc.metadata("ghost").await,
            Err(TipError::ProfileNotFound(_))
        ));
        assert!(matches!(
            svc.tip_transaction("ghost", None, &Pubkey::new_unique().to_string()).await,
            Err(TipError::ProfileNotFound(_))
        ));
    }
}
