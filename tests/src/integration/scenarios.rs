//! # Reference Scenarios
//!
//! Behaviour every Guild-Ledger deployment must show, exercised through the
//! public service APIs with in-memory stores.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gl_01_settings::{
        coerce_bool, CoercionError, InMemorySettingsStore, SettingsApi, SettingsError,
        SettingsNormalizer,
    };
    use gl_02_role_ledger::{
        ConsistencyChecker, InMemoryLedgerStore, RoleAction, RoleEventLedger, RoleLedgerApi,
    };
    use serde_json::{json, Map, Value};
    use shared_types::{CommunityId, RoleId, UserId};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn ledger() -> Arc<RoleEventLedger<InMemoryLedgerStore>> {
        Arc::new(RoleEventLedger::new(Arc::new(InMemoryLedgerStore::new())))
    }

    fn settings() -> SettingsNormalizer<InMemorySettingsStore> {
        SettingsNormalizer::new(Arc::new(InMemorySettingsStore::new()))
    }

    fn patch(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("patch must be an object, got {other}"),
        }
    }

    // =============================================================================
    // COERCION
    // =============================================================================

    #[test]
    fn coercion_reference_values() {
        assert_eq!(coerce_bool(&json!(true)), Ok(true));
        assert_eq!(coerce_bool(&json!("true")), Ok(true));
        assert_eq!(coerce_bool(&json!("false")), Ok(false));
        assert_eq!(
            coerce_bool(&json!(1)),
            Err(CoercionError::TypeMismatch { found: "number" })
        );
    }

    // =============================================================================
    // ROLE LEDGER
    // =============================================================================

    #[tokio::test]
    async fn first_add_is_readable() {
        let ledger = ledger();
        let (g1, r1) = (CommunityId::new("g1"), RoleId::new("r1"));

        ledger
            .on_role_changed(&g1, &r1, &UserId::new("u1"), "Alice", "add", None)
            .await
            .unwrap();

        let record = ledger.get_stats(&g1, &r1).await.unwrap().unwrap();
        assert_eq!((record.total, record.restored, record.removed), (1, 0, 0));
        assert_eq!(record.events.len(), 1);
        assert_eq!(record.events[0].action, RoleAction::Add);
        assert_eq!(record.events[0].user_id, UserId::new("u1"));
        assert_eq!(record.events[0].user_tag, "Alice");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_add_and_restore() {
        let ledger = ledger();
        let (g1, r1) = (CommunityId::new("g1"), RoleId::new("r1"));

        let add = {
            let (ledger, g1, r1) = (Arc::clone(&ledger), g1.clone(), r1.clone());
            tokio::spawn(async move {
                ledger
                    .on_role_changed(&g1, &r1, &UserId::new("u1"), "Alice", "add", None)
                    .await
            })
        };
        let restore = {
            let (ledger, g1, r1) = (Arc::clone(&ledger), g1.clone(), r1.clone());
            tokio::spawn(async move {
                ledger
                    .on_role_changed(&g1, &r1, &UserId::new("u2"), "Bob", "restore", None)
                    .await
            })
        };
        add.await.unwrap().unwrap();
        restore.await.unwrap().unwrap();

        let record = ledger.get_stats(&g1, &r1).await.unwrap().unwrap();
        assert_eq!((record.total, record.restored, record.removed), (1, 1, 0));
        let mut actions: Vec<_> = record.events.iter().map(|e| e.action).collect();
        actions.sort_by_key(|a| a.as_str());
        assert_eq!(actions, vec![RoleAction::Add, RoleAction::Restore]);

        let checker = ConsistencyChecker::new(
            Arc::clone(ledger.store()),
            ledger.config().store_timeout,
        );
        assert_eq!(checker.verify(&g1, &r1).await.unwrap(), None);
    }

    // =============================================================================
    // SETTINGS
    // =============================================================================

    #[tokio::test]
    async fn later_string_update_wins() {
        let settings = settings();
        let g1 = CommunityId::new("g1");

        settings
            .update_settings(&g1, &patch(json!({ "messageLog": "true" })))
            .await
            .unwrap();
        settings
            .update_settings(&g1, &patch(json!({ "messageLog": "false" })))
            .await
            .unwrap();

        let stored = settings.get_settings(&g1).await.unwrap().unwrap();
        assert_eq!(stored.module_enabled("messageLog"), Some(false));
    }

    #[tokio::test]
    async fn rejected_patch_leaves_document_untouched() {
        let settings = settings();
        let g1 = CommunityId::new("g1");

        settings
            .apply_update(&g1, "modules.welcome", json!(true))
            .await
            .unwrap();
        let before = settings.get_settings(&g1).await.unwrap();

        let result = settings
            .update_settings(
                &g1,
                &patch(json!({ "messageLog": "true", "welcome": 0 })),
            )
            .await;
        assert!(matches!(
            result,
            Err(SettingsError::InvalidFieldType { ref field, found: "number" }) if field == "welcome"
        ));
        assert_eq!(settings.get_settings(&g1).await.unwrap(), before);
    }

    #[tokio::test]
    async fn settings_and_ledger_do_not_share_state() {
        let settings = settings();
        let ledger = ledger();
        let g1 = CommunityId::new("g1");

        settings
            .apply_update(&g1, "roleStats", json!("true"))
            .await
            .unwrap();
        assert_eq!(ledger.get_stats(&g1, &RoleId::new("r1")).await.unwrap(), None);

        ledger
            .on_role_changed(&g1, &RoleId::new("r1"), &UserId::new("u1"), "Alice", "remove", None)
            .await
            .unwrap();
        let stored = settings.get_settings(&g1).await.unwrap().unwrap();
        assert_eq!(stored.module_enabled("roleStats"), Some(true));
        assert_eq!(stored.module_enabled("messageLog"), Some(false));
    }
}
