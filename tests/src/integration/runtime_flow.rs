//! # Runtime Flow
//!
//! Role changes sent on the node runtime intake end up in the ledger, with
//! redeliveries collapsed by idempotency key and invalid actions rejected.

#[cfg(test)]
mod tests {
    use gl_02_role_ledger::RoleLedgerApi;
    use node_runtime::{IntakeStats, NodeRuntime, RoleChanged, RuntimeConfig};
    use shared_types::{CommunityId, RoleId, UserId};

    fn change(user: usize, action: &str, key: Option<String>) -> RoleChanged {
        RoleChanged {
            community_id: CommunityId::new("g1"),
            role_id: RoleId::new("r1"),
            user_id: UserId::new(format!("u{user}")),
            user_tag: format!("member#{user:04}"),
            action: action.to_string(),
            idempotency_key: key,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn intake_from_many_producers() {
        const PRODUCERS: usize = 8;
        const PER_PRODUCER: usize = 25;

        let runtime = NodeRuntime::new(RuntimeConfig::default()).unwrap();
        runtime.start().unwrap();

        let producers: Vec<_> = (0..PRODUCERS)
            .map(|p| {
                let intake = runtime.intake();
                tokio::spawn(async move {
                    for i in 0..PER_PRODUCER {
                        let user = p * PER_PRODUCER + i;
                        let action = if i % 5 == 0 { "remove" } else { "add" };
                        intake.send(change(user, action, None)).await.unwrap();
                    }
                })
            })
            .collect();
        for producer in producers {
            producer.await.unwrap();
        }

        let report = runtime.shutdown().await.unwrap();
        assert_eq!(report.intake.recorded, (PRODUCERS * PER_PRODUCER) as u64);
        assert!(report.divergences.is_empty());

        let container = runtime.container();
        let record = container
            .ledger
            .get_stats(&CommunityId::new("g1"), &RoleId::new("r1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.removed, (PRODUCERS * PER_PRODUCER / 5) as u64);
        assert_eq!(record.total + record.removed, (PRODUCERS * PER_PRODUCER) as u64);
    }

    #[tokio::test]
    async fn redelivered_changes_recorded_once() {
        let mut config = RuntimeConfig::default();
        config.ledger.require_idempotency_key = true;
        let runtime = NodeRuntime::new(config).unwrap();
        runtime.start().unwrap();

        let intake = runtime.intake();
        let key = uuid::Uuid::new_v4().to_string();
        for _ in 0..3 {
            intake.send(change(1, "add", Some(key.clone()))).await.unwrap();
        }
        intake.send(change(2, "add", None)).await.unwrap();
        intake.send(change(3, "promote", Some("k-promote".into()))).await.unwrap();

        let report = runtime.shutdown().await.unwrap();
        assert_eq!(
            report.intake,
            IntakeStats {
                recorded: 3,
                rejected: 2,
                failed: 0
            }
        );

        let events = runtime
            .container()
            .ledger
            .list_events(&CommunityId::new("g1"), &RoleId::new("r1"))
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].idempotency_key.as_deref(), Some(key.as_str()));
    }
}
