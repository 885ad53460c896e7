mod common;

use common::{interest, open_db, product, seed_catalog};
use recs_core::models::RecomputeMode;
use recs_core::ports::InterestRepository;
use recs_core::service::{self, ServiceError};

#[tokio::test]
async fn duplicate_interest_is_rejected_and_first_record_kept() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    service::record_interest(&db, RecomputeMode::OnRead, interest("espresso", "alice", 7.0))
        .await?;

    let err = service::record_interest(
        &db,
        RecomputeMode::OnRead,
        interest("espresso", "alice", 3.0),
    )
    .await
    .unwrap_err();

    match err {
        ServiceError::DuplicateInterest {
            product_id,
            user_id,
        } => {
            assert_eq!(product_id, "espresso");
            assert_eq!(user_id, "alice");
        }
        other => panic!("expected DuplicateInterest, got {other}"),
    }

    // The first record is unchanged.
    let stored = db.get_interest("espresso", "alice").await?.unwrap();
    assert_eq!(stored.score, 7.0);

    Ok(())
}

#[tokio::test]
async fn missing_product_fails_before_any_persistence() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    let err = service::record_interest(&db, RecomputeMode::OnRead, interest("ghost", "alice", 5.0))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "product", .. }));

    assert!(db.get_interest("ghost", "alice").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn missing_category_fails_the_second_order_check() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    // Break the invariant behind the service's back: the product remains
    // but its category row is gone.
    sqlx::query("delete from category where name = 'tea'")
        .execute(&db.writer)
        .await?;

    let err = service::record_interest(&db, RecomputeMode::OnRead, interest("matcha", "bob", 5.0))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "category", .. }));
    assert!(db.get_interest("matcha", "bob").await?.is_none());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn simultaneous_duplicate_writes_yield_one_success_one_rejection() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    let first = tokio::spawn({
        let db = db.clone();
        async move {
            service::record_interest(&db, RecomputeMode::OnRead, interest("espresso", "alice", 5.0))
                .await
        }
    });
    let second = tokio::spawn({
        let db = db.clone();
        async move {
            service::record_interest(&db, RecomputeMode::OnRead, interest("espresso", "alice", 5.0))
                .await
        }
    });

    let (first, second) = tokio::join!(first, second);
    let results = [first?, second?];

    // Exactly one write lands; the loser is refused as a duplicate, never
    // surfaced as a raw key conflict from the store.
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    for result in results {
        if let Err(err) = result {
            assert!(
                matches!(err, ServiceError::DuplicateInterest { .. }),
                "expected DuplicateInterest, got {err}"
            );
        }
    }

    let stored = db.get_interest("espresso", "alice").await?.unwrap();
    assert_eq!(stored.score, 5.0);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn interest_writes_racing_a_catalog_replace_leave_no_orphans() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    let writes = tokio::spawn({
        let db = db.clone();
        async move {
            for n in 0..32 {
                // NotFound once the replace lands is expected; an interest
                // row pointing at a deleted product never is.
                let user = format!("user-{n}");
                let _ = service::record_interest(
                    &db,
                    RecomputeMode::OnWrite,
                    interest("espresso", &user, 5.0),
                )
                .await;
            }
        }
    });
    let replace = tokio::spawn({
        let db = db.clone();
        async move { service::replace_catalog(&db, vec![product("cider", "Cider", "juice")]).await }
    });

    let (writes, replace) = tokio::join!(writes, replace);
    writes?;
    replace??;

    let orphaned_interests = sqlx::query_scalar::<_, i64>(
        r#"
        select count(*) from interest i
        left join product p on i.product_id = p.id
        where p.id is null
        "#,
    )
    .fetch_one(&db.reader)
    .await?;
    assert_eq!(orphaned_interests, 0);

    let orphaned_scores = sqlx::query_scalar::<_, i64>(
        r#"
        select count(*) from product_score s
        left join product p on s.product_id = p.id
        where p.id is null
        "#,
    )
    .fetch_one(&db.reader)
    .await?;
    assert_eq!(orphaned_scores, 0);

    Ok(())
}

#[tokio::test]
async fn interests_are_listed_per_product() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    service::record_interest(&db, RecomputeMode::OnRead, interest("latte", "bob", 2.0)).await?;
    service::record_interest(&db, RecomputeMode::OnRead, interest("latte", "alice", 9.0)).await?;
    service::record_interest(&db, RecomputeMode::OnRead, interest("matcha", "alice", 4.0)).await?;

    let latte = db.interests_for_product("latte").await?;
    assert_eq!(latte.len(), 2);
    assert!(latte.iter().all(|i| i.product_id == "latte"));

    Ok(())
}
