mod common;

use common::{interest, open_db, product, seed_catalog};
use recs_core::models::{RankQuery, RecomputeMode};
use recs_core::ports::ProductRepository;
use recs_core::service::{self, ServiceError};

fn query(limit: usize, reverse: bool) -> RankQuery {
    RankQuery {
        limit,
        reverse,
        ..RankQuery::default()
    }
}

#[tokio::test]
async fn product_score_is_the_arithmetic_mean() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    for (user, score) in [("alice", 2.0), ("bob", 4.0), ("carol", 6.0)] {
        service::record_interest(&db, RecomputeMode::OnRead, interest("espresso", user, score))
            .await?;
    }

    let ranked = service::rank_products(&db, &RankQuery::default(), RecomputeMode::OnRead).await?;
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].product.product_id, "espresso");
    assert_eq!(ranked[0].score, 4.0);

    Ok(())
}

#[tokio::test]
async fn reverse_flag_inverts_the_descending_default() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    service::record_interest(&db, RecomputeMode::OnRead, interest("espresso", "alice", 8.0))
        .await?;
    service::record_interest(&db, RecomputeMode::OnRead, interest("latte", "alice", 5.0)).await?;
    service::record_interest(&db, RecomputeMode::OnRead, interest("matcha", "alice", 2.0)).await?;

    // reverse = false: strictly descending
    let ranked = service::rank_products(&db, &query(10, false), RecomputeMode::OnRead).await?;
    let scores: Vec<f64> = ranked.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![8.0, 5.0, 2.0]);

    // reverse = true: strictly ascending
    let ranked = service::rank_products(&db, &query(10, true), RecomputeMode::OnRead).await?;
    let scores: Vec<f64> = ranked.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![2.0, 5.0, 8.0]);

    Ok(())
}

#[tokio::test]
async fn limit_truncates_to_the_extreme_entries() -> anyhow::Result<()> {
    let db = open_db().await?;
    service::replace_catalog(
        &db,
        (1..=5)
            .map(|n| product(&format!("p{n}"), &format!("P{n}"), "stuff"))
            .collect(),
    )
    .await?;

    for n in 1..=5 {
        service::record_interest(
            &db,
            RecomputeMode::OnRead,
            interest(&format!("p{n}"), "alice", n as f64),
        )
        .await?;
    }

    // limit = 2 keeps the two highest when descending...
    let ranked = service::rank_products(&db, &query(2, false), RecomputeMode::OnRead).await?;
    let ids: Vec<&str> = ranked.iter().map(|p| p.product.product_id.as_str()).collect();
    assert_eq!(ids, vec!["p5", "p4"]);

    // ...and the two lowest when ascending.
    let ranked = service::rank_products(&db, &query(2, true), RecomputeMode::OnRead).await?;
    let ids: Vec<&str> = ranked.iter().map(|p| p.product.product_id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);

    Ok(())
}

#[tokio::test]
async fn read_path_persists_the_score_cache() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    service::record_interest(&db, RecomputeMode::OnRead, interest("latte", "alice", 6.0)).await?;
    service::rank_products(&db, &RankQuery::default(), RecomputeMode::OnRead).await?;

    let cached = db.cached_product_scores(10, false).await?;
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].product_id, "latte");
    assert_eq!(cached[0].score, 6.0);

    Ok(())
}

#[tokio::test]
async fn write_mode_serves_rankings_from_the_cache() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    service::record_interest(&db, RecomputeMode::OnWrite, interest("espresso", "alice", 9.0))
        .await?;
    service::record_interest(&db, RecomputeMode::OnWrite, interest("espresso", "bob", 5.0))
        .await?;
    service::record_interest(&db, RecomputeMode::OnWrite, interest("matcha", "alice", 3.0))
        .await?;

    let ranked = service::rank_products(&db, &RankQuery::default(), RecomputeMode::OnWrite).await?;
    let ids: Vec<&str> = ranked.iter().map(|p| p.product.product_id.as_str()).collect();
    assert_eq!(ids, vec!["espresso", "matcha"]);
    assert_eq!(ranked[0].score, 7.0);

    let categories =
        service::rank_categories(&db, &RankQuery::default(), RecomputeMode::OnWrite).await?;
    assert_eq!(categories[0].category, "coffee");
    assert_eq!(categories[0].score, Some(7.0));

    Ok(())
}

#[tokio::test]
async fn categories_rank_by_mean_across_their_products() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    // coffee: (8 + 4) / 2 = 6, tea: 2
    service::record_interest(&db, RecomputeMode::OnRead, interest("espresso", "alice", 8.0))
        .await?;
    service::record_interest(&db, RecomputeMode::OnRead, interest("latte", "alice", 4.0)).await?;
    service::record_interest(&db, RecomputeMode::OnRead, interest("matcha", "alice", 2.0)).await?;

    let ranked = service::rank_categories(&db, &RankQuery::default(), RecomputeMode::OnRead).await?;
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].category, "coffee");
    assert_eq!(ranked[0].score, Some(6.0));
    assert_eq!(ranked[1].category, "tea");
    assert_eq!(ranked[1].score, Some(2.0));

    Ok(())
}

#[tokio::test]
async fn an_oversized_limit_returns_every_row() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    service::record_interest(&db, RecomputeMode::OnRead, interest("espresso", "alice", 8.0))
        .await?;
    service::record_interest(&db, RecomputeMode::OnRead, interest("latte", "alice", 5.0)).await?;
    service::record_interest(&db, RecomputeMode::OnRead, interest("matcha", "alice", 2.0)).await?;

    // A limit beyond i64 range saturates instead of wrapping into a
    // negative SQL limit.
    let ranked = service::rank_products(&db, &query(usize::MAX, false), RecomputeMode::OnRead)
        .await?;
    assert_eq!(ranked.len(), 3);

    let cached = db.cached_product_scores(usize::MAX, false).await?;
    assert_eq!(cached.len(), 3);

    Ok(())
}

#[tokio::test]
async fn category_aggregation_skips_products_with_no_category_row() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    service::record_interest(&db, RecomputeMode::OnRead, interest("espresso", "alice", 8.0))
        .await?;
    service::record_interest(&db, RecomputeMode::OnRead, interest("matcha", "alice", 2.0)).await?;

    // Remove the category row underneath matcha. Category scores live on
    // the category row itself, so no dangling cached score can remain; the
    // aggregation join simply drops the orphaned product.
    sqlx::query("delete from category where name = 'tea'")
        .execute(&db.writer)
        .await?;

    let ranked = service::rank_categories(&db, &RankQuery::default(), RecomputeMode::OnRead).await?;
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].category, "coffee");
    assert_eq!(ranked[0].score, Some(8.0));

    Ok(())
}

#[tokio::test]
async fn dangling_score_row_is_an_integrity_violation() -> anyhow::Result<()> {
    let db = open_db().await?;
    seed_catalog(&db).await?;

    service::record_interest(&db, RecomputeMode::OnRead, interest("latte", "alice", 6.0)).await?;

    // Delete the product underneath its interest; the aggregate now
    // references a missing entity.
    sqlx::query("delete from product where id = 'latte'")
        .execute(&db.writer)
        .await?;
    sqlx::query("insert into product_score (product_id, score) values ('latte', 6.0)")
        .execute(&db.writer)
        .await?;

    let err = service::rank_products(&db, &RankQuery::default(), RecomputeMode::OnWrite)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::IntegrityViolation { entity: "product", .. }
    ));

    Ok(())
}
