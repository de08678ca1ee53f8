//! Append-only repository of completed matches.

use chrono::{Local, NaiveDateTime};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::codec::{decode_match, encode_match};
use crate::error::TrackerError;
use crate::model::{CompletedMatch, DATE_FORMAT, MatchRecord, Player};

/// Read order for [`all_matches`]. Display wants newest first, the streak
/// walk wants oldest first; the repository imposes neither as canonical.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortOrder {
    NewestFirst,
    OldestFirst,
}

/// Persist a finalized match and return its assigned id.
pub async fn insert_match(
    pool: &SqlitePool,
    completed: &CompletedMatch,
) -> Result<i64, TrackerError> {
    let blob = encode_match(&completed.hands);
    let date = completed.completed_at.format(DATE_FORMAT).to_string();

    let result = sqlx::query(
        r#"
        INSERT INTO matches (zayaka_score, brian_score, winner, match_date, game_scores)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(completed.zayaka_total as i64)
    .bind(completed.brian_total as i64)
    .bind(completed.winner.name())
    .bind(&date)
    .bind(&blob)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    tracing::info!("match #{} saved: winner={} at {}", id, completed.winner, date);
    Ok(id)
}

/// Load every stored match in the requested order.
pub async fn all_matches(
    pool: &SqlitePool,
    order: SortOrder,
) -> Result<Vec<MatchRecord>, TrackerError> {
    let sql = match order {
        SortOrder::NewestFirst => {
            "SELECT id, zayaka_score, brian_score, winner, match_date, game_scores \
             FROM matches ORDER BY match_date DESC, id DESC"
        }
        SortOrder::OldestFirst => {
            "SELECT id, zayaka_score, brian_score, winner, match_date, game_scores \
             FROM matches ORDER BY match_date ASC, id ASC"
        }
    };

    let rows = sqlx::query(sql).fetch_all(pool).await?;
    rows.iter().map(map_row).collect()
}

/// Delete every stored match. Returns the number of rows removed. The caller
/// is responsible for confirming with the user first.
pub async fn clear_matches(pool: &SqlitePool) -> Result<u64, TrackerError> {
    let result = sqlx::query("DELETE FROM matches").execute(pool).await?;
    let removed = result.rows_affected();
    tracing::info!("match history cleared ({} records)", removed);
    Ok(removed)
}

fn map_row(row: &SqliteRow) -> Result<MatchRecord, TrackerError> {
    let id: i64 = row.try_get("id")?;
    let zayaka_total = row.try_get::<i64, _>("zayaka_score")?.max(0) as u32;
    let brian_total = row.try_get::<i64, _>("brian_score")?.max(0) as u32;
    let winner_label: String = row.try_get("winner")?;
    let match_date: String = row.try_get("match_date")?;
    let blob: String = row.try_get("game_scores")?;

    // Lenient reads: an unrecognized winner label falls back to the higher
    // stored total, an unparseable date to now.
    let winner = Player::from_name(&winner_label).unwrap_or_else(|| {
        if zayaka_total >= brian_total {
            Player::Zayaka
        } else {
            Player::Brian
        }
    });
    let completed_at = NaiveDateTime::parse_from_str(&match_date, DATE_FORMAT)
        .unwrap_or_else(|_| Local::now().naive_local());

    Ok(MatchRecord {
        id,
        zayaka_total,
        brian_total,
        winner,
        completed_at,
        hands: decode_match(&blob),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HandScore;

    async fn test_pool() -> (tempfile::TempDir, SqlitePool) {
        let dir = tempfile::tempdir().unwrap();
        let pool = crate::db::create_pool(&dir.path().join("history.db"))
            .await
            .unwrap();
        (dir, pool)
    }

    fn completed(winner: Player, hands: Vec<HandScore>, date: &str) -> CompletedMatch {
        CompletedMatch {
            zayaka_total: hands.iter().map(|h| h.zayaka).sum(),
            brian_total: hands.iter().map(|h| h.brian).sum(),
            winner,
            completed_at: NaiveDateTime::parse_from_str(date, DATE_FORMAT).unwrap(),
            hands,
        }
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let (_dir, pool) = test_pool().await;

        let saved = completed(
            Player::Zayaka,
            vec![HandScore::new(60, 0), HandScore::new(45, 0)],
            "2025-03-01 18:30:00",
        );
        let id = insert_match(&pool, &saved).await.unwrap();
        assert!(id > 0);

        let records = all_matches(&pool, SortOrder::OldestFirst).await.unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, id);
        assert_eq!(record.zayaka_total, 105);
        assert_eq!(record.brian_total, 0);
        assert_eq!(record.winner, Player::Zayaka);
        assert_eq!(record.completed_at, saved.completed_at);
        assert_eq!(record.hands, saved.hands);
    }

    #[tokio::test]
    async fn test_ids_monotonic_and_orders_differ() {
        let (_dir, pool) = test_pool().await;

        let first = completed(
            Player::Brian,
            vec![HandScore::new(0, 100)],
            "2025-03-01 10:00:00",
        );
        let second = completed(
            Player::Zayaka,
            vec![HandScore::new(100, 0)],
            "2025-03-02 10:00:00",
        );
        let id1 = insert_match(&pool, &first).await.unwrap();
        let id2 = insert_match(&pool, &second).await.unwrap();
        assert!(id2 > id1);

        let newest = all_matches(&pool, SortOrder::NewestFirst).await.unwrap();
        assert_eq!(newest[0].id, id2);

        let oldest = all_matches(&pool, SortOrder::OldestFirst).await.unwrap();
        assert_eq!(oldest[0].id, id1);
    }

    #[tokio::test]
    async fn test_clear_matches() {
        let (_dir, pool) = test_pool().await;

        for day in 1..=3 {
            let m = completed(
                Player::Zayaka,
                vec![HandScore::new(100, 0)],
                &format!("2025-03-0{} 10:00:00", day),
            );
            insert_match(&pool, &m).await.unwrap();
        }

        assert_eq!(clear_matches(&pool).await.unwrap(), 3);
        assert!(
            all_matches(&pool, SortOrder::NewestFirst)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_unknown_winner_falls_back_to_higher_total() {
        let (_dir, pool) = test_pool().await;

        sqlx::query(
            "INSERT INTO matches (zayaka_score, brian_score, winner, match_date, game_scores) \
             VALUES (30, 105, 'Nobody', '2025-03-01 10:00:00', '')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let records = all_matches(&pool, SortOrder::OldestFirst).await.unwrap();
        assert_eq!(records[0].winner, Player::Brian);
        assert!(records[0].hands.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_blob_segments_are_dropped() {
        let (_dir, pool) = test_pool().await;

        sqlx::query(
            "INSERT INTO matches (zayaka_score, brian_score, winner, match_date, game_scores) \
             VALUES (35, 0, 'Zayaka', '2025-03-01 10:00:00', \
                     'Zayaka:25, Brian:0; garbage; Zayaka:10, Brian:0')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let records = all_matches(&pool, SortOrder::OldestFirst).await.unwrap();
        assert_eq!(
            records[0].hands,
            vec![HandScore::new(25, 0), HandScore::new(10, 0)]
        );
    }
}
