use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{
    KnowledgeItem, NewPattern, PatternCategory, PatternFilter, PatternStats, RawPlacement,
    StoredPattern,
};

pub fn to_datetime(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
}

/// Single-statement upsert keyed by `(user_id, pattern_type, identity_key)`.
/// Natal rows keep their first payload; every row refreshes its timestamps.
pub fn upsert_pattern(conn: &Connection, user_id: &str, pattern: &NewPattern, now: i64) -> Result<()> {
    let category = pattern.category();
    let expires_at = category.expires_at(to_datetime(now)).map(|at| at.timestamp());
    let payload = serde_json::to_string(&pattern.payload)?;

    conn.execute(
        "INSERT INTO stored_patterns
         (user_id, pattern_type, category, identity_key, payload, confidence,
          generated_at, expires_at, first_detected, last_observed)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?7, ?7)
         ON CONFLICT(user_id, pattern_type, identity_key) DO UPDATE SET
            last_observed = excluded.last_observed,
            expires_at = excluded.expires_at,
            confidence = excluded.confidence,
            payload = CASE WHEN stored_patterns.category = 'natal'
                           THEN stored_patterns.payload ELSE excluded.payload END,
            generated_at = CASE WHEN stored_patterns.category = 'natal'
                                THEN stored_patterns.generated_at ELSE excluded.generated_at END",
        params![
            user_id,
            &pattern.pattern_type,
            category.as_str(),
            &pattern.identity_key,
            payload,
            pattern.confidence,
            now,
            expires_at,
        ],
    )?;

    Ok(())
}

pub fn get_patterns(
    conn: &Connection,
    user_id: &str,
    filter: &PatternFilter,
    now: i64,
) -> Result<Vec<StoredPattern>> {
    let mut conditions = vec!["user_id = ?1".to_string()];
    let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = vec![Box::new(user_id.to_string())];

    if let Some(category) = filter.category {
        params.push(Box::new(category.as_str()));
        conditions.push(format!("category = ?{}", params.len()));
    }
    if let Some(pattern_type) = &filter.pattern_type {
        params.push(Box::new(pattern_type.clone()));
        conditions.push(format!("pattern_type = ?{}", params.len()));
    }
    if !filter.include_expired {
        params.push(Box::new(now));
        conditions.push(format!(
            "(expires_at IS NULL OR expires_at > ?{})",
            params.len()
        ));
    }

    let sql = format!(
        "SELECT id, user_id, pattern_type, category, identity_key, payload, confidence,
                generated_at, expires_at, first_detected, last_observed
         FROM stored_patterns
         WHERE {}
         ORDER BY last_observed DESC, id ASC",
        conditions.join(" AND ")
    );

    let mut stmt = conn.prepare(&sql)?;
    let param_refs: Vec<&dyn rusqlite::types::ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let rows = stmt
        .query_map(param_refs.as_slice(), |row| {
            let id: i64 = row.get(0)?;
            let category: String = row.get(3)?;
            let payload: String = row.get(5)?;
            let payload = match serde_json::from_str(&payload) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("[PatternStore] Skipping pattern {} with unreadable payload: {}", id, e);
                    return Ok(None);
                }
            };
            Ok(Some(StoredPattern {
                id,
                user_id: row.get(1)?,
                pattern_type: row.get(2)?,
                category: PatternCategory::parse(&category).unwrap_or(PatternCategory::Transient),
                identity_key: row.get(4)?,
                payload,
                confidence: row.get(6)?,
                generated_at: to_datetime(row.get(7)?),
                expires_at: row.get::<_, Option<i64>>(8)?.map(to_datetime),
                first_detected: to_datetime(row.get(9)?),
                last_observed: to_datetime(row.get(10)?),
            }))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}

pub fn delete_expired_patterns(conn: &Connection, now: i64) -> Result<usize> {
    let removed = conn.execute(
        "DELETE FROM stored_patterns WHERE expires_at IS NOT NULL AND expires_at <= ?1",
        [now],
    )?;
    Ok(removed)
}

pub fn get_pattern_stats(conn: &Connection, now: i64) -> Result<PatternStats> {
    let mut stmt = conn.prepare(
        "SELECT category, COUNT(*) FROM stored_patterns GROUP BY category ORDER BY category",
    )?;
    let by_category: BTreeMap<String, usize> = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize)))?
        .collect::<Result<_, _>>()?;

    let expired_pending: i64 = conn.query_row(
        "SELECT COUNT(*) FROM stored_patterns WHERE expires_at IS NOT NULL AND expires_at <= ?1",
        [now],
        |row| row.get(0),
    )?;

    Ok(PatternStats {
        total: by_category.values().sum(),
        by_category,
        expired_pending: expired_pending as usize,
    })
}

/// Replaces the user's whole chart. Natal patterns were derived from the old
/// placements, so they are dropped in the same transaction.
pub fn save_birth_chart(conn: &Connection, user_id: &str, placements: &[RawPlacement]) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM birth_charts WHERE user_id = ?1", [user_id])?;
    tx.execute(
        "DELETE FROM stored_patterns WHERE user_id = ?1 AND category = 'natal'",
        [user_id],
    )?;
    for p in placements {
        tx.execute(
            "INSERT INTO birth_charts (user_id, body, sign, degree, ecliptic_longitude, house)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(user_id, body) DO UPDATE SET
                sign = excluded.sign,
                degree = excluded.degree,
                ecliptic_longitude = excluded.ecliptic_longitude,
                house = excluded.house",
            params![user_id, &p.body, &p.sign, p.degree, p.ecliptic_longitude, p.house],
        )?;
    }
    tx.commit()?;
    Ok(())
}

pub fn delete_patterns_in_category(
    conn: &Connection,
    user_id: &str,
    category: PatternCategory,
) -> Result<usize> {
    let removed = conn.execute(
        "DELETE FROM stored_patterns WHERE user_id = ?1 AND category = ?2",
        params![user_id, category.as_str()],
    )?;
    Ok(removed)
}

/// `None` when the user has no stored placements at all.
pub fn get_birth_chart(conn: &Connection, user_id: &str) -> Result<Option<Vec<RawPlacement>>> {
    let mut stmt = conn.prepare(
        "SELECT body, sign, degree, ecliptic_longitude, house
         FROM birth_charts WHERE user_id = ?1 ORDER BY id",
    )?;
    let placements = stmt
        .query_map([user_id], |row| {
            Ok(RawPlacement {
                body: row.get(0)?,
                sign: row.get(1)?,
                degree: row.get(2)?,
                ecliptic_longitude: row.get(3)?,
                house: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(if placements.is_empty() {
        None
    } else {
        Some(placements)
    })
}

pub fn save_profile(
    conn: &Connection,
    user_id: &str,
    birthday: Option<NaiveDate>,
    timezone: Option<&str>,
    now: i64,
) -> Result<()> {
    conn.execute(
        "INSERT INTO user_profiles (user_id, birthday, timezone, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(user_id) DO UPDATE SET
            birthday = COALESCE(excluded.birthday, user_profiles.birthday),
            timezone = COALESCE(excluded.timezone, user_profiles.timezone),
            updated_at = excluded.updated_at",
        params![user_id, birthday.map(|d| d.to_string()), timezone, now],
    )?;
    Ok(())
}

pub fn get_birthday(conn: &Connection, user_id: &str) -> Result<Option<NaiveDate>> {
    let raw: Option<Option<String>> = conn
        .query_row(
            "SELECT birthday FROM user_profiles WHERE user_id = ?1",
            [user_id],
            |row| row.get(0),
        )
        .optional()?;

    match raw.flatten() {
        Some(text) => Ok(Some(text.parse::<NaiveDate>()?)),
        None => Ok(None),
    }
}

pub fn encode_vector(vector: &[f32]) -> Vec<u8> {
    vector.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn decode_vector(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

pub fn upsert_embedding(conn: &Connection, item: &KnowledgeItem, vector: &[f32], now: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO knowledge_embeddings (slug, title, category, content, embedding, dimensions, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(slug) DO UPDATE SET
            title = excluded.title,
            category = excluded.category,
            content = excluded.content,
            embedding = excluded.embedding,
            dimensions = excluded.dimensions,
            updated_at = excluded.updated_at",
        params![
            &item.slug,
            &item.title,
            &item.category,
            &item.content,
            encode_vector(vector),
            vector.len() as i64,
            now,
        ],
    )?;
    Ok(())
}

pub fn get_embeddings(conn: &Connection, category: Option<&str>) -> Result<Vec<(KnowledgeItem, Vec<f32>)>> {
    let mut stmt = conn.prepare(
        "SELECT slug, title, category, content, embedding
         FROM knowledge_embeddings
         WHERE ?1 IS NULL OR category = ?1",
    )?;
    let rows = stmt
        .query_map([category], |row| {
            let blob: Vec<u8> = row.get(4)?;
            Ok((
                KnowledgeItem {
                    slug: row.get(0)?,
                    title: row.get(1)?,
                    category: row.get(2)?,
                    content: row.get(3)?,
                },
                decode_vector(&blob),
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn delete_embedding(conn: &Connection, slug: &str) -> Result<bool> {
    let removed = conn.execute("DELETE FROM knowledge_embeddings WHERE slug = ?1", [slug])?;
    Ok(removed > 0)
}

pub fn get_embedding_counts(conn: &Connection) -> Result<BTreeMap<String, usize>> {
    let mut stmt = conn.prepare(
        "SELECT category, COUNT(*) FROM knowledge_embeddings GROUP BY category ORDER BY category",
    )?;
    let counts = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize)))?
        .collect::<Result<_, _>>()?;
    Ok(counts)
}
