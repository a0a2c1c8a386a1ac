//! The embeddable knowledge catalog and the offline batch indexer that
//! feeds it to the vector table.

use std::time::Duration;

use futures_util::future::join_all;

use crate::correspondences::aspects::{ASPECTS, RETROGRADES};
use crate::correspondences::crystals::CRYSTALS;
use crate::correspondences::houses::{GLOSSARY, HOUSES};
use crate::correspondences::planets::{self, PLANETS};
use crate::correspondences::runes::ELDER_FUTHARK;
use crate::correspondences::sabbats::WHEEL_OF_THE_YEAR;
use crate::correspondences::signs::{self, SIGNS};
use crate::correspondences::spells::SPELLS;
use crate::correspondences::tarot::MAJOR_ARCANA;
use crate::models::{Body, IndexReport, KnowledgeItem, Sign};
use crate::services::retrieval::Retriever;

fn slug(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| {
            p.to_lowercase()
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn signs() -> impl Iterator<Item = KnowledgeItem> {
    SIGNS.iter().map(|s| {
        KnowledgeItem::new(
            "signs",
            slug(&["sign", s.sign.name()]),
            format!("{} {}", s.sign.name(), s.symbol),
            format!(
                "{} Keywords: {}. Strengths: {}. Weaknesses: {}.",
                s.description,
                s.keywords.join(", "),
                s.strengths.join(", "),
                s.weaknesses.join(", ")
            ),
        )
    })
}

fn planets() -> impl Iterator<Item = KnowledgeItem> {
    PLANETS.iter().map(|p| {
        KnowledgeItem::new(
            "planets",
            slug(&["planet", p.body.name()]),
            p.body.name(),
            format!(
                "{} Keywords: {}. Chakra: {}.",
                p.description,
                p.keywords.join(", "),
                p.chakra
            ),
        )
    })
}

fn tarot() -> impl Iterator<Item = KnowledgeItem> {
    MAJOR_ARCANA.iter().map(|c| {
        KnowledgeItem::new(
            "tarot",
            slug(&["tarot", c.name]),
            c.name,
            format!("{} Keywords: {}.", c.meaning, c.keywords.join(", ")),
        )
    })
}

fn crystals() -> impl Iterator<Item = KnowledgeItem> {
    CRYSTALS.iter().map(|c| {
        KnowledgeItem::new(
            "crystals",
            slug(&["crystal", c.id]),
            c.name,
            format!(
                "{} Properties: {}. Spellwork: {} Healing: {}",
                c.description,
                c.properties.join(", "),
                c.spellwork,
                c.healing
            ),
        )
    })
}

fn houses() -> impl Iterator<Item = KnowledgeItem> {
    HOUSES.iter().enumerate().map(|(i, meaning)| {
        let n = (i + 1).to_string();
        KnowledgeItem::new(
            "houses",
            slug(&["house", n.as_str()]),
            format!("House {}", n),
            *meaning,
        )
    })
}

fn aspects() -> impl Iterator<Item = KnowledgeItem> {
    ASPECTS.iter().map(|a| {
        KnowledgeItem::new(
            "aspects",
            slug(&["aspect", a.kind.name()]),
            a.kind.name(),
            format!("{} Keywords: {}.", a.description, a.keywords.join(", ")),
        )
    })
}

fn decans() -> impl Iterator<Item = KnowledgeItem> {
    Sign::ALL.into_iter().flat_map(|sign| {
        (0..3).filter_map(move |d| {
            signs::decan(sign, d as f64 * 10.0 + 5.0).map(|info| {
                let n = info.decan.to_string();
                KnowledgeItem::new(
                    "decans",
                    slug(&["decan", sign.name(), n.as_str()]),
                    format!("{} decan {} ({})", sign.name(), info.decan, info.degrees),
                    info.interpretation,
                )
            })
        })
    })
}

fn glossary() -> impl Iterator<Item = KnowledgeItem> {
    GLOSSARY
        .iter()
        .map(|&(term, definition)| KnowledgeItem::new("glossary", slug(&["term", term]), term, definition))
}

fn placements() -> impl Iterator<Item = KnowledgeItem> {
    Body::MAJOR.into_iter().flat_map(|body| {
        Sign::ALL.into_iter().map(move |sign| {
            let planet_words = planets::info(body)
                .map(|p| p.keywords.join(", "))
                .unwrap_or_default();
            KnowledgeItem::new(
                "placements",
                slug(&[body.name(), "in", sign.name()]),
                format!("{} in {}", body.name(), sign.name()),
                format!(
                    "{} themes ({}) expressed through {} qualities ({}).",
                    body.name(),
                    planet_words,
                    sign.name(),
                    signs::info(sign).keywords.join(", ")
                ),
            )
        })
    })
}

fn compatibility_pairs() -> impl Iterator<Item = KnowledgeItem> {
    Sign::ALL.into_iter().enumerate().flat_map(|(i, first)| {
        Sign::ALL.into_iter().skip(i).map(move |second| {
            let c = signs::compatibility(first, second);
            KnowledgeItem::new(
                "compatibility",
                slug(&["compatibility", first.name(), second.name()]),
                format!("{} and {}", first.name(), second.name()),
                format!("{} Score {}/100. {}.", c.summary, c.score, c.element_dynamic),
            )
        })
    })
}

fn retrogrades() -> impl Iterator<Item = KnowledgeItem> {
    RETROGRADES.iter().map(|r| {
        KnowledgeItem::new(
            "retrogrades",
            slug(&[r.planet.name(), "retrograde"]),
            format!("{} Retrograde", r.planet.name()),
            format!(
                "{} Do: {}. Avoid: {}.",
                r.description,
                r.what_to_do.join(", "),
                r.what_to_avoid.join(", ")
            ),
        )
    })
}

fn runes() -> impl Iterator<Item = KnowledgeItem> {
    ELDER_FUTHARK.iter().map(|r| {
        KnowledgeItem::new(
            "runes",
            slug(&["rune", r.name]),
            format!("{} {}", r.name, r.symbol),
            format!(
                "{} Keywords: {}. Uses: {}.",
                r.meaning,
                r.keywords.join(", "),
                r.magical_uses.join(", ")
            ),
        )
    })
}

fn spells() -> impl Iterator<Item = KnowledgeItem> {
    SPELLS.iter().map(|s| {
        KnowledgeItem::new(
            "spells",
            slug(&["spell", s.id]),
            s.title,
            format!("{} Category: {}.", s.description, s.category),
        )
    })
}

fn sabbats() -> impl Iterator<Item = KnowledgeItem> {
    WHEEL_OF_THE_YEAR.iter().map(|s| {
        KnowledgeItem::new(
            "sabbats",
            slug(&["sabbat", s.name]),
            s.name,
            format!(
                "{} ({}). Rituals: {}. Colors: {}.",
                s.description,
                s.season,
                s.rituals.join(", "),
                s.colors.join(", ")
            ),
        )
    })
}

/// Every static item worth embedding.
pub fn catalog() -> Vec<KnowledgeItem> {
    signs()
        .chain(planets())
        .chain(tarot())
        .chain(crystals())
        .chain(houses())
        .chain(aspects())
        .chain(decans())
        .chain(glossary())
        .chain(placements())
        .chain(compatibility_pairs())
        .chain(retrogrades())
        .chain(runes())
        .chain(spells())
        .chain(sabbats())
        .collect()
}

/// Embeds items in fixed-size batches with a pause between batches. A failed
/// item is logged and skipped.
pub async fn index_items(
    retriever: &Retriever,
    items: Vec<KnowledgeItem>,
    batch_size: usize,
    batch_delay: Duration,
) -> IndexReport {
    let mut report = IndexReport {
        total: items.len(),
        ..IndexReport::default()
    };
    let batch_size = batch_size.max(1);
    let batches = items.len().div_ceil(batch_size);

    for (i, batch) in items.chunks(batch_size).enumerate() {
        if i > 0 && !batch_delay.is_zero() {
            tokio::time::sleep(batch_delay).await;
        }
        let texts: Vec<String> = batch.iter().map(KnowledgeItem::embedding_text).collect();
        let vectors = join_all(texts.iter().map(|t| retriever.embed(t))).await;

        for (item, vector) in batch.iter().zip(vectors) {
            let outcome = match vector {
                Ok(v) => retriever.upsert(item.clone(), v).await,
                Err(e) => Err(e),
            };
            match outcome {
                Ok(()) => report.succeeded += 1,
                Err(e) => {
                    log::warn!("[Knowledge] Failed to index {}: {}", item.slug, e);
                    report.failed += 1;
                }
            }
        }
        log::info!(
            "[Knowledge] Batch {}/{} done ({} indexed so far)",
            i + 1,
            batches,
            report.succeeded
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::database::{open_in_memory, shared};
    use crate::error::{CosmicError, CosmicResult};
    use crate::services::retrieval::testing::HashingEmbedder;
    use crate::services::retrieval::Embedder;

    #[test]
    fn catalog_covers_every_category_with_unique_slugs() {
        let items = catalog();
        let categories: HashSet<&str> = items.iter().map(|i| i.category.as_str()).collect();
        for expected in [
            "signs", "planets", "tarot", "crystals", "houses", "aspects", "decans", "glossary",
            "placements", "compatibility", "retrogrades", "runes", "spells", "sabbats",
        ] {
            assert!(categories.contains(expected), "missing {}", expected);
        }
        let slugs: HashSet<&str> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs.len(), items.len());
        assert_eq!(items.iter().filter(|i| i.category == "placements").count(), 120);
        assert_eq!(items.iter().filter(|i| i.category == "compatibility").count(), 78);
        assert_eq!(items.iter().filter(|i| i.category == "decans").count(), 36);
    }

    /// Fails on any text mentioning Leo.
    struct PickyEmbedder;

    #[async_trait]
    impl Embedder for PickyEmbedder {
        async fn embed(&self, text: &str) -> CosmicResult<Vec<f32>> {
            if text.contains("Leo") {
                Err(CosmicError::retrieval("rejected"))
            } else {
                HashingEmbedder.embed(text).await
            }
        }
    }

    #[tokio::test]
    async fn indexer_continues_past_failures() {
        let retriever = Retriever::new(
            Arc::new(PickyEmbedder),
            shared(open_in_memory().unwrap()),
            Duration::from_secs(1),
        );
        let items = vec![
            KnowledgeItem::new("signs", "sign-aries", "Aries", "Cardinal fire"),
            KnowledgeItem::new("signs", "sign-leo", "Leo", "Fixed fire"),
            KnowledgeItem::new("signs", "sign-virgo", "Virgo", "Mutable earth"),
        ];
        let report = index_items(&retriever, items, 2, Duration::from_millis(1)).await;
        assert_eq!(report, IndexReport { total: 3, succeeded: 2, failed: 1 });
        assert_eq!(retriever.counts().await.unwrap().get("signs"), Some(&2));
    }
}
