//! Keyword-driven intent analysis.
//!
//! Single-word keywords match whole tokens, multi-word keywords match as
//! token phrases. Everything is lowercased first, so matching is
//! case-insensitive. The analyzer is pure: same input, same flags.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::correspondences::crystals::CRYSTALS;
use crate::correspondences::runes::ELDER_FUTHARK;
use crate::models::{ContextRequirements, QueryContext, Sign};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9]+").expect("word pattern is valid"));

const CRYSTAL_WORDS: &[&str] = &[
    "crystal", "crystals", "stone", "stones", "gem", "gems", "gemstone", "gemstones", "mineral",
];
const SPELL_WORDS: &[&str] = &[
    "spell", "spells", "ritual", "rituals", "magic", "magick", "candle", "candles", "charm",
    "charms", "manifest", "manifesting", "manifestation", "banish", "banishing", "witchcraft",
    "jar spell", "cast a",
];
const NUMEROLOGY_WORDS: &[&str] = &[
    "numerology", "number", "numbers", "life path", "personal year", "angel number",
    "angel numbers", "karmic debt", "mirror hour", "mirror hours",
];
const ASPECT_WORDS: &[&str] = &[
    "aspect", "aspects", "conjunction", "conjunct", "opposition", "square", "squares", "trine",
    "trines", "sextile", "sextiles",
];
const RETROGRADE_WORDS: &[&str] = &["retrograde", "retrogrades", "rx", "station direct", "stationing"];
const ECLIPSE_WORDS: &[&str] = &["eclipse", "eclipses", "eclipse season", "eclipse portal"];
const SABBAT_WORDS: &[&str] = &[
    "sabbat", "sabbats", "samhain", "yule", "imbolc", "ostara", "beltane", "litha", "lammas",
    "lughnasadh", "mabon", "solstice", "equinox", "wheel of the year",
];
const TAROT_WORDS: &[&str] = &["tarot", "card", "cards", "arcana", "deck", "spread"];
const RUNE_WORDS: &[&str] = &["rune", "runes", "runic", "futhark"];
const NODE_WORDS: &[&str] = &[
    "node", "nodes", "north node", "south node", "life purpose", "soul purpose", "destiny",
];
const SYNASTRY_WORDS: &[&str] = &[
    "synastry", "compatibility", "compatible", "partner", "relationship", "relationships", "love",
    "crush", "soulmate", "boyfriend", "girlfriend", "husband", "wife", "dating",
];
const DECAN_WORDS: &[&str] = &["decan", "decans"];
const WITCH_TYPE_WORDS: &[&str] = &[
    "witch type", "type of witch", "kind of witch", "what kind of witch", "my path",
    "witchy path", "green witch", "kitchen witch", "sea witch", "hedge witch", "cosmic witch",
];
const DIVINATION_WORDS: &[&str] = &[
    "divination", "scrying", "pendulum", "oracle", "dream", "dreams", "psychic", "intuition",
    "intuitive",
];
const MEDITATION_WORDS: &[&str] = &[
    "meditation", "meditate", "meditating", "breathwork", "mindfulness", "chakra", "chakras",
    "grounding",
];
const PLANETARY_DAY_WORDS: &[&str] = &[
    "planetary day", "planetary hour", "day of the week", "best day", "which day",
];
const MOON_WORDS: &[&str] = &[
    "moon", "lunar", "moon phase", "full moon", "new moon", "waxing", "waning",
];
const TEMPORAL_WORDS: &[&str] = &[
    "today", "tonight", "now", "right now", "currently", "current", "this morning",
    "this evening", "this week",
];
const BROAD_INTENT_WORDS: &[&str] = &["guidance", "insight", "insights", "advice", "direction", "clarity"];

const TRANSIT_WORDS: &[&str] = &[
    "transit", "transits", "transiting", "aspect", "aspects", "influence", "influences",
    "planetary influences",
];
const NATAL_PATTERN_WORDS: &[&str] = &[
    "pattern", "patterns", "stellium", "stelliums", "grand trine", "t square", "tsquare", "yod",
    "natal", "birth chart",
];
const RETURN_WORDS: &[&str] = &["return", "returns", "solar return"];
const PROGRESSION_WORDS: &[&str] = &[
    "progress", "progressed", "progression", "progressions", "evolve", "evolved", "evolving",
    "evolution", "changed in my chart",
];
const TRANSFORMATION_WORDS: &[&str] = &["transformation", "transformations", "transform"];

/// Tokenized, lowercased utterance.
struct Utterance {
    tokens: Vec<String>,
    token_set: HashSet<String>,
    padded: String,
}

impl Utterance {
    fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let tokens: Vec<String> = WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect();
        let padded = format!(" {} ", tokens.join(" "));
        let token_set = tokens.iter().cloned().collect();
        Self {
            tokens,
            token_set,
            padded,
        }
    }

    fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn has(&self, keyword: &str) -> bool {
        if keyword.contains(' ') {
            self.padded.contains(&format!(" {} ", keyword))
        } else {
            self.token_set.contains(keyword)
        }
    }

    fn any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.has(k))
    }

    fn mentions_crystal_name(&self) -> bool {
        CRYSTALS.iter().any(|c| {
            let name: String = c
                .name
                .to_lowercase()
                .chars()
                .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { ' ' })
                .collect();
            self.has(&crate::utils::normalize_whitespace(&name))
        })
    }

    fn rune_name(&self) -> Option<String> {
        ELDER_FUTHARK
            .iter()
            .find(|r| self.has(&r.name.to_lowercase()))
            .map(|r| r.name.to_string())
    }

    /// Last sign named, so "I'm a Leo, is a Scorpio good for me" picks Scorpio.
    fn last_sign(&self) -> Option<Sign> {
        self.tokens.iter().rev().find_map(|t| Sign::from_name(t))
    }
}

/// Flags that hold before any keyword is read.
fn baseline(has_birth_chart: bool, has_birthday: bool) -> QueryContext {
    QueryContext {
        needs_crystals: true,
        needs_aspects: has_birth_chart,
        needs_numerology: has_birthday,
        needs_moon: true,
        ..QueryContext::default()
    }
}

pub fn analyze(utterance: &str, has_birth_chart: bool, has_birthday: bool) -> QueryContext {
    let u = Utterance::new(utterance);
    if u.is_empty() {
        return baseline(has_birth_chart, has_birthday);
    }

    let crystals = u.any(CRYSTAL_WORDS) || u.mentions_crystal_name();
    let spells = u.any(SPELL_WORDS);
    let specific_rune = u.rune_name();
    let runes = u.any(RUNE_WORDS) || specific_rune.is_some();
    let tarot = u.any(TAROT_WORDS);
    let only_other_practice = !crystals && (spells || tarot || runes);

    let synastry = u.any(SYNASTRY_WORDS);
    let mut ctx = QueryContext {
        needs_crystals: crystals || !only_other_practice,
        needs_spells: spells,
        needs_numerology: u.any(NUMEROLOGY_WORDS),
        needs_aspects: u.any(ASPECT_WORDS) || has_birth_chart,
        needs_retrogrades: u.any(RETROGRADE_WORDS),
        needs_eclipses: u.any(ECLIPSE_WORDS),
        needs_sabbats: u.any(SABBAT_WORDS),
        needs_tarot: tarot,
        needs_runes: runes,
        needs_lunar_nodes: u.any(NODE_WORDS),
        needs_synastry: synastry,
        needs_decans: u.any(DECAN_WORDS),
        needs_witch_types: u.any(WITCH_TYPE_WORDS),
        needs_divination: u.any(DIVINATION_WORDS),
        needs_meditation: u.any(MEDITATION_WORDS),
        needs_planetary_day: u.any(PLANETARY_DAY_WORDS) || u.any(TEMPORAL_WORDS),
        needs_moon: u.any(MOON_WORDS),
        specific_rune,
        partner_sign: if synastry { u.last_sign() } else { None },
        ..QueryContext::default()
    };

    let broad = u.any(BROAD_INTENT_WORDS);
    ctx.suggest_tarot = broad && !ctx.needs_tarot;
    ctx.suggest_runes = broad && !ctx.needs_runes;
    ctx.suggest_divination = broad && !ctx.needs_divination;
    ctx.suggest_sabbat = broad && !ctx.needs_sabbats;
    ctx.suggest_meditation = broad && !ctx.needs_meditation;

    ctx
}

/// Which expensive derivations the utterance calls for.
pub fn derive_requirements(utterance: &str, query: &QueryContext, has_birthday: bool) -> ContextRequirements {
    let u = Utterance::new(utterance);
    ContextRequirements {
        needs_personal_transits: u.any(TRANSIT_WORDS) || u.any(TEMPORAL_WORDS) || query.needs_retrogrades,
        needs_natal_patterns: u.any(NATAL_PATTERN_WORDS),
        needs_planetary_returns: has_birthday && u.any(RETURN_WORDS),
        needs_progressed_chart: u.any(PROGRESSION_WORDS),
        needs_eclipses: u.any(TRANSFORMATION_WORDS) || query.needs_eclipses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mercury_retrograde_crystal_question() {
        let q = analyze("What crystals help with my Mercury retrograde today?", true, false);
        assert!(q.needs_crystals);
        assert!(q.needs_retrogrades);
        assert!(q.needs_planetary_day);
        assert!(q.needs_aspects);
        assert!(!q.needs_spells);
        assert!(!q.needs_numerology);
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "Any guidance on my Saturn return and love life with a Scorpio?";
        let a = analyze(text, true, true);
        let b = analyze(text, true, true);
        assert_eq!(a, b);
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.partner_sign, Some(Sign::Scorpio));
    }

    #[test]
    fn empty_input_uses_baseline() {
        let q = analyze("   ", false, true);
        assert_eq!(q, baseline(false, true));
        assert!(q.needs_numerology);
        assert!(!q.needs_aspects);
    }

    #[test]
    fn crystals_drop_only_for_other_practices() {
        assert!(!analyze("Give me a tarot spread", false, false).needs_crystals);
        assert!(analyze("A crystal and a tarot card for tonight", false, false).needs_crystals);
        assert!(analyze("How is my week looking?", false, false).needs_crystals);
    }

    #[test]
    fn single_words_match_whole_tokens_only() {
        let q = analyze("I feel scared", false, false);
        assert!(!q.needs_tarot);
        let q = analyze("What does the card mean", false, false);
        assert!(q.needs_tarot);
    }

    #[test]
    fn punctuation_splits_tokens() {
        let u = Utterance::new("Mercury-Retrograde, 3 crystals?!");
        assert_eq!(u.tokens, vec!["mercury", "retrograde", "3", "crystals"]);
        assert_eq!(u.padded, " mercury retrograde 3 crystals ");
        assert!(u.token_set.contains("crystals"));
    }

    #[test]
    fn suggestions_need_broad_intent_and_a_missing_hard_flag() {
        let q = analyze("I need guidance about my tarot reading", false, false);
        assert!(!q.suggest_tarot);
        assert!(q.suggest_runes);
        assert!(q.suggest_meditation);

        let plain = analyze("Tell me about runes", false, false);
        assert!(!plain.suggest_tarot);
        assert!(!plain.suggest_runes);
    }

    #[test]
    fn rune_names_are_extracted() {
        let q = analyze("what does FEHU mean for me", false, false);
        assert!(q.needs_runes);
        assert_eq!(q.specific_rune.as_deref(), Some("Fehu"));
    }

    #[test]
    fn requirement_keywords() {
        let transits = [
            "What transits am I experiencing?",
            "How are these aspects affecting me?",
            "What planetary influences are active?",
        ];
        for text in transits {
            let q = analyze(text, false, false);
            assert!(derive_requirements(text, &q, false).needs_personal_transits, "{}", text);
        }

        let natal = [
            "What patterns are in my natal chart?",
            "Tell me about my stellium",
            "Do I have a grand trine?",
            "What about my birth chart patterns?",
        ];
        for text in natal {
            let q = analyze(text, false, false);
            assert!(derive_requirements(text, &q, false).needs_natal_patterns, "{}", text);
        }

        let progressed = [
            "What about my progressed chart?",
            "How have I evolved?",
            "What has changed in my chart?",
        ];
        for text in progressed {
            let q = analyze(text, false, false);
            assert!(derive_requirements(text, &q, false).needs_progressed_chart, "{}", text);
        }

        let eclipses = [
            "Are there any eclipses affecting me?",
            "Tell me about eclipse portals",
            "What transformations are happening?",
        ];
        for text in eclipses {
            let q = analyze(text, false, false);
            assert!(derive_requirements(text, &q, false).needs_eclipses, "{}", text);
        }
    }

    #[test]
    fn returns_need_a_birthday() {
        let text = "Tell me about my Saturn return";
        let q = analyze(text, true, true);
        assert!(derive_requirements(text, &q, true).needs_planetary_returns);
        assert!(!derive_requirements(text, &q, false).needs_planetary_returns);
    }

    #[test]
    fn moon_phase_question_is_cheap() {
        let text = "What's the moon phase?";
        let q = analyze(text, true, true);
        assert!(q.needs_moon);
        let r = derive_requirements(text, &q, true);
        assert!(!r.any());
    }

    #[test]
    fn case_insensitive() {
        for text in ["what transits am i experiencing?", "WHAT TRANSITS AM I EXPERIENCING?"] {
            let q = analyze(text, false, false);
            assert!(derive_requirements(text, &q, false).needs_personal_transits);
        }
    }
}
