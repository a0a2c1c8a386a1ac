//! Joins the moment (moon, transits, chart, birthday) against the
//! correspondence tables. Stateless: every call builds its answer from the
//! input alone.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::correspondences::aspects::{self, AspectNature};
use crate::correspondences::crystals::{self, CRYSTALS};
use crate::correspondences::spells::SPELLS;
use crate::correspondences::{planetary_days, planets, sabbats, tarot, Crystal, Spell, TarotCard};
use crate::models::{
    sort_by_priority, AspectGuidance, BirthChart, CosmicRecommendations, MoonState,
    PersonalTransitImpact, PlanetaryDayRecommendation, Priority, QueryContext, Recommendation,
    RecommendationRef, RetrogradeGuidance, SabbatRecommendation, SuggestionDomain,
};
use crate::services::{advanced, numerology};

const MAX_CRYSTALS: usize = 5;
const MAX_SPELLS: usize = 5;
const MAX_TAROT: usize = 3;
const CRYSTALS_PER_TRANSIT: usize = 2;
const SABBAT_HORIZON_DAYS: i64 = 14;
const DEFAULT_INTENTION: &str = "manifestation and alignment";
const STEADYING: &[&str] = &["grounding", "protection", "patience"];

/// Everything one turn knows when recommendations are built.
pub struct RecommendationInput<'a> {
    pub chart: Option<&'a BirthChart>,
    pub transits: &'a [PersonalTransitImpact],
    pub moon: &'a MoonState,
    pub query: &'a QueryContext,
    pub intentions: &'a [String],
    pub birthday: Option<NaiveDate>,
    pub now: DateTime<Utc>,
    pub tz: Tz,
}

pub fn recommend(input: &RecommendationInput) -> CosmicRecommendations {
    let query = input.query;
    let local_today = input.now.with_timezone(&input.tz).date_naive();

    let crystals = crystal_recommendations(input.transits, input.moon, input.intentions);
    let spells = spell_recommendations(input.transits, input.moon, input.intentions);
    let numerology = input
        .birthday
        .and_then(|b| numerology::insight(b, input.chart, input.now, input.tz));

    let aspect_guidance = aspect_guidance(input.transits);
    let retrograde_guidance = retrograde_guidance(input.transits);
    let sabbat = sabbat_recommendation(local_today);
    let tarot_cards = tarot_recommendations(input.transits);
    let planetary_day = planetary_day_recommendation(local_today);

    let mut recs = CosmicRecommendations {
        crystals,
        spells,
        numerology,
        aspect_guidance,
        retrograde_guidance,
        sabbat,
        tarot_cards,
        planetary_day: Some(planetary_day),
        ..CosmicRecommendations::default()
    };

    if query.needs_runes {
        let element = advanced::primary_element(input.chart, input.moon);
        recs.runes = advanced::runes(query.specific_rune.as_deref(), element);
    }
    if let Some(chart) = input.chart {
        if query.needs_lunar_nodes {
            recs.lunar_nodes = advanced::lunar_nodes(chart);
        }
        if query.needs_synastry {
            recs.synastry = advanced::synastry(chart, query.partner_sign);
        }
        if query.needs_decans {
            recs.decan = advanced::sun_decan(chart);
        }
        if query.needs_witch_types {
            recs.witch_types = advanced::witch_types(chart);
        }
    }
    if query.needs_divination || query.suggest_divination {
        recs.divination = advanced::divination(input.chart);
    }

    recs.suggestions = suggestions(query, recs.sabbat.as_ref());

    if query.needs_spells && !recs.crystals.is_empty() {
        if let Some(chart) = input.chart {
            let element = chart
                .sun()
                .map(|s| s.sign.element())
                .unwrap_or_else(|| input.moon.sign.element());
            let intention = input
                .intentions
                .first()
                .map(String::as_str)
                .unwrap_or(DEFAULT_INTENTION);
            let day = planetary_days::for_weekday(local_today.weekday());
            let picked: Vec<&'static Crystal> = recs.crystals.iter().map(|r| r.entry).collect();
            recs.ritual = Some(advanced::ritual(element, intention, input.moon, day, &picked));
        }
    }

    recs.synthesis = synthesis(&recs, input.transits, input.moon);

    log::debug!(
        "[Recommender] {} crystals, {} spells, {} tarot, {} suggestions",
        recs.crystals.len(),
        recs.spells.len(),
        recs.tarot_cards.len(),
        recs.suggestions.len()
    );
    recs
}

fn matches_intention(crystal: &Crystal, intentions: &[String]) -> bool {
    intentions.iter().any(|i| {
        let needle = i.trim().to_lowercase();
        !needle.is_empty()
            && crystal
                .intentions
                .iter()
                .chain(crystal.properties.iter())
                .any(|x| x.to_lowercase().contains(&needle))
    })
}

pub fn crystal_recommendations(
    transits: &[PersonalTransitImpact],
    moon: &MoonState,
    intentions: &[String],
) -> Vec<Recommendation<Crystal>> {
    let mut seen = HashSet::new();
    let mut out: Vec<Recommendation<Crystal>> = Vec::new();
    let mut push = |crystal: &'static Crystal, reason: String, priority: Priority| {
        if seen.insert(crystal.id) {
            out.push(Recommendation::new(crystal, reason, priority));
        }
    };

    for transit in transits {
        let aspect = transit.aspect_to_natal.as_ref().map(|c| c.kind);
        let priority = if aspect.map(|a| a.is_challenging()).unwrap_or(false) {
            Priority::High
        } else {
            Priority::Medium
        };
        for crystal in crystals::by_transit(transit.planet, aspect, transit.sign)
            .into_iter()
            .take(CRYSTALS_PER_TRANSIT)
        {
            push(crystal, format!("Supports your {} transit", transit.label()), priority);
        }
    }

    for intention in intentions {
        if let Some(crystal) = crystals::by_intention(intention).next() {
            push(
                crystal,
                format!("Supports your intention: {}", intention.trim()),
                Priority::Medium,
            );
        }
    }

    let family = moon.phase.family();
    for crystal in crystals::by_moon_phase(family)
        .filter(|c| c.zodiac_signs.contains(&moon.sign))
        .take(2)
    {
        push(
            crystal,
            format!("Aligns with the {} in {}", moon.phase.name(), moon.sign.name()),
            Priority::High,
        );
    }
    for crystal in crystals::by_moon_phase(family).take(3) {
        push(
            crystal,
            format!("Resonates with {} energy", moon.phase.name()),
            Priority::Medium,
        );
    }

    if out.iter().any(|r| matches_intention(r.entry, intentions)) {
        out.retain(|r| matches_intention(r.entry, intentions));
    }
    sort_by_priority(&mut out);
    out.truncate(MAX_CRYSTALS);
    out
}

pub fn spell_recommendations(
    transits: &[PersonalTransitImpact],
    moon: &MoonState,
    intentions: &[String],
) -> Vec<Recommendation<Spell>> {
    let family = moon.phase.family();
    let mut out: Vec<Recommendation<Spell>> = Vec::new();

    for spell in SPELLS {
        let phase_match = spell
            .moon_phases
            .iter()
            .any(|p| *p == family || *p == moon.phase.name());
        let planet_match = spell
            .planets
            .iter()
            .any(|p| transits.iter().any(|t| t.planet == *p));
        let category = spell.category.to_lowercase();
        let intention_match = intentions.iter().any(|i| {
            let needle = i.trim().to_lowercase();
            !needle.is_empty() && category.contains(&needle)
        });

        if phase_match && planet_match {
            out.push(Recommendation::new(
                spell,
                format!("Optimal timing with {} energy", moon.phase.name()),
                Priority::High,
            ));
        } else if intention_match {
            out.push(Recommendation::new(spell, "Aligns with your intention", Priority::Medium));
        }
        if out.len() >= MAX_SPELLS {
            break;
        }
    }

    sort_by_priority(&mut out);
    out
}

fn crystals_with(
    filter: impl Fn(&Crystal) -> bool,
    properties: &[&str],
) -> Vec<&'static str> {
    CRYSTALS
        .iter()
        .filter(|c| {
            filter(*c)
                || (!properties.is_empty()
                    && c.properties.iter().any(|p| properties.iter().any(|want| p.contains(want))))
        })
        .take(3)
        .map(|c| c.name)
        .collect()
}

pub fn aspect_guidance(transits: &[PersonalTransitImpact]) -> Vec<AspectGuidance> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for transit in transits {
        let Some(contact) = &transit.aspect_to_natal else {
            continue;
        };
        let label = format!(
            "{} {} {}",
            transit.planet.name(),
            contact.kind.name(),
            contact.natal_planet.name()
        );
        if !seen.insert(label.clone()) {
            continue;
        }

        let meaning = aspects::meaning(contact.kind);
        let challenging = meaning.nature == AspectNature::Challenging;
        let keyword = meaning.keywords.first().copied().unwrap_or("this energy").to_lowercase();
        let kind = contact.kind;
        let crystals = crystals_with(
            |c| c.aspects.contains(&kind),
            if challenging { STEADYING } else { &[] },
        );
        let practices = if challenging {
            vec![
                format!("Work with {} through meditation", keyword),
                format!(
                    "Journal about the tension between {} and {}",
                    transit.planet.name(),
                    contact.natal_planet.name()
                ),
                format!("Use grounding practices to navigate this {}", kind.name()),
            ]
        } else {
            vec![
                format!("Celebrate the {} of this alignment", keyword),
                format!("Channel this {} into creative projects", kind.name()),
                "Express gratitude for the ease in these life areas".to_string(),
            ]
        };

        out.push(AspectGuidance {
            aspect: label,
            nature: meaning.nature,
            description: meaning.description,
            keywords: meaning.keywords,
            crystals,
            practices,
        });
    }
    out
}

/// Guidance for transits whose event is a retrograde, one per planet.
pub fn retrograde_guidance(transits: &[PersonalTransitImpact]) -> Vec<RetrogradeGuidance> {
    let mut seen = HashSet::new();
    transits
        .iter()
        .filter(|t| t.is_retrograde() && seen.insert(t.planet))
        .filter_map(|t| aspects::retrograde(t.planet))
        .map(|r| {
            let planet = r.planet;
            RetrogradeGuidance {
                planet,
                description: r.description,
                what_to_do: r.what_to_do,
                what_to_avoid: r.what_to_avoid,
                crystals: CRYSTALS
                    .iter()
                    .filter(|c| c.planets.contains(&planet))
                    .filter(|c| {
                        c.properties
                            .iter()
                            .any(|p| p.contains("clarity") || p.contains("patience") || p.contains("reflection"))
                    })
                    .take(3)
                    .map(|c| c.name)
                    .collect(),
            }
        })
        .collect()
}

pub fn sabbat_recommendation(today: NaiveDate) -> Option<SabbatRecommendation> {
    let (sabbat, date, days_until) = sabbats::next_sabbat(today)?;
    Some(SabbatRecommendation {
        sabbat: sabbat.name,
        date,
        days_until,
        description: sabbat.description,
        colors: sabbat.colors,
        crystals: sabbat.crystals,
        herbs: sabbat.herbs,
        rituals: sabbat.rituals,
    })
}

pub fn tarot_recommendations(transits: &[PersonalTransitImpact]) -> Vec<Recommendation<TarotCard>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for transit in transits {
        if let Some(card) = tarot::by_planet(transit.planet).next() {
            if seen.insert(card.name) {
                out.push(Recommendation::new(
                    card,
                    format!("Resonates with your {} energy", transit.planet.name()),
                    Priority::Medium,
                ));
            }
        }
        if let Some(sign) = transit.sign {
            if let Some(card) = tarot::by_sign(sign).next() {
                if seen.insert(card.name) {
                    out.push(Recommendation::new(
                        card,
                        format!("Aligned with {} in {}", transit.planet.name(), sign.name()),
                        Priority::Medium,
                    ));
                }
            }
        }
        if out.len() >= MAX_TAROT {
            break;
        }
    }
    out.truncate(MAX_TAROT);
    out
}

pub fn planetary_day_recommendation(local_today: NaiveDate) -> PlanetaryDayRecommendation {
    let day = planetary_days::for_weekday(local_today.weekday());
    PlanetaryDayRecommendation {
        day: day.day,
        planet: day.planet,
        best_for: day.best_for,
        colors: day.colors,
        crystals: crystals::by_planet(day.planet).take(3).map(|c| c.name).collect(),
    }
}

fn suggestions(
    query: &QueryContext,
    sabbat: Option<&SabbatRecommendation>,
) -> BTreeMap<SuggestionDomain, String> {
    let mut out = BTreeMap::new();
    if query.suggest_tarot && !query.needs_tarot {
        out.insert(
            SuggestionDomain::Tarot,
            "Consider pulling a tarot card for additional guidance on this transit.".to_string(),
        );
    }
    if query.suggest_runes && !query.needs_runes {
        out.insert(
            SuggestionDomain::Runes,
            "Rune divination could offer insight into this situation.".to_string(),
        );
    }
    if query.suggest_divination && !query.needs_divination {
        out.insert(
            SuggestionDomain::Divination,
            "Your chart suggests natural divination abilities; explore scrying or pendulum work."
                .to_string(),
        );
    }
    if query.suggest_sabbat && !query.needs_sabbats {
        if let Some(s) = sabbat {
            out.insert(
                SuggestionDomain::Sabbat,
                format!("{} approaches; rituals could enhance this energy.", s.sabbat),
            );
        }
    }
    if query.suggest_meditation && !query.needs_meditation {
        out.insert(
            SuggestionDomain::Meditation,
            "A short meditation could help you integrate this energy.".to_string(),
        );
    }
    out
}

fn synthesis(recs: &CosmicRecommendations, transits: &[PersonalTransitImpact], moon: &MoonState) -> String {
    let mut parts = vec![format!(
        "The cosmic energies are aligned with the {} in {} ({} element).",
        moon.phase.name(),
        moon.sign.name(),
        moon.sign.element().name()
    )];

    if let Some(top) = transits.first() {
        let chakra = planets::chakra_for(Some(top.planet), top.sign.map(|s| s.element()));
        parts.push(format!(
            "Your {} ({} chakra energy) is a significant influence right now.",
            top.label(),
            chakra
        ));
    }

    if let Some(n) = &recs.numerology {
        let theme = n
            .personal_year_guidance
            .split('.')
            .next()
            .unwrap_or(n.personal_year_guidance)
            .to_lowercase();
        parts.push(format!(
            "As a Life Path {} ({} energy), you're in a Personal Year {}, emphasizing {}.",
            n.life_path,
            n.planet.name(),
            n.personal_year,
            theme
        ));
    }

    if let Some(top) = recs.crystals.first() {
        let chakra = top
            .entry
            .chakras
            .first()
            .map(|c| format!(" ({} chakra)", c))
            .unwrap_or_default();
        parts.push(format!(
            "Working with {}{} can help: {}.",
            top.entry.name,
            chakra,
            top.reason.to_lowercase()
        ));
    }

    if let Some(top) = recs.spells.first() {
        parts.push(format!(
            "The {} is particularly potent with current energies.",
            top.entry.title
        ));
    }

    // Crystals and spells already have their own sentence.
    let also: Vec<String> = recs
        .all()
        .iter()
        .filter(|r| r.priority() == Priority::High)
        .filter(|r| !matches!(r, RecommendationRef::Crystal(_) | RecommendationRef::Spell(_)))
        .take(3)
        .map(|r| format!("{} ({})", r.name(), r.reason().to_lowercase()))
        .collect();
    if !also.is_empty() {
        parts.push(format!("Also strongly indicated: {}.", also.join("; ")));
    }

    if let Some(top) = recs.aspect_guidance.first() {
        let nature = match top.nature {
            AspectNature::Harmonious => "harmonious",
            AspectNature::Challenging => "challenging",
            AspectNature::Neutral => "concentrated",
        };
        let keyword = top.keywords.first().copied().unwrap_or("focus").to_lowercase();
        parts.push(format!("Your {} brings {} energy: {}.", top.aspect, nature, keyword));
    }

    if let Some(s) = recs.sabbat.as_ref().filter(|s| s.days_until <= SABBAT_HORIZON_DAYS) {
        let ritual = s
            .rituals
            .first()
            .map(|r| r.to_lowercase())
            .unwrap_or_else(|| "seasonal energy".to_string());
        parts.push(format!(
            "{} approaches in {} days, bringing {}.",
            s.sabbat, s.days_until, ritual
        ));
    }

    if let Some(day) = &recs.planetary_day {
        let best = day
            .best_for
            .first()
            .map(|b| b.to_lowercase())
            .unwrap_or_else(|| "focused work".to_string());
        parts.push(format!(
            "Today is {} ({}'s day), ideal for {}.",
            day.day,
            day.planet.name(),
            best
        ));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AspectKind, Body, MoonPhase, NatalContact, Sign, TransitWindow};
    use chrono::TimeZone;

    fn moon(phase: MoonPhase, sign: Sign) -> MoonState {
        MoonState {
            phase,
            sign,
            longitude: sign.index() as f64 * 30.0 + 10.0,
            illumination: 0.5,
        }
    }

    fn transit(planet: Body, event: &str, contact: Option<(AspectKind, Body)>, sign: Sign) -> PersonalTransitImpact {
        PersonalTransitImpact {
            planet,
            event: event.to_string(),
            sign: Some(sign),
            aspect_to_natal: contact.map(|(kind, natal_planet)| NatalContact {
                kind,
                natal_planet,
                orb: Some(1.0),
            }),
            house: Some(3),
            date: Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap(),
            window: TransitWindow::Current,
            relevance: 1.0,
        }
    }

    fn input<'a>(
        transits: &'a [PersonalTransitImpact],
        moon: &'a MoonState,
        query: &'a QueryContext,
        intentions: &'a [String],
    ) -> RecommendationInput<'a> {
        RecommendationInput {
            chart: None,
            transits,
            moon,
            query,
            intentions,
            birthday: None,
            now: Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap(),
            tz: chrono_tz::UTC,
        }
    }

    #[test]
    fn crystals_are_capped_and_sorted() {
        let transits = vec![
            transit(Body::Mercury, "square", Some((AspectKind::Square, Body::Sun)), Sign::Gemini),
            transit(Body::Venus, "trine", Some((AspectKind::Trine, Body::Moon)), Sign::Taurus),
            transit(Body::Mars, "enters", None, Sign::Aries),
        ];
        let m = moon(MoonPhase::FullMoon, Sign::Cancer);
        let picked = crystal_recommendations(&transits, &m, &[]);
        assert!(!picked.is_empty() && picked.len() <= MAX_CRYSTALS);
        assert!(picked.windows(2).all(|w| w[0].priority <= w[1].priority));
        assert_eq!(picked[0].priority, Priority::High);

        let mut ids: Vec<&str> = picked.iter().map(|r| r.entry.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), picked.len());
    }

    #[test]
    fn stated_intention_filters_crystals() {
        let m = moon(MoonPhase::NewMoon, Sign::Aries);
        let intentions = vec!["love".to_string()];
        let picked = crystal_recommendations(&[], &m, &intentions);
        assert!(!picked.is_empty());
        assert!(picked.iter().all(|r| matches_intention(r.entry, &intentions)));
    }

    #[test]
    fn spells_need_phase_and_planet_or_intention() {
        let transits = vec![transit(Body::Mercury, "retrograde", None, Sign::Aries)];
        let waning = moon(MoonPhase::WaningCrescent, Sign::Pisces);
        let spells = spell_recommendations(&transits, &waning, &[]);
        assert!(spells.iter().any(|s| s.entry.id == "mercury-clarity-charm"));
        assert!(spells.len() <= MAX_SPELLS);

        let full = moon(MoonPhase::FullMoon, Sign::Virgo);
        let by_intention = spell_recommendations(&[], &full, &["protection".to_string()]);
        assert!(!by_intention.is_empty());
        assert!(by_intention.iter().all(|s| s.entry.category == "protection"));
    }

    #[test]
    fn retrograde_guidance_only_for_retrogrades() {
        let transits = vec![
            transit(Body::Mercury, "retrograde", None, Sign::Aries),
            transit(Body::Mercury, "Retrograde station", None, Sign::Aries),
            transit(Body::Venus, "enters", None, Sign::Taurus),
        ];
        let guidance = retrograde_guidance(&transits);
        assert_eq!(guidance.len(), 1);
        assert_eq!(guidance[0].planet, Body::Mercury);
        assert!(!guidance[0].what_to_do.is_empty());
    }

    #[test]
    fn aspect_guidance_practices_follow_nature() {
        let transits = vec![
            transit(Body::Saturn, "square", Some((AspectKind::Square, Body::Sun)), Sign::Pisces),
            transit(Body::Jupiter, "trine", Some((AspectKind::Trine, Body::Venus)), Sign::Cancer),
        ];
        let guidance = aspect_guidance(&transits);
        assert_eq!(guidance[0].aspect, "Saturn square Sun");
        assert_eq!(guidance[0].nature, AspectNature::Challenging);
        assert!(guidance[0].practices[1].contains("Saturn and Sun"));
        assert!(guidance[1].practices[0].starts_with("Celebrate"));
        assert!(guidance.iter().all(|g| g.crystals.len() <= 3));
    }

    #[test]
    fn sabbat_days_are_real() {
        let s = sabbat_recommendation(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()).unwrap();
        assert_eq!(s.sabbat, "Ostara");
        assert_eq!(s.days_until, (s.date - NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()).num_days());
        assert!(s.days_until > 0 && s.days_until <= 14);
    }

    #[test]
    fn tarot_is_capped_at_three() {
        let transits = vec![
            transit(Body::Mercury, "square", None, Sign::Gemini),
            transit(Body::Venus, "trine", None, Sign::Taurus),
            transit(Body::Mars, "enters", None, Sign::Aries),
        ];
        let cards = tarot_recommendations(&transits);
        assert_eq!(cards.len(), MAX_TAROT);
    }

    #[test]
    fn suggestions_only_for_unrequested_domains() {
        let query = QueryContext {
            needs_tarot: true,
            suggest_tarot: true,
            suggest_runes: true,
            suggest_meditation: true,
            ..QueryContext::default()
        };
        let out = suggestions(&query, None);
        assert!(!out.contains_key(&SuggestionDomain::Tarot));
        assert!(out.contains_key(&SuggestionDomain::Runes));
        assert!(out.contains_key(&SuggestionDomain::Meditation));
        assert!(!out.contains_key(&SuggestionDomain::Sabbat));
    }

    #[test]
    fn synthesis_reports_only_present_facts() {
        let m = moon(MoonPhase::FullMoon, Sign::Leo);
        let query = QueryContext::default();
        let recs = recommend(&input(&[], &m, &query, &[]));
        assert!(recs.synthesis.starts_with("The cosmic energies are aligned with the Full Moon in Leo (Fire element)."));
        assert!(!recs.synthesis.contains("Life Path"));
        assert!(recs.synthesis.contains("Today is Saturday"));
        assert!(recs.runes.is_empty());
        assert!(recs.ritual.is_none());
    }

    #[test]
    fn synthesis_names_high_priority_picks_of_other_kinds() {
        let m = moon(MoonPhase::NewMoon, Sign::Aries);
        let recs = CosmicRecommendations {
            tarot_cards: vec![Recommendation::new(&tarot::MAJOR_ARCANA[0], "Fresh start", Priority::High)],
            runes: vec![Recommendation::new(
                &crate::correspondences::runes::ELDER_FUTHARK[0],
                "Abundance",
                Priority::Low,
            )],
            ..CosmicRecommendations::default()
        };
        let text = synthesis(&recs, &[], &m);
        let expected = format!("Also strongly indicated: {} (fresh start).", tarot::MAJOR_ARCANA[0].name);
        assert!(text.contains(&expected), "{}", text);
        assert!(!text.contains(crate::correspondences::runes::ELDER_FUTHARK[0].name));
        assert_eq!(recs.all().len(), 2);
    }

    #[test]
    fn planetary_day_uses_local_date() {
        let m = moon(MoonPhase::FullMoon, Sign::Leo);
        let query = QueryContext::default();
        let mut i = input(&[], &m, &query, &[]);
        i.now = Utc.with_ymd_and_hms(2025, 3, 15, 23, 30, 0).unwrap();
        i.tz = chrono_tz::Asia::Tokyo;
        let recs = recommend(&i);
        assert_eq!(recs.planetary_day.map(|d| d.day), Some("Sunday"));
    }
}
