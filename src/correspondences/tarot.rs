use serde::Serialize;

use crate::models::{Body, Element, Sign};

#[derive(Debug, Serialize)]
pub struct TarotCard {
    pub number: u8,
    pub name: &'static str,
    pub element: Element,
    pub planet: Option<Body>,
    pub zodiac_sign: Option<Sign>,
    pub keywords: &'static [&'static str],
    pub meaning: &'static str,
}

macro_rules! card {
    ($n:expr, $name:expr, $el:ident, $planet:expr, $sign:expr, [$($kw:expr),*], $meaning:expr) => {
        TarotCard {
            number: $n,
            name: $name,
            element: Element::$el,
            planet: $planet,
            zodiac_sign: $sign,
            keywords: &[$($kw),*],
            meaning: $meaning,
        }
    };
}

pub static MAJOR_ARCANA: &[TarotCard] = &[
    card!(0, "The Fool", Air, Some(Body::Uranus), None, ["beginnings", "leap of faith"], "A fresh start taken with an open heart"),
    card!(1, "The Magician", Air, Some(Body::Mercury), None, ["skill", "will", "communication"], "Focused will turns ideas into results"),
    card!(2, "The High Priestess", Water, Some(Body::Moon), None, ["intuition", "mystery"], "Trust what you know beneath words"),
    card!(3, "The Empress", Earth, Some(Body::Venus), None, ["abundance", "nurture"], "Creative fertility and sensual abundance"),
    card!(4, "The Emperor", Fire, None, Some(Sign::Aries), ["structure", "authority"], "Build order and take responsibility"),
    card!(5, "The Hierophant", Earth, None, Some(Sign::Taurus), ["tradition", "teaching"], "Learn from lineage and shared wisdom"),
    card!(6, "The Lovers", Air, None, Some(Sign::Gemini), ["choice", "union"], "A values-led choice about connection"),
    card!(7, "The Chariot", Water, None, Some(Sign::Cancer), ["determination", "direction"], "Harness opposing forces toward one goal"),
    card!(8, "Strength", Fire, None, Some(Sign::Leo), ["courage", "compassion"], "Gentle mastery over instinct"),
    card!(9, "The Hermit", Earth, None, Some(Sign::Virgo), ["introspection", "guidance"], "Withdraw to find your own light"),
    card!(10, "Wheel of Fortune", Fire, Some(Body::Jupiter), None, ["cycles", "luck"], "The turning of fate and timing"),
    card!(11, "Justice", Air, None, Some(Sign::Libra), ["fairness", "truth"], "Cause and effect come into balance"),
    card!(12, "The Hanged Man", Water, Some(Body::Neptune), None, ["surrender", "perspective"], "Pause and see from a new angle"),
    card!(13, "Death", Water, None, Some(Sign::Scorpio), ["endings", "transformation"], "An ending that clears the way for rebirth"),
    card!(14, "Temperance", Fire, None, Some(Sign::Sagittarius), ["balance", "moderation"], "Blend opposites with patience"),
    card!(15, "The Devil", Earth, None, Some(Sign::Capricorn), ["attachment", "shadow"], "Name the chains that bind you"),
    card!(16, "The Tower", Fire, Some(Body::Mars), None, ["upheaval", "revelation"], "Sudden change topples false structures"),
    card!(17, "The Star", Air, None, Some(Sign::Aquarius), ["hope", "renewal"], "Healing and quiet faith after the storm"),
    card!(18, "The Moon", Water, None, Some(Sign::Pisces), ["illusion", "dreams"], "Walk carefully through uncertainty"),
    card!(19, "The Sun", Fire, Some(Body::Sun), None, ["joy", "vitality"], "Clarity, success and warmth"),
    card!(20, "Judgement", Fire, Some(Body::Pluto), None, ["awakening", "calling"], "Answer the call to rise renewed"),
    card!(21, "The World", Earth, Some(Body::Saturn), None, ["completion", "integration"], "A cycle completes and integrates"),
];

pub fn by_planet(planet: Body) -> impl Iterator<Item = &'static TarotCard> {
    MAJOR_ARCANA.iter().filter(move |c| c.planet == Some(planet))
}

pub fn by_sign(sign: Sign) -> impl Iterator<Item = &'static TarotCard> {
    MAJOR_ARCANA.iter().filter(move |c| c.zodiac_sign == Some(sign))
}
