/// Life areas of the twelve houses, indexed 1..=12.
pub static HOUSES: &[&str; 12] = &[
    "Self, identity and physical appearance",
    "Values, finances and possessions",
    "Communication, learning and siblings",
    "Home, family and emotional roots",
    "Creativity, romance and self-expression",
    "Health, work and daily routines",
    "Partnerships and one-on-one relationships",
    "Transformation, intimacy and shared resources",
    "Philosophy, higher learning and travel",
    "Career, reputation and life direction",
    "Friends, community and hopes",
    "Spirituality, the subconscious and hidden matters",
];

pub fn meaning(house: u8) -> Option<&'static str> {
    (1..=12)
        .contains(&house)
        .then(|| HOUSES[house as usize - 1])
}

pub fn is_angular(house: u8) -> bool {
    matches!(house, 1 | 4 | 7 | 10)
}

pub static GLOSSARY: &[(&str, &str)] = &[
    ("Ascendant", "The sign rising on the eastern horizon at birth; your outward style"),
    ("Aspect", "An angular relationship between two points in a chart"),
    ("Conjunction", "Two bodies at the same degree, fusing their energies"),
    ("Decan", "A ten-degree third of a sign with its own sub-ruler"),
    ("Eclipse", "A new or full moon near the lunar nodes that marks a turning point"),
    ("House", "One of twelve chart sectors representing areas of life"),
    ("Lunar Nodes", "The points where the Moon's orbit crosses the ecliptic; the soul's axis"),
    ("Orb", "The allowed distance from exact for an aspect to count"),
    ("Planetary Return", "A planet coming back to its natal position"),
    ("Progression", "A symbolic chart advanced one day for each year of life"),
    ("Retrograde", "Apparent backward motion of a planet as seen from Earth"),
    ("Stellium", "Three or more planets gathered in one sign or house"),
    ("Transit", "A current planetary position contacting the natal chart"),
];
