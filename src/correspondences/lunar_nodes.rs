use crate::models::Sign;

/// North Node lesson and growth area per sign.
pub fn north_node(sign: Sign) -> (&'static str, &'static str) {
    match sign {
        Sign::Aries => ("Develop independence, courage and self-assertion", "Taking initiative and trusting yourself"),
        Sign::Taurus => ("Build stability and appreciate simplicity", "Grounding, self-worth and material security"),
        Sign::Gemini => ("Embrace curiosity and communicate", "Learning, networking and seeing many perspectives"),
        Sign::Cancer => ("Nurture emotions and create a home", "Emotional intelligence, family and self-care"),
        Sign::Leo => ("Express creativity and shine authentically", "Self-expression, leadership and joy"),
        Sign::Virgo => ("Serve others and master skills", "Practical service, health and daily ritual"),
        Sign::Libra => ("Cultivate relationships and seek balance", "Partnership, fairness and cooperation"),
        Sign::Scorpio => ("Embrace transformation and go deep", "Intimacy, shared resources and rebirth"),
        Sign::Sagittarius => ("Seek truth and expand horizons", "Philosophy, travel and higher learning"),
        Sign::Capricorn => ("Build structure and take responsibility", "Ambition, discipline and long-term planning"),
        Sign::Aquarius => ("Embrace uniqueness and serve the collective", "Community, innovation and individuality"),
        Sign::Pisces => ("Develop compassion and trust intuition", "Spirituality, empathy and creativity"),
    }
}

/// South Node comfort pattern and what to release per sign.
pub fn south_node(sign: Sign) -> (&'static str, &'static str) {
    match sign {
        Sign::Aries => ("Over-reliance on independence", "Going it alone and impulsiveness"),
        Sign::Taurus => ("Attachment to comfort and security", "Stubbornness and fear of change"),
        Sign::Gemini => ("Mental restlessness and surface connection", "Scattered energy and avoiding depth"),
        Sign::Cancer => ("Over-attachment to emotional safety", "Dependency and staying in the comfort zone"),
        Sign::Leo => ("Need for external validation", "Drama and pride"),
        Sign::Virgo => ("Perfectionism and criticism", "Anxiety and nitpicking"),
        Sign::Libra => ("People-pleasing and conflict avoidance", "Codependency and indecision"),
        Sign::Scorpio => ("Control and emotional intensity", "Jealousy and power struggles"),
        Sign::Sagittarius => ("Avoiding commitment", "Restlessness and dogmatism"),
        Sign::Capricorn => ("Workaholism and emotional repression", "Rigidity and fear of vulnerability"),
        Sign::Aquarius => ("Emotional detachment", "Aloofness and feeling superior"),
        Sign::Pisces => ("Escapism and victimhood", "Martyrdom and weak boundaries"),
    }
}
