//! Static catalog of historical missions shown in the carousel.

/// A historical mission. All fields are static display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mission {
    pub name: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub achievements: &'static [&'static str],
}

/// The carousel content. Never empty.
pub const HISTORICAL_MISSIONS: [Mission; 4] = [
    Mission {
        name: "Apollo 11",
        date: "July 20, 1969",
        description: "First human moon landing mission",
        image: "https://images.nasa.gov/apollo-11-launch/apollo-11-launch~thumb.jpg",
        achievements: &[
            "First humans on the Moon",
            "Collected 21.5 kg of lunar samples",
            "Duration: 8 days, 3 hours, 18 minutes",
        ],
    },
    Mission {
        name: "Voyager 1",
        date: "September 5, 1977",
        description: "Interstellar space exploration",
        image: "https://images.nasa.gov/voyager-1-launch/voyager-1-launch~thumb.jpg",
        achievements: &[
            "First spacecraft in interstellar space",
            "Jupiter and Saturn flyby",
            "Still operational after 45+ years",
        ],
    },
    Mission {
        name: "Hubble Space Telescope",
        date: "April 24, 1990",
        description: "Revolutionary space observatory",
        image: "https://images.nasa.gov/hubble-launch/hubble-launch~thumb.jpg",
        achievements: &[
            "Over 1.5 million observations",
            "13.4 billion years lookback time",
            "Revolutionized astronomy",
        ],
    },
    Mission {
        name: "Mars Pathfinder",
        date: "July 4, 1997",
        description: "First Mars rover mission",
        image: "https://images.nasa.gov/mars-pathfinder/mars-pathfinder~thumb.jpg",
        achievements: &[
            "First successful Mars rover",
            "Analyzed Martian rocks and soil",
            "Operated for 85 days",
        ],
    },
];
