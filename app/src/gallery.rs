//! Pieces shown on the design and artwork pages.

/// One gallery figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    pub title: &'static str,
    /// Site-relative image path.
    pub image: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

pub static DESIGNS: &[Artwork] = &[
    Artwork {
        title: "Portfolio wireframes",
        image: "/assets/Design/Wireframes.svg",
        alt: "Low fidelity wireframes of the home, blog and gallery pages",
        caption: "Early wireframes used to plan the layout and navigation of this site.",
    },
    Artwork {
        title: "Mobile navigation",
        image: "/assets/Design/MobileNavigation.svg",
        alt: "A phone screen showing a collapsed menu button and an expanded menu",
        caption: "The collapsible navigation bar designed for small screens.",
    },
    Artwork {
        title: "Type and colour",
        image: "/assets/Design/StyleGuide.svg",
        alt: "A style guide with heading sizes, body text and a four colour palette",
        caption: "The style guide defining the typefaces, type scale and colour palette.",
    },
];

pub static ARTWORKS: &[Artwork] = &[
    Artwork {
        title: "City at dusk",
        image: "/assets/Artwork/CityAtDusk.svg",
        alt: "A digital painting of a city skyline under an orange evening sky",
        caption: "Digital painting exploring warm and cool light.",
    },
    Artwork {
        title: "Low poly fox",
        image: "/assets/Artwork/LowPolyFox.svg",
        alt: "A fox built from flat coloured triangles",
        caption: "A low poly illustration made from a single photograph reference.",
    },
    Artwork {
        title: "Generative waves",
        image: "/assets/Artwork/GenerativeWaves.svg",
        alt: "Overlapping blue sine waves of varying thickness",
        caption: "Lines generated in code by summing sine waves of different frequencies.",
    },
];
