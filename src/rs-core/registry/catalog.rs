use super::{Collection, MediaItem};

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    /// `(url, title, description)` of each item.
    items: &'static [(&'static str, &'static str, &'static str)],
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "works",
        name: "Works",
        description: "A selection of recent client work.",
        items: &[
            (
                "https://vimeo.com/1092080900/e3b4de5129?share=copy",
                "Orbit",
                "A dynamic visual narrative showcasing our recent client collaboration.",
            ),
            (
                "https://vimeo.com/1092081999/e97da79b8b?share=copy",
                "Furniture Showcase",
                "An elegant presentation of bespoke furniture designs.",
            ),
            (
                "https://vimeo.com/1092081163/402f6632f7?share=copy",
                "Chocolate Craft",
                "Behind the scenes of artisanal chocolate making.",
            ),
            (
                "https://vimeo.com/1092080665/477e7b71d4?share=copy",
                "Nature's Resilience",
                "Capturing the enduring beauty of landscapes.",
            ),
        ],
    },
    CatalogEntry {
        id: "orbit",
        name: "Orbit",
        description: "Partnered to create breathtaking travel documentaries and promotional \
                      films, showcasing adventure and exploration.",
        items: &[
            (
                "https://youtube.com/shorts/v3He5TboCO0",
                "Orbit - Dynamic Travel Shots",
                "Capturing the essence of adventure with stunning short clips.",
            ),
            (
                "https://vimeo.com/1092080900/e3b4de5129?share=copy",
                "Orbit - Adventure Series",
                "A dynamic visual narrative exploring intricate patterns and fluid movements \
                 to represent innovation.",
            ),
            (
                "https://youtube.com/shorts/v3He5TboCO0",
                "Orbit - Cultural Journeys",
                "Exploring rich cultures and historical sites around the world.",
            ),
        ],
    },
    CatalogEntry {
        id: "qrs-furniture",
        name: "QRS Furniture",
        description: "Collaborated on their captivating visual campaigns, showcasing the unique \
                      design and quality of their furniture.",
        items: &[
            (
                "https://vimeo.com/1092081999/e97da79b8b?share=copy",
                "QRS - Living Room Collection",
                "An elegant presentation of bespoke furniture designs, highlighting \
                 craftsmanship and contemporary aesthetics.",
            ),
            (
                "https://vimeo.com/your-qrs-video-2-url",
                "QRS - Bedroom & Office Furniture",
                "A look at comfortable bedroom sets and ergonomic office solutions.",
            ),
        ],
    },
    CatalogEntry {
        id: "habtam-bet",
        name: "Habtam Bet",
        description: "Produced engaging video content that highlights the artistry of their \
                      traditional culinary products.",
        items: &[
            (
                "https://vimeo.com/1092081163/402f6632f7?share=copy",
                "Habtam Bet - Chocolate Craft",
                "Behind the scenes of artisanal chocolate making, from bean selection to final \
                 packaging.",
            ),
            (
                "https://vimeo.com/your-habtam-video-2-url",
                "Habtam Bet - Traditional Delicacies",
                "The preparation and presentation of traditional culinary delights.",
            ),
        ],
    },
    CatalogEntry {
        id: "four-winds",
        name: "Four Winds",
        description: "Created architectural visualizations and promotional videos for their \
                      sustainable building projects.",
        items: &[
            (
                "https://vimeo.com/1092080665/477e7b71d4?share=copy",
                "Four Winds - Nature's Resilience",
                "Capturing the enduring beauty of landscapes and the perseverance of life.",
            ),
            (
                "https://vimeo.com/your-fourwinds-video-2-url",
                "Four Winds - Sustainable Architecture",
                "Innovative and eco-friendly building designs.",
            ),
        ],
    },
    CatalogEntry {
        id: "ewawa-hair",
        name: "Ewawa Hair",
        description: "Developed vibrant and stylish video advertisements for a modern hair care \
                      brand.",
        items: &[
            (
                "https://youtube.com/shorts/N_xLMs9dfjg",
                "Ewawa Hair - Style Transformations",
                "Stunning hair transformations.",
            ),
            (
                "https://youtube.com/shorts/z4pFqxCg66s",
                "Ewawa Hair - Product Showcase",
                "The quality and benefits of Ewawa Hair care products.",
            ),
            (
                "https://youtube.com/shorts/9-4UL38Z_p4",
                "Ewawa Hair - Product Showcase",
                "The quality and benefits of Ewawa Hair care products.",
            ),
            (
                "https://youtube.com/shorts/pdFctTmguTE",
                "Ewawa Hair - Product Showcase",
                "The quality and benefits of Ewawa Hair care products.",
            ),
            (
                "https://youtube.com/shorts/eSFLLdVVtQs",
                "Ewawa Hair - Product Showcase",
                "The quality and benefits of Ewawa Hair care products.",
            ),
        ],
    },
    CatalogEntry {
        id: "sheqela",
        name: "Sheqela",
        description: "Shot and directed their latest fashion lookbook.",
        items: &[
            (
                "https://vimeo.com/your-sheqela-video-1-url",
                "Sheqela - Latest Collection",
                "Dynamic visuals for their vibrant summer apparel.",
            ),
            (
                "https://vimeo.com/your-sheqela-video-2-url",
                "Sheqela - Street Style",
                "Capturing urban fashion trends.",
            ),
        ],
    },
    CatalogEntry {
        id: "nib",
        name: "Nib chocolate",
        description: "Developed engaging promotional content for Nib chocolate.",
        items: &[
            (
                "https://vimeo.com/your-nib-video-1-url",
                "Nib chocolate",
                "A seamless tasting experience.",
            ),
            (
                "https://vimeo.com/your-nib-video-2-url",
                "Nib chocolate",
                "A commitment to customer satisfaction.",
            ),
        ],
    },
    CatalogEntry {
        id: "a-one",
        name: "A One skincare",
        description: "Created stylish and modern video lookbooks.",
        items: &[
            (
                "https://youtube.com/shorts/doq358IAW7c",
                "A One skincare",
                "Vibrant visuals.",
            ),
            (
                "https://youtube.com/shorts/kBeeGSM57dw",
                "A One skincare",
                "A narrative piece on the inspiration behind the brand.",
            ),
            (
                "https://youtube.com/shorts/Ha3I6F94yDg",
                "A One skincare",
                "A narrative piece on the inspiration behind the brand.",
            ),
        ],
    },
];

/// Build the `Collection`s shipped with the carousel.
pub(super) fn builtin_collections() -> Vec<Collection> {
    CATALOG
        .iter()
        .map(|entry| {
            let items = entry
                .items
                .iter()
                .map(|(url, title, description)| {
                    MediaItem::new(
                        (*url).to_owned(),
                        (*title).to_owned(),
                        (*description).to_owned(),
                    )
                })
                .collect();
            Collection::new(
                entry.id.to_owned(),
                entry.name.to_owned(),
                entry.description.to_owned(),
            )
            .with_items(items)
        })
        .collect()
}
