//! Hand-authored seed dataset: the artists, their influence edges, and
//! per-artist signature traits.
//!
//! Edge order is load-bearing: the inheritance propagator walks edges in
//! input order, so reordering this list changes which traits get seeded
//! where.

use super::{ArtistNode, InfluenceEdge, InfluenceKind, NodeTier};

fn node(
    id: &str,
    group: u8,
    tier: NodeTier,
    label: &str,
    color: &str,
    title: &str,
    size: u32,
) -> ArtistNode {
    ArtistNode {
        id: id.to_string(),
        label: label.to_string(),
        title: title.to_string(),
        color: color.to_string(),
        size,
        group,
        tier: Some(tier),
        profile: None,
        sequenced: false,
    }
}

fn edge(
    source: &str,
    target: &str,
    weight: u8,
    kind: InfluenceKind,
    context: &str,
) -> InfluenceEdge {
    InfluenceEdge {
        source: source.to_string(),
        target: target.to_string(),
        weight,
        kind: Some(kind),
        context: Some(context.to_string()),
    }
}

/// The seed artist roster.
pub fn seed_nodes() -> Vec<ArtistNode> {
    use NodeTier::{Branch, Core, Root};
    vec![
        // Ancestors
        node("Robert Johnson", 0, Root, "Robert Johnson", "#8B4513", "USA | 1930s | Delta Blues | The Crossroads Myth", 25),
        node("Muddy Waters", 0, Root, "Muddy Waters", "#8B4513", "USA | 1950s | Chicago Blues | Electric Pioneer", 25),
        node("Chuck Berry", 0, Root, "Chuck Berry", "#8B4513", "USA | 1950s | Rock n Roll | The Architect", 28),
        node("Little Richard", 0, Root, "Little Richard", "#8B4513", "USA | 1950s | Rock n Roll | The Architect", 25),
        node("Miles Davis", 0, Root, "Miles Davis", "#B8860B", "USA | 1960s | Jazz Fusion | Cool Jazz", 28),
        // 1960s roots
        node("The Animals", 1, Core, "The Animals", "#ff4444", "UK | 1960s | Blues Rock Roots | Origin of the 'Grit'", 25),
        node("The Beatles", 1, Core, "The Beatles", "#ff4444", "UK | 1960s | Pop/Psych | The Melody", 35),
        node("Rolling Stones", 1, Core, "Rolling Stones", "#ff4444", "UK | 1960s | Rock n Roll | The Swagger", 30),
        node("Jimi Hendrix", 1, Core, "Jimi Hendrix", "#4444ff", "USA | 1960s | Psych Rock | The Electric Guitar God", 30),
        node("The Doors", 1, Core, "The Doors", "#4444ff", "USA | 1960s | Psych/Art | The Dark Poet", 25),
        node("Cream", 1, Core, "Cream", "#ff4444", "UK | 1960s | Heavy Blues | The Prototype", 20),
        // Southern & heartland
        node("Lynyrd Skynyrd", 2, Core, "Lynyrd Skynyrd", "#ffaa00", "USA | 1970s | Southern Rock | The Free Birds", 30),
        node("Allman Bros", 2, Core, "Allman Brothers", "#ffaa00", "USA | 1970s | Southern Jam | Dual Guitars", 20),
        node("ZZ Top", 2, Core, "ZZ Top", "#ffaa00", "USA | 1970s | Blues Rock | Texas Boogie", 25),
        node("Eagles", 2, Core, "The Eagles", "#4444ff", "USA | 1970s | Country Rock | Radio Giants", 25),
        node("Led Zeppelin", 2, Core, "Led Zeppelin", "#ff4444", "UK | 1970s | Hard Rock | Hammer of the Gods", 40),
        // Prog, pomp & theatrical
        node("Uriah Heep", 3, Core, "Uriah Heep", "#aa00aa", "UK | 1970s | Prog/Heavy | The Fantasy High Note", 20),
        node("Deep Purple", 3, Core, "Deep Purple", "#aa00aa", "UK | 1970s | Hard Rock | The Loudest Band", 30),
        node("Kansas", 3, Core, "Kansas", "#aa00aa", "USA | 1970s | Arena Prog | American Complexity", 20),
        node("Rush", 3, Core, "Rush", "#ffffff", "CAN | 1970s | Prog Rock | The Holy Trinity", 28),
        node("Queen", 3, Core, "Queen", "#aa00aa", "UK | 1970s | Art/Glam | The Champions", 35),
        node("Meat Loaf", 3, Core, "Meat Loaf", "#aa00aa", "USA | 1970s | Theatrical Rock | Wagnerian Opera", 22),
        node("Blue Oyster Cult", 3, Core, "Blue Öyster Cult", "#aa00aa", "USA | 1970s | Occult Rock | Thinking Man's Metal", 22),
        node("Pink Floyd", 3, Core, "Pink Floyd", "#aa00aa", "UK | 1970s | Psych/Prog | Atmospheric Kings", 35),
        node("Yes", 3, Core, "Yes", "#aa00aa", "UK | 1970s | Symphonic Prog | Mathematical", 20),
        // Heavy metal
        node("Black Sabbath", 4, Core, "Black Sabbath", "#666666", "UK | 1970s | Heavy Metal | The Creators", 40),
        node("Judas Priest", 4, Core, "Judas Priest", "#666666", "UK | 1970s | Heavy Metal | The Leather & Studs", 30),
        node("Motorhead", 4, Core, "Motörhead", "#666666", "UK | 1970s | Speed Metal | Born to Lose", 25),
        node("Iron Maiden", 4, Core, "Iron Maiden", "#666666", "UK | 1980s | NWOBHM | Epic Metal", 35),
        // Thrash & modern
        node("Metallica", 5, Core, "Metallica", "#4444ff", "USA | 1980s | Thrash Metal | The Biggest Metal Band", 40),
        node("Slayer", 5, Core, "Slayer", "#4444ff", "USA | 1980s | Thrash | Extreme Aggression", 25),
        node("Pantera", 5, Core, "Pantera", "#4444ff", "USA | 1990s | Groove Metal | Power", 28),
        node("Nirvana", 5, Core, "Nirvana", "#ffffff", "USA | 1990s | Grunge | The Alternative Explosion", 35),
        node("Soundgarden", 5, Core, "Soundgarden", "#ffffff", "USA | 1990s | Grunge | Heavy Alternative", 30),
        // Modern & experimental
        node("Ghost", 6, Core, "Ghost", "#ffffff", "SWE | 2010s | Occult Rock | The Revival", 25),
        node("Tool", 6, Core, "Tool", "#4444ff", "USA | 1990s | Alt-Metal/Prog | The Fibonacci", 28),
        node("Dream Theater", 6, Core, "Dream Theater", "#4444ff", "USA | 1990s | Prog Metal | Virtuosos", 22),
        // Branches (cross-genre)
        node("Run-D.M.C.", 7, Branch, "Run-D.M.C.", "#333333", "USA | 1980s | Hip Hop | The Rock Bridge", 25),
        node("Beastie Boys", 7, Branch, "Beastie Boys", "#333333", "USA | 1980s | Hip Hop | Punk Rap", 25),
        node("Public Enemy", 7, Branch, "Public Enemy", "#333333", "USA | 1980s | Hip Hop | Noise Revolution", 22),
        node("Nine Inch Nails", 7, Branch, "Nine Inch Nails", "#111111", "USA | 1990s | Industrial | Electronic Rock", 28),
        node("Kraftwerk", 7, Branch, "Kraftwerk", "#0000AA", "GER | 1970s | Electronic | The Robots", 25),
        node("Daft Punk", 7, Branch, "Daft Punk", "#0000AA", "FRA | 1990s | House | Robot Rock", 28),
        node("Massive Attack", 7, Branch, "Massive Attack", "#440044", "UK | 1990s | Trip Hop | Dark Groove", 20),
        // Late additions that close link targets
        node("Aerosmith", 2, Core, "Aerosmith", "#ff4444", "USA | 1970s | Hard Rock | Bad Boys from Boston", 30),
        node("Stevie Ray Vaughan", 2, Core, "Stevie Ray Vaughan", "#4444ff", "USA | 1980s | Texas Blues | Guitar Hurricane", 25),
        node("Radiohead", 6, Core, "Radiohead", "#ffffff", "UK | 1990s | Art Rock | The Experimentalists", 30),
        node("Primus", 6, Core, "Primus", "#4444ff", "USA | 1990s | Funk Metal | Bass Driven Weirdness", 22),
        node("Demons and Wizards", 6, Core, "Demons & Wizards", "#666666", "USA/EU | 2000s | Power Metal | The Fantasy Union", 20),
    ]
}

/// The seed influence edges, in propagation order.
pub fn seed_edges() -> Vec<InfluenceEdge> {
    use InfluenceKind::{Compositional, Cover, Direct, Stylistic};
    vec![
        // Roots into evolution
        edge("The Animals", "Deep Purple", 3, Stylistic, "The gritty, blues-based vocal delivery of Eric Burdon heavily influenced Ian Gillan's style."),
        edge("The Animals", "The Doors", 2, Stylistic, "Shared roots in dark, bluesy psychedelia."),
        edge("The Beatles", "Queen", 4, Compositional, "Harmonic complexity, studio experimentation, and multi-part vocal harmonies."),
        edge("Rolling Stones", "Aerosmith", 4, Stylistic, "The 'Bad Boys' attitude, Jagger's swagger, and blues-rock riff structures."),
        edge("Cream", "Black Sabbath", 4, Stylistic, "Heavy, distorted blues riffs played at high volume were the blueprint for metal."),
        // Hendrix influence
        edge("Jimi Hendrix", "Cream", 5, Stylistic, "Mutual admiration; Clapton was famously intimidated by Hendrix's technique."),
        edge("Jimi Hendrix", "Black Sabbath", 3, Stylistic, "The heavy, down-tuned tritone sound influenced Iommi."),
        edge("Jimi Hendrix", "Deep Purple", 3, Stylistic, "Ritchie Blackmore adopted the heavy feedback and Stratocaster abuse."),
        edge("Jimi Hendrix", "Stevie Ray Vaughan", 5, Stylistic, "SRV built his entire style on Hendrix's vocabulary, notably covering 'Voodoo Child'."),
        // Southern connections
        edge("Allman Bros", "Lynyrd Skynyrd", 5, Stylistic, "Established the dual-lead guitar harmony attack standard in Southern Rock."),
        edge("Lynyrd Skynyrd", "ZZ Top", 4, Stylistic, "Shared Texas/Southern boogie roots and gritty storytelling."),
        edge("Lynyrd Skynyrd", "Metallica", 1, Cover, "Metallica covered 'Tuesday's Gone', showing their softer southern roots."),
        edge("Eagles", "Allman Bros", 3, Stylistic, "Country-rock harmonies and twin guitar lines."),
        // The prog/pomp web
        edge("Deep Purple", "Uriah Heep", 4, Stylistic, "Heavy use of Hammond organ and high-register vocals."),
        edge("Deep Purple", "Iron Maiden", 2, Stylistic, "Galloping rhythms and twin guitar harmonies."),
        edge("Deep Purple", "Rush", 2, Stylistic, "Hard rock virtuosity mixed with classical influences."),
        edge("Deep Purple", "Dream Theater", 2, Stylistic, "Technical prowess and keyboard/guitar duels."),
        edge("Yes", "Kansas", 4, Compositional, "Bringing complex British prog structures to an American arena rock format."),
        edge("Yes", "Rush", 3, Compositional, "Complex time signatures and high-register vocals."),
        edge("Pink Floyd", "Tool", 3, Stylistic, "Atmospheric textures, long compositions, and visual art integration."),
        edge("Pink Floyd", "Dream Theater", 3, Stylistic, "Concept albums and cinematic soundscapes."),
        edge("Pink Floyd", "Radiohead", 4, Stylistic, "Art-rock experimentation and electronic integration."),
        edge("Queen", "Meat Loaf", 5, Stylistic, "Theatrical, operatic rock style with piano-driven ballads."),
        edge("Queen", "Kansas", 2, Compositional, "Vocal harmonies and blending rock with classical motifs."),
        edge("Queen", "Dream Theater", 2, Stylistic, "Brian May's melodic guitar solos and epic song structures."),
        // Occult/heavy lineage
        edge("Blue Oyster Cult", "Metallica", 2, Cover, "Metallica covered 'Astronomy'; shared love for darker lyrical themes."),
        edge("Blue Oyster Cult", "Ghost", 5, Stylistic, "Ghost's sound is widely considered a direct modern revival of BOC's melodic occult rock."),
        edge("Black Sabbath", "Blue Oyster Cult", 3, Stylistic, "Heavy riff-based songwriting and dark imagery."),
        edge("Black Sabbath", "Metallica", 4, Stylistic, "The blueprint for heavy metal riffs and doom tempo sections."),
        edge("Uriah Heep", "Demons and Wizards", 1, Stylistic, "High fantasy lyrics and power metal origins."),
        // Prog metal tree
        edge("Kansas", "Dream Theater", 3, Compositional, "Complex violin/keyboard distinct passages and odd time signatures."),
        edge("Rush", "Dream Theater", 5, Direct, "Primary influence; technical virtuosity and power trio dynamics."),
        edge("Rush", "Tool", 3, Compositional, "Mathematical rhythms and philosophical lyrics."),
        edge("Rush", "Primus", 3, Stylistic, "Les Claypool cites Geddy Lee as a massive bass influence."),
        // Metal tree
        edge("Black Sabbath", "Judas Priest", 5, Stylistic, "Birmingham roots; taking the heavy riff and speeding it up."),
        edge("Judas Priest", "Slayer", 3, Stylistic, "Twin guitar attacks and darker lyrical themes."),
        edge("Judas Priest", "Iron Maiden", 3, Stylistic, "Refined the NWOBHM dual-guitar sound."),
        edge("Motorhead", "Metallica", 4, Direct, "Lars Ulrich was the head of the Motorhead fan club; pure speed influence."),
        edge("Black Sabbath", "Pantera", 3, Stylistic, "The heavy groove and 'Paranoid' era riffing."),
        edge("Metallica", "Pantera", 3, Stylistic, "Pantera shifted from glam to groove metal largely due to Thrash influence."),
        edge("Iron Maiden", "Metallica", 3, Compositional, "Harmony guitars and epic song structures."),
        // Led Zeppelin links
        edge("Robert Johnson", "Led Zeppelin", 5, Cover, "Direct lineage of blues phrasing and 'Lemon Song' interpolations."),
        edge("Led Zeppelin", "Aerosmith", 5, Stylistic, "The absolute prototype for Aerosmith's blues-hard-rock sound."),
        edge("Led Zeppelin", "Rush", 4, Stylistic, "Early Rush was heavily modeled on Zeppelin's riff-oriented hard rock."),
        edge("Led Zeppelin", "Soundgarden", 4, Stylistic, "Cornell's vocals and the heavy, sludgy riffs are pure Zep."),
        edge("Led Zeppelin", "Tool", 2, Stylistic, "Bonham's drumming power and Eastern scales."),
        // Cross-genre ancestors
        edge("Robert Johnson", "Cream", 5, Cover, "Clapton covered 'Crossroads', electrifying the Delta blues."),
        edge("Muddy Waters", "Rolling Stones", 5, Direct, "The band named themselves after a Muddy Waters song."),
        edge("Chuck Berry", "The Beatles", 5, Cover, "Beatles covered 'Roll Over Beethoven' and 'Rock and Roll Music'."),
        edge("Little Richard", "The Beatles", 4, Stylistic, "Paul McCartney's high-energy vocal style ('Woooo!') is pure Little Richard."),
        edge("Miles Davis", "Jimi Hendrix", 4, Stylistic, "Mutual admiration; Miles wanted to record with Jimi. Fusion influence."),
        // Cross-genre branches
        edge("Aerosmith", "Run-D.M.C.", 5, Direct, "The 'Walk This Way' collaboration bridged Rock and Hip-Hop forever."),
        edge("Black Sabbath", "Nine Inch Nails", 3, Stylistic, "Doom tempos and dark atmospheres influencing Industrial Metal."),
        edge("Kraftwerk", "Daft Punk", 5, Stylistic, "The robot personas and synthesized vocals are direct tributes."),
        edge("Pink Floyd", "Daft Punk", 3, Stylistic, "Concept albums and cinematic synthesis."),
        edge("Nirvana", "Radiohead", 3, Stylistic, "Creep was notably influenced by the loud-quiet dynamics of Grunge."),
    ]
}

/// Signature traits per artist, applied after the category baseline.
static SIGNATURE_TRAITS: &[(&str, &[(&str, u8)])] = &[
    ("The Animals", &[("R14", 4), ("H1", 5), ("P31", 5), ("HE4", 5)]),
    ("The Beatles", &[("R14", 4), ("H11", 5), ("H17", 4), ("P27", 5), ("P30", 3), ("A9", 5), ("PF48", 4)]),
    ("Rolling Stones", &[("R14", 5), ("R10", 5), ("H1", 5), ("P9", 4), ("G63", 5)]),
    ("Jimi Hendrix", &[("R1", 5), ("S3", 4), ("H11", 5), ("F33", 5), ("F36", 5), ("H5", 3)]),
    ("The Doors", &[("F26", 5), ("B21", 5), ("P31", 4), ("H3", 5), ("H11", 3)]),
    ("Cream", &[("R14", 4), ("F33", 5), ("H1", 5), ("A10", 5)]),
    ("Pink Floyd", &[("F1", 5), ("H3", 5), ("F26", 4), ("W30", 4), ("A39", 5), ("C60", 5)]),
    ("Lynyrd Skynyrd", &[("R28", 4), ("H10", 5), ("A10", 5), ("C36", 4)]),
    ("Allman Bros", &[("R14", 5), ("H10", 5), ("H3", 3), ("PF80", 4)]),
    ("ZZ Top", &[("R10", 5), ("H11", 5), ("B34", 4), ("G5", 5)]),
    ("Eagles", &[("P27", 5), ("H10", 5), ("A10", 3), ("C35", 5)]),
    ("Uriah Heep", &[("F26", 5), ("P30", 4), ("P27", 4), ("H5", 3)]),
    ("Deep Purple", &[("F26", 5), ("H4", 4), ("P20", 3), ("P31", 5)]),
    ("Kansas", &[("MS18", 5), ("C36", 3), ("H28", 4), ("P27", 4)]),
    ("Rush", &[("MS18", 5), ("B10", 4), ("P30", 5), ("R36", 5), ("H5", 4)]),
    ("Queen", &[("P27", 5), ("P30", 5), ("H17", 4), ("MS17", 5), ("PF27", 4)]),
    ("Meat Loaf", &[("C4", 5), ("P31", 5), ("MS11", 5), ("A9", 4)]),
    ("Blue Oyster Cult", &[("H8", 4), ("P27", 4), ("C2", 5)]),
    ("Yes", &[("MS18", 5), ("B10", 5), ("P27", 5), ("H28", 4)]),
    ("Black Sabbath", &[("H27", 5), ("H4", 5), ("B5", 4), ("P9", 3)]),
    ("Judas Priest", &[("P30", 4), ("P18", 3), ("D30", 4), ("H26", 5)]),
    ("Motorhead", &[("B34", 5), ("D32", 5), ("P10", 4)]),
    ("Iron Maiden", &[("B16", 5), ("H26", 5), ("P31", 4), ("A10", 5)]),
    ("Metallica", &[("D30", 5), ("B5", 5), ("P19", 3), ("P31", 4), ("H4", 4)]),
    ("Slayer", &[("R40", 5), ("H13", 5), ("P20", 5), ("A54", 5)]),
    ("Pantera", &[("R14", 4), ("B5", 5), ("P20", 5), ("H11", 4)]),
    ("Ghost", &[("P27", 5), ("F26", 4), ("H1", 4), ("H21", 4)]),
    ("Tool", &[("H28", 5), ("MS18", 5), ("B16", 4), ("G50", 5)]),
    ("Dream Theater", &[("MS18", 5), ("D30", 5), ("P33", 4), ("H28", 5), ("C52", 3), ("B14", 5)]),
    ("Aerosmith", &[("P34", 5), ("R14", 5), ("H1", 5)]),
    ("Stevie Ray Vaughan", &[("R14", 5), ("IS1", 5), ("B2", 4)]),
    ("Radiohead", &[("H53", 5), ("F62", 5), ("A39", 4)]),
    ("Primus", &[("B3", 5), ("G35", 5), ("R9", 4)]),
    ("Led Zeppelin", &[("R19", 5), ("D2", 5), ("P33", 5), ("H11", 5)]),
    ("Run-D.M.C.", &[("R16", 5), ("P21", 5), ("C43", 5)]),
    ("Daft Punk", &[("R15", 5), ("P43", 5), ("F49", 5), ("IR1", 5)]),
    ("Robert Johnson", &[("H11", 5), ("G5", 5), ("P34", 4)]),
];

/// Look up an artist's signature trait list.
pub fn signature_traits(node_id: &str) -> Option<&'static [(&'static str, u8)]> {
    SIGNATURE_TRAITS
        .iter()
        .find(|(id, _)| *id == node_id)
        .map(|(_, traits)| *traits)
}
