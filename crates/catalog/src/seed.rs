//! Built-in seed catalog and default alias rules.
//!
//! This is the static data source behind the recommendation resolver: ten
//! canonical genres, each with a handful of music-adjacent films. The seed is
//! assembled through the same validated constructors as a JSON-loaded
//! catalog, so both paths enforce identical invariants.

use crate::alias::{AliasRule, AliasTable};
use crate::types::{MovieCatalog, RecommendationEntry};

fn entry(
    id: &str,
    title: &str,
    year: u16,
    short_desc: &str,
    synopsis: &str,
    director: Option<&str>,
    cast: &[&str],
    awards: Option<&str>,
    rating: Option<f32>,
) -> RecommendationEntry {
    RecommendationEntry {
        id: id.to_string(),
        title: title.to_string(),
        year: Some(year),
        image: None,
        short_desc: short_desc.to_string(),
        synopsis: synopsis.to_string(),
        director: director.map(str::to_string),
        cast: cast.iter().map(|c| c.to_string()).collect(),
        awards: awards.map(str::to_string),
        rating,
    }
}

/// Build the built-in catalog.
///
/// Genre insertion order is fixed; it drives substring-normalization
/// priority, so reordering sections here changes observable behavior.
pub fn builtin_catalog() -> MovieCatalog {
    let mut catalog = MovieCatalog::new();

    let sections: Vec<(&str, Vec<RecommendationEntry>)> = vec![
        (
            "Pop",
            vec![
                entry(
                    "pop_001",
                    "A Star Is Born",
                    2018,
                    "A rising singer falls for a fading rock legend.",
                    "Seasoned musician Jackson Maine discovers and falls in love with struggling artist Ally. As her career takes off, the personal side of their relationship begins to break down.",
                    Some("Bradley Cooper"),
                    &["Bradley Cooper", "Lady Gaga", "Sam Elliott"],
                    Some("Won 1 Oscar - Best Original Song"),
                    Some(7.6),
                ),
                entry(
                    "pop_002",
                    "La La Land",
                    2016,
                    "An actress and a jazz pianist chase their dreams in Los Angeles.",
                    "Mia, an aspiring actress, and Sebastian, a dedicated jazz musician, struggle to make ends meet while pursuing their dreams in a city known for destroying hopes and breaking hearts.",
                    Some("Damien Chazelle"),
                    &["Ryan Gosling", "Emma Stone"],
                    Some("Won 6 Oscars including Best Director"),
                    Some(8.0),
                ),
                entry(
                    "pop_003",
                    "The Greatest Showman",
                    2017,
                    "The spectacular rise of P.T. Barnum's circus.",
                    "Orphaned and penniless, P.T. Barnum rises to create a spectacle that becomes a worldwide sensation, celebrating the outsiders who make it shine.",
                    Some("Michael Gracey"),
                    &["Hugh Jackman", "Zac Efron", "Zendaya"],
                    None,
                    Some(7.5),
                ),
                entry(
                    "pop_004",
                    "Rocketman",
                    2019,
                    "Elton John's breakthrough years as a musical fantasy.",
                    "The story of Elton John's life, from his years as a prodigy at the Royal Academy of Music through his influential and enduring musical partnership with Bernie Taupin.",
                    Some("Dexter Fletcher"),
                    &["Taron Egerton", "Jamie Bell", "Richard Madden"],
                    Some("Won 1 Oscar - Best Original Song"),
                    Some(7.3),
                ),
            ],
        ),
        (
            "Rock",
            vec![
                entry(
                    "rock_001",
                    "Bohemian Rhapsody",
                    2018,
                    "Queen's meteoric rise through their iconic songs.",
                    "The story of the legendary band Queen and lead singer Freddie Mercury, leading up to their famous performance at Live Aid in 1985.",
                    Some("Bryan Singer"),
                    &["Rami Malek", "Lucy Boynton", "Gwilym Lee"],
                    Some("Won 4 Oscars including Best Actor"),
                    Some(7.9),
                ),
                entry(
                    "rock_002",
                    "Almost Famous",
                    2000,
                    "A teenage journalist tours with a rock band in 1973.",
                    "A high-school boy is given the chance to write a story for Rolling Stone magazine about an up-and-coming rock band as he accompanies them on their concert tour.",
                    Some("Cameron Crowe"),
                    &["Patrick Fugit", "Kate Hudson", "Billy Crudup"],
                    Some("Won 1 Oscar - Best Original Screenplay"),
                    Some(7.9),
                ),
                entry(
                    "rock_003",
                    "The Doors",
                    1991,
                    "Jim Morrison burns bright and burns out.",
                    "The story of the famous and influential 1960s rock band The Doors and its lead singer and composer, Jim Morrison.",
                    Some("Oliver Stone"),
                    &["Val Kilmer", "Meg Ryan", "Kyle MacLachlan"],
                    None,
                    Some(7.2),
                ),
                entry(
                    "rock_004",
                    "School of Rock",
                    2003,
                    "A failed guitarist turns fifth-graders into a rock band.",
                    "After being kicked out of his rock band, Dewey Finn becomes a substitute teacher of an uptight elementary private school, only to try and turn his class into a rock band.",
                    Some("Richard Linklater"),
                    &["Jack Black", "Joan Cusack", "Mike White"],
                    None,
                    Some(7.2),
                ),
            ],
        ),
        (
            "Hip-Hop",
            vec![
                entry(
                    "hiphop_001",
                    "8 Mile",
                    2002,
                    "A Detroit rapper battles for his shot.",
                    "A young rapper, struggling with every aspect of his life in Detroit, wants to make it big but his friends and foes make this odyssey of rap harder than it seems.",
                    Some("Curtis Hanson"),
                    &["Eminem", "Kim Basinger", "Brittany Murphy"],
                    Some("Won 1 Oscar - Best Original Song"),
                    Some(7.2),
                ),
                entry(
                    "hiphop_002",
                    "Straight Outta Compton",
                    2015,
                    "N.W.A rewrites music with the truth of the streets.",
                    "The group N.W.A emerges from the mean streets of Compton and revolutionizes hip hop culture with their music and tales about life in the hood.",
                    Some("F. Gary Gray"),
                    &["O'Shea Jackson Jr.", "Corey Hawkins", "Jason Mitchell"],
                    Some("Nominated for 1 Oscar - Best Original Screenplay"),
                    Some(7.8),
                ),
                entry(
                    "hiphop_003",
                    "Notorious",
                    2009,
                    "The life and death of The Notorious B.I.G.",
                    "The story of Christopher Wallace, who rose from the streets of Brooklyn to become one of the most influential rappers of all time before his murder at 24.",
                    Some("George Tillman Jr."),
                    &["Jamal Woolard", "Angela Bassett", "Derek Luke"],
                    None,
                    Some(6.7),
                ),
                entry(
                    "hiphop_004",
                    "Hustle & Flow",
                    2005,
                    "A Memphis hustler chases one last dream: a demo tape.",
                    "With help from his friends, a Memphis pimp in a mid-life crisis attempts to become a successful hip-hop emcee.",
                    Some("Craig Brewer"),
                    &["Terrence Howard", "Taryn Manning", "Anthony Anderson"],
                    Some("Won 1 Oscar - Best Original Song"),
                    Some(7.3),
                ),
            ],
        ),
        (
            "Electronic",
            vec![
                entry(
                    "electronic_001",
                    "TRON: Legacy",
                    2010,
                    "A son enters the digital world that took his father.",
                    "The son of a virtual world designer goes looking for his father and ends up inside the digital grid that his father created, set to a landmark Daft Punk score.",
                    Some("Joseph Kosinski"),
                    &["Jeff Bridges", "Garrett Hedlund", "Olivia Wilde"],
                    None,
                    Some(6.8),
                ),
                entry(
                    "electronic_002",
                    "The Matrix",
                    1999,
                    "Reality is a program, and one hacker can rewrite it.",
                    "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
                    Some("The Wachowskis"),
                    &["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss"],
                    Some("Won 4 Oscars"),
                    Some(8.7),
                ),
                entry(
                    "electronic_003",
                    "Scott Pilgrim vs. the World",
                    2010,
                    "A bassist must defeat his new girlfriend's seven evil exes.",
                    "Scott Pilgrim must defeat the seven evil exes of the girl of his dreams in a video-game-styled battle of the bands.",
                    Some("Edgar Wright"),
                    &["Michael Cera", "Mary Elizabeth Winstead"],
                    None,
                    Some(7.5),
                ),
                entry(
                    "electronic_004",
                    "24 Hour Party People",
                    2002,
                    "Manchester's rave scene from punk to acid house.",
                    "The story of Factory Records and the Manchester music scene, from the Sex Pistols' first gig through Joy Division, New Order and the Hacienda club.",
                    Some("Michael Winterbottom"),
                    &["Steve Coogan", "Shirley Henderson"],
                    None,
                    Some(7.3),
                ),
            ],
        ),
        (
            "R&B",
            vec![
                entry(
                    "rnb_001",
                    "Love & Basketball",
                    2000,
                    "Two childhood friends balance love and the game.",
                    "Monica and Quincy, childhood friends and neighbors, pursue professional basketball careers while navigating a romance that spans more than a decade.",
                    Some("Gina Prince-Bythewood"),
                    &["Sanaa Lathan", "Omar Epps"],
                    None,
                    Some(7.2),
                ),
                entry(
                    "rnb_002",
                    "Brown Sugar",
                    2002,
                    "Lifelong friends discover their love through hip-hop and soul.",
                    "Two childhood friends who fell in love with hip-hop together realize, years later and on the eve of a wedding, that they also fell in love with each other.",
                    Some("Rick Famuyiwa"),
                    &["Taye Diggs", "Sanaa Lathan", "Mos Def"],
                    None,
                    Some(6.5),
                ),
                entry(
                    "rnb_003",
                    "Sparkle",
                    2012,
                    "Three sisters form a girl group in 1960s Detroit.",
                    "Musical prodigy Sparkle struggles to become a star while overcoming issues that are tearing her family apart, in Whitney Houston's final film.",
                    Some("Salim Akil"),
                    &["Jordin Sparks", "Whitney Houston", "Derek Luke"],
                    None,
                    Some(5.7),
                ),
                entry(
                    "rnb_004",
                    "The Best Man",
                    1999,
                    "A debut novel threatens to unravel a wedding weekend.",
                    "A writer's semi-autobiographical debut becomes an advance sensation among his college friends just as he arrives to serve as best man at their wedding.",
                    Some("Malcolm D. Lee"),
                    &["Taye Diggs", "Nia Long", "Morris Chestnut"],
                    None,
                    Some(6.7),
                ),
            ],
        ),
        (
            "Jazz",
            vec![
                entry(
                    "jazz_001",
                    "Whiplash",
                    2014,
                    "A drummer and a ruthless instructor push past every limit.",
                    "A promising young drummer enrolls at a cut-throat music conservatory where his dreams of greatness are mentored by an instructor who will stop at nothing to realize a student's potential.",
                    Some("Damien Chazelle"),
                    &["Miles Teller", "J.K. Simmons"],
                    Some("Won 3 Oscars including Best Supporting Actor"),
                    Some(8.5),
                ),
                entry(
                    "jazz_002",
                    "Round Midnight",
                    1986,
                    "An aging saxophonist finds one last devoted friend in Paris.",
                    "An American jazz legend living in 1950s Paris forms an unlikely friendship with a French fan determined to keep him alive and playing.",
                    Some("Bertrand Tavernier"),
                    &["Dexter Gordon", "Francois Cluzet"],
                    Some("Won 1 Oscar - Best Original Score"),
                    Some(7.3),
                ),
                entry(
                    "jazz_003",
                    "Bird",
                    1988,
                    "The brilliant, troubled life of Charlie Parker.",
                    "A biopic of saxophonist Charlie 'Bird' Parker, tracing his genius, his addictions, and the bebop revolution he ignited.",
                    Some("Clint Eastwood"),
                    &["Forest Whitaker", "Diane Venora"],
                    Some("Won 1 Oscar - Best Sound"),
                    Some(7.1),
                ),
                entry(
                    "jazz_004",
                    "Mo' Better Blues",
                    1990,
                    "A trumpeter's devotion to music costs him everything else.",
                    "Jazz trumpeter Bleek Gilliam makes questionable decisions in his professional and romantic lives as his single-minded focus on music collides with loyalty and love.",
                    Some("Spike Lee"),
                    &["Denzel Washington", "Spike Lee", "Wesley Snipes"],
                    None,
                    Some(6.8),
                ),
            ],
        ),
        (
            "Classical",
            vec![
                entry(
                    "classical_001",
                    "Amadeus",
                    1984,
                    "Salieri's envy of Mozart curdles into obsession.",
                    "The life, success and troubles of Wolfgang Amadeus Mozart, as told by Antonio Salieri, the contemporaneous composer who was insanely jealous of Mozart's talent.",
                    Some("Milos Forman"),
                    &["F. Murray Abraham", "Tom Hulce"],
                    Some("Won 8 Oscars including Best Picture"),
                    Some(8.4),
                ),
                entry(
                    "classical_002",
                    "The Pianist",
                    2002,
                    "A pianist survives the Warsaw ghetto through music.",
                    "A Polish Jewish musician struggles to survive the destruction of the Warsaw ghetto during World War II, sustained by memory and the piano.",
                    Some("Roman Polanski"),
                    &["Adrien Brody", "Thomas Kretschmann"],
                    Some("Won 3 Oscars including Best Actor"),
                    Some(8.5),
                ),
                entry(
                    "classical_003",
                    "The Red Violin",
                    1998,
                    "One perfect violin passes through three centuries of hands.",
                    "A mysterious red-varnished violin travels from 17th-century Italy through Vienna, Oxford, and Shanghai to a Montreal auction house, binding its owners' fates.",
                    Some("Francois Girard"),
                    &["Samuel L. Jackson", "Carlo Cecchi"],
                    Some("Won 1 Oscar - Best Original Score"),
                    Some(7.6),
                ),
                entry(
                    "classical_004",
                    "August Rush",
                    2007,
                    "An orphaned prodigy follows the music to find his parents.",
                    "A child instrumental prodigy raised in an orphanage runs away to New York, convinced that if he plays, the parents he has never met will hear him.",
                    Some("Kirsten Sheridan"),
                    &["Freddie Highmore", "Keri Russell", "Jonathan Rhys Meyers"],
                    None,
                    Some(7.4),
                ),
            ],
        ),
        (
            "Indie",
            vec![
                entry(
                    "indie_001",
                    "Eternal Sunshine of the Spotless Mind",
                    2004,
                    "A couple erases each other, then falls in love again.",
                    "When their relationship turns sour, a couple undergoes a medical procedure to have each other erased from their memories, only to rediscover what they had.",
                    Some("Michel Gondry"),
                    &["Jim Carrey", "Kate Winslet"],
                    Some("Won 1 Oscar - Best Original Screenplay"),
                    Some(8.3),
                ),
                entry(
                    "indie_002",
                    "500 Days of Summer",
                    2009,
                    "A romance told out of order, ending included.",
                    "After being dumped by the girl he believes to be his soulmate, hopeless romantic Tom reflects on their 500 days together to figure out where it all went wrong.",
                    Some("Marc Webb"),
                    &["Joseph Gordon-Levitt", "Zooey Deschanel"],
                    None,
                    Some(7.7),
                ),
                entry(
                    "indie_003",
                    "Her",
                    2013,
                    "A lonely writer falls in love with an operating system.",
                    "In a near future, a lonely writer develops an unlikely relationship with an operating system designed to meet his every need.",
                    Some("Spike Jonze"),
                    &["Joaquin Phoenix", "Scarlett Johansson", "Amy Adams"],
                    Some("Won 1 Oscar - Best Original Screenplay"),
                    Some(8.0),
                ),
                entry(
                    "indie_004",
                    "Garden State",
                    2004,
                    "A numbed actor comes home and wakes back up.",
                    "A quietly troubled young man returns home for his mother's funeral after being estranged from his family for a decade, and meets a girl who changes everything.",
                    Some("Zach Braff"),
                    &["Zach Braff", "Natalie Portman", "Peter Sarsgaard"],
                    None,
                    Some(7.4),
                ),
            ],
        ),
        (
            "Metal",
            vec![
                entry(
                    "metal_001",
                    "Metal: A Headbanger's Journey",
                    2005,
                    "An anthropologist maps the tribes of heavy metal.",
                    "Anthropologist and lifelong fan Sam Dunn travels the world to explore metal's history, subgenres and culture, and why the music is so often dismissed.",
                    Some("Sam Dunn"),
                    &[],
                    None,
                    Some(7.9),
                ),
                entry(
                    "metal_002",
                    "Some Kind of Monster",
                    2004,
                    "Metallica in group therapy, making an album.",
                    "A documentary crew follows Metallica through two fraught years of therapy, infighting and recording as the biggest metal band in history nearly falls apart.",
                    None,
                    &["James Hetfield", "Lars Ulrich", "Kirk Hammett"],
                    None,
                    Some(7.5),
                ),
                entry(
                    "metal_003",
                    "Rock Star",
                    2001,
                    "A tribute-band singer gets the real microphone.",
                    "The lead singer of a tribute band becomes the frontman of the very group he idolizes, and learns what the dream costs.",
                    Some("Stephen Herek"),
                    &["Mark Wahlberg", "Jennifer Aniston"],
                    None,
                    Some(6.2),
                ),
                entry(
                    "metal_004",
                    "Wayne's World",
                    1992,
                    "Two metalheads take their cable-access show big time.",
                    "Two slacker friends broadcast a heavy-metal public-access show from a basement until a sleazy producer decides to cash in on them.",
                    Some("Penelope Spheeris"),
                    &["Mike Myers", "Dana Carvey"],
                    None,
                    Some(7.0),
                ),
            ],
        ),
        (
            "Reggae",
            vec![
                entry(
                    "reggae_001",
                    "The Harder They Come",
                    1972,
                    "A country boy turns outlaw folk hero in Kingston.",
                    "A poor Jamaican singer turns to crime when the music industry exploits him, becoming an outlaw celebrity as his record climbs the charts.",
                    Some("Perry Henzell"),
                    &["Jimmy Cliff", "Janet Bartley"],
                    None,
                    Some(6.9),
                ),
                entry(
                    "reggae_002",
                    "Marley",
                    2012,
                    "The definitive portrait of Bob Marley.",
                    "A documentary on the life, music, and legacy of Bob Marley, built from archival footage and interviews with the people closest to him.",
                    Some("Kevin Macdonald"),
                    &[],
                    None,
                    Some(7.8),
                ),
                entry(
                    "reggae_003",
                    "Rockers",
                    1978,
                    "A drummer takes on Kingston's record racket.",
                    "A Rastafarian drummer sets out to get even with the corrupt men who stole his motorcycle, in a film packed with the reggae stars of the era.",
                    Some("Ted Bafaloukos"),
                    &["Leroy Wallace", "Richard Hall"],
                    None,
                    Some(7.3),
                ),
                entry(
                    "reggae_004",
                    "Bob Marley: One Love",
                    2024,
                    "Marley's rise from Trench Town to the world stage.",
                    "The story of how reggae icon Bob Marley overcame adversity to become the most famous musician his country ever produced, and the message behind his music.",
                    Some("Reinaldo Marcus Green"),
                    &["Kingsley Ben-Adir", "Lashana Lynch"],
                    None,
                    Some(6.2),
                ),
            ],
        ),
    ];

    for (genre, entries) in sections {
        // insert_genre only fails on duplicate/empty keys; the literals above
        // are fixed, so a failure here is a bug in this file
        if let Err(err) = catalog.insert_genre(genre, entries) {
            unreachable!("builtin catalog is malformed: {err}");
        }
    }

    catalog
}

/// Default alias rules for common streaming-provider genre tags.
///
/// Rules run before substring matching, so a tag like "dream pop" can be
/// pinned to Indie even though it contains "pop".
pub fn default_aliases() -> AliasTable {
    let rules = [
        ("latin pop", "Pop"),
        ("dance pop", "Pop"),
        ("k-pop", "Pop"),
        ("dream pop", "Indie"),
        ("shoegaze", "Indie"),
        ("folk", "Indie"),
        ("singer-songwriter", "Indie"),
        ("alternative hip hop", "Hip-Hop"),
        ("rap", "Hip-Hop"),
        ("trap", "Hip-Hop"),
        ("grime", "Hip-Hop"),
        ("drill", "Hip-Hop"),
        ("edm", "Electronic"),
        ("house", "Electronic"),
        ("techno", "Electronic"),
        ("synthwave", "Electronic"),
        ("soul", "R&B"),
        ("neo soul", "R&B"),
        ("funk", "R&B"),
        ("bebop", "Jazz"),
        ("swing", "Jazz"),
        ("orchestral", "Classical"),
        ("baroque", "Classical"),
        ("opera", "Classical"),
        ("grunge", "Rock"),
        ("punk", "Rock"),
        ("reggaeton", "Reggae"),
        ("dancehall", "Reggae"),
        ("ska", "Reggae"),
    ];

    let rules = rules
        .into_iter()
        .map(|(pattern, target)| AliasRule {
            pattern: pattern.to_string(),
            target: target.to_string(),
        })
        .collect();

    match AliasTable::new(rules) {
        Ok(table) => table,
        Err(err) => unreachable!("builtin alias table is malformed: {err}"),
    }
}
