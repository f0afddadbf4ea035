//! The built-in domain vocabulary: release formats, resolutions, codecs,
//! profiles, channel layouts and miscellaneous release tags, with their
//! pattern sources, confidences, validators and quality scores.
//!
//! This module is the single place new vocabulary is added. The schema is
//! purely declarative; `registry::build_registries` walks it in order.
//! Within a category, declaration order matters: overlap ties between
//! equal-confidence hits keep the first-registered pattern, which is why
//! e.g. HD-DVD is declared before DVD.

use relmeta_props::Validator;

/// One canonical value with its pattern sources and registration overrides.
#[derive(Debug)]
pub struct PropertyDef {
    pub canonical_form: &'static str,
    pub patterns: &'static [&'static str],
    pub confidence: f64,
    pub validator: Validator,
}

impl PropertyDef {
    const fn new(canonical_form: &'static str, patterns: &'static [&'static str]) -> Self {
        Self {
            canonical_form,
            patterns,
            confidence: 1.0,
            validator: Validator::Strict,
        }
    }

    const fn with_confidence(
        canonical_form: &'static str,
        patterns: &'static [&'static str],
        confidence: f64,
    ) -> Self {
        Self {
            canonical_form,
            patterns,
            confidence,
            validator: Validator::Strict,
        }
    }
}

#[derive(Debug)]
pub struct CategoryDef {
    pub category: &'static str,
    pub properties: &'static [PropertyDef],
}

/// Identity tags: the displayed value equals the matched token.
#[derive(Debug)]
pub struct CanonicalDef {
    pub category: &'static str,
    pub forms: &'static [&'static str],
    pub validator: Validator,
}

/// One derived canonical form: its token variants, optionally keyed to a
/// single base canonical form (audio profiles only apply to their codec).
#[derive(Debug)]
pub struct DerivedEntry {
    pub canonical_form: &'static str,
    pub base_canonical: Option<&'static str>,
    pub tokens: &'static [&'static str],
}

/// A derived category and the base category its patterns anchor to.
#[derive(Debug)]
pub struct DerivedDef {
    pub category: &'static str,
    pub base_category: &'static str,
    pub entries: &'static [DerivedEntry],
}

/// A suffix compound: every base-category pattern extended by `suffix`.
#[derive(Debug)]
pub struct SuffixDef {
    pub category: &'static str,
    pub base_category: &'static str,
    pub suffix: &'static str,
    pub canonical_form: &'static str,
}

#[derive(Debug)]
pub struct QualityDef {
    pub category: &'static str,
    pub scores: &'static [(&'static str, i32)],
}

const WEAK: Validator = Validator::Weak { min_length: 3 };

/// Release size prefix, e.g. the "1920x" in "1920x1080".
macro_rules! dim {
    ($height:literal) => {
        concat!(r"(?:\d{3,}(?:\\|/|x|\*))?", $height, r"(?:i|p?x?)")
    };
}

pub const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        category: "container",
        properties: &[PropertyDef::new("mp4", &["MP4"])],
    },
    // https://en.wikipedia.org/wiki/Pirated_movie_release_types
    CategoryDef {
        category: "format",
        properties: &[
            PropertyDef::new("VHS", &["VHS"]),
            PropertyDef::new("Cam", &["CAM", "CAMRip"]),
            PropertyDef::new("Telesync", &["TELESYNC", "PDVD"]),
            PropertyDef::with_confidence("Telesync", &["TS"], 0.2),
            PropertyDef::new("Workprint", &["WORKPRINT", "WP"]),
            PropertyDef::new("Telecine", &["TELECINE", "TC"]),
            // Pay Per View
            PropertyDef::new("PPV", &["PPV", "PPV-Rip"]),
            PropertyDef::new("HD-DVD", &["HD-(?:DVD)?-Rip", "HD-DVD"]),
            PropertyDef::new("DVD", &["DVD", "DVD-Rip", "VIDEO-TS"]),
            PropertyDef::new("DVB", &["DVB-Rip", "DVB", "PD-TV"]),
            PropertyDef::new("HDTV", &["HD-TV"]),
            PropertyDef::new("VOD", &["VOD", "VOD-Rip"]),
            PropertyDef::new("WEBRip", &["WEB-Rip"]),
            PropertyDef::new("WEB-DL", &["WEB-DL"]),
            PropertyDef::new(
                "BluRay",
                &["Blu-ray", "B[DR]", "B[DR]-Rip", "BD[59]", "BD25", "BD50"],
            ),
        ],
    },
    CategoryDef {
        category: "screenSize",
        properties: &[
            PropertyDef::new("360p", &[dim!("360")]),
            PropertyDef::new("368p", &[dim!("368")]),
            PropertyDef::new("480p", &[dim!("480")]),
            PropertyDef::with_confidence("480p", &["hr"], 0.2),
            PropertyDef::new("576p", &[dim!("576")]),
            PropertyDef::new("720p", &[dim!("720")]),
            PropertyDef::new("900p", &[dim!("900")]),
            PropertyDef::new("1080i", &[r"(?:\d{3,}(?:\\|/|x|\*))?1080i"]),
            PropertyDef::new("1080p", &[r"(?:\d{3,}(?:\\|/|x|\*))?1080(?:p?x?)"]),
            PropertyDef::new("4K", &[dim!("2160"), "4K"]),
        ],
    },
    CategoryDef {
        category: "videoCodec",
        properties: &[
            // https://en.wikipedia.org/wiki/RealVideo
            PropertyDef::new("Real", &[r"Rv\d{2}"]),
            PropertyDef::with_confidence("Real", &["Real"], 0.5),
            PropertyDef::new("Mpeg2", &["Mpeg2"]),
            PropertyDef::new("DivX", &["DVDivX", "DivX"]),
            PropertyDef::new("XviD", &["XviD"]),
            PropertyDef::new("h264", &["[hx]-264(?:-AVC)?", "MPEG-4(?:-AVC)"]),
            PropertyDef::new("h265", &["[hx]-265(?:-HEVC)?", "HEVC"]),
        ],
    },
    // Has nothing to do on filenames, but some releases carry it and it
    // helps identify release groups.
    CategoryDef {
        category: "videoApi",
        properties: &[PropertyDef::new("DXVA", &["DXVA"])],
    },
    CategoryDef {
        category: "audioCodec",
        properties: &[
            PropertyDef::new("MP3", &["MP3"]),
            PropertyDef::new("DolbyDigital", &["DD", "Dolby-Digital"]),
            PropertyDef::new("AAC", &["AAC"]),
            PropertyDef::new("AC3", &["AC3"]),
            PropertyDef::new("Flac", &["FLAC"]),
            PropertyDef::new("DTS", &["DTS"]),
            PropertyDef::new("TrueHD", &["True-HD"]),
        ],
    },
    CategoryDef {
        category: "audioChannels",
        properties: &[
            PropertyDef::new("7.1", &[r"7[\W_]1", "7ch"]),
            PropertyDef::new("5.1", &[r"5[\W_]1", "5ch"]),
            PropertyDef::new("2.0", &[r"2[\W_]0", "2ch", "stereo"]),
            PropertyDef::new("1.0", &[r"1[\W_]0", "1ch", "mono"]),
        ],
    },
    CategoryDef {
        category: "episodeFormat",
        properties: &[PropertyDef::new("Minisode", &["Minisodes?"])],
    },
    CategoryDef {
        category: "other",
        properties: &[
            PropertyDef::new("AudioFix", &["Audio-Fix", "Audio-Fixed"]),
            PropertyDef::new("SyncFix", &["Sync-Fix", "Sync-Fixed"]),
            PropertyDef::new("DualAudio", &["Dual-Audio"]),
            PropertyDef::new("WideScreen", &["ws", "wide-screen"]),
            PropertyDef::new("Extra", &["Extras?"]),
        ],
    },
];

pub const CANONICALS: &[CanonicalDef] = &[
    CanonicalDef {
        category: "other",
        forms: &[
            "Proper", "Repack", "R5", "Screener", "3D", "Fix", "HD", "HQ", "DDC",
        ],
        validator: Validator::Strict,
    },
    CanonicalDef {
        category: "other",
        forms: &[
            "Limited", "Complete", "Classic", "Unrated", "LiNE", "Bonus", "Trailer",
        ],
        validator: WEAK,
    },
];

pub const DERIVED: &[DerivedDef] = &[
    // https://blog.mediacoderhq.com/h264-profiles-and-levels/
    DerivedDef {
        category: "videoProfile",
        base_category: "videoCodec",
        entries: &[
            DerivedEntry {
                canonical_form: "BS",
                base_canonical: None,
                tokens: &["BS"],
            },
            DerivedEntry {
                canonical_form: "EP",
                base_canonical: None,
                tokens: &["EP", "XP"],
            },
            DerivedEntry {
                canonical_form: "MP",
                base_canonical: None,
                tokens: &["MP"],
            },
            DerivedEntry {
                canonical_form: "HP",
                base_canonical: None,
                tokens: &["HP", "HiP"],
            },
            DerivedEntry {
                canonical_form: "10bit",
                base_canonical: None,
                tokens: &["10.?bit", "Hi10P"],
            },
            DerivedEntry {
                canonical_form: "Hi422P",
                base_canonical: None,
                tokens: &["Hi422P"],
            },
            DerivedEntry {
                canonical_form: "Hi444PP",
                base_canonical: None,
                tokens: &["Hi444PP"],
            },
        ],
    },
    DerivedDef {
        category: "audioProfile",
        base_category: "audioCodec",
        entries: &[
            // HDMA before HD so "DTS-HD-MA" is not claimed by the shorter
            // HD compound on the overlap tie-break.
            DerivedEntry {
                canonical_form: "HDMA",
                base_canonical: Some("DTS"),
                tokens: &["HD-MA"],
            },
            DerivedEntry {
                canonical_form: "HD",
                base_canonical: Some("DTS"),
                tokens: &["HD"],
            },
            DerivedEntry {
                canonical_form: "HE",
                base_canonical: Some("AAC"),
                tokens: &["HE"],
            },
            DerivedEntry {
                canonical_form: "LC",
                base_canonical: Some("AAC"),
                tokens: &["LC"],
            },
            DerivedEntry {
                canonical_form: "HQ",
                base_canonical: Some("AC3"),
                tokens: &["HQ"],
            },
        ],
    },
];

pub const SUFFIXES: &[SuffixDef] = &[SuffixDef {
    category: "other",
    base_category: "format",
    suffix: "-Scr(?:eener)?",
    canonical_form: "Screener",
}];

pub const QUALITIES: &[QualityDef] = &[
    QualityDef {
        category: "format",
        scores: &[
            ("VHS", -100),
            ("Cam", -90),
            ("Telesync", -80),
            ("Workprint", -70),
            ("Telecine", -60),
            ("PPV", -50),
            ("DVB", -20),
            ("DVD", 0),
            ("HDTV", 20),
            ("VOD", 40),
            ("WEBRip", 50),
            ("WEB-DL", 60),
            ("HD-DVD", 80),
            ("BluRay", 100),
        ],
    },
    QualityDef {
        category: "screenSize",
        scores: &[
            ("360p", -300),
            ("368p", -200),
            ("480p", -100),
            ("576p", 0),
            ("720p", 100),
            ("900p", 130),
            ("1080i", 180),
            ("1080p", 200),
            ("4K", 400),
        ],
    },
    QualityDef {
        category: "videoCodec",
        scores: &[
            ("Real", -50),
            ("Mpeg2", -30),
            ("DivX", -10),
            ("XviD", 0),
            ("h264", 100),
            ("h265", 150),
        ],
    },
    QualityDef {
        category: "videoProfile",
        scores: &[
            ("BS", -20),
            ("EP", -10),
            ("MP", 0),
            ("HP", 10),
            ("10bit", 15),
            ("Hi422P", 25),
            ("Hi444PP", 35),
        ],
    },
    QualityDef {
        category: "audioCodec",
        scores: &[
            ("MP3", 10),
            ("DolbyDigital", 30),
            ("AAC", 35),
            ("AC3", 40),
            ("Flac", 45),
            ("DTS", 60),
            ("TrueHD", 70),
        ],
    },
    QualityDef {
        category: "audioProfile",
        scores: &[("HD", 20), ("HDMA", 50), ("LC", 0), ("HQ", 0), ("HE", 20)],
    },
    QualityDef {
        category: "audioChannels",
        scores: &[("7.1", 200), ("5.1", 100), ("2.0", 0), ("1.0", -100)],
    },
];
