//! Built-in reference data: the 63 masechtos of Shas, the rotating story
//! prompts, and the starter growth setup (rituals + reflection prompts).
//!
//! All of this is static data loaded by the `seed_*` repo methods, so a
//! fresh database can be made useful without any import files.

use mgd_core::enums::{RitualFrequency, Seder};

/// One masechta row to insert. `daf_count` is `None` when the masechta has
/// no Bavli; `perakim` is the Mishnah chapter count.
pub struct MasechtaSeed {
    pub seder: Seder,
    pub name: &'static str,
    pub perakim: i64,
    pub daf_count: Option<i64>,
    pub has_bavli: bool,
}

const fn bavli(seder: Seder, name: &'static str, perakim: i64, daf: i64) -> MasechtaSeed {
    MasechtaSeed {
        seder,
        name,
        perakim,
        daf_count: Some(daf),
        has_bavli: true,
    }
}

const fn mishnah_only(seder: Seder, name: &'static str, perakim: i64) -> MasechtaSeed {
    MasechtaSeed {
        seder,
        name,
        perakim,
        daf_count: None,
        has_bavli: false,
    }
}

/// All 63 masechtos in canonical order. Daf counts follow the Vilna print.
pub const SHAS_MASECHTOS: &[MasechtaSeed] = &[
    // Zeraim
    bavli(Seder::Zeraim, "Berachos", 9, 64),
    mishnah_only(Seder::Zeraim, "Peah", 8),
    mishnah_only(Seder::Zeraim, "Demai", 7),
    mishnah_only(Seder::Zeraim, "Kilayim", 9),
    mishnah_only(Seder::Zeraim, "Sheviis", 10),
    mishnah_only(Seder::Zeraim, "Terumos", 11),
    mishnah_only(Seder::Zeraim, "Maasros", 5),
    mishnah_only(Seder::Zeraim, "Maaser Sheni", 5),
    mishnah_only(Seder::Zeraim, "Challah", 4),
    mishnah_only(Seder::Zeraim, "Orlah", 3),
    mishnah_only(Seder::Zeraim, "Bikkurim", 3),
    // Moed
    bavli(Seder::Moed, "Shabbos", 24, 157),
    bavli(Seder::Moed, "Eruvin", 10, 105),
    bavli(Seder::Moed, "Pesachim", 10, 121),
    mishnah_only(Seder::Moed, "Shekalim", 8),
    bavli(Seder::Moed, "Yoma", 8, 88),
    bavli(Seder::Moed, "Sukkah", 5, 56),
    bavli(Seder::Moed, "Beitzah", 5, 40),
    bavli(Seder::Moed, "Rosh Hashanah", 4, 35),
    bavli(Seder::Moed, "Taanis", 4, 31),
    bavli(Seder::Moed, "Megillah", 4, 32),
    bavli(Seder::Moed, "Moed Katan", 3, 29),
    bavli(Seder::Moed, "Chagigah", 3, 27),
    // Nashim
    bavli(Seder::Nashim, "Yevamos", 16, 122),
    bavli(Seder::Nashim, "Kesubos", 13, 112),
    bavli(Seder::Nashim, "Nedarim", 11, 91),
    bavli(Seder::Nashim, "Nazir", 9, 66),
    bavli(Seder::Nashim, "Sotah", 9, 49),
    bavli(Seder::Nashim, "Gittin", 9, 90),
    bavli(Seder::Nashim, "Kiddushin", 4, 82),
    // Nezikin
    bavli(Seder::Nezikin, "Bava Kamma", 10, 119),
    bavli(Seder::Nezikin, "Bava Metzia", 10, 119),
    bavli(Seder::Nezikin, "Bava Basra", 10, 176),
    bavli(Seder::Nezikin, "Sanhedrin", 11, 113),
    bavli(Seder::Nezikin, "Makkos", 3, 24),
    bavli(Seder::Nezikin, "Shevuos", 8, 49),
    mishnah_only(Seder::Nezikin, "Eduyos", 8),
    bavli(Seder::Nezikin, "Avodah Zarah", 5, 76),
    mishnah_only(Seder::Nezikin, "Avos", 6),
    bavli(Seder::Nezikin, "Horayos", 3, 14),
    // Kodshim
    bavli(Seder::Kodshim, "Zevachim", 14, 120),
    bavli(Seder::Kodshim, "Menachos", 13, 110),
    bavli(Seder::Kodshim, "Chullin", 12, 142),
    bavli(Seder::Kodshim, "Bechoros", 9, 61),
    bavli(Seder::Kodshim, "Arachin", 9, 34),
    bavli(Seder::Kodshim, "Temurah", 7, 34),
    bavli(Seder::Kodshim, "Kerisos", 6, 28),
    bavli(Seder::Kodshim, "Meilah", 6, 22),
    bavli(Seder::Kodshim, "Tamid", 7, 33),
    mishnah_only(Seder::Kodshim, "Middos", 5),
    mishnah_only(Seder::Kodshim, "Kinnim", 3),
    // Taharos
    mishnah_only(Seder::Taharos, "Keilim", 30),
    mishnah_only(Seder::Taharos, "Oholos", 18),
    mishnah_only(Seder::Taharos, "Negaim", 14),
    mishnah_only(Seder::Taharos, "Parah", 12),
    mishnah_only(Seder::Taharos, "Taharos", 10),
    mishnah_only(Seder::Taharos, "Mikvaos", 10),
    bavli(Seder::Taharos, "Niddah", 10, 73),
    mishnah_only(Seder::Taharos, "Machshirin", 6),
    mishnah_only(Seder::Taharos, "Zavim", 5),
    mishnah_only(Seder::Taharos, "Tevul Yom", 4),
    mishnah_only(Seder::Taharos, "Yadayim", 4),
    mishnah_only(Seder::Taharos, "Uktzin", 3),
];

/// The 30-day rotating story-capture prompt series. Day N of the month maps
/// to index `(N - 1) % 30`.
pub const CAPTURE_PROMPTS: &[&str] = &[
    "A moment this week when you saw hashgacha pratis.",
    "A time someone's small kindness changed your whole day.",
    "Something a child said that stopped you in your tracks.",
    "A lesson you learned the hard way.",
    "A moment you almost gave up but didn't.",
    "Something your rebbi or teacher said that you still think about.",
    "A time you misjudged someone completely.",
    "The most memorable Shabbos table moment you can recall.",
    "A question from a student or listener you couldn't answer.",
    "A time a stranger taught you something.",
    "A moment of unexpected laughter in a serious setting.",
    "Something you noticed on the street that became a mashal.",
    "A time you had to choose between two good things.",
    "A family story your parents or grandparents told you.",
    "A moment when silence said more than words.",
    "A time you saw someone's hidden greatness.",
    "Something that went wrong that turned out for the best.",
    "A davening moment that actually felt different.",
    "A time you were wrong in public.",
    "The best piece of advice you ever ignored.",
    "A moment with a neighbor you keep coming back to.",
    "A time technology failed you at exactly the right moment.",
    "Something you overheard that deserved a derasha.",
    "A time you watched someone grow over years.",
    "A small habit that quietly changed your life.",
    "A moment you felt completely out of your depth.",
    "A time a simple Jew showed more emunah than a scholar.",
    "Something beautiful you saw in nature this month.",
    "A time you received more than you gave.",
    "The moment you knew what you were meant to be doing.",
];

/// Evening reflection prompts, rotated by day of month.
pub const REFLECTION_PROMPTS: &[&str] = &[
    "Where did you push past your comfort zone today?",
    "What did you do today that your future self will thank you for?",
    "Who did you strengthen today, and who strengthened you?",
    "What almost derailed you today, and what actually happened?",
    "Which middah got a workout today?",
    "What would you repeat tomorrow exactly as it went today?",
    "What did you learn today that you want to teach someone?",
];

/// One starter ritual row for `seed_growth`.
pub struct RitualSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub frequency: RitualFrequency,
}

/// Default daily rituals installed by `mgd growth seed`.
pub const STARTER_RITUALS: &[RitualSeed] = &[
    RitualSeed {
        name: "Morning learning seder",
        description: "Fixed seder before the day starts, even ten minutes.",
        category: "learning",
        frequency: RitualFrequency::Daily,
    },
    RitualSeed {
        name: "Daily story capture",
        description: "Write one story or observation against today's prompt.",
        category: "content",
        frequency: RitualFrequency::Daily,
    },
    RitualSeed {
        name: "Practice out loud",
        description: "Rehearse the current piece standing up, full voice.",
        category: "speaking",
        frequency: RitualFrequency::Weekday,
    },
    RitualSeed {
        name: "Evening reflection",
        description: "Close the day with wins, struggles, and tomorrow's focus.",
        category: "growth",
        frequency: RitualFrequency::Daily,
    },
    RitualSeed {
        name: "Shabbos prep review",
        description: "Walk through the derasha once before candle lighting.",
        category: "speaking",
        frequency: RitualFrequency::Shabbos,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sixty_three_masechtos() {
        assert_eq!(SHAS_MASECHTOS.len(), 63);
    }

    #[test]
    fn names_unique() {
        let names: HashSet<_> = SHAS_MASECHTOS.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), 63);
    }

    #[test]
    fn bavli_masechtos_have_daf_counts() {
        for m in SHAS_MASECHTOS {
            assert_eq!(m.has_bavli, m.daf_count.is_some(), "{}", m.name);
            if let Some(daf) = m.daf_count {
                assert!(daf > 0, "{}", m.name);
            }
            assert!(m.perakim > 0, "{}", m.name);
        }
    }

    #[test]
    fn seder_sizes_match_tradition() {
        let count = |s: Seder| SHAS_MASECHTOS.iter().filter(|m| m.seder == s).count();
        assert_eq!(count(Seder::Zeraim), 11);
        assert_eq!(count(Seder::Moed), 12);
        assert_eq!(count(Seder::Nashim), 7);
        assert_eq!(count(Seder::Nezikin), 10);
        assert_eq!(count(Seder::Kodshim), 11);
        assert_eq!(count(Seder::Taharos), 12);
    }

    #[test]
    fn thirty_capture_prompts() {
        assert_eq!(CAPTURE_PROMPTS.len(), 30);
    }
}
