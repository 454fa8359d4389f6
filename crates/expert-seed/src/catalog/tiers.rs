//! Tier table: computed levels and pricing per expert.

use super::{Tier, TierInfo};

/// (expert id, name, tier, level, price per minute), ordered by level.
const TIER_TABLE: &[(u32, &str, Tier, u32, u32)] = &[
    (2, "김민지", Tier::Mythical, 999, 800),
    (4, "박서준", Tier::Mythical, 989, 800),
    (7, "강태현", Tier::Legend, 939, 600),
    (9, "임지훈", Tier::Legend, 883, 600),
    (16, "정승우", Tier::Champion, 818, 500),
    (21, "조아름", Tier::Champion, 770, 500),
    (3, "이준호", Tier::Champion, 753, 500),
    (13, "이채원", Tier::Grandmaster, 737, 450),
    (6, "정민수", Tier::Grandmaster, 721, 450),
    (27, "강서연", Tier::Grandmaster, 704, 450),
    (17, "강민준", Tier::Grandmaster, 689, 450),
    (12, "김다은", Tier::Grandmaster, 671, 450),
    (30, "한준서", Tier::Grandmaster, 686, 450),
    (23, "이서우", Tier::Grandmaster, 675, 450),
    (20, "한지윤", Tier::Grandmaster, 661, 450),
    (28, "윤민재", Tier::Grandmaster, 650, 450),
    (14, "박준영", Tier::Grandmaster, 640, 450),
    (5, "최유진", Tier::Grandmaster, 629, 450),
    (25, "최나연", Tier::Grandmaster, 616, 450),
    (31, "조예린", Tier::Grandmaster, 606, 450),
    (18, "윤재현", Tier::Grandmaster, 606, 450),
    (11, "조현우", Tier::Master, 595, 400),
    (22, "김도현", Tier::Master, 585, 400),
    (29, "임지현", Tier::Master, 577, 400),
    (24, "박시우", Tier::Master, 563, 400),
    (15, "최하은", Tier::Master, 560, 400),
    (8, "윤서연", Tier::Master, 554, 400),
    (19, "임소은", Tier::Master, 544, 400),
    (26, "정우진", Tier::Master, 539, 400),
    (10, "한소영", Tier::Master, 528, 400),
];

pub(super) fn builtin() -> impl Iterator<Item = (u32, TierInfo)> {
    TIER_TABLE
        .iter()
        .map(|&(id, name, tier, level, price)| (id, TierInfo::new(name, tier, level, price)))
}
