use crate::models::{Animal, FortuneSlip};

/// Fortune table, cycled by the daily seed
pub const FORTUNE_SLIPS: [FortuneSlip; 4] = [
    FortuneSlip {
        label: "大吉",
        message: "今天超級幸運！這隻毛孩與你特別有緣，說不定就是命中注定！",
        color: "#FFB4A2",
    },
    FortuneSlip {
        label: "中吉",
        message: "緣分指數很高！這隻毛孩的個性很適合你，值得認識一下！",
        color: "#B5E2D8",
    },
    FortuneSlip {
        label: "小吉",
        message: "有著小小的緣分，也許聊聊天就會發現驚喜！",
        color: "#FFE5B4",
    },
    FortuneSlip {
        label: "吉",
        message: "今日宜認養！打開心房，幸福就會來敲門。",
        color: "#F5EBE0",
    },
];

/// Daily poems, cycled at a different stride than the slips
pub const FORTUNE_POEMS: [&str; 10] = [
    "毛茸茸的緣分，在此刻悄悄萌芽",
    "汪汪叫的幸福，正等著與你相遇",
    "喵喵的呼喚，是命運的輕聲細語",
    "四隻腳的天使，已在遠方向你招手",
    "愛的種子，在收容所裡靜靜等待",
    "溫暖的掌心，終將遇見毛絨絨的依賴",
    "有緣千里來相會，牠就是你的命定",
    "善良的心，將被毛孩溫柔以待",
    "今日緣分已至，不妨去看看牠",
    "幸福的開始，從認識這隻毛孩開始",
];

/// One day's draw
#[derive(Debug)]
pub struct FortuneDraw<'a> {
    pub animal: &'a Animal,
    pub slip: FortuneSlip,
    pub poem: &'static str,
}

/// Deterministic seed for a calendar day, derived from its display label.
pub fn date_seed(date_label: &str) -> usize {
    date_label.bytes().map(usize::from).sum()
}

/// Draw the fortune animal for a given day
///
/// Only photo-having animals are eligible. The same date label always
/// yields the same draw; `None` means no animal can be shown at all.
pub fn draw<'a>(animals: &'a [Animal], date_label: &str) -> Option<FortuneDraw<'a>> {
    let pool: Vec<&Animal> = animals.iter().filter(|a| a.has_photo()).collect();
    if pool.is_empty() {
        return None;
    }

    let seed = date_seed(date_label);

    Some(FortuneDraw {
        animal: pool[seed % pool.len()],
        slip: FORTUNE_SLIPS[seed % FORTUNE_SLIPS.len()],
        poem: FORTUNE_POEMS[(seed * 7) % FORTUNE_POEMS.len()],
    })
}
