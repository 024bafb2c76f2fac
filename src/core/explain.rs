use std::sync::Arc;

use crate::models::{
    ActivityAnswer, Animal, ExperienceAnswer, MatchAnswers, ScoredCandidate, SpaceAnswer,
    TimeAnswer, AGE_ADULT, AGE_CHILD, BODY_BIG, BODY_MEDIUM, BODY_SMALL,
};
use crate::services::textgen::TextGenerator;

/// Generation-length budget for one rationale
const REASON_MAX_TOKENS: u32 = 100;

/// Substituted when the collaborator answers with empty text
pub const FALLBACK_REASON: &str = "這隻毛孩很適合你！";

/// Substituted when the collaborator call fails
pub const FALLBACK_REASON_ERROR: &str = "這隻毛孩的條件與你很匹配！";

fn space_label(space: SpaceAnswer) -> &'static str {
    match space {
        SpaceAnswer::Large => "大",
        SpaceAnswer::Medium => "中等",
        SpaceAnswer::Small => "小",
    }
}

fn activity_label(activity: ActivityAnswer) -> &'static str {
    match activity {
        ActivityAnswer::High => "高",
        ActivityAnswer::Moderate => "中等",
        ActivityAnswer::Low => "低",
    }
}

fn experience_label(experience: ExperienceAnswer) -> &'static str {
    match experience {
        ExperienceAnswer::Experienced => "有經驗",
        ExperienceAnswer::Some => "有一些",
        ExperienceAnswer::None => "沒有",
    }
}

fn time_label(time: TimeAnswer) -> &'static str {
    match time {
        TimeAnswer::Plenty => "充裕",
        TimeAnswer::Moderate => "中等",
        TimeAnswer::Limited => "有限",
    }
}

fn size_label(bodytype: &str) -> &'static str {
    match bodytype {
        BODY_BIG => "大型",
        BODY_MEDIUM => "中型",
        BODY_SMALL => "小型",
        _ => "未知",
    }
}

fn age_label(age: &str) -> &'static str {
    match age {
        AGE_ADULT => "成年",
        AGE_CHILD => "幼年",
        _ => "未知",
    }
}

fn sex_label(sex: &str) -> &'static str {
    match sex {
        "M" => "男生",
        "F" => "女生",
        _ => "未知",
    }
}

fn sterilization_label(sterilization: &str) -> &'static str {
    if sterilization == "T" {
        "已絕育"
    } else {
        "未絕育"
    }
}

/// Compose the consultation prompt for one ranked candidate.
pub fn compose_prompt(animal: &Animal, answers: &MatchAnswers, score: u8) -> String {
    let colour = if animal.animal_colour.is_empty() {
        "未知"
    } else {
        animal.animal_colour.as_str()
    };

    format!(
        "你是一位專業的寵物配對顧問。請用繁體中文，用溫暖親切的語氣，說明為什麼這隻動物適合這位用戶。回答限制在50字以內。\n\n\
         用戶條件：\n\
         - 居住空間：{}\n\
         - 活動量：{}\n\
         - 養寵物經驗：{}\n\
         - 可照顧時間：{}\n\n\
         動物資訊：\n\
         - 種類：{}\n\
         - 性別：{}\n\
         - 體型：{}\n\
         - 年齡：{}\n\
         - 毛色：{}\n\
         - 絕育：{}\n\n\
         匹配度：{}%\n\n\
         請直接給出推薦理由，不要重複上述資訊：",
        space_label(answers.space),
        activity_label(answers.activity),
        experience_label(answers.experience),
        time_label(answers.time),
        animal.animal_kind,
        sex_label(&animal.animal_sex),
        size_label(&animal.animal_bodytype),
        age_label(&animal.animal_age),
        colour,
        sterilization_label(&animal.animal_sterilization),
        score,
    )
}

async fn generate_reason(generator: Arc<dyn TextGenerator>, prompt: String) -> String {
    match generator.generate(&prompt, REASON_MAX_TOKENS).await {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                FALLBACK_REASON.to_string()
            } else {
                text.to_string()
            }
        }
        Err(e) => {
            tracing::debug!("Reason generation fell back: {}", e);
            FALLBACK_REASON_ERROR.to_string()
        }
    }
}

/// Attach generated rationales to the leading ranked candidates
///
/// Calls fan out concurrently and the function returns once every call has
/// settled. The ranked order is fixed before this runs and never changes
/// here; a failed call only swaps in fallback text.
pub async fn annotate_top_matches(
    generator: Arc<dyn TextGenerator>,
    answers: &MatchAnswers,
    matches: &mut [ScoredCandidate],
    explain_top: usize,
) {
    let take = explain_top.min(matches.len());

    let handles: Vec<_> = matches[..take]
        .iter()
        .map(|candidate| {
            let prompt = compose_prompt(&candidate.animal, answers, candidate.match_score);
            tokio::spawn(generate_reason(Arc::clone(&generator), prompt))
        })
        .collect();

    for (candidate, handle) in matches[..take].iter_mut().zip(handles) {
        candidate.ai_reason = Some(match handle.await {
            Ok(reason) => reason,
            Err(_) => FALLBACK_REASON_ERROR.to_string(),
        });
    }
}
