//! Study tips and motivation videos.

pub const STUDY_TIPS: &[&str] = &[
    "Break study sessions into chunks using the Pomodoro technique.",
    "Use active recall and spaced repetition to improve memory.",
    "Set clear and achievable goals before starting any session.",
    "Eliminate distractions from your study environment.",
    "Stay hydrated and take regular breaks to improve concentration.",
    "Explain what you learned to someone else to reinforce understanding.",
    "Keep a consistent study schedule to build habits.",
];

/// YouTube video ids
pub const MOTIVATION_VIDEOS: &[&str] = &[
    "5MgBikgcWnY",
    "xvFZjo5PgG0",
    "WrsFXgQk5UI",
    "2Xc9gXyf2G4",
    "dQw4w9WgXcQ",
];

/// Pick `items[floor(roll * len)]` for a roll in `[0, 1)`.
/// Out-of-range rolls are clamped; `None` only for an empty slice.
pub fn pick<T>(items: &[T], roll: f64) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
    let index = ((roll * items.len() as f64) as usize).min(items.len() - 1);
    items.get(index)
}

pub fn study_tip(roll: f64) -> &'static str {
    pick(STUDY_TIPS, roll).copied().unwrap_or_default()
}

pub fn motivation_embed_url(roll: f64) -> String {
    let id = pick(MOTIVATION_VIDEOS, roll).copied().unwrap_or_default();
    format!("https://www.youtube.com/embed/{}?rel=0&autoplay=0", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_bounds() {
        assert_eq!(study_tip(0.0), STUDY_TIPS[0]);
        assert_eq!(study_tip(0.999), STUDY_TIPS[STUDY_TIPS.len() - 1]);
        assert_eq!(study_tip(1.0), STUDY_TIPS[STUDY_TIPS.len() - 1]);
        assert_eq!(study_tip(f64::NAN), STUDY_TIPS[0]);
        assert!(pick::<u8>(&[], 0.5).is_none());
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            motivation_embed_url(0.0),
            "https://www.youtube.com/embed/5MgBikgcWnY?rel=0&autoplay=0"
        );
    }
}
