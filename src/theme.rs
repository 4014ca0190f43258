use serde::Serialize;

/// A presentation skin as data. The dashboard used to ship two forked
/// copies of every screen (the standard look and the dog-park novelty
/// skin); the fork is collapsed into these records and the UI renders
/// whichever one it is handed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub key: &'static str,
    pub app_title: &'static str,
    pub student_greeting: &'static str,
    pub rank_caption: &'static str,
    pub average_caption: &'static str,
    pub accent: &'static str,
    pub pass_color: &'static str,
    pub fail_color: &'static str,
}

pub const THEMES: [Theme; 2] = [
    Theme {
        key: "classic",
        app_title: "KOSES Student Performance",
        student_greeting: "Welcome back, {name}!",
        rank_caption: "Rank",
        average_caption: "Overall Average",
        accent: "#3b82f6",
        pass_color: "#22c55e",
        fail_color: "#ef4444",
    },
    Theme {
        key: "pack",
        app_title: "KOSES Puppy Academy",
        student_greeting: "Woof woof, {name}!",
        rank_caption: "Pack Rank",
        average_caption: "Overall Tail Wag Score",
        accent: "#f59e0b",
        pass_color: "#22c55e",
        fail_color: "#ef4444",
    },
];

pub fn theme_by_key(key: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.key == key)
}
