use drill_core::Level;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelButtonVm {
    pub level: Level,
    pub label: String,
    pub active: bool,
}

#[must_use]
pub fn map_level_buttons(active: Level) -> Vec<LevelButtonVm> {
    Level::ALL
        .iter()
        .map(|level| LevelButtonVm {
            level: *level,
            label: level.to_string(),
            active: *level == active,
        })
        .collect()
}
