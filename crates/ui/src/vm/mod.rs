mod drill_vm;
mod level_vm;

pub use drill_vm::{
    DrillFieldVm, DrillIntent, DrillRowVm, DrillVm, FieldStatus, apply_drill_intent, map_drill,
};
pub use level_vm::{LevelButtonVm, map_level_buttons};
