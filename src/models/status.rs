use serde::Serialize;

/// Open/closed state of the practice at one instant.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OpenState {
    Open,
    OpensLater,
    Closed,
}

impl OpenState {
    pub fn os_as_str(&self) -> &'static str {
        match self {
            OpenState::Open => "open",
            OpenState::OpensLater => "opens-later",
            OpenState::Closed => "closed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            OpenState::Open => "🟢",
            OpenState::OpensLater => "🟡",
            OpenState::Closed => "🔴",
        }
    }
}

/// Derived status handed back to the caller. Recomputed on every request,
/// never cached.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TodayStatus {
    pub state: OpenState,
    pub display_text: String,
    pub icon: &'static str,
}

impl TodayStatus {
    pub fn new(state: OpenState, display_text: String) -> Self {
        let icon = state.icon();
        Self {
            state,
            display_text,
            icon,
        }
    }
}

/// First upcoming day with open hours, as shown in closed banners:
/// "tomorrow" when one day ahead, otherwise a 3-letter abbreviation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextOpening {
    pub day_label: String,
    pub time: String,
}
