use std::fmt;

/// Gallery pages of the demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Basic,
    Bars,
    Special,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Basic, Tab::Bars, Tab::Special];

    pub fn index(self) -> usize {
        match self {
            Tab::Basic => 0,
            Tab::Bars => 1,
            Tab::Special => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tab::Basic => "Basic",
            Tab::Bars => "Bars",
            Tab::Special => "Special",
        };
        write!(f, "{}", s)
    }
}

/// What a key press asks the demo to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PreviousTab,
    NextTheme,
    PreviousTheme,
    CycleMarker,
    TogglePlotTheme,
}
