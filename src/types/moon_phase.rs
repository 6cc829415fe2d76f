//! Moon phase tokens reported by the forecast API and the darkness categories they
//! score into.

/// One of the eight canonical moon phase tokens in the `daily.moon_phase` series.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// How much moonlight a phase puts in the night sky, from darkest to brightest.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MoonCategory {
    New,
    Crescent,
    Quarter,
    Gibbous,
    Full,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Parses an exact API token such as `"waxing_gibbous"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stargazing::MoonPhase;
    ///
    /// assert_eq!(MoonPhase::from_token("new_moon"), Some(MoonPhase::NewMoon));
    /// assert_eq!(MoonPhase::from_token("New Moon"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "new_moon" => Some(MoonPhase::NewMoon),
            "waxing_crescent" => Some(MoonPhase::WaxingCrescent),
            "first_quarter" => Some(MoonPhase::FirstQuarter),
            "waxing_gibbous" => Some(MoonPhase::WaxingGibbous),
            "full_moon" => Some(MoonPhase::FullMoon),
            "waning_gibbous" => Some(MoonPhase::WaningGibbous),
            "last_quarter" => Some(MoonPhase::LastQuarter),
            "waning_crescent" => Some(MoonPhase::WaningCrescent),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "new_moon",
            MoonPhase::WaxingCrescent => "waxing_crescent",
            MoonPhase::FirstQuarter => "first_quarter",
            MoonPhase::WaxingGibbous => "waxing_gibbous",
            MoonPhase::FullMoon => "full_moon",
            MoonPhase::WaningGibbous => "waning_gibbous",
            MoonPhase::LastQuarter => "last_quarter",
            MoonPhase::WaningCrescent => "waning_crescent",
        }
    }

    pub fn category(self) -> MoonCategory {
        match self {
            MoonPhase::NewMoon => MoonCategory::New,
            MoonPhase::WaxingCrescent | MoonPhase::WaningCrescent => MoonCategory::Crescent,
            MoonPhase::FirstQuarter | MoonPhase::LastQuarter => MoonCategory::Quarter,
            MoonPhase::WaxingGibbous | MoonPhase::WaningGibbous => MoonCategory::Gibbous,
            MoonPhase::FullMoon => MoonCategory::Full,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New moon",
            MoonPhase::WaxingCrescent => "Waxing crescent",
            MoonPhase::FirstQuarter => "First quarter",
            MoonPhase::WaxingGibbous => "Waxing gibbous",
            MoonPhase::FullMoon => "Full moon",
            MoonPhase::WaningGibbous => "Waning gibbous",
            MoonPhase::LastQuarter => "Last quarter",
            MoonPhase::WaningCrescent => "Waning crescent",
        }
    }
}

impl MoonCategory {
    /// Classifies any moon phase label.
    ///
    /// Canonical tokens are matched exactly. Anything else falls back to lowercase
    /// keyword matching in the order new, crescent, quarter, gibbous, full, so a
    /// variant spelling like `"waning-gibbous"` still lands in
    /// [`MoonCategory::Gibbous`]. Keywords are case-sensitive: `"New Moon"` has none.
    /// Returns `None` when no keyword is present.
    pub fn classify(label: &str) -> Option<Self> {
        if let Some(phase) = MoonPhase::from_token(label) {
            return Some(phase.category());
        }
        [
            ("new", MoonCategory::New),
            ("crescent", MoonCategory::Crescent),
            ("quarter", MoonCategory::Quarter),
            ("gibbous", MoonCategory::Gibbous),
            ("full", MoonCategory::Full),
        ]
        .into_iter()
        .find(|(keyword, _)| label.contains(keyword))
        .map(|(_, category)| category)
    }

    /// Darkness points awarded for this category (0-20).
    pub fn score(self) -> u8 {
        match self {
            MoonCategory::New => 20,
            MoonCategory::Crescent => 15,
            MoonCategory::Quarter => 10,
            MoonCategory::Gibbous => 5,
            MoonCategory::Full => 0,
        }
    }
}

/// Display name for a moon phase label; unknown labels are shown as-is.
pub fn moon_phase_display_name(label: &str) -> String {
    match MoonPhase::from_token(label) {
        Some(phase) => phase.display_name().to_string(),
        None => label.to_string(),
    }
}
