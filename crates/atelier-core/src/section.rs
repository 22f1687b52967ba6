//! Page sections in display order.

/// A navigable section of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    /// All sections, top to bottom.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::About => "ABOUT",
            Section::Services => "SERVICES",
            Section::Portfolio => "PORTFOLIO",
            Section::Contact => "CONTACT",
        }
    }

    /// Position of the section in [`Section::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
    }

    /// Cycle to the next section, wrapping to the top.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous section, wrapping to the bottom.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
