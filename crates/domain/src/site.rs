#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteSection {
    Home,
    StrongestMan,
    Universities,
    Athletes,
    Shop,
    Vision,
    Contact,
}

impl SiteSection {
    pub const ALL: [SiteSection; 7] = [
        Self::Home,
        Self::StrongestMan,
        Self::Universities,
        Self::Athletes,
        Self::Shop,
        Self::Vision,
        Self::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::StrongestMan => "Strongest Man",
            Self::Universities => "Universities",
            Self::Athletes => "Athletes",
            Self::Shop => "Shop",
            Self::Vision => "Vision",
            Self::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::StrongestMan => "#strongest-man",
            Self::Universities => "#universities",
            Self::Athletes => "#athletes",
            Self::Shop => "#shop",
            Self::Vision => "#roadmap",
            Self::Contact => "#contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
    }
}

/// Collapsible navigation menu. Following a link always collapses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    active: SiteSection,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            open: false,
            active: SiteSection::Home,
        }
    }
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> SiteSection {
        self.active
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn navigate(&mut self, section: SiteSection) {
        self.active = section;
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_resolve_back_to_their_section() {
        for section in SiteSection::ALL {
            assert_eq!(SiteSection::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SiteSection::from_anchor("#nowhere"), None);
        assert_eq!(SiteSection::Vision.anchor(), "#roadmap");
    }

    #[test]
    fn navigating_collapses_the_menu() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        menu.navigate(SiteSection::Contact);
        assert!(!menu.is_open());
        assert_eq!(menu.active(), SiteSection::Contact);
        assert!(menu.toggle());
        assert!(!menu.toggle());
    }
}
