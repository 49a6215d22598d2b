/// Top-level pages of the tutorial, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Introduction,
    Letters,
    Sounds,
    Blending,
    Games,
    Assessment,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Introduction,
        Section::Letters,
        Section::Sounds,
        Section::Blending,
        Section::Games,
        Section::Assessment,
    ];

    /// Stable element id of the section.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Introduction => "introduction",
            Section::Letters => "letters-az",
            Section::Sounds => "letter-sounds",
            Section::Blending => "blending",
            Section::Games => "practice-games",
            Section::Assessment => "assessment",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Introduction => "Welcome",
            Section::Letters => "Letters A-Z",
            Section::Sounds => "Letter Sounds",
            Section::Blending => "Blending",
            Section::Games => "Practice Games",
            Section::Assessment => "Assessment",
        }
    }

    /// Read out when the section becomes active.
    #[must_use]
    pub fn announcement(self) -> String {
        format!("Now viewing: {} section", self.id().replace('-', " "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_spells_out_the_id() {
        assert_eq!(
            Section::Letters.announcement(),
            "Now viewing: letters az section"
        );
        assert_eq!(
            Section::Games.announcement(),
            "Now viewing: practice games section"
        );
    }
}
