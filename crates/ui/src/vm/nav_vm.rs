use phonics_core::sections::Section;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavButtonVm {
    pub section: Section,
    pub label: &'static str,
    pub pressed: bool,
    pub class: &'static str,
}

#[must_use]
pub fn map_nav_buttons(active: Section) -> Vec<NavButtonVm> {
    Section::ALL
        .iter()
        .map(|section| {
            let pressed = *section == active;
            NavButtonVm {
                section: *section,
                label: nav_label(*section),
                pressed,
                class: if pressed { "nav-btn active" } else { "nav-btn" },
            }
        })
        .collect()
}

fn nav_label(section: Section) -> &'static str {
    match section {
        Section::Introduction => "Introduction",
        other => other.title(),
    }
}
