//! Static navigation model shared by the desktop bar and the mobile menu.

/// Every page the header links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    About,
    Services,
    Resources,
    Diseases,
    Webinars,
    Contact,
    SupportUs,
    PhysicianDirectory,
    FamilyPhysician,
}

impl NavTarget {
    pub const ALL: [NavTarget; 10] = [
        NavTarget::Home,
        NavTarget::About,
        NavTarget::Services,
        NavTarget::Resources,
        NavTarget::Diseases,
        NavTarget::Webinars,
        NavTarget::Contact,
        NavTarget::SupportUs,
        NavTarget::PhysicianDirectory,
        NavTarget::FamilyPhysician,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::About => "/about",
            NavTarget::Services => "/services",
            NavTarget::Resources => "/resources",
            NavTarget::Diseases => "/diseases",
            NavTarget::Webinars => "/webinars",
            NavTarget::Contact => "/contact",
            NavTarget::SupportUs => "/support-us",
            NavTarget::PhysicianDirectory => "/physician-directory",
            NavTarget::FamilyPhysician => "/family-physician",
        }
    }

    pub fn from_path(path: &str) -> Option<NavTarget> {
        NavTarget::ALL.into_iter().find(|t| t.path() == path)
    }

    /// Fluent message id of the link label.
    pub fn label_key(self) -> &'static str {
        match self {
            NavTarget::Home => "header-home",
            NavTarget::About => "header-about-us",
            NavTarget::Services => "header-for-community",
            NavTarget::Resources => "header-for-clinicians",
            NavTarget::Diseases => "header-diseases",
            NavTarget::Webinars => "header-webinars",
            NavTarget::Contact => "header-contact",
            NavTarget::SupportUs => "header-support-us",
            NavTarget::PhysicianDirectory => "header-find-physician",
            NavTarget::FamilyPhysician => "header-family-physician",
        }
    }
}

/// The two link groups rendered as dropdowns on desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dropdown {
    Education,
    PhysicianDirectory,
}

impl Dropdown {
    pub fn items(self) -> &'static [NavTarget] {
        match self {
            Dropdown::Education => &[NavTarget::Diseases, NavTarget::Webinars],
            Dropdown::PhysicianDirectory => {
                &[NavTarget::PhysicianDirectory, NavTarget::FamilyPhysician]
            }
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Dropdown::Education => "header-education",
            Dropdown::PhysicianDirectory => "header-physician-directory",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Dropdown::Education => "education",
            Dropdown::PhysicianDirectory => "physician",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Link(NavTarget),
    Group(Dropdown),
}

/// Bar order. Mobile flattens the groups in place.
pub const NAV_ENTRIES: [NavEntry; 8] = [
    NavEntry::Link(NavTarget::Home),
    NavEntry::Link(NavTarget::About),
    NavEntry::Link(NavTarget::Services),
    NavEntry::Link(NavTarget::Resources),
    NavEntry::Group(Dropdown::Education),
    NavEntry::Link(NavTarget::Contact),
    NavEntry::Link(NavTarget::SupportUs),
    NavEntry::Group(Dropdown::PhysicianDirectory),
];
