//! Visibility state for the header's optional panels.
//!
//! Each mounted header owns one [`MenuState`]. Flags start closed and only
//! change in response to clicks (or Escape, which closes everything).
//!
//! Policy
//! ------
//! - The two dropdowns are independent: opening one never closes the other.
//! - Desktop and mobile language switchers each have their own flag.
//! - Following any link closes the panel it was rendered in, whether that is
//!   a dropdown or the mobile menu (see [`MenuState::navigate`]).

use super::nav::Dropdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitcherInstance {
    Desktop,
    Mobile,
}

impl SwitcherInstance {
    pub fn slug(self) -> &'static str {
        match self {
            SwitcherInstance::Desktop => "desktop",
            SwitcherInstance::Mobile => "mobile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    MobileMenu,
    Language(SwitcherInstance),
    Dropdown(Dropdown),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    mobile_menu: bool,
    desktop_language: bool,
    mobile_language: bool,
    education: bool,
    physician: bool,
}

impl MenuState {
    fn flag_mut(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::MobileMenu => &mut self.mobile_menu,
            Panel::Language(SwitcherInstance::Desktop) => &mut self.desktop_language,
            Panel::Language(SwitcherInstance::Mobile) => &mut self.mobile_language,
            Panel::Dropdown(Dropdown::Education) => &mut self.education,
            Panel::Dropdown(Dropdown::PhysicianDirectory) => &mut self.physician,
        }
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::MobileMenu => self.mobile_menu,
            Panel::Language(SwitcherInstance::Desktop) => self.desktop_language,
            Panel::Language(SwitcherInstance::Mobile) => self.mobile_language,
            Panel::Dropdown(Dropdown::Education) => self.education,
            Panel::Dropdown(Dropdown::PhysicianDirectory) => self.physician,
        }
    }

    /// Flips one flag and returns its new value.
    pub fn toggle(&mut self, panel: Panel) -> bool {
        let flag = self.flag_mut(panel);
        *flag = !*flag;
        *flag
    }

    pub fn close(&mut self, panel: Panel) {
        *self.flag_mut(panel) = false;
    }

    /// A language entry was picked in `instance`'s panel.
    pub fn select_language(&mut self, instance: SwitcherInstance) {
        self.close(Panel::Language(instance));
    }

    /// A link was followed: link-bearing panels close, language panels keep their state.
    pub fn navigate(&mut self) {
        self.mobile_menu = false;
        self.education = false;
        self.physician = false;
    }

    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    pub fn any_open(&self) -> bool {
        *self != Self::default()
    }
}
