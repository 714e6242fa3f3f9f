//! Element hooks the page markup provides

pub const HERO: &str = ".hero";
pub const HERO_CANVAS_ID: &str = "cursorWeb";
pub const HAMBURGER: &str = ".hamburger";
pub const NAV_MENU: &str = ".nav-menu";
pub const NAV_LINKS: &str = ".nav-menu a";
pub const SCROLL_PROGRESS: &str = ".scroll-progress";
pub const SCROLL_TO_TOP: &str = ".scroll-to-top";
pub const SKILLS: &str = ".skills";
pub const SKILL_BARS: &str = ".progress";
pub const CONTACT_FORM_ID: &str = "contactForm";
