//! Folio Page - portfolio page behaviour
//!
//! The DOM-free state behind the page's interactive pieces: navigation menu,
//! scroll progress bar, scroll-to-top button, skill bar replay, contact form,
//! and the hero canvas event queue. The `web` feature binds them to a real document.

pub mod contact;
pub mod hero;
pub mod nav;
pub mod scroll;
pub mod selectors;
pub mod skills;

#[cfg(feature = "web")]
pub mod web;

pub use contact::{form_outcome, request_body, ContactForm};
pub use hero::{EventQueue, QueuedFrames};
pub use nav::NavMenu;
pub use scroll::{progress_transform, scroll_progress, ScrollToTop};
pub use skills::SkillReplay;
