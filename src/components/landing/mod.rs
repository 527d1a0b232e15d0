//! Interactive landing page behaviours.
//!
//! Each behaviour is a small state type with pure transitions plus the
//! component that binds it to the page:
//! - Preloader hidden on load, with a fallback timeout
//! - Header `scrolled` state and the mobile navigation menu
//! - One-shot scroll reveals driven by a shared `IntersectionObserver`
//! - FAQ accordion with a single open item
//! - Monthly/yearly pricing switch
//! - Back-to-top button and smooth in-page anchor scrolling
//! - Count-up stats and pointer tilt on cards
//!
//! Behaviours whose content or browser capability is missing render nothing
//! or skip their setup; none of them report errors to the page.

pub mod anchor;
pub mod back_to_top;
pub mod config;
pub mod counter;
pub mod dom;
pub mod faq;
pub mod header;
pub mod preloader;
pub mod pricing;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod tilt;
pub mod types;

pub use back_to_top::BackToTop;
pub use config::{ParticleSettings, Settings};
pub use header::Header;
pub use preloader::Preloader;
pub use reveal::{Reveal, provide_reveal_observer};
pub use scroll::provide_scroll_position;
pub use sections::{FaqSection, FeaturesSection, HeroSection, PricingSection, StatsSection};
pub use types::PageData;
