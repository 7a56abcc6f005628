//! Tidewalk: navigation core and desktop shell for a small eco-tourism site.
//!
//! - [`navigation`]: sequence cursor, drag navigator and auto-advance timer
//! - [`widgets`]: hero slideshow, photo gallery and activism timeline
//! - [`booking`]: booking inquiries and their mail delivery worker
//! - [`persistence`]: TOML site configuration
//! - [`ui`]: eframe presentation shell

pub mod booking;
pub mod navigation;
pub mod persistence;
pub mod ui;
pub mod widgets;
