//! # Persistence Module
//!
//! ## Why This Module Exists
//! Holds the site configuration: navigation tuning (drag threshold, slideshow
//! period), UI settings, booking delivery settings and the static content
//! lists that back every navigable widget. Everything is stored as one TOML
//! file so the operator can edit captions, photos and timeline entries
//! without rebuilding.
//!
//! ## Key Abstractions
//! - **Sectioned configuration**: navigation, ui, booking and content are
//!   separate structs so each consumer only sees the part it needs
//! - **Type-safe serialization**: strongly-typed serde structs, every section
//!   defaults so partial files still load
//! - **Validation before use**: [`SiteConfig::validate`] rejects values that
//!   would break the navigation invariants (empty lists, zero periods)
//!
//! ## Error Handling Strategy
//! File and parse problems are reported as [`ConfigError`]. The binary falls
//! back to defaults with a warning so the site always comes up.

pub mod config_store;

use serde::{Deserialize, Serialize};

use crate::navigation::ThresholdConfig;

pub use config_store::ConfigError;

/// Tuning of the navigation controllers.
///
/// ## Usage Context
/// Read once when widgets mount. `drag_threshold_px` feeds every
/// [`ThresholdConfig`], `auto_advance_ms` the hero slideshow timer.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Minimum horizontal drag distance before a step is committed
    pub drag_threshold_px: f32,
    /// Hero slideshow period in milliseconds
    pub auto_advance_ms: u64,
    /// Timeline entry shown when the timeline mounts
    pub timeline_initial_index: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 50.0,
            auto_advance_ms: 5000,
            timeline_initial_index: 0,
        }
    }
}

impl NavigationConfig {
    pub fn threshold(&self) -> ThresholdConfig {
        ThresholdConfig {
            pixels: self.drag_threshold_px,
        }
    }
}

/// Display settings for the desktop shell
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UIConfig {
    /// Target frames per second for repaint requests
    pub fps: u8,
    /// Start in fullscreen
    pub fullscreen: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            fullscreen: false,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Log,
    Http,
}

/// Where booking inquiries are delivered.
///
/// ## Security Note
/// The API key itself is never stored in the file; `api_key_env` names the
/// environment variable it is read from at startup.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BookingConfig {
    pub transport: TransportKind,
    /// HTTP endpoint of the mail API
    pub endpoint: String,
    /// Environment variable holding the mail API key
    pub api_key_env: String,
    /// From address of outgoing inquiry mails
    pub sender: String,
    /// Inbox receiving the inquiries
    pub recipient: String,
    /// Largest group the operator accepts in one booking
    pub max_group_size: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::Log,
            endpoint: "https://api.resend.com/emails".to_string(),
            api_key_env: "TIDEWALK_MAIL_API_KEY".to_string(),
            sender: "Tidewalk Bookings <bookings@tidewalk.example>".to_string(),
            recipient: "hello@tidewalk.example".to_string(),
            max_group_size: 20,
        }
    }
}

/// One full-width hero image
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct HeroSlide {
    pub image: String,
    pub caption: String,
}

/// One photo of the gallery
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct GalleryPhoto {
    pub image: String,
    pub caption: String,
}

/// One year of the activism timeline
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub year: u16,
    pub title: String,
    pub summary: String,
}

/// Static page content owned by the presentation layer.
///
/// ## Design Rationale
/// Each list length becomes the item count of the matching cursor; the
/// navigation layer never sees the entries themselves.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    /// Scheduled hikes offered in the booking form
    pub hikes: Vec<String>,
    /// Tour types offered for custom tour inquiries
    pub tour_types: Vec<String>,
    /// Campaign narrative paragraphs shown under the hero
    pub campaign: Vec<String>,
    pub hero: Vec<HeroSlide>,
    pub gallery: Vec<GalleryPhoto>,
    pub timeline: Vec<TimelineEntry>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        let hero = [
            "Dawn over the dune ridge",
            "Kelp forest at low tide",
            "Cliff path above the cove",
            "Seal colony on the north spit",
            "Salt marsh boardwalk",
            "Lighthouse headland",
            "Tide pools at Black Rocks",
            "Estuary in autumn light",
            "Night sky over the bay",
        ]
        .iter()
        .enumerate()
        .map(|(i, caption)| HeroSlide {
            image: format!("images/hero/hero-{:02}.jpg", i + 1),
            caption: caption.to_string(),
        })
        .collect();

        let gallery = (1..=30)
            .map(|n| GalleryPhoto {
                image: format!("images/gallery/coast-{:02}.jpg", n),
                caption: format!("Coastline walk, photo {}", n),
            })
            .collect();

        let timeline = [
            (2008, "First beach clean-up", "Twelve volunteers clear the south cove."),
            (2009, "Dune fencing", "Fragile dunes are fenced off from trampling."),
            (2010, "Guided walks begin", "Small-group coastline walks start on weekends."),
            (2011, "Seabird survey", "Walkers log nesting sites for the regional survey."),
            (2012, "Plastic-free pledge", "All tours go single-use plastic free."),
            (2013, "Marsh restoration", "Drainage ditches are blocked to rewet the marsh."),
            (2014, "School programme", "Local schools join monthly shore walks."),
            (2015, "Oil terminal protest", "Campaign against the planned harbour terminal."),
            (2016, "Terminal plans dropped", "The harbour terminal application is withdrawn."),
            (2017, "Seagrass planting", "First seagrass plots are seeded in the bay."),
            (2018, "Coastal path petition", "Petition to reopen the closed cliff path."),
            (2019, "Cliff path reopened", "The restored path opens to walkers."),
            (2020, "Community count", "Neighbours record wildlife during quieter seasons."),
            (2021, "Marine reserve bid", "Proposal filed for a local marine reserve."),
            (2022, "Reserve consultation", "Hundreds of responses back the reserve."),
            (2023, "Reserve designated", "The bay becomes a protected marine area."),
            (2024, "Ranger partnership", "Guides train alongside reserve rangers."),
        ]
        .iter()
        .map(|(year, title, summary)| TimelineEntry {
            year: *year,
            title: title.to_string(),
            summary: summary.to_string(),
        })
        .collect();

        // One guided hike per month
        let hikes = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ]
        .iter()
        .map(|month| format!("{} hike", month))
        .collect();

        let tour_types = [
            "Custom Tour",
            "Coastal Hiking",
            "Kayaking Adventure",
            "Cultural Experience",
            "Combined Package",
        ]
        .iter()
        .map(|tour| tour.to_string())
        .collect();

        let campaign = vec![
            "We walk this coastline every week, and every walk funds its protection.".to_string(),
            "Our guests have cleared beaches, planted seagrass and helped win a marine reserve."
                .to_string(),
        ];

        Self {
            hikes,
            tour_types,
            campaign,
            hero,
            gallery,
            timeline,
        }
    }
}

/// Complete site configuration as stored in `site.toml`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub navigation: NavigationConfig,
    pub ui: UIConfig,
    pub booking: BookingConfig,
    pub content: ContentConfig,
}

impl SiteConfig {
    /// Rejects configurations that would break widget construction
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| Err(ConfigError::Invalid(reason.to_string()));

        if !(self.navigation.drag_threshold_px > 0.0) {
            return invalid("navigation.drag_threshold_px must be greater than zero");
        }
        if self.navigation.auto_advance_ms == 0 {
            return invalid("navigation.auto_advance_ms must be greater than zero");
        }
        if self.content.hero.is_empty() {
            return invalid("content.hero needs at least one slide");
        }
        if self.content.gallery.is_empty() {
            return invalid("content.gallery needs at least one photo");
        }
        if self.content.timeline.is_empty() {
            return invalid("content.timeline needs at least one entry");
        }
        if self.navigation.timeline_initial_index >= self.content.timeline.len() {
            return invalid("navigation.timeline_initial_index is past the last timeline entry");
        }
        if self.booking.max_group_size == 0 {
            return invalid("booking.max_group_size must be at least one");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_matches_site_sections() {
        let config = SiteConfig::default();
        assert_eq!(config.content.hero.len(), 9);
        assert_eq!(config.content.gallery.len(), 30);
        assert_eq!(config.content.timeline.len(), 17);
        assert_eq!(config.content.hikes.len(), 12);
        assert_eq!(config.content.tour_types.len(), 5);
        assert_eq!(config.booking.max_group_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_falls_back_to_section_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            [navigation]
            drag_threshold_px = 80.0

            [booking]
            transport = "http"
            "#,
        )
        .unwrap();

        assert_eq!(config.navigation.drag_threshold_px, 80.0);
        assert_eq!(config.navigation.auto_advance_ms, 5000);
        assert_eq!(config.booking.transport, TransportKind::Http);
        assert_eq!(config.content.timeline.len(), 17);
    }

    #[test]
    fn validation_rejects_unusable_values() {
        let mut config = SiteConfig::default();
        config.navigation.drag_threshold_px = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SiteConfig::default();
        config.content.gallery.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SiteConfig::default();
        config.navigation.timeline_initial_index = 17;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
