//! Configuration section definitions.
//!
//! Each module corresponds to a section in `stickynav.toml`:
//!
//! | Module      | TOML Section    | Purpose                              |
//! |-------------|-----------------|--------------------------------------|
//! | `analytics` | `[analytics]`   | Tracker id                           |
//! | `assets`    | `[assets]`      | Stylesheet/script/image directories  |
//! | `blog`      | `[blog]`        | Blog prefix, layout, tag template    |
//! | `build`     | `[build]`       | Output dir, plugin order             |
//! | `highlight` | `[highlight]`   | Syntax highlighter pattern/target    |
//! | `nav`       | `[nav]`         | Scroll-spy element ids and classes   |
//! | `site`      | `[site]`        | Title and public URL                 |

mod analytics;
mod assets;
mod blog;
mod build;
mod highlight;
mod nav;
mod site;

pub use analytics::AnalyticsConfig;
pub use assets::AssetsConfig;
pub use blog::BlogConfig;
pub use build::BuildSectionConfig;
pub use highlight::HighlightConfig;
pub use nav::NavConfig;
pub use site::SiteInfoConfig;
