//! UI Components
//!
//! Reusable Leptos components.

mod archive_section;
mod league_card;
mod league_list;
mod navigation;

pub use archive_section::ArchiveSection;
pub use league_card::LeagueCard;
pub use league_list::LeagueList;
pub use navigation::Navigation;
