pub mod account;
pub mod activity;
pub mod auth;
pub mod dashboard;
pub mod news;
pub mod prayer_room;
pub mod profile;
pub mod slug;
pub mod system_log;

pub use self::account::{AccountServiceTrait, DynAccountService};
pub use self::activity::{ActivityServiceTrait, DynActivityService};
pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::dashboard::{DashboardServiceTrait, DynDashboardService};
pub use self::news::{DynNewsService, NewsServiceTrait};
pub use self::prayer_room::{DynPrayerRoomService, PrayerRoomServiceTrait};
pub use self::profile::{DynProfileFetcher, ProfileFetcherTrait};
pub use self::slug::{DynSlugService, SlugServiceTrait};
pub use self::system_log::{DynSystemLogService, SystemLogServiceTrait};
