pub mod account;
pub mod activity;
pub mod auth;
pub mod client;
pub mod dashboard;
pub mod envelope;
pub mod multipart;
pub mod news;
pub mod prayer_room;
pub mod profile;
pub mod slug;
pub mod system_log;

pub use self::account::AccountService;
pub use self::activity::ActivityService;
pub use self::auth::AuthService;
pub use self::client::ApiClient;
pub use self::dashboard::DashboardService;
pub use self::envelope::{EnvelopeContract, Nesting};
pub use self::multipart::{MultipartPayload, PartValue};
pub use self::news::NewsService;
pub use self::prayer_room::PrayerRoomService;
pub use self::profile::ProfileFetcher;
pub use self::slug::{SLUG_FAILURE_MESSAGE, SlugService, slugify};
pub use self::system_log::SystemLogService;
