mod account;
mod activity;
mod api;
mod auth;
mod dashboard;
mod id;
mod news;
mod page;
mod pagination;
mod prayer_room;
mod system_log;

pub use self::account::UserProfile;
pub use self::activity::Activity;
pub use self::api::{ApiResponse, ApiResponsePagination, Paginated};
pub use self::auth::{LoginResult, TokenPair};
pub use self::dashboard::{ChartDataset, ChartSeries, DashboardSummary};
pub use self::news::{News, SlugResponse};
pub use self::page::{LoginPage, MenuPage};
pub use self::pagination::Pagination;
pub use self::prayer_room::PrayerRoom;
pub use self::system_log::SystemLog;
