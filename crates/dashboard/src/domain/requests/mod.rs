mod account;
mod activity;
mod auth;
mod form;
mod news;
mod prayer_room;
mod preferences;
mod query;
mod upload;

pub use self::account::{CreateAccountRequest, UpdateAccountRequest, UpdateRoleRequest};
pub use self::activity::{ContactPerson, CreateActivityRequest, UpdateActivityRequest};
pub use self::auth::LoginRequest;
pub use self::news::{CreateNewsRequest, SlugRequest, UpdateNewsRequest};
pub use self::prayer_room::{CreatePrayerRoomRequest, GeoPoint, UpdatePrayerRoomRequest};
pub use self::preferences::{ModeRequest, ThemeMode};
pub use self::query::{ChartQuery, ListQuery, SystemLogQuery};
pub use self::upload::{MultipartRequest, UploadFile};
