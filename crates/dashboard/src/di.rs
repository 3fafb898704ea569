use crate::{
    abstract_trait::{
        DynAccountService, DynActivityService, DynAuthService, DynDashboardService,
        DynNewsService, DynPrayerRoomService, DynProfileFetcher, DynSlugService,
        DynSystemLogService,
    },
    service::{
        AccountService, ActivityService, ApiClient, AuthService, DashboardService, NewsService,
        PrayerRoomService, ProfileFetcher, SlugService, SystemLogService,
    },
};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub account_service: DynAccountService,
    pub news_service: DynNewsService,
    pub prayer_room_service: DynPrayerRoomService,
    pub activity_service: DynActivityService,
    pub system_log_service: DynSystemLogService,
    pub dashboard_service: DynDashboardService,
    pub auth_service: DynAuthService,
    pub profile_fetcher: DynProfileFetcher,
    pub slug_service: DynSlugService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("account_service", &"DynAccountService")
            .field("news_service", &"DynNewsService")
            .field("prayer_room_service", &"DynPrayerRoomService")
            .field("activity_service", &"DynActivityService")
            .field("system_log_service", &"DynSystemLogService")
            .field("dashboard_service", &"DynDashboardService")
            .field("auth_service", &"DynAuthService")
            .field("profile_fetcher", &"DynProfileFetcher")
            .field("slug_service", &"DynSlugService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(client: ApiClient, http: Client, translate_url: Option<String>) -> Self {
        let account_service: DynAccountService = Arc::new(AccountService::new(client.clone()));

        let news_service: DynNewsService = Arc::new(NewsService::new(client.clone()));

        let prayer_room_service: DynPrayerRoomService =
            Arc::new(PrayerRoomService::new(client.clone()));

        let activity_service: DynActivityService = Arc::new(ActivityService::new(client.clone()));

        let system_log_service: DynSystemLogService =
            Arc::new(SystemLogService::new(client.clone()));

        let dashboard_service: DynDashboardService =
            Arc::new(DashboardService::new(client.clone()));

        let auth_service: DynAuthService = Arc::new(AuthService::new(client));

        let profile_fetcher: DynProfileFetcher =
            Arc::new(ProfileFetcher::new(account_service.clone()));

        let slug_service: DynSlugService = Arc::new(SlugService::new(http, translate_url));

        Self {
            account_service,
            news_service,
            prayer_room_service,
            activity_service,
            system_log_service,
            dashboard_service,
            auth_service,
            profile_fetcher,
            slug_service,
        }
    }
}
