//! Published articles, declared oldest first. The registry reverses this
//! list so the most recently added article is displayed first; the order is
//! not derived from the `date` field.

mod stories;
mod tech;

use crate::domain::article::{
    Article, ArticleCategory::OffTopic, ArticleCategory::Tech, ArticleId, ArticleMetadata,
    Language::Ca, Language::En,
};

pub const DECLARED: [Article; 20] = [
    Article::new(
        ArticleMetadata {
            id: ArticleId::ProvinencaDesconeguda,
            category: OffTopic,
            date: "2020-04-27",
            duration: 3,
            languages: &[Ca],
            share_image: None,
        },
        stories::provinenca_desconeguda,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::SudokuGeneration,
            category: Tech,
            date: "2020-04-29",
            duration: 6,
            languages: &[Ca, En],
            share_image: None,
        },
        tech::sudoku_generation,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::ExpressOnGoogleCloud,
            category: Tech,
            date: "2020-05-17",
            duration: 6,
            languages: &[En],
            share_image: Some("autoscaling.gif"),
        },
        tech::express_on_google_cloud,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::WordpressOnGoogleCloud,
            category: Tech,
            date: "2020-12-07",
            duration: 7,
            languages: &[En],
            share_image: Some("wordpress-site.png"),
        },
        tech::wordpress_on_google_cloud,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::AndroidAppPublishing,
            category: Tech,
            date: "2021-01-03",
            duration: 8,
            languages: &[En],
            share_image: Some("play-console-home.png"),
        },
        tech::android_app_publishing,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::IosAppPublishing,
            category: Tech,
            date: "2021-01-18",
            duration: 9,
            languages: &[En],
            share_image: Some("apple-developer-portal-3.png"),
        },
        tech::ios_app_publishing,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::ReactNativeFirebaseAuth,
            category: Tech,
            date: "2021-01-28",
            duration: 7,
            languages: &[En],
            share_image: Some("firebase-auth-providers.png"),
        },
        tech::react_native_firebase_auth,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::ExpoSocialSignIn,
            category: Tech,
            date: "2021-02-20",
            duration: 8,
            languages: &[En],
            share_image: Some("firebase-auth-providers.png"),
        },
        tech::expo_social_sign_in,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::ExpoPushNotifications,
            category: Tech,
            date: "2021-08-19",
            duration: 12,
            languages: &[En],
            share_image: Some("push-token-notification.png"),
        },
        tech::expo_push_notifications,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::TypescriptMonorepo,
            category: Tech,
            date: "2022-06-25",
            duration: 11,
            languages: &[En],
            share_image: Some("weather-now-ui.png"),
        },
        tech::typescript_monorepo,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::ExpressTypedApi,
            category: Tech,
            date: "2023-01-13",
            duration: 8,
            languages: &[En],
            share_image: None,
        },
        tech::express_typed_api,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::WebRtc,
            category: Tech,
            date: "2023-07-12",
            duration: 7,
            languages: &[En],
            share_image: Some("webrtc-connection-diagram.png"),
        },
        tech::webrtc,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::TypescriptMonorepoII,
            category: Tech,
            date: "2024-06-07",
            duration: 5,
            languages: &[En],
            share_image: None,
        },
        tech::typescript_monorepo_ii,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::TypedWebApi,
            category: Tech,
            date: "2024-06-21",
            duration: 5,
            languages: &[En],
            share_image: Some("antenna.jpg"),
        },
        tech::typed_web_api,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::OtfMigrations,
            category: Tech,
            date: "2024-08-07",
            duration: 6,
            languages: &[En],
            share_image: Some("hard-drive.jpg"),
        },
        tech::otf_migrations,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::WebApiProxyMigration,
            category: Tech,
            date: "2024-11-06",
            duration: 8,
            languages: &[En],
            share_image: Some("web-proxy.png"),
        },
        tech::web_api_proxy_migration,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::MinimalisticTranslation,
            category: Tech,
            date: "2024-11-24",
            duration: 10,
            languages: &[En],
            share_image: Some("translation-art.jpg"),
        },
        tech::minimalistic_translation,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::JiraGoogleSheets,
            category: Tech,
            date: "2025-01-26",
            duration: 6,
            languages: &[En],
            share_image: Some("jira-cloud-function-description.png"),
        },
        tech::jira_google_sheets,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::ReactSsr,
            category: Tech,
            date: "2025-03-18",
            duration: 7,
            languages: &[En],
            share_image: Some("server-rendering.jpg"),
        },
        tech::react_ssr,
    ),
    Article::new(
        ArticleMetadata {
            id: ArticleId::DynamicSitemap,
            category: Tech,
            date: "2025-08-16",
            duration: 4,
            languages: &[En],
            share_image: Some("indexing.jpg"),
        },
        tech::dynamic_sitemap,
    ),
];
