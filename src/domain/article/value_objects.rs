use crate::domain::errors::{DomainError, DomainResult};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Stable, human readable identifier of a published article. The string form
/// doubles as the URL segment under `/blog/`, so a value is never reused for a
/// different article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleId {
    ProvinencaDesconeguda,
    SudokuGeneration,
    ExpressOnGoogleCloud,
    WordpressOnGoogleCloud,
    AndroidAppPublishing,
    IosAppPublishing,
    ReactNativeFirebaseAuth,
    ExpoSocialSignIn,
    ExpoPushNotifications,
    TypescriptMonorepo,
    ExpressTypedApi,
    WebRtc,
    TypescriptMonorepoII,
    TypedWebApi,
    OtfMigrations,
    WebApiProxyMigration,
    MinimalisticTranslation,
    JiraGoogleSheets,
    ReactSsr,
    DynamicSitemap,
}

impl ArticleId {
    pub const ALL: [Self; 20] = [
        Self::ProvinencaDesconeguda,
        Self::SudokuGeneration,
        Self::ExpressOnGoogleCloud,
        Self::WordpressOnGoogleCloud,
        Self::AndroidAppPublishing,
        Self::IosAppPublishing,
        Self::ReactNativeFirebaseAuth,
        Self::ExpoSocialSignIn,
        Self::ExpoPushNotifications,
        Self::TypescriptMonorepo,
        Self::ExpressTypedApi,
        Self::WebRtc,
        Self::TypescriptMonorepoII,
        Self::TypedWebApi,
        Self::OtfMigrations,
        Self::WebApiProxyMigration,
        Self::MinimalisticTranslation,
        Self::JiraGoogleSheets,
        Self::ReactSsr,
        Self::DynamicSitemap,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProvinencaDesconeguda => "provinenca-desconeguda",
            Self::SudokuGeneration => "sudoku-generation",
            Self::ExpressOnGoogleCloud => "express-on-google-cloud",
            Self::WordpressOnGoogleCloud => "wordpress-on-google-cloud",
            Self::AndroidAppPublishing => "android-app-publishing",
            Self::IosAppPublishing => "ios-app-publishing",
            Self::ReactNativeFirebaseAuth => "react-native-firebase-auth",
            Self::ExpoSocialSignIn => "expo-social-sign-in",
            Self::ExpoPushNotifications => "expo-push-notifications",
            Self::TypescriptMonorepo => "typescript-monorepo",
            Self::ExpressTypedApi => "express-typed-api",
            Self::WebRtc => "webrtc",
            Self::TypescriptMonorepoII => "typescript-monorepo-ii",
            Self::TypedWebApi => "typed-web-api",
            Self::OtfMigrations => "otf-migrations",
            Self::WebApiProxyMigration => "web-api-proxy-migration",
            Self::MinimalisticTranslation => "minimalistic-translation",
            Self::JiraGoogleSheets => "jira-google-sheets",
            Self::ReactSsr => "react-ssr",
            Self::DynamicSitemap => "dynamic-sitemap",
        }
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleId {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == value)
            .ok_or_else(|| DomainError::NotFound(format!("unknown article id: {value}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ca,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Ca];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Name of the language written in the language itself.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ca => "Català",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.as_str() == value)
            .ok_or_else(|| DomainError::Validation(format!("unsupported language: {value}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArticleCategory {
    #[default]
    Tech,
    OffTopic,
}

impl ArticleCategory {
    pub const ALL: [Self; 2] = [Self::Tech, Self::OffTopic];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::OffTopic => "off-topic",
        }
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleCategory {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| DomainError::Validation(format!("unknown category: {value}")))
    }
}
