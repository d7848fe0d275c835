use crate::diagram::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a screen. This is a closed vocabulary: strings coming
/// from the generation service that do not match any variant are normalized to
/// [`ScreenType::Home`] during repair instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenType {
    Splash,
    Onboarding,
    Auth,
    Login,
    Signup,
    ForgotPassword,
    Home,
    Dashboard,
    List,
    Detail,
    Form,
    Search,
    Filter,
    Profile,
    Settings,
    Notifications,
    Feed,
    Chat,
    Comments,
    Cart,
    Checkout,
    Payment,
    OrderHistory,
    ProductList,
    ProductDetail,
    Map,
    Calendar,
    Gallery,
    MediaPlayer,
    Paywall,
    Help,
    About,
    Error,
    Loading,
    EmptyState,
}

impl ScreenType {
    /// Maps a free-form type string to a variant, tolerating the vocabulary a
    /// generation service tends to invent. Unrecognized strings become `Home`.
    pub fn parse_or_default(raw: &str) -> Self {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "splash" | "launch" => Self::Splash,
            "onboarding" | "welcome" | "intro" => Self::Onboarding,
            "auth" | "authentication" => Self::Auth,
            "login" | "signin" => Self::Login,
            "signup" | "register" | "registration" => Self::Signup,
            "forgotpassword" | "passwordreset" | "resetpassword" => Self::ForgotPassword,
            "home" | "main" => Self::Home,
            "dashboard" | "overview" => Self::Dashboard,
            "list" | "listing" | "index" => Self::List,
            "detail" | "details" | "view" => Self::Detail,
            "form" | "create" | "edit" | "input" => Self::Form,
            "search" => Self::Search,
            "filter" | "filters" => Self::Filter,
            "profile" | "account" => Self::Profile,
            "settings" | "preferences" => Self::Settings,
            "notifications" | "alerts" => Self::Notifications,
            "feed" | "timeline" => Self::Feed,
            "chat" | "messages" | "messaging" => Self::Chat,
            "comments" => Self::Comments,
            "cart" | "basket" => Self::Cart,
            "checkout" => Self::Checkout,
            "payment" | "billing" => Self::Payment,
            "orderhistory" | "orders" => Self::OrderHistory,
            "productlist" | "catalog" | "products" => Self::ProductList,
            "productdetail" | "product" => Self::ProductDetail,
            "map" => Self::Map,
            "calendar" | "schedule" => Self::Calendar,
            "gallery" | "photos" => Self::Gallery,
            "mediaplayer" | "player" | "video" => Self::MediaPlayer,
            "paywall" | "subscription" | "upgrade" => Self::Paywall,
            "help" | "support" | "faq" => Self::Help,
            "about" => Self::About,
            "error" | "failure" => Self::Error,
            "loading" => Self::Loading,
            "emptystate" | "empty" => Self::EmptyState,
            _ => Self::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Onboarding => "onboarding",
            Self::Auth => "auth",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::ForgotPassword => "forgot_password",
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::List => "list",
            Self::Detail => "detail",
            Self::Form => "form",
            Self::Search => "search",
            Self::Filter => "filter",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::Notifications => "notifications",
            Self::Feed => "feed",
            Self::Chat => "chat",
            Self::Comments => "comments",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Payment => "payment",
            Self::OrderHistory => "order_history",
            Self::ProductList => "product_list",
            Self::ProductDetail => "product_detail",
            Self::Map => "map",
            Self::Calendar => "calendar",
            Self::Gallery => "gallery",
            Self::MediaPlayer => "media_player",
            Self::Paywall => "paywall",
            Self::Help => "help",
            Self::About => "about",
            Self::Error => "error",
            Self::Loading => "loading",
            Self::EmptyState => "empty_state",
        }
    }
}

impl fmt::Display for ScreenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One app view in an [`Architecture`](crate::model::Architecture) graph.
///
/// Screens are created by generation and mutated by the editor (rename,
/// retype, auth toggle); they are only destroyed by an explicit delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub screen_type: ScreenType,
    #[serde(default)]
    pub description: String,
    /// Ordered component names, as reported by generation.
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub requires_auth: bool,
    /// Last-known diagram position, written back by the editor. The model
    /// layer never reads it; layout always recomputes from scratch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Screen {
    pub fn new(id: impl Into<String>, name: impl Into<String>, screen_type: ScreenType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            screen_type,
            description: String::new(),
            components: Vec::new(),
            requires_auth: false,
            position: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components = components.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }
}
