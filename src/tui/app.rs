use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::api::{UserServiceClient, DISCORD_USER_NOT_FOUND_CODE};
use crate::auth::{AuthorizationHeaderProvider, BearerToken};
use crate::api::platform::{email_settings_url, profile_settings_url};
use crate::config::Config;
use crate::error::{ProfileError, Result};
use crate::i18n::{Catalog, Locale, MessageKey};
use crate::profile::card::ProfileCard;
use crate::profile::model::{
    can_benefit_from_discord_role, Achievement, DisplayedProfile, Subscription,
};
use crate::profile::sync::DiscordSync;
use crate::tui::theme::Theme;
use crate::utils::{SystemUrlOpener, UrlOpener};

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Profile,
    Help,
}

/// Which of the three mutually exclusive renderings the profile screen
/// shows, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendering {
    Error,
    Loading,
    Card,
}

/// Results of spawned work, delivered back to the UI loop. Late results
/// whose receiver is gone are dropped silently, so nothing acts on a
/// torn-down view.
pub enum AppEvent {
    ProfileLoaded(Result<ProfileBundle>),
    DiscordSyncFinished(Result<()>),
}

/// Everything the profile screen needs, fetched together.
pub struct ProfileBundle {
    pub profile: DisplayedProfile,
    pub subscription: Option<Subscription>,
    pub achievements: Vec<Achievement>,
    pub fetched_at: DateTime<Utc>,
}

pub struct Alert {
    pub title: String,
    pub message: String,
}

pub struct App {
    // UI state
    pub current_screen: Screen,
    pub should_quit: bool,
    pub status_message: String,
    pub is_loading: bool,

    // Profile data
    pub profile: Option<DisplayedProfile>,
    pub subscription: Option<Subscription>,
    pub achievements: Vec<Achievement>,
    pub load_error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,

    // Discord sync
    pub sync: DiscordSync,
    pub alert: Option<Alert>,

    pub config: Config,
    pub catalog: Catalog,
    pub theme: Theme,

    // Capabilities
    client: UserServiceClient,
    auth: Arc<dyn AuthorizationHeaderProvider>,
    url_opener: Arc<dyn UrlOpener>,
    events: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(config: Config, events: mpsc::Sender<AppEvent>) -> Result<Self> {
        let token = config
            .auth_token()
            .map_err(|e| ProfileError::Auth(e.to_string()))?;
        let client = UserServiceClient::new(&config.api.base_url, config.api.timeout_secs)?;

        Self::with_capabilities(
            config,
            client,
            Arc::new(BearerToken::new(token)),
            Arc::new(SystemUrlOpener),
            events,
        )
    }

    /// Build an app with explicit capabilities; the seam tests use.
    pub fn with_capabilities(
        config: Config,
        client: UserServiceClient,
        auth: Arc<dyn AuthorizationHeaderProvider>,
        url_opener: Arc<dyn UrlOpener>,
        events: mpsc::Sender<AppEvent>,
    ) -> Result<Self> {
        let catalog = Catalog::new(Locale::parse(&config.ui.locale));
        let theme = Theme::from_kind(config.ui.theme);

        Ok(Self {
            current_screen: Screen::Profile,
            should_quit: false,
            status_message: "Ready".to_string(),
            is_loading: false,
            profile: None,
            subscription: None,
            achievements: Vec::new(),
            load_error: None,
            fetched_at: None,
            sync: DiscordSync::new(),
            alert: None,
            catalog,
            theme,
            config,
            client,
            auth,
            url_opener,
            events,
        })
    }

    // Navigation
    pub fn toggle_help(&mut self) {
        self.current_screen = match self.current_screen {
            Screen::Profile => Screen::Help,
            Screen::Help => Screen::Profile,
        };
    }

    /// Which rendering the profile screen shows: error placeholder wins,
    /// then the loading placeholder, then the card.
    pub fn rendering(&self) -> Rendering {
        if self.load_error.is_some() {
            Rendering::Error
        } else if self.profile.is_none() {
            Rendering::Loading
        } else {
            Rendering::Card
        }
    }

    /// Resolve the card view model for the loaded profile.
    pub fn card(&self) -> Option<ProfileCard> {
        self.profile.as_ref().map(|profile| {
            ProfileCard::resolve(
                profile,
                self.subscription.as_ref(),
                &self.achievements,
                &self.catalog,
                &self.config.platform,
            )
        })
    }

    // Actions
    /// (Re)fetch profile, subscription and achievements. Also the retry
    /// action of the error placeholder.
    pub fn reload(&mut self) {
        self.load_error = None;
        self.profile = None;
        self.is_loading = true;
        self.status_message = self.catalog.text(MessageKey::ProfileLoading).to_string();

        let client = self.client.clone();
        let auth = self.auth.clone();
        let user_id = self.config.account.user_id.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            let result = fetch_bundle(&client, auth.as_ref(), &user_id).await;
            let _ = events.send(AppEvent::ProfileLoaded(result)).await;
        });
    }

    /// Trigger the Discord-username sync. No-op without a loaded profile,
    /// without the sync control, or while a previous sync has not
    /// resolved back to idle.
    pub fn sync_discord_username(&mut self) {
        let Some(profile) = &self.profile else {
            return;
        };
        if !self.sync_control_available() {
            return;
        }
        if !self.sync.begin() {
            return;
        }

        self.status_message = "Syncing Discord username...".to_string();

        let client = self.client.clone();
        let auth = self.auth.clone();
        let user_id = profile.id.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            let result = client.sync_discord_username(auth.as_ref(), &user_id).await;
            let _ = events.send(AppEvent::DiscordSyncFinished(result)).await;
        });
    }

    /// Whether the sync control is rendered at all: eligible subscription
    /// and a Discord username present.
    pub fn sync_control_available(&self) -> bool {
        let has_username = self
            .profile
            .as_ref()
            .and_then(|profile| profile.discord_username.as_deref())
            .map(|name| !name.is_empty())
            .unwrap_or(false);

        has_username && can_benefit_from_discord_role(self.subscription.as_ref())
    }

    pub fn open_edit_profile(&mut self) {
        if self.profile.is_none() {
            return;
        }
        let url = profile_settings_url(&self.config.platform);
        self.open_url(&url);
    }

    pub fn open_change_email(&mut self) {
        let Some(card) = self.card() else {
            return;
        };
        if !card.change_email_enabled {
            self.status_message = "Email is managed automatically and cannot be changed here".to_string();
            return;
        }
        let url = email_settings_url(&self.config.platform);
        self.open_url(&url);
    }

    pub fn open_public_profile(&mut self) {
        let Some(card) = self.card() else {
            return;
        };
        self.open_url(&card.public_profile_url);
    }

    fn open_url(&mut self, url: &str) {
        match self.url_opener.open_url(url) {
            Ok(()) => {
                self.status_message = format!("Opened {url}");
            }
            Err(e) => {
                error!("failed to open {url}: {e}");
                self.status_message = format!("Failed to open {url}");
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // Event plumbing
    pub fn on_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ProfileLoaded(result) => self.on_profile_loaded(result),
            AppEvent::DiscordSyncFinished(result) => self.on_sync_finished(result),
        }
    }

    pub fn on_tick(&mut self) {
        self.sync.tick(Instant::now());
    }

    /// Drop anything scheduled against this view; called before quitting.
    pub fn teardown(&mut self) {
        self.sync.cancel();
    }

    fn on_profile_loaded(&mut self, result: Result<ProfileBundle>) {
        self.is_loading = false;
        match result {
            Ok(bundle) => {
                info!("profile loaded for {}", bundle.profile.id);
                self.profile = Some(bundle.profile);
                self.subscription = bundle.subscription;
                self.achievements = bundle.achievements;
                self.fetched_at = Some(bundle.fetched_at);
                self.load_error = None;
                self.status_message = "Profile loaded".to_string();
            }
            Err(e) => {
                error!("failed to load profile: {e}");
                self.load_error = Some(e.to_string());
                self.status_message = "Failed to load profile".to_string();
            }
        }
    }

    fn on_sync_finished(&mut self, result: Result<()>) {
        match result {
            Ok(()) => {
                self.sync.finish(Instant::now(), true);
                self.status_message = "Discord role synced".to_string();
            }
            Err(e) => {
                error!("error while syncing discord username: {e}");
                self.sync.finish(Instant::now(), false);
                match e.status_and_code() {
                    Some((400, code)) if code == DISCORD_USER_NOT_FOUND_CODE => {
                        self.show_alert(
                            MessageKey::AlertDiscordUserNotFoundTitle,
                            MessageKey::AlertDiscordUserNotFoundMessage,
                        );
                    }
                    _ => {
                        self.show_alert(
                            MessageKey::AlertSyncFailedTitle,
                            MessageKey::AlertSyncFailedMessage,
                        );
                    }
                }
                self.status_message = "Discord username sync failed".to_string();
            }
        }
    }

    fn show_alert(&mut self, title: MessageKey, message: MessageKey) {
        self.alert = Some(Alert {
            title: self.catalog.text(title).to_string(),
            message: self.catalog.text(message).to_string(),
        });
    }
}

async fn fetch_bundle(
    client: &UserServiceClient,
    auth: &dyn AuthorizationHeaderProvider,
    user_id: &str,
) -> Result<ProfileBundle> {
    let (profile, subscription, achievements) = futures::try_join!(
        client.fetch_profile(auth, user_id),
        client.fetch_subscription(auth, user_id),
        client.fetch_achievements(),
    )?;

    Ok(ProfileBundle {
        profile,
        subscription,
        achievements,
        fetched_at: Utc::now(),
    })
}
