//! Portfolio Backend Client Library
//!
//! A Rust client for a portfolio site's REST backend, covering the public
//! contact form, the admin login gate, cached admin collections for skills,
//! services, projects and messages, and image uploads to object storage.

pub mod auth;
pub mod collection;
pub mod config;
pub mod error;
pub mod fetch;
pub mod gateway;
pub mod icons;
pub mod media;
pub mod notify;
pub mod resources;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::auth::{AdminAuth, AuthSession};
use crate::collection::CollectionManager;
use crate::config::{ClientOptions, MediaOptions};
use crate::error::Error;
use crate::gateway::RestCollection;
use crate::media::MediaClient;
use crate::notify::{LogSink, NotificationSink};
use crate::resources::{ContactClient, Message, Project, Resource, Service, Skill};

/// The main entry point for the portfolio client
pub struct Portfolio {
    /// The base URL of the site's REST backend
    pub url: String,
    /// HTTP client shared by every sub-client
    pub http_client: Client,
    /// Auth client for the admin login gate
    pub auth: AdminAuth,
    /// Client options
    pub options: ClientOptions,
    /// Sink that receives operation feedback
    sink: Arc<dyn NotificationSink>,
}

impl Portfolio {
    /// Create a new portfolio client
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the site's REST backend
    ///
    /// # Example
    ///
    /// ```
    /// use portfolio_client::Portfolio;
    ///
    /// let portfolio = Portfolio::new("https://portfolio.example.com");
    /// ```
    pub fn new(url: &str) -> Self {
        Self::new_with_options(url, ClientOptions::default())
    }

    /// Create a new portfolio client with custom options
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the site's REST backend
    /// * `options` - Custom client options
    ///
    /// # Example
    ///
    /// ```
    /// use portfolio_client::Portfolio;
    /// use portfolio_client::config::{ClientOptions, MediaOptions};
    /// use std::time::Duration;
    ///
    /// let options = ClientOptions::default()
    ///     .with_request_timeout(Some(Duration::from_secs(10)))
    ///     .with_media(MediaOptions::new("https://media.example.com", "service-key"));
    /// let portfolio = Portfolio::new_with_options("https://portfolio.example.com", options);
    /// ```
    pub fn new_with_options(url: &str, options: ClientOptions) -> Self {
        let http_client = Client::new();
        let url = url.trim_end_matches('/').to_string();

        let auth = AdminAuth::new(&url, http_client.clone(), options.clone());

        Self {
            url,
            http_client,
            auth,
            options,
            sink: Arc::new(LogSink),
        }
    }

    /// Create a client from the environment.
    ///
    /// `PORTFOLIO_API_URL` is required. `MEDIA_STORAGE_URL` and
    /// `MEDIA_STORAGE_KEY` are optional but must be set together; they enable
    /// the image upload side-channel.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = env::var("PORTFOLIO_API_URL")
            .map_err(|_| Error::config("PORTFOLIO_API_URL is not set"))?;
        url::Url::parse(&base_url)?;

        let mut options = ClientOptions::default();
        match (env::var("MEDIA_STORAGE_URL"), env::var("MEDIA_STORAGE_KEY")) {
            (Ok(media_url), Ok(media_key)) => {
                options = options.with_media(MediaOptions::new(&media_url, &media_key));
            }
            (Err(_), Err(_)) => {}
            _ => {
                return Err(Error::config(
                    "MEDIA_STORAGE_URL and MEDIA_STORAGE_KEY must be set together",
                ));
            }
        }

        Ok(Self::new_with_options(&base_url, options))
    }

    /// Replace the notification sink every admin collection reports through
    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Get a reference to the auth client for the admin login gate
    pub fn auth(&self) -> &AdminAuth {
        &self.auth
    }

    /// Get the admin panel behind the login gate.
    ///
    /// The only way to obtain an [`AuthSession`] is a successful
    /// [`AdminAuth::sign_in`], so admin collections are unreachable without
    /// one.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), portfolio_client::error::Error> {
    /// use portfolio_client::Portfolio;
    ///
    /// let portfolio = Portfolio::new("https://portfolio.example.com");
    /// let session = portfolio.auth().sign_in("admin@example.com", "hunter2").await?;
    ///
    /// let mut skills = portfolio.admin(&session).skills();
    /// skills.load().await?;
    /// for skill in skills.view() {
    ///     println!("{}: {}", skill.name, skill.desc);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn admin(&self, _session: &AuthSession) -> AdminPanel {
        AdminPanel {
            url: self.url.clone(),
            http_client: self.http_client.clone(),
            sink: self.sink.clone(),
            timeout: self.options.request_timeout,
        }
    }

    /// Get a client for the public contact form
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), portfolio_client::error::Error> {
    /// use portfolio_client::Portfolio;
    /// use portfolio_client::resources::MessageDraft;
    ///
    /// let portfolio = Portfolio::new("https://portfolio.example.com");
    /// let draft = MessageDraft {
    ///     name: "Ada".to_string(),
    ///     email: "ada@example.com".to_string(),
    ///     message: "Love the projects page.".to_string(),
    ///     phone: None,
    /// };
    /// portfolio.contact().send(&draft).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn contact(&self) -> ContactClient {
        ContactClient::new(
            &self.url,
            self.http_client.clone(),
            self.options.request_timeout,
        )
    }

    /// Get a client for image uploads.
    ///
    /// Fails unless the options carry [`MediaOptions`].
    pub fn media(&self) -> Result<MediaClient, Error> {
        let options = self
            .options
            .media
            .as_ref()
            .ok_or_else(|| Error::config("media storage is not configured"))?;
        Ok(MediaClient::new(options, self.http_client.clone()))
    }
}

/// The admin side of the site: one cached collection manager per resource.
///
/// Obtained from [`Portfolio::admin`] with a live session.
pub struct AdminPanel {
    url: String,
    http_client: Client,
    sink: Arc<dyn NotificationSink>,
    timeout: Option<Duration>,
}

impl AdminPanel {
    /// Create a collection manager for any resource type
    pub fn collection<R: Resource>(&self) -> CollectionManager<R> {
        let gateway = RestCollection::new(&self.url, self.http_client.clone(), self.timeout);
        CollectionManager::new(Box::new(gateway), self.sink.clone())
    }

    /// Manager for the skills collection
    pub fn skills(&self) -> CollectionManager<Skill> {
        self.collection()
    }

    /// Manager for the services collection
    pub fn services(&self) -> CollectionManager<Service> {
        self.collection()
    }

    /// Manager for the projects collection
    pub fn projects(&self) -> CollectionManager<Project> {
        self.collection()
    }

    /// Manager for the received contact messages
    pub fn messages(&self) -> CollectionManager<Message> {
        self.collection()
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::collection::{CategoryFilter, CollectionManager, LoadState, SortDirection};
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::notify::{Notification, NotificationKind, NotificationSink};
    pub use crate::resources::{
        Message, MessageDraft, Project, ProjectDraft, Service, ServiceDraft, Skill, SkillDraft,
    };
    pub use crate::{AdminPanel, Portfolio};
}
