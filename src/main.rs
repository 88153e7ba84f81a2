use iced::widget::image::Handle;
use iced::{Element, Task, Theme};
use thiserror::Error;

mod config;
mod logging;
mod media;
mod platform;
mod state;
mod ui;

use config::AppConfig;
use media::{Fetcher, ImageStore, LoadedImage, MediaError, Resolved};
use state::catalog::{Catalog, CatalogError};
use state::contact;
use state::data::Selection;
use state::navigator::{NavigationState, ViewMode, Zoom};

/// Startup failures; anything after startup is handled in place
#[derive(Debug, Error)]
enum AppError {
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error("window system error: {0}")]
    Iced(#[from] iced::Error),
}

/// Main application state
struct RugCatalog {
    catalog: Catalog,
    config: AppConfig,
    nav: NavigationState,
    images: ImageStore,
    fetcher: Fetcher,
    /// Zoom crop for the image on screen, with the inputs it was built from
    zoom_view: Option<(String, Zoom, Handle)>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Size tab clicked on the home view
    SelectCategory(String),
    /// Home card clicked
    ActivateRug(String),
    OpenCollection(String),
    OpenCollectionRug { collection: String, rug: String },
    GoHome,
    GoBack,
    NextImage,
    PrevImage,
    SelectImage(usize),
    ToggleZoom,
    /// Zoom origin in percent of the image size
    ZoomMoved(f32, f32),
    ZoomLeft,
    ShowContact,
    HideContact,
    ToggleContactOptions,
    /// Hand a deep link or tel: link to the host environment
    OpenLink(String),
    LinkOpened(Result<(), platform::LinkError>),
    ImageLoaded(String, Result<LoadedImage, MediaError>),
}

impl RugCatalog {
    fn new(config: AppConfig, catalog: Catalog, fetcher: Fetcher) -> (Self, Task<Message>) {
        let images = ImageStore::new(config.images.placeholder_url.clone());
        let nav = NavigationState::new(catalog.default_category());

        let mut app = RugCatalog {
            catalog,
            config,
            nav,
            images,
            fetcher,
            zoom_view: None,
        };
        let task = app.request_visible_images();

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectCategory(id) => {
                let target = self
                    .catalog
                    .size_category(&id)
                    .and_then(|c| c.collection.clone());
                self.nav.select_size_category(id, target.as_deref());
            }
            Message::ActivateRug(id) => {
                if let Some(rug) = self.catalog.rug(&id) {
                    let (linked, len) = (rug.collection.clone(), rug.images.len());
                    self.nav.activate_item(&id, linked.as_deref(), len);
                }
            }
            Message::OpenCollection(key) => self.nav.open_collection(key),
            Message::OpenCollectionRug { collection, rug } => {
                let selection = Selection::CollectionRug { collection, rug };
                let len = self.catalog.gallery_len(&selection);
                self.nav.open_item(selection, len);
            }
            Message::GoHome => self.nav.go_home(),
            Message::GoBack => self.nav.go_back(),
            Message::NextImage => self.nav.next_image(),
            Message::PrevImage => self.nav.prev_image(),
            Message::SelectImage(index) => self.nav.select_image(index),
            Message::ToggleZoom => self.nav.toggle_zoom(),
            Message::ZoomMoved(x, y) => self.nav.move_zoom(x, y),
            Message::ZoomLeft => self.nav.leave_zoom(),
            Message::ShowContact => self.nav.show_contact(),
            Message::HideContact => self.nav.hide_contact(),
            Message::ToggleContactOptions => self.nav.toggle_contact_options(),
            Message::OpenLink(url) => {
                tracing::info!(%url, "opening contact link");
                return Task::perform(platform::open_link(url), Message::LinkOpened);
            }
            Message::LinkOpened(result) => {
                if let Err(err) = result {
                    tracing::warn!(%err, "could not open link");
                }
                return Task::none();
            }
            Message::ImageLoaded(url, result) => {
                if let Some(placeholder) = self.images.finish(url, result) {
                    self.refresh_zoom();
                    return self.fetch(vec![placeholder]);
                }
                self.refresh_zoom();
                return Task::none();
            }
        }

        self.refresh_zoom();
        self.request_visible_images()
    }

    /// Start fetches for every image the current screen shows
    fn request_visible_images(&mut self) -> Task<Message> {
        let catalog = &self.catalog;
        let urls: Vec<&str> = match self.nav.mode() {
            ViewMode::Home => catalog
                .rugs_in_category(self.nav.active_category())
                .filter_map(|r| r.images.first())
                .map(String::as_str)
                .collect(),
            ViewMode::Collection => self
                .nav
                .collection()
                .map(|key| catalog.sections(key))
                .unwrap_or_default()
                .into_iter()
                .flat_map(|c| c.items.iter())
                .filter_map(|r| r.images.first())
                .map(String::as_str)
                .collect(),
            ViewMode::Detail => self
                .nav
                .selection()
                .and_then(|s| catalog.details(s))
                .map(|d| d.images.iter().map(String::as_str).collect::<Vec<_>>())
                .unwrap_or_default(),
        };

        let started = self.images.request(urls);
        self.fetch(started)
    }

    fn fetch(&self, urls: Vec<String>) -> Task<Message> {
        if urls.is_empty() {
            return Task::none();
        }
        tracing::debug!(count = urls.len(), "fetching images");
        Task::batch(urls.into_iter().map(|url| {
            let fetcher = self.fetcher.clone();
            Task::perform(fetcher.load(url.clone()), move |result| {
                Message::ImageLoaded(url.clone(), result)
            })
        }))
    }

    /// Rebuild the zoom crop when the snapped zoom origin or the image on screen changed
    fn refresh_zoom(&mut self) {
        let zoom = media::zoom::snapped(self.nav.zoom());
        let current = self.current_image_url().map(str::to_string);

        let (Some(url), true) = (current, zoom.enabled) else {
            self.zoom_view = None;
            return;
        };
        if matches!(&self.zoom_view, Some((u, z, _)) if *u == url && *z == zoom) {
            return;
        }

        self.zoom_view = match self.images.resolve(&url) {
            Resolved::Ready(image) => Some((url, zoom, media::zoom::zoomed(&image.pixels, zoom))),
            _ => None,
        };
    }

    fn current_image_url(&self) -> Option<&str> {
        let details = self.catalog.details(self.nav.selection()?)?;
        details
            .images
            .get(self.nav.image_index())
            .map(String::as_str)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let ctx = ui::Context {
            catalog: &self.catalog,
            nav: &self.nav,
            images: &self.images,
            contact: &self.config.contact,
        };

        let screen = match self.nav.mode() {
            ViewMode::Home => ui::home::view(ctx),
            ViewMode::Collection => ui::collection::view(ctx),
            ViewMode::Detail => {
                ui::detail::view(ctx, self.zoom_view.as_ref().map(|(_, _, handle)| handle))
            }
        };

        if self.nav.contact().modal {
            let details = self.nav.selection().and_then(|s| self.catalog.details(s));
            let whatsapp = contact::messaging_link(&self.config.contact, details.as_ref());
            let phone = contact::phone_link(&self.config.contact);
            ui::contact::modal(screen, ui::contact::dialog(details.as_ref(), whatsapp, phone))
        } else {
            screen
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> Result<(), AppError> {
    logging::init()?;

    let config = AppConfig::load().unwrap_or_else(|err| {
        tracing::error!(%err, "ignoring settings file, using defaults");
        AppConfig::default()
    });

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::embedded()?,
    };
    let fetcher = Fetcher::new(&config.images)?;

    tracing::info!(
        categories = catalog.size_categories().len(),
        "🧶 Rug catalog ready"
    );

    iced::application("Aladdin's Ride", RugCatalog::update, RugCatalog::view)
        .theme(RugCatalog::theme)
        .centered()
        .run_with(move || RugCatalog::new(config, catalog, fetcher))?;

    Ok(())
}
