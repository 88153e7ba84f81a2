//! View navigation state
//!
//! Maps user actions to the next navigation state. Every transition is
//! total: an action that does not apply to the current view leaves the
//! state untouched instead of failing.

use super::data::Selection;

/// Which of the three screens is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Home,
    Collection,
    Detail,
}

/// Scale applied to the main image while zoomed
pub const ZOOM_SCALE: f32 = 1.5;

/// Hover zoom on the detail image.
/// Position is the zoom origin in percent of the image size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    pub enabled: bool,
    pub x: f32,
    pub y: f32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            enabled: false,
            x: 50.0,
            y: 50.0,
        }
    }
}

/// Visibility of the contact surfaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactFlags {
    /// Quote modal for the selected rug (or a general enquiry)
    pub modal: bool,
    /// Contact menu in the header
    pub options: bool,
}

/// Client-held record of what is on screen.
///
/// Fields are private so the transitions below are the only way to change
/// them: a selection exists exactly when the mode is `Detail`, and the image
/// index always stays below the gallery length.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    mode: ViewMode,
    collection: Option<String>,
    selection: Option<Selection>,
    image_index: usize,
    gallery_len: usize,
    zoom: Zoom,
    contact: ContactFlags,
    active_category: String,
}

impl NavigationState {
    /// Start on the home view with `category` highlighted
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            mode: ViewMode::Home,
            collection: None,
            selection: None,
            image_index: 0,
            gallery_len: 0,
            zoom: Zoom::default(),
            contact: ContactFlags::default(),
            active_category: category.into(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Collection being viewed, or the one the detail view returns to
    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn contact(&self) -> ContactFlags {
        self.contact
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    // ========== Screen transitions ==========

    pub fn go_home(&mut self) {
        self.mode = ViewMode::Home;
        self.collection = None;
        self.selection = None;
        self.reset_gallery(0);
    }

    pub fn open_collection(&mut self, key: impl Into<String>) {
        self.mode = ViewMode::Collection;
        self.collection = Some(key.into());
        self.selection = None;
        self.reset_gallery(0);
    }

    /// Show the detail view for `selection`, whose gallery holds `gallery_len` images.
    ///
    /// A collection rug keeps the collection currently on screen as its
    /// return target (this may be a combined view); if none is on screen
    /// the owning collection is used. A home rug has no return collection.
    pub fn open_item(&mut self, selection: Selection, gallery_len: usize) {
        self.collection = match selection.origin_collection() {
            Some(owner) => self.collection.take().or_else(|| Some(owner.to_string())),
            None => None,
        };
        self.mode = ViewMode::Detail;
        self.selection = Some(selection);
        self.reset_gallery(gallery_len);
    }

    /// Home-card click: linked rugs open their collection, others open the detail view
    pub fn activate_item(&mut self, rug_id: &str, linked_collection: Option<&str>, gallery_len: usize) {
        match linked_collection {
            Some(key) => self.open_collection(key),
            None => self.open_item(Selection::Rug(rug_id.to_string()), gallery_len),
        }
    }

    /// Highlight a size tab and open the collection it maps to
    pub fn select_size_category(&mut self, id: impl Into<String>, collection: Option<&str>) {
        self.active_category = id.into();
        if let Some(key) = collection {
            self.open_collection(key);
        }
    }

    pub fn go_back(&mut self) {
        match self.mode {
            ViewMode::Detail => {
                let from_collection = self
                    .selection
                    .as_ref()
                    .and_then(Selection::origin_collection)
                    .is_some();
                self.selection = None;
                if from_collection && self.collection.is_some() {
                    self.mode = ViewMode::Collection;
                } else {
                    self.mode = ViewMode::Home;
                    self.collection = None;
                }
                self.reset_gallery(0);
            }
            ViewMode::Collection => self.go_home(),
            ViewMode::Home => {}
        }
    }

    // ========== Gallery ==========

    pub fn next_image(&mut self) {
        if self.gallery_len <= 1 {
            return;
        }
        self.image_index = (self.image_index + 1) % self.gallery_len;
    }

    pub fn prev_image(&mut self) {
        if self.gallery_len <= 1 {
            return;
        }
        self.image_index = (self.image_index + self.gallery_len - 1) % self.gallery_len;
    }

    /// Jump to a thumbnail; out-of-range indexes are ignored
    pub fn select_image(&mut self, index: usize) {
        if index < self.gallery_len {
            self.image_index = index;
        }
    }

    fn reset_gallery(&mut self, gallery_len: usize) {
        self.gallery_len = gallery_len;
        self.image_index = 0;
        self.zoom = Zoom::default();
        self.contact.modal = false;
    }

    // ========== Zoom ==========

    pub fn toggle_zoom(&mut self) {
        if self.mode == ViewMode::Detail {
            self.zoom.enabled = !self.zoom.enabled;
        }
    }

    /// Move the zoom origin; ignored unless zoomed
    pub fn move_zoom(&mut self, x: f32, y: f32) {
        if !self.zoom.enabled {
            return;
        }
        self.zoom.x = x.clamp(0.0, 100.0);
        self.zoom.y = y.clamp(0.0, 100.0);
    }

    /// Pointer left the image
    pub fn leave_zoom(&mut self) {
        self.zoom.enabled = false;
    }

    // ========== Contact ==========

    pub fn show_contact(&mut self) {
        self.contact.modal = true;
        self.contact.options = false;
    }

    pub fn hide_contact(&mut self) {
        self.contact.modal = false;
    }

    pub fn toggle_contact_options(&mut self) {
        self.contact.options = !self.contact.options;
    }
}
