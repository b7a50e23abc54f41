//! Application state and input handling.

use crate::booking::BookingState;
use crate::form::{ApartmentOption, BookingForm, FormField};
use crate::input::Input;
use crate::theme::Theme;
use crate::worker::{ApiRequest, ApiResponse, ApiWorker, Slot};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use propout_api::ApiError;
use propout_core::{BookingReceipt, Property, PropertyFilters};
use tracing::debug;

pub const TICK_RATE_MS: u64 = 250;

/// Idle ticks before edited filters are sent to the backend (500 ms), so a
/// burst of keystrokes turns into one request.
pub const SEARCH_DEBOUNCE_TICKS: u64 = 2;

/// How long a notice stays in the status bar (4 s).
const NOTICE_TICKS: u64 = 16;

const BOOKING_FALLBACK_MESSAGE: &str =
    "Booking request sent! We'll contact you within 24 hours to confirm.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Properties,
    Detail,
}

/// Fetch lifecycle of a server-backed view.
#[derive(Debug, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed,
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Transient status-bar message, the toast of this UI.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    ticks_left: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFocus {
    #[default]
    List,
    Filters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Search,
    MinPrice,
    MaxPrice,
    Guests,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            Self::Search => Self::MinPrice,
            Self::MinPrice => Self::MaxPrice,
            Self::MaxPrice => Self::Guests,
            Self::Guests => Self::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Search => Self::Guests,
            Self::MinPrice => Self::Search,
            Self::MaxPrice => Self::MinPrice,
            Self::Guests => Self::MaxPrice,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::MinPrice => "Min Price",
            Self::MaxPrice => "Max Price",
            Self::Guests => "Min Guests",
        }
    }
}

/// Filter sidebar contents as typed. Numbers that do not parse are treated
/// as unset rather than rejected.
#[derive(Debug, Default)]
pub struct FilterDraft {
    pub search: Input,
    pub min_price: Input,
    pub max_price: Input,
    pub guests: Input,
    pub focus: FilterField,
}

impl FilterDraft {
    pub fn focused_input_mut(&mut self) -> &mut Input {
        match self.focus {
            FilterField::Search => &mut self.search,
            FilterField::MinPrice => &mut self.min_price,
            FilterField::MaxPrice => &mut self.max_price,
            FilterField::Guests => &mut self.guests,
        }
    }

    pub fn to_filters(&self) -> PropertyFilters {
        PropertyFilters {
            search: match self.search.value().trim() {
                "" => None,
                text => Some(text.to_string()),
            },
            min_price: self.min_price.value().trim().parse().ok(),
            max_price: self.max_price.value().trim().parse().ok(),
            guests: self.guests.value().trim().parse().ok(),
        }
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.min_price.clear();
        self.max_price.clear();
        self.guests.clear();
    }
}

pub struct App {
    pub page: Page,
    pub theme: Theme,
    pub show_help: bool,

    pub booking: BookingState,
    pub form: BookingForm,

    // Home
    pub featured: LoadState<Vec<Property>>,
    pub featured_selected: usize,

    // Properties
    pub catalog: LoadState<Vec<Property>>,
    pub catalog_selected: usize,
    pub catalog_focus: CatalogFocus,
    pub filters: FilterDraft,
    filters_dirty: bool,
    filter_idle_ticks: u64,
    last_issued: Option<PropertyFilters>,
    catalog_seq: u64,
    featured_seq: u64,

    // Detail
    pub detail: LoadState<Property>,
    detail_id: Option<String>,

    pub notice: Option<Notice>,

    worker: ApiWorker,
}

impl App {
    pub fn new(worker: ApiWorker) -> Self {
        let mut app = Self {
            page: Page::default(),
            theme: Theme::default(),
            show_help: false,
            booking: BookingState::default(),
            form: BookingForm::default(),
            featured: LoadState::Idle,
            featured_selected: 0,
            catalog: LoadState::Idle,
            catalog_selected: 0,
            catalog_focus: CatalogFocus::default(),
            filters: FilterDraft::default(),
            filters_dirty: false,
            filter_idle_ticks: 0,
            last_issued: None,
            catalog_seq: 0,
            featured_seq: 0,
            detail: LoadState::Idle,
            detail_id: None,
            notice: None,
            worker,
        };
        app.request_featured();
        app
    }

    fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            ticks_left: NOTICE_TICKS,
        });
    }

    // -------------------------------------------------------------- fetches

    fn request_featured(&mut self) {
        self.featured_seq += 1;
        self.featured = LoadState::Loading;
        self.worker.send(ApiRequest::FetchProperties {
            seq: self.featured_seq,
            slot: Slot::Featured,
            filters: PropertyFilters::default(),
        });
    }

    /// Issue a catalog fetch for the current filter draft. Skipped when the
    /// parameter tuple matches the list already on screen.
    fn refresh_catalog(&mut self) {
        self.filters_dirty = false;
        self.filter_idle_ticks = 0;
        let filters = self.filters.to_filters();
        if self.last_issued.as_ref() == Some(&filters) && self.catalog.ready().is_some() {
            return;
        }
        self.catalog_seq += 1;
        self.last_issued = Some(filters.clone());
        self.catalog = LoadState::Loading;
        self.worker.send(ApiRequest::FetchProperties {
            seq: self.catalog_seq,
            slot: Slot::Catalog,
            filters,
        });
    }

    fn enter_properties(&mut self) {
        self.page = Page::Properties;
        if matches!(self.catalog, LoadState::Idle) {
            self.refresh_catalog();
        }
    }

    fn open_detail(&mut self, id: String) {
        self.page = Page::Detail;
        self.detail = LoadState::Loading;
        self.detail_id = Some(id.clone());
        self.worker.send(ApiRequest::FetchProperty { id });
    }

    /// Mark the filter draft as edited; the fetch happens once the input has
    /// been idle for [`SEARCH_DEBOUNCE_TICKS`].
    fn filters_edited(&mut self) {
        self.filters_dirty = true;
        self.filter_idle_ticks = 0;
    }

    // ---------------------------------------------------------------- ticks

    pub fn on_tick(&mut self) {
        self.poll_responses();

        if let Some(notice) = &mut self.notice {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
        }

        if self.filters_dirty {
            self.filter_idle_ticks += 1;
            if self.filter_idle_ticks >= SEARCH_DEBOUNCE_TICKS {
                self.refresh_catalog();
            }
        }
    }

    fn poll_responses(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            match response {
                ApiResponse::Properties { seq, slot, result } => {
                    self.on_properties(seq, slot, result)
                }
                ApiResponse::Property { id, result } => self.on_property(id, result),
                ApiResponse::Booking { result } => self.on_booking_result(result),
            }
        }
    }

    fn on_properties(&mut self, seq: u64, slot: Slot, result: Result<Vec<Property>, ApiError>) {
        let current = match slot {
            Slot::Featured => self.featured_seq,
            Slot::Catalog => self.catalog_seq,
        };
        if seq != current {
            // A newer fetch for this view is already out; this response lost.
            debug!(seq, current, ?slot, "dropping stale property list");
            return;
        }
        let state = match result {
            Ok(properties) => LoadState::Ready(properties),
            Err(err) => {
                debug!(%err, ?slot, "property list fetch failed");
                LoadState::Failed
            }
        };
        match slot {
            Slot::Featured => {
                self.featured = state;
                self.featured_selected = 0;
            }
            Slot::Catalog => {
                self.catalog = state;
                self.catalog_selected = 0;
            }
        }
        self.sync_form_options();
    }

    fn on_property(&mut self, id: String, result: Result<Property, ApiError>) {
        if self.detail_id.as_deref() != Some(id.as_str()) {
            debug!(%id, "dropping property response for a view no longer shown");
            return;
        }
        self.detail = match result {
            Ok(property) => LoadState::Ready(property),
            Err(err) => {
                debug!(%err, %id, "property fetch failed");
                LoadState::Failed
            }
        };
    }

    fn on_booking_result(&mut self, result: Result<BookingReceipt, ApiError>) {
        self.form.submitting = false;
        match result {
            Ok(receipt) => {
                let message = receipt
                    .message
                    .unwrap_or_else(|| BOOKING_FALLBACK_MESSAGE.to_string());
                self.notify(NoticeKind::Success, message);
                self.form.reset();
                self.booking.close();
            }
            Err(err) => {
                // Fields are kept so the user can correct and retry.
                self.notify(NoticeKind::Error, err.user_message());
            }
        }
    }

    /// Offer every loaded property as a booking target, preferring the
    /// filtered catalog over the home strip.
    fn sync_form_options(&mut self) {
        let source = self
            .catalog
            .ready()
            .or_else(|| self.featured.ready());
        if let Some(properties) = source {
            let options = properties
                .iter()
                .map(|property| ApartmentOption {
                    id: property.id.clone(),
                    title: property.title.clone(),
                })
                .collect();
            self.form.set_options(options);
        }
    }

    // -------------------------------------------------------------- booking

    fn open_booking_dialog(&mut self, property: Option<&Property>) {
        self.booking.open(property.map(|p| p.id.as_str()));
        if let Some(property) = property {
            self.form.select_apartment(&property.id, &property.title);
        }
    }

    fn book_property(&mut self, property: &Property) {
        if !property.status.is_bookable() {
            self.notify(
                NoticeKind::Info,
                format!("{} is currently unavailable.", property.title),
            );
            return;
        }
        let property = property.clone();
        self.open_booking_dialog(Some(&property));
    }

    fn submit_booking(&mut self) {
        if self.form.submitting {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.form.submitting = true;
                self.worker.send(ApiRequest::SubmitBooking { request });
            }
            Err(message) => {
                // Invalid form: nothing is sent.
                self.notify(NoticeKind::Error, message);
            }
        }
    }

    // ----------------------------------------------------------------- keys

    /// Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.show_help {
            self.show_help = false;
            return false;
        }

        if self.booking.is_open {
            self.handle_dialog_key(key);
            return false;
        }

        if key.code == KeyCode::Char('?') || key.code == KeyCode::F(1) {
            self.show_help = true;
            return false;
        }

        match self.page {
            Page::Home => self.handle_home_key(key),
            Page::Properties => self.handle_properties_key(key),
            Page::Detail => self.handle_detail_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('2') | KeyCode::Char('p') => self.enter_properties(),
            KeyCode::Char('b') => self.open_booking_dialog(None),
            KeyCode::Char('t') => self.theme = self.theme.next(),
            KeyCode::Left | KeyCode::Char('h') => self.cycle_featured(-1),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_featured(1),
            KeyCode::Enter => {
                if let Some(property) = self.selected_featured() {
                    let id = property.id.clone();
                    self.open_detail(id);
                } else {
                    self.enter_properties();
                }
            }
            _ => {}
        }
        false
    }

    fn handle_properties_key(&mut self, key: KeyEvent) -> bool {
        match self.catalog_focus {
            CatalogFocus::Filters => self.handle_filter_key(key),
            CatalogFocus::List => return self.handle_list_key(key),
        }
        false
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => self.catalog_focus = CatalogFocus::List,
            KeyCode::Up => self.filters.focus = self.filters.focus.prev(),
            KeyCode::Down => self.filters.focus = self.filters.focus.next(),
            KeyCode::Enter => self.refresh_catalog(),
            KeyCode::Char(c) => {
                self.filters.focused_input_mut().insert(c);
                self.filters_edited();
            }
            KeyCode::Backspace => {
                self.filters.focused_input_mut().backspace();
                self.filters_edited();
            }
            KeyCode::Delete => {
                self.filters.focused_input_mut().delete();
                self.filters_edited();
            }
            KeyCode::Left => self.filters.focused_input_mut().left(),
            KeyCode::Right => self.filters.focused_input_mut().right(),
            KeyCode::Home => self.filters.focused_input_mut().home(),
            KeyCode::End => self.filters.focused_input_mut().end(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Char('1') => self.page = Page::Home,
            KeyCode::Tab | KeyCode::Char('/') | KeyCode::Char('f') => {
                self.catalog_focus = CatalogFocus::Filters
            }
            KeyCode::Char('t') => self.theme = self.theme.next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_catalog(-1),
            KeyCode::Down | KeyCode::Char('j') => self.select_catalog(1),
            KeyCode::Char('x') => {
                self.filters.clear();
                self.filters_edited();
            }
            KeyCode::Enter => {
                if let Some(property) = self.selected_catalog() {
                    let id = property.id.clone();
                    self.open_detail(id);
                }
            }
            KeyCode::Char('b') => {
                if let Some(property) = self.selected_catalog().cloned() {
                    self.book_property(&property);
                } else {
                    self.open_booking_dialog(None);
                }
            }
            _ => {}
        }
        false
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.page = Page::Properties;
                self.detail = LoadState::Idle;
                self.detail_id = None;
            }
            KeyCode::Char('1') => self.page = Page::Home,
            KeyCode::Char('2') => self.enter_properties(),
            KeyCode::Char('t') => self.theme = self.theme.next(),
            KeyCode::Char('b') => {
                if let Some(property) = self.detail.ready().cloned() {
                    self.book_property(&property);
                }
            }
            _ => {}
        }
        false
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.booking.close(),
            KeyCode::Enter => self.submit_booking(),
            KeyCode::Tab | KeyCode::Down => self.form.focus = self.form.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus = self.form.focus.prev(),
            KeyCode::Left => match self.form.focus {
                FormField::Apartment => self.form.cycle_apartment(-1),
                FormField::Guests => self.form.cycle_guests(-1),
                _ => {
                    if let Some(input) = self.form.focused_input_mut() {
                        input.left();
                    }
                }
            },
            KeyCode::Right => match self.form.focus {
                FormField::Apartment => self.form.cycle_apartment(1),
                FormField::Guests => self.form.cycle_guests(1),
                _ => {
                    if let Some(input) = self.form.focused_input_mut() {
                        input.right();
                    }
                }
            },
            KeyCode::Char(c) => match self.form.focus {
                FormField::Guests => self.form.set_guests_digit(c),
                FormField::Apartment => {
                    if c == ' ' {
                        self.form.cycle_apartment(1);
                    }
                }
                _ => {
                    if let Some(input) = self.form.focused_input_mut() {
                        input.insert(c);
                    }
                }
            },
            KeyCode::Backspace => {
                if let Some(input) = self.form.focused_input_mut() {
                    input.backspace();
                }
            }
            KeyCode::Delete => {
                if let Some(input) = self.form.focused_input_mut() {
                    input.delete();
                }
            }
            KeyCode::Home => {
                if let Some(input) = self.form.focused_input_mut() {
                    input.home();
                }
            }
            KeyCode::End => {
                if let Some(input) = self.form.focused_input_mut() {
                    input.end();
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => match self.page {
                Page::Properties => self.select_catalog(-1),
                Page::Home => self.cycle_featured(-1),
                Page::Detail => {}
            },
            MouseEventKind::ScrollDown => match self.page {
                Page::Properties => self.select_catalog(1),
                Page::Home => self.cycle_featured(1),
                Page::Detail => {}
            },
            _ => {}
        }
    }

    // ------------------------------------------------------------ selection

    fn cycle_featured(&mut self, step: isize) {
        if let Some(properties) = self.featured.ready() {
            if properties.is_empty() {
                return;
            }
            let len = properties.len() as isize;
            self.featured_selected =
                (self.featured_selected as isize + step).rem_euclid(len) as usize;
        }
    }

    fn select_catalog(&mut self, step: isize) {
        if let Some(properties) = self.catalog.ready() {
            if properties.is_empty() {
                return;
            }
            let last = properties.len() - 1;
            self.catalog_selected = self
                .catalog_selected
                .saturating_add_signed(step)
                .min(last);
        }
    }

    pub fn selected_featured(&self) -> Option<&Property> {
        self.featured.ready()?.get(self.featured_selected)
    }

    pub fn selected_catalog(&self) -> Option<&Property> {
        self.catalog.ready()?.get(self.catalog_selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propout_core::{MediaItem, MediaKind, PropertyStatus};
    use tokio::sync::mpsc;

    fn property(id: &str, title: &str, status: PropertyStatus) -> Property {
        Property {
            id: id.to_string(),
            title: title.to_string(),
            description: "Fully furnished.".to_string(),
            address: "Maitama, Abuja".to_string(),
            price_per_night: 35_000,
            media: vec![MediaItem {
                url: "https://cdn.example/cover.jpg".to_string(),
                public_id: "props/cover".to_string(),
                kind: MediaKind::Image,
            }],
            amenities: vec!["High-Speed WiFi".to_string()],
            max_guests: 4,
            status,
        }
    }

    fn test_app() -> (
        App,
        mpsc::Receiver<ApiRequest>,
        mpsc::Sender<ApiResponse>,
    ) {
        let (worker, mut request_rx, response_tx) = ApiWorker::stub();
        let app = App::new(worker);
        // Drain the featured fetch issued at startup.
        assert!(matches!(
            request_rx.try_recv(),
            Ok(ApiRequest::FetchProperties {
                slot: Slot::Featured,
                ..
            })
        ));
        (app, request_rx, response_tx)
    }

    fn fill_form(app: &mut App) {
        app.form.full_name.set("Ada Obi");
        app.form.email.set("ada@example.com");
        app.form.phone.set("+234 907 474 3062");
        app.form.select_apartment("65fa12", "Executive 2-Bedroom");
        app.form.check_in.set("2026-02-14");
        app.form.check_out.set("2026-02-16");
        app.form.guests = "3".to_string();
    }

    #[test]
    fn test_invalid_submission_sends_nothing() {
        let (mut app, mut request_rx, _response_tx) = test_app();
        app.booking.open(None);
        fill_form(&mut app);
        app.form.email.clear();

        app.submit_booking();

        assert!(request_rx.try_recv().is_err());
        assert!(!app.form.submitting);
        let notice = app.notice.expect("validation notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Please fill in all required fields.");
    }

    #[test]
    fn test_valid_submission_sends_numeric_guest_count() {
        let (mut app, mut request_rx, _response_tx) = test_app();
        app.booking.open(Some("65fa12"));
        fill_form(&mut app);

        app.submit_booking();

        assert!(app.form.submitting);
        let request = match request_rx.try_recv() {
            Ok(ApiRequest::SubmitBooking { request }) => request,
            other => panic!("expected booking submission, got {other:?}"),
        };
        assert_eq!(request.number_of_guests, 3);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["numberOfGuests"], serde_json::json!(3));
        assert_eq!(value["preferredApartment"], "65fa12");

        // Submit is disabled while in flight.
        app.submit_booking();
        assert!(request_rx.try_recv().is_err());
    }

    #[test]
    fn test_successful_submission_resets_form_and_closes_dialog() {
        let (mut app, mut request_rx, response_tx) = test_app();
        app.booking.open(Some("65fa12"));
        fill_form(&mut app);
        app.submit_booking();
        let _ = request_rx.try_recv();

        response_tx
            .try_send(ApiResponse::Booking {
                result: Ok(propout_core::BookingReceipt {
                    success: true,
                    message: None,
                }),
            })
            .unwrap();
        app.on_tick();

        assert!(!app.booking.is_open);
        assert!(app.booking.selected_property.is_none());
        assert!(app.form.full_name.is_empty());
        assert!(app.form.guests.is_empty());
        assert!(!app.form.submitting);
        let notice = app.notice.expect("success notice");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, BOOKING_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_failed_submission_keeps_fields_and_surfaces_server_message() {
        let (mut app, mut request_rx, response_tx) = test_app();
        app.booking.open(Some("65fa12"));
        fill_form(&mut app);
        app.submit_booking();
        let _ = request_rx.try_recv();

        response_tx
            .try_send(ApiResponse::Booking {
                result: Err(ApiError::Status {
                    status: 400,
                    message: Some("Dates unavailable".to_string()),
                }),
            })
            .unwrap();
        app.on_tick();

        // Retry is possible: dialog open, everything still filled in.
        assert!(app.booking.is_open);
        assert!(!app.form.submitting);
        assert_eq!(app.form.full_name.value(), "Ada Obi");
        assert_eq!(app.form.email.value(), "ada@example.com");
        assert_eq!(app.form.guests, "3");
        let notice = app.notice.expect("error notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Dates unavailable");
    }

    #[test]
    fn test_stale_catalog_response_is_dropped() {
        let (mut app, mut request_rx, response_tx) = test_app();
        app.enter_properties();
        let first_seq = match request_rx.try_recv() {
            Ok(ApiRequest::FetchProperties { seq, .. }) => seq,
            other => panic!("expected catalog fetch, got {other:?}"),
        };

        // Filters change before the first response lands.
        app.filters.search.set("lekki");
        app.refresh_catalog();
        let second_seq = match request_rx.try_recv() {
            Ok(ApiRequest::FetchProperties { seq, .. }) => seq,
            other => panic!("expected catalog fetch, got {other:?}"),
        };
        assert!(second_seq > first_seq);

        response_tx
            .try_send(ApiResponse::Properties {
                seq: first_seq,
                slot: Slot::Catalog,
                result: Ok(vec![property("old", "Old Result", PropertyStatus::Available)]),
            })
            .unwrap();
        app.on_tick();
        assert!(matches!(app.catalog, LoadState::Loading));

        response_tx
            .try_send(ApiResponse::Properties {
                seq: second_seq,
                slot: Slot::Catalog,
                result: Ok(vec![property("new", "New Result", PropertyStatus::Available)]),
            })
            .unwrap();
        app.on_tick();
        let properties = app.catalog.ready().expect("catalog loaded");
        assert_eq!(properties[0].id, "new");
    }

    #[test]
    fn test_search_edits_are_debounced() {
        let (mut app, mut request_rx, _response_tx) = test_app();
        app.enter_properties();
        let _ = request_rx.try_recv();

        app.filters.search.set("le");
        app.filters_edited();
        app.on_tick();
        assert!(request_rx.try_recv().is_err());

        app.on_tick();
        match request_rx.try_recv() {
            Ok(ApiRequest::FetchProperties { filters, .. }) => {
                assert_eq!(filters.search.as_deref(), Some("le"));
            }
            other => panic!("expected debounced fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_unchanged_filters_do_not_refetch() {
        let (mut app, mut request_rx, response_tx) = test_app();
        app.enter_properties();
        let seq = match request_rx.try_recv() {
            Ok(ApiRequest::FetchProperties { seq, .. }) => seq,
            other => panic!("expected catalog fetch, got {other:?}"),
        };
        response_tx
            .try_send(ApiResponse::Properties {
                seq,
                slot: Slot::Catalog,
                result: Ok(vec![]),
            })
            .unwrap();
        app.on_tick();

        // Same parameter tuple while results are on screen: cache hit.
        app.refresh_catalog();
        assert!(request_rx.try_recv().is_err());
    }

    #[test]
    fn test_booking_is_gated_on_availability() {
        let (mut app, _request_rx, _response_tx) = test_app();
        let booked = property("p9", "Premium Penthouse", PropertyStatus::Booked);
        app.book_property(&booked);
        assert!(!app.booking.is_open);
        let notice = app.notice.take().expect("unavailable notice");
        assert_eq!(notice.text, "Premium Penthouse is currently unavailable.");

        let open = property("p1", "Luxury Studio Suite", PropertyStatus::Available);
        app.book_property(&open);
        assert!(app.booking.is_open);
        assert_eq!(app.booking.selected_property.as_deref(), Some("p1"));
        assert_eq!(app.form.apartment_id, "p1");
        assert_eq!(app.form.apartment_title, "Luxury Studio Suite");
    }

    #[test]
    fn test_loaded_properties_become_apartment_options() {
        let (mut app, _request_rx, response_tx) = test_app();
        response_tx
            .try_send(ApiResponse::Properties {
                seq: 1,
                slot: Slot::Featured,
                result: Ok(vec![
                    property("p1", "Luxury Studio Suite", PropertyStatus::Available),
                    property("p2", "Executive 2-Bedroom", PropertyStatus::Booked),
                ]),
            })
            .unwrap();
        app.on_tick();

        let options = app.form.options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].id, "p1");
        assert_eq!(options[1].title, "Executive 2-Bedroom");
    }

    #[test]
    fn test_detail_response_for_other_property_is_ignored() {
        let (mut app, mut request_rx, response_tx) = test_app();
        app.open_detail("p2".to_string());
        let _ = request_rx.try_recv();

        response_tx
            .try_send(ApiResponse::Property {
                id: "p1".to_string(),
                result: Ok(property("p1", "Luxury Studio Suite", PropertyStatus::Available)),
            })
            .unwrap();
        app.on_tick();
        assert!(matches!(app.detail, LoadState::Loading));

        response_tx
            .try_send(ApiResponse::Property {
                id: "p2".to_string(),
                result: Err(ApiError::Status {
                    status: 404,
                    message: Some("Property not found".to_string()),
                }),
            })
            .unwrap();
        app.on_tick();
        assert!(matches!(app.detail, LoadState::Failed));
    }
}
