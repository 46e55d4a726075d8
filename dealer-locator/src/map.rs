use std::{
    cell::RefCell,
    path::PathBuf,
    rc::Rc,
    time::{Duration, Instant},
};

use analytics::{Analytics, Event};
use egui::Context;
use egui_extras::install_image_loaders;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use geobounds::{
    cartesian_distance, create_map_bounds, Coordinate, GeoBoundary, LatLngBounds,
};

use crate::{
    data::{DealerProvider, Geocoder},
    plugins,
    state::{SelectionState, ViewState},
    theme::Theme,
    types::{Dealer, DealerFilter},
    widgets::{
        self, DealerModal, SearchAction, WidgetDealer, WidgetDealerList, WidgetDealerSearch,
    },
    windows,
};

const DEFAULT_STARTING_LAT: f64 = 36.9596054;
const DEFAULT_STARTING_LNG: f64 = -122.0564889;

const MIN_ZOOM: f64 = 10.0;
const MAX_ZOOM: f64 = 20.0;
const DEFAULT_ZOOM: f64 = 14.0;

/// Planar distance under which the nearest dealer counts as "right here"
/// and the default zoom is used instead of fitting bounds around it.
const MIN_DEALER_DISTANCE_FOR_ADJUSTING_ZOOM: f64 = 0.02;

const UPDATE_TICK_MS: u64 = 1000;

/// Standard web-map tile edge in pixels.
const TILE_SIZE: f64 = 256.0;

/// Host-supplied configuration for the locator.
pub struct LocatorConfig {
    pub window_title: String,
    pub starting_location: Coordinate,
    pub search_placeholder: String,
    pub partner_modal_text: String,
    pub theme: Theme,
    /// Directory for the analytics event log; `None` disables recording.
    pub analytics_dir: Option<PathBuf>,
    pub filters: Vec<DealerFilter>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            window_title: "Dealer Locator".to_string(),
            starting_location: Coordinate::new(DEFAULT_STARTING_LAT, DEFAULT_STARTING_LNG),
            search_placeholder: "Find a dealer".to_string(),
            partner_modal_text: "Our partner dealers".to_string(),
            theme: Theme::default(),
            analytics_dir: None,
            filters: vec![DealerFilter::online_dealers()],
        }
    }
}

/// The dealer locator application: a search box, a filterable dealer list,
/// a tile map with dealer markers, and a detail window for the selection.
///
/// `DealerLocator` integrates the widgets, the shared selection state, and
/// the host-supplied data seams into a cohesive user interface.
pub struct DealerLocator {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    selection_state: Rc<RefCell<SelectionState>>,
    view_state: ViewState,
    dealer_widget: Option<WidgetDealer>,
    dealer_list: WidgetDealerList,
    search: WidgetDealerSearch,
    partner_modal: DealerModal,
    provider: Box<dyn DealerProvider>,
    geocoder: Box<dyn Geocoder>,
    analytics: Option<Analytics>,
    config: LocatorConfig,
    map_center: Coordinate,
    screen_size: egui::Vec2,
    last_update: Instant,
}

impl DealerLocator {
    /// Creates a new `DealerLocator`, initializing the map, the widgets,
    /// and the first dealer snapshot from the provider.
    pub fn new(
        egui_ctx: Context,
        mut config: LocatorConfig,
        mut provider: Box<dyn DealerProvider>,
        geocoder: Box<dyn Geocoder>,
    ) -> Self {
        install_image_loaders(&egui_ctx);
        let mut initial_map_memory = MapMemory::default();
        initial_map_memory.set_zoom(DEFAULT_ZOOM).unwrap();

        let analytics = config.analytics_dir.as_deref().and_then(|log_dir| {
            match Analytics::new(log_dir, "Dealer Locator") {
                Ok(analytics) => Some(analytics),
                Err(e) => {
                    eprintln!("Analytics disabled: {}", e);
                    None
                }
            }
        });

        let dealers = provider.get_dealers().unwrap_or_default();
        let filters = std::mem::take(&mut config.filters);
        let partner_modal = DealerModal::new(config.partner_modal_text.clone());
        let map_center = config.starting_location;

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: initial_map_memory,
            selection_state: Rc::new(RefCell::new(SelectionState::new())),
            view_state: ViewState::new(dealers, filters),
            dealer_widget: None,
            dealer_list: WidgetDealerList::new(),
            search: WidgetDealerSearch::new(),
            partner_modal,
            provider,
            geocoder,
            analytics,
            config,
            map_center,
            screen_size: egui::vec2(1280.0, 720.0),
            last_update: Instant::now(),
        }
    }

    /// Focuses a newly selected dealer: recreates its detail window,
    /// scrolls the list back to the top, and pans to it at the current
    /// zoom clamped to the map's zoom range.
    fn on_dealer_selected(&mut self, dealer: &Dealer) {
        self.selection_state.borrow_mut().dealer = Some(dealer.clone());
        self.dealer_widget = Some(WidgetDealer::new(dealer.clone()));
        self.dealer_list.scroll_to_top();

        let zoom = self.map_memory.zoom().clamp(MIN_ZOOM, MAX_ZOOM);
        self.goto_map_location(dealer.location, Some(zoom));
        self.record_event(Event::DealerSelected, &dealer.name);
    }

    /// Pans to a map location. With an explicit zoom the map goes straight
    /// there; without one the zoom is derived from the nearest dealer so
    /// that at least one dealer stays visible around the target.
    fn goto_map_location(&mut self, coord: Coordinate, zoom: Option<f64>) {
        if let Some(zoom) = zoom {
            let _ = self.map_memory.set_zoom(zoom);
            self.map_memory
                .center_at(Position::from_lat_lon(coord.lat, coord.lng));
            self.map_center = coord;
            return;
        }

        let nearest = match nearest_dealer(&self.view_state.dealers, coord) {
            Some(nearest) => nearest.clone(),
            None => return self.goto_map_location(coord, Some(DEFAULT_ZOOM)),
        };

        if cartesian_distance(nearest.location, coord) < MIN_DEALER_DISTANCE_FOR_ADJUSTING_ZOOM {
            return self.goto_map_location(coord, Some(DEFAULT_ZOOM));
        }

        let bounds = create_map_bounds(coord, nearest.location);
        self.fit_bounds(coord, &bounds);
    }

    /// Fits the viewport to the bounds. A partial rectangle (the target on
    /// one of the center's axes) falls back to the default zoom.
    fn fit_bounds(&mut self, coord: Coordinate, bounds: &LatLngBounds) {
        match (bounds.center(), bounds.span()) {
            (Some(center), Some((lat_span, lng_span))) => {
                let zoom = zoom_to_fit(lat_span, lng_span, self.screen_size);
                self.goto_map_location(center, Some(zoom));
            }
            _ => self.goto_map_location(coord, Some(DEFAULT_ZOOM)),
        }
    }

    /// Geocodes the typed query and pans to the first hit.
    fn goto_search_location(&mut self, query: &str) {
        self.record_event(Event::SearchSubmitted, query);
        if let Some(place) = self.geocoder.find_place(query) {
            self.goto_map_location(place.location, None);
        }
    }

    fn record_event(&self, event: Event, label: &str) {
        if let Some(analytics) = &self.analytics {
            if let Err(e) = analytics.record(event, label, true) {
                eprintln!("Failed to record {} event: {}", event.as_str(), e);
            }
        }
    }
}

impl eframe::App for DealerLocator {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let elapsed = self.last_update.elapsed();
        if elapsed >= Duration::from_millis(UPDATE_TICK_MS) {
            self.view_state.update_dealers(&mut *self.provider);
            self.last_update = Instant::now();
        }

        ctx.request_repaint_after(Duration::from_millis(UPDATE_TICK_MS));

        self.screen_size = ctx.screen_rect().size();

        // walkers only reports the center while the map is detached from
        // its default position; keep the last known center otherwise.
        if let Some(position) = self.map_memory.detached() {
            self.map_center = Coordinate::new(position.lat(), position.lon());
        }
        let map_boundary =
            viewport_boundary(self.map_center, self.map_memory.zoom(), self.screen_size);

        let visible_dealers = self.view_state.visible_dealers();

        egui::SidePanel::left("dealer_list_panel")
            .exact_width(self.config.theme.list_panel_width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(11.0);

                let action =
                    self.search
                        .ui(ui, &mut *self.geocoder, &self.config.search_placeholder);
                match action {
                    Some(SearchAction::GoTo(place)) => {
                        self.goto_map_location(place.location, None)
                    }
                    Some(SearchAction::Search(query)) => self.goto_search_location(&query),
                    None => {}
                }

                widgets::show_dealer_filters(ui, &mut self.view_state.filters);

                ui.separator();

                let clicked = self.dealer_list.ui(
                    ui,
                    &visible_dealers,
                    self.map_center,
                    Some(&map_boundary),
                    &self.selection_state.borrow(),
                    &self.config.theme,
                );
                if let Some(dealer) = clicked {
                    self.on_dealer_selected(&dealer);
                }
            });

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let starting_position = Position::from_lat_lon(
                    self.config.starting_location.lat,
                    self.config.starting_location.lng,
                );

                let tiles = self.tiles.as_mut();

                let dealer_plugin = plugins::Dealers::new(
                    &visible_dealers,
                    self.selection_state.clone(),
                    &self.config.theme,
                );

                let map = Map::new(Some(tiles), &mut self.map_memory, starting_position)
                    .with_plugin(dealer_plugin);

                ui.add(map);

                let _link_response = egui::Area::new("find_dealers_link".into())
                    .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
                    .show(ctx, |ui| {
                        let button_size = [150.0, 40.0];

                        if ui
                            .add_sized(
                                button_size,
                                egui::Button::new("Find a dealer").rounding(10.0),
                            )
                            .clicked()
                        {
                            self.partner_modal.toggle();
                        }
                    });

                windows::zoom(ui, &mut self.map_memory);
            });

        // Detail-window lifecycle for the current selection: the marker
        // plugin and the list both mutate the shared selection state, so
        // the widget is reconciled against it every frame.
        let selected_dealer = self.selection_state.borrow().dealer.clone();
        if let Some(dealer) = selected_dealer {
            if let Some(widget) = &mut self.dealer_widget {
                if widget.selected_dealer == dealer {
                    if !widget.show(ctx, self.analytics.as_ref()) {
                        self.selection_state.borrow_mut().dealer = None;
                        self.dealer_widget = None;
                    }
                } else {
                    self.on_dealer_selected(&dealer);
                }
            } else {
                self.on_dealer_selected(&dealer);
            }
        } else {
            self.dealer_widget = None;
        }

        self.partner_modal.show(ctx, &self.view_state.dealers);
    }
}

/// The dealer closest to `coord` in planar degree space.
fn nearest_dealer(dealers: &[Dealer], coord: Coordinate) -> Option<&Dealer> {
    dealers.iter().min_by(|a, b| {
        cartesian_distance(a.location, coord).total_cmp(&cartesian_distance(b.location, coord))
    })
}

/// Rough estimate of the lat/lng rectangle currently visible, from the map
/// center, zoom, and viewport size in pixels.
fn viewport_boundary(center: Coordinate, zoom: f64, viewport: egui::Vec2) -> GeoBoundary {
    let degrees_per_pixel = 360.0 / (TILE_SIZE * 2f64.powf(zoom));
    let lat_span = viewport.y as f64 * degrees_per_pixel;
    let lng_span = viewport.x as f64 * degrees_per_pixel;

    GeoBoundary::new(
        Coordinate::new(center.lat + lat_span / 2.0, center.lng + lng_span / 2.0),
        Coordinate::new(center.lat - lat_span / 2.0, center.lng - lng_span / 2.0),
    )
}

/// Zoom level at which both spans fit the viewport, from the same tile
/// arithmetic as [`viewport_boundary`].
fn zoom_to_fit(lat_span: f64, lng_span: f64, viewport: egui::Vec2) -> f64 {
    let lat_zoom = (viewport.y as f64 * 360.0 / (TILE_SIZE * lat_span.abs())).log2();
    let lng_zoom = (viewport.x as f64 * 360.0 / (TILE_SIZE * lng_span.abs())).log2();

    lat_zoom.min(lng_zoom).clamp(0.0, MAX_ZOOM)
}
