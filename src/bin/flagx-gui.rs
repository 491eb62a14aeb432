/*!
 * GUI application for flagx-rs - country & flag browser
 *
 * A cross-platform desktop application with two screens:
 * - A searchable, sortable country list backed by the backend API
 * - A per-country detail page reached by clicking a list card
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use flagx_rs::view::{DetailState, DetailView, ListState, ListView};
use flagx_rs::{ApiError, Client, Country, CountryDetails, DisplayList, SortMode};
use flagx_rs::{format, view};
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Flag Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Flag Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(FlagxApp::new()))),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Screen {
    List,
    Detail,
}

/// Main application state
struct FlagxApp {
    client: Client,
    screen: Screen,

    // View state machines
    list: ListView,
    detail: Option<DetailView>,

    // In-flight background fetches. The detail receiver is tagged with the
    // name it was issued for; DetailView::apply drops stale arrivals.
    list_rx: Option<mpsc::Receiver<ListState>>,
    detail_rx: Option<(String, mpsc::Receiver<Result<CountryDetails, ApiError>>)>,
}

impl FlagxApp {
    fn new() -> Self {
        let mut app = Self {
            client: Client::from_env(),
            screen: Screen::List,
            list: ListView::new(),
            detail: None,
            list_rx: None,
            detail_rx: None,
        };
        app.start_list_load();
        app
    }

    fn start_list_load(&mut self) {
        self.list.begin_reload();
        let (sender, receiver) = mpsc::channel();
        self.list_rx = Some(receiver);

        let client = self.client.clone();
        thread::spawn(move || {
            let _ = sender.send(view::load_countries(&client));
        });
    }

    fn open_detail(&mut self, name: &str) {
        self.screen = Screen::Detail;
        match &mut self.detail {
            Some(detail) => detail.navigate(name),
            None => self.detail = Some(DetailView::new(name)),
        }
        self.start_detail_load(name.to_string());
    }

    fn start_detail_load(&mut self, name: String) {
        let (sender, receiver) = mpsc::channel();
        self.detail_rx = Some((name.clone(), receiver));

        let client = self.client.clone();
        thread::spawn(move || {
            let _ = sender.send(client.fetch_country_by_name(&name));
        });
    }

    fn check_fetch_results(&mut self) {
        if let Some(receiver) = &self.list_rx
            && let Ok(state) = receiver.try_recv()
        {
            self.list.finish_load(state);
            self.list_rx = None;
        }

        if let Some((for_name, receiver)) = &self.detail_rx
            && let Ok(outcome) = receiver.try_recv()
        {
            let for_name = for_name.clone();
            self.detail_rx = None;
            if let Some(detail) = &mut self.detail {
                detail.apply(&for_name, outcome);
            }
        }
    }

    fn show_list_screen(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("🌍 Flag Explorer");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match &self.list.state {
                    ListState::Ready(_) => {
                        ui.colored_label(egui::Color32::DARK_GREEN, "API Connected");
                    }
                    ListState::Failed(_) => {
                        ui.colored_label(egui::Color32::RED, "API Disconnected");
                    }
                    ListState::Loading => {
                        ui.spinner();
                    }
                }
            });
        });
        ui.label("Discover countries and their flags from around the world");
        ui.add_space(10.0);

        let mut reload = false;
        let mut open: Option<String> = None;

        match &self.list.state {
            ListState::Loading => {
                ui.spinner();
                ui.label("Loading countries...");
                ui.label("Connecting to backend API");
            }
            ListState::Failed(message) => {
                ui.colored_label(egui::Color32::RED, message);
                ui.add_space(10.0);
                if ui.button("🔄 Try Again").clicked() {
                    reload = true;
                }
            }
            ListState::Ready(_) => {
                ui.horizontal(|ui| {
                    ui.label("Search:");
                    ui.text_edit_singleline(&mut self.list.search)
                        .on_hover_text("Search countries...");
                    ui.label("Sort:");
                    egui::ComboBox::from_id_salt("sort_mode")
                        .selected_text(sort_label(self.list.sort))
                        .show_ui(ui, |ui| {
                            for mode in [
                                SortMode::NameAsc,
                                SortMode::NameDesc,
                                SortMode::PopulationAsc,
                                SortMode::PopulationDesc,
                                SortMode::Region,
                            ] {
                                ui.selectable_value(&mut self.list.sort, mode, sort_label(mode));
                            }
                        });
                    if ui.button("🔄 Reload").clicked() {
                        reload = true;
                    }
                });
                ui.add_space(5.0);

                // Derived fresh each frame, after the controls above mutated
                // search/sort.
                let visible = self.list.visible();
                ui.label(format!("Found {} countries", visible.len()));
                ui.add_space(5.0);

                let show_population = self.list.sort.shows_population();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match &visible {
                        DisplayList::Flat(rows) => {
                            for country in rows {
                                if country_card(ui, country, show_population) {
                                    open = Some(country.name.clone());
                                }
                            }
                        }
                        DisplayList::Grouped(buckets) => {
                            for bucket in buckets {
                                ui.strong(&bucket.region);
                                for country in &bucket.countries {
                                    if country_card(ui, country, show_population) {
                                        open = Some(country.name.clone());
                                    }
                                }
                                ui.add_space(8.0);
                            }
                        }
                    }

                    if visible.is_empty() && !self.list.search.is_empty() {
                        ui.add_space(20.0);
                        ui.label("No countries found");
                        ui.label(format!(
                            "No countries match \"{}\". Try a different search term.",
                            self.list.search
                        ));
                    }
                });
            }
        }

        if reload {
            self.start_list_load();
        }
        if let Some(name) = open {
            self.open_detail(&name);
        }
    }

    fn show_detail_screen(&mut self, ui: &mut egui::Ui) {
        let mut back = false;
        ui.horizontal(|ui| {
            if ui.button("← Back").clicked() {
                back = true;
            }
        });
        ui.add_space(10.0);

        if let Some(detail) = &self.detail {
            match &detail.state {
                DetailState::Loading => {
                    ui.spinner();
                    ui.label("Loading country details...");
                }
                DetailState::Failed { message, .. } => {
                    ui.colored_label(egui::Color32::RED, message);
                    ui.add_space(10.0);
                    ui.label("Use ← Back to return to the country list.");
                }
                DetailState::Ready(details) => {
                    ui.heading(&details.name);
                    ui.add_space(10.0);

                    egui::Grid::new("country_fields")
                        .num_columns(2)
                        .spacing([30.0, 6.0])
                        .show(ui, |ui| {
                            ui.label("Country Name");
                            ui.label(&details.name);
                            ui.end_row();

                            ui.label("Country Code");
                            ui.label(details.code.as_deref().unwrap_or("N/A"));
                            ui.end_row();

                            ui.label("Capital");
                            ui.label(details.capital.as_deref().unwrap_or("N/A"));
                            ui.end_row();

                            ui.label("Region");
                            ui.label(details.region.as_deref().unwrap_or("N/A"));
                            ui.end_row();

                            ui.label("Population");
                            ui.label(format::format_population(details.population));
                            ui.end_row();

                            ui.label("Area");
                            ui.label(format::format_area(details.area));
                            ui.end_row();
                        });

                    ui.add_space(10.0);
                    ui.hyperlink_to(format!("Flag of {}", details.name), &details.flag);
                }
            }
        }

        if back {
            self.screen = Screen::List;
        }
    }
}

impl eframe::App for FlagxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background fetches
        self.check_fetch_results();

        // Request repaint while a fetch is in flight (for spinner animation)
        if self.list_rx.is_some() || self.detail_rx.is_some() {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::List => self.show_list_screen(ui),
            Screen::Detail => self.show_detail_screen(ui),
        });
    }
}

/// One clickable card: name (plus abbreviated population under the
/// population sorts) and the flag image URL. Returns true when clicked.
fn country_card(ui: &mut egui::Ui, country: &Country, show_population: bool) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        let label = if show_population {
            format!(
                "{}  ({})",
                country.name,
                format::abbreviate_population(country.population)
            )
        } else {
            country.name.clone()
        };
        if ui.button(label).clicked() {
            clicked = true;
        }
        ui.hyperlink_to("🏳 flag", &country.flag);
    });
    clicked
}

fn sort_label(mode: SortMode) -> &'static str {
    match mode {
        SortMode::NameAsc => "Name ascending",
        SortMode::NameDesc => "Name descending",
        SortMode::PopulationAsc => "Population ascending",
        SortMode::PopulationDesc => "Population descending",
        SortMode::Region => "By region",
    }
}
