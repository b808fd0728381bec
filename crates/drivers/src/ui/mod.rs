mod contact;
mod gallery;
mod sections;
mod theme;

use std::time::Duration;

use eframe::egui::{self, RichText};
use fcc_gallery_application::{
    ApplicationService, ListEventsQuery, NavigateSectionCommand, PollContactQuery,
    ShowDetailQuery, SubmitContactCommand, ToggleMenuCommand, UpdateContactFieldCommand,
};
use fcc_gallery_domain::{MenuState, SiteSection};

use crate::config::AppConfig;
use contact::ContactAction;
use gallery::GalleryAction;

const WIDE_LAYOUT_MIN_WIDTH: f32 = 960.0;

#[derive(Debug, Clone, PartialEq, Eq)]
enum UiAction {
    Gallery(GalleryAction),
    Contact(ContactAction),
    Navigate(SiteSection),
    ToggleMenu,
}

pub struct GalleryApp {
    service: ApplicationService,
    scroll_target: Option<SiteSection>,
    reset_detail_scroll: bool,
}

impl GalleryApp {
    fn new(service: ApplicationService) -> Self {
        Self {
            service,
            scroll_target: None,
            reset_detail_scroll: false,
        }
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Gallery(action) => match gallery::apply(&mut self.service, action) {
                Ok(transition) => {
                    if gallery::shows_new_event(transition) {
                        self.reset_detail_scroll = true;
                    }
                }
                Err(error) => {
                    tracing::error!(?action, %error, "gallery tile pointed outside the catalog");
                }
            },
            UiAction::Contact(ContactAction::Edit(field, value)) => {
                self.service
                    .update_contact_field(UpdateContactFieldCommand { field, value });
            }
            UiAction::Contact(ContactAction::Submit) => {
                self.service.submit_contact(SubmitContactCommand);
            }
            UiAction::Navigate(section) => {
                self.service.navigate_section(NavigateSectionCommand { section });
                self.scroll_target = Some(section);
            }
            UiAction::ToggleMenu => {
                self.service.toggle_menu(ToggleMenuCommand);
            }
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.service.poll_contact(PollContactQuery);
        if self.service.contact_form().is_submitted() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        let mut actions = Vec::new();
        let wide = ctx.screen_rect().width() >= WIDE_LAYOUT_MIN_WIDTH;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            top_bar(ui, self.service.menu(), wide, &mut actions);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let target = &mut self.scroll_target;

                    if let Some(section) = sections::hero(ui, target) {
                        actions.push(UiAction::Navigate(section));
                    }

                    sections::strongest_man_intro(ui, target);
                    let catalog = self.service.list_events(ListEventsQuery);
                    if let Some(action) = gallery::show_tiles(ui, catalog) {
                        actions.push(UiAction::Gallery(action));
                    }
                    sections::eligibility(ui);

                    if sections::universities(ui, target) {
                        actions.push(UiAction::Navigate(SiteSection::Contact));
                    }
                    sections::athletes(ui, target);
                    sections::shop(ui, target);
                    sections::vision(ui, target);

                    let form = self.service.contact_form();
                    actions.extend(
                        contact::show_form(ui, form, target)
                            .into_iter()
                            .map(UiAction::Contact),
                    );
                    ui.add_space(32.0);
                });
        });

        let reset_scroll = std::mem::take(&mut self.reset_detail_scroll);
        if let Some(view) = self.service.show_detail(ShowDetailQuery) {
            if let Some(action) = gallery::show_modal(ctx, &view, reset_scroll) {
                actions.push(UiAction::Gallery(action));
            }
        }

        for action in actions {
            self.apply(action);
        }
    }
}

fn top_bar(ui: &mut egui::Ui, menu: MenuState, wide: bool, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Fight Club Championship")
                .strong()
                .size(18.0)
                .color(theme::COL_GOLD),
        );

        if wide {
            for section in SiteSection::ALL {
                if ui
                    .selectable_label(menu.active() == section, section.label())
                    .clicked()
                {
                    actions.push(UiAction::Navigate(section));
                }
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if !wide {
                let toggle = if menu.is_open() { "✕" } else { "☰" };
                let hover = if menu.is_open() { "Close menu" } else { "Open menu" };
                if ui.button(toggle).on_hover_text(hover).clicked() {
                    actions.push(UiAction::ToggleMenu);
                }
            }
            if ui.button(RichText::new("Register Now").strong()).clicked() {
                actions.push(UiAction::Navigate(SiteSection::Athletes));
            }
        });
    });

    if !wide && menu.is_open() {
        ui.separator();
        for section in SiteSection::ALL {
            if ui
                .selectable_label(menu.active() == section, section.label())
                .clicked()
            {
                actions.push(UiAction::Navigate(section));
            }
        }
    }
}

pub fn launch_window(service: ApplicationService, config: &AppConfig) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 480.0])
            .with_title("Fight Club Championship"),
        ..Default::default()
    };

    tracing::info!(
        events = service.list_events(ListEventsQuery).len(),
        "opening gallery window"
    );

    eframe::run_native(
        "fcc-gallery",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(GalleryApp::new(service)))
        }),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
