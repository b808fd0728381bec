use eframe::egui::{self, RichText};
use fcc_gallery_domain::SiteSection;

use super::theme;

const WHAT_IS_STRONGEST_MAN: &str = "Strongest Man competitions are the ultimate test of raw \
strength, endurance, and mental toughness. Athletes compete across multiple events including \
log lifts, tire flips, sandbag carries, yoke walks, and more. It's not just about muscle: it's \
about strategy, technique, and the warrior spirit.";

const WHY_IT_MATTERS: [(&str, &str); 4] = [
    (
        "Student Development",
        "Discipline, resilience and goal setting built under the bar.",
    ),
    (
        "Campus Culture",
        "A shared event that brings the whole campus out to cheer.",
    ),
    (
        "Talent Pipeline",
        "A first competitive stage for future state and national athletes.",
    ),
    (
        "National Platform",
        "University winners progress toward national championships.",
    ),
];

const WHAT_WE_DO: [(&str, &str); 2] = [
    (
        "Elite Strongman Events",
        "Professional-grade equipment and competition standards for campus championships",
    ),
    (
        "University-Level Excellence",
        "Building competitive sports culture on campuses with professional organization",
    ),
];

const UNIVERSITIES_EMAIL: &str = "universities@fightclubchampionship.com";
const ATHLETES_EMAIL: &str = "athletes@fightclubchampionship.com";
const PHONE: &str = "+919876543210";

const UNIVERSITY_BENEFITS: [(&str, &str); 4] = [
    ("Student Engagement", "A flagship sports event students train for all year."),
    ("Campus Prestige", "Host a championship that carries the university's name."),
    ("Fitness Culture", "Promote strength training and healthy habits on campus."),
    ("Media Exposure", "Coverage across social media and the championship network."),
];

const WHO_CAN_PARTICIPATE: [&str; 4] = [
    "Age 18 years and above",
    "Currently enrolled in university/college",
    "Valid student ID required",
    "Medical clearance certificate",
];

const REGISTRATION_PROCESS: [&str; 4] = [
    "Fill online registration form",
    "Submit required documents",
    "Pay registration fee",
    "Receive confirmation & event details",
];

const CODE_OF_CONDUCT: [&str; 4] = [
    "Respect all athletes and officials",
    "Follow all safety protocols",
    "No performance-enhancing substances",
    "Maintain sportsmanship at all times",
];

const SAFETY_DISCLAIMER: &str = "Strongest Man competitions involve heavy lifting and intense \
physical exertion. All athletes compete at their own risk. Medical clearance is mandatory. \
Proper training, technique, and supervision are essential. Fight Club Championship and host \
institutions are not liable for injuries sustained during competition.";

const ROADMAP: [(&str, &str); 4] = [
    (
        "Phase 1: University Championships",
        "Establishing championships at individual universities and colleges across India. \
         Building campus-level strength sports culture.",
    ),
    (
        "Phase 2: Inter-University Meets",
        "Regional championships bringing together top athletes from multiple universities.",
    ),
    (
        "Phase 3: State-Level Championships",
        "State championships crowning the strongest athletes from each region.",
    ),
    (
        "Phase 4: National Platform",
        "National Championships and international representation.",
    ),
];

const BEYOND_STRONGEST_MAN: &str = "Our vision extends beyond strength sports, creating a \
comprehensive athletic ecosystem for Indian universities.";

const PLANNED_SPORTS: &str = "We plan to introduce Wrestling, Arm wrestling, and combat sports, \
especially MMA (mixed martial arts).";

/// Section title that scrolls into view when it is the pending navigation
/// target.
pub fn heading(
    ui: &mut egui::Ui,
    section: SiteSection,
    title: &str,
    target: &mut Option<SiteSection>,
) {
    ui.add_space(24.0);
    let response = ui.label(RichText::new(title).heading().strong().color(theme::COL_GOLD));
    if *target == Some(section) {
        response.scroll_to_me(Some(egui::Align::TOP));
        *target = None;
    }
}

/// Returns the section a call-to-action button asked for.
pub fn hero(ui: &mut egui::Ui, target: &mut Option<SiteSection>) -> Option<SiteSection> {
    heading(ui, SiteSection::Home, "Fight Club Championship", target);
    ui.label(
        RichText::new(
            "Bringing world-class strongman competitions to university campuses across India",
        )
        .size(18.0)
        .color(theme::COL_TEXT_DIM),
    );

    let mut requested = None;
    ui.horizontal(|ui| {
        if ui.button(RichText::new("Register Now").strong()).clicked() {
            requested = Some(SiteSection::Athletes);
        }
        if ui.button("View Events").clicked() {
            requested = Some(SiteSection::StrongestMan);
        }
    });
    requested
}

pub fn strongest_man_intro(ui: &mut egui::Ui, target: &mut Option<SiteSection>) {
    heading(ui, SiteSection::StrongestMan, "What We Do", target);
    ui.label(
        RichText::new(
            "Bringing world-class strongman competitions to university campuses across India",
        )
        .color(theme::COL_TEXT_DIM),
    );
    card_row(ui, &WHAT_WE_DO);
    ui.add_space(12.0);

    ui.label(
        RichText::new("What is Strongest Man?")
            .size(20.0)
            .color(theme::COL_GOLD),
    );
    ui.label(RichText::new(WHAT_IS_STRONGEST_MAN).color(theme::COL_TEXT_DIM));
    ui.add_space(8.0);
    ui.label(RichText::new("Why University-Level Championships Matter").strong());
    card_row(ui, &WHY_IT_MATTERS);
    ui.add_space(12.0);
    ui.label(RichText::new("Championship Events").size(20.0).color(theme::COL_GOLD));
    ui.label(
        RichText::new("Five grueling events designed to test every aspect of human strength")
            .color(theme::COL_TEXT_DIM),
    );
}

pub fn eligibility(ui: &mut egui::Ui) {
    theme::note_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Category: Open (18+)").strong());
        ui.label(
            RichText::new("Open to all enrolled university and college students.")
                .color(theme::COL_TEXT_DIM),
        );
    });
}

/// Returns `true` when the visitor asked to get in touch about hosting.
pub fn universities(ui: &mut egui::Ui, target: &mut Option<SiteSection>) -> bool {
    heading(ui, SiteSection::Universities, "Universities & Colleges", target);
    card_row(ui, &UNIVERSITY_BENEFITS);
    ui.add_space(8.0);
    ui.label(
        RichText::new("Host a Championship at Your Campus")
            .strong()
            .color(theme::COL_GOLD),
    );
    ui.label(
        RichText::new(
            "Interested in bringing the Strongest Man Championship to your university? Get in \
             touch with us to discuss hosting opportunities, logistics, and support.",
        )
        .color(theme::COL_TEXT_DIM),
    );
    let mut contact = false;
    ui.horizontal_wrapped(|ui| {
        contact = ui.button("Contact Us").clicked();
        ui.hyperlink_to(
            format!("✉ {UNIVERSITIES_EMAIL}"),
            format!("mailto:{UNIVERSITIES_EMAIL}"),
        );
        ui.hyperlink_to("☎ Call Now", format!("tel:{PHONE}"));
    });
    contact
}

pub fn athletes(ui: &mut egui::Ui, target: &mut Option<SiteSection>) {
    heading(ui, SiteSection::Athletes, "For Athletes", target);
    ui.horizontal_wrapped(|ui| {
        bullet_card(ui, "Who Can Participate", &WHO_CAN_PARTICIPATE);
        bullet_card(ui, "Registration Process", &REGISTRATION_PROCESS);
        bullet_card(ui, "Code of Conduct", &CODE_OF_CONDUCT);
    });
    theme::note_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("⚠ Safety Disclaimer").strong());
        ui.label(RichText::new(SAFETY_DISCLAIMER).color(theme::COL_TEXT_DIM));
    });
    ui.vertical_centered(|ui| {
        ui.hyperlink_to(
            RichText::new("Register as Athlete ›").strong(),
            format!("mailto:{ATHLETES_EMAIL}"),
        );
    });
}

pub fn shop(ui: &mut egui::Ui, target: &mut Option<SiteSection>) {
    heading(ui, SiteSection::Shop, "Shop", target);
    ui.label(
        RichText::new("Official championship merchandise is coming soon.")
            .color(theme::COL_TEXT_DIM),
    );
}

pub fn vision(ui: &mut egui::Ui, target: &mut Option<SiteSection>) {
    heading(ui, SiteSection::Vision, "Vision & Roadmap", target);
    ui.label(
        RichText::new("Our journey to build India's most comprehensive strength sports ecosystem")
            .color(theme::COL_TEXT_DIM),
    );
    for (phase, description) in ROADMAP {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(phase).strong());
            ui.label(RichText::new(description).color(theme::COL_TEXT_DIM));
        });
    }

    ui.add_space(12.0);
    theme::note_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Beyond Strongest Man")
                    .size(20.0)
                    .color(theme::COL_GOLD),
            );
            ui.label(RichText::new(BEYOND_STRONGEST_MAN).color(theme::COL_TEXT_DIM));
            ui.label(RichText::new(PLANNED_SPORTS).strong());
        });
    });
}

fn card_row(ui: &mut egui::Ui, cards: &[(&str, &str)]) {
    ui.horizontal_wrapped(|ui| {
        for (title, body) in cards {
            theme::card_frame().show(ui, |ui| {
                ui.set_width(220.0);
                ui.label(RichText::new(*title).strong());
                ui.label(RichText::new(*body).color(theme::COL_TEXT_DIM));
            });
        }
    });
}

fn bullet_card(ui: &mut egui::Ui, title: &str, items: &[&str]) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(300.0);
        ui.label(RichText::new(title).strong().color(theme::COL_GOLD));
        for item in items {
            ui.label(format!("✔ {item}"));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_lines_use_mail_and_phone_links() {
        assert!(UNIVERSITIES_EMAIL.ends_with("@fightclubchampionship.com"));
        assert!(ATHLETES_EMAIL.ends_with("@fightclubchampionship.com"));
        assert!(PHONE.starts_with("+91"));
    }

    #[test]
    fn page_renders_without_navigation_requests() {
        let ctx = egui::Context::default();
        let mut target = Some(SiteSection::Vision);
        let mut requested = None;
        let mut contact = true;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                requested = hero(ui, &mut target);
                strongest_man_intro(ui, &mut target);
                eligibility(ui);
                contact = universities(ui, &mut target);
                athletes(ui, &mut target);
                shop(ui, &mut target);
                vision(ui, &mut target);
            });
        });

        assert_eq!(requested, None);
        assert!(!contact);
        assert_eq!(target, None);
    }
}
