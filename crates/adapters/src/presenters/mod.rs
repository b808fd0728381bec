use fcc_gallery_domain::{DetailView, EventRecord};

pub fn present_event_row(index: usize, event: &EventRecord) -> String {
    format!("{}\t{}\t{}", index + 1, event.title, event.image)
}

/// Text rendering of the open event. Prev/next controls are listed only when
/// the navigator allows the move.
pub fn present_detail(view: &DetailView<'_>) -> String {
    let mut lines = vec![
        view.counter_label(),
        view.record.title.clone(),
        format!("image: {}", view.record.image),
    ];
    lines.extend(
        view.record
            .details
            .iter()
            .map(|detail| format!("  {}: {}", detail.label, detail.value)),
    );
    if !view.record.note.is_empty() {
        lines.push(format!("note: {}", view.record.note));
    }
    lines.push(present_controls(view));
    lines.join("\n")
}

fn present_controls(view: &DetailView<'_>) -> String {
    let mut controls = Vec::with_capacity(3);
    if view.can_go_previous {
        controls.push("[< prev]");
    }
    controls.push("[close]");
    if view.can_go_next {
        controls.push("[next >]");
    }
    controls.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fcc_gallery_domain::{EventCatalog, EventDetail, GalleryNavigator};

    fn catalog() -> EventCatalog {
        EventCatalog::new(vec![
            EventRecord {
                title: "Deadlift for Reps".to_string(),
                image: "deadlift.jpg".to_string(),
                details: vec![
                    EventDetail::new("Weight", "150 kg for maximum repetitions"),
                    EventDetail::new("Duration", "60 seconds"),
                ],
                note: "Mixed grip, straps, or hook grip allowed.".to_string(),
            },
            EventRecord {
                title: "Tire Flip".to_string(),
                image: "tire.jpg".to_string(),
                details: Vec::new(),
                note: String::new(),
            },
        ])
        .expect("catalog should build")
    }

    #[test]
    fn event_row_is_one_based() {
        let catalog = catalog();
        let row = present_event_row(1, catalog.get(1).expect("second event"));
        assert_eq!(row, "2\tTire Flip\ttire.jpg");
    }

    #[test]
    fn first_event_omits_previous_control() {
        let catalog = catalog();
        let mut navigator = GalleryNavigator::for_catalog(&catalog);
        navigator.open(0).expect("index is in range");
        let view = navigator.detail(&catalog).expect("detail while open");

        let text = present_detail(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Event 1 of 2");
        assert_eq!(lines[1], "Deadlift for Reps");
        assert_eq!(lines[3], "  Weight: 150 kg for maximum repetitions");
        assert_eq!(lines[4], "  Duration: 60 seconds");
        assert_eq!(lines.last().copied(), Some("[close] [next >]"));
    }

    #[test]
    fn last_event_omits_next_control_and_empty_note() {
        let catalog = catalog();
        let mut navigator = GalleryNavigator::for_catalog(&catalog);
        navigator.open(1).expect("index is in range");
        let view = navigator.detail(&catalog).expect("detail while open");

        let text = present_detail(&view);
        assert!(!text.contains("note:"));
        assert!(text.ends_with("[< prev] [close]"));
    }
}
