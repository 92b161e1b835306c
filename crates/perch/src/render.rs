//! Plain-text rendering of a timeline list.
//!
//! ```text
//! [Home*] [Mentions] Favorites
//!   Home      @bob: lunch (2/3)
//!   Mentions  -
//! ```
//!
//! Brackets mark visible panes, `*` the active one. Each visible pane gets a
//! line with its active status and cursor position.

use perch_timeline::{ActiveList, Status, Timeline, VisibleTimelineList};

pub fn render(list: &VisibleTimelineList) -> String {
    if !list.has_timelines() {
        return "(no timelines)\n".to_string();
    }

    let active = list.active_index();
    let tabs: Vec<String> = list
        .iter()
        .enumerate()
        .map(|(i, timeline)| {
            let star = if Some(i) == active { "*" } else { "" };
            if list.visible().contains(&i) {
                format!("[{}{star}]", timeline.name())
            } else {
                format!("{}{star}", timeline.name())
            }
        })
        .collect();

    let width = list.visible_timelines().map(|t| t.name().len()).max().unwrap_or(0);
    let panes: String = list
        .visible_timelines()
        .map(|timeline| format!("  {:<width$}  {}\n", timeline.name(), pane_line(timeline)))
        .collect();

    format!("{}\n{panes}", tabs.join(" "))
}

fn pane_line(timeline: &Timeline) -> String {
    match (timeline.get_active(), timeline.active_index()) {
        (Some(Status { user, text, .. }), Some(index)) => {
            format!("@{user}: {text} ({}/{})", index + 1, timeline.len())
        }
        _ => "-".to_string(),
    }
}
