//! Plain-text rendering for the command line.

use std::fmt::Write;

use stargazer_core::browse::CatalogView;
use stargazer_core::models::{CatalogEntry, MonthEntry};

use crate::controller::{DetailViewState, Track, TrackKind};

fn render_entry(out: &mut String, entry: &CatalogEntry) {
    let _ = writeln!(
        out,
        "  • {} [{}] ({})\n    {}",
        entry.name,
        entry.category.label(),
        entry.id,
        entry.description
    );
}

fn render_month(out: &mut String, month: &MonthEntry) {
    let _ = writeln!(out, "{} · {}", month.label, month.season.label());
    for entry in &month.objects {
        render_entry(out, entry);
    }
}

/// Render the featured month, the grid, or the empty state.
pub fn render_catalog(view: &CatalogView) -> String {
    let mut out = String::new();

    if let Some(featured) = &view.featured {
        let _ = writeln!(out, "★ 이번 달의 밤하늘");
        render_month(&mut out, featured);
        out.push('\n');
    }

    if let Some(empty) = &view.empty_state {
        let _ = writeln!(out, "{}\n{}", empty.title, empty.hint);
        return out;
    }

    for month in &view.months {
        render_month(&mut out, month);
        out.push('\n');
    }
    out
}

/// Render an open detail view. Loading tracks show their status message.
pub fn render_detail(state: &DetailViewState) -> String {
    let mut out = String::new();
    let Some(entry) = &state.entry else {
        return out;
    };

    let _ = writeln!(out, "{} [{}]", entry.name, entry.category.label());
    let _ = writeln!(out, "{}\n", entry.description);

    match &state.text {
        Track::Idle => {}
        Track::Loading { .. } => {
            let _ = writeln!(out, "{}", state.status_message(TrackKind::Text).unwrap_or_default());
        }
        Track::Resolved(detail) => {
            let _ = writeln!(out, "{}\n", detail.difficulty.badge());
            let _ = writeln!(out, "신화와 이야기\n  {}\n", detail.story);
            let _ = writeln!(out, "관측 시기\n  {}\n", detail.best_viewing_time);
            let _ = writeln!(out, "찾는 법\n  {}\n", detail.finding_tip);
            let _ = writeln!(out, "흥미로운 사실들");
            for fact in &detail.interesting_facts {
                let _ = writeln!(out, "  • {}", fact);
            }
        }
    }

    out.push('\n');
    match &state.image {
        Track::Idle => {}
        Track::Loading { .. } => {
            let _ = writeln!(out, "{}", state.status_message(TrackKind::Image).unwrap_or_default());
        }
        Track::Resolved(Some(uri)) => {
            let mime = uri
                .strip_prefix("data:")
                .and_then(|rest| rest.split(';').next())
                .unwrap_or("image");
            let _ = writeln!(out, "생성된 이미지: {} ({} bytes)", mime, uri.len());
        }
        Track::Resolved(None) => {
            let _ = writeln!(out, "이미지: {}", entry.image_placeholder);
        }
    }
    out
}
