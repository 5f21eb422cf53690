use crate::icons::IconResolver;
use crate::model::AppInfo;
use crate::sources::EntryReader;
use crate::state::EvaluationState;

pub const COMPATIBLE_HEADER: &str = "Compatible Apps";
pub const INCOMPATIBLE_HEADER: &str = "Incompatible Apps";

/// One table row; either side may run out before the other.
pub struct Row<'a> {
    pub compatible: Option<&'a AppInfo>,
    pub incompatible: Option<&'a AppInfo>,
}

pub fn rows<R: EntryReader>(state: &EvaluationState<R>) -> Vec<Row<'_>> {
    let compatible: Vec<&AppInfo> = state.visible_compatible().collect();
    let incompatible: Vec<&AppInfo> = state.visible_incompatible().collect();
    let count = compatible.len().max(incompatible.len());

    (0..count)
        .map(|i| Row {
            compatible: compatible.get(i).copied(),
            incompatible: incompatible.get(i).copied(),
        })
        .collect()
}

fn cell(app: &AppInfo, icons: Option<&IconResolver>) -> String {
    let mut text = format!("{} ({})", app.display_name, app.package_name);
    if let Some(resolver) = icons {
        match resolver.resolve(&app.icon_reference) {
            Some(path) => text.push_str(&format!(" <{}>", path.display())),
            None => text.push_str(" <no icon>"),
        }
    }
    text
}

/// Plain-text evaluation table. Compatible cells carry the checkbox state.
pub fn render_table<R: EntryReader>(state: &EvaluationState<R>, icons: Option<&IconResolver>) -> String {
    let lines: Vec<(String, String)> = rows(state)
        .into_iter()
        .map(|row| {
            let left = row
                .compatible
                .map(|app| {
                    let mark = if state.selection.contains(&app.package_name) { "[x]" } else { "[ ]" };
                    format!("{} {}", mark, cell(app, icons))
                })
                .unwrap_or_default();
            let right = row.incompatible.map(|app| cell(app, icons)).unwrap_or_default();
            (left, right)
        })
        .collect();

    let width = lines
        .iter()
        .map(|(left, _)| left.chars().count())
        .chain(std::iter::once(COMPATIBLE_HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<width$} | {}\n", COMPATIBLE_HEADER, INCOMPATIBLE_HEADER, width = width);
    out.push_str(&format!("{}-+-{}\n", "-".repeat(width), "-".repeat(INCOMPATIBLE_HEADER.len())));
    for (left, right) in lines {
        let pad = width - left.chars().count();
        out.push_str(&format!("{}{} | {}", left, " ".repeat(pad), right).trim_end());
        out.push('\n');
    }
    out
}
