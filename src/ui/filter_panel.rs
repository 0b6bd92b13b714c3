use eframe::egui::{ComboBox, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::domain::{FilterField, FilterState};
use crate::ui::{UI_TEXT, styles::colored_subsection_heading};

/// A filter edit requested from the filter bar. The controller applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FilterEdit {
    pub field: FilterField,
    pub value: String,
}

/// Search box plus one dropdown per numeric threshold.
pub(crate) fn render_filter_bar(ui: &mut Ui, filters: &FilterState) -> Vec<FilterEdit> {
    let mut edits = Vec::new();

    let mut term = filters.search_term.clone();
    let response = ui.add(
        TextEdit::singleline(&mut term)
            .hint_text(UI_TEXT.search_hint.as_str())
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        edits.push(FilterEdit {
            field: FilterField::SearchTerm,
            value: term,
        });
    }

    ui.add_space(6.0);
    ui.columns(3, |cols| {
        for (col, field) in cols
            .iter_mut()
            .zip(FilterField::iter().filter(FilterField::is_threshold))
        {
            col.label(colored_subsection_heading(field.to_string()));
            let current = filters.get(field);
            ComboBox::from_id_salt(field.to_string())
                .selected_text(filters.threshold_label(field))
                .width(col.available_width())
                .show_ui(col, |ui| {
                    for option in field.options() {
                        if ui
                            .selectable_label(current == option.value, option.label)
                            .clicked()
                            && current != option.value
                        {
                            edits.push(FilterEdit {
                                field,
                                value: option.value.to_string(),
                            });
                        }
                    }
                });
        }
    });

    edits
}
