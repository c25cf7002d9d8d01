//! Schema-driven form rows and their renderer.

use dioxus::prelude::*;
use shared_types::{AddressField, FieldPath, Profile, COUNTRIES, DEPARTMENTS};

use crate::settings::{AppSettings, SCALE_MAX, SCALE_MIN, SCALE_STEP};

/// How a single-select stores the chosen option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    /// The option's position, as a decimal string.
    Index,
    /// The option text itself.
    Label,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    Text {
        label: &'static str,
        path: FieldPath,
        value: String,
    },
    SingleSelect {
        label: &'static str,
        path: FieldPath,
        options: &'static [&'static str],
        mode: ValueMode,
        selected: Option<usize>,
    },
    Slider {
        label: &'static str,
        value: u32,
        min: u32,
        max: u32,
        step: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormRow {
    Header(&'static str),
    Field(FieldSpec),
}

/// A user edit coming out of a [`FieldRow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Set(FieldPath, String),
    SlidePreview(u32),
    SlideCommit(u32),
}

impl FieldSpec {
    pub fn label(&self) -> &'static str {
        match self {
            FieldSpec::Text { label, .. }
            | FieldSpec::SingleSelect { label, .. }
            | FieldSpec::Slider { label, .. } => label,
        }
    }

    fn select(
        label: &'static str,
        path: FieldPath,
        options: &'static [&'static str],
        mode: ValueMode,
        current: &str,
    ) -> Self {
        let selected = match mode {
            ValueMode::Index => current
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|index| *index < options.len()),
            ValueMode::Label => options.iter().position(|option| *option == current),
        };
        FieldSpec::SingleSelect {
            label,
            path,
            options,
            mode,
            selected,
        }
    }
}

/// Value to store when option `index` of a select is picked.
pub fn select_value(options: &[&str], mode: ValueMode, index: usize) -> Option<String> {
    let option = options.get(index)?;
    Some(match mode {
        ValueMode::Index => index.to_string(),
        ValueMode::Label => option.to_string(),
    })
}

/// `"Name:"` becomes `"Enter name"`.
pub fn placeholder(label: &str) -> String {
    format!("Enter {}", label.trim_end_matches(':').to_lowercase())
}

fn text(label: &'static str, path: FieldPath, profile: &Profile) -> FormRow {
    FormRow::Field(FieldSpec::Text {
        label,
        path,
        value: path.get(profile).to_string(),
    })
}

pub fn profile_form_rows(profile: &Profile) -> Vec<FormRow> {
    vec![
        FormRow::Header("Personal Info"),
        text("Name:", FieldPath::Name, profile),
        text("Phone:", FieldPath::Phone, profile),
        FormRow::Field(FieldSpec::select(
            "Department:",
            FieldPath::Department,
            DEPARTMENTS,
            ValueMode::Index,
            &profile.department,
        )),
        FormRow::Header("Address"),
        text("Street:", FieldPath::Address(AddressField::Street), profile),
        text("City:", FieldPath::Address(AddressField::City), profile),
        text("State:", FieldPath::Address(AddressField::State), profile),
        text("Zip:", FieldPath::Address(AddressField::Zip), profile),
        FormRow::Field(FieldSpec::select(
            "Country:",
            FieldPath::Address(AddressField::Country),
            COUNTRIES,
            ValueMode::Label,
            &profile.address.country,
        )),
    ]
}

pub fn settings_rows(settings: &AppSettings) -> Vec<FormRow> {
    vec![FormRow::Field(FieldSpec::Slider {
        label: "Font Scaling:",
        value: settings.font_scale,
        min: SCALE_MIN,
        max: SCALE_MAX,
        step: SCALE_STEP,
    })]
}

const LABEL_STYLE: &str = "display: block; margin-bottom: 0.25rem; font-size: var(--fs2); font-weight: var(--fw2); color: var(--c4);";
const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 0.6rem; font-size: var(--fs3); background: var(--c1); color: var(--c3); border: 1px solid var(--c6); border-radius: 6px;";

#[component]
pub fn FormRows(rows: Vec<FormRow>, on_edit: EventHandler<FieldEdit>) -> Element {
    let rendered = rows.into_iter().enumerate().map(move |(i, row)| match row {
        FormRow::Header(title) => rsx! {
            h2 {
                key: "{i}",
                style: "margin: 1rem 0 0.5rem; font-size: var(--fs1); font-weight: var(--fw1); color: var(--c3);",
                "{title}"
            }
        },
        FormRow::Field(spec) => rsx! {
            FieldRow { key: "{i}", spec, on_edit }
        },
    });

    rsx! {
        {rendered}
    }
}

#[component]
pub fn FieldRow(spec: FieldSpec, on_edit: EventHandler<FieldEdit>) -> Element {
    let label = spec.label();

    let control = match spec {
        FieldSpec::Text { label, path, value } => {
            let hint = placeholder(label);
            rsx! {
                input {
                    r#type: "text",
                    style: INPUT_STYLE,
                    placeholder: "{hint}",
                    value: "{value}",
                    oninput: move |evt| on_edit.call(FieldEdit::Set(path, evt.value())),
                }
            }
        }
        FieldSpec::SingleSelect {
            path,
            options,
            mode,
            selected,
            ..
        } => rsx! {
            select {
                style: INPUT_STYLE,
                onchange: move |evt| {
                    let picked = evt
                        .value()
                        .parse::<usize>()
                        .ok()
                        .and_then(|index| select_value(options, mode, index));
                    if let Some(value) = picked {
                        on_edit.call(FieldEdit::Set(path, value));
                    }
                },
                if selected.is_none() {
                    option { value: "", selected: true, disabled: true, "Select..." }
                }
                for (index, name) in options.iter().enumerate() {
                    option {
                        key: "{index}",
                        value: "{index}",
                        selected: selected == Some(index),
                        "{name}"
                    }
                }
            }
        },
        FieldSpec::Slider {
            value,
            min,
            max,
            step,
            ..
        } => rsx! {
            div {
                style: "display: flex; align-items: center; gap: 0.75rem;",
                input {
                    r#type: "range",
                    style: "flex: 1; accent-color: var(--c7);",
                    min: "{min}",
                    max: "{max}",
                    step: "{step}",
                    value: "{value}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<u32>() {
                            on_edit.call(FieldEdit::SlidePreview(v));
                        }
                    },
                    onchange: move |evt| {
                        if let Ok(v) = evt.value().parse::<u32>() {
                            on_edit.call(FieldEdit::SlideCommit(v));
                        }
                    },
                }
                span { style: "min-width: 3rem; font-size: var(--fs3); color: var(--c5);", "{value}%" }
            }
        },
    };

    rsx! {
        div {
            class: "field-row",
            style: "margin-bottom: 0.9rem;",
            label { style: LABEL_STYLE, "{label}" }
            {control}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Address, COUNTRY_NONE};

    fn sample() -> Profile {
        Profile {
            id: "1".to_string(),
            name: "Ada".to_string(),
            phone: "555".to_string(),
            department: "2".to_string(),
            address: Address {
                city: "Paris".to_string(),
                country: "France".to_string(),
                ..Address::default()
            },
            ..Profile::default()
        }
    }

    fn field(rows: &[FormRow], label: &str) -> FieldSpec {
        rows.iter()
            .find_map(|row| match row {
                FormRow::Field(spec) if spec.label() == label => Some(spec.clone()),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no row labelled {label}"))
    }

    #[test]
    fn profile_rows_follow_form_layout() {
        let rows = profile_form_rows(&sample());
        let shape: Vec<&str> = rows
            .iter()
            .map(|row| match row {
                FormRow::Header(title) => *title,
                FormRow::Field(spec) => spec.label(),
            })
            .collect();
        assert_eq!(
            shape,
            vec![
                "Personal Info",
                "Name:",
                "Phone:",
                "Department:",
                "Address",
                "Street:",
                "City:",
                "State:",
                "Zip:",
                "Country:",
            ]
        );
    }

    #[test]
    fn text_rows_carry_current_values() {
        let rows = profile_form_rows(&sample());
        assert_eq!(
            field(&rows, "City:"),
            FieldSpec::Text {
                label: "City:",
                path: FieldPath::Address(AddressField::City),
                value: "Paris".to_string(),
            }
        );
    }

    #[test]
    fn department_selects_by_index() {
        let rows = profile_form_rows(&sample());
        let FieldSpec::SingleSelect { mode, selected, .. } = field(&rows, "Department:") else {
            panic!("department should be a select");
        };
        assert_eq!(mode, ValueMode::Index);
        assert_eq!(selected, Some(2));
        assert_eq!(select_value(DEPARTMENTS, mode, 4).as_deref(), Some("4"));
    }

    #[test]
    fn country_selects_by_label() {
        let rows = profile_form_rows(&sample());
        let FieldSpec::SingleSelect { mode, selected, options, .. } = field(&rows, "Country:") else {
            panic!("country should be a select");
        };
        assert_eq!(mode, ValueMode::Label);
        assert_eq!(selected.map(|i| options[i]), Some("France"));
        assert_eq!(select_value(options, mode, 0).as_deref(), Some(COUNTRY_NONE));
    }

    #[test]
    fn blank_profile_has_no_selection() {
        let rows = profile_form_rows(&Profile::blank());
        for label in ["Department:", "Country:"] {
            let FieldSpec::SingleSelect { selected, .. } = field(&rows, label) else {
                panic!("{label} should be a select");
            };
            assert_eq!(selected, None, "{label}");
        }
    }

    #[test]
    fn out_of_range_option_has_no_value() {
        assert_eq!(select_value(DEPARTMENTS, ValueMode::Index, 99), None);
    }

    #[test]
    fn placeholder_drops_colon() {
        assert_eq!(placeholder("Zip:"), "Enter zip");
    }

    #[test]
    fn settings_rows_expose_scale_slider() {
        let mut settings = AppSettings::default();
        settings.set_scale_preview(135);
        assert_eq!(
            settings_rows(&settings),
            vec![FormRow::Field(FieldSpec::Slider {
                label: "Font Scaling:",
                value: 135,
                min: 50,
                max: 200,
                step: 5,
            })]
        );
    }
}
