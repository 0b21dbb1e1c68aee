//! Event-advertising form.
//!
//! Each input writes straight into the orchestrator's form on `input`.
//! Only the numeric fields are parsed; an unparsable number clears the
//! field.

use leptos::*;
use snareshare::{models::split_list, AdFormData};

use crate::types::UploadViewModel;

/// Options of the conversion type select.
const CONVERSION_TYPES: &[(&str, &str)] = &[
    ("ticket_sales", "Ticket sales"),
    ("page_views", "Page views"),
    ("sign_ups", "Sign-ups"),
];

#[component]
pub fn AdFormFields(vm: UploadViewModel) -> impl IntoView {
    view! {
        <div class="ad-form">
            <FormField vm=vm label="Event name" apply=|f, v| f.event_name = v/>
            <FormField vm=vm label="Event date" kind="date" apply=|f, v| f.event_date = v/>
            <FormField vm=vm label="Ticket link" kind="url" apply=|f, v| f.ticket_link = v/>
            <FormField vm=vm label="Budget" kind="number" apply=|f, v| f.budget = v.parse().ok()/>
            <FormField vm=vm label="Location" apply=|f, v| f.location = v/>
            <FormField vm=vm label="Radius" kind="number" apply=|f, v| f.radius = v.parse().ok()/>
            <FormField vm=vm label="Run from" kind="date" apply=|f, v| f.start_date = v/>
            <FormField vm=vm label="Run until" kind="date" apply=|f, v| f.end_date = v/>
            <FormField
                vm=vm
                label="Audience tags (comma separated)"
                apply=|f, v| f.audience_tags = split_list(&v)
            />
            <FormField
                vm=vm
                label="Audience types (comma separated)"
                apply=|f, v| f.audience_types = split_list(&v)
            />

            <label class="form-field">
                <span>"Conversion type"</span>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    vm.update_form(|f| f.conversion_type = value);
                }>
                    <option value="">"Choose..."</option>
                    {CONVERSION_TYPES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </label>

            <FormField vm=vm label="Page source" apply=|f, v| f.page_source = v/>
        </div>
    }
}

#[component]
fn FormField(
    vm: UploadViewModel,
    label: &'static str,
    /// HTML input type
    #[prop(default = "text")]
    kind: &'static str,
    apply: fn(&mut AdFormData, String),
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type=kind
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.update_form(|form| apply(form, value));
                }
            />
        </label>
    }
}
