//! Form fields shared by registration and the admin user dialog.
//!
//! All inputs write straight into a `Signal<UserDraft>`; validation errors are
//! keyed by the field names in `er_types::validation` and cleared as soon as
//! the user edits the offending field.

use dioxus::prelude::*;
use er_types::{
    users::{MealPreference, MealSet, MealTime, UserDraft}, validation::{FIELD_EMAIL, FIELD_END, FIELD_PASSWORD, FIELD_START, FieldErrors}
};

fn input_class(errors: &FieldErrors, field: &str) -> &'static str {
    if errors.contains_key(field) {
        "input input-bordered w-full input-error"
    } else {
        "input input-bordered w-full"
    }
}

fn clear_error(mut errors: Signal<FieldErrors>, field: &str) {
    if errors.peek().contains_key(field) {
        errors.write().remove(field);
    }
}

#[component]
fn FieldError(errors: Signal<FieldErrors>, field: &'static str) -> Element {
    rsx! {
        if let Some(err) = errors().get(field) {
            div { class: "text-error text-sm mt-1", "{err}" }
        }
    }
}

/// Meal preference select plus one checkbox per meal.
///
/// A "Not set" entry is offered only while the preference is unset, so an
/// edit that leaves the select alone sends the unset value back.
#[component]
pub fn MealPicker(
    preference: Option<MealPreference>,
    meals: MealSet,
    on_preference: EventHandler<Option<MealPreference>>,
    on_meals: EventHandler<MealSet>,
) -> Element {
    rsx! {
        label { class: "form-control w-full",
            div { class: "label", span { class: "label-text", "Meal Preference" } }
            select {
                class: "select select-bordered w-full",
                value: preference.map(|p| p.as_str()).unwrap_or_default(),
                onchange: move |e| {
                    let value = e.value();
                    if value.is_empty() {
                        on_preference.call(None);
                    } else if let Ok(choice) = value.parse::<MealPreference>() {
                        on_preference.call(Some(choice));
                    }
                },
                if preference.is_none() {
                    option { value: "", selected: true, "Not set" }
                }
                for choice in MealPreference::ALL {
                    option { value: choice.as_str(), selected: Some(choice) == preference, {choice.label()} }
                }
            }
        }
        fieldset { class: "flex flex-col gap-1",
            legend { class: "label-text mb-1", "Meals" }
            for meal in MealTime::ALL {
                label { class: "label cursor-pointer justify-start gap-2",
                    input {
                        r#type: "checkbox",
                        class: "checkbox checkbox-sm",
                        checked: meals.contains(meal),
                        onchange: {
                            let meals = meals.clone();
                            move |e: Event<FormData>| {
                                let mut next = meals.clone();
                                next.set(meal, e.checked());
                                on_meals.call(next);
                            }
                        },
                    }
                    span { class: "label-text", {meal.label()} }
                }
            }
        }
    }
}

/// Start and end `datetime-local` inputs for the participation window.
#[component]
pub fn WindowFields(draft: Signal<UserDraft>, errors: Signal<FieldErrors>) -> Element {
    let current = draft();
    let errs = errors();

    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
            label { class: "form-control w-full",
                div { class: "label", span { class: "label-text", "Participation Start Time" } }
                input {
                    r#type: "datetime-local",
                    class: input_class(&errs, FIELD_START),
                    value: "{current.participation_start_time}",
                    oninput: move |e| {
                        draft.write().participation_start_time = e.value();
                        clear_error(errors, FIELD_START);
                    }
                }
                FieldError { errors, field: FIELD_START }
            }
            label { class: "form-control w-full",
                div { class: "label", span { class: "label-text", "Participation End Time" } }
                input {
                    r#type: "datetime-local",
                    class: input_class(&errs, FIELD_END),
                    value: "{current.participation_end_time}",
                    oninput: move |e| {
                        draft.write().participation_end_time = e.value();
                        clear_error(errors, FIELD_END);
                    }
                }
                FieldError { errors, field: FIELD_END }
            }
        }
    }
}

/// Every editable user field.
///
/// `show_password` is off for edits (the password is not changed there) and
/// `show_organiser` only appears in the admin dialog.
#[component]
pub fn UserFields(
    draft: Signal<UserDraft>,
    errors: Signal<FieldErrors>,
    #[props(default = true)] show_password: bool,
    #[props(default = false)] show_organiser: bool,
) -> Element {
    let current = draft();
    let errs = errors();

    rsx! {
        div { class: "flex flex-col gap-4",
            label { class: "form-control w-full",
                div { class: "label", span { class: "label-text", "Email" } }
                input {
                    r#type: "email",
                    class: input_class(&errs, FIELD_EMAIL),
                    placeholder: "name@example.com",
                    autocomplete: "email",
                    value: "{current.email}",
                    oninput: move |e| {
                        draft.write().email = e.value();
                        clear_error(errors, FIELD_EMAIL);
                    }
                }
                FieldError { errors, field: FIELD_EMAIL }
            }
            if show_password {
                label { class: "form-control w-full",
                    div { class: "label", span { class: "label-text", "Password" } }
                    input {
                        r#type: "password",
                        class: input_class(&errs, FIELD_PASSWORD),
                        placeholder: "••••••••",
                        autocomplete: "new-password",
                        value: "{current.password}",
                        oninput: move |e| {
                            draft.write().password = e.value();
                            clear_error(errors, FIELD_PASSWORD);
                        }
                    }
                    FieldError { errors, field: FIELD_PASSWORD }
                }
            }
            if show_organiser {
                label { class: "label cursor-pointer justify-start gap-2",
                    input {
                        r#type: "checkbox",
                        class: "checkbox checkbox-sm",
                        checked: current.is_organiser,
                        onchange: move |e| draft.write().is_organiser = e.checked(),
                    }
                    span { class: "label-text", "Organiser" }
                }
            }
            MealPicker {
                preference: current.meal_preference,
                meals: current.meals.clone(),
                on_preference: move |choice| draft.write().meal_preference = choice,
                on_meals: move |meals| draft.write().meals = meals,
            }
            WindowFields { draft, errors }
        }
    }
}
