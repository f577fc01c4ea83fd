//! Labeled text input with validation display and optional affordances.

use leptos::*;

use crate::icon::{Icon, IconName, IconSize};
use crate::tokens::{bool_token, merge_layout_class, FieldSize, FieldVariant, InputKind, Theme};

#[component]
/// Single-line input field with label, helper/error text, clear button,
/// password reveal, and loading state.
///
/// The field is controlled when `on_change` is supplied (the caller owns the
/// value) and self-managed otherwise. Validation is display-only: `invalid`
/// and `error_message` are threaded through to the markup unchanged, never
/// computed here.
pub fn InputField(
    /// Current value in controlled mode; initial value otherwise.
    #[prop(optional, into)]
    value: MaybeSignal<String>,
    /// Change handler receiving the new value. Supplying it makes the field
    /// controlled.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Visible label above the control.
    #[prop(optional, into)]
    label: Option<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Supporting copy below the control; superseded by `error_message`.
    #[prop(optional, into)]
    helper_text: Option<String>,
    /// Validation message shown instead of the helper text.
    #[prop(optional, into)]
    error_message: Option<String>,
    /// Disables the control.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Marks the value invalid (`aria-invalid` plus the danger tone).
    #[prop(optional, into)]
    invalid: MaybeSignal<bool>,
    /// Disables the control and shows a spinner while set.
    #[prop(optional, into)]
    loading: MaybeSignal<bool>,
    /// Visual variant.
    #[prop(default = FieldVariant::Outlined)]
    variant: FieldVariant,
    /// Sizing token.
    #[prop(default = FieldSize::Md)]
    size: FieldSize,
    /// Content kind; `Password` adds the reveal toggle.
    #[prop(default = InputKind::Text)]
    input_kind: InputKind,
    /// Shows a clear button while the field holds a value.
    #[prop(optional)]
    show_clear_button: bool,
    /// Clear handler. Without it, clearing falls back to `on_change("")`, or
    /// to resetting the internal value in self-managed mode.
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
    /// Color scheme token.
    #[prop(default = Theme::Light)]
    theme: Theme,
    /// DOM id for the input, also used to link label and supporting text.
    #[prop(optional, into)]
    id: Option<String>,
    /// Extra class merged onto the field root.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let internal_value = create_rw_signal(value.get_untracked());
    let value = Signal::derive(move || value.get());
    let disabled = Signal::derive(move || disabled.get());
    let invalid = Signal::derive(move || invalid.get());
    let loading = Signal::derive(move || loading.get());
    let show_password = create_rw_signal(false);

    let controlled = on_change.is_some();
    let current_value = Signal::derive(move || {
        if controlled {
            value.get()
        } else {
            internal_value.get()
        }
    });

    let is_password = input_kind == InputKind::Password;
    let input_type = Signal::derive(move || {
        if is_password && show_password.get() {
            "text"
        } else {
            input_kind.token()
        }
    });

    let clear_visible = Signal::derive(move || {
        show_clear_button && !current_value.with(String::is_empty) && !loading.get()
    });

    let handle_clear = move || {
        if let Some(on_clear) = on_clear {
            on_clear.call(());
        } else if let Some(on_change) = on_change {
            on_change.call(String::new());
        } else {
            internal_value.set(String::new());
        }
    };

    let described_by = match (&id, &error_message, &helper_text) {
        (Some(id), Some(_), _) => Some(format!("{id}-error")),
        (Some(id), None, Some(_)) => Some(format!("{id}-helper")),
        _ => None,
    };

    let supporting_text = error_message.or(helper_text).map(|text| {
        view! {
            <div
                id=described_by.clone()
                data-ui-slot="supporting-text"
                data-ui-tone=move || if invalid.get() { "danger" } else { "secondary" }
            >
                {text}
            </div>
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-input-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="input-field"
            data-ui-theme=theme.token()
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-invalid=move || bool_token(invalid.get())
            data-ui-disabled=move || bool_token(disabled.get() || loading.get())
            data-ui-loading=move || bool_token(loading.get())
        >
            {label.map(|label| {
                view! {
                    <label data-ui-slot="label" for=id.clone()>
                        {label}
                    </label>
                }
            })}
            <div data-ui-slot="control">
                <input
                    class="ui-field"
                    id=id.clone()
                    type=move || input_type.get()
                    prop:value=move || current_value.get()
                    placeholder=placeholder
                    disabled=move || disabled.get() || loading.get()
                    aria-invalid=move || invalid.get().to_string()
                    aria-describedby=described_by.clone()
                    data-ui-kind="text-field"
                    on:input=move |ev| {
                        let next = event_target_value(&ev);
                        match on_change {
                            Some(on_change) => on_change.call(next),
                            None => internal_value.set(next),
                        }
                    }
                />
                <div data-ui-slot="adornments">
                    <Show when=move || loading.get() fallback=|| ()>
                        <Icon icon=IconName::Spinner size=IconSize::Sm />
                    </Show>
                    <Show when=move || clear_visible.get() fallback=|| ()>
                        <button
                            type="button"
                            data-ui-kind="icon-button"
                            data-ui-slot="clear"
                            aria-label="Clear input"
                            tabindex="-1"
                            on:click=move |_| handle_clear()
                        >
                            <Icon icon=IconName::Dismiss size=IconSize::Sm />
                        </button>
                    </Show>
                    <Show when=move || is_password && !loading.get() fallback=|| ()>
                        <button
                            type="button"
                            data-ui-kind="icon-button"
                            data-ui-slot="reveal"
                            aria-label=move || {
                                if show_password.get() { "Hide password" } else { "Show password" }
                            }
                            tabindex="-1"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || {
                                let icon = if show_password.get() {
                                    IconName::EyeOff
                                } else {
                                    IconName::Eye
                                };
                                view! { <Icon icon=icon size=IconSize::Sm /> }
                            }}
                        </button>
                    </Show>
                </div>
            </div>
            {supporting_text}
        </div>
    }
}
