//! Browser showcase for the shared component library.
//!
//! Renders every widget state through `ui_components` so visual refinements
//! can be reviewed in one surface: input variants, validation and loading
//! states, and the sortable, selectable user table with custom cell renders.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use leptos::*;
use serde::Serialize;
use serde_json::Value;
use ui_components::prelude::*;

#[derive(Debug, Clone, Serialize)]
struct SampleUser {
    id: u32,
    name: &'static str,
    email: &'static str,
    role: &'static str,
    status: &'static str,
    join_date: &'static str,
}

const SAMPLE_USERS: [SampleUser; 5] = [
    SampleUser {
        id: 1,
        name: "John Doe",
        email: "john.doe@example.com",
        role: "Admin",
        status: "active",
        join_date: "2023-01-15",
    },
    SampleUser {
        id: 2,
        name: "Jane Smith",
        email: "jane.smith@example.com",
        role: "Editor",
        status: "active",
        join_date: "2023-03-22",
    },
    SampleUser {
        id: 3,
        name: "Bob Johnson",
        email: "bob.johnson@example.com",
        role: "Viewer",
        status: "inactive",
        join_date: "2023-02-10",
    },
    SampleUser {
        id: 4,
        name: "Alice Brown",
        email: "alice.brown@example.com",
        role: "Editor",
        status: "active",
        join_date: "2023-04-05",
    },
    SampleUser {
        id: 5,
        name: "Charlie Davis",
        email: "charlie.davis@example.com",
        role: "Admin",
        status: "active",
        join_date: "2023-01-30",
    },
];

fn sample_users() -> Vec<Value> {
    SAMPLE_USERS
        .iter()
        .filter_map(|user| match serde_json::to_value(user) {
            Ok(record) => Some(record),
            Err(err) => {
                logging::warn!("sample user serialize failed: {err}");
                None
            }
        })
        .collect()
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

fn user_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Full Name", "name")
            .sortable()
            .render(|value, record, _| {
                let name = value.as_str().unwrap_or_default().to_string();
                let email = record
                    .get("email")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let avatar = initials(&name);
                view! {
                    <span data-ui-slot="person">
                        <span data-ui-slot="avatar" aria-hidden="true">{avatar}</span>
                        <span data-ui-slot="copy">
                            <span data-ui-slot="title">{name}</span>
                            <span data-ui-slot="meta">{email}</span>
                        </span>
                    </span>
                }
                .into_view()
            }),
        Column::new("role", "Role", "role")
            .sortable()
            .render(|value, _, _| {
                let role = value.as_str().unwrap_or_default().to_string();
                let tone = match role.as_str() {
                    "Admin" => "accent",
                    "Editor" => "primary",
                    _ => "secondary",
                };
                view! {
                    <span class="ui-badge" data-ui-kind="badge" data-ui-tone=tone>
                        {role}
                    </span>
                }
                .into_view()
            }),
        Column::new("status", "Status", "status")
            .sortable()
            .render(|value, _, _| {
                let status = value.as_str().unwrap_or_default().to_string();
                let tone = if status == "active" { "success" } else { "danger" };
                let mut label = status.clone();
                if let Some(first) = label.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                view! {
                    <span class="ui-badge" data-ui-kind="badge" data-ui-tone=tone>
                        <span data-ui-slot="dot" aria-hidden="true"></span>
                        {label}
                    </span>
                }
                .into_view()
            }),
        Column::new("join_date", "Join Date", "join_date").sortable(),
    ]
}

#[component]
/// Full demo surface for the component library.
pub fn ComponentsDemo() -> impl IntoView {
    let name_value = create_rw_signal(String::new());
    let email_value = create_rw_signal(String::new());
    let password_value = create_rw_signal(String::new());
    let selected_users = create_rw_signal(Vec::<Value>::new());
    let table_loading = create_rw_signal(false);

    let simulate_loading = move |_| {
        table_loading.set(true);
        set_timeout(move || table_loading.set(false), Duration::from_secs(2));
    };

    view! {
        <main class="demo-page">
            <header class="demo-header">
                <h1>"Component Library"</h1>
                <p>
                    "A sortable, selectable data table and a validated input field, \
                     sharing one set of design tokens."
                </p>
            </header>

            <section class="demo-section">
                <h2>"InputField"</h2>
                <div class="demo-grid">
                    <div class="demo-stack">
                        <h3>"Basic examples"</h3>
                        <InputField
                            id="demo-name"
                            label="Standard Input"
                            placeholder="Enter your name"
                            value=name_value
                            on_change=Callback::new(move |next| name_value.set(next))
                            helper_text="This is a standard outlined input"
                            show_clear_button=true
                            on_clear=Callback::new(move |()| name_value.set(String::new()))
                        />
                        <InputField
                            id="demo-email"
                            label="Email Address"
                            input_kind=InputKind::Email
                            placeholder="john@example.com"
                            value=email_value
                            on_change=Callback::new(move |next| email_value.set(next))
                            variant=FieldVariant::Filled
                            helper_text="We'll never share your email"
                        />
                        <InputField
                            id="demo-password"
                            label="Password"
                            input_kind=InputKind::Password
                            placeholder="Enter your password"
                            value=password_value
                            on_change=Callback::new(move |next| password_value.set(next))
                            variant=FieldVariant::Ghost
                            helper_text="Password must be at least 8 characters"
                        />
                    </div>
                    <div class="demo-stack">
                        <h3>"States and variants"</h3>
                        <InputField
                            id="demo-error"
                            label="Error State"
                            placeholder="Invalid input"
                            invalid=true
                            error_message="This field is required"
                        />
                        <InputField
                            id="demo-disabled"
                            label="Disabled Input"
                            placeholder="Cannot edit this"
                            disabled=true
                            value="Read-only value"
                        />
                        <InputField
                            id="demo-loading"
                            label="Loading State"
                            placeholder="Processing..."
                            loading=true
                        />
                        <div class="demo-row">
                            <InputField id="demo-small" label="Small" size=FieldSize::Sm placeholder="Small input" />
                            <InputField id="demo-large" label="Large" size=FieldSize::Lg placeholder="Large input" />
                        </div>
                    </div>
                </div>
            </section>

            <section class="demo-section">
                <div class="demo-section-header">
                    <h2>"DataTable"</h2>
                    <button class="demo-action" on:click=simulate_loading>
                        "Simulate Loading"
                    </button>
                </div>

                <Show when=move || !selected_users.with(Vec::is_empty) fallback=|| ()>
                    <div class="demo-selected" data-ui-slot="selected-summary">
                        <h4>
                            {move || {
                                format!("Selected Users ({})", selected_users.with(Vec::len))
                            }}
                        </h4>
                        <div class="demo-badges">
                            {move || {
                                selected_users
                                    .get()
                                    .into_iter()
                                    .map(|user| {
                                        let name = user
                                            .get("name")
                                            .and_then(Value::as_str)
                                            .unwrap_or_default()
                                            .to_string();
                                        view! {
                                            <span class="ui-badge" data-ui-kind="badge" data-ui-tone="primary">
                                                {name}
                                            </span>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </Show>

                <DataTable
                    records=sample_users()
                    columns=user_columns()
                    loading=table_loading
                    selectable=true
                    on_row_select=Callback::new(move |rows| selected_users.set(rows))
                    row_key=RowKeySpec::Field("id".to_string())
                    empty_message="No users found. Try adding some users first."
                />
            </section>
        </main>
    }
}

/// Mounts the demo application onto the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <ComponentsDemo /> });
}
