use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::browser;
use crate::combos::{Combo, ComboList, SubcategoryRows};
use crate::components::DoneButton;
use crate::config::CONFIG;

/// Category entry form, the table of combos collected so far, and the button
/// that posts them all to the backend in one go.
#[component]
pub fn ComboBuilder() -> impl IntoView {
    // Owned here for the lifetime of the page view
    let combos = RwSignal::new(ComboList::default());
    let rows = RwSignal::new(SubcategoryRows::default());

    let add_subcategory_field = move |_| {
        rows.update(|r| {
            r.add();
        });
    };

    let add_combo = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Read the inputs themselves so text typed before hydration counts too
        let form = CONFIG.dom.combo_form;
        let category = browser::input_values(form, CONFIG.fields.category);
        let subcategories = browser::input_values(form, CONFIG.fields.subcategories);
        match Combo::new(category.first().map_or("", String::as_str), &subcategories) {
            Ok(combo) => {
                combos.update(|list| list.push(combo));
                browser::clear_inputs(form, CONFIG.fields.category);
                rows.update(SubcategoryRows::reset);
            }
            Err(err) => browser::alert(&err.to_string()),
        }
    };

    let submit_all = move |_| {
        let submitted = combos.with_untracked(|list| {
            list.submit_with(|json| {
                if let Err(e) = browser::submit_with_hidden_field(CONFIG.dom.combo_form, CONFIG.fields.all_combos, json) {
                    browser::console_error(&format!("Submitting combos failed: {}", e));
                }
            })
        });
        if let Err(err) = submitted {
            browser::alert(&err.to_string());
        }
    };

    view! {
        <form id=CONFIG.dom.combo_form action=CONFIG.endpoints.submit_combos on:submit=add_combo>
            <label class="field">
                <span>"Category"</span>
                <input
                    type="text"
                    name=CONFIG.fields.category
                    class="input-box"
                    placeholder="Enter category"
                />
            </label>

            <div class="field">
                <span>"Subcategories"</span>
                <div id=CONFIG.dom.subcategories_container>
                    <For
                        each=move || rows.with(SubcategoryRows::keys)
                        key=|key| *key
                        children=move |row| view! { <SubcategoryField rows=rows row=row /> }
                    />
                </div>
            </div>

            <div class="actions">
                <button type="button" class="btn" on:click=add_subcategory_field>
                    "+ Add Subcategory"
                </button>
                <button type="submit" class="btn btn-primary">"Add Combo"</button>
                <button type="button" class="btn btn-success" on:click=submit_all>
                    "Submit All"
                </button>
            </div>
        </form>

        <table class="combo-table">
            <thead>
                <tr>
                    <th>"Category"</th>
                    <th>"Subcategories"</th>
                    <th>"In ServiceNow"</th>
                </tr>
            </thead>
            <tbody id=CONFIG.dom.combo_table_body>
                <Show
                    when=move || !combos.with(ComboList::is_empty)
                    fallback=|| view! {
                        <tr class="empty-row">
                            <td colspan="3">"No categories yet"</td>
                        </tr>
                    }
                >
                    <For
                        each=move || combos.with(|list| list.iter().cloned().enumerate().collect::<Vec<_>>())
                        key=|(index, _)| *index
                        children=|(_, combo)| view! { <ComboRow combo=combo /> }
                    />
                </Show>
            </tbody>
        </table>
    }
}

/// One subcategory input, with a remove control unless it is the fixed first row.
#[component]
fn SubcategoryField(rows: RwSignal<SubcategoryRows>, row: usize) -> impl IntoView {
    let removable = rows.with_untracked(|r| r.is_removable(row));

    view! {
        <div class="subcategory-wrapper">
            <input
                type="text"
                name=CONFIG.fields.subcategories
                class="input-box"
                placeholder="Enter subcategory"
            />
            {removable.then(|| view! {
                <button type="button" class="btn btn-danger" on:click=move |_| rows.update(|r| r.remove(row))>
                    "Remove"
                </button>
            })}
        </div>
    }
}

#[component]
fn ComboRow(combo: Combo) -> impl IntoView {
    view! {
        <tr>
            <td>{combo.category().to_string()}</td>
            <td>{combo.subcategory_summary()}</td>
            <td><DoneButton /></td>
        </tr>
    }
}
