/// Popup UI for the SnipSave extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;

use crate::backend;
use crate::store::SnippetStore;
use crate::ui::components::SnippetCard;
use crate::validate::source_is_valid;

const GOOD_INPUT_CLASS: &str = "snippet-input input-good";
const BAD_INPUT_CLASS: &str = "snippet-input input-bad";

#[function_component(App)]
pub fn app() -> Html {
    let store = use_state(SnippetStore::new);
    let is_loading = use_state(|| true);
    let quote_value = use_state(String::new);
    let source_value = use_state(String::new);
    let source_invalid = use_state(|| false);

    // Load the stored collection on mount; a load failure just means an
    // empty collection, the user never sees it.
    {
        let store = store.clone();
        let is_loading = is_loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match backend::load().await {
                    Ok(loaded) => {
                        log::info!("Loaded {} stored snippets", loaded.len());
                        store.set(loaded);
                    }
                    Err(e) => {
                        log::warn!("Could not load stored snippets: {}", e);
                    }
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    // Input handlers
    let on_quote_input = {
        let quote_value = quote_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                quote_value.set(input.value());
            }
        })
    };

    let on_source_input = {
        let source_value = source_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                source_value.set(input.value());
            }
        })
    };

    // Save handler
    let on_save = {
        let store = store.clone();
        let quote_value = quote_value.clone();
        let source_value = source_value.clone();
        let source_invalid = source_invalid.clone();

        Callback::from(move |_| {
            let quote = (*quote_value).clone();
            let source = (*source_value).clone();

            if cfg!(feature = "validate-source") && !source_is_valid(&source) {
                source_invalid.set(true);
                return;
            }
            source_invalid.set(false);

            let updated = store.add(js_sys::Date::now(), quote, source);
            store.set(updated.clone());

            // Clear inputs after saving
            quote_value.set(String::new());
            source_value.set(String::new());

            persist_snippets(updated);
        })
    };

    // Delete handler
    let on_delete = {
        let store = store.clone();

        Callback::from(move |id: f64| {
            let updated = store.remove(id);
            store.set(updated.clone());
            persist_snippets(updated);
        })
    };

    // Visit-link handler
    let on_visit = {
        let store = store.clone();

        Callback::from(move |id: f64| {
            if let Some(snippet) = store.find(id) {
                open_in_new_tab(&snippet.source);
            }
        })
    };

    let count_text = if store.is_empty() {
        "You have no snippets! Let's add some more!".to_string()
    } else {
        format!("You have {} snippets! Let's add some more!", store.len())
    };

    let source_class = if *source_invalid {
        BAD_INPUT_CLASS
    } else {
        GOOD_INPUT_CLASS
    };

    html! {
        <div class="popup-container">
            <h2 class="popup-title">{"SnipSave"}</h2>
            <p class="popup-subtitle">{count_text}</p>

            <input
                class={GOOD_INPUT_CLASS}
                type="text"
                placeholder="Quote"
                value={(*quote_value).clone()}
                oninput={on_quote_input}
            />
            <input
                class={source_class}
                type="text"
                placeholder="Source"
                value={(*source_value).clone()}
                oninput={on_source_input}
            />

            <Button onclick={on_save} block={true}>
                {"Save"}
            </Button>

            if *is_loading {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{"Loading snippets..."}</p>
                </div>
            } else {
                <div class="snippets-list">
                    {for store.snippets.iter().map(|snippet| html! {
                        <SnippetCard
                            key={snippet.id.to_string()}
                            snippet={snippet.clone()}
                            on_delete={on_delete.clone()}
                            on_visit={on_visit.clone()}
                        />
                    })}
                </div>
            }
        </div>
    }
}

// Helper functions

/// Write the whole collection back under the fixed key, fire-and-forget.
/// A failed write is logged and dropped; the in-memory state stands.
fn persist_snippets(store: SnippetStore) {
    spawn_local(async move {
        match backend::persist(&store).await {
            Ok(()) => log::info!("Snippets updated in storage"),
            Err(e) => log::warn!("Failed to persist snippets: {}", e),
        }
    });
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("Failed to open link: {:?}", e);
        }
    }
}
