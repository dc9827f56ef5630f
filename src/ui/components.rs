/// Reusable UI components

use yew::prelude::*;

use crate::snippet::Snippet;

#[derive(Properties, PartialEq)]
pub struct SnippetCardProps {
    pub snippet: Snippet,
    pub on_delete: Callback<f64>,
    pub on_visit: Callback<f64>,
}

#[function_component(SnippetCard)]
pub fn snippet_card(props: &SnippetCardProps) -> Html {
    let snippet = &props.snippet;

    let on_delete = {
        let id = snippet.id;
        props.on_delete.reform(move |_| id)
    };

    let on_visit = {
        let id = snippet.id;
        props.on_visit.reform(move |_| id)
    };

    html! {
        <div class="snippet-card">
            <button class="icon-button" onclick={on_delete} title="Delete snippet">
                <TrashIcon />
            </button>
            <div class="snippet-body">
                <p class="snippet-quote">{format!("\"{}\"", snippet.quote)}</p>
                <p class="snippet-source">{&snippet.source}</p>
            </div>
            <button class="icon-button" onclick={on_visit} title="Visit source">
                <VisitLinkIcon />
            </button>
        </div>
    }
}

// Icon paths from https://lucide.dev/icons/trash
#[function_component(TrashIcon)]
pub fn trash_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"
            viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round"
            class="icon-trash">
            <path d="M3 6h18"/>
            <path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"/>
            <path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"/>
        </svg>
    }
}

// Icon paths from https://lucide.dev/icons/square-arrow-out-up-right
#[function_component(VisitLinkIcon)]
pub fn visit_link_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"
            viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round"
            class="icon-visit">
            <path d="M21 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h6"/>
            <path d="m21 3-9 9"/>
            <path d="M15 3h6v6"/>
        </svg>
    }
}
