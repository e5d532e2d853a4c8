//! Banner and inline renderings of a [`Notice`].

#[cfg(test)]
#[path = "notice_banner_test.rs"]
mod notice_banner_test;

use leptos::prelude::*;

use crate::util::notify::{Notice, Presentation};

/// CSS class and message of `notice` when it renders as `wanted`.
fn rendered_as(notice: Option<Notice>, wanted: Presentation) -> Option<(&'static str, String)> {
    notice.filter(|n| n.presentation() == wanted).map(|n| (n.css_class(), n.message))
}

/// Banner for the current notice, if it is a banner-class notice.
#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || {
            rendered_as(notice.get(), Presentation::Banner)
                .map(|(class, message)| {
                    view! {
                        <div class=class role="alert">
                            {message}
                        </div>
                    }
                })
        }}
    }
}

/// Inline prompt shown next to a form field.
#[component]
pub fn InlinePrompt(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || {
            rendered_as(notice.get(), Presentation::Inline)
                .map(|(class, message)| view! { <small class=class>{message}</small> })
        }}
    }
}
